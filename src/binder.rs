//! Statement parameter binding.
//!
//! A [`ParamBinder`] holds the classified parameters of one prepared
//! statement between executions and tracks whether the parameter type
//! block has to be resent.

use tracing::{debug, warn};

use crate::classify::{ParamValue, classify};
use crate::config::BindConfig;
use crate::error::{BindError, BindResult};
use crate::types::ToParam;

/// Classified parameter list for a prepared statement.
///
/// # Example
///
/// ```
/// use qail_mysql_bind::ParamBinder;
///
/// let id = 7i64;
/// let name = "alice";
///
/// let mut binder = ParamBinder::new(2).unwrap();
/// binder.bind(&[&id, &name]).unwrap();
/// assert!(binder.needs_rebind());
/// assert_eq!(binder.params().len(), 2);
/// ```
#[derive(Debug)]
pub struct ParamBinder<'a> {
    param_count: usize,
    params: Vec<ParamValue<'a>>,
    sent: Option<Vec<u16>>,
}

impl<'a> ParamBinder<'a> {
    /// Binder for a statement with `param_count` placeholders.
    pub fn new(param_count: usize) -> BindResult<Self> {
        Self::with_config(param_count, &BindConfig::default())
    }

    pub fn with_config(param_count: usize, config: &BindConfig) -> BindResult<Self> {
        let max = config.max_params as usize;
        if param_count > max {
            return Err(BindError::TooManyParams {
                max,
                got: param_count,
            });
        }
        Ok(Self {
            param_count,
            params: Vec::with_capacity(param_count),
            sent: None,
        })
    }

    /// Classify and store one value per placeholder, in order.
    ///
    /// On error the previous binding is left untouched.
    pub fn bind(&mut self, values: &[&'a dyn ToParam]) -> BindResult<()> {
        if values.len() != self.param_count {
            warn!(
                "Parameter count mismatch: expected {}, got {}",
                self.param_count,
                values.len()
            );
            return Err(BindError::ParamCount {
                expected: self.param_count,
                got: values.len(),
            });
        }

        let params = values
            .iter()
            .map(|v| classify(*v))
            .collect::<BindResult<Vec<_>>>()?;
        self.params = params;

        debug!(
            "Bound {} parameter(s), rebind={}",
            self.params.len(),
            self.needs_rebind()
        );
        Ok(())
    }

    pub fn param_count(&self) -> usize {
        self.param_count
    }

    pub fn params(&self) -> &[ParamValue<'a>] {
        &self.params
    }

    /// Field type of every bound parameter.
    pub fn signature(&self) -> Vec<u16> {
        self.params.iter().map(|p| p.field_type).collect()
    }

    /// Whether the type block must accompany the next execution: nothing
    /// was sent yet, or the types changed since the last send.
    pub fn needs_rebind(&self) -> bool {
        match &self.sent {
            Some(sent) => *sent != self.signature(),
            None => true,
        }
    }

    /// Record that the current type block reached the server.
    pub fn mark_sent(&mut self) {
        self.sent = Some(self.signature());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::field_type;

    #[test]
    fn test_rebind_tracks_signature() {
        let a = 1i32;
        let b = 2i32;
        let c = "three";

        let mut binder = ParamBinder::new(1).unwrap();
        binder.bind(&[&a]).unwrap();
        assert!(binder.needs_rebind());

        binder.mark_sent();
        assert!(!binder.needs_rebind());

        binder.bind(&[&b]).unwrap();
        assert!(!binder.needs_rebind());

        binder.bind(&[&c]).unwrap();
        assert!(binder.needs_rebind());
        assert_eq!(binder.signature(), vec![field_type::STRING]);
    }

    #[test]
    fn test_null_changes_signature() {
        let some = Some(5u64);
        let none: Option<u64> = None;

        let mut binder = ParamBinder::new(1).unwrap();
        binder.bind(&[&some]).unwrap();
        binder.mark_sent();

        binder.bind(&[&none]).unwrap();
        assert!(binder.needs_rebind());
        assert!(binder.params()[0].is_null());
    }

    #[test]
    fn test_zero_params() {
        let mut binder = ParamBinder::new(0).unwrap();
        binder.bind(&[]).unwrap();
        assert!(binder.params().is_empty());
    }
}
