//! Byte-oriented parameter shapes.

use serde::{Deserialize, Serialize};

use super::{ToParam, Value};

/// Opaque binary data, bound as MySQL `BLOB`.
///
/// A plain `Vec<u8>` or `&[u8]` binds as `VAR_STRING` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Blob(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Blob(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl ToParam for Blob {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Blob(self))
    }
}

/// Pre-encoded parameter that bypasses type inference.
///
/// The classifier passes `typ` through untouched and points the
/// parameter at `data`, which the caller has already encoded in the
/// wire format `typ` implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw<'a> {
    /// MySQL field type, including `UNSIGNED_FLAG` if relevant.
    pub typ: u16,
    pub data: &'a [u8],
}

impl<'a> Raw<'a> {
    pub fn new(typ: u16, data: &'a [u8]) -> Self {
        Self { typ, data }
    }
}

impl ToParam for Raw<'_> {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Raw(self))
    }
}
