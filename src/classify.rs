//! Parameter classification.
//!
//! Maps a bindable value to the MySQL field type, the length convention
//! and the location of the bytes the statement encoder will send.

use tracing::trace;

use crate::error::{BindError, BindResult};
use crate::protocol::{self, NATIVE_FLOAT, NATIVE_INT, UNSIGNED_FLAG, field_type};
use crate::types::{ToParam, Value};

/// Length marker for values whose wire encoding is length-prefixed.
///
/// Temporal types use it too even though they are fixed-size in memory;
/// the encoder sends them in their length-prefixed binary form.
pub const VARIABLE_LENGTH: i32 = -1;

/// Integer widths MySQL can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    /// Pointer-sized (`isize`/`usize`).
    Native,
    I8,
    I16,
    I32,
    I64,
}

impl IntKind {
    /// Kind for an integer width known only at runtime.
    pub fn from_bits(bits: u32) -> BindResult<Self> {
        match bits {
            8 => Ok(IntKind::I8),
            16 => Ok(IntKind::I16),
            32 => Ok(IntKind::I32),
            64 => Ok(IntKind::I64),
            _ => Err(BindError::unrecognized(format!("{}-bit integer", bits))),
        }
    }
}

/// Floating point widths MySQL can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    /// The platform's C `double`.
    Native,
    F32,
    F64,
}

impl FloatKind {
    /// Kind for a float width known only at runtime.
    pub fn from_bits(bits: u32) -> BindResult<Self> {
        match bits {
            32 => Ok(FloatKind::F32),
            64 => Ok(FloatKind::F64),
            _ => Err(BindError::unrecognized(format!("{}-bit float", bits))),
        }
    }
}

/// Field type and byte width for an integer kind.
pub fn int_type(kind: IntKind) -> (u16, i32) {
    match kind {
        IntKind::Native => NATIVE_INT,
        IntKind::I8 => (field_type::TINY, 1),
        IntKind::I16 => (field_type::SHORT, 2),
        IntKind::I32 => (field_type::LONG, 4),
        IntKind::I64 => (field_type::LONGLONG, 8),
    }
}

/// Field type and byte width for a float kind.
pub fn float_type(kind: FloatKind) -> (u16, i32) {
    match kind {
        FloatKind::Native => NATIVE_FLOAT,
        FloatKind::F32 => (field_type::FLOAT, 4),
        FloatKind::F64 => (field_type::DOUBLE, 8),
    }
}

/// Classified statement parameter.
///
/// `data` borrows the caller's value; it stays valid for as long as
/// the value it was classified from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamValue<'a> {
    /// MySQL field type, with `UNSIGNED_FLAG` for unsigned integers.
    pub field_type: u16,
    /// Fixed byte width, or [`VARIABLE_LENGTH`].
    pub length: i32,
    /// Storage to encode from; `None` for NULL.
    pub data: Option<Value<'a>>,
    /// Value was reached through `Option<T>`/`Box<T>`, or is a raw override.
    pub is_ptr: bool,
    /// Field type and bytes were supplied by the caller.
    pub raw: bool,
}

impl ParamValue<'_> {
    /// Descriptor for an absent value.
    pub fn null() -> Self {
        Self {
            field_type: field_type::NULL,
            length: 0,
            data: None,
            is_ptr: false,
            raw: false,
        }
    }

    pub fn is_null(&self) -> bool {
        self.field_type == field_type::NULL && self.data.is_none()
    }

    pub fn is_unsigned(&self) -> bool {
        protocol::is_unsigned(self.field_type)
    }

    pub fn is_variable_length(&self) -> bool {
        self.length == VARIABLE_LENGTH
    }

    pub fn type_name(&self) -> &'static str {
        protocol::type_name(self.field_type)
    }
}

/// Classify one statement parameter.
///
/// Absent values (`None`) bind as NULL whatever their declared type.
/// One level of `Option`/`Box` sets `is_ptr` and is otherwise
/// transparent. A [`Raw`](crate::types::Raw) value bypasses inference.
///
/// # Example
///
/// ```
/// use qail_mysql_bind::classify;
/// use qail_mysql_bind::protocol::{field_type, UNSIGNED_FLAG};
///
/// let p = classify(&42u32).unwrap();
/// assert_eq!(p.field_type, field_type::LONG | UNSIGNED_FLAG);
/// assert_eq!(p.length, 4);
/// ```
pub fn classify<T: ToParam + ?Sized>(value: &T) -> BindResult<ParamValue<'_>> {
    let Some(data) = value.to_value() else {
        trace!("classified NULL parameter");
        return Ok(ParamValue::null());
    };

    let mut out = ParamValue {
        field_type: field_type::NULL,
        length: VARIABLE_LENGTH,
        data: Some(data),
        is_ptr: value.is_indirect(),
        raw: false,
    };

    match data {
        Value::Text(_) => out.field_type = field_type::STRING,
        Value::Int(i) => (out.field_type, out.length) = int_type(i.kind()),
        Value::Uint(u) => {
            let (typ, length) = int_type(u.kind());
            out.field_type = typ | UNSIGNED_FLAG;
            out.length = length;
        }
        Value::Float(f) => (out.field_type, out.length) = float_type(f.kind()),
        Value::Time(_) => out.field_type = field_type::TIME,
        Value::Bytes(_) => out.field_type = field_type::VAR_STRING,
        Value::Blob(_) => out.field_type = field_type::BLOB,
        Value::Datetime(_) => out.field_type = field_type::DATETIME,
        Value::Date(_) => out.field_type = field_type::DATE,
        Value::Timestamp(_) => out.field_type = field_type::TIMESTAMP,
        Value::Raw(raw) => {
            out.field_type = raw.typ;
            out.data = Some(Value::Bytes(raw.data));
            out.is_ptr = true;
            out.raw = true;
        }
        Value::Other(name) => return Err(BindError::unrecognized(name)),
    }

    trace!(
        shape = data.type_name(),
        field_type = out.type_name(),
        length = out.length,
        is_ptr = out.is_ptr,
        raw = out.raw,
        "classified parameter"
    );
    Ok(out)
}
