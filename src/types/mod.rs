//! Rust types that can be bound as MySQL statement parameters.
//!
//! A value is bound through [`ToParam`], which hands out a borrowed
//! [`Value`] view of its storage. The view is a closed set of shapes;
//! anything MySQL cannot carry surfaces as [`Value::Other`] and is
//! rejected by the classifier.

pub mod bytes;
pub mod temporal;

pub use bytes::{Blob, Raw};
pub use temporal::{Date, Datetime, Time, Timestamp};

use std::collections::{BTreeMap, HashMap};

use crate::classify::{FloatKind, IntKind};

/// Borrowed view of a bindable value.
///
/// Every case references the caller's storage; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Int(Int<'a>),
    Uint(Uint<'a>),
    Float(Float<'a>),
    /// Signed nanosecond count bound as MySQL `TIME`.
    Time(&'a Time),
    /// Plain byte sequence, bound as `VAR_STRING`.
    Bytes(&'a [u8]),
    Blob(&'a Blob),
    Datetime(&'a Datetime),
    Date(&'a Date),
    Timestamp(&'a Timestamp),
    Raw(&'a Raw<'a>),
    /// Shape outside the bindable set, named by its Rust type.
    Other(&'static str),
}

impl Value<'_> {
    /// Name of the shape, used in logs and errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "str",
            Value::Int(i) => i.type_name(),
            Value::Uint(u) => u.type_name(),
            Value::Float(f) => f.type_name(),
            Value::Time(_) => "Time",
            Value::Bytes(_) => "[u8]",
            Value::Blob(_) => "Blob",
            Value::Datetime(_) => "Datetime",
            Value::Date(_) => "Date",
            Value::Timestamp(_) => "Timestamp",
            Value::Raw(_) => "Raw",
            Value::Other(name) => *name,
        }
    }
}

/// Reference to a signed integer of a known width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Int<'a> {
    Isize(&'a isize),
    I8(&'a i8),
    I16(&'a i16),
    I32(&'a i32),
    I64(&'a i64),
}

impl Int<'_> {
    pub fn kind(&self) -> IntKind {
        match self {
            Int::Isize(_) => IntKind::Native,
            Int::I8(_) => IntKind::I8,
            Int::I16(_) => IntKind::I16,
            Int::I32(_) => IntKind::I32,
            Int::I64(_) => IntKind::I64,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Int::Isize(_) => "isize",
            Int::I8(_) => "i8",
            Int::I16(_) => "i16",
            Int::I32(_) => "i32",
            Int::I64(_) => "i64",
        }
    }
}

/// Reference to an unsigned integer of a known width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Uint<'a> {
    Usize(&'a usize),
    U8(&'a u8),
    U16(&'a u16),
    U32(&'a u32),
    U64(&'a u64),
}

impl Uint<'_> {
    pub fn kind(&self) -> IntKind {
        match self {
            Uint::Usize(_) => IntKind::Native,
            Uint::U8(_) => IntKind::I8,
            Uint::U16(_) => IntKind::I16,
            Uint::U32(_) => IntKind::I32,
            Uint::U64(_) => IntKind::I64,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Uint::Usize(_) => "usize",
            Uint::U8(_) => "u8",
            Uint::U16(_) => "u16",
            Uint::U32(_) => "u32",
            Uint::U64(_) => "u64",
        }
    }
}

/// Reference to a floating point value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Float<'a> {
    F32(&'a f32),
    F64(&'a f64),
}

impl Float<'_> {
    pub fn kind(&self) -> FloatKind {
        match self {
            Float::F32(_) => FloatKind::F32,
            Float::F64(_) => FloatKind::F64,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Float::F32(_) => "f32",
            Float::F64(_) => "f64",
        }
    }
}

/// Trait for handing a Rust value to the parameter classifier.
pub trait ToParam {
    /// Borrowed view of the value's storage; `None` binds NULL.
    fn to_value(&self) -> Option<Value<'_>>;

    /// Whether the value is reached through one level of indirection
    /// (`Option<T>`, `Box<T>`).
    fn is_indirect(&self) -> bool {
        false
    }
}

// ==================== Scalars ====================

macro_rules! impl_to_param {
    ($($ty:ty => $shape:ident :: $case:ident),* $(,)?) => {
        $(
            impl ToParam for $ty {
                fn to_value(&self) -> Option<Value<'_>> {
                    Some(Value::$shape($shape::$case(self)))
                }
            }
        )*
    };
}

impl_to_param! {
    isize => Int::Isize,
    i8 => Int::I8,
    i16 => Int::I16,
    i32 => Int::I32,
    i64 => Int::I64,
    usize => Uint::Usize,
    u8 => Uint::U8,
    u16 => Uint::U16,
    u32 => Uint::U32,
    u64 => Uint::U64,
    f32 => Float::F32,
    f64 => Float::F64,
}

// ==================== Text & Bytes ====================

impl ToParam for str {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Text(self))
    }
}

impl ToParam for String {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Text(self.as_str()))
    }
}

impl ToParam for [u8] {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Bytes(self))
    }
}

impl ToParam for Vec<u8> {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Bytes(self.as_slice()))
    }
}

impl ToParam for Value<'_> {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(*self)
    }
}

// ==================== Unsupported ====================

macro_rules! impl_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToParam for $ty {
                fn to_value(&self) -> Option<Value<'_>> {
                    Some(Value::Other(std::any::type_name::<Self>()))
                }
            }
        )*
    };
}

impl_unsupported!(bool, char, ());

impl<K, V, S> ToParam for HashMap<K, V, S> {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Other(std::any::type_name::<Self>()))
    }
}

impl<K, V> ToParam for BTreeMap<K, V> {
    fn to_value(&self) -> Option<Value<'_>> {
        Some(Value::Other(std::any::type_name::<Self>()))
    }
}

// ==================== Indirection ====================

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_value(&self) -> Option<Value<'_>> {
        (**self).to_value()
    }

    fn is_indirect(&self) -> bool {
        (**self).is_indirect()
    }
}

// Only one level unwraps: an indirect inner value is `Other`.
impl<T: ToParam> ToParam for Option<T> {
    fn to_value(&self) -> Option<Value<'_>> {
        match self {
            Some(inner) if inner.is_indirect() => Some(Value::Other(std::any::type_name::<Self>())),
            Some(inner) => inner.to_value(),
            None => None,
        }
    }

    fn is_indirect(&self) -> bool {
        true
    }
}

impl<T: ToParam + ?Sized> ToParam for Box<T> {
    fn to_value(&self) -> Option<Value<'_>> {
        if (**self).is_indirect() {
            return Some(Value::Other(std::any::type_name::<Self>()));
        }
        (**self).to_value()
    }

    fn is_indirect(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_views_alias_storage() {
        let n = 42i32;
        match n.to_value() {
            Some(Value::Int(Int::I32(r))) => assert!(std::ptr::eq(r, &n)),
            other => panic!("unexpected view: {:?}", other),
        }

        let s = String::from("hello");
        match s.to_value() {
            Some(Value::Text(t)) => assert_eq!(t.as_ptr(), s.as_ptr()),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_option_is_indirect() {
        let some: Option<u16> = Some(7);
        let none: Option<u16> = None;
        assert!(some.is_indirect());
        assert!(matches!(some.to_value(), Some(Value::Uint(Uint::U16(&7)))));
        assert!(none.to_value().is_none());
        assert!(!7u16.is_indirect());
    }

    #[test]
    fn test_nested_indirection_is_other() {
        let nested = Some(Some(5i32));
        assert!(matches!(nested.to_value(), Some(Value::Other(_))));

        let boxed = Box::new(Box::new(5i32));
        assert!(matches!(boxed.to_value(), Some(Value::Other(_))));

        let inner_none: Option<Option<i32>> = Some(None);
        assert!(matches!(inner_none.to_value(), Some(Value::Other(_))));

        let outer_none: Option<Option<i32>> = None;
        assert!(outer_none.to_value().is_none());
    }

    #[test]
    fn test_reference_is_transparent() {
        let v = 1.5f64;
        let r = &v;
        assert!(!r.is_indirect());
        assert!(matches!(r.to_value(), Some(Value::Float(Float::F64(_)))));
    }

    #[test]
    fn test_unsupported_shapes_are_named() {
        assert_eq!(true.to_value(), Some(Value::Other("bool")));
        let map: HashMap<String, i32> = HashMap::new();
        let name = map.to_value().map(|v| v.type_name()).unwrap_or_default();
        assert!(name.contains("HashMap"));
    }
}
