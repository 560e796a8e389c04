//! MySQL Field Type Constants
//!
//! Reference: `enum_field_types` in MySQL's `include/field_types.h`.
//! These codes travel in the parameter type block of `COM_STMT_EXECUTE`
//! and must match the server bit-for-bit.

/// MySQL field type codes
#[allow(dead_code)]
pub mod field_type {
    // Numeric
    pub const DECIMAL: u16 = 0x00;
    pub const TINY: u16 = 0x01; // i8
    pub const SHORT: u16 = 0x02; // i16
    pub const LONG: u16 = 0x03; // i32
    pub const FLOAT: u16 = 0x04;
    pub const DOUBLE: u16 = 0x05;
    pub const NULL: u16 = 0x06;
    pub const TIMESTAMP: u16 = 0x07;
    pub const LONGLONG: u16 = 0x08; // i64
    pub const INT24: u16 = 0x09;

    // Date/Time
    pub const DATE: u16 = 0x0a;
    pub const TIME: u16 = 0x0b;
    pub const DATETIME: u16 = 0x0c;
    pub const YEAR: u16 = 0x0d;
    pub const NEWDATE: u16 = 0x0e;

    pub const VARCHAR: u16 = 0x0f;
    pub const BIT: u16 = 0x10;
    pub const NEWDECIMAL: u16 = 0xf6;
    pub const ENUM: u16 = 0xf7;
    pub const SET: u16 = 0xf8;

    // Blobs and strings
    pub const TINY_BLOB: u16 = 0xf9;
    pub const MEDIUM_BLOB: u16 = 0xfa;
    pub const LONG_BLOB: u16 = 0xfb;
    pub const BLOB: u16 = 0xfc;
    pub const VAR_STRING: u16 = 0xfd;
    pub const STRING: u16 = 0xfe;
    pub const GEOMETRY: u16 = 0xff;
}

/// Flag OR-ed into an integer field type when the value is unsigned.
pub const UNSIGNED_FLAG: u16 = 0x8000;

/// Integer field type and byte width matching `isize`/`usize`.
#[cfg(target_pointer_width = "64")]
pub const NATIVE_INT: (u16, i32) = (field_type::LONGLONG, 8);
#[cfg(target_pointer_width = "32")]
pub const NATIVE_INT: (u16, i32) = (field_type::LONG, 4);
#[cfg(target_pointer_width = "16")]
pub const NATIVE_INT: (u16, i32) = (field_type::SHORT, 2);

/// Float field type and byte width of the platform's C `double`.
pub const NATIVE_FLOAT: (u16, i32) = (field_type::DOUBLE, 8);

/// Strip the unsigned flag from a field type.
pub fn base_type(typ: u16) -> u16 {
    typ & !UNSIGNED_FLAG
}

/// Whether the unsigned flag is set.
pub fn is_unsigned(typ: u16) -> bool {
    typ & UNSIGNED_FLAG != 0
}

/// Map a field type to a human-readable type name
pub fn type_name(typ: u16) -> &'static str {
    match base_type(typ) {
        field_type::DECIMAL => "decimal",
        field_type::TINY => "tiny",
        field_type::SHORT => "short",
        field_type::LONG => "long",
        field_type::FLOAT => "float",
        field_type::DOUBLE => "double",
        field_type::NULL => "null",
        field_type::TIMESTAMP => "timestamp",
        field_type::LONGLONG => "longlong",
        field_type::INT24 => "int24",
        field_type::DATE => "date",
        field_type::TIME => "time",
        field_type::DATETIME => "datetime",
        field_type::YEAR => "year",
        field_type::NEWDATE => "newdate",
        field_type::VARCHAR => "varchar",
        field_type::BIT => "bit",
        field_type::NEWDECIMAL => "newdecimal",
        field_type::ENUM => "enum",
        field_type::SET => "set",
        field_type::TINY_BLOB => "tiny_blob",
        field_type::MEDIUM_BLOB => "medium_blob",
        field_type::LONG_BLOB => "long_blob",
        field_type::BLOB => "blob",
        field_type::VAR_STRING => "var_string",
        field_type::STRING => "string",
        field_type::GEOMETRY => "geometry",
        _ => "unknown",
    }
}
