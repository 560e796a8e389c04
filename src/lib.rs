//! # qail-mysql-bind
//!
//! Parameter classification for MySQL prepared statements.
//!
//! Given a value bound to a `?` placeholder, decide which MySQL field
//! type to announce, how its length is conveyed, and where the bytes to
//! encode live. Encoding and the wire exchange belong to the driver.
//!
//! ## Quick Example
//!
//! ```
//! use qail_mysql_bind::prelude::*;
//!
//! let created = Datetime::new(2024, 12, 25, 17, 30, 0, 0);
//! let p = classify(&created)?;
//! assert_eq!(p.field_type, field_type::DATETIME);
//! assert_eq!(p.length, VARIABLE_LENGTH);
//! # Ok::<(), BindError>(())
//! ```
//!
//! ## Shapes
//!
//! | Rust type                     | Field type                 | Length |
//! |-------------------------------|----------------------------|--------|
//! | `str`, `String`               | `STRING`                   | -1     |
//! | `i8`/`i16`/`i32`/`i64`        | `TINY`/`SHORT`/`LONG`/`LONGLONG` | 1/2/4/8 |
//! | `u8`..`u64`, `usize`          | as signed, `UNSIGNED_FLAG` | 1/2/4/8 |
//! | `isize`                       | pointer-width integer      | 4/8    |
//! | `f32`, `f64`                  | `FLOAT`, `DOUBLE`          | 4/8    |
//! | `[u8]`, `Vec<u8>`             | `VAR_STRING`               | -1     |
//! | `Blob`                        | `BLOB`                     | -1     |
//! | `Time`                        | `TIME`                     | -1     |
//! | `Datetime`, `Date`, `Timestamp` | `DATETIME`, `DATE`, `TIMESTAMP` | -1 |
//! | `Raw`                         | caller supplied            | -1     |
//! | `None`                        | `NULL`                     | 0      |

pub mod binder;
pub mod classify;
pub mod config;
pub mod error;
pub mod protocol;
pub mod types;

pub use binder::ParamBinder;
pub use classify::{ParamValue, VARIABLE_LENGTH, classify};
pub use error::{BindError, BindResult};
pub use types::{Blob, Date, Datetime, Raw, Time, Timestamp, ToParam, Value};

pub mod prelude {
    pub use crate::binder::ParamBinder;
    pub use crate::classify::{FloatKind, IntKind, ParamValue, VARIABLE_LENGTH, classify};
    pub use crate::config::BindConfig;
    pub use crate::error::*;
    pub use crate::protocol::{UNSIGNED_FLAG, field_type};
    pub use crate::types::*;
}
