//! Caster coerces dynamically typed values into typed Rust primitives.
//!
//! Values typically come out of a decoder (configuration files, JSON, CBOR,
//! environment data) and are represented as [`Value`].  Wrapping one in a
//! [`Caster`] gives typed getters for booleans, integers of every width,
//! floats and strings:
//!
//! ```
//! use caster::{wrap, Value};
//!
//! let value = Value::from("8080");
//! let caster = wrap(&value);
//! assert_eq!(caster.u16(), Ok(8080));
//! assert!(caster.i8().is_err());
//! assert_eq!(caster.i8_safe(-1), -1);
//! ```
//!
//! Failures carry an [`ErrorKind`] so that a missing value can be told apart
//! from a value of the wrong shape, see [`is_nil_error`].
mod caster;
pub mod coerce;
mod error;
mod interop;
mod primitive;
mod value;

pub use self::caster::Caster;
pub use self::error::{Error, ErrorKind};
pub use self::primitive::Primitive;
pub use self::value::{Value, ValueKind};

/// Creates a [`Caster`] for a value.
pub fn wrap(value: &Value) -> Caster<'_> {
    Caster::new(value)
}

/// Checks if an error was caused by a nil value.
pub fn is_nil_error(err: &Error) -> bool {
    err.is_nil()
}
