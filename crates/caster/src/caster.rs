use tracing::trace;

use crate::coerce;
use crate::error::Error;
use crate::primitive::Primitive;
use crate::value::Value;

static NULL: Value = Value::Null;

/// A typed accessor around a single dynamic value.
///
/// Every supported type comes with three getters:
///
/// * a strict one (`i8()`) that reports why the conversion failed,
/// * a safe one (`i8_safe(fallback)`) that returns the fallback instead,
/// * a sequence one (`i8_slice(fallback)`) that converts every element of a
///   sequence and silently drops the ones that do not convert.
///
/// The platform sized integers (`isize`, `usize`) have no sequence getter.
#[derive(Debug, Clone, Copy)]
pub struct Caster<'a> {
    data: &'a Value,
}

impl<'a> Caster<'a> {
    /// Wraps a value.
    pub fn new(data: &'a Value) -> Caster<'a> {
        Caster { data }
    }

    /// Wraps an optional value, treating absence as nil.
    pub fn from_option(data: Option<&'a Value>) -> Caster<'a> {
        Caster::new(data.unwrap_or(&NULL))
    }

    /// Checks if the wrapped value is nil.
    pub fn is_nil(&self) -> bool {
        self.data.is_nil()
    }

    /// Returns the wrapped value unchanged.
    pub fn raw(&self) -> &'a Value {
        self.data
    }

    /// Returns the wrapped value unless it is nil.
    pub fn value(&self) -> Result<&'a Value, Error> {
        if self.is_nil() {
            return Err(Error::nil());
        }
        Ok(self.data)
    }

    /// Converts the value into `T` or reports why it does not convert.
    pub fn get<T: Primitive>(&self) -> Result<T, Error> {
        if self.is_nil() {
            return Err(Error::nil());
        }
        T::coerce(self.data).ok_or_else(|| Error::conversion(T::NAME, self.data))
    }

    /// Converts the value into `T` or returns the fallback.
    pub fn get_safe<T: Primitive>(&self, fallback: T) -> T {
        match self.get() {
            Ok(rv) => rv,
            Err(err) => {
                trace!(target_type = T::NAME, error = %err, "using fallback");
                fallback
            }
        }
    }

    /// Converts every element of a sequence into `T`.
    ///
    /// Elements that do not convert are dropped.  If nothing is left (which
    /// includes empty sequences and values that are not sequences at all)
    /// the fallback is returned.
    pub fn get_slice<T: Primitive>(&self, fallback: Vec<T>) -> Vec<T> {
        let mut rv = Vec::new();
        for (idx, item) in coerce::as_seq(self.data).into_iter().enumerate() {
            match Caster::new(item).get() {
                Ok(value) => rv.push(value),
                Err(err) => {
                    trace!(target_type = T::NAME, index = idx, error = %err, "dropping element");
                }
            }
        }

        if rv.is_empty() {
            trace!(target_type = T::NAME, "no convertible elements, using fallback");
            fallback
        } else {
            rv
        }
    }
}

macro_rules! typed_getters {
    ($($ty:ty => $get:ident, $safe:ident $(, $slice:ident)?;)*) => {
        impl<'a> Caster<'a> {
            $(
                #[doc = concat!("Converts the value into `", stringify!($ty), "`.")]
                pub fn $get(&self) -> Result<$ty, Error> {
                    self.get()
                }

                #[doc = concat!("Converts the value into `", stringify!($ty), "` or returns the fallback.")]
                pub fn $safe(&self, fallback: $ty) -> $ty {
                    self.get_safe(fallback)
                }

                $(
                    #[doc = concat!("Converts a sequence into `Vec<", stringify!($ty), ">`.")]
                    pub fn $slice(&self, fallback: Vec<$ty>) -> Vec<$ty> {
                        self.get_slice(fallback)
                    }
                )?
            )*
        }
    };
}

typed_getters! {
    bool => bool, bool_safe, bool_slice;
    i8 => i8, i8_safe, i8_slice;
    i16 => i16, i16_safe, i16_slice;
    i32 => i32, i32_safe, i32_slice;
    i64 => i64, i64_safe, i64_slice;
    isize => isize, isize_safe;
    u8 => u8, u8_safe, u8_slice;
    u16 => u16, u16_safe, u16_slice;
    u32 => u32, u32_safe, u32_slice;
    u64 => u64, u64_safe, u64_slice;
    usize => usize, usize_safe;
    f32 => f32, f32_safe, f32_slice;
    f64 => f64, f64_safe, f64_slice;
    String => string, string_safe, string_slice;
}
