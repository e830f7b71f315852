use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// An enum that indicates of what type a value is.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Map,
}

/// A dynamically typed value.
///
/// This is what callers hand to a [`Caster`](crate::Caster).  It usually
/// comes out of some decoder (JSON, CBOR, environment data) and its shape is
/// only known at runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absence of a value.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    /// Integers that do not fit into an `i64`.
    UInt(u64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns the kind of value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) | Value::UInt(_) | Value::Float(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::String,
            Value::Seq(_) => ValueKind::Sequence,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Checks if this value is null.
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Checks if this value is a sequence.
    pub fn is_seq(&self) -> bool {
        matches!(self, Value::Seq(_))
    }

    /// Checks if this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns the canonical string form of the value.
    ///
    /// Strings are borrowed, everything else is formatted through the
    /// [`Display`](fmt::Display) implementation.  All numeric coercions go
    /// through this representation.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self {
            Value::Str(value) => Cow::Borrowed(value),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Returns the length of the value.
    ///
    /// This is always a count of items: elements for sequences, entries for
    /// maps and chars for strings.  A string's item is a char, not a byte, so
    /// `"äöü"` has a length of 3 even though it is 6 bytes of UTF-8.  Scalars
    /// have no length.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Str(value) => Some(value.chars().count()),
            Value::Seq(items) => Some(items.len()),
            Value::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Looks up a value by index in a sequence.
    pub fn get_by_index(&self, idx: usize) -> Option<&Value> {
        match self {
            Value::Seq(items) => items.get(idx),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Int(value) => write!(f, "{}", value),
            Value::UInt(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Str(value) => f.write_str(value),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (idx, (key, item)) in map.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Value {
                    Value::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Value {
                    match i64::try_from(value) {
                        Ok(value) => Value::Int(value),
                        Err(_) => Value::UInt(value as u64),
                    }
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(value: f32) -> Value {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(value: &'a str) -> Value {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Value {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Value {
        value.into_iter().collect()
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Value {
        Value::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Value {
        Value::Seq(iter.into_iter().map(Into::into).collect())
    }
}
