//! The coercion engine.
//!
//! Every function in here takes a dynamic [`Value`] and attempts to read it
//! as one primitive type.  Numbers and booleans are read from the canonical
//! string form of the value ([`Value::to_string_lossy`]) so that width and
//! sign validation only exists once.  Strings and sequences are structural
//! properties of the value and are checked on the variant instead.
//!
//! None of these functions fail loudly: `None` means the value does not
//! convert.
use smallvec::SmallVec;

use crate::value::Value;

/// A borrowed view on the elements of a sequence value.
pub type SeqView<'a> = SmallVec<[&'a Value; 8]>;

/// Reads the value as boolean.
///
/// Only `true` and `false` are accepted (ignoring ASCII case).  Spellings
/// such as `1`, `0`, `yes` or `no` are rejected.
pub fn as_bool(value: &Value) -> Option<bool> {
    let s = value.to_string_lossy();
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Reads the value as base-10 signed 64 bit integer.
pub fn as_i64(value: &Value) -> Option<i64> {
    value.to_string_lossy().parse().ok()
}

/// Reads the value as signed integer that has to fit into `T`.
pub fn as_signed<T: TryFrom<i64>>(value: &Value) -> Option<T> {
    as_i64(value).and_then(|v| T::try_from(v).ok())
}

/// Reads the value as base-10 unsigned 64 bit integer.
///
/// Unlike the signed parse no sign character is accepted, not even `+`.
pub fn as_u64(value: &Value) -> Option<u64> {
    let s = value.to_string_lossy();
    if s.starts_with('+') {
        return None;
    }
    s.parse().ok()
}

/// Reads the value as unsigned integer that has to fit into `T`.
pub fn as_unsigned<T: TryFrom<u64>>(value: &Value) -> Option<T> {
    as_u64(value).and_then(|v| T::try_from(v).ok())
}

/// Reads the value as 64 bit float.
///
/// Infinities and NaN are accepted when spelled out.  Finite literals that
/// overflow to infinity are out of range and rejected.
pub fn as_f64(value: &Value) -> Option<f64> {
    let s = value.to_string_lossy();
    let rv: f64 = s.parse().ok()?;
    if rv.is_infinite() && !is_infinity_literal(&s) {
        return None;
    }
    Some(rv)
}

/// Reads the value as 32 bit float.
///
/// Same rules as [`as_f64`] but the range is checked against `f32`.
pub fn as_f32(value: &Value) -> Option<f32> {
    let s = value.to_string_lossy();
    let rv: f32 = s.parse().ok()?;
    if rv.is_infinite() && !is_infinity_literal(&s) {
        return None;
    }
    Some(rv)
}

/// Returns the string if the value is string shaped.
///
/// Other values are never formatted into a string, so `42` does not convert
/// but `"42"` does.
pub fn as_str(value: &Value) -> Option<&str> {
    match value {
        Value::Str(s) => Some(s),
        _ => None,
    }
}

/// Returns the elements of a sequence in order.
///
/// Values that are not sequences produce an empty view.
pub fn as_seq(value: &Value) -> SeqView<'_> {
    match value {
        Value::Seq(items) => items.iter().collect(),
        _ => SmallVec::new(),
    }
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
