//! Adapters for values that were already decoded by someone else.
//!
//! `Value` implements `Serialize` and `Deserialize`, so it can be decoded
//! from any serde data format directly.  With the `json` and `cbor` features
//! the dynamic value types of `serde_json` and `ciborium` convert into a
//! [`Value`] as well.
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Int(value) => serializer.serialize_i64(*value),
            Value::UInt(value) => serializer.serialize_u64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::Str(value) => serializer.serialize_str(value),
            Value::Seq(items) => serializer.collect_seq(items),
            Value::Map(map) => serializer.collect_map(map),
        }
    }
}

/// Maps an integer of any width to the narrowest fitting variant.
///
/// Integers outside of both `i64` and `u64` lose precision and become floats.
fn wide_int(value: i128) -> Value {
    if let Ok(value) = i64::try_from(value) {
        Value::Int(value)
    } else if let Ok(value) = u64::try_from(value) {
        Value::UInt(value)
    } else {
        Value::Float(value as f64)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Value, E> {
        Ok(Value::Bool(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Value, E> {
        Ok(Value::Int(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<Value, E> {
        Ok(wide_int(value))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<Value, E> {
        Ok(match u64::try_from(value) {
            Ok(value) => Value::from(value),
            Err(_) => Value::Float(value as f64),
        })
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Value, E> {
        Ok(Value::Float(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Value, E> {
        Ok(Value::from(value))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Value, E> {
        Ok(Value::Str(value))
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Value, E> {
        Ok(value.iter().copied().collect())
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut rv = BTreeMap::new();
        // non-string keys (CBOR allows any) are keyed by their printed form
        while let Some((key, value)) = map.next_entry::<Value, Value>()? {
            rv.insert(key.to_string(), value);
        }
        Ok(Value::Map(rv))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Value {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(num) => {
                if let Some(value) = num.as_i64() {
                    Value::Int(value)
                } else if let Some(value) = num.as_u64() {
                    Value::UInt(value)
                } else {
                    num.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_json::Value::String(value) => Value::Str(value),
            serde_json::Value::Array(items) => items.into_iter().collect(),
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(feature = "cbor")]
impl From<ciborium::value::Value> for Value {
    fn from(value: ciborium::value::Value) -> Value {
        use ciborium::value::Value as Cbor;

        match value {
            Cbor::Null => Value::Null,
            Cbor::Bool(value) => Value::Bool(value),
            Cbor::Integer(value) => wide_int(i128::from(value)),
            Cbor::Float(value) => Value::Float(value),
            Cbor::Text(value) => Value::Str(value),
            Cbor::Bytes(bytes) => bytes.into_iter().collect(),
            Cbor::Tag(_, inner) => Value::from(*inner),
            Cbor::Array(items) => items.into_iter().collect(),
            Cbor::Map(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| {
                        let key = match k {
                            Cbor::Text(key) => key,
                            other => Value::from(other).to_string(),
                        };
                        (key, Value::from(v))
                    })
                    .collect(),
            ),
            _ => Value::Null,
        }
    }
}
