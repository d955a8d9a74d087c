//! JSON-compatible value model.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// Converted value, ready to be rendered as JSON.
///
/// Scalars only ever become `String`: there are no number or boolean
/// variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Keys in first-insertion order.
    Object(IndexMap<String, Value>),
    Array(Vec<Value>),
    String(String),
    Null,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Object(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Null => serializer.serialize_unit(),
        }
    }
}
