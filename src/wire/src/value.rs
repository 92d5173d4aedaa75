// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Duration;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// The fields of an object [Value].
pub type Map = BTreeMap<String, Value>;

/// A locally-typed value tree.
///
/// The plain variants mirror [serde_json::Value]. The remaining variants hold
/// the local form of fields that need wire conversions.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Timestamp(OffsetDateTime),
    /// Wide enough to hold any `i64` or `u64` without loss.
    Integer(i128),
    Bytes(bytes::Bytes),
    Duration(Duration),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Returns the field `name` if this is an object.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|m| m.get(name))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<OffsetDateTime> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match value {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n),
            Json::String(s) => Self::String(s),
            Json::Array(a) => Self::Array(a.into_iter().map(Value::from).collect()),
            Json::Object(o) => Self::Object(o.into_iter().map(|(k, v)| (k, v.into())).collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<OffsetDateTime> for Value {
    fn from(value: OffsetDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bytes::Bytes> for Value {
    fn from(value: bytes::Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn from_json() {
        let got = Value::from(json!({"a": [1, "b", null], "c": true}));
        let want = Value::Object(Map::from([
            (
                "a".to_string(),
                Value::Array(vec![
                    Value::Number(1.into()),
                    Value::String("b".into()),
                    Value::Null,
                ]),
            ),
            ("c".to_string(), Value::Bool(true)),
        ]));
        assert_eq!(got, want);
    }

    #[test]
    fn accessors() {
        let value = [
            ("createTime", Value::from(datetime!(2023-05-01 00:00:00 UTC))),
            ("failureCount", Value::from(42_i64)),
            ("rawBytes", Value::from(vec![0_u8, 1, 2])),
            ("idleTimeout", Value::from(Duration::from_seconds(60.0))),
            ("name", Value::from("projects/p")),
        ]
        .into_iter()
        .collect::<Value>();
        assert_eq!(
            value.get("createTime").and_then(Value::as_timestamp),
            Some(datetime!(2023-05-01 00:00:00 UTC))
        );
        assert_eq!(value.get("failureCount").and_then(Value::as_integer), Some(42));
        assert_eq!(
            value.get("rawBytes").and_then(Value::as_bytes).map(|b| b.to_vec()),
            Some(vec![0_u8, 1, 2])
        );
        assert_eq!(
            value.get("idleTimeout").and_then(Value::as_duration),
            Some(Duration::from_seconds(60.0))
        );
        assert_eq!(value.get("name").and_then(Value::as_str), Some("projects/p"));
        assert!(value.get("missing").is_none());
        assert!(Value::Null.is_null());
    }
}
