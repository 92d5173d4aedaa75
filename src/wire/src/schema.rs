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

use std::collections::BTreeMap;

/// Describes the fields of a message that need wire conversions.
///
/// Fields that are not named in the schema are copied unchanged. A schema
/// only needs to list timestamps, 64-bit integers, binary blobs, durations,
/// and the nested messages, arrays and maps that contain them.
///
/// # Example
/// ```
/// # use google_cloud_wire::{FieldType, Schema};
/// let content = Schema::new().field("rawBytes", FieldType::Bytes);
/// let document = Schema::new()
///     .field("indexTime", FieldType::Timestamp)
///     .field("content", FieldType::Message(content));
/// assert!(document.get("content").is_some());
/// assert!(document.get("title").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: BTreeMap<String, FieldType>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the wire type of `name`.
    pub fn field<T: Into<String>>(mut self, name: T, field_type: FieldType) -> Self {
        self.fields.insert(name.into(), field_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The wire type of a single field.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum FieldType {
    /// RFC 3339 string on the wire, [time::OffsetDateTime] locally.
    Timestamp,
    /// Decimal string on the wire, an integer in the `i64` range locally.
    Int64,
    /// Decimal string on the wire, an integer in the `u64` range locally.
    UInt64,
    /// Base64 string on the wire, [bytes::Bytes] locally.
    Bytes,
    /// Number of seconds, both on the wire and locally.
    Duration,
    /// A nested message.
    Message(Schema),
    /// A nested message whose schema refers back to itself.
    ///
    /// The function is only called when a value for the field is present, so
    /// recursive schemas terminate on finite values.
    Recursive(fn() -> Schema),
    /// A JSON array, each element with the given type.
    Array(Box<FieldType>),
    /// A JSON object with arbitrary keys, each value with the given type.
    Map(Box<FieldType>),
}

impl FieldType {
    pub fn array(element: FieldType) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn map(value: FieldType) -> Self {
        Self::Map(Box::new(value))
    }

    pub(crate) fn expected_wire(&self) -> &'static str {
        match self {
            Self::Timestamp => "an RFC 3339 timestamp string",
            Self::Int64 | Self::UInt64 => "a decimal integer string",
            Self::Bytes => "a base64 string",
            Self::Duration => "a number of seconds",
            Self::Message(_) | Self::Recursive(_) | Self::Map(_) => "an object",
            Self::Array(_) => "an array",
        }
    }

    pub(crate) fn expected_local(&self) -> &'static str {
        match self {
            Self::Timestamp => "a timestamp",
            Self::Int64 | Self::UInt64 => "an integer",
            Self::Bytes => "a byte sequence",
            Self::Duration => "a duration",
            Self::Message(_) | Self::Recursive(_) | Self::Map(_) => "an object",
            Self::Array(_) => "an array",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expression() -> Schema {
        Schema::new().field("andGroup", FieldType::array(FieldType::Recursive(expression)))
    }

    #[test]
    fn builder() {
        let schema = Schema::new()
            .field("createTime", FieldType::Timestamp)
            .field("counts", FieldType::map(FieldType::Int64));
        assert!(
            matches!(schema.get("createTime"), Some(FieldType::Timestamp)),
            "{schema:?}"
        );
        assert!(
            matches!(schema.get("counts"), Some(FieldType::Map(v)) if matches!(v.as_ref(), FieldType::Int64)),
            "{schema:?}"
        );
        assert!(schema.get("missing").is_none());
        let names = schema.iter().map(|(k, _)| k).collect::<Vec<_>>();
        assert_eq!(names, vec!["counts", "createTime"]);
    }

    #[test]
    fn recursive() {
        let schema = expression();
        let Some(FieldType::Array(inner)) = schema.get("andGroup") else {
            panic!("missing andGroup in {schema:?}");
        };
        let FieldType::Recursive(f) = inner.as_ref() else {
            panic!("unexpected element type {inner:?}");
        };
        assert!(f().get("andGroup").is_some());
    }
}
