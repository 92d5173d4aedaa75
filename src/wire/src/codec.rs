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

//! Schema-driven conversion between wire JSON and local [Value] trees.

use crate::error::{CodecError, ROOT};
use crate::value::{Map, Value};
use crate::{Duration, FieldType, Schema, blob, integer, timestamp};
use serde_json::Value as Json;

type Result<T> = std::result::Result<T, CodecError>;

/// Converts a local message into its wire form.
///
/// Fields listed in `schema` are converted to their wire representation,
/// recursing into nested messages, arrays and maps. All other fields are
/// copied unchanged. Absent fields stay absent, and `Null` stays `null`.
///
/// # Example
/// ```
/// # use google_cloud_wire::*;
/// # fn sample() -> Result<(), CodecError> {
/// let schema = Schema::new().field("createTime", FieldType::Timestamp);
/// let local = [("createTime", Value::from(time::macros::datetime!(2023-05-01 00:00:00 UTC)))]
///     .into_iter()
///     .collect::<Value>();
/// let wire = encode(&local, &schema)?;
/// assert_eq!(wire, serde_json::json!({"createTime": "2023-05-01T00:00:00.000Z"}));
/// # Ok(()) }
/// ```
pub fn encode(value: &Value, schema: &Schema) -> Result<Json> {
    match value {
        Value::Object(fields) => encode_message(fields, schema, ROOT),
        _ => Err(CodecError::UnexpectedType {
            path: ROOT.to_string(),
            expected: "an object",
        }),
    }
}

/// Converts a wire message into its local form.
///
/// This is the inverse of [encode]. Malformed wire values are reported as
/// errors, never replaced by defaults.
pub fn decode(value: Json, schema: &Schema) -> Result<Value> {
    match value {
        Json::Object(fields) => decode_message(fields, schema, ROOT),
        _ => Err(CodecError::UnexpectedType {
            path: ROOT.to_string(),
            expected: "an object",
        }),
    }
}

fn field_path(parent: &str, name: &str) -> String {
    format!("{parent}.{name}")
}

fn element_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

fn encode_message(fields: &Map, schema: &Schema, path: &str) -> Result<Json> {
    let mut encoded = serde_json::Map::new();
    for (name, value) in fields {
        let path = field_path(path, name);
        let wire = match schema.get(name) {
            Some(field_type) => encode_field(value, field_type, &path)?,
            None => encode_plain(value, &path)?,
        };
        encoded.insert(name.clone(), wire);
    }
    Ok(Json::Object(encoded))
}

fn encode_field(value: &Value, field_type: &FieldType, path: &str) -> Result<Json> {
    let unexpected = || CodecError::UnexpectedType {
        path: path.to_string(),
        expected: field_type.expected_local(),
    };
    match (field_type, value) {
        (_, Value::Null) => Ok(Json::Null),
        (FieldType::Timestamp, Value::Timestamp(t)) => encode_timestamp(*t, path),
        (FieldType::Int64, Value::Integer(n)) => encode_integer(*n, integer::fits_i64, path),
        (FieldType::UInt64, Value::Integer(n)) => encode_integer(*n, integer::fits_u64, path),
        (FieldType::Int64, Value::Number(n)) => {
            let n = integer::from_number(n).ok_or_else(unexpected)?;
            encode_integer(n, integer::fits_i64, path)
        }
        (FieldType::UInt64, Value::Number(n)) => {
            let n = integer::from_number(n).ok_or_else(unexpected)?;
            encode_integer(n, integer::fits_u64, path)
        }
        (FieldType::Bytes, Value::Bytes(b)) => Ok(Json::String(blob::encode(b))),
        (FieldType::Duration, Value::Duration(d)) => encode_duration(*d, path),
        (FieldType::Duration, Value::Number(n)) => Ok(Json::Number(n.clone())),
        (FieldType::Message(schema), Value::Object(fields)) => {
            encode_message(fields, schema, path)
        }
        (FieldType::Recursive(schema), Value::Object(fields)) => {
            encode_message(fields, &schema(), path)
        }
        (FieldType::Array(element), Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| encode_field(item, element, &element_path(path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Json::Array),
        (FieldType::Map(element), Value::Object(entries)) => entries
            .iter()
            .map(|(k, v)| Ok((k.clone(), encode_field(v, element, &field_path(path, k))?)))
            .collect::<Result<serde_json::Map<_, _>>>()
            .map(Json::Object),
        _ => Err(unexpected()),
    }
}

/// Encodes a field without a declared wire type.
///
/// Plain values are copied. Rich values use their canonical wire form, so a
/// value tree that carries a timestamp in an undeclared field still produces
/// valid JSON.
fn encode_plain(value: &Value, path: &str) -> Result<Json> {
    let json = match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Number(n) => Json::Number(n.clone()),
        Value::String(s) => Json::String(s.clone()),
        Value::Timestamp(t) => encode_timestamp(*t, path)?,
        Value::Integer(n) => Json::String(n.to_string()),
        Value::Bytes(b) => Json::String(blob::encode(b)),
        Value::Duration(d) => encode_duration(*d, path)?,
        Value::Array(items) => Json::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| encode_plain(item, &element_path(path, i)))
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(fields) => encode_message(fields, &Schema::default(), path)?,
    };
    Ok(json)
}

fn encode_timestamp(value: time::OffsetDateTime, path: &str) -> Result<Json> {
    timestamp::format(value)
        .map(Json::String)
        .ok_or_else(|| CodecError::InvalidTimestamp {
            path: path.to_string(),
            value: value.to_string(),
        })
}

fn encode_integer(value: i128, fits: fn(i128) -> bool, path: &str) -> Result<Json> {
    if !fits(value) {
        return Err(CodecError::InvalidIntegerFormat {
            path: path.to_string(),
            value: value.to_string(),
        });
    }
    Ok(Json::String(value.to_string()))
}

fn encode_duration(value: Duration, path: &str) -> Result<Json> {
    value
        .to_number()
        .map(Json::Number)
        .ok_or_else(|| CodecError::UnexpectedType {
            path: path.to_string(),
            expected: "a finite duration",
        })
}

fn decode_message(fields: serde_json::Map<String, Json>, schema: &Schema, path: &str) -> Result<Value> {
    let mut decoded = Map::new();
    for (name, value) in fields {
        let local = match schema.get(&name) {
            Some(field_type) => decode_field(value, field_type, &field_path(path, &name))?,
            None => Value::from(value),
        };
        decoded.insert(name, local);
    }
    Ok(Value::Object(decoded))
}

fn decode_field(value: Json, field_type: &FieldType, path: &str) -> Result<Value> {
    let invalid_integer = |value: String| CodecError::InvalidIntegerFormat {
        path: path.to_string(),
        value,
    };
    match (field_type, value) {
        (_, Json::Null) => Ok(Value::Null),
        (FieldType::Timestamp, Json::String(s)) => match timestamp::parse(&s) {
            Some(t) => Ok(Value::Timestamp(t)),
            None => Err(CodecError::InvalidTimestamp {
                path: path.to_string(),
                value: s,
            }),
        },
        (FieldType::Int64, Json::String(s)) => integer::parse(&s)
            .filter(|n| integer::fits_i64(*n))
            .map(Value::Integer)
            .ok_or_else(|| invalid_integer(s)),
        (FieldType::UInt64, Json::String(s)) => integer::parse(&s)
            .filter(|n| integer::fits_u64(*n))
            .map(Value::Integer)
            .ok_or_else(|| invalid_integer(s)),
        (FieldType::Int64, Json::Number(n)) => integer::from_number(&n)
            .filter(|v| integer::fits_i64(*v))
            .map(Value::Integer)
            .ok_or_else(|| invalid_integer(n.to_string())),
        (FieldType::UInt64, Json::Number(n)) => integer::from_number(&n)
            .filter(|v| integer::fits_u64(*v))
            .map(Value::Integer)
            .ok_or_else(|| invalid_integer(n.to_string())),
        (FieldType::Bytes, Json::String(s)) => blob::decode(&s)
            .map(Value::Bytes)
            .map_err(|source| CodecError::MalformedEncoding {
                path: path.to_string(),
                source,
            }),
        (FieldType::Duration, Json::Number(n)) => Duration::from_number(&n)
            .map(Value::Duration)
            .ok_or_else(|| unexpected_wire(field_type, path)),
        (FieldType::Duration, Json::String(s)) => Duration::parse(&s)
            .map(Value::Duration)
            .ok_or_else(|| unexpected_wire(field_type, path)),
        (FieldType::Message(schema), Json::Object(fields)) => decode_message(fields, schema, path),
        (FieldType::Recursive(schema), Json::Object(fields)) => {
            decode_message(fields, &schema(), path)
        }
        (FieldType::Array(element), Json::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| decode_field(item, element, &element_path(path, i)))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        (FieldType::Map(element), Json::Object(entries)) => entries
            .into_iter()
            .map(|(k, v)| {
                let local = decode_field(v, element, &field_path(path, &k))?;
                Ok((k, local))
            })
            .collect::<Result<Map>>()
            .map(Value::Object),
        _ => Err(unexpected_wire(field_type, path)),
    }
}

fn unexpected_wire(field_type: &FieldType, path: &str) -> CodecError {
    CodecError::UnexpectedType {
        path: path.to_string(),
        expected: field_type.expected_wire(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;

    fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
        fields.into_iter().collect()
    }

    fn import_metadata() -> Schema {
        Schema::new()
            .field("createTime", FieldType::Timestamp)
            .field("updateTime", FieldType::Timestamp)
            .field("successCount", FieldType::Int64)
            .field("failureCount", FieldType::Int64)
    }

    fn document() -> Schema {
        Schema::new()
            .field("indexTime", FieldType::Timestamp)
            .field(
                "content",
                FieldType::Message(Schema::new().field("rawBytes", FieldType::Bytes)),
            )
    }

    fn filter_expression() -> Schema {
        Schema::new()
            .field("expressions", FieldType::array(FieldType::Recursive(filter_expression)))
            .field("value", FieldType::Int64)
    }

    #[test]
    fn encode_timestamp_scenario() -> Result<()> {
        let schema = Schema::new().field("createTime", FieldType::Timestamp);
        let local = object([("createTime", datetime!(2023-05-01 00:00:00 UTC).into())]);
        let got = encode(&local, &schema)?;
        assert_eq!(got, json!({"createTime": "2023-05-01T00:00:00.000Z"}));
        Ok(())
    }

    #[test]
    fn decode_integer_scenario() -> Result<()> {
        let got = decode(json!({"failureCount": "42"}), &import_metadata())?;
        assert_eq!(got.get("failureCount").and_then(Value::as_integer), Some(42));
        Ok(())
    }

    #[test]
    fn bytes_scenario() -> Result<()> {
        let schema = Schema::new().field("rawBytes", FieldType::Bytes);
        let local = object([("rawBytes", vec![0x00_u8, 0x01, 0x02].into())]);
        let wire = encode(&local, &schema)?;
        assert_eq!(wire, json!({"rawBytes": "AAEC"}));
        let got = decode(json!({"rawBytes": "AAEC"}), &schema)?;
        assert_eq!(got, local);
        Ok(())
    }

    #[test_case(9007199254740993; "beyond f64 precision")]
    #[test_case(i64::MAX as i128; "max")]
    #[test_case(i64::MIN as i128; "min")]
    #[test_case(0; "zero")]
    fn integer_roundtrip(input: i128) -> Result<()> {
        let schema = Schema::new().field("n", FieldType::Int64);
        let local = object([("n", Value::Integer(input))]);
        let wire = encode(&local, &schema)?;
        assert_eq!(wire, json!({"n": input.to_string()}));
        assert_eq!(decode(wire, &schema)?, local);
        Ok(())
    }

    #[test]
    fn unsigned_roundtrip() -> Result<()> {
        let schema = Schema::new().field("itemCount", FieldType::UInt64);
        let local = object([("itemCount", u64::MAX.into())]);
        let wire = encode(&local, &schema)?;
        assert_eq!(wire, json!({"itemCount": "18446744073709551615"}));
        assert_eq!(decode(wire, &schema)?, local);
        Ok(())
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[0xff]; "one")]
    #[test_case(&[0xff, 0xfe]; "two")]
    #[test_case(&[0xff, 0xfe, 0xfd]; "three")]
    #[test_case(&[0xff, 0xfe, 0xfd, 0xfc]; "four")]
    fn bytes_roundtrip(input: &[u8]) -> Result<()> {
        let schema = Schema::new().field("data", FieldType::Bytes);
        let local = object([("data", input.to_vec().into())]);
        let wire = encode(&local, &schema)?;
        assert_eq!(decode(wire, &schema)?, local);
        Ok(())
    }

    #[test_case(datetime!(2023-05-01 00:00:00 UTC))]
    #[test_case(datetime!(1999-12-31 23:59:59.999 UTC))]
    #[test_case(datetime!(2024-02-29 12:00:00.000001 UTC))]
    #[test_case(datetime!(0001-01-01 00:00:00 UTC))]
    fn timestamp_roundtrip(input: time::OffsetDateTime) -> Result<()> {
        let schema = Schema::new().field("t", FieldType::Timestamp);
        let local = object([("t", input.into())]);
        let wire = encode(&local, &schema)?;
        assert_eq!(decode(wire, &schema)?, local);
        Ok(())
    }

    #[test_case("2023-05-01T00:00:00.000Z", "2023-05-01T00:00:00.000Z")]
    #[test_case("2023-05-01T00:00:00Z", "2023-05-01T00:00:00.000Z"; "canonical millis")]
    #[test_case("2023-05-01T02:00:00+02:00", "2023-05-01T00:00:00.000Z"; "canonical utc")]
    #[test_case("2023-05-01T00:00:00.123456Z", "2023-05-01T00:00:00.123456Z"; "micros")]
    fn wire_timestamp_roundtrip(input: &str, want: &str) -> Result<()> {
        let schema = Schema::new().field("t", FieldType::Timestamp);
        let local = decode(json!({"t": input}), &schema)?;
        assert_eq!(encode(&local, &schema)?, json!({"t": want}));
        Ok(())
    }

    #[test]
    fn decode_malformed_base64() {
        let schema = document();
        let err = decode(json!({"content": {"rawBytes": "not*base64"}}), &schema).unwrap_err();
        assert!(err.is_malformed_encoding(), "{err:?}");
        assert_eq!(err.path(), "$.content.rawBytes");
    }

    #[test_case(json!("abc"))]
    #[test_case(json!("12abc"))]
    #[test_case(json!("1.5"))]
    #[test_case(json!("1.0000000000000001"); "fraction below f64 precision")]
    #[test_case(json!("5e4"); "exponent")]
    #[test_case(json!("9223372036854775808"); "out of range")]
    #[test_case(json!(1.5); "fractional number")]
    fn decode_invalid_integer(input: serde_json::Value) {
        let err = decode(json!({"failureCount": input}), &import_metadata()).unwrap_err();
        assert!(err.is_invalid_integer_format(), "{err:?}");
        assert_eq!(err.path(), "$.failureCount");
    }

    #[test]
    fn decode_integer_zero_fraction() -> Result<()> {
        let got = decode(json!({"failureCount": "9007199254740993.0"}), &import_metadata())?;
        assert_eq!(
            got.get("failureCount").and_then(Value::as_integer),
            Some(9007199254740993)
        );
        Ok(())
    }

    #[test]
    fn decode_integer_from_number() -> Result<()> {
        let got = decode(json!({"successCount": 7}), &import_metadata())?;
        assert_eq!(got.get("successCount").and_then(Value::as_integer), Some(7));
        Ok(())
    }

    #[test_case("yesterday")]
    #[test_case("2023-05-01")]
    #[test_case("")]
    fn decode_invalid_timestamp(input: &str) {
        let err = decode(json!({"createTime": input}), &import_metadata()).unwrap_err();
        assert!(err.is_invalid_timestamp(), "{err:?}");
        assert_eq!(err.path(), "$.createTime");
    }

    #[test]
    fn absent_fields_stay_absent() -> Result<()> {
        let schema = import_metadata();
        let got = decode(json!({"successCount": "1"}), &schema)?;
        assert_eq!(got, object([("successCount", Value::Integer(1))]));
        let wire = encode(&got, &schema)?;
        assert_eq!(wire, json!({"successCount": "1"}));
        assert_eq!(encode(&Value::Object(Map::new()), &schema)?, json!({}));
        Ok(())
    }

    #[test]
    fn nulls_pass_through() -> Result<()> {
        let schema = import_metadata();
        let got = decode(json!({"createTime": null}), &schema)?;
        assert_eq!(got, object([("createTime", Value::Null)]));
        assert_eq!(encode(&got, &schema)?, json!({"createTime": null}));
        Ok(())
    }

    #[test]
    fn undeclared_fields_pass_through() -> Result<()> {
        let schema = import_metadata();
        let input = json!({
            "failureCount": "3",
            "name": "operations/123",
            "ratio": 0.5,
            "labels": {"env": "test"},
            "tags": ["a", "b"],
        });
        let got = decode(input.clone(), &schema)?;
        assert_eq!(got.get("name").and_then(Value::as_str), Some("operations/123"));
        assert_eq!(encode(&got, &schema)?, input);
        Ok(())
    }

    #[test]
    fn arrays_of_messages() -> Result<()> {
        let schema = Schema::new().field("documents", FieldType::array(FieldType::Message(document())));
        let input = json!({"documents": [
            {"id": "a", "indexTime": "2023-05-01T00:00:00.000Z", "content": {"rawBytes": "AAEC"}},
            {"id": "b"},
            {"id": "c", "content": {"rawBytes": "AA=="}},
        ]});
        let got = decode(input.clone(), &schema)?;
        let documents = got.get("documents").and_then(Value::as_array).cloned().unwrap_or_default();
        assert_eq!(documents.len(), 3);
        assert_eq!(
            documents[0].get("indexTime").and_then(Value::as_timestamp),
            Some(datetime!(2023-05-01 00:00:00 UTC))
        );
        assert_eq!(
            documents[2].get("content").and_then(|c| c.get("rawBytes")).and_then(Value::as_bytes).map(|b| b.to_vec()),
            Some(vec![0_u8])
        );
        assert!(documents[1].get("content").is_none());
        assert_eq!(encode(&got, &schema)?, input);
        Ok(())
    }

    #[test]
    fn error_path_in_array() {
        let schema = Schema::new().field("documents", FieldType::array(FieldType::Message(document())));
        let input = json!({"documents": [{}, {"content": {"rawBytes": "%%%"}}]});
        let err = decode(input, &schema).unwrap_err();
        assert_eq!(err.path(), "$.documents[1].content.rawBytes");
    }

    #[test]
    fn maps_of_integers() -> Result<()> {
        let schema = Schema::new().field("counts", FieldType::map(FieldType::Int64));
        let input = json!({"counts": {"a": "1", "b": "-2"}});
        let got = decode(input.clone(), &schema)?;
        assert_eq!(
            got.get("counts").and_then(|c| c.get("b")).and_then(Value::as_integer),
            Some(-2)
        );
        assert_eq!(encode(&got, &schema)?, input);
        Ok(())
    }

    #[test]
    fn recursive_schema() -> Result<()> {
        let input = json!({"expressions": [
            {"value": "1"},
            {"expressions": [{"value": "9007199254740993"}]},
        ]});
        let got = decode(input.clone(), &filter_expression())?;
        let nested = got
            .get("expressions")
            .and_then(Value::as_array)
            .and_then(|a| a.get(1))
            .and_then(|e| e.get("expressions"))
            .and_then(Value::as_array)
            .and_then(|a| a.first())
            .and_then(|e| e.get("value"))
            .and_then(Value::as_integer);
        assert_eq!(nested, Some(9007199254740993));
        assert_eq!(encode(&got, &filter_expression())?, input);
        Ok(())
    }

    #[test]
    fn durations() -> Result<()> {
        let schema = Schema::new()
            .field("idleTimeout", FieldType::Duration)
            .field("runningTimeout", FieldType::Duration);
        let got = decode(json!({"idleTimeout": 1200, "runningTimeout": "7200s"}), &schema)?;
        assert_eq!(
            got.get("idleTimeout").and_then(Value::as_duration),
            Some(Duration::from_seconds(1200.0))
        );
        assert_eq!(
            encode(&got, &schema)?,
            json!({"idleTimeout": 1200, "runningTimeout": 7200})
        );
        Ok(())
    }

    #[test]
    fn encode_type_mismatch() {
        let schema = import_metadata();
        let local = object([("createTime", "2023-05-01".into())]);
        let err = encode(&local, &schema).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
        assert_eq!(err.path(), "$.createTime");
    }

    #[test]
    fn encode_integer_out_of_range() {
        let schema = Schema::new().field("itemCount", FieldType::UInt64);
        let local = object([("itemCount", Value::Integer(-1))]);
        let err = encode(&local, &schema).unwrap_err();
        assert!(err.is_invalid_integer_format(), "{err:?}");
    }

    #[test]
    fn encode_timestamp_out_of_range() {
        let schema = import_metadata();
        let local = object([("createTime", datetime!(0000-06-01 00:00:00 UTC).into())]);
        let err = encode(&local, &schema).unwrap_err();
        assert!(err.is_invalid_timestamp(), "{err:?}");
    }

    #[test]
    fn top_level_must_be_object() {
        let err = decode(json!([1, 2]), &Schema::new()).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
        assert_eq!(err.path(), "$");
        let err = encode(&Value::Bool(true), &Schema::new()).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
    }

    #[test]
    fn decode_wire_type_mismatch() {
        let err = decode(json!({"createTime": 1682899200}), &import_metadata()).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
        let err = decode(json!({"content": "oops"}), &document()).unwrap_err();
        assert!(err.is_unexpected_type(), "{err:?}");
        assert_eq!(err.path(), "$.content");
    }
}
