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

//! Adds message-typed query parameters to a request.
//!
//! Scalar query parameters are added directly by the generated code. Fields
//! that are messages are flattened: each leaf becomes a parameter named with
//! the dotted path to the leaf, as in `action.value=CAPTURE`. Repeated
//! fields produce one parameter per element.

use reqwest::RequestBuilder;
use serde_json::Value;

/// Adds `value` as query parameters named after `name`.
pub fn add<T: serde::Serialize>(
    builder: RequestBuilder,
    name: &str,
    value: &T,
) -> gax::Result<RequestBuilder> {
    let value = serde_json::to_value(value).map_err(gax::error::Error::ser)?;
    Ok(value.add(builder, name))
}

/// Implemented by the types that can be flattened into query parameters.
pub trait QueryParameter {
    fn add(self, builder: RequestBuilder, name: &str) -> RequestBuilder;
}

impl QueryParameter for Value {
    fn add(self, builder: RequestBuilder, name: &str) -> RequestBuilder {
        match self {
            Value::Null => builder,
            Value::Bool(b) => builder.query(&[(name, b)]),
            Value::Number(n) => builder.query(&[(name, n)]),
            Value::String(s) => builder.query(&[(name, s)]),
            Value::Array(a) => a.into_iter().fold(builder, |b, v| v.add(b, name)),
            Value::Object(o) => o
                .into_iter()
                .fold(builder, |b, (k, v)| v.add(b, &format!("{name}.{k}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Result = anyhow::Result<()>;

    fn split_query(builder: RequestBuilder) -> anyhow::Result<Vec<String>> {
        let request = builder.build()?;
        let mut pairs = request
            .url()
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        pairs.sort();
        Ok(pairs)
    }

    fn builder() -> RequestBuilder {
        reqwest::Client::new().get("https://test.googleapis.com/v1/unused")
    }

    #[test]
    fn scalars() -> Result {
        let b = json!(true).add(builder(), "a");
        let b = json!(42).add(b, "b");
        let b = json!("c d").add(b, "c");
        let b = Value::Null.add(b, "d");
        assert_eq!(split_query(b)?, vec!["a=true", "b=42", "c=c+d"]);
        Ok(())
    }

    #[test]
    fn nested() -> Result {
        let value = json!({"value": "CAPTURE", "inner": {"id": "123"}});
        let b = value.add(builder(), "action");
        assert_eq!(
            split_query(b)?,
            vec!["action.inner.id=123", "action.value=CAPTURE"]
        );
        Ok(())
    }

    #[test]
    fn repeated() -> Result {
        let b = json!(["a", "b"]).add(builder(), "ids");
        assert_eq!(split_query(b)?, vec!["ids=a", "ids=b"]);
        Ok(())
    }

    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct WriteControl {
        #[serde(skip_serializing_if = "Option::is_none")]
        required_revision_id: Option<String>,
    }

    #[test]
    fn serializable() -> Result {
        let control = WriteControl {
            required_revision_id: Some("r1".into()),
        };
        let b = add(builder(), "writeControl", &control)?;
        assert_eq!(split_query(b)?, vec!["writeControl.requiredRevisionId=r1"]);

        let control = WriteControl {
            required_revision_id: None,
        };
        let b = add(builder(), "writeControl", &control)?;
        assert!(split_query(b)?.is_empty());
        Ok(())
    }
}
