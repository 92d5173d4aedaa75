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

// Code generated by sidekick. DO NOT EDIT.

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs.
///
/// Each `Status` message contains three pieces of data: error code, error
/// message, and error details. See the [API Design Guide] for more details.
///
/// [API Design Guide]: https://cloud.google.com/apis/design/errors
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code, which should be an enum value of `google.rpc.Code`.
    pub code: Option<i32>,

    /// A developer-facing error message, which should be in English.
    pub message: Option<String>,

    /// A list of messages that carry the error details.
    ///
    /// Each element is a JSON object with an `@type` field naming the detail
    /// message type.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Status {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code][crate::model::Status::code].
    pub fn set_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the value of [message][crate::model::Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [details][crate::model::Status::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.details = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roundtrip() -> anyhow::Result<()> {
        let input = json!({
            "code": 5,
            "message": "not found",
            "details": [{"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "r"}],
            "extra": true,
        });
        let got = serde_json::from_value::<Status>(input.clone())?;
        assert_eq!(got.code, Some(5));
        assert_eq!(got.message.as_deref(), Some("not found"));
        assert_eq!(got.details.len(), 1);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn setters() -> anyhow::Result<()> {
        let got = Status::new()
            .set_code(3)
            .set_message("bad")
            .set_details([json!({"@type": "t"})]);
        assert_eq!(
            serde_json::to_value(&got)?,
            json!({"code": 3, "message": "bad", "details": [{"@type": "t"}]})
        );
        assert_eq!(serde_json::to_value(Status::new())?, json!({}));
        Ok(())
    }
}
