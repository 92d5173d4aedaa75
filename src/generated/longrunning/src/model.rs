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

/// This resource represents a long-running operation that is the result of a
/// network API call.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it.
    pub name: Option<String>,

    /// Service-specific metadata associated with the operation.
    ///
    /// The metadata is a JSON object with an `@type` field naming its message
    /// type. Use [metadata_as][Operation::metadata_as] to convert it.
    pub metadata: Option<serde_json::Value>,

    /// If the value is `false`, it means the operation is still in progress.
    pub done: Option<bool>,

    /// The error result of the operation in case of failure or cancellation.
    pub error: Option<rpc::model::Status>,

    /// The normal response of the operation in case of success.
    pub response: Option<serde_json::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Operation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Operation::metadata].
    pub fn set_metadata<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [done][crate::model::Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = Some(v.into());
        self
    }

    /// Sets the value of [error][crate::model::Operation::error].
    pub fn set_error<T: Into<rpc::model::Status>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets the value of [response][crate::model::Operation::response].
    pub fn set_response<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.response = Some(v.into());
        self
    }

    /// Converts the metadata into a typed message.
    ///
    /// Returns `Ok(None)` if the operation has no metadata.
    pub fn metadata_as<T>(&self) -> Result<Option<T>, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        self.metadata.clone().map(serde_json::from_value).transpose()
    }

    /// Converts the response into a typed message.
    ///
    /// Returns `Ok(None)` if the operation is not done, or it failed.
    pub fn response_as<T>(&self) -> Result<Option<T>, serde_json::Error>
    where
        T: serde::de::DeserializeOwned,
    {
        self.response.clone().map(serde_json::from_value).transpose()
    }

    /// Decodes the metadata using a wire schema.
    pub fn decode_metadata(
        &self,
        schema: &wire::Schema,
    ) -> Result<Option<wire::Value>, wire::CodecError> {
        self.metadata
            .clone()
            .map(|m| wire::decode(m, schema))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[serde_with::serde_as]
    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Metadata {
        #[serde_as(as = "Option<wire::Timestamp>")]
        create_time: Option<time::OffsetDateTime>,
        #[serde_as(as = "Option<wire::I64>")]
        failure_count: Option<i64>,
    }

    fn running() -> serde_json::Value {
        json!({
            "name": "projects/p/operations/import-123",
            "done": false,
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.discoveryengine.v1.ImportDocumentsMetadata",
                "createTime": "2023-05-01T00:00:00Z",
                "failureCount": "42",
            },
        })
    }

    #[test]
    fn typed_metadata() -> anyhow::Result<()> {
        let op = serde_json::from_value::<Operation>(running())?;
        assert_eq!(op.name.as_deref(), Some("projects/p/operations/import-123"));
        assert_eq!(op.done, Some(false));
        let md = op.metadata_as::<Metadata>()?;
        assert_eq!(
            md,
            Some(Metadata {
                create_time: Some(datetime!(2023-05-01 00:00:00 UTC)),
                failure_count: Some(42),
            })
        );
        assert_eq!(op.response_as::<Metadata>()?, None);
        Ok(())
    }

    #[test]
    fn decoded_metadata() -> anyhow::Result<()> {
        let op = serde_json::from_value::<Operation>(running())?;
        let schema = wire::Schema::new()
            .field("createTime", wire::FieldType::Timestamp)
            .field("failureCount", wire::FieldType::Int64);
        let md = op.decode_metadata(&schema)?;
        let failures = md
            .as_ref()
            .and_then(|m| m.get("failureCount"))
            .and_then(wire::Value::as_integer);
        assert_eq!(failures, Some(42));
        Ok(())
    }

    #[test]
    fn error_result() -> anyhow::Result<()> {
        let op = serde_json::from_value::<Operation>(json!({
            "name": "operations/abc",
            "done": true,
            "error": {"code": 9, "message": "precondition failed"},
        }))?;
        let status = op.error.as_ref().map(|s| (s.code, s.message.clone()));
        assert_eq!(status, Some((Some(9), Some("precondition failed".to_string()))));
        Ok(())
    }

    #[test]
    fn setters() -> anyhow::Result<()> {
        let op = Operation::new()
            .set_name("operations/abc")
            .set_done(true)
            .set_response(json!({"name": "r"}));
        assert_eq!(
            serde_json::to_value(&op)?,
            json!({"name": "operations/abc", "done": true, "response": {"name": "r"}})
        );
        Ok(())
    }
}
