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

//! Verify the schema-driven requests convert values at the boundary.

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use google_cloud_gax_internal::http::ReqwestClient;
    use google_cloud_gax_internal::options::ClientConfig;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use wire::{FieldType, Map, Schema, Value};

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<ReqwestClient> {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        let endpoint = format!("http://{}", server.addr());
        Ok(ReqwestClient::new(config, &endpoint).await?)
    }

    fn schema() -> Schema {
        Schema::new()
            .field("createTime", FieldType::Timestamp)
            .field("failureCount", FieldType::Int64)
            .field("payload", FieldType::Bytes)
    }

    #[tokio::test]
    async fn encode_and_decode() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/jobs"),
                request::body(json_decoded(eq(json!({
                    "failureCount": "9007199254740993",
                    "payload": "AAEC",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "createTime": "2023-05-01T00:00:00.000Z",
                "failureCount": "42",
            }))),
        );
        let client = test_client(&server).await?;
        let body = Value::Object(Map::from([
            ("failureCount".to_string(), Value::Integer(9007199254740993)),
            (
                "payload".to_string(),
                Value::Bytes(bytes::Bytes::from_static(&[0, 1, 2])),
            ),
        ]));
        let builder = client.builder(reqwest::Method::POST, "/v1/jobs".into());
        let response = client
            .execute_value(builder, Some(&body), &schema(), &schema(), RequestOptions::default())
            .await?
            .into_body();
        assert_eq!(
            response.get("failureCount").and_then(Value::as_integer),
            Some(42)
        );
        let want = wire::parse_timestamp("2023-05-01T00:00:00Z");
        assert_eq!(response.get("createTime").and_then(Value::as_timestamp), want);
        Ok(())
    }

    #[tokio::test]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/jobs/j"))
                .respond_with(status_code(204)),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/v1/jobs/j".into());
        let response = client
            .execute_value(builder, None, &Schema::new(), &Schema::new(), RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), Value::Object(Map::new()));
        Ok(())
    }

    #[tokio::test]
    async fn malformed_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/jobs/j"))
                .respond_with(json_encoded(json!({"failureCount": "4x2"}))),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/jobs/j".into());
        let err = client
            .execute_value(builder, None, &schema(), &schema(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<wire::CodecError>())
            .expect("the source is a codec error");
        assert!(source.is_invalid_integer_format(), "{source:?}");
        Ok(())
    }

    #[tokio::test]
    async fn malformed_request() -> Result<()> {
        // The request never reaches the server.
        let server = Server::run();
        let client = test_client(&server).await?;
        let body = Value::Object(Map::from([(
            "failureCount".to_string(),
            Value::String("not a number".into()),
        )]));
        let builder = client.builder(reqwest::Method::POST, "/v1/jobs".into());
        let err = client
            .execute_value(builder, Some(&body), &schema(), &schema(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
        Ok(())
    }
}
