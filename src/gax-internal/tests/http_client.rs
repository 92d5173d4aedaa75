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

//! Verify the transport sends exactly one request per call, and maps the
//! responses and failures as expected.

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use google_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use google_cloud_gax_internal::options::ClientConfig;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config
    }

    async fn test_client(server: &Server) -> Result<ReqwestClient> {
        let endpoint = format!("http://{}", server.addr());
        Ok(ReqwestClient::new(test_config(), &endpoint).await?)
    }

    #[tokio::test]
    async fn get_success() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things/abc"),
                request::query(url_decoded(contains(("pageSize", "10")))),
            ])
            .respond_with(json_encoded(json!({"name": "abc"}))),
        );
        let client = test_client(&server).await?;
        let builder = client
            .builder(reqwest::Method::GET, "/v1/things/abc".into())
            .query(&[("pageSize", 10)]);
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.into_body(), json!({"name": "abc"}));
        Ok(())
    }

    #[tokio::test]
    async fn post_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1/things"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"displayName": "t"})))),
            ])
            .respond_with(json_encoded(json!({"name": "new"}))),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::POST, "/v1/things".into());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({"displayName": "t"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.into_body(), json!({"name": "new"}));
        Ok(())
    }

    #[tokio::test]
    async fn user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things"),
                request::headers(contains(("user-agent", "test-agent/1.0"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.0");
        client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error_no_retry() -> Result<()> {
        let server = Server::run();
        let error = json!({"error": {
            "code": 503,
            "message": "try again later",
            "status": "UNAVAILABLE",
        }});
        // A transient error is still attempted only once.
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things"))
                .times(1)
                .respond_with(status_code(503).body(error.to_string())),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        let status = err.status().expect("service errors have a status");
        assert_eq!(status.code, gax::error::rpc::Code::Unavailable);
        assert_eq!(status.message, "try again later");
        Ok(())
    }

    #[tokio::test]
    async fn http_error_without_status() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things"))
                .respond_with(status_code(502).body("bad gateway")),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(err.http_payload(), Some(&bytes::Bytes::from("bad gateway")));
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/slow")).respond_with(
                delay_and_then(Duration::from_secs(2), json_encoded(json!({}))),
            ),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> Result<()> {
        let endpoint = {
            let server = Server::run();
            format!("http://{}", server.addr())
        };
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things"))
                .respond_with(status_code(200).body("not json")),
        );
        let client = test_client(&server).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }
}
