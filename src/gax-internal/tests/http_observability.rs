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

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use google_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use google_cloud_gax_internal::options::ClientConfig;
    use google_cloud_test_utils::capture::SpanCapture;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server, tracing: bool) -> Result<ReqwestClient> {
        let mut config = ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config.tracing = tracing;
        let endpoint = format!("http://{}", server.addr());
        Ok(ReqwestClient::new(config, &endpoint).await?)
    }

    fn options() -> RequestOptions {
        gax::options::internal::set_path_template(RequestOptions::default(), "/v1/things/{name}")
    }

    #[tokio::test]
    async fn success_span() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/abc"))
                .respond_with(json_encoded(json!({}))),
        );
        let client = test_client(&server, true).await?;
        let capture = SpanCapture::new();
        {
            let _guard = capture.install();
            let builder = client.builder(reqwest::Method::GET, "/v1/things/abc".into());
            client
                .execute::<NoBody, serde_json::Value>(builder, None, options())
                .await?;
        }
        let spans = capture.named("http_request");
        assert_eq!(spans.len(), 1, "{spans:?}");
        let attributes = &spans[0].attributes;
        let get = |k: &str| attributes.get(k).map(String::as_str);
        assert_eq!(get("otel.name"), Some("GET /v1/things/{name}"));
        assert_eq!(get("http.request.method"), Some("GET"));
        assert_eq!(get("url.template"), Some("/v1/things/{name}"));
        assert_eq!(get("http.response.status_code"), Some("200"));
        assert_eq!(get("error.type"), None);
        Ok(())
    }

    #[tokio::test]
    async fn error_span() -> Result<()> {
        let server = Server::run();
        let error = json!({"error": {"code": 404, "message": "missing", "status": "NOT_FOUND"}});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/abc"))
                .respond_with(status_code(404).body(error.to_string())),
        );
        let client = test_client(&server, true).await?;
        let capture = SpanCapture::new();
        {
            let _guard = capture.install();
            let builder = client.builder(reqwest::Method::GET, "/v1/things/abc".into());
            let got = client
                .execute::<NoBody, serde_json::Value>(builder, None, options())
                .await;
            assert!(got.is_err(), "{got:?}");
        }
        let spans = capture.named("http_request");
        assert_eq!(spans.len(), 1, "{spans:?}");
        let attributes = &spans[0].attributes;
        assert_eq!(
            attributes.get("http.response.status_code").map(String::as_str),
            Some("404")
        );
        assert_eq!(attributes.get("error.type").map(String::as_str), Some("NOT_FOUND"));
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn disabled() -> Result<()> {
        let _e = scoped_env::ScopedEnv::remove("GOOGLE_CLOUD_RUST_LOGGING");
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/things/abc"))
                .respond_with(json_encoded(json!({}))),
        );
        let client = test_client(&server, false).await?;
        let capture = SpanCapture::new();
        {
            let _guard = capture.install();
            let builder = client.builder(reqwest::Method::GET, "/v1/things/abc".into());
            client
                .execute::<NoBody, serde_json::Value>(builder, None, options())
                .await?;
        }
        assert!(capture.named("http_request").is_empty());
        Ok(())
    }
}
