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
    use auth::credentials::{CacheableResource, Credentials, CredentialsProvider, EntityTag};
    use auth::errors::CredentialsError;
    use gax::options::RequestOptions;
    use google_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use google_cloud_gax_internal::options::ClientConfig;
    use http::header::{HeaderName, HeaderValue};
    use http::{Extensions, HeaderMap};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type AuthResult<T> = std::result::Result<T, CredentialsError>;
    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            async fn headers(&self, extensions: Extensions) -> AuthResult<CacheableResource<HeaderMap>>;
            async fn universe_domain(&self) -> Option<String>;
        }
    }

    async fn client_with(server: &Server, mock: MockCredentials) -> Result<ReqwestClient> {
        let mut config = ClientConfig::default();
        config.cred = Some(Credentials::from(mock));
        let endpoint = format!("http://{}", server.addr());
        Ok(ReqwestClient::new(config, &endpoint).await?)
    }

    #[tokio::test]
    async fn auth_headers() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things"),
                request::headers(contains(("auth-key-1", "auth-value-1"))),
                request::headers(contains(("auth-key-2", "auth-value-2"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let mut mock = MockCredentials::new();
        let headers = HeaderMap::from_iter([
            (
                HeaderName::from_static("auth-key-1"),
                HeaderValue::from_static("auth-value-1"),
            ),
            (
                HeaderName::from_static("auth-key-2"),
                HeaderValue::from_static("auth-value-2"),
            ),
        ]);
        mock.expect_headers().return_once(|_extensions| {
            Ok(CacheableResource::New {
                entity_tag: EntityTag::default(),
                data: headers,
            })
        });
        let client = client_with(&server, mock).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn auth_error() -> Result<()> {
        // The request never reaches the server.
        let server = Server::run();
        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .return_once(|_extensions| Err(CredentialsError::from_msg(false, "fail")));
        let client = client_with(&server, mock).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .expect("the source is a credentials error");
        assert!(!source.is_transient(), "{source:?}");
        Ok(())
    }

    #[tokio::test]
    async fn api_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/things"),
                request::headers(contains(("x-goog-api-key", "test-key"))),
                request::headers(contains(("x-goog-user-project", "test-project"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let mut config = ClientConfig::default();
        config.cred = Some(
            auth::credentials::api_key_credentials::Builder::new("test-key")
                .with_quota_project_id("test-project")
                .build(),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(config, &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/things".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }
}
