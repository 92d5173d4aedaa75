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

//! The HTTP+JSON transport shared by all the generated clients.

use crate::observability::{create_http_span, record_result};
use auth::credentials::{CacheableResource, Credentials};
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::{CredentialsError, Error};
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use http::Extensions;
use tracing::Instrument;

/// Sends requests to a single service endpoint.
///
/// Each call makes exactly one attempt. Failures are returned to the caller
/// unchanged.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    tracing: bool,
}

impl ReqwestClient {
    /// Creates a client for `config`, using `default_endpoint` unless the
    /// configuration overrides it.
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let cred = Self::make_credentials(&config)?;
        let endpoint = crate::options::base_url(&config, default_endpoint)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            cred,
            endpoint,
            tracing,
        })
    }

    /// The base URL, without any trailing `/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Starts a request for `path`, which must start with `/`.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request with a statically typed body and response.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = match body {
            None => builder,
            Some(body) => {
                let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
                builder
                    .header(
                        reqwest::header::CONTENT_TYPE,
                        reqwest::header::HeaderValue::from_static("application/json"),
                    )
                    .body(payload)
            }
        };
        let response = self.request_attempt(builder, &options).await?;
        to_http_response(response).await
    }

    /// Sends a request with a schema-driven body and response.
    ///
    /// The body is encoded with `request` before sending, and the response is
    /// decoded with `response`. A response without content decodes as an
    /// empty object.
    pub async fn execute_value(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<&wire::Value>,
        request: &wire::Schema,
        response: &wire::Schema,
        options: RequestOptions,
    ) -> Result<Response<wire::Value>> {
        let body = body
            .map(|v| wire::encode(v, request))
            .transpose()
            .map_err(Error::ser)?;
        let (parts, body) = self
            .execute::<serde_json::Value, serde_json::Value>(builder, body, options)
            .await?
            .into_parts();
        let body = match body {
            serde_json::Value::Null => wire::Value::Object(wire::Map::new()),
            json => wire::decode(json, response).map_err(Error::deser)?,
        };
        Ok(Response::from_parts(parts, body))
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn request_attempt(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
    ) -> Result<reqwest::Response> {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        builder = options
            .attempt_timeout()
            .iter()
            .fold(builder, |b, t| b.timeout(*t));
        builder = builder.headers(self.auth_headers().await?);
        let request = builder.build().map_err(Error::ser)?;

        let span = if self.tracing {
            create_http_span(&request, options)
        } else {
            tracing::Span::none()
        };
        let result = self.send(request).instrument(span.clone()).await;
        match &result {
            Ok(r) => record_result(&span, Some(r.status().as_u16()), None),
            Err(e) => record_result(&span, e.http_status_code(), Some(e)),
        }
        result
    }

    async fn auth_headers(&self) -> Result<http::HeaderMap> {
        match self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?
        {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => Err(Error::authentication(
                CredentialsError::from_msg(false, "no cached headers to reuse"),
            )),
        }
    }

    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_http_error(response).await;
        }
        Ok(response)
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

/// The body type for requests without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // A 204 response has no content, which is not valid JSON.
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?;

    let response = match body.to_bytes() {
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new()
            .set_headers(parts.headers)
            .set_status(parts.status),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn test_config() -> crate::options::ClientConfig {
        let mut config = crate::options::ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config
    }

    #[tokio::test]
    async fn default_endpoint() -> TestResult {
        let client = ReqwestClient::new(test_config(), "https://test.googleapis.com/").await?;
        assert_eq!(client.endpoint(), "https://test.googleapis.com");
        let request = client
            .builder(reqwest::Method::GET, "/v1/things".into())
            .build()?;
        assert_eq!(request.url().as_str(), "https://test.googleapis.com/v1/things");
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_override() -> TestResult {
        let mut config = test_config();
        config.endpoint = Some("http://localhost:8080".into());
        let client = ReqwestClient::new(config, "https://test.googleapis.com").await?;
        assert_eq!(client.endpoint(), "http://localhost:8080");
        Ok(())
    }

    #[tokio::test]
    async fn bad_endpoint() {
        let mut config = test_config();
        config.endpoint = Some("not a url".into());
        let err = ReqwestClient::new(config, "https://test.googleapis.com")
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");
        assert!(err.to_string().contains("not a url"), "{err}");
    }

    #[tokio::test]
    async fn client_http_error_bytes() -> TestResult {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(400)
            .body(r#"{"error": "bad request"}"#)?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.status().is_none(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(bytes::Bytes::from(r#"{"error": "bad request"}"#)).as_ref()
        );
        Ok(())
    }

    #[tokio::test]
    async fn client_error_with_status() -> TestResult {
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "pipeline not found",
            "status": "NOT_FOUND",
            "details": [{"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "MISSING"}]
        }});
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(404)
            .body(body.to_string())?;
        let response: reqwest::Response = http_resp.into();
        let err = to_http_error::<()>(response).await.unwrap_err();
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("pipeline not found")
            .set_details([serde_json::json!({
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "MISSING"
            })]);
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404_u16));
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, "{}"; "200 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, "{}"; "204 with empty object")]
    #[test_case(reqwest::StatusCode::NO_CONTENT, ""; "204 with empty content")]
    async fn client_empty_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let response = to_http_response::<wire::Empty>(response).await?;
        assert_eq!(response.status(), code);
        assert_eq!(response.into_body(), wire::Empty::default());
        Ok(())
    }

    #[tokio::test]
    #[test_case(reqwest::StatusCode::OK, ""; "200 with empty content")]
    #[test_case(reqwest::StatusCode::OK, "not json"; "200 with bad content")]
    async fn client_error_with_bad_content(code: reqwest::StatusCode, content: &str) -> TestResult {
        let response = resp_from_code_content(code, content)?;
        let err = to_http_response::<wire::Empty>(response).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[test]
    fn send_errors() -> TestResult {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let got = map_send_error(err);
        assert!(got.is_io(), "{got:?}");
        Ok(())
    }

    fn resp_from_code_content(
        code: reqwest::StatusCode,
        content: &str,
    ) -> http::Result<reqwest::Response> {
        let http_resp = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(http_resp.into())
    }
}
