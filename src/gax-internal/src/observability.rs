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

//! Spans for HTTP requests.
//!
//! When tracing is enabled each request runs inside an `http_request` span.
//! The response status and error type are recorded once the request
//! completes.

use gax::error::Error;
use gax::options::RequestOptions;
use tracing::{Span, field};

pub(crate) const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
pub(crate) const ERROR_TYPE: &str = "error.type";

/// Creates the span for `request`.
pub(crate) fn create_http_span(request: &reqwest::Request, options: &RequestOptions) -> Span {
    let url = request.url();
    let method = request.method();
    let url_template = gax::options::internal::get_path_template(options);
    let otel_name = url_template.map_or_else(
        || method.to_string(),
        |template| format!("{method} {template}"),
    );

    tracing::info_span!(
        "http_request",
        "otel.name" = otel_name,
        "http.request.method" = method.as_str(),
        "server.address" = url.host_str().unwrap_or(""),
        "server.port" = url.port_or_known_default().map(|p| p as i64).unwrap_or(0),
        "url.full" = url.as_str(),
        "url.template" = url_template,
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of a request in `span`.
pub(crate) fn record_result(span: &Span, status: Option<u16>, error: Option<&Error>) {
    if let Some(code) = status {
        span.record(HTTP_RESPONSE_STATUS_CODE, code as i64);
    }
    if let Some(e) = error {
        span.record(ERROR_TYPE, error_type(e));
    }
}

fn error_type(error: &Error) -> &str {
    if let Some(status) = error.status() {
        return status.code.name();
    }
    match () {
        _ if error.is_timeout() => "CLIENT_TIMEOUT",
        _ if error.is_authentication() => "CLIENT_AUTHENTICATION",
        _ if error.is_serialization() => "CLIENT_REQUEST_ERROR",
        _ if error.is_deserialization() => "CLIENT_RESPONSE_DECODE_ERROR",
        _ if error.is_binding() => "CLIENT_REQUEST_ERROR",
        _ if error.is_io() => "CLIENT_CONNECTION_ERROR",
        _ if error.http_status_code().is_some() => "HTTP_ERROR",
        _ => "ERROR_TYPE_UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::CredentialsError;
    use gax::error::rpc::{Code, Status};
    use test_case::test_case;

    #[test]
    fn span_name_with_template() -> anyhow::Result<()> {
        let request = reqwest::Client::new()
            .get("https://datapipelines.googleapis.com/v1/projects/p/locations/l/pipelines")
            .build()?;
        let options = gax::options::internal::set_path_template(
            RequestOptions::default(),
            "/v1/projects/{projectId}/locations/{location}/pipelines",
        );
        let _guard = google_cloud_test_utils::tracing::enable_tracing();
        let span = create_http_span(&request, &options);
        record_result(&span, Some(200), None);
        Ok(())
    }

    #[test_case(Error::service(Status::default().set_code(Code::NotFound)), "NOT_FOUND")]
    #[test_case(Error::timeout("t"), "CLIENT_TIMEOUT")]
    #[test_case(Error::authentication(CredentialsError::from_msg(false, "a")), "CLIENT_AUTHENTICATION")]
    #[test_case(Error::ser("s"), "CLIENT_REQUEST_ERROR")]
    #[test_case(Error::deser("d"), "CLIENT_RESPONSE_DECODE_ERROR")]
    #[test_case(Error::io("i"), "CLIENT_CONNECTION_ERROR")]
    #[test_case(Error::http(503, http::HeaderMap::new(), bytes::Bytes::new()), "HTTP_ERROR")]
    #[test_case(Error::other("o"), "ERROR_TYPE_UNKNOWN")]
    fn error_types(error: Error, want: &str) {
        assert_eq!(error_type(&error), want, "{error:?}");
    }
}
