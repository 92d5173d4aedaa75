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

use super::CredentialsError;
use super::rpc::Status;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// A request can fail at different stages. The request may be impossible to
/// encode, the credentials may fail to produce authentication headers, the
/// transport may fail to deliver the request, the service may reject it, or
/// the response may be impossible to decode. This type offers a predicate for
/// each stage, and accessors for the most common details. Applications can
/// query the error [source][std::error::Error::source] for deeper
/// information, for example, to find the [field path] of a conversion error.
///
/// No operation retries on error. Applications that need retries should wrap
/// the calls in their own policy.
///
/// # Example
/// ```
/// use google_cloud_gax::error::Error;
/// match example_function() {
///     Err(e) if e.status().is_some() => {
///         println!("service error {e}, debug using {:?}", e.status());
///     },
///     Err(e) if e.is_deserialization() => { println!("cannot decode the response: {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use google_cloud_gax::error::rpc::{Code, Status};
///     # Err(Error::service(Status::default().set_code(Code::NotFound).set_message("NOT FOUND")))
/// }
/// ```
///
/// [field path]: https://docs.rs/google-cloud-wire/latest/google_cloud_wire/enum.CodecError.html
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
        }
    }

    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// use google_cloud_gax::error::rpc::{Code, Status};
    /// let status = Status::default().set_code(Code::NotFound).set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: Status) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a service error including the HTTP status code and headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn service_with_http_metadata(
        status: Status,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    /// The request did not complete before the attempt timeout.
    ///
    /// The request may or may not have reached the service. If it mutates
    /// state, the change may or may not have happened.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a problem decoding the response.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The response could not be decoded.
    ///
    /// This includes malformed JSON, and wire values that cannot be converted
    /// to their local type: bad base64 blobs, non-numeric 64-bit integers, and
    /// unparsable timestamps. The request reached the service, and any
    /// changes it requested may have been applied.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a service returning a value that does not
    /// match its published schema. The error source names the field.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a problem encoding the request.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use google_cloud_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The request could not be encoded.
    ///
    /// This error is detected before the request is sent, and it is never
    /// transient: the same input fails the same way every time.
    ///
    /// # Troubleshooting
    ///
    /// Check the values in the request. For example, timestamps must be
    /// between years 1 and 9999, and user-agent values must be valid header
    /// values.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [Status] payload associated with this error.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::{Error, rpc::{Code, Status}};
    /// let error = Error::service(Status::default().set_code(Code::NotFound));
    /// if let Some(status) = error.status() {
    ///     if status.code == Code::NotFound {
    ///         println!("cannot find the thing, more details in {:?}", status.details);
    ///     }
    /// }
    /// ```
    ///
    /// Google services return a detailed status with a code for the error
    /// type, a human-readable message, and a sequence of details. See
    /// [AIP-193] for background information about the error model.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn status(&self) -> Option<&Status> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use google_cloud_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Proxies and load balancers may generate errors without the detailed
    /// payload described in [AIP-193]. In such cases the client library
    /// returns the status code, headers, and HTTP payload.
    ///
    /// [AIP-193]: https://google.aip.dev/193
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only set for HTTP errors whose payload is not a Google error message.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot bind the request parameters to the URL.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Binding, source)
    }

    /// A required path parameter is missing or empty.
    ///
    /// # Troubleshooting
    ///
    /// Set the parameter on the request builder before calling `send()`. The
    /// error source names the missing parameter.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// The credentials could not produce the authentication headers.
    ///
    /// The request was never sent.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// An HTTP error without a Google error payload.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response, such as
    /// a refused or broken connection.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Transport(Box::default()), source)
    }

    /// The request failed before an HTTP response was received.
    pub fn is_io(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Transport(d) if d.status_code.is_none() && d.headers.is_none() && d.payload.is_none()
        )
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer after receiving headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            headers: Some(headers),
            ..TransportDetails::default()
        };
        Self::with_source(ErrorKind::Transport(Box::new(details)), source)
    }

    /// The transport failed to deliver the request or receive the response.
    ///
    /// This includes connection failures, and HTTP errors returned without a
    /// Google error payload, typically by proxies or load balancers.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// Creates an unclassified error.
    ///
    /// Mocks may use this function to simulate failures.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Other, source)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match &self.kind {
            ErrorKind::Service(d) => {
                return write!(
                    f,
                    "the service returned an error, code={}, message={}",
                    d.status.code, d.status.message
                );
            }
            ErrorKind::Transport(d) => return d.display(self.source(), f),
            ErrorKind::Binding => "cannot build the request URL",
            ErrorKind::Serialization => "cannot serialize the request",
            ErrorKind::Deserialization => "cannot deserialize the response",
            ErrorKind::Authentication => "cannot create the authentication headers",
            ErrorKind::Timeout => "the request exceeded its attempt deadline",
            ErrorKind::Other => "the request failed",
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => f.write_str(prefix),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug, Default)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        if let (Some(code), Some(payload)) = (self.status_code, &self.payload) {
            return match std::str::from_utf8(payload) {
                Ok(text) => write!(f, "HTTP error [{code}]: {text}"),
                Err(_) => write!(f, "HTTP error [{code}]: {payload:?}"),
            };
        }
        match source {
            Some(e) => write!(f, "the transport failed: {e}"),
            None => f.write_str("the transport failed"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Code;
    use std::error::Error as StdError;

    fn codec_error() -> wire::CodecError {
        wire::CodecError::InvalidIntegerFormat {
            path: "$.failureCount".to_string(),
            value: "abc".to_string(),
        }
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    fn assert_no_http_metadata(error: &Error) {
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn service() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains(Code::NotFound.name()), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = Status::default()
            .set_code(Code::NotFound)
            .set_message("NOT FOUND");
        let headers = json_headers();
        let error =
            Error::service_with_http_metadata(status.clone(), Some(404), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(codec_error());
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("deadline"), "{error}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(codec_error());
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wire::CodecError>());
        assert!(
            matches!(got, Some(e) if e.is_invalid_integer_format() && e.path() == "$.failureCount"),
            "{error:?}"
        );
        assert!(error.to_string().contains(&codec_error().to_string()), "{error}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn serialization() {
        let error = Error::ser(codec_error());
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wire::CodecError>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("serialize the request"), "{error}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn binding() {
        let error = Error::binding("missing required parameter name");
        assert!(error.is_binding(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("parameter name"), "{error}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(false, "test-message"));
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn http() {
        let headers = json_headers();
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(502, HeaderMap::new(), payload.clone());
        assert!(error.to_string().contains(&format!("{payload:?}")), "{error}");
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("connection refused");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.to_string().contains("connection refused"), "{error}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn transport() {
        let headers = json_headers();
        let error = Error::transport(headers.clone(), "connection reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn other() {
        let error = Error::other("simulated failure");
        assert!(error.to_string().contains("simulated failure"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
        assert_no_http_metadata(&error);
    }

    #[test]
    fn send_and_sync() {
        static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
    }
}
