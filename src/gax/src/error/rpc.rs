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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The error model used by Google REST APIs.
///
/// Each [Status] contains an error code, a developer-facing message, and a
/// list of details. The details are kept as raw JSON objects, each tagged
/// with an `@type` field naming its schema.
///
/// See the [API Design Guide](https://cloud.google.com/apis/design/errors)
/// for more information.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, in English.
    pub message: String,

    /// Additional details about the error.
    pub details: Vec<serde_json::Value>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<serde_json::Value>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

/// The canonical error codes for Google APIs.
///
/// Services should return the most specific code that applies. The HTTP
/// mapping of each code is noted in its documentation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[non_exhaustive]
pub enum Code {
    /// Not an error. HTTP 200.
    Ok = 0,
    /// The operation was cancelled, typically by the caller. HTTP 499.
    Cancelled = 1,
    /// Unknown error. HTTP 500.
    #[default]
    Unknown = 2,
    /// The client specified an invalid argument. HTTP 400.
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete. HTTP 504.
    DeadlineExceeded = 4,
    /// Some requested entity was not found. HTTP 404.
    NotFound = 5,
    /// The entity that a client attempted to create already exists. HTTP 409.
    AlreadyExists = 6,
    /// The caller does not have permission to execute the operation. HTTP 403.
    PermissionDenied = 7,
    /// Some resource or quota has been exhausted. HTTP 429.
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation. HTTP 400.
    FailedPrecondition = 9,
    /// The operation was aborted, typically by a concurrency conflict. HTTP 409.
    Aborted = 10,
    /// The operation was attempted past the valid range. HTTP 400.
    OutOfRange = 11,
    /// The operation is not implemented or not enabled. HTTP 501.
    Unimplemented = 12,
    /// Some invariant of the underlying system is broken. HTTP 500.
    Internal = 13,
    /// The service is currently unavailable. HTTP 503.
    Unavailable = 14,
    /// Unrecoverable data loss or corruption. HTTP 500.
    DataLoss = 15,
    /// The request does not have valid authentication credentials. HTTP 401.
    Unauthenticated = 16,
}

impl Code {
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }

    /// The closest code for an HTTP status.
    ///
    /// Used when the error payload omits the symbolic status name.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Code::Ok,
            400 => Code::InvalidArgument,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::NotFound,
            409 => Code::Aborted,
            412 => Code::FailedPrecondition,
            416 => Code::OutOfRange,
            429 => Code::ResourceExhausted,
            499 => Code::Cancelled,
            501 => Code::Unimplemented,
            503 => Code::Unavailable,
            504 => Code::DeadlineExceeded,
            _ => Code::Unknown,
        }
    }
}

impl std::convert::From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl std::convert::From<Code> for String {
    fn from(value: Code) -> String {
        value.name().to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::convert::TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        match value {
            "OK" => Ok(Code::Ok),
            "CANCELLED" => Ok(Code::Cancelled),
            "UNKNOWN" => Ok(Code::Unknown),
            "INVALID_ARGUMENT" => Ok(Code::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Code::DeadlineExceeded),
            "NOT_FOUND" => Ok(Code::NotFound),
            "ALREADY_EXISTS" => Ok(Code::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Code::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Code::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Code::FailedPrecondition),
            "ABORTED" => Ok(Code::Aborted),
            "OUT_OF_RANGE" => Ok(Code::OutOfRange),
            "UNIMPLEMENTED" => Ok(Code::Unimplemented),
            "INTERNAL" => Ok(Code::Internal),
            "UNAVAILABLE" => Ok(Code::Unavailable),
            "DATA_LOSS" => Ok(Code::DataLoss),
            "UNAUTHENTICATED" => Ok(Code::Unauthenticated),
            _ => Err(format!("unknown status code value {value}")),
        }
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

// Google REST APIs wrap the status in an `error` object. The `code` field
// holds the HTTP status, the `status` field holds the symbolic code name.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    code: i32,
    message: String,
    status: Option<String>,
    details: Vec<serde_json::Value>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) => Code::Unknown,
            None => u16::try_from(wrapper.code)
                .map(Code::from_http_status)
                .unwrap_or_default(),
        };
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
        })
    }
}

impl From<&rpc::model::Status> for Status {
    fn from(value: &rpc::model::Status) -> Self {
        Self {
            code: value.code.map(Code::from).unwrap_or_default(),
            message: value.message.clone().unwrap_or_default(),
            details: value.details.clone(),
        }
    }
}

impl From<rpc::model::Status> for Status {
    fn from(value: rpc::model::Status) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_code(Code::Unavailable)
            .set_message("try-again")
            .set_details([json!({"@type": "type.googleapis.com/google.rpc.DebugInfo"})]);
        assert_eq!(got.code, Code::Unavailable);
        assert_eq!(got.message, "try-again");
        assert_eq!(got.details.len(), 1);

        let got = Status::default().set_code(14);
        assert_eq!(got.code, Code::Unavailable);
    }

    #[test]
    fn status_serde() -> Result<()> {
        let input = json!({
            "code": 9,
            "message": "test-message",
            "details": [{"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "reason"}]
        });
        let got = serde_json::from_value::<Status>(input.clone())?;
        assert_eq!(got.code, Code::FailedPrecondition);
        assert_eq!(got.message, "test-message");
        assert_eq!(got.details, vec![input["details"][0].clone()]);
        let roundtrip = serde_json::to_value(&got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test_case(Code::Ok)]
    #[test_case(Code::Cancelled)]
    #[test_case(Code::Unknown)]
    #[test_case(Code::InvalidArgument)]
    #[test_case(Code::DeadlineExceeded)]
    #[test_case(Code::NotFound)]
    #[test_case(Code::AlreadyExists)]
    #[test_case(Code::PermissionDenied)]
    #[test_case(Code::ResourceExhausted)]
    #[test_case(Code::FailedPrecondition)]
    #[test_case(Code::Aborted)]
    #[test_case(Code::OutOfRange)]
    #[test_case(Code::Unimplemented)]
    #[test_case(Code::Internal)]
    #[test_case(Code::Unavailable)]
    #[test_case(Code::DataLoss)]
    #[test_case(Code::Unauthenticated)]
    fn code_names(code: Code) {
        assert_eq!(Code::try_from(code.name()), Ok(code));
        assert_eq!(Code::from(code as i32), code);
        assert_eq!(code.to_string(), code.name());
        assert_eq!(String::from(code), code.name());
    }

    #[test]
    fn code_unknown_values() {
        assert_eq!(Code::from(17), Code::Unknown);
        assert_eq!(Code::from(-1), Code::Unknown);
        assert!(Code::try_from("NOT-A-CODE").is_err());
    }

    #[test_case(200, Code::Ok)]
    #[test_case(400, Code::InvalidArgument)]
    #[test_case(401, Code::Unauthenticated)]
    #[test_case(403, Code::PermissionDenied)]
    #[test_case(404, Code::NotFound)]
    #[test_case(409, Code::Aborted)]
    #[test_case(429, Code::ResourceExhausted)]
    #[test_case(500, Code::Unknown)]
    #[test_case(503, Code::Unavailable)]
    #[test_case(504, Code::DeadlineExceeded)]
    fn code_from_http_status(status: u16, want: Code) {
        assert_eq!(Code::from_http_status(status), want);
    }

    #[test]
    fn from_bytes_with_status_name() -> Result<()> {
        let body = json!({"error": {
            "code": 404,
            "message": "Requested entity was not found.",
            "status": "NOT_FOUND",
            "details": [{"@type": "type.googleapis.com/google.rpc.LocalizedMessage", "locale": "en-US"}]
        }});
        let bytes = bytes::Bytes::from(serde_json::to_vec(&body)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(got.message, "Requested entity was not found.");
        assert_eq!(got.details.len(), 1);
        Ok(())
    }

    #[test]
    fn from_bytes_without_status_name() -> Result<()> {
        let body = json!({"error": {"code": 403, "message": "The caller does not have permission"}});
        let bytes = bytes::Bytes::from(serde_json::to_vec(&body)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::PermissionDenied);
        assert!(got.details.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn from_bytes_unknown_status_name() -> Result<()> {
        let body = json!({"error": {"code": 404, "message": "m", "status": "NOT-A-CODE"}});
        let bytes = bytes::Bytes::from(serde_json::to_vec(&body)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::Unknown);
        Ok(())
    }

    #[test]
    fn from_bytes_not_an_error() {
        let bytes = bytes::Bytes::from_static(b"<html>Bad Gateway</html>");
        let got = Status::try_from(&bytes);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn from_rpc_status() {
        let input = rpc::model::Status::new()
            .set_code(5)
            .set_message("not found")
            .set_details([json!({"@type": "type.googleapis.com/google.rpc.ResourceInfo"})]);
        let got = Status::from(&input);
        assert_eq!(got.code, Code::NotFound);
        assert_eq!(got.message, "not found");
        assert_eq!(got.details, input.details);

        let got = Status::from(rpc::model::Status::new());
        assert_eq!(got, Status::default());
    }
}
