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

//! Errors returned by the wire-type codec.

/// The root of a value, used as the prefix of every field path.
pub(crate) const ROOT: &str = "$";

/// An error converting between the wire and local representations.
///
/// Each variant carries the path of the offending field, in a JSONPath-like
/// notation such as `$.documents[2].content.rawBytes`.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CodecError {
    /// A binary field is not valid standard base64.
    #[error("malformed base64 encoding in field `{path}`: {source}")]
    MalformedEncoding {
        path: String,
        #[source]
        source: base64::DecodeError,
    },

    /// A 64-bit integer field is not a decimal integer, or is out of range.
    #[error("invalid 64-bit integer format in field `{path}`: {value}")]
    InvalidIntegerFormat { path: String, value: String },

    /// A timestamp field cannot be parsed, or is outside years 1 to 9999.
    #[error("invalid timestamp in field `{path}`: {value}")]
    InvalidTimestamp { path: String, value: String },

    /// The value cannot carry the declared wire type.
    #[error("unexpected value in field `{path}`, expected {expected}")]
    UnexpectedType {
        path: String,
        expected: &'static str,
    },
}

impl CodecError {
    /// The path of the field that failed to convert.
    pub fn path(&self) -> &str {
        match self {
            Self::MalformedEncoding { path, .. } => path,
            Self::InvalidIntegerFormat { path, .. } => path,
            Self::InvalidTimestamp { path, .. } => path,
            Self::UnexpectedType { path, .. } => path,
        }
    }

    pub fn is_malformed_encoding(&self) -> bool {
        matches!(self, Self::MalformedEncoding { .. })
    }

    pub fn is_invalid_integer_format(&self) -> bool {
        matches!(self, Self::InvalidIntegerFormat { .. })
    }

    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self, Self::InvalidTimestamp { .. })
    }

    pub fn is_unexpected_type(&self) -> bool {
        matches!(self, Self::UnexpectedType { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn path_and_predicates() {
        let e = CodecError::InvalidIntegerFormat {
            path: "$.failureCount".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(e.path(), "$.failureCount");
        assert!(e.is_invalid_integer_format(), "{e:?}");
        assert!(!e.is_invalid_timestamp(), "{e:?}");
        let fmt = e.to_string();
        assert!(fmt.contains("$.failureCount"), "{fmt}");
        assert!(fmt.contains("abc"), "{fmt}");
    }

    #[test]
    fn malformed_has_source() {
        let source = base64::engine::general_purpose::STANDARD
            .decode("!!")
            .unwrap_err();
        let e = CodecError::MalformedEncoding {
            path: "$.rawBytes".to_string(),
            source,
        };
        assert!(e.is_malformed_encoding(), "{e:?}");
        assert!(std::error::Error::source(&e).is_some(), "{e:?}");
    }
}
