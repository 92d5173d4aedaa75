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

//! Helpers to substitute path parameters.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
}

/// Creates the error returned when `name` is unset or empty.
pub fn missing(name: &str) -> gax::error::Error {
    gax::error::Error::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Returns the value of a required path parameter.
///
/// Path parameters are always required. Empty strings would produce URLs
/// with `//` segments, so they count as missing.
pub fn required<'a>(value: &'a Option<String>, name: &str) -> gax::Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(name)),
    }
}

// Unreserved characters in RFC 3986 pass through.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const RESERVED: &AsciiSet = &SEGMENT.remove(b'/');

/// Encodes a value that replaces a single path segment, as in `{projectId}`.
pub fn escape(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Encodes a value that may span multiple segments, as in `{+name}`.
pub fn escape_reserved(value: &str) -> String {
    utf8_percent_encode(value, RESERVED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn missing_is_binding() {
        let err = missing("name");
        assert!(err.is_binding(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(
            source,
            Some(&Error::MissingRequiredParameter("name".to_string()))
        );
    }

    #[test_case(None)]
    #[test_case(Some(""))]
    fn required_missing(input: Option<&str>) {
        let value = input.map(str::to_string);
        let err = required(&value, "projectId").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(err.to_string().contains("projectId"), "{err}");
    }

    #[test]
    fn required_present() {
        let value = Some("my-project".to_string());
        assert_eq!(required(&value, "projectId").ok(), Some("my-project"));
    }

    #[test_case("abc-123_x.y~z", "abc-123_x.y~z")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a b", "a%20b")]
    #[test_case("a:b", "a%3Ab")]
    #[test_case("ñ", "%C3%B1")]
    fn segment(input: &str, want: &str) {
        assert_eq!(escape(input), want);
    }

    #[test_case("projects/p/locations/l", "projects/p/locations/l")]
    #[test_case("projects/p q", "projects/p%20q")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    fn reserved(input: &str, want: &str) {
        assert_eq!(escape_reserved(input), want);
    }
}
