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

//! Errors created during credentials construction.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for [Credentials] builders.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// No default credentials are configured in the environment.
    pub fn is_not_found(&self) -> bool {
        matches!(self.0, ErrorKind::NotFound(_))
    }

    /// A value cannot be used as a header, for example, an API key with
    /// control characters.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self.0, ErrorKind::InvalidValue(_))
    }

    pub(crate) fn not_found(variable: &'static str) -> Error {
        Error(ErrorKind::NotFound(variable))
    }

    pub(crate) fn invalid_value<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::InvalidValue(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("no default credentials found, set the {0} environment variable or configure the client credentials")]
    NotFound(&'static str),
    #[error("the credentials contain an invalid header value {0}")]
    InvalidValue(#[source] BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constructors() {
        let error = Error::not_found("GOOGLE_API_KEY");
        assert!(error.is_not_found(), "{error:?}");
        assert!(!error.is_invalid_value(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("GOOGLE_API_KEY"), "{error}");

        let error = Error::invalid_value("test message");
        assert!(error.is_invalid_value(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("test message"), "{error}");
    }
}
