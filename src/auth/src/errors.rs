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

//! Errors created when credentials cannot produce request headers.

pub use gax::error::CredentialsError;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
struct Message(String);

#[derive(thiserror::Error, Debug)]
#[error(transparent)]
struct Boxed(BoxError);

/// A permanent error: retrying the same operation fails the same way.
pub(crate) fn permanent<T>(source: T) -> CredentialsError
where
    T: Into<BoxError>,
{
    CredentialsError::new(false, Boxed(source.into()))
}

pub(crate) fn permanent_from_msg<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::new(false, Message(message.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn permanent_errors() {
        let e = permanent(http::header::HeaderValue::from_str("\n").unwrap_err());
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.source().is_some(), "{e:?}");

        let e = permanent_from_msg("test-only-err-123");
        assert!(!e.is_transient(), "{e:?}");
        assert!(e.to_string().contains("test-only-err-123"), "{e}");
    }
}
