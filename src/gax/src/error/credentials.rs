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

use std::error::Error;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::Arc;

/// A problem creating or using credentials.
///
/// Creating credentials may fail if the environment is incomplete, for
/// example, if no API key is configured. Using them may fail if a token
/// source is temporarily unavailable. The [is_transient][Self::is_transient]
/// flag distinguishes the two: transient errors may succeed on a later
/// attempt, the client libraries never retry them on their own.
///
/// # Example
/// ```
/// # use google_cloud_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(true, "simulated transient error");
/// assert!(err.is_transient());
/// assert!(err.to_string().contains("simulated transient error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    source: CredentialsErrorImpl,
}

#[derive(Clone, Debug)]
enum CredentialsErrorImpl {
    SimpleMessage(String),
    Source(Arc<dyn Error + Send + Sync>),
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping `source`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_gax::error::{CredentialsError, Error};
    /// let err = CredentialsError::new(false, Error::other("simulated permanent error"));
    /// assert!(!err.is_transient());
    /// assert!(err.to_string().contains("simulated permanent error"));
    /// ```
    pub fn new<T>(is_transient: bool, source: T) -> Self
    where
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            source: CredentialsErrorImpl::Source(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            source: CredentialsErrorImpl::SimpleMessage(message.into()),
        }
    }

    /// Returns true if a later attempt may succeed.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            CredentialsErrorImpl::SimpleMessage(_) => None,
            CredentialsErrorImpl::Source(source) => Some(source.as_ref()),
        }
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match &self.source {
            CredentialsErrorImpl::SimpleMessage(message) => {
                write!(f, "cannot create access token, {msg}, source:{message}")
            }
            CredentialsErrorImpl::Source(source) => {
                write!(f, "cannot create access token, {msg}, source:{source}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true, TRANSIENT_MSG)]
    #[test_case(false, PERMANENT_MSG)]
    fn from_msg(transient: bool, want: &str) {
        let error = CredentialsError::from_msg(transient, "test-only-err-123");
        assert_eq!(error.is_transient(), transient, "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(want), "{got}");
    }

    #[test_case(true, TRANSIENT_MSG)]
    #[test_case(false, PERMANENT_MSG)]
    fn new(transient: bool, want: &str) {
        let source = wire::CodecError::InvalidTimestamp {
            path: "$.expireTime".to_string(),
            value: "tomorrow".to_string(),
        };
        let error = CredentialsError::new(transient, source);
        assert_eq!(error.is_transient(), transient, "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wire::CodecError>());
        assert!(matches!(got, Some(e) if e.is_invalid_timestamp()), "{error:?}");
        let got = error.to_string();
        assert!(got.contains("tomorrow"), "{got}");
        assert!(got.contains(want), "{got}");
    }
}
