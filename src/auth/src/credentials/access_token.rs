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

//! Access token credentials.
//!
//! Applications that obtain an OAuth2 access token by other means can send it
//! as a bearer token. These credentials do not refresh the token, once it
//! expires the service rejects the requests with `UNAUTHENTICATED`.

use crate::credentials::{
    CacheableResource, Credentials, CredentialsProvider, DEFAULT_UNIVERSE_DOMAIN, EntityTag,
    not_modified_or,
};
use crate::headers_util::build_bearer_headers;
use crate::Result;
use http::{Extensions, HeaderMap};
use std::sync::Arc;

struct AccessTokenCredentials {
    token: String,
    quota_project_id: Option<String>,
    entity_tag: EntityTag,
}

impl std::fmt::Debug for AccessTokenCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessTokenCredentials")
            .field("token", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

/// A builder for bearer token credentials.
///
/// # Example
/// ```
/// # use google_cloud_auth::credentials::access_token::Builder;
/// let credentials = Builder::new("ya29.my-access-token")
///     .with_quota_project_id("my-project")
///     .build();
/// ```
#[derive(Debug)]
pub struct Builder {
    token: String,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder with the given access token.
    pub fn new<T: Into<String>>(token: T) -> Self {
        Self {
            token: token.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(AccessTokenCredentials {
                token: self.token,
                quota_project_id: self.quota_project_id,
                entity_tag: EntityTag::new(),
            }),
        }
    }
}

impl CredentialsProvider for AccessTokenCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        not_modified_or(&self.entity_tag, &extensions, || {
            build_bearer_headers(&self.token, &self.quota_project_id)
        })
    }

    async fn universe_domain(&self) -> Option<String> {
        Some(DEFAULT_UNIVERSE_DOMAIN.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::QUOTA_PROJECT_KEY;
    use crate::credentials::tests::get_headers_from_cache;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;

    #[tokio::test]
    async fn bearer_headers() -> anyhow::Result<()> {
        let creds = Builder::new("test-token").build();
        let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn quota_project() -> anyhow::Result<()> {
        let creds = Builder::new("test-token")
            .with_quota_project_id("test-project")
            .build();
        let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(QUOTA_PROJECT_KEY),
            Some(&HeaderValue::from_static("test-project"))
        );
        Ok(())
    }

    #[test]
    fn debug_censors_token() {
        let creds = Builder::new("super-secret-token").build();
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret-token"), "{fmt}");
    }
}
