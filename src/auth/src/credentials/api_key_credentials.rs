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

//! [API Key] Credentials type.
//!
//! An API key associates each request with a project for billing and quota
//! purposes. Keep API keys secret: they are marked as sensitive headers so
//! they are omitted from debug output.
//!
//! [API Key]: https://cloud.google.com/api-keys/docs/overview

use crate::credentials::{
    CacheableResource, Credentials, CredentialsProvider, DEFAULT_UNIVERSE_DOMAIN, EntityTag,
    not_modified_or,
};
use crate::headers_util::build_api_key_headers;
use crate::Result;
use http::{Extensions, HeaderMap};
use std::sync::Arc;

struct ApiKeyCredentials {
    api_key: String,
    quota_project_id: Option<String>,
    entity_tag: EntityTag,
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &"[censored]")
            .field("quota_project_id", &self.quota_project_id)
            .finish()
    }
}

/// A builder for credentials that authenticate using an [API key].
///
/// Only some Google APIs accept API keys.
///
/// [API key]: https://cloud.google.com/docs/authentication/api-keys-use
#[derive(Debug)]
pub struct Builder {
    api_key: String,
    quota_project_id: Option<String>,
}

impl Builder {
    /// Creates a new builder with the given API key.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_auth::credentials::api_key_credentials::Builder;
    /// let credentials = Builder::new("my-api-key").build();
    /// ```
    pub fn new<T: Into<String>>(api_key: T) -> Self {
        Self {
            api_key: api_key.into(),
            quota_project_id: None,
        }
    }

    /// Sets the [quota project] for these credentials.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_auth::credentials::api_key_credentials::Builder;
    /// let credentials = Builder::new("my-api-key")
    ///     .with_quota_project_id("my-project")
    ///     .build();
    /// ```
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, quota_project_id: T) -> Self {
        self.quota_project_id = Some(quota_project_id.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(ApiKeyCredentials {
                api_key: self.api_key,
                quota_project_id: self.quota_project_id,
                entity_tag: EntityTag::new(),
            }),
        }
    }
}

impl CredentialsProvider for ApiKeyCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        not_modified_or(&self.entity_tag, &extensions, || {
            build_api_key_headers(&self.api_key, &self.quota_project_id)
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
    use crate::headers_util::API_KEY_HEADER_KEY;
    use http::HeaderValue;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn debug_censors_key() {
        let creds = Builder::new("super-secret-api-key").build();
        let fmt = format!("{creds:?}");
        assert!(!fmt.contains("super-secret-api-key"), "{fmt}");
    }

    #[tokio::test]
    async fn create_api_key_credentials_basic() -> TestResult {
        let creds = Builder::new("test-api-key").build();
        let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
        let value = headers.get(API_KEY_HEADER_KEY).unwrap();

        assert_eq!(headers.len(), 1, "{headers:?}");
        assert_eq!(value, HeaderValue::from_static("test-api-key"));
        assert!(value.is_sensitive());
        assert_eq!(
            creds.universe_domain().await.as_deref(),
            Some(DEFAULT_UNIVERSE_DOMAIN)
        );
        Ok(())
    }

    #[tokio::test]
    async fn create_api_key_credentials_with_options() -> TestResult {
        let creds = Builder::new("test-api-key")
            .with_quota_project_id("qp-option")
            .build();
        let headers = get_headers_from_cache(creds.headers(Extensions::new()).await?)?;
        let api_key = headers.get(API_KEY_HEADER_KEY).unwrap();
        let quota_project = headers.get(QUOTA_PROJECT_KEY).unwrap();

        assert_eq!(headers.len(), 2, "{headers:?}");
        assert_eq!(api_key, HeaderValue::from_static("test-api-key"));
        assert!(api_key.is_sensitive());
        assert_eq!(quota_project, HeaderValue::from_static("qp-option"));
        assert!(!quota_project.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    async fn entity_tag() -> TestResult {
        let creds = Builder::new("test-api-key").build();
        let mut extensions = Extensions::new();
        let entity_tag = match creds.headers(extensions.clone()).await? {
            CacheableResource::New { entity_tag, .. } => entity_tag,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        extensions.insert(entity_tag);
        let got = creds.headers(extensions).await?;
        assert_eq!(got, CacheableResource::NotModified);

        let mut extensions = Extensions::new();
        extensions.insert(EntityTag::new());
        let got = creds.headers(extensions).await?;
        assert!(matches!(got, CacheableResource::New { .. }), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_key() {
        let creds = Builder::new("bad\nkey").build();
        let got = creds.headers(Extensions::new()).await;
        assert!(matches!(got, Err(ref e) if !e.is_transient()), "{got:?}");
    }
}
