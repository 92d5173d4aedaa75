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

//! Types and functions to work with [Credentials].
//!
//! The generated clients consume a [Credentials] value and call it once per
//! request to obtain the authentication headers. Three kinds of credentials
//! are provided:
//!
//! - [anonymous]: no authentication headers.
//! - [api_key_credentials]: an API key sent in the `x-goog-api-key` header.
//! - [access_token]: a bearer token obtained by the application.
//!
//! Applications with other needs can implement [dynamic::CredentialsProvider]
//! and convert their type into [Credentials].
//!
//! [Credentials]: https://cloud.google.com/docs/authentication#credentials

use crate::build_errors::Error as BuilderError;
use crate::{Result, errors};
use http::{Extensions, HeaderMap};
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod access_token;
pub mod anonymous;
pub mod api_key_credentials;

pub(crate) const QUOTA_PROJECT_KEY: &str = "x-goog-user-project";
pub(crate) const DEFAULT_UNIVERSE_DOMAIN: &str = "googleapis.com";

/// The environment variable holding the default API key.
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// The environment variable holding the default quota project.
pub const QUOTA_PROJECT_VAR: &str = "GOOGLE_CLOUD_QUOTA_PROJECT";

/// The result type for credentials builders.
pub type BuildResult<T> = std::result::Result<T, BuilderError>;

static ENTITY_TAG_GENERATOR: AtomicU64 = AtomicU64::new(0);

/// An opaque tag identifying a version of the credential headers.
///
/// Callers may cache the headers and present the tag on the next call. If
/// the headers have not changed the credentials return
/// [CacheableResource::NotModified].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct EntityTag(u64);

impl EntityTag {
    pub fn new() -> Self {
        let value = ENTITY_TAG_GENERATOR.fetch_add(1, Ordering::SeqCst);
        Self(value)
    }
}

/// A resource, such as the authentication headers, that callers may cache.
#[derive(Clone, PartialEq, Debug)]
pub enum CacheableResource<T> {
    NotModified,
    New { entity_tag: EntityTag, data: T },
}

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents a [Credentials] used to obtain the auth request headers.
///
/// # Example
/// ```
/// # use google_cloud_auth::credentials::{api_key_credentials, CacheableResource};
/// # use http::Extensions;
/// # tokio_test::block_on(async {
/// let credentials = api_key_credentials::Builder::new("my-api-key").build();
/// let headers = credentials.headers(Extensions::new()).await?;
/// if let CacheableResource::New { data, .. } = headers {
///     assert!(data.get("x-goog-api-key").is_some());
/// }
/// # Ok::<(), anyhow::Error>(())
/// # });
/// ```
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
#[derive(Clone, Debug)]
pub struct Credentials {
    // Using an `Arc` makes the credentials cheap to clone. The clients share
    // one instance across all their requests.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to a request.
    ///
    /// If `extensions` contains the [EntityTag] of the current headers the
    /// result is [CacheableResource::NotModified].
    pub async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        self.inner.headers(extensions).await
    }

    /// The universe domain for these credentials, `googleapis.com` by default.
    pub async fn universe_domain(&self) -> Option<String> {
        self.inner.universe_domain().await
    }
}

/// Produces the headers used to authenticate requests.
///
/// Applications rarely implement this trait, the exception being tests that
/// need custom credentials.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    fn headers(
        &self,
        extensions: Extensions,
    ) -> impl Future<Output = Result<CacheableResource<HeaderMap>>> + Send;

    /// Retrieves the universe domain associated with the credentials, if any.
    fn universe_domain(&self) -> impl Future<Output = Option<String>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use super::{CacheableResource, Extensions, HeaderMap};

    /// The object-safe version of [super::CredentialsProvider].
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;

        async fn universe_domain(&self) -> Option<String> {
            Some(super::DEFAULT_UNIVERSE_DOMAIN.to_string())
        }
    }

    /// The public trait implements the dyn-compatible trait.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
            T::headers(self, extensions).await
        }
        async fn universe_domain(&self) -> Option<String> {
            T::universe_domain(self).await
        }
    }
}

/// A builder for the default credentials.
///
/// The default credentials use the API key in the `GOOGLE_API_KEY`
/// environment variable, and the quota project in
/// `GOOGLE_CLOUD_QUOTA_PROJECT`, if set.
///
/// # Example
/// ```no_run
/// # use google_cloud_auth::credentials::Builder;
/// let credentials = Builder::default().build()?;
/// # Ok::<(), google_cloud_auth::build_errors::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    quota_project_id: Option<String>,
}

impl Builder {
    /// Sets the [quota project], overriding the environment.
    ///
    /// [quota project]: https://cloud.google.com/docs/quotas/quota-project
    pub fn with_quota_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.quota_project_id = Some(v.into());
        self
    }

    /// Returns the default [Credentials].
    ///
    /// Fails if no API key is configured, or if the key cannot be used as a
    /// header value.
    pub fn build(self) -> BuildResult<Credentials> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BuilderError::not_found(API_KEY_VAR))?;
        http::HeaderValue::from_str(&api_key).map_err(BuilderError::invalid_value)?;
        let quota_project_id = self.quota_project_id.or_else(|| {
            std::env::var(QUOTA_PROJECT_VAR)
                .ok()
                .filter(|v| !v.is_empty())
        });
        let builder = api_key_credentials::Builder::new(api_key);
        let builder = match quota_project_id {
            Some(q) => builder.with_quota_project_id(q),
            None => builder,
        };
        Ok(builder.build())
    }
}

pub(crate) fn not_modified_or<F>(
    current: &EntityTag,
    extensions: &Extensions,
    headers: F,
) -> Result<CacheableResource<HeaderMap>>
where
    F: FnOnce() -> Result<HeaderMap>,
{
    match extensions.get::<EntityTag>() {
        Some(tag) if current.eq(tag) => Ok(CacheableResource::NotModified),
        _ => Ok(CacheableResource::New {
            entity_tag: current.clone(),
            data: headers()?,
        }),
    }
}

pub(crate) fn invalid_header(e: http::header::InvalidHeaderValue) -> errors::CredentialsError {
    errors::permanent(e)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    type TestResult = anyhow::Result<()>;

    pub(crate) fn get_headers_from_cache(
        headers: CacheableResource<HeaderMap>,
    ) -> Result<HeaderMap> {
        match headers {
            CacheableResource::New { data, .. } => Ok(data),
            CacheableResource::NotModified => Err(errors::permanent_from_msg(
                "expecting headers to be present",
            )),
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        Provider {}

        impl CredentialsProvider for Provider {
            async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;
            async fn universe_domain(&self) -> Option<String>;
        }
    }

    #[test]
    fn entity_tags_are_unique() {
        let a = EntityTag::new();
        let b = EntityTag::new();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[tokio::test]
    async fn from_provider() -> TestResult {
        let mut mock = MockProvider::new();
        mock.expect_headers().return_once(|_| {
            let mut headers = HeaderMap::new();
            headers.insert("x-test", http::HeaderValue::from_static("value"));
            Ok(CacheableResource::New {
                entity_tag: EntityTag::default(),
                data: headers,
            })
        });
        mock.expect_universe_domain()
            .return_once(|| Some("example.com".to_string()));

        let credentials = Credentials::from(mock);
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get("x-test"),
            Some(&http::HeaderValue::from_static("value"))
        );
        assert_eq!(
            credentials.universe_domain().await.as_deref(),
            Some("example.com")
        );
        Ok(())
    }

    #[tokio::test]
    async fn provider_error() {
        let mut mock = MockProvider::new();
        mock.expect_headers()
            .return_once(|_| Err(errors::CredentialsError::from_msg(true, "try again")));
        let credentials = Credentials::from(mock);
        let got = credentials.headers(Extensions::new()).await;
        assert!(matches!(got, Err(ref e) if e.is_transient()), "{got:?}");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_credentials_api_key() -> TestResult {
        let _k = ScopedEnv::set(API_KEY_VAR, "test-api-key");
        let _q = ScopedEnv::remove(QUOTA_PROJECT_VAR);
        let credentials = Builder::default().build()?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get("x-goog-api-key").unwrap();
        assert_eq!(value, http::HeaderValue::from_static("test-api-key"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_credentials_quota_project() -> TestResult {
        let _k = ScopedEnv::set(API_KEY_VAR, "test-api-key");
        let _q = ScopedEnv::set(QUOTA_PROJECT_VAR, "env-project");
        let credentials = Builder::default().build()?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(QUOTA_PROJECT_KEY),
            Some(&http::HeaderValue::from_static("env-project"))
        );

        let credentials = Builder::default()
            .with_quota_project_id("option-project")
            .build()?;
        let headers = get_headers_from_cache(credentials.headers(Extensions::new()).await?)?;
        assert_eq!(
            headers.get(QUOTA_PROJECT_KEY),
            Some(&http::HeaderValue::from_static("option-project"))
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_credentials_missing() {
        let _k = ScopedEnv::remove(API_KEY_VAR);
        let got = Builder::default().build();
        assert!(matches!(got, Err(ref e) if e.is_not_found()), "{got:?}");

        let _k = ScopedEnv::set(API_KEY_VAR, "");
        let got = Builder::default().build();
        assert!(matches!(got, Err(ref e) if e.is_not_found()), "{got:?}");
    }

    #[test]
    #[serial_test::serial]
    fn default_credentials_invalid() {
        let _k = ScopedEnv::set(API_KEY_VAR, "bad\nkey");
        let got = Builder::default().build();
        assert!(matches!(got, Err(ref e) if e.is_invalid_value()), "{got:?}");
    }
}
