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

//! Resolves the per-client settings used by [crate::http::ReqwestClient].

pub use auth::credentials::Credentials;
use gax::client_builder::Error as BuilderError;

/// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Returns true if the client configuration or `GOOGLE_CLOUD_RUST_LOGGING`
/// enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    config.tracing
        || std::env::var(LOGGING_VAR)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
}

/// Returns the base URL for a client.
///
/// The configured endpoint, if any, replaces `default_endpoint`. The result
/// has no trailing `/`, any path prefix in the endpoint is kept.
pub(crate) fn base_url(
    config: &ClientConfig,
    default_endpoint: &str,
) -> gax::client_builder::Result<String> {
    let endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint);
    let url = reqwest::Url::parse(endpoint).map_err(|e| BuilderError::endpoint(endpoint, e))?;
    match url.scheme() {
        "http" | "https" => Ok(endpoint.trim_end_matches('/').to_string()),
        scheme => Err(BuilderError::endpoint(
            endpoint,
            format!("unsupported scheme {scheme:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    const DEFAULT: &str = "https://datapipelines.googleapis.com/";

    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let mut config = ClientConfig::default();
        assert!(!tracing_enabled(&config));
        config.tracing = true;
        assert!(tracing_enabled(&config));
    }

    #[test_case("true", true)]
    #[test_case("TRUE", true)]
    #[test_case("false", false)]
    #[test_case("1", false)]
    #[serial_test::serial]
    fn env_tracing(value: &str, want: bool) {
        let _e = ScopedEnv::set(LOGGING_VAR, value);
        let config = ClientConfig::default();
        assert_eq!(tracing_enabled(&config), want, "{value}");
    }

    #[test]
    fn base_url_default() -> anyhow::Result<()> {
        let config = ClientConfig::default();
        assert_eq!(
            base_url(&config, DEFAULT)?,
            "https://datapipelines.googleapis.com"
        );
        Ok(())
    }

    #[test_case("http://127.0.0.1:8080", "http://127.0.0.1:8080")]
    #[test_case("http://127.0.0.1:8080/", "http://127.0.0.1:8080"; "trailing slash")]
    #[test_case("https://proxy.example.com/api/", "https://proxy.example.com/api"; "path prefix")]
    fn base_url_override(endpoint: &str, want: &str) -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.endpoint = Some(endpoint.to_string());
        assert_eq!(base_url(&config, DEFAULT)?, want);
        Ok(())
    }

    #[test_case("not a url")]
    #[test_case("ftp://example.com")]
    fn base_url_invalid(endpoint: &str) {
        let mut config = ClientConfig::default();
        config.endpoint = Some(endpoint.to_string());
        let err = base_url(&config, DEFAULT).unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }
}
