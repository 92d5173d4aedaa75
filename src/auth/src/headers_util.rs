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

use crate::Result;
use crate::credentials::{QUOTA_PROJECT_KEY, invalid_header};
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};

pub(crate) const API_KEY_HEADER_KEY: &str = "x-goog-api-key";

/// Headers for an `Authorization: Bearer ...` token.
pub(crate) fn build_bearer_headers(
    token: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    build_headers(AUTHORIZATION, &format!("Bearer {token}"), quota_project_id)
}

/// Headers for an API key.
pub(crate) fn build_api_key_headers(
    api_key: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    build_headers(
        HeaderName::from_static(API_KEY_HEADER_KEY),
        api_key,
        quota_project_id,
    )
}

fn build_headers(
    header_name: HeaderName,
    secret: &str,
    quota_project_id: &Option<String>,
) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(secret).map_err(invalid_header)?;
    value.set_sensitive(true);

    let mut header_map = HeaderMap::new();
    header_map.insert(header_name, value);

    if let Some(project) = quota_project_id {
        header_map.insert(
            HeaderName::from_static(QUOTA_PROJECT_KEY),
            HeaderValue::from_str(project).map_err(invalid_header)?,
        );
    }
    Ok(header_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None)]
    #[test_case(Some("test-project"))]
    fn bearer(quota: Option<&str>) -> anyhow::Result<()> {
        let quota = quota.map(str::to_string);
        let headers = build_bearer_headers("test-token", &quota)?;
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
        let got = headers
            .get(QUOTA_PROJECT_KEY)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        assert_eq!(got, quota);
        Ok(())
    }

    #[test]
    fn api_key() -> anyhow::Result<()> {
        let headers = build_api_key_headers("test-key", &None)?;
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(API_KEY_HEADER_KEY).unwrap();
        assert_eq!(value, HeaderValue::from_static("test-key"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn invalid_values() {
        let got = build_api_key_headers("bad\nkey", &None);
        assert!(matches!(got, Err(ref e) if !e.is_transient()), "{got:?}");
        let got = build_bearer_headers("token", &Some("bad\nproject".to_string()));
        assert!(matches!(got, Err(ref e) if !e.is_transient()), "{got:?}");
    }
}
