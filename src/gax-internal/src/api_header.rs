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

//! Telemetry header helpers.

/// The name of the telemetry header.
pub const X_GOOG_API_CLIENT: &str = "x-goog-api-client";

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize the `x-goog-api-client` header value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

pub const GAPIC: &str = "gapic";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    pub fn rest_header_value(&self) -> String {
        // `RUSTC_VERSION` may or may not start with "rustc ".
        let rustc_version = build_info::RUSTC_VERSION;
        let rustc_version = rustc_version
            .strip_prefix("rustc ")
            .unwrap_or(build_info::RUSTC_VERSION);
        let gax_version = build_info::PKG_VERSION;

        format!(
            "gl-rust/{rustc_version} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            self.library_type, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<String, String> {
        formatted
            .split(" ")
            .filter_map(|v| v.find('/').map(|i| v.split_at(i)))
            .map(|(k, v)| (k.to_string(), v[1..].to_string()))
            .collect()
    }

    #[test]
    fn format_rest() {
        let header = XGoogApiClient {
            name: "google-cloud-datapipelines-v1",
            version: "1.2.3",
            library_type: GAPIC,
        };
        let fields = breakdown(header.rest_header_value().as_str());

        assert_eq!(fields.get(GAPIC).map(String::as_str), Some("1.2.3"));
        assert_eq!(
            fields.get("gax").map(String::as_str),
            Some(build_info::PKG_VERSION)
        );
        let want = format!("{}-reqwest", build_info::PKG_VERSION);
        assert_eq!(fields.get("rest"), Some(&want), "{fields:?}");
        assert!(fields.get("grpc").is_none(), "{fields:?}");

        let got = fields.get("gl-rust");
        let want = build_info::RUSTC_VERSION;
        assert!(
            got.map(|s| want.contains(s.as_str()) && !s.is_empty())
                .unwrap_or(false),
            "mismatched rustc version {want} and {got:?}"
        );
    }
}
