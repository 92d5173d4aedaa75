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

//! Helpers shared by the service client tests.
//!
//! Each test starts a local [httptest::Server] and points a client at it
//! with [endpoint]. The clients use the anonymous [credentials], so the
//! requests carry no authorization header.

use google_cloud_auth::credentials::{Credentials, anonymous};

pub type Result<T> = anyhow::Result<T>;

/// The base URL to reach `server`.
pub fn endpoint(server: &httptest::Server) -> String {
    format!("http://{}", server.addr())
}

pub fn credentials() -> Credentials {
    anonymous::Builder::new().build()
}
