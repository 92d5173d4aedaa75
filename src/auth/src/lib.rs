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

//! Google APIs Client Libraries for Rust - Authentication Components
//!
//! This crate contains the credentials consumed by the generated clients.
//! A [credentials::Credentials] value is an opaque handle that produces the
//! headers attached to each request. The clients never inspect the headers,
//! they only forward them.
//!
//! [Authentication methods at Google] is a good introduction on the topic.
//!
//! [Authentication methods at Google]: https://cloud.google.com/docs/authentication

pub mod build_errors;
pub mod credentials;
pub mod errors;

pub(crate) mod headers_util;

/// A `Result` alias where the `Err` case is
/// `google_cloud_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
