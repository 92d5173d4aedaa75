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

//! Wire types for Google Cloud REST APIs.
//!
//! Google REST APIs use JSON on the wire, but some fields do not round-trip
//! cleanly through JSON numbers and strings:
//!
//! - timestamps are sent as RFC 3339 strings,
//! - 64-bit integers are sent as decimal strings, since JSON numbers lose
//!   precision above 2^53,
//! - binary blobs are sent as standard base64 strings.
//!
//! This crate provides two ways to convert between the wire representation
//! and richer local types. Statically typed messages use the [serde_with]
//! adapters ([Timestamp], [I64], [U64], [Base64]). Schema-driven callers use
//! [encode] and [decode], which walk a [Value] tree guided by a [Schema].
//! Both paths share the same conversion rules.
//!
//! # Example
//! ```
//! use google_cloud_wire::{FieldType, Schema, Value, decode, encode};
//! # fn sample() -> Result<(), google_cloud_wire::CodecError> {
//! let schema = Schema::new()
//!     .field("failureCount", FieldType::Int64)
//!     .field("createTime", FieldType::Timestamp);
//! let local = decode(serde_json::json!({"failureCount": "42"}), &schema)?;
//! assert_eq!(local.get("failureCount").and_then(Value::as_integer), Some(42));
//! let wire = encode(&local, &schema)?;
//! assert_eq!(wire, serde_json::json!({"failureCount": "42"}));
//! # Ok(()) }
//! ```

mod blob;
pub use blob::Base64;
mod codec;
pub use codec::{decode, encode};
mod duration;
pub use duration::Duration;
mod empty;
pub use empty::Empty;
pub mod error;
pub use error::CodecError;
mod integer;
pub use integer::{I64, U64};
mod schema;
pub use schema::{FieldType, Schema};
mod timestamp;
pub use timestamp::Timestamp;
mod value;
pub use value::{Map, Value};

/// Formats a timestamp in the canonical wire format.
///
/// Returns `None` if the value is outside the range supported by Google
/// APIs, that is, years 1 through 9999.
pub fn format_timestamp(value: time::OffsetDateTime) -> Option<String> {
    timestamp::format(value)
}

/// Parses a timestamp from its wire format.
pub fn parse_timestamp(value: &str) -> Option<time::OffsetDateTime> {
    timestamp::parse(value)
}
