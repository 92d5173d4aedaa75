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

//! Conversions for binary fields.
//!
//! Binary data uses the RFC 4648 standard alphabet, with padding. Decoding is
//! strict: non-alphabet characters and bad padding are rejected.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

pub(crate) fn encode(value: &[u8]) -> String {
    STANDARD.encode(value)
}

pub(crate) fn decode(value: &str) -> Result<bytes::Bytes, base64::DecodeError> {
    STANDARD.decode(value).map(bytes::Bytes::from)
}

/// A [serde_with] adapter for [bytes::Bytes] fields sent as base64 strings.
pub struct Base64;

impl serde_with::SerializeAs<bytes::Bytes> for Base64 {
    fn serialize_as<S>(source: &bytes::Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&encode(source))
    }
}

impl<'de> serde_with::DeserializeAs<'de, bytes::Bytes> for Base64 {
    fn deserialize_as<D>(deserializer: D) -> Result<bytes::Bytes, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error as _;
        let encoded = <String as serde::Deserialize>::deserialize(deserializer)?;
        decode(&encoded)
            .map_err(|e| D::Error::custom(format!("malformed base64 encoding: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;

    #[test_case(&[], ""; "empty")]
    #[test_case(&[0x00], "AA=="; "one byte")]
    #[test_case(&[0x00, 0x01], "AAE="; "two bytes")]
    #[test_case(&[0x00, 0x01, 0x02], "AAEC"; "three bytes")]
    #[test_case(&[0x00, 0x01, 0x02, 0x03], "AAECAw=="; "four bytes")]
    #[test_case(&[0xfb, 0xff, 0xbf], "+/+/"; "standard alphabet")]
    fn roundtrip(input: &[u8], want: &str) -> Result<()> {
        let bytes = bytes::Bytes::copy_from_slice(input);
        let wire = Base64::serialize_as(&bytes, serde_json::value::Serializer)?;
        assert_eq!(wire, json!(want));
        let got = Base64::deserialize_as(wire)?;
        assert_eq!(got, bytes);
        Ok(())
    }

    #[test_case("AA"; "missing padding")]
    #[test_case("A"; "truncated")]
    #[test_case("AA=A"; "bad padding")]
    #[test_case("-_-_"; "url safe alphabet")]
    #[test_case("AA EC"; "embedded space")]
    #[test_case("not base64!"; "punctuation")]
    fn decode_malformed(input: &str) {
        let got = decode(input);
        assert!(got.is_err(), "{input} => {got:?}");
    }

    #[test_case(json!("not base64!"))]
    #[test_case(json!(123))]
    fn deserialize_error(input: Value) {
        let got = Base64::deserialize_as(input.clone());
        assert!(got.is_err(), "{input:?} => {got:?}");
    }
}
