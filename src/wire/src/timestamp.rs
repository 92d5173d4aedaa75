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

//! Conversions for timestamp fields.
//!
//! On the wire timestamps are RFC 3339 strings in UTC. Google services reject
//! values outside years 1 through 9999, so both directions enforce that range.

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// 0001-01-01T00:00:00Z.
const MIN_SECONDS: i64 = -62135596800;
/// 9999-12-31T23:59:59Z.
const MAX_SECONDS: i64 = 253402300799;

fn in_range(value: &OffsetDateTime) -> bool {
    (MIN_SECONDS..=MAX_SECONDS).contains(&value.unix_timestamp())
}

/// Formats `value` as `YYYY-MM-DDTHH:MM:SS.sssZ`.
///
/// At least three fractional digits are always present. Six or nine digits
/// are used when the value has sub-millisecond precision.
pub(crate) fn format(value: OffsetDateTime) -> Option<String> {
    if !in_range(&value) {
        return None;
    }
    let utc = value.to_offset(UtcOffset::UTC);
    let fraction = match utc.nanosecond() {
        n if n % 1_000_000 == 0 => format!("{:03}", n / 1_000_000),
        n if n % 1_000 == 0 => format!("{:06}", n / 1_000),
        n => format!("{n:09}"),
    };
    Some(format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{fraction}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
    ))
}

/// Parses an RFC 3339 string, normalizing the result to UTC.
pub(crate) fn parse(value: &str) -> Option<OffsetDateTime> {
    let parsed = OffsetDateTime::parse(value, &Rfc3339).ok()?;
    in_range(&parsed).then(|| parsed.to_offset(UtcOffset::UTC))
}

/// A [serde_with] adapter for [time::OffsetDateTime] fields sent as RFC 3339
/// strings.
///
/// # Example
/// ```
/// # use google_cloud_wire::Timestamp;
/// #[serde_with::serde_as]
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Message {
///     #[serde_as(as = "Option<Timestamp>")]
///     create_time: Option<time::OffsetDateTime>,
/// }
/// ```
pub struct Timestamp;

impl serde_with::SerializeAs<OffsetDateTime> for Timestamp {
    fn serialize_as<S>(source: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error as _;
        let formatted = format(*source)
            .ok_or_else(|| S::Error::custom(format!("timestamp out of range: {source}")))?;
        serializer.serialize_str(&formatted)
    }
}

impl<'de> serde_with::DeserializeAs<'de, OffsetDateTime> for Timestamp {
    fn deserialize_as<D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl serde::de::Visitor<'_> for TimestampVisitor {
    type Value = OffsetDateTime;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("an RFC 3339 timestamp between years 1 and 9999")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        parse(value).ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;
    use time::macros::datetime;

    #[test_case(datetime!(2023-05-01 00:00:00 UTC), "2023-05-01T00:00:00.000Z")]
    #[test_case(datetime!(2023-05-01 12:34:56.789 UTC), "2023-05-01T12:34:56.789Z")]
    #[test_case(datetime!(2023-05-01 12:34:56.000123 UTC), "2023-05-01T12:34:56.000123Z")]
    #[test_case(datetime!(2023-05-01 12:34:56.000000007 UTC), "2023-05-01T12:34:56.000000007Z")]
    #[test_case(datetime!(0001-01-01 00:00:00 UTC), "0001-01-01T00:00:00.000Z"; "min")]
    #[test_case(datetime!(9999-12-31 23:59:59.999999999 UTC), "9999-12-31T23:59:59.999999999Z"; "max")]
    #[test_case(datetime!(2023-05-01 02:00:00 +02:00), "2023-05-01T00:00:00.000Z"; "offset normalized")]
    fn format_canonical(input: OffsetDateTime, want: &str) {
        assert_eq!(format(input).as_deref(), Some(want));
    }

    #[test_case(datetime!(0000-12-31 23:59:59 UTC))]
    #[test_case(datetime!(9999-12-31 23:59:59 -01:00))]
    fn format_out_of_range(input: OffsetDateTime) {
        assert_eq!(format(input), None, "{input}");
    }

    #[test_case("2023-05-01T00:00:00Z", datetime!(2023-05-01 00:00:00 UTC))]
    #[test_case("2023-05-01T00:00:00.000Z", datetime!(2023-05-01 00:00:00 UTC); "millis")]
    #[test_case("2023-05-01T05:30:00+05:30", datetime!(2023-05-01 00:00:00 UTC); "positive offset")]
    #[test_case("2023-04-30T20:00:00-04:00", datetime!(2023-05-01 00:00:00 UTC); "negative offset")]
    #[test_case("2023-05-01T00:00:00.123456789Z", datetime!(2023-05-01 00:00:00.123456789 UTC); "nanos")]
    fn parse_valid(input: &str, want: OffsetDateTime) {
        let got = parse(input);
        assert_eq!(got, Some(want), "{input}");
        assert_eq!(got.map(|t| t.offset()), Some(UtcOffset::UTC), "{input}");
    }

    #[test_case(""; "empty")]
    #[test_case("2023-05-01"; "date only")]
    #[test_case("yesterday")]
    #[test_case("2023-13-01T00:00:00Z"; "bad month")]
    #[test_case("2023-05-01T00:00:00"; "missing offset")]
    fn parse_invalid(input: &str) {
        assert_eq!(parse(input), None, "{input}");
    }

    #[test_case(datetime!(2023-05-01 00:00:00 UTC))]
    #[test_case(datetime!(1970-01-01 00:00:00 UTC))]
    #[test_case(datetime!(1969-07-20 20:17:40.5 UTC))]
    #[test_case(datetime!(2038-01-19 03:14:08.000001 UTC))]
    fn roundtrip(input: OffsetDateTime) -> Result<()> {
        let wire = Timestamp::serialize_as(&input, serde_json::value::Serializer)?;
        assert!(wire.is_string(), "{wire:?}");
        let got = Timestamp::deserialize_as(wire)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test_case(json!("not a timestamp"))]
    #[test_case(json!(1682899200))]
    #[test_case(json!(null))]
    fn deserialize_error(input: Value) {
        let got = Timestamp::deserialize_as(input.clone());
        assert!(got.is_err(), "{input:?} => {got:?}");
    }

    #[test]
    fn serialize_out_of_range() {
        let input = datetime!(0000-01-01 00:00:00 UTC);
        let got = Timestamp::serialize_as(&input, serde_json::value::Serializer);
        assert!(got.is_err(), "{got:?}");
    }
}
