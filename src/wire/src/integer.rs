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

//! Conversions for 64-bit integer fields.
//!
//! JSON numbers are IEEE doubles and cannot represent every 64-bit integer,
//! so Google APIs send these fields as decimal strings. When reading, both
//! strings and integral numbers are accepted.

use std::marker::PhantomData;

/// Parses a decimal string into an integer wide enough for `i64` and `u64`.
///
/// The accepted grammar is `[+-]?[0-9]+`, optionally followed by a fraction
/// made only of zeros, as in `"2.0"`. The digits are converted exactly.
pub(crate) fn parse(value: &str) -> Option<i128> {
    let integral = match value.split_once('.') {
        None => value,
        Some((integral, fraction)) => {
            if fraction.is_empty() || fraction.bytes().any(|b| b != b'0') {
                return None;
            }
            integral
        }
    };
    let digits = integral.strip_prefix(['+', '-']).unwrap_or(integral);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    integral.parse::<i128>().ok()
}

/// Converts an integral, finite double.
pub(crate) fn from_f64(value: f64) -> Option<i128> {
    const LIMIT: f64 = 1e30;
    (value.is_finite() && value.fract() == 0.0 && value.abs() < LIMIT).then_some(value as i128)
}

/// Converts a JSON number into an integer, if it is integral.
pub(crate) fn from_number(value: &serde_json::Number) -> Option<i128> {
    value
        .as_i64()
        .map(i128::from)
        .or_else(|| value.as_u64().map(i128::from))
        .or_else(|| value.as_f64().and_then(from_f64))
}

pub(crate) fn fits_i64(value: i128) -> bool {
    i64::try_from(value).is_ok()
}

pub(crate) fn fits_u64(value: i128) -> bool {
    u64::try_from(value).is_ok()
}

/// A [serde_with] adapter for `i64` fields sent as decimal strings.
pub struct I64;

/// A [serde_with] adapter for `u64` fields sent as decimal strings.
pub struct U64;

macro_rules! impl_adapter {
    ($adapter: ident, $t: ty, $msg: literal) => {
        impl serde_with::SerializeAs<$t> for $adapter {
            fn serialize_as<S>(source: &$t, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(source)
            }
        }

        impl<'de> serde_with::DeserializeAs<'de, $t> for $adapter {
            fn deserialize_as<D>(deserializer: D) -> Result<$t, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                deserializer.deserialize_any(IntegerVisitor::<$t>::new($msg))
            }
        }
    };
}

impl_adapter!(I64, i64, "a 64-bit signed integer");
impl_adapter!(U64, u64, "a 64-bit unsigned integer");

struct IntegerVisitor<T> {
    expecting: &'static str,
    target: PhantomData<T>,
}

impl<T> IntegerVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            target: PhantomData,
        }
    }

    fn convert<E, V>(&self, value: Option<i128>, original: V) -> Result<T, E>
    where
        T: TryFrom<i128>,
        E: serde::de::Error,
        V: std::fmt::Display,
    {
        value.and_then(|v| T::try_from(v).ok()).ok_or_else(|| {
            E::invalid_value(
                serde::de::Unexpected::Other(&original.to_string()),
                &self.expecting,
            )
        })
    }
}

impl<T> serde::de::Visitor<'_> for IntegerVisitor<T>
where
    T: TryFrom<i128>,
{
    type Value = T;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(self.expecting)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        self.convert(parse(value), value)
    }

    fn visit_i64<E>(self, value: i64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        self.convert(Some(value.into()), value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        self.convert(Some(value.into()), value)
    }

    fn visit_i128<E>(self, value: i128) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        self.convert(Some(value), value)
    }

    fn visit_f64<E>(self, value: f64) -> Result<T, E>
    where
        E: serde::de::Error,
    {
        self.convert(from_f64(value), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;

    #[test_case("42", Some(42))]
    #[test_case("-7", Some(-7))]
    #[test_case("+5", Some(5))]
    #[test_case("2.0", Some(2))]
    #[test_case("-3.000", Some(-3))]
    #[test_case("9007199254740993.0", Some(9007199254740993); "zero fraction beyond f64 precision")]
    #[test_case("1.0000000000000001", None; "fraction below f64 precision")]
    #[test_case("5e4", None; "exponent")]
    #[test_case("2.", None; "empty fraction")]
    #[test_case(".5", None; "empty integral")]
    #[test_case("-", None; "sign only")]
    #[test_case(" 7", None; "whitespace")]
    #[test_case("9007199254740993", Some(9007199254740993); "beyond f64 precision")]
    #[test_case("18446744073709551615", Some(u64::MAX as i128); "u64 max")]
    #[test_case("abc", None)]
    #[test_case("", None; "empty")]
    #[test_case("1.5", None; "fractional")]
    #[test_case("NaN", None)]
    #[test_case("inf", None)]
    fn parse_strings(input: &str, want: Option<i128>) {
        assert_eq!(parse(input), want, "{input}");
    }

    #[test_case(json!(0), 0)]
    #[test_case(json!("0"), 0; "zero string")]
    #[test_case(json!(-42), -42)]
    #[test_case(json!("-42"), -42; "negative string")]
    #[test_case(json!(3e5), 300_000)]
    #[test_case(json!(i64::MAX), i64::MAX; "max")]
    #[test_case(json!(i64::MAX.to_string()), i64::MAX; "max as string")]
    #[test_case(json!(i64::MIN), i64::MIN; "min")]
    #[test_case(json!(i64::MIN.to_string()), i64::MIN; "min as string")]
    #[test_case(json!("9007199254740993"), 9007199254740993; "beyond f64 precision")]
    fn i64_deser_and_ser(input: Value, want: i64) -> Result<()> {
        let got = I64::deserialize_as(input)?;
        assert_eq!(got, want);
        let serialized = I64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!(0), 0)]
    #[test_case(json!("42"), 42)]
    #[test_case(json!(u64::MAX), u64::MAX; "max")]
    #[test_case(json!(u64::MAX.to_string()), u64::MAX; "max as string")]
    fn u64_deser_and_ser(input: Value, want: u64) -> Result<()> {
        let got = U64::deserialize_as(input)?;
        assert_eq!(got, want);
        let serialized = U64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(want.to_string()));
        Ok(())
    }

    #[test_case(json!("abc"))]
    #[test_case(json!("1.5"))]
    #[test_case(json!(1.5))]
    #[test_case(json!("9223372036854775808"); "above i64 max")]
    #[test_case(json!("-9223372036854775809"); "below i64 min")]
    #[test_case(json!(true))]
    #[test_case(json!([]))]
    fn i64_errors(input: Value) {
        let got = I64::deserialize_as(input.clone());
        assert!(got.is_err(), "{input:?} => {got:?}");
    }

    #[test_case(json!(-1))]
    #[test_case(json!("-1"); "negative string")]
    #[test_case(json!("18446744073709551616"); "above u64 max")]
    fn u64_errors(input: Value) {
        let got = U64::deserialize_as(input.clone());
        assert!(got.is_err(), "{input:?} => {got:?}");
    }
}
