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

/// A length of time, in seconds.
///
/// Durations are plain JSON numbers on the wire. The type exists so that
/// fields holding a duration are not confused with other numeric fields.
/// When reading, the `"<seconds>s"` string form emitted by some Google
/// services is also accepted.
///
/// # Example
/// ```
/// # use google_cloud_wire::Duration;
/// let d = Duration::from_seconds(1200.0);
/// assert_eq!(serde_json::to_value(d).unwrap(), serde_json::json!(1200));
/// let d: Duration = serde_json::from_value(serde_json::json!("1.5s")).unwrap();
/// assert_eq!(d.seconds(), 1.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Duration(f64);

impl Duration {
    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    pub const fn seconds(&self) -> f64 {
        self.0
    }

    /// Parses the `"<seconds>s"` form.
    pub(crate) fn parse(value: &str) -> Option<Self> {
        let seconds = value.strip_suffix('s')?.parse::<f64>().ok()?;
        seconds.is_finite().then_some(Self(seconds))
    }

    pub(crate) fn from_number(value: &serde_json::Number) -> Option<Self> {
        value.as_f64().filter(|s| s.is_finite()).map(Self)
    }

    pub(crate) fn to_number(self) -> Option<serde_json::Number> {
        match self.0 {
            s if s.fract() == 0.0 && s.abs() < i64::MAX as f64 => {
                Some(serde_json::Number::from(s as i64))
            }
            s => serde_json::Number::from_f64(s),
        }
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self(value.as_secs_f64())
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = std::time::TryFromFloatSecsError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        std::time::Duration::try_from_secs_f64(value.0)
    }
}

impl serde::Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::Error as _;
        match self.to_number() {
            Some(n) => n.serialize(serializer),
            None => Err(S::Error::custom(format!("invalid duration: {}", self.0))),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(DurationVisitor)
    }
}

struct DurationVisitor;

impl serde::de::Visitor<'_> for DurationVisitor {
    type Value = Duration;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a duration in seconds")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Duration, E>
    where
        E: serde::de::Error,
    {
        Ok(Duration(value as f64))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Duration, E>
    where
        E: serde::de::Error,
    {
        Ok(Duration(value as f64))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Duration, E>
    where
        E: serde::de::Error,
    {
        Ok(Duration(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Duration, E>
    where
        E: serde::de::Error,
    {
        Duration::parse(value)
            .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(value), &self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use test_case::test_case;

    #[test_case(Duration::from_seconds(0.0), json!(0))]
    #[test_case(Duration::from_seconds(1200.0), json!(1200))]
    #[test_case(Duration::from_seconds(-5.0), json!(-5))]
    #[test_case(Duration::from_seconds(1.5), json!(1.5))]
    fn serialize(input: Duration, want: Value) -> Result<()> {
        let got = serde_json::to_value(input)?;
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Duration>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test_case(json!(7200), 7200.0)]
    #[test_case(json!(0.25), 0.25)]
    #[test_case(json!("1200s"), 1200.0)]
    #[test_case(json!("0.5s"), 0.5)]
    #[test_case(json!("-3s"), -3.0)]
    fn deserialize(input: Value, want: f64) -> Result<()> {
        let got = serde_json::from_value::<Duration>(input)?;
        assert_eq!(got.seconds(), want);
        Ok(())
    }

    #[test_case(json!("1200"))]
    #[test_case(json!("abcs"))]
    #[test_case(json!("infs"))]
    #[test_case(json!(true))]
    fn deserialize_error(input: Value) {
        let got = serde_json::from_value::<Duration>(input.clone());
        assert!(got.is_err(), "{input:?} => {got:?}");
    }

    #[test]
    fn std_conversions() -> Result<()> {
        let d = Duration::from(std::time::Duration::from_millis(1500));
        assert_eq!(d.seconds(), 1.5);
        let std = std::time::Duration::try_from(d)?;
        assert_eq!(std, std::time::Duration::from_millis(1500));
        assert!(std::time::Duration::try_from(Duration::from_seconds(-1.0)).is_err());
        Ok(())
    }
}
