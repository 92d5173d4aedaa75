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

/// The response of methods that return no data, such as most deletes.
///
/// Services send `{}`, or no content at all, for these methods. Any fields
/// in the payload are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Empty {}

impl Empty {
    /// The (empty) schema of this message.
    pub fn schema() -> crate::Schema {
        crate::Schema::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use test_case::test_case;

    #[test]
    fn serialize() -> Result<()> {
        assert_eq!(serde_json::to_value(Empty::default())?, json!({}));
        assert!(Empty::schema().is_empty());
        Ok(())
    }

    #[test_case(json!({}))]
    #[test_case(json!({"kind": "youtubeAnalytics#emptyResponse"}); "unknown fields")]
    fn deserialize(input: Value) -> Result<()> {
        let got = serde_json::from_value::<Empty>(input)?;
        assert_eq!(got, Empty::default());
        Ok(())
    }
}
