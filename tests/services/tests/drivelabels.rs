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

#[cfg(test)]
mod tests {
    use google_cloud_drivelabels_v2::{client::DriveLabels, model, schema};
    use google_cloud_wire::{Value, decode};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    async fn test_client(server: &Server) -> Result<DriveLabels> {
        let client = DriveLabels::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn create_label_integer_field() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/labels"),
                request::query(url_decoded(contains(("useAdminAccess", "true")))),
                request::query(url_decoded(not(contains(("languageCode", any()))))),
                request::body(json_decoded(eq(json!({
                    "labelType": "ADMIN",
                    "properties": {"title": "Priority"},
                    "fields": [{
                        "properties": {"displayName": "Score"},
                        "integerOptions": {
                            "minValue": "-9223372036854775808",
                            "maxValue": "9223372036854775807",
                        },
                    }],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "labels/l1",
                "revisionId": "1",
                "createTime": "2023-05-01T00:00:00Z",
                "fields": [{
                    "id": "f1",
                    "integerOptions": {"minValue": "-9223372036854775808", "maxValue": 100},
                }],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create_label()
            .set_use_admin_access(true)
            .set_label(
                model::Label::new()
                    .set_label_type(model::label_type::ADMIN)
                    .set_properties(model::LabelProperties::new().set_title("Priority"))
                    .set_fields([model::Field::new()
                        .set_properties(model::FieldProperties::new().set_display_name("Score"))
                        .set_integer_options(
                            model::IntegerOptions::new()
                                .set_min_value(i64::MIN)
                                .set_max_value(i64::MAX),
                        )]),
            )
            .send()
            .await?;
        assert_eq!(got.create_time, Some(datetime!(2023-05-01 00:00:00 UTC)));
        let options = got
            .fields
            .first()
            .and_then(|f| f.integer_options.clone())
            .expect("the field should have integer options");
        assert_eq!(options.min_value, Some(i64::MIN));
        assert_eq!(options.max_value, Some(100));
        Ok(())
    }

    #[tokio::test]
    async fn delete_label_write_control() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v2/labels/l1"),
                request::query(url_decoded(contains(("writeControl.requiredRevisionId", "7")))),
                request::query(url_decoded(not(contains(("useAdminAccess", any()))))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client
            .delete_label()
            .set_name("labels/l1")
            .set_write_control(model::WriteControl::new().set_required_revision_id("7"))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn publish_label_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/labels/l1:publish"),
                request::body(json_decoded(eq(json!({
                    "writeControl": {"requiredRevisionId": "7"},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "labels/l1",
                "publishTime": "2023-05-01T08:00:00+08:00",
                "lifecycle": {"state": "PUBLISHED"},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .publish_label()
            .set_name("labels/l1")
            .set_write_control(model::WriteControl::new().set_required_revision_id("7"))
            .send()
            .await?;
        assert_eq!(got.publish_time, Some(datetime!(2023-05-01 00:00:00 UTC)));
        Ok(())
    }

    #[tokio::test]
    async fn list_labels_by_item() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/labels"),
                request::query(url_decoded(contains(("view", "LABEL_VIEW_FULL")))),
                request::query(url_decoded(contains(("pageSize", "2")))),
                request::query(url_decoded(not(contains(("pageToken", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "labels": [{"name": "labels/a"}, {"name": "labels/b"}],
                "nextPageToken": "t2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/labels"),
                request::query(url_decoded(contains(("pageToken", "t2")))),
            ])
            .respond_with(json_encoded(json!({"labels": [{"name": "labels/c"}]}))),
        );

        let client = test_client(&server).await?;
        let mut items = client
            .list_labels()
            .set_view(model::label_view::LABEL_VIEW_FULL)
            .set_page_size(2)
            .by_item();
        let mut names = Vec::new();
        while let Some(label) = items.next().await {
            names.extend(label?.name);
        }
        assert_eq!(names, vec!["labels/a", "labels/b", "labels/c"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_label_limits_query_name() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/limits/label"),
                request::query(url_decoded(contains(("name", "limits/label")))),
            ])
            .respond_with(json_encoded(json!({
                "name": "limits/label",
                "maxFields": 50,
                "fieldLimits": {"integerLimits": {
                    "minValue": "-9007199254740993",
                    "maxValue": "9007199254740993",
                }},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_label_limits()
            .set_name("limits/label")
            .send()
            .await?;
        let limits = got
            .field_limits
            .and_then(|f| f.integer_limits)
            .expect("the response should include the integer limits");
        assert_eq!(limits.min_value, Some(-9007199254740993));
        assert_eq!(limits.max_value, Some(9007199254740993));
        Ok(())
    }

    #[tokio::test]
    async fn get_label_missing_name() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.get_label().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = client.get_label().set_name("").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[test]
    fn label_limits_schema() -> Result<()> {
        let local = decode(
            json!({"fieldLimits": {"integerLimits": {"maxValue": "9007199254740993"}}}),
            &schema::label_limits(),
        )?;
        let max = local
            .get("fieldLimits")
            .and_then(|f| f.get("integerLimits"))
            .and_then(|l| l.get("maxValue"))
            .and_then(Value::as_integer);
        assert_eq!(max, Some(9007199254740993));

        let err = decode(
            json!({"fieldLimits": {"integerLimits": {"maxValue": "9223372036854775808"}}}),
            &schema::label_limits(),
        )
        .unwrap_err();
        assert!(err.is_invalid_integer_format(), "{err:?}");
        assert_eq!(err.path(), "$.fieldLimits.integerLimits.maxValue");
        Ok(())
    }
}
