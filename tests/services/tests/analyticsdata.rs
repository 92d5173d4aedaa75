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
    use google_cloud_analyticsdata_v1beta::{client::AnalyticsData, model, schema};
    use google_cloud_wire::{Value, decode, encode};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    async fn test_client(server: &Server) -> Result<AnalyticsData> {
        let client = AnalyticsData::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    fn views_above(threshold: i64) -> model::FilterExpression {
        model::FilterExpression::new().set_filter(
            model::Filter::new()
                .set_field_name("screenPageViews")
                .set_numeric_filter(
                    model::NumericFilter::new()
                        .set_operation(model::numeric_filter_operation::GREATER_THAN)
                        .set_value(model::NumericValue::new().set_int64_value(threshold)),
                ),
        )
    }

    #[tokio::test]
    async fn run_report_int64_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/properties/1234:runReport"),
                request::body(json_decoded(eq(json!({
                    "dimensions": [{"name": "country"}],
                    "metrics": [{"name": "activeUsers"}],
                    "dateRanges": [{"startDate": "7daysAgo", "endDate": "today"}],
                    "metricFilter": {"notExpression": {"filter": {
                        "fieldName": "screenPageViews",
                        "numericFilter": {
                            "operation": "GREATER_THAN",
                            "value": {"int64Value": "9007199254740993"},
                        },
                    }}},
                    "offset": "100",
                    "limit": "9007199254740993",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "dimensionHeaders": [{"name": "country"}],
                "metricHeaders": [{"name": "activeUsers", "type": "TYPE_INTEGER"}],
                "rows": [{
                    "dimensionValues": [{"value": "Japan"}],
                    "metricValues": [{"value": "1024"}],
                }],
                "rowCount": 1,
                "kind": "analyticsData#runReport",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .run_report()
            .set_property("properties/1234")
            .set_dimensions([model::Dimension::new().set_name("country")])
            .set_metrics([model::Metric::new().set_name("activeUsers")])
            .set_date_ranges([model::DateRange::new()
                .set_start_date("7daysAgo")
                .set_end_date("today")])
            .set_metric_filter(
                model::FilterExpression::new().set_not_expression(views_above(9007199254740993)),
            )
            .set_offset(100)
            .set_limit(9007199254740993_i64)
            .send()
            .await?;
        assert_eq!(got.row_count, Some(1));
        let values = got
            .rows
            .iter()
            .flat_map(|r| r.metric_values.iter())
            .filter_map(|v| v.value.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["1024"]);
        Ok(())
    }

    #[tokio::test]
    async fn batch_run_reports() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/properties/1234:batchRunReports"),
                request::body(json_decoded(eq(json!({
                    "requests": [
                        {"metrics": [{"name": "sessions"}], "limit": "10"},
                        {"metrics": [{"name": "activeUsers"}]},
                    ],
                })))),
            ])
            .respond_with(json_encoded(json!({
                "reports": [{"rowCount": 10}, {"rowCount": 3}],
                "kind": "analyticsData#batchRunReports",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .batch_run_reports()
            .set_property("properties/1234")
            .set_requests([
                model::RunReportRequest::new()
                    .set_metrics([model::Metric::new().set_name("sessions")])
                    .set_limit(10),
                model::RunReportRequest::new()
                    .set_metrics([model::Metric::new().set_name("activeUsers")]),
            ])
            .send()
            .await?;
        let counts = got.reports.iter().map(|r| r.row_count).collect::<Vec<_>>();
        assert_eq!(counts, vec![Some(10), Some(3)]);
        Ok(())
    }

    #[tokio::test]
    async fn query_audience_export() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/properties/1234/audienceExports/5:query"),
                request::body(json_decoded(eq(json!({"offset": "0", "limit": "250"})))),
            ])
            .respond_with(json_encoded(json!({
                "audienceExport": {
                    "name": "properties/1234/audienceExports/5",
                    "beginCreatingTime": "2023-05-01T00:00:00Z",
                },
                "audienceRows": [{"dimensionValues": [{"value": "device-1"}]}],
                "rowCount": 1,
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .query_audience_export()
            .set_name("properties/1234/audienceExports/5")
            .set_offset(0)
            .set_limit(250)
            .send()
            .await?;
        let export = got.audience_export.expect("the response should include the export");
        assert_eq!(
            export.begin_creating_time,
            Some(datetime!(2023-05-01 00:00:00 UTC))
        );
        assert_eq!(got.audience_rows.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_audience_exports_by_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1beta/properties/1234/audienceExports"),
                request::query(url_decoded(not(contains(("pageToken", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "audienceExports": [{"name": "e1"}, {"name": "e2"}],
                "nextPageToken": "next",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1beta/properties/1234/audienceExports"),
                request::query(url_decoded(contains(("pageToken", "next")))),
            ])
            .respond_with(json_encoded(json!({"audienceExports": [{"name": "e3"}]}))),
        );

        let client = test_client(&server).await?;
        let mut pages = client
            .list_audience_exports()
            .set_parent("properties/1234")
            .by_page();
        let mut sizes = Vec::new();
        while let Some(page) = pages.next().await {
            sizes.push(page?.audience_exports.len());
        }
        assert_eq!(sizes, vec![2, 1]);
        Ok(())
    }

    #[test]
    fn recursive_filter_schema() -> Result<()> {
        let wire = json!({
            "andGroup": {"expressions": [
                {"filter": {"fieldName": "country", "stringFilter": {"value": "Japan"}}},
                {"notExpression": {"orGroup": {"expressions": [
                    {"filter": {"betweenFilter": {
                        "fromValue": {"int64Value": "1"},
                        "toValue": {"int64Value": "9007199254740993"},
                    }}},
                ]}}},
            ]},
        });
        let local = decode(wire.clone(), &schema::filter_expression())?;
        let between = local
            .get("andGroup")
            .and_then(|g| g.get("expressions"))
            .and_then(Value::as_array)
            .and_then(|e| e.get(1))
            .and_then(|e| e.get("notExpression"))
            .and_then(|e| e.get("orGroup"))
            .and_then(|g| g.get("expressions"))
            .and_then(Value::as_array)
            .and_then(|e| e.first())
            .and_then(|e| e.get("filter"))
            .and_then(|f| f.get("betweenFilter"))
            .expect("the nested filter should be present");
        assert_eq!(
            between
                .get("toValue")
                .and_then(|v| v.get("int64Value"))
                .and_then(Value::as_integer),
            Some(9007199254740993)
        );
        let got = encode(&local, &schema::filter_expression())?;
        assert_eq!(got, wire);
        Ok(())
    }

    #[test]
    fn recursive_filter_model() -> Result<()> {
        let expression = model::FilterExpression::new().set_and_group(
            model::FilterExpressionList::new().set_expressions([
                views_above(10),
                model::FilterExpression::new().set_not_expression(views_above(20)),
            ]),
        );
        let json = serde_json::to_value(&expression)?;
        assert_eq!(
            json.pointer("/andGroup/expressions/1/notExpression/filter/numericFilter/value/int64Value"),
            Some(&json!("20"))
        );
        let got = serde_json::from_value::<model::FilterExpression>(json)?;
        assert_eq!(got, expression);
        Ok(())
    }
}
