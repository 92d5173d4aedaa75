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
    use google_cloud_wire::{Value, decode, encode};
    use google_cloud_youtubeanalytics_v2::{client::YoutubeAnalytics, model, schema};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    async fn test_client(server: &Server) -> Result<YoutubeAnalytics> {
        let client = YoutubeAnalytics::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn query_reports_only_set_params() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/reports"),
                request::query(url_decoded(contains(("ids", "channel==MINE")))),
                request::query(url_decoded(contains(("startDate", "2023-01-01")))),
                request::query(url_decoded(contains(("endDate", "2023-01-31")))),
                request::query(url_decoded(contains(("metrics", "views,likes")))),
                request::query(url_decoded(contains(("maxResults", "10")))),
                request::query(url_decoded(not(contains(("startIndex", any()))))),
                request::query(url_decoded(not(contains(("currency", any()))))),
                request::query(url_decoded(not(contains(("includeHistoricalChannelData", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "kind": "youtubeAnalytics#resultTable",
                "columnHeaders": [
                    {"name": "day", "columnType": "DIMENSION", "dataType": "STRING"},
                    {"name": "views", "columnType": "METRIC", "dataType": "INTEGER"},
                ],
                "rows": [["2023-01-01", 12], ["2023-01-02", 34]],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .query_reports()
            .set_ids("channel==MINE")
            .set_start_date("2023-01-01")
            .set_end_date("2023-01-31")
            .set_metrics("views,likes")
            .set_max_results(10)
            .send()
            .await?;
        let headers = got
            .column_headers
            .iter()
            .filter_map(|h| h.name.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(headers, vec!["day", "views"]);
        assert_eq!(got.rows, vec![json!(["2023-01-01", 12]), json!(["2023-01-02", 34])]);
        Ok(())
    }

    #[tokio::test]
    async fn list_groups_item_count() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/groups"),
                request::query(url_decoded(contains(("mine", "true")))),
                request::query(url_decoded(not(contains(("pageToken", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{
                    "id": "g1",
                    "snippet": {"title": "Favorites", "publishedAt": "2023-05-01T00:00:00.000Z"},
                    "contentDetails": {"itemCount": "18446744073709551615", "itemType": "youtube#video"},
                }],
                "nextPageToken": "p2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/groups"),
                request::query(url_decoded(contains(("pageToken", "p2")))),
            ])
            .respond_with(json_encoded(json!({
                "items": [{"id": "g2", "contentDetails": {"itemCount": "0"}}],
            }))),
        );

        let client = test_client(&server).await?;
        let mut items = client.list_groups().set_mine(true).by_item();
        let mut groups = Vec::new();
        while let Some(group) = items.next().await {
            groups.push(group?);
        }
        let counts = groups
            .iter()
            .map(|g| g.content_details.as_ref().and_then(|c| c.item_count))
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![Some(u64::MAX), Some(0)]);
        assert_eq!(
            groups[0].snippet.as_ref().and_then(|s| s.published_at),
            Some(datetime!(2023-05-01 00:00:00 UTC))
        );
        Ok(())
    }

    #[tokio::test]
    async fn insert_group() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/groups"),
                request::query(url_decoded(contains(("onBehalfOfContentOwner", "owner-1")))),
                request::body(json_decoded(eq(json!({
                    "snippet": {"title": "New group"},
                    "contentDetails": {"itemType": "youtube#video", "itemCount": "0"},
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "g3", "etag": "e1"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .insert_group()
            .set_on_behalf_of_content_owner("owner-1")
            .set_group(
                model::Group::new()
                    .set_snippet(model::GroupSnippet::new().set_title("New group"))
                    .set_content_details(
                        model::GroupContentDetails::new()
                            .set_item_type("youtube#video")
                            .set_item_count(0_u64),
                    ),
            )
            .send()
            .await?;
        assert_eq!(got.id.as_deref(), Some("g3"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_group_no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/v2/groups"),
                request::query(url_decoded(contains(("id", "g1")))),
            ])
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let got = client.delete_group().set_id("g1").send().await?;
        assert_eq!(got, model::EmptyResponse::default());
        Ok(())
    }

    #[test]
    fn group_schema_uint64() -> Result<()> {
        let wire = json!({"id": "g1", "contentDetails": {"itemCount": "18446744073709551615"}});
        let local = decode(wire.clone(), &schema::group())?;
        assert_eq!(
            local
                .get("contentDetails")
                .and_then(|c| c.get("itemCount"))
                .and_then(Value::as_integer),
            Some(u64::MAX as i128)
        );
        assert_eq!(encode(&local, &schema::group())?, wire);

        let err = decode(
            json!({"contentDetails": {"itemCount": "-1"}}),
            &schema::group(),
        )
        .unwrap_err();
        assert!(err.is_invalid_integer_format(), "{err:?}");
        Ok(())
    }
}
