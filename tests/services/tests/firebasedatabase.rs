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
    use google_cloud_firebasedatabase_v1beta::{client::FirebaseDatabase, model, stub};
    use google_cloud_gax::options::RequestOptions;
    use google_cloud_gax::response::Response;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const PARENT: &str = "projects/p1/locations/us-central1";

    async fn test_client(server: &Server) -> Result<FirebaseDatabase> {
        let client = FirebaseDatabase::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn create_instance() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/projects/p1/locations/us-central1/instances"),
                request::query(url_decoded(contains(("databaseId", "my-db")))),
                request::query(url_decoded(contains(("validateOnly", "false")))),
                request::body(json_decoded(eq(json!({"type": "USER_DATABASE"})))),
            ])
            .respond_with(json_encoded(json!({
                "name": format!("{PARENT}/instances/my-db"),
                "databaseUrl": "https://my-db.firebaseio.com",
                "type": "USER_DATABASE",
                "state": "ACTIVE",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create_instance()
            .set_parent(PARENT)
            .set_database_id("my-db")
            .set_validate_only(false)
            .set_database_instance(
                model::DatabaseInstance::new()
                    .set_type(model::database_instance_type::USER_DATABASE),
            )
            .send()
            .await?;
        assert_eq!(got.database_url.as_deref(), Some("https://my-db.firebaseio.com"));
        assert_eq!(got.state, Some(model::database_instance_state::ACTIVE));
        Ok(())
    }

    #[tokio::test]
    async fn list_instances_by_page() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1beta/projects/p1/locations/-/instances"),
                request::query(url_decoded(contains(("showDeleted", "true")))),
                request::query(url_decoded(not(contains(("pageToken", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "instances": [{"name": "i1"}],
                "nextPageToken": "t",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1beta/projects/p1/locations/-/instances"),
                request::query(url_decoded(contains(("showDeleted", "true")))),
                request::query(url_decoded(contains(("pageToken", "t")))),
            ])
            .respond_with(json_encoded(json!({"instances": [{"name": "i2"}, {"name": "i3"}]}))),
        );

        let client = test_client(&server).await?;
        let mut pages = client
            .list_instances()
            .set_parent("projects/p1/locations/-")
            .set_show_deleted(true)
            .by_page();
        let mut names = Vec::new();
        while let Some(page) = pages.next().await {
            names.push(
                page?
                    .instances
                    .into_iter()
                    .filter_map(|i| i.name)
                    .collect::<Vec<_>>(),
            );
        }
        assert_eq!(names, vec![vec!["i1"], vec!["i2", "i3"]]);
        Ok(())
    }

    #[tokio::test]
    async fn list_instances_stops_on_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1beta/projects/p1/locations/-/instances",
            ))
            .times(1)
            .respond_with(status_code(500).body("internal error")),
        );

        let client = test_client(&server).await?;
        let mut pages = client
            .list_instances()
            .set_parent("projects/p1/locations/-")
            .by_page();
        let err = pages
            .next()
            .await
            .expect("the first page is an error")
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(500), "{err:?}");
        assert!(pages.next().await.is_none());
        Ok(())
    }

    mockall::mock! {
        #[derive(Debug)]
        FirebaseDatabase {}
        impl stub::FirebaseDatabase for FirebaseDatabase {
            async fn disable_instance(
                &self,
                req: model::DisableInstanceRequest,
                options: RequestOptions,
            ) -> google_cloud_gax::Result<Response<model::DatabaseInstance>>;
        }
    }

    #[tokio::test]
    async fn from_stub() -> Result<()> {
        let mut mock = MockFirebaseDatabase::new();
        mock.expect_disable_instance()
            .withf(|req, _| req.name.as_deref() == Some("projects/p1/locations/l/instances/db"))
            .times(1)
            .returning(|req, _| {
                Ok(Response::from(
                    model::DatabaseInstance::new()
                        .set_name(req.name.unwrap_or_default())
                        .set_state(model::database_instance_state::DISABLED),
                ))
            });

        let client = FirebaseDatabase::from_stub(mock);
        let got = client
            .disable_instance()
            .set_name("projects/p1/locations/l/instances/db")
            .send()
            .await?;
        assert_eq!(got.state, Some(model::database_instance_state::DISABLED));

        // Methods not overridden by the stub return an error.
        let err = client
            .get_instance()
            .set_name("projects/p1/locations/l/instances/db")
            .send()
            .await
            .unwrap_err();
        assert!(err.status().is_none(), "{err:?}");
        Ok(())
    }
}
