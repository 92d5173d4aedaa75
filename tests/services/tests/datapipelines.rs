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
    use google_cloud_datapipelines_v1::{client::DataPipelines, model, stub};
    use google_cloud_gax::error::rpc::Code;
    use google_cloud_gax::options::{RequestOptions, RequestOptionsBuilder};
    use google_cloud_gax::response::Response;
    use google_cloud_test_utils::tracing::enable_tracing;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    const PARENT: &str = "projects/test-project/locations/us-central1";

    async fn test_client(server: &Server) -> Result<DataPipelines> {
        let client = DataPipelines::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn create_pipeline_timestamp() -> Result<()> {
        let server = Server::run();
        let name = format!("{PARENT}/pipelines/p1");
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/us-central1/pipelines"
                ),
                request::headers(contains(("x-goog-api-client", any()))),
                request::body(json_decoded(eq(json!({
                    "name": name,
                    "createTime": "2023-05-01T00:00:00.000Z",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": name,
                "createTime": "2023-05-01T00:00:00.000Z",
                "jobCount": 3,
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create_pipeline()
            .set_parent(PARENT)
            .set_pipeline(
                model::Pipeline::new()
                    .set_name(&name)
                    .set_create_time(datetime!(2023-05-01 00:00:00 UTC)),
            )
            .send()
            .await?;
        assert_eq!(got.name.as_deref(), Some(name.as_str()));
        assert_eq!(got.create_time, Some(datetime!(2023-05-01 00:00:00 UTC)));
        assert_eq!(got.job_count, Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn list_pipelines_unset_page_size() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/v1/projects/test-project/locations/us-central1/pipelines"
                ),
                request::query(url_decoded(not(contains(("pageSize", any()))))),
                request::query(url_decoded(not(contains(("pageToken", any()))))),
                request::query(url_decoded(contains(("filter", "type:BATCH")))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .list_pipelines()
            .set_parent(PARENT)
            .set_filter("type:BATCH")
            .send()
            .await?;
        assert_eq!(got, model::ListPipelinesResponse::default());
        Ok(())
    }

    #[tokio::test]
    async fn list_pipelines_page_size() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/v1/projects/test-project/locations/us-central1/pipelines"
                ),
                request::query(url_decoded(contains(("pageSize", "25")))),
            ])
            .respond_with(json_encoded(json!({"pipelines": [{"name": "p1"}]}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .list_pipelines()
            .set_parent(PARENT)
            .set_page_size(25)
            .send()
            .await?;
        let names = got
            .pipelines
            .into_iter()
            .filter_map(|p| p.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["p1"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_jobs_by_item() -> Result<()> {
        let server = Server::run();
        let path = "/v1/projects/test-project/locations/us-central1/pipelines/p1/jobs";
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", path),
                request::query(url_decoded(not(contains(("pageToken", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "jobs": [
                    {"name": "j1", "createTime": "2023-05-01T00:00:00Z"},
                    {"name": "j2"},
                ],
                "nextPageToken": "page-2",
            }))),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", path),
                request::query(url_decoded(contains(("pageToken", "page-2")))),
            ])
            .respond_with(json_encoded(json!({
                "jobs": [{"name": "j3", "endTime": "2023-05-01T12:30:00.5Z"}],
            }))),
        );

        let client = test_client(&server).await?;
        let mut items = client
            .list_jobs()
            .set_parent(format!("{PARENT}/pipelines/p1"))
            .by_item();
        let mut jobs = Vec::new();
        while let Some(job) = items.next().await {
            jobs.push(job?);
        }
        let names = jobs
            .iter()
            .filter_map(|j| j.name.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["j1", "j2", "j3"]);
        assert_eq!(jobs[0].create_time, Some(datetime!(2023-05-01 00:00:00 UTC)));
        assert_eq!(jobs[2].end_time, Some(datetime!(2023-05-01 12:30:00.5 UTC)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_pipeline() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v1/projects/test-project/locations/us-central1/pipelines/p1",
            ))
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client
            .delete_pipeline()
            .set_name(format!("{PARENT}/pipelines/p1"))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_pipeline_not_found() -> Result<()> {
        let server = Server::run();
        let error = json!({"error": {
            "code": 404,
            "message": "pipeline p1 not found",
            "status": "NOT_FOUND",
        }});
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/test-project/locations/us-central1/pipelines/p1",
            ))
            .times(1)
            .respond_with(status_code(404).body(error.to_string())),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_pipeline()
            .set_name(format!("{PARENT}/pipelines/p1"))
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        let status = err.status().expect("the error should include a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "pipeline p1 not found");
        Ok(())
    }

    #[tokio::test]
    async fn missing_path_parameter() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.get_pipeline().send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_with_prefix() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/proxy/v1/projects/test-project/locations/us-central1/pipelines/p1:run"
                ),
                request::headers(contains(("user-agent", "test-agent/1.0"))),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"job": {"name": "j1"}}))),
        );

        let client = DataPipelines::builder()
            .with_endpoint(format!("{}/proxy", endpoint(&server)))
            .with_credentials(credentials())
            .build()
            .await?;
        let got = client
            .run_pipeline()
            .set_name(format!("{PARENT}/pipelines/p1"))
            .with_user_agent("test-agent/1.0")
            .send()
            .await?;
        assert_eq!(got.job.and_then(|j| j.name).as_deref(), Some("j1"));
        Ok(())
    }

    #[tokio::test]
    async fn with_tracing() -> Result<()> {
        let _guard = enable_tracing();
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1/projects/test-project/locations/us-central1/pipelines/p1:stop",
            ))
            .respond_with(json_encoded(json!({"name": "p1", "state": "STATE_PAUSED"}))),
        );

        let client = DataPipelines::builder()
            .with_endpoint(endpoint(&server))
            .with_credentials(credentials())
            .with_tracing()
            .build()
            .await?;
        let got = client
            .stop_pipeline()
            .set_name(format!("{PARENT}/pipelines/p1"))
            .send()
            .await?;
        assert_eq!(got.name.as_deref(), Some("p1"));
        assert_eq!(
            got.state.as_ref().map(|s| s.value()),
            Some("STATE_PAUSED")
        );
        Ok(())
    }

    mockall::mock! {
        #[derive(Debug)]
        DataPipelines {}
        impl stub::DataPipelines for DataPipelines {
            async fn get_pipeline(
                &self,
                req: model::GetPipelineRequest,
                options: RequestOptions,
            ) -> google_cloud_gax::Result<Response<model::Pipeline>>;
        }
    }

    #[tokio::test]
    async fn from_stub() -> Result<()> {
        let mut mock = MockDataPipelines::new();
        mock.expect_get_pipeline()
            .withf(|req, _| req.name.as_deref() == Some("projects/p/locations/l/pipelines/p1"))
            .times(1)
            .returning(|_, _| {
                Ok(Response::from(
                    model::Pipeline::new().set_display_name("mocked"),
                ))
            });

        let client = DataPipelines::from_stub(mock);
        let got = client
            .get_pipeline()
            .set_name("projects/p/locations/l/pipelines/p1")
            .send()
            .await?;
        assert_eq!(got.display_name.as_deref(), Some("mocked"));
        Ok(())
    }
}
