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
    use google_cloud_wire::{Duration, Value, decode, encode};
    use google_cloud_workstations_v1::{client::Workstations, model, schema};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    const CLUSTER: &str = "projects/test-project/locations/us-central1/workstationClusters/c1";

    async fn test_client(server: &Server) -> Result<Workstations> {
        let client = Workstations::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn create_workstation_config_durations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/us-central1/workstationClusters/c1/workstationConfigs"
                ),
                request::query(url_decoded(contains(("workstationConfigId", "cfg")))),
                request::query(url_decoded(not(contains(("validateOnly", any()))))),
                request::body(json_decoded(eq(json!({
                    "idleTimeout": 1200,
                    "runningTimeout": 43200,
                    "host": {"gceInstance": {"machineType": "e2-standard-4", "poolSize": 2}},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": format!("{CLUSTER}/operations/op-1"),
                "metadata": {
                    "createTime": "2023-05-01T00:00:00Z",
                    "target": format!("{CLUSTER}/workstationConfigs/cfg"),
                    "verb": "create",
                },
            }))),
        );

        let client = test_client(&server).await?;
        let config = model::WorkstationConfig::new()
            .set_idle_timeout(Duration::from_seconds(1200.0))
            .set_running_timeout(std::time::Duration::from_secs(12 * 60 * 60))
            .set_host(
                model::Host::new().set_gce_instance(
                    model::GceInstance::new()
                        .set_machine_type("e2-standard-4")
                        .set_pool_size(2),
                ),
            );
        let operation = client
            .create_workstation_config()
            .set_parent(CLUSTER)
            .set_workstation_config_id("cfg")
            .set_workstation_config(config)
            .send()
            .await?;
        let metadata = operation
            .metadata_as::<model::OperationMetadata>()?
            .expect("the operation should have metadata");
        assert_eq!(metadata.create_time, Some(datetime!(2023-05-01 00:00:00 UTC)));
        assert_eq!(metadata.verb.as_deref(), Some("create"));
        Ok(())
    }

    #[tokio::test]
    async fn get_workstation_config_durations() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/test-project/locations/us-central1/workstationClusters/c1/workstationConfigs/cfg",
            ))
            .respond_with(json_encoded(json!({
                "name": format!("{CLUSTER}/workstationConfigs/cfg"),
                "idleTimeout": "1200s",
                "runningTimeout": 43200,
                "updateTime": "2023-05-01T10:20:30.123Z",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_workstation_config()
            .set_name(format!("{CLUSTER}/workstationConfigs/cfg"))
            .send()
            .await?;
        assert_eq!(got.idle_timeout, Some(Duration::from_seconds(1200.0)));
        assert_eq!(got.running_timeout, Some(Duration::from_seconds(43200.0)));
        assert_eq!(
            got.update_time,
            Some(datetime!(2023-05-01 10:20:30.123 UTC))
        );
        Ok(())
    }

    #[tokio::test]
    async fn generate_access_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/us-central1/workstationClusters/c1/workstationConfigs/cfg/workstations/w1:generateAccessToken"
                ),
                request::body(json_decoded(eq(json!({
                    "expireTime": "2023-05-01T01:00:00.000Z",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "accessToken": "test-token",
                "expireTime": "2023-05-01T01:00:00Z",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .generate_access_token()
            .set_workstation(format!("{CLUSTER}/workstationConfigs/cfg/workstations/w1"))
            .set_expire_time(datetime!(2023-05-01 01:00:00 UTC))
            .send()
            .await?;
        assert_eq!(got.access_token.as_deref(), Some("test-token"));
        assert_eq!(got.expire_time, Some(datetime!(2023-05-01 01:00:00 UTC)));
        Ok(())
    }

    #[tokio::test]
    async fn generate_access_token_without_expiration() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/us-central1/workstationClusters/c1/workstationConfigs/cfg/workstations/w1:generateAccessToken"
                ),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"accessToken": "test-token"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .generate_access_token()
            .set_workstation(format!("{CLUSTER}/workstationConfigs/cfg/workstations/w1"))
            .send()
            .await?;
        assert_eq!(got.expire_time, None);
        Ok(())
    }

    #[tokio::test]
    async fn delete_workstation_cluster_query() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "DELETE",
                    "/v1/projects/test-project/locations/us-central1/workstationClusters/c1"
                ),
                request::query(url_decoded(contains(("etag", "abc")))),
                request::query(url_decoded(contains(("force", "true")))),
                request::query(url_decoded(not(contains(("validateOnly", any()))))),
            ])
            .respond_with(json_encoded(json!({"name": "op-2", "done": true}))),
        );

        let client = test_client(&server).await?;
        let operation = client
            .delete_workstation_cluster()
            .set_name(CLUSTER)
            .set_etag("abc")
            .set_force(true)
            .send()
            .await?;
        assert_eq!(operation.done, Some(true));
        Ok(())
    }

    #[tokio::test]
    async fn start_workstation_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/us-central1/workstationClusters/c1/workstationConfigs/cfg/workstations/w1:start"
                ),
                request::body(json_decoded(eq(json!({"validateOnly": true})))),
            ])
            .respond_with(json_encoded(json!({"name": "op-3"}))),
        );

        let client = test_client(&server).await?;
        let operation = client
            .start_workstation()
            .set_name(format!("{CLUSTER}/workstationConfigs/cfg/workstations/w1"))
            .set_validate_only(true)
            .send()
            .await?;
        assert_eq!(operation.name.as_deref(), Some("op-3"));
        Ok(())
    }

    #[test]
    fn workstation_config_schema() -> Result<()> {
        let local = decode(
            json!({"idleTimeout": "90s", "runningTimeout": 7200, "displayName": "cfg"}),
            &schema::workstation_config(),
        )?;
        assert_eq!(
            local.get("idleTimeout").and_then(Value::as_duration),
            Some(Duration::from_seconds(90.0))
        );
        let got = encode(&local, &schema::workstation_config())?;
        assert_eq!(
            got,
            json!({"idleTimeout": 90, "runningTimeout": 7200, "displayName": "cfg"})
        );
        Ok(())
    }
}
