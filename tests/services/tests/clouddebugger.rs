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
    use google_cloud_clouddebugger_v2::{client::CloudDebugger, model};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;

    async fn test_client(server: &Server) -> Result<CloudDebugger> {
        let client = CloudDebugger::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn get_breakpoint_escapes_segments() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/v2/debugger/debuggees/gcp%3Aapp%2Fv1/breakpoints/bp%201"
                ),
                request::query(url_decoded(contains(("clientVersion", "test/1.0")))),
            ])
            .respond_with(json_encoded(json!({"breakpoint": {
                "id": "bp 1",
                "action": "LOG",
                "createTime": "2023-05-01T00:00:00Z",
                "finalTime": "2023-05-01T00:05:00.250Z",
                "isFinalState": true,
            }}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_breakpoint()
            .set_debuggee_id("gcp:app/v1")
            .set_breakpoint_id("bp 1")
            .set_client_version("test/1.0")
            .send()
            .await?;
        let breakpoint = got.breakpoint.expect("the response should have a breakpoint");
        assert_eq!(breakpoint.id.as_deref(), Some("bp 1"));
        assert_eq!(breakpoint.action, Some(model::breakpoint_action::LOG));
        assert_eq!(breakpoint.create_time, Some(datetime!(2023-05-01 00:00:00 UTC)));
        assert_eq!(
            breakpoint.final_time,
            Some(datetime!(2023-05-01 00:05:00.25 UTC))
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_breakpoints_nested_query() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/debugger/debuggees/d1/breakpoints"),
                request::query(url_decoded(contains(("action.value", "CAPTURE")))),
                request::query(url_decoded(contains(("stripResults", "true")))),
                request::query(url_decoded(not(contains(("includeInactive", any()))))),
                request::query(url_decoded(not(contains(("waitToken", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "breakpoints": [{"id": "b1"}, {"id": "b2"}],
                "nextWaitToken": "wt-1",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .list_breakpoints()
            .set_debuggee_id("d1")
            .set_action(
                model::BreakpointActionValue::new().set_value(model::breakpoint_action::CAPTURE),
            )
            .set_strip_results(true)
            .send()
            .await?;
        let ids = got
            .breakpoints
            .iter()
            .filter_map(|b| b.id.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b1", "b2"]);
        assert_eq!(got.next_wait_token.as_deref(), Some("wt-1"));
        Ok(())
    }

    #[tokio::test]
    async fn set_breakpoint() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/debugger/debuggees/d1/breakpoints/set"),
                request::query(url_decoded(contains(("canaryOption", "CANARY_OPTION_TRY_ENABLE")))),
                request::body(json_decoded(eq(json!({
                    "location": {"path": "src/main.rs", "line": 42},
                    "expressions": ["x", "y"],
                })))),
            ])
            .respond_with(json_encoded(json!({"breakpoint": {
                "id": "b3",
                "location": {"path": "src/main.rs", "line": 42},
                "canaryExpireTime": "2023-05-01T01:00:00Z",
            }}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .set_breakpoint()
            .set_debuggee_id("d1")
            .set_canary_option(model::canary_option::CANARY_OPTION_TRY_ENABLE)
            .set_breakpoint(
                model::Breakpoint::new()
                    .set_location(
                        model::SourceLocation::new()
                            .set_path("src/main.rs")
                            .set_line(42),
                    )
                    .set_expressions(["x", "y"]),
            )
            .send()
            .await?;
        let breakpoint = got.breakpoint.expect("the response should have a breakpoint");
        assert_eq!(breakpoint.id.as_deref(), Some("b3"));
        assert_eq!(
            breakpoint.canary_expire_time,
            Some(datetime!(2023-05-01 01:00:00 UTC))
        );
        Ok(())
    }

    #[tokio::test]
    async fn register_debuggee() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/controller/debuggees/register"),
                request::body(json_decoded(eq(json!({"debuggee": {
                    "project": "test-project",
                    "uniquifier": "u-1",
                    "agentVersion": "test/1.0",
                    "labels": {"module": "default"},
                }})))),
            ])
            .respond_with(json_encoded(json!({
                "agentId": "agent-1",
                "debuggee": {"id": "d1", "project": "test-project"},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .register_debuggee()
            .set_debuggee(
                model::Debuggee::new()
                    .set_project("test-project")
                    .set_uniquifier("u-1")
                    .set_agent_version("test/1.0")
                    .set_labels([("module", "default")]),
            )
            .send()
            .await?;
        assert_eq!(got.agent_id.as_deref(), Some("agent-1"));
        assert_eq!(
            got.debuggee.and_then(|d| d.id).as_deref(),
            Some("d1")
        );
        Ok(())
    }

    #[tokio::test]
    async fn update_active_breakpoint() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/v2/controller/debuggees/d1/breakpoints/b1"),
                request::body(json_decoded(eq(json!({"breakpoint": {
                    "id": "b1",
                    "isFinalState": true,
                    "finalTime": "2023-05-01T00:00:00.000Z",
                }})))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client
            .update_active_breakpoint()
            .set_debuggee_id("d1")
            .set_id("b1")
            .set_breakpoint(
                model::Breakpoint::new()
                    .set_id("b1")
                    .set_is_final_state(true)
                    .set_final_time(datetime!(2023-05-01 00:00:00 UTC)),
            )
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_debuggee_id() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .delete_breakpoint()
            .set_breakpoint_id("b1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
