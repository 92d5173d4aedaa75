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

// Code generated by sidekick. DO NOT EDIT.

use crate::Result;

/// Implements [CloudDebugger](super::stub::CloudDebugger) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct CloudDebugger {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for CloudDebugger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudDebugger")
            .field("inner", &self.inner)
            .finish()
    }
}

impl CloudDebugger {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::CloudDebugger for CloudDebugger {
    async fn list_debuggees(
        &self,
        req: crate::model::ListDebuggeesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDebuggeesResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/debugger/debuggees");
        let path = "/v2/debugger/debuggees".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .client_version
            .iter()
            .fold(builder, |builder, p| builder.query(&[("clientVersion", p)]));
        let builder = req
            .include_inactive
            .iter()
            .fold(builder, |builder, p| builder.query(&[("includeInactive", p)]));
        let builder = req
            .project
            .iter()
            .fold(builder, |builder, p| builder.query(&[("project", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_breakpoint(
        &self,
        req: crate::model::DeleteBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v2/debugger/debuggees/{debuggeeId}/breakpoints/{breakpointId}");
        let debuggee_id = gaxi::path_parameter::required(&req.debuggee_id, "debuggeeId")?;
        let breakpoint_id = gaxi::path_parameter::required(&req.breakpoint_id, "breakpointId")?;
        let path = format!(
            "/v2/debugger/debuggees/{}/breakpoints/{}",
            gaxi::path_parameter::escape(debuggee_id),
            gaxi::path_parameter::escape(breakpoint_id),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .client_version
            .iter()
            .fold(builder, |builder, p| builder.query(&[("clientVersion", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_breakpoint(
        &self,
        req: crate::model::GetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetBreakpointResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v2/debugger/debuggees/{debuggeeId}/breakpoints/{breakpointId}");
        let debuggee_id = gaxi::path_parameter::required(&req.debuggee_id, "debuggeeId")?;
        let breakpoint_id = gaxi::path_parameter::required(&req.breakpoint_id, "breakpointId")?;
        let path = format!(
            "/v2/debugger/debuggees/{}/breakpoints/{}",
            gaxi::path_parameter::escape(debuggee_id),
            gaxi::path_parameter::escape(breakpoint_id),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .client_version
            .iter()
            .fold(builder, |builder, p| builder.query(&[("clientVersion", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_breakpoints(
        &self,
        req: crate::model::ListBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListBreakpointsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v2/debugger/debuggees/{debuggeeId}/breakpoints");
        let debuggee_id = gaxi::path_parameter::required(&req.debuggee_id, "debuggeeId")?;
        let path = format!(
            "/v2/debugger/debuggees/{}/breakpoints",
            gaxi::path_parameter::escape(debuggee_id),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = match &req.action {
            Some(p) => gaxi::query_parameter::add(builder, "action", p)?,
            None => builder,
        };
        let builder = req
            .client_version
            .iter()
            .fold(builder, |builder, p| builder.query(&[("clientVersion", p)]));
        let builder = req
            .include_all_users
            .iter()
            .fold(builder, |builder, p| builder.query(&[("includeAllUsers", p)]));
        let builder = req
            .include_inactive
            .iter()
            .fold(builder, |builder, p| builder.query(&[("includeInactive", p)]));
        let builder = req
            .strip_results
            .iter()
            .fold(builder, |builder, p| builder.query(&[("stripResults", p)]));
        let builder = req
            .wait_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("waitToken", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn set_breakpoint(
        &self,
        req: crate::model::SetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SetBreakpointResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v2/debugger/debuggees/{debuggeeId}/breakpoints/set");
        let debuggee_id = gaxi::path_parameter::required(&req.debuggee_id, "debuggeeId")?;
        let path = format!(
            "/v2/debugger/debuggees/{}/breakpoints/set",
            gaxi::path_parameter::escape(debuggee_id),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .canary_option
            .iter()
            .fold(builder, |builder, p| builder.query(&[("canaryOption", p)]));
        let builder = req
            .client_version
            .iter()
            .fold(builder, |builder, p| builder.query(&[("clientVersion", p)]));
        self.inner.execute(builder, req.breakpoint, options).await
    }

    async fn register_debuggee(
        &self,
        req: crate::model::RegisterDebuggeeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RegisterDebuggeeResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v2/controller/debuggees/register");
        let path = "/v2/controller/debuggees/register".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn list_active_breakpoints(
        &self,
        req: crate::model::ListActiveBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListActiveBreakpointsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v2/controller/debuggees/{debuggeeId}/breakpoints");
        let debuggee_id = gaxi::path_parameter::required(&req.debuggee_id, "debuggeeId")?;
        let path = format!(
            "/v2/controller/debuggees/{}/breakpoints",
            gaxi::path_parameter::escape(debuggee_id),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .agent_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("agentId", p)]));
        let builder = req
            .success_on_timeout
            .iter()
            .fold(builder, |builder, p| builder.query(&[("successOnTimeout", p)]));
        let builder = req
            .wait_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("waitToken", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_active_breakpoint(
        &self,
        req: crate::model::UpdateActiveBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateActiveBreakpointResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v2/controller/debuggees/{debuggeeId}/breakpoints/{id}");
        let debuggee_id = gaxi::path_parameter::required(&req.debuggee_id, "debuggeeId")?;
        let id = gaxi::path_parameter::required(&req.id, "id")?;
        let path = format!(
            "/v2/controller/debuggees/{}/breakpoints/{}",
            gaxi::path_parameter::escape(debuggee_id),
            gaxi::path_parameter::escape(id),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }
}
