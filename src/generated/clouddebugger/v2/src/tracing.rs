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

/// Implements a [CloudDebugger](super::stub::CloudDebugger) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct CloudDebugger<T>
where
    T: super::stub::CloudDebugger + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> CloudDebugger<T>
where
    T: super::stub::CloudDebugger + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::CloudDebugger for CloudDebugger<T>
where
    T: super::stub::CloudDebugger + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_debuggees(
        &self,
        req: crate::model::ListDebuggeesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDebuggeesResponse>> {
        self.inner.list_debuggees(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_breakpoint(
        &self,
        req: crate::model::DeleteBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        self.inner.delete_breakpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_breakpoint(
        &self,
        req: crate::model::GetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GetBreakpointResponse>> {
        self.inner.get_breakpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_breakpoints(
        &self,
        req: crate::model::ListBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListBreakpointsResponse>> {
        self.inner.list_breakpoints(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_breakpoint(
        &self,
        req: crate::model::SetBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SetBreakpointResponse>> {
        self.inner.set_breakpoint(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn register_debuggee(
        &self,
        req: crate::model::RegisterDebuggeeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RegisterDebuggeeResponse>> {
        self.inner.register_debuggee(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_active_breakpoints(
        &self,
        req: crate::model::ListActiveBreakpointsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListActiveBreakpointsResponse>> {
        self.inner.list_active_breakpoints(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_active_breakpoint(
        &self,
        req: crate::model::UpdateActiveBreakpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UpdateActiveBreakpointResponse>> {
        self.inner.update_active_breakpoint(req, options).await
    }
}
