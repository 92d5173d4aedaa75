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

/// A dyn-compatible, crate-private version of [super::DataPipelines].
#[async_trait::async_trait]
pub trait DataPipelines: std::fmt::Debug + Send + Sync {
    async fn create_pipeline(
        &self,
        req: crate::model::CreatePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>>;

    async fn delete_pipeline(
        &self,
        req: crate::model::DeletePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>>;

    async fn get_pipeline(
        &self,
        req: crate::model::GetPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>>;

    async fn list_pipelines(
        &self,
        req: crate::model::ListPipelinesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListPipelinesResponse>>;

    async fn patch_pipeline(
        &self,
        req: crate::model::PatchPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>>;

    async fn run_pipeline(
        &self,
        req: crate::model::RunPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunPipelineResponse>>;

    async fn stop_pipeline(
        &self,
        req: crate::model::StopPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>>;

    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListJobsResponse>>;
}

/// All implementations of [super::DataPipelines] also implement [DataPipelines].
#[async_trait::async_trait]
impl<T: super::DataPipelines> DataPipelines for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_pipeline(
        &self,
        req: crate::model::CreatePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>> {
        T::create_pipeline(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_pipeline(
        &self,
        req: crate::model::DeletePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>> {
        T::delete_pipeline(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_pipeline(
        &self,
        req: crate::model::GetPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>> {
        T::get_pipeline(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_pipelines(
        &self,
        req: crate::model::ListPipelinesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListPipelinesResponse>> {
        T::list_pipelines(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn patch_pipeline(
        &self,
        req: crate::model::PatchPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>> {
        T::patch_pipeline(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn run_pipeline(
        &self,
        req: crate::model::RunPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunPipelineResponse>> {
        T::run_pipeline(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_pipeline(
        &self,
        req: crate::model::StopPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Pipeline>> {
        T::stop_pipeline(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListJobsResponse>> {
        T::list_jobs(self, req, options).await
    }
}
