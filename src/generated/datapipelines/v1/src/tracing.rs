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

/// Implements a [DataPipelines](super::stub::DataPipelines) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DataPipelines<T>
where
    T: super::stub::DataPipelines + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DataPipelines<T>
where
    T: super::stub::DataPipelines + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DataPipelines for DataPipelines<T>
where
    T: super::stub::DataPipelines + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_pipeline(
        &self,
        req: crate::model::CreatePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        self.inner.create_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_pipeline(
        &self,
        req: crate::model::DeletePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        self.inner.delete_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_pipeline(
        &self,
        req: crate::model::GetPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        self.inner.get_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_pipelines(
        &self,
        req: crate::model::ListPipelinesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListPipelinesResponse>> {
        self.inner.list_pipelines(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn patch_pipeline(
        &self,
        req: crate::model::PatchPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        self.inner.patch_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn run_pipeline(
        &self,
        req: crate::model::RunPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunPipelineResponse>> {
        self.inner.run_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn stop_pipeline(
        &self,
        req: crate::model::StopPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        self.inner.stop_pipeline(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListJobsResponse>> {
        self.inner.list_jobs(req, options).await
    }
}
