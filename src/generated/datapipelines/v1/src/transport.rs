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

/// Implements [DataPipelines](super::stub::DataPipelines) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct DataPipelines {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for DataPipelines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataPipelines")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DataPipelines {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DataPipelines for DataPipelines {
    async fn create_pipeline(
        &self,
        req: crate::model::CreatePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1/{+parent}/pipelines");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/pipelines",
            gaxi::path_parameter::escape_reserved(parent),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.pipeline, options).await
    }

    async fn delete_pipeline(
        &self,
        req: crate::model::DeletePipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_pipeline(
        &self,
        req: crate::model::GetPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_pipelines(
        &self,
        req: crate::model::ListPipelinesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListPipelinesResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+parent}/pipelines");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/pipelines",
            gaxi::path_parameter::escape_reserved(parent),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .filter
            .iter()
            .fold(builder, |builder, p| builder.query(&[("filter", p)]));
        let builder = req
            .page_size
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageSize", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch_pipeline(
        &self,
        req: crate::model::PatchPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .update_mask
            .iter()
            .fold(builder, |builder, p| builder.query(&[("updateMask", p)]));
        self.inner.execute(builder, req.pipeline, options).await
    }

    async fn run_pipeline(
        &self,
        req: crate::model::RunPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunPipelineResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}:run");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}:run",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn stop_pipeline(
        &self,
        req: crate::model::StopPipelineRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Pipeline>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}:stop");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}:stop",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn list_jobs(
        &self,
        req: crate::model::ListJobsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListJobsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+parent}/jobs");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/jobs",
            gaxi::path_parameter::escape_reserved(parent),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .page_size
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageSize", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
