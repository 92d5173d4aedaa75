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

/// Implements [AnalyticsData](super::stub::AnalyticsData) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct AnalyticsData {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for AnalyticsData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsData")
            .field("inner", &self.inner)
            .finish()
    }
}

impl AnalyticsData {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::AnalyticsData for AnalyticsData {
    async fn run_report(
        &self,
        req: crate::model::RunReportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunReportResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+property}:runReport");
        let property = gaxi::path_parameter::required(&req.property, "property")?;
        let path = format!(
            "/v1beta/{}:runReport",
            gaxi::path_parameter::escape_reserved(property),
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

    async fn run_pivot_report(
        &self,
        req: crate::model::RunPivotReportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunPivotReportResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+property}:runPivotReport");
        let property = gaxi::path_parameter::required(&req.property, "property")?;
        let path = format!(
            "/v1beta/{}:runPivotReport",
            gaxi::path_parameter::escape_reserved(property),
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

    async fn batch_run_reports(
        &self,
        req: crate::model::BatchRunReportsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BatchRunReportsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+property}:batchRunReports");
        let property = gaxi::path_parameter::required(&req.property, "property")?;
        let path = format!(
            "/v1beta/{}:batchRunReports",
            gaxi::path_parameter::escape_reserved(property),
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

    async fn run_realtime_report(
        &self,
        req: crate::model::RunRealtimeReportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunRealtimeReportResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+property}:runRealtimeReport");
        let property = gaxi::path_parameter::required(&req.property, "property")?;
        let path = format!(
            "/v1beta/{}:runRealtimeReport",
            gaxi::path_parameter::escape_reserved(property),
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

    async fn check_compatibility(
        &self,
        req: crate::model::CheckCompatibilityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CheckCompatibilityResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+property}:checkCompatibility");
        let property = gaxi::path_parameter::required(&req.property, "property")?;
        let path = format!(
            "/v1beta/{}:checkCompatibility",
            gaxi::path_parameter::escape_reserved(property),
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

    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Metadata>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1beta/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}",
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

    async fn create_audience_export(
        &self,
        req: crate::model::CreateAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+parent}/audienceExports");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1beta/{}/audienceExports",
            gaxi::path_parameter::escape_reserved(parent),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.audience_export, options).await
    }

    async fn get_audience_export(
        &self,
        req: crate::model::GetAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AudienceExport>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1beta/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}",
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

    async fn list_audience_exports(
        &self,
        req: crate::model::ListAudienceExportsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListAudienceExportsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+parent}/audienceExports");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1beta/{}/audienceExports",
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

    async fn query_audience_export(
        &self,
        req: crate::model::QueryAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAudienceExportResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1beta/{+name}:query");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}:query",
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
}
