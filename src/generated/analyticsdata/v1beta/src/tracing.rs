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

/// Implements a [AnalyticsData](super::stub::AnalyticsData) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct AnalyticsData<T>
where
    T: super::stub::AnalyticsData + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> AnalyticsData<T>
where
    T: super::stub::AnalyticsData + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::AnalyticsData for AnalyticsData<T>
where
    T: super::stub::AnalyticsData + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn run_report(
        &self,
        req: crate::model::RunReportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunReportResponse>> {
        self.inner.run_report(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn run_pivot_report(
        &self,
        req: crate::model::RunPivotReportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunPivotReportResponse>> {
        self.inner.run_pivot_report(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_run_reports(
        &self,
        req: crate::model::BatchRunReportsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BatchRunReportsResponse>> {
        self.inner.batch_run_reports(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn run_realtime_report(
        &self,
        req: crate::model::RunRealtimeReportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RunRealtimeReportResponse>> {
        self.inner.run_realtime_report(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn check_compatibility(
        &self,
        req: crate::model::CheckCompatibilityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CheckCompatibilityResponse>> {
        self.inner.check_compatibility(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Metadata>> {
        self.inner.get_metadata(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_audience_export(
        &self,
        req: crate::model::CreateAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        self.inner.create_audience_export(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_audience_export(
        &self,
        req: crate::model::GetAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AudienceExport>> {
        self.inner.get_audience_export(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_audience_exports(
        &self,
        req: crate::model::ListAudienceExportsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListAudienceExportsResponse>> {
        self.inner.list_audience_exports(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn query_audience_export(
        &self,
        req: crate::model::QueryAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAudienceExportResponse>> {
        self.inner.query_audience_export(req, options).await
    }
}
