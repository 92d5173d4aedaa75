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

/// A dyn-compatible, crate-private version of [super::AnalyticsData].
#[async_trait::async_trait]
pub trait AnalyticsData: std::fmt::Debug + Send + Sync {
    async fn run_report(
        &self,
        req: crate::model::RunReportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunReportResponse>>;

    async fn run_pivot_report(
        &self,
        req: crate::model::RunPivotReportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunPivotReportResponse>>;

    async fn batch_run_reports(
        &self,
        req: crate::model::BatchRunReportsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BatchRunReportsResponse>>;

    async fn run_realtime_report(
        &self,
        req: crate::model::RunRealtimeReportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunRealtimeReportResponse>>;

    async fn check_compatibility(
        &self,
        req: crate::model::CheckCompatibilityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CheckCompatibilityResponse>>;

    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Metadata>>;

    async fn create_audience_export(
        &self,
        req: crate::model::CreateAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn get_audience_export(
        &self,
        req: crate::model::GetAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AudienceExport>>;

    async fn list_audience_exports(
        &self,
        req: crate::model::ListAudienceExportsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListAudienceExportsResponse>>;

    async fn query_audience_export(
        &self,
        req: crate::model::QueryAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryAudienceExportResponse>>;
}

/// All implementations of [super::AnalyticsData] also implement [AnalyticsData].
#[async_trait::async_trait]
impl<T: super::AnalyticsData> AnalyticsData for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn run_report(
        &self,
        req: crate::model::RunReportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunReportResponse>> {
        T::run_report(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn run_pivot_report(
        &self,
        req: crate::model::RunPivotReportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunPivotReportResponse>> {
        T::run_pivot_report(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn batch_run_reports(
        &self,
        req: crate::model::BatchRunReportsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::BatchRunReportsResponse>> {
        T::batch_run_reports(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn run_realtime_report(
        &self,
        req: crate::model::RunRealtimeReportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RunRealtimeReportResponse>> {
        T::run_realtime_report(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn check_compatibility(
        &self,
        req: crate::model::CheckCompatibilityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CheckCompatibilityResponse>> {
        T::check_compatibility(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_metadata(
        &self,
        req: crate::model::GetMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Metadata>> {
        T::get_metadata(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_audience_export(
        &self,
        req: crate::model::CreateAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::create_audience_export(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_audience_export(
        &self,
        req: crate::model::GetAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AudienceExport>> {
        T::get_audience_export(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_audience_exports(
        &self,
        req: crate::model::ListAudienceExportsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListAudienceExportsResponse>> {
        T::list_audience_exports(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn query_audience_export(
        &self,
        req: crate::model::QueryAudienceExportRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryAudienceExportResponse>> {
        T::query_audience_export(self, req, options).await
    }
}
