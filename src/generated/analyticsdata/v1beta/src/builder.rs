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

pub mod analytics_data {
    use crate::Result;

    /// A builder for [AnalyticsData][crate::client::AnalyticsData].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_analyticsdata_v1beta::*;
    /// # use builder::analytics_data::ClientBuilder;
    /// # use client::AnalyticsData;
    /// let builder : ClientBuilder = AnalyticsData::builder();
    /// let client = builder
    ///     .with_endpoint("https://analyticsdata.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::AnalyticsData;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = AnalyticsData;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::AnalyticsData] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [AnalyticsData::run_report][crate::client::AnalyticsData::run_report] calls.
    #[derive(Clone, Debug)]
    pub struct RunReport(RequestBuilder<crate::model::RunReportRequest>);

    impl RunReport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RunReportRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RunReportResponse> {
            (*self.0.stub)
                .run_report(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [property][crate::model::RunReportRequest::property].
        pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_property(v);
            self
        }

        /// Sets the value of [dimensions][crate::model::RunReportRequest::dimensions].
        pub fn set_dimensions<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Dimension>,
        {
            self.0.request = self.0.request.set_dimensions(v);
            self
        }

        /// Sets the value of [metrics][crate::model::RunReportRequest::metrics].
        pub fn set_metrics<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Metric>,
        {
            self.0.request = self.0.request.set_metrics(v);
            self
        }

        /// Sets the value of [date_ranges][crate::model::RunReportRequest::date_ranges].
        pub fn set_date_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::DateRange>,
        {
            self.0.request = self.0.request.set_date_ranges(v);
            self
        }

        /// Sets the value of [dimension_filter][crate::model::RunReportRequest::dimension_filter].
        pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_dimension_filter(v);
            self
        }

        /// Sets the value of [metric_filter][crate::model::RunReportRequest::metric_filter].
        pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_metric_filter(v);
            self
        }

        /// Sets the value of [offset][crate::model::RunReportRequest::offset].
        pub fn set_offset<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_offset(v);
            self
        }

        /// Sets the value of [limit][crate::model::RunReportRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_limit(v);
            self
        }

        /// Sets the value of [metric_aggregations][crate::model::RunReportRequest::metric_aggregations].
        pub fn set_metric_aggregations<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::MetricAggregation>,
        {
            self.0.request = self.0.request.set_metric_aggregations(v);
            self
        }

        /// Sets the value of [order_bys][crate::model::RunReportRequest::order_bys].
        pub fn set_order_bys<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::OrderBy>,
        {
            self.0.request = self.0.request.set_order_bys(v);
            self
        }

        /// Sets the value of [currency_code][crate::model::RunReportRequest::currency_code].
        pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_currency_code(v);
            self
        }

        /// Sets the value of [keep_empty_rows][crate::model::RunReportRequest::keep_empty_rows].
        pub fn set_keep_empty_rows<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_keep_empty_rows(v);
            self
        }

        /// Sets the value of [return_property_quota][crate::model::RunReportRequest::return_property_quota].
        pub fn set_return_property_quota<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_return_property_quota(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RunReport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::run_pivot_report][crate::client::AnalyticsData::run_pivot_report] calls.
    #[derive(Clone, Debug)]
    pub struct RunPivotReport(RequestBuilder<crate::model::RunPivotReportRequest>);

    impl RunPivotReport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RunPivotReportRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RunPivotReportResponse> {
            (*self.0.stub)
                .run_pivot_report(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [property][crate::model::RunPivotReportRequest::property].
        pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_property(v);
            self
        }

        /// Sets the value of [dimensions][crate::model::RunPivotReportRequest::dimensions].
        pub fn set_dimensions<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Dimension>,
        {
            self.0.request = self.0.request.set_dimensions(v);
            self
        }

        /// Sets the value of [metrics][crate::model::RunPivotReportRequest::metrics].
        pub fn set_metrics<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Metric>,
        {
            self.0.request = self.0.request.set_metrics(v);
            self
        }

        /// Sets the value of [date_ranges][crate::model::RunPivotReportRequest::date_ranges].
        pub fn set_date_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::DateRange>,
        {
            self.0.request = self.0.request.set_date_ranges(v);
            self
        }

        /// Sets the value of [pivots][crate::model::RunPivotReportRequest::pivots].
        pub fn set_pivots<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Pivot>,
        {
            self.0.request = self.0.request.set_pivots(v);
            self
        }

        /// Sets the value of [dimension_filter][crate::model::RunPivotReportRequest::dimension_filter].
        pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_dimension_filter(v);
            self
        }

        /// Sets the value of [metric_filter][crate::model::RunPivotReportRequest::metric_filter].
        pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_metric_filter(v);
            self
        }

        /// Sets the value of [currency_code][crate::model::RunPivotReportRequest::currency_code].
        pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_currency_code(v);
            self
        }

        /// Sets the value of [keep_empty_rows][crate::model::RunPivotReportRequest::keep_empty_rows].
        pub fn set_keep_empty_rows<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_keep_empty_rows(v);
            self
        }

        /// Sets the value of [return_property_quota][crate::model::RunPivotReportRequest::return_property_quota].
        pub fn set_return_property_quota<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_return_property_quota(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RunPivotReport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::batch_run_reports][crate::client::AnalyticsData::batch_run_reports] calls.
    #[derive(Clone, Debug)]
    pub struct BatchRunReports(RequestBuilder<crate::model::BatchRunReportsRequest>);

    impl BatchRunReports {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::BatchRunReportsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::BatchRunReportsResponse> {
            (*self.0.stub)
                .batch_run_reports(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [property][crate::model::BatchRunReportsRequest::property].
        pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_property(v);
            self
        }

        /// Sets the value of [requests][crate::model::BatchRunReportsRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::RunReportRequest>,
        {
            self.0.request = self.0.request.set_requests(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for BatchRunReports {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::run_realtime_report][crate::client::AnalyticsData::run_realtime_report] calls.
    #[derive(Clone, Debug)]
    pub struct RunRealtimeReport(RequestBuilder<crate::model::RunRealtimeReportRequest>);

    impl RunRealtimeReport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RunRealtimeReportRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RunRealtimeReportResponse> {
            (*self.0.stub)
                .run_realtime_report(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [property][crate::model::RunRealtimeReportRequest::property].
        pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_property(v);
            self
        }

        /// Sets the value of [dimensions][crate::model::RunRealtimeReportRequest::dimensions].
        pub fn set_dimensions<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Dimension>,
        {
            self.0.request = self.0.request.set_dimensions(v);
            self
        }

        /// Sets the value of [metrics][crate::model::RunRealtimeReportRequest::metrics].
        pub fn set_metrics<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Metric>,
        {
            self.0.request = self.0.request.set_metrics(v);
            self
        }

        /// Sets the value of [dimension_filter][crate::model::RunRealtimeReportRequest::dimension_filter].
        pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_dimension_filter(v);
            self
        }

        /// Sets the value of [metric_filter][crate::model::RunRealtimeReportRequest::metric_filter].
        pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_metric_filter(v);
            self
        }

        /// Sets the value of [limit][crate::model::RunRealtimeReportRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_limit(v);
            self
        }

        /// Sets the value of [metric_aggregations][crate::model::RunRealtimeReportRequest::metric_aggregations].
        pub fn set_metric_aggregations<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::MetricAggregation>,
        {
            self.0.request = self.0.request.set_metric_aggregations(v);
            self
        }

        /// Sets the value of [order_bys][crate::model::RunRealtimeReportRequest::order_bys].
        pub fn set_order_bys<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::OrderBy>,
        {
            self.0.request = self.0.request.set_order_bys(v);
            self
        }

        /// Sets the value of [minute_ranges][crate::model::RunRealtimeReportRequest::minute_ranges].
        pub fn set_minute_ranges<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::MinuteRange>,
        {
            self.0.request = self.0.request.set_minute_ranges(v);
            self
        }

        /// Sets the value of [return_property_quota][crate::model::RunRealtimeReportRequest::return_property_quota].
        pub fn set_return_property_quota<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_return_property_quota(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RunRealtimeReport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::check_compatibility][crate::client::AnalyticsData::check_compatibility] calls.
    #[derive(Clone, Debug)]
    pub struct CheckCompatibility(RequestBuilder<crate::model::CheckCompatibilityRequest>);

    impl CheckCompatibility {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CheckCompatibilityRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::CheckCompatibilityResponse> {
            (*self.0.stub)
                .check_compatibility(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [property][crate::model::CheckCompatibilityRequest::property].
        pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_property(v);
            self
        }

        /// Sets the value of [dimensions][crate::model::CheckCompatibilityRequest::dimensions].
        pub fn set_dimensions<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Dimension>,
        {
            self.0.request = self.0.request.set_dimensions(v);
            self
        }

        /// Sets the value of [metrics][crate::model::CheckCompatibilityRequest::metrics].
        pub fn set_metrics<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::Metric>,
        {
            self.0.request = self.0.request.set_metrics(v);
            self
        }

        /// Sets the value of [dimension_filter][crate::model::CheckCompatibilityRequest::dimension_filter].
        pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_dimension_filter(v);
            self
        }

        /// Sets the value of [metric_filter][crate::model::CheckCompatibilityRequest::metric_filter].
        pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_metric_filter(v);
            self
        }

        /// Sets the value of [compatibility_filter][crate::model::CheckCompatibilityRequest::compatibility_filter].
        pub fn set_compatibility_filter<T: Into<crate::model::Compatibility>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_compatibility_filter(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CheckCompatibility {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::get_metadata][crate::client::AnalyticsData::get_metadata] calls.
    #[derive(Clone, Debug)]
    pub struct GetMetadata(RequestBuilder<crate::model::GetMetadataRequest>);

    impl GetMetadata {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetMetadataRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Metadata> {
            (*self.0.stub)
                .get_metadata(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetMetadataRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetMetadata {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::create_audience_export][crate::client::AnalyticsData::create_audience_export] calls.
    #[derive(Clone, Debug)]
    pub struct CreateAudienceExport(RequestBuilder<crate::model::CreateAudienceExportRequest>);

    impl CreateAudienceExport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateAudienceExportRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<longrunning::model::Operation> {
            (*self.0.stub)
                .create_audience_export(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateAudienceExportRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [audience_export][crate::model::CreateAudienceExportRequest::audience_export].
        pub fn set_audience_export<T: Into<crate::model::AudienceExport>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_audience_export(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateAudienceExport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::get_audience_export][crate::client::AnalyticsData::get_audience_export] calls.
    #[derive(Clone, Debug)]
    pub struct GetAudienceExport(RequestBuilder<crate::model::GetAudienceExportRequest>);

    impl GetAudienceExport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAudienceExportRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::AudienceExport> {
            (*self.0.stub)
                .get_audience_export(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetAudienceExportRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAudienceExport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::list_audience_exports][crate::client::AnalyticsData::list_audience_exports] calls.
    #[derive(Clone, Debug)]
    pub struct ListAudienceExports(RequestBuilder<crate::model::ListAudienceExportsRequest>);

    impl ListAudienceExports {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAudienceExportsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListAudienceExportsResponse> {
            (*self.0.stub)
                .list_audience_exports(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListAudienceExportsResponse, gax::error::Error> {
            use std::clone::Clone;
            let token = self.0.request.page_token.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                if !token.is_empty() {
                    builder.0.request = builder.0.request.set_page_token(token);
                }
                builder.send()
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::ListAudienceExportsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListAudienceExportsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListAudienceExportsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListAudienceExportsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAudienceExports {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [AnalyticsData::query_audience_export][crate::client::AnalyticsData::query_audience_export] calls.
    #[derive(Clone, Debug)]
    pub struct QueryAudienceExport(RequestBuilder<crate::model::QueryAudienceExportRequest>);

    impl QueryAudienceExport {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::AnalyticsData>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::QueryAudienceExportRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::QueryAudienceExportResponse> {
            (*self.0.stub)
                .query_audience_export(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::QueryAudienceExportRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [offset][crate::model::QueryAudienceExportRequest::offset].
        pub fn set_offset<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_offset(v);
            self
        }

        /// Sets the value of [limit][crate::model::QueryAudienceExportRequest::limit].
        pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_limit(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for QueryAudienceExport {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
