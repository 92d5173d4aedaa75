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

/// Implements a client for the Google Analytics Data API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_analyticsdata_v1beta::client::AnalyticsData;
/// let client = AnalyticsData::builder().build().await?;
/// use google_cloud_analyticsdata_v1beta::model::{DateRange, Dimension, Metric};
/// let response = client
///     .run_report()
///     .set_property("properties/1234")
///     .set_dimensions([Dimension::new().set_name("city")])
///     .set_metrics([Metric::new().set_name("activeUsers")])
///     .set_date_ranges([DateRange::new().set_start_date("7daysAgo").set_end_date("today")])
///     .send()
///     .await?;
/// println!("{response:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Accesses report data in Google Analytics.
///
/// # Configuration
///
/// To configure `AnalyticsData` use the `with_*` methods in the type returned
/// by [builder()][AnalyticsData::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://analyticsdata.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::analytics_data::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::analytics_data::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `AnalyticsData` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `AnalyticsData` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct AnalyticsData {
    inner: std::sync::Arc<dyn super::stub::dynamic::AnalyticsData>,
}

impl AnalyticsData {
    /// Returns a builder for [AnalyticsData].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_analyticsdata_v1beta::client::AnalyticsData;
    /// let client = AnalyticsData::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::analytics_data::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::analytics_data::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::AnalyticsData + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::AnalyticsData>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AnalyticsData> {
        super::transport::AnalyticsData::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::AnalyticsData> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::AnalyticsData::new)
    }

    /// Returns a customized report of your Google Analytics event data. Reports
    /// contain statistics derived from data collected by the Google Analytics
    /// tracking code.
    pub fn run_report(&self) -> super::builder::analytics_data::RunReport {
        super::builder::analytics_data::RunReport::new(self.inner.clone())
    }

    /// Returns a customized pivot report of your Google Analytics event data.
    /// Pivot reports are more advanced and expressive formats than regular
    /// reports.
    pub fn run_pivot_report(&self) -> super::builder::analytics_data::RunPivotReport {
        super::builder::analytics_data::RunPivotReport::new(self.inner.clone())
    }

    /// Returns multiple reports in a batch. All reports must be for the same
    /// Google Analytics property.
    pub fn batch_run_reports(&self) -> super::builder::analytics_data::BatchRunReports {
        super::builder::analytics_data::BatchRunReports::new(self.inner.clone())
    }

    /// Returns a customized report of realtime event data for your property.
    /// Events appear in realtime reports seconds after they have been sent to
    /// the Google Analytics.
    pub fn run_realtime_report(&self) -> super::builder::analytics_data::RunRealtimeReport {
        super::builder::analytics_data::RunRealtimeReport::new(self.inner.clone())
    }

    /// This compatibility method lists dimensions and metrics that can be added
    /// to a report request and maintain compatibility. This method fails if the
    /// request's dimensions and metrics are incompatible.
    pub fn check_compatibility(&self) -> super::builder::analytics_data::CheckCompatibility {
        super::builder::analytics_data::CheckCompatibility::new(self.inner.clone())
    }

    /// Returns metadata for dimensions and metrics available in reporting
    /// methods. Used to explore the dimensions and metrics.
    pub fn get_metadata(&self) -> super::builder::analytics_data::GetMetadata {
        super::builder::analytics_data::GetMetadata::new(self.inner.clone())
    }

    /// Creates an audience export for later retrieval. This method quickly
    /// returns the audience export's resource name and initiates a long running
    /// asynchronous request to form an audience export.
    pub fn create_audience_export(&self) -> super::builder::analytics_data::CreateAudienceExport {
        super::builder::analytics_data::CreateAudienceExport::new(self.inner.clone())
    }

    /// Gets configuration metadata about a specific audience export. This
    /// method can be used to understand an audience export after it has been
    /// created.
    pub fn get_audience_export(&self) -> super::builder::analytics_data::GetAudienceExport {
        super::builder::analytics_data::GetAudienceExport::new(self.inner.clone())
    }

    /// Lists all audience exports for a property. This method can be used for
    /// you to find and reuse existing audience exports rather than creating
    /// unnecessary new audience exports.
    pub fn list_audience_exports(&self) -> super::builder::analytics_data::ListAudienceExports {
        super::builder::analytics_data::ListAudienceExports::new(self.inner.clone())
    }

    /// Retrieves an audience export of users. After creating an audience, the
    /// users are not immediately available for listing.
    pub fn query_audience_export(&self) -> super::builder::analytics_data::QueryAudienceExport {
        super::builder::analytics_data::QueryAudienceExport::new(self.inner.clone())
    }
}
