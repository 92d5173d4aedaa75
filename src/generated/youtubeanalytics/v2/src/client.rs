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

/// Implements a client for the YouTube Analytics API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_youtubeanalytics_v2::client::YoutubeAnalytics;
/// let client = YoutubeAnalytics::builder().build().await?;
/// let report = client
///     .query_reports()
///     .set_ids("channel==MINE")
///     .set_start_date("2024-01-01")
///     .set_end_date("2024-01-31")
///     .set_metrics("views,likes")
///     .send()
///     .await?;
/// println!("{report:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Retrieves your YouTube Analytics data.
///
/// # Configuration
///
/// To configure `YoutubeAnalytics` use the `with_*` methods in the type returned
/// by [builder()][YoutubeAnalytics::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://youtubeanalytics.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::youtube_analytics::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::youtube_analytics::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `YoutubeAnalytics` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `YoutubeAnalytics` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct YoutubeAnalytics {
    inner: std::sync::Arc<dyn super::stub::dynamic::YoutubeAnalytics>,
}

impl YoutubeAnalytics {
    /// Returns a builder for [YoutubeAnalytics].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_youtubeanalytics_v2::client::YoutubeAnalytics;
    /// let client = YoutubeAnalytics::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::youtube_analytics::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::youtube_analytics::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::YoutubeAnalytics + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::YoutubeAnalytics>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::YoutubeAnalytics> {
        super::transport::YoutubeAnalytics::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::YoutubeAnalytics> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::YoutubeAnalytics::new)
    }

    /// Deletes a group.
    pub fn delete_group(&self) -> super::builder::youtube_analytics::DeleteGroup {
        super::builder::youtube_analytics::DeleteGroup::new(self.inner.clone())
    }

    /// Creates a group.
    pub fn insert_group(&self) -> super::builder::youtube_analytics::InsertGroup {
        super::builder::youtube_analytics::InsertGroup::new(self.inner.clone())
    }

    /// Returns a collection of groups that match the API request parameters.
    /// For example, you can retrieve all groups that the authenticated user
    /// owns, or you can retrieve one or more groups by their unique IDs.
    pub fn list_groups(&self) -> super::builder::youtube_analytics::ListGroups {
        super::builder::youtube_analytics::ListGroups::new(self.inner.clone())
    }

    /// Modifies a group. For example, you could change a group's title.
    pub fn update_group(&self) -> super::builder::youtube_analytics::UpdateGroup {
        super::builder::youtube_analytics::UpdateGroup::new(self.inner.clone())
    }

    /// Removes an item from a group.
    pub fn delete_group_item(&self) -> super::builder::youtube_analytics::DeleteGroupItem {
        super::builder::youtube_analytics::DeleteGroupItem::new(self.inner.clone())
    }

    /// Creates a group item.
    pub fn insert_group_item(&self) -> super::builder::youtube_analytics::InsertGroupItem {
        super::builder::youtube_analytics::InsertGroupItem::new(self.inner.clone())
    }

    /// Returns a collection of group items that match the API request
    /// parameters.
    pub fn list_group_items(&self) -> super::builder::youtube_analytics::ListGroupItems {
        super::builder::youtube_analytics::ListGroupItems::new(self.inner.clone())
    }

    /// Retrieve your YouTube Analytics reports.
    pub fn query_reports(&self) -> super::builder::youtube_analytics::QueryReports {
        super::builder::youtube_analytics::QueryReports::new(self.inner.clone())
    }
}
