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

/// Implements a client for the Drive Labels API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_drivelabels_v2::client::DriveLabels;
/// let client = DriveLabels::builder().build().await?;
/// let mut labels = client.list_labels().set_published_only(true).by_item();
/// while let Some(label) = labels.next().await {
///     let label = label?;
///     println!("{label:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// An API for managing Drive Labels
///
/// # Configuration
///
/// To configure `DriveLabels` use the `with_*` methods in the type returned
/// by [builder()][DriveLabels::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://drivelabels.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::drive_labels::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::drive_labels::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `DriveLabels` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `DriveLabels` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DriveLabels {
    inner: std::sync::Arc<dyn super::stub::dynamic::DriveLabels>,
}

impl DriveLabels {
    /// Returns a builder for [DriveLabels].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_drivelabels_v2::client::DriveLabels;
    /// let client = DriveLabels::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::drive_labels::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::drive_labels::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DriveLabels + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::DriveLabels>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DriveLabels> {
        super::transport::DriveLabels::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DriveLabels> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DriveLabels::new)
    }

    /// Creates a label. For more information, see Create and publish a label.
    pub fn create_label(&self) -> super::builder::drive_labels::CreateLabel {
        super::builder::drive_labels::CreateLabel::new(self.inner.clone())
    }

    /// Get a label by its resource name. For more information, see Search for
    /// labels.
    pub fn get_label(&self) -> super::builder::drive_labels::GetLabel {
        super::builder::drive_labels::GetLabel::new(self.inner.clone())
    }

    /// List labels. For more information, see Search for labels.
    pub fn list_labels(&self) -> super::builder::drive_labels::ListLabels {
        super::builder::drive_labels::ListLabels::new(self.inner.clone())
    }

    /// Permanently deletes a label and related metadata on Drive items. For
    /// more information, see Disable, enable, and delete a label.
    pub fn delete_label(&self) -> super::builder::drive_labels::DeleteLabel {
        super::builder::drive_labels::DeleteLabel::new(self.inner.clone())
    }

    /// Publish all draft changes to the label. Once published, the label may
    /// not return to its draft state.
    pub fn publish_label(&self) -> super::builder::drive_labels::PublishLabel {
        super::builder::drive_labels::PublishLabel::new(self.inner.clone())
    }

    /// Disable a published label. Disabling a label will result in a new
    /// disabled published revision based on the current published revision.
    pub fn disable_label(&self) -> super::builder::drive_labels::DisableLabel {
        super::builder::drive_labels::DisableLabel::new(self.inner.clone())
    }

    /// Enable a disabled label and restore it to its published state. This will
    /// result in a new published revision based on the current disabled
    /// published revision.
    pub fn enable_label(&self) -> super::builder::drive_labels::EnableLabel {
        super::builder::drive_labels::EnableLabel::new(self.inner.clone())
    }

    /// Gets the user capabilities.
    pub fn get_user_capabilities(&self) -> super::builder::drive_labels::GetUserCapabilities {
        super::builder::drive_labels::GetUserCapabilities::new(self.inner.clone())
    }

    /// Get the constraints on the structure of a label; such as, the maximum
    /// number of fields allowed and maximum length of the label title.
    pub fn get_label_limits(&self) -> super::builder::drive_labels::GetLabelLimits {
        super::builder::drive_labels::GetLabelLimits::new(self.inner.clone())
    }
}
