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

/// Implements a client for the Cloud Workstations API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_workstations_v1::client::Workstations;
/// let client = Workstations::builder().build().await?;
/// let parent = "projects/my-project/locations/us-central1";
/// let mut clusters = client.list_workstation_clusters().set_parent(parent).by_item();
/// while let Some(cluster) = clusters.next().await {
///     let cluster = cluster?;
///     println!("{cluster:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Service for interacting with Cloud Workstations.
///
/// # Configuration
///
/// To configure `Workstations` use the `with_*` methods in the type returned
/// by [builder()][Workstations::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://workstations.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::workstations::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::workstations::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Workstations` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `Workstations` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Workstations {
    inner: std::sync::Arc<dyn super::stub::dynamic::Workstations>,
}

impl Workstations {
    /// Returns a builder for [Workstations].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_workstations_v1::client::Workstations;
    /// let client = Workstations::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::workstations::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::workstations::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Workstations + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Workstations>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Workstations> {
        super::transport::Workstations::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Workstations> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Workstations::new)
    }

    /// Creates a new workstation cluster.
    pub fn create_workstation_cluster(&self) -> super::builder::workstations::CreateWorkstationCluster {
        super::builder::workstations::CreateWorkstationCluster::new(self.inner.clone())
    }

    /// Returns the requested workstation cluster.
    pub fn get_workstation_cluster(&self) -> super::builder::workstations::GetWorkstationCluster {
        super::builder::workstations::GetWorkstationCluster::new(self.inner.clone())
    }

    /// Returns all workstation clusters in the specified location.
    pub fn list_workstation_clusters(&self) -> super::builder::workstations::ListWorkstationClusters {
        super::builder::workstations::ListWorkstationClusters::new(self.inner.clone())
    }

    /// Deletes the specified workstation cluster.
    pub fn delete_workstation_cluster(&self) -> super::builder::workstations::DeleteWorkstationCluster {
        super::builder::workstations::DeleteWorkstationCluster::new(self.inner.clone())
    }

    /// Creates a new workstation configuration.
    pub fn create_workstation_config(&self) -> super::builder::workstations::CreateWorkstationConfig {
        super::builder::workstations::CreateWorkstationConfig::new(self.inner.clone())
    }

    /// Returns the requested workstation configuration.
    pub fn get_workstation_config(&self) -> super::builder::workstations::GetWorkstationConfig {
        super::builder::workstations::GetWorkstationConfig::new(self.inner.clone())
    }

    /// Returns all workstation configurations in the specified cluster.
    pub fn list_workstation_configs(&self) -> super::builder::workstations::ListWorkstationConfigs {
        super::builder::workstations::ListWorkstationConfigs::new(self.inner.clone())
    }

    /// Creates a new workstation.
    pub fn create_workstation(&self) -> super::builder::workstations::CreateWorkstation {
        super::builder::workstations::CreateWorkstation::new(self.inner.clone())
    }

    /// Returns the requested workstation.
    pub fn get_workstation(&self) -> super::builder::workstations::GetWorkstation {
        super::builder::workstations::GetWorkstation::new(self.inner.clone())
    }

    /// Returns all Workstations using the specified workstation configuration.
    pub fn list_workstations(&self) -> super::builder::workstations::ListWorkstations {
        super::builder::workstations::ListWorkstations::new(self.inner.clone())
    }

    /// Deletes the specified workstation.
    pub fn delete_workstation(&self) -> super::builder::workstations::DeleteWorkstation {
        super::builder::workstations::DeleteWorkstation::new(self.inner.clone())
    }

    /// Starts running a workstation so that users can connect to it.
    pub fn start_workstation(&self) -> super::builder::workstations::StartWorkstation {
        super::builder::workstations::StartWorkstation::new(self.inner.clone())
    }

    /// Stops running a workstation, reducing costs.
    pub fn stop_workstation(&self) -> super::builder::workstations::StopWorkstation {
        super::builder::workstations::StopWorkstation::new(self.inner.clone())
    }

    /// Returns a short-lived credential that can be used to send authenticated
    /// and authorized traffic to a workstation.
    pub fn generate_access_token(&self) -> super::builder::workstations::GenerateAccessToken {
        super::builder::workstations::GenerateAccessToken::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running operation. Clients can use this
    /// method to poll the operation result at intervals as recommended by the
    /// API service.
    pub fn get_operation(&self) -> super::builder::workstations::GetOperation {
        super::builder::workstations::GetOperation::new(self.inner.clone())
    }
}
