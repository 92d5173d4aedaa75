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

/// Implements a client for the Discovery Engine API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_discoveryengine_v1::client::DiscoveryEngine;
/// let client = DiscoveryEngine::builder().build().await?;
/// let parent = "projects/my-project/locations/global/collections/default_collection";
/// let mut stores = client.list_data_stores().set_parent(parent).by_item();
/// while let Some(store) = stores.next().await {
///     let store = store?;
///     println!("{store:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Discovery Engine API manages data stores and the documents they contain.
///
/// # Configuration
///
/// To configure `DiscoveryEngine` use the `with_*` methods in the type returned
/// by [builder()][DiscoveryEngine::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://discoveryengine.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::discovery_engine::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::discovery_engine::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `DiscoveryEngine` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `DiscoveryEngine` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DiscoveryEngine {
    inner: std::sync::Arc<dyn super::stub::dynamic::DiscoveryEngine>,
}

impl DiscoveryEngine {
    /// Returns a builder for [DiscoveryEngine].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_discoveryengine_v1::client::DiscoveryEngine;
    /// let client = DiscoveryEngine::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::discovery_engine::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::discovery_engine::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DiscoveryEngine + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::DiscoveryEngine>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DiscoveryEngine> {
        super::transport::DiscoveryEngine::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DiscoveryEngine> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DiscoveryEngine::new)
    }

    /// Creates a DataStore. DataStore is for storing Documents. To serve these
    /// documents for Search, or Recommendation use case, an Engine needs to be
    /// created separately.
    pub fn create_data_store(&self) -> super::builder::discovery_engine::CreateDataStore {
        super::builder::discovery_engine::CreateDataStore::new(self.inner.clone())
    }

    /// Gets a DataStore.
    pub fn get_data_store(&self) -> super::builder::discovery_engine::GetDataStore {
        super::builder::discovery_engine::GetDataStore::new(self.inner.clone())
    }

    /// Deletes a DataStore.
    pub fn delete_data_store(&self) -> super::builder::discovery_engine::DeleteDataStore {
        super::builder::discovery_engine::DeleteDataStore::new(self.inner.clone())
    }

    /// Lists all the DataStores associated with the project.
    pub fn list_data_stores(&self) -> super::builder::discovery_engine::ListDataStores {
        super::builder::discovery_engine::ListDataStores::new(self.inner.clone())
    }

    /// Creates a Document.
    pub fn create_document(&self) -> super::builder::discovery_engine::CreateDocument {
        super::builder::discovery_engine::CreateDocument::new(self.inner.clone())
    }

    /// Gets a Document.
    pub fn get_document(&self) -> super::builder::discovery_engine::GetDocument {
        super::builder::discovery_engine::GetDocument::new(self.inner.clone())
    }

    /// Deletes a Document.
    pub fn delete_document(&self) -> super::builder::discovery_engine::DeleteDocument {
        super::builder::discovery_engine::DeleteDocument::new(self.inner.clone())
    }

    /// Gets a list of Documents.
    pub fn list_documents(&self) -> super::builder::discovery_engine::ListDocuments {
        super::builder::discovery_engine::ListDocuments::new(self.inner.clone())
    }

    /// Updates a Document.
    pub fn patch_document(&self) -> super::builder::discovery_engine::PatchDocument {
        super::builder::discovery_engine::PatchDocument::new(self.inner.clone())
    }

    /// Bulk import of multiple Documents. Request processing may be
    /// synchronous. Non-existing items are created. Note: It is possible for a
    /// subset of the Documents to be successfully updated.
    pub fn import_documents(&self) -> super::builder::discovery_engine::ImportDocuments {
        super::builder::discovery_engine::ImportDocuments::new(self.inner.clone())
    }

    /// Permanently deletes all selected Documents in a branch. This process is
    /// asynchronous. Depending on the number of Documents to be deleted, this
    /// operation can take hours to complete.
    pub fn purge_documents(&self) -> super::builder::discovery_engine::PurgeDocuments {
        super::builder::discovery_engine::PurgeDocuments::new(self.inner.clone())
    }

    /// Gets the latest state of a long-running operation. Clients can use this
    /// method to poll the operation result at intervals as recommended by the
    /// API service.
    pub fn get_operation(&self) -> super::builder::discovery_engine::GetOperation {
        super::builder::discovery_engine::GetOperation::new(self.inner.clone())
    }
}
