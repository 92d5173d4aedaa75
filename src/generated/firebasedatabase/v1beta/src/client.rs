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

/// Implements a client for the Firebase Realtime Database Management API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_firebasedatabase_v1beta::client::FirebaseDatabase;
/// let client = FirebaseDatabase::builder().build().await?;
/// let mut instances = client
///     .list_instances()
///     .set_parent("projects/my-project/locations/-")
///     .by_item();
/// while let Some(instance) = instances.next().await {
///     let instance = instance?;
///     println!("{instance:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// The Firebase Realtime Database API enables programmatic provisioning and
/// management of Realtime Database instances.
///
/// # Configuration
///
/// To configure `FirebaseDatabase` use the `with_*` methods in the type returned
/// by [builder()][FirebaseDatabase::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://firebasedatabase.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::firebase_database::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firebase_database::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `FirebaseDatabase` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `FirebaseDatabase` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct FirebaseDatabase {
    inner: std::sync::Arc<dyn super::stub::dynamic::FirebaseDatabase>,
}

impl FirebaseDatabase {
    /// Returns a builder for [FirebaseDatabase].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_firebasedatabase_v1beta::client::FirebaseDatabase;
    /// let client = FirebaseDatabase::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::firebase_database::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::firebase_database::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::FirebaseDatabase + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::FirebaseDatabase>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirebaseDatabase> {
        super::transport::FirebaseDatabase::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirebaseDatabase> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::FirebaseDatabase::new)
    }

    /// Requests that a new DatabaseInstance be created. The state of a
    /// successfully created DatabaseInstance is ACTIVE. Only available for
    /// projects on the Blaze plan.
    pub fn create_instance(&self) -> super::builder::firebase_database::CreateInstance {
        super::builder::firebase_database::CreateInstance::new(self.inner.clone())
    }

    /// Marks a DatabaseInstance to be deleted. The DatabaseInstance will be set
    /// to the DELETED state for 20 days, and will be purged within 30 days. The
    /// default database cannot be deleted.
    pub fn delete_instance(&self) -> super::builder::firebase_database::DeleteInstance {
        super::builder::firebase_database::DeleteInstance::new(self.inner.clone())
    }

    /// Gets the DatabaseInstance identified by the specified resource name.
    pub fn get_instance(&self) -> super::builder::firebase_database::GetInstance {
        super::builder::firebase_database::GetInstance::new(self.inner.clone())
    }

    /// Disables a DatabaseInstance. The database can be re-enabled later using
    /// ReenableDatabaseInstance. When a database is disabled, all reads and
    /// writes are denied, including view access in the Firebase console.
    pub fn disable_instance(&self) -> super::builder::firebase_database::DisableInstance {
        super::builder::firebase_database::DisableInstance::new(self.inner.clone())
    }

    /// Enables a DatabaseInstance. The database must have been disabled
    /// previously using DisableDatabaseInstance. The state of a successfully
    /// reenabled DatabaseInstance is ACTIVE.
    pub fn reenable_instance(&self) -> super::builder::firebase_database::ReenableInstance {
        super::builder::firebase_database::ReenableInstance::new(self.inner.clone())
    }

    /// Restores a DatabaseInstance that was previously marked to be deleted.
    /// After the delete method is used, DatabaseInstances are set to the
    /// DELETED state for 20 days, and will be purged within 30 days.
    pub fn undelete_instance(&self) -> super::builder::firebase_database::UndeleteInstance {
        super::builder::firebase_database::UndeleteInstance::new(self.inner.clone())
    }

    /// Lists each DatabaseInstance associated with the specified parent
    /// project. The list items are returned in no particular order, but will be
    /// a consistent view of the database instances when additional requests are
    /// made with a `pageToken`.
    pub fn list_instances(&self) -> super::builder::firebase_database::ListInstances {
        super::builder::firebase_database::ListInstances::new(self.inner.clone())
    }
}
