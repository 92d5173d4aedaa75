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

/// Implements a client for the Cloud Storage for Firebase API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_firebasestorage_v1beta::client::FirebaseStorage;
/// let client = FirebaseStorage::builder().build().await?;
/// let bucket = client
///     .get_bucket()
///     .set_name("projects/my-project/buckets/my-bucket")
///     .send()
///     .await?;
/// println!("{bucket:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// The Cloud Storage for Firebase API enables programmatic management of Cloud
/// Storage buckets for use in Firebase projects.
///
/// # Configuration
///
/// To configure `FirebaseStorage` use the `with_*` methods in the type returned
/// by [builder()][FirebaseStorage::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://firebasestorage.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::firebase_storage::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firebase_storage::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `FirebaseStorage` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `FirebaseStorage` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct FirebaseStorage {
    inner: std::sync::Arc<dyn super::stub::dynamic::FirebaseStorage>,
}

impl FirebaseStorage {
    /// Returns a builder for [FirebaseStorage].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_firebasestorage_v1beta::client::FirebaseStorage;
    /// let client = FirebaseStorage::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::firebase_storage::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::firebase_storage::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::FirebaseStorage + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::FirebaseStorage>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirebaseStorage> {
        super::transport::FirebaseStorage::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirebaseStorage> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::FirebaseStorage::new)
    }

    /// Links a Google Cloud Storage bucket to a Firebase project.
    pub fn add_firebase(&self) -> super::builder::firebase_storage::AddFirebase {
        super::builder::firebase_storage::AddFirebase::new(self.inner.clone())
    }

    /// Gets a single linked storage bucket.
    pub fn get_bucket(&self) -> super::builder::firebase_storage::GetBucket {
        super::builder::firebase_storage::GetBucket::new(self.inner.clone())
    }

    /// Lists the linked storage buckets for a project.
    pub fn list_buckets(&self) -> super::builder::firebase_storage::ListBuckets {
        super::builder::firebase_storage::ListBuckets::new(self.inner.clone())
    }

    /// Unlinks a linked Google Cloud Storage bucket from a Firebase project.
    pub fn remove_firebase(&self) -> super::builder::firebase_storage::RemoveFirebase {
        super::builder::firebase_storage::RemoveFirebase::new(self.inner.clone())
    }

    /// Creates a Spark tier-eligible Cloud Storage bucket and links it to your
    /// Firebase project. If the default bucket already exists, this method will
    /// re-link it to your Firebase project.
    pub fn create_default_bucket(&self) -> super::builder::firebase_storage::CreateDefaultBucket {
        super::builder::firebase_storage::CreateDefaultBucket::new(self.inner.clone())
    }

    /// Gets the default bucket.
    pub fn get_default_bucket(&self) -> super::builder::firebase_storage::GetDefaultBucket {
        super::builder::firebase_storage::GetDefaultBucket::new(self.inner.clone())
    }

    /// Unlinks and deletes the default bucket.
    pub fn delete_default_bucket(&self) -> super::builder::firebase_storage::DeleteDefaultBucket {
        super::builder::firebase_storage::DeleteDefaultBucket::new(self.inner.clone())
    }
}
