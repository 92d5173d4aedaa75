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

/// Implements a client for the Data pipelines API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_datapipelines_v1::client::DataPipelines;
/// let client = DataPipelines::builder().build().await?;
/// let mut pipelines = client
///     .list_pipelines()
///     .set_parent("projects/my-project/locations/us-central1")
///     .by_item();
/// while let Some(pipeline) = pipelines.next().await {
///     let pipeline = pipeline?;
///     println!("{pipeline:?}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Data Pipelines provides an interface for creating, updating, and managing
/// recurring Data Analytics jobs.
///
/// # Configuration
///
/// To configure `DataPipelines` use the `with_*` methods in the type returned
/// by [builder()][DataPipelines::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://datapipelines.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::data_pipelines::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::data_pipelines::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `DataPipelines` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `DataPipelines` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct DataPipelines {
    inner: std::sync::Arc<dyn super::stub::dynamic::DataPipelines>,
}

impl DataPipelines {
    /// Returns a builder for [DataPipelines].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_datapipelines_v1::client::DataPipelines;
    /// let client = DataPipelines::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::data_pipelines::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::data_pipelines::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::DataPipelines + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::DataPipelines>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DataPipelines> {
        super::transport::DataPipelines::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::DataPipelines> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::DataPipelines::new)
    }

    /// Creates a pipeline. For a batch pipeline, you can pass scheduler
    /// information. Data Pipelines uses the scheduler information to create an
    /// internal scheduler that runs jobs periodically. If the internal
    /// scheduler is not configured, you can use RunPipeline to run jobs.
    pub fn create_pipeline(&self) -> super::builder::data_pipelines::CreatePipeline {
        super::builder::data_pipelines::CreatePipeline::new(self.inner.clone())
    }

    /// Deletes a pipeline. If a scheduler job is attached to the pipeline, it
    /// will be deleted.
    pub fn delete_pipeline(&self) -> super::builder::data_pipelines::DeletePipeline {
        super::builder::data_pipelines::DeletePipeline::new(self.inner.clone())
    }

    /// Looks up a single pipeline. Returns a "NOT_FOUND" error if no such
    /// pipeline exists. Returns a "FORBIDDEN" error if the caller doesn't have
    /// permission to access it.
    pub fn get_pipeline(&self) -> super::builder::data_pipelines::GetPipeline {
        super::builder::data_pipelines::GetPipeline::new(self.inner.clone())
    }

    /// Lists pipelines. Returns a "FORBIDDEN" error if the caller doesn't have
    /// permission to access it.
    pub fn list_pipelines(&self) -> super::builder::data_pipelines::ListPipelines {
        super::builder::data_pipelines::ListPipelines::new(self.inner.clone())
    }

    /// Updates a pipeline. If successful, the updated Pipeline is returned.
    /// Returns `NOT_FOUND` if the pipeline doesn't exist. If UpdatePipeline
    /// does not return successfully, you can retry the UpdatePipeline request
    /// until you receive a successful response.
    pub fn patch_pipeline(&self) -> super::builder::data_pipelines::PatchPipeline {
        super::builder::data_pipelines::PatchPipeline::new(self.inner.clone())
    }

    /// Creates a job for the specified pipeline directly. You can use this
    /// method when the internal scheduler is not configured and you want to
    /// trigger the job directly or through an external system.
    pub fn run_pipeline(&self) -> super::builder::data_pipelines::RunPipeline {
        super::builder::data_pipelines::RunPipeline::new(self.inner.clone())
    }

    /// Freezes pipeline execution permanently. If there's a corresponding
    /// scheduler entry, it's deleted, and the pipeline state is changed to
    /// "ARCHIVED". However, pipeline metadata is retained.
    pub fn stop_pipeline(&self) -> super::builder::data_pipelines::StopPipeline {
        super::builder::data_pipelines::StopPipeline::new(self.inner.clone())
    }

    /// Lists jobs for a given pipeline. Throws a "FORBIDDEN" error if the
    /// caller doesn't have permission to access it.
    pub fn list_jobs(&self) -> super::builder::data_pipelines::ListJobs {
        super::builder::data_pipelines::ListJobs::new(self.inner.clone())
    }
}
