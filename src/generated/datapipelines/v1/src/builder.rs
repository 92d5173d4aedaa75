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

pub mod data_pipelines {
    use crate::Result;

    /// A builder for [DataPipelines][crate::client::DataPipelines].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_datapipelines_v1::*;
    /// # use builder::data_pipelines::ClientBuilder;
    /// # use client::DataPipelines;
    /// let builder : ClientBuilder = DataPipelines::builder();
    /// let client = builder
    ///     .with_endpoint("https://datapipelines.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::DataPipelines;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DataPipelines;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DataPipelines] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DataPipelines::create_pipeline][crate::client::DataPipelines::create_pipeline] calls.
    #[derive(Clone, Debug)]
    pub struct CreatePipeline(RequestBuilder<crate::model::CreatePipelineRequest>);

    impl CreatePipeline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreatePipelineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Pipeline> {
            (*self.0.stub)
                .create_pipeline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreatePipelineRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [pipeline][crate::model::CreatePipelineRequest::pipeline].
        pub fn set_pipeline<T: Into<crate::model::Pipeline>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_pipeline(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreatePipeline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::delete_pipeline][crate::client::DataPipelines::delete_pipeline] calls.
    #[derive(Clone, Debug)]
    pub struct DeletePipeline(RequestBuilder<crate::model::DeletePipelineRequest>);

    impl DeletePipeline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeletePipelineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wire::Empty> {
            (*self.0.stub)
                .delete_pipeline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeletePipelineRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeletePipeline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::get_pipeline][crate::client::DataPipelines::get_pipeline] calls.
    #[derive(Clone, Debug)]
    pub struct GetPipeline(RequestBuilder<crate::model::GetPipelineRequest>);

    impl GetPipeline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetPipelineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Pipeline> {
            (*self.0.stub)
                .get_pipeline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetPipelineRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetPipeline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::list_pipelines][crate::client::DataPipelines::list_pipelines] calls.
    #[derive(Clone, Debug)]
    pub struct ListPipelines(RequestBuilder<crate::model::ListPipelinesRequest>);

    impl ListPipelines {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPipelinesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListPipelinesResponse> {
            (*self.0.stub)
                .list_pipelines(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListPipelinesResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListPipelinesResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListPipelinesRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [filter][crate::model::ListPipelinesRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_filter(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListPipelinesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListPipelinesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListPipelines {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::patch_pipeline][crate::client::DataPipelines::patch_pipeline] calls.
    #[derive(Clone, Debug)]
    pub struct PatchPipeline(RequestBuilder<crate::model::PatchPipelineRequest>);

    impl PatchPipeline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchPipelineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Pipeline> {
            (*self.0.stub)
                .patch_pipeline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::PatchPipelineRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [update_mask][crate::model::PatchPipelineRequest::update_mask].
        pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_update_mask(v);
            self
        }

        /// Sets the value of [pipeline][crate::model::PatchPipelineRequest::pipeline].
        pub fn set_pipeline<T: Into<crate::model::Pipeline>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_pipeline(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PatchPipeline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::run_pipeline][crate::client::DataPipelines::run_pipeline] calls.
    #[derive(Clone, Debug)]
    pub struct RunPipeline(RequestBuilder<crate::model::RunPipelineRequest>);

    impl RunPipeline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RunPipelineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RunPipelineResponse> {
            (*self.0.stub)
                .run_pipeline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::RunPipelineRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RunPipeline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::stop_pipeline][crate::client::DataPipelines::stop_pipeline] calls.
    #[derive(Clone, Debug)]
    pub struct StopPipeline(RequestBuilder<crate::model::StopPipelineRequest>);

    impl StopPipeline {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::StopPipelineRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Pipeline> {
            (*self.0.stub)
                .stop_pipeline(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::StopPipelineRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for StopPipeline {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DataPipelines::list_jobs][crate::client::DataPipelines::list_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListJobs(RequestBuilder<crate::model::ListJobsRequest>);

    impl ListJobs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DataPipelines>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListJobsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListJobsResponse> {
            (*self.0.stub)
                .list_jobs(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListJobsResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListJobsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListJobsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListJobsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListJobsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
