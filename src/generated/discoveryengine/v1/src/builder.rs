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

pub mod discovery_engine {
    use crate::Result;

    /// A builder for [DiscoveryEngine][crate::client::DiscoveryEngine].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_discoveryengine_v1::*;
    /// # use builder::discovery_engine::ClientBuilder;
    /// # use client::DiscoveryEngine;
    /// let builder : ClientBuilder = DiscoveryEngine::builder();
    /// let client = builder
    ///     .with_endpoint("https://discoveryengine.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::DiscoveryEngine;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DiscoveryEngine;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DiscoveryEngine] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DiscoveryEngine::create_data_store][crate::client::DiscoveryEngine::create_data_store] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDataStore(RequestBuilder<crate::model::CreateDataStoreRequest>);

    impl CreateDataStore {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDataStoreRequest>>(mut self, v: V) -> Self {
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
                .create_data_store(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDataStoreRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [data_store_id][crate::model::CreateDataStoreRequest::data_store_id].
        pub fn set_data_store_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_data_store_id(v);
            self
        }

        /// Sets the value of [create_advanced_site_search][crate::model::CreateDataStoreRequest::create_advanced_site_search].
        pub fn set_create_advanced_site_search<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_create_advanced_site_search(v);
            self
        }

        /// Sets the value of [data_store][crate::model::CreateDataStoreRequest::data_store].
        pub fn set_data_store<T: Into<crate::model::DataStore>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_data_store(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDataStore {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::get_data_store][crate::client::DiscoveryEngine::get_data_store] calls.
    #[derive(Clone, Debug)]
    pub struct GetDataStore(RequestBuilder<crate::model::GetDataStoreRequest>);

    impl GetDataStore {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDataStoreRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DataStore> {
            (*self.0.stub)
                .get_data_store(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDataStoreRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDataStore {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::delete_data_store][crate::client::DiscoveryEngine::delete_data_store] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDataStore(RequestBuilder<crate::model::DeleteDataStoreRequest>);

    impl DeleteDataStore {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDataStoreRequest>>(mut self, v: V) -> Self {
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
                .delete_data_store(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteDataStoreRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDataStore {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::list_data_stores][crate::client::DiscoveryEngine::list_data_stores] calls.
    #[derive(Clone, Debug)]
    pub struct ListDataStores(RequestBuilder<crate::model::ListDataStoresRequest>);

    impl ListDataStores {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDataStoresRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDataStoresResponse> {
            (*self.0.stub)
                .list_data_stores(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListDataStoresResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListDataStoresResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListDataStoresRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [filter][crate::model::ListDataStoresRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_filter(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListDataStoresRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListDataStoresRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDataStores {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::create_document][crate::client::DiscoveryEngine::create_document] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDocument(RequestBuilder<crate::model::CreateDocumentRequest>);

    impl CreateDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDocumentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Document> {
            (*self.0.stub)
                .create_document(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDocumentRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [document_id][crate::model::CreateDocumentRequest::document_id].
        pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_document_id(v);
            self
        }

        /// Sets the value of [document][crate::model::CreateDocumentRequest::document].
        pub fn set_document<T: Into<crate::model::Document>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_document(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDocument {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::get_document][crate::client::DiscoveryEngine::get_document] calls.
    #[derive(Clone, Debug)]
    pub struct GetDocument(RequestBuilder<crate::model::GetDocumentRequest>);

    impl GetDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDocumentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Document> {
            (*self.0.stub)
                .get_document(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDocumentRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDocument {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::delete_document][crate::client::DiscoveryEngine::delete_document] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDocument(RequestBuilder<crate::model::DeleteDocumentRequest>);

    impl DeleteDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDocumentRequest>>(mut self, v: V) -> Self {
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
                .delete_document(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteDocumentRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDocument {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::list_documents][crate::client::DiscoveryEngine::list_documents] calls.
    #[derive(Clone, Debug)]
    pub struct ListDocuments(RequestBuilder<crate::model::ListDocumentsRequest>);

    impl ListDocuments {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDocumentsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDocumentsResponse> {
            (*self.0.stub)
                .list_documents(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListDocumentsResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListDocumentsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListDocumentsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListDocumentsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListDocumentsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDocuments {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::patch_document][crate::client::DiscoveryEngine::patch_document] calls.
    #[derive(Clone, Debug)]
    pub struct PatchDocument(RequestBuilder<crate::model::PatchDocumentRequest>);

    impl PatchDocument {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PatchDocumentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Document> {
            (*self.0.stub)
                .patch_document(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::PatchDocumentRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [allow_missing][crate::model::PatchDocumentRequest::allow_missing].
        pub fn set_allow_missing<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_allow_missing(v);
            self
        }

        /// Sets the value of [update_mask][crate::model::PatchDocumentRequest::update_mask].
        pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_update_mask(v);
            self
        }

        /// Sets the value of [document][crate::model::PatchDocumentRequest::document].
        pub fn set_document<T: Into<crate::model::Document>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_document(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PatchDocument {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::import_documents][crate::client::DiscoveryEngine::import_documents] calls.
    #[derive(Clone, Debug)]
    pub struct ImportDocuments(RequestBuilder<crate::model::ImportDocumentsRequest>);

    impl ImportDocuments {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ImportDocumentsRequest>>(mut self, v: V) -> Self {
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
                .import_documents(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::ImportDocumentsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [inline_source][crate::model::ImportDocumentsRequest::inline_source].
        pub fn set_inline_source<T: Into<crate::model::InlineSource>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_inline_source(v);
            self
        }

        /// Sets the value of [gcs_source][crate::model::ImportDocumentsRequest::gcs_source].
        pub fn set_gcs_source<T: Into<crate::model::GcsSource>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_gcs_source(v);
            self
        }

        /// Sets the value of [error_config][crate::model::ImportDocumentsRequest::error_config].
        pub fn set_error_config<T: Into<crate::model::ImportErrorConfig>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_error_config(v);
            self
        }

        /// Sets the value of [reconciliation_mode][crate::model::ImportDocumentsRequest::reconciliation_mode].
        pub fn set_reconciliation_mode<T: Into<crate::model::ReconciliationMode>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_reconciliation_mode(v);
            self
        }

        /// Sets the value of [auto_generate_ids][crate::model::ImportDocumentsRequest::auto_generate_ids].
        pub fn set_auto_generate_ids<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_auto_generate_ids(v);
            self
        }

        /// Sets the value of [id_field][crate::model::ImportDocumentsRequest::id_field].
        pub fn set_id_field<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_id_field(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ImportDocuments {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::purge_documents][crate::client::DiscoveryEngine::purge_documents] calls.
    #[derive(Clone, Debug)]
    pub struct PurgeDocuments(RequestBuilder<crate::model::PurgeDocumentsRequest>);

    impl PurgeDocuments {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PurgeDocumentsRequest>>(mut self, v: V) -> Self {
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
                .purge_documents(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::PurgeDocumentsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [filter][crate::model::PurgeDocumentsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_filter(v);
            self
        }

        /// Sets the value of [gcs_source][crate::model::PurgeDocumentsRequest::gcs_source].
        pub fn set_gcs_source<T: Into<crate::model::GcsSource>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_gcs_source(v);
            self
        }

        /// Sets the value of [error_config][crate::model::PurgeDocumentsRequest::error_config].
        pub fn set_error_config<T: Into<crate::model::ImportErrorConfig>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_error_config(v);
            self
        }

        /// Sets the value of [force][crate::model::PurgeDocumentsRequest::force].
        pub fn set_force<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_force(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PurgeDocuments {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DiscoveryEngine::get_operation][crate::client::DiscoveryEngine::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<crate::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DiscoveryEngine>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetOperationRequest>>(mut self, v: V) -> Self {
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
                .get_operation(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
