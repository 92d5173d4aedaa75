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

pub mod firebase_storage {
    use crate::Result;

    /// A builder for [FirebaseStorage][crate::client::FirebaseStorage].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_firebasestorage_v1beta::*;
    /// # use builder::firebase_storage::ClientBuilder;
    /// # use client::FirebaseStorage;
    /// let builder : ClientBuilder = FirebaseStorage::builder();
    /// let client = builder
    ///     .with_endpoint("https://firebasestorage.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::FirebaseStorage;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = FirebaseStorage;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::FirebaseStorage] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [FirebaseStorage::add_firebase][crate::client::FirebaseStorage::add_firebase] calls.
    #[derive(Clone, Debug)]
    pub struct AddFirebase(RequestBuilder<crate::model::AddFirebaseRequest>);

    impl AddFirebase {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddFirebaseRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Bucket> {
            (*self.0.stub)
                .add_firebase(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::AddFirebaseRequest::bucket].
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_bucket(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddFirebase {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirebaseStorage::get_bucket][crate::client::FirebaseStorage::get_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct GetBucket(RequestBuilder<crate::model::GetBucketRequest>);

    impl GetBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Bucket> {
            (*self.0.stub)
                .get_bucket(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetBucketRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirebaseStorage::list_buckets][crate::client::FirebaseStorage::list_buckets] calls.
    #[derive(Clone, Debug)]
    pub struct ListBuckets(RequestBuilder<crate::model::ListBucketsRequest>);

    impl ListBuckets {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBucketsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListBucketsResponse> {
            (*self.0.stub)
                .list_buckets(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListBucketsResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListBucketsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [parent][crate::model::ListBucketsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListBucketsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListBucketsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBuckets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirebaseStorage::remove_firebase][crate::client::FirebaseStorage::remove_firebase] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveFirebase(RequestBuilder<crate::model::RemoveFirebaseRequest>);

    impl RemoveFirebase {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveFirebaseRequest>>(mut self, v: V) -> Self {
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
                .remove_firebase(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [bucket][crate::model::RemoveFirebaseRequest::bucket].
        pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_bucket(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveFirebase {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirebaseStorage::create_default_bucket][crate::client::FirebaseStorage::create_default_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct CreateDefaultBucket(RequestBuilder<crate::model::CreateDefaultBucketRequest>);

    impl CreateDefaultBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateDefaultBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DefaultBucket> {
            (*self.0.stub)
                .create_default_bucket(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [parent][crate::model::CreateDefaultBucketRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_parent(v);
            self
        }

        /// Sets the value of [default_bucket][crate::model::CreateDefaultBucketRequest::default_bucket].
        pub fn set_default_bucket<T: Into<crate::model::DefaultBucket>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_default_bucket(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateDefaultBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirebaseStorage::get_default_bucket][crate::client::FirebaseStorage::get_default_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct GetDefaultBucket(RequestBuilder<crate::model::GetDefaultBucketRequest>);

    impl GetDefaultBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetDefaultBucketRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::DefaultBucket> {
            (*self.0.stub)
                .get_default_bucket(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetDefaultBucketRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetDefaultBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [FirebaseStorage::delete_default_bucket][crate::client::FirebaseStorage::delete_default_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteDefaultBucket(RequestBuilder<crate::model::DeleteDefaultBucketRequest>);

    impl DeleteDefaultBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::FirebaseStorage>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteDefaultBucketRequest>>(mut self, v: V) -> Self {
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
                .delete_default_bucket(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteDefaultBucketRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteDefaultBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
