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

pub mod youtube_analytics {
    use crate::Result;

    /// A builder for [YoutubeAnalytics][crate::client::YoutubeAnalytics].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_youtubeanalytics_v2::*;
    /// # use builder::youtube_analytics::ClientBuilder;
    /// # use client::YoutubeAnalytics;
    /// let builder : ClientBuilder = YoutubeAnalytics::builder();
    /// let client = builder
    ///     .with_endpoint("https://youtubeanalytics.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::YoutubeAnalytics;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = YoutubeAnalytics;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::YoutubeAnalytics] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [YoutubeAnalytics::delete_group][crate::client::YoutubeAnalytics::delete_group] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteGroup(RequestBuilder<crate::model::DeleteGroupRequest>);

    impl DeleteGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteGroupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::EmptyResponse> {
            (*self.0.stub)
                .delete_group(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [id][crate::model::DeleteGroupRequest::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_id(v);
            self
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::DeleteGroupRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::insert_group][crate::client::YoutubeAnalytics::insert_group] calls.
    #[derive(Clone, Debug)]
    pub struct InsertGroup(RequestBuilder<crate::model::InsertGroupRequest>);

    impl InsertGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertGroupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Group> {
            (*self.0.stub)
                .insert_group(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::InsertGroupRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }

        /// Sets the value of [group][crate::model::InsertGroupRequest::group].
        pub fn set_group<T: Into<crate::model::Group>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_group(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InsertGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::list_groups][crate::client::YoutubeAnalytics::list_groups] calls.
    #[derive(Clone, Debug)]
    pub struct ListGroups(RequestBuilder<crate::model::ListGroupsRequest>);

    impl ListGroups {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGroupsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListGroupsResponse> {
            (*self.0.stub)
                .list_groups(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListGroupsResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListGroupsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [id][crate::model::ListGroupsRequest::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_id(v);
            self
        }

        /// Sets the value of [mine][crate::model::ListGroupsRequest::mine].
        pub fn set_mine<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_mine(v);
            self
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::ListGroupsRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListGroupsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGroups {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::update_group][crate::client::YoutubeAnalytics::update_group] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateGroup(RequestBuilder<crate::model::UpdateGroupRequest>);

    impl UpdateGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateGroupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Group> {
            (*self.0.stub)
                .update_group(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::UpdateGroupRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }

        /// Sets the value of [group][crate::model::UpdateGroupRequest::group].
        pub fn set_group<T: Into<crate::model::Group>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_group(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::delete_group_item][crate::client::YoutubeAnalytics::delete_group_item] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteGroupItem(RequestBuilder<crate::model::DeleteGroupItemRequest>);

    impl DeleteGroupItem {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteGroupItemRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::EmptyResponse> {
            (*self.0.stub)
                .delete_group_item(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [id][crate::model::DeleteGroupItemRequest::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_id(v);
            self
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::DeleteGroupItemRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteGroupItem {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::insert_group_item][crate::client::YoutubeAnalytics::insert_group_item] calls.
    #[derive(Clone, Debug)]
    pub struct InsertGroupItem(RequestBuilder<crate::model::InsertGroupItemRequest>);

    impl InsertGroupItem {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::InsertGroupItemRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GroupItem> {
            (*self.0.stub)
                .insert_group_item(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::InsertGroupItemRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }

        /// Sets the value of [group_item][crate::model::InsertGroupItemRequest::group_item].
        pub fn set_group_item<T: Into<crate::model::GroupItem>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_group_item(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InsertGroupItem {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::list_group_items][crate::client::YoutubeAnalytics::list_group_items] calls.
    #[derive(Clone, Debug)]
    pub struct ListGroupItems(RequestBuilder<crate::model::ListGroupItemsRequest>);

    impl ListGroupItems {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListGroupItemsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListGroupItemsResponse> {
            (*self.0.stub)
                .list_group_items(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [group_id][crate::model::ListGroupItemsRequest::group_id].
        pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_group_id(v);
            self
        }

        /// Sets the value of [on_behalf_of_content_owner][crate::model::ListGroupItemsRequest::on_behalf_of_content_owner].
        pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_on_behalf_of_content_owner(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListGroupItems {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [YoutubeAnalytics::query_reports][crate::client::YoutubeAnalytics::query_reports] calls.
    #[derive(Clone, Debug)]
    pub struct QueryReports(RequestBuilder<crate::model::QueryReportsRequest>);

    impl QueryReports {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::YoutubeAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::QueryReportsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::QueryResponse> {
            (*self.0.stub)
                .query_reports(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [currency][crate::model::QueryReportsRequest::currency].
        pub fn set_currency<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_currency(v);
            self
        }

        /// Sets the value of [dimensions][crate::model::QueryReportsRequest::dimensions].
        pub fn set_dimensions<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_dimensions(v);
            self
        }

        /// Sets the value of [end_date][crate::model::QueryReportsRequest::end_date].
        pub fn set_end_date<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_end_date(v);
            self
        }

        /// Sets the value of [filters][crate::model::QueryReportsRequest::filters].
        pub fn set_filters<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_filters(v);
            self
        }

        /// Sets the value of [ids][crate::model::QueryReportsRequest::ids].
        pub fn set_ids<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_ids(v);
            self
        }

        /// Sets the value of [include_historical_channel_data][crate::model::QueryReportsRequest::include_historical_channel_data].
        pub fn set_include_historical_channel_data<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_include_historical_channel_data(v);
            self
        }

        /// Sets the value of [max_results][crate::model::QueryReportsRequest::max_results].
        pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_max_results(v);
            self
        }

        /// Sets the value of [metrics][crate::model::QueryReportsRequest::metrics].
        pub fn set_metrics<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_metrics(v);
            self
        }

        /// Sets the value of [sort][crate::model::QueryReportsRequest::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_sort(v);
            self
        }

        /// Sets the value of [start_date][crate::model::QueryReportsRequest::start_date].
        pub fn set_start_date<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_start_date(v);
            self
        }

        /// Sets the value of [start_index][crate::model::QueryReportsRequest::start_index].
        pub fn set_start_index<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_start_index(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for QueryReports {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
