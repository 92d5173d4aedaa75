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

/// A dyn-compatible, crate-private version of [super::YoutubeAnalytics].
#[async_trait::async_trait]
pub trait YoutubeAnalytics: std::fmt::Debug + Send + Sync {
    async fn delete_group(
        &self,
        req: crate::model::DeleteGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>>;

    async fn insert_group(
        &self,
        req: crate::model::InsertGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Group>>;

    async fn list_groups(
        &self,
        req: crate::model::ListGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListGroupsResponse>>;

    async fn update_group(
        &self,
        req: crate::model::UpdateGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Group>>;

    async fn delete_group_item(
        &self,
        req: crate::model::DeleteGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>>;

    async fn insert_group_item(
        &self,
        req: crate::model::InsertGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GroupItem>>;

    async fn list_group_items(
        &self,
        req: crate::model::ListGroupItemsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListGroupItemsResponse>>;

    async fn query_reports(
        &self,
        req: crate::model::QueryReportsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryResponse>>;
}

/// All implementations of [super::YoutubeAnalytics] also implement [YoutubeAnalytics].
#[async_trait::async_trait]
impl<T: super::YoutubeAnalytics> YoutubeAnalytics for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn delete_group(
        &self,
        req: crate::model::DeleteGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>> {
        T::delete_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn insert_group(
        &self,
        req: crate::model::InsertGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Group>> {
        T::insert_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_groups(
        &self,
        req: crate::model::ListGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListGroupsResponse>> {
        T::list_groups(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_group(
        &self,
        req: crate::model::UpdateGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Group>> {
        T::update_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_group_item(
        &self,
        req: crate::model::DeleteGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EmptyResponse>> {
        T::delete_group_item(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn insert_group_item(
        &self,
        req: crate::model::InsertGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GroupItem>> {
        T::insert_group_item(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_group_items(
        &self,
        req: crate::model::ListGroupItemsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListGroupItemsResponse>> {
        T::list_group_items(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn query_reports(
        &self,
        req: crate::model::QueryReportsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryResponse>> {
        T::query_reports(self, req, options).await
    }
}
