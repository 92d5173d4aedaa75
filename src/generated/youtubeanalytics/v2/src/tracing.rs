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

use crate::Result;

/// Implements a [YoutubeAnalytics](super::stub::YoutubeAnalytics) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct YoutubeAnalytics<T>
where
    T: super::stub::YoutubeAnalytics + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> YoutubeAnalytics<T>
where
    T: super::stub::YoutubeAnalytics + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::YoutubeAnalytics for YoutubeAnalytics<T>
where
    T: super::stub::YoutubeAnalytics + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn delete_group(
        &self,
        req: crate::model::DeleteGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        self.inner.delete_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn insert_group(
        &self,
        req: crate::model::InsertGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        self.inner.insert_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_groups(
        &self,
        req: crate::model::ListGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGroupsResponse>> {
        self.inner.list_groups(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_group(
        &self,
        req: crate::model::UpdateGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        self.inner.update_group(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_group_item(
        &self,
        req: crate::model::DeleteGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        self.inner.delete_group_item(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn insert_group_item(
        &self,
        req: crate::model::InsertGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GroupItem>> {
        self.inner.insert_group_item(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_group_items(
        &self,
        req: crate::model::ListGroupItemsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGroupItemsResponse>> {
        self.inner.list_group_items(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn query_reports(
        &self,
        req: crate::model::QueryReportsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryResponse>> {
        self.inner.query_reports(req, options).await
    }
}
