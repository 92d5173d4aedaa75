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

/// Implements [YoutubeAnalytics](super::stub::YoutubeAnalytics) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct YoutubeAnalytics {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for YoutubeAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YoutubeAnalytics")
            .field("inner", &self.inner)
            .finish()
    }
}

impl YoutubeAnalytics {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::YoutubeAnalytics for YoutubeAnalytics {
    async fn delete_group(
        &self,
        req: crate::model::DeleteGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/groups");
        let path = "/v2/groups".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("id", p)]));
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert_group(
        &self,
        req: crate::model::InsertGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v2/groups");
        let path = "/v2/groups".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        self.inner.execute(builder, req.group, options).await
    }

    async fn list_groups(
        &self,
        req: crate::model::ListGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGroupsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/groups");
        let path = "/v2/groups".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("id", p)]));
        let builder = req
            .mine
            .iter()
            .fold(builder, |builder, p| builder.query(&[("mine", p)]));
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_group(
        &self,
        req: crate::model::UpdateGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/groups");
        let path = "/v2/groups".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        self.inner.execute(builder, req.group, options).await
    }

    async fn delete_group_item(
        &self,
        req: crate::model::DeleteGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EmptyResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/groupItems");
        let path = "/v2/groupItems".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("id", p)]));
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn insert_group_item(
        &self,
        req: crate::model::InsertGroupItemRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::GroupItem>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v2/groupItems");
        let path = "/v2/groupItems".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        self.inner.execute(builder, req.group_item, options).await
    }

    async fn list_group_items(
        &self,
        req: crate::model::ListGroupItemsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGroupItemsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/groupItems");
        let path = "/v2/groupItems".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .group_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("groupId", p)]));
        let builder = req
            .on_behalf_of_content_owner
            .iter()
            .fold(builder, |builder, p| builder.query(&[("onBehalfOfContentOwner", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn query_reports(
        &self,
        req: crate::model::QueryReportsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/reports");
        let path = "/v2/reports".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .currency
            .iter()
            .fold(builder, |builder, p| builder.query(&[("currency", p)]));
        let builder = req
            .dimensions
            .iter()
            .fold(builder, |builder, p| builder.query(&[("dimensions", p)]));
        let builder = req
            .end_date
            .iter()
            .fold(builder, |builder, p| builder.query(&[("endDate", p)]));
        let builder = req
            .filters
            .iter()
            .fold(builder, |builder, p| builder.query(&[("filters", p)]));
        let builder = req
            .ids
            .iter()
            .fold(builder, |builder, p| builder.query(&[("ids", p)]));
        let builder = req
            .include_historical_channel_data
            .iter()
            .fold(builder, |builder, p| builder.query(&[("includeHistoricalChannelData", p)]));
        let builder = req
            .max_results
            .iter()
            .fold(builder, |builder, p| builder.query(&[("maxResults", p)]));
        let builder = req
            .metrics
            .iter()
            .fold(builder, |builder, p| builder.query(&[("metrics", p)]));
        let builder = req
            .sort
            .iter()
            .fold(builder, |builder, p| builder.query(&[("sort", p)]));
        let builder = req
            .start_date
            .iter()
            .fold(builder, |builder, p| builder.query(&[("startDate", p)]));
        let builder = req
            .start_index
            .iter()
            .fold(builder, |builder, p| builder.query(&[("startIndex", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
