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

/// Implements [FirebaseDatabase](super::stub::FirebaseDatabase) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct FirebaseDatabase {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for FirebaseDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseDatabase")
            .field("inner", &self.inner)
            .finish()
    }
}

impl FirebaseDatabase {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::FirebaseDatabase for FirebaseDatabase {
    async fn create_instance(
        &self,
        req: crate::model::CreateInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+parent}/instances");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1beta/{}/instances",
            gaxi::path_parameter::escape_reserved(parent),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .database_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("databaseId", p)]));
        let builder = req
            .validate_only
            .iter()
            .fold(builder, |builder, p| builder.query(&[("validateOnly", p)]));
        self.inner.execute(builder, req.database_instance, options).await
    }

    async fn delete_instance(
        &self,
        req: crate::model::DeleteInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1beta/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1beta/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn disable_instance(
        &self,
        req: crate::model::DisableInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1beta/{+name}:disable");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}:disable",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn reenable_instance(
        &self,
        req: crate::model::ReenableInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+name}:reenable");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}:reenable",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn undelete_instance(
        &self,
        req: crate::model::UndeleteInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+name}:undelete");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1beta/{}:undelete",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn list_instances(
        &self,
        req: crate::model::ListInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDatabaseInstancesResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v1beta/{+parent}/instances");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1beta/{}/instances",
            gaxi::path_parameter::escape_reserved(parent),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .page_size
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageSize", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        let builder = req
            .show_deleted
            .iter()
            .fold(builder, |builder, p| builder.query(&[("showDeleted", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
