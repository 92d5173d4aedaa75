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

/// Implements [DiscoveryEngine](super::stub::DiscoveryEngine) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct DiscoveryEngine {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for DiscoveryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscoveryEngine")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DiscoveryEngine {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DiscoveryEngine for DiscoveryEngine {
    async fn create_data_store(
        &self,
        req: crate::model::CreateDataStoreRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1/{+parent}/dataStores");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/dataStores",
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
            .data_store_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("dataStoreId", p)]));
        let builder = req
            .create_advanced_site_search
            .iter()
            .fold(builder, |builder, p| builder.query(&[("createAdvancedSiteSearch", p)]));
        self.inner.execute(builder, req.data_store, options).await
    }

    async fn get_data_store(
        &self,
        req: crate::model::GetDataStoreRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DataStore>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
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

    async fn delete_data_store(
        &self,
        req: crate::model::DeleteDataStoreRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
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

    async fn list_data_stores(
        &self,
        req: crate::model::ListDataStoresRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDataStoresResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options =
            gax::options::internal::set_path_template(options, "/v1/{+parent}/dataStores");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/dataStores",
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
            .filter
            .iter()
            .fold(builder, |builder, p| builder.query(&[("filter", p)]));
        let builder = req
            .page_size
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageSize", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_document(
        &self,
        req: crate::model::CreateDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Document>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1/{+parent}/documents");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/documents",
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
            .document_id
            .iter()
            .fold(builder, |builder, p| builder.query(&[("documentId", p)]));
        self.inner.execute(builder, req.document, options).await
    }

    async fn get_document(
        &self,
        req: crate::model::GetDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Document>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
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

    async fn delete_document(
        &self,
        req: crate::model::DeleteDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
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

    async fn list_documents(
        &self,
        req: crate::model::ListDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDocumentsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+parent}/documents");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/documents",
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
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn patch_document(
        &self,
        req: crate::model::PatchDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Document>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .allow_missing
            .iter()
            .fold(builder, |builder, p| builder.query(&[("allowMissing", p)]));
        let builder = req
            .update_mask
            .iter()
            .fold(builder, |builder, p| builder.query(&[("updateMask", p)]));
        self.inner.execute(builder, req.document, options).await
    }

    async fn import_documents(
        &self,
        req: crate::model::ImportDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1/{+parent}/documents:import");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/documents:import",
            gaxi::path_parameter::escape_reserved(parent),
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

    async fn purge_documents(
        &self,
        req: crate::model::PurgeDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options =
            gax::options::internal::set_path_template(options, "/v1/{+parent}/documents:purge");
        let parent = gaxi::path_parameter::required(&req.parent, "parent")?;
        let path = format!(
            "/v1/{}/documents:purge",
            gaxi::path_parameter::escape_reserved(parent),
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

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v1/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v1/{}",
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
}
