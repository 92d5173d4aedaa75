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

/// Implements [DriveLabels](super::stub::DriveLabels) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct DriveLabels {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for DriveLabels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveLabels")
            .field("inner", &self.inner)
            .finish()
    }
}

impl DriveLabels {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST).await?;
        Ok(Self { inner })
    }
}

impl super::stub::DriveLabels for DriveLabels {
    async fn create_label(
        &self,
        req: crate::model::CreateLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v2/labels");
        let path = "/v2/labels".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .language_code
            .iter()
            .fold(builder, |builder, p| builder.query(&[("languageCode", p)]));
        let builder = req
            .use_admin_access
            .iter()
            .fold(builder, |builder, p| builder.query(&[("useAdminAccess", p)]));
        self.inner.execute(builder, req.label, options).await
    }

    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .language_code
            .iter()
            .fold(builder, |builder, p| builder.query(&[("languageCode", p)]));
        let builder = req
            .use_admin_access
            .iter()
            .fold(builder, |builder, p| builder.query(&[("useAdminAccess", p)]));
        let builder = req
            .view
            .iter()
            .fold(builder, |builder, p| builder.query(&[("view", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLabelsResponse>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/labels");
        let path = "/v2/labels".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .customer
            .iter()
            .fold(builder, |builder, p| builder.query(&[("customer", p)]));
        let builder = req
            .language_code
            .iter()
            .fold(builder, |builder, p| builder.query(&[("languageCode", p)]));
        let builder = req
            .minimum_role
            .iter()
            .fold(builder, |builder, p| builder.query(&[("minimumRole", p)]));
        let builder = req
            .page_size
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageSize", p)]));
        let builder = req
            .page_token
            .iter()
            .fold(builder, |builder, p| builder.query(&[("pageToken", p)]));
        let builder = req
            .published_only
            .iter()
            .fold(builder, |builder, p| builder.query(&[("publishedOnly", p)]));
        let builder = req
            .use_admin_access
            .iter()
            .fold(builder, |builder, p| builder.query(&[("useAdminAccess", p)]));
        let builder = req
            .view
            .iter()
            .fold(builder, |builder, p| builder.query(&[("view", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .use_admin_access
            .iter()
            .fold(builder, |builder, p| builder.query(&[("useAdminAccess", p)]));
        let builder = match &req.write_control {
            Some(p) => gaxi::query_parameter::add(builder, "writeControl", p)?,
            None => builder,
        };
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn publish_label(
        &self,
        req: crate::model::PublishLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v2/{+name}:publish");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v2/{}:publish",
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

    async fn disable_label(
        &self,
        req: crate::model::DisableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v2/{+name}:disable");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v2/{}:disable",
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

    async fn enable_label(
        &self,
        req: crate::model::EnableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        let options = gax::options::internal::set_default_idempotency(options, false);
        let options = gax::options::internal::set_path_template(options, "/v2/{+name}:enable");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v2/{}:enable",
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

    async fn get_user_capabilities(
        &self,
        req: crate::model::GetUserCapabilitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UserCapabilities>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/{+name}");
        let name = gaxi::path_parameter::required(&req.name, "name")?;
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::escape_reserved(name),
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .customer
            .iter()
            .fold(builder, |builder, p| builder.query(&[("customer", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_label_limits(
        &self,
        req: crate::model::GetLabelLimitsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelLimits>> {
        let options = gax::options::internal::set_default_idempotency(options, true);
        let options = gax::options::internal::set_path_template(options, "/v2/limits/label");
        let path = "/v2/limits/label".to_string();
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                gaxi::api_header::X_GOOG_API_CLIENT,
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = req
            .name
            .iter()
            .fold(builder, |builder, p| builder.query(&[("name", p)]));
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
