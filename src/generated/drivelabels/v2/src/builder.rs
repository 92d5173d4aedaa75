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

pub mod drive_labels {
    use crate::Result;

    /// A builder for [DriveLabels][crate::client::DriveLabels].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_drivelabels_v2::*;
    /// # use builder::drive_labels::ClientBuilder;
    /// # use client::DriveLabels;
    /// let builder : ClientBuilder = DriveLabels::builder();
    /// let client = builder
    ///     .with_endpoint("https://drivelabels.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::DriveLabels;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DriveLabels;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::DriveLabels] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [DriveLabels::create_label][crate::client::DriveLabels::create_label] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLabel(RequestBuilder<crate::model::CreateLabelRequest>);

    impl CreateLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Label> {
            (*self.0.stub)
                .create_label(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [language_code][crate::model::CreateLabelRequest::language_code].
        pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_language_code(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::CreateLabelRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [label][crate::model::CreateLabelRequest::label].
        pub fn set_label<T: Into<crate::model::Label>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_label(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::get_label][crate::client::DriveLabels::get_label] calls.
    #[derive(Clone, Debug)]
    pub struct GetLabel(RequestBuilder<crate::model::GetLabelRequest>);

    impl GetLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Label> {
            (*self.0.stub)
                .get_label(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetLabelRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [language_code][crate::model::GetLabelRequest::language_code].
        pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_language_code(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::GetLabelRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [view][crate::model::GetLabelRequest::view].
        pub fn set_view<T: Into<crate::model::LabelView>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_view(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::list_labels][crate::client::DriveLabels::list_labels] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabels(RequestBuilder<crate::model::ListLabelsRequest>);

    impl ListLabels {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListLabelsResponse> {
            (*self.0.stub)
                .list_labels(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ListLabelsResponse, gax::error::Error> {
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
        ) -> gax::paginator::ItemPaginator<crate::model::ListLabelsResponse, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [customer][crate::model::ListLabelsRequest::customer].
        pub fn set_customer<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_customer(v);
            self
        }

        /// Sets the value of [language_code][crate::model::ListLabelsRequest::language_code].
        pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_language_code(v);
            self
        }

        /// Sets the value of [minimum_role][crate::model::ListLabelsRequest::minimum_role].
        pub fn set_minimum_role<T: Into<crate::model::LabelRole>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_minimum_role(v);
            self
        }

        /// Sets the value of [page_size][crate::model::ListLabelsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_size(v);
            self
        }

        /// Sets the value of [page_token][crate::model::ListLabelsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_page_token(v);
            self
        }

        /// Sets the value of [published_only][crate::model::ListLabelsRequest::published_only].
        pub fn set_published_only<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_published_only(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::ListLabelsRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [view][crate::model::ListLabelsRequest::view].
        pub fn set_view<T: Into<crate::model::LabelView>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_view(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabels {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::delete_label][crate::client::DriveLabels::delete_label] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLabel(RequestBuilder<crate::model::DeleteLabelRequest>);

    impl DeleteLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLabelRequest>>(mut self, v: V) -> Self {
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
                .delete_label(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DeleteLabelRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::DeleteLabelRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [write_control][crate::model::DeleteLabelRequest::write_control].
        pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_write_control(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::publish_label][crate::client::DriveLabels::publish_label] calls.
    #[derive(Clone, Debug)]
    pub struct PublishLabel(RequestBuilder<crate::model::PublishLabelRequest>);

    impl PublishLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PublishLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Label> {
            (*self.0.stub)
                .publish_label(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::PublishLabelRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::PublishLabelRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [write_control][crate::model::PublishLabelRequest::write_control].
        pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_write_control(v);
            self
        }

        /// Sets the value of [language_code][crate::model::PublishLabelRequest::language_code].
        pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_language_code(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PublishLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::disable_label][crate::client::DriveLabels::disable_label] calls.
    #[derive(Clone, Debug)]
    pub struct DisableLabel(RequestBuilder<crate::model::DisableLabelRequest>);

    impl DisableLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Label> {
            (*self.0.stub)
                .disable_label(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::DisableLabelRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [update_mask][crate::model::DisableLabelRequest::update_mask].
        pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_update_mask(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::DisableLabelRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [write_control][crate::model::DisableLabelRequest::write_control].
        pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_write_control(v);
            self
        }

        /// Sets the value of [disabled_policy][crate::model::DisableLabelRequest::disabled_policy].
        pub fn set_disabled_policy<T: Into<crate::model::DisabledPolicy>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_disabled_policy(v);
            self
        }

        /// Sets the value of [language_code][crate::model::DisableLabelRequest::language_code].
        pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_language_code(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::enable_label][crate::client::DriveLabels::enable_label] calls.
    #[derive(Clone, Debug)]
    pub struct EnableLabel(RequestBuilder<crate::model::EnableLabelRequest>);

    impl EnableLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::Label> {
            (*self.0.stub)
                .enable_label(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::EnableLabelRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [use_admin_access][crate::model::EnableLabelRequest::use_admin_access].
        pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_use_admin_access(v);
            self
        }

        /// Sets the value of [write_control][crate::model::EnableLabelRequest::write_control].
        pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_write_control(v);
            self
        }

        /// Sets the value of [language_code][crate::model::EnableLabelRequest::language_code].
        pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_language_code(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::get_user_capabilities][crate::client::DriveLabels::get_user_capabilities] calls.
    #[derive(Clone, Debug)]
    pub struct GetUserCapabilities(RequestBuilder<crate::model::GetUserCapabilitiesRequest>);

    impl GetUserCapabilities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUserCapabilitiesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UserCapabilities> {
            (*self.0.stub)
                .get_user_capabilities(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetUserCapabilitiesRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }

        /// Sets the value of [customer][crate::model::GetUserCapabilitiesRequest::customer].
        pub fn set_customer<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_customer(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUserCapabilities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [DriveLabels::get_label_limits][crate::client::DriveLabels::get_label_limits] calls.
    #[derive(Clone, Debug)]
    pub struct GetLabelLimits(RequestBuilder<crate::model::GetLabelLimitsRequest>);

    impl GetLabelLimits {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::DriveLabels>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLabelLimitsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::LabelLimits> {
            (*self.0.stub)
                .get_label_limits(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [name][crate::model::GetLabelLimitsRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_name(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLabelLimits {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
