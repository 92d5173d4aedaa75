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

/// A dyn-compatible, crate-private version of [super::DriveLabels].
#[async_trait::async_trait]
pub trait DriveLabels: std::fmt::Debug + Send + Sync {
    async fn create_label(
        &self,
        req: crate::model::CreateLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>>;

    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>>;

    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLabelsResponse>>;

    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>>;

    async fn publish_label(
        &self,
        req: crate::model::PublishLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>>;

    async fn disable_label(
        &self,
        req: crate::model::DisableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>>;

    async fn enable_label(
        &self,
        req: crate::model::EnableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>>;

    async fn get_user_capabilities(
        &self,
        req: crate::model::GetUserCapabilitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UserCapabilities>>;

    async fn get_label_limits(
        &self,
        req: crate::model::GetLabelLimitsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelLimits>>;
}

/// All implementations of [super::DriveLabels] also implement [DriveLabels].
#[async_trait::async_trait]
impl<T: super::DriveLabels> DriveLabels for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_label(
        &self,
        req: crate::model::CreateLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>> {
        T::create_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>> {
        T::get_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListLabelsResponse>> {
        T::list_labels(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>> {
        T::delete_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn publish_label(
        &self,
        req: crate::model::PublishLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>> {
        T::publish_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn disable_label(
        &self,
        req: crate::model::DisableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>> {
        T::disable_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn enable_label(
        &self,
        req: crate::model::EnableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Label>> {
        T::enable_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_user_capabilities(
        &self,
        req: crate::model::GetUserCapabilitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UserCapabilities>> {
        T::get_user_capabilities(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_label_limits(
        &self,
        req: crate::model::GetLabelLimitsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelLimits>> {
        T::get_label_limits(self, req, options).await
    }
}
