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

/// Implements a [DriveLabels](super::stub::DriveLabels) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct DriveLabels<T>
where
    T: super::stub::DriveLabels + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> DriveLabels<T>
where
    T: super::stub::DriveLabels + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::DriveLabels for DriveLabels<T>
where
    T: super::stub::DriveLabels + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_label(
        &self,
        req: crate::model::CreateLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        self.inner.create_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        self.inner.get_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListLabelsResponse>> {
        self.inner.list_labels(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        self.inner.delete_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn publish_label(
        &self,
        req: crate::model::PublishLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        self.inner.publish_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disable_label(
        &self,
        req: crate::model::DisableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        self.inner.disable_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn enable_label(
        &self,
        req: crate::model::EnableLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Label>> {
        self.inner.enable_label(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_user_capabilities(
        &self,
        req: crate::model::GetUserCapabilitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UserCapabilities>> {
        self.inner.get_user_capabilities(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_label_limits(
        &self,
        req: crate::model::GetLabelLimitsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelLimits>> {
        self.inner.get_label_limits(req, options).await
    }
}
