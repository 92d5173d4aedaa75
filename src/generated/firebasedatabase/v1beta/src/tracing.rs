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

/// Implements a [FirebaseDatabase](super::stub::FirebaseDatabase) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct FirebaseDatabase<T>
where
    T: super::stub::FirebaseDatabase + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> FirebaseDatabase<T>
where
    T: super::stub::FirebaseDatabase + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::FirebaseDatabase for FirebaseDatabase<T>
where
    T: super::stub::FirebaseDatabase + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_instance(
        &self,
        req: crate::model::CreateInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        self.inner.create_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_instance(
        &self,
        req: crate::model::DeleteInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        self.inner.delete_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        self.inner.get_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disable_instance(
        &self,
        req: crate::model::DisableInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        self.inner.disable_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn reenable_instance(
        &self,
        req: crate::model::ReenableInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        self.inner.reenable_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn undelete_instance(
        &self,
        req: crate::model::UndeleteInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DatabaseInstance>> {
        self.inner.undelete_instance(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_instances(
        &self,
        req: crate::model::ListInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDatabaseInstancesResponse>> {
        self.inner.list_instances(req, options).await
    }
}
