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

/// Implements a [FirebaseStorage](super::stub::FirebaseStorage) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct FirebaseStorage<T>
where
    T: super::stub::FirebaseStorage + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> FirebaseStorage<T>
where
    T: super::stub::FirebaseStorage + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::FirebaseStorage for FirebaseStorage<T>
where
    T: super::stub::FirebaseStorage + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn add_firebase(
        &self,
        req: crate::model::AddFirebaseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Bucket>> {
        self.inner.add_firebase(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_bucket(
        &self,
        req: crate::model::GetBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Bucket>> {
        self.inner.get_bucket(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_buckets(
        &self,
        req: crate::model::ListBucketsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListBucketsResponse>> {
        self.inner.list_buckets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn remove_firebase(
        &self,
        req: crate::model::RemoveFirebaseRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        self.inner.remove_firebase(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_default_bucket(
        &self,
        req: crate::model::CreateDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DefaultBucket>> {
        self.inner.create_default_bucket(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_default_bucket(
        &self,
        req: crate::model::GetDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::DefaultBucket>> {
        self.inner.get_default_bucket(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_default_bucket(
        &self,
        req: crate::model::DeleteDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wire::Empty>> {
        self.inner.delete_default_bucket(req, options).await
    }
}
