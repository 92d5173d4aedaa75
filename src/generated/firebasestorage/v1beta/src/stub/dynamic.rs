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

/// A dyn-compatible, crate-private version of [super::FirebaseStorage].
#[async_trait::async_trait]
pub trait FirebaseStorage: std::fmt::Debug + Send + Sync {
    async fn add_firebase(
        &self,
        req: crate::model::AddFirebaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Bucket>>;

    async fn get_bucket(
        &self,
        req: crate::model::GetBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Bucket>>;

    async fn list_buckets(
        &self,
        req: crate::model::ListBucketsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListBucketsResponse>>;

    async fn remove_firebase(
        &self,
        req: crate::model::RemoveFirebaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>>;

    async fn create_default_bucket(
        &self,
        req: crate::model::CreateDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DefaultBucket>>;

    async fn get_default_bucket(
        &self,
        req: crate::model::GetDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DefaultBucket>>;

    async fn delete_default_bucket(
        &self,
        req: crate::model::DeleteDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>>;
}

/// All implementations of [super::FirebaseStorage] also implement [FirebaseStorage].
#[async_trait::async_trait]
impl<T: super::FirebaseStorage> FirebaseStorage for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn add_firebase(
        &self,
        req: crate::model::AddFirebaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Bucket>> {
        T::add_firebase(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_bucket(
        &self,
        req: crate::model::GetBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Bucket>> {
        T::get_bucket(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_buckets(
        &self,
        req: crate::model::ListBucketsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListBucketsResponse>> {
        T::list_buckets(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_firebase(
        &self,
        req: crate::model::RemoveFirebaseRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>> {
        T::remove_firebase(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_default_bucket(
        &self,
        req: crate::model::CreateDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DefaultBucket>> {
        T::create_default_bucket(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_default_bucket(
        &self,
        req: crate::model::GetDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::DefaultBucket>> {
        T::get_default_bucket(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_default_bucket(
        &self,
        req: crate::model::DeleteDefaultBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<wire::Empty>> {
        T::delete_default_bucket(self, req, options).await
    }
}
