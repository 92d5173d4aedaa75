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

/// A storage bucket and its relation to a parent Firebase project.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Bucket {
    /// Output only. Resource name of the bucket.
    pub name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Bucket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Bucket::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Spark tier-eligible Cloud Storage bucket. One per project. This resource
/// exists if the underlying Cloud Storage bucket exists and it is linked to
/// your Firebase project.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DefaultBucket {
    /// Identifier. Resource name of the default bucket.
    pub name: Option<String>,

    /// Output only. Underlying bucket resource.
    pub bucket: Option<crate::model::Bucket>,

    /// Immutable. Location of the default bucket.
    pub location: Option<String>,

    /// Optional. Storage class of the default bucket. Supported values are
    /// available at https://cloud.google.com/storage/docs/storage-classes#classes.
    pub storage_class: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DefaultBucket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DefaultBucket::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [bucket][crate::model::DefaultBucket::bucket].
    pub fn set_bucket<T: Into<crate::model::Bucket>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::DefaultBucket::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [storage_class][crate::model::DefaultBucket::storage_class].
    pub fn set_storage_class<T: Into<String>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }
}

/// The response returned by `ListBuckets`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBucketsResponse {
    /// The list of linked buckets.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buckets: Vec<crate::model::Bucket>,

    /// A token that can be sent as `page_token` to retrieve the next page. If this
    /// field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListBucketsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [buckets][crate::model::ListBucketsResponse::buckets].
    pub fn set_buckets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Bucket>,
    {
        self.buckets = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListBucketsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// The request for [FirebaseStorage::add_firebase][crate::client::FirebaseStorage::add_firebase].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddFirebaseRequest {
    /// The `bucket` path parameter.
    #[serde(skip)]
    pub bucket: Option<String>,
}

impl AddFirebaseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::AddFirebaseRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }
}

/// The request for [FirebaseStorage::get_bucket][crate::client::FirebaseStorage::get_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetBucketRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseStorage::list_buckets][crate::client::FirebaseStorage::list_buckets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBucketsRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The maximum number of buckets to return. If not set, the server will use a
    /// reasonable default.
    pub page_size: Option<i32>,

    /// A page token, received from a previous `ListBuckets` call. Provide this to
    /// retrieve the subsequent page.
    pub page_token: Option<String>,
}

impl ListBucketsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListBucketsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListBucketsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListBucketsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListBucketsResponse {
    type PageItem = crate::model::Bucket;

    fn items(self) -> Vec<Self::PageItem> {
        self.buckets
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [FirebaseStorage::remove_firebase][crate::client::FirebaseStorage::remove_firebase].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveFirebaseRequest {
    /// The `bucket` path parameter.
    #[serde(skip)]
    pub bucket: Option<String>,
}

impl RemoveFirebaseRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bucket][crate::model::RemoveFirebaseRequest::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }
}

/// The request for [FirebaseStorage::create_default_bucket][crate::client::FirebaseStorage::create_default_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDefaultBucketRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The request body.
    pub default_bucket: Option<crate::model::DefaultBucket>,
}

impl CreateDefaultBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateDefaultBucketRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [default_bucket][crate::model::CreateDefaultBucketRequest::default_bucket].
    pub fn set_default_bucket<T: Into<crate::model::DefaultBucket>>(mut self, v: T) -> Self {
        self.default_bucket = Some(v.into());
        self
    }
}

/// The request for [FirebaseStorage::get_default_bucket][crate::client::FirebaseStorage::get_default_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDefaultBucketRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetDefaultBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetDefaultBucketRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseStorage::delete_default_bucket][crate::client::FirebaseStorage::delete_default_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDefaultBucketRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl DeleteDefaultBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteDefaultBucketRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}
