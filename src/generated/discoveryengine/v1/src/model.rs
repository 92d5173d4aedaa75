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

/// DataStore captures global settings and configs at the DataStore level.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataStore {
    /// Immutable. The full resource name of the data store. Format: `projects/{proj
    /// ect}/locations/{location}/collections/{collection_id}/dataStores/{data_store
    /// _id}`.
    pub name: Option<String>,

    /// Required. The data store display name. This field must be a UTF-8 encoded
    /// string with a length limit of 128 characters.
    pub display_name: Option<String>,

    /// Immutable. The industry vertical that the data store registers.
    pub industry_vertical: Option<crate::model::IndustryVertical>,

    /// The solutions that the data store enrolls.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub solution_types: Vec<crate::model::SolutionType>,

    /// Output only. The id of the default Schema associated to this data store.
    pub default_schema_id: Option<String>,

    /// Immutable. The content config of the data store. If this field is unset, the
    /// server behavior defaults to `NO_CONTENT`.
    pub content_config: Option<crate::model::ContentConfig>,

    /// Output only. Timestamp the DataStore was created at.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Optional. Stores serving config at DataStore level.
    pub serving_config_data_store: Option<crate::model::ServingConfigDataStore>,

    /// Output only. Data size estimation for billing.
    pub billing_estimation: Option<crate::model::BillingEstimation>,

    /// Immutable. Whether data in the DataStore has ACL information.
    pub acl_enabled: Option<bool>,

    /// Input only. The KMS key to be used to protect this DataStore at creation
    /// time.
    pub kms_key_name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DataStore {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DataStore::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::DataStore::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [industry_vertical][crate::model::DataStore::industry_vertical].
    pub fn set_industry_vertical<T: Into<crate::model::IndustryVertical>>(mut self, v: T) -> Self {
        self.industry_vertical = Some(v.into());
        self
    }

    /// Sets the value of [solution_types][crate::model::DataStore::solution_types].
    pub fn set_solution_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SolutionType>,
    {
        self.solution_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [default_schema_id][crate::model::DataStore::default_schema_id].
    pub fn set_default_schema_id<T: Into<String>>(mut self, v: T) -> Self {
        self.default_schema_id = Some(v.into());
        self
    }

    /// Sets the value of [content_config][crate::model::DataStore::content_config].
    pub fn set_content_config<T: Into<crate::model::ContentConfig>>(mut self, v: T) -> Self {
        self.content_config = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::DataStore::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [serving_config_data_store][crate::model::DataStore::serving_config_data_store].
    pub fn set_serving_config_data_store<T: Into<crate::model::ServingConfigDataStore>>(mut self, v: T) -> Self {
        self.serving_config_data_store = Some(v.into());
        self
    }

    /// Sets the value of [billing_estimation][crate::model::DataStore::billing_estimation].
    pub fn set_billing_estimation<T: Into<crate::model::BillingEstimation>>(mut self, v: T) -> Self {
        self.billing_estimation = Some(v.into());
        self
    }

    /// Sets the value of [acl_enabled][crate::model::DataStore::acl_enabled].
    pub fn set_acl_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.acl_enabled = Some(v.into());
        self
    }

    /// Sets the value of [kms_key_name][crate::model::DataStore::kms_key_name].
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_name = Some(v.into());
        self
    }
}

/// Stores information regarding the serving configurations at DataStore level.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServingConfigDataStore {
    /// If set true, the DataStore will not be available for serving search
    /// requests.
    pub disabled_for_serving: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ServingConfigDataStore {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [disabled_for_serving][crate::model::ServingConfigDataStore::disabled_for_serving].
    pub fn set_disabled_for_serving<T: Into<bool>>(mut self, v: T) -> Self {
        self.disabled_for_serving = Some(v.into());
        self
    }
}

/// Estimation of data size per data store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BillingEstimation {
    /// Data size for structured data in terms of bytes.
    #[serde_as(as = "Option<wire::I64>")]
    pub structured_data_size: Option<i64>,

    /// Data size for unstructured data in terms of bytes.
    #[serde_as(as = "Option<wire::I64>")]
    pub unstructured_data_size: Option<i64>,

    /// Data size for websites in terms of bytes.
    #[serde_as(as = "Option<wire::I64>")]
    pub website_data_size: Option<i64>,

    /// Last updated timestamp for structured data.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub structured_data_update_time: Option<time::OffsetDateTime>,

    /// Last updated timestamp for unstructured data.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub unstructured_data_update_time: Option<time::OffsetDateTime>,

    /// Last updated timestamp for websites.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub website_data_update_time: Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BillingEstimation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [structured_data_size][crate::model::BillingEstimation::structured_data_size].
    pub fn set_structured_data_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.structured_data_size = Some(v.into());
        self
    }

    /// Sets the value of [unstructured_data_size][crate::model::BillingEstimation::unstructured_data_size].
    pub fn set_unstructured_data_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.unstructured_data_size = Some(v.into());
        self
    }

    /// Sets the value of [website_data_size][crate::model::BillingEstimation::website_data_size].
    pub fn set_website_data_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.website_data_size = Some(v.into());
        self
    }

    /// Sets the value of [structured_data_update_time][crate::model::BillingEstimation::structured_data_update_time].
    pub fn set_structured_data_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.structured_data_update_time = Some(v.into());
        self
    }

    /// Sets the value of [unstructured_data_update_time][crate::model::BillingEstimation::unstructured_data_update_time].
    pub fn set_unstructured_data_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.unstructured_data_update_time = Some(v.into());
        self
    }

    /// Sets the value of [website_data_update_time][crate::model::BillingEstimation::website_data_update_time].
    pub fn set_website_data_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.website_data_update_time = Some(v.into());
        self
    }
}

/// Document captures all raw metadata information of items to be recommended or
/// searched.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// Immutable. The full resource name of the document. Format: `projects/{projec
    /// t}/locations/{location}/collections/{collection}/dataStores/{data_store}/bra
    /// nches/{branch}/documents/{document_id}`.
    pub name: Option<String>,

    /// Immutable. The identifier of the document.
    pub id: Option<String>,

    /// The identifier of the schema located in the same data store.
    pub schema_id: Option<String>,

    /// The structured JSON data for the document.
    pub struct_data: Option<serde_json::Value>,

    /// The JSON string representation of the document.
    pub json_data: Option<String>,

    /// The unstructured data linked to this document.
    pub content: Option<crate::model::Content>,

    /// The identifier of the parent document. Currently supports at most two level
    /// document hierarchy.
    pub parent_document_id: Option<String>,

    /// Output only. This field is OUTPUT_ONLY. It contains derived data that are
    /// not in the original input document.
    pub derived_struct_data: Option<serde_json::Value>,

    /// Output only. The last time the document was indexed. If this field is set,
    /// the document could be returned in search results.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub index_time: Option<time::OffsetDateTime>,

    /// Output only. The index status of the document.
    pub index_status: Option<crate::model::IndexStatus>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Document {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Document::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::Document::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [schema_id][crate::model::Document::schema_id].
    pub fn set_schema_id<T: Into<String>>(mut self, v: T) -> Self {
        self.schema_id = Some(v.into());
        self
    }

    /// Sets the value of [struct_data][crate::model::Document::struct_data].
    pub fn set_struct_data<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.struct_data = Some(v.into());
        self
    }

    /// Sets the value of [json_data][crate::model::Document::json_data].
    pub fn set_json_data<T: Into<String>>(mut self, v: T) -> Self {
        self.json_data = Some(v.into());
        self
    }

    /// Sets the value of [content][crate::model::Document::content].
    pub fn set_content<T: Into<crate::model::Content>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }

    /// Sets the value of [parent_document_id][crate::model::Document::parent_document_id].
    pub fn set_parent_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.parent_document_id = Some(v.into());
        self
    }

    /// Sets the value of [derived_struct_data][crate::model::Document::derived_struct_data].
    pub fn set_derived_struct_data<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.derived_struct_data = Some(v.into());
        self
    }

    /// Sets the value of [index_time][crate::model::Document::index_time].
    pub fn set_index_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.index_time = Some(v.into());
        self
    }

    /// Sets the value of [index_status][crate::model::Document::index_status].
    pub fn set_index_status<T: Into<crate::model::IndexStatus>>(mut self, v: T) -> Self {
        self.index_status = Some(v.into());
        self
    }
}

/// Unstructured data linked to this document.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Content {
    /// The content represented as a stream of bytes. The maximum length is
    /// 1,000,000 bytes (1 MB / ~0.95 MiB).
    #[serde_as(as = "Option<wire::Base64>")]
    pub raw_bytes: Option<bytes::Bytes>,

    /// The URI of the content. Only Cloud Storage URIs (e.g. `gs://bucket-
    /// name/path/to/file`) are supported.
    pub uri: Option<String>,

    /// The MIME type of the content.
    pub mime_type: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Content {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [raw_bytes][crate::model::Content::raw_bytes].
    pub fn set_raw_bytes<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.raw_bytes = Some(v.into());
        self
    }

    /// Sets the value of [uri][crate::model::Content::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }

    /// Sets the value of [mime_type][crate::model::Content::mime_type].
    pub fn set_mime_type<T: Into<String>>(mut self, v: T) -> Self {
        self.mime_type = Some(v.into());
        self
    }
}

/// Index status of the document.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IndexStatus {
    /// The time when the document was indexed. If this field is populated, it means
    /// the document has been indexed.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub index_time: Option<time::OffsetDateTime>,

    /// A sample of errors encountered while indexing the document. If this field is
    /// populated, the document is not indexed due to errors.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_samples: Vec<rpc::model::Status>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IndexStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [index_time][crate::model::IndexStatus::index_time].
    pub fn set_index_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.index_time = Some(v.into());
        self
    }

    /// Sets the value of [error_samples][crate::model::IndexStatus::error_samples].
    pub fn set_error_samples<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<rpc::model::Status>,
    {
        self.error_samples = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Cloud Storage location for input content.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsSource {
    /// Required. Cloud Storage URIs to input files. Each URI can be up to 2000
    /// characters long.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input_uris: Vec<String>,

    /// The schema to use when parsing the data from the source.
    pub data_schema: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GcsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [input_uris][crate::model::GcsSource::input_uris].
    pub fn set_input_uris<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.input_uris = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [data_schema][crate::model::GcsSource::data_schema].
    pub fn set_data_schema<T: Into<String>>(mut self, v: T) -> Self {
        self.data_schema = Some(v.into());
        self
    }
}

/// The inline source for the input config for ImportDocuments method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InlineSource {
    /// Required. A list of documents to update/create. Each document must have a
    /// valid Document.id. Recommended max of 100 items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<crate::model::Document>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl InlineSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [documents][crate::model::InlineSource::documents].
    pub fn set_documents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Document>,
    {
        self.documents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Configuration of destination for Import related errors.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportErrorConfig {
    /// Cloud Storage prefix for import errors. This must be an empty, existing
    /// Cloud Storage directory.
    pub gcs_prefix: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportErrorConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_prefix][crate::model::ImportErrorConfig::gcs_prefix].
    pub fn set_gcs_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_prefix = Some(v.into());
        self
    }
}

/// Metadata related to the progress of the ImportDocuments operation. This is
/// returned by the google.longrunning.Operation.metadata field.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportDocumentsMetadata {
    /// Operation create time.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Operation last update time. If the operation is done, this is also the
    /// finish time.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub update_time: Option<time::OffsetDateTime>,

    /// Count of entries that were processed successfully.
    #[serde_as(as = "Option<wire::I64>")]
    pub success_count: Option<i64>,

    /// Count of entries that encountered errors while processing.
    #[serde_as(as = "Option<wire::I64>")]
    pub failure_count: Option<i64>,

    /// Total count of entries that were processed.
    #[serde_as(as = "Option<wire::I64>")]
    pub total_count: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportDocumentsMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_time][crate::model::ImportDocumentsMetadata::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::ImportDocumentsMetadata::update_time].
    pub fn set_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [success_count][crate::model::ImportDocumentsMetadata::success_count].
    pub fn set_success_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.success_count = Some(v.into());
        self
    }

    /// Sets the value of [failure_count][crate::model::ImportDocumentsMetadata::failure_count].
    pub fn set_failure_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.failure_count = Some(v.into());
        self
    }

    /// Sets the value of [total_count][crate::model::ImportDocumentsMetadata::total_count].
    pub fn set_total_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.total_count = Some(v.into());
        self
    }
}

/// Response of the ImportDocumentsRequest. If the long running operation is
/// done, then this message is returned by the
/// google.longrunning.Operations.response field if the operation was
/// successful.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportDocumentsResponse {
    /// A sample of errors encountered while processing the request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error_samples: Vec<rpc::model::Status>,

    /// Echoes the destination for the complete errors in the request if set.
    pub error_config: Option<crate::model::ImportErrorConfig>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportDocumentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [error_samples][crate::model::ImportDocumentsResponse::error_samples].
    pub fn set_error_samples<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<rpc::model::Status>,
    {
        self.error_samples = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [error_config][crate::model::ImportDocumentsResponse::error_config].
    pub fn set_error_config<T: Into<crate::model::ImportErrorConfig>>(mut self, v: T) -> Self {
        self.error_config = Some(v.into());
        self
    }
}

/// Metadata related to the progress of the PurgeDocuments operation. This will
/// be returned by the google.longrunning.Operation.metadata field.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PurgeDocumentsMetadata {
    /// Operation create time.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Operation last update time. If the operation is done, this is also the
    /// finish time.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub update_time: Option<time::OffsetDateTime>,

    /// Count of entries that were deleted successfully.
    #[serde_as(as = "Option<wire::I64>")]
    pub success_count: Option<i64>,

    /// Count of entries that encountered errors while processing.
    #[serde_as(as = "Option<wire::I64>")]
    pub failure_count: Option<i64>,

    /// Count of entries that were ignored as entries were not found.
    #[serde_as(as = "Option<wire::I64>")]
    pub ignored_count: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PurgeDocumentsMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_time][crate::model::PurgeDocumentsMetadata::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::PurgeDocumentsMetadata::update_time].
    pub fn set_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [success_count][crate::model::PurgeDocumentsMetadata::success_count].
    pub fn set_success_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.success_count = Some(v.into());
        self
    }

    /// Sets the value of [failure_count][crate::model::PurgeDocumentsMetadata::failure_count].
    pub fn set_failure_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.failure_count = Some(v.into());
        self
    }

    /// Sets the value of [ignored_count][crate::model::PurgeDocumentsMetadata::ignored_count].
    pub fn set_ignored_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.ignored_count = Some(v.into());
        self
    }
}

/// Response message for DocumentService.PurgeDocuments method. If the long
/// running operation is successfully done, then this message is returned by the
/// google.longrunning.Operations.response field.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PurgeDocumentsResponse {
    /// The total count of documents purged as a result of the operation.
    #[serde_as(as = "Option<wire::I64>")]
    pub purge_count: Option<i64>,

    /// A sample of document names that will be deleted. Only populated if `force`
    /// is set to false.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub purge_sample: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PurgeDocumentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [purge_count][crate::model::PurgeDocumentsResponse::purge_count].
    pub fn set_purge_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.purge_count = Some(v.into());
        self
    }

    /// Sets the value of [purge_sample][crate::model::PurgeDocumentsResponse::purge_sample].
    pub fn set_purge_sample<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.purge_sample = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response message for DataStoreService.ListDataStores method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDataStoresResponse {
    /// All the customer's DataStores.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data_stores: Vec<crate::model::DataStore>,

    /// A token that can be sent as ListDataStoresRequest.page_token to retrieve the
    /// next page. If this field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListDataStoresResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data_stores][crate::model::ListDataStoresResponse::data_stores].
    pub fn set_data_stores<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DataStore>,
    {
        self.data_stores = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDataStoresResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// Response message for DocumentService.ListDocuments method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDocumentsResponse {
    /// The Documents.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<crate::model::Document>,

    /// A token that can be sent as ListDocumentsRequest.page_token to retrieve the
    /// next page. If this field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListDocumentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [documents][crate::model::ListDocumentsResponse::documents].
    pub fn set_documents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Document>,
    {
        self.documents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDocumentsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// The industry vertical associated with the DataStore.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct IndustryVertical(std::borrow::Cow<'static, str>);

impl IndustryVertical {
    /// Creates a new IndustryVertical instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [IndustryVertical](IndustryVertical)
pub mod industry_vertical {
    use super::IndustryVertical;

    /// Value used when unset.
    pub const INDUSTRY_VERTICAL_UNSPECIFIED: IndustryVertical = IndustryVertical::new("INDUSTRY_VERTICAL_UNSPECIFIED");

    /// The generic vertical for documents that are not specific to any industry
    /// vertical.
    pub const GENERIC: IndustryVertical = IndustryVertical::new("GENERIC");

    /// The media industry vertical.
    pub const MEDIA: IndustryVertical = IndustryVertical::new("MEDIA");

    /// The healthcare FHIR vertical.
    pub const HEALTHCARE_FHIR: IndustryVertical = IndustryVertical::new("HEALTHCARE_FHIR");
}

impl std::convert::From<&str> for IndustryVertical {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for IndustryVertical {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The type of solution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct SolutionType(std::borrow::Cow<'static, str>);

impl SolutionType {
    /// Creates a new SolutionType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [SolutionType](SolutionType)
pub mod solution_type {
    use super::SolutionType;

    /// Default value.
    pub const SOLUTION_TYPE_UNSPECIFIED: SolutionType = SolutionType::new("SOLUTION_TYPE_UNSPECIFIED");

    /// Used for Recommendations AI.
    pub const SOLUTION_TYPE_RECOMMENDATION: SolutionType = SolutionType::new("SOLUTION_TYPE_RECOMMENDATION");

    /// Used for Discovery Search.
    pub const SOLUTION_TYPE_SEARCH: SolutionType = SolutionType::new("SOLUTION_TYPE_SEARCH");

    /// Used for use cases related to the Generative AI agent.
    pub const SOLUTION_TYPE_CHAT: SolutionType = SolutionType::new("SOLUTION_TYPE_CHAT");

    /// Used for use cases related to the Generative Chat agent.
    pub const SOLUTION_TYPE_GENERATIVE_CHAT: SolutionType = SolutionType::new("SOLUTION_TYPE_GENERATIVE_CHAT");
}

impl std::convert::From<&str> for SolutionType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for SolutionType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Content config of the data store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct ContentConfig(std::borrow::Cow<'static, str>);

impl ContentConfig {
    /// Creates a new ContentConfig instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [ContentConfig](ContentConfig)
pub mod content_config {
    use super::ContentConfig;

    /// Default value.
    pub const CONTENT_CONFIG_UNSPECIFIED: ContentConfig = ContentConfig::new("CONTENT_CONFIG_UNSPECIFIED");

    /// Only contains documents without any Document.content.
    pub const NO_CONTENT: ContentConfig = ContentConfig::new("NO_CONTENT");

    /// Only contains documents with Document.content.
    pub const CONTENT_REQUIRED: ContentConfig = ContentConfig::new("CONTENT_REQUIRED");

    /// The data store is used for public website search.
    pub const PUBLIC_WEBSITE: ContentConfig = ContentConfig::new("PUBLIC_WEBSITE");

    /// The data store is used for workspace search.
    pub const GOOGLE_WORKSPACE: ContentConfig = ContentConfig::new("GOOGLE_WORKSPACE");
}

impl std::convert::From<&str> for ContentConfig {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for ContentConfig {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Indicates how imported documents are reconciled with the existing documents
/// created or imported before.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct ReconciliationMode(std::borrow::Cow<'static, str>);

impl ReconciliationMode {
    /// Creates a new ReconciliationMode instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [ReconciliationMode](ReconciliationMode)
pub mod reconciliation_mode {
    use super::ReconciliationMode;

    /// Defaults to `INCREMENTAL`.
    pub const RECONCILIATION_MODE_UNSPECIFIED: ReconciliationMode = ReconciliationMode::new("RECONCILIATION_MODE_UNSPECIFIED");

    /// Inserts new documents or updates existing documents.
    pub const INCREMENTAL: ReconciliationMode = ReconciliationMode::new("INCREMENTAL");

    /// Calculates diff and replaces the entire document dataset. Existing documents
    /// may be deleted if they are not present in the source location.
    pub const FULL: ReconciliationMode = ReconciliationMode::new("FULL");
}

impl std::convert::From<&str> for ReconciliationMode {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for ReconciliationMode {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [DiscoveryEngine::create_data_store][crate::client::DiscoveryEngine::create_data_store].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDataStoreRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Required. The ID to use for the DataStore, which will become the final
    /// component of the DataStore's resource name.
    pub data_store_id: Option<String>,

    /// A boolean flag indicating whether user want to directly create an advanced
    /// data store for site search.
    pub create_advanced_site_search: Option<bool>,

    /// The request body.
    pub data_store: Option<crate::model::DataStore>,
}

impl CreateDataStoreRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateDataStoreRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [data_store_id][crate::model::CreateDataStoreRequest::data_store_id].
    pub fn set_data_store_id<T: Into<String>>(mut self, v: T) -> Self {
        self.data_store_id = Some(v.into());
        self
    }

    /// Sets the value of [create_advanced_site_search][crate::model::CreateDataStoreRequest::create_advanced_site_search].
    pub fn set_create_advanced_site_search<T: Into<bool>>(mut self, v: T) -> Self {
        self.create_advanced_site_search = Some(v.into());
        self
    }

    /// Sets the value of [data_store][crate::model::CreateDataStoreRequest::data_store].
    pub fn set_data_store<T: Into<crate::model::DataStore>>(mut self, v: T) -> Self {
        self.data_store = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::get_data_store][crate::client::DiscoveryEngine::get_data_store].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDataStoreRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetDataStoreRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetDataStoreRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::delete_data_store][crate::client::DiscoveryEngine::delete_data_store].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDataStoreRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl DeleteDataStoreRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteDataStoreRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::list_data_stores][crate::client::DiscoveryEngine::list_data_stores].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDataStoresRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Filter by solution type. For example: `filter =
    /// 'solution_type:SOLUTION_TYPE_SEARCH'`
    pub filter: Option<String>,

    /// Maximum number of DataStores to return. If unspecified, defaults to 10. The
    /// maximum allowed value is 50.
    pub page_size: Option<i32>,

    /// A page token ListDataStoresResponse.next_page_token, received from a
    /// previous DataStoreService.ListDataStores call.
    pub page_token: Option<String>,
}

impl ListDataStoresRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListDataStoresRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [filter][crate::model::ListDataStoresRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListDataStoresRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListDataStoresRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListDataStoresResponse {
    type PageItem = crate::model::DataStore;

    fn items(self) -> Vec<Self::PageItem> {
        self.data_stores
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [DiscoveryEngine::create_document][crate::client::DiscoveryEngine::create_document].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateDocumentRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Required. The ID to use for the Document, which becomes the final component
    /// of the Document.name.
    pub document_id: Option<String>,

    /// The request body.
    pub document: Option<crate::model::Document>,
}

impl CreateDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateDocumentRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [document_id][crate::model::CreateDocumentRequest::document_id].
    pub fn set_document_id<T: Into<String>>(mut self, v: T) -> Self {
        self.document_id = Some(v.into());
        self
    }

    /// Sets the value of [document][crate::model::CreateDocumentRequest::document].
    pub fn set_document<T: Into<crate::model::Document>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::get_document][crate::client::DiscoveryEngine::get_document].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetDocumentRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetDocumentRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::delete_document][crate::client::DiscoveryEngine::delete_document].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteDocumentRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl DeleteDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteDocumentRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::list_documents][crate::client::DiscoveryEngine::list_documents].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDocumentsRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Maximum number of Documents to return. If unspecified, defaults to 100. The
    /// maximum allowed value is 1000.
    pub page_size: Option<i32>,

    /// A page token ListDocumentsResponse.next_page_token, received from a previous
    /// DocumentService.ListDocuments call.
    pub page_token: Option<String>,
}

impl ListDocumentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListDocumentsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListDocumentsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListDocumentsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListDocumentsResponse {
    type PageItem = crate::model::Document;

    fn items(self) -> Vec<Self::PageItem> {
        self.documents
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [DiscoveryEngine::patch_document][crate::client::DiscoveryEngine::patch_document].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchDocumentRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// If set to `true` and the Document is not found, a new Document is be
    /// created.
    pub allow_missing: Option<bool>,

    /// Indicates which fields in the provided imported 'document' to update. If not
    /// set, by default updates all fields.
    pub update_mask: Option<String>,

    /// The request body.
    pub document: Option<crate::model::Document>,
}

impl PatchDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::PatchDocumentRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [allow_missing][crate::model::PatchDocumentRequest::allow_missing].
    pub fn set_allow_missing<T: Into<bool>>(mut self, v: T) -> Self {
        self.allow_missing = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::PatchDocumentRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets the value of [document][crate::model::PatchDocumentRequest::document].
    pub fn set_document<T: Into<crate::model::Document>>(mut self, v: T) -> Self {
        self.document = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::import_documents][crate::client::DiscoveryEngine::import_documents].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportDocumentsRequest {
    /// The `parent` path parameter.
    #[serde(skip)]
    pub parent: Option<String>,

    /// The Inline source for the input content for documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_source: Option<crate::model::InlineSource>,

    /// Cloud Storage location for the input content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<crate::model::GcsSource>,

    /// The desired location of errors incurred during the Import.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_config: Option<crate::model::ImportErrorConfig>,

    /// The mode of reconciliation between existing documents and the documents to
    /// be imported. Defaults to `INCREMENTAL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciliation_mode: Option<crate::model::ReconciliationMode>,

    /// Whether to automatically generate IDs for the documents if absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate_ids: Option<bool>,

    /// The field indicates the ID field or column to be used as unique IDs of the
    /// documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,
}

impl ImportDocumentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ImportDocumentsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [inline_source][crate::model::ImportDocumentsRequest::inline_source].
    pub fn set_inline_source<T: Into<crate::model::InlineSource>>(mut self, v: T) -> Self {
        self.inline_source = Some(v.into());
        self
    }

    /// Sets the value of [gcs_source][crate::model::ImportDocumentsRequest::gcs_source].
    pub fn set_gcs_source<T: Into<crate::model::GcsSource>>(mut self, v: T) -> Self {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets the value of [error_config][crate::model::ImportDocumentsRequest::error_config].
    pub fn set_error_config<T: Into<crate::model::ImportErrorConfig>>(mut self, v: T) -> Self {
        self.error_config = Some(v.into());
        self
    }

    /// Sets the value of [reconciliation_mode][crate::model::ImportDocumentsRequest::reconciliation_mode].
    pub fn set_reconciliation_mode<T: Into<crate::model::ReconciliationMode>>(mut self, v: T) -> Self {
        self.reconciliation_mode = Some(v.into());
        self
    }

    /// Sets the value of [auto_generate_ids][crate::model::ImportDocumentsRequest::auto_generate_ids].
    pub fn set_auto_generate_ids<T: Into<bool>>(mut self, v: T) -> Self {
        self.auto_generate_ids = Some(v.into());
        self
    }

    /// Sets the value of [id_field][crate::model::ImportDocumentsRequest::id_field].
    pub fn set_id_field<T: Into<String>>(mut self, v: T) -> Self {
        self.id_field = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::purge_documents][crate::client::DiscoveryEngine::purge_documents].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PurgeDocumentsRequest {
    /// The `parent` path parameter.
    #[serde(skip)]
    pub parent: Option<String>,

    /// Required. Filter matching documents to purge. Only currently supported value
    /// is `*` (all items).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Cloud Storage location for the input content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<crate::model::GcsSource>,

    /// The desired location of errors incurred during the purge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_config: Option<crate::model::ImportErrorConfig>,

    /// Actually performs the purge. If `force` is set to false, return the expected
    /// purge count without deleting any documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

impl PurgeDocumentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::PurgeDocumentsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [filter][crate::model::PurgeDocumentsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [gcs_source][crate::model::PurgeDocumentsRequest::gcs_source].
    pub fn set_gcs_source<T: Into<crate::model::GcsSource>>(mut self, v: T) -> Self {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets the value of [error_config][crate::model::PurgeDocumentsRequest::error_config].
    pub fn set_error_config<T: Into<crate::model::ImportErrorConfig>>(mut self, v: T) -> Self {
        self.error_config = Some(v.into());
        self
    }

    /// Sets the value of [force][crate::model::PurgeDocumentsRequest::force].
    pub fn set_force<T: Into<bool>>(mut self, v: T) -> Self {
        self.force = Some(v.into());
        self
    }
}

/// The request for [DiscoveryEngine::get_operation][crate::client::DiscoveryEngine::get_operation].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetOperationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}
