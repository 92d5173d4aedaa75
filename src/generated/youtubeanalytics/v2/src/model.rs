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

/// A group.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Group {
    /// Identifies the API resource's type.
    pub kind: Option<String>,

    /// The Etag of this resource.
    pub etag: Option<String>,

    /// The ID that YouTube uses to uniquely identify the group.
    pub id: Option<String>,

    /// The `snippet` object contains basic information about the group, including
    /// its creation date and name.
    pub snippet: Option<crate::model::GroupSnippet>,

    /// The `contentDetails` object contains additional information about the group,
    /// such as the number and type of items that it contains.
    pub content_details: Option<crate::model::GroupContentDetails>,

    /// Apiary error details
    pub errors: Option<crate::model::Errors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Group {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::Group::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::Group::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::Group::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [snippet][crate::model::Group::snippet].
    pub fn set_snippet<T: Into<crate::model::GroupSnippet>>(mut self, v: T) -> Self {
        self.snippet = Some(v.into());
        self
    }

    /// Sets the value of [content_details][crate::model::Group::content_details].
    pub fn set_content_details<T: Into<crate::model::GroupContentDetails>>(mut self, v: T) -> Self {
        self.content_details = Some(v.into());
        self
    }

    /// Sets the value of [errors][crate::model::Group::errors].
    pub fn set_errors<T: Into<crate::model::Errors>>(mut self, v: T) -> Self {
        self.errors = Some(v.into());
        self
    }
}

/// A group snippet.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupSnippet {
    /// The group name. The value must be a non-empty string.
    pub title: Option<String>,

    /// The date and time that the group was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub published_at: Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GroupSnippet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [title][crate::model::GroupSnippet::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [published_at][crate::model::GroupSnippet::published_at].
    pub fn set_published_at<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.published_at = Some(v.into());
        self
    }
}

/// A group's content details.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupContentDetails {
    /// The number of items in the group.
    #[serde_as(as = "Option<wire::U64>")]
    pub item_count: Option<u64>,

    /// The type of resources that the group contains. Valid values for this
    /// property are: * `youtube#channel` * `youtube#playlist` * `youtube#video` *
    /// `youtubePartner#asset`
    pub item_type: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GroupContentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [item_count][crate::model::GroupContentDetails::item_count].
    pub fn set_item_count<T: Into<u64>>(mut self, v: T) -> Self {
        self.item_count = Some(v.into());
        self
    }

    /// Sets the value of [item_type][crate::model::GroupContentDetails::item_type].
    pub fn set_item_type<T: Into<String>>(mut self, v: T) -> Self {
        self.item_type = Some(v.into());
        self
    }
}

/// A group item.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupItem {
    /// Identifies the API resource's type.
    pub kind: Option<String>,

    /// The Etag of this resource.
    pub etag: Option<String>,

    /// The ID that YouTube uses to uniquely identify the `channel`, `video`,
    /// `playlist`, or `asset` resource that is included in the group.
    pub id: Option<String>,

    /// The ID that YouTube uses to uniquely identify the group that contains the
    /// item.
    pub group_id: Option<String>,

    /// The `resource` object contains information that identifies the item being
    /// added to the group.
    pub resource: Option<crate::model::GroupItemResource>,

    /// Apiary error details
    pub errors: Option<crate::model::Errors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GroupItem {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::GroupItem::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::GroupItem::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::GroupItem::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [group_id][crate::model::GroupItem::group_id].
    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }

    /// Sets the value of [resource][crate::model::GroupItem::resource].
    pub fn set_resource<T: Into<crate::model::GroupItemResource>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets the value of [errors][crate::model::GroupItem::errors].
    pub fn set_errors<T: Into<crate::model::Errors>>(mut self, v: T) -> Self {
        self.errors = Some(v.into());
        self
    }
}

/// The resource referenced by a group item.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupItemResource {
    /// Identifies the type of resource being added to the group. Valid values for
    /// this property are: * `youtube#channel` * `youtube#playlist` *
    /// `youtube#video` * `youtubePartner#asset`
    pub kind: Option<String>,

    /// The channel, video, playlist, or asset ID that YouTube uses to uniquely
    /// identify the item that is being added to the group.
    pub id: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GroupItemResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::GroupItemResource::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::GroupItemResource::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }
}

/// Request Error information. The presence of an error field signals that the
/// operation has failed.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Errors {
    /// Request identifier generated by the service, which can be used to identify
    /// the error in the logs
    pub request_id: Option<String>,

    /// Specific error description and codes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub error: Vec<crate::model::ErrorProto>,

    /// Global error code. Deprecated and ignored. Set custom error codes in
    /// ErrorProto.domain and ErrorProto.code instead.
    pub code: Option<crate::model::ErrorCode>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Errors {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_id][crate::model::Errors::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets the value of [error][crate::model::Errors::error].
    pub fn set_error<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ErrorProto>,
    {
        self.error = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [code][crate::model::Errors::code].
    pub fn set_code<T: Into<crate::model::ErrorCode>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }
}

/// Describes one specific error.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorProto {
    /// Error domain. RoSy services can define their own domain and error codes.
    pub domain: Option<String>,

    /// Error code in the error domain. This should correspond to a value of the
    /// enum type whose name is in domain.
    pub reason: Option<String>,

    /// Location of the error, as specified by the location type.
    pub location: Option<String>,

    /// The type of the location of the error.
    pub location_type: Option<crate::model::LocationType>,

    /// Error code in the error domain. This should correspond to a value of the
    /// enum type whose name is in domain.
    pub code: Option<String>,

    /// Error arguments, to be used when building user-friendly error messages given
    /// the error domain and code.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub argument: Vec<String>,

    /// Debugging information, which should not be shared externally.
    pub debug_info: Option<String>,

    /// A short explanation for the error, which can be shared outside Google.
    pub external_error_message: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ErrorProto {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [domain][crate::model::ErrorProto::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = Some(v.into());
        self
    }

    /// Sets the value of [reason][crate::model::ErrorProto::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::ErrorProto::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [location_type][crate::model::ErrorProto::location_type].
    pub fn set_location_type<T: Into<crate::model::LocationType>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }

    /// Sets the value of [code][crate::model::ErrorProto::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets the value of [argument][crate::model::ErrorProto::argument].
    pub fn set_argument<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.argument = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [debug_info][crate::model::ErrorProto::debug_info].
    pub fn set_debug_info<T: Into<String>>(mut self, v: T) -> Self {
        self.debug_info = Some(v.into());
        self
    }

    /// Sets the value of [external_error_message][crate::model::ErrorProto::external_error_message].
    pub fn set_external_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.external_error_message = Some(v.into());
        self
    }
}

/// Response message for GroupsService.ListGroups.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGroupsResponse {
    /// Identifies the API resource's type.
    pub kind: Option<String>,

    /// The Etag of this resource.
    pub etag: Option<String>,

    /// A list of groups that match the API request parameters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<crate::model::Group>,

    /// The token that can be used as the value of the `pageToken` parameter to
    /// retrieve the next page in the result set.
    pub next_page_token: Option<String>,

    /// Apiary error details
    pub errors: Option<crate::model::Errors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListGroupsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::ListGroupsResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::ListGroupsResponse::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [items][crate::model::ListGroupsResponse::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Group>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListGroupsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets the value of [errors][crate::model::ListGroupsResponse::errors].
    pub fn set_errors<T: Into<crate::model::Errors>>(mut self, v: T) -> Self {
        self.errors = Some(v.into());
        self
    }
}

/// Response message for GroupsService.ListGroupItems.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGroupItemsResponse {
    /// Identifies the API resource's type.
    pub kind: Option<String>,

    /// The Etag of this resource.
    pub etag: Option<String>,

    /// A list of groups that match the API request parameters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<crate::model::GroupItem>,

    /// Apiary error details
    pub errors: Option<crate::model::Errors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListGroupItemsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::ListGroupItemsResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::ListGroupItemsResponse::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [items][crate::model::ListGroupItemsResponse::items].
    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::GroupItem>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [errors][crate::model::ListGroupItemsResponse::errors].
    pub fn set_errors<T: Into<crate::model::Errors>>(mut self, v: T) -> Self {
        self.errors = Some(v.into());
        self
    }
}

/// Empty response.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EmptyResponse {
    /// Apiary error details
    pub errors: Option<crate::model::Errors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl EmptyResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [errors][crate::model::EmptyResponse::errors].
    pub fn set_errors<T: Into<crate::model::Errors>>(mut self, v: T) -> Self {
        self.errors = Some(v.into());
        self
    }
}

/// The description of a column of the result table.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResultTableColumnHeader {
    /// The name of the dimension or metric.
    pub name: Option<String>,

    /// The type of the column (`DIMENSION` or `METRIC`).
    pub column_type: Option<String>,

    /// The type of the data in the column (`STRING`, `INTEGER`, `FLOAT`, etc.).
    pub data_type: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ResultTableColumnHeader {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ResultTableColumnHeader::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [column_type][crate::model::ResultTableColumnHeader::column_type].
    pub fn set_column_type<T: Into<String>>(mut self, v: T) -> Self {
        self.column_type = Some(v.into());
        self
    }

    /// Sets the value of [data_type][crate::model::ResultTableColumnHeader::data_type].
    pub fn set_data_type<T: Into<String>>(mut self, v: T) -> Self {
        self.data_type = Some(v.into());
        self
    }
}

/// Response message for TargetedQueriesService.Query.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryResponse {
    /// This value specifies the type of data included in the API response. For the
    /// query method, the kind property value will be
    /// `youtubeAnalytics#resultTable`.
    pub kind: Option<String>,

    /// This value specifies information about the data returned in the `rows`
    /// fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub column_headers: Vec<crate::model::ResultTableColumnHeader>,

    /// The list contains all rows of the result table. Each item in the list is an
    /// array that contains comma-delimited data corresponding to a single row of
    /// data.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<serde_json::Value>,

    /// Apiary error details
    pub errors: Option<crate::model::Errors>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl QueryResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kind][crate::model::QueryResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }

    /// Sets the value of [column_headers][crate::model::QueryResponse::column_headers].
    pub fn set_column_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ResultTableColumnHeader>,
    {
        self.column_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [rows][crate::model::QueryResponse::rows].
    pub fn set_rows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<serde_json::Value>,
    {
        self.rows = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [errors][crate::model::QueryResponse::errors].
    pub fn set_errors<T: Into<crate::model::Errors>>(mut self, v: T) -> Self {
        self.errors = Some(v.into());
        self
    }
}

/// Global error code.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct ErrorCode(std::borrow::Cow<'static, str>);

impl ErrorCode {
    /// Creates a new ErrorCode instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [ErrorCode](ErrorCode)
pub mod error_code {
    use super::ErrorCode;

    /// Bad request.
    pub const BAD_REQUEST: ErrorCode = ErrorCode::new("BAD_REQUEST");

    /// Forbidden.
    pub const FORBIDDEN: ErrorCode = ErrorCode::new("FORBIDDEN");

    /// Not found.
    pub const NOT_FOUND: ErrorCode = ErrorCode::new("NOT_FOUND");

    /// Conflict.
    pub const CONFLICT: ErrorCode = ErrorCode::new("CONFLICT");

    /// Gone.
    pub const GONE: ErrorCode = ErrorCode::new("GONE");

    /// Precondition failed.
    pub const PRECONDITION_FAILED: ErrorCode = ErrorCode::new("PRECONDITION_FAILED");

    /// Internal error.
    pub const INTERNAL_ERROR: ErrorCode = ErrorCode::new("INTERNAL_ERROR");

    /// Service unavailable.
    pub const SERVICE_UNAVAILABLE: ErrorCode = ErrorCode::new("SERVICE_UNAVAILABLE");
}

impl std::convert::From<&str> for ErrorCode {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for ErrorCode {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The type of the location of an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct LocationType(std::borrow::Cow<'static, str>);

impl LocationType {
    /// Creates a new LocationType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [LocationType](LocationType)
pub mod location_type {
    use super::LocationType;

    /// location is an xpath-like path pointing to the request field that caused the
    /// error.
    pub const PATH: LocationType = LocationType::new("PATH");

    /// other location type which can safely be shared externally.
    pub const OTHER: LocationType = LocationType::new("OTHER");

    /// Location is request parameter. This maps to the {@link PARAMETERS} in {@link
    /// MessageLocation}.
    pub const PARAMETER: LocationType = LocationType::new("PARAMETER");
}

impl std::convert::From<&str> for LocationType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for LocationType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [YoutubeAnalytics::delete_group][crate::client::YoutubeAnalytics::delete_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGroupRequest {
    /// The `id` parameter specifies the YouTube group ID of the group that is being
    /// deleted.
    pub id: Option<String>,

    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,
}

impl DeleteGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteGroupRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::DeleteGroupRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }
}

/// The request for [YoutubeAnalytics::insert_group][crate::client::YoutubeAnalytics::insert_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertGroupRequest {
    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,

    /// The request body.
    pub group: Option<crate::model::Group>,
}

impl InsertGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::InsertGroupRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }

    /// Sets the value of [group][crate::model::InsertGroupRequest::group].
    pub fn set_group<T: Into<crate::model::Group>>(mut self, v: T) -> Self {
        self.group = Some(v.into());
        self
    }
}

/// The request for [YoutubeAnalytics::list_groups][crate::client::YoutubeAnalytics::list_groups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGroupsRequest {
    /// The `id` parameter specifies a comma-separated list of the YouTube group
    /// ID(s) for the resource(s) that are being retrieved.
    pub id: Option<String>,

    /// This parameter can only be used in a properly authorized request. Set this
    /// parameter's value to true to retrieve all groups owned by the authenticated
    /// user.
    pub mine: Option<bool>,

    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,

    /// The `pageToken` parameter identifies a specific page in the result set that
    /// should be returned.
    pub page_token: Option<String>,
}

impl ListGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::ListGroupsRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [mine][crate::model::ListGroupsRequest::mine].
    pub fn set_mine<T: Into<bool>>(mut self, v: T) -> Self {
        self.mine = Some(v.into());
        self
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::ListGroupsRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListGroupsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListGroupsResponse {
    type PageItem = crate::model::Group;

    fn items(self) -> Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [YoutubeAnalytics::update_group][crate::client::YoutubeAnalytics::update_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateGroupRequest {
    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,

    /// The request body.
    pub group: Option<crate::model::Group>,
}

impl UpdateGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::UpdateGroupRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }

    /// Sets the value of [group][crate::model::UpdateGroupRequest::group].
    pub fn set_group<T: Into<crate::model::Group>>(mut self, v: T) -> Self {
        self.group = Some(v.into());
        self
    }
}

/// The request for [YoutubeAnalytics::delete_group_item][crate::client::YoutubeAnalytics::delete_group_item].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteGroupItemRequest {
    /// The `id` parameter specifies the YouTube group item ID of the group item
    /// that is being deleted.
    pub id: Option<String>,

    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,
}

impl DeleteGroupItemRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::DeleteGroupItemRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::DeleteGroupItemRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }
}

/// The request for [YoutubeAnalytics::insert_group_item][crate::client::YoutubeAnalytics::insert_group_item].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct InsertGroupItemRequest {
    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,

    /// The request body.
    pub group_item: Option<crate::model::GroupItem>,
}

impl InsertGroupItemRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::InsertGroupItemRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }

    /// Sets the value of [group_item][crate::model::InsertGroupItemRequest::group_item].
    pub fn set_group_item<T: Into<crate::model::GroupItem>>(mut self, v: T) -> Self {
        self.group_item = Some(v.into());
        self
    }
}

/// The request for [YoutubeAnalytics::list_group_items][crate::client::YoutubeAnalytics::list_group_items].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListGroupItemsRequest {
    /// The `groupId` parameter specifies the unique ID of the group for which you
    /// want to retrieve group items.
    pub group_id: Option<String>,

    /// This parameter can only be used in a properly authorized request. **Note:**
    /// This parameter is intended exclusively for YouTube content partners that own
    /// and manage many different YouTube channels.
    pub on_behalf_of_content_owner: Option<String>,
}

impl ListGroupItemsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group_id][crate::model::ListGroupItemsRequest::group_id].
    pub fn set_group_id<T: Into<String>>(mut self, v: T) -> Self {
        self.group_id = Some(v.into());
        self
    }

    /// Sets the value of [on_behalf_of_content_owner][crate::model::ListGroupItemsRequest::on_behalf_of_content_owner].
    pub fn set_on_behalf_of_content_owner<T: Into<String>>(mut self, v: T) -> Self {
        self.on_behalf_of_content_owner = Some(v.into());
        self
    }
}

/// The request for [YoutubeAnalytics::query_reports][crate::client::YoutubeAnalytics::query_reports].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct QueryReportsRequest {
    /// The currency to which financial metrics should be converted. The default is
    /// US Dollar (USD).
    pub currency: Option<String>,

    /// A comma-separated list of YouTube Analytics dimensions, such as `views` or
    /// `ageGroup,gender`.
    pub dimensions: Option<String>,

    /// The end date for fetching YouTube Analytics data. The value should be in
    /// `YYYY-MM-DD` format.
    pub end_date: Option<String>,

    /// A list of filters that should be applied when retrieving YouTube Analytics
    /// data.
    pub filters: Option<String>,

    /// Identifies the YouTube channel or content owner for which you are retrieving
    /// YouTube Analytics data.
    pub ids: Option<String>,

    /// If set to true historical data (i.e. channel data from before the linking of
    /// the channel to the content owner) will be retrieved.
    pub include_historical_channel_data: Option<bool>,

    /// The maximum number of rows to include in the response.
    pub max_results: Option<i32>,

    /// A comma-separated list of YouTube Analytics metrics, such as `views` or
    /// `likes,dislikes`.
    pub metrics: Option<String>,

    /// A comma-separated list of dimensions or metrics that determine the sort
    /// order for YouTube Analytics data.
    pub sort: Option<String>,

    /// The start date for fetching YouTube Analytics data. The value should be in
    /// `YYYY-MM-DD` format.
    pub start_date: Option<String>,

    /// An index of the first entity to retrieve. Use this parameter as a pagination
    /// mechanism along with the max-results parameter (one-based, inclusive).
    pub start_index: Option<i32>,
}

impl QueryReportsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [currency][crate::model::QueryReportsRequest::currency].
    pub fn set_currency<T: Into<String>>(mut self, v: T) -> Self {
        self.currency = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::QueryReportsRequest::dimensions].
    pub fn set_dimensions<T: Into<String>>(mut self, v: T) -> Self {
        self.dimensions = Some(v.into());
        self
    }

    /// Sets the value of [end_date][crate::model::QueryReportsRequest::end_date].
    pub fn set_end_date<T: Into<String>>(mut self, v: T) -> Self {
        self.end_date = Some(v.into());
        self
    }

    /// Sets the value of [filters][crate::model::QueryReportsRequest::filters].
    pub fn set_filters<T: Into<String>>(mut self, v: T) -> Self {
        self.filters = Some(v.into());
        self
    }

    /// Sets the value of [ids][crate::model::QueryReportsRequest::ids].
    pub fn set_ids<T: Into<String>>(mut self, v: T) -> Self {
        self.ids = Some(v.into());
        self
    }

    /// Sets the value of [include_historical_channel_data][crate::model::QueryReportsRequest::include_historical_channel_data].
    pub fn set_include_historical_channel_data<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_historical_channel_data = Some(v.into());
        self
    }

    /// Sets the value of [max_results][crate::model::QueryReportsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [metrics][crate::model::QueryReportsRequest::metrics].
    pub fn set_metrics<T: Into<String>>(mut self, v: T) -> Self {
        self.metrics = Some(v.into());
        self
    }

    /// Sets the value of [sort][crate::model::QueryReportsRequest::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [start_date][crate::model::QueryReportsRequest::start_date].
    pub fn set_start_date<T: Into<String>>(mut self, v: T) -> Self {
        self.start_date = Some(v.into());
        self
    }

    /// Sets the value of [start_index][crate::model::QueryReportsRequest::start_index].
    pub fn set_start_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.start_index = Some(v.into());
        self
    }
}
