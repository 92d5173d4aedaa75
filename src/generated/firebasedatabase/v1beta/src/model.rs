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

/// Representation of a Realtime Database instance. Details on interacting with
/// contents of a DatabaseInstance can be found at:
/// https://firebase.google.com/docs/database/rest/start.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DatabaseInstance {
    /// The fully qualified resource name of the database instance, in the form:
    /// `projects/{project-number}/locations/{location-id}/instances/{database-id}`.
    pub name: Option<String>,

    /// Output only. The resource name of the project this instance belongs to. For
    /// example: `projects/{project-number}`.
    pub project: Option<String>,

    /// Output only. Output Only. The globally unique hostname of the database.
    pub database_url: Option<String>,

    /// Immutable. The database instance type. On creation only USER_DATABASE is
    /// allowed, which is also the default when omitted.
    pub r#type: Option<crate::model::DatabaseInstanceType>,

    /// Output only. The database's lifecycle state. Read-only.
    pub state: Option<crate::model::DatabaseInstanceState>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DatabaseInstance {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DatabaseInstance::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [project][crate::model::DatabaseInstance::project].
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = Some(v.into());
        self
    }

    /// Sets the value of [database_url][crate::model::DatabaseInstance::database_url].
    pub fn set_database_url<T: Into<String>>(mut self, v: T) -> Self {
        self.database_url = Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::DatabaseInstance::type].
    pub fn set_type<T: Into<crate::model::DatabaseInstanceType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [state][crate::model::DatabaseInstance::state].
    pub fn set_state<T: Into<crate::model::DatabaseInstanceState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// The response from the ListDatabaseInstances method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDatabaseInstancesResponse {
    /// List of each DatabaseInstance that is in the parent Firebase project.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instances: Vec<crate::model::DatabaseInstance>,

    /// If the result list is too large to fit in a single response, then a token is
    /// returned. If the string is empty, then this response is the last page of
    /// results.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListDatabaseInstancesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instances][crate::model::ListDatabaseInstancesResponse::instances].
    pub fn set_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DatabaseInstance>,
    {
        self.instances = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDatabaseInstancesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// The type of a database instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct DatabaseInstanceType(std::borrow::Cow<'static, str>);

impl DatabaseInstanceType {
    /// Creates a new DatabaseInstanceType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [DatabaseInstanceType](DatabaseInstanceType)
pub mod database_instance_type {
    use super::DatabaseInstanceType;

    /// Unknown state, likely the result of an error on the backend. This is only
    /// used for distinguishing unset values.
    pub const DATABASE_INSTANCE_TYPE_UNSPECIFIED: DatabaseInstanceType = DatabaseInstanceType::new("DATABASE_INSTANCE_TYPE_UNSPECIFIED");

    /// The default database that is provisioned when a project is created.
    pub const DEFAULT_DATABASE: DatabaseInstanceType = DatabaseInstanceType::new("DEFAULT_DATABASE");

    /// A database that the user created.
    pub const USER_DATABASE: DatabaseInstanceType = DatabaseInstanceType::new("USER_DATABASE");
}

impl std::convert::From<&str> for DatabaseInstanceType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for DatabaseInstanceType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The lifecycle state of a database instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct DatabaseInstanceState(std::borrow::Cow<'static, str>);

impl DatabaseInstanceState {
    /// Creates a new DatabaseInstanceState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [DatabaseInstanceState](DatabaseInstanceState)
pub mod database_instance_state {
    use super::DatabaseInstanceState;

    /// Unspecified state, likely the result of an error on the backend. This is
    /// only used for distinguishing unset values.
    pub const LIFECYCLE_STATE_UNSPECIFIED: DatabaseInstanceState = DatabaseInstanceState::new("LIFECYCLE_STATE_UNSPECIFIED");

    /// The normal and active state.
    pub const ACTIVE: DatabaseInstanceState = DatabaseInstanceState::new("ACTIVE");

    /// The database is in a disabled state. It can be re-enabled later.
    pub const DISABLED: DatabaseInstanceState = DatabaseInstanceState::new("DISABLED");

    /// The database is in a deleted state.
    pub const DELETED: DatabaseInstanceState = DatabaseInstanceState::new("DELETED");
}

impl std::convert::From<&str> for DatabaseInstanceState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for DatabaseInstanceState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [FirebaseDatabase::create_instance][crate::client::FirebaseDatabase::create_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateInstanceRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The globally unique identifier of the database instance.
    pub database_id: Option<String>,

    /// When set to true, the request will be validated but not submitted.
    pub validate_only: Option<bool>,

    /// The request body.
    pub database_instance: Option<crate::model::DatabaseInstance>,
}

impl CreateInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateInstanceRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [database_id][crate::model::CreateInstanceRequest::database_id].
    pub fn set_database_id<T: Into<String>>(mut self, v: T) -> Self {
        self.database_id = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::CreateInstanceRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }

    /// Sets the value of [database_instance][crate::model::CreateInstanceRequest::database_instance].
    pub fn set_database_instance<T: Into<crate::model::DatabaseInstance>>(mut self, v: T) -> Self {
        self.database_instance = Some(v.into());
        self
    }
}

/// The request for [FirebaseDatabase::delete_instance][crate::client::FirebaseDatabase::delete_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteInstanceRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl DeleteInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseDatabase::get_instance][crate::client::FirebaseDatabase::get_instance].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetInstanceRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseDatabase::disable_instance][crate::client::FirebaseDatabase::disable_instance].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisableInstanceRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,
}

impl DisableInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DisableInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseDatabase::reenable_instance][crate::client::FirebaseDatabase::reenable_instance].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReenableInstanceRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,
}

impl ReenableInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ReenableInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseDatabase::undelete_instance][crate::client::FirebaseDatabase::undelete_instance].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UndeleteInstanceRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,
}

impl UndeleteInstanceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::UndeleteInstanceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [FirebaseDatabase::list_instances][crate::client::FirebaseDatabase::list_instances].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListInstancesRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The maximum number of database instances to return in the response. The
    /// server may return fewer than this at its discretion.
    pub page_size: Option<i32>,

    /// Token returned from a previous call to `ListDatabaseInstances` indicating
    /// where in the set of database instances to resume listing.
    pub page_token: Option<String>,

    /// Indicate that DatabaseInstances in the `DELETED` state should also be
    /// returned.
    pub show_deleted: Option<bool>,
}

impl ListInstancesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListInstancesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListInstancesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListInstancesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets the value of [show_deleted][crate::model::ListInstancesRequest::show_deleted].
    pub fn set_show_deleted<T: Into<bool>>(mut self, v: T) -> Self {
        self.show_deleted = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListDatabaseInstancesResponse {
    type PageItem = crate::model::DatabaseInstance;

    fn items(self) -> Vec<Self::PageItem> {
        self.instances
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}
