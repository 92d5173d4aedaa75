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

/// A label defines a taxonomy that can be applied to Drive items in order to
/// organize and search across items. Labels can be simple strings, or can
/// contain fields that describe additional metadata that can be further used to
/// organize and search Drive items.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Label {
    /// Output only. Resource name of the label. Will be in the form of either:
    /// `labels/{id}` or `labels/{id}@{revision_id}` depending on the request.
    pub name: Option<String>,

    /// Output only. Globally unique identifier of this label. ID makes up part of
    /// the label `name`, but unlike `name`, ID is consistent between revisions.
    pub id: Option<String>,

    /// Output only. Revision ID of the label. Revision ID might be part of the
    /// label `name` depending on the request issued.
    pub revision_id: Option<String>,

    /// Required. The type of label.
    pub label_type: Option<crate::model::LabelType>,

    /// Output only. The user who created this label.
    pub creator: Option<crate::model::UserInfo>,

    /// Output only. The time this label was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. The user who created this label revision.
    pub revision_creator: Option<crate::model::UserInfo>,

    /// Output only. The time this label revision was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub revision_create_time: Option<time::OffsetDateTime>,

    /// Output only. The user who published this label. This value has no meaning
    /// when the label is not published.
    pub publisher: Option<crate::model::UserInfo>,

    /// Output only. The time this label was published. This value has no meaning
    /// when the label is not published.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub publish_time: Option<time::OffsetDateTime>,

    /// Output only. The user who disabled this label. This value has no meaning
    /// when the label is not disabled.
    pub disabler: Option<crate::model::UserInfo>,

    /// Output only. The time this label was disabled. This value has no meaning
    /// when the label is not disabled.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub disable_time: Option<time::OffsetDateTime>,

    /// Output only. The customer this label belongs to. For example:
    /// `customers/123abc789`.
    pub customer: Option<String>,

    /// Required. The basic properties of the label.
    pub properties: Option<crate::model::LabelProperties>,

    /// Output only. The lifecycle state of the label including whether it's
    /// published, deprecated, and has draft changes.
    pub lifecycle: Option<crate::model::Lifecycle>,

    /// List of fields in descending priority order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<crate::model::Field>,

    /// Custom URL to present to users to allow them to learn more about this label
    /// and how it should be used.
    pub learn_more_uri: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Label {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Label::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::Label::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [revision_id][crate::model::Label::revision_id].
    pub fn set_revision_id<T: Into<String>>(mut self, v: T) -> Self {
        self.revision_id = Some(v.into());
        self
    }

    /// Sets the value of [label_type][crate::model::Label::label_type].
    pub fn set_label_type<T: Into<crate::model::LabelType>>(mut self, v: T) -> Self {
        self.label_type = Some(v.into());
        self
    }

    /// Sets the value of [creator][crate::model::Label::creator].
    pub fn set_creator<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.creator = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Label::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [revision_creator][crate::model::Label::revision_creator].
    pub fn set_revision_creator<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.revision_creator = Some(v.into());
        self
    }

    /// Sets the value of [revision_create_time][crate::model::Label::revision_create_time].
    pub fn set_revision_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.revision_create_time = Some(v.into());
        self
    }

    /// Sets the value of [publisher][crate::model::Label::publisher].
    pub fn set_publisher<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.publisher = Some(v.into());
        self
    }

    /// Sets the value of [publish_time][crate::model::Label::publish_time].
    pub fn set_publish_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.publish_time = Some(v.into());
        self
    }

    /// Sets the value of [disabler][crate::model::Label::disabler].
    pub fn set_disabler<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.disabler = Some(v.into());
        self
    }

    /// Sets the value of [disable_time][crate::model::Label::disable_time].
    pub fn set_disable_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.disable_time = Some(v.into());
        self
    }

    /// Sets the value of [customer][crate::model::Label::customer].
    pub fn set_customer<T: Into<String>>(mut self, v: T) -> Self {
        self.customer = Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::Label::properties].
    pub fn set_properties<T: Into<crate::model::LabelProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle][crate::model::Label::lifecycle].
    pub fn set_lifecycle<T: Into<crate::model::Lifecycle>>(mut self, v: T) -> Self {
        self.lifecycle = Some(v.into());
        self
    }

    /// Sets the value of [fields][crate::model::Label::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Field>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [learn_more_uri][crate::model::Label::learn_more_uri].
    pub fn set_learn_more_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.learn_more_uri = Some(v.into());
        self
    }
}

/// Information about a user.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UserInfo {
    /// The identifier for this user that can be used with the People API to get
    /// more information. For example, `people/12345678`.
    pub person: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UserInfo {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [person][crate::model::UserInfo::person].
    pub fn set_person<T: Into<String>>(mut self, v: T) -> Self {
        self.person = Some(v.into());
        self
    }
}

/// Basic properties of the label.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelProperties {
    /// Required. Title of the label.
    pub title: Option<String>,

    /// The description of the label.
    pub description: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LabelProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [title][crate::model::LabelProperties::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::LabelProperties::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// The lifecycle state of an object, such as label, field, or choice.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Lifecycle {
    /// Output only. The state of the object associated with this lifecycle.
    pub state: Option<crate::model::LifecycleState>,

    /// Output only. Whether the object associated with this lifecycle has
    /// unpublished changes.
    pub has_unpublished_changes: Option<bool>,

    /// The policy that governs how to show a disabled label, field, or selection
    /// choice.
    pub disabled_policy: Option<crate::model::DisabledPolicy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Lifecycle {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [state][crate::model::Lifecycle::state].
    pub fn set_state<T: Into<crate::model::LifecycleState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [has_unpublished_changes][crate::model::Lifecycle::has_unpublished_changes].
    pub fn set_has_unpublished_changes<T: Into<bool>>(mut self, v: T) -> Self {
        self.has_unpublished_changes = Some(v.into());
        self
    }

    /// Sets the value of [disabled_policy][crate::model::Lifecycle::disabled_policy].
    pub fn set_disabled_policy<T: Into<crate::model::DisabledPolicy>>(mut self, v: T) -> Self {
        self.disabled_policy = Some(v.into());
        self
    }
}

/// The policy that governs how to treat a disabled label, field, or selection
/// choice in different contexts.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisabledPolicy {
    /// Whether to hide this disabled object in the search menu for Drive items.
    pub hide_in_search: Option<bool>,

    /// Whether to show this disabled object in the apply menu on Drive items.
    pub show_in_apply: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DisabledPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hide_in_search][crate::model::DisabledPolicy::hide_in_search].
    pub fn set_hide_in_search<T: Into<bool>>(mut self, v: T) -> Self {
        self.hide_in_search = Some(v.into());
        self
    }

    /// Sets the value of [show_in_apply][crate::model::DisabledPolicy::show_in_apply].
    pub fn set_show_in_apply<T: Into<bool>>(mut self, v: T) -> Self {
        self.show_in_apply = Some(v.into());
        self
    }
}

/// Defines a field that has a display name, data type, and other configuration
/// options. This field defines the kind of metadata that may be set on a Drive
/// item.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Field {
    /// Output only. The key of a field, unique within a label or library.
    pub id: Option<String>,

    /// Output only. The key to use when constructing Drive search queries to find
    /// files based on values defined for this field on files.
    pub query_key: Option<String>,

    /// The basic properties of the field.
    pub properties: Option<crate::model::FieldProperties>,

    /// Output only. The lifecycle of this field.
    pub lifecycle: Option<crate::model::Lifecycle>,

    /// Text field options.
    pub text_options: Option<crate::model::TextOptions>,

    /// Integer field options.
    pub integer_options: Option<crate::model::IntegerOptions>,

    /// Date field options.
    pub date_options: Option<crate::model::DateOptions>,

    /// Selection field options.
    pub selection_options: Option<crate::model::SelectionOptions>,

    /// Output only. The user who created this field.
    pub creator: Option<crate::model::UserInfo>,

    /// Output only. The time this field was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. The user who modified this field.
    pub updater: Option<crate::model::UserInfo>,

    /// Output only. The time this field was updated.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub update_time: Option<time::OffsetDateTime>,

    /// Output only. The user who published this field. This value has no meaning
    /// when the field is not published.
    pub publisher: Option<crate::model::UserInfo>,

    /// Output only. The user who disabled this field. This value has no meaning
    /// when the field is not disabled.
    pub disabler: Option<crate::model::UserInfo>,

    /// Output only. The time this field was disabled. This value has no meaning
    /// when the field is not disabled.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub disable_time: Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Field {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Field::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [query_key][crate::model::Field::query_key].
    pub fn set_query_key<T: Into<String>>(mut self, v: T) -> Self {
        self.query_key = Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::Field::properties].
    pub fn set_properties<T: Into<crate::model::FieldProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle][crate::model::Field::lifecycle].
    pub fn set_lifecycle<T: Into<crate::model::Lifecycle>>(mut self, v: T) -> Self {
        self.lifecycle = Some(v.into());
        self
    }

    /// Sets the value of [text_options][crate::model::Field::text_options].
    pub fn set_text_options<T: Into<crate::model::TextOptions>>(mut self, v: T) -> Self {
        self.text_options = Some(v.into());
        self
    }

    /// Sets the value of [integer_options][crate::model::Field::integer_options].
    pub fn set_integer_options<T: Into<crate::model::IntegerOptions>>(mut self, v: T) -> Self {
        self.integer_options = Some(v.into());
        self
    }

    /// Sets the value of [date_options][crate::model::Field::date_options].
    pub fn set_date_options<T: Into<crate::model::DateOptions>>(mut self, v: T) -> Self {
        self.date_options = Some(v.into());
        self
    }

    /// Sets the value of [selection_options][crate::model::Field::selection_options].
    pub fn set_selection_options<T: Into<crate::model::SelectionOptions>>(mut self, v: T) -> Self {
        self.selection_options = Some(v.into());
        self
    }

    /// Sets the value of [creator][crate::model::Field::creator].
    pub fn set_creator<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.creator = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Field::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [updater][crate::model::Field::updater].
    pub fn set_updater<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.updater = Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Field::update_time].
    pub fn set_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [publisher][crate::model::Field::publisher].
    pub fn set_publisher<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.publisher = Some(v.into());
        self
    }

    /// Sets the value of [disabler][crate::model::Field::disabler].
    pub fn set_disabler<T: Into<crate::model::UserInfo>>(mut self, v: T) -> Self {
        self.disabler = Some(v.into());
        self
    }

    /// Sets the value of [disable_time][crate::model::Field::disable_time].
    pub fn set_disable_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.disable_time = Some(v.into());
        self
    }
}

/// The basic properties of the field.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldProperties {
    /// Required. The display text to show in the UI identifying this field.
    pub display_name: Option<String>,

    /// Whether the field should be marked as required.
    pub required: Option<bool>,

    /// Input only. Insert or move this field before the indicated field. If empty,
    /// the field is placed at the end of the list.
    pub insert_before_field: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::FieldProperties::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [required][crate::model::FieldProperties::required].
    pub fn set_required<T: Into<bool>>(mut self, v: T) -> Self {
        self.required = Some(v.into());
        self
    }

    /// Sets the value of [insert_before_field][crate::model::FieldProperties::insert_before_field].
    pub fn set_insert_before_field<T: Into<String>>(mut self, v: T) -> Self {
        self.insert_before_field = Some(v.into());
        self
    }
}

/// Options for the Text field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextOptions {
    /// Output only. The minimum valid length of values for the text field.
    pub min_length: Option<i32>,

    /// Output only. The maximum valid length of values for the text field.
    pub max_length: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TextOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [min_length][crate::model::TextOptions::min_length].
    pub fn set_min_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_length = Some(v.into());
        self
    }

    /// Sets the value of [max_length][crate::model::TextOptions::max_length].
    pub fn set_max_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_length = Some(v.into());
        self
    }
}

/// Options for the Integer field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntegerOptions {
    /// Output only. The minimum valid value for the integer field.
    #[serde_as(as = "Option<wire::I64>")]
    pub min_value: Option<i64>,

    /// Output only. The maximum valid value for the integer field.
    #[serde_as(as = "Option<wire::I64>")]
    pub max_value: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IntegerOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [min_value][crate::model::IntegerOptions::min_value].
    pub fn set_min_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.min_value = Some(v.into());
        self
    }

    /// Sets the value of [max_value][crate::model::IntegerOptions::max_value].
    pub fn set_max_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_value = Some(v.into());
        self
    }
}

/// Options for the date field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DateOptions {
    /// Localized date formatting option. Field values are rendered in this format
    /// according to their locale.
    pub date_format_type: Option<crate::model::DateFormat>,

    /// Output only. ICU date format.
    pub date_format: Option<String>,

    /// Output only. Minimum valid value (year, month, day).
    pub min_value: Option<crate::model::Date>,

    /// Output only. Maximum valid value (year, month, day).
    pub max_value: Option<crate::model::Date>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DateOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [date_format_type][crate::model::DateOptions::date_format_type].
    pub fn set_date_format_type<T: Into<crate::model::DateFormat>>(mut self, v: T) -> Self {
        self.date_format_type = Some(v.into());
        self
    }

    /// Sets the value of [date_format][crate::model::DateOptions::date_format].
    pub fn set_date_format<T: Into<String>>(mut self, v: T) -> Self {
        self.date_format = Some(v.into());
        self
    }

    /// Sets the value of [min_value][crate::model::DateOptions::min_value].
    pub fn set_min_value<T: Into<crate::model::Date>>(mut self, v: T) -> Self {
        self.min_value = Some(v.into());
        self
    }

    /// Sets the value of [max_value][crate::model::DateOptions::max_value].
    pub fn set_max_value<T: Into<crate::model::Date>>(mut self, v: T) -> Self {
        self.max_value = Some(v.into());
        self
    }
}

/// Represents a whole or partial calendar date, such as a birthday.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Date {
    /// Year of the date. Must be from 1 to 9999, or 0 to specify a date without a
    /// year.
    pub year: Option<i32>,

    /// Month of a year. Must be from 1 to 12, or 0 to specify a year without a
    /// month and day.
    pub month: Option<i32>,

    /// Day of a month. Must be from 1 to 31 and valid for the year and month, or 0
    /// to specify a year by itself or a year and month where the day isn't
    /// significant.
    pub day: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Date {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [year][crate::model::Date::year].
    pub fn set_year<T: Into<i32>>(mut self, v: T) -> Self {
        self.year = Some(v.into());
        self
    }

    /// Sets the value of [month][crate::model::Date::month].
    pub fn set_month<T: Into<i32>>(mut self, v: T) -> Self {
        self.month = Some(v.into());
        self
    }

    /// Sets the value of [day][crate::model::Date::day].
    pub fn set_day<T: Into<i32>>(mut self, v: T) -> Self {
        self.day = Some(v.into());
        self
    }
}

/// Options for the selection field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SelectionOptions {
    /// When specified, indicates this field supports a list of values. Once the
    /// field is published, this cannot be changed.
    pub list_options: Option<crate::model::ListOptions>,

    /// The options available for this selection field. The list order is
    /// consistent, and modified with `insert_before_choice`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<crate::model::Choice>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SelectionOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [list_options][crate::model::SelectionOptions::list_options].
    pub fn set_list_options<T: Into<crate::model::ListOptions>>(mut self, v: T) -> Self {
        self.list_options = Some(v.into());
        self
    }

    /// Sets the value of [choices][crate::model::SelectionOptions::choices].
    pub fn set_choices<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Choice>,
    {
        self.choices = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Options for a multi-valued variant of an associated field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOptions {
    /// Maximum number of entries permitted.
    pub max_entries: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [max_entries][crate::model::ListOptions::max_entries].
    pub fn set_max_entries<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_entries = Some(v.into());
        self
    }
}

/// Selection field choice.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Choice {
    /// The unique value of the choice. This ID is autogenerated. Matches the regex:
    /// `([a-zA-Z0-9_])+`.
    pub id: Option<String>,

    /// Basic properties of the choice.
    pub properties: Option<crate::model::ChoiceProperties>,

    /// Output only. Lifecycle of the choice.
    pub lifecycle: Option<crate::model::Lifecycle>,

    /// Output only. The time this choice was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. The time this choice was published. This value has no meaning
    /// when the choice is not published.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub publish_time: Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Choice {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Choice::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [properties][crate::model::Choice::properties].
    pub fn set_properties<T: Into<crate::model::ChoiceProperties>>(mut self, v: T) -> Self {
        self.properties = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle][crate::model::Choice::lifecycle].
    pub fn set_lifecycle<T: Into<crate::model::Lifecycle>>(mut self, v: T) -> Self {
        self.lifecycle = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Choice::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [publish_time][crate::model::Choice::publish_time].
    pub fn set_publish_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.publish_time = Some(v.into());
        self
    }
}

/// Basic properties of the choice.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChoiceProperties {
    /// Required. The display text to show in the UI identifying this field.
    pub display_name: Option<String>,

    /// The description of this label.
    pub description: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ChoiceProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::ChoiceProperties::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::ChoiceProperties::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// Provides control over how write requests are executed. When not specified,
/// the last write wins.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteControl {
    /// The revision ID of the label that the write request will be applied to. If
    /// this is not the latest revision of the label, the request will not be
    /// processed and will return a 400 Bad Request error.
    pub required_revision_id: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WriteControl {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [required_revision_id][crate::model::WriteControl::required_revision_id].
    pub fn set_required_revision_id<T: Into<String>>(mut self, v: T) -> Self {
        self.required_revision_id = Some(v.into());
        self
    }
}

/// Response for listing Labels.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLabelsResponse {
    /// Labels.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<crate::model::Label>,

    /// The token of the next page in the response.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListLabelsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [labels][crate::model::ListLabelsResponse::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Label>,
    {
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListLabelsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// The capabilities of a user.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UserCapabilities {
    /// Output only. Resource name for the user capabilities.
    pub name: Option<String>,

    /// Output only. Whether the user is allowed access to the label manager.
    pub can_access_label_manager: Option<bool>,

    /// Output only. Whether the user is an administrator for the shared labels
    /// feature.
    pub can_administrate_labels: Option<bool>,

    /// Output only. Whether the user is allowed to create new shared labels.
    pub can_create_shared_labels: Option<bool>,

    /// Output only. Whether the user is allowed to create new admin labels.
    pub can_create_admin_labels: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UserCapabilities {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::UserCapabilities::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [can_access_label_manager][crate::model::UserCapabilities::can_access_label_manager].
    pub fn set_can_access_label_manager<T: Into<bool>>(mut self, v: T) -> Self {
        self.can_access_label_manager = Some(v.into());
        self
    }

    /// Sets the value of [can_administrate_labels][crate::model::UserCapabilities::can_administrate_labels].
    pub fn set_can_administrate_labels<T: Into<bool>>(mut self, v: T) -> Self {
        self.can_administrate_labels = Some(v.into());
        self
    }

    /// Sets the value of [can_create_shared_labels][crate::model::UserCapabilities::can_create_shared_labels].
    pub fn set_can_create_shared_labels<T: Into<bool>>(mut self, v: T) -> Self {
        self.can_create_shared_labels = Some(v.into());
        self
    }

    /// Sets the value of [can_create_admin_labels][crate::model::UserCapabilities::can_create_admin_labels].
    pub fn set_can_create_admin_labels<T: Into<bool>>(mut self, v: T) -> Self {
        self.can_create_admin_labels = Some(v.into());
        self
    }
}

/// Limits for integer field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntegerLimits {
    /// Minimum value for an integer field type.
    #[serde_as(as = "Option<wire::I64>")]
    pub min_value: Option<i64>,

    /// Maximum value for an integer field type.
    #[serde_as(as = "Option<wire::I64>")]
    pub max_value: Option<i64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IntegerLimits {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [min_value][crate::model::IntegerLimits::min_value].
    pub fn set_min_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.min_value = Some(v.into());
        self
    }

    /// Sets the value of [max_value][crate::model::IntegerLimits::max_value].
    pub fn set_max_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.max_value = Some(v.into());
        self
    }
}

/// Limits for text field type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextLimits {
    /// Minimum length allowed for a text field type.
    pub min_length: Option<i32>,

    /// Maximum length allowed for a text field type.
    pub max_length: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TextLimits {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [min_length][crate::model::TextLimits::min_length].
    pub fn set_min_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_length = Some(v.into());
        self
    }

    /// Sets the value of [max_length][crate::model::TextLimits::max_length].
    pub fn set_max_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_length = Some(v.into());
        self
    }
}

/// Field constants governing the structure of a field; such as, the maximum
/// title length, minimum and maximum field values or length, etc.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldLimits {
    /// Max length for the id.
    pub max_id_length: Option<i32>,

    /// Limits for field title.
    pub max_display_name_length: Option<i32>,

    /// Limits for field description, also called help text.
    pub max_description_length: Option<i32>,

    /// The relevant limits for the specified Field.Type. Text Field limits.
    pub text_limits: Option<crate::model::TextLimits>,

    /// Integer Field limits.
    pub integer_limits: Option<crate::model::IntegerLimits>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldLimits {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [max_id_length][crate::model::FieldLimits::max_id_length].
    pub fn set_max_id_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_id_length = Some(v.into());
        self
    }

    /// Sets the value of [max_display_name_length][crate::model::FieldLimits::max_display_name_length].
    pub fn set_max_display_name_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_display_name_length = Some(v.into());
        self
    }

    /// Sets the value of [max_description_length][crate::model::FieldLimits::max_description_length].
    pub fn set_max_description_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_description_length = Some(v.into());
        self
    }

    /// Sets the value of [text_limits][crate::model::FieldLimits::text_limits].
    pub fn set_text_limits<T: Into<crate::model::TextLimits>>(mut self, v: T) -> Self {
        self.text_limits = Some(v.into());
        self
    }

    /// Sets the value of [integer_limits][crate::model::FieldLimits::integer_limits].
    pub fn set_integer_limits<T: Into<crate::model::IntegerLimits>>(mut self, v: T) -> Self {
        self.integer_limits = Some(v.into());
        self
    }
}

/// Label constraints governing the structure of a label; such as, the maximum
/// number of fields allowed and maximum length of the label title.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelLimits {
    /// Resource name.
    pub name: Option<String>,

    /// The maximum number of characters allowed for the label ID.
    pub max_id_length: Option<i32>,

    /// The maximum number of characters allowed for the title.
    pub max_title_length: Option<i32>,

    /// The maximum number of characters allowed for the description.
    pub max_description_length: Option<i32>,

    /// The maximum number of fields allowed within the label.
    pub max_fields: Option<i32>,

    /// The maximum number of published fields that can be deleted.
    pub max_deleted_fields: Option<i32>,

    /// The maximum number of draft revisions that will be kept before deleting old
    /// drafts.
    pub max_draft_revisions: Option<i32>,

    /// The limits for fields.
    pub field_limits: Option<crate::model::FieldLimits>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LabelLimits {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::LabelLimits::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [max_id_length][crate::model::LabelLimits::max_id_length].
    pub fn set_max_id_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_id_length = Some(v.into());
        self
    }

    /// Sets the value of [max_title_length][crate::model::LabelLimits::max_title_length].
    pub fn set_max_title_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_title_length = Some(v.into());
        self
    }

    /// Sets the value of [max_description_length][crate::model::LabelLimits::max_description_length].
    pub fn set_max_description_length<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_description_length = Some(v.into());
        self
    }

    /// Sets the value of [max_fields][crate::model::LabelLimits::max_fields].
    pub fn set_max_fields<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_fields = Some(v.into());
        self
    }

    /// Sets the value of [max_deleted_fields][crate::model::LabelLimits::max_deleted_fields].
    pub fn set_max_deleted_fields<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_deleted_fields = Some(v.into());
        self
    }

    /// Sets the value of [max_draft_revisions][crate::model::LabelLimits::max_draft_revisions].
    pub fn set_max_draft_revisions<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_draft_revisions = Some(v.into());
        self
    }

    /// Sets the value of [field_limits][crate::model::LabelLimits::field_limits].
    pub fn set_field_limits<T: Into<crate::model::FieldLimits>>(mut self, v: T) -> Self {
        self.field_limits = Some(v.into());
        self
    }
}

/// The type of this label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct LabelType(std::borrow::Cow<'static, str>);

impl LabelType {
    /// Creates a new LabelType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [LabelType](LabelType)
pub mod label_type {
    use super::LabelType;

    /// Unknown label type.
    pub const LABEL_TYPE_UNSPECIFIED: LabelType = LabelType::new("LABEL_TYPE_UNSPECIFIED");

    /// Shared labels may be shared with users to apply to Drive items.
    pub const SHARED: LabelType = LabelType::new("SHARED");

    /// Admin-owned label. Only creatable and editable by admins. Supports some
    /// additional admin-only features.
    pub const ADMIN: LabelType = LabelType::new("ADMIN");

    /// A label owned by an internal Google application rather than a customer.
    /// These labels are read-only.
    pub const GOOGLE_APP: LabelType = LabelType::new("GOOGLE_APP");
}

impl std::convert::From<&str> for LabelType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for LabelType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The state of the object associated with a lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct LifecycleState(std::borrow::Cow<'static, str>);

impl LifecycleState {
    /// Creates a new LifecycleState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [LifecycleState](LifecycleState)
pub mod lifecycle_state {
    use super::LifecycleState;

    /// Unknown State.
    pub const STATE_UNSPECIFIED: LifecycleState = LifecycleState::new("STATE_UNSPECIFIED");

    /// The initial state of an object. Once published, the object can never return
    /// to this state.
    pub const UNPUBLISHED_DRAFT: LifecycleState = LifecycleState::new("UNPUBLISHED_DRAFT");

    /// Once published, the object can no longer be deleted.
    pub const PUBLISHED: LifecycleState = LifecycleState::new("PUBLISHED");

    /// Once disabled, the object can be deleted.
    pub const DISABLED: LifecycleState = LifecycleState::new("DISABLED");

    /// The object is deleted.
    pub const DELETED: LifecycleState = LifecycleState::new("DELETED");
}

impl std::convert::From<&str> for LifecycleState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for LifecycleState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Localized date format options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct DateFormat(std::borrow::Cow<'static, str>);

impl DateFormat {
    /// Creates a new DateFormat instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [DateFormat](DateFormat)
pub mod date_format {
    use super::DateFormat;

    /// Date format unspecified.
    pub const DATE_FORMAT_UNSPECIFIED: DateFormat = DateFormat::new("DATE_FORMAT_UNSPECIFIED");

    /// Includes full month name. For example, January 12, 1999 (MMMM d, y)
    pub const LONG_DATE: DateFormat = DateFormat::new("LONG_DATE");

    /// Short, numeric, representation. For example, 12/13/99 (M/d/yy)
    pub const SHORT_DATE: DateFormat = DateFormat::new("SHORT_DATE");
}

impl std::convert::From<&str> for DateFormat {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for DateFormat {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Resource view that can be applied to label responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct LabelView(std::borrow::Cow<'static, str>);

impl LabelView {
    /// Creates a new LabelView instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [LabelView](LabelView)
pub mod label_view {
    use super::LabelView;

    /// Implies the field mask: `name,id,revision_id,label_type,properties.*`
    pub const LABEL_VIEW_BASIC: LabelView = LabelView::new("LABEL_VIEW_BASIC");

    /// All possible fields.
    pub const LABEL_VIEW_FULL: LabelView = LabelView::new("LABEL_VIEW_FULL");
}

impl std::convert::From<&str> for LabelView {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for LabelView {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The role a user has on a label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct LabelRole(std::borrow::Cow<'static, str>);

impl LabelRole {
    /// Creates a new LabelRole instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [LabelRole](LabelRole)
pub mod label_role {
    use super::LabelRole;

    /// Unknown role.
    pub const LABEL_ROLE_UNSPECIFIED: LabelRole = LabelRole::new("LABEL_ROLE_UNSPECIFIED");

    /// A reader can read the label and associated metadata applied to Drive items.
    pub const READER: LabelRole = LabelRole::new("READER");

    /// An applier can write associated metadata on Drive items in which they also
    /// have write access to.
    pub const APPLIER: LabelRole = LabelRole::new("APPLIER");

    /// An organizer can pin this label in shared drives they manage and add new
    /// appliers to the label.
    pub const ORGANIZER: LabelRole = LabelRole::new("ORGANIZER");

    /// Editors can make any update including deleting the label which also deletes
    /// the associated Drive item metadata.
    pub const EDITOR: LabelRole = LabelRole::new("EDITOR");
}

impl std::convert::From<&str> for LabelRole {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for LabelRole {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [DriveLabels::create_label][crate::client::DriveLabels::create_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLabelRequest {
    /// The BCP-47 language code to use for evaluating localized field labels. When
    /// not specified, values in the default configured language will be used.
    pub language_code: Option<String>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    pub use_admin_access: Option<bool>,

    /// The request body.
    pub label: Option<crate::model::Label>,
}

impl CreateLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [language_code][crate::model::CreateLabelRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::CreateLabelRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [label][crate::model::CreateLabelRequest::label].
    pub fn set_label<T: Into<crate::model::Label>>(mut self, v: T) -> Self {
        self.label = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::get_label][crate::client::DriveLabels::get_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLabelRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// The BCP-47 language code to use for evaluating localized field labels. When
    /// not specified, values in the default configured language will be used.
    pub language_code: Option<String>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    pub use_admin_access: Option<bool>,

    /// When specified, only certain fields belonging to the indicated view are
    /// returned.
    pub view: Option<crate::model::LabelView>,
}

impl GetLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetLabelRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [language_code][crate::model::GetLabelRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::GetLabelRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [view][crate::model::GetLabelRequest::view].
    pub fn set_view<T: Into<crate::model::LabelView>>(mut self, v: T) -> Self {
        self.view = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::list_labels][crate::client::DriveLabels::list_labels].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelsRequest {
    /// The customer to scope this list request to. For example:
    /// `customers/abcd1234`. If unset, will return all labels within the current
    /// customer.
    pub customer: Option<String>,

    /// The BCP-47 language code to use for evaluating localized field labels. When
    /// not specified, values in the default configured language will be used.
    pub language_code: Option<String>,

    /// Specifies the level of access the user must have on the returned labels. The
    /// minimum role a user must have on a label.
    pub minimum_role: Option<crate::model::LabelRole>,

    /// Maximum number of labels to return per page. Default: 50. Max: 200.
    pub page_size: Option<i32>,

    /// The token of the page to return.
    pub page_token: Option<String>,

    /// Whether to include only published labels in the results.
    pub published_only: Option<bool>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    pub use_admin_access: Option<bool>,

    /// When specified, only certain fields belonging to the indicated view are
    /// returned.
    pub view: Option<crate::model::LabelView>,
}

impl ListLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [customer][crate::model::ListLabelsRequest::customer].
    pub fn set_customer<T: Into<String>>(mut self, v: T) -> Self {
        self.customer = Some(v.into());
        self
    }

    /// Sets the value of [language_code][crate::model::ListLabelsRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }

    /// Sets the value of [minimum_role][crate::model::ListLabelsRequest::minimum_role].
    pub fn set_minimum_role<T: Into<crate::model::LabelRole>>(mut self, v: T) -> Self {
        self.minimum_role = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListLabelsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListLabelsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets the value of [published_only][crate::model::ListLabelsRequest::published_only].
    pub fn set_published_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.published_only = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::ListLabelsRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [view][crate::model::ListLabelsRequest::view].
    pub fn set_view<T: Into<crate::model::LabelView>>(mut self, v: T) -> Self {
        self.view = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListLabelsResponse {
    type PageItem = crate::model::Label;

    fn items(self) -> Vec<Self::PageItem> {
        self.labels
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [DriveLabels::delete_label][crate::client::DriveLabels::delete_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLabelRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    pub use_admin_access: Option<bool>,

    /// Provides control over how write requests are executed. Defaults to unset,
    /// which means the last write wins.
    pub write_control: Option<crate::model::WriteControl>,
}

impl DeleteLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteLabelRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::DeleteLabelRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [write_control][crate::model::DeleteLabelRequest::write_control].
    pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
        self.write_control = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::publish_label][crate::client::DriveLabels::publish_label].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PublishLabelRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_admin_access: Option<bool>,

    /// Provides control over how write requests are executed. Defaults to unset,
    /// which means the last write wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_control: Option<crate::model::WriteControl>,

    /// The BCP-47 language code to use for evaluating localized field labels. When
    /// not specified, values in the default configured language will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl PublishLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::PublishLabelRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::PublishLabelRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [write_control][crate::model::PublishLabelRequest::write_control].
    pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
        self.write_control = Some(v.into());
        self
    }

    /// Sets the value of [language_code][crate::model::PublishLabelRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::disable_label][crate::client::DriveLabels::disable_label].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisableLabelRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,

    /// The fields that should be updated. At least one field must be specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<String>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_admin_access: Option<bool>,

    /// Provides control over how write requests are executed. Defaults to unset,
    /// which means the last write wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_control: Option<crate::model::WriteControl>,

    /// Disabled policy to use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_policy: Option<crate::model::DisabledPolicy>,

    /// The BCP-47 language code to use for evaluating localized field labels. When
    /// not specified, values in the default configured language will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl DisableLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DisableLabelRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::DisableLabelRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::DisableLabelRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [write_control][crate::model::DisableLabelRequest::write_control].
    pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
        self.write_control = Some(v.into());
        self
    }

    /// Sets the value of [disabled_policy][crate::model::DisableLabelRequest::disabled_policy].
    pub fn set_disabled_policy<T: Into<crate::model::DisabledPolicy>>(mut self, v: T) -> Self {
        self.disabled_policy = Some(v.into());
        self
    }

    /// Sets the value of [language_code][crate::model::DisableLabelRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::enable_label][crate::client::DriveLabels::enable_label].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnableLabelRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,

    /// Set to `true` in order to use the user's admin credentials. The server will
    /// verify the user is an admin for the label before allowing access.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_admin_access: Option<bool>,

    /// Provides control over how write requests are executed. Defaults to unset,
    /// which means the last write wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_control: Option<crate::model::WriteControl>,

    /// The BCP-47 language code to use for evaluating localized field labels. When
    /// not specified, values in the default configured language will be used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl EnableLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::EnableLabelRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [use_admin_access][crate::model::EnableLabelRequest::use_admin_access].
    pub fn set_use_admin_access<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_admin_access = Some(v.into());
        self
    }

    /// Sets the value of [write_control][crate::model::EnableLabelRequest::write_control].
    pub fn set_write_control<T: Into<crate::model::WriteControl>>(mut self, v: T) -> Self {
        self.write_control = Some(v.into());
        self
    }

    /// Sets the value of [language_code][crate::model::EnableLabelRequest::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::get_user_capabilities][crate::client::DriveLabels::get_user_capabilities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUserCapabilitiesRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// The customer to scope this request to. For example: `customers/abcd1234`. If
    /// unset, it will return current customer.
    pub customer: Option<String>,
}

impl GetUserCapabilitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetUserCapabilitiesRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [customer][crate::model::GetUserCapabilitiesRequest::customer].
    pub fn set_customer<T: Into<String>>(mut self, v: T) -> Self {
        self.customer = Some(v.into());
        self
    }
}

/// The request for [DriveLabels::get_label_limits][crate::client::DriveLabels::get_label_limits].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLabelLimitsRequest {
    /// Required. Label revision resource name must be: "limits/label".
    pub name: Option<String>,
}

impl GetLabelLimitsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetLabelLimitsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}
