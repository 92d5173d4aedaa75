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

/// Dimensions are attributes of your data. For example, the dimension city
/// indicates the city from which an event originates.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Dimension {
    /// The name of the dimension. See the API Dimensions for the list of dimension
    /// names supported by core reporting methods.
    pub name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Dimension {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Dimension::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The quantitative measurements of a report. For example, the metric
/// `eventCount` is the total number of events.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Metric {
    /// The name of the metric. See the API Metrics for the list of metric names
    /// supported by core reporting methods.
    pub name: Option<String>,

    /// A mathematical expression for derived metrics. For example, the metric Event
    /// count per user is `eventCount/totalUsers`.
    pub expression: Option<String>,

    /// Indicates if a metric is invisible in the report response. If a metric is
    /// invisible, the metric will not produce a column in the response, but can be
    /// used in `metricFilter`, `orderBys`, or a metric `expression`.
    pub invisible: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Metric {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Metric::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [expression][crate::model::Metric::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Sets the value of [invisible][crate::model::Metric::invisible].
    pub fn set_invisible<T: Into<bool>>(mut self, v: T) -> Self {
        self.invisible = Some(v.into());
        self
    }
}

/// A contiguous set of days: `startDate`, `startDate + 1`, ..., `endDate`.
/// Requests are allowed up to 4 date ranges.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DateRange {
    /// The inclusive start date for the query in the format `YYYY-MM-DD`. Cannot be
    /// after `end_date`. The format `NdaysAgo`, `yesterday`, or `today` is also
    /// accepted.
    pub start_date: Option<String>,

    /// The inclusive end date for the query in the format `YYYY-MM-DD`. Cannot be
    /// before `start_date`. The format `NdaysAgo`, `yesterday`, or `today` is also
    /// accepted.
    pub end_date: Option<String>,

    /// Assigns a name to this date range. The dimension `dateRange` is valued to
    /// this name in a report response.
    pub name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DateRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [start_date][crate::model::DateRange::start_date].
    pub fn set_start_date<T: Into<String>>(mut self, v: T) -> Self {
        self.start_date = Some(v.into());
        self
    }

    /// Sets the value of [end_date][crate::model::DateRange::end_date].
    pub fn set_end_date<T: Into<String>>(mut self, v: T) -> Self {
        self.end_date = Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::DateRange::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// A contiguous set of minutes: `startMinutesAgo`, `startMinutesAgo + 1`, ...,
/// `endMinutesAgo`. Requests are allowed up to 2 minute ranges.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MinuteRange {
    /// Assigns a name to this minute range. The dimension `dateRange` is valued to
    /// this name in a report response.
    pub name: Option<String>,

    /// The inclusive start minute for the query as a number of minutes before now.
    /// For example, `"startMinutesAgo": 29` specifies the report should include
    /// event data from 29 minutes ago and after.
    pub start_minutes_ago: Option<i32>,

    /// The inclusive end minute for the query as a number of minutes before now.
    /// Cannot be before `startMinutesAgo`.
    pub end_minutes_ago: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MinuteRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::MinuteRange::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [start_minutes_ago][crate::model::MinuteRange::start_minutes_ago].
    pub fn set_start_minutes_ago<T: Into<i32>>(mut self, v: T) -> Self {
        self.start_minutes_ago = Some(v.into());
        self
    }

    /// Sets the value of [end_minutes_ago][crate::model::MinuteRange::end_minutes_ago].
    pub fn set_end_minutes_ago<T: Into<i32>>(mut self, v: T) -> Self {
        self.end_minutes_ago = Some(v.into());
        self
    }
}

/// To express dimension or metric filters. The fields in the same
/// FilterExpression need to be either all dimensions or all metrics.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterExpression {
    /// The FilterExpressions in and_group have an AND relationship.
    pub and_group: Option<crate::model::FilterExpressionList>,

    /// The FilterExpressions in or_group have an OR relationship.
    pub or_group: Option<crate::model::FilterExpressionList>,

    /// The FilterExpression is NOT of not_expression.
    pub not_expression: Option<std::boxed::Box<crate::model::FilterExpression>>,

    /// A primitive filter. In the same FilterExpression, all of the filter's field
    /// names need to be either all dimensions or all metrics.
    pub filter: Option<crate::model::Filter>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FilterExpression {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [and_group][crate::model::FilterExpression::and_group].
    pub fn set_and_group<T: Into<crate::model::FilterExpressionList>>(mut self, v: T) -> Self {
        self.and_group = Some(v.into());
        self
    }

    /// Sets the value of [or_group][crate::model::FilterExpression::or_group].
    pub fn set_or_group<T: Into<crate::model::FilterExpressionList>>(mut self, v: T) -> Self {
        self.or_group = Some(v.into());
        self
    }

    /// Sets the value of [not_expression][crate::model::FilterExpression::not_expression].
    pub fn set_not_expression<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.not_expression = Some(std::boxed::Box::new(v.into()));
        self
    }

    /// Sets the value of [filter][crate::model::FilterExpression::filter].
    pub fn set_filter<T: Into<crate::model::Filter>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }
}

/// A list of filter expressions.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterExpressionList {
    /// A list of filter expressions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<crate::model::FilterExpression>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FilterExpressionList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [expressions][crate::model::FilterExpressionList::expressions].
    pub fn set_expressions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FilterExpression>,
    {
        self.expressions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An expression to filter dimension or metric values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Filter {
    /// The dimension name or metric name. In most methods, dimensions & metrics can
    /// be used for the first time in this field.
    pub field_name: Option<String>,

    /// Strings related filter.
    pub string_filter: Option<crate::model::StringFilter>,

    /// A filter for in list values.
    pub in_list_filter: Option<crate::model::InListFilter>,

    /// A filter for numeric or date values.
    pub numeric_filter: Option<crate::model::NumericFilter>,

    /// A filter for two values.
    pub between_filter: Option<crate::model::BetweenFilter>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Filter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_name][crate::model::Filter::field_name].
    pub fn set_field_name<T: Into<String>>(mut self, v: T) -> Self {
        self.field_name = Some(v.into());
        self
    }

    /// Sets the value of [string_filter][crate::model::Filter::string_filter].
    pub fn set_string_filter<T: Into<crate::model::StringFilter>>(mut self, v: T) -> Self {
        self.string_filter = Some(v.into());
        self
    }

    /// Sets the value of [in_list_filter][crate::model::Filter::in_list_filter].
    pub fn set_in_list_filter<T: Into<crate::model::InListFilter>>(mut self, v: T) -> Self {
        self.in_list_filter = Some(v.into());
        self
    }

    /// Sets the value of [numeric_filter][crate::model::Filter::numeric_filter].
    pub fn set_numeric_filter<T: Into<crate::model::NumericFilter>>(mut self, v: T) -> Self {
        self.numeric_filter = Some(v.into());
        self
    }

    /// Sets the value of [between_filter][crate::model::Filter::between_filter].
    pub fn set_between_filter<T: Into<crate::model::BetweenFilter>>(mut self, v: T) -> Self {
        self.between_filter = Some(v.into());
        self
    }
}

/// The filter for string
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StringFilter {
    /// The match type for this filter.
    pub match_type: Option<crate::model::MatchType>,

    /// The string value used for the matching.
    pub value: Option<String>,

    /// If true, the string value is case sensitive.
    pub case_sensitive: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl StringFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [match_type][crate::model::StringFilter::match_type].
    pub fn set_match_type<T: Into<crate::model::MatchType>>(mut self, v: T) -> Self {
        self.match_type = Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::StringFilter::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [case_sensitive][crate::model::StringFilter::case_sensitive].
    pub fn set_case_sensitive<T: Into<bool>>(mut self, v: T) -> Self {
        self.case_sensitive = Some(v.into());
        self
    }
}

/// The result needs to be in a list of string values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InListFilter {
    /// The list of string values. Must be non-empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,

    /// If true, the string value is case sensitive.
    pub case_sensitive: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl InListFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [values][crate::model::InListFilter::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [case_sensitive][crate::model::InListFilter::case_sensitive].
    pub fn set_case_sensitive<T: Into<bool>>(mut self, v: T) -> Self {
        self.case_sensitive = Some(v.into());
        self
    }
}

/// Filters for numeric or date values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NumericFilter {
    /// The operation type for this filter.
    pub operation: Option<crate::model::NumericFilterOperation>,

    /// A numeric value or a date value.
    pub value: Option<crate::model::NumericValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl NumericFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [operation][crate::model::NumericFilter::operation].
    pub fn set_operation<T: Into<crate::model::NumericFilterOperation>>(mut self, v: T) -> Self {
        self.operation = Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::NumericFilter::value].
    pub fn set_value<T: Into<crate::model::NumericValue>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// To express that the result needs to be between two numbers (inclusive).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BetweenFilter {
    /// Begins with this number.
    pub from_value: Option<crate::model::NumericValue>,

    /// Ends with this number.
    pub to_value: Option<crate::model::NumericValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BetweenFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [from_value][crate::model::BetweenFilter::from_value].
    pub fn set_from_value<T: Into<crate::model::NumericValue>>(mut self, v: T) -> Self {
        self.from_value = Some(v.into());
        self
    }

    /// Sets the value of [to_value][crate::model::BetweenFilter::to_value].
    pub fn set_to_value<T: Into<crate::model::NumericValue>>(mut self, v: T) -> Self {
        self.to_value = Some(v.into());
        self
    }
}

/// To represent a number.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NumericValue {
    /// Integer value
    #[serde_as(as = "Option<wire::I64>")]
    pub int64_value: Option<i64>,

    /// Double value
    pub double_value: Option<f64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl NumericValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [int64_value][crate::model::NumericValue::int64_value].
    pub fn set_int64_value<T: Into<i64>>(mut self, v: T) -> Self {
        self.int64_value = Some(v.into());
        self
    }

    /// Sets the value of [double_value][crate::model::NumericValue::double_value].
    pub fn set_double_value<T: Into<f64>>(mut self, v: T) -> Self {
        self.double_value = Some(v.into());
        self
    }
}

/// Order bys define how rows will be sorted in the response.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OrderBy {
    /// Sorts results by a metric's values.
    pub metric: Option<crate::model::MetricOrderBy>,

    /// Sorts results by a dimension's values.
    pub dimension: Option<crate::model::DimensionOrderBy>,

    /// If true, sorts by descending order.
    pub desc: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl OrderBy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metric][crate::model::OrderBy::metric].
    pub fn set_metric<T: Into<crate::model::MetricOrderBy>>(mut self, v: T) -> Self {
        self.metric = Some(v.into());
        self
    }

    /// Sets the value of [dimension][crate::model::OrderBy::dimension].
    pub fn set_dimension<T: Into<crate::model::DimensionOrderBy>>(mut self, v: T) -> Self {
        self.dimension = Some(v.into());
        self
    }

    /// Sets the value of [desc][crate::model::OrderBy::desc].
    pub fn set_desc<T: Into<bool>>(mut self, v: T) -> Self {
        self.desc = Some(v.into());
        self
    }
}

/// Sorts by metric values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricOrderBy {
    /// A metric name in the request to order by.
    pub metric_name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MetricOrderBy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metric_name][crate::model::MetricOrderBy::metric_name].
    pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_name = Some(v.into());
        self
    }
}

/// Sorts by dimension values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DimensionOrderBy {
    /// A dimension name in the request to order by.
    pub dimension_name: Option<String>,

    /// Controls the rule for dimension value ordering.
    pub order_type: Option<crate::model::OrderType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DimensionOrderBy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_name][crate::model::DimensionOrderBy::dimension_name].
    pub fn set_dimension_name<T: Into<String>>(mut self, v: T) -> Self {
        self.dimension_name = Some(v.into());
        self
    }

    /// Sets the value of [order_type][crate::model::DimensionOrderBy::order_type].
    pub fn set_order_type<T: Into<crate::model::OrderType>>(mut self, v: T) -> Self {
        self.order_type = Some(v.into());
        self
    }
}

/// Describes the visible dimension columns and rows in the report response.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pivot {
    /// Dimension names for visible columns in the report response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub field_names: Vec<String>,

    /// Specifies how dimensions are ordered in the pivot.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<crate::model::OrderBy>,

    /// The row count of the start row. The first row is counted as row 0.
    #[serde_as(as = "Option<wire::I64>")]
    pub offset: Option<i64>,

    /// The number of unique combinations of dimension values to return in this
    /// pivot. The `limit` parameter is required.
    #[serde_as(as = "Option<wire::I64>")]
    pub limit: Option<i64>,

    /// Aggregate the metrics by dimensions in this pivot using the specified
    /// metric_aggregations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_aggregations: Vec<crate::model::MetricAggregation>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Pivot {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_names][crate::model::Pivot::field_names].
    pub fn set_field_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.field_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [order_bys][crate::model::Pivot::order_bys].
    pub fn set_order_bys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::OrderBy>,
    {
        self.order_bys = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [offset][crate::model::Pivot::offset].
    pub fn set_offset<T: Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::Pivot::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [metric_aggregations][crate::model::Pivot::metric_aggregations].
    pub fn set_metric_aggregations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricAggregation>,
    {
        self.metric_aggregations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Describes a dimension column in the report.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DimensionHeader {
    /// The dimension's name.
    pub name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DimensionHeader {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DimensionHeader::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Describes a metric column in the report.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricHeader {
    /// The metric's name.
    pub name: Option<String>,

    /// The metric's data type.
    pub r#type: Option<crate::model::MetricType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MetricHeader {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::MetricHeader::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::MetricHeader::type].
    pub fn set_type<T: Into<crate::model::MetricType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }
}

/// Report data for each row.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Row {
    /// List of requested dimension values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_values: Vec<crate::model::DimensionValue>,

    /// List of requested visible metric values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_values: Vec<crate::model::MetricValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Row {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_values][crate::model::Row::dimension_values].
    pub fn set_dimension_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionValue>,
    {
        self.dimension_values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metric_values][crate::model::Row::metric_values].
    pub fn set_metric_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricValue>,
    {
        self.metric_values = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The value of a dimension.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DimensionValue {
    /// Value as a string if the dimension type is a string.
    pub value: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DimensionValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][crate::model::DimensionValue::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// The value of a metric.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricValue {
    /// Measurement value. See MetricHeader for type.
    pub value: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MetricValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][crate::model::MetricValue::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// Response's metadata carrying additional information about the report
/// content.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResponseMetaData {
    /// If true, indicates some buckets of dimension combinations are rolled into
    /// "(other)" row.
    pub data_loss_from_other_row: Option<bool>,

    /// The currency code used in this report.
    pub currency_code: Option<String>,

    /// The property's current timezone.
    pub time_zone: Option<String>,

    /// If empty reason is specified, the report is empty for this reason.
    pub empty_reason: Option<String>,

    /// If `subjectToThresholding` is true, this report is subject to thresholding
    /// and only returns data that meets the minimum aggregation thresholds.
    pub subject_to_thresholding: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ResponseMetaData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data_loss_from_other_row][crate::model::ResponseMetaData::data_loss_from_other_row].
    pub fn set_data_loss_from_other_row<T: Into<bool>>(mut self, v: T) -> Self {
        self.data_loss_from_other_row = Some(v.into());
        self
    }

    /// Sets the value of [currency_code][crate::model::ResponseMetaData::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = Some(v.into());
        self
    }

    /// Sets the value of [time_zone][crate::model::ResponseMetaData::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }

    /// Sets the value of [empty_reason][crate::model::ResponseMetaData::empty_reason].
    pub fn set_empty_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.empty_reason = Some(v.into());
        self
    }

    /// Sets the value of [subject_to_thresholding][crate::model::ResponseMetaData::subject_to_thresholding].
    pub fn set_subject_to_thresholding<T: Into<bool>>(mut self, v: T) -> Self {
        self.subject_to_thresholding = Some(v.into());
        self
    }
}

/// Current state for a particular quota group.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QuotaStatus {
    /// Quota consumed by this request.
    pub consumed: Option<i32>,

    /// Quota remaining after this request.
    pub remaining: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl QuotaStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consumed][crate::model::QuotaStatus::consumed].
    pub fn set_consumed<T: Into<i32>>(mut self, v: T) -> Self {
        self.consumed = Some(v.into());
        self
    }

    /// Sets the value of [remaining][crate::model::QuotaStatus::remaining].
    pub fn set_remaining<T: Into<i32>>(mut self, v: T) -> Self {
        self.remaining = Some(v.into());
        self
    }
}

/// Current state of all quotas for this Analytics Property.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyQuota {
    /// Standard Analytics Properties can use up to 200,000 tokens per day.
    pub tokens_per_day: Option<crate::model::QuotaStatus>,

    /// Standard Analytics Properties can use up to 40,000 tokens per hour.
    pub tokens_per_hour: Option<crate::model::QuotaStatus>,

    /// Standard Analytics Properties can send up to 10 concurrent requests.
    pub concurrent_requests: Option<crate::model::QuotaStatus>,

    /// Standard Analytics Properties and cloud project pairs can have up to 10
    /// server errors per hour.
    pub server_errors_per_project_per_hour: Option<crate::model::QuotaStatus>,

    /// Analytics Properties can send up to 120 requests with potentially
    /// thresholded dimensions per hour.
    pub potentially_thresholded_requests_per_hour: Option<crate::model::QuotaStatus>,

    /// Analytics Properties can use up to 35% of their tokens per project per hour.
    pub tokens_per_project_per_hour: Option<crate::model::QuotaStatus>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PropertyQuota {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tokens_per_day][crate::model::PropertyQuota::tokens_per_day].
    pub fn set_tokens_per_day<T: Into<crate::model::QuotaStatus>>(mut self, v: T) -> Self {
        self.tokens_per_day = Some(v.into());
        self
    }

    /// Sets the value of [tokens_per_hour][crate::model::PropertyQuota::tokens_per_hour].
    pub fn set_tokens_per_hour<T: Into<crate::model::QuotaStatus>>(mut self, v: T) -> Self {
        self.tokens_per_hour = Some(v.into());
        self
    }

    /// Sets the value of [concurrent_requests][crate::model::PropertyQuota::concurrent_requests].
    pub fn set_concurrent_requests<T: Into<crate::model::QuotaStatus>>(mut self, v: T) -> Self {
        self.concurrent_requests = Some(v.into());
        self
    }

    /// Sets the value of [server_errors_per_project_per_hour][crate::model::PropertyQuota::server_errors_per_project_per_hour].
    pub fn set_server_errors_per_project_per_hour<T: Into<crate::model::QuotaStatus>>(mut self, v: T) -> Self {
        self.server_errors_per_project_per_hour = Some(v.into());
        self
    }

    /// Sets the value of [potentially_thresholded_requests_per_hour][crate::model::PropertyQuota::potentially_thresholded_requests_per_hour].
    pub fn set_potentially_thresholded_requests_per_hour<T: Into<crate::model::QuotaStatus>>(mut self, v: T) -> Self {
        self.potentially_thresholded_requests_per_hour = Some(v.into());
        self
    }

    /// Sets the value of [tokens_per_project_per_hour][crate::model::PropertyQuota::tokens_per_project_per_hour].
    pub fn set_tokens_per_project_per_hour<T: Into<crate::model::QuotaStatus>>(mut self, v: T) -> Self {
        self.tokens_per_project_per_hour = Some(v.into());
        self
    }
}

/// The response report table corresponding to a request.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunReportResponse {
    /// Describes dimension columns. The number of DimensionHeaders and ordering of
    /// DimensionHeaders matches the dimensions present in rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_headers: Vec<crate::model::DimensionHeader>,

    /// Describes metric columns. The number of MetricHeaders and ordering of
    /// MetricHeaders matches the metrics present in rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_headers: Vec<crate::model::MetricHeader>,

    /// Rows of dimension value combinations and metric values in the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<crate::model::Row>,

    /// If requested, the totaled values of metrics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<crate::model::Row>,

    /// If requested, the maximum values of metrics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maximums: Vec<crate::model::Row>,

    /// If requested, the minimum values of metrics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minimums: Vec<crate::model::Row>,

    /// The total number of rows in the query result. `rowCount` is independent of
    /// the number of rows returned in the response, the `limit` request parameter,
    /// and the `offset` request parameter.
    pub row_count: Option<i32>,

    /// Metadata for the report.
    pub metadata: Option<crate::model::ResponseMetaData>,

    /// This Google Analytics property's quota state including this request.
    pub property_quota: Option<crate::model::PropertyQuota>,

    /// Identifies what kind of resource this message is. This `kind` is always the
    /// fixed string "analyticsData#runReport".
    pub kind: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RunReportResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_headers][crate::model::RunReportResponse::dimension_headers].
    pub fn set_dimension_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionHeader>,
    {
        self.dimension_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metric_headers][crate::model::RunReportResponse::metric_headers].
    pub fn set_metric_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricHeader>,
    {
        self.metric_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [rows][crate::model::RunReportResponse::rows].
    pub fn set_rows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.rows = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [totals][crate::model::RunReportResponse::totals].
    pub fn set_totals<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.totals = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [maximums][crate::model::RunReportResponse::maximums].
    pub fn set_maximums<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.maximums = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [minimums][crate::model::RunReportResponse::minimums].
    pub fn set_minimums<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.minimums = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_count][crate::model::RunReportResponse::row_count].
    pub fn set_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.row_count = Some(v.into());
        self
    }

    /// Sets the value of [metadata][crate::model::RunReportResponse::metadata].
    pub fn set_metadata<T: Into<crate::model::ResponseMetaData>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [property_quota][crate::model::RunReportResponse::property_quota].
    pub fn set_property_quota<T: Into<crate::model::PropertyQuota>>(mut self, v: T) -> Self {
        self.property_quota = Some(v.into());
        self
    }

    /// Sets the value of [kind][crate::model::RunReportResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// Summarizes dimension values from a row for this pivot.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PivotDimensionHeader {
    /// Values of multiple dimensions in a pivot.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_values: Vec<crate::model::DimensionValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PivotDimensionHeader {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_values][crate::model::PivotDimensionHeader::dimension_values].
    pub fn set_dimension_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionValue>,
    {
        self.dimension_values = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Dimensions' values in a single pivot.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PivotHeader {
    /// The size is the same as the cardinality of the corresponding dimension
    /// combinations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pivot_dimension_headers: Vec<crate::model::PivotDimensionHeader>,

    /// The cardinality of the pivot. The total number of rows for this pivot's
    /// fields regardless of how the parameters `offset` and `limit` are specified
    /// in the request.
    pub row_count: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PivotHeader {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pivot_dimension_headers][crate::model::PivotHeader::pivot_dimension_headers].
    pub fn set_pivot_dimension_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::PivotDimensionHeader>,
    {
        self.pivot_dimension_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_count][crate::model::PivotHeader::row_count].
    pub fn set_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.row_count = Some(v.into());
        self
    }
}

/// The response pivot report table corresponding to a pivot request.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunPivotReportResponse {
    /// Summarizes the columns and rows created by a pivot. Each pivot in the
    /// request produces one header in the response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pivot_headers: Vec<crate::model::PivotHeader>,

    /// Describes dimension columns. The number of DimensionHeaders and ordering of
    /// DimensionHeaders matches the dimensions present in rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_headers: Vec<crate::model::DimensionHeader>,

    /// Describes metric columns. The number of MetricHeaders and ordering of
    /// MetricHeaders matches the metrics present in rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_headers: Vec<crate::model::MetricHeader>,

    /// Rows of dimension value combinations and metric values in the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<crate::model::Row>,

    /// Aggregation of metric values. Can be totals, minimums, or maximums.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aggregates: Vec<crate::model::Row>,

    /// Metadata for the report.
    pub metadata: Option<crate::model::ResponseMetaData>,

    /// This Google Analytics property's quota state including this request.
    pub property_quota: Option<crate::model::PropertyQuota>,

    /// Identifies what kind of resource this message is. This `kind` is always the
    /// fixed string "analyticsData#runPivotReport".
    pub kind: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RunPivotReportResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pivot_headers][crate::model::RunPivotReportResponse::pivot_headers].
    pub fn set_pivot_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::PivotHeader>,
    {
        self.pivot_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dimension_headers][crate::model::RunPivotReportResponse::dimension_headers].
    pub fn set_dimension_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionHeader>,
    {
        self.dimension_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metric_headers][crate::model::RunPivotReportResponse::metric_headers].
    pub fn set_metric_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricHeader>,
    {
        self.metric_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [rows][crate::model::RunPivotReportResponse::rows].
    pub fn set_rows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.rows = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [aggregates][crate::model::RunPivotReportResponse::aggregates].
    pub fn set_aggregates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.aggregates = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metadata][crate::model::RunPivotReportResponse::metadata].
    pub fn set_metadata<T: Into<crate::model::ResponseMetaData>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [property_quota][crate::model::RunPivotReportResponse::property_quota].
    pub fn set_property_quota<T: Into<crate::model::PropertyQuota>>(mut self, v: T) -> Self {
        self.property_quota = Some(v.into());
        self
    }

    /// Sets the value of [kind][crate::model::RunPivotReportResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// The batch response containing multiple reports.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchRunReportsResponse {
    /// Individual responses. Each response has a separate report request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<crate::model::RunReportResponse>,

    /// Identifies what kind of resource this message is. This `kind` is always the
    /// fixed string "analyticsData#batchRunReports".
    pub kind: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BatchRunReportsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [reports][crate::model::BatchRunReportsResponse::reports].
    pub fn set_reports<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::RunReportResponse>,
    {
        self.reports = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [kind][crate::model::BatchRunReportsResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// The response realtime report table corresponding to a request.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunRealtimeReportResponse {
    /// Describes dimension columns. The number of DimensionHeaders and ordering of
    /// DimensionHeaders matches the dimensions present in rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_headers: Vec<crate::model::DimensionHeader>,

    /// Describes metric columns. The number of MetricHeaders and ordering of
    /// MetricHeaders matches the metrics present in rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_headers: Vec<crate::model::MetricHeader>,

    /// Rows of dimension value combinations and metric values in the report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<crate::model::Row>,

    /// If requested, the totaled values of metrics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub totals: Vec<crate::model::Row>,

    /// If requested, the maximum values of metrics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maximums: Vec<crate::model::Row>,

    /// If requested, the minimum values of metrics.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minimums: Vec<crate::model::Row>,

    /// The total number of rows in the query result.
    pub row_count: Option<i32>,

    /// This Google Analytics property's Realtime quota state including this
    /// request.
    pub property_quota: Option<crate::model::PropertyQuota>,

    /// Identifies what kind of resource this message is. This `kind` is always the
    /// fixed string "analyticsData#runRealtimeReport".
    pub kind: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RunRealtimeReportResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_headers][crate::model::RunRealtimeReportResponse::dimension_headers].
    pub fn set_dimension_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionHeader>,
    {
        self.dimension_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metric_headers][crate::model::RunRealtimeReportResponse::metric_headers].
    pub fn set_metric_headers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricHeader>,
    {
        self.metric_headers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [rows][crate::model::RunRealtimeReportResponse::rows].
    pub fn set_rows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.rows = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [totals][crate::model::RunRealtimeReportResponse::totals].
    pub fn set_totals<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.totals = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [maximums][crate::model::RunRealtimeReportResponse::maximums].
    pub fn set_maximums<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.maximums = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [minimums][crate::model::RunRealtimeReportResponse::minimums].
    pub fn set_minimums<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Row>,
    {
        self.minimums = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_count][crate::model::RunRealtimeReportResponse::row_count].
    pub fn set_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.row_count = Some(v.into());
        self
    }

    /// Sets the value of [property_quota][crate::model::RunRealtimeReportResponse::property_quota].
    pub fn set_property_quota<T: Into<crate::model::PropertyQuota>>(mut self, v: T) -> Self {
        self.property_quota = Some(v.into());
        self
    }

    /// Sets the value of [kind][crate::model::RunRealtimeReportResponse::kind].
    pub fn set_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.kind = Some(v.into());
        self
    }
}

/// Explains a dimension.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DimensionMetadata {
    /// This dimension's name. Useable in Dimension's `name`. For example,
    /// `eventName`.
    pub api_name: Option<String>,

    /// This dimension's name within the Google Analytics user interface. For
    /// example, `Event name`.
    pub ui_name: Option<String>,

    /// Description of how this dimension is used and calculated.
    pub description: Option<String>,

    /// Still usable but deprecated names for this dimension.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deprecated_api_names: Vec<String>,

    /// True if the dimension is custom to this property.
    pub custom_definition: Option<bool>,

    /// The display name of the category that this dimension belongs to.
    pub category: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DimensionMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [api_name][crate::model::DimensionMetadata::api_name].
    pub fn set_api_name<T: Into<String>>(mut self, v: T) -> Self {
        self.api_name = Some(v.into());
        self
    }

    /// Sets the value of [ui_name][crate::model::DimensionMetadata::ui_name].
    pub fn set_ui_name<T: Into<String>>(mut self, v: T) -> Self {
        self.ui_name = Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::DimensionMetadata::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [deprecated_api_names][crate::model::DimensionMetadata::deprecated_api_names].
    pub fn set_deprecated_api_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.deprecated_api_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [custom_definition][crate::model::DimensionMetadata::custom_definition].
    pub fn set_custom_definition<T: Into<bool>>(mut self, v: T) -> Self {
        self.custom_definition = Some(v.into());
        self
    }

    /// Sets the value of [category][crate::model::DimensionMetadata::category].
    pub fn set_category<T: Into<String>>(mut self, v: T) -> Self {
        self.category = Some(v.into());
        self
    }
}

/// Explains a metric.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricMetadata {
    /// A metric name. Useable in Metric's `name`. For example, `eventCount`.
    pub api_name: Option<String>,

    /// This metric's name within the Google Analytics user interface. For example,
    /// `Event count`.
    pub ui_name: Option<String>,

    /// Description of how this metric is used and calculated.
    pub description: Option<String>,

    /// Still usable but deprecated names for this metric.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub deprecated_api_names: Vec<String>,

    /// The type of this metric.
    pub r#type: Option<crate::model::MetricType>,

    /// The mathematical expression for this derived metric.
    pub expression: Option<String>,

    /// True if the metric is a custom metric for this property.
    pub custom_definition: Option<bool>,

    /// The display name of the category that this metrics belongs to.
    pub category: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MetricMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [api_name][crate::model::MetricMetadata::api_name].
    pub fn set_api_name<T: Into<String>>(mut self, v: T) -> Self {
        self.api_name = Some(v.into());
        self
    }

    /// Sets the value of [ui_name][crate::model::MetricMetadata::ui_name].
    pub fn set_ui_name<T: Into<String>>(mut self, v: T) -> Self {
        self.ui_name = Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::MetricMetadata::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [deprecated_api_names][crate::model::MetricMetadata::deprecated_api_names].
    pub fn set_deprecated_api_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.deprecated_api_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [type][crate::model::MetricMetadata::type].
    pub fn set_type<T: Into<crate::model::MetricType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [expression][crate::model::MetricMetadata::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Sets the value of [custom_definition][crate::model::MetricMetadata::custom_definition].
    pub fn set_custom_definition<T: Into<bool>>(mut self, v: T) -> Self {
        self.custom_definition = Some(v.into());
        self
    }

    /// Sets the value of [category][crate::model::MetricMetadata::category].
    pub fn set_category<T: Into<String>>(mut self, v: T) -> Self {
        self.category = Some(v.into());
        self
    }
}

/// The dimensions, metrics and comparisons currently accepted in reporting
/// methods.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Metadata {
    /// Resource name of this metadata.
    pub name: Option<String>,

    /// The dimension descriptions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<crate::model::DimensionMetadata>,

    /// The metric descriptions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<crate::model::MetricMetadata>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Metadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Metadata::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::Metadata::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionMetadata>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metrics][crate::model::Metadata::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricMetadata>,
    {
        self.metrics = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The compatibility for a single dimension.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DimensionCompatibility {
    /// The dimension metadata contains the API name for this compatibility
    /// information.
    pub dimension_metadata: Option<crate::model::DimensionMetadata>,

    /// The compatibility of this dimension. If the compatibility is COMPATIBLE,
    /// this dimension can be successfully added to the report.
    pub compatibility: Option<crate::model::Compatibility>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DimensionCompatibility {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_metadata][crate::model::DimensionCompatibility::dimension_metadata].
    pub fn set_dimension_metadata<T: Into<crate::model::DimensionMetadata>>(mut self, v: T) -> Self {
        self.dimension_metadata = Some(v.into());
        self
    }

    /// Sets the value of [compatibility][crate::model::DimensionCompatibility::compatibility].
    pub fn set_compatibility<T: Into<crate::model::Compatibility>>(mut self, v: T) -> Self {
        self.compatibility = Some(v.into());
        self
    }
}

/// The compatibility for a single metric.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricCompatibility {
    /// The metric metadata contains the API name for this compatibility
    /// information.
    pub metric_metadata: Option<crate::model::MetricMetadata>,

    /// The compatibility of this metric. If the compatibility is COMPATIBLE, this
    /// metric can be successfully added to the report.
    pub compatibility: Option<crate::model::Compatibility>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MetricCompatibility {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metric_metadata][crate::model::MetricCompatibility::metric_metadata].
    pub fn set_metric_metadata<T: Into<crate::model::MetricMetadata>>(mut self, v: T) -> Self {
        self.metric_metadata = Some(v.into());
        self
    }

    /// Sets the value of [compatibility][crate::model::MetricCompatibility::compatibility].
    pub fn set_compatibility<T: Into<crate::model::Compatibility>>(mut self, v: T) -> Self {
        self.compatibility = Some(v.into());
        self
    }
}

/// The compatibility response with the compatibility of each dimension &
/// metric.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckCompatibilityResponse {
    /// The compatibility of each dimension.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_compatibilities: Vec<crate::model::DimensionCompatibility>,

    /// The compatibility of each metric.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_compatibilities: Vec<crate::model::MetricCompatibility>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CheckCompatibilityResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_compatibilities][crate::model::CheckCompatibilityResponse::dimension_compatibilities].
    pub fn set_dimension_compatibilities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DimensionCompatibility>,
    {
        self.dimension_compatibilities = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metric_compatibilities][crate::model::CheckCompatibilityResponse::metric_compatibilities].
    pub fn set_metric_compatibilities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricCompatibility>,
    {
        self.metric_compatibilities = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// An audience dimension is a user attribute. Specific user attributed are
/// requested and then later returned in the `QueryAudienceExportResponse`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AudienceDimension {
    /// Optional. The API name of the dimension. See the API Dimensions for the list
    /// of dimension names.
    pub dimension_name: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AudienceDimension {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_name][crate::model::AudienceDimension::dimension_name].
    pub fn set_dimension_name<T: Into<String>>(mut self, v: T) -> Self {
        self.dimension_name = Some(v.into());
        self
    }
}

/// An audience export is a list of users in an audience at the time of the
/// list's creation. One audience may have multiple audience exports created for
/// different days.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AudienceExport {
    /// Output only. Identifier. The audience export resource name assigned during
    /// creation. Format: `properties/{property}/audienceExports/{audience_export}`
    pub name: Option<String>,

    /// Required. The audience resource name. This resource name identifies the
    /// audience being listed and is shared between the Analytics Data & Admin APIs.
    pub audience: Option<String>,

    /// Output only. The descriptive display name for this audience. For example,
    /// "Purchasers".
    pub audience_display_name: Option<String>,

    /// Required. The dimensions requested and displayed in the query response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<crate::model::AudienceDimension>,

    /// Output only. The current state for this AudienceExport.
    pub state: Option<crate::model::AudienceExportState>,

    /// Output only. The time when CreateAudienceExport was called and the
    /// AudienceExport began the `CREATING` state.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub begin_creating_time: Option<time::OffsetDateTime>,

    /// Output only. The total quota tokens charged during creation of the
    /// AudienceExport.
    pub creation_quota_tokens_charged: Option<i32>,

    /// Output only. The total number of rows in the AudienceExport result.
    pub row_count: Option<i32>,

    /// Output only. Error message is populated when an audience export fails during
    /// creation.
    pub error_message: Option<String>,

    /// Output only. The percentage completed for this audience export ranging
    /// between 0 to 100.
    pub percentage_completed: Option<f64>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AudienceExport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::AudienceExport::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [audience][crate::model::AudienceExport::audience].
    pub fn set_audience<T: Into<String>>(mut self, v: T) -> Self {
        self.audience = Some(v.into());
        self
    }

    /// Sets the value of [audience_display_name][crate::model::AudienceExport::audience_display_name].
    pub fn set_audience_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.audience_display_name = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::AudienceExport::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AudienceDimension>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [state][crate::model::AudienceExport::state].
    pub fn set_state<T: Into<crate::model::AudienceExportState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [begin_creating_time][crate::model::AudienceExport::begin_creating_time].
    pub fn set_begin_creating_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.begin_creating_time = Some(v.into());
        self
    }

    /// Sets the value of [creation_quota_tokens_charged][crate::model::AudienceExport::creation_quota_tokens_charged].
    pub fn set_creation_quota_tokens_charged<T: Into<i32>>(mut self, v: T) -> Self {
        self.creation_quota_tokens_charged = Some(v.into());
        self
    }

    /// Sets the value of [row_count][crate::model::AudienceExport::row_count].
    pub fn set_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.row_count = Some(v.into());
        self
    }

    /// Sets the value of [error_message][crate::model::AudienceExport::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Sets the value of [percentage_completed][crate::model::AudienceExport::percentage_completed].
    pub fn set_percentage_completed<T: Into<f64>>(mut self, v: T) -> Self {
        self.percentage_completed = Some(v.into());
        self
    }
}

/// A list of all audience exports for a property.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAudienceExportsResponse {
    /// Each audience export for a property.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audience_exports: Vec<crate::model::AudienceExport>,

    /// A token, which can be sent as `page_token` to retrieve the next page. If
    /// this field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListAudienceExportsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [audience_exports][crate::model::ListAudienceExportsResponse::audience_exports].
    pub fn set_audience_exports<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AudienceExport>,
    {
        self.audience_exports = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListAudienceExportsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// The value of a dimension.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AudienceDimensionValue {
    /// Value as a string if the dimension type is a string.
    pub value: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AudienceDimensionValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][crate::model::AudienceDimensionValue::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// Dimension value attributes for the audience user row.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AudienceRow {
    /// Each dimension value attribute for an audience user. One dimension value
    /// will be added for each dimension column requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimension_values: Vec<crate::model::AudienceDimensionValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AudienceRow {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dimension_values][crate::model::AudienceRow::dimension_values].
    pub fn set_dimension_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AudienceDimensionValue>,
    {
        self.dimension_values = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A list of users in an audience export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryAudienceExportResponse {
    /// Configuration data about AudienceExport being queried.
    pub audience_export: Option<crate::model::AudienceExport>,

    /// Rows for each user in an audience export. The number of rows in this
    /// response will be less than or equal to request's page size.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audience_rows: Vec<crate::model::AudienceRow>,

    /// The total number of rows in the AudienceExport result. `rowCount` is
    /// independent of the number of rows returned in the response, the `limit`
    /// request parameter, and the `offset` request parameter.
    pub row_count: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl QueryAudienceExportResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [audience_export][crate::model::QueryAudienceExportResponse::audience_export].
    pub fn set_audience_export<T: Into<crate::model::AudienceExport>>(mut self, v: T) -> Self {
        self.audience_export = Some(v.into());
        self
    }

    /// Sets the value of [audience_rows][crate::model::QueryAudienceExportResponse::audience_rows].
    pub fn set_audience_rows<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AudienceRow>,
    {
        self.audience_rows = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [row_count][crate::model::QueryAudienceExportResponse::row_count].
    pub fn set_row_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.row_count = Some(v.into());
        self
    }
}

/// Represents aggregation of metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct MetricAggregation(std::borrow::Cow<'static, str>);

impl MetricAggregation {
    /// Creates a new MetricAggregation instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [MetricAggregation](MetricAggregation)
pub mod metric_aggregation {
    use super::MetricAggregation;

    /// Unspecified operator.
    pub const METRIC_AGGREGATION_UNSPECIFIED: MetricAggregation = MetricAggregation::new("METRIC_AGGREGATION_UNSPECIFIED");

    /// SUM operator.
    pub const TOTAL: MetricAggregation = MetricAggregation::new("TOTAL");

    /// Minimum operator.
    pub const MINIMUM: MetricAggregation = MetricAggregation::new("MINIMUM");

    /// Maximum operator.
    pub const MAXIMUM: MetricAggregation = MetricAggregation::new("MAXIMUM");

    /// Count operator.
    pub const COUNT: MetricAggregation = MetricAggregation::new("COUNT");
}

impl std::convert::From<&str> for MetricAggregation {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for MetricAggregation {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// A metric's value type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct MetricType(std::borrow::Cow<'static, str>);

impl MetricType {
    /// Creates a new MetricType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [MetricType](MetricType)
pub mod metric_type {
    use super::MetricType;

    /// Unspecified type.
    pub const METRIC_TYPE_UNSPECIFIED: MetricType = MetricType::new("METRIC_TYPE_UNSPECIFIED");

    /// Integer type.
    pub const TYPE_INTEGER: MetricType = MetricType::new("TYPE_INTEGER");

    /// Floating point type.
    pub const TYPE_FLOAT: MetricType = MetricType::new("TYPE_FLOAT");

    /// A duration of seconds; a special floating point type.
    pub const TYPE_SECONDS: MetricType = MetricType::new("TYPE_SECONDS");

    /// A duration in milliseconds; a special floating point type.
    pub const TYPE_MILLISECONDS: MetricType = MetricType::new("TYPE_MILLISECONDS");

    /// A duration in minutes; a special floating point type.
    pub const TYPE_MINUTES: MetricType = MetricType::new("TYPE_MINUTES");

    /// A duration in hours; a special floating point type.
    pub const TYPE_HOURS: MetricType = MetricType::new("TYPE_HOURS");

    /// A custom metric of standard type; a special floating point type.
    pub const TYPE_STANDARD: MetricType = MetricType::new("TYPE_STANDARD");

    /// An amount of money; a special floating point type.
    pub const TYPE_CURRENCY: MetricType = MetricType::new("TYPE_CURRENCY");

    /// A length in feet; a special floating point type.
    pub const TYPE_FEET: MetricType = MetricType::new("TYPE_FEET");

    /// A length in miles; a special floating point type.
    pub const TYPE_MILES: MetricType = MetricType::new("TYPE_MILES");

    /// A length in meters; a special floating point type.
    pub const TYPE_METERS: MetricType = MetricType::new("TYPE_METERS");

    /// A length in kilometers; a special floating point type.
    pub const TYPE_KILOMETERS: MetricType = MetricType::new("TYPE_KILOMETERS");
}

impl std::convert::From<&str> for MetricType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for MetricType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The match type of a string filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct MatchType(std::borrow::Cow<'static, str>);

impl MatchType {
    /// Creates a new MatchType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [MatchType](MatchType)
pub mod match_type {
    use super::MatchType;

    /// Unspecified
    pub const MATCH_TYPE_UNSPECIFIED: MatchType = MatchType::new("MATCH_TYPE_UNSPECIFIED");

    /// Exact match of the string value.
    pub const EXACT: MatchType = MatchType::new("EXACT");

    /// Begins with the string value.
    pub const BEGINS_WITH: MatchType = MatchType::new("BEGINS_WITH");

    /// Ends with the string value.
    pub const ENDS_WITH: MatchType = MatchType::new("ENDS_WITH");

    /// Contains the string value.
    pub const CONTAINS: MatchType = MatchType::new("CONTAINS");

    /// Full match for the regular expression with the string value.
    pub const FULL_REGEXP: MatchType = MatchType::new("FULL_REGEXP");

    /// Partial match for the regular expression with the string value.
    pub const PARTIAL_REGEXP: MatchType = MatchType::new("PARTIAL_REGEXP");
}

impl std::convert::From<&str> for MatchType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for MatchType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The operation applied to a numeric filter
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct NumericFilterOperation(std::borrow::Cow<'static, str>);

impl NumericFilterOperation {
    /// Creates a new NumericFilterOperation instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [NumericFilterOperation](NumericFilterOperation)
pub mod numeric_filter_operation {
    use super::NumericFilterOperation;

    /// Unspecified.
    pub const OPERATION_UNSPECIFIED: NumericFilterOperation = NumericFilterOperation::new("OPERATION_UNSPECIFIED");

    /// Equal
    pub const EQUAL: NumericFilterOperation = NumericFilterOperation::new("EQUAL");

    /// Less than
    pub const LESS_THAN: NumericFilterOperation = NumericFilterOperation::new("LESS_THAN");

    /// Less than or equal
    pub const LESS_THAN_OR_EQUAL: NumericFilterOperation = NumericFilterOperation::new("LESS_THAN_OR_EQUAL");

    /// Greater than
    pub const GREATER_THAN: NumericFilterOperation = NumericFilterOperation::new("GREATER_THAN");

    /// Greater than or equal
    pub const GREATER_THAN_OR_EQUAL: NumericFilterOperation = NumericFilterOperation::new("GREATER_THAN_OR_EQUAL");
}

impl std::convert::From<&str> for NumericFilterOperation {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for NumericFilterOperation {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Rule to order the string dimension values by.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct OrderType(std::borrow::Cow<'static, str>);

impl OrderType {
    /// Creates a new OrderType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [OrderType](OrderType)
pub mod order_type {
    use super::OrderType;

    /// Unspecified.
    pub const ORDER_TYPE_UNSPECIFIED: OrderType = OrderType::new("ORDER_TYPE_UNSPECIFIED");

    /// Alphanumeric sort by Unicode code point. For example, "2" < "A" < "X" < "b"
    /// < "z".
    pub const ALPHANUMERIC: OrderType = OrderType::new("ALPHANUMERIC");

    /// Case insensitive alphanumeric sort by lower case Unicode code point.
    pub const CASE_INSENSITIVE_ALPHANUMERIC: OrderType = OrderType::new("CASE_INSENSITIVE_ALPHANUMERIC");

    /// Dimension values are converted to numbers before sorting.
    pub const NUMERIC: OrderType = OrderType::new("NUMERIC");
}

impl std::convert::From<&str> for OrderType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for OrderType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The compatibility types for a single dimension or metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct Compatibility(std::borrow::Cow<'static, str>);

impl Compatibility {
    /// Creates a new Compatibility instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [Compatibility](Compatibility)
pub mod compatibility {
    use super::Compatibility;

    /// Unspecified compatibility.
    pub const COMPATIBILITY_UNSPECIFIED: Compatibility = Compatibility::new("COMPATIBILITY_UNSPECIFIED");

    /// The dimension or metric is compatible. This dimension or metric can be
    /// successfully added to a report.
    pub const COMPATIBLE: Compatibility = Compatibility::new("COMPATIBLE");

    /// The dimension or metric is incompatible. This dimension or metric cannot be
    /// successfully added to a report.
    pub const INCOMPATIBLE: Compatibility = Compatibility::new("INCOMPATIBLE");
}

impl std::convert::From<&str> for Compatibility {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for Compatibility {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The AudienceExport currently exists in this state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct AudienceExportState(std::borrow::Cow<'static, str>);

impl AudienceExportState {
    /// Creates a new AudienceExportState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [AudienceExportState](AudienceExportState)
pub mod audience_export_state {
    use super::AudienceExportState;

    /// Unspecified state will never be used.
    pub const STATE_UNSPECIFIED: AudienceExportState = AudienceExportState::new("STATE_UNSPECIFIED");

    /// The AudienceExport is currently creating and will be available in the
    /// future.
    pub const CREATING: AudienceExportState = AudienceExportState::new("CREATING");

    /// The AudienceExport is fully created and ready for querying.
    pub const ACTIVE: AudienceExportState = AudienceExportState::new("ACTIVE");

    /// The AudienceExport failed to be created. It is possible that re-requesting
    /// this audience export will succeed.
    pub const FAILED: AudienceExportState = AudienceExportState::new("FAILED");
}

impl std::convert::From<&str> for AudienceExportState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for AudienceExportState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [AnalyticsData::run_report][crate::client::AnalyticsData::run_report].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunReportRequest {
    /// The `property` path parameter.
    #[serde(skip)]
    pub property: Option<String>,

    /// The dimensions requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<crate::model::Dimension>,

    /// The metrics requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<crate::model::Metric>,

    /// Date ranges of data to read. If multiple date ranges are requested, each
    /// response row will contain a zero based date range index.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date_ranges: Vec<crate::model::DateRange>,

    /// Dimension filters let you ask for only specific dimension values in the
    /// report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<crate::model::FilterExpression>,

    /// The filter clause of metrics. Applied after aggregating the report's rows,
    /// similar to SQL having-clause. Dimensions cannot be used in this filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<crate::model::FilterExpression>,

    /// The row count of the start row. The first row is counted as row 0.
    #[serde_as(as = "Option<wire::I64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// The number of rows to return. If unspecified, 10,000 rows are returned. The
    /// API returns a maximum of 250,000 rows per request, no matter how many you
    /// ask for.
    #[serde_as(as = "Option<wire::I64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Aggregation of metrics. Aggregated metric values will be shown in rows where
    /// the dimension_values are set to "RESERVED_(MetricAggregation)".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_aggregations: Vec<crate::model::MetricAggregation>,

    /// Specifies how rows are ordered in the response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<crate::model::OrderBy>,

    /// A currency code in ISO4217 format, such as "AED", "USD", "JPY". If the field
    /// is empty, the report uses the property's default currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// If false or unspecified, each row with all metrics equal to 0 will not be
    /// returned. If true, these rows will be returned if they are not separately
    /// removed by a filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_empty_rows: Option<bool>,

    /// Toggles whether to return the current state of this Google Analytics
    /// property's quota. Quota is returned in PropertyQuota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_property_quota: Option<bool>,
}

impl RunReportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [property][crate::model::RunReportRequest::property].
    pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
        self.property = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::RunReportRequest::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Dimension>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metrics][crate::model::RunReportRequest::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Metric>,
    {
        self.metrics = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [date_ranges][crate::model::RunReportRequest::date_ranges].
    pub fn set_date_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DateRange>,
    {
        self.date_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dimension_filter][crate::model::RunReportRequest::dimension_filter].
    pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.dimension_filter = Some(v.into());
        self
    }

    /// Sets the value of [metric_filter][crate::model::RunReportRequest::metric_filter].
    pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.metric_filter = Some(v.into());
        self
    }

    /// Sets the value of [offset][crate::model::RunReportRequest::offset].
    pub fn set_offset<T: Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::RunReportRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [metric_aggregations][crate::model::RunReportRequest::metric_aggregations].
    pub fn set_metric_aggregations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricAggregation>,
    {
        self.metric_aggregations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [order_bys][crate::model::RunReportRequest::order_bys].
    pub fn set_order_bys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::OrderBy>,
    {
        self.order_bys = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [currency_code][crate::model::RunReportRequest::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = Some(v.into());
        self
    }

    /// Sets the value of [keep_empty_rows][crate::model::RunReportRequest::keep_empty_rows].
    pub fn set_keep_empty_rows<T: Into<bool>>(mut self, v: T) -> Self {
        self.keep_empty_rows = Some(v.into());
        self
    }

    /// Sets the value of [return_property_quota][crate::model::RunReportRequest::return_property_quota].
    pub fn set_return_property_quota<T: Into<bool>>(mut self, v: T) -> Self {
        self.return_property_quota = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::run_pivot_report][crate::client::AnalyticsData::run_pivot_report].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunPivotReportRequest {
    /// The `property` path parameter.
    #[serde(skip)]
    pub property: Option<String>,

    /// The dimensions requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<crate::model::Dimension>,

    /// The metrics requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<crate::model::Metric>,

    /// Date ranges of data to read. If multiple date ranges are requested, each
    /// response row will contain a zero based date range index.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date_ranges: Vec<crate::model::DateRange>,

    /// Describes the visual format of the report's dimensions in columns or rows.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pivots: Vec<crate::model::Pivot>,

    /// Dimension filters let you ask for only specific dimension values in the
    /// report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<crate::model::FilterExpression>,

    /// The filter clause of metrics. Applied after aggregating the report's rows,
    /// similar to SQL having-clause. Dimensions cannot be used in this filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<crate::model::FilterExpression>,

    /// A currency code in ISO4217 format, such as "AED", "USD", "JPY". If the field
    /// is empty, the report uses the property's default currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// If false or unspecified, each row with all metrics equal to 0 will not be
    /// returned. If true, these rows will be returned if they are not separately
    /// removed by a filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_empty_rows: Option<bool>,

    /// Toggles whether to return the current state of this Google Analytics
    /// property's quota. Quota is returned in PropertyQuota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_property_quota: Option<bool>,
}

impl RunPivotReportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [property][crate::model::RunPivotReportRequest::property].
    pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
        self.property = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::RunPivotReportRequest::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Dimension>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metrics][crate::model::RunPivotReportRequest::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Metric>,
    {
        self.metrics = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [date_ranges][crate::model::RunPivotReportRequest::date_ranges].
    pub fn set_date_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DateRange>,
    {
        self.date_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [pivots][crate::model::RunPivotReportRequest::pivots].
    pub fn set_pivots<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Pivot>,
    {
        self.pivots = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dimension_filter][crate::model::RunPivotReportRequest::dimension_filter].
    pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.dimension_filter = Some(v.into());
        self
    }

    /// Sets the value of [metric_filter][crate::model::RunPivotReportRequest::metric_filter].
    pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.metric_filter = Some(v.into());
        self
    }

    /// Sets the value of [currency_code][crate::model::RunPivotReportRequest::currency_code].
    pub fn set_currency_code<T: Into<String>>(mut self, v: T) -> Self {
        self.currency_code = Some(v.into());
        self
    }

    /// Sets the value of [keep_empty_rows][crate::model::RunPivotReportRequest::keep_empty_rows].
    pub fn set_keep_empty_rows<T: Into<bool>>(mut self, v: T) -> Self {
        self.keep_empty_rows = Some(v.into());
        self
    }

    /// Sets the value of [return_property_quota][crate::model::RunPivotReportRequest::return_property_quota].
    pub fn set_return_property_quota<T: Into<bool>>(mut self, v: T) -> Self {
        self.return_property_quota = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::batch_run_reports][crate::client::AnalyticsData::batch_run_reports].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchRunReportsRequest {
    /// The `property` path parameter.
    #[serde(skip)]
    pub property: Option<String>,

    /// Individual requests. Each request has a separate report response. Each batch
    /// request is allowed up to 5 requests.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requests: Vec<crate::model::RunReportRequest>,
}

impl BatchRunReportsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [property][crate::model::BatchRunReportsRequest::property].
    pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
        self.property = Some(v.into());
        self
    }

    /// Sets the value of [requests][crate::model::BatchRunReportsRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::RunReportRequest>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The request for [AnalyticsData::run_realtime_report][crate::client::AnalyticsData::run_realtime_report].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunRealtimeReportRequest {
    /// The `property` path parameter.
    #[serde(skip)]
    pub property: Option<String>,

    /// The dimensions requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<crate::model::Dimension>,

    /// The metrics requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<crate::model::Metric>,

    /// Dimension filters let you ask for only specific dimension values in the
    /// report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<crate::model::FilterExpression>,

    /// The filter clause of metrics. Applied after aggregating the report's rows,
    /// similar to SQL having-clause. Dimensions cannot be used in this filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<crate::model::FilterExpression>,

    /// The number of rows to return. If unspecified, 10,000 rows are returned. The
    /// API returns a maximum of 250,000 rows per request, no matter how many you
    /// ask for.
    #[serde_as(as = "Option<wire::I64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Aggregation of metrics. Aggregated metric values will be shown in rows where
    /// the dimension_values are set to "RESERVED_(MetricAggregation)".
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metric_aggregations: Vec<crate::model::MetricAggregation>,

    /// Specifies how rows are ordered in the response.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub order_bys: Vec<crate::model::OrderBy>,

    /// The minute ranges of event data to read. If unspecified, one minute range
    /// for the last 30 minutes will be used.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minute_ranges: Vec<crate::model::MinuteRange>,

    /// Toggles whether to return the current state of this Google Analytics
    /// property's quota. Quota is returned in PropertyQuota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_property_quota: Option<bool>,
}

impl RunRealtimeReportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [property][crate::model::RunRealtimeReportRequest::property].
    pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
        self.property = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::RunRealtimeReportRequest::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Dimension>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metrics][crate::model::RunRealtimeReportRequest::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Metric>,
    {
        self.metrics = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dimension_filter][crate::model::RunRealtimeReportRequest::dimension_filter].
    pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.dimension_filter = Some(v.into());
        self
    }

    /// Sets the value of [metric_filter][crate::model::RunRealtimeReportRequest::metric_filter].
    pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.metric_filter = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::RunRealtimeReportRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [metric_aggregations][crate::model::RunRealtimeReportRequest::metric_aggregations].
    pub fn set_metric_aggregations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MetricAggregation>,
    {
        self.metric_aggregations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [order_bys][crate::model::RunRealtimeReportRequest::order_bys].
    pub fn set_order_bys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::OrderBy>,
    {
        self.order_bys = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [minute_ranges][crate::model::RunRealtimeReportRequest::minute_ranges].
    pub fn set_minute_ranges<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::MinuteRange>,
    {
        self.minute_ranges = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [return_property_quota][crate::model::RunRealtimeReportRequest::return_property_quota].
    pub fn set_return_property_quota<T: Into<bool>>(mut self, v: T) -> Self {
        self.return_property_quota = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::check_compatibility][crate::client::AnalyticsData::check_compatibility].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckCompatibilityRequest {
    /// The `property` path parameter.
    #[serde(skip)]
    pub property: Option<String>,

    /// The dimensions requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dimensions: Vec<crate::model::Dimension>,

    /// The metrics requested and displayed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<crate::model::Metric>,

    /// Dimension filters let you ask for only specific dimension values in the
    /// report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_filter: Option<crate::model::FilterExpression>,

    /// The filter clause of metrics. Applied after aggregating the report's rows,
    /// similar to SQL having-clause. Dimensions cannot be used in this filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<crate::model::FilterExpression>,

    /// Filters the dimensions and metrics in the response to just this
    /// compatibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compatibility_filter: Option<crate::model::Compatibility>,
}

impl CheckCompatibilityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [property][crate::model::CheckCompatibilityRequest::property].
    pub fn set_property<T: Into<String>>(mut self, v: T) -> Self {
        self.property = Some(v.into());
        self
    }

    /// Sets the value of [dimensions][crate::model::CheckCompatibilityRequest::dimensions].
    pub fn set_dimensions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Dimension>,
    {
        self.dimensions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metrics][crate::model::CheckCompatibilityRequest::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Metric>,
    {
        self.metrics = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [dimension_filter][crate::model::CheckCompatibilityRequest::dimension_filter].
    pub fn set_dimension_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.dimension_filter = Some(v.into());
        self
    }

    /// Sets the value of [metric_filter][crate::model::CheckCompatibilityRequest::metric_filter].
    pub fn set_metric_filter<T: Into<crate::model::FilterExpression>>(mut self, v: T) -> Self {
        self.metric_filter = Some(v.into());
        self
    }

    /// Sets the value of [compatibility_filter][crate::model::CheckCompatibilityRequest::compatibility_filter].
    pub fn set_compatibility_filter<T: Into<crate::model::Compatibility>>(mut self, v: T) -> Self {
        self.compatibility_filter = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::get_metadata][crate::client::AnalyticsData::get_metadata].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetMetadataRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetMetadataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetMetadataRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::create_audience_export][crate::client::AnalyticsData::create_audience_export].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateAudienceExportRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The request body.
    pub audience_export: Option<crate::model::AudienceExport>,
}

impl CreateAudienceExportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateAudienceExportRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [audience_export][crate::model::CreateAudienceExportRequest::audience_export].
    pub fn set_audience_export<T: Into<crate::model::AudienceExport>>(mut self, v: T) -> Self {
        self.audience_export = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::get_audience_export][crate::client::AnalyticsData::get_audience_export].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAudienceExportRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetAudienceExportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetAudienceExportRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [AnalyticsData::list_audience_exports][crate::client::AnalyticsData::list_audience_exports].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAudienceExportsRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Optional. The maximum number of audience exports to return. The service may
    /// return fewer than this value.
    pub page_size: Option<i32>,

    /// Optional. A page token, received from a previous `ListAudienceExports` call.
    /// Provide this to retrieve the subsequent page.
    pub page_token: Option<String>,
}

impl ListAudienceExportsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListAudienceExportsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListAudienceExportsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListAudienceExportsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListAudienceExportsResponse {
    type PageItem = crate::model::AudienceExport;

    fn items(self) -> Vec<Self::PageItem> {
        self.audience_exports
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [AnalyticsData::query_audience_export][crate::client::AnalyticsData::query_audience_export].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryAudienceExportRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,

    /// Optional. The row count of the start row. The first row is counted as row 0.
    #[serde_as(as = "Option<wire::I64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,

    /// Optional. The number of rows to return. If unspecified, 10,000 rows are
    /// returned.
    #[serde_as(as = "Option<wire::I64>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl QueryAudienceExportRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::QueryAudienceExportRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [offset][crate::model::QueryAudienceExportRequest::offset].
    pub fn set_offset<T: Into<i64>>(mut self, v: T) -> Self {
        self.offset = Some(v.into());
        self
    }

    /// Sets the value of [limit][crate::model::QueryAudienceExportRequest::limit].
    pub fn set_limit<T: Into<i64>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}
