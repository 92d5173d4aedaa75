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

/// Represents the debugged application. The application may include one or more
/// replicated processes executing the same code. Each of these processes is
/// attached with a debugger agent, carrying out the debugging commands.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Debuggee {
    /// Unique identifier for the debuggee generated by the controller service.
    pub id: Option<String>,

    /// Project the debuggee is associated with. Use project number or id when
    /// registering a Google Cloud Platform project.
    pub project: Option<String>,

    /// Uniquifier to further distinguish the application. It is possible that
    /// different applications might have identical values in the debuggee message,
    /// thus, incorrectly identified as a single application by the Controller
    /// service.
    pub uniquifier: Option<String>,

    /// Human readable description of the debuggee. Including a human-readable
    /// project name, environment name and version information is recommended.
    pub description: Option<String>,

    /// If set to `true`, indicates that Controller service does not detect any
    /// activity from the debuggee agents and the application is possibly stopped.
    pub is_inactive: Option<bool>,

    /// Version ID of the agent. Schema: `domain/language-platform/vmajor.minor`
    /// (for example `google.com/java-gcp/v1.1`).
    pub agent_version: Option<String>,

    /// If set to `true`, indicates that the agent should disable itself and detach
    /// from the debuggee.
    pub is_disabled: Option<bool>,

    /// Human readable message to be displayed to the user about this debuggee.
    /// Absence of this field indicates no status.
    pub status: Option<crate::model::StatusMessage>,

    /// References to the locations and revisions of the source code used in the
    /// deployed application.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub source_contexts: Vec<crate::model::SourceContext>,

    /// A set of custom debuggee properties, populated by the agent, to be displayed
    /// to the user.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<String, String>,

    /// Used when setting breakpoint canary for this debuggee.
    pub canary_mode: Option<crate::model::CanaryMode>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Debuggee {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Debuggee::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [project][crate::model::Debuggee::project].
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = Some(v.into());
        self
    }

    /// Sets the value of [uniquifier][crate::model::Debuggee::uniquifier].
    pub fn set_uniquifier<T: Into<String>>(mut self, v: T) -> Self {
        self.uniquifier = Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::Debuggee::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [is_inactive][crate::model::Debuggee::is_inactive].
    pub fn set_is_inactive<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_inactive = Some(v.into());
        self
    }

    /// Sets the value of [agent_version][crate::model::Debuggee::agent_version].
    pub fn set_agent_version<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_version = Some(v.into());
        self
    }

    /// Sets the value of [is_disabled][crate::model::Debuggee::is_disabled].
    pub fn set_is_disabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_disabled = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::Debuggee::status].
    pub fn set_status<T: Into<crate::model::StatusMessage>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [source_contexts][crate::model::Debuggee::source_contexts].
    pub fn set_source_contexts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SourceContext>,
    {
        self.source_contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][crate::model::Debuggee::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [canary_mode][crate::model::Debuggee::canary_mode].
    pub fn set_canary_mode<T: Into<crate::model::CanaryMode>>(mut self, v: T) -> Self {
        self.canary_mode = Some(v.into());
        self
    }
}

/// Represents a contextual status message. The message can indicate an error or
/// informational status, and refer to specific parts of the containing object.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusMessage {
    /// Distinguishes errors from informational messages.
    pub is_error: Option<bool>,

    /// Reference to which the message applies.
    pub refers_to: Option<crate::model::Reference>,

    /// Status message text.
    pub description: Option<crate::model::FormatMessage>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl StatusMessage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [is_error][crate::model::StatusMessage::is_error].
    pub fn set_is_error<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_error = Some(v.into());
        self
    }

    /// Sets the value of [refers_to][crate::model::StatusMessage::refers_to].
    pub fn set_refers_to<T: Into<crate::model::Reference>>(mut self, v: T) -> Self {
        self.refers_to = Some(v.into());
        self
    }

    /// Sets the value of [description][crate::model::StatusMessage::description].
    pub fn set_description<T: Into<crate::model::FormatMessage>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// Represents a message with parameters.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FormatMessage {
    /// Format template for the message. The `format` uses placeholders `$0`, `$1`,
    /// etc. to reference parameters. `$$` can be used to denote the `$` character.
    pub format: Option<String>,

    /// Optional parameters to be embedded into the message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FormatMessage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [format][crate::model::FormatMessage::format].
    pub fn set_format<T: Into<String>>(mut self, v: T) -> Self {
        self.format = Some(v.into());
        self
    }

    /// Sets the value of [parameters][crate::model::FormatMessage::parameters].
    pub fn set_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.parameters = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A SourceContext is a reference to a tree of files. A SourceContext together
/// with a path point to a unique revision of a single file or directory.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceContext {
    /// A SourceContext referring to any third party Git repo (e.g., GitHub).
    pub git: Option<crate::model::GitSourceContext>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SourceContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [git][crate::model::SourceContext::git].
    pub fn set_git<T: Into<crate::model::GitSourceContext>>(mut self, v: T) -> Self {
        self.git = Some(v.into());
        self
    }
}

/// A GitSourceContext denotes a particular revision in a third party Git
/// repository (e.g., GitHub).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GitSourceContext {
    /// Git repository URL.
    pub url: Option<String>,

    /// Git commit hash.
    pub revision_id: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GitSourceContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [url][crate::model::GitSourceContext::url].
    pub fn set_url<T: Into<String>>(mut self, v: T) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Sets the value of [revision_id][crate::model::GitSourceContext::revision_id].
    pub fn set_revision_id<T: Into<String>>(mut self, v: T) -> Self {
        self.revision_id = Some(v.into());
        self
    }
}

/// Represents the breakpoint specification, status and results.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Breakpoint {
    /// Breakpoint identifier, unique in the scope of the debuggee.
    pub id: Option<String>,

    /// Action that the agent should perform when the code at the breakpoint
    /// location is hit.
    pub action: Option<crate::model::BreakpointAction>,

    /// Breakpoint source location.
    pub location: Option<crate::model::SourceLocation>,

    /// Condition that triggers the breakpoint. The condition is a compound boolean
    /// expression composed using expressions in a programming language at the
    /// source location.
    pub condition: Option<String>,

    /// List of read-only expressions to evaluate at the breakpoint location. The
    /// expressions are composed using expressions in the programming language at
    /// the source location.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expressions: Vec<String>,

    /// Only relevant when action is `LOG`. Defines the message to log when the
    /// breakpoint hits.
    pub log_message_format: Option<String>,

    /// Indicates the severity of the log. Only relevant when action is `LOG`.
    pub log_level: Option<crate::model::LogLevel>,

    /// When true, indicates that this is a final result and the breakpoint state
    /// will not change from here on.
    pub is_final_state: Option<bool>,

    /// Time this breakpoint was created by the server in seconds resolution.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Time this breakpoint was finalized as seen by the server in seconds
    /// resolution.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub final_time: Option<time::OffsetDateTime>,

    /// E-mail address of the user that created this breakpoint
    pub user_email: Option<String>,

    /// Breakpoint status. The status includes an error flag and a human readable
    /// message.
    pub status: Option<crate::model::StatusMessage>,

    /// The stack at breakpoint time, where stack_frames[0] represents the most
    /// recently entered function.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stack_frames: Vec<crate::model::StackFrame>,

    /// Values of evaluated expressions at breakpoint time. The evaluated
    /// expressions appear in exactly the same order they are listed in the
    /// `expressions` field.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evaluated_expressions: Vec<crate::model::Variable>,

    /// The `variable_table` exists to aid with computation, memory and network
    /// traffic optimization. It enables storing a variable once and reference it
    /// from multiple variables, including variables stored in the `variable_table`
    /// itself.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variable_table: Vec<crate::model::Variable>,

    /// A set of custom breakpoint properties, populated by the agent, to be
    /// displayed to the user.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<String, String>,

    /// The deadline for the breakpoint to stay in CANARY_ACTIVE state. The value is
    /// meaningless when the breakpoint is not in CANARY_ACTIVE state.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub canary_expire_time: Option<time::OffsetDateTime>,

    /// The current state of the breakpoint.
    pub state: Option<crate::model::BreakpointState>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Breakpoint {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Breakpoint::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [action][crate::model::Breakpoint::action].
    pub fn set_action<T: Into<crate::model::BreakpointAction>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::Breakpoint::location].
    pub fn set_location<T: Into<crate::model::SourceLocation>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [condition][crate::model::Breakpoint::condition].
    pub fn set_condition<T: Into<String>>(mut self, v: T) -> Self {
        self.condition = Some(v.into());
        self
    }

    /// Sets the value of [expressions][crate::model::Breakpoint::expressions].
    pub fn set_expressions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.expressions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [log_message_format][crate::model::Breakpoint::log_message_format].
    pub fn set_log_message_format<T: Into<String>>(mut self, v: T) -> Self {
        self.log_message_format = Some(v.into());
        self
    }

    /// Sets the value of [log_level][crate::model::Breakpoint::log_level].
    pub fn set_log_level<T: Into<crate::model::LogLevel>>(mut self, v: T) -> Self {
        self.log_level = Some(v.into());
        self
    }

    /// Sets the value of [is_final_state][crate::model::Breakpoint::is_final_state].
    pub fn set_is_final_state<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_final_state = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Breakpoint::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [final_time][crate::model::Breakpoint::final_time].
    pub fn set_final_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.final_time = Some(v.into());
        self
    }

    /// Sets the value of [user_email][crate::model::Breakpoint::user_email].
    pub fn set_user_email<T: Into<String>>(mut self, v: T) -> Self {
        self.user_email = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::Breakpoint::status].
    pub fn set_status<T: Into<crate::model::StatusMessage>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [stack_frames][crate::model::Breakpoint::stack_frames].
    pub fn set_stack_frames<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::StackFrame>,
    {
        self.stack_frames = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [evaluated_expressions][crate::model::Breakpoint::evaluated_expressions].
    pub fn set_evaluated_expressions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Variable>,
    {
        self.evaluated_expressions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [variable_table][crate::model::Breakpoint::variable_table].
    pub fn set_variable_table<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Variable>,
    {
        self.variable_table = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][crate::model::Breakpoint::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [canary_expire_time][crate::model::Breakpoint::canary_expire_time].
    pub fn set_canary_expire_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.canary_expire_time = Some(v.into());
        self
    }

    /// Sets the value of [state][crate::model::Breakpoint::state].
    pub fn set_state<T: Into<crate::model::BreakpointState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }
}

/// Represents a location in the source code.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceLocation {
    /// Path to the source file within the source context of the target binary.
    pub path: Option<String>,

    /// Line inside the file. The first line in the file has the value `1`.
    pub line: Option<i32>,

    /// Column within a line. The first column in a line as the value `1`. Agents
    /// that do not support setting breakpoints on specific columns ignore this
    /// field.
    pub column: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SourceLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [path][crate::model::SourceLocation::path].
    pub fn set_path<T: Into<String>>(mut self, v: T) -> Self {
        self.path = Some(v.into());
        self
    }

    /// Sets the value of [line][crate::model::SourceLocation::line].
    pub fn set_line<T: Into<i32>>(mut self, v: T) -> Self {
        self.line = Some(v.into());
        self
    }

    /// Sets the value of [column][crate::model::SourceLocation::column].
    pub fn set_column<T: Into<i32>>(mut self, v: T) -> Self {
        self.column = Some(v.into());
        self
    }
}

/// Represents a stack frame context.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StackFrame {
    /// Demangled function name at the call site.
    pub function: Option<String>,

    /// Source location of the call site.
    pub location: Option<crate::model::SourceLocation>,

    /// Set of arguments passed to this function. Note that this might not be
    /// populated for all stack frames.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<crate::model::Variable>,

    /// Set of local variables at the stack frame location. Note that this might not
    /// be populated for all stack frames.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locals: Vec<crate::model::Variable>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl StackFrame {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [function][crate::model::StackFrame::function].
    pub fn set_function<T: Into<String>>(mut self, v: T) -> Self {
        self.function = Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::StackFrame::location].
    pub fn set_location<T: Into<crate::model::SourceLocation>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [arguments][crate::model::StackFrame::arguments].
    pub fn set_arguments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Variable>,
    {
        self.arguments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [locals][crate::model::StackFrame::locals].
    pub fn set_locals<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Variable>,
    {
        self.locals = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Represents a variable or an argument possibly of a compound object type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Variable {
    /// Name of the variable, if any.
    pub name: Option<String>,

    /// Simple value of the variable.
    pub value: Option<String>,

    /// Variable type (e.g. `MyClass`). If the variable is split with
    /// `var_table_index`, `type` goes next to `value`.
    pub r#type: Option<String>,

    /// Members contained or pointed to by the variable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<crate::model::Variable>,

    /// Reference to a variable in the shared variable table. More than one variable
    /// can reference the same variable in the table.
    pub var_table_index: Option<i32>,

    /// Status associated with the variable. This field will usually stay unset.
    pub status: Option<crate::model::StatusMessage>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Variable {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Variable::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [value][crate::model::Variable::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::Variable::type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [members][crate::model::Variable::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Variable>,
    {
        self.members = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [var_table_index][crate::model::Variable::var_table_index].
    pub fn set_var_table_index<T: Into<i32>>(mut self, v: T) -> Self {
        self.var_table_index = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::Variable::status].
    pub fn set_status<T: Into<crate::model::StatusMessage>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

/// Wraps the breakpoint action used to filter the list of breakpoints.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BreakpointActionValue {
    /// Only breakpoints with the specified action will pass the filter.
    pub value: Option<crate::model::BreakpointAction>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BreakpointActionValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][crate::model::BreakpointActionValue::value].
    pub fn set_value<T: Into<crate::model::BreakpointAction>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }
}

/// Response for listing debuggees.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDebuggeesResponse {
    /// List of debuggees accessible to the calling user. The fields `debuggee.id`
    /// and `description` are guaranteed to be set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub debuggees: Vec<crate::model::Debuggee>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListDebuggeesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggees][crate::model::ListDebuggeesResponse::debuggees].
    pub fn set_debuggees<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Debuggee>,
    {
        self.debuggees = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response for getting breakpoint information.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetBreakpointResponse {
    /// Complete breakpoint state. The fields `id` and `location` are guaranteed to
    /// be set.
    pub breakpoint: Option<crate::model::Breakpoint>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GetBreakpointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoint][crate::model::GetBreakpointResponse::breakpoint].
    pub fn set_breakpoint<T: Into<crate::model::Breakpoint>>(mut self, v: T) -> Self {
        self.breakpoint = Some(v.into());
        self
    }
}

/// Response for listing breakpoints.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListBreakpointsResponse {
    /// List of breakpoints matching the request. The fields `id` and `location` are
    /// guaranteed to be set on each breakpoint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakpoints: Vec<crate::model::Breakpoint>,

    /// A wait token that can be used in the next call to `list` (REST) or
    /// `ListBreakpoints` (RPC) to block until the list of breakpoints has changes.
    pub next_wait_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListBreakpointsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoints][crate::model::ListBreakpointsResponse::breakpoints].
    pub fn set_breakpoints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Breakpoint>,
    {
        self.breakpoints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_wait_token][crate::model::ListBreakpointsResponse::next_wait_token].
    pub fn set_next_wait_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_wait_token = Some(v.into());
        self
    }
}

/// Response for setting a breakpoint.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetBreakpointResponse {
    /// Breakpoint resource. The field `id` is guaranteed to be set (in addition to
    /// the echoed fields).
    pub breakpoint: Option<crate::model::Breakpoint>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SetBreakpointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoint][crate::model::SetBreakpointResponse::breakpoint].
    pub fn set_breakpoint<T: Into<crate::model::Breakpoint>>(mut self, v: T) -> Self {
        self.breakpoint = Some(v.into());
        self
    }
}

/// Response for registering a debuggee.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegisterDebuggeeResponse {
    /// A unique ID generated for the agent. Each RegisterDebuggee request will
    /// generate a new agent ID.
    pub agent_id: Option<String>,

    /// Debuggee resource. The field `id` is guaranteed to be set (in addition to
    /// the echoed fields).
    pub debuggee: Option<crate::model::Debuggee>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RegisterDebuggeeResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_id][crate::model::RegisterDebuggeeResponse::agent_id].
    pub fn set_agent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_id = Some(v.into());
        self
    }

    /// Sets the value of [debuggee][crate::model::RegisterDebuggeeResponse::debuggee].
    pub fn set_debuggee<T: Into<crate::model::Debuggee>>(mut self, v: T) -> Self {
        self.debuggee = Some(v.into());
        self
    }
}

/// Response for listing active breakpoints.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListActiveBreakpointsResponse {
    /// List of all active breakpoints. The fields `id` and `location` are
    /// guaranteed to be set on each breakpoint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakpoints: Vec<crate::model::Breakpoint>,

    /// A token that can be used in the next method call to block until the list of
    /// breakpoints changes.
    pub next_wait_token: Option<String>,

    /// If set to `true`, indicates that there is no change to the list of active
    /// breakpoints and the server-selected timeout has expired.
    pub wait_expired: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListActiveBreakpointsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [breakpoints][crate::model::ListActiveBreakpointsResponse::breakpoints].
    pub fn set_breakpoints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Breakpoint>,
    {
        self.breakpoints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_wait_token][crate::model::ListActiveBreakpointsResponse::next_wait_token].
    pub fn set_next_wait_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_wait_token = Some(v.into());
        self
    }

    /// Sets the value of [wait_expired][crate::model::ListActiveBreakpointsResponse::wait_expired].
    pub fn set_wait_expired<T: Into<bool>>(mut self, v: T) -> Self {
        self.wait_expired = Some(v.into());
        self
    }
}

/// Response for updating an active breakpoint. The message is defined to allow
/// future extensions.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateActiveBreakpointResponse {
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UpdateActiveBreakpointResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Used when setting breakpoint canary for this debuggee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct CanaryMode(std::borrow::Cow<'static, str>);

impl CanaryMode {
    /// Creates a new CanaryMode instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [CanaryMode](CanaryMode)
pub mod canary_mode {
    use super::CanaryMode;

    /// CANARY_MODE_UNSPECIFIED is equivalent to CANARY_MODE_ALWAYS_DISABLED so that
    /// if the debuggee is not configured to use the canary feature, the feature
    /// will be disabled.
    pub const CANARY_MODE_UNSPECIFIED: CanaryMode = CanaryMode::new("CANARY_MODE_UNSPECIFIED");

    /// Always enable breakpoint canary regardless of the value of breakpoint's
    /// canary option.
    pub const CANARY_MODE_ALWAYS_ENABLED: CanaryMode = CanaryMode::new("CANARY_MODE_ALWAYS_ENABLED");

    /// Always disable breakpoint canary regardless of the value of breakpoint's
    /// canary option.
    pub const CANARY_MODE_ALWAYS_DISABLED: CanaryMode = CanaryMode::new("CANARY_MODE_ALWAYS_DISABLED");

    /// Depends on the breakpoint's canary option. Enable canary by default if the
    /// breakpoint's canary option is not specified.
    pub const CANARY_MODE_DEFAULT_ENABLED: CanaryMode = CanaryMode::new("CANARY_MODE_DEFAULT_ENABLED");

    /// Depends on the breakpoint's canary option. Disable canary by default if the
    /// breakpoint's canary option is not specified.
    pub const CANARY_MODE_DEFAULT_DISABLED: CanaryMode = CanaryMode::new("CANARY_MODE_DEFAULT_DISABLED");
}

impl std::convert::From<&str> for CanaryMode {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for CanaryMode {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Enumerates references to which the message applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct Reference(std::borrow::Cow<'static, str>);

impl Reference {
    /// Creates a new Reference instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [Reference](Reference)
pub mod reference {
    use super::Reference;

    /// Status doesn't refer to any particular input.
    pub const UNSPECIFIED: Reference = Reference::new("UNSPECIFIED");

    /// Status applies to the breakpoint and is related to its location.
    pub const BREAKPOINT_SOURCE_LOCATION: Reference = Reference::new("BREAKPOINT_SOURCE_LOCATION");

    /// Status applies to the breakpoint and is related to its condition.
    pub const BREAKPOINT_CONDITION: Reference = Reference::new("BREAKPOINT_CONDITION");

    /// Status applies to the breakpoint and is related to its expressions.
    pub const BREAKPOINT_EXPRESSION: Reference = Reference::new("BREAKPOINT_EXPRESSION");

    /// Status applies to the breakpoint and is related to its age.
    pub const BREAKPOINT_AGE: Reference = Reference::new("BREAKPOINT_AGE");

    /// Status applies to the breakpoint when the breakpoint failed to exit the
    /// canary state.
    pub const BREAKPOINT_CANARY_FAILED: Reference = Reference::new("BREAKPOINT_CANARY_FAILED");

    /// Status applies to the entire variable.
    pub const VARIABLE_NAME: Reference = Reference::new("VARIABLE_NAME");

    /// Status applies to variable value (variable name is valid).
    pub const VARIABLE_VALUE: Reference = Reference::new("VARIABLE_VALUE");
}

impl std::convert::From<&str> for Reference {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for Reference {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Actions that can be taken when a breakpoint hits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct BreakpointAction(std::borrow::Cow<'static, str>);

impl BreakpointAction {
    /// Creates a new BreakpointAction instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [BreakpointAction](BreakpointAction)
pub mod breakpoint_action {
    use super::BreakpointAction;

    /// Capture stack frame and variables and update the breakpoint. The data is
    /// only captured once. After that the breakpoint is set in a final state.
    pub const CAPTURE: BreakpointAction = BreakpointAction::new("CAPTURE");

    /// Log each breakpoint hit. The breakpoint remains active until deleted or
    /// expired.
    pub const LOG: BreakpointAction = BreakpointAction::new("LOG");
}

impl std::convert::From<&str> for BreakpointAction {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for BreakpointAction {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Log severity levels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct LogLevel(std::borrow::Cow<'static, str>);

impl LogLevel {
    /// Creates a new LogLevel instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [LogLevel](LogLevel)
pub mod log_level {
    use super::LogLevel;

    /// Information log message.
    pub const INFO: LogLevel = LogLevel::new("INFO");

    /// Warning log message.
    pub const WARNING: LogLevel = LogLevel::new("WARNING");

    /// Error log message.
    pub const ERROR: LogLevel = LogLevel::new("ERROR");
}

impl std::convert::From<&str> for LogLevel {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for LogLevel {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Possible states for the breakpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct BreakpointState(std::borrow::Cow<'static, str>);

impl BreakpointState {
    /// Creates a new BreakpointState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [BreakpointState](BreakpointState)
pub mod breakpoint_state {
    use super::BreakpointState;

    /// Breakpoint state UNSPECIFIED.
    pub const STATE_UNSPECIFIED: BreakpointState = BreakpointState::new("STATE_UNSPECIFIED");

    /// Enabling canary but no agents are available.
    pub const STATE_CANARY_PENDING_AGENTS: BreakpointState = BreakpointState::new("STATE_CANARY_PENDING_AGENTS");

    /// Enabling canary and successfully assigning canary agents.
    pub const STATE_CANARY_ACTIVE: BreakpointState = BreakpointState::new("STATE_CANARY_ACTIVE");

    /// Breakpoint rolling out to all agents.
    pub const STATE_ROLLING_TO_ALL: BreakpointState = BreakpointState::new("STATE_ROLLING_TO_ALL");

    /// Breakpoint is hit/complete/failed.
    pub const STATE_IS_FINAL: BreakpointState = BreakpointState::new("STATE_IS_FINAL");
}

impl std::convert::From<&str> for BreakpointState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for BreakpointState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The canary option set by the user upon setting breakpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct CanaryOption(std::borrow::Cow<'static, str>);

impl CanaryOption {
    /// Creates a new CanaryOption instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [CanaryOption](CanaryOption)
pub mod canary_option {
    use super::CanaryOption;

    /// Depends on the canary_mode of the debuggee.
    pub const CANARY_OPTION_UNSPECIFIED: CanaryOption = CanaryOption::new("CANARY_OPTION_UNSPECIFIED");

    /// Enable the canary for this breakpoint if the canary_mode of the debuggee is
    /// not CANARY_MODE_ALWAYS_ENABLED or CANARY_MODE_ALWAYS_DISABLED.
    pub const CANARY_OPTION_TRY_ENABLE: CanaryOption = CanaryOption::new("CANARY_OPTION_TRY_ENABLE");

    /// Disable the canary for this breakpoint if the canary_mode of the debuggee is
    /// not CANARY_MODE_ALWAYS_ENABLED or CANARY_MODE_ALWAYS_DISABLED.
    pub const CANARY_OPTION_TRY_DISABLE: CanaryOption = CanaryOption::new("CANARY_OPTION_TRY_DISABLE");
}

impl std::convert::From<&str> for CanaryOption {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for CanaryOption {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [CloudDebugger::list_debuggees][crate::client::CloudDebugger::list_debuggees].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListDebuggeesRequest {
    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,

    /// When set to `true`, the result includes all debuggees. Otherwise, the result
    /// includes only debuggees that are active.
    pub include_inactive: Option<bool>,

    /// Required. Project number of a Google Cloud project whose debuggees to list.
    pub project: Option<String>,
}

impl ListDebuggeesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [client_version][crate::model::ListDebuggeesRequest::client_version].
    pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
        self.client_version = Some(v.into());
        self
    }

    /// Sets the value of [include_inactive][crate::model::ListDebuggeesRequest::include_inactive].
    pub fn set_include_inactive<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_inactive = Some(v.into());
        self
    }

    /// Sets the value of [project][crate::model::ListDebuggeesRequest::project].
    pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
        self.project = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::delete_breakpoint][crate::client::CloudDebugger::delete_breakpoint].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBreakpointRequest {
    /// The `debuggeeId` path parameter.
    pub debuggee_id: Option<String>,

    /// The `breakpointId` path parameter.
    pub breakpoint_id: Option<String>,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,
}

impl DeleteBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::DeleteBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
        self.debuggee_id = Some(v.into());
        self
    }

    /// Sets the value of [breakpoint_id][crate::model::DeleteBreakpointRequest::breakpoint_id].
    pub fn set_breakpoint_id<T: Into<String>>(mut self, v: T) -> Self {
        self.breakpoint_id = Some(v.into());
        self
    }

    /// Sets the value of [client_version][crate::model::DeleteBreakpointRequest::client_version].
    pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
        self.client_version = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::get_breakpoint][crate::client::CloudDebugger::get_breakpoint].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBreakpointRequest {
    /// The `debuggeeId` path parameter.
    pub debuggee_id: Option<String>,

    /// The `breakpointId` path parameter.
    pub breakpoint_id: Option<String>,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,
}

impl GetBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::GetBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
        self.debuggee_id = Some(v.into());
        self
    }

    /// Sets the value of [breakpoint_id][crate::model::GetBreakpointRequest::breakpoint_id].
    pub fn set_breakpoint_id<T: Into<String>>(mut self, v: T) -> Self {
        self.breakpoint_id = Some(v.into());
        self
    }

    /// Sets the value of [client_version][crate::model::GetBreakpointRequest::client_version].
    pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
        self.client_version = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::list_breakpoints][crate::client::CloudDebugger::list_breakpoints].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListBreakpointsRequest {
    /// The `debuggeeId` path parameter.
    pub debuggee_id: Option<String>,

    /// Only breakpoints with the specified action will pass the filter.
    pub action: Option<crate::model::BreakpointActionValue>,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,

    /// When set to `true`, the response includes the list of breakpoints set by any
    /// user. Otherwise, it includes only breakpoints set by the caller.
    pub include_all_users: Option<bool>,

    /// When set to `true`, the response includes active and inactive breakpoints.
    /// Otherwise, it includes only active breakpoints.
    pub include_inactive: Option<bool>,

    /// This field is deprecated. The following fields are always stripped out of
    /// the result: `stack_frames`, `evaluated_expressions` and `variable_table`.
    pub strip_results: Option<bool>,

    /// A wait token that, if specified, blocks the call until the breakpoints list
    /// has changed, or a server selected timeout has expired.
    pub wait_token: Option<String>,
}

impl ListBreakpointsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::ListBreakpointsRequest::debuggee_id].
    pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
        self.debuggee_id = Some(v.into());
        self
    }

    /// Sets the value of [action][crate::model::ListBreakpointsRequest::action].
    pub fn set_action<T: Into<crate::model::BreakpointActionValue>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets the value of [client_version][crate::model::ListBreakpointsRequest::client_version].
    pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
        self.client_version = Some(v.into());
        self
    }

    /// Sets the value of [include_all_users][crate::model::ListBreakpointsRequest::include_all_users].
    pub fn set_include_all_users<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_all_users = Some(v.into());
        self
    }

    /// Sets the value of [include_inactive][crate::model::ListBreakpointsRequest::include_inactive].
    pub fn set_include_inactive<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_inactive = Some(v.into());
        self
    }

    /// Sets the value of [strip_results][crate::model::ListBreakpointsRequest::strip_results].
    pub fn set_strip_results<T: Into<bool>>(mut self, v: T) -> Self {
        self.strip_results = Some(v.into());
        self
    }

    /// Sets the value of [wait_token][crate::model::ListBreakpointsRequest::wait_token].
    pub fn set_wait_token<T: Into<String>>(mut self, v: T) -> Self {
        self.wait_token = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::set_breakpoint][crate::client::CloudDebugger::set_breakpoint].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SetBreakpointRequest {
    /// The `debuggeeId` path parameter.
    pub debuggee_id: Option<String>,

    /// The canary option set by the user upon setting breakpoint.
    pub canary_option: Option<crate::model::CanaryOption>,

    /// Required. The client version making the call. Schema: `domain/type/version`
    /// (e.g., `google.com/intellij/v1`).
    pub client_version: Option<String>,

    /// The request body.
    pub breakpoint: Option<crate::model::Breakpoint>,
}

impl SetBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::SetBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
        self.debuggee_id = Some(v.into());
        self
    }

    /// Sets the value of [canary_option][crate::model::SetBreakpointRequest::canary_option].
    pub fn set_canary_option<T: Into<crate::model::CanaryOption>>(mut self, v: T) -> Self {
        self.canary_option = Some(v.into());
        self
    }

    /// Sets the value of [client_version][crate::model::SetBreakpointRequest::client_version].
    pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
        self.client_version = Some(v.into());
        self
    }

    /// Sets the value of [breakpoint][crate::model::SetBreakpointRequest::breakpoint].
    pub fn set_breakpoint<T: Into<crate::model::Breakpoint>>(mut self, v: T) -> Self {
        self.breakpoint = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::register_debuggee][crate::client::CloudDebugger::register_debuggee].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegisterDebuggeeRequest {
    /// Required. Debuggee information to register. The fields `project`,
    /// `uniquifier`, `description` and `agent_version` of the debuggee must be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debuggee: Option<crate::model::Debuggee>,
}

impl RegisterDebuggeeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee][crate::model::RegisterDebuggeeRequest::debuggee].
    pub fn set_debuggee<T: Into<crate::model::Debuggee>>(mut self, v: T) -> Self {
        self.debuggee = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::list_active_breakpoints][crate::client::CloudDebugger::list_active_breakpoints].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListActiveBreakpointsRequest {
    /// The `debuggeeId` path parameter.
    pub debuggee_id: Option<String>,

    /// Identifies the agent. This is the ID returned in the RegisterDebuggee
    /// response.
    pub agent_id: Option<String>,

    /// If set to `true` (recommended), returns `google.rpc.Code.OK` status and sets
    /// the `wait_expired` response field to `true` when the server-selected timeout
    /// has expired.
    pub success_on_timeout: Option<bool>,

    /// A token that, if specified, blocks the method call until the list of active
    /// breakpoints has changed, or a server-selected timeout has expired.
    pub wait_token: Option<String>,
}

impl ListActiveBreakpointsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::ListActiveBreakpointsRequest::debuggee_id].
    pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
        self.debuggee_id = Some(v.into());
        self
    }

    /// Sets the value of [agent_id][crate::model::ListActiveBreakpointsRequest::agent_id].
    pub fn set_agent_id<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_id = Some(v.into());
        self
    }

    /// Sets the value of [success_on_timeout][crate::model::ListActiveBreakpointsRequest::success_on_timeout].
    pub fn set_success_on_timeout<T: Into<bool>>(mut self, v: T) -> Self {
        self.success_on_timeout = Some(v.into());
        self
    }

    /// Sets the value of [wait_token][crate::model::ListActiveBreakpointsRequest::wait_token].
    pub fn set_wait_token<T: Into<String>>(mut self, v: T) -> Self {
        self.wait_token = Some(v.into());
        self
    }
}

/// The request for [CloudDebugger::update_active_breakpoint][crate::client::CloudDebugger::update_active_breakpoint].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateActiveBreakpointRequest {
    /// The `debuggeeId` path parameter.
    #[serde(skip)]
    pub debuggee_id: Option<String>,

    /// The `id` path parameter.
    #[serde(skip)]
    pub id: Option<String>,

    /// Required. Updated breakpoint information. The field `id` must be set. The
    /// agent must echo all Breakpoint specification fields in the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<crate::model::Breakpoint>,
}

impl UpdateActiveBreakpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [debuggee_id][crate::model::UpdateActiveBreakpointRequest::debuggee_id].
    pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
        self.debuggee_id = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::UpdateActiveBreakpointRequest::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [breakpoint][crate::model::UpdateActiveBreakpointRequest::breakpoint].
    pub fn set_breakpoint<T: Into<crate::model::Breakpoint>>(mut self, v: T) -> Self {
        self.breakpoint = Some(v.into());
        self
    }
}
