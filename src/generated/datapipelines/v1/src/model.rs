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

/// The main pipeline entity and all the necessary metadata for launching and
/// managing linked jobs.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pipeline {
    /// The pipeline name. For example:
    /// `projects/PROJECT_ID/locations/LOCATION_ID/pipelines/PIPELINE_ID`.
    pub name: Option<String>,

    /// Required. The display name of the pipeline. It can contain only letters
    /// (\[A-Za-z\]), numbers (\[0-9\]), hyphens (-), and underscores (\_).
    pub display_name: Option<String>,

    /// Required. The type of the pipeline. This field affects the scheduling of the
    /// pipeline and the type of metrics to show for the pipeline.
    pub r#type: Option<crate::model::PipelineType>,

    /// Required. The state of the pipeline. When the pipeline is created, the state
    /// is set to 'PIPELINE_STATE_ACTIVE' by default.
    pub state: Option<crate::model::PipelineState>,

    /// Output only. Immutable. The timestamp when the pipeline was initially
    /// created. Set by the Data Pipelines service.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. Immutable. The timestamp when the pipeline was last modified.
    /// Set by the Data Pipelines service.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub last_update_time: Option<time::OffsetDateTime>,

    /// Workload information for creating new jobs.
    pub workload: Option<crate::model::Workload>,

    /// Internal scheduling information for a pipeline. If this information is
    /// provided, periodic jobs will be created per the schedule.
    pub schedule_info: Option<crate::model::ScheduleSpec>,

    /// Output only. Number of jobs.
    pub job_count: Option<i32>,

    /// Optional. A service account email to be used with the Cloud Scheduler job.
    pub scheduler_service_account_email: Option<String>,

    /// Immutable. The sources of the pipeline (for example, Dataplex).
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub pipeline_sources: std::collections::HashMap<String, String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Pipeline {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Pipeline::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::Pipeline::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [type][crate::model::Pipeline::type].
    pub fn set_type<T: Into<crate::model::PipelineType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [state][crate::model::Pipeline::state].
    pub fn set_state<T: Into<crate::model::PipelineState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Pipeline::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [last_update_time][crate::model::Pipeline::last_update_time].
    pub fn set_last_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.last_update_time = Some(v.into());
        self
    }

    /// Sets the value of [workload][crate::model::Pipeline::workload].
    pub fn set_workload<T: Into<crate::model::Workload>>(mut self, v: T) -> Self {
        self.workload = Some(v.into());
        self
    }

    /// Sets the value of [schedule_info][crate::model::Pipeline::schedule_info].
    pub fn set_schedule_info<T: Into<crate::model::ScheduleSpec>>(mut self, v: T) -> Self {
        self.schedule_info = Some(v.into());
        self
    }

    /// Sets the value of [job_count][crate::model::Pipeline::job_count].
    pub fn set_job_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.job_count = Some(v.into());
        self
    }

    /// Sets the value of [scheduler_service_account_email][crate::model::Pipeline::scheduler_service_account_email].
    pub fn set_scheduler_service_account_email<T: Into<String>>(mut self, v: T) -> Self {
        self.scheduler_service_account_email = Some(v.into());
        self
    }

    /// Sets the value of [pipeline_sources][crate::model::Pipeline::pipeline_sources].
    pub fn set_pipeline_sources<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.pipeline_sources = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Workload details for creating the pipeline jobs.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Workload {
    /// Template information and additional parameters needed to launch a Dataflow
    /// job using the standard launch API.
    pub dataflow_launch_template_request: Option<crate::model::LaunchTemplateRequest>,

    /// Template information and additional parameters needed to launch a Dataflow
    /// job using the flex launch API.
    pub dataflow_flex_template_request: Option<crate::model::LaunchFlexTemplateRequest>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Workload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dataflow_launch_template_request][crate::model::Workload::dataflow_launch_template_request].
    pub fn set_dataflow_launch_template_request<T: Into<crate::model::LaunchTemplateRequest>>(mut self, v: T) -> Self {
        self.dataflow_launch_template_request = Some(v.into());
        self
    }

    /// Sets the value of [dataflow_flex_template_request][crate::model::Workload::dataflow_flex_template_request].
    pub fn set_dataflow_flex_template_request<T: Into<crate::model::LaunchFlexTemplateRequest>>(mut self, v: T) -> Self {
        self.dataflow_flex_template_request = Some(v.into());
        self
    }
}

/// Details of the schedule the pipeline runs on.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduleSpec {
    /// Unix-cron format of the schedule. This information is retrieved from the
    /// linked Cloud Scheduler.
    pub schedule: Option<String>,

    /// Timezone ID. This matches the timezone IDs used by the Cloud Scheduler API.
    /// If empty, UTC time is assumed.
    pub time_zone: Option<String>,

    /// Output only. When the next Scheduler job is going to run.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub next_job_time: Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ScheduleSpec {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [schedule][crate::model::ScheduleSpec::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Sets the value of [time_zone][crate::model::ScheduleSpec::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }

    /// Sets the value of [next_job_time][crate::model::ScheduleSpec::next_job_time].
    pub fn set_next_job_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.next_job_time = Some(v.into());
        self
    }
}

/// A request to launch a template.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LaunchTemplateRequest {
    /// Required. The ID of the Cloud Platform project that the job belongs to.
    pub project_id: Option<String>,

    /// A Cloud Storage path to the template from which to create the job. Must be a
    /// valid Cloud Storage URL, beginning with 'gs://'.
    pub gcs_path: Option<String>,

    /// The parameters of the template to launch. This should be part of the body of
    /// the POST request.
    pub launch_parameters: Option<crate::model::LaunchTemplateParameters>,

    /// The regional endpoint to which to direct the request.
    pub location: Option<String>,

    /// If true, the request is validated but not actually executed. Defaults to
    /// false.
    pub validate_only: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LaunchTemplateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::LaunchTemplateRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [gcs_path][crate::model::LaunchTemplateRequest::gcs_path].
    pub fn set_gcs_path<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_path = Some(v.into());
        self
    }

    /// Sets the value of [launch_parameters][crate::model::LaunchTemplateRequest::launch_parameters].
    pub fn set_launch_parameters<T: Into<crate::model::LaunchTemplateParameters>>(mut self, v: T) -> Self {
        self.launch_parameters = Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::LaunchTemplateRequest::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::LaunchTemplateRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }
}

/// Parameters to provide to the template being launched.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LaunchTemplateParameters {
    /// Required. The job name to use for the created job.
    pub job_name: Option<String>,

    /// The runtime parameters to pass to the job.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub parameters: std::collections::HashMap<String, String>,

    /// The runtime environment for the job.
    pub environment: Option<crate::model::RuntimeEnvironment>,

    /// If set, replace the existing pipeline with the name specified by jobName
    /// with this pipeline, preserving state.
    pub update: Option<bool>,

    /// Map of transform name prefixes of the job to be replaced to the
    /// corresponding name prefixes of the new job. Only applicable when updating a
    /// pipeline.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub transform_name_mapping: std::collections::HashMap<String, String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LaunchTemplateParameters {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_name][crate::model::LaunchTemplateParameters::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [parameters][crate::model::LaunchTemplateParameters::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [environment][crate::model::LaunchTemplateParameters::environment].
    pub fn set_environment<T: Into<crate::model::RuntimeEnvironment>>(mut self, v: T) -> Self {
        self.environment = Some(v.into());
        self
    }

    /// Sets the value of [update][crate::model::LaunchTemplateParameters::update].
    pub fn set_update<T: Into<bool>>(mut self, v: T) -> Self {
        self.update = Some(v.into());
        self
    }

    /// Sets the value of [transform_name_mapping][crate::model::LaunchTemplateParameters::transform_name_mapping].
    pub fn set_transform_name_mapping<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.transform_name_mapping = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The environment values to set at runtime.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuntimeEnvironment {
    /// The initial number of Compute Engine instances for the job.
    pub num_workers: Option<i32>,

    /// The maximum number of Compute Engine instances to be made available to your
    /// pipeline during execution, from 1 to 1000.
    pub max_workers: Option<i32>,

    /// The Compute Engine availability zone for launching worker instances to run
    /// your pipeline.
    pub zone: Option<String>,

    /// The email address of the service account to run the job as.
    pub service_account_email: Option<String>,

    /// The Cloud Storage path to use for temporary files. Must be a valid Cloud
    /// Storage URL, beginning with `gs://`.
    pub temp_location: Option<String>,

    /// Whether to bypass the safety checks for the job's temporary directory. Use
    /// with caution.
    pub bypass_temp_dir_validation: Option<bool>,

    /// The machine type to use for the job. Defaults to the value from the template
    /// if not specified.
    pub machine_type: Option<String>,

    /// Additional experiment flags for the job.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_experiments: Vec<String>,

    /// Network to which VMs will be assigned.
    pub network: Option<String>,

    /// Subnetwork to which VMs will be assigned, if desired.
    pub subnetwork: Option<String>,

    /// Additional user labels to be specified for the job.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub additional_user_labels: std::collections::HashMap<String, String>,

    /// Name for the Cloud KMS key for the job.
    pub kms_key_name: Option<String>,

    /// Configuration for VM IPs.
    pub ip_configuration: Option<crate::model::WorkerIpAddressConfiguration>,

    /// The Compute Engine region in which worker processing should occur.
    pub worker_region: Option<String>,

    /// The Compute Engine zone in which worker processing should occur.
    pub worker_zone: Option<String>,

    /// Whether to enable Streaming Engine for the job.
    pub enable_streaming_engine: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RuntimeEnvironment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [num_workers][crate::model::RuntimeEnvironment::num_workers].
    pub fn set_num_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.num_workers = Some(v.into());
        self
    }

    /// Sets the value of [max_workers][crate::model::RuntimeEnvironment::max_workers].
    pub fn set_max_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_workers = Some(v.into());
        self
    }

    /// Sets the value of [zone][crate::model::RuntimeEnvironment::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets the value of [service_account_email][crate::model::RuntimeEnvironment::service_account_email].
    pub fn set_service_account_email<T: Into<String>>(mut self, v: T) -> Self {
        self.service_account_email = Some(v.into());
        self
    }

    /// Sets the value of [temp_location][crate::model::RuntimeEnvironment::temp_location].
    pub fn set_temp_location<T: Into<String>>(mut self, v: T) -> Self {
        self.temp_location = Some(v.into());
        self
    }

    /// Sets the value of [bypass_temp_dir_validation][crate::model::RuntimeEnvironment::bypass_temp_dir_validation].
    pub fn set_bypass_temp_dir_validation<T: Into<bool>>(mut self, v: T) -> Self {
        self.bypass_temp_dir_validation = Some(v.into());
        self
    }

    /// Sets the value of [machine_type][crate::model::RuntimeEnvironment::machine_type].
    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = Some(v.into());
        self
    }

    /// Sets the value of [additional_experiments][crate::model::RuntimeEnvironment::additional_experiments].
    pub fn set_additional_experiments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.additional_experiments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [network][crate::model::RuntimeEnvironment::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    /// Sets the value of [subnetwork][crate::model::RuntimeEnvironment::subnetwork].
    pub fn set_subnetwork<T: Into<String>>(mut self, v: T) -> Self {
        self.subnetwork = Some(v.into());
        self
    }

    /// Sets the value of [additional_user_labels][crate::model::RuntimeEnvironment::additional_user_labels].
    pub fn set_additional_user_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_user_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kms_key_name][crate::model::RuntimeEnvironment::kms_key_name].
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_name = Some(v.into());
        self
    }

    /// Sets the value of [ip_configuration][crate::model::RuntimeEnvironment::ip_configuration].
    pub fn set_ip_configuration<T: Into<crate::model::WorkerIpAddressConfiguration>>(mut self, v: T) -> Self {
        self.ip_configuration = Some(v.into());
        self
    }

    /// Sets the value of [worker_region][crate::model::RuntimeEnvironment::worker_region].
    pub fn set_worker_region<T: Into<String>>(mut self, v: T) -> Self {
        self.worker_region = Some(v.into());
        self
    }

    /// Sets the value of [worker_zone][crate::model::RuntimeEnvironment::worker_zone].
    pub fn set_worker_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.worker_zone = Some(v.into());
        self
    }

    /// Sets the value of [enable_streaming_engine][crate::model::RuntimeEnvironment::enable_streaming_engine].
    pub fn set_enable_streaming_engine<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_streaming_engine = Some(v.into());
        self
    }
}

/// A request to launch a Dataflow job from a Flex Template.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LaunchFlexTemplateRequest {
    /// Required. The ID of the Cloud Platform project that the job belongs to.
    pub project_id: Option<String>,

    /// Required. Parameter to launch a job from a Flex Template.
    pub launch_parameter: Option<crate::model::LaunchFlexTemplateParameter>,

    /// Required. The regional endpoint to which to direct the request. For example,
    /// `us-central1`, `us-west1`.
    pub location: Option<String>,

    /// If true, the request is validated but not actually executed. Defaults to
    /// false.
    pub validate_only: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LaunchFlexTemplateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::LaunchFlexTemplateRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets the value of [launch_parameter][crate::model::LaunchFlexTemplateRequest::launch_parameter].
    pub fn set_launch_parameter<T: Into<crate::model::LaunchFlexTemplateParameter>>(mut self, v: T) -> Self {
        self.launch_parameter = Some(v.into());
        self
    }

    /// Sets the value of [location][crate::model::LaunchFlexTemplateRequest::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::LaunchFlexTemplateRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }
}

/// Launch Flex Template parameter.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LaunchFlexTemplateParameter {
    /// Required. The job name to use for the created job.
    pub job_name: Option<String>,

    /// Cloud Storage path to a file with a JSON-serialized ContainerSpec as
    /// content.
    pub container_spec_gcs_path: Option<String>,

    /// The runtime environment for the Flex Template job.
    pub environment: Option<crate::model::FlexTemplateRuntimeEnvironment>,

    /// The parameters for the Flex Template.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub parameters: std::collections::HashMap<String, String>,

    /// Launch options for this Flex Template job.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub launch_options: std::collections::HashMap<String, String>,

    /// Use this to pass transform name mappings for streaming update jobs.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub transform_name_mappings: std::collections::HashMap<String, String>,

    /// Set this to true if you are sending a request to update a running streaming
    /// job.
    pub update: Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LaunchFlexTemplateParameter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job_name][crate::model::LaunchFlexTemplateParameter::job_name].
    pub fn set_job_name<T: Into<String>>(mut self, v: T) -> Self {
        self.job_name = Some(v.into());
        self
    }

    /// Sets the value of [container_spec_gcs_path][crate::model::LaunchFlexTemplateParameter::container_spec_gcs_path].
    pub fn set_container_spec_gcs_path<T: Into<String>>(mut self, v: T) -> Self {
        self.container_spec_gcs_path = Some(v.into());
        self
    }

    /// Sets the value of [environment][crate::model::LaunchFlexTemplateParameter::environment].
    pub fn set_environment<T: Into<crate::model::FlexTemplateRuntimeEnvironment>>(mut self, v: T) -> Self {
        self.environment = Some(v.into());
        self
    }

    /// Sets the value of [parameters][crate::model::LaunchFlexTemplateParameter::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [launch_options][crate::model::LaunchFlexTemplateParameter::launch_options].
    pub fn set_launch_options<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.launch_options = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [transform_name_mappings][crate::model::LaunchFlexTemplateParameter::transform_name_mappings].
    pub fn set_transform_name_mappings<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.transform_name_mappings = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [update][crate::model::LaunchFlexTemplateParameter::update].
    pub fn set_update<T: Into<bool>>(mut self, v: T) -> Self {
        self.update = Some(v.into());
        self
    }
}

/// The environment values to be set at runtime for a Flex Template.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FlexTemplateRuntimeEnvironment {
    /// The initial number of Compute Engine instances for the job.
    pub num_workers: Option<i32>,

    /// The maximum number of Compute Engine instances to be made available to your
    /// pipeline during execution, from 1 to 1000.
    pub max_workers: Option<i32>,

    /// The Compute Engine availability zone for launching worker instances to run
    /// your pipeline.
    pub zone: Option<String>,

    /// The email address of the service account to run the job as.
    pub service_account_email: Option<String>,

    /// The Cloud Storage path to use for temporary files. Must be a valid Cloud
    /// Storage URL, beginning with `gs://`.
    pub temp_location: Option<String>,

    /// The machine type to use for the job. Defaults to the value from the template
    /// if not specified.
    pub machine_type: Option<String>,

    /// Additional experiment flags for the job.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_experiments: Vec<String>,

    /// Network to which VMs will be assigned.
    pub network: Option<String>,

    /// Subnetwork to which VMs will be assigned, if desired.
    pub subnetwork: Option<String>,

    /// Additional user labels to be specified for the job.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub additional_user_labels: std::collections::HashMap<String, String>,

    /// Name for the Cloud KMS key for the job.
    pub kms_key_name: Option<String>,

    /// Configuration for VM IPs.
    pub ip_configuration: Option<crate::model::WorkerIpAddressConfiguration>,

    /// The Compute Engine region in which worker processing should occur.
    pub worker_region: Option<String>,

    /// The Compute Engine zone in which worker processing should occur.
    pub worker_zone: Option<String>,

    /// Whether to enable Streaming Engine for the job.
    pub enable_streaming_engine: Option<bool>,

    /// Set FlexRS goal for the job.
    pub flexrs_goal: Option<crate::model::FlexResourceSchedulingGoal>,

    /// The Cloud Storage path for staging local files. Must be a valid Cloud
    /// Storage URL, beginning with `gs://`.
    pub staging_location: Option<String>,

    /// Docker registry location of container image to use for the worker harness.
    pub sdk_container_image: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FlexTemplateRuntimeEnvironment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [num_workers][crate::model::FlexTemplateRuntimeEnvironment::num_workers].
    pub fn set_num_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.num_workers = Some(v.into());
        self
    }

    /// Sets the value of [max_workers][crate::model::FlexTemplateRuntimeEnvironment::max_workers].
    pub fn set_max_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_workers = Some(v.into());
        self
    }

    /// Sets the value of [zone][crate::model::FlexTemplateRuntimeEnvironment::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets the value of [service_account_email][crate::model::FlexTemplateRuntimeEnvironment::service_account_email].
    pub fn set_service_account_email<T: Into<String>>(mut self, v: T) -> Self {
        self.service_account_email = Some(v.into());
        self
    }

    /// Sets the value of [temp_location][crate::model::FlexTemplateRuntimeEnvironment::temp_location].
    pub fn set_temp_location<T: Into<String>>(mut self, v: T) -> Self {
        self.temp_location = Some(v.into());
        self
    }

    /// Sets the value of [machine_type][crate::model::FlexTemplateRuntimeEnvironment::machine_type].
    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = Some(v.into());
        self
    }

    /// Sets the value of [additional_experiments][crate::model::FlexTemplateRuntimeEnvironment::additional_experiments].
    pub fn set_additional_experiments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.additional_experiments = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [network][crate::model::FlexTemplateRuntimeEnvironment::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    /// Sets the value of [subnetwork][crate::model::FlexTemplateRuntimeEnvironment::subnetwork].
    pub fn set_subnetwork<T: Into<String>>(mut self, v: T) -> Self {
        self.subnetwork = Some(v.into());
        self
    }

    /// Sets the value of [additional_user_labels][crate::model::FlexTemplateRuntimeEnvironment::additional_user_labels].
    pub fn set_additional_user_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.additional_user_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [kms_key_name][crate::model::FlexTemplateRuntimeEnvironment::kms_key_name].
    pub fn set_kms_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_name = Some(v.into());
        self
    }

    /// Sets the value of [ip_configuration][crate::model::FlexTemplateRuntimeEnvironment::ip_configuration].
    pub fn set_ip_configuration<T: Into<crate::model::WorkerIpAddressConfiguration>>(mut self, v: T) -> Self {
        self.ip_configuration = Some(v.into());
        self
    }

    /// Sets the value of [worker_region][crate::model::FlexTemplateRuntimeEnvironment::worker_region].
    pub fn set_worker_region<T: Into<String>>(mut self, v: T) -> Self {
        self.worker_region = Some(v.into());
        self
    }

    /// Sets the value of [worker_zone][crate::model::FlexTemplateRuntimeEnvironment::worker_zone].
    pub fn set_worker_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.worker_zone = Some(v.into());
        self
    }

    /// Sets the value of [enable_streaming_engine][crate::model::FlexTemplateRuntimeEnvironment::enable_streaming_engine].
    pub fn set_enable_streaming_engine<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_streaming_engine = Some(v.into());
        self
    }

    /// Sets the value of [flexrs_goal][crate::model::FlexTemplateRuntimeEnvironment::flexrs_goal].
    pub fn set_flexrs_goal<T: Into<crate::model::FlexResourceSchedulingGoal>>(mut self, v: T) -> Self {
        self.flexrs_goal = Some(v.into());
        self
    }

    /// Sets the value of [staging_location][crate::model::FlexTemplateRuntimeEnvironment::staging_location].
    pub fn set_staging_location<T: Into<String>>(mut self, v: T) -> Self {
        self.staging_location = Some(v.into());
        self
    }

    /// Sets the value of [sdk_container_image][crate::model::FlexTemplateRuntimeEnvironment::sdk_container_image].
    pub fn set_sdk_container_image<T: Into<String>>(mut self, v: T) -> Self {
        self.sdk_container_image = Some(v.into());
        self
    }
}

/// Definition of the job information maintained by the pipeline. Fields in this
/// entity are retrieved from the executor API (e.g. Dataflow API).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Job {
    /// Required. The fully qualified resource name for the job.
    pub name: Option<String>,

    /// Output only. The internal ID for the job.
    pub id: Option<String>,

    /// Output only. The time of job creation.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. The time of job termination. This is absent if the job is still
    /// running.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub end_time: Option<time::OffsetDateTime>,

    /// The current state of the job.
    pub state: Option<crate::model::JobState>,

    /// Status capturing any error code or message related to job creation or
    /// execution.
    pub status: Option<rpc::model::Status>,

    /// All the details that are specific to a Dataflow job.
    pub dataflow_job_details: Option<crate::model::DataflowJobDetails>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Job {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Job::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [id][crate::model::Job::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Job::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][crate::model::Job::end_time].
    pub fn set_end_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [state][crate::model::Job::state].
    pub fn set_state<T: Into<crate::model::JobState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [status][crate::model::Job::status].
    pub fn set_status<T: Into<rpc::model::Status>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [dataflow_job_details][crate::model::Job::dataflow_job_details].
    pub fn set_dataflow_job_details<T: Into<crate::model::DataflowJobDetails>>(mut self, v: T) -> Self {
        self.dataflow_job_details = Some(v.into());
        self
    }
}

/// Pipeline job details specific to the Dataflow API.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DataflowJobDetails {
    /// Output only. The current number of workers used to run the jobs. Only set to
    /// a value if the job is still running.
    pub current_workers: Option<i32>,

    /// Cached version of all the metrics of interest for the job. This value gets
    /// stored here when the job is terminated.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub resource_info: std::collections::HashMap<String, f64>,

    /// Output only. The SDK version used to run the job.
    pub sdk_version: Option<crate::model::SdkVersion>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DataflowJobDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [current_workers][crate::model::DataflowJobDetails::current_workers].
    pub fn set_current_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.current_workers = Some(v.into());
        self
    }

    /// Sets the value of [resource_info][crate::model::DataflowJobDetails::resource_info].
    pub fn set_resource_info<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<f64>,
    {
        self.resource_info = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [sdk_version][crate::model::DataflowJobDetails::sdk_version].
    pub fn set_sdk_version<T: Into<crate::model::SdkVersion>>(mut self, v: T) -> Self {
        self.sdk_version = Some(v.into());
        self
    }
}

/// The version of the SDK used to run the job.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SdkVersion {
    /// The version of the SDK used to run the job.
    pub version: Option<String>,

    /// A readable string describing the version of the SDK.
    pub version_display_name: Option<String>,

    /// The support status for this SDK version.
    pub sdk_support_status: Option<crate::model::SdkSupportStatus>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SdkVersion {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [version][crate::model::SdkVersion::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [version_display_name][crate::model::SdkVersion::version_display_name].
    pub fn set_version_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.version_display_name = Some(v.into());
        self
    }

    /// Sets the value of [sdk_support_status][crate::model::SdkVersion::sdk_support_status].
    pub fn set_sdk_support_status<T: Into<crate::model::SdkSupportStatus>>(mut self, v: T) -> Self {
        self.sdk_support_status = Some(v.into());
        self
    }
}

/// Response message for ListPipelines.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListPipelinesResponse {
    /// Results that matched the filter criteria and were accessible to the caller.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pipelines: Vec<crate::model::Pipeline>,

    /// A token, which can be sent as `page_token` to retrieve the next page. If
    /// this field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListPipelinesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pipelines][crate::model::ListPipelinesResponse::pipelines].
    pub fn set_pipelines<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Pipeline>,
    {
        self.pipelines = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListPipelinesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// Response message for ListJobs
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListJobsResponse {
    /// Results that were accessible to the caller. Results are always in descending
    /// order of job creation date.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jobs: Vec<crate::model::Job>,

    /// A token, which can be sent as `page_token` to retrieve the next page. If
    /// this field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListJobsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [jobs][crate::model::ListJobsResponse::jobs].
    pub fn set_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Job>,
    {
        self.jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListJobsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }
}

/// Response message for RunPipeline
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunPipelineResponse {
    /// Job that was created as part of RunPipeline operation.
    pub job: Option<crate::model::Job>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RunPipelineResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [job][crate::model::RunPipelineResponse::job].
    pub fn set_job<T: Into<crate::model::Job>>(mut self, v: T) -> Self {
        self.job = Some(v.into());
        self
    }
}

/// The type of a pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct PipelineType(std::borrow::Cow<'static, str>);

impl PipelineType {
    /// Creates a new PipelineType instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [PipelineType](PipelineType)
pub mod pipeline_type {
    use super::PipelineType;

    /// The pipeline type isn't specified.
    pub const PIPELINE_TYPE_UNSPECIFIED: PipelineType = PipelineType::new("PIPELINE_TYPE_UNSPECIFIED");

    /// A batch pipeline. It runs jobs on a specific schedule, and each job will
    /// automatically terminate once execution is finished.
    pub const PIPELINE_TYPE_BATCH: PipelineType = PipelineType::new("PIPELINE_TYPE_BATCH");

    /// A streaming pipeline. The underlying job is continuously running until it is
    /// manually terminated by the user.
    pub const PIPELINE_TYPE_STREAMING: PipelineType = PipelineType::new("PIPELINE_TYPE_STREAMING");
}

impl std::convert::From<&str> for PipelineType {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for PipelineType {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The current state of a pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct PipelineState(std::borrow::Cow<'static, str>);

impl PipelineState {
    /// Creates a new PipelineState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [PipelineState](PipelineState)
pub mod pipeline_state {
    use super::PipelineState;

    /// The pipeline state isn't specified.
    pub const STATE_UNSPECIFIED: PipelineState = PipelineState::new("STATE_UNSPECIFIED");

    /// The pipeline is getting started or resumed. When finished, the pipeline
    /// state will be 'PIPELINE_STATE_ACTIVE'.
    pub const STATE_RESUMING: PipelineState = PipelineState::new("STATE_RESUMING");

    /// The pipeline is actively running.
    pub const STATE_ACTIVE: PipelineState = PipelineState::new("STATE_ACTIVE");

    /// The pipeline is in the process of stopping. When finished, the pipeline
    /// state will be 'PIPELINE_STATE_ARCHIVED'.
    pub const STATE_STOPPING: PipelineState = PipelineState::new("STATE_STOPPING");

    /// The pipeline has been stopped. This is a terminal state and cannot be
    /// undone.
    pub const STATE_ARCHIVED: PipelineState = PipelineState::new("STATE_ARCHIVED");

    /// The pipeline is paused. This is a non-terminal state.
    pub const STATE_PAUSED: PipelineState = PipelineState::new("STATE_PAUSED");
}

impl std::convert::From<&str> for PipelineState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for PipelineState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The current state of a job.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct JobState(std::borrow::Cow<'static, str>);

impl JobState {
    /// Creates a new JobState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [JobState](JobState)
pub mod job_state {
    use super::JobState;

    /// The job state isn't specified.
    pub const STATE_UNSPECIFIED: JobState = JobState::new("STATE_UNSPECIFIED");

    /// The job is waiting to start execution.
    pub const STATE_PENDING: JobState = JobState::new("STATE_PENDING");

    /// The job is executing.
    pub const STATE_RUNNING: JobState = JobState::new("STATE_RUNNING");

    /// The job has finished execution successfully.
    pub const STATE_DONE: JobState = JobState::new("STATE_DONE");

    /// The job has finished execution with a failure.
    pub const STATE_FAILED: JobState = JobState::new("STATE_FAILED");

    /// The job has been terminated upon user request.
    pub const STATE_CANCELLED: JobState = JobState::new("STATE_CANCELLED");
}

impl std::convert::From<&str> for JobState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for JobState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Specifies how IP addresses should be allocated to the worker machines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct WorkerIpAddressConfiguration(std::borrow::Cow<'static, str>);

impl WorkerIpAddressConfiguration {
    /// Creates a new WorkerIpAddressConfiguration instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [WorkerIpAddressConfiguration](WorkerIpAddressConfiguration)
pub mod worker_ip_address_configuration {
    use super::WorkerIpAddressConfiguration;

    /// The configuration is unknown, or unspecified.
    pub const WORKER_IP_UNSPECIFIED: WorkerIpAddressConfiguration = WorkerIpAddressConfiguration::new("WORKER_IP_UNSPECIFIED");

    /// Workers should have public IP addresses.
    pub const WORKER_IP_PUBLIC: WorkerIpAddressConfiguration = WorkerIpAddressConfiguration::new("WORKER_IP_PUBLIC");

    /// Workers should have private IP addresses.
    pub const WORKER_IP_PRIVATE: WorkerIpAddressConfiguration = WorkerIpAddressConfiguration::new("WORKER_IP_PRIVATE");
}

impl std::convert::From<&str> for WorkerIpAddressConfiguration {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for WorkerIpAddressConfiguration {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Specifies the resource to optimize for in Flexible Resource Scheduling.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct FlexResourceSchedulingGoal(std::borrow::Cow<'static, str>);

impl FlexResourceSchedulingGoal {
    /// Creates a new FlexResourceSchedulingGoal instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [FlexResourceSchedulingGoal](FlexResourceSchedulingGoal)
pub mod flex_resource_scheduling_goal {
    use super::FlexResourceSchedulingGoal;

    /// Run in the default mode.
    pub const FLEXRS_UNSPECIFIED: FlexResourceSchedulingGoal = FlexResourceSchedulingGoal::new("FLEXRS_UNSPECIFIED");

    /// Optimize for lower execution time.
    pub const FLEXRS_SPEED_OPTIMIZED: FlexResourceSchedulingGoal = FlexResourceSchedulingGoal::new("FLEXRS_SPEED_OPTIMIZED");

    /// Optimize for lower cost.
    pub const FLEXRS_COST_OPTIMIZED: FlexResourceSchedulingGoal = FlexResourceSchedulingGoal::new("FLEXRS_COST_OPTIMIZED");
}

impl std::convert::From<&str> for FlexResourceSchedulingGoal {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for FlexResourceSchedulingGoal {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The support status of an SDK version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct SdkSupportStatus(std::borrow::Cow<'static, str>);

impl SdkSupportStatus {
    /// Creates a new SdkSupportStatus instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [SdkSupportStatus](SdkSupportStatus)
pub mod sdk_support_status {
    use super::SdkSupportStatus;

    /// Dataflow is unaware of this version.
    pub const UNKNOWN: SdkSupportStatus = SdkSupportStatus::new("UNKNOWN");

    /// This is a known version of an SDK, and is supported.
    pub const SUPPORTED: SdkSupportStatus = SdkSupportStatus::new("SUPPORTED");

    /// A newer version of the SDK exists, and an update is recommended.
    pub const STALE: SdkSupportStatus = SdkSupportStatus::new("STALE");

    /// This version of the SDK is deprecated and will eventually be no longer
    /// supported.
    pub const DEPRECATED: SdkSupportStatus = SdkSupportStatus::new("DEPRECATED");

    /// Support for this SDK version has ended and it should no longer be used.
    pub const UNSUPPORTED: SdkSupportStatus = SdkSupportStatus::new("UNSUPPORTED");
}

impl std::convert::From<&str> for SdkSupportStatus {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for SdkSupportStatus {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [DataPipelines::create_pipeline][crate::client::DataPipelines::create_pipeline].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreatePipelineRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The request body.
    pub pipeline: Option<crate::model::Pipeline>,
}

impl CreatePipelineRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreatePipelineRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [pipeline][crate::model::CreatePipelineRequest::pipeline].
    pub fn set_pipeline<T: Into<crate::model::Pipeline>>(mut self, v: T) -> Self {
        self.pipeline = Some(v.into());
        self
    }
}

/// The request for [DataPipelines::delete_pipeline][crate::client::DataPipelines::delete_pipeline].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeletePipelineRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl DeletePipelineRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeletePipelineRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DataPipelines::get_pipeline][crate::client::DataPipelines::get_pipeline].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPipelineRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetPipelineRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetPipelineRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DataPipelines::list_pipelines][crate::client::DataPipelines::list_pipelines].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPipelinesRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// An expression for filtering the results of the request.
    pub filter: Option<String>,

    /// The maximum number of entities to return. The service may return fewer than
    /// this value, even if there are additional pages.
    pub page_size: Option<i32>,

    /// A page token, received from a previous `ListPipelines` call.
    pub page_token: Option<String>,
}

impl ListPipelinesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListPipelinesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [filter][crate::model::ListPipelinesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListPipelinesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListPipelinesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListPipelinesResponse {
    type PageItem = crate::model::Pipeline;

    fn items(self) -> Vec<Self::PageItem> {
        self.pipelines
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [DataPipelines::patch_pipeline][crate::client::DataPipelines::patch_pipeline].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PatchPipelineRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// The list of fields to be updated, as a comma separated field mask.
    pub update_mask: Option<String>,

    /// The request body.
    pub pipeline: Option<crate::model::Pipeline>,
}

impl PatchPipelineRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::PatchPipelineRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::PatchPipelineRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets the value of [pipeline][crate::model::PatchPipelineRequest::pipeline].
    pub fn set_pipeline<T: Into<crate::model::Pipeline>>(mut self, v: T) -> Self {
        self.pipeline = Some(v.into());
        self
    }
}

/// The request for [DataPipelines::run_pipeline][crate::client::DataPipelines::run_pipeline].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunPipelineRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,
}

impl RunPipelineRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::RunPipelineRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DataPipelines::stop_pipeline][crate::client::DataPipelines::stop_pipeline].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StopPipelineRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,
}

impl StopPipelineRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::StopPipelineRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [DataPipelines::list_jobs][crate::client::DataPipelines::list_jobs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListJobsRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// The maximum number of entities to return.
    pub page_size: Option<i32>,

    /// A page token, received from a previous `ListJobs` call.
    pub page_token: Option<String>,
}

impl ListJobsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListJobsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListJobsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListJobsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListJobsResponse {
    type PageItem = crate::model::Job;

    fn items(self) -> Vec<Self::PageItem> {
        self.jobs
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}
