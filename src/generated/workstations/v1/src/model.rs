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

/// A workstation cluster resource in the Cloud Workstations API.
///
/// Defines a group of workstations in a particular region and the VPC network
/// they're attached to.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkstationCluster {
    /// Identifier. Full name of this workstation cluster.
    pub name: Option<String>,

    /// Optional. Human-readable name for this workstation cluster.
    pub display_name: Option<String>,

    /// Output only. A system-assigned unique identifier for this workstation
    /// cluster.
    pub uid: Option<String>,

    /// Output only. Indicates whether this workstation cluster is currently being
    /// updated to match its intended state.
    pub reconciling: Option<bool>,

    /// Optional. Client-specified annotations.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub annotations: std::collections::HashMap<String, String>,

    /// Optional. Labels that are applied to the workstation cluster and that are
    /// also propagated to the underlying Compute Engine resources.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<String, String>,

    /// Output only. Time when this workstation cluster was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. Time when this workstation cluster was most recently updated.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub update_time: Option<time::OffsetDateTime>,

    /// Output only. Time when this workstation cluster was soft-deleted.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub delete_time: Option<time::OffsetDateTime>,

    /// Optional. Checksum computed by the server. May be sent on update and delete
    /// requests to make sure that the client has an up-to-date value before
    /// proceeding.
    pub etag: Option<String>,

    /// Immutable. Name of the Compute Engine network in which instances associated
    /// with this workstation cluster will be created.
    pub network: Option<String>,

    /// Immutable. Name of the Compute Engine subnetwork in which instances
    /// associated with this workstation cluster will be created. Must be part of
    /// the subnetwork specified for this workstation cluster.
    pub subnetwork: Option<String>,

    /// Output only. The private IP address of the control plane for this
    /// workstation cluster. Workstation VMs need access to this IP address to work
    /// with the service.
    pub control_plane_ip: Option<String>,

    /// Optional. Configuration for private workstation cluster.
    pub private_cluster_config: Option<crate::model::PrivateClusterConfig>,

    /// Output only. Whether this workstation cluster is in degraded mode, in which
    /// case it may require user action to restore full functionality.
    pub degraded: Option<bool>,

    /// Output only. Status conditions describing the workstation cluster's current
    /// state.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<rpc::model::Status>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WorkstationCluster {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::WorkstationCluster::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::WorkstationCluster::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [uid][crate::model::WorkstationCluster::uid].
    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = Some(v.into());
        self
    }

    /// Sets the value of [reconciling][crate::model::WorkstationCluster::reconciling].
    pub fn set_reconciling<T: Into<bool>>(mut self, v: T) -> Self {
        self.reconciling = Some(v.into());
        self
    }

    /// Sets the value of [annotations][crate::model::WorkstationCluster::annotations].
    pub fn set_annotations<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.annotations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [labels][crate::model::WorkstationCluster::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::WorkstationCluster::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::WorkstationCluster::update_time].
    pub fn set_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [delete_time][crate::model::WorkstationCluster::delete_time].
    pub fn set_delete_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.delete_time = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::WorkstationCluster::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [network][crate::model::WorkstationCluster::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = Some(v.into());
        self
    }

    /// Sets the value of [subnetwork][crate::model::WorkstationCluster::subnetwork].
    pub fn set_subnetwork<T: Into<String>>(mut self, v: T) -> Self {
        self.subnetwork = Some(v.into());
        self
    }

    /// Sets the value of [control_plane_ip][crate::model::WorkstationCluster::control_plane_ip].
    pub fn set_control_plane_ip<T: Into<String>>(mut self, v: T) -> Self {
        self.control_plane_ip = Some(v.into());
        self
    }

    /// Sets the value of [private_cluster_config][crate::model::WorkstationCluster::private_cluster_config].
    pub fn set_private_cluster_config<T: Into<crate::model::PrivateClusterConfig>>(mut self, v: T) -> Self {
        self.private_cluster_config = Some(v.into());
        self
    }

    /// Sets the value of [degraded][crate::model::WorkstationCluster::degraded].
    pub fn set_degraded<T: Into<bool>>(mut self, v: T) -> Self {
        self.degraded = Some(v.into());
        self
    }

    /// Sets the value of [conditions][crate::model::WorkstationCluster::conditions].
    pub fn set_conditions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<rpc::model::Status>,
    {
        self.conditions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Configuration options for private workstation clusters.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PrivateClusterConfig {
    /// Immutable. Whether Workstations endpoint is private.
    pub enable_private_endpoint: Option<bool>,

    /// Output only. Hostname for the workstation cluster. This field will be
    /// populated only when private endpoint is enabled.
    pub cluster_hostname: Option<String>,

    /// Output only. Service attachment URI for the workstation cluster.
    pub service_attachment_uri: Option<String>,

    /// Optional. Additional projects that are allowed to attach to the workstation
    /// cluster's service attachment.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_projects: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PrivateClusterConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [enable_private_endpoint][crate::model::PrivateClusterConfig::enable_private_endpoint].
    pub fn set_enable_private_endpoint<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_private_endpoint = Some(v.into());
        self
    }

    /// Sets the value of [cluster_hostname][crate::model::PrivateClusterConfig::cluster_hostname].
    pub fn set_cluster_hostname<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_hostname = Some(v.into());
        self
    }

    /// Sets the value of [service_attachment_uri][crate::model::PrivateClusterConfig::service_attachment_uri].
    pub fn set_service_attachment_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.service_attachment_uri = Some(v.into());
        self
    }

    /// Sets the value of [allowed_projects][crate::model::PrivateClusterConfig::allowed_projects].
    pub fn set_allowed_projects<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.allowed_projects = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A workstation configuration resource in the Cloud Workstations API.
///
/// Workstation configurations act as templates for workstations. The
/// workstation configuration defines details such as the workstation virtual
/// machine (VM) instance type, persistent storage, container image defining
/// environment, which IDE or Code Editor to use, and more.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkstationConfig {
    /// Identifier. Full name of this workstation configuration.
    pub name: Option<String>,

    /// Optional. Human-readable name for this workstation configuration.
    pub display_name: Option<String>,

    /// Output only. A system-assigned unique identifier for this workstation
    /// configuration.
    pub uid: Option<String>,

    /// Output only. Indicates whether this workstation configuration is currently
    /// being updated to match its intended state.
    pub reconciling: Option<bool>,

    /// Optional. Client-specified annotations.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub annotations: std::collections::HashMap<String, String>,

    /// Optional. Labels that are applied to the workstation configuration and that
    /// are also propagated to the underlying Compute Engine resources.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<String, String>,

    /// Output only. Time when this workstation configuration was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. Time when this workstation configuration was most recently
    /// updated.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub update_time: Option<time::OffsetDateTime>,

    /// Output only. Time when this workstation configuration was soft-deleted.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub delete_time: Option<time::OffsetDateTime>,

    /// Optional. Checksum computed by the server. May be sent on update and delete
    /// requests to make sure that the client has an up-to-date value before
    /// proceeding.
    pub etag: Option<String>,

    /// Optional. Number of seconds to wait before automatically stopping a
    /// workstation after it last received user traffic. A value of `0` indicates
    /// that Cloud Workstations VMs created with this configuration should never
    /// time out due to idleness. Defaults to 20 minutes.
    pub idle_timeout: Option<wire::Duration>,

    /// Optional. Number of seconds that a workstation can run until it is
    /// automatically shut down. We recommend that workstations be shut down daily
    /// to reduce costs and so that security updates can be applied upon restart.
    /// Defaults to 12 hours.
    pub running_timeout: Option<wire::Duration>,

    /// Optional. Runtime host for the workstation.
    pub host: Option<crate::model::Host>,

    /// Optional. Directories to persist across workstation sessions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub persistent_directories: Vec<crate::model::PersistentDirectory>,

    /// Optional. Container that runs upon startup for each workstation using this
    /// workstation configuration.
    pub container: Option<crate::model::Container>,

    /// Immutable. Encrypts resources of this workstation configuration using a
    /// customer-managed encryption key (CMEK).
    pub encryption_key: Option<crate::model::CustomerEncryptionKey>,

    /// Optional. Immutable. Specifies the zones used to replicate the VM and disk
    /// resources within the region.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replica_zones: Vec<String>,

    /// Output only. Whether this resource is degraded, in which case it may require
    /// user action to restore full functionality.
    pub degraded: Option<bool>,

    /// Output only. Status conditions describing the current resource state.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<rpc::model::Status>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WorkstationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::WorkstationConfig::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::WorkstationConfig::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [uid][crate::model::WorkstationConfig::uid].
    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = Some(v.into());
        self
    }

    /// Sets the value of [reconciling][crate::model::WorkstationConfig::reconciling].
    pub fn set_reconciling<T: Into<bool>>(mut self, v: T) -> Self {
        self.reconciling = Some(v.into());
        self
    }

    /// Sets the value of [annotations][crate::model::WorkstationConfig::annotations].
    pub fn set_annotations<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.annotations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [labels][crate::model::WorkstationConfig::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::WorkstationConfig::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::WorkstationConfig::update_time].
    pub fn set_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [delete_time][crate::model::WorkstationConfig::delete_time].
    pub fn set_delete_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.delete_time = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::WorkstationConfig::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [idle_timeout][crate::model::WorkstationConfig::idle_timeout].
    pub fn set_idle_timeout<T: Into<wire::Duration>>(mut self, v: T) -> Self {
        self.idle_timeout = Some(v.into());
        self
    }

    /// Sets the value of [running_timeout][crate::model::WorkstationConfig::running_timeout].
    pub fn set_running_timeout<T: Into<wire::Duration>>(mut self, v: T) -> Self {
        self.running_timeout = Some(v.into());
        self
    }

    /// Sets the value of [host][crate::model::WorkstationConfig::host].
    pub fn set_host<T: Into<crate::model::Host>>(mut self, v: T) -> Self {
        self.host = Some(v.into());
        self
    }

    /// Sets the value of [persistent_directories][crate::model::WorkstationConfig::persistent_directories].
    pub fn set_persistent_directories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::PersistentDirectory>,
    {
        self.persistent_directories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [container][crate::model::WorkstationConfig::container].
    pub fn set_container<T: Into<crate::model::Container>>(mut self, v: T) -> Self {
        self.container = Some(v.into());
        self
    }

    /// Sets the value of [encryption_key][crate::model::WorkstationConfig::encryption_key].
    pub fn set_encryption_key<T: Into<crate::model::CustomerEncryptionKey>>(mut self, v: T) -> Self {
        self.encryption_key = Some(v.into());
        self
    }

    /// Sets the value of [replica_zones][crate::model::WorkstationConfig::replica_zones].
    pub fn set_replica_zones<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.replica_zones = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [degraded][crate::model::WorkstationConfig::degraded].
    pub fn set_degraded<T: Into<bool>>(mut self, v: T) -> Self {
        self.degraded = Some(v.into());
        self
    }

    /// Sets the value of [conditions][crate::model::WorkstationConfig::conditions].
    pub fn set_conditions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<rpc::model::Status>,
    {
        self.conditions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Runtime host for a workstation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Host {
    /// Specifies a Compute Engine instance as the host.
    pub gce_instance: Option<crate::model::GceInstance>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Host {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gce_instance][crate::model::Host::gce_instance].
    pub fn set_gce_instance<T: Into<crate::model::GceInstance>>(mut self, v: T) -> Self {
        self.gce_instance = Some(v.into());
        self
    }
}

/// A runtime using a Compute Engine instance.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GceInstance {
    /// Optional. The type of machine to use for VM instances, for example,
    /// `"e2-standard-4"`.
    pub machine_type: Option<String>,

    /// Optional. The email address of the service account for Cloud Workstations
    /// VMs created with this configuration.
    pub service_account: Option<String>,

    /// Optional. Scopes to grant to the service_account.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub service_account_scopes: Vec<String>,

    /// Optional. Network tags to add to the Compute Engine VMs backing the
    /// workstations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Optional. The number of VMs that the system should keep idle so that new
    /// workstations can be started quickly for new users. Defaults to `0` in the
    /// API.
    pub pool_size: Option<i32>,

    /// Output only. Number of instances currently available in the pool for faster
    /// workstation startup.
    pub pooled_instances: Option<i32>,

    /// Optional. When set to true, disables public IP addresses for VMs.
    pub disable_public_ip_addresses: Option<bool>,

    /// Optional. Whether to enable nested virtualization on Cloud Workstations VMs
    /// created using this workstation configuration.
    pub enable_nested_virtualization: Option<bool>,

    /// Optional. The size of the boot disk for the VM in gigabytes (GB). The
    /// minimum boot disk size is `30` GB. Defaults to `50` GB.
    pub boot_disk_size_gb: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GceInstance {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [machine_type][crate::model::GceInstance::machine_type].
    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = Some(v.into());
        self
    }

    /// Sets the value of [service_account][crate::model::GceInstance::service_account].
    pub fn set_service_account<T: Into<String>>(mut self, v: T) -> Self {
        self.service_account = Some(v.into());
        self
    }

    /// Sets the value of [service_account_scopes][crate::model::GceInstance::service_account_scopes].
    pub fn set_service_account_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.service_account_scopes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [tags][crate::model::GceInstance::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [pool_size][crate::model::GceInstance::pool_size].
    pub fn set_pool_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.pool_size = Some(v.into());
        self
    }

    /// Sets the value of [pooled_instances][crate::model::GceInstance::pooled_instances].
    pub fn set_pooled_instances<T: Into<i32>>(mut self, v: T) -> Self {
        self.pooled_instances = Some(v.into());
        self
    }

    /// Sets the value of [disable_public_ip_addresses][crate::model::GceInstance::disable_public_ip_addresses].
    pub fn set_disable_public_ip_addresses<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_public_ip_addresses = Some(v.into());
        self
    }

    /// Sets the value of [enable_nested_virtualization][crate::model::GceInstance::enable_nested_virtualization].
    pub fn set_enable_nested_virtualization<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_nested_virtualization = Some(v.into());
        self
    }

    /// Sets the value of [boot_disk_size_gb][crate::model::GceInstance::boot_disk_size_gb].
    pub fn set_boot_disk_size_gb<T: Into<i32>>(mut self, v: T) -> Self {
        self.boot_disk_size_gb = Some(v.into());
        self
    }
}

/// A directory to persist across workstation sessions.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PersistentDirectory {
    /// Optional. Location of this directory in the running workstation.
    pub mount_path: Option<String>,

    /// A PersistentDirectory backed by a Compute Engine persistent disk.
    pub gce_pd: Option<crate::model::GceRegionalPersistentDisk>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PersistentDirectory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [mount_path][crate::model::PersistentDirectory::mount_path].
    pub fn set_mount_path<T: Into<String>>(mut self, v: T) -> Self {
        self.mount_path = Some(v.into());
        self
    }

    /// Sets the value of [gce_pd][crate::model::PersistentDirectory::gce_pd].
    pub fn set_gce_pd<T: Into<crate::model::GceRegionalPersistentDisk>>(mut self, v: T) -> Self {
        self.gce_pd = Some(v.into());
        self
    }
}

/// A Persistent Directory backed by a Compute Engine regional persistent disk.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GceRegionalPersistentDisk {
    /// Optional. The GB capacity of a persistent home directory for each
    /// workstation created with this configuration. Must be empty if
    /// source_snapshot is set.
    pub size_gb: Option<i32>,

    /// Optional. Type of file system that the disk should be formatted with.
    /// Defaults to `"ext4"`.
    pub fs_type: Option<String>,

    /// Optional. The type of the persistent disk for the home directory. Defaults
    /// to `"pd-standard"`.
    pub disk_type: Option<String>,

    /// Optional. Name of the snapshot to use as the source for the disk.
    pub source_snapshot: Option<String>,

    /// Optional. Whether the persistent disk should be deleted when the workstation
    /// is deleted. Valid values are `DELETE` and `RETAIN`. Defaults to `DELETE`.
    pub reclaim_policy: Option<crate::model::ReclaimPolicy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GceRegionalPersistentDisk {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [size_gb][crate::model::GceRegionalPersistentDisk::size_gb].
    pub fn set_size_gb<T: Into<i32>>(mut self, v: T) -> Self {
        self.size_gb = Some(v.into());
        self
    }

    /// Sets the value of [fs_type][crate::model::GceRegionalPersistentDisk::fs_type].
    pub fn set_fs_type<T: Into<String>>(mut self, v: T) -> Self {
        self.fs_type = Some(v.into());
        self
    }

    /// Sets the value of [disk_type][crate::model::GceRegionalPersistentDisk::disk_type].
    pub fn set_disk_type<T: Into<String>>(mut self, v: T) -> Self {
        self.disk_type = Some(v.into());
        self
    }

    /// Sets the value of [source_snapshot][crate::model::GceRegionalPersistentDisk::source_snapshot].
    pub fn set_source_snapshot<T: Into<String>>(mut self, v: T) -> Self {
        self.source_snapshot = Some(v.into());
        self
    }

    /// Sets the value of [reclaim_policy][crate::model::GceRegionalPersistentDisk::reclaim_policy].
    pub fn set_reclaim_policy<T: Into<crate::model::ReclaimPolicy>>(mut self, v: T) -> Self {
        self.reclaim_policy = Some(v.into());
        self
    }
}

/// A Docker container.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Container {
    /// Optional. A Docker container image that defines a custom environment.
    pub image: Option<String>,

    /// Optional. If set, overrides the default ENTRYPOINT specified by the image.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    /// Optional. Arguments passed to the entrypoint.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    /// Optional. Environment variables passed to the container's entrypoint.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub env: std::collections::HashMap<String, String>,

    /// Optional. If set, overrides the default DIR specified by the image.
    pub working_dir: Option<String>,

    /// Optional. If set, overrides the USER specified in the image with the given
    /// uid.
    pub run_as_user: Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Container {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image][crate::model::Container::image].
    pub fn set_image<T: Into<String>>(mut self, v: T) -> Self {
        self.image = Some(v.into());
        self
    }

    /// Sets the value of [command][crate::model::Container::command].
    pub fn set_command<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.command = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [args][crate::model::Container::args].
    pub fn set_args<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.args = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [env][crate::model::Container::env].
    pub fn set_env<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [working_dir][crate::model::Container::working_dir].
    pub fn set_working_dir<T: Into<String>>(mut self, v: T) -> Self {
        self.working_dir = Some(v.into());
        self
    }

    /// Sets the value of [run_as_user][crate::model::Container::run_as_user].
    pub fn set_run_as_user<T: Into<i32>>(mut self, v: T) -> Self {
        self.run_as_user = Some(v.into());
        self
    }
}

/// A customer-managed encryption key (CMEK) for the Compute Engine resources of
/// the associated workstation configuration.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomerEncryptionKey {
    /// Immutable. The name of the Google Cloud KMS encryption key.
    pub kms_key: Option<String>,

    /// Immutable. The service account to use with the specified KMS key.
    pub kms_key_service_account: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CustomerEncryptionKey {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [kms_key][crate::model::CustomerEncryptionKey::kms_key].
    pub fn set_kms_key<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key = Some(v.into());
        self
    }

    /// Sets the value of [kms_key_service_account][crate::model::CustomerEncryptionKey::kms_key_service_account].
    pub fn set_kms_key_service_account<T: Into<String>>(mut self, v: T) -> Self {
        self.kms_key_service_account = Some(v.into());
        self
    }
}

/// A single instance of a developer workstation with its own persistent
/// storage.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Workstation {
    /// Identifier. Full name of this workstation.
    pub name: Option<String>,

    /// Optional. Human-readable name for this workstation.
    pub display_name: Option<String>,

    /// Output only. A system-assigned unique identifier for this workstation.
    pub uid: Option<String>,

    /// Output only. Indicates whether this workstation is currently being updated
    /// to match its intended state.
    pub reconciling: Option<bool>,

    /// Optional. Client-specified annotations.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub annotations: std::collections::HashMap<String, String>,

    /// Optional. Labels that are applied to the workstation and that are also
    /// propagated to the underlying Compute Engine resources.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<String, String>,

    /// Output only. Time when this workstation was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. Time when this workstation was most recently updated.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub update_time: Option<time::OffsetDateTime>,

    /// Output only. Time when this workstation was soft-deleted.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub delete_time: Option<time::OffsetDateTime>,

    /// Optional. Checksum computed by the server. May be sent on update and delete
    /// requests to make sure that the client has an up-to-date value before
    /// proceeding.
    pub etag: Option<String>,

    /// Output only. Time when this workstation was most recently successfully
    /// started, regardless of the workstation's initial state.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub start_time: Option<time::OffsetDateTime>,

    /// Output only. Current state of the workstation.
    pub state: Option<crate::model::WorkstationState>,

    /// Output only. Host to which clients can send HTTPS traffic that will be
    /// received by the workstation.
    pub host: Option<String>,

    /// Optional. Environment variables passed to the workstation container's
    /// entrypoint.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub env: std::collections::HashMap<String, String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Workstation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Workstation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [display_name][crate::model::Workstation::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets the value of [uid][crate::model::Workstation::uid].
    pub fn set_uid<T: Into<String>>(mut self, v: T) -> Self {
        self.uid = Some(v.into());
        self
    }

    /// Sets the value of [reconciling][crate::model::Workstation::reconciling].
    pub fn set_reconciling<T: Into<bool>>(mut self, v: T) -> Self {
        self.reconciling = Some(v.into());
        self
    }

    /// Sets the value of [annotations][crate::model::Workstation::annotations].
    pub fn set_annotations<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.annotations = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [labels][crate::model::Workstation::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::Workstation::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Workstation::update_time].
    pub fn set_update_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets the value of [delete_time][crate::model::Workstation::delete_time].
    pub fn set_delete_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.delete_time = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::Workstation::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [start_time][crate::model::Workstation::start_time].
    pub fn set_start_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [state][crate::model::Workstation::state].
    pub fn set_state<T: Into<crate::model::WorkstationState>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets the value of [host][crate::model::Workstation::host].
    pub fn set_host<T: Into<String>>(mut self, v: T) -> Self {
        self.host = Some(v.into());
        self
    }

    /// Sets the value of [env][crate::model::Workstation::env].
    pub fn set_env<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// Response message for GenerateAccessToken.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GenerateAccessTokenResponse {
    /// The generated bearer access token. To use this token, include it in an
    /// Authorization header of an HTTP request sent to the associated workstation's
    /// hostname.
    pub access_token: Option<String>,

    /// Time at which the generated token will expire.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub expire_time: Option<time::OffsetDateTime>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GenerateAccessTokenResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [access_token][crate::model::GenerateAccessTokenResponse::access_token].
    pub fn set_access_token<T: Into<String>>(mut self, v: T) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// Sets the value of [expire_time][crate::model::GenerateAccessTokenResponse::expire_time].
    pub fn set_expire_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.expire_time = Some(v.into());
        self
    }
}

/// Metadata for long-running operations.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// Output only. Time that the operation was created.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub create_time: Option<time::OffsetDateTime>,

    /// Output only. Time that the operation finished running.
    #[serde_as(as = "Option<wire::Timestamp>")]
    pub end_time: Option<time::OffsetDateTime>,

    /// Output only. Server-defined resource path for the target of the operation.
    pub target: Option<String>,

    /// Output only. Name of the verb executed by the operation.
    pub verb: Option<String>,

    /// Output only. Human-readable status of the operation, if any.
    pub status_message: Option<String>,

    /// Output only. Identifies whether the user has requested cancellation of the
    /// operation.
    pub requested_cancellation: Option<bool>,

    /// Output only. API version used to start the operation.
    pub api_version: Option<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl OperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_time][crate::model::OperationMetadata::create_time].
    pub fn set_create_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][crate::model::OperationMetadata::end_time].
    pub fn set_end_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [target][crate::model::OperationMetadata::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets the value of [verb][crate::model::OperationMetadata::verb].
    pub fn set_verb<T: Into<String>>(mut self, v: T) -> Self {
        self.verb = Some(v.into());
        self
    }

    /// Sets the value of [status_message][crate::model::OperationMetadata::status_message].
    pub fn set_status_message<T: Into<String>>(mut self, v: T) -> Self {
        self.status_message = Some(v.into());
        self
    }

    /// Sets the value of [requested_cancellation][crate::model::OperationMetadata::requested_cancellation].
    pub fn set_requested_cancellation<T: Into<bool>>(mut self, v: T) -> Self {
        self.requested_cancellation = Some(v.into());
        self
    }

    /// Sets the value of [api_version][crate::model::OperationMetadata::api_version].
    pub fn set_api_version<T: Into<String>>(mut self, v: T) -> Self {
        self.api_version = Some(v.into());
        self
    }
}

/// Response message for ListWorkstationClusters.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListWorkstationClustersResponse {
    /// The requested workstation clusters.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workstation_clusters: Vec<crate::model::WorkstationCluster>,

    /// Token to retrieve the next page of results, or empty if there are no more
    /// results in the list.
    pub next_page_token: Option<String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListWorkstationClustersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [workstation_clusters][crate::model::ListWorkstationClustersResponse::workstation_clusters].
    pub fn set_workstation_clusters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::WorkstationCluster>,
    {
        self.workstation_clusters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListWorkstationClustersResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets the value of [unreachable][crate::model::ListWorkstationClustersResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response message for ListWorkstationConfigs.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListWorkstationConfigsResponse {
    /// The requested configs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workstation_configs: Vec<crate::model::WorkstationConfig>,

    /// Token to retrieve the next page of results, or empty if there are no more
    /// results in the list.
    pub next_page_token: Option<String>,

    /// Unreachable resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListWorkstationConfigsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [workstation_configs][crate::model::ListWorkstationConfigsResponse::workstation_configs].
    pub fn set_workstation_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::WorkstationConfig>,
    {
        self.workstation_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListWorkstationConfigsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets the value of [unreachable][crate::model::ListWorkstationConfigsResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response message for ListWorkstations.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListWorkstationsResponse {
    /// The requested workstations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub workstations: Vec<crate::model::Workstation>,

    /// Optional. Token to retrieve the next page of results, or empty if there are
    /// no more results in the list.
    pub next_page_token: Option<String>,

    /// Optional. Unreachable resources.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreachable: Vec<String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListWorkstationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [workstations][crate::model::ListWorkstationsResponse::workstations].
    pub fn set_workstations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Workstation>,
    {
        self.workstations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListWorkstationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets the value of [unreachable][crate::model::ListWorkstationsResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Whether a workstation is running and ready to receive user requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct WorkstationState(std::borrow::Cow<'static, str>);

impl WorkstationState {
    /// Creates a new WorkstationState instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [WorkstationState](WorkstationState)
pub mod workstation_state {
    use super::WorkstationState;

    /// Do not use.
    pub const STATE_UNSPECIFIED: WorkstationState = WorkstationState::new("STATE_UNSPECIFIED");

    /// The workstation is not yet ready to accept requests from users but will be
    /// soon.
    pub const STATE_STARTING: WorkstationState = WorkstationState::new("STATE_STARTING");

    /// The workstation is ready to accept requests from users.
    pub const STATE_RUNNING: WorkstationState = WorkstationState::new("STATE_RUNNING");

    /// The workstation is being stopped.
    pub const STATE_STOPPING: WorkstationState = WorkstationState::new("STATE_STOPPING");

    /// The workstation is stopped and will not be able to receive requests until it
    /// is started.
    pub const STATE_STOPPED: WorkstationState = WorkstationState::new("STATE_STOPPED");
}

impl std::convert::From<&str> for WorkstationState {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for WorkstationState {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// Value representing what should happen to the disk after the workstation is
/// deleted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub struct ReclaimPolicy(std::borrow::Cow<'static, str>);

impl ReclaimPolicy {
    /// Creates a new ReclaimPolicy instance.
    pub const fn new(v: &'static str) -> Self {
        Self(std::borrow::Cow::Borrowed(v))
    }

    /// Gets the enum value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Useful constants to work with [ReclaimPolicy](ReclaimPolicy)
pub mod reclaim_policy {
    use super::ReclaimPolicy;

    /// Do not use.
    pub const RECLAIM_POLICY_UNSPECIFIED: ReclaimPolicy = ReclaimPolicy::new("RECLAIM_POLICY_UNSPECIFIED");

    /// Delete the persistent disk when deleting the workstation.
    pub const DELETE: ReclaimPolicy = ReclaimPolicy::new("DELETE");

    /// Keep the persistent disk when deleting the workstation. An administrator
    /// must manually delete the disk.
    pub const RETAIN: ReclaimPolicy = ReclaimPolicy::new("RETAIN");
}

impl std::convert::From<&str> for ReclaimPolicy {
    fn from(value: &str) -> Self {
        Self(std::borrow::Cow::Owned(value.to_string()))
    }
}

impl std::convert::From<String> for ReclaimPolicy {
    fn from(value: String) -> Self {
        Self(std::borrow::Cow::Owned(value))
    }
}

/// The request for [Workstations::create_workstation_cluster][crate::client::Workstations::create_workstation_cluster].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateWorkstationClusterRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Required. ID to use for the workstation cluster.
    pub workstation_cluster_id: Option<String>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// actually apply it.
    pub validate_only: Option<bool>,

    /// The request body.
    pub workstation_cluster: Option<crate::model::WorkstationCluster>,
}

impl CreateWorkstationClusterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateWorkstationClusterRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [workstation_cluster_id][crate::model::CreateWorkstationClusterRequest::workstation_cluster_id].
    pub fn set_workstation_cluster_id<T: Into<String>>(mut self, v: T) -> Self {
        self.workstation_cluster_id = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::CreateWorkstationClusterRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }

    /// Sets the value of [workstation_cluster][crate::model::CreateWorkstationClusterRequest::workstation_cluster].
    pub fn set_workstation_cluster<T: Into<crate::model::WorkstationCluster>>(mut self, v: T) -> Self {
        self.workstation_cluster = Some(v.into());
        self
    }
}

/// The request for [Workstations::get_workstation_cluster][crate::client::Workstations::get_workstation_cluster].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetWorkstationClusterRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetWorkstationClusterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetWorkstationClusterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [Workstations::list_workstation_clusters][crate::client::Workstations::list_workstation_clusters].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkstationClustersRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Optional. Maximum number of items to return.
    pub page_size: Option<i32>,

    /// Optional. next_page_token value returned from a previous List request, if
    /// any.
    pub page_token: Option<String>,
}

impl ListWorkstationClustersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListWorkstationClustersRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListWorkstationClustersRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListWorkstationClustersRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListWorkstationClustersResponse {
    type PageItem = crate::model::WorkstationCluster;

    fn items(self) -> Vec<Self::PageItem> {
        self.workstation_clusters
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [Workstations::delete_workstation_cluster][crate::client::Workstations::delete_workstation_cluster].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteWorkstationClusterRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// Optional. If set, the request will be rejected if the latest version of the
    /// workstation cluster on the server does not have this ETag.
    pub etag: Option<String>,

    /// Optional. If set, any workstation configurations and workstations in the
    /// workstation cluster are also deleted. Otherwise, the request only works if
    /// the workstation cluster has no configurations or workstations.
    pub force: Option<bool>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// apply it.
    pub validate_only: Option<bool>,
}

impl DeleteWorkstationClusterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteWorkstationClusterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::DeleteWorkstationClusterRequest::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [force][crate::model::DeleteWorkstationClusterRequest::force].
    pub fn set_force<T: Into<bool>>(mut self, v: T) -> Self {
        self.force = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::DeleteWorkstationClusterRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }
}

/// The request for [Workstations::create_workstation_config][crate::client::Workstations::create_workstation_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateWorkstationConfigRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Required. ID to use for the workstation configuration.
    pub workstation_config_id: Option<String>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// actually apply it.
    pub validate_only: Option<bool>,

    /// The request body.
    pub workstation_config: Option<crate::model::WorkstationConfig>,
}

impl CreateWorkstationConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateWorkstationConfigRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [workstation_config_id][crate::model::CreateWorkstationConfigRequest::workstation_config_id].
    pub fn set_workstation_config_id<T: Into<String>>(mut self, v: T) -> Self {
        self.workstation_config_id = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::CreateWorkstationConfigRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }

    /// Sets the value of [workstation_config][crate::model::CreateWorkstationConfigRequest::workstation_config].
    pub fn set_workstation_config<T: Into<crate::model::WorkstationConfig>>(mut self, v: T) -> Self {
        self.workstation_config = Some(v.into());
        self
    }
}

/// The request for [Workstations::get_workstation_config][crate::client::Workstations::get_workstation_config].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetWorkstationConfigRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetWorkstationConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetWorkstationConfigRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [Workstations::list_workstation_configs][crate::client::Workstations::list_workstation_configs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkstationConfigsRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Optional. Maximum number of items to return.
    pub page_size: Option<i32>,

    /// Optional. next_page_token value returned from a previous List request, if
    /// any.
    pub page_token: Option<String>,
}

impl ListWorkstationConfigsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListWorkstationConfigsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListWorkstationConfigsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListWorkstationConfigsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListWorkstationConfigsResponse {
    type PageItem = crate::model::WorkstationConfig;

    fn items(self) -> Vec<Self::PageItem> {
        self.workstation_configs
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [Workstations::create_workstation][crate::client::Workstations::create_workstation].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateWorkstationRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Required. ID to use for the workstation.
    pub workstation_id: Option<String>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// actually apply it.
    pub validate_only: Option<bool>,

    /// The request body.
    pub workstation: Option<crate::model::Workstation>,
}

impl CreateWorkstationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateWorkstationRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [workstation_id][crate::model::CreateWorkstationRequest::workstation_id].
    pub fn set_workstation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.workstation_id = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::CreateWorkstationRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }

    /// Sets the value of [workstation][crate::model::CreateWorkstationRequest::workstation].
    pub fn set_workstation<T: Into<crate::model::Workstation>>(mut self, v: T) -> Self {
        self.workstation = Some(v.into());
        self
    }
}

/// The request for [Workstations::get_workstation][crate::client::Workstations::get_workstation].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetWorkstationRequest {
    /// The `name` path parameter.
    pub name: Option<String>,
}

impl GetWorkstationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetWorkstationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The request for [Workstations::list_workstations][crate::client::Workstations::list_workstations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkstationsRequest {
    /// The `parent` path parameter.
    pub parent: Option<String>,

    /// Optional. Maximum number of items to return.
    pub page_size: Option<i32>,

    /// Optional. next_page_token value returned from a previous List request, if
    /// any.
    pub page_token: Option<String>,
}

impl ListWorkstationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListWorkstationsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = Some(v.into());
        self
    }

    /// Sets the value of [page_size][crate::model::ListWorkstationsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_token][crate::model::ListWorkstationsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }
}

impl gax::paginator::PageableResponse for ListWorkstationsResponse {
    type PageItem = crate::model::Workstation;

    fn items(self) -> Vec<Self::PageItem> {
        self.workstations
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }
}

/// The request for [Workstations::delete_workstation][crate::client::Workstations::delete_workstation].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteWorkstationRequest {
    /// The `name` path parameter.
    pub name: Option<String>,

    /// Optional. If set, the request will be rejected if the latest version of the
    /// workstation on the server does not have this ETag.
    pub etag: Option<String>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// actually apply it.
    pub validate_only: Option<bool>,
}

impl DeleteWorkstationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteWorkstationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::DeleteWorkstationRequest::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::DeleteWorkstationRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }
}

/// The request for [Workstations::start_workstation][crate::client::Workstations::start_workstation].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StartWorkstationRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// actually apply it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_only: Option<bool>,

    /// Optional. If set, the request will be rejected if the latest version of the
    /// workstation on the server does not have this ETag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl StartWorkstationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::StartWorkstationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::StartWorkstationRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::StartWorkstationRequest::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }
}

/// The request for [Workstations::stop_workstation][crate::client::Workstations::stop_workstation].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StopWorkstationRequest {
    /// The `name` path parameter.
    #[serde(skip)]
    pub name: Option<String>,

    /// Optional. If set, validate the request and preview the review, but do not
    /// actually apply it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_only: Option<bool>,

    /// Optional. If set, the request will be rejected if the latest version of the
    /// workstation on the server does not have this ETag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl StopWorkstationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::StopWorkstationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::StopWorkstationRequest::validate_only].
    pub fn set_validate_only<T: Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = Some(v.into());
        self
    }

    /// Sets the value of [etag][crate::model::StopWorkstationRequest::etag].
    pub fn set_etag<T: Into<String>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }
}

/// The request for [Workstations::generate_access_token][crate::client::Workstations::generate_access_token].
///
/// The path and query parameters are sent in the URL, the remaining fields
/// are sent in the request body.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct GenerateAccessTokenRequest {
    /// The `workstation` path parameter.
    #[serde(skip)]
    pub workstation: Option<String>,

    /// Desired expiration time of the access token. This value must be at most 24
    /// hours in the future. If a value is not specified, the token's expiration
    /// time will be set to a default value of 1 hour in the future.
    #[serde_as(as = "Option<wire::Timestamp>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_time: Option<time::OffsetDateTime>,
}

impl GenerateAccessTokenRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [workstation][crate::model::GenerateAccessTokenRequest::workstation].
    pub fn set_workstation<T: Into<String>>(mut self, v: T) -> Self {
        self.workstation = Some(v.into());
        self
    }

    /// Sets the value of [expire_time][crate::model::GenerateAccessTokenRequest::expire_time].
    pub fn set_expire_time<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.expire_time = Some(v.into());
        self
    }
}

/// The request for [Workstations::get_operation][crate::client::Workstations::get_operation].
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
