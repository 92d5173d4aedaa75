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

/// A dyn-compatible, crate-private version of [super::Workstations].
#[async_trait::async_trait]
pub trait Workstations: std::fmt::Debug + Send + Sync {
    async fn create_workstation_cluster(
        &self,
        req: crate::model::CreateWorkstationClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn get_workstation_cluster(
        &self,
        req: crate::model::GetWorkstationClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkstationCluster>>;

    async fn list_workstation_clusters(
        &self,
        req: crate::model::ListWorkstationClustersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListWorkstationClustersResponse>>;

    async fn delete_workstation_cluster(
        &self,
        req: crate::model::DeleteWorkstationClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn create_workstation_config(
        &self,
        req: crate::model::CreateWorkstationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn get_workstation_config(
        &self,
        req: crate::model::GetWorkstationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkstationConfig>>;

    async fn list_workstation_configs(
        &self,
        req: crate::model::ListWorkstationConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListWorkstationConfigsResponse>>;

    async fn create_workstation(
        &self,
        req: crate::model::CreateWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn get_workstation(
        &self,
        req: crate::model::GetWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Workstation>>;

    async fn list_workstations(
        &self,
        req: crate::model::ListWorkstationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListWorkstationsResponse>>;

    async fn delete_workstation(
        &self,
        req: crate::model::DeleteWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn start_workstation(
        &self,
        req: crate::model::StartWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn stop_workstation(
        &self,
        req: crate::model::StopWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;

    async fn generate_access_token(
        &self,
        req: crate::model::GenerateAccessTokenRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GenerateAccessTokenResponse>>;

    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>>;
}

/// All implementations of [super::Workstations] also implement [Workstations].
#[async_trait::async_trait]
impl<T: super::Workstations> Workstations for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn create_workstation_cluster(
        &self,
        req: crate::model::CreateWorkstationClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::create_workstation_cluster(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_workstation_cluster(
        &self,
        req: crate::model::GetWorkstationClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkstationCluster>> {
        T::get_workstation_cluster(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_workstation_clusters(
        &self,
        req: crate::model::ListWorkstationClustersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListWorkstationClustersResponse>> {
        T::list_workstation_clusters(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_workstation_cluster(
        &self,
        req: crate::model::DeleteWorkstationClusterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::delete_workstation_cluster(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_workstation_config(
        &self,
        req: crate::model::CreateWorkstationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::create_workstation_config(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_workstation_config(
        &self,
        req: crate::model::GetWorkstationConfigRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkstationConfig>> {
        T::get_workstation_config(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_workstation_configs(
        &self,
        req: crate::model::ListWorkstationConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListWorkstationConfigsResponse>> {
        T::list_workstation_configs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_workstation(
        &self,
        req: crate::model::CreateWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::create_workstation(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_workstation(
        &self,
        req: crate::model::GetWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Workstation>> {
        T::get_workstation(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_workstations(
        &self,
        req: crate::model::ListWorkstationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ListWorkstationsResponse>> {
        T::list_workstations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_workstation(
        &self,
        req: crate::model::DeleteWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::delete_workstation(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn start_workstation(
        &self,
        req: crate::model::StartWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::start_workstation(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn stop_workstation(
        &self,
        req: crate::model::StopWorkstationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::stop_workstation(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn generate_access_token(
        &self,
        req: crate::model::GenerateAccessTokenRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::GenerateAccessTokenResponse>> {
        T::generate_access_token(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_operation(
        &self,
        req: crate::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<longrunning::model::Operation>> {
        T::get_operation(self, req, options).await
    }
}
