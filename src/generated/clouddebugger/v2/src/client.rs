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

/// Implements a client for the Cloud Debugger API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_clouddebugger_v2::client::CloudDebugger;
/// let client = CloudDebugger::builder().build().await?;
/// let response = client
///     .list_debuggees()
///     .set_project("my-project")
///     .set_client_version("google.com/my-tool/v1")
///     .send()
///     .await?;
/// println!("{response:?}");
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Examines the call stack and variables of a running application without
/// stopping or slowing it down.
///
/// The debugger part of the service is used by the users to set breakpoints and
/// inspect them. The controller part is used by the agents attached to the
/// debuggees.
///
/// # Configuration
///
/// To configure `CloudDebugger` use the `with_*` methods in the type returned
/// by [builder()][CloudDebugger::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://clouddebugger.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the API key in the
///   `GOOGLE_API_KEY` environment variable.
///
/// [with_endpoint()]: super::builder::cloud_debugger::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::cloud_debugger::ClientBuilder::with_credentials
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `CloudDebugger` holds a connection pool internally, it is advised to
/// create one and then reuse it.  You do not need to wrap `CloudDebugger` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct CloudDebugger {
    inner: std::sync::Arc<dyn super::stub::dynamic::CloudDebugger>,
}

impl CloudDebugger {
    /// Returns a builder for [CloudDebugger].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_clouddebugger_v2::client::CloudDebugger;
    /// let client = CloudDebugger::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::cloud_debugger::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cloud_debugger::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::CloudDebugger + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::CloudDebugger>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudDebugger> {
        super::transport::CloudDebugger::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::CloudDebugger> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::CloudDebugger::new)
    }

    /// Lists all the debuggees that the user has access to.
    pub fn list_debuggees(&self) -> super::builder::cloud_debugger::ListDebuggees {
        super::builder::cloud_debugger::ListDebuggees::new(self.inner.clone())
    }

    /// Deletes the breakpoint from the debuggee.
    pub fn delete_breakpoint(&self) -> super::builder::cloud_debugger::DeleteBreakpoint {
        super::builder::cloud_debugger::DeleteBreakpoint::new(self.inner.clone())
    }

    /// Gets breakpoint information.
    pub fn get_breakpoint(&self) -> super::builder::cloud_debugger::GetBreakpoint {
        super::builder::cloud_debugger::GetBreakpoint::new(self.inner.clone())
    }

    /// Lists all breakpoints for the debuggee.
    pub fn list_breakpoints(&self) -> super::builder::cloud_debugger::ListBreakpoints {
        super::builder::cloud_debugger::ListBreakpoints::new(self.inner.clone())
    }

    /// Sets the breakpoint to the debuggee.
    pub fn set_breakpoint(&self) -> super::builder::cloud_debugger::SetBreakpoint {
        super::builder::cloud_debugger::SetBreakpoint::new(self.inner.clone())
    }

    /// Registers the debuggee with the controller service. All agents attached
    /// to the same application must call this method with exactly the same
    /// request content to get back the same stable `debuggee_id`.
    pub fn register_debuggee(&self) -> super::builder::cloud_debugger::RegisterDebuggee {
        super::builder::cloud_debugger::RegisterDebuggee::new(self.inner.clone())
    }

    /// Returns the list of all active breakpoints for the debuggee. The
    /// breakpoint specification (`location`, `condition`, and `expressions`
    /// fields) is semantically immutable, although the field values may change.
    pub fn list_active_breakpoints(&self) -> super::builder::cloud_debugger::ListActiveBreakpoints {
        super::builder::cloud_debugger::ListActiveBreakpoints::new(self.inner.clone())
    }

    /// Updates the breakpoint state or mutable fields. The entire Breakpoint
    /// message must be sent back to the controller service.
    pub fn update_active_breakpoint(&self) -> super::builder::cloud_debugger::UpdateActiveBreakpoint {
        super::builder::cloud_debugger::UpdateActiveBreakpoint::new(self.inner.clone())
    }
}
