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

pub mod cloud_debugger {
    use crate::Result;

    /// A builder for [CloudDebugger][crate::client::CloudDebugger].
    ///
    /// ```no_run
    /// # tokio_test::block_on(async {
    /// # use google_cloud_clouddebugger_v2::*;
    /// # use builder::cloud_debugger::ClientBuilder;
    /// # use client::CloudDebugger;
    /// let builder : ClientBuilder = CloudDebugger::builder();
    /// let client = builder
    ///     .with_endpoint("https://clouddebugger.googleapis.com")
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    #[doc(hidden)]
    pub mod client {
        use super::super::super::client::CloudDebugger;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = CloudDebugger;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::CloudDebugger] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [CloudDebugger::list_debuggees][crate::client::CloudDebugger::list_debuggees] calls.
    #[derive(Clone, Debug)]
    pub struct ListDebuggees(RequestBuilder<crate::model::ListDebuggeesRequest>);

    impl ListDebuggees {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListDebuggeesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListDebuggeesResponse> {
            (*self.0.stub)
                .list_debuggees(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [client_version][crate::model::ListDebuggeesRequest::client_version].
        pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_client_version(v);
            self
        }

        /// Sets the value of [include_inactive][crate::model::ListDebuggeesRequest::include_inactive].
        pub fn set_include_inactive<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_include_inactive(v);
            self
        }

        /// Sets the value of [project][crate::model::ListDebuggeesRequest::project].
        pub fn set_project<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_project(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListDebuggees {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::delete_breakpoint][crate::client::CloudDebugger::delete_breakpoint] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteBreakpoint(RequestBuilder<crate::model::DeleteBreakpointRequest>);

    impl DeleteBreakpoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<wire::Empty> {
            (*self.0.stub)
                .delete_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::DeleteBreakpointRequest::debuggee_id].
        pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee_id(v);
            self
        }

        /// Sets the value of [breakpoint_id][crate::model::DeleteBreakpointRequest::breakpoint_id].
        pub fn set_breakpoint_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_breakpoint_id(v);
            self
        }

        /// Sets the value of [client_version][crate::model::DeleteBreakpointRequest::client_version].
        pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_client_version(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::get_breakpoint][crate::client::CloudDebugger::get_breakpoint] calls.
    #[derive(Clone, Debug)]
    pub struct GetBreakpoint(RequestBuilder<crate::model::GetBreakpointRequest>);

    impl GetBreakpoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::GetBreakpointResponse> {
            (*self.0.stub)
                .get_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::GetBreakpointRequest::debuggee_id].
        pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee_id(v);
            self
        }

        /// Sets the value of [breakpoint_id][crate::model::GetBreakpointRequest::breakpoint_id].
        pub fn set_breakpoint_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_breakpoint_id(v);
            self
        }

        /// Sets the value of [client_version][crate::model::GetBreakpointRequest::client_version].
        pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_client_version(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::list_breakpoints][crate::client::CloudDebugger::list_breakpoints] calls.
    #[derive(Clone, Debug)]
    pub struct ListBreakpoints(RequestBuilder<crate::model::ListBreakpointsRequest>);

    impl ListBreakpoints {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListBreakpointsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListBreakpointsResponse> {
            (*self.0.stub)
                .list_breakpoints(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::ListBreakpointsRequest::debuggee_id].
        pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee_id(v);
            self
        }

        /// Sets the value of [action][crate::model::ListBreakpointsRequest::action].
        pub fn set_action<T: Into<crate::model::BreakpointActionValue>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_action(v);
            self
        }

        /// Sets the value of [client_version][crate::model::ListBreakpointsRequest::client_version].
        pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_client_version(v);
            self
        }

        /// Sets the value of [include_all_users][crate::model::ListBreakpointsRequest::include_all_users].
        pub fn set_include_all_users<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_include_all_users(v);
            self
        }

        /// Sets the value of [include_inactive][crate::model::ListBreakpointsRequest::include_inactive].
        pub fn set_include_inactive<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_include_inactive(v);
            self
        }

        /// Sets the value of [strip_results][crate::model::ListBreakpointsRequest::strip_results].
        pub fn set_strip_results<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_strip_results(v);
            self
        }

        /// Sets the value of [wait_token][crate::model::ListBreakpointsRequest::wait_token].
        pub fn set_wait_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_wait_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListBreakpoints {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::set_breakpoint][crate::client::CloudDebugger::set_breakpoint] calls.
    #[derive(Clone, Debug)]
    pub struct SetBreakpoint(RequestBuilder<crate::model::SetBreakpointRequest>);

    impl SetBreakpoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::SetBreakpointResponse> {
            (*self.0.stub)
                .set_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::SetBreakpointRequest::debuggee_id].
        pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee_id(v);
            self
        }

        /// Sets the value of [canary_option][crate::model::SetBreakpointRequest::canary_option].
        pub fn set_canary_option<T: Into<crate::model::CanaryOption>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_canary_option(v);
            self
        }

        /// Sets the value of [client_version][crate::model::SetBreakpointRequest::client_version].
        pub fn set_client_version<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_client_version(v);
            self
        }

        /// Sets the value of [breakpoint][crate::model::SetBreakpointRequest::breakpoint].
        pub fn set_breakpoint<T: Into<crate::model::Breakpoint>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_breakpoint(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::register_debuggee][crate::client::CloudDebugger::register_debuggee] calls.
    #[derive(Clone, Debug)]
    pub struct RegisterDebuggee(RequestBuilder<crate::model::RegisterDebuggeeRequest>);

    impl RegisterDebuggee {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RegisterDebuggeeRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::RegisterDebuggeeResponse> {
            (*self.0.stub)
                .register_debuggee(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee][crate::model::RegisterDebuggeeRequest::debuggee].
        pub fn set_debuggee<T: Into<crate::model::Debuggee>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RegisterDebuggee {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::list_active_breakpoints][crate::client::CloudDebugger::list_active_breakpoints] calls.
    #[derive(Clone, Debug)]
    pub struct ListActiveBreakpoints(RequestBuilder<crate::model::ListActiveBreakpointsRequest>);

    impl ListActiveBreakpoints {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListActiveBreakpointsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::ListActiveBreakpointsResponse> {
            (*self.0.stub)
                .list_active_breakpoints(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::ListActiveBreakpointsRequest::debuggee_id].
        pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee_id(v);
            self
        }

        /// Sets the value of [agent_id][crate::model::ListActiveBreakpointsRequest::agent_id].
        pub fn set_agent_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_agent_id(v);
            self
        }

        /// Sets the value of [success_on_timeout][crate::model::ListActiveBreakpointsRequest::success_on_timeout].
        pub fn set_success_on_timeout<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_success_on_timeout(v);
            self
        }

        /// Sets the value of [wait_token][crate::model::ListActiveBreakpointsRequest::wait_token].
        pub fn set_wait_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_wait_token(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListActiveBreakpoints {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [CloudDebugger::update_active_breakpoint][crate::client::CloudDebugger::update_active_breakpoint] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateActiveBreakpoint(RequestBuilder<crate::model::UpdateActiveBreakpointRequest>);

    impl UpdateActiveBreakpoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn super::super::stub::dynamic::CloudDebugger>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateActiveBreakpointRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<crate::model::UpdateActiveBreakpointResponse> {
            (*self.0.stub)
                .update_active_breakpoint(self.0.request, self.0.options)
                .await
                .map(gax::response::Response::into_body)
        }

        /// Sets the value of [debuggee_id][crate::model::UpdateActiveBreakpointRequest::debuggee_id].
        pub fn set_debuggee_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_debuggee_id(v);
            self
        }

        /// Sets the value of [id][crate::model::UpdateActiveBreakpointRequest::id].
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_id(v);
            self
        }

        /// Sets the value of [breakpoint][crate::model::UpdateActiveBreakpointRequest::breakpoint].
        pub fn set_breakpoint<T: Into<crate::model::Breakpoint>>(mut self, v: T) -> Self {
            self.0.request = self.0.request.set_breakpoint(v);
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateActiveBreakpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
