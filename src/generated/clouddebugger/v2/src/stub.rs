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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::CloudDebugger].
///
/// Application developers may need to implement this trait to mock
/// `client::CloudDebugger`. In other use-cases, application developers only
/// use `client::CloudDebugger` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait CloudDebugger: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::CloudDebugger::list_debuggees].
    fn list_debuggees(
        &self,
        _req: crate::model::ListDebuggeesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListDebuggeesResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::delete_breakpoint].
    fn delete_breakpoint(
        &self,
        _req: crate::model::DeleteBreakpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<wire::Empty>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::get_breakpoint].
    fn get_breakpoint(
        &self,
        _req: crate::model::GetBreakpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::GetBreakpointResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::list_breakpoints].
    fn list_breakpoints(
        &self,
        _req: crate::model::ListBreakpointsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListBreakpointsResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::set_breakpoint].
    fn set_breakpoint(
        &self,
        _req: crate::model::SetBreakpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::SetBreakpointResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::register_debuggee].
    fn register_debuggee(
        &self,
        _req: crate::model::RegisterDebuggeeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::RegisterDebuggeeResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::list_active_breakpoints].
    fn list_active_breakpoints(
        &self,
        _req: crate::model::ListActiveBreakpointsRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::ListActiveBreakpointsResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::CloudDebugger::update_active_breakpoint].
    fn update_active_breakpoint(
        &self,
        _req: crate::model::UpdateActiveBreakpointRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<
        Output = crate::Result<gax::response::Response<crate::model::UpdateActiveBreakpointResponse>>,
    > + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
