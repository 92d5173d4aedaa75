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

use tracing_subscriber::fmt::format::FmtSpan;

/// The most verbose level captured by [enable_tracing].
///
/// The `log-integration-tests` feature raises it to `DEBUG`, which includes
/// the request spans emitted by the clients.
pub const fn max_level() -> ::tracing::Level {
    if cfg!(feature = "log-integration-tests") {
        ::tracing::Level::DEBUG
    } else {
        ::tracing::Level::WARN
    }
}

/// Installs a formatting subscriber for the current thread.
///
/// Output goes through the test harness, so it is only shown for failing
/// tests. The subscriber is removed when the guard is dropped.
pub fn enable_tracing() -> ::tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_target(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_max_level(max_level())
        .finish();
    ::tracing::subscriber::set_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt_is_default() -> bool {
        ::tracing::dispatcher::get_default(|d| d.is::<tracing_subscriber::FmtSubscriber>())
    }

    #[test]
    fn installs_fmt_subscriber() {
        {
            let _guard = enable_tracing();
            assert!(fmt_is_default());
        }
        assert!(!fmt_is_default());
    }

    #[test]
    fn level() {
        let want = if cfg!(feature = "log-integration-tests") {
            ::tracing::Level::DEBUG
        } else {
            ::tracing::Level::WARN
        };
        assert_eq!(max_level(), want);
    }
}
