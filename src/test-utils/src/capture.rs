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

//! Captures spans emitted by the code under test.
//!
//! The capturing subscriber is installed for the current thread only, so
//! tests running in parallel do not see each other's spans. Use it with
//! single-threaded runtimes, such as the default `#[tokio::test]` flavor.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::{Subscriber, field, span};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// A span recorded by [SpanCapture].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CapturedSpan {
    pub name: String,
    /// The span fields formatted as strings, including those recorded after
    /// the span was created.
    pub attributes: BTreeMap<String, String>,
}

/// Records all the spans created while the guard is alive.
///
/// # Example
/// ```
/// use google_cloud_test_utils::capture::SpanCapture;
/// let capture = SpanCapture::new();
/// {
///     let _guard = capture.install();
///     let span = tracing::info_span!("work", item = 42);
///     let _enter = span.enter();
/// }
/// let spans = capture.spans();
/// assert_eq!(spans[0].name, "work");
/// assert_eq!(spans[0].attributes.get("item").map(String::as_str), Some("42"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpanCapture {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

impl SpanCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the capturing subscriber as the thread default.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(CaptureLayer {
            spans: self.spans.clone(),
        });
        tracing::subscriber::set_default(subscriber)
    }

    /// Returns the spans closed so far, in the order they were closed.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.spans
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the closed spans with the given name.
    pub fn named(&self, name: &str) -> Vec<CapturedSpan> {
        self.spans()
            .into_iter()
            .filter(|s| s.name == name)
            .collect()
    }
}

struct CaptureLayer {
    spans: Arc<Mutex<Vec<CapturedSpan>>>,
}

struct Visitor<'a>(&'a mut BTreeMap<String, String>);

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut captured = CapturedSpan {
            name: span.name().to_string(),
            ..CapturedSpan::default()
        };
        attrs.record(&mut Visitor(&mut captured.attributes));
        span.extensions_mut().insert(captured);
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(captured) = span.extensions_mut().get_mut::<CapturedSpan>() {
            values.record(&mut Visitor(&mut captured.attributes));
        }
    }

    fn on_close(&self, id: span::Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(&id) else {
            return;
        };
        let captured = span.extensions_mut().remove::<CapturedSpan>();
        if let (Some(captured), Ok(mut spans)) = (captured, self.spans.lock()) {
            spans.push(captured);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_late_fields() {
        let capture = SpanCapture::new();
        {
            let _guard = capture.install();
            let span = tracing::info_span!("outer", a = "x", b = field::Empty);
            span.record("b", 7_i64);
            let _inner = tracing::info_span!("inner");
        }
        let want = CapturedSpan {
            name: "outer".to_string(),
            attributes: BTreeMap::from([
                ("a".to_string(), "x".to_string()),
                ("b".to_string(), "7".to_string()),
            ]),
        };
        assert_eq!(capture.named("outer"), vec![want]);
        assert_eq!(capture.spans().len(), 2);
    }

    #[test]
    fn isolated() {
        let capture = SpanCapture::new();
        let _other = tracing::info_span!("not-captured");
        assert!(capture.spans().is_empty());
    }
}
