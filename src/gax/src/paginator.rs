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

//! Streams over paginated list methods.
//!
//! List methods return one page of results at a time, with a token to fetch
//! the next page. See [AIP-158](https://google.aip.dev/158). The list
//! builders offer `by_page()` and `by_item()` to iterate over all the pages,
//! or all the items, as a [futures::Stream].

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// A list response that can be iterated over with a [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token to fetch the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

type ControlFlow = std::ops::ControlFlow<(), String>;

/// A stream of pages.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch each page.
    ///
    /// The stream ends after a page with an empty `next_page_token`, or after
    /// the first error.
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let token = page.next_page_token();
                        let next = if token.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(token)
                        };
                        Some((Ok(page), next))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the stream of pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// A stream of the items in all the pages.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = pages.flat_map(|page| {
            let items: Vec<Result<T::PageItem, E>> = match page {
                Ok(p) => p.items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Debug)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    fn page(items: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    fn fake_service(
        responses: Vec<TestResponse>,
        expected_tokens: Vec<&str>,
    ) -> impl Fn(String) -> futures::future::Ready<Result<TestResponse, TestError>> + Clone + Send + 'static
    {
        let responses = Arc::new(Mutex::new(VecDeque::from(responses)));
        let tokens = Arc::new(Mutex::new(
            expected_tokens
                .into_iter()
                .map(str::to_string)
                .collect::<VecDeque<_>>(),
        ));
        move |token: String| {
            let want = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, want);
            let resp = responses.lock().unwrap().pop_front().unwrap();
            futures::future::ready(Ok(resp))
        }
    }

    #[tokio::test]
    async fn pages() {
        let execute = fake_service(
            vec![page(&["item1", "item2"], "token2"), page(&["item3"], "")],
            vec!["token1", "token2"],
        );
        let mut pages = Paginator::new("token1".to_string(), execute);
        let mut got = Vec::new();
        while let Some(p) = pages.next().await {
            got.push(p.unwrap());
        }
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].items, vec!["item1", "item2"]);
        assert_eq!(got[1].items, vec!["item3"]);
    }

    #[tokio::test]
    async fn items() {
        let execute = fake_service(
            vec![
                page(&["item1", "item2"], "token2"),
                page(&[], "token3"),
                page(&["item3"], ""),
            ],
            vec!["", "token2", "token3"],
        );
        let mut items = Paginator::new(String::new(), execute).items();
        let mut got = Vec::new();
        while let Some(i) = items.next().await {
            got.push(i.unwrap());
        }
        assert_eq!(got, vec!["item1", "item2", "item3"]);
    }

    #[tokio::test]
    async fn stops_after_error() {
        let execute =
            |_| async { Err::<TestResponse, TestError>("simulated failure".into()) };
        let mut pages = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = pages.next().await {
            let err = resp.unwrap_err();
            assert_eq!(err.to_string(), "simulated failure");
            count += 1;
        }
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn items_error() {
        let execute =
            |_| async { Err::<TestResponse, TestError>("simulated failure".into()) };
        let mut items = Paginator::new(String::new(), execute).items();
        let got = items.next().await;
        assert!(matches!(got, Some(Err(_))), "{got:?}");
        assert!(items.next().await.is_none());
    }
}
