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

/// The default implementation of each stub method.
///
/// The generated clients override every method. Only mocks that skip a
/// method reach this function.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    Err(gax::error::Error::other(concat!(
        "the stub traits provide default implementations of each method, ",
        "the client implementations override all of them. If this error ",
        "appears in a test, verify that the mock implements all the methods ",
        "used by the test."
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_error() {
        let got = unimplemented_stub::<String>().await;
        let err = got.unwrap_err();
        assert!(err.to_string().contains("default implementations"), "{err}");
        assert!(err.status().is_none(), "{err:?}");
    }
}
