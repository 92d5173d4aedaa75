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

#[cfg(test)]
mod tests {
    use google_cloud_firebasestorage_v1beta::{client::FirebaseStorage, model};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    async fn test_client(server: &Server) -> Result<FirebaseStorage> {
        let client = FirebaseStorage::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test]
    async fn add_firebase() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/projects/p1/buckets/my-bucket:addFirebase"),
                request::body(json_decoded(eq(json!({})))),
            ])
            .respond_with(json_encoded(json!({"name": "projects/p1/buckets/my-bucket"}))),
        );

        let client = test_client(&server).await?;
        let got = client
            .add_firebase()
            .set_bucket("projects/p1/buckets/my-bucket")
            .send()
            .await?;
        assert_eq!(got.name.as_deref(), Some("projects/p1/buckets/my-bucket"));
        Ok(())
    }

    #[tokio::test]
    async fn create_default_bucket() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v1beta/projects/p1/defaultBucket"),
                request::body(json_decoded(eq(json!({
                    "location": "us-central1",
                    "storageClass": "STANDARD",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/p1/defaultBucket",
                "bucket": {"name": "projects/p1/buckets/p1.appspot.com"},
                "location": "us-central1",
                "storageClass": "STANDARD",
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .create_default_bucket()
            .set_parent("projects/p1")
            .set_default_bucket(
                model::DefaultBucket::new()
                    .set_location("us-central1")
                    .set_storage_class("STANDARD"),
            )
            .send()
            .await?;
        assert_eq!(
            got.bucket.and_then(|b| b.name).as_deref(),
            Some("projects/p1/buckets/p1.appspot.com")
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_buckets_unknown_fields() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1beta/projects/p1/buckets"),
                request::query(url_decoded(not(contains(("pageSize", any()))))),
            ])
            .respond_with(json_encoded(json!({
                "buckets": [{"name": "projects/p1/buckets/b1", "newField": {"a": 1}}],
            }))),
        );

        let client = test_client(&server).await?;
        let got = client.list_buckets().set_parent("projects/p1").send().await?;
        assert_eq!(got.next_page_token, None);
        let bucket = got.buckets.into_iter().next().expect("one bucket");
        // Fields unknown to this version of the client survive a round trip.
        assert_eq!(
            serde_json::to_value(&bucket)?,
            json!({"name": "projects/p1/buckets/b1", "newField": {"a": 1}})
        );
        Ok(())
    }

    #[tokio::test]
    async fn delete_default_bucket() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/v1beta/projects/p1/defaultBucket",
            ))
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client
            .delete_default_bucket()
            .set_name("projects/p1/defaultBucket")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn permission_denied() -> Result<()> {
        let server = Server::run();
        let error = json!({"error": {
            "code": 403,
            "message": "caller lacks permission",
            "status": "PERMISSION_DENIED",
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1beta/projects/p1/buckets/b1"))
                .times(1)
                .respond_with(status_code(403).body(error.to_string())),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_bucket()
            .set_name("projects/p1/buckets/b1")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(403), "{err:?}");
        assert_eq!(
            err.status().map(|s| s.code),
            Some(google_cloud_gax::error::rpc::Code::PermissionDenied)
        );
        Ok(())
    }
}
