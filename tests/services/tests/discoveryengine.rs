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
    use google_cloud_discoveryengine_v1::{client::DiscoveryEngine, model, schema};
    use google_cloud_longrunning::model::Operation;
    use google_cloud_rpc::model::Status;
    use google_cloud_wire::{Value, decode, encode};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use integration_tests_services::{Result, credentials, endpoint};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    use time::macros::datetime;

    const DATA_STORE: &str =
        "projects/test-project/locations/global/collections/default_collection/dataStores/ds";

    async fn test_client(server: &Server) -> Result<DiscoveryEngine> {
        let client = DiscoveryEngine::builder()
            .with_endpoint(endpoint(server))
            .with_credentials(credentials())
            .build()
            .await?;
        Ok(client)
    }

    fn import_metadata() -> serde_json::Value {
        json!({
            "@type": "type.googleapis.com/google.cloud.discoveryengine.v1.ImportDocumentsMetadata",
            "createTime": "2023-05-01T00:00:00Z",
            "successCount": "9007199254740993",
            "failureCount": "42",
        })
    }

    #[tokio::test]
    async fn import_documents_operation() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/global/collections/default_collection/dataStores/ds/branches/0/documents:import"
                ),
                request::body(json_decoded(eq(json!({
                    "inlineSource": {"documents": [{
                        "id": "doc-1",
                        "content": {"rawBytes": "AAEC", "mimeType": "text/plain"},
                    }]},
                    "reconciliationMode": "INCREMENTAL",
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": format!("{DATA_STORE}/branches/0/operations/import-123"),
                "metadata": import_metadata(),
            }))),
        );

        let client = test_client(&server).await?;
        let document = model::Document::new().set_id("doc-1").set_content(
            model::Content::new()
                .set_raw_bytes(vec![0_u8, 1, 2])
                .set_mime_type("text/plain"),
        );
        let operation = client
            .import_documents()
            .set_parent(format!("{DATA_STORE}/branches/0"))
            .set_inline_source(model::InlineSource::new().set_documents([document]))
            .set_reconciliation_mode(model::reconciliation_mode::INCREMENTAL)
            .send()
            .await?;
        assert_eq!(operation.done, None);

        let metadata = operation
            .metadata_as::<model::ImportDocumentsMetadata>()?
            .expect("the operation should have metadata");
        assert_eq!(metadata.failure_count, Some(42));
        assert_eq!(metadata.success_count, Some(9007199254740993));
        assert_eq!(metadata.total_count, None);
        assert_eq!(metadata.create_time, Some(datetime!(2023-05-01 00:00:00 UTC)));

        let decoded = operation
            .decode_metadata(&schema::import_documents_metadata())?
            .expect("the operation should have metadata");
        assert_eq!(
            decoded.get("failureCount").and_then(Value::as_integer),
            Some(42)
        );
        assert_eq!(
            decoded.get("@type").and_then(Value::as_str),
            Some("type.googleapis.com/google.cloud.discoveryengine.v1.ImportDocumentsMetadata")
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_operation_done() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/test-project/locations/global/collections/default_collection/dataStores/ds/branches/0/operations/purge-1",
            ))
            .respond_with(json_encoded(json!({
                "name": format!("{DATA_STORE}/branches/0/operations/purge-1"),
                "done": true,
                "metadata": {"failureCount": "0", "ignoredCount": "3"},
                "response": {"purgeCount": "1234", "purgeSample": ["a", "b"]},
            }))),
        );

        let client = test_client(&server).await?;
        let operation = client
            .get_operation()
            .set_name(format!("{DATA_STORE}/branches/0/operations/purge-1"))
            .send()
            .await?;
        assert_eq!(operation.done, Some(true));
        let metadata = operation
            .metadata_as::<model::PurgeDocumentsMetadata>()?
            .expect("the operation should have metadata");
        assert_eq!(metadata.failure_count, Some(0));
        assert_eq!(metadata.ignored_count, Some(3));
        let response = operation
            .response_as::<model::PurgeDocumentsResponse>()?
            .expect("the operation should have a response");
        assert_eq!(response.purge_count, Some(1234));
        assert_eq!(response.purge_sample, vec!["a", "b"]);
        Ok(())
    }

    #[tokio::test]
    async fn get_document_bytes() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/test-project/locations/global/collections/default_collection/dataStores/ds/branches/0/documents/doc-1",
            ))
            .respond_with(json_encoded(json!({
                "name": format!("{DATA_STORE}/branches/0/documents/doc-1"),
                "content": {"rawBytes": "AAEC"},
                "indexTime": "2024-02-29T23:59:59.123456789Z",
                "structData": {"title": "hello", "views": 7},
            }))),
        );

        let client = test_client(&server).await?;
        let got = client
            .get_document()
            .set_name(format!("{DATA_STORE}/branches/0/documents/doc-1"))
            .send()
            .await?;
        let content = got.content.expect("the document should have content");
        assert_eq!(content.raw_bytes.map(|b| b.to_vec()), Some(vec![0_u8, 1, 2]));
        assert_eq!(
            got.index_time,
            Some(datetime!(2024-02-29 23:59:59.123456789 UTC))
        );
        assert_eq!(got.struct_data, Some(json!({"title": "hello", "views": 7})));
        Ok(())
    }

    #[tokio::test]
    async fn get_document_bad_bytes() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/v1/projects/test-project/locations/global/collections/default_collection/dataStores/ds/branches/0/documents/doc-1",
            ))
            .respond_with(json_encoded(json!({"content": {"rawBytes": "not base64!"}}))),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_document()
            .set_name(format!("{DATA_STORE}/branches/0/documents/doc-1"))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn create_data_store_int64() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "POST",
                    "/v1/projects/test-project/locations/global/collections/default_collection/dataStores"
                ),
                request::query(url_decoded(contains(("dataStoreId", "ds")))),
                request::query(url_decoded(not(contains(("createAdvancedSiteSearch", any()))))),
                request::body(json_decoded(eq(json!({
                    "displayName": "test",
                    "billingEstimation": {"structuredDataSize": "9007199254740993"},
                })))),
            ])
            .respond_with(json_encoded(json!({
                "name": "projects/test-project/locations/global/operations/create-ds",
                "done": true,
                "response": {
                    "@type": "type.googleapis.com/google.cloud.discoveryengine.v1.DataStore",
                    "name": DATA_STORE,
                    "billingEstimation": {
                        "structuredDataSize": "9007199254740993",
                        "websiteDataSize": 1024,
                    },
                },
            }))),
        );

        let client = test_client(&server).await?;
        let operation: Operation = client
            .create_data_store()
            .set_parent("projects/test-project/locations/global/collections/default_collection")
            .set_data_store_id("ds")
            .set_data_store(
                model::DataStore::new().set_display_name("test").set_billing_estimation(
                    model::BillingEstimation::new().set_structured_data_size(9007199254740993_i64),
                ),
            )
            .send()
            .await?;
        assert_eq!(operation.done, Some(true));
        assert!(operation.error.is_none(), "{operation:?}");
        let data_store = operation
            .response_as::<model::DataStore>()?
            .expect("a finished operation should include the data store");
        assert_eq!(data_store.name.as_deref(), Some(DATA_STORE));
        let billing = data_store
            .billing_estimation
            .expect("the response should include the billing estimation");
        assert_eq!(billing.structured_data_size, Some(9007199254740993));
        assert_eq!(billing.website_data_size, Some(1024));
        Ok(())
    }

    #[tokio::test]
    async fn create_data_store_operation_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1/projects/test-project/locations/global/collections/default_collection/dataStores",
            ))
            .respond_with(json_encoded(json!({
                "name": "projects/test-project/locations/global/operations/create-ds",
                "done": true,
                "error": {"code": 6, "message": "data store already exists"},
            }))),
        );

        let client = test_client(&server).await?;
        let operation = client
            .create_data_store()
            .set_parent("projects/test-project/locations/global/collections/default_collection")
            .set_data_store_id("ds")
            .set_data_store(model::DataStore::new().set_display_name("test"))
            .send()
            .await?;
        let status: Status = operation.error.clone().expect("the operation failed");
        assert_eq!(status.code, Some(6));
        assert_eq!(status.message.as_deref(), Some("data store already exists"));
        assert_eq!(operation.response_as::<model::DataStore>()?, None);
        Ok(())
    }

    #[test_case(0)]
    #[test_case(1)]
    #[test_case(2)]
    #[test_case(3)]
    #[test_case(4)]
    fn content_bytes_roundtrip(len: usize) -> Result<()> {
        let raw = (0..len as u8).collect::<Vec<_>>();
        let content = model::Content::new().set_raw_bytes(raw.clone());
        let json = serde_json::to_value(&content)?;
        let got = serde_json::from_value::<model::Content>(json)?;
        assert_eq!(got.raw_bytes.map(|b| b.to_vec()), Some(raw));
        Ok(())
    }

    #[test]
    fn document_schema() -> Result<()> {
        let wire = json!({
            "name": "doc-1",
            "content": {"rawBytes": "AAEC", "uri": "gs://bucket/doc"},
            "indexStatus": {"indexTime": "2023-05-01T00:00:00Z"},
        });
        let local = decode(wire, &schema::document())?;
        let content = local.get("content").expect("content is present");
        assert_eq!(
            content.get("rawBytes").and_then(Value::as_bytes).map(|b| b.to_vec()),
            Some(vec![0_u8, 1, 2])
        );
        assert_eq!(
            local
                .get("indexStatus")
                .and_then(|s| s.get("indexTime"))
                .and_then(Value::as_timestamp),
            Some(datetime!(2023-05-01 00:00:00 UTC))
        );
        assert_eq!(local.get("name").and_then(Value::as_str), Some("doc-1"));

        let got = encode(&local, &schema::document())?;
        assert_eq!(
            got,
            json!({
                "name": "doc-1",
                "content": {"rawBytes": "AAEC", "uri": "gs://bucket/doc"},
                "indexStatus": {"indexTime": "2023-05-01T00:00:00.000Z"},
            })
        );
        Ok(())
    }

    #[test]
    fn billing_estimation_precision() -> Result<()> {
        let local = decode(
            json!({"structuredDataSize": "9007199254740993"}),
            &schema::billing_estimation(),
        )?;
        assert_eq!(
            local.get("structuredDataSize").and_then(Value::as_integer),
            Some(9007199254740993)
        );
        let got = encode(&local, &schema::billing_estimation())?;
        assert_eq!(got, json!({"structuredDataSize": "9007199254740993"}));
        Ok(())
    }
}
