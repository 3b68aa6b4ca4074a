//! B2 control-plane integration tests.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use crate::{call, create_test_bucket, endpoint_url, http_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_authorize_account_with_get() {
        let client = http_client();
        let resp = client
            .get(format!("{}/b2api/v1/b2_authorize_account", endpoint_url()))
            .header("authorization", "Basic dGVzdDp0ZXN0")
            .send()
            .await
            .expect("authorize");
        assert_eq!(resp.status().as_u16(), 200);

        let json: serde_json::Value = resp.json().await.expect("json");
        assert!(json["apiUrl"].is_string());
        assert!(json["authorizationToken"].is_string());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_create_and_list_buckets() {
        let client = http_client();
        let (photos, photos_id) = create_test_bucket(&client, "photos").await.expect("create");
        let (docs, docs_id) = create_test_bucket(&client, "docs").await.expect("create");
        assert_ne!(photos_id, docs_id);

        let (status, json) = call(&client, "b2_list_buckets", &json!({}))
            .await
            .expect("list");
        assert_eq!(status, 200);

        let listed: HashSet<(String, String)> = json["buckets"]
            .as_array()
            .expect("buckets array")
            .iter()
            .map(|b| {
                (
                    b["bucketName"].as_str().unwrap_or_default().to_owned(),
                    b["bucketId"].as_str().unwrap_or_default().to_owned(),
                )
            })
            .collect();
        assert!(listed.contains(&(photos, photos_id)));
        assert!(listed.contains(&(docs, docs_id)));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_assign_unique_ids_to_concurrent_creates() {
        let client = http_client();
        let futures = (0..20).map(|i| {
            let client = client.clone();
            async move {
                create_test_bucket(&client, &format!("concurrent{i}"))
                    .await
                    .expect("create")
                    .1
            }
        });
        let ids: HashSet<String> = futures::future::join_all(futures)
            .await
            .into_iter()
            .collect();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_hand_out_upload_url_and_accept_upload() {
        let client = http_client();
        let (status, json) = call(&client, "b2_get_upload_url", &json!({ "bucketId": "anything" }))
            .await
            .expect("get upload url");
        assert_eq!(status, 200);
        let upload_url = json["uploadUrl"].as_str().expect("uploadUrl").to_owned();
        assert!(upload_url.ends_with("/b2api/v1/b2_upload_file/uploader"));

        let resp = client
            .post(&upload_url)
            .header("authorization", json["authorizationToken"].as_str().unwrap_or(""))
            .header("x-bz-file-name", "hello%20world.txt")
            .header("content-type", "text/plain")
            .body("hello")
            .send()
            .await
            .expect("upload");
        assert_eq!(resp.status().as_u16(), 200);
        let body: serde_json::Value = resp.json().await.expect("json");
        assert_eq!(body, json!({}));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_unknown_call() {
        let client = http_client();
        let (status, json) = call(&client, "b2_delete_bucket", &json!({}))
            .await
            .expect("call");
        assert_eq!(status, 404);
        assert_eq!(json["status"], 404);
    }
}
