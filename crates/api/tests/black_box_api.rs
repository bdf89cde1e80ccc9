use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = usersvc_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create_user(
    client: &reqwest::Client,
    base_url: &str,
    first: &str,
    last: &str,
    age: i64,
) -> serde_json::Value {
    let res = client
        .post(format!("{}/api/users", base_url))
        .json(&json!({ "firstName": first, "lastName": last, "age": age }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv.base_url, "Ada", "Lovelace", 36).await;
    let user = &created["user"];
    let id = user["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(user["firstName"], "Ada");
    assert_eq!(user["lastName"], "Lovelace");
    assert_eq!(user["age"], 36);

    let res = client
        .get(format!("{}/api/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn client_supplied_id_is_ignored_on_create() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/users", srv.base_url))
        .json(&json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "age": 36
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_ne!(
        body["user"]["id"].as_str().unwrap(),
        "00000000-0000-0000-0000-000000000000"
    );
}

#[tokio::test]
async fn list_returns_exactly_the_created_users() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "users": [] }));

    let mut expected_ids = Vec::new();
    for (first, last, age) in [("Ada", "Lovelace", 36), ("Grace", "Hopper", 85), ("Alan", "Turing", 41)] {
        let created = create_user(&client, &srv.base_url, first, last, age).await;
        expected_ids.push(created["user"]["id"].as_str().unwrap().to_string());
    }

    let res = client
        .get(format!("{}/api/users", srv.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let mut listed_ids: Vec<String> = body["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect();

    listed_ids.sort();
    expected_ids.sort();
    assert_eq!(listed_ids, expected_ids);
}

#[tokio::test]
async fn update_changes_fields_but_preserves_id() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv.base_url, "Ada", "Lovelace", 36).await;
    let id = created["user"]["id"].as_str().unwrap().to_string();

    let res = client
        .put(format!("{}/api/users/{}", srv.base_url, id))
        .json(&json!({ "firstName": "Augusta", "lastName": "King", "age": 37 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["user"]["id"], id.as_str());
    assert_eq!(body["user"]["firstName"], "Augusta");

    // The write is visible on a subsequent read.
    let res = client
        .get(format!("{}/api/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    let fetched: serde_json::Value = res.json().await.unwrap();
    assert_eq!(fetched["user"]["lastName"], "King");
    assert_eq!(fetched["user"]["age"], 37);
    assert_eq!(fetched["user"]["id"], id.as_str());
}

#[tokio::test]
async fn update_of_missing_user_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!(
            "{}/api/users/00000000-0000-0000-0000-000000000000",
            srv.base_url
        ))
        .json(&json!({ "firstName": "Ada", "lastName": "Lovelace", "age": 36 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn delete_then_get_is_not_found_and_delete_is_idempotent() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_user(&client, &srv.base_url, "Ada", "Lovelace", 36).await;
    let id = created["user"]["id"].as_str().unwrap().to_string();

    let res = client
        .delete(format!("{}/api/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 200, "isValid": true }));

    let res = client
        .get(format!("{}/api/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting again is a no-op with the same acknowledgment.
    let res = client
        .delete(format!("{}/api/users/{}", srv.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "code": 200, "isValid": true }));
}

#[tokio::test]
async fn malformed_id_is_a_client_error() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for method in ["get", "put", "delete"] {
        let url = format!("{}/api/users/not-a-uuid", srv.base_url);
        let req = match method {
            "get" => client.get(&url),
            "put" => client
                .put(&url)
                .json(&json!({ "firstName": "A", "lastName": "B", "age": 1 })),
            _ => client.delete(&url),
        };
        let res = req.send().await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "method {method}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["error"], "invalid_id");
    }
}

#[tokio::test]
async fn get_of_missing_user_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!(
            "{}/api/users/00000000-0000-0000-0000-000000000000",
            srv.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_a_client_error() {
    let srv = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/users", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}
