//! API integration tests against a running server
//!
//! Need a migrated database with at least one equipment row.
//! Run with: cargo test --test integration -- --ignored
//!
//! `test_scrap_retires_equipment` is destructive: it permanently scraps the
//! newest equipment row. Run it against a throwaway database only, or skip it
//! with `--skip test_scrap_retires_equipment`. The same behavior is covered on
//! an isolated database by `tests/repository_tests.rs`.

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000/api";

/// Helper to pick any equipment ID from the server
async fn first_equipment_id(client: &Client) -> String {
    let response = client
        .get(format!("{}/equipment", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    body[0]["id"].as_str().expect("No equipment in database").to_string()
}

/// Helper to read the open-request badge of an equipment
async fn open_count(client: &Client, equipment_id: &str) -> i64 {
    let response = client
        .get(format!("{}/equipment/{}/open-count", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");

    let body: Value = response.json().await.expect("Failed to parse response");
    body["open_count"].as_i64().expect("No open_count")
}

/// Helper to create a corrective request and return its ID
async fn create_request(client: &Client, equipment_id: &str) -> String {
    let response = client
        .post(format!("{}/requests", BASE_URL))
        .json(&json!({
            "subject": "Integration test request",
            "equipment_id": equipment_id,
            "request_type": "corrective"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "new");
    body["id"].as_str().expect("No request ID").to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["ok"], true);
}

#[tokio::test]
#[ignore]
async fn test_equipment_search_is_case_insensitive() {
    let client = Client::new();

    let response = client
        .get(format!("{}/equipment?q=DRILL", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    for equipment in body.as_array().expect("Expected an array") {
        let name = equipment["name"].as_str().unwrap().to_lowercase();
        assert!(name.contains("drill"), "unexpected match: {}", name);
    }
}

#[tokio::test]
#[ignore]
async fn test_equipment_detail_and_unknown_id() {
    let client = Client::new();
    let equipment_id = first_equipment_id(&client).await;

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["equipment"]["id"], equipment_id.as_str());
    assert!(body.get("team").is_some());
    assert!(body.get("default_technician").is_some());

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_complete_request() {
    let client = Client::new();
    let equipment_id = first_equipment_id(&client).await;
    let request_id = create_request(&client, &equipment_id).await;

    let response = client
        .post(format!("{}/requests/{}/complete", BASE_URL, request_id))
        .json(&json!({ "hours_spent": 2.5 }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "repaired");
    assert_eq!(body["hours_spent"], 2.5);
    assert_eq!(body["completed_date"], Utc::now().date_naive().to_string());
}

#[tokio::test]
#[ignore]
async fn test_open_count_follows_status_moves() {
    let client = Client::new();
    let equipment_id = first_equipment_id(&client).await;

    let before = open_count(&client, &equipment_id).await;
    let request_id = create_request(&client, &equipment_id).await;
    assert_eq!(open_count(&client, &equipment_id).await, before + 1);

    let response = client
        .put(format!("{}/requests/{}/status", BASE_URL, request_id))
        .json(&json!({ "status": "repaired" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["completed_date"], Utc::now().date_naive().to_string());

    assert_eq!(open_count(&client, &equipment_id).await, before);
}

#[tokio::test]
#[ignore]
async fn test_update_status_unknown_request() {
    let client = Client::new();

    let response = client
        .put(format!("{}/requests/{}/status", BASE_URL, uuid::Uuid::new_v4()))
        .json(&json!({ "status": "in_progress" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_stats_bounds() {
    let client = Client::new();

    let response = client
        .get(format!("{}/dashboard/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let count = |key: &str| body[key].as_i64().expect("missing counter");
    assert!(count("open") + count("repaired") + count("scrap") <= count("total"));
    assert!(count("overdue") <= count("open"));
}

#[tokio::test]
#[ignore]
async fn test_list_teams() {
    let client = Client::new();

    let response = client
        .get(format!("{}/teams", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

/// Destructive: leaves the newest equipment row scrapped
#[tokio::test]
#[ignore]
async fn test_scrap_retires_equipment() {
    let client = Client::new();
    let equipment_id = first_equipment_id(&client).await;
    let request_id = create_request(&client, &equipment_id).await;

    let response = client
        .put(format!("{}/requests/{}/status", BASE_URL, request_id))
        .json(&json!({ "status": "scrap" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/equipment/{}", BASE_URL, equipment_id))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["equipment"]["status"], "scrapped");
}
