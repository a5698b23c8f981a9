//! API integration tests
//!
//! Run against a live server: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

use crate::support;

const BASE_URL: &str = "http://localhost:8080/api/v1";

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
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_list() {
    let client = Client::new();
    let name = support::unique("api-list");

    let response = client
        .post(format!("{}/lists", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let created: Value = response.json().await.expect("Failed to parse response");
    let id = created["id"].as_i64().expect("no id in response");

    let response = client
        .get(format!("{}/lists/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["name"], Value::String(name));
}

#[tokio::test]
#[ignore]
async fn test_create_list_empty_name_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/lists", BASE_URL))
        .json(&json!({ "name": "" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_import_rows_reports_per_row() {
    let client = Client::new();
    let name = support::unique("api-import");

    let response = client
        .post(format!("{}/lists", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    // One good row, one row with a broken date: both get an outcome
    let good_title = support::unique("title");
    let response = client
        .post(format!("{}/lists/{}/import", BASE_URL, id))
        .json(&json!({
            "rows": [
                {
                    "title": good_title,
                    "author": "Octavia Butler",
                    "isbn": support::unique("isbn"),
                    "annotation": "A classic.",
                    "genre": "sf, dystopia"
                },
                {
                    "title": support::unique("title"),
                    "author": "Octavia Butler",
                    "isbn": support::unique("isbn"),
                    "publication date": "yesterday"
                }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let report: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(report["rows_processed"], 2);
    assert_eq!(report["rows_attached"], 2);
    let rows = report["rows"].as_array().unwrap();
    assert_eq!(rows[0]["status"], "No matching work found.");
    assert!(rows[1]["warnings"][0]
        .as_str()
        .unwrap()
        .contains("yesterday"));
}
