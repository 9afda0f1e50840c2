//! Shared helpers for HTTP integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use casetrack_core::enums::UpdatePolicy;
use casetrack_db::service::CaseService;
use casetrack_server::{AppState, build_router};

pub const BASE_URL: &str = "http://files.test:5025/";

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new(policy: UpdatePolicy) -> Self {
        let service = CaseService::new_local(":memory:").await.unwrap();
        let state = AppState::new(service, BASE_URL, policy);
        let router = build_router(state.clone(), &[]).unwrap();
        Self { router, state }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("POST", uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send("PUT", uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send("DELETE", uri, None).await
    }

    /// Create through the API and return the generated `_id`.
    pub async fn create_reference(&self, uri: &str, body: Value) -> String {
        let (status, json) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "{json}");
        json["data"]["_id"].as_str().unwrap().to_string()
    }

    /// Id of the single listed record with `name`.
    pub async fn id_by_name(&self, collection: &str, name: &str) -> String {
        let (_, json) = self.get(&format!("/{collection}?name={name}")).await;
        let rows = json["data"][collection].as_array().unwrap();
        assert_eq!(rows.len(), 1, "expected one {collection} named {name}");
        rows[0]["_id"].as_str().unwrap().to_string()
    }

    /// Write a raw status code, bypassing the API.
    pub async fn force_status(&self, table: &str, id: &str, status: i64) {
        let sql = format!("UPDATE {table} SET status = ?1 WHERE id = ?2");
        self.state
            .service
            .db()
            .execute(&sql, libsql::params![status, id])
            .await
            .unwrap();
    }
}
