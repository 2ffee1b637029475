//! Test helper utilities for webserver integration tests

use std::net::SocketAddr;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use fleet::{FleetConfig, InMemoryFleet, MissingItemPolicy};
use serde_json::Value;
use tower::ServiceExt;
use webserver::WebServer;

use super::fixtures;

pub fn test_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

/// Router over a fresh in-memory fleet
pub fn test_router() -> Router {
    router_with(FleetConfig::default())
}

pub fn strict_router() -> Router {
    router_with(FleetConfig::default().with_missing_items(MissingItemPolicy::Reject))
}

pub fn router_with(config: FleetConfig) -> Router {
    WebServer::new(test_address(), InMemoryFleet::in_memory(config)).build_router()
}

/// Send one request through the router and decode the JSON reply
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn put(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::PUT, uri, Some(body)).await
}

pub async fn delete(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::DELETE, uri, None).await
}

/// Create a mover and return its id
pub async fn create_mover(router: &Router, name: &str, weight_limit: f64) -> String {
    let (status, body) = post(router, "/api/movers", fixtures::new_mover(name, weight_limit)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}

/// Create an item and return its id
pub async fn create_item(router: &Router, name: &str, weight: f64) -> String {
    let (status, body) = post(router, "/api/items", fixtures::new_item(name, weight)).await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body["id"].as_str().unwrap().to_string()
}
