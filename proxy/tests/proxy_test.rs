//! Proxy HTTP contract, driven over a real socket with a stand-in orchestrator

use async_trait::async_trait;
use remix_core::{Remix, RemixError, TransformResult};
use remix_proxy::router;
use serde_json::{json, Value};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::{Arc, Mutex};

/// Records (content, style) and answers per style
#[derive(Default)]
struct StubRemix {
    seen: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl Remix for StubRemix {
    async fn transform(&self, content: &str, style: &str) -> remix_core::Result<TransformResult> {
        self.seen
            .lock()
            .unwrap()
            .push((content.to_string(), style.to_string()));
        match style {
            "multi" => Ok(TransformResult::Multi([
                "one".into(),
                "two".into(),
                "three".into(),
            ])),
            "broken" => Err(RemixError::Transport {
                status: Some(503),
                message: "upstream unavailable".into(),
            }),
            "nocreds" => Err(RemixError::MissingCredential),
            _ => Ok(TransformResult::Single(format!("[{style}] {content}"))),
        }
    }
}

async fn start_test_server() -> (SocketAddr, Arc<StubRemix>) {
    let stub = Arc::new(StubRemix::default());
    let app = router(stub.clone());
    let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server exited cleanly");
    });
    (addr, stub)
}

async fn post_remix(addr: SocketAddr, body: Value) -> (u16, Value) {
    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/api/remix"))
        .json(&body)
        .send()
        .await
        .expect("request sent");
    let status = resp.status().as_u16();
    (status, resp.json().await.expect("json body"))
}

#[tokio::test]
async fn health_reports_ok() {
    let (addr, _) = start_test_server().await;
    let body: Value = reqwest::get(format!("http://{addr}/api/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn remix_returns_remixed_text() {
    let (addr, stub) = start_test_server().await;
    let (status, body) = post_remix(addr, json!({"text": "hello", "style": "cybernetic"})).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"remixedText": "[cybernetic] hello"}));
    assert_eq!(
        stub.seen.lock().unwrap().as_slice(),
        &[("hello".to_string(), "cybernetic".to_string())]
    );
}

#[tokio::test]
async fn style_defaults_to_casual() {
    let (addr, stub) = start_test_server().await;
    let (status, body) = post_remix(addr, json!({"text": "hello"})).await;
    assert_eq!(status, 200);
    assert_eq!(body["remixedText"], "[casual] hello");
    assert_eq!(stub.seen.lock().unwrap()[0].1, "casual");
}

#[tokio::test]
async fn multi_results_are_arrays() {
    let (addr, _) = start_test_server().await;
    let (status, body) = post_remix(addr, json!({"text": "hello", "style": "multi"})).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({"remixedText": ["one", "two", "three"]}));
}

#[tokio::test]
async fn missing_or_blank_text_is_400_without_calling_orchestrator() {
    let (addr, stub) = start_test_server().await;
    for body in [
        json!({}),
        json!({"text": null}),
        json!({"text": ""}),
        json!({"text": "   ", "style": "casual"}),
        json!({"text": 42}),
        json!({"text": ["hello"]}),
    ] {
        let (status, reply) = post_remix(addr, body).await;
        assert_eq!(status, 400);
        assert_eq!(reply, json!({"error": "Text is required"}));
    }
    assert!(stub.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn bodies_that_are_not_json_are_400() {
    let (addr, stub) = start_test_server().await;
    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/remix");

    let requests = [
        client.post(&url),
        client.post(&url).header("content-type", "application/json"),
        client
            .post(&url)
            .header("content-type", "application/json")
            .body("{not json"),
        client.post(&url).header("content-type", "text/plain").body("hello"),
    ];
    for request in requests {
        let resp = request.send().await.expect("request sent");
        assert_eq!(resp.status().as_u16(), 400);
        let reply: Value = resp.json().await.expect("json body");
        assert_eq!(reply, json!({"error": "Text is required"}));
    }
    assert!(stub.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn non_string_style_falls_back_to_casual() {
    let (addr, stub) = start_test_server().await;
    let (status, body) = post_remix(addr, json!({"text": "hello", "style": 7})).await;
    assert_eq!(status, 200);
    assert_eq!(body["remixedText"], "[casual] hello");
    assert_eq!(stub.seen.lock().unwrap()[0].1, "casual");
}

#[tokio::test]
async fn upstream_failures_are_500_with_details() {
    let (addr, _) = start_test_server().await;

    let (status, body) = post_remix(addr, json!({"text": "hello", "style": "broken"})).await;
    assert_eq!(status, 500);
    assert_eq!(body["error"], "Failed to remix text");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("upstream unavailable"));

    let (status, body) = post_remix(addr, json!({"text": "hello", "style": "nocreds"})).await;
    assert_eq!(status, 500);
    assert_eq!(body["details"], "API key not configured");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (addr, _) = start_test_server().await;
    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/api/health"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
