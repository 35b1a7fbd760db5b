use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode, routing::get, Router};
use shareus::{ShareusOptions, ShareusService, ShortenOutcome};

async fn easy_api(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    match params.get("key").map(String::as_str) {
        Some("good-key") => {
            let link = params.get("link").cloned().unwrap_or_default();
            let slug = link.rsplit('/').next().unwrap_or("").to_string();
            (StatusCode::OK, format!("  https://shrs.link/{}\n", slug))
        }
        _ => (StatusCode::NOT_FOUND, "not found".to_string()),
    }
}

async fn spawn_shortener() -> String {
    let app = Router::new().route("/easy_api", get(easy_api));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/easy_api", addr)
}

#[tokio::test]
async fn test_shorten_returns_trimmed_body_on_success() {
    let endpoint = spawn_shortener().await;
    let shareus = ShareusService::new(ShareusOptions::new("good-key").with_endpoint(endpoint));

    let outcome = shareus
        .shorten("https://example.com/apks/app1.apk")
        .await
        .expect("request should succeed");

    assert_eq!(
        outcome,
        ShortenOutcome::Shortened("https://shrs.link/app1.apk".to_string())
    );
}

#[tokio::test]
async fn test_shorten_returns_rejection_value_on_non_200() {
    let endpoint = spawn_shortener().await;
    let shareus = ShareusService::new(ShareusOptions::new("bad-key").with_endpoint(endpoint));

    let outcome = shareus
        .shorten("https://example.com/apks/app1.apk")
        .await
        .expect("a rejection is not a transport error");

    assert_eq!(
        outcome,
        ShortenOutcome::Rejected {
            status: 404,
            body: "not found".to_string(),
        }
    );
    assert_eq!(outcome.link_text(), "Error: not found");
}

#[tokio::test]
async fn test_shorten_unreachable_endpoint_is_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let shareus = ShareusService::new(
        ShareusOptions::new("good-key").with_endpoint(format!("http://{}/easy_api", addr)),
    );

    assert!(shareus.shorten("https://example.com/a.apk").await.is_err());
}
