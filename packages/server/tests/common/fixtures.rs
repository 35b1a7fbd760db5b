//! Local HTTP fixtures: a download page, its files and a Shareus stand-in.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::Arc;

pub const GOOD_API_KEY: &str = "good-key";

#[derive(Clone)]
struct Site {
    page_html: Arc<String>,
    files: Arc<HashMap<String, Vec<u8>>>,
}

async fn page(State(site): State<Site>) -> Html<String> {
    Html(site.page_html.as_str().to_string())
}

async fn file(State(site): State<Site>, Path(name): Path<String>) -> Result<Vec<u8>, StatusCode> {
    site.files.get(&name).cloned().ok_or(StatusCode::NOT_FOUND)
}

async fn easy_api(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    if params.get("key").map(String::as_str) != Some(GOOD_API_KEY) {
        return (StatusCode::NOT_FOUND, "not found".to_string());
    }
    let link = params.get("link").cloned().unwrap_or_default();
    let slug = link.rsplit('/').next().unwrap_or("").to_string();
    (StatusCode::OK, format!("https://shrs.link/{}\n", slug))
}

async fn broken_page() -> StatusCode {
    StatusCode::SERVICE_UNAVAILABLE
}

pub struct SiteFixture {
    pub base_url: String,
}

impl SiteFixture {
    /// The download page
    pub fn page_url(&self) -> String {
        format!("{}/apks", self.base_url)
    }

    /// A page that always answers 503
    pub fn broken_page_url(&self) -> String {
        format!("{}/broken", self.base_url)
    }

    pub fn file_url(&self, name: &str) -> String {
        format!("{}/files/{}", self.base_url, name)
    }

    pub fn shortener_endpoint(&self) -> String {
        format!("{}/easy_api", self.base_url)
    }
}

/// Serve `page_html` at `/apks`, `files` under `/files/<name>` and a
/// shortener at `/easy_api` on an ephemeral local port
pub async fn spawn_site(page_html: &str, files: &[(&str, Vec<u8>)]) -> SiteFixture {
    let site = Site {
        page_html: Arc::new(page_html.to_string()),
        files: Arc::new(
            files
                .iter()
                .map(|(name, bytes)| (name.to_string(), bytes.clone()))
                .collect(),
        ),
    };

    let app = Router::new()
        .route("/apks", get(page))
        .route("/broken", get(broken_page))
        .route("/files/*name", get(file))
        .route("/easy_api", get(easy_api))
        .with_state(site);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture listener");
    let addr = listener.local_addr().expect("Fixture listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fixture server failed");
    });

    SiteFixture {
        base_url: format!("http://{}", addr),
    }
}
