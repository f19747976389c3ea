use alt_catalog::catalog::Catalog;
use alt_catalog::config::Config;
use alt_catalog::contact::{ContactBridge, ContactSubmission};
use alt_catalog::error::CatalogError;
use alt_catalog::server::create_server;
use anyhow::Result;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone)]
struct FakeTracker {
    hits: Arc<AtomicUsize>,
    reject: bool,
}

async fn create_issue(
    State(state): State<FakeTracker>,
    Json(payload): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    if state.reject {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "message": "Validation Failed" })),
        );
    }
    assert!(payload["labels"].is_array());
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "html_url": "https://github.com/owner/repo/issues/42",
            "number": 42,
        })),
    )
}

/// Stands up an in-process issue tracker on an ephemeral port and returns
/// its origin plus a hit counter.
fn spawn_fake_tracker(reject: bool) -> Result<(String, Arc<AtomicUsize>)> {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = FakeTracker {
        hits: hits.clone(),
        reject,
    };
    let app = Router::new()
        .route("/repos/owner/repo/issues", post(create_issue))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")?;
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;
    let server = hyper::Server::from_tcp(listener)?.serve(app.into_make_service());
    tokio::spawn(server);

    Ok((format!("http://{addr}"), hits))
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        title: "Broken link on LibreOffice page".to_string(),
        body: "The repository link 404s.".to_string(),
        labels: None,
    }
}

#[tokio::test]
async fn successful_submission_echoes_issue_url_and_number() -> Result<()> {
    let (base, hits) = spawn_fake_tracker(false)?;
    let bridge = ContactBridge::new("test-token".to_string(), "owner/repo".to_string(), 5)?
        .with_api_base(base);

    let issue = bridge.submit(&submission()).await?;
    assert_eq!(issue.issue_url, "https://github.com/owner/repo/issues/42");
    assert_eq!(issue.issue_number, 42);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn upstream_rejection_surfaces_as_api_error() -> Result<()> {
    let (base, hits) = spawn_fake_tracker(true)?;
    let bridge = ContactBridge::new("test-token".to_string(), "owner/repo".to_string(), 5)?
        .with_api_base(base);

    let err = bridge.submit(&submission()).await.unwrap_err();
    assert!(matches!(err, CatalogError::Api { .. }));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn missing_credentials_fail_before_any_outbound_call() -> Result<()> {
    let (_base, hits) = spawn_fake_tracker(false)?;

    std::env::remove_var("GITHUB_TOKEN");
    std::env::remove_var("GITHUB_REPO");
    let err = ContactBridge::from_env(5).unwrap_err();
    assert!(matches!(err, CatalogError::Config(_)));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    Ok(())
}

/// Starts the site server with the given bridge, as `start_server` would
/// after reading (or failing to read) the deployment secrets.
fn spawn_site(bridge: Option<ContactBridge>) -> Result<String> {
    let catalog = Arc::new(Catalog::seeded());
    let config = Arc::new(Config::default());
    let app = create_server(catalog, config, bridge.map(Arc::new));

    let listener = TcpListener::bind("127.0.0.1:0")?;
    listener.set_nonblocking(true)?;
    let addr = listener.local_addr()?;
    let server = hyper::Server::from_tcp(listener)?.serve(app.into_make_service());
    tokio::spawn(server);

    Ok(format!("http://{addr}"))
}

#[tokio::test]
async fn contact_endpoint_echoes_issue_url_and_number() -> Result<()> {
    let (tracker, hits) = spawn_fake_tracker(false)?;
    let bridge = ContactBridge::new("test-token".to_string(), "owner/repo".to_string(), 5)?
        .with_api_base(tracker);
    let site = spawn_site(Some(bridge))?;

    let response = reqwest::Client::new()
        .post(format!("{site}/api/contact"))
        .json(&submission())
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["issueUrl"], "https://github.com/owner/repo/issues/42");
    assert_eq!(body["issueNumber"], 42);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn contact_endpoint_without_credentials_returns_config_error() -> Result<()> {
    let (_tracker, hits) = spawn_fake_tracker(false)?;
    let site = spawn_site(None)?;

    let response = reqwest::Client::new()
        .post(format!("{site}/api/contact"))
        .json(&submission())
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "Server configuration error");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn contact_endpoint_maps_upstream_rejection_to_generic_error() -> Result<()> {
    let (tracker, hits) = spawn_fake_tracker(true)?;
    let bridge = ContactBridge::new("test-token".to_string(), "owner/repo".to_string(), 5)?
        .with_api_base(tracker);
    let site = spawn_site(Some(bridge))?;

    let response = reqwest::Client::new()
        .post(format!("{site}/api/contact"))
        .json(&submission())
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["error"], "Failed to create issue");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn custom_labels_are_forwarded() -> Result<()> {
    let (base, _hits) = spawn_fake_tracker(false)?;
    let bridge = ContactBridge::new("test-token".to_string(), "owner/repo".to_string(), 5)?
        .with_api_base(base);

    let mut with_labels = submission();
    with_labels.labels = Some(vec!["bug".to_string(), "data".to_string()]);
    let issue = bridge.submit(&with_labels).await?;
    assert_eq!(issue.issue_number, 42);
    Ok(())
}
