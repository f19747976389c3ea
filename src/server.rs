use crate::catalog::Catalog;
use crate::config::Config;
use crate::contact::{ContactBridge, ContactSubmission};
use crate::error::CatalogError;
use crate::sitemap::build_sitemap;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Extension, Json as AxumJson, Router,
};
use hyper::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, warn};

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "alt-catalog",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Serves the full sitemap as XML, regenerated on every request.
async fn sitemap(
    Extension(catalog): Extension<Arc<Catalog>>,
    Extension(config): Extension<Arc<Config>>,
) -> impl IntoResponse {
    let xml = build_sitemap(&catalog, &config.site.base_url);
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}

/// Forwards a contact submission to the issue tracker. The three failure
/// classes (missing config, upstream rejection, anything else) each get a
/// distinct message but share the 500 status; raw detail is only logged.
async fn contact(
    Extension(bridge): Extension<Option<Arc<ContactBridge>>>,
    payload: Result<AxumJson<ContactSubmission>, JsonRejection>,
) -> impl IntoResponse {
    let AxumJson(submission) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            error!(%rejection, "malformed contact payload");
            return error_response("Internal server error");
        }
    };

    // Without credentials no bridge exists and no outbound call is made
    let Some(bridge) = bridge else {
        error!("contact bridge misconfigured");
        return error_response("Server configuration error");
    };

    match bridge.submit(&submission).await {
        Ok(issue) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "issueUrl": issue.issue_url,
                "issueNumber": issue.issue_number,
            })),
        ),
        Err(CatalogError::Api { .. }) => error_response("Failed to create issue"),
        Err(e) => {
            error!(%e, "contact submission failed");
            error_response("Internal server error")
        }
    }
}

fn error_response(message: &str) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": message })),
    )
}

/// Create the HTTP server with all routes. `bridge` is `None` when the
/// deployment secrets are absent; the contact route then answers with the
/// configuration-error response.
pub fn create_server(
    catalog: Arc<Catalog>,
    config: Arc<Config>,
    bridge: Option<Arc<ContactBridge>>,
) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap))
        .route("/api/contact", post(contact))
        .layer(Extension(catalog))
        .layer(Extension(config))
        .layer(Extension(bridge))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the configured port. The contact bridge and its
/// HTTP client are built once here and shared across requests.
pub async fn start_server(catalog: Arc<Catalog>, config: Arc<Config>) -> anyhow::Result<()> {
    let bridge = match ContactBridge::from_env(config.contact.timeout_seconds) {
        Ok(bridge) => Some(Arc::new(bridge)),
        Err(e) => {
            warn!(%e, "contact bridge disabled");
            None
        }
    };

    let port = config.server.port;
    let app = create_server(catalog, config, bridge);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("🚀 HTTP server running on http://localhost:{port}");
    println!("💚 Health check: http://localhost:{port}/health");
    println!("🗺️  Sitemap:      http://localhost:{port}/sitemap.xml");
    println!("✉️  Contact:      POST http://localhost:{port}/api/contact");

    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
