//! Petfolio HTTP Server
//!
//! Pet registry API server using Axum.
//!
//! # Endpoints
//!
//! - `GET /pet/{id}`
//!   - Returns the pet record for the given identifier as JSON.
//! - `GET /openapi.json` (development only)
//!   - Returns the generated `OpenAPI` document.
//! - `GET /api-docs` (development only)
//!   - Returns an HTML API reference page.
//!
//! # Conventions
//!
//! Request paths are lowercased before routing, so `/PET/7` matches
//! `/pet/{id}`. Requests that arrive over plain HTTP behind a proxy
//! (`x-forwarded-proto: http`) are redirected to the `https` scheme before
//! any route handler runs.

use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, Environment};
use crate::{docs, routes};

/// Command-line arguments for the server.
#[derive(Parser)]
#[command(name = "petfolio-server", version, about = "Petfolio HTTP API Server")]
struct Args {
    /// Port to listen on.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Runtime environment; overrides PETFOLIO_ENVIRONMENT when set.
    #[arg(long, value_enum)]
    environment: Option<Environment>,
}

/// The routed application with the lowercase-URL rewrite applied in front.
///
/// The rewrite must wrap the whole router: middleware added with
/// `Router::layer` runs after routing has already matched a path, too late
/// to change which route is selected.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Lowercases the request path before routing.
///
/// The query string is left untouched. Paths that fail to re-parse after
/// lowercasing keep their original form.
fn lowercase_request_path(mut req: Request) -> Request {
    let uri = req.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let mut lowered = uri.path().to_ascii_lowercase();
    if let Some(query) = uri.query() {
        lowered.push('?');
        lowered.push_str(query);
    }

    if let Ok(path_and_query) = lowered.parse::<PathAndQuery>() {
        let mut parts = uri.clone().into_parts();
        parts.path_and_query = Some(path_and_query);
        if let Ok(new_uri) = Uri::from_parts(parts) {
            *req.uri_mut() = new_uri;
        }
    }
    req
}

/// Redirects proxied plain-HTTP traffic to the `https` scheme.
///
/// Applies to requests carrying `x-forwarded-proto: http`; direct traffic
/// without the header passes through, as does anything already forwarded
/// as `https`. Uses a 308 so the method is preserved.
async fn https_redirect(req: Request, next: Next) -> Response {
    let forwarded_as_http = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|proto| proto.eq_ignore_ascii_case("http"));

    if forwarded_as_http {
        let host = req
            .headers()
            .get(header::HOST)
            .and_then(|value| value.to_str().ok());
        return match host {
            Some(host) => {
                Redirect::permanent(&format!("https://{host}{}", req.uri())).into_response()
            }
            // No Host header means the redirect target cannot be formed.
            None => StatusCode::BAD_REQUEST.into_response(),
        };
    }

    next.run(req).await
}

/// Creates the application service with all routes configured.
///
/// This function is separated from `run` to enable integration testing
/// without requiring a live server.
///
/// The documentation endpoints are only registered when the configured
/// environment is development; elsewhere those paths fall through to the
/// default 404 handler.
pub fn create_app(config: Config) -> App {
    let mut router = Router::new().route("/pet/{id}", get(routes::get_pet));

    if config.environment.is_development() {
        router = router
            .route("/openapi.json", get(docs::openapi_json))
            .route("/api-docs", get(docs::reference_page));
    }

    let router = router
        .layer(middleware::from_fn(https_redirect))
        .layer(TraceLayer::new_for_http());

    MapRequestLayer::new(lowercase_request_path as fn(Request) -> Request).layer(router)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main server entry point.
///
/// Parses CLI arguments, resolves the environment, and starts the HTTP
/// server. Startup failures (such as a port that cannot be bound) are
/// fatal.
pub async fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let environment = args.environment.unwrap_or_else(Environment::from_env);
    let config = Config {
        environment,
        port: args.port,
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting Petfolio server"
    );
    if config.environment.is_development() {
        tracing::info!("API documentation available at /api-docs");
    }

    let app = create_app(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.port, e))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, axum::ServiceExt::<Request>::into_make_service(app))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
