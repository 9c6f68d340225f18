//! `OpenAPI` documentation endpoints.
//!
//! Only registered when the server runs in the development environment:
//!
//! - `GET /openapi.json` - the generated `OpenAPI` document
//! - `GET /api-docs` - an HTML reference page rendering the document
//!
//! The reference page title is derived from caller identity headers. This
//! is cosmetic only; no authorization is enforced on the documentation.

use axum::http::HeaderMap;
use axum::response::Html;
use axum::Json;
use utoipa::OpenApi;

/// `OpenAPI` documentation for the Petfolio API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Petfolio API",
        version = "v1.0",
        description = "API de registro do seu Pet",
        contact(name = "Projeto de Desenvolvimento Petfolio")
    ),
    paths(crate::routes::get_pet),
    components(schemas(petfolio_core::PetRecord, petfolio_core::PetType)),
    tags(
        (name = "pet", description = "Pet registry operations"),
    )
)]
pub struct ApiDoc;

/// HTML shell for the reference page; `%TITLE%` is filled per request.
const REFERENCE_PAGE: &str = include_str!("api_docs.html");

/// Handler for the generated `OpenAPI` document.
///
/// Route: `GET /openapi.json`
pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Handler for the HTML API reference page.
///
/// Route: `GET /api-docs`
///
/// The page title reflects whether the caller carries an administrative
/// role marker (`x-user-role: admin`) and the caller's display name
/// (`x-user-name`) when present. Purely cosmetic.
pub(crate) async fn reference_page(headers: HeaderMap) -> Html<String> {
    Html(REFERENCE_PAGE.replace("%TITLE%", &page_title(&headers)))
}

fn page_title(headers: &HeaderMap) -> String {
    let is_admin = headers
        .get("x-user-role")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|roles| {
            roles
                .split(',')
                .any(|role| role.trim().eq_ignore_ascii_case("admin"))
        });
    let audience = if is_admin { "Admin Api" } else { "Public Api" };

    match headers
        .get("x-user-name")
        .and_then(|value| value.to_str().ok())
        .filter(|name| !name.trim().is_empty())
    {
        Some(name) => format!("{audience} - Petfolio Api Documentation for {name}"),
        None => format!("{audience} - Petfolio Api Documentation"),
    }
}
