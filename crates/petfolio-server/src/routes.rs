//! Pet API routes.
//!
//! ## Routes
//!
//! - `GET /pet/{id}` - Get a pet by identifier
//!
//! There is no store yet, so the lookup always succeeds and returns the
//! placeholder record from `petfolio-core` with the identifier echoed back.

use axum::extract::Path;
use axum::Json;
use petfolio_core::PetRecord;

/// Get a pet by identifier.
///
/// Route: `GET /pet/{id}`
///
/// Accepts any `i64`, including zero and negative values. Non-integer path
/// segments are rejected by the extractor with `400 Bad Request`.
#[utoipa::path(
    get,
    path = "/pet/{id}",
    tag = "pet",
    params(
        ("id" = i64, Path, description = "Pet identifier (echoed back, not looked up)"),
    ),
    responses(
        (status = 200, description = "Pet record", body = PetRecord),
        (status = 400, description = "Identifier is not an integer"),
    ),
)]
pub(crate) async fn get_pet(Path(id): Path<i64>) -> Json<PetRecord> {
    tracing::debug!(id, "Fetching pet");
    Json(petfolio_core::get_by_id(id))
}
