//! HTTP API for Prandaan Connect.
//!
//! Exposes donor and recipient registration plus read-only views of the
//! registry. Every registration rebuilds the match set before responding.

mod error;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use prandaan_registry::{NewDonor, NewRecipient, SharedRegistry, Stats};
use prandaan_types::{Donor, Match, Recipient};
use serde::{Deserialize, Serialize};

pub use error::{ApiError, ErrorBody};

/// Response to a successful donor registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DonorCreated {
    pub message: String,
    pub donor: Donor,
}

/// Response to a successful recipient registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RecipientCreated {
    pub message: String,
    pub recipient: Recipient,
}

async fn list_donors(State(registry): State<SharedRegistry>) -> Result<Json<Vec<Donor>>, ApiError> {
    Ok(Json(registry.donors()?))
}

async fn register_donor(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<NewDonor>, JsonRejection>,
) -> Result<(StatusCode, Json<DonorCreated>), ApiError> {
    let Json(payload) = payload?;
    let donor = registry.register_donor(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(DonorCreated {
            message: "Donor registered successfully!".to_string(),
            donor,
        }),
    ))
}

async fn list_recipients(
    State(registry): State<SharedRegistry>,
) -> Result<Json<Vec<Recipient>>, ApiError> {
    Ok(Json(registry.recipients()?))
}

async fn register_recipient(
    State(registry): State<SharedRegistry>,
    payload: Result<Json<NewRecipient>, JsonRejection>,
) -> Result<(StatusCode, Json<RecipientCreated>), ApiError> {
    let Json(payload) = payload?;
    let recipient = registry.register_recipient(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(RecipientCreated {
            message: "Recipient registered successfully!".to_string(),
            recipient,
        }),
    ))
}

async fn list_matches(State(registry): State<SharedRegistry>) -> Result<Json<Vec<Match>>, ApiError> {
    Ok(Json(registry.matches()?))
}

async fn stats(State(registry): State<SharedRegistry>) -> Result<Json<Stats>, ApiError> {
    Ok(Json(registry.stats()?))
}

/// Build the HTTP API router over the given registry.
pub fn build_router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/api/donors", get(list_donors).post(register_donor))
        .route("/api/recipients", get(list_recipients).post(register_recipient))
        .route("/api/matches", get(list_matches))
        .route("/api/stats", get(stats))
        .with_state(registry)
}
