use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::api::response::Confirmation;
use crate::app::AppState;
use crate::database::record::label_from_json;
use crate::database::{Airplane, NewAirplane};
use crate::error::{ApiError, ApiResult};

/// GET /airplanes - List every airplane
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Airplane>>> {
    let airplanes = state.store.list().await?;
    debug!("Listed {} airplanes", airplanes.len());
    Ok(Json(airplanes))
}

/// POST /airplanes - Save a new airplane; the store assigns the id
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Confirmation>> {
    let Json(body) = payload.map_err(rejected_body)?;
    let airplane = NewAirplane::from_json(body).map_err(|e| {
        warn!("Rejected airplane create: {}", e);
        ApiError::from(e)
    })?;

    let saved = state.store.insert(airplane).await?;
    info!("Saved airplane {} ({})", saved.id, saved.label());
    Ok(Json(Confirmation::saved(saved.id, &saved.label())))
}

/// GET /airplanes/:id - Get a single airplane by id
pub async fn get(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Airplane>> {
    let id = path_id(raw_id)?;
    match state.store.find_by_id(id).await? {
        Some(airplane) => Ok(Json(airplane)),
        None => Err(ApiError::airplane_not_found(id)),
    }
}

/// PUT /airplanes - Replace every field of an existing airplane
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Confirmation>> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected airplane update body: {}", rejection.body_text());
            return Err(ApiError::invalid_payload(format!(
                "An error occurred while updating the airplane: {}",
                rejection.body_text()
            )));
        }
    };

    let label = label_from_json(&body);
    let airplane = Airplane::from_json(body).map_err(|e| {
        warn!("Rejected airplane update: {}", e);
        ApiError::invalid_payload(format!(
            "An error occurred while updating airplane {}: {}",
            label, e
        ))
    })?;

    let id = airplane.id;
    match state.store.update(airplane).await? {
        Some(updated) => {
            info!("Updated airplane {} ({})", updated.id, updated.label());
            Ok(Json(Confirmation::updated(updated.id, &updated.label())))
        }
        None => Err(ApiError::airplane_not_found(id)),
    }
}

/// DELETE /airplanes/:id - Remove an airplane by id
pub async fn delete(
    State(state): State<AppState>,
    raw_id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Confirmation>> {
    let id = path_id(raw_id)?;
    match state.store.delete(id).await? {
        Some(removed) => {
            info!("Deleted airplane {} ({})", removed.id, removed.label());
            Ok(Json(Confirmation::deleted(removed.id, &removed.label())))
        }
        None => Err(ApiError::airplane_not_found(id)),
    }
}

/// Parse a path identifier; blank or non-integer input is an invalid identifier, never a 404
pub fn parse_id(raw: &str) -> ApiResult<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid_identifier("The identifier is invalid"));
    }
    trimmed
        .parse::<i32>()
        .map_err(|_| ApiError::invalid_identifier(format!("The identifier {} is invalid", raw)))
}

/// Path segments that do not decode (e.g. invalid UTF-8) are invalid identifiers too
fn path_id(raw_id: Result<Path<String>, PathRejection>) -> ApiResult<i32> {
    match raw_id {
        Ok(Path(raw)) => parse_id(&raw),
        Err(rejection) => {
            warn!("Rejected airplane identifier: {}", rejection.body_text());
            Err(ApiError::invalid_identifier("The identifier is invalid"))
        }
    }
}

fn rejected_body(rejection: JsonRejection) -> ApiError {
    warn!("Rejected airplane body: {}", rejection.body_text());
    ApiError::invalid_payload(format!("Invalid data: {}", rejection.body_text()))
}
