//! HTTP Handlers
//!
//! One handler per route. Each delegates to a core service and serializes
//! the result; errors go through [`to_api_error`].

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use std::sync::Arc;
use tracing::info;
use waitlist_core::application::waitlist::{join::JOINED_MESSAGE, leave::LEFT_MESSAGE};
use waitlist_core::application::{CatalogService, WaitlistService};

use crate::error::{message, to_api_error, to_api_error_with, ApiError};
use crate::types::{
    JoinQueueResponse, MenuItem, MessageResponse, QueueOverview, QueueRequest, QueueStanding,
    Venue,
};

pub const LIVENESS_TEXT: &str = "The server is working";

/// Shared handler state with injected services
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub waitlist: Arc<WaitlistService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogService>, waitlist: Arc<WaitlistService>) -> Self {
        Self { catalog, waitlist }
    }
}

/// GET /
pub async fn liveness() -> &'static str {
    LIVENESS_TEXT
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> Result<Json<Vec<Venue>>, ApiError> {
    let venues = state
        .catalog
        .list_venues()
        .await
        .map_err(|e| to_api_error("list_venues", e))?;

    Ok(Json(venues))
}

/// GET /menu_items/:venue_id
pub async fn list_menu_items(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = state
        .catalog
        .list_menu_items(&venue_id)
        .await
        .map_err(|e| to_api_error("list_menu_items", e))?;

    Ok(Json(items))
}

/// GET /queue_overview/:venue_id
pub async fn queue_overview(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> Result<Json<QueueOverview>, ApiError> {
    let overview = state
        .waitlist
        .queue_overview(&venue_id)
        .await
        .map_err(|e| to_api_error("queue_overview", e))?;

    Ok(Json(overview))
}

/// GET /queue_status/:user_id/:venue_id
pub async fn queue_status(
    State(state): State<AppState>,
    Path((user_id, venue_id)): Path<(String, String)>,
) -> Result<Json<QueueStanding>, ApiError> {
    let standing = state
        .waitlist
        .queue_status(&user_id, &venue_id)
        .await
        .map_err(|e| to_api_error("queue_status", e))?;

    Ok(Json(standing))
}

/// POST /join_queue
pub async fn join_queue(
    State(state): State<AppState>,
    payload: Result<Json<QueueRequest>, JsonRejection>,
) -> Result<Json<JoinQueueResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let user_id = req.user_id.into_string();
    let venue_id = req.venue_id.into_string();

    let position = state
        .waitlist
        .join_queue(&user_id, &venue_id)
        .await
        .map_err(|e| to_api_error("join_queue", e))?;

    info!(%user_id, %venue_id, position, "User joined queue");
    Ok(Json(JoinQueueResponse {
        message: JOINED_MESSAGE.to_string(),
        position,
    }))
}

/// POST /leave_queue
pub async fn leave_queue(
    State(state): State<AppState>,
    payload: Result<Json<QueueRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let user_id = req.user_id.into_string();
    let venue_id = req.venue_id.into_string();

    state
        .waitlist
        .leave_queue(&user_id, &venue_id)
        .await
        .map_err(|e| to_api_error_with("leave_queue", message::NOT_IN_QUEUE_OR_LEFT, e))?;

    info!(%user_id, %venue_id, "User left queue");
    Ok(Json(MessageResponse {
        message: LEFT_MESSAGE.to_string(),
    }))
}
