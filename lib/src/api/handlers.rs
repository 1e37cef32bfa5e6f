//! Handlers for the delivery endpoints

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::validation;
use crate::{
    error::Error,
    models::{DeliveriesQuery, UpdateStatusRequest},
    services::Services,
};

pub async fn health(State(services): State<Services>) -> impl IntoResponse {
    Json(services.health.check_health().await)
}

pub async fn list_deliveries(
    State(services): State<Services>,
    Query(query): Query<DeliveriesQuery>,
) -> Result<impl IntoResponse, Error> {
    let filters = validation::parse_filters(&query)?;
    let deliveries = services.deliveries.list(&filters).await?;
    Ok(Json(deliveries))
}

pub async fn update_delivery_status(
    State(services): State<Services>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, Error> {
    // Fail-fast validation, status rule first
    let flag = validation::parse_status(payload.status.as_ref())?;
    let deliverer_name = validation::parse_deliverer_name(payload.deliverer_name.as_ref())?;

    let message = services
        .deliveries
        .update_status(id, flag, &deliverer_name)
        .await?;

    Ok(Json(json!({ "message": message })))
}
