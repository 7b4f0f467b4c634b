use crate::model::availability::{CheckAvailabilityQuery, CheckAvailabilityResponse};
use axum::{
    extract::{Query, State},
    Json,
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn check_availability(
    Query(query): Query<CheckAvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CheckAvailabilityResponse>> {
    tracing::info!(?query, "called check_availability");
    let available = registry
        .availability_service()
        .is_available(query.room_id, query.start_date, query.end_date)
        .await?;
    Ok(Json(CheckAvailabilityResponse::from_availability(available)))
}
