use crate::model::reservation::{
    CreateReservationRequest, ReservationListQuery, ReservationResponse, ReservationsResponse,
    UpdateReservationRequest, UpdateReservationRequestWithId,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::id::ReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    tracing::info!(%reservation_id, "called show_reservation");
    let reservation = registry
        .reservation_service()
        .find_by_id(reservation_id)
        .await?;
    Ok(Json(reservation.try_into()?))
}

pub async fn show_reservation_list(
    Query(query): Query<ReservationListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    tracing::info!("called show_reservation_list");
    query.validate(&())?;

    let reservations = registry.reservation_service().search(query.into()).await?;
    Ok(Json(reservations.try_into()?))
}

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("called register_reservation");
    req.validate(&())?;

    let saved = registry.reservation_service().create(req.into()).await?;
    let response: ReservationResponse = saved.try_into()?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    tracing::info!(%reservation_id, "called update_reservation");
    req.validate(&())?;

    let event = UpdateReservationRequestWithId::new(reservation_id, req);
    let updated = registry
        .reservation_service()
        .update(event.into())
        .await?;
    Ok(Json(updated.try_into()?))
}

pub async fn cancel_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    tracing::info!(%reservation_id, "called cancel_reservation");
    registry
        .reservation_service()
        .cancel(reservation_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn approve_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    tracing::info!(%reservation_id, "called approve_reservation");
    let approved = registry
        .reservation_service()
        .approve(reservation_id)
        .await?;
    Ok(Json(approved.try_into()?))
}
