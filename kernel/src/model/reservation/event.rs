use crate::model::id::{ReservationId, RoomId, UserId};
use crate::model::reservation::ReservationStatus;
use chrono::NaiveDate;
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateReservation {
    pub user_id: UserId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Clients must not assign a status themselves; a create request
    /// carrying one is rejected.
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Default, new)]
pub struct ReservationFilter {
    pub room_id: Option<RoomId>,
    pub user_id: Option<UserId>,
    pub page_size: Option<i64>,
    pub page_number: Option<i64>,
}
