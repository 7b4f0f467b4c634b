use crate::model::id::{ReservationId, RoomId, UserId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod event;

/// A request to occupy a room for a date range, tracked through a
/// status lifecycle. The date range is half-open: `end_date` itself is
/// not occupied, so back-to-back reservations sharing a boundary date
/// do not conflict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// None until the record is first persisted, immutable afterwards.
    pub id: Option<ReservationId>,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "reservation_status", rename_all = "UPPERCASE")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Cancelled,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Approved => "APPROVED",
            ReservationStatus::Cancelled => "CANCELLED",
        };
        write!(f, "{s}")
    }
}
