use crate::model::{id::RoomId, reservation::ReservationStatus};
use crate::repository::reservation::ReservationRepository;
use chrono::NaiveDate;
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

/// Decides whether a room can be reserved for a half-open date range
/// `[start_date, end_date)`. Purely a read: the answer reflects store
/// state at query time and offers no isolation guarantee by itself;
/// the storage-level exclusion guard is authoritative on approval.
#[derive(new)]
pub struct AvailabilityService {
    repository: Arc<dyn ReservationRepository>,
}

impl AvailabilityService {
    pub async fn is_available(
        &self,
        room_id: RoomId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<bool> {
        if end_date <= start_date {
            return Err(AppError::UnprocessableEntity(
                "Start date must be at least 1 day earlier than end date".into(),
            ));
        }

        let conflicting = self
            .repository
            .find_conflicting(room_id, start_date, end_date, ReservationStatus::Approved)
            .await?;
        if conflicting.is_empty() {
            return Ok(true);
        }

        tracing::info!(%room_id, ?conflicting, "room unavailable, overlapping approved reservations");
        Ok(false)
    }
}
