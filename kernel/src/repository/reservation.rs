use crate::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

/// Durable store for reservation records.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_by_id(&self, id: ReservationId) -> AppResult<Option<Reservation>>;

    /// Page through reservations, optionally narrowed by room and user.
    /// Results are ordered by id.
    async fn search(
        &self,
        room_id: Option<RoomId>,
        user_id: Option<UserId>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Reservation>>;

    /// Insert when the id is absent, full replace otherwise.
    async fn save(&self, reservation: Reservation) -> AppResult<Reservation>;

    /// Atomic conditional status flip: the row is updated only if its
    /// current status equals `from`. Fails with `UnprocessableEntity`
    /// when the precondition no longer holds, and with
    /// `ReservationConflict` when flipping to APPROVED would overlap
    /// another approved reservation (storage-level exclusion guard).
    async fn set_status(
        &self,
        id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> AppResult<()>;

    /// Ids of reservations with the given status on the room whose
    /// half-open date range overlaps `[start_date, end_date)`.
    async fn find_conflicting(
        &self,
        room_id: RoomId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ReservationStatus,
    ) -> AppResult<Vec<ReservationId>>;
}
