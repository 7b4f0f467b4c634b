use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

// SQLSTATE raised when the write violates the no-overlapping-approved
// exclusion constraint. That constraint is the authoritative guard for
// concurrent approvals; the in-core availability check is only a fast
// path.
const EXCLUSION_VIOLATION: &str = "23P01";

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn find_by_id(&self, id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, user_id, room_id, start_date, end_date, status
                FROM reservations
                WHERE reservation_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Reservation::from))
    }

    async fn search(
        &self,
        room_id: Option<RoomId>,
        user_id: Option<UserId>,
        limit: i64,
        offset: i64,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, user_id, room_id, start_date, end_date, status
                FROM reservations
                WHERE ($1::BIGINT IS NULL OR room_id = $1)
                  AND ($2::BIGINT IS NULL OR user_id = $2)
                ORDER BY reservation_id
                LIMIT $3 OFFSET $4
            "#,
        )
        .bind(room_id)
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn save(&self, reservation: Reservation) -> AppResult<Reservation> {
        match reservation.id {
            None => {
                let reservation_id: ReservationId = sqlx::query_scalar(
                    r#"
                        INSERT INTO reservations (user_id, room_id, start_date, end_date, status)
                        VALUES ($1, $2, $3, $4, $5)
                        RETURNING reservation_id
                    "#,
                )
                .bind(reservation.user_id)
                .bind(reservation.room_id)
                .bind(reservation.start_date)
                .bind(reservation.end_date)
                .bind(reservation.status)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(map_write_error)?;

                Ok(Reservation {
                    id: Some(reservation_id),
                    ..reservation
                })
            }
            Some(id) => {
                let res = sqlx::query(
                    r#"
                        UPDATE reservations
                        SET user_id = $2,
                            room_id = $3,
                            start_date = $4,
                            end_date = $5,
                            status = $6
                        WHERE reservation_id = $1
                    "#,
                )
                .bind(id)
                .bind(reservation.user_id)
                .bind(reservation.room_id)
                .bind(reservation.start_date)
                .bind(reservation.end_date)
                .bind(reservation.status)
                .execute(self.db.inner_ref())
                .await
                .map_err(map_write_error)?;

                if res.rows_affected() < 1 {
                    return Err(AppError::NoRowsAffectedError(format!(
                        "no reservation record updated for id = {id}"
                    )));
                }

                Ok(reservation)
            }
        }
    }

    async fn set_status(
        &self,
        id: ReservationId,
        from: ReservationStatus,
        to: ReservationStatus,
    ) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET status = $3
                WHERE reservation_id = $1 AND status = $2
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .execute(self.db.inner_ref())
        .await
        .map_err(map_write_error)?;

        // Zero rows means the status changed under us (or the row is
        // gone); the caller's precondition read is stale either way.
        if res.rows_affected() < 1 {
            return Err(AppError::UnprocessableEntity(format!(
                "reservation {id} is no longer {from}"
            )));
        }

        Ok(())
    }

    async fn find_conflicting(
        &self,
        room_id: RoomId,
        start_date: NaiveDate,
        end_date: NaiveDate,
        status: ReservationStatus,
    ) -> AppResult<Vec<ReservationId>> {
        sqlx::query_scalar(
            r#"
                SELECT reservation_id
                FROM reservations
                WHERE room_id = $1
                  AND status = $2
                  AND start_date < $4
                  AND $3 < end_date
            "#,
        )
        .bind(room_id)
        .bind(status)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)
    }
}

fn map_write_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(EXCLUSION_VIOLATION) => {
            AppError::ReservationConflict(
                "room is already reserved for an overlapping date range".into(),
            )
        }
        _ => AppError::SpecificOperationError(e),
    }
}
