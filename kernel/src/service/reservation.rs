use crate::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, ReservationFilter, UpdateReservation},
        Reservation, ReservationStatus,
    },
};
use crate::repository::reservation::ReservationRepository;
use crate::service::availability::AvailabilityService;
use chrono::NaiveDate;
use derive_new::new;
use shared::error::{AppError, AppResult};
use std::sync::Arc;

const DEFAULT_PAGE_SIZE: i64 = 10;
const DEFAULT_PAGE_NUMBER: i64 = 0;

/// The reservation lifecycle: PENDING -> APPROVED | CANCELLED.
///
/// Approval is guarded by the availability check; an approved
/// reservation cannot be cancelled through this service (manual
/// intervention by a manager is required), and only pending ones
/// can be modified.
#[derive(new)]
pub struct ReservationService {
    repository: Arc<dyn ReservationRepository>,
    availability: Arc<AvailabilityService>,
}

impl ReservationService {
    pub async fn find_by_id(&self, id: ReservationId) -> AppResult<Reservation> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound(format!("Not found reservation by id = {id}")))
    }

    pub async fn search(&self, filter: ReservationFilter) -> AppResult<Vec<Reservation>> {
        let page_size = filter.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let page_number = filter.page_number.unwrap_or(DEFAULT_PAGE_NUMBER);
        self.repository
            .search(
                filter.room_id,
                filter.user_id,
                page_size,
                page_size * page_number,
            )
            .await
    }

    pub async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        if event.status.is_some() {
            return Err(AppError::InvalidRequest("status should be empty".into()));
        }
        validate_date_order(event.start_date, event.end_date)?;

        let reservation = Reservation {
            id: None,
            user_id: event.user_id,
            room_id: event.room_id,
            start_date: event.start_date,
            end_date: event.end_date,
            status: ReservationStatus::Pending,
        };
        self.repository.save(reservation).await
    }

    pub async fn update(&self, event: UpdateReservation) -> AppResult<Reservation> {
        let current = self.find_by_id(event.reservation_id).await?;
        if current.status != ReservationStatus::Pending {
            return Err(AppError::UnprocessableEntity(format!(
                "Cannot modify reservation: status = {}",
                current.status
            )));
        }
        validate_date_order(event.start_date, event.end_date)?;

        // Identity is preserved and the status is re-forced to PENDING
        // regardless of what the client sent.
        let reservation = Reservation {
            id: current.id,
            user_id: event.user_id,
            room_id: event.room_id,
            start_date: event.start_date,
            end_date: event.end_date,
            status: ReservationStatus::Pending,
        };
        self.repository.save(reservation).await
    }

    pub async fn cancel(&self, id: ReservationId) -> AppResult<()> {
        let current = self.find_by_id(id).await?;
        match current.status {
            ReservationStatus::Approved => Err(AppError::UnprocessableEntity(
                "Cannot cancel approved reservation. Contact with manager".into(),
            )),
            ReservationStatus::Cancelled => Err(AppError::UnprocessableEntity(
                "Cannot cancel reservation: it has already been cancelled".into(),
            )),
            ReservationStatus::Pending => {
                self.repository
                    .set_status(id, ReservationStatus::Pending, ReservationStatus::Cancelled)
                    .await?;
                tracing::info!(%id, "successfully cancelled reservation");
                Ok(())
            }
        }
    }

    pub async fn approve(&self, id: ReservationId) -> AppResult<Reservation> {
        let mut current = self.find_by_id(id).await?;
        if current.status != ReservationStatus::Pending {
            return Err(AppError::UnprocessableEntity(format!(
                "Cannot approve reservation: status = {}",
                current.status
            )));
        }

        // Fast-path check; the store's exclusion guard has the final
        // word when the conditional write below lands.
        let available = self
            .availability
            .is_available(current.room_id, current.start_date, current.end_date)
            .await?;
        if !available {
            return Err(AppError::ReservationConflict(format!(
                "Cannot approve reservation {id}: room {} is already reserved for the requested dates",
                current.room_id
            )));
        }

        self.repository
            .set_status(id, ReservationStatus::Pending, ReservationStatus::Approved)
            .await?;
        current.status = ReservationStatus::Approved;
        Ok(current)
    }
}

fn validate_date_order(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<()> {
    if end_date <= start_date {
        return Err(AppError::UnprocessableEntity(
            "Start date must be at least 1 day earlier than end date".into(),
        ));
    }
    Ok(())
}
