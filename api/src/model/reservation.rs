use chrono::{Local, NaiveDate};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{
        event::{CreateReservation, ReservationFilter, UpdateReservation},
        Reservation, ReservationStatus,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

fn future_or_present(value: &NaiveDate, _ctx: &()) -> garde::Result {
    if *value < Local::now().date_naive() {
        return Err(garde::Error::new("date must be today or later"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(custom(future_or_present))]
    pub start_date: NaiveDate,
    #[garde(custom(future_or_present))]
    pub end_date: NaiveDate,
    // Rejected by the core when present; accepted here so the error
    // is the domain one rather than a deserialization failure.
    #[garde(skip)]
    pub status: Option<ReservationStatus>,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
            user_id,
            room_id,
            start_date,
            end_date,
            status,
        } = value;
        CreateReservation {
            user_id,
            room_id,
            start_date,
            end_date,
            status,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRequest {
    #[garde(skip)]
    pub user_id: UserId,
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(custom(future_or_present))]
    pub start_date: NaiveDate,
    #[garde(custom(future_or_present))]
    pub end_date: NaiveDate,
    // Ignored: the core re-forces PENDING on every update.
    #[garde(skip)]
    pub status: Option<ReservationStatus>,
}

#[derive(new)]
pub struct UpdateReservationRequestWithId(ReservationId, UpdateReservationRequest);

impl From<UpdateReservationRequestWithId> for UpdateReservation {
    fn from(value: UpdateReservationRequestWithId) -> Self {
        let UpdateReservationRequestWithId(reservation_id, request) = value;
        UpdateReservation {
            reservation_id,
            user_id: request.user_id,
            room_id: request.room_id,
            start_date: request.start_date,
            end_date: request.end_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListQuery {
    #[garde(skip)]
    pub room_id: Option<RoomId>,
    #[garde(skip)]
    pub user_id: Option<UserId>,
    #[garde(range(min = 1))]
    pub page_size: Option<i64>,
    #[garde(range(min = 0))]
    pub page_number: Option<i64>,
}

impl From<ReservationListQuery> for ReservationFilter {
    fn from(value: ReservationListQuery) -> Self {
        let ReservationListQuery {
            room_id,
            user_id,
            page_size,
            page_number,
        } = value;
        ReservationFilter {
            room_id,
            user_id,
            page_size,
            page_number,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
}

impl TryFrom<Reservation> for ReservationResponse {
    type Error = AppError;

    fn try_from(value: Reservation) -> Result<Self, Self::Error> {
        let Reservation {
            id,
            user_id,
            room_id,
            start_date,
            end_date,
            status,
        } = value;
        let id = id.ok_or_else(|| {
            AppError::ConversionEntityError("reservation record has no id".into())
        })?;
        Ok(Self {
            id,
            user_id,
            room_id,
            start_date,
            end_date,
            status,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl TryFrom<Vec<Reservation>> for ReservationsResponse {
    type Error = AppError;

    fn try_from(value: Vec<Reservation>) -> Result<Self, Self::Error> {
        let items = value
            .into_iter()
            .map(ReservationResponse::try_from)
            .collect::<Result<_, _>>()?;
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn create_request_parses_camel_case_json() {
        let req: CreateReservationRequest = serde_json::from_str(
            r#"{
                "userId": 1,
                "roomId": 5,
                "startDate": "2025-06-01",
                "endDate": "2025-06-05"
            }"#,
        )
        .unwrap();
        assert_eq!(req.user_id, UserId::new(1));
        assert_eq!(req.room_id, RoomId::new(5));
        assert!(req.status.is_none());
    }

    #[test]
    fn create_request_accepts_status_field_for_core_rejection() {
        let req: CreateReservationRequest = serde_json::from_str(
            r#"{
                "userId": 1,
                "roomId": 5,
                "startDate": "2025-06-01",
                "endDate": "2025-06-05",
                "status": "APPROVED"
            }"#,
        )
        .unwrap();
        assert_eq!(req.status, Some(ReservationStatus::Approved));
    }

    #[test]
    fn past_dates_fail_validation() {
        let today = Local::now().date_naive();
        let req = CreateReservationRequest {
            user_id: UserId::new(1),
            room_id: RoomId::new(5),
            start_date: today - Duration::days(1),
            end_date: today + Duration::days(1),
            status: None,
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn today_or_later_passes_validation() {
        let today = Local::now().date_naive();
        let req = CreateReservationRequest {
            user_id: UserId::new(1),
            room_id: RoomId::new(5),
            start_date: today,
            end_date: today + Duration::days(3),
            status: None,
        };
        assert!(req.validate(&()).is_ok());
    }

    #[test]
    fn list_query_rejects_non_positive_page_size() {
        let query = ReservationListQuery {
            room_id: None,
            user_id: None,
            page_size: Some(0),
            page_number: None,
        };
        assert!(query.validate(&()).is_err());
    }

    #[test]
    fn response_serializes_status_upper_case() {
        let response = ReservationResponse {
            id: ReservationId::new(1),
            user_id: UserId::new(1),
            room_id: RoomId::new(5),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            status: ReservationStatus::Pending,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["roomId"], 5);
    }

    #[test]
    fn unsaved_reservation_cannot_become_a_response() {
        let reservation = Reservation {
            id: None,
            user_id: UserId::new(1),
            room_id: RoomId::new(5),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            status: ReservationStatus::Pending,
        };
        assert!(ReservationResponse::try_from(reservation).is_err());
    }
}
