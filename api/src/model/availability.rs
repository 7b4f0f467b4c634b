use chrono::NaiveDate;
use kernel::model::id::RoomId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityQuery {
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityResponse {
    pub message: String,
    pub status: AvailabilityStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Available,
    Reserved,
}

impl CheckAvailabilityResponse {
    pub fn from_availability(available: bool) -> Self {
        if available {
            Self {
                message: "Room available to reservation".into(),
                status: AvailabilityStatus::Available,
            }
        } else {
            Self {
                message: "Room not available to reservation".into(),
                status: AvailabilityStatus::Reserved,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parses_camel_case_params() {
        let query: CheckAvailabilityQuery =
            serde_json::from_str(r#"{"roomId": 7, "startDate": "2025-03-14", "endDate": "2025-03-20"}"#)
                .unwrap();
        assert_eq!(query.room_id, RoomId::new(7));
    }

    #[test]
    fn response_reports_reserved_when_unavailable() {
        let response = CheckAvailabilityResponse::from_availability(false);
        assert_eq!(response.status, AvailabilityStatus::Reserved);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "RESERVED");
    }
}
