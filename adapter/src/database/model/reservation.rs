use chrono::NaiveDate;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
};

#[derive(Debug, sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ReservationStatus,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            user_id,
            room_id,
            start_date,
            end_date,
            status,
        } = value;
        Reservation {
            id: Some(reservation_id),
            user_id,
            room_id,
            start_date,
            end_date,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_persisted_reservation() {
        let row = ReservationRow {
            reservation_id: ReservationId::new(3),
            user_id: UserId::new(1),
            room_id: RoomId::new(5),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
            status: ReservationStatus::Approved,
        };
        let reservation = Reservation::from(row);
        assert_eq!(reservation.id, Some(ReservationId::new(3)));
        assert_eq!(reservation.status, ReservationStatus::Approved);
    }
}
