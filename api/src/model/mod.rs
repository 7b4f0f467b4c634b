pub mod availability;
pub mod reservation;
