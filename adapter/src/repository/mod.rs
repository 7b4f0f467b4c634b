pub mod health;
pub mod reservation;
