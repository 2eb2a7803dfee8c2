pub mod availability;
pub mod booking;
pub mod catalog;
pub mod health;
