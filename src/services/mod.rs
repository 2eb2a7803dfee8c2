pub mod booking_form;
pub mod catalog;
pub mod clock;
pub mod handoff;
pub mod scheduling;
