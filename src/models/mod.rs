pub mod availability;
pub mod booking;
pub mod service;
pub mod validation;

pub use availability::{AvailabilityWindow, BusinessHours, DayHours, SlotOption, TimeSelector, TimeSlot};
pub use booking::{BookingRequest, Field, FormStatus};
pub use service::{ServiceCategory, ServiceEntry};
pub use validation::{FailureKind, ValidationFailure, ValidationResult};
