use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{AvailabilityWindow, BusinessHours, DayHours, TimeSlot};

/// Decides whether the shop is open on `date` and which slots it offers.
///
/// Pure function of its inputs: there is no notion of "now", so a date that
/// is today gets its full slot list even after closing time. Rejecting past
/// dates is the caller's job.
pub fn compute_availability(date: NaiveDate, hours: &BusinessHours) -> AvailabilityWindow {
    match hours.hours_for(date.weekday()) {
        Some(day) => AvailabilityWindow {
            date,
            is_open: true,
            hours: Some(day),
            slots: generate_slots(day, hours.slot_minutes),
        },
        None => AvailabilityWindow::closed(date),
    }
}

fn generate_slots(day: DayHours, slot_minutes: u32) -> Vec<TimeSlot> {
    if slot_minutes == 0 {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(slot_minutes));
    let mut slots = Vec::new();
    let mut start = day.open;

    loop {
        let (end, wrapped) = start.overflowing_add_signed(step);
        // A slot must finish by closing time and never spill past midnight.
        if wrapped != 0 || end > day.close {
            break;
        }
        slots.push(TimeSlot::new(start, end));
        start = end;
    }

    slots
}
