use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::availability::TimeSlot;

/// The live state of one booking form. Values are kept exactly as entered;
/// parsing and checking happen in validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone: String,
    pub email: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub service: String,
    pub notes: String,
    pub status: FormStatus,
}

impl BookingRequest {
    /// The preferred date, if it is a real `YYYY-MM-DD` calendar date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.preferred_date.trim(), "%Y-%m-%d").ok()
    }

    pub fn time_slot(&self) -> Option<TimeSlot> {
        self.preferred_time.parse().ok()
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::CustomerName => &mut self.customer_name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::PreferredDate => &mut self.preferred_date,
            Field::PreferredTime => &mut self.preferred_time,
            Field::Service => &mut self.service,
            Field::Notes => &mut self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Validating,
    ReadyToSubmit,
    Submitted,
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Editing => "editing",
            FormStatus::Validating => "validating",
            FormStatus::ReadyToSubmit => "ready_to_submit",
            FormStatus::Submitted => "submitted",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    CustomerName,
    Phone,
    Email,
    PreferredDate,
    PreferredTime,
    Service,
    Notes,
}

impl Field {
    /// Every field that must pass validation before a handoff, in form order.
    pub const REQUIRED: [Field; 6] = [
        Field::CustomerName,
        Field::Phone,
        Field::Email,
        Field::PreferredDate,
        Field::PreferredTime,
        Field::Service,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CustomerName => "customerName",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::PreferredDate => "preferredDate",
            Field::PreferredTime => "preferredTime",
            Field::Service => "service",
            Field::Notes => "notes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_match_form_names() {
        let names: Vec<&str> = Field::REQUIRED.iter().map(Field::as_str).collect();
        assert_eq!(
            names,
            vec!["customerName", "phone", "email", "preferredDate", "preferredTime", "service"]
        );
        assert_eq!(
            serde_json::to_value(Field::PreferredTime).unwrap(),
            serde_json::json!("preferredTime")
        );
    }

    #[test]
    fn test_date_requires_real_calendar_date() {
        let mut req = BookingRequest {
            preferred_date: "2026-10-19".to_string(),
            ..Default::default()
        };
        assert_eq!(req.date(), NaiveDate::from_ymd_opt(2026, 10, 19));

        req.preferred_date = "2026-02-30".to_string();
        assert_eq!(req.date(), None);

        req.preferred_date = "next monday".to_string();
        assert_eq!(req.date(), None);
    }

    #[test]
    fn test_new_request_is_editing() {
        assert_eq!(BookingRequest::default().status, FormStatus::Editing);
        assert_eq!(FormStatus::ReadyToSubmit.as_str(), "ready_to_submit");
    }
}
