use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

const DEFAULT_SLOT_MINUTES: u32 = 30;

/// Opening and closing time for one kind of day. Slots cover `[open, close)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl DayHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Result<Self, ConfigError> {
        if open >= close {
            return Err(ConfigError::EmptyRange {
                open: open.format("%H:%M").to_string(),
                close: close.format("%H:%M").to_string(),
            });
        }
        Ok(Self { open, close })
    }

    pub fn span_minutes(&self) -> i64 {
        (self.close - self.open).num_minutes()
    }

    /// "9:00 AM - 6:00 PM"
    pub fn to_human_readable(&self) -> String {
        format!("{} - {}", format_12h(self.open), format_12h(self.close))
    }
}

/// Weekly opening hours, loaded once at start-up.
///
/// Monday to Friday use `weekday`. Saturday and Sunday use their own hours
/// when configured and fall back to `weekday` otherwise. Any day listed in
/// `closed_days` is closed regardless of the hours above.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    pub weekday: DayHours,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
    pub closed_days: Vec<Weekday>,
    pub slot_minutes: u32,
}

#[derive(Deserialize)]
struct RawDayHours {
    open: String,
    close: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBusinessHours {
    weekday: RawDayHours,
    #[serde(default)]
    saturday: Option<RawDayHours>,
    #[serde(default)]
    sunday: Option<RawDayHours>,
    #[serde(default)]
    closed_days: Vec<String>,
    #[serde(default = "default_slot_minutes")]
    slot_minutes: u32,
}

fn default_slot_minutes() -> u32 {
    DEFAULT_SLOT_MINUTES
}

impl Default for BusinessHours {
    fn default() -> Self {
        let hm = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            weekday: DayHours {
                open: hm(9),
                close: hm(18),
            },
            saturday: Some(DayHours {
                open: hm(10),
                close: hm(16),
            }),
            sunday: None,
            closed_days: vec![Weekday::Sun],
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl BusinessHours {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let raw: RawBusinessHours =
            serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))?;

        if raw.slot_minutes == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        let closed_days = raw
            .closed_days
            .iter()
            .map(String::as_str)
            .map(parse_weekday)
            .collect::<Result<Vec<_>, _>>()?;

        let hours = Self {
            weekday: parse_day_hours(&raw.weekday)?,
            saturday: raw.saturday.as_ref().map(parse_day_hours).transpose()?,
            sunday: raw.sunday.as_ref().map(parse_day_hours).transpose()?,
            closed_days,
            slot_minutes: raw.slot_minutes,
        };

        // An open day must offer at least one slot.
        for day in [Some(hours.weekday), hours.saturday, hours.sunday]
            .into_iter()
            .flatten()
        {
            if day.span_minutes() < i64::from(hours.slot_minutes) {
                return Err(ConfigError::IntervalExceedsHours {
                    open: day.open.format("%H:%M").to_string(),
                    close: day.close.format("%H:%M").to_string(),
                    slot_minutes: hours.slot_minutes,
                });
            }
        }

        Ok(hours)
    }

    /// Hours for the given day of the week, or `None` when the shop is closed.
    pub fn hours_for(&self, day: Weekday) -> Option<DayHours> {
        if self.closed_days.contains(&day) {
            return None;
        }
        match day {
            Weekday::Sat => Some(self.saturday.unwrap_or(self.weekday)),
            Weekday::Sun => Some(self.sunday.unwrap_or(self.weekday)),
            _ => Some(self.weekday),
        }
    }
}

fn parse_day_hours(raw: &RawDayHours) -> Result<DayHours, ConfigError> {
    DayHours::new(parse_time(&raw.open)?, parse_time(&raw.close)?)
}

fn parse_weekday(s: &str) -> Result<Weekday, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(ConfigError::InvalidWeekday(s.to_string())),
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| ConfigError::InvalidTime(s.to_string()))
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 12-hour clock, e.g. "9:00 AM", "12:30 PM".
pub fn format_12h(t: NaiveTime) -> String {
    t.format("%-I:%M %p").to_string()
}

/// A bookable slot on a given day. The form value is `"HH:MM-HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    pub fn value(&self) -> String {
        self.to_string()
    }

    /// Dropdown label, e.g. "9:00 AM -> 9:30 AM".
    pub fn label(&self) -> String {
        format!("{} -> {}", format_12h(self.start), format_12h(self.end))
    }

    /// Range as written in the handoff message, e.g. "9:00 AM - 9:30 AM".
    pub fn to_human_readable(&self) -> String {
        format!("{} - {}", format_12h(self.start), format_12h(self.end))
    }

    pub fn option(&self) -> SlotOption {
        SlotOption {
            value: self.value(),
            label: self.label(),
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimeSlot(pub String);

impl fmt::Display for InvalidTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time slot: {}", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = InvalidTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidTimeSlot(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").map_err(|_| invalid())?;
        let end = NaiveTime::parse_from_str(end.trim(), "%H:%M").map_err(|_| invalid())?;
        if start >= end {
            return Err(invalid());
        }
        Ok(Self { start, end })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotOption {
    pub value: String,
    pub label: String,
}

/// What the shop offers on one calendar date. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityWindow {
    pub date: NaiveDate,
    pub is_open: bool,
    pub hours: Option<DayHours>,
    pub slots: Vec<TimeSlot>,
}

impl AvailabilityWindow {
    pub fn closed(date: NaiveDate) -> Self {
        Self {
            date,
            is_open: false,
            hours: None,
            slots: Vec::new(),
        }
    }

    /// Whether `value` (a form slot value) is one of today's offered slots.
    pub fn offers(&self, value: &str) -> bool {
        value
            .parse::<TimeSlot>()
            .map(|slot| self.slots.contains(&slot))
            .unwrap_or(false)
    }
}

/// What the time-slot selector should show for the current date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSelector {
    AwaitingDate,
    Closed { weekday: Weekday },
    Open { hours: DayHours, slots: Vec<TimeSlot> },
}

impl TimeSelector {
    pub fn from_window(window: Option<&AvailabilityWindow>) -> Self {
        match window {
            None => TimeSelector::AwaitingDate,
            Some(w) => match (w.is_open, w.hours) {
                (true, Some(hours)) => TimeSelector::Open {
                    hours,
                    slots: w.slots.clone(),
                },
                _ => TimeSelector::Closed {
                    weekday: w.date.weekday(),
                },
            },
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, TimeSelector::Open { .. })
    }

    pub fn placeholder(&self) -> String {
        match self {
            TimeSelector::AwaitingDate => "Select a date first".to_string(),
            TimeSelector::Closed { weekday } => format!("Closed on {}s", weekday_name(*weekday)),
            TimeSelector::Open { .. } => "Select a time slot".to_string(),
        }
    }

    pub fn hint(&self) -> Option<String> {
        match self {
            TimeSelector::AwaitingDate => None,
            TimeSelector::Closed { weekday } => Some(format!(
                "We are closed on {}s. Please select another date.",
                weekday_name(*weekday)
            )),
            TimeSelector::Open { hours, .. } => {
                Some(format!("Available: {}", hours.to_human_readable()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_parse_valid_json() {
        let json = r#"{"weekday":{"open":"08:00","close":"17:00"},"saturday":{"open":"09:00","close":"13:00"},"closedDays":["sun","Mon"]}"#;
        let hours = BusinessHours::from_json(json).unwrap();
        assert_eq!(hours.weekday.open, t("08:00"));
        assert_eq!(hours.saturday.unwrap().close, t("13:00"));
        assert_eq!(hours.closed_days, vec![Weekday::Sun, Weekday::Mon]);
        assert_eq!(hours.slot_minutes, 30);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            BusinessHours::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_parse_invalid_day() {
        let json = r#"{"weekday":{"open":"09:00","close":"17:00"},"closedDays":["xyz"]}"#;
        assert_eq!(
            BusinessHours::from_json(json),
            Err(ConfigError::InvalidWeekday("xyz".to_string()))
        );
    }

    #[test]
    fn test_parse_invalid_time() {
        let json = r#"{"weekday":{"open":"25:00","close":"17:00"}}"#;
        assert_eq!(
            BusinessHours::from_json(json),
            Err(ConfigError::InvalidTime("25:00".to_string()))
        );
    }

    #[test]
    fn test_parse_open_after_close() {
        let json = r#"{"weekday":{"open":"18:00","close":"09:00"}}"#;
        assert!(matches!(
            BusinessHours::from_json(json),
            Err(ConfigError::EmptyRange { .. })
        ));
    }

    #[test]
    fn test_parse_zero_interval() {
        let json = r#"{"weekday":{"open":"09:00","close":"17:00"},"slotMinutes":0}"#;
        assert_eq!(BusinessHours::from_json(json), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn test_parse_interval_longer_than_day() {
        let json = r#"{"weekday":{"open":"09:00","close":"18:00"},"slotMinutes":600}"#;
        assert_eq!(
            BusinessHours::from_json(json),
            Err(ConfigError::IntervalExceedsHours {
                open: "09:00".to_string(),
                close: "18:00".to_string(),
                slot_minutes: 600,
            })
        );

        // a short Saturday is checked too
        let json = r#"{"weekday":{"open":"09:00","close":"18:00"},"saturday":{"open":"10:00","close":"10:20"}}"#;
        assert!(matches!(
            BusinessHours::from_json(json),
            Err(ConfigError::IntervalExceedsHours { .. })
        ));

        // exactly one slot is enough
        let json = r#"{"weekday":{"open":"09:00","close":"10:00"},"slotMinutes":60}"#;
        assert!(BusinessHours::from_json(json).is_ok());
    }

    #[test]
    fn test_hours_for_default() {
        let hours = BusinessHours::default();
        assert_eq!(hours.hours_for(Weekday::Sun), None);
        assert_eq!(hours.hours_for(Weekday::Sat).unwrap().open, t("10:00"));
        assert_eq!(hours.hours_for(Weekday::Wed).unwrap().close, t("18:00"));
    }

    #[test]
    fn test_weekend_falls_back_to_weekday_hours() {
        let json = r#"{"weekday":{"open":"09:00","close":"17:00"}}"#;
        let hours = BusinessHours::from_json(json).unwrap();
        assert_eq!(hours.hours_for(Weekday::Sun), Some(hours.weekday));
        assert_eq!(hours.hours_for(Weekday::Sat), Some(hours.weekday));
    }

    #[test]
    fn test_time_slot_value_and_label() {
        let slot = TimeSlot::new(t("09:00"), t("09:30"));
        assert_eq!(slot.value(), "09:00-09:30");
        assert_eq!(slot.label(), "9:00 AM -> 9:30 AM");

        let afternoon = TimeSlot::new(t("12:30"), t("13:00"));
        assert_eq!(afternoon.to_human_readable(), "12:30 PM - 1:00 PM");
    }

    #[test]
    fn test_time_slot_parse() {
        let slot: TimeSlot = "17:30-18:00".parse().unwrap();
        assert_eq!(slot, TimeSlot::new(t("17:30"), t("18:00")));
        assert!("17:30".parse::<TimeSlot>().is_err());
        assert!("18:00-17:30".parse::<TimeSlot>().is_err());
        assert!("nine-ten".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_time_selector_states() {
        assert_eq!(
            TimeSelector::from_window(None).placeholder(),
            "Select a date first"
        );

        // 2026-10-18 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let closed = TimeSelector::from_window(Some(&AvailabilityWindow::closed(sunday)));
        assert!(!closed.is_enabled());
        assert_eq!(closed.placeholder(), "Closed on Sundays");
        assert_eq!(
            closed.hint().unwrap(),
            "We are closed on Sundays. Please select another date."
        );

        let monday = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let hours = BusinessHours::default().weekday;
        let open = TimeSelector::from_window(Some(&AvailabilityWindow {
            date: monday,
            is_open: true,
            hours: Some(hours),
            slots: vec![TimeSlot::new(t("09:00"), t("09:30"))],
        }));
        assert!(open.is_enabled());
        assert_eq!(open.hint().unwrap(), "Available: 9:00 AM - 6:00 PM");
    }
}
