use std::sync::{Arc, LazyLock};

use chrono::{Days, NaiveDate};
use regex::Regex;

use crate::errors::HandoffError;
use crate::models::{
    AvailabilityWindow, BookingRequest, BusinessHours, FailureKind, Field, FormStatus,
    TimeSelector, ValidationFailure, ValidationResult,
};
use crate::services::catalog::ServiceCatalog;
use crate::services::clock::Clock;
use crate::services::handoff::{Handoff, HandoffBuilder};
use crate::services::scheduling::compute_availability;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// Tunable checks that go beyond presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRules {
    /// Furthest bookable date, counted in days from today.
    pub horizon_days: u32,
    /// Minimum digit count for the phone number; `None` checks presence only.
    pub phone_min_digits: Option<usize>,
}

impl Default for BookingRules {
    fn default() -> Self {
        Self {
            horizon_days: 7,
            phone_min_digits: None,
        }
    }
}

/// Everything a form needs from its surroundings, shared between forms.
#[derive(Clone)]
pub struct FormContext {
    pub hours: Arc<BusinessHours>,
    pub catalog: Arc<dyn ServiceCatalog>,
    pub clock: Arc<dyn Clock>,
    pub handoff: HandoffBuilder,
    pub rules: BookingRules,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(Handoff),
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn url(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Submitted(h) => Some(&h.url),
            SubmitOutcome::Rejected(_) => None,
        }
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            SubmitOutcome::Submitted(_) => &[],
            SubmitOutcome::Rejected(result) => &result.failures,
        }
    }
}

/// One booking form instance. Owns the request and mediates every change
/// to it; the availability window is re-derived whenever the date changes.
pub struct BookingForm {
    ctx: FormContext,
    request: BookingRequest,
    availability: Option<AvailabilityWindow>,
}

impl BookingForm {
    pub fn new(ctx: FormContext) -> Self {
        Self {
            ctx,
            request: BookingRequest::default(),
            availability: None,
        }
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn status(&self) -> FormStatus {
        self.request.status
    }

    /// `None` until the date field holds a real calendar date.
    pub fn availability(&self) -> Option<&AvailabilityWindow> {
        self.availability.as_ref()
    }

    pub fn time_selector(&self) -> TimeSelector {
        TimeSelector::from_window(self.availability.as_ref())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        // Any edit ends a previous submission.
        self.request.status = FormStatus::Editing;

        *self.request.slot_mut(field) = value.into();
        tracing::debug!(field = field.as_str(), "form field updated");

        match field {
            Field::PreferredDate => self.refresh_availability(),
            Field::PreferredTime => self.drop_time_on_closed_day(),
            _ => {}
        }
    }

    /// No slot is selectable while the chosen date is a closed day.
    fn drop_time_on_closed_day(&mut self) {
        let closed = self
            .availability
            .as_ref()
            .is_some_and(|window| !window.is_open);
        if closed && !self.request.preferred_time.is_empty() {
            tracing::debug!(
                date = self.request.preferred_date.as_str(),
                "ignoring time slot on a closed day"
            );
            self.request.preferred_time.clear();
        }
    }

    fn refresh_availability(&mut self) {
        self.availability = self
            .request
            .date()
            .map(|date| compute_availability(date, &self.ctx.hours));

        let time = self.request.preferred_time.trim();
        if time.is_empty() {
            return;
        }

        let still_offered = self
            .availability
            .as_ref()
            .is_some_and(|window| window.offers(time));
        if !still_offered {
            tracing::debug!(
                date = self.request.preferred_date.as_str(),
                "clearing time slot not offered on new date"
            );
            self.request.preferred_time.clear();
        }
    }

    /// Runs every field rule and reports all failures together.
    pub fn validate(&self) -> ValidationResult {
        let today = self.ctx.clock.today();
        [
            self.check_name(),
            self.check_phone(),
            self.check_email(),
            self.check_date(today),
            self.check_time(),
            self.check_service(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Validates and, only when every field passes, builds the handoff.
    ///
    /// A rejected submit leaves the form in `Editing`. A successful one leaves
    /// it in `Submitted` until the next edit; the form stays usable either way.
    pub fn submit(&mut self) -> Result<SubmitOutcome, HandoffError> {
        self.request.status = FormStatus::Validating;
        let result = self.validate();

        if !result.is_valid() {
            self.request.status = FormStatus::Editing;
            let fields: Vec<&str> = result.failures.iter().map(|f| f.field.as_str()).collect();
            tracing::warn!(?fields, "booking submission rejected");
            return Ok(SubmitOutcome::Rejected(result));
        }

        self.request.status = FormStatus::ReadyToSubmit;
        let handoff = match self.ctx.handoff.build(&self.request, self.ctx.catalog.as_ref()) {
            Ok(handoff) => handoff,
            Err(e) => {
                self.request.status = FormStatus::Editing;
                return Err(e);
            }
        };

        self.request.status = FormStatus::Submitted;
        tracing::info!(
            service = self.request.service.as_str(),
            date = self.request.preferred_date.as_str(),
            time = self.request.preferred_time.as_str(),
            "booking handed off"
        );

        Ok(SubmitOutcome::Submitted(handoff))
    }

    fn check_name(&self) -> Result<(), ValidationFailure> {
        if self.request.customer_name.trim().is_empty() {
            return Err(missing(Field::CustomerName, "Please enter your full name."));
        }
        Ok(())
    }

    fn check_phone(&self) -> Result<(), ValidationFailure> {
        let phone = self.request.phone.trim();
        if phone.is_empty() {
            return Err(missing(Field::Phone, "Please enter your phone number."));
        }

        if let Some(min) = self.ctx.rules.phone_min_digits {
            let digits = phone.chars().filter(char::is_ascii_digit).count();
            if digits < min {
                return Err(ValidationFailure::new(
                    Field::Phone,
                    FailureKind::InvalidFormat,
                    format!("Phone number must contain at least {min} digits."),
                ));
            }
        }
        Ok(())
    }

    fn check_email(&self) -> Result<(), ValidationFailure> {
        let email = self.request.email.trim();
        if email.is_empty() {
            return Err(missing(Field::Email, "Please enter your email address."));
        }
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ValidationFailure::new(
                Field::Email,
                FailureKind::InvalidFormat,
                "Please enter a valid email address.",
            ));
        }
        Ok(())
    }

    fn check_date(&self, today: NaiveDate) -> Result<(), ValidationFailure> {
        if self.request.preferred_date.trim().is_empty() {
            return Err(missing(Field::PreferredDate, "Please select a preferred date."));
        }

        let Some(date) = self.request.date() else {
            return Err(ValidationFailure::new(
                Field::PreferredDate,
                FailureKind::InvalidFormat,
                "Please enter a valid date.",
            ));
        };

        if date < today {
            return Err(ValidationFailure::new(
                Field::PreferredDate,
                FailureKind::DateInPast,
                "The selected date is in the past.",
            ));
        }

        let horizon = self.ctx.rules.horizon_days;
        let too_far = today
            .checked_add_days(Days::new(u64::from(horizon)))
            .is_some_and(|last| date > last);
        if too_far {
            return Err(ValidationFailure::new(
                Field::PreferredDate,
                FailureKind::DateTooFar,
                format!("Bookings can be made up to {horizon} days in advance."),
            ));
        }

        let selector = self.time_selector();
        if let TimeSelector::Closed { .. } = selector {
            let message = selector
                .hint()
                .unwrap_or_else(|| "We are closed on this day.".to_string());
            return Err(ValidationFailure::new(
                Field::PreferredDate,
                FailureKind::ShopClosed,
                message,
            ));
        }
        Ok(())
    }

    fn check_time(&self) -> Result<(), ValidationFailure> {
        let window = self.availability.as_ref();

        // No time is asked for on a closed day.
        if window.is_some_and(|w| !w.is_open) {
            return Ok(());
        }

        let time = self.request.preferred_time.trim();
        if time.is_empty() {
            return Err(missing(Field::PreferredTime, "Please select a time slot."));
        }

        if window.is_some_and(|w| !w.offers(time)) {
            return Err(ValidationFailure::new(
                Field::PreferredTime,
                FailureKind::SlotUnavailable,
                "The selected time slot is not available on this date.",
            ));
        }
        Ok(())
    }

    fn check_service(&self) -> Result<(), ValidationFailure> {
        let id = self.request.service.trim();
        if id.is_empty() || self.ctx.catalog.lookup(id).is_none() {
            return Err(missing(Field::Service, "Please select a service."));
        }
        Ok(())
    }
}

fn missing(field: Field, message: &str) -> ValidationFailure {
    ValidationFailure::new(field, FailureKind::RequiredFieldMissing, message)
}
