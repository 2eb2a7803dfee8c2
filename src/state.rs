use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::BusinessHours;
use crate::services::booking_form::{BookingForm, FormContext};
use crate::services::catalog::ServiceCatalog;
use crate::services::clock::Clock;

pub struct AppState {
    pub forms: FormContext,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        hours: BusinessHours,
        catalog: Arc<dyn ServiceCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let forms = FormContext {
            hours: Arc::new(hours),
            catalog,
            clock,
            handoff: config.handoff_builder(),
            rules: config.booking_rules(),
        };
        Self { forms }
    }

    pub fn new_form(&self) -> BookingForm {
        BookingForm::new(self.forms.clone())
    }
}
