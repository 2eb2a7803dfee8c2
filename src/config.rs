use std::env;
use std::fs;

use anyhow::Context;

use crate::errors::ConfigError;
use crate::models::BusinessHours;
use crate::services::booking_form::BookingRules;
use crate::services::handoff::HandoffBuilder;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub whatsapp_number: String,
    pub handoff_host: String,
    pub business_hours_path: Option<String>,
    pub booking_horizon_days: u32,
    pub phone_min_digits: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            whatsapp_number: env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "+18953456578".to_string()),
            handoff_host: env::var("HANDOFF_HOST").unwrap_or_else(|_| "wa.me".to_string()),
            business_hours_path: env::var("BUSINESS_HOURS_PATH")
                .ok()
                .filter(|p| !p.is_empty()),
            booking_horizon_days: env::var("BOOKING_HORIZON_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            phone_min_digits: env::var("PHONE_MIN_DIGITS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Start-up checks that `from_env` cannot express with defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.whatsapp_number.chars().any(|c| c.is_ascii_digit()) {
            return Err(ConfigError::MissingRecipient(self.whatsapp_number.clone()));
        }
        Ok(())
    }

    /// Reads the hours file when one is configured, else the shop's defaults.
    pub fn load_business_hours(&self) -> anyhow::Result<BusinessHours> {
        let Some(path) = &self.business_hours_path else {
            return Ok(BusinessHours::default());
        };

        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read business hours file: {path}"))?;
        let hours = BusinessHours::from_json(&json)
            .with_context(|| format!("invalid business hours in {path}"))?;
        tracing::info!("loaded business hours from {path}");
        Ok(hours)
    }

    pub fn handoff_builder(&self) -> HandoffBuilder {
        HandoffBuilder::new(&self.handoff_host, &self.whatsapp_number)
    }

    pub fn booking_rules(&self) -> BookingRules {
        BookingRules {
            horizon_days: self.booking_horizon_days,
            phone_min_digits: self.phone_min_digits,
        }
    }
}
