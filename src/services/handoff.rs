use serde::Serialize;

use crate::errors::HandoffError;
use crate::models::BookingRequest;
use crate::services::catalog::ServiceCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handoff {
    pub message: String,
    pub url: String,
}

/// Turns a validated booking into a chat deep link for the shop's number.
#[derive(Debug, Clone)]
pub struct HandoffBuilder {
    host: String,
    recipient: String,
}

impl HandoffBuilder {
    /// `recipient` may contain formatting; only its digits end up in the URL.
    pub fn new(host: &str, recipient: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            recipient: recipient.chars().filter(char::is_ascii_digit).collect(),
        }
    }

    pub fn build(
        &self,
        request: &BookingRequest,
        catalog: &dyn ServiceCatalog,
    ) -> Result<Handoff, HandoffError> {
        let name = required(&request.customer_name, "customer name")?;
        let phone = required(&request.phone, "phone")?;
        let email = required(&request.email, "email")?;
        let date = request
            .date()
            .ok_or_else(|| precondition("preferred date is not a calendar date"))?;
        let slot = request
            .time_slot()
            .ok_or_else(|| precondition("preferred time is not a time slot"))?;
        let service = catalog
            .lookup(request.service.trim())
            .ok_or_else(|| precondition("service is not in the catalog"))?;

        let notes = match request.notes.trim() {
            "" => "None",
            n => n,
        };

        let message = format!(
            "*New Booking Request*\n\n\
             *Name:* {name}\n\
             *Phone:* {phone}\n\
             *Email:* {email}\n\
             *Service:* {}\n\
             *Preferred Date:* {}\n\
             *Preferred Time:* {}\n\
             *Additional Notes:* {notes}",
            service.display_name,
            date.format("%A, %B %-d, %Y"),
            slot.to_human_readable(),
        );

        let url = format!(
            "https://{}/{}?text={}",
            self.host,
            self.recipient,
            urlencoding::encode(&message)
        );

        Ok(Handoff { message, url })
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, HandoffError> {
    match value.trim() {
        "" => Err(precondition(&format!("{what} is empty"))),
        v => Ok(v),
    }
}

fn precondition(reason: &str) -> HandoffError {
    HandoffError::PreconditionViolated(reason.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::StaticCatalog;

    fn complete_request() -> BookingRequest {
        BookingRequest {
            customer_name: "Test User".to_string(),
            phone: "+1234567890".to_string(),
            email: "test@example.com".to_string(),
            preferred_date: "2026-10-19".to_string(),
            preferred_time: "09:00-09:30".to_string(),
            service: "skin-fade".to_string(),
            ..Default::default()
        }
    }

    fn builder() -> HandoffBuilder {
        HandoffBuilder::new("wa.me", "+1 (895) 345-6578")
    }

    #[test]
    fn test_message_golden() {
        let handoff = builder()
            .build(&complete_request(), &StaticCatalog::barbershop_menu())
            .unwrap();
        assert_eq!(
            handoff.message,
            "*New Booking Request*\n\n\
             *Name:* Test User\n\
             *Phone:* +1234567890\n\
             *Email:* test@example.com\n\
             *Service:* Skin Fade\n\
             *Preferred Date:* Monday, October 19, 2026\n\
             *Preferred Time:* 9:00 AM - 9:30 AM\n\
             *Additional Notes:* None"
        );
    }

    #[test]
    fn test_url_shape() {
        let handoff = builder()
            .build(&complete_request(), &StaticCatalog::barbershop_menu())
            .unwrap();
        assert!(handoff
            .url
            .starts_with("https://wa.me/18953456578?text=%2ANew%20Booking%20Request%2A%0A%0A"));
        assert!(handoff.url.contains("Test%20User"));
        assert!(!handoff.url.contains(' '));

        let (_, query) = handoff.url.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(query).unwrap(), handoff.message);
    }

    #[test]
    fn test_notes_included() {
        let mut req = complete_request();
        req.notes = "  Low fade, please  ".to_string();
        let handoff = builder()
            .build(&req, &StaticCatalog::barbershop_menu())
            .unwrap();
        assert!(handoff.message.ends_with("*Additional Notes:* Low fade, please"));
    }

    #[test]
    fn test_pure() {
        let catalog = StaticCatalog::barbershop_menu();
        let req = complete_request();
        assert_eq!(
            builder().build(&req, &catalog).unwrap(),
            builder().build(&req, &catalog).unwrap()
        );
    }

    #[test]
    fn test_incomplete_request_is_precondition_violation() {
        let catalog = StaticCatalog::barbershop_menu();

        let mut no_name = complete_request();
        no_name.customer_name = "   ".to_string();
        assert!(matches!(
            builder().build(&no_name, &catalog),
            Err(HandoffError::PreconditionViolated(_))
        ));

        let mut no_time = complete_request();
        no_time.preferred_time.clear();
        assert!(builder().build(&no_time, &catalog).is_err());

        let mut unknown_service = complete_request();
        unknown_service.service = "perm".to_string();
        assert_eq!(
            builder().build(&unknown_service, &catalog),
            Err(HandoffError::PreconditionViolated(
                "service is not in the catalog".to_string()
            ))
        );

        assert!(builder().build(&BookingRequest::default(), &catalog).is_err());
    }
}
