use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// The services offered in the quote form, as `(value, label)` pairs. The
/// value is what travels in [`LeadRequest::service`].
pub const SERVICES: &[(&str, &str)] = &[
    ("graphic-design", "Graphic Design"),
    ("marketing", "Marketing"),
    ("social-media", "Social Media Management"),
    ("network-solutions", "Network Solutions"),
    ("it-security", "IT Security"),
    ("video-production", "Video Production"),
];

/// Snapshot of a prospective client's contact and project details. Required
/// fields are enforced by the form's native constraints before any of the
/// delivery functions see the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// Opaque success signal from the relay. Carries nothing the caller inspects
/// beyond the fact of delivery.
#[derive(Debug)]
pub struct Ack;

/// Anything that kept the relay from accepting the request. The UI shows one
/// generic notice either way; the variants exist for the console log.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("relay rejected the request (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Submission lifecycle as shown to the user.
///
/// `begin` and `resolve` only act from the states they are defined for, so a
/// second submit while one is pending cannot start another delivery, and a
/// late resolution cannot clobber a reset form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitState {
    pub fn begin(self) -> Self {
        match self {
            SubmitState::Idle | SubmitState::Error => SubmitState::Submitting,
            other => other,
        }
    }

    pub fn resolve(self, delivered: bool) -> Self {
        match self {
            SubmitState::Submitting if delivered => SubmitState::Success,
            SubmitState::Submitting => SubmitState::Error,
            other => other,
        }
    }

    pub fn reset(self) -> Self {
        SubmitState::Idle
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[derive(Serialize)]
struct RelayPayload<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    phone: &'a str,
    company: &'a str,
    service: &'a str,
    message: &'a str,
    to_email: &'a str,
}

fn relay_payload(request: &LeadRequest) -> RelayPayload<'_> {
    RelayPayload {
        service_id: config::RELAY_SERVICE_ID,
        template_id: config::RELAY_TEMPLATE_ID,
        user_id: config::RELAY_PUBLIC_KEY,
        template_params: TemplateParams {
            from_name: &request.name,
            reply_to: &request.email,
            phone: &request.phone,
            company: &request.company,
            service: &request.service,
            message: &request.message,
            to_email: config::QUOTE_INBOX,
        },
    }
}

/// Sends the request through the templated-email relay. One attempt, no
/// retries; the caller keeps its snapshot so the user can retry or fall back
/// without retyping.
pub async fn submit_primary(request: &LeadRequest) -> Result<Ack, DeliveryError> {
    let response = Request::post(config::RELAY_ENDPOINT)
        .json(&relay_payload(request))
        .map_err(|e| DeliveryError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    if response.ok() {
        Ok(Ack)
    } else {
        Err(DeliveryError::Rejected {
            status: response.status(),
            body: response.text().await.unwrap_or_default(),
        })
    }
}

/// The pre-filled WhatsApp message, all six fields under their labels.
pub fn whatsapp_message(request: &LeadRequest) -> String {
    format!(
        "*New Quote Request* 🚀\n\n*Name:* {}\n*Email:* {}\n*Phone:* {}\n*Company:* {}\n*Service:* {}\n*Message:* {}",
        request.name,
        request.email,
        request.phone,
        request.company,
        request.service,
        request.message,
    )
}

pub fn fallback_link(request: &LeadRequest) -> String {
    let message = whatsapp_message(request);
    let text = urlencoding::encode(&message);
    format!("https://wa.me/{}?text={}", config::WHATSAPP_NUMBER, text)
}

/// Bare conversation link, no pre-filled text. Used by the hero button and
/// the floating WhatsApp button.
pub fn contact_link() -> String {
    format!("https://wa.me/{}", config::WHATSAPP_NUMBER)
}

/// Opens the pre-filled WhatsApp conversation in a new tab. Fire-and-forget:
/// once the tab is handed to the browser there is nothing left to observe.
pub fn submit_fallback(request: &LeadRequest) {
    open_external(&fallback_link(request));
}

pub fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> LeadRequest {
        LeadRequest {
            name: "Asha Rao".into(),
            email: "asha@x.com".into(),
            phone: String::new(),
            company: String::new(),
            service: "marketing".into(),
            message: "Need a rebrand".into(),
        }
    }

    #[test]
    fn message_interpolates_all_six_labeled_fields() {
        let request = LeadRequest {
            name: "A".into(),
            email: "B".into(),
            phone: "C".into(),
            company: "D".into(),
            service: "E".into(),
            message: "F".into(),
        };
        let text = whatsapp_message(&request);
        assert!(text.starts_with("*New Quote Request* 🚀\n\n"));
        for line in [
            "*Name:* A",
            "*Email:* B",
            "*Phone:* C",
            "*Company:* D",
            "*Service:* E",
            "*Message:* F",
        ] {
            assert!(text.contains(line), "missing {line:?} in {text:?}");
        }
    }

    #[test]
    fn encoded_message_round_trips_special_characters() {
        let request = LeadRequest {
            name: "A & B".into(),
            email: "a+b@x.com".into(),
            phone: "100%".into(),
            company: "Größe & Söhne".into(),
            service: "it-security".into(),
            message: "50% off? काम चाहिए".into(),
        };
        let original = whatsapp_message(&request);
        let encoded = urlencoding::encode(&original).into_owned();
        let decoded = urlencoding::decode(&encoded).expect("valid percent encoding");
        assert_eq!(decoded, original);
    }

    #[test]
    fn fallback_link_targets_configured_number_with_encoded_text() {
        let link = fallback_link(&asha());
        assert!(link.starts_with(&format!("https://wa.me/{}?text=", config::WHATSAPP_NUMBER)));
        assert!(link.contains("%2ANew%20Quote%20Request%2A"));
        assert!(link.contains("Name%3A%2A%20Asha%20Rao"));
        assert!(link.contains("Service%3A%2A%20marketing"));
        assert!(link.contains("Message%3A%2A%20Need%20a%20rebrand"));
        // Raw reserved characters must not leak into the query value.
        let query = link.split("text=").nth(1).unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('*'));
        assert!(!query.contains('\n'));
    }

    #[test]
    fn contact_link_has_no_prefilled_text() {
        assert_eq!(
            contact_link(),
            format!("https://wa.me/{}", config::WHATSAPP_NUMBER)
        );
    }

    #[test]
    fn relay_payload_mirrors_request_and_configuration() {
        let value = serde_json::to_value(relay_payload(&asha())).unwrap();
        assert_eq!(value["service_id"], config::RELAY_SERVICE_ID);
        assert_eq!(value["template_id"], config::RELAY_TEMPLATE_ID);
        assert_eq!(value["user_id"], config::RELAY_PUBLIC_KEY);
        let params = &value["template_params"];
        assert_eq!(params["from_name"], "Asha Rao");
        assert_eq!(params["reply_to"], "asha@x.com");
        assert_eq!(params["phone"], "");
        assert_eq!(params["company"], "");
        assert_eq!(params["service"], "marketing");
        assert_eq!(params["message"], "Need a rebrand");
        assert_eq!(params["to_email"], config::QUOTE_INBOX);
    }

    #[test]
    fn successful_submission_walks_idle_submitting_success() {
        let state = SubmitState::Idle.begin();
        assert_eq!(state, SubmitState::Submitting);
        assert!(state.is_submitting());
        assert_eq!(state.resolve(true), SubmitState::Success);
    }

    #[test]
    fn failed_submission_walks_idle_submitting_error_and_allows_retry() {
        let state = SubmitState::Idle.begin().resolve(false);
        assert_eq!(state, SubmitState::Error);
        // Explicit retry from the error state starts a fresh attempt.
        assert_eq!(state.begin(), SubmitState::Submitting);
    }

    #[test]
    fn begin_while_submitting_is_a_no_op() {
        let state = SubmitState::Submitting;
        assert_eq!(state.begin(), SubmitState::Submitting);
    }

    #[test]
    fn resolve_outside_submitting_is_a_no_op() {
        assert_eq!(SubmitState::Idle.resolve(true), SubmitState::Idle);
        assert_eq!(SubmitState::Success.resolve(false), SubmitState::Success);
        assert_eq!(SubmitState::Error.resolve(true), SubmitState::Error);
    }

    #[test]
    fn reset_always_returns_to_idle() {
        for state in [
            SubmitState::Idle,
            SubmitState::Submitting,
            SubmitState::Success,
            SubmitState::Error,
        ] {
            assert_eq!(state.reset(), SubmitState::Idle);
        }
    }

    #[test]
    fn default_request_is_empty_everywhere() {
        let request = LeadRequest::default();
        assert!(request.name.is_empty());
        assert!(request.email.is_empty());
        assert!(request.phone.is_empty());
        assert!(request.company.is_empty());
        assert!(request.service.is_empty());
        assert!(request.message.is_empty());
    }

    #[test]
    fn service_values_are_unique_and_kebab_case() {
        for (value, label) in SERVICES {
            assert!(!label.is_empty());
            assert!(value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
        let mut values: Vec<_> = SERVICES.iter().map(|(v, _)| v).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), SERVICES.len());
    }
}
