// Delivery configuration. The relay identifiers are placeholders; real ones
// are swapped in at deploy time.

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const RELAY_SERVICE_ID: &str = "service_pix2pixel";
pub const RELAY_TEMPLATE_ID: &str = "template_quote_request";
pub const RELAY_PUBLIC_KEY: &str = "REPLACE_WITH_PUBLIC_KEY";

/// Inbox that receives relayed quote requests.
pub const QUOTE_INBOX: &str = "info@pix2pixel.com";

/// WhatsApp destination, with country code.
pub const WHATSAPP_NUMBER: &str = "919918096894";
