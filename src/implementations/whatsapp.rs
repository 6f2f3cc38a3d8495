use url::form_urlencoded;

pub const DEFAULT_GENERAL_MESSAGE: &str =
    "Hi! I'm interested in booking a stay at Vattavada. Can you help me?";

/// Messaging deep links to the booking desk
#[derive(Debug, Clone)]
pub struct WhatsAppLink {
    phone_digits: String,
}

impl WhatsAppLink {
    /// Formatting characters such as `+`, spaces and dashes are dropped
    pub fn new(phone_number: &str) -> Self {
        Self {
            phone_digits: phone_number.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }

    pub fn message_url(&self, message: &str) -> String {
        let text: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
        format!("https://wa.me/{}?text={}", self.phone_digits, text)
    }

    pub fn general_url(&self, message: Option<&str>) -> String {
        self.message_url(message.unwrap_or(DEFAULT_GENERAL_MESSAGE))
    }

    pub fn booking_url(&self, property_title: &str, check_in: &str, check_out: &str, guests: u32) -> String {
        self.message_url(&booking_message(property_title, check_in, check_out, guests))
    }
}

pub fn booking_message(property_title: &str, check_in: &str, check_out: &str, guests: u32) -> String {
    format!(
        "Hi! I'm interested in booking {} for {} guests from {} to {}. Can you help me with availability and pricing?",
        property_title, guests, check_in, check_out
    )
}
