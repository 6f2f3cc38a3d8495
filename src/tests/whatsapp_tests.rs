#[cfg(test)]
mod tests {
    use crate::implementations::whatsapp::{booking_message, WhatsAppLink, DEFAULT_GENERAL_MESSAGE};
    use crate::tests::mock_api::setup;

    #[test]
    fn whatsapp_links_use_digits_only() {
        setup();
        let link = WhatsAppLink::new("+91 98765-43210");
        assert_eq!(link.message_url("Hello there"), "https://wa.me/919876543210?text=Hello+there");
        assert!(link
            .booking_url("Summit Resort", "2024-12-20", "2024-12-22", 3)
            .starts_with("https://wa.me/919876543210?text=Hi%21+I%27m+interested+in+booking+Summit+Resort+for+3+guests"));
    }

    #[test]
    fn general_link_falls_back_to_default_message() {
        setup();
        let link = WhatsAppLink::new("919876543210");
        assert_eq!(link.general_url(None), link.message_url(DEFAULT_GENERAL_MESSAGE));
        assert_eq!(link.general_url(Some("Room for 2?")), "https://wa.me/919876543210?text=Room+for+2%3F");
    }

    #[test]
    fn booking_message_names_property_dates_and_guests() {
        setup();
        let message = booking_message("Mist Valley Cottage", "2024-12-20", "2024-12-22", 4);
        assert!(message.contains("Mist Valley Cottage"));
        assert!(message.contains("for 4 guests from 2024-12-20 to 2024-12-22"));
    }
}
