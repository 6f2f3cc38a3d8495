pub mod config;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{OutputFormat, StayOptions};
pub use errors::{recovery_hint, AuthError, RecoverableError, StayError, StayResult, ValidationError};
pub use implementations::admin_form::{split_list, PropertyForm};
pub use implementations::catalog_view::{CatalogView, LoadOutcome, LoadTicket};
pub use implementations::config::{AdminCredentials, ClientConfig, ConfigError};
pub use implementations::filter_engine;
pub use implementations::http_client::HttpStayClient;
pub use implementations::image_ingest::UploadedImage;
pub use implementations::property_admin::PropertyAdmin;
pub use implementations::session_gate::{SessionGate, SESSION_FLAG_KEY};
pub use implementations::session_store::{FileSessionStore, MemorySessionStore};
pub use implementations::whatsapp::WhatsAppLink;
pub use models::{
    booking::{BookingInquiry, BookingInquiryRequest, InquiryStatus},
    common::{PropertyType, TypeSelector},
    contact::{Contact, ContactRequest, ContactStatus},
    experience::Experience,
    filter::{FilterState, PriceRange, PropertyQuery, SearchQuery},
    property::{Property, PropertyPayload},
    testimonial::{Testimonial, TestimonialRequest},
};
pub use traits::{SessionStore, StayApi};
