use async_trait::async_trait;

use crate::errors::StayResult;
use crate::models::booking::{BookingInquiry, BookingInquiryRequest};
use crate::models::contact::{Contact, ContactRequest};
use crate::models::experience::Experience;
use crate::models::filter::{PropertyQuery, SearchQuery};
use crate::models::property::{Property, PropertyPayload};
use crate::models::testimonial::{Testimonial, TestimonialRequest};

/// The REST backend, as seen by the client
///
/// Every call is fire-once: no retries, no backoff. Callers decide what to
/// do with a failure and keep their own state intact.
#[async_trait]
pub trait StayApi: Send + Sync {
    /// `GET /properties/` with optional filters
    async fn list_properties(&self, query: &PropertyQuery) -> StayResult<Vec<Property>>;

    /// `GET /properties/{id}`
    async fn get_property(&self, id: &str) -> StayResult<Property>;

    /// `GET /properties/featured`
    async fn featured_properties(&self) -> StayResult<Vec<Property>>;

    /// `GET /properties/search/filter`
    async fn search_properties(&self, query: &SearchQuery) -> StayResult<Vec<Property>>;

    /// `POST /properties/`
    async fn create_property(&self, payload: &PropertyPayload) -> StayResult<Property>;

    /// `PUT /properties/{id}`
    async fn update_property(&self, id: &str, payload: &PropertyPayload) -> StayResult<Property>;

    /// `DELETE /properties/{id}`
    async fn delete_property(&self, id: &str) -> StayResult<()>;

    /// `POST /bookings/inquiry`
    async fn submit_inquiry(&self, inquiry: &BookingInquiryRequest) -> StayResult<BookingInquiry>;

    /// `GET /bookings/inquiries`
    async fn list_inquiries(&self, limit: Option<u32>) -> StayResult<Vec<BookingInquiry>>;

    /// `POST /contact/`
    async fn submit_contact(&self, contact: &ContactRequest) -> StayResult<Contact>;

    /// `GET /experiences/`
    async fn list_experiences(&self) -> StayResult<Vec<Experience>>;

    /// `GET /experiences/{id}`
    async fn get_experience(&self, id: &str) -> StayResult<Experience>;

    /// `GET /testimonials/`, approved entries only
    async fn list_testimonials(&self) -> StayResult<Vec<Testimonial>>;

    /// `POST /testimonials/`
    async fn submit_testimonial(&self, testimonial: &TestimonialRequest) -> StayResult<Testimonial>;
}
