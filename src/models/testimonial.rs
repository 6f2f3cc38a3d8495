use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Body for `POST /testimonials/`; new entries wait for approval
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialRequest {
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TestimonialRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [("name", &self.name), ("location", &self.location), ("text", &self.text)] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingRequiredField { field });
            }
        }
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::InvalidRating(self.rating));
        }
        Ok(())
    }
}
