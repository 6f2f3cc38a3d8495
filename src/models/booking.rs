use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Follow-up state of an inquiry, set by staff on the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Contacted,
    Confirmed,
    Cancelled,
}

/// Body for `POST /bookings/inquiry`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingInquiryRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
}

impl BookingInquiryRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "name" });
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::MissingRequiredField { field: "phone" });
        }
        if self.guests == 0 {
            return Err(ValidationError::InvalidNumber {
                field: "guests",
                value: "0".to_string(),
            });
        }
        if let (Some(check_in), Some(check_out)) = (self.check_in_date, self.check_out_date) {
            if check_out <= check_in {
                return Err(ValidationError::InvalidDateRange);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingInquiry {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub guests: u32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    #[serde(default)]
    pub property_title: Option<String>,
    #[serde(default)]
    pub check_in_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub check_out_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub status: InquiryStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
