use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// Body for `POST /contact/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
