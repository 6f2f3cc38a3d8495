use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::common::PropertyType;

fn default_min_guests() -> u32 {
    1
}

fn default_max_guests() -> u32 {
    4
}

fn default_true() -> bool {
    true
}

/// A property listing as served by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: f64,
    /// Free-text descriptor such as "4 guests"
    pub capacity: String,
    #[serde(default = "default_min_guests")]
    pub min_guests: u32,
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub location: String,
    #[serde(default)]
    pub attractions: Vec<String>,
    #[serde(default)]
    pub room_categories: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Property {
    /// Guest count read from the capacity descriptor.
    ///
    /// Leading non-digits are skipped and the first run of digits is parsed,
    /// so "4 guests" is 4 and "Up to 6 people" is 6. A descriptor with no
    /// digits yields `None`. A range such as "2-4 guests" reads as 2, not the
    /// 24 that stripping non-digits and joining the rest would give.
    pub fn guest_capacity(&self) -> Option<u32> {
        leading_integer(&self.capacity)
    }

    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or("-")
    }
}

pub(crate) fn leading_integer(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Normalized body for `POST /properties/` and `PUT /properties/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: f64,
    pub capacity: String,
    pub description: String,
    pub image: String,
    pub gallery: Vec<String>,
    pub amenities: Vec<String>,
    pub location: String,
    pub attractions: Vec<String>,
    pub room_categories: Vec<String>,
    pub min_guests: u32,
    pub max_guests: u32,
    pub featured: bool,
    pub active: bool,
}
