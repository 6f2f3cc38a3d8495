use std::path::{Path, PathBuf};

use log::warn;

use crate::errors::{StayError, StayResult, ValidationError};
use crate::implementations::image_ingest::{self, UploadedImage};
use crate::models::common::PropertyType;
use crate::models::property::{leading_integer, Property, PropertyPayload};

/// Raw admin input for creating or editing a property.
///
/// Fields hold text exactly as typed; `to_payload` validates and normalizes
/// them. The same rules apply to create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub title: String,
    pub property_type: String,
    pub price: String,
    pub capacity: String,
    pub description: String,
    /// Main image: a URL, or a data URI once a local file was ingested
    pub image: String,
    /// Comma-separated gallery URLs
    pub gallery: String,
    pub amenities: String,
    pub location: String,
    pub attractions: String,
    pub room_categories: String,
    pub min_guests: String,
    pub max_guests: String,
    pub featured: bool,
    pub active: bool,
    /// Gallery images ingested from local files
    pub uploaded_images: Vec<UploadedImage>,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            property_type: String::new(),
            price: String::new(),
            capacity: String::new(),
            description: String::new(),
            image: String::new(),
            gallery: String::new(),
            amenities: String::new(),
            location: String::new(),
            attractions: String::new(),
            room_categories: String::new(),
            min_guests: "1".to_string(),
            max_guests: "4".to_string(),
            featured: false,
            active: true,
            uploaded_images: Vec::new(),
        }
    }
}

impl PropertyForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill for editing an existing record
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            property_type: property.property_type.to_string(),
            price: property.price.to_string(),
            capacity: property.capacity.clone(),
            description: property.description.clone(),
            image: property.image.clone(),
            gallery: property.gallery.join(", "),
            amenities: property.amenities.join(", "),
            location: property.location.clone(),
            attractions: property.attractions.join(", "),
            room_categories: property.room_categories.join(", "),
            min_guests: property.min_guests.to_string(),
            max_guests: property.max_guests.to_string(),
            featured: property.featured,
            active: property.active,
            uploaded_images: Vec::new(),
        }
    }

    /// Ingest gallery files concurrently; returns the failures, successes are kept
    pub async fn ingest_gallery_files(&mut self, paths: &[PathBuf]) -> Vec<StayError> {
        let mut failures = Vec::new();
        for result in image_ingest::ingest_files(paths).await {
            match result {
                Ok(image) => self.uploaded_images.push(image),
                Err(e) => {
                    warn!("Gallery image ingestion failed: {}", e);
                    failures.push(e);
                }
            }
        }
        failures
    }

    /// Embed a local file as the main image
    pub async fn ingest_main_image(&mut self, path: &Path) -> StayResult<()> {
        let image = image_ingest::ingest_file(path).await?;
        self.image = image.data_uri;
        Ok(())
    }

    pub fn remove_uploaded_image(&mut self, id: u64) -> bool {
        let before = self.uploaded_images.len();
        self.uploaded_images.retain(|img| img.id != id);
        self.uploaded_images.len() != before
    }

    /// Validate and normalize into the request body
    pub fn to_payload(&self) -> Result<PropertyPayload, ValidationError> {
        let required = [
            ("title", &self.title),
            ("type", &self.property_type),
            ("price", &self.price),
            ("capacity", &self.capacity),
            ("description", &self.description),
            ("image", &self.image),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingRequiredField { field });
            }
        }

        let property_type = PropertyType::parse_known(&self.property_type)?;
        let price = parse_price(&self.price)?;
        let min_guests = parse_guests("min_guests", &self.min_guests)?;
        let max_guests = parse_guests("max_guests", &self.max_guests)?;
        if min_guests > max_guests {
            return Err(ValidationError::InvalidGuestRange {
                min: min_guests,
                max: max_guests,
            });
        }

        let capacity = self.capacity.trim().to_string();
        if let Some(count) = leading_integer(&capacity) {
            if count != max_guests {
                warn!(
                    "Capacity descriptor {:?} disagrees with max_guests = {}",
                    capacity, max_guests
                );
            }
        }

        let mut gallery: Vec<String> = self
            .uploaded_images
            .iter()
            .map(|img| img.data_uri.clone())
            .collect();
        gallery.extend(split_list(&self.gallery));

        Ok(PropertyPayload {
            title: self.title.trim().to_string(),
            property_type,
            price,
            capacity,
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
            gallery,
            amenities: split_list(&self.amenities),
            location: self.location.trim().to_string(),
            attractions: split_list(&self.attractions),
            room_categories: split_list(&self.room_categories),
            min_guests,
            max_guests,
            featured: self.featured,
            active: self.active,
        })
    }
}

/// Split comma-separated text into trimmed, non-empty entries
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_price(value: &str) -> Result<f64, ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidNumber {
            field: "price",
            value: value.to_string(),
        }),
    }
}

fn parse_guests(field: &'static str, value: &str) -> Result<u32, ValidationError> {
    value.trim().parse::<u32>().map_err(|_| ValidationError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
