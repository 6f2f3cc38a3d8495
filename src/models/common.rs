use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Kinds of stay listed on the site
///
/// Records coming back from the backend are free text, so anything outside
/// the known set is kept as `Other` rather than failing the whole listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Cottage,
    Resort,
    Homestay,
    Tent,
    Farmstay,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Cottage => "Cottage",
            PropertyType::Resort => "Resort",
            PropertyType::Homestay => "Homestay",
            PropertyType::Tent => "Tent",
            PropertyType::Farmstay => "Farmstay",
            PropertyType::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PropertyType::Other(_))
    }

    /// Parse strictly, rejecting anything outside the known set
    pub fn parse_known(value: &str) -> Result<Self, ValidationError> {
        let parsed = PropertyType::from(value.trim().to_string());
        if parsed.is_known() {
            Ok(parsed)
        } else {
            Err(ValidationError::UnknownPropertyType(value.trim().to_string()))
        }
    }
}

// Type names compare case-insensitively everywhere.
impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for PropertyType {}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "cottage" => PropertyType::Cottage,
            "resort" => PropertyType::Resort,
            "homestay" => PropertyType::Homestay,
            "tent" => PropertyType::Tent,
            "farmstay" => PropertyType::Farmstay,
            _ => PropertyType::Other(value),
        }
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type filter: everything, or a single property type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeSelector {
    #[default]
    All,
    Only(PropertyType),
}

impl TypeSelector {
    pub fn matches(&self, property_type: &PropertyType) -> bool {
        match self {
            TypeSelector::All => true,
            TypeSelector::Only(wanted) => wanted == property_type,
        }
    }

    /// Query-string value, `None` for "all"
    pub fn as_param(&self) -> Option<&str> {
        match self {
            TypeSelector::All => None,
            TypeSelector::Only(t) => Some(t.as_str()),
        }
    }
}

impl FromStr for TypeSelector {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(TypeSelector::All)
        } else {
            PropertyType::parse_known(s).map(TypeSelector::Only)
        }
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSelector::All => f.write_str("all"),
            TypeSelector::Only(t) => write!(f, "{}", t),
        }
    }
}
