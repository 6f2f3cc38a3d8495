use serde::{Deserialize, Serialize};

/// A bookable activity from the experiences catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(alias = "_id", default)]
    pub id: Option<String>,
    pub title: String,
    pub price: f64,
    pub duration: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
