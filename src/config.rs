use std::str::FromStr;

use crate::errors::StayError;

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = StayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(StayError::InvalidInput(format!("unknown output format: {}", other))),
        }
    }
}

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct StayOptions {
    pub output_format: OutputFormat,
}
