use crate::utils::error::{FerienError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FerienError::Config {
            field: field_name.to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FerienError::Config {
                field: field_name.to_string(),
                message: format!("Unsupported URL scheme '{}' in '{}'", scheme, url_str),
            }),
        },
        Err(e) => Err(FerienError::Config {
            field: field_name.to_string(),
            message: format!("Invalid URL format '{}': {}", url_str, e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(FerienError::Config {
            field: field_name.to_string(),
            message: format!("Value {} must be at least {}", value, min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FerienError::Config {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a year argument given as text. No range check.
pub fn parse_year(candidate: &str) -> Result<i32> {
    candidate.trim().parse::<i32>().map_err(|_| {
        FerienError::invalid_argument(format!(
            "Argument year is expected to be an int, but is '{}'",
            candidate
        ))
    })
}
