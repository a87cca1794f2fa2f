// file: src/utils/validation.rs
// description: search input validation helpers
// reference: input validation patterns

use crate::error::{MediaError, Result};
use crate::models::SearchQuery;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(MediaError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    /// Years are optional; when given they must be four digits.
    pub fn validate_year(year: &str) -> Result<()> {
        if year.is_empty() {
            return Ok(());
        }

        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return Err(MediaError::Validation(format!(
                "Year must be four digits: {}",
                year
            )));
        }
        Ok(())
    }

    pub fn validate_year_range(year_start: &str, year_end: &str) -> Result<()> {
        Self::validate_year(year_start)?;
        Self::validate_year(year_end)?;

        if !year_start.is_empty() && !year_end.is_empty() && year_start > year_end {
            return Err(MediaError::Validation(format!(
                "year_start {} is after year_end {}",
                year_start, year_end
            )));
        }
        Ok(())
    }

    pub fn validate_count(count: usize) -> Result<()> {
        if count == 0 {
            return Err(MediaError::Validation(
                "Count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_query(query: &SearchQuery) -> Result<()> {
        let has_terms = !query.keywords().trim().is_empty()
            || !query.title().trim().is_empty()
            || query.description().is_some_and(|d| !d.trim().is_empty());

        if !has_terms {
            return Err(MediaError::Validation(
                "At least one of keywords, title or description is required".to_string(),
            ));
        }

        Self::validate_year_range(query.year_start(), query.year_end())
    }
}
