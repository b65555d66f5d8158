use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Input for creating a tournament.
///
/// The date arrives already typed, which pins the stored form to
/// `YYYY-MM-DD`. Business-rule validation belongs to the shell; it delegates
/// to [`NewTournament::validate`] before calling the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTournament {
    pub name: String,
    pub date: NaiveDate,
    pub place: String,
    /// URL of the tournament photo
    pub photo: String,
    pub description: Option<String>,
}

impl NewTournament {
    /// Check the shell-owned business rules: non-empty name and place, and a
    /// well-formed http(s) URL for the photo.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "Tournament name must not be empty.".to_string(),
            ));
        }
        if self.place.trim().is_empty() {
            return Err(StoreError::Validation(
                "Tournament place must not be empty.".to_string(),
            ));
        }
        if !is_well_formed_url(&self.photo) {
            return Err(StoreError::Validation(
                "Photo must be a valid http(s) URL.".to_string(),
            ));
        }
        Ok(())
    }
}

/// Basic URL shape check: an http(s) scheme followed by a non-empty,
/// whitespace-free remainder.
fn is_well_formed_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    rest.is_some_and(|r| !r.is_empty() && !r.contains(char::is_whitespace))
}
