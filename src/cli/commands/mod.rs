pub mod classify;
pub mod config;
pub mod init;
pub mod plan;
pub mod scan;
pub mod schedule;

use crate::core::age::calc_age;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a JSON input document, reporting the offending file on failure.
pub(crate) fn read_input<T: DeserializeOwned>(path: &str) -> AppResult<T> {
    let invalid = |reason: String| AppError::InvalidInput {
        path: path.to_string(),
        reason,
    };

    let content = fs::read_to_string(Path::new(path)).map_err(|e| invalid(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))
}

/// Age on `today`. A birthdate after `today` is rejected.
pub(crate) fn age_on(birthdate: Option<NaiveDate>, today: NaiveDate) -> AppResult<Option<u32>> {
    match birthdate {
        None => Ok(None),
        Some(b) if b > today => Err(AppError::InvalidBirthdate(b.to_string())),
        Some(b) => Ok(calc_age(b, today)),
    }
}
