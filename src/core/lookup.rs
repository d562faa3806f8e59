//! Drug-usage lookup boundary. The real drug-information service lives
//! outside this crate; `UsageCatalog` is a local table with the same shape.

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("no usage information for '{0}'")]
    NotFound(String),

    #[error("usage lookup unavailable")]
    Unavailable,
}

pub trait UsageLookup {
    fn lookup_usage(&self, medicine_name: &str) -> Result<String, LookupError>;
}

/// Used when no catalog is configured: every lookup fails, so the
/// scheduler falls back to the prescription values.
pub struct NoLookup;

impl UsageLookup for NoLookup {
    fn lookup_usage(&self, _medicine_name: &str) -> Result<String, LookupError> {
        Err(LookupError::Unavailable)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UsageCatalog {
    entries: BTreeMap<String, String>,
}

impl UsageCatalog {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a `{ "name": "usage text", ... }` table. `.yml`/`.yaml` files are
    /// read as YAML, anything else as JSON.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"))
            .unwrap_or(false);

        let entries: BTreeMap<String, String> = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        if entries.is_empty() {
            return Err(AppError::InvalidInput {
                path: path.display().to_string(),
                reason: "usage catalog is empty".into(),
            });
        }

        log::debug!("usage catalog loaded: {} entries", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl UsageLookup for UsageCatalog {
    /// Exact name first, then case-insensitive containment either way:
    /// scanned names usually carry a strength suffix ("타이레놀 500mg").
    fn lookup_usage(&self, medicine_name: &str) -> Result<String, LookupError> {
        if let Some(usage) = self.entries.get(medicine_name) {
            return Ok(usage.clone());
        }

        let wanted = medicine_name.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(LookupError::NotFound(medicine_name.to_string()));
        }

        self.entries
            .iter()
            .filter(|(name, _)| {
                let key = name.to_lowercase();
                !key.is_empty() && (wanted.contains(&key) || key.contains(&wanted))
            })
            // the longest key is the most specific match
            .max_by_key(|(name, _)| name.chars().count())
            .map(|(_, usage)| usage.clone())
            .ok_or_else(|| LookupError::NotFound(medicine_name.to_string()))
    }
}
