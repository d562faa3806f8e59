use crate::errors::{AppError, AppResult};
use crate::models::meal::MealSchedule;
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_time;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: &[&str] = &[
    "meals",
    "birthdate",
    "usage_catalog",
    "lexicon",
    "min_ocr_score",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_meals")]
    pub meals: MealSchedule,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// Local name → usage text table used in place of the drug-info service.
    #[serde(default)]
    pub usage_catalog: Option<String>,
    /// `canonical | alias | ...` file for the `scan` command.
    #[serde(default)]
    pub lexicon: Option<String>,
    #[serde(default = "default_min_ocr_score")]
    pub min_ocr_score: f64,
}

fn default_meals() -> MealSchedule {
    MealSchedule::new(parse_time("08:00"), parse_time("12:00"), parse_time("19:00"))
}

fn default_min_ocr_score() -> f64 {
    crate::core::ocr::DEFAULT_MIN_SCORE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meals: default_meals(),
            birthdate: None,
            usage_catalog: None,
            lexicon: None,
            min_ocr_score: default_min_ocr_score(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rmedalarm")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rmedalarm")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rmedalarm.conf")
    }

    /// Load configuration from `path`, or defaults if the file is missing
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.min_ocr_score) {
            return Err(AppError::Config(format!(
                "min_ocr_score must be between 0 and 1, got {}",
                self.min_ocr_score
            )));
        }
        Ok(())
    }

    /// Write the configuration, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Keys of `CONFIG_KEYS` missing from the YAML file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn usage_catalog_path(&self) -> Option<PathBuf> {
        self.usage_catalog.as_deref().map(expand_tilde)
    }

    pub fn lexicon_path(&self) -> Option<PathBuf> {
        self.lexicon.as_deref().map(expand_tilde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_conf(name: &str, content: &str) -> PathBuf {
        let path = temp_dir().join(format!("{name}_rmedalarm.conf"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = temp_dir().join("does_not_exist_rmedalarm.conf");
        fs::remove_file(&path).ok();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let path = temp_conf(
            "partial",
            "meals:\n  breakfast: \"07:00\"\nbirthdate: 2012-04-01\n",
        );
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.meals.breakfast, parse_time("07:00"));
        assert_eq!(cfg.meals.lunch, None);
        assert_eq!(cfg.birthdate, NaiveDate::from_ymd_opt(2012, 4, 1));
        assert_eq!(cfg.min_ocr_score, 0.5);
        assert_eq!(
            Config::missing_keys(&path).unwrap(),
            vec!["usage_catalog", "lexicon", "min_ocr_score"]
        );
    }

    #[test]
    fn out_of_range_score_is_rejected() {
        let path = temp_conf("bad_score", "min_ocr_score: 3.0\n");
        assert!(matches!(
            Config::load_from(&path),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let path = temp_dir().join("roundtrip_dir_rmedalarm").join("rmedalarm.conf");
        let cfg = Config {
            lexicon: Some("~/lexicon.txt".into()),
            ..Config::default()
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }
}
