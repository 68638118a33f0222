use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

use crate::{
    core::{
        errors::BudgetError,
        utils::{ensure_dir, is_backup_name, sanitize_note, write_atomic, PathResolver},
    },
    currency::Currency,
};

pub const DEFAULT_MONTHLY_BUDGET: f64 = 5000.0;

const BACKUP_PREFIX: &str = "config_";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// User settings that live alongside the expense collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub currency: Currency,
    #[serde(default = "default_budget")]
    pub monthly_budget: f64,
}

fn default_budget() -> f64 {
    DEFAULT_MONTHLY_BUDGET
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }
}

impl Config {
    /// Replaces unusable values with defaults, reporting what was replaced.
    fn sanitized(mut self) -> (Self, Vec<&'static str>) {
        let mut replaced = Vec::new();
        if self.currency.code.trim().is_empty() || self.currency.symbol.trim().is_empty() {
            self.currency = Currency::default();
            replaced.push("currency");
        }
        if !self.monthly_budget.is_finite() || self.monthly_budget < 0.0 {
            self.monthly_budget = DEFAULT_MONTHLY_BUDGET;
            replaced.push("monthly_budget");
        }
        (self, replaced)
    }
}

pub struct ConfigManager {
    path: PathBuf,
    backups_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        let backups_dir = PathResolver::config_backup_dir_in(&base);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            backups_dir,
        })
    }

    /// Loads the stored settings. Missing or corrupt files yield defaults.
    pub fn load(&self) -> Result<Config, BudgetError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config = match serde_json::from_str::<Config>(&data) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "corrupt config found, using defaults");
                return Ok(Config::default());
            }
        };
        let (config, replaced) = config.sanitized();
        if !replaced.is_empty() {
            warn!(fields = ?replaced, "invalid config values replaced with defaults");
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String, BudgetError> {
        ensure_dir(&self.backups_dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut name = format!("{}{}", BACKUP_PREFIX, timestamp);
        if let Some(label) = sanitize_note(note) {
            name.push('_');
            name.push_str(&label);
        }
        name.push_str(&format!(".{}", BACKUP_EXTENSION));
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.backups_dir.join(&name), &json)?;
        info!(backup = %name, "created config backup");
        Ok(name)
    }

    pub fn restore(&self, backup_name: &str) -> Result<Config, BudgetError> {
        if !is_backup_name(backup_name, BACKUP_PREFIX, BACKUP_EXTENSION) {
            return Err(BudgetError::ConfigError(format!(
                "`{}` is not a configuration backup name",
                backup_name
            )));
        }
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(BudgetError::ConfigError(format!(
                "configuration backup `{}` not found",
                backup_name
            )));
        }
        let data = fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&data)?;
        let (config, _) = config.sanitized();
        self.save(&config)?;
        Ok(config)
    }

    pub fn list_backups(&self) -> Result<Vec<String>, BudgetError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                if is_backup_name(name, BACKUP_PREFIX, BACKUP_EXTENSION) {
                    entries.push(name.to_string());
                }
            }
        }
        entries.sort_by(|a, b| parse_timestamp(b).cmp(&parse_timestamp(a)).then(b.cmp(a)));
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn parse_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let raw = name.strip_prefix(BACKUP_PREFIX)?.get(..15)?;
    chrono::NaiveDateTime::parse_from_str(raw, BACKUP_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}
