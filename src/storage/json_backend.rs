use chrono::{DateTime, NaiveDateTime, Utc};
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
    domain::{initial_expenses, Expense},
};

use super::{ExpenseStore, Result};

const BACKUP_PREFIX: &str = "expenses_";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const DEFAULT_RETENTION: usize = 5;

/// A stored snapshot of the expense collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupInfo {
    pub name: String,
    pub path: PathBuf,
    pub created_at: Option<DateTime<Utc>>,
}

/// Stores the expense collection as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
    expenses_file: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let backups_dir = PathResolver::backup_dir_in(&root);
        ensure_dir(&backups_dir)?;
        Ok(Self {
            expenses_file: PathResolver::expenses_file_in(&root),
            backups_dir,
            root,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn expenses_path(&self) -> &Path {
        &self.expenses_file
    }

    fn snapshot_name(note: Option<&str>) -> String {
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut name = format!("{}{}", BACKUP_PREFIX, timestamp);
        if let Some(label) = sanitize_note(note) {
            name.push('_');
            name.push_str(&label);
        }
        name.push_str(&format!(".{}", BACKUP_EXTENSION));
        name
    }

    /// Copies unreadable stored data into the backups folder so that falling
    /// back to the seed set never discards it.
    fn preserve_unreadable(&self, data: &str) -> Result<String> {
        ensure_dir(&self.backups_dir)?;
        let name = Self::snapshot_name(Some("unreadable"));
        write_atomic(&self.backups_dir.join(&name), data)?;
        Ok(name)
    }

    fn prune_backups(&self) -> Result<()> {
        let backups = self.list_backups()?;
        for stale in backups.iter().skip(self.retention) {
            debug!(backup = %stale.name, "removing backup past retention");
            fs::remove_file(&stale.path)?;
        }
        Ok(())
    }
}

impl ExpenseStore for JsonStorage {
    fn load_expenses(&self) -> Result<Vec<Expense>> {
        if !self.expenses_file.exists() {
            debug!(path = %self.expenses_file.display(), "no stored expenses, using seed set");
            return Ok(initial_expenses());
        }
        let data = fs::read_to_string(&self.expenses_file)?;
        match serde_json::from_str::<Vec<Expense>>(&data) {
            Ok(expenses) if !expenses.is_empty() => {
                debug!(count = expenses.len(), "loaded stored expenses");
                Ok(expenses)
            }
            Ok(_) => {
                debug!("stored expense list is empty, using seed set");
                Ok(initial_expenses())
            }
            Err(err) => {
                let kept = self.preserve_unreadable(&data)?;
                warn!(
                    error = %err,
                    backup = %kept,
                    "corrupt expense storage found, resetting to default"
                );
                Ok(initial_expenses())
            }
        }
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)?;
        write_atomic(&self.expenses_file, &json)?;
        debug!(count = expenses.len(), "saved expenses");
        Ok(())
    }

    fn backup(&self, expenses: &[Expense], note: Option<&str>) -> Result<String> {
        ensure_dir(&self.backups_dir)?;
        let name = Self::snapshot_name(note);
        let json = serde_json::to_string_pretty(expenses)?;
        write_atomic(&self.backups_dir.join(&name), &json)?;
        info!(backup = %name, count = expenses.len(), "created expense backup");
        self.prune_backups()?;
        Ok(name)
    }

    fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if !name.starts_with(BACKUP_PREFIX) {
                continue;
            }
            entries.push(BackupInfo {
                name: name.to_string(),
                created_at: parse_timestamp(name),
                path: path.clone(),
            });
        }
        entries.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(entries)
    }

    fn restore(&self, backup_name: &str) -> Result<Vec<Expense>> {
        if !is_backup_name(backup_name, BACKUP_PREFIX, BACKUP_EXTENSION) {
            return Err(BudgetError::StorageError(format!(
                "`{}` is not an expense backup name",
                backup_name
            )));
        }
        let path = self.backups_dir.join(backup_name);
        if !path.exists() {
            return Err(BudgetError::StorageError(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let data = fs::read_to_string(&path)?;
        let expenses: Vec<Expense> = serde_json::from_str(&data)?;
        self.save_expenses(&expenses)?;
        info!(backup = %backup_name, count = expenses.len(), "restored expense backup");
        Ok(expenses)
    }
}

fn parse_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let stem = name.strip_prefix(BACKUP_PREFIX)?;
    let raw = stem.get(..15)?;
    NaiveDateTime::parse_from_str(raw, BACKUP_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}
