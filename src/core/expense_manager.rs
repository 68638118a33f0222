use tracing::{error, info};

use crate::core::errors::Result;
use crate::core::services::ExpenseService;
use crate::domain::{Expense, ExpenseDraft};
use crate::finance::{calculate_total_monthly_burn, category_breakdown, CategoryTotal};
use crate::storage::{BackupInfo, ExpenseStore};

/// Facade that owns the in-memory expense collection and mirrors every
/// mutation to the persistence provider.
///
/// Saves after a mutation are fire-and-forget: a failed save is logged and
/// the in-memory change stands.
pub struct ExpenseManager {
    expenses: Vec<Expense>,
    storage: Box<dyn ExpenseStore>,
}

impl ExpenseManager {
    /// Loads the stored collection, or the seed set when nothing usable is stored.
    pub fn open(storage: Box<dyn ExpenseStore>) -> Result<Self> {
        let expenses = storage.load_expenses()?;
        info!(count = expenses.len(), "expense collection loaded");
        Ok(Self { expenses, storage })
    }

    pub fn storage(&self) -> &dyn ExpenseStore {
        self.storage.as_ref()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: &str) -> Result<&Expense> {
        ExpenseService::get(&self.expenses, id)
    }

    pub fn total_monthly_burn(&self) -> f64 {
        calculate_total_monthly_burn(&self.expenses)
    }

    pub fn breakdown(&self) -> Vec<CategoryTotal> {
        category_breakdown(&self.expenses)
    }

    pub fn add(&mut self, draft: ExpenseDraft) -> Result<String> {
        let id = ExpenseService::add(&mut self.expenses, draft)?;
        self.persist();
        Ok(id)
    }

    pub fn edit(&mut self, id: &str, patch: ExpenseDraft) -> Result<()> {
        ExpenseService::edit(&mut self.expenses, id, patch)?;
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Expense> {
        let removed = ExpenseService::remove(&mut self.expenses, id)?;
        self.persist();
        Ok(removed)
    }

    pub fn backup(&self, note: Option<&str>) -> Result<String> {
        self.storage.backup(&self.expenses, note)
    }

    pub fn list_backups(&self) -> Result<Vec<BackupInfo>> {
        self.storage.list_backups()
    }

    /// Replaces the in-memory collection with the named backup.
    pub fn restore(&mut self, backup_name: &str) -> Result<usize> {
        self.expenses = self.storage.restore(backup_name)?;
        Ok(self.expenses.len())
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save_expenses(&self.expenses) {
            error!(error = %err, "failed to save expenses");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::BudgetError;
    use crate::domain::Frequency;
    use std::sync::{Arc, Mutex};

    /// In-memory store that records every save and can be told to fail.
    #[derive(Default, Clone)]
    struct RecordingStore {
        saved: Arc<Mutex<Vec<Vec<Expense>>>>,
        fail_saves: bool,
    }

    impl ExpenseStore for RecordingStore {
        fn load_expenses(&self) -> Result<Vec<Expense>> {
            Ok(Vec::new())
        }

        fn save_expenses(&self, expenses: &[Expense]) -> Result<()> {
            if self.fail_saves {
                return Err(BudgetError::StorageError("disk full".into()));
            }
            self.saved.lock().unwrap().push(expenses.to_vec());
            Ok(())
        }

        fn backup(&self, _expenses: &[Expense], _note: Option<&str>) -> Result<String> {
            Ok("backup.json".into())
        }

        fn list_backups(&self) -> Result<Vec<BackupInfo>> {
            Ok(Vec::new())
        }

        fn restore(&self, backup_name: &str) -> Result<Vec<Expense>> {
            Err(BudgetError::StorageError(format!("{backup_name} missing")))
        }
    }

    fn rent() -> ExpenseDraft {
        ExpenseDraft::new()
            .name("Rent")
            .amount(1200.0)
            .category("Housing")
            .frequency(Frequency::Monthly)
    }

    #[test]
    fn mutations_are_saved() {
        let store = RecordingStore::default();
        let saved = store.saved.clone();
        let mut manager = ExpenseManager::open(Box::new(store)).unwrap();

        let id = manager.add(rent()).unwrap();
        manager.edit(&id, ExpenseDraft::new().amount(1300.0)).unwrap();
        manager.remove(&id).unwrap();

        let saved = saved.lock().unwrap();
        assert_eq!(saved.len(), 3);
        assert_eq!(saved[1][0].amount, 1300.0);
        assert!(saved[2].is_empty());
    }

    #[test]
    fn failed_saves_do_not_fail_mutations() {
        let store = RecordingStore {
            fail_saves: true,
            ..RecordingStore::default()
        };
        let mut manager = ExpenseManager::open(Box::new(store)).unwrap();
        manager.add(rent()).unwrap();
        assert_eq!(manager.expenses().len(), 1);
        assert!((manager.total_monthly_burn() - 1200.0).abs() < 1e-9);
    }

    #[test]
    fn invalid_drafts_are_not_saved() {
        let store = RecordingStore::default();
        let saved = store.saved.clone();
        let mut manager = ExpenseManager::open(Box::new(store)).unwrap();
        assert!(manager.add(ExpenseDraft::new().name("Rent")).is_err());
        assert!(saved.lock().unwrap().is_empty());
    }
}
