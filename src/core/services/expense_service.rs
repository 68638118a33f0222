use tracing::info;
use uuid::Uuid;

use crate::core::errors::{BudgetError, Result};
use crate::domain::{
    category::resolve_icon,
    common::{find_by_id, position_of},
    Expense, ExpenseDraft,
};
use crate::finance::validate_expense_input;

pub struct ExpenseService;

impl ExpenseService {
    /// Validates `draft` and turns it into a record with a fresh id.
    ///
    /// Frequency defaults to monthly, recurrence to `true`, and the icon to
    /// the category's default.
    pub fn create(draft: ExpenseDraft) -> Result<Expense> {
        Self::build(Uuid::new_v4().to_string(), draft)
    }

    pub fn add(expenses: &mut Vec<Expense>, draft: ExpenseDraft) -> Result<String> {
        let expense = Self::create(draft)?;
        let id = expense.id.clone();
        info!(id = %id, name = %expense.name, "added expense");
        expenses.push(expense);
        Ok(id)
    }

    /// Applies the fields set on `patch` to the record `id`, validating the
    /// merged result before anything is changed.
    pub fn edit(expenses: &mut [Expense], id: &str, patch: ExpenseDraft) -> Result<()> {
        let index =
            position_of(expenses, id).ok_or_else(|| BudgetError::ExpenseNotFound(id.into()))?;
        let mut merged = expenses[index].to_draft().merge(patch);
        if merged.icon.as_deref().is_some_and(str::is_empty) {
            merged.icon = None;
        }
        let updated = Self::build(id.to_string(), merged)?;
        info!(id = %id, "updated expense");
        expenses[index] = updated;
        Ok(())
    }

    pub fn remove(expenses: &mut Vec<Expense>, id: &str) -> Result<Expense> {
        let index =
            position_of(expenses, id).ok_or_else(|| BudgetError::ExpenseNotFound(id.into()))?;
        let removed = expenses.remove(index);
        info!(id = %id, name = %removed.name, "removed expense");
        Ok(removed)
    }

    pub fn get<'a>(expenses: &'a [Expense], id: &str) -> Result<&'a Expense> {
        find_by_id(expenses, id).ok_or_else(|| BudgetError::ExpenseNotFound(id.into()))
    }

    fn build(id: String, draft: ExpenseDraft) -> Result<Expense> {
        validate_expense_input(&draft)?;
        if draft.amount.is_some_and(|amount| !amount.is_finite()) {
            return Err(BudgetError::InvalidInput(
                "amount must be a finite number".into(),
            ));
        }
        let ExpenseDraft {
            name,
            amount,
            category,
            frequency,
            icon,
            is_recurring,
        } = draft;
        let category = category.unwrap_or_default();
        Ok(Expense {
            id,
            icon: resolve_icon(icon.as_deref(), &category),
            name: name.unwrap_or_default().trim().to_string(),
            amount: amount.unwrap_or_default(),
            frequency: frequency.unwrap_or_default(),
            is_recurring: Some(is_recurring.unwrap_or(true)),
            category,
        })
    }
}
