use thiserror::Error;

use crate::domain::ExpenseDraft;

/// First rule a candidate expense breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Amount must be a number.")]
    AmountNotANumber,
    #[error("Amount cannot be negative.")]
    NegativeAmount,
    #[error("Category is required.")]
    CategoryRequired,
}

/// Checks name, amount and category in that order, stopping at the first
/// failure. Frequency is not checked.
pub fn validate_expense_input(draft: &ExpenseDraft) -> Result<(), ValidationError> {
    let has_name = draft
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    if !has_name {
        return Err(ValidationError::NameRequired);
    }

    let amount = match draft.amount {
        Some(amount) if !amount.is_nan() => amount,
        _ => return Err(ValidationError::AmountNotANumber),
    };
    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }

    if draft.category.as_deref().map_or(true, str::is_empty) {
        return Err(ValidationError::CategoryRequired);
    }

    Ok(())
}
