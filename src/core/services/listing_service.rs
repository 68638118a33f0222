use std::{cmp::Ordering, fmt, str::FromStr};

use crate::core::errors::BudgetError;
use crate::domain::{Expense, Frequency};
use crate::finance::normalize_to_monthly;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Largest monthly equivalent first.
    #[default]
    Highest,
    Lowest,
    /// By name, case-insensitive.
    Alphabetical,
    /// By category, case-insensitive.
    Category,
}

impl FromStr for SortMode {
    type Err = BudgetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "highest" => Ok(SortMode::Highest),
            "lowest" => Ok(SortMode::Lowest),
            "a-z" | "az" | "name" => Ok(SortMode::Alphabetical),
            "category" => Ok(SortMode::Category),
            other => Err(BudgetError::InvalidInput(format!(
                "unknown sort mode `{}` (expected highest, lowest, a-z or category)",
                other
            ))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::Highest => "highest",
            SortMode::Lowest => "lowest",
            SortMode::Alphabetical => "a-z",
            SortMode::Category => "category",
        };
        f.write_str(label)
    }
}

/// Filters applied when listing expenses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseQuery {
    /// Case-insensitive substring matched against name or category.
    pub search: Option<String>,
    pub frequency: Option<Frequency>,
    pub sort: SortMode,
}

pub struct ListingService;

impl ListingService {
    pub fn query<'a>(expenses: &'a [Expense], query: &ExpenseQuery) -> Vec<&'a Expense> {
        let needle = query
            .search
            .as_deref()
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty());

        let mut matches: Vec<&Expense> = expenses
            .iter()
            .filter(|expense| match &needle {
                Some(needle) => {
                    expense.name.to_lowercase().contains(needle)
                        || expense.category.to_lowercase().contains(needle)
                }
                None => true,
            })
            .filter(|expense| query.frequency.map_or(true, |freq| expense.frequency == freq))
            .collect();

        matches.sort_by(|a, b| compare(a, b, query.sort));
        matches
    }
}

fn compare(a: &Expense, b: &Expense, sort: SortMode) -> Ordering {
    let monthly = |expense: &Expense| normalize_to_monthly(expense.amount, expense.frequency);
    match sort {
        SortMode::Highest => monthly(b).total_cmp(&monthly(a)),
        SortMode::Lowest => monthly(a).total_cmp(&monthly(b)),
        SortMode::Alphabetical => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortMode::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
    }
}
