use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Expense, Frequency};

use super::normalize::normalize_to_monthly;

/// Monthly total for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Whether an expense is explicitly a spent, non-recurring one-off.
fn is_explicit_one_off(expense: &Expense) -> bool {
    expense.frequency == Frequency::OneTime && !expense.is_recurring.unwrap_or(false)
}

/// Average monthly spend across `expenses`.
///
/// One-time expenses not flagged recurring are skipped outright. Every other
/// record adds its normalized monthly value, so a weekly expense marked
/// non-recurring still counts in full, and a one-time expense marked
/// recurring adds zero. An infinite amount makes the total infinite, or NaN
/// when it sits on a one-time record flagged recurring.
pub fn calculate_total_monthly_burn(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|expense| !is_explicit_one_off(expense))
        .map(|expense| normalize_to_monthly(expense.amount, expense.frequency))
        .sum()
}

/// Monthly totals per category, largest first.
///
/// Only strictly positive contributions are accumulated (NaN is not), so categories that
/// never receive one are absent from the result. Ties keep no guaranteed
/// order.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for expense in expenses {
        let value = normalize_to_monthly(expense.amount, expense.frequency);
        if value > 0.0 {
            let entry = totals.entry(expense.category.as_str()).or_insert_with(|| {
                order.push(expense.category.as_str());
                0.0
            });
            *entry += value;
        }
    }

    let mut breakdown: Vec<CategoryTotal> = order
        .into_iter()
        .map(|category| CategoryTotal {
            category: category.to_string(),
            total: totals.get(category).copied().unwrap_or_default(),
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.total_cmp(&a.total));
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64, frequency: Frequency, recurring: Option<bool>) -> Expense {
        Expense::new("item", category, amount, frequency).with_recurring(recurring)
    }

    #[test]
    fn empty_collection_burns_nothing() {
        assert_eq!(calculate_total_monthly_burn(&[]), 0.0);
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn burn_sums_monthly_equivalents() {
        let expenses = vec![
            expense("Housing", 100.0, Frequency::Monthly, Some(true)),
            expense("Software", 1200.0, Frequency::Yearly, Some(true)),
        ];
        assert!((calculate_total_monthly_burn(&expenses) - 200.0).abs() < 1e-9);
    }

    #[test]
    fn non_recurring_weekly_still_counts() {
        let expenses = vec![expense("Food", 100.0, Frequency::Weekly, Some(false))];
        assert!((calculate_total_monthly_burn(&expenses) - 434.5).abs() < 1e-9);
    }

    #[test]
    fn one_time_contributes_zero_regardless_of_flag() {
        for flag in [None, Some(false), Some(true)] {
            let expenses = vec![expense("Gifts", 500.0, Frequency::OneTime, flag)];
            assert_eq!(calculate_total_monthly_burn(&expenses), 0.0);
        }
    }

    #[test]
    fn breakdown_merges_categories_and_sorts_descending() {
        let expenses = vec![
            expense("Food", 10.0, Frequency::Monthly, None),
            expense("Housing", 900.0, Frequency::Monthly, None),
            expense("Food", 20.0, Frequency::Weekly, None),
            expense("Gifts", 300.0, Frequency::OneTime, Some(false)),
        ];
        let breakdown = category_breakdown(&expenses);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, "Housing");
        assert_eq!(breakdown[1].category, "Food");
        assert!((breakdown[1].total - (10.0 + 20.0 * 4.345)).abs() < 1e-9);
    }

    #[test]
    fn breakdown_skips_zero_and_malformed_records() {
        let expenses = vec![
            expense("Food", 0.0, Frequency::Monthly, None),
            expense("Tech", -40.0, Frequency::Monthly, None),
            expense("Pets", f64::NAN, Frequency::Monthly, None),
            expense("Misc", 10.0, Frequency::Unknown, None),
        ];
        assert!(category_breakdown(&expenses).is_empty());
        assert_eq!(calculate_total_monthly_burn(&expenses), 0.0);
    }
}
