use serde::Serialize;

use crate::currency::Currency;
use crate::domain::Expense;
use crate::finance::{calculate_total_monthly_burn, category_breakdown};

/// Progress above which the budget is flagged as nearly consumed.
pub const WARNING_THRESHOLD_PERCENT: f64 = 85.0;
const TOP_EXPENSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetLevel {
    Healthy,
    Warning,
    OverBudget,
}

/// Monthly burn measured against the user's budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub total_monthly: f64,
    pub budget: f64,
    /// Share of the budget consumed, capped at 100.
    pub progress_percent: f64,
    /// Uncapped share of the budget consumed, rounded to a whole percent.
    pub consumed_percent: f64,
    pub remaining: f64,
    pub over_budget: bool,
    pub level: BudgetLevel,
}

pub struct SummaryService;

impl SummaryService {
    pub fn budget_status(expenses: &[Expense], budget: f64) -> BudgetStatus {
        let total_monthly = calculate_total_monthly_burn(expenses);
        let ratio = if budget > 0.0 {
            total_monthly / budget * 100.0
        } else if total_monthly > 0.0 {
            100.0
        } else {
            0.0
        };
        let progress_percent = ratio.min(100.0);
        let over_budget = total_monthly > budget;
        let level = if over_budget {
            BudgetLevel::OverBudget
        } else if progress_percent > WARNING_THRESHOLD_PERCENT {
            BudgetLevel::Warning
        } else {
            BudgetLevel::Healthy
        };
        BudgetStatus {
            total_monthly,
            budget,
            progress_percent,
            consumed_percent: ratio.round(),
            remaining: (budget - total_monthly).max(0.0),
            over_budget,
            level,
        }
    }

    /// Dense one-line digest of the expense collection handed to text
    /// generation providers.
    ///
    /// Format: `Cur:<code>|Burn:<n>|Cats:<cat>:<n>,...|Top5:<name>:<n>,...|Count:<n>`.
    /// Categories follow the breakdown order; Top5 lists the largest raw
    /// amounts regardless of frequency.
    pub fn compact_context(expenses: &[Expense], currency: &Currency) -> String {
        let burn = calculate_total_monthly_burn(expenses);

        let categories = category_breakdown(expenses)
            .iter()
            .map(|entry| format!("{}:{}", entry.category, whole(entry.total)))
            .collect::<Vec<_>>()
            .join(",");

        let mut ranked: Vec<&Expense> = expenses.iter().collect();
        ranked.sort_by(|a, b| b.amount.total_cmp(&a.amount));
        let top = ranked
            .iter()
            .take(TOP_EXPENSES)
            .map(|expense| format!("{}:{}", expense.name, whole(expense.amount)))
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "Cur:{}|Burn:{}|Cats:{}|Top5:{}|Count:{}",
            currency.code,
            whole(burn),
            categories,
            top,
            expenses.len()
        )
    }

    /// Spoken welcome summary.
    pub fn briefing(expenses: &[Expense], currency: &Currency) -> String {
        let burn = calculate_total_monthly_burn(expenses);
        format!(
            "Welcome to Cannon AI. Your calculated monthly burn is {}{:.0}. You are tracking {} distinct data points. Stay sharp.",
            currency.symbol,
            burn.round(),
            expenses.len()
        )
    }
}

/// Rounds half up to a whole number for compact display.
fn whole(value: f64) -> String {
    format!("{:.0}", (value + 0.5).floor() + 0.0)
}
