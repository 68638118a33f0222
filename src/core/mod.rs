pub mod errors;
pub mod expense_manager;
pub mod services;
pub mod utils;

pub use errors::{BudgetError, CliError, Result};
pub use expense_manager::ExpenseManager;
