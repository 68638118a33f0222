pub mod expense_service;
pub mod listing_service;
pub mod summary_service;

pub use expense_service::ExpenseService;
pub use listing_service::{ExpenseQuery, ListingService, SortMode};
pub use summary_service::{BudgetLevel, BudgetStatus, SummaryService};
