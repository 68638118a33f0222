//! Pure normalization and aggregation of expense records.
//!
//! Nothing here performs I/O, logs, or mutates its inputs; every function is
//! total over its argument domain.

pub mod aggregate;
pub mod normalize;
pub mod validation;

pub use aggregate::{calculate_total_monthly_burn, category_breakdown, CategoryTotal};
pub use normalize::{monthly_multiplier, normalize_to_monthly};
pub use validation::{validate_expense_input, ValidationError};
