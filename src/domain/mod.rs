pub mod category;
pub mod common;
pub mod expense;
pub mod seed;

pub use common::{Displayable, Identifiable};
pub use expense::{Expense, ExpenseDraft, Frequency, ParseFrequencyError};
pub use seed::initial_expenses;
