//! Expense records and the partial drafts used to create or edit them.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// How often an expense is paid.
///
/// Values the application does not recognise deserialize into
/// [`Frequency::Unknown`] so that stored data always loads; such records
/// contribute nothing to monthly figures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    OneTime,
    #[serde(other)]
    Unknown,
}

impl Frequency {
    /// The five frequencies a user can pick.
    pub const ALL: [Frequency; 5] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
        Frequency::OneTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
            Frequency::OneTime => "one-time",
            Frequency::Unknown => "unknown",
        }
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Monthly
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown frequency `{0}` (expected daily, weekly, monthly, yearly or one-time)")]
pub struct ParseFrequencyError(pub String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" | "annual" | "annually" => Ok(Frequency::Yearly),
            "one-time" | "onetime" | "once" => Ok(Frequency::OneTime),
            other => Err(ParseFrequencyError(other.to_string())),
        }
    }
}

fn amount_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A tracked cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub name: String,
    /// Non-finite amounts serialize as `null`; a `null` or missing amount
    /// loads as zero.
    #[serde(default, deserialize_with = "amount_or_zero")]
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recurring: Option<bool>,
}

impl Expense {
    /// Builds a recurring expense with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        frequency: Frequency,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: category.into(),
            name: name.into(),
            amount,
            frequency,
            icon: String::new(),
            is_recurring: Some(true),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_recurring(mut self, recurring: Option<bool>) -> Self {
        self.is_recurring = recurring;
        self
    }

    /// Recurrence as shown to the user, where an absent flag means recurring.
    pub fn recurs(&self) -> bool {
        self.is_recurring.unwrap_or(true)
    }

    /// Draft pre-filled with every field of this record.
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            name: Some(self.name.clone()),
            amount: Some(self.amount),
            category: Some(self.category.clone()),
            frequency: Some(self.frequency),
            icon: Some(self.icon.clone()),
            is_recurring: self.is_recurring,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        if self.icon.is_empty() {
            format!("{} ({})", self.name, self.category)
        } else {
            format!("{} {} ({})", self.icon, self.name, self.category)
        }
    }
}

/// Candidate expense with every field optional, as collected from a form or
/// extracted from a receipt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub frequency: Option<Frequency>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub is_recurring: Option<bool>,
}

impl ExpenseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn recurring(mut self, recurring: bool) -> Self {
        self.is_recurring = Some(recurring);
        self
    }

    /// Overlays every field set on `patch` onto this draft.
    pub fn merge(mut self, patch: ExpenseDraft) -> Self {
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.amount.is_some() {
            self.amount = patch.amount;
        }
        if patch.category.is_some() {
            self.category = patch.category;
        }
        if patch.frequency.is_some() {
            self.frequency = patch.frequency;
        }
        if patch.icon.is_some() {
            self.icon = patch.icon;
        }
        if patch.is_recurring.is_some() {
            self.is_recurring = patch.is_recurring;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_serializes_as_kebab_case() {
        let json = serde_json::to_string(&Frequency::OneTime).unwrap();
        assert_eq!(json, "\"one-time\"");
    }

    #[test]
    fn unrecognised_frequency_deserializes_to_unknown() {
        let freq: Frequency = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(freq, Frequency::Unknown);
    }

    #[test]
    fn expense_reads_camel_case_records() {
        let raw = r#"{"id":"7","category":"Food","name":"Coffee","amount":4.5,
            "frequency":"daily","icon":"c","isRecurring":false}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.is_recurring, Some(false));
        assert_eq!(expense.frequency, Frequency::Daily);
        assert!(!expense.recurs());
    }

    #[test]
    fn missing_recurring_flag_reads_as_recurring() {
        let raw = r#"{"id":"1","category":"Food","name":"Tea","amount":1,"frequency":"weekly"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.is_recurring, None);
        assert!(expense.recurs());
    }

    #[test]
    fn null_or_missing_amount_reads_as_zero() {
        let raw = r#"{"id":"2","category":"Food","name":"Tea","amount":null,"frequency":"weekly"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.amount, 0.0);

        let raw = r#"{"id":"3","category":"Food","name":"Tea","frequency":"weekly"}"#;
        let expense: Expense = serde_json::from_str(raw).unwrap();
        assert_eq!(expense.amount, 0.0);
    }

    #[test]
    fn frequency_parses_user_input() {
        assert_eq!("Weekly".parse::<Frequency>(), Ok(Frequency::Weekly));
        assert_eq!("one-time".parse::<Frequency>(), Ok(Frequency::OneTime));
        assert!("hourly".parse::<Frequency>().is_err());
    }

    #[test]
    fn merge_only_overrides_present_fields() {
        let base = ExpenseDraft::new().name("Rent").amount(1000.0).category("Housing");
        let merged = base.merge(ExpenseDraft::new().amount(1100.0));
        assert_eq!(merged.name.as_deref(), Some("Rent"));
        assert_eq!(merged.amount, Some(1100.0));
    }
}
