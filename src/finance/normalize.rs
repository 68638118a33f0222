use crate::domain::Frequency;

/// Average days per month (365.25 / 12).
pub const DAILY_MULTIPLIER: f64 = 30.44;
/// Average weeks per month (52.14 / 12).
pub const WEEKLY_MULTIPLIER: f64 = 4.345;
pub const MONTHLY_MULTIPLIER: f64 = 1.0;
pub const YEARLY_MULTIPLIER: f64 = 1.0 / 12.0;

/// Factor converting an amount paid at `frequency` into a monthly average.
///
/// One-time and unrecognised frequencies have no monthly equivalent.
pub fn monthly_multiplier(frequency: Frequency) -> f64 {
    match frequency {
        Frequency::Daily => DAILY_MULTIPLIER,
        Frequency::Weekly => WEEKLY_MULTIPLIER,
        Frequency::Monthly => MONTHLY_MULTIPLIER,
        Frequency::Yearly => YEARLY_MULTIPLIER,
        Frequency::OneTime | Frequency::Unknown => 0.0,
    }
}

/// Converts `amount` paid at `frequency` into its average monthly value.
///
/// Negative and NaN amounts yield `0.0`; this never fails. Infinite
/// amounts are passed through the multiplier unchanged, so an infinite
/// one-time or unknown amount yields NaN (`∞ × 0`).
///
/// ```
/// use cannon_core::{domain::Frequency, finance::normalize_to_monthly};
///
/// assert!((normalize_to_monthly(1200.0, Frequency::Yearly) - 100.0).abs() < 1e-9);
/// assert_eq!(normalize_to_monthly(-5.0, Frequency::Monthly), 0.0);
/// ```
pub fn normalize_to_monthly(amount: f64, frequency: Frequency) -> f64 {
    if amount.is_nan() || amount < 0.0 {
        return 0.0;
    }
    amount * monthly_multiplier(frequency)
}
