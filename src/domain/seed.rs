//! Default collection returned when nothing usable has been stored yet.

use super::expense::{Expense, Frequency};

type SeedRow = (&'static str, &'static str, &'static str, f64, Frequency, &'static str, bool);

#[rustfmt::skip]
const SEED: [SeedRow; 51] = [
    ("1", "Housing", "Rent / Mortgage", 2200.0, Frequency::Monthly, "🏠", true),
    ("2", "Housing", "Property Tax / HOA", 350.0, Frequency::Monthly, "🏘️", true),
    ("3", "Housing", "Home Maintenance Fund", 150.0, Frequency::Monthly, "🔨", true),
    ("4", "Utilities", "Electricity", 120.0, Frequency::Monthly, "⚡", true),
    ("5", "Utilities", "Water / Sewer", 60.0, Frequency::Monthly, "💧", true),
    ("6", "Utilities", "Gas / Heating", 50.0, Frequency::Monthly, "🔥", true),
    ("7", "Utilities", "Internet (Fiber)", 89.0, Frequency::Monthly, "🌐", true),
    ("8", "Utilities", "Mobile Phone Plan", 75.0, Frequency::Monthly, "📱", true),
    ("9", "Utilities", "Trash / Recycling", 25.0, Frequency::Monthly, "♻️", true),
    ("10", "Food", "Groceries", 150.0, Frequency::Weekly, "🛒", true),
    ("11", "Food", "Dining Out", 60.0, Frequency::Weekly, "🍽️", false),
    ("12", "Food", "Morning Coffee", 6.0, Frequency::Daily, "☕", true),
    ("13", "Food", "Work Lunches", 15.0, Frequency::Daily, "🥪", true),
    ("14", "Food", "Snacks / Vending", 20.0, Frequency::Weekly, "🍫", false),
    ("15", "Food", "Alcohol / Bars", 80.0, Frequency::Monthly, "🍻", false),
    ("16", "Transport", "Car Payment", 450.0, Frequency::Monthly, "🚘", true),
    ("17", "Transport", "Car Insurance", 110.0, Frequency::Monthly, "🛡️", true),
    ("18", "Transport", "Fuel / Charging", 140.0, Frequency::Monthly, "⛽", true),
    ("19", "Transport", "Public Transit Pass", 90.0, Frequency::Monthly, "🚇", true),
    ("20", "Transport", "Uber / Lyft", 35.0, Frequency::Monthly, "🚕", false),
    ("21", "Transport", "Car Maint / Repairs", 50.0, Frequency::Monthly, "🔧", true),
    ("22", "Transport", "Parking / Tolls", 30.0, Frequency::Monthly, "🅿️", false),
    ("23", "Health", "Health Insurance Premium", 250.0, Frequency::Monthly, "🏥", true),
    ("24", "Health", "Gym Membership", 60.0, Frequency::Monthly, "💪", true),
    ("25", "Health", "Therapy / Mental Health", 120.0, Frequency::Monthly, "🧘", true),
    ("26", "Health", "Pharmacy / Meds", 40.0, Frequency::Monthly, "💊", true),
    ("27", "Health", "Dental / Vision Co-pay", 200.0, Frequency::Yearly, "👓", false),
    ("28", "Personal Care", "Haircuts / Salon", 50.0, Frequency::Monthly, "✂️", true),
    ("29", "Personal Care", "Toiletries / Hygiene", 40.0, Frequency::Monthly, "🧴", true),
    ("30", "Personal Care", "Cosmetics / Skincare", 45.0, Frequency::Monthly, "💄", true),
    ("31", "Personal Care", "Clothing / Apparel", 100.0, Frequency::Monthly, "👕", false),
    ("32", "Personal Care", "Laundry / Dry Cleaning", 30.0, Frequency::Monthly, "🧺", true),
    ("33", "Software", "Google One / iCloud", 10.0, Frequency::Monthly, "☁️", true),
    ("34", "Software", "AI Subscriptions", 40.0, Frequency::Monthly, "🤖", true),
    ("35", "Software", "Streaming (Netflix/HBO)", 35.0, Frequency::Monthly, "🎬", true),
    ("36", "Software", "Music (Spotify/Apple)", 15.0, Frequency::Monthly, "🎵", true),
    ("37", "Tech", "Hardware Upgrade Fund", 100.0, Frequency::Monthly, "💻", true),
    ("38", "Debt", "Student Loans", 300.0, Frequency::Monthly, "🎓", true),
    ("39", "Debt", "Credit Card Interest", 60.0, Frequency::Monthly, "💳", true),
    ("40", "Savings", "Emergency Fund", 200.0, Frequency::Monthly, "🆘", true),
    ("41", "Investing", "Retirement (401k/IRA)", 500.0, Frequency::Monthly, "📈", true),
    ("42", "Investing", "Crypto / Stocks", 150.0, Frequency::Monthly, "🪙", true),
    ("43", "Family", "Childcare / Babysitting", 400.0, Frequency::Monthly, "👶", true),
    ("44", "Pets", "Pet Food & Supplies", 60.0, Frequency::Monthly, "🐶", true),
    ("45", "Pets", "Vet Bills (Avg)", 250.0, Frequency::Yearly, "🩺", false),
    ("46", "Education", "Books / Courses", 40.0, Frequency::Monthly, "📚", true),
    ("47", "Entertainment", "Movies / Events", 80.0, Frequency::Monthly, "🎟️", false),
    ("48", "Entertainment", "Gaming / Hobbies", 50.0, Frequency::Monthly, "🎮", true),
    ("49", "Gifts", "Birthdays / Holidays", 600.0, Frequency::Yearly, "🎁", false),
    ("50", "Miscellaneous", "Amazon / Online Shopping", 100.0, Frequency::Monthly, "📦", false),
    ("51", "Miscellaneous", "General Buffer", 100.0, Frequency::Monthly, "🤷", true),
];

/// Builds the default expense collection.
pub fn initial_expenses() -> Vec<Expense> {
    SEED.iter()
        .map(|&(id, category, name, amount, frequency, icon, recurring)| Expense {
            id: id.to_string(),
            category: category.to_string(),
            name: name.to_string(),
            amount,
            frequency,
            icon: icon.to_string(),
            is_recurring: Some(recurring),
        })
        .collect()
}
