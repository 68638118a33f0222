mod common;

use cannon_core::{
    core::{
        services::{
            BudgetLevel, ExpenseQuery, ExpenseService, ListingService, SortMode, SummaryService,
        },
        BudgetError,
    },
    currency::{find_currency, Currency},
    domain::{ExpenseDraft, Frequency},
    finance::ValidationError,
};
use common::household;
use insta::assert_snapshot;

#[test]
fn compact_context_digest() {
    let context = SummaryService::compact_context(&household(), &Currency::default());
    assert_snapshot!(context, @"Cur:USD|Burn:1418|Cats:Housing:1200,Food:152,Insurance:50,Entertainment:16|Top5:Laptop:1800,Rent:1200,Insurance:600,Netflix:16,Coffee:5|Count:5");
}

#[test]
fn compact_context_of_nothing() {
    let euro = find_currency("EUR").unwrap();
    assert_eq!(
        SummaryService::compact_context(&[], euro),
        "Cur:EUR|Burn:0|Cats:|Top5:|Count:0"
    );
}

#[test]
fn briefing_mentions_burn_and_count() {
    let briefing = SummaryService::briefing(&household(), &Currency::default());
    assert_eq!(
        briefing,
        "Welcome to Cannon AI. Your calculated monthly burn is $1418. You are tracking 5 distinct data points. Stay sharp."
    );
}

#[test]
fn budget_levels_follow_consumption() {
    let expenses = household();

    let healthy = SummaryService::budget_status(&expenses, 5000.0);
    assert_eq!(healthy.level, BudgetLevel::Healthy);
    assert_eq!(healthy.consumed_percent, 28.0);

    let warning = SummaryService::budget_status(&expenses, 1500.0);
    assert_eq!(warning.level, BudgetLevel::Warning);
    assert_eq!(warning.consumed_percent, 95.0);
    assert!((warning.remaining - 82.3).abs() < 1e-6);

    let over = SummaryService::budget_status(&expenses, 1000.0);
    assert_eq!(over.level, BudgetLevel::OverBudget);
    assert!(over.over_budget);
    assert_eq!(over.progress_percent, 100.0);
    assert_eq!(over.remaining, 0.0);
}

#[test]
fn zero_budget_is_fully_consumed_by_any_spend() {
    let status = SummaryService::budget_status(&household(), 0.0);
    assert_eq!(status.progress_percent, 100.0);
    assert_eq!(status.level, BudgetLevel::OverBudget);

    let idle = SummaryService::budget_status(&[], 0.0);
    assert_eq!(idle.progress_percent, 0.0);
    assert_eq!(idle.level, BudgetLevel::Healthy);
}

#[test]
fn listing_filters_and_sorts() {
    let expenses = household();

    let highest = ListingService::query(&expenses, &ExpenseQuery::default());
    let names: Vec<&str> = highest.iter().map(|expense| expense.name.as_str()).collect();
    assert_eq!(names[0], "Rent");
    assert_eq!(names.last(), Some(&"Laptop"));

    let query = ExpenseQuery {
        search: Some("HOUS".into()),
        ..ExpenseQuery::default()
    };
    let housing = ListingService::query(&expenses, &query);
    assert_eq!(housing.len(), 1);

    let query = ExpenseQuery {
        frequency: Some(Frequency::Daily),
        sort: SortMode::Alphabetical,
        ..ExpenseQuery::default()
    };
    let daily = ListingService::query(&expenses, &query);
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].name, "Coffee");

    assert_eq!("a-z".parse::<SortMode>().unwrap(), SortMode::Alphabetical);
    assert!(matches!(
        "sideways".parse::<SortMode>(),
        Err(BudgetError::InvalidInput(_))
    ));
}

#[test]
fn created_expenses_get_defaults() {
    let expense = ExpenseService::create(
        ExpenseDraft::new()
            .name("  Gym  ")
            .amount(45.0)
            .category("Health"),
    )
    .unwrap();
    assert_eq!(expense.name, "Gym");
    assert_eq!(expense.frequency, Frequency::Monthly);
    assert_eq!(expense.is_recurring, Some(true));
    assert!(!expense.icon.is_empty());
    assert!(!expense.id.is_empty());
}

#[test]
fn invalid_edits_leave_records_unchanged() {
    let mut expenses = household();
    let id = expenses[0].id.clone();

    let err = ExpenseService::edit(&mut expenses, &id, ExpenseDraft::new().amount(-3.0))
        .unwrap_err();
    assert!(matches!(
        err,
        BudgetError::Validation(ValidationError::NegativeAmount)
    ));
    assert_eq!(expenses[0].amount, 1200.0);

    ExpenseService::edit(&mut expenses, &id, ExpenseDraft::new().amount(1250.0)).unwrap();
    assert_eq!(expenses[0].amount, 1250.0);
    assert_eq!(expenses[0].name, "Rent");
}

#[test]
fn missing_records_are_reported() {
    let mut expenses = household();
    assert!(matches!(
        ExpenseService::remove(&mut expenses, "nope"),
        Err(BudgetError::ExpenseNotFound(_))
    ));
    assert_eq!(expenses.len(), 5);
}
