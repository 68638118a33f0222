use crate::cli::context::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::services::{BudgetLevel, SummaryService};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show monthly burn against the budget",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "breakdown",
            "Show monthly spend per category",
            "breakdown",
            cmd_breakdown,
        ),
        CommandEntry::new(
            "context",
            "Print the compact summary handed to AI planners",
            "context",
            cmd_context,
        ),
        CommandEntry::new(
            "briefing",
            "Print the spoken briefing text",
            "briefing",
            cmd_briefing,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let status =
        SummaryService::budget_status(context.manager.expenses(), context.config.monthly_budget);
    output::section("Monthly burn");
    output::line(format!(
        "Total monthly burn : {}",
        context.money(status.total_monthly)
    ));
    output::line(format!("Budget             : {}", context.money(status.budget)));
    output::line(format!(
        "Consumed           : {}%",
        status.consumed_percent
    ));
    output::line(format!(
        "Remaining          : {}",
        context.money(status.remaining)
    ));
    match status.level {
        BudgetLevel::Healthy => output::success("Within budget"),
        BudgetLevel::Warning => output::warning("Budget nearly consumed"),
        BudgetLevel::OverBudget => output::error("Over budget"),
    }
    Ok(())
}

fn cmd_breakdown(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let breakdown = context.manager.breakdown();
    let burn = context.manager.total_monthly_burn();
    output::section("Spend by category");
    if breakdown.is_empty() {
        output::info("Nothing recurring is tracked yet.");
        return Ok(());
    }
    for entry in breakdown {
        let share = if burn > 0.0 { entry.total / burn * 100.0 } else { 0.0 };
        output::line(format!(
            "{} {} {:>5.1}%",
            output::fit(&entry.category, 16),
            output::fit(&context.money(entry.total), 12),
            share
        ));
    }
    Ok(())
}

fn cmd_context(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(SummaryService::compact_context(
        context.manager.expenses(),
        &context.config.currency,
    ));
    Ok(())
}

fn cmd_briefing(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::line(SummaryService::briefing(
        context.manager.expenses(),
        &context.config.currency,
    ));
    Ok(())
}
