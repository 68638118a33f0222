use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::core::errors::BudgetError;
use crate::core::services::{ExpenseQuery, ListingService};
use crate::domain::{Displayable, ExpenseDraft, Frequency};
use crate::finance::normalize_to_monthly;

use super::{parse_amount, split_flags};

const LIST_USAGE: &str =
    "list [--sort highest|lowest|a-z|category] [--frequency <frequency>] [--search <term>]";
const ADD_USAGE: &str =
    "add <name> <amount> <category> [frequency] [--one-off] [--icon <glyph>]";
const EDIT_USAGE: &str =
    "edit <id> [name=..] [amount=..] [category=..] [frequency=..] [recurring=true|false] [icon=..]";
const REMOVE_USAGE: &str = "remove <id>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "List tracked expenses", LIST_USAGE, cmd_list),
        CommandEntry::new("add", "Track a new expense", ADD_USAGE, cmd_add),
        CommandEntry::new("edit", "Change fields of an expense", EDIT_USAGE, cmd_edit),
        CommandEntry::new("remove", "Stop tracking an expense", REMOVE_USAGE, cmd_remove),
    ]
}

fn parse_frequency(raw: &str) -> Result<Frequency, CommandError> {
    raw.parse::<Frequency>()
        .map_err(|err| CommandError::Core(BudgetError::from(err)))
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, flags) = split_flags(args, &[])?;
    if !positional.is_empty() {
        return Err(CommandError::usage(LIST_USAGE));
    }
    let mut query = ExpenseQuery::default();
    for (name, value) in flags {
        let value = value.unwrap_or_default();
        match name {
            "sort" => query.sort = value.parse().map_err(CommandError::Core)?,
            "frequency" => query.frequency = Some(parse_frequency(value)?),
            "search" => query.search = Some(value.to_string()),
            _ => return Err(CommandError::usage(LIST_USAGE)),
        }
    }

    let expenses = context.manager.expenses();
    let listed = ListingService::query(expenses, &query);
    output::section(format!("Expenses ({})", query.sort));
    if listed.is_empty() {
        output::info("No expenses match.");
        return Ok(());
    }
    for expense in &listed {
        let monthly = normalize_to_monthly(expense.amount, expense.frequency);
        output::line(format!(
            "{} {} {} {} {} {} {}{}",
            output::fit(&expense.id, 8),
            expense.icon,
            output::fit(&expense.name, 26),
            output::fit(&expense.category, 14),
            output::fit(&context.money(expense.amount), 10),
            output::fit(expense.frequency.as_str(), 9),
            context.money(monthly),
            if expense.recurs() { "" } else { " (one-off)" }
        ));
    }
    output::info(format!(
        "{} of {} expenses, monthly burn {}",
        listed.len(),
        expenses.len(),
        context.money(context.manager.total_monthly_burn())
    ));
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (positional, flags) = split_flags(args, &["one-off"])?;
    if positional.len() < 3 || positional.len() > 4 {
        return Err(CommandError::usage(ADD_USAGE));
    }

    let mut draft = ExpenseDraft::new()
        .name(positional[0])
        .amount(parse_amount(positional[1]))
        .category(positional[2]);
    if let Some(raw) = positional.get(3) {
        draft = draft.frequency(parse_frequency(raw)?);
    }
    for (name, value) in flags {
        match (name, value) {
            ("one-off", _) => draft = draft.recurring(false),
            ("icon", Some(icon)) => draft = draft.icon(icon),
            _ => return Err(CommandError::usage(ADD_USAGE)),
        }
    }

    let id = context.manager.add(draft)?;
    let expense = context.manager.get(&id)?;
    output::success(format!(
        "Added {} {} {} with id {}",
        expense.display_label(),
        context.money(expense.amount),
        expense.frequency,
        id
    ));
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((id, assignments)) = args.split_first() else {
        return Err(CommandError::usage(EDIT_USAGE));
    };
    if assignments.is_empty() {
        return Err(CommandError::usage(EDIT_USAGE));
    }

    let mut patch = ExpenseDraft::new();
    for assignment in assignments {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| CommandError::usage(EDIT_USAGE))?;
        patch = match key.trim().to_ascii_lowercase().as_str() {
            "name" => patch.name(value),
            "amount" => patch.amount(parse_amount(value)),
            "category" => patch.category(value),
            "frequency" => patch.frequency(parse_frequency(value)?),
            "icon" => patch.icon(value),
            "recurring" => match value.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => patch.recurring(true),
                "false" | "no" => patch.recurring(false),
                _ => {
                    return Err(CommandError::InvalidArguments(
                        "recurring must be true or false".into(),
                    ))
                }
            },
            other => {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown field `{}`",
                    other
                )))
            }
        };
    }

    context.manager.edit(id, patch)?;
    output::success(format!("Updated expense {}", id));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [id] = args else {
        return Err(CommandError::usage(REMOVE_USAGE));
    };
    let removed = context.manager.remove(id)?;
    output::success(format!("Removed {}", removed.display_label()));
    Ok(())
}
