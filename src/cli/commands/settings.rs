use tracing::info;

use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{find_currency, SUPPORTED_CURRENCIES};

use super::parse_amount;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budget",
            "Show or set the monthly budget",
            "budget [amount]",
            cmd_budget,
        ),
        CommandEntry::new(
            "currency",
            "Show or set the display currency",
            "currency [code]",
            cmd_currency,
        ),
        CommandEntry::new(
            "currencies",
            "List supported currencies",
            "currencies",
            cmd_currencies,
        ),
    ]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!(
                "Monthly budget: {}",
                context.money(context.config.monthly_budget)
            ));
            Ok(())
        }
        [raw] => {
            let amount = parse_amount(raw);
            if !amount.is_finite() || amount < 0.0 {
                return Err(CommandError::InvalidArguments(
                    "budget must be a non-negative number".into(),
                ));
            }
            context.config.monthly_budget = amount;
            context.persist_config()?;
            info!(budget = amount, "monthly budget updated");
            output::success(format!("Monthly budget set to {}", context.money(amount)));
            Ok(())
        }
        _ => Err(CommandError::usage("budget [amount]")),
    }
}

fn cmd_currency(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            output::info(format!("Currency: {}", context.config.currency.label()));
            Ok(())
        }
        [code] => {
            let currency = find_currency(code).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "unsupported currency `{}`; run `currencies` for the list",
                    code
                ))
            })?;
            context.config.currency = currency.clone();
            context.persist_config()?;
            info!(currency = %currency.code, "display currency updated");
            output::success(format!("Currency set to {}", currency.label()));
            Ok(())
        }
        _ => Err(CommandError::usage("currency [code]")),
    }
}

fn cmd_currencies(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Supported currencies");
    for currency in SUPPORTED_CURRENCIES.iter() {
        let marker = if currency.code == context.config.currency.code {
            "*"
        } else {
            " "
        };
        output::line(format!("{} {}", marker, currency.label()));
    }
    Ok(())
}
