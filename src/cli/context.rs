use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::{errors::BudgetError, utils::PathResolver, CliError, ExpenseManager},
    currency::format_currency,
    storage::JsonStorage,
};

use super::{commands, output, registry::CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("exit requested")]
    ExitRequested,
}

impl CommandError {
    pub fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("usage: {}", usage))
    }
}

pub type CommandResult = Result<(), CommandError>;

/// State shared by every command handler during a shell session.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub manager: ExpenseManager,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_base_dir(mode, PathResolver::base_dir())
    }

    pub fn with_base_dir(mode: CliMode, base: PathBuf) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let storage = JsonStorage::new(Some(base.clone()), None)?;
        let manager = ExpenseManager::open(Box::new(storage))?;
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;

        Ok(Self {
            mode,
            registry,
            manager,
            config_manager,
            config,
            last_command: None,
            running: true,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn prompt(&self) -> String {
        format!(
            "cannon [{} / {}]> ",
            self.money(self.manager.total_monthly_burn()),
            self.money(self.config.monthly_budget)
        )
    }

    /// Formats `amount` in the configured currency.
    pub fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.config.currency.code, &self.config.currency.locale)
    }

    pub fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = closest_command(self.registry.names(), input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        output::error(err);
    }
}

/// Registered name closest to `input`, if within an edit distance of three.
pub(crate) fn closest_command<'a>(
    names: impl Iterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let needle = input.to_ascii_lowercase();
    names
        .map(|name| (levenshtein(name, &needle), name))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_nearby_commands_only() {
        let names = ["summary", "breakdown", "budget"];
        assert_eq!(closest_command(names.into_iter(), "sumary"), Some("summary"));
        assert_eq!(closest_command(names.into_iter(), "BUDGT"), Some("budget"));
        assert_eq!(closest_command(names.into_iter(), "xylophone"), None);
    }

    #[test]
    fn new_context_starts_with_seed_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ShellContext::with_base_dir(CliMode::Script, dir.path().to_path_buf()).unwrap();
        assert_eq!(ctx.manager.expenses().len(), 51);
        assert_eq!(ctx.config.monthly_budget, 5000.0);
        assert!(ctx.command_names().contains(&"summary"));
    }
}
