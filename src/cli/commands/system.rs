use crate::cli::context::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "backup",
            "Snapshot the expense collection",
            "backup [note]",
            cmd_backup,
        ),
        CommandEntry::new("backups", "List expense snapshots", "backups", cmd_backups),
        CommandEntry::new(
            "restore",
            "Replace expenses with a snapshot",
            "restore <backup>",
            cmd_restore,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_backup(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let note = (!args.is_empty()).then(|| args.join(" "));
    let name = context.manager.backup(note.as_deref())?;
    output::success(format!("Backup created: {}", name));
    Ok(())
}

fn cmd_backups(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let backups = context.manager.list_backups()?;
    output::section("Backups");
    if backups.is_empty() {
        output::info("No backups yet.");
        return Ok(());
    }
    for backup in backups {
        let created = backup
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown time".to_string());
        output::line(format!("{}  ({})", backup.name, created));
    }
    Ok(())
}

fn cmd_restore(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::usage("restore <backup>"));
    };
    let count = context.manager.restore(name)?;
    output::success(format!("Restored {} expenses from {}", count, name));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output::section(format!("Cannon Core {}", meta.version));
    output::line(format!("  Build hash : {}", meta.git_hash));
    output::line(format!("  Built at   : {}", meta.timestamp));
    output::line(format!("  Profile    : {}", meta.profile));
    output::line(format!("  Rustc      : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.registry.get(&name.to_lowercase()) {
            Some(entry) => {
                output::line(format!("{} - {}", entry.name, entry.description));
                output::line(format!("  usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    output::section("Commands");
    for entry in context.registry.list() {
        output::line(format!("{} {}", output::fit(entry.name, 12), entry.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
