pub mod expense;
pub mod report;
pub mod settings;
pub mod system;

use super::context::CommandError;
use super::registry::CommandRegistry;

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in expense::definitions()
        .into_iter()
        .chain(report::definitions())
        .chain(settings::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
    registry.alias("ls", "list");
    registry.alias("rm", "remove");
    registry.alias("quit", "exit");
}

/// Splits `--flag value` pairs out of `args`, returning the remaining
/// positional arguments. Flags listed in `switches` take no value.
pub(crate) fn split_flags<'a>(
    args: &[&'a str],
    switches: &[&str],
) -> Result<(Vec<&'a str>, Vec<(&'a str, Option<&'a str>)>), CommandError> {
    let mut positional = Vec::new();
    let mut flags = Vec::new();
    let mut iter = args.iter().copied();
    while let Some(arg) = iter.next() {
        let Some(name) = arg.strip_prefix("--") else {
            positional.push(arg);
            continue;
        };
        if switches.contains(&name) {
            flags.push((name, None));
            continue;
        }
        let value = iter.next().ok_or_else(|| {
            CommandError::InvalidArguments(format!("flag `--{}` needs a value", name))
        })?;
        flags.push((name, Some(value)));
    }
    Ok((positional, flags))
}

/// Parses a user-typed amount. Text that is not a number becomes NaN so that
/// validation reports it.
pub(crate) fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .trim_start_matches('$')
        .replace(',', "")
        .parse::<f64>()
        .unwrap_or(f64::NAN)
}
