//! Logging setup: `fern` dispatcher to stderr behind the `log` facade.

use colored::*;
use log::{Level, LevelFilter};

/// Install the global logger.
///
/// `verbose` sets the level of every component, `logs` holds
/// `COMPONENT[=LEVEL]` entries overriding it per module (a bare component
/// means `trace`).
pub fn setup(verbose: u8, logs: Vec<&str>, log_time: bool) -> Result<(), String> {
    let components = parse_components(&logs)?;

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = colored_level(record.level());
            if log_time {
                let now = time::OffsetDateTime::now_local()
                    .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
                let stamp = now
                    .format(time::macros::format_description!(
                        "[hour]:[minute]:[second].[subsecond digits:3]"
                    ))
                    .unwrap_or_default();
                out.finish(format_args!(
                    "{} {} [{}] {}",
                    stamp.dimmed(),
                    level,
                    record.target(),
                    message
                ))
            } else {
                out.finish(format_args!("{} [{}] {}", level, record.target(), message))
            }
        })
        .level(verbosity_level(verbose));

    for (component, level) in components {
        dispatch = dispatch.level_for(
            format!("{}::{}", env!("CARGO_CRATE_NAME"), component),
            level,
        );
    }

    dispatch
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| format!("Failed to setup logging: {}", e))
}

fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_components(logs: &[&str]) -> Result<Vec<(String, LevelFilter)>, String> {
    logs.iter()
        .map(|spec| match spec.split_once('=') {
            None => Ok((spec.to_string(), LevelFilter::Trace)),
            Some((component, level)) => {
                let component = component.trim();
                let level = level.trim();
                if component.is_empty() {
                    return Err(format!("Invalid log spec '{}': missing component", spec));
                }
                let level: LevelFilter = level.parse().map_err(|_| {
                    format!(
                        "Invalid log level '{}' for component '{}': expected off, error, warn, info, debug or trace",
                        level, component
                    )
                })?;
                Ok((component.to_string(), level))
            }
        })
        .collect()
}

fn colored_level(level: Level) -> ColoredString {
    let label = format!("{:5}", level);
    match level {
        Level::Error => label.bright_red(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.normal(),
    }
}
