mod def;
include!(concat!(env!("OUT_DIR"), "/rustc_version.rs"));
use clap::Parser;
use std::path::Path;

pub mod log;

pub const USAGE: &str = "Usage: yaml2json [OPTIONS] <input.yaml> <output.json>";

impl From<crate::error::Error> for String {
    fn from(e: crate::error::Error) -> Self {
        e.to_string()
    }
}

/// Returns `Ok(false)` on usage errors, after printing the usage line.
pub fn run() -> Result<bool, String> {
    let cli = def::Args::parse();

    // Split log strings upon comma, trim them and flatten all in
    // `logs`, remove empty values
    let logs = cli.log.unwrap_or_default();
    let logs = logs
        .iter()
        .flat_map(|log| log.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>();

    log::setup(cli.verbose, logs, cli.log_time)?;

    if cli.color && cli.no_color {
        return Err("Cannot use both --color and --no-color".to_string());
    }
    if cli.color {
        colored::control::set_override(true);
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.version {
        println!("version: {}", env!("CARGO_PKG_VERSION"));
        println!("yaml parser: {}", YAML_PARSER);
        println!("Rust: {}", RUSTC_VERSION);
        return Ok(true);
    }

    let [input, output] = match cli.files.as_slice() {
        [input, output] => [input, output],
        files => {
            ::log::debug!("expected 2 file arguments, got {}", files.len());
            println!("{}", USAGE);
            return Ok(false);
        }
    };

    crate::transcode::transcode_file(Path::new(input), Path::new(output))?;
    println!("Conversion complete.");
    Ok(true)
}
