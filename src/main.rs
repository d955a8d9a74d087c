use colored::*;
use std::process;

mod cli;
mod convert;
mod error;
mod json;
mod transcode;
mod yaml;

fn main() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    match cli::run() {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".bright_red(), e);
            process::exit(127);
        }
    }
}
