//! Zinsrechner Offline - packages the calculator pages as offline zip bundles.
//!
//! With no arguments, every built-in tool is bundled in every language from
//! the current directory into `offline/`.

use std::process;
use zinsrechner_offline::cli;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
