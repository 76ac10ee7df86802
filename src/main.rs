//! pyfreeze - standalone-executable packager for Python GUI applications.
//!
//! This binary invokes the PyInstaller bundling tool against an entry-point
//! script to produce a self-contained executable directory, with input
//! validation and artifact verification around the tool run.

mod bundler;
mod cli;
mod error;
mod manifest;

use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code; logging is initialized inside from -v flags
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
