// SPDX-License-Identifier: MPL-2.0
use image_relocate::cli::{self, Flags};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let result = Flags::from_env().and_then(|flags| cli::run(&flags));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            if cli::wants_usage(&err) {
                eprintln!("{}", cli::HELP);
            }
            ExitCode::FAILURE
        }
    }
}
