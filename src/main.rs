//! RustEdge - Rust language walkthroughs from the terminal
//!
//! Run `rustedge <topic>` to print one walkthrough, `rustedge all` for every
//! one in order, or `rustedge` alone for the topic listing.

mod app;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod topics;
mod ui;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::AppError;
use crate::ui::Theme;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging needs the config, so a config failure is reported once the
    // subscriber is up.
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(AppError::from(e))),
    };
    let settings = &config.settings;

    let theme = Theme::new(settings.color.enabled());

    let log_guard = match logging::init(settings.log_filter.as_deref()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            let e = AppError::other(format!("Logging disabled: {:#}", e));
            eprintln!("{}", theme.warning(&e.user_message()));
            None
        }
    };

    if let Some(e) = config_error {
        if !e.is_recoverable() {
            eprintln!("{}", theme.error(&e.user_message()));
            logging::shutdown(log_guard);
            return e.exit_code();
        }
        warn!(error = %e, "failed to load config, using defaults");
        eprintln!("{}", theme.warning(&e.user_message()));
    }

    let code = match run(&cli, theme, settings.rule_width) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("{}", theme.error(&e.user_message()));
            e.exit_code()
        }
    };

    logging::shutdown(log_guard);
    code
}

fn run(cli: &Cli, theme: Theme, rule_width: usize) -> error::Result<ExitCode> {
    let registry = topics::registry(theme, rule_width)?;
    let app = App::new(&registry, theme);
    let outcome = app.run(cli.topic.as_deref(), &mut io::stdout())?;
    Ok(outcome.exit_code())
}
