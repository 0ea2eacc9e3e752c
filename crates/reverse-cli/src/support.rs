use crate::cli::Cli;
use crate::config::{CONFIG_FILE, Config};
use reverse_kernel::SessionDate;
use reverse_review::ReviewOptions;
use reverse_store::DataLayout;
use std::fmt::Display;
use std::path::PathBuf;

pub fn exit_with(e: impl Display) -> ! {
    eprintln!("error: {e}");
    std::process::exit(1);
}

pub fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| exit_with(e))
}

pub fn layout(cli: &Cli) -> DataLayout {
    DataLayout::new(&cli.dir)
}

/// Merge `--pace` over the config file, which merges over defaults.
pub fn review_options_or_exit(cli: &Cli) -> ReviewOptions {
    let (path, required) = match &cli.config {
        Some(path) => (PathBuf::from(path), true),
        None => (PathBuf::from(&cli.dir).join(CONFIG_FILE), false),
    };
    let config = or_exit(Config::load(&path, required));
    config.review_options(cli.pace)
}

pub fn session_date(cli: &Cli) -> SessionDate {
    cli.date
        .map(SessionDate::from_date)
        .unwrap_or_else(SessionDate::today)
}

pub fn yes_no(ok: bool) -> &'static str {
    if ok { "yes" } else { "no" }
}
