//! Reverse CLI: the `reverse` command.

mod cli;
mod commands;
mod config;
mod support;
mod terminal;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let layout = support::layout(&cli);

    match cli.command {
        None | Some(Commands::Review) => {
            let options = support::review_options_or_exit(&cli);
            let date = support::session_date(&cli);
            commands::review::run(layout, date, options, !cli.no_color)
        }

        Some(Commands::Stats { json }) => commands::stats::run(layout, json),

        Some(Commands::Init) => commands::init::run(layout),
    }
}
