use crate::support::or_exit;
use crate::terminal::TerminalConsole;
use reverse_kernel::SessionDate;
use reverse_review::{ReviewEngine, ReviewOptions, Session};
use reverse_store::DataLayout;
use std::io::{self, IsTerminal};

pub fn run(layout: DataLayout, date: SessionDate, options: ReviewOptions, color: bool) {
    let session = or_exit(Session::open(layout));
    log::debug!(
        "session date: weekday {} day {} ({})",
        date.weekday,
        date.day,
        date.parity().as_str()
    );

    let console = TerminalConsole::new(io::stdin().lock(), io::stdout(), color)
        .clearing(io::stdout().is_terminal());
    let mut engine = ReviewEngine::new(session, console, date, options);
    or_exit(engine.review_buckets());
}
