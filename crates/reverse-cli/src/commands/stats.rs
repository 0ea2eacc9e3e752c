use crate::support::or_exit;
use reverse_store::{DataLayout, Totals, VerseStore};

pub fn run(layout: DataLayout, json_output: bool) {
    // Seeds verses.txt on first run so the counts match a review session.
    or_exit(VerseStore::load(&layout));
    let totals = or_exit(Totals::load(&layout));

    if json_output {
        let payload = or_exit(serde_json::to_string_pretty(&totals));
        println!("{payload}");
        return;
    }

    println!("reverse stats {}", layout.root().display());
    println!();
    println!(
        "  {} verse(s) out of {} total verse(s) learned",
        totals.learned, totals.available
    );
    println!("  remaining: {}", totals.remaining);
}
