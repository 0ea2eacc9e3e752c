//! Scenario tests: drive the engine against real files with a scripted console.

use reverse_kernel::{MaskedWord, SessionDate, Stream, VerseEntry};
use reverse_review::{
    Console, ReviewEngine, ReviewError, ReviewEvent, ReviewOptions, Session, StreamOutcome,
};
use reverse_store::{BucketStore, Buckets, DataLayout, Queue, StoreError, Totals};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "reverse-review-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Replays input lines and records every event as one line of text.
#[derive(Default)]
struct ScriptedConsole {
    input: VecDeque<String>,
    log: Vec<String>,
    pauses: Vec<Duration>,
}

impl ScriptedConsole {
    fn with_input(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>, ReviewError> {
        Ok(self.input.pop_front())
    }

    fn present(&mut self, event: ReviewEvent<'_>) -> Result<(), ReviewError> {
        let line = match event {
            ReviewEvent::Overview { totals, plan } => format!(
                "overview learned={} available={} plan={}",
                totals.learned,
                totals.available,
                plan.iter()
                    .map(|p| format!("{}:{}", p.stream, p.count))
                    .collect::<Vec<_>>()
                    .join(",")
            ),
            ReviewEvent::Loading { stream, count } => format!("loading {stream} {count}"),
            ReviewEvent::Recite { stream, verse } => {
                format!("recite {stream} {}", verse.reference)
            }
            ReviewEvent::Recall {
                stream,
                verse,
                words,
                mask_all,
            } => format!(
                "recall {stream} {} [{}]{}",
                verse.reference,
                words
                    .iter()
                    .map(MaskedWord::render)
                    .collect::<Vec<_>>()
                    .join(" "),
                if mask_all { " all" } else { "" }
            ),
            ReviewEvent::Mismatch { feedback, reveal } => format!(
                "mismatch ref={} correct={} reveal={}",
                feedback.reference_correct,
                feedback.correct_words(),
                reveal.is_some()
            ),
            ReviewEvent::Learned { stream, verse } => {
                format!("learned {stream} {}", verse.reference)
            }
            ReviewEvent::Completed => "completed".to_string(),
        };
        self.log.push(line);
        Ok(())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

fn verse(line: &str) -> VerseEntry {
    VerseEntry::parse_pool_line(line).expect("fixture verse should parse")
}

fn genesis() -> VerseEntry {
    verse("Genesis 1:1 In the beginning")
}

fn exodus() -> VerseEntry {
    verse("Exodus 3:14 I AM THAT I AM")
}

fn psalm() -> VerseEntry {
    verse("Psalm 23:1 The LORD is my shepherd")
}

fn jesus_wept() -> VerseEntry {
    verse("John 11:35 Jesus wept.")
}

fn write_fixture(dir: &Path, pool: &[VerseEntry], buckets: &Buckets) -> DataLayout {
    let layout = DataLayout::new(dir);
    let lines: String = pool.iter().map(|v| format!("{}\n", v.pool_line())).collect();
    fs::write(layout.verses_master(), lines).expect("pool master should be written");
    fs::write(
        layout.buckets_master(),
        buckets.to_json_string().expect("buckets should serialize"),
    )
    .expect("buckets master should be written");
    layout
}

fn engine(
    layout: &DataLayout,
    date: SessionDate,
    input: &[&str],
) -> ReviewEngine<ScriptedConsole> {
    let session = Session::open(layout.clone()).expect("session should open");
    let options = ReviewOptions {
        pace: Duration::ZERO,
        ..ReviewOptions::default()
    };
    ReviewEngine::new(session, ScriptedConsole::with_input(input), date, options)
}

fn tuesday_the_second() -> SessionDate {
    SessionDate { weekday: 2, day: 2 }
}

fn refs(queue: &Queue) -> Vec<String> {
    queue.iter().map(|v| v.reference.to_string()).collect()
}

#[test]
fn rotate_one_reviews_the_oldest_and_enqueues_the_candidate() {
    let dir = TempDirGuard::new("rotate");
    let mut buckets = Buckets::skeleton();
    *buckets
        .queue_mut(Stream::OddEven, Some("even"))
        .expect("even queue exists") = [genesis(), exodus(), psalm()].into_iter().collect();
    let layout = write_fixture(dir.path(), &[genesis(), jesus_wept()], &buckets);

    let mut engine = engine(&layout, tuesday_the_second(), &["Genesis 1:1 In the beginning"]);
    let outcome = engine
        .review(Stream::OddEven, Some("even"), Some(jesus_wept()))
        .expect("review should succeed");

    assert_eq!(outcome, StreamOutcome::Rotated(Some(genesis())));
    assert_eq!(
        engine.console().log,
        vec![
            "loading oddEven 3".to_string(),
            "recall oddEven Genesis 1:1 [In the b________]".to_string(),
            "learned oddEven Genesis 1:1".to_string(),
        ]
    );

    let on_disk = BucketStore::load(&layout).expect("buckets should reload");
    let even = on_disk
        .buckets()
        .queue(Stream::OddEven, Some("even"))
        .expect("even queue exists");
    assert_eq!(refs(even), vec!["Exodus 3:14", "Psalm 23:1", "John 11:35"]);

    let pool = fs::read_to_string(layout.verses()).expect("pool file should exist");
    assert_eq!(pool, "John 11:35 Jesus wept.\n");
}

#[test]
fn review_all_reviews_each_distinct_entry_once() {
    let dir = TempDirGuard::new("review-all");
    let mut buckets = Buckets::skeleton();
    *buckets
        .queue_mut(Stream::DateOfMonth, Some("2"))
        .expect("date 2 exists") = [genesis(), genesis(), exodus()].into_iter().collect();
    let layout = write_fixture(dir.path(), &[], &buckets);

    let mut engine = engine(
        &layout,
        tuesday_the_second(),
        &["Genesis 1:1 In the beginning", "Exodus 3:14 I AM THAT I AM"],
    );
    let outcome = engine
        .review(Stream::DateOfMonth, Some("2"), None)
        .expect("review should succeed");

    match outcome {
        StreamOutcome::ReviewedAll(queue) => assert_eq!(queue.len(), 3),
        other => panic!("expected review-all outcome, got {other:?}"),
    }
    let learned: Vec<&String> = engine
        .console()
        .log
        .iter()
        .filter(|l| l.starts_with("learned"))
        .collect();
    assert_eq!(
        learned,
        vec!["learned dateOfMonth Genesis 1:1", "learned dateOfMonth Exodus 3:14"]
    );
}

#[test]
fn review_all_adds_the_candidate() {
    let dir = TempDirGuard::new("review-all-candidate");
    let layout = write_fixture(dir.path(), &[], &Buckets::skeleton());

    let mut engine = engine(&layout, tuesday_the_second(), &["John 11:35 Jesus wept."]);
    let outcome = engine
        .review(Stream::DateOfMonth, Some("2"), Some(jesus_wept()))
        .expect("review should succeed");

    assert_eq!(
        outcome,
        StreamOutcome::ReviewedAll([jesus_wept()].into_iter().collect())
    );
    assert_eq!(outcome.into_candidate(), None);
}

#[test]
fn missing_bucket_key_fails_without_touching_files() {
    let dir = TempDirGuard::new("missing-key");
    let layout = write_fixture(dir.path(), &[genesis()], &Buckets::skeleton());

    let mut engine = engine(&layout, tuesday_the_second(), &[]);
    let buckets_before = fs::read(layout.buckets()).expect("working buckets seeded");
    let pool_before = fs::read(layout.verses()).expect("working pool seeded");

    let result = engine.review(Stream::DayOfWeek, Some("9"), Some(genesis()));
    match result {
        Err(ReviewError::Store(StoreError::BucketNotFound { stream, key })) => {
            assert_eq!(stream, "dayOfWeek");
            assert_eq!(key, "9");
        }
        other => panic!("expected bucket not found, got {other:?}"),
    }

    assert_eq!(fs::read(layout.buckets()).expect("buckets"), buckets_before);
    assert_eq!(fs::read(layout.verses()).expect("pool"), pool_before);
    assert!(engine.console().log.is_empty());
}

#[test]
fn full_session_learns_the_new_verse_and_threads_it_onward() {
    let dir = TempDirGuard::new("session");
    let john = verse("John 3:16 For God so loved the world");
    let layout = write_fixture(dir.path(), &[john.clone()], &Buckets::skeleton());

    let mut engine = engine(
        &layout,
        tuesday_the_second(),
        &[
            "John 3:16 For God so hated the world",
            "",
            "John 3:16 For God so loved the world",
            "john 3:16 for god so loved the world",
        ],
    );
    engine.review_buckets().expect("session should complete");

    assert_eq!(
        engine.console().log,
        vec![
            "overview learned=0 available=1 plan=daily:1,oddEven:0,dayOfWeek:0,dateOfMonth:0",
            "loading daily 1",
            "recite daily John 3:16",
            "mismatch ref=true correct=5 reveal=true",
            "recall daily John 3:16 [For God so l____ the w____]",
            "learned daily John 3:16",
            "completed",
        ]
    );
    assert_eq!(engine.console().pauses.len(), 2);
    assert!(engine.console().input.is_empty());

    let totals = Totals::load(&layout).expect("totals should load");
    assert_eq!(totals.learned, 1);
    assert_eq!(totals.remaining, 0);

    let on_disk = BucketStore::load(&layout).expect("buckets should reload");
    let buckets = on_disk.buckets();
    assert!(buckets.daily.is_empty());
    assert_eq!(
        refs(buckets.queue(Stream::OddEven, Some("even")).expect("even")),
        vec!["John 3:16"]
    );

    // Two days later the verse comes due in odd/even and moves on to Thursday.
    let thursday = SessionDate { weekday: 4, day: 4 };
    let mut next = self::engine(&layout, thursday, &["John 3:16 For God so loved the world"]);
    next.review_buckets().expect("second session should complete");

    assert!(
        next.console()
            .log
            .contains(&"recall oddEven John 3:16 [For God so l____ the w____]".to_string())
    );
    assert!(!next.console().log.iter().any(|l| l.starts_with("recite")));
    let on_disk = BucketStore::load(&layout).expect("buckets should reload");
    let buckets = on_disk.buckets();
    assert!(
        buckets
            .queue(Stream::OddEven, Some("even"))
            .expect("even")
            .is_empty()
    );
    assert_eq!(
        refs(buckets.queue(Stream::DayOfWeek, Some("4")).expect("thursday")),
        vec!["John 3:16"]
    );
}

#[test]
fn odd_days_mask_every_word() {
    let dir = TempDirGuard::new("odd-day");
    let mut buckets = Buckets::skeleton();
    buckets
        .queue_mut(Stream::OddEven, Some("odd"))
        .expect("odd queue exists")
        .push_back(jesus_wept());
    let layout = write_fixture(dir.path(), &[], &buckets);

    let wednesday_the_third = SessionDate { weekday: 3, day: 3 };
    let mut engine = engine(&layout, wednesday_the_third, &["John 11:35 Jesus wept."]);
    engine
        .review(Stream::OddEven, Some("odd"), None)
        .expect("review should succeed");

    assert!(
        engine
            .console()
            .log
            .contains(&"recall oddEven John 11:35 [J____ w___.] all".to_string())
    );
}

#[test]
fn closed_input_aborts_without_saving_the_draw() {
    let dir = TempDirGuard::new("closed");
    let layout = write_fixture(dir.path(), &[genesis()], &Buckets::skeleton());

    let mut engine = engine(&layout, tuesday_the_second(), &["Genesis 1:1 In the end"]);
    match engine.review_buckets() {
        Err(ReviewError::InputClosed { reference }) => assert_eq!(reference, "Genesis 1:1"),
        other => panic!("expected input closed, got {other:?}"),
    }

    let pool = fs::read_to_string(layout.verses()).expect("pool file should exist");
    assert_eq!(pool, "Genesis 1:1 In the beginning\n");
    let on_disk = BucketStore::load(&layout).expect("buckets should reload");
    assert!(on_disk.buckets().daily.is_empty());
}

#[test]
fn spaced_book_names_survive_a_session_and_reopen() {
    let dir = TempDirGuard::new("spaced-book");
    let layout = write_fixture(dir.path(), &[], &Buckets::skeleton());
    fs::write(
        layout.verses_master(),
        "1  John 4:8 God is love.\nJohn 11:35 Jesus wept.\n",
    )
    .expect("pool master should be written");

    let answer = "1 John 4:8 God is love.";
    let mut engine = engine(&layout, tuesday_the_second(), &[answer, answer]);
    engine.review_buckets().expect("session should complete");

    let pool = fs::read_to_string(layout.verses()).expect("pool file should exist");
    assert_eq!(pool, "John 11:35 Jesus wept.\n");

    let reopened = Session::open(layout.clone()).expect("state should reopen");
    let even = reopened
        .buckets
        .buckets()
        .queue(Stream::OddEven, Some("even"))
        .expect("even queue exists");
    assert_eq!(refs(even), vec!["1 John 4:8"]);
    assert_eq!(
        even.iter().map(|v| v.bucket_line()).collect::<Vec<_>>(),
        vec!["1 John 4:8  God is love.".to_string()]
    );
}
