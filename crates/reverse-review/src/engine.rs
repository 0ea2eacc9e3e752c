//! The review engine: one session across the four streams.
//!
//! ```text
//! pool.next ──► daily ──► oddEven[parity] ──► dayOfWeek[weekday] ──► dateOfMonth[day]
//!               rotate     rotate              rotate                 review all
//! ```
//!
//! Each rotating stream reviews its oldest entry and hands it to the next
//! stream as that stream's candidate. Buckets are saved once at the end,
//! and after every learned verse.

use crate::console::{Console, PlannedStream, ReviewEvent};
use crate::error::ReviewError;
use crate::session::Session;
use reverse_kernel::{
    DEFAULT_INITIAL_REVEAL, Judgement, SessionDate, Stream, VerseEntry, judge, mask_words,
    reveal_threshold,
};
use reverse_store::Queue;
use std::time::Duration;

pub const DEFAULT_PACE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewOptions {
    /// Delay before each quiz phase.
    pub pace: Duration,
    /// Reveal threshold for initial reviews and even days.
    pub initial_reveal: usize,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            pace: DEFAULT_PACE,
            initial_reveal: DEFAULT_INITIAL_REVEAL,
        }
    }
}

/// Result of reviewing one stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The entry that was dequeued and reviewed, if the queue had one.
    Rotated(Option<VerseEntry>),
    /// The whole queue, duplicates included, after the candidate joined it.
    ReviewedAll(Queue),
}

impl StreamOutcome {
    /// Candidate handed to the next stream.
    pub fn into_candidate(self) -> Option<VerseEntry> {
        match self {
            StreamOutcome::Rotated(entry) => entry,
            StreamOutcome::ReviewedAll(_) => None,
        }
    }
}

pub struct ReviewEngine<C> {
    session: Session,
    console: C,
    date: SessionDate,
    options: ReviewOptions,
}

impl<C: Console> ReviewEngine<C> {
    pub fn new(session: Session, console: C, date: SessionDate, options: ReviewOptions) -> Self {
        Self {
            session,
            console,
            date,
            options,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_parts(self) -> (Session, C) {
        (self.session, self.console)
    }

    /// Queue sizes for today, as previewed before the first card.
    ///
    /// The daily count includes the verse about to be drawn from the pool.
    /// Absent keys preview as zero.
    pub fn plan(&self) -> Vec<PlannedStream> {
        let buckets = self.session.buckets.buckets();
        Stream::ALL
            .iter()
            .map(|&stream| {
                let queued = buckets
                    .queue(stream, self.date.key(stream).as_deref())
                    .map(Queue::len)
                    .unwrap_or(0);
                let drawn = usize::from(stream == Stream::Daily && !self.session.pool.is_empty());
                PlannedStream {
                    stream,
                    count: queued + drawn,
                }
            })
            .collect()
    }

    /// Run one full session and persist the buckets.
    pub fn review_buckets(&mut self) -> Result<(), ReviewError> {
        let totals = self.session.totals()?;
        let plan = self.plan();
        self.console.present(ReviewEvent::Overview {
            totals,
            plan: &plan,
        })?;

        if let Some(verse) = self.session.pool.next_verse() {
            log::debug!("drew {} from the pool", verse.reference);
            self.session.buckets.buckets_mut().daily.push_back(verse);
        }
        let daily = self.review(Stream::Daily, None, None)?.into_candidate();

        let parity = self.date.key(Stream::OddEven);
        let odd_even = self
            .review(Stream::OddEven, parity.as_deref(), daily)?
            .into_candidate();

        let weekday = self.date.key(Stream::DayOfWeek);
        let week_day = self
            .review(Stream::DayOfWeek, weekday.as_deref(), odd_even)?
            .into_candidate();

        let date = self.date.key(Stream::DateOfMonth);
        self.review(Stream::DateOfMonth, date.as_deref(), week_day)?;

        self.session.buckets.save()?;
        self.console.present(ReviewEvent::Completed)?;
        Ok(())
    }

    /// Review one stream's queue under its rotation policy.
    ///
    /// `date_of_month` reviews every distinct entry; every other stream
    /// reviews its oldest entry while `candidate` joins the back of the
    /// queue. Fails with `BucketNotFound` before touching anything when
    /// `key` names no queue.
    pub fn review(
        &mut self,
        stream: Stream,
        key: Option<&str>,
        candidate: Option<VerseEntry>,
    ) -> Result<StreamOutcome, ReviewError> {
        let queue = self.session.buckets.buckets_mut().queue_mut(stream, key)?;
        let count = queue.len();

        if stream.reviews_all() {
            if let Some(candidate) = candidate {
                queue.push_back(candidate);
            }
            let due = queue.distinct();
            let snapshot = queue.clone();
            self.announce(stream, count)?;
            log::debug!("{stream}: reviewing {} distinct verse(s)", due.len());
            for verse in &due {
                self.review_verse(verse, stream, false)?;
            }
            return Ok(StreamOutcome::ReviewedAll(snapshot));
        }

        let oldest = queue.pop_front();
        if let Some(candidate) = candidate {
            log::debug!("{stream}: queued {}", candidate.reference);
            queue.push_back(candidate);
        }
        self.announce(stream, count)?;
        if let Some(verse) = &oldest {
            self.review_verse(verse, stream, stream == Stream::Daily)?;
        }
        Ok(StreamOutcome::Rotated(oldest))
    }

    fn announce(&mut self, stream: Stream, count: usize) -> Result<(), ReviewError> {
        if count == 0 {
            return Ok(());
        }
        self.console.present(ReviewEvent::Loading { stream, count })
    }

    /// Recitation (initial reviews only), then masked recall.
    fn review_verse(
        &mut self,
        verse: &VerseEntry,
        stream: Stream,
        initial: bool,
    ) -> Result<(), ReviewError> {
        if initial {
            self.console.pause(self.options.pace);
            self.console.present(ReviewEvent::Recite { stream, verse })?;
            self.quiz(verse, true)?;
        }

        let threshold = reveal_threshold(initial, self.date, self.options.initial_reveal);
        let words = mask_words(&verse.text, threshold);
        self.console.pause(self.options.pace);
        self.console.present(ReviewEvent::Recall {
            stream,
            verse,
            words: &words,
            mask_all: threshold == 0,
        })?;
        self.quiz(verse, false)?;

        self.session.learn(&verse.reference.to_string())?;
        self.console.present(ReviewEvent::Learned { stream, verse })?;
        Ok(())
    }

    /// Block until a line matches `target`. No attempt limit.
    fn quiz(&mut self, target: &VerseEntry, reveal: bool) -> Result<(), ReviewError> {
        loop {
            let Some(line) = self.console.read_line()? else {
                return Err(ReviewError::InputClosed {
                    reference: target.reference.to_string(),
                });
            };
            match judge(&line, target) {
                Judgement::Match => return Ok(()),
                Judgement::Blank => {}
                Judgement::Mismatch(feedback) => {
                    log::debug!(
                        "{}: {} of {} word(s) correct",
                        target.reference,
                        feedback.correct_words(),
                        feedback.words.len()
                    );
                    self.console.present(ReviewEvent::Mismatch {
                        feedback: &feedback,
                        reveal: reveal.then_some(target),
                    })?;
                }
            }
        }
    }
}
