//! Review streams and the day-based keys that select today's queue.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt::{Display, Formatter};

/// Reveal threshold for freshly introduced verses and even days.
pub const DEFAULT_INITIAL_REVEAL: usize = 3;

/// One of the four independent review schedules, in session order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Daily,
    OddEven,
    DayOfWeek,
    DateOfMonth,
}

impl Stream {
    pub const ALL: [Stream; 4] = [
        Stream::Daily,
        Stream::OddEven,
        Stream::DayOfWeek,
        Stream::DateOfMonth,
    ];

    /// Field name in the buckets file.
    pub fn as_str(self) -> &'static str {
        match self {
            Stream::Daily => "daily",
            Stream::OddEven => "oddEven",
            Stream::DayOfWeek => "dayOfWeek",
            Stream::DateOfMonth => "dateOfMonth",
        }
    }

    /// Whether the stream reviews its whole queue instead of rotating one.
    pub fn reviews_all(self) -> bool {
        matches!(self, Stream::DateOfMonth)
    }
}

impl Display for Stream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of(day: u32) -> Self {
        if day % 2 == 0 { Parity::Even } else { Parity::Odd }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }
}

/// Calendar facts for one session; computed fresh each run, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDate {
    /// Days from Sunday, 0..=6.
    pub weekday: u32,
    /// Day of month, 1..=31.
    pub day: u32,
}

impl SessionDate {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            weekday: date.weekday().num_days_from_sunday(),
            day: date.day(),
        }
    }

    pub fn today() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn parity(self) -> Parity {
        Parity::of(self.day)
    }

    /// Today's queue key for `stream`; `None` for the unkeyed daily stream.
    pub fn key(self, stream: Stream) -> Option<String> {
        match stream {
            Stream::Daily => None,
            Stream::OddEven => Some(self.parity().as_str().to_string()),
            Stream::DayOfWeek => Some(self.weekday.to_string()),
            Stream::DateOfMonth => Some(self.day.to_string()),
        }
    }
}

/// Reveal threshold for the recall phase.
///
/// Initial reviews and even-numbered days show words up to `initial_reveal`
/// characters; odd days mask every word.
pub fn reveal_threshold(initial: bool, date: SessionDate, initial_reveal: usize) -> usize {
    if initial || date.parity() == Parity::Even {
        initial_reveal
    } else {
        0
    }
}

/// Whether a chapter or verse number is displayed with emphasis.
///
/// Applies to multi-digit numbers (`01` included) and numbers above five.
pub fn emphasized(digits: &str) -> bool {
    digits.chars().count() > 1 || digits.parse::<u32>().is_ok_and(|n| n > 5)
}
