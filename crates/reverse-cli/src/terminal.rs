//! Line-oriented terminal front end for the review engine.
//!
//! Colors come from crossterm styles; `color = false` renders the same
//! transcript as plain text, which is what piped runs and tests see.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::{Attribute, Color, ContentStyle};
use crossterm::terminal::{Clear, ClearType};
use reverse_kernel::{Feedback, Glyph, MaskedWord, Reference, Stream, VerseEntry, emphasized};
use reverse_review::{Console, PlannedStream, ReviewError, ReviewEvent};
use reverse_store::Totals;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::time::Duration;

const WIDTH: usize = 80;
const PROGRESS_WIDTH: usize = 40;
const PROMPT: &str = "> ";

fn style(fg: Option<Color>, bg: Option<Color>, bold: bool) -> ContentStyle {
    ContentStyle {
        foreground_color: fg,
        background_color: bg,
        attributes: if bold {
            Attribute::Bold.into()
        } else {
            Default::default()
        },
        ..ContentStyle::default()
    }
}

fn stream_color(stream: Stream) -> Color {
    match stream {
        Stream::Daily => Color::Blue,
        Stream::OddEven => Color::Magenta,
        Stream::DayOfWeek => Color::Yellow,
        Stream::DateOfMonth => Color::Cyan,
    }
}

fn plan_label(stream: Stream) -> &'static str {
    match stream {
        Stream::Daily => "daily",
        Stream::OddEven => "odd/even",
        Stream::DayOfWeek => "weekday",
        Stream::DateOfMonth => "date of month",
    }
}

fn centered(title: &str) -> String {
    let pad = WIDTH.saturating_sub(title.chars().count()) / 2;
    format!("{0}{title}{0}", " ".repeat(pad))
}

fn console_error(e: std::io::Error) -> ReviewError {
    ReviewError::Console(e.to_string())
}

pub struct TerminalConsole<R, W> {
    input: R,
    out: W,
    color: bool,
    clear: bool,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, out: W, color: bool) -> Self {
        Self {
            input,
            out,
            color,
            clear: false,
        }
    }

    /// Clear the screen before each card.
    pub fn clearing(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn paint(&self, text: impl Display, style: ContentStyle) -> String {
        if self.color {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, text: impl Display) -> Result<(), ReviewError> {
        writeln!(self.out, "{text}").map_err(console_error)
    }

    fn card(&mut self, stream: Stream, verse: &VerseEntry) -> Result<(), ReviewError> {
        if self.clear {
            execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)).map_err(console_error)?;
        }
        let title = centered(&format!("{stream} Review for {}", verse.reference));
        let banner = self.paint(
            title,
            style(Some(Color::Black), Some(stream_color(stream)), true),
        );
        self.line(banner)
    }

    fn progress_bar(&self, totals: Totals) -> String {
        let filled = (totals.learned * PROGRESS_WIDTH)
            .checked_div(totals.available)
            .unwrap_or(0)
            .min(PROGRESS_WIDTH);
        let done = self.paint("#".repeat(filled), style(Some(Color::Green), None, true));
        let todo = self.paint(
            "-".repeat(PROGRESS_WIDTH - filled),
            style(Some(Color::DarkGrey), None, false),
        );
        format!("[{done}{todo}]")
    }

    fn overview(&mut self, totals: Totals, plan: &[PlannedStream]) -> Result<(), ReviewError> {
        let header = style(Some(Color::Black), Some(Color::Blue), true);
        let title = self.paint(centered("RE-VERSE SCRIPTURE MEMORY SYSTEM"), header);
        self.line(title)?;
        self.line("")?;
        let learned = self.paint(totals.learned, style(Some(Color::Green), None, true));
        let available = self.paint(totals.available, style(Some(Color::Blue), None, true));
        self.line(format!(
            "{learned} verse(s) out of {available} total verse(s) learned!"
        ))?;
        let bar = self.progress_bar(totals);
        self.line(bar)?;
        self.line("")?;

        let today = self.paint(centered("REVIEW FOR TODAY"), header);
        self.line(today)?;
        for planned in plan {
            let count = self.paint(
                planned.count,
                style(Some(stream_color(planned.stream)), None, true),
            );
            self.line(format!(
                "  {count} {} verse(s)",
                plan_label(planned.stream)
            ))?;
        }
        self.line("")
    }

    fn reference(&self, reference: &Reference, mask_all: bool) -> String {
        let book_style = if mask_all {
            style(Some(Color::Black), Some(Color::Cyan), false)
        } else {
            style(Some(Color::Cyan), None, false)
        };
        let number = |digits: &str| {
            let bg = emphasized(digits).then_some(Color::Cyan);
            let fg = if emphasized(digits) { Color::Black } else { Color::Cyan };
            self.paint(digits, style(Some(fg), bg, true))
        };
        format!(
            "{} {}:{}",
            self.paint(&reference.book, book_style),
            number(&reference.chapter),
            number(&reference.verse)
        )
    }

    fn masked_word(&self, word: &MaskedWord) -> String {
        match word {
            MaskedWord::Visible(text) => self.paint(text, style(Some(Color::White), None, false)),
            MaskedWord::Masked(glyphs) => glyphs
                .iter()
                .enumerate()
                .map(|(i, glyph)| match glyph {
                    Glyph::Shown(c) if i == 0 => {
                        self.paint(c, style(Some(Color::White), None, true))
                    }
                    Glyph::Shown(c) => self.paint(c, style(Some(Color::White), None, false)),
                    Glyph::Hidden => self.paint(
                        glyph.as_char(),
                        style(Some(Color::Grey), Some(Color::DarkGrey), true),
                    ),
                })
                .collect(),
        }
    }

    fn mismatch(
        &mut self,
        feedback: &Feedback,
        reveal: Option<&VerseEntry>,
    ) -> Result<(), ReviewError> {
        let sorry = self.paint(
            "Sorry that is not correct, please try again!",
            style(Some(Color::Red), None, true),
        );
        self.line(sorry)?;
        if let Some(target) = reveal {
            let green = style(Some(Color::Green), None, false);
            let shown = self.paint(target.pool_line(), green);
            self.line(shown)?;
        }

        let mut parts = Vec::with_capacity(feedback.words.len() + 1);
        if !feedback.reference.is_empty() {
            let color = if feedback.reference_correct {
                Color::Green
            } else {
                Color::Red
            };
            parts.push(self.paint(&feedback.reference, style(Some(color), None, false)));
        }
        for mark in &feedback.words {
            let marked = if mark.correct {
                style(Some(Color::Green), None, false)
            } else {
                style(Some(Color::Red), None, true)
            };
            parts.push(self.paint(&mark.word, marked));
        }
        self.line(parts.join(" "))
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>, ReviewError> {
        let prompt = self.paint(PROMPT, style(Some(Color::DarkCyan), None, false));
        write!(self.out, "{prompt}").map_err(console_error)?;
        self.out.flush().map_err(console_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(console_error)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn present(&mut self, event: ReviewEvent<'_>) -> Result<(), ReviewError> {
        match event {
            ReviewEvent::Overview { totals, plan } => self.overview(totals, plan),
            ReviewEvent::Loading { stream, count } => {
                let text = self.paint(
                    format!("Loading {count} verse(s) for {stream} review..."),
                    style(Some(Color::Blue), None, false),
                );
                self.line(text)
            }
            ReviewEvent::Recite { stream, verse } => {
                self.card(stream, verse)?;
                let hint = self.paint(
                    "Learn the verse by typing it out and saying each word including punctuation:",
                    style(Some(Color::Blue), None, false),
                );
                self.line(hint)?;
                self.line("")?;
                let reference = self.paint(&verse.reference, style(Some(Color::Cyan), None, false));
                let text = self.paint(&verse.text, style(Some(Color::White), None, true));
                self.line(format!("{reference} {text}"))
            }
            ReviewEvent::Recall {
                stream,
                verse,
                words,
                mask_all,
            } => {
                self.card(stream, verse)?;
                let hint = self.paint(
                    "Complete the missing words in the verse from memory:",
                    style(Some(Color::Yellow), None, false),
                );
                self.line(hint)?;
                self.line("")?;
                let reference = self.reference(&verse.reference, mask_all);
                let masked: Vec<String> = words.iter().map(|w| self.masked_word(w)).collect();
                self.line(format!("{reference} {}", masked.join(" ")))
            }
            ReviewEvent::Mismatch { feedback, reveal } => self.mismatch(feedback, reveal),
            ReviewEvent::Learned { verse, .. } => {
                let text = self.paint(
                    format!("Correct! {} learned.", verse.reference),
                    style(Some(Color::Green), None, false),
                );
                self.line(text)
            }
            ReviewEvent::Completed => {
                let text = self.paint(
                    "Review completed! Progress saved!",
                    style(Some(Color::Green), None, true),
                );
                self.line(text)
            }
        }?;
        self.out.flush().map_err(console_error)
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
