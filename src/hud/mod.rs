//! Terminal game log.
//!
//! A block of `header » value` lines that is redrawn in place every
//! [`REPORT_INTERVAL`]: frame timing in red, camera vectors in green,
//! acceleration state in yellow, speeds in blue.
//!
//! All state is owned by the caller ([`FrameStats`]); nothing here is global.

pub mod escape;

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use escape::{DisplayMode, ERASE_IN_LINE, cursor_up, sgr};

use crate::world::{Camera, Vector};

/// How often averaged frame timings are reported.
pub const REPORT_INTERVAL: Duration = Duration::from_millis(100);

const DECIMAL_PLACES: usize = 2;
const NUMBER_FIELD_WIDTH: usize = 5;
const HEADER_FIELD_WIDTH: usize = 15;

/// Right-pointing double angle quotation mark.
const ENTRY_SEPARATOR: char = '\u{00BB}';

/// Fixed-point, right-aligned number.
pub fn float_to_string(number: f32) -> String {
    format!("{number:>NUMBER_FIELD_WIDTH$.DECIMAL_PLACES$}")
}

/// `(x, y)` with both components formatted by [`float_to_string`].
pub fn vector_to_string(v: Vector) -> String {
    format!("({}, {})", float_to_string(v.x), float_to_string(v.y))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub header: String,
    pub value: String,
}

impl LogEntry {
    pub fn new(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: value.into(),
        }
    }
}

/// Bold coloured header, separator, plain white value.
pub fn log_entry(header_colour: DisplayMode, entry: &LogEntry) -> String {
    format!(
        "{}{}{:>HEADER_FIELD_WIDTH$}{ENTRY_SEPARATOR} {}{}{}",
        sgr(DisplayMode::Bold),
        sgr(header_colour),
        entry.header,
        sgr(DisplayMode::NotBold),
        sgr(DisplayMode::BrightWhiteFg),
        entry.value,
    )
}

/// `warning:` in red, then the message in the default colour.
pub fn warning_line(message: &str) -> String {
    format!(
        "{}warning:{} {message}",
        sgr(DisplayMode::RedFg),
        sgr(DisplayMode::Reset)
    )
}

/// Averages frame times over fixed reporting windows.
#[derive(Debug, Clone)]
pub struct FrameStats {
    interval: Duration,
    sum: f32,
    frames: u32,
    last_report: Instant,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    /// Report every [`REPORT_INTERVAL`].
    pub fn new() -> Self {
        Self::with_interval(REPORT_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            sum: 0.0,
            frames: 0,
            last_report: Instant::now(),
        }
    }

    /// Accumulate one frame; returns the window average once the interval
    /// has elapsed, and starts a new window.
    pub fn record(&mut self, frame_time: f32) -> Option<f32> {
        self.record_at(frame_time, Instant::now())
    }

    fn record_at(&mut self, frame_time: f32, now: Instant) -> Option<f32> {
        self.sum += frame_time;
        self.frames += 1;

        if now.duration_since(self.last_report) <= self.interval {
            return None;
        }
        let avg = self.sum / self.frames as f32;
        self.sum = 0.0;
        self.frames = 0;
        self.last_report = now;
        Some(avg)
    }
}

/// Builds the log block for one report.
pub struct GameLog;

impl GameLog {
    pub fn entries(frame_time: f32, camera: &Camera) -> [LogEntry; 9] {
        let fps = if frame_time > 0.0 { 1.0 / frame_time } else { 0.0 };
        [
            LogEntry::new("FrameRate", format!("{} FPS", float_to_string(fps))),
            LogEntry::new(
                "FrameTime",
                format!("{} ms", float_to_string(frame_time * 1000.0)),
            ),
            LogEntry::new("Position", vector_to_string(camera.position())),
            LogEntry::new("Direction", vector_to_string(camera.direction())),
            LogEntry::new("Plane", vector_to_string(camera.plane())),
            LogEntry::new("AccelState", camera.accel_state().to_string()),
            LogEntry::new("AccelDirection", camera.accel_direction().to_string()),
            LogEntry::new("MovementSpeed", float_to_string(camera.movement_speed())),
            LogEntry::new("RotationSpeed", float_to_string(camera.rotation_speed())),
        ]
    }

    fn header_colour(index: usize) -> DisplayMode {
        match index {
            0 | 1 => DisplayMode::BrightRedFg,
            2..=4 => DisplayMode::BrightGreenFg,
            5 | 6 => DisplayMode::BrightYellowFg,
            _ => DisplayMode::BrightBlueFg,
        }
    }

    /// Full block, ending with the cursor moved back to its first line so
    /// the next report overwrites it.
    pub fn render(frame_time: f32, camera: &Camera) -> String {
        let entries = Self::entries(frame_time, camera);
        let mut out = String::new();

        let _ = writeln!(out, "{}{ERASE_IN_LINE}", sgr(DisplayMode::BlackBg));
        for (i, entry) in entries.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}{ERASE_IN_LINE}",
                log_entry(Self::header_colour(i), entry)
            );
        }
        let _ = write!(
            out,
            "{ERASE_IN_LINE}{}{}",
            sgr(DisplayMode::Reset),
            cursor_up(entries.len() + 1)
        );
        out
    }

    pub fn print(frame_time: f32, camera: &Camera) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(Self::render(frame_time, camera).as_bytes())?;
        stdout.flush()
    }
}
