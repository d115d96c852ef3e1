//! # Time reports
//!
//! A report is the elapsed time written as
//!
//! ```text
//! <days>_<hours>:<minutes>:<seconds>
//! ```
//!
//! with every field in unpadded decimal, e.g. `0_1:1:1` after one hour, one minute and one
//! second. An optional line terminator can follow the value.
//!
//! Building the text ([`Report`]) is kept apart from sending it ([`Reporter`]) so the snapshot can
//! be taken, and the lock released, before the slow blocking transmission starts.

use crate::decimal::Decimal;
use crate::serial::SerialChannel;
use crate::time::Time;
use embedded_time::duration::Milliseconds;
use heapless::Vec;

/// Longest report: a ten digit day count, three two digit fields, separators and a two byte
/// terminator.
pub const REPORT_CAPACITY: usize = 10 + 1 + 2 + 1 + 2 + 1 + 2 + 2;

/// Longest line terminator a [`Reporter`] will append
pub const MAX_TERMINATOR: usize = 2;

/// A request for a report, queued by the button handler.
///
/// Carries the time keeper's snapshot taken when the press was accepted, so ticks that land
/// while the request waits in the queue don't show up in the report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportRequest {
    /// Elapsed time at the press
    pub time: Time,
    /// Monotonic time of the debounced press
    pub pressed_at: Milliseconds<u32>,
}

/// A formatted report, ready to be written out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report(Vec<u8, REPORT_CAPACITY>);

impl Report {
    /// Format `time` and append `terminator`.
    ///
    /// Terminators longer than [`MAX_TERMINATOR`] bytes are truncated.
    pub fn new(time: &Time, terminator: &[u8]) -> Self {
        let fields: [(Decimal, &[u8]); 4] = [
            (Decimal::new(time.days()), b"_"),
            (Decimal::from(time.hours()), b":"),
            (Decimal::from(time.minutes()), b":"),
            (Decimal::from(time.seconds()), b""),
        ];

        let mut buf = Vec::new();
        for (digits, separator) in fields.iter() {
            push(&mut buf, digits);
            push(&mut buf, separator);
        }

        let len = terminator.len().min(MAX_TERMINATOR);
        push(&mut buf, &terminator[..len]);

        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

fn push(buf: &mut Vec<u8, REPORT_CAPACITY>, bytes: &[u8]) {
    let pushed = buf.extend_from_slice(bytes);
    debug_assert!(pushed.is_ok(), "report exceeds {} bytes", REPORT_CAPACITY);
}

/// Writes time reports to a [`SerialChannel`]
pub struct Reporter<S> {
    channel: S,
    terminator: &'static [u8],
}

impl<S: SerialChannel> Reporter<S> {
    /// Reports without a terminator
    pub fn new(channel: S) -> Self {
        Self {
            channel,
            terminator: b"",
        }
    }

    /// Append `terminator` (e.g. `"\r\n"`) to every report; `""` leaves reports unterminated
    pub fn with_terminator(mut self, terminator: &'static str) -> Self {
        self.terminator = terminator.as_bytes();
        self
    }

    /// Format `time` and write it out, blocking until the last byte has been accepted.
    pub fn emit(&mut self, time: &Time) {
        let report = Report::new(time, self.terminator);
        self.channel.write_all(report.as_bytes());
    }

    pub fn channel(&self) -> &S {
        &self.channel
    }

    pub fn into_inner(self) -> S {
        self.channel
    }
}
