//! # Elapsed time
//!
//! [`TimeKeeper`] counts ticks into a seconds/minutes/hours/days counter. It has exactly two
//! operations: [`advance()`](TimeKeeper::advance), called once per tick, and
//! [`snapshot()`](TimeKeeper::snapshot), which copies all four fields out as one [`Time`].
//!
//! ## Atomic snapshots
//!
//! A snapshot must never mix fields from two different ticks. In the firmware the time keeper
//! is an RTIC resource shared between the tick task and the idle loop, so the resource lock
//! already excludes the tick for the duration of the copy. [`SharedTimeKeeper`] gives the same
//! guarantee through a critical section for code which isn't running under RTIC.
//!
//! ## Overflow
//!
//! `days` is a `u32` and wraps to zero after `u32::MAX` days (~11.7 million years).

use core::cell::RefCell;
use critical_section::Mutex;

pub const SECONDS_PER_MINUTE: u8 = 60;
pub const MINUTES_PER_HOUR: u8 = 60;
pub const HOURS_PER_DAY: u8 = 24;

const SECONDS_PER_HOUR: u64 = 60 * 60;
const SECONDS_PER_DAY: u64 = SECONDS_PER_HOUR * 24;

/// A copy of the elapsed time at one instant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    seconds: u8,
    minutes: u8,
    hours: u8,
    days: u32,
}

impl Time {
    /// No time elapsed
    pub const ZERO: Time = Time {
        seconds: 0,
        minutes: 0,
        hours: 0,
        days: 0,
    };

    /// The time after `elapsed` one second ticks
    pub const fn from_elapsed_seconds(elapsed: u64) -> Time {
        Time {
            seconds: (elapsed % 60) as u8,
            minutes: ((elapsed / 60) % 60) as u8,
            hours: ((elapsed / SECONDS_PER_HOUR) % 24) as u8,
            days: (elapsed / SECONDS_PER_DAY) as u32,
        }
    }

    /// Seconds (0-59)
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Minutes (0-59)
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Hours (0-23)
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    /// Whole days elapsed
    pub const fn days(&self) -> u32 {
        self.days
    }

    /// Total number of seconds represented
    pub const fn as_seconds(&self) -> u64 {
        self.days as u64 * SECONDS_PER_DAY
            + self.hours as u64 * SECONDS_PER_HOUR
            + self.minutes as u64 * 60
            + self.seconds as u64
    }
}

/// # Time keeper
///
/// Holds the elapsed time. See [`crate::time`] for more information.
#[derive(Debug, Default)]
pub struct TimeKeeper {
    time: Time,
}

impl TimeKeeper {
    /// Start counting from zero
    pub const fn new() -> Self {
        Self { time: Time::ZERO }
    }

    /// Add one second, carrying into minutes, hours and days as required.
    ///
    /// All carries happen within the one call.
    pub fn advance(&mut self) {
        let t = &mut self.time;

        t.seconds += 1;
        if t.seconds < SECONDS_PER_MINUTE {
            return;
        }
        t.seconds = 0;

        t.minutes += 1;
        if t.minutes < MINUTES_PER_HOUR {
            return;
        }
        t.minutes = 0;

        t.hours += 1;
        if t.hours < HOURS_PER_DAY {
            return;
        }
        t.hours = 0;

        t.days = t.days.wrapping_add(1);
    }

    /// Copy the current time
    pub fn snapshot(&self) -> Time {
        self.time
    }
}

/// A [`TimeKeeper`] which can be shared between interrupt handlers (or threads) by reference.
///
/// Both operations run inside a critical section, so a snapshot never observes a half finished
/// advance.
pub struct SharedTimeKeeper(Mutex<RefCell<TimeKeeper>>);

impl SharedTimeKeeper {
    pub const fn new() -> Self {
        Self(Mutex::new(RefCell::new(TimeKeeper::new())))
    }

    pub fn advance(&self) {
        critical_section::with(|cs| self.0.borrow_ref_mut(cs).advance());
    }

    pub fn snapshot(&self) -> Time {
        critical_section::with(|cs| self.0.borrow_ref(cs).snapshot())
    }
}

impl Default for SharedTimeKeeper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(ticks: u64) -> Time {
        let mut keeper = TimeKeeper::new();
        for _ in 0..ticks {
            keeper.advance();
        }
        keeper.snapshot()
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(TimeKeeper::new().snapshot(), Time::ZERO);
    }

    #[test]
    fn one_hour_one_minute_one_second() {
        let t = after(3661);
        assert_eq!((t.days(), t.hours(), t.minutes(), t.seconds()), (0, 1, 1, 1));
    }

    #[test]
    fn carry_resets_lower_fields() {
        let t = after(59);
        assert_eq!((t.minutes(), t.seconds()), (0, 59));

        let t = after(60);
        assert_eq!((t.minutes(), t.seconds()), (1, 0));

        let t = after(3600);
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (1, 0, 0));
    }

    #[test]
    fn cascades_into_days_in_one_advance() {
        let mut keeper = TimeKeeper::new();
        for _ in 0..86_399 {
            keeper.advance();
        }
        assert_eq!(keeper.snapshot(), Time::from_elapsed_seconds(86_399));

        keeper.advance();
        let t = keeper.snapshot();
        assert_eq!((t.days(), t.hours(), t.minutes(), t.seconds()), (1, 0, 0, 0));
    }

    #[test]
    fn matches_division_for_any_tick_count() {
        let mut keeper = TimeKeeper::new();
        for n in 1..=200_000u64 {
            keeper.advance();
            if n % 997 == 0 || n % 86_400 == 0 {
                let t = keeper.snapshot();
                assert_eq!(t.seconds() as u64, n % 60);
                assert_eq!(t.minutes() as u64, (n / 60) % 60);
                assert_eq!(t.hours() as u64, (n / 3600) % 24);
                assert_eq!(t.days() as u64, n / 86_400);
                assert_eq!(t.as_seconds(), n);
            }
        }
    }

    #[test]
    fn days_wrap_silently() {
        let mut keeper = TimeKeeper {
            time: Time {
                seconds: 59,
                minutes: 59,
                hours: 23,
                days: u32::MAX,
            },
        };
        keeper.advance();
        assert_eq!(keeper.snapshot(), Time::ZERO);
    }

    #[test]
    fn shared_keeper_counts() {
        let shared = SharedTimeKeeper::new();
        for _ in 0..61 {
            shared.advance();
        }
        assert_eq!(shared.snapshot(), Time::from_elapsed_seconds(61));
    }
}
