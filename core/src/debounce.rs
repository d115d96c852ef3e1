//! # Button debouncing
//!
//! A mechanical button bounces for a few milliseconds on every press and release. The
//! [`Debouncer`] only accepts a new level once the raw input has held it for the whole debounce
//! window, and reports each accepted change as a single [`Edge`].
//!
//! The state machine is
//!
//! ```text
//!            level != raw                    held for window, raw != stable
//!  stable ----------------> tentative -------------------------------------> stable (new level, edge)
//!                           |       ^
//!                           +-------+ level changes again: restart window
//!                           |
//!                           +-----> stable (unchanged, no edge) when raw bounces back to stable
//! ```
//!
//! It is driven with [`update()`](Debouncer::update): on every edge interrupt and again once the
//! [`deadline()`](Debouncer::deadline) has passed. Timestamps are milliseconds from any monotonic
//! clock; wrapping is handled.
//!
//! A line which keeps bouncing for longer than the window produces one edge per settled interval.

use embedded_time::duration::Milliseconds;

/// Logic level of an input pin
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn from_high(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl core::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// A debounced change of the button state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// # Debouncer
///
/// See [`crate::debounce`] for more information.
#[derive(Clone, Debug)]
pub struct Debouncer {
    window: Milliseconds<u32>,
    /// Level the button has when pressed
    active: Level,
    raw: Level,
    stable: Level,
    last_transition: Milliseconds<u32>,
}

impl Debouncer {
    /// Create a debouncer for a released button
    pub fn new(window: Milliseconds<u32>, active: Level) -> Self {
        Self {
            window,
            active,
            raw: !active,
            stable: !active,
            last_transition: Milliseconds(0),
        }
    }

    /// Feed the current raw level, read at `now`.
    ///
    /// Returns the edge if this sample completes a debounced change.
    pub fn update(&mut self, level: Level, now: Milliseconds<u32>) -> Option<Edge> {
        if level != self.raw {
            self.raw = level;
            self.last_transition = now;
        }

        if self.raw == self.stable || !self.settled(now) {
            return None;
        }

        self.stable = self.raw;
        Some(self.edge())
    }

    /// When a pending transition may be accepted; `None` when nothing is pending.
    pub fn deadline(&self) -> Option<Milliseconds<u32>> {
        if self.raw == self.stable {
            None
        } else {
            Some(Milliseconds(self.last_transition.0.wrapping_add(self.window.0)))
        }
    }

    /// Time left until the pending transition may be accepted
    pub fn remaining(&self, now: Milliseconds<u32>) -> Option<Milliseconds<u32>> {
        self.deadline()
            .map(|_| Milliseconds(self.window.0.saturating_sub(self.elapsed(now))))
    }

    /// Whether the debounced button is currently pressed
    pub fn is_pressed(&self) -> bool {
        self.stable == self.active
    }

    pub fn stable(&self) -> Level {
        self.stable
    }

    fn elapsed(&self, now: Milliseconds<u32>) -> u32 {
        now.0.wrapping_sub(self.last_transition.0)
    }

    fn settled(&self, now: Milliseconds<u32>) -> bool {
        self.elapsed(now) >= self.window.0
    }

    fn edge(&self) -> Edge {
        if self.is_pressed() {
            Edge::Pressed
        } else {
            Edge::Released
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Milliseconds<u32> = Milliseconds(20);

    fn ms(t: u32) -> Milliseconds<u32> {
        Milliseconds(t)
    }

    fn button() -> Debouncer {
        // Pull up, pressed pulls the line low
        Debouncer::new(WINDOW, Level::Low)
    }

    #[test]
    fn starts_released() {
        let d = button();
        assert!(!d.is_pressed());
        assert_eq!(d.stable(), Level::High);
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn transition_waits_for_window() {
        let mut d = button();

        assert_eq!(d.update(Level::Low, ms(100)), None);
        assert_eq!(d.deadline(), Some(ms(120)));
        assert_eq!(d.remaining(ms(105)), Some(ms(15)));
        assert_eq!(d.update(Level::Low, ms(119)), None);
        assert_eq!(d.update(Level::Low, ms(120)), Some(Edge::Pressed));
        assert!(d.is_pressed());
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn bounce_back_produces_nothing() {
        let mut d = button();

        assert_eq!(d.update(Level::Low, ms(0)), None);
        assert_eq!(d.update(Level::High, ms(5)), None);
        assert_eq!(d.deadline(), None);
        assert_eq!(d.update(Level::High, ms(100)), None);
        assert!(!d.is_pressed());
    }

    #[test]
    fn window_restarts_on_every_transition() {
        let mut d = button();

        d.update(Level::Low, ms(0));
        d.update(Level::High, ms(15));
        d.update(Level::Low, ms(30));
        assert_eq!(d.update(Level::Low, ms(45)), None);
        assert_eq!(d.update(Level::Low, ms(50)), Some(Edge::Pressed));
    }

    #[test]
    fn release_is_reported() {
        let mut d = button();
        d.update(Level::Low, ms(0));
        assert_eq!(d.update(Level::Low, ms(20)), Some(Edge::Pressed));

        d.update(Level::High, ms(500));
        assert_eq!(d.update(Level::High, ms(520)), Some(Edge::Released));
    }

    #[test]
    fn active_high_button() {
        let mut d = Debouncer::new(WINDOW, Level::High);
        d.update(Level::High, ms(0));
        assert_eq!(d.update(Level::High, ms(25)), Some(Edge::Pressed));
    }

    #[test]
    fn edge_is_reported_once() {
        let mut d = button();
        d.update(Level::Low, ms(0));
        assert_eq!(d.update(Level::Low, ms(20)), Some(Edge::Pressed));
        assert_eq!(d.update(Level::Low, ms(40)), None);
        assert_eq!(d.update(Level::Low, ms(4000)), None);
    }

    #[test]
    fn clock_wraparound() {
        let mut d = button();
        d.update(Level::Low, ms(u32::MAX - 5));
        assert_eq!(d.deadline(), Some(ms(14)));
        assert_eq!(d.update(Level::Low, ms(10)), None);
        assert_eq!(d.update(Level::Low, ms(14)), Some(Edge::Pressed));
    }
}
