//! # Tick calibration
//!
//! The tick comes from a hardware timer whose input clock `f` is first divided by a prescaler
//! (`divider`) and then counted up to a compare value (`modulus`). The timer fires every
//!
//! ```text
//! interval = modulus / (f / divider)
//! ```
//!
//! seconds. The counter rate `f / divider` is truncated to whole hertz just like the hardware
//! does it, so a divider which doesn't divide the clock evenly gives a slightly long interval.
//! [`TickCalibration::interval()`] reports that effective interval rather than the requested one.
//!
//! On the STM32L0 both the prescaler and the auto reload register are 16 bits wide and hold
//! `value - 1`, so `divider` and `modulus` must be within `1..=65536`.

use crate::error::CalibrationError;
use embedded_time::duration::{Microseconds, Milliseconds};
use embedded_time::rate::Hertz;

/// Largest divider or modulus the 16 bit timer registers can hold
pub const MAX_REGISTER: u32 = u16::MAX as u32 + 1;

/// Timer register values for a periodic tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickCalibration {
    clock: Hertz,
    divider: u32,
    modulus: u32,
}

impl TickCalibration {
    /// Use an explicit divider and modulus
    pub fn new(clock: Hertz, divider: u32, modulus: u32) -> Result<Self, CalibrationError> {
        Self::counter_rate(clock, divider)?;

        if modulus == 0 {
            return Err(CalibrationError::ZeroModulus);
        }
        if modulus > MAX_REGISTER {
            return Err(CalibrationError::ModulusTooLarge(modulus));
        }

        Ok(Self {
            clock,
            divider,
            modulus,
        })
    }

    /// Work out the modulus which gives `interval` at the given clock and divider.
    ///
    /// `modulus = (f / divider) * interval / 1000`
    pub fn for_interval(
        clock: Hertz,
        divider: u32,
        interval: Milliseconds<u32>,
    ) -> Result<Self, CalibrationError> {
        let rate = Self::counter_rate(clock, divider)?;
        let modulus = rate as u64 * interval.0 as u64 / 1000;

        Self::new(clock, divider, u32::try_from(modulus).unwrap_or(u32::MAX))
    }

    fn counter_rate(clock: Hertz, divider: u32) -> Result<u32, CalibrationError> {
        if divider == 0 {
            return Err(CalibrationError::ZeroDivider);
        }
        if divider > MAX_REGISTER {
            return Err(CalibrationError::DividerTooLarge(divider));
        }

        match clock.0 / divider {
            0 => Err(CalibrationError::CounterStopped {
                clock_hz: clock.0,
                divider,
            }),
            rate => Ok(rate),
        }
    }

    pub fn clock(&self) -> Hertz {
        self.clock
    }

    pub fn divider(&self) -> u32 {
        self.divider
    }

    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Rate the timer counter increments at (truncated)
    pub fn rate(&self) -> Hertz {
        Hertz(self.clock.0 / self.divider)
    }

    /// Effective time between ticks
    pub fn interval(&self) -> Microseconds<u32> {
        let us = self.modulus as u64 * 1_000_000 / self.rate().0 as u64;
        Microseconds(u32::try_from(us).unwrap_or(u32::MAX))
    }

    /// Value for the prescaler register (PSC)
    pub fn prescaler(&self) -> u16 {
        (self.divider - 1) as u16
    }

    /// Value for the auto reload register (ARR)
    pub fn auto_reload(&self) -> u16 {
        (self.modulus - 1) as u16
    }
}
