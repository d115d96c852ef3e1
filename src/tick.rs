//! # Tick timer
//!
//! TIM2 counts the HSI16 clock through its prescaler and raises the update interrupt every time
//! the counter reaches the auto reload value. The register values come straight from a
//! [`TickCalibration`], so the interval is exactly `modulus / (f / divider)`.
//!
//! The HAL's own timer picks a prescaler for a requested frequency; the divider is programmed by
//! hand here so the calibration arithmetic is the only place the interval is decided.

use stm32l0xx_hal::pac::{RCC, TIM2};
use stopwatch_core::TickCalibration;

/// Periodic tick from TIM2 (interrupt `TIM2`)
pub struct TickTimer(TIM2);

impl TickTimer {
    /// Configure and start the timer.
    ///
    /// The clocks must already be frozen so `calibration` matches the APB1 timer clock.
    pub fn configure(timer: TIM2, calibration: &TickCalibration) -> Self {
        // The frozen HAL `Rcc` doesn't expose the enable registers; TIM2EN is ours alone.
        let rcc = unsafe { &*RCC::ptr() };

        // Enable TIM2 peripheral clock
        rcc.apb1enr.modify(|_, w| w.tim2en().enabled());

        timer.cr1.modify(|_, w| w.cen().clear_bit());

        timer.psc.write(|w| w.psc().bits(calibration.prescaler()));
        timer.arr.write(|w| w.arr().bits(calibration.auto_reload()));

        // Load the prescaler now rather than after the first (unscaled) overflow, then drop the
        // update flag the forced update raised
        timer.egr.write(|w| w.ug().set_bit());
        timer.sr.modify(|_, w| w.uif().clear_bit());

        // Enable update interrupt and start counting
        timer.dier.modify(|_, w| w.uie().set_bit());
        timer.cr1.modify(|_, w| w.cen().set_bit());

        Self(timer)
    }

    /// Check the update interrupt flag, clearing it if set
    pub fn isr_update(&mut self) -> bool {
        let is_update = self.0.sr.read().uif().bit_is_set();

        if is_update {
            self.0.sr.modify(|_, w| w.uif().clear_bit());
        }

        is_update
    }
}
