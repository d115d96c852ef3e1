//! # Stopwatch firmware
//!
//! Board support shared by the example binaries, for an STM32L053 Nucleo board.
//!
//! ---
//!
//! - The system clock runs off the 16 MHz internal oscillator (HSI16)
//! - The user button is on PC13, pulled up, and reads low while pressed
//! - The user LED is on PA5
//! - USART2 (PA2/PA3) is connected to the debug probe's virtual COM port
//! - TIM2 provides the periodic tick
//!
//! The hardware independent logic (time keeping, debouncing, formatting) lives in
//! [`stopwatch_core`].

#![no_std]

pub mod button;
pub mod led;
pub mod serial;
pub mod tick;

pub use button::{Button, UserButton};
pub use led::Led;
pub use serial::Uart;
pub use tick::TickTimer;

use embedded_time::duration::Milliseconds;
use rtic_monotonics::systick::Systick;
use rtic_monotonics::Monotonic;

/// Milliseconds since the SysTick monotonic was started.
///
/// Wraps after ~49 days; [`stopwatch_core::Debouncer`] copes with that.
pub fn now() -> Milliseconds<u32> {
    Milliseconds(Systick::now().ticks())
}
