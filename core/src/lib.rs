//! # Stopwatch core
//!
//! The hardware independent half of the stopwatch firmware.
//!
//! ---
//!
//! The firmware keeps track of elapsed time with a periodic timer interrupt and, whenever the
//! user button is pressed, writes the elapsed time over the UART as `<days>_<hours>:<minutes>:<seconds>`.
//! Everything in here is plain data and arithmetic so that it can be tested on the host:
//!
//! - [`TimeKeeper`] owns the elapsed time and its carry logic
//! - [`TickCalibration`] derives the timer register values for a tick interval
//! - [`Debouncer`] turns a noisy button line into press and release events
//! - [`Report`] and [`Reporter`] format a [`Time`] and push it through a [`SerialChannel`]
//! - [`RoundRobin`] tracks the channel rotation for the ADC example
//!
//! The firmware crate glues these to the STM32L0 peripherals.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod debounce;
pub mod decimal;
pub mod error;
pub mod report;
pub mod sampler;
pub mod serial;
pub mod tick;
pub mod time;

pub use config::Config;
pub use debounce::{Debouncer, Edge, Level};
pub use decimal::Decimal;
pub use error::CalibrationError;
pub use report::{Report, ReportRequest, Reporter};
pub use sampler::RoundRobin;
pub use serial::SerialChannel;
pub use tick::TickCalibration;
pub use time::{SharedTimeKeeper, Time, TimeKeeper};
