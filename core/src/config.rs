use crate::error::CalibrationError;
use crate::tick::TickCalibration;
use embedded_time::duration::Milliseconds;
use embedded_time::rate::Hertz;

/// Compile time configuration of the stopwatch, handed to the firmware at startup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Core clock, which also drives the SysTick monotonic
    pub sysclk: Hertz,
    /// Timer input clock
    pub clock: Hertz,
    /// Timer prescaler division
    pub divider: u32,
    /// Time between ticks
    pub tick_interval: Milliseconds<u32>,
    /// Time the button must hold a level before the change is accepted
    pub debounce_window: Milliseconds<u32>,
    /// UART baud rate
    pub baudrate: u32,
    /// Appended to every report
    pub line_terminator: &'static str,
}

impl Config {
    /// HSI16 clock divided down to 1 kHz, 1 s ticks, 20 ms debounce, 9600 baud
    pub const DEFAULT: Config = Config {
        sysclk: Hertz(16_000_000),
        clock: Hertz(16_000_000),
        divider: 16_000,
        tick_interval: Milliseconds(1000),
        debounce_window: Milliseconds(20),
        baudrate: 9600,
        line_terminator: "\r\n",
    };

    /// Timer register values for [`tick_interval`](Config::tick_interval)
    pub fn tick_calibration(&self) -> Result<TickCalibration, CalibrationError> {
        TickCalibration::for_interval(self.clock, self.divider, self.tick_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
