use core::fmt;

/// Reasons a tick calibration can't be programmed into the timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// The clock divider is zero
    ZeroDivider,
    /// The divider is larger than the clock, so the counter would never count
    CounterStopped { clock_hz: u32, divider: u32 },
    /// The interval is shorter than one counter period
    ZeroModulus,
    /// The divider doesn't fit the 16 bit prescaler
    DividerTooLarge(u32),
    /// The modulus doesn't fit the 16 bit auto reload register
    ModulusTooLarge(u32),
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDivider => f.write_str("clock divider is zero"),
            Self::CounterStopped { clock_hz, divider } => {
                write!(f, "divider {divider} exceeds the {clock_hz} Hz clock")
            }
            Self::ZeroModulus => f.write_str("interval is shorter than one counter period"),
            Self::DividerTooLarge(divider) => write!(f, "divider {divider} exceeds 65536"),
            Self::ModulusTooLarge(modulus) => write!(f, "modulus {modulus} exceeds 65536"),
        }
    }
}
