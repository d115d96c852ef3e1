use core::fmt;
use core::ops::Deref;

/// Digits in `u32::MAX`
const MAX_DIGITS: usize = 10;

/// The ASCII decimal representation of an unsigned integer.
///
/// Most significant digit first, no sign and no leading zeros; zero is `"0"`. The digits live in
/// a fixed buffer on the stack.
#[derive(Clone, Copy)]
pub struct Decimal {
    digits: [u8; MAX_DIGITS],
    len: usize,
}

impl Decimal {
    pub fn new(mut value: u32) -> Self {
        let mut digits = [0u8; MAX_DIGITS];
        let mut len = 0;

        // Least significant digit first, then reversed
        loop {
            digits[len] = b'0' + (value % 10) as u8;
            len += 1;
            value /= 10;

            if value == 0 {
                break;
            }
        }
        digits[..len].reverse();

        Self { digits, len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // Only ever contains b'0'..=b'9'
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<u8> for Decimal {
    fn from(value: u8) -> Self {
        Self::new(value as u32)
    }
}

impl Deref for Decimal {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.as_str())
    }
}
