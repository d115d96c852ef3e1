//! # Round robin sampling
//!
//! The ADC example converts one channel per timer tick, moving on to the next channel each time,
//! and keeps the most recent reading of every channel.

/// Channel rotation and latest readings for `N` analog channels
#[derive(Clone, Debug)]
pub struct RoundRobin<const N: usize> {
    next: usize,
    latest: [Option<u16>; N],
}

impl<const N: usize> RoundRobin<N> {
    pub const fn new() -> Self {
        Self {
            next: 0,
            latest: [None; N],
        }
    }

    /// The channel the next conversion should sample
    pub fn channel(&self) -> usize {
        self.next
    }

    /// Store the reading for the current channel and move on to the next one.
    ///
    /// Returns the channel the reading was stored for.
    pub fn record(&mut self, raw: u16) -> usize {
        let channel = self.next;
        self.latest[channel] = Some(raw);
        self.next = (channel + 1) % N;
        channel
    }

    /// Most recent reading of `channel`, if it has been sampled yet
    pub fn latest(&self, channel: usize) -> Option<u16> {
        self.latest.get(channel).copied().flatten()
    }

    /// Whether every channel has been sampled at least once
    pub fn is_complete(&self) -> bool {
        self.latest.iter().all(Option::is_some)
    }
}

impl<const N: usize> Default for RoundRobin<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a raw reading into millivolts for a `bits` wide converter referenced to `vdda_mv`.
///
/// Returns 0 for resolutions with no full scale (`bits` of 0 or 32 and up). Readings above full
/// scale saturate at `u16::MAX`.
pub fn to_millivolts(raw: u16, vdda_mv: u16, bits: u8) -> u16 {
    let full_scale = match 1u32.checked_shl(bits.into()) {
        Some(levels) if levels > 1 => levels - 1,
        _ => return 0,
    };
    let mv = raw as u32 * vdda_mv as u32 / full_scale;
    u16::try_from(mv).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_between_channels() {
        let mut rr = RoundRobin::<2>::new();

        assert_eq!(rr.channel(), 0);
        assert_eq!(rr.record(100), 0);
        assert!(!rr.is_complete());
        assert_eq!(rr.channel(), 1);
        assert_eq!(rr.record(200), 1);
        assert_eq!(rr.channel(), 0);
        assert!(rr.is_complete());

        rr.record(150);
        assert_eq!(rr.latest(0), Some(150));
        assert_eq!(rr.latest(1), Some(200));
        assert_eq!(rr.latest(2), None);
    }

    #[test]
    fn millivolts() {
        assert_eq!(to_millivolts(0, 3300, 12), 0);
        assert_eq!(to_millivolts(4095, 3300, 12), 3300);
        assert_eq!(to_millivolts(2048, 3000, 12), 1500);
    }

    #[test]
    fn degenerate_resolutions_read_zero() {
        assert_eq!(to_millivolts(0, 3300, 0), 0);
        assert_eq!(to_millivolts(1, 3300, 0), 0);
        assert_eq!(to_millivolts(4095, 3300, 32), 0);
        assert_eq!(to_millivolts(4095, 3300, u8::MAX), 0);
    }

    #[test]
    fn over_range_reading_saturates() {
        // 1 bit converter: full scale is 1, so 65535 counts would be far above u16 millivolts
        assert_eq!(to_millivolts(1, 3300, 1), 3300);
        assert_eq!(to_millivolts(u16::MAX, 3300, 1), u16::MAX);
    }
}
