/// Fraction of capacity above which a channel is shown as busy.
pub const BUSY_THRESHOLD: f64 = 0.7;

/// Simulated occupancy of a single voice channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelOccupancy {
    current: u32,
    capacity: u32,
}

impl ChannelOccupancy {
    /// Draws a current user count in `[0, capacity)` from a uniform roll.
    ///
    /// A zero-capacity channel stays empty.
    pub fn simulate(capacity: u32, roll: f64) -> Self {
        let current = if capacity == 0 {
            0
        } else {
            ((roll * f64::from(capacity)) as u32).min(capacity - 1)
        };
        Self { current, capacity }
    }

    #[cfg(test)]
    pub fn current(self) -> u32 {
        self.current
    }

    /// Busy once the count exceeds 70 % of capacity.
    pub fn is_busy(self) -> bool {
        f64::from(self.current) > f64::from(self.capacity) * BUSY_THRESHOLD
    }

    /// Occupancy line rendered under the channel card.
    pub fn label(self) -> String {
        format!("🔊 {}/{} users online", self.current, self.capacity)
    }

    /// Text color for the occupancy line.
    pub fn color(self) -> &'static str {
        if self.is_busy() {
            "#ef4444"
        } else {
            "#22c55e"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that simulated counts stay strictly below capacity.
    ///
    /// Expected: every roll yields a count in [0, capacity)
    #[test]
    fn counts_stay_below_capacity() {
        for step in 0..1000 {
            let roll = f64::from(step) / 1000.0;
            let occupancy = ChannelOccupancy::simulate(10, roll);
            assert!(occupancy.current() < 10, "roll {roll} reached capacity");
        }
    }

    /// Tests the busy threshold at 70 % of capacity.
    ///
    /// For capacity 10 a count of 7 is exactly the threshold and not busy;
    /// 8 is above it and busy.
    ///
    /// Expected: 7/10 open, 8/10 busy
    #[test]
    fn busy_only_above_seventy_percent() {
        let at_threshold = ChannelOccupancy::simulate(10, 0.7);
        assert_eq!(at_threshold.current(), 7);
        assert!(!at_threshold.is_busy());
        assert_eq!(at_threshold.color(), "#22c55e");

        let above = ChannelOccupancy::simulate(10, 0.8);
        assert_eq!(above.current(), 8);
        assert!(above.is_busy());
        assert_eq!(above.color(), "#ef4444");
    }

    /// Tests the zero-capacity edge case.
    ///
    /// Expected: empty, never busy, no panic
    #[test]
    fn zero_capacity_stays_empty() {
        let occupancy = ChannelOccupancy::simulate(0, 0.9);
        assert_eq!(occupancy.current(), 0);
        assert!(!occupancy.is_busy());
    }

    /// Tests the rendered occupancy line.
    ///
    /// Expected: speaker emoji with current/capacity counts
    #[test]
    fn label_shows_current_over_capacity() {
        let occupancy = ChannelOccupancy::simulate(20, 0.25);
        assert_eq!(occupancy.label(), "🔊 5/20 users online");
    }
}
