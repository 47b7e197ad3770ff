use crate::model::entropy::Entropy;

/// Probability that a simulated status check reports the server online.
pub const ONLINE_PROBABILITY: f64 = 0.8;

/// Displayed availability of the Minecraft server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerStatus {
    Online,
    Offline,
}

impl ServerStatus {
    /// Maps a uniform roll in `[0.0, 1.0)` to a status.
    ///
    /// Rolls below [`ONLINE_PROBABILITY`] report online, everything else
    /// offline.
    pub fn from_roll(roll: f64) -> Self {
        if roll < ONLINE_PROBABILITY {
            ServerStatus::Online
        } else {
            ServerStatus::Offline
        }
    }

    /// Status banner text shown next to the indicator dot.
    pub fn label(self) -> &'static str {
        match self {
            ServerStatus::Online => "SERVER IS ONLINE!",
            ServerStatus::Offline => "SERVER IS OFFLINE",
        }
    }

    /// CSS class for the indicator dot.
    pub fn dot_class(self) -> &'static str {
        match self {
            ServerStatus::Online => "status-dot online",
            ServerStatus::Offline => "status-dot offline",
        }
    }

    /// Text color for the status banner.
    pub fn color(self) -> &'static str {
        match self {
            ServerStatus::Online => "#22c55e",
            ServerStatus::Offline => "#ef4444",
        }
    }
}

/// Pluggable origin of server status reports.
///
/// The shipped implementation is a weighted coin flip; a real deployment
/// would back this with an actual reachability probe, which stays out of
/// scope for the static site.
pub trait StatusSource {
    fn poll(&mut self) -> ServerStatus;
}

/// Simulated status source driven by an [`Entropy`] roll.
#[derive(Clone, Debug)]
pub struct SimulatedStatus<E: Entropy> {
    entropy: E,
}

impl<E: Entropy> SimulatedStatus<E> {
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }
}

impl<E: Entropy> StatusSource for SimulatedStatus<E> {
    fn poll(&mut self) -> ServerStatus {
        ServerStatus::from_roll(self.entropy.roll())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entropy::FixedEntropy;

    /// Tests the online/offline split of the weighted roll.
    ///
    /// Rolls strictly below 0.8 must report online, 0.8 and above offline.
    ///
    /// Expected: online for 0.0 and 0.79, offline for 0.8 and 0.99
    #[test]
    fn roll_splits_at_online_probability() {
        assert_eq!(ServerStatus::from_roll(0.0), ServerStatus::Online);
        assert_eq!(ServerStatus::from_roll(0.79), ServerStatus::Online);
        assert_eq!(ServerStatus::from_roll(0.8), ServerStatus::Offline);
        assert_eq!(ServerStatus::from_roll(0.99), ServerStatus::Offline);
    }

    /// Tests that the simulated source reports what its entropy dictates.
    ///
    /// Expected: online, then offline, for rolls 0.3 and 0.95
    #[test]
    fn simulated_source_follows_entropy() {
        let mut source = SimulatedStatus::new(FixedEntropy::new(vec![0.3, 0.95]));
        assert_eq!(source.poll(), ServerStatus::Online);
        assert_eq!(source.poll(), ServerStatus::Offline);
    }

    /// Tests the display attributes of both states.
    ///
    /// Expected: matching banner text, dot class, and color per state
    #[test]
    fn display_attributes_match_state() {
        assert_eq!(ServerStatus::Online.label(), "SERVER IS ONLINE!");
        assert_eq!(ServerStatus::Online.dot_class(), "status-dot online");
        assert_eq!(ServerStatus::Online.color(), "#22c55e");
        assert_eq!(ServerStatus::Offline.label(), "SERVER IS OFFLINE");
        assert_eq!(ServerStatus::Offline.dot_class(), "status-dot offline");
        assert_eq!(ServerStatus::Offline.color(), "#ef4444");
    }
}
