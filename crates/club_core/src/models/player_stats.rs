use serde::{Deserialize, Serialize};

/// Persistent season statistics for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: String,
    #[serde(default)]
    pub appearances: u32,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub minutes: u32,
}

impl PlayerStats {
    /// Create an empty stats record for the given player.
    pub fn empty(player_id: impl Into<String>) -> Self {
        Self { player_id: player_id.into(), ..Default::default() }
    }

    /// Goals plus assists, capped at `u32::MAX`.
    pub fn goal_contributions(&self) -> u32 {
        self.goals.saturating_add(self.assists)
    }

    /// Minutes per goal, `None` until the player has scored.
    pub fn minutes_per_goal(&self) -> Option<f32> {
        (self.goals > 0).then(|| self.minutes as f32 / self.goals as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_per_goal() {
        let mut stats = PlayerStats::empty("p1");
        assert_eq!(stats.minutes_per_goal(), None);

        stats.goals = 3;
        stats.minutes = 270;
        assert_eq!(stats.minutes_per_goal(), Some(90.0));
        assert_eq!(stats.goal_contributions(), 3);
    }

    #[test]
    fn test_goal_contributions_saturate() {
        let mut stats = PlayerStats::empty("p9");
        stats.goals = u32::MAX;
        stats.assists = 1;
        assert_eq!(stats.goal_contributions(), u32::MAX);
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let stats: PlayerStats = serde_json::from_str(r#"{"player_id":"p4","goals":2}"#).unwrap();
        assert_eq!(stats.goals, 2);
        assert_eq!(stats.red_cards, 0);
    }
}
