use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::lineup::LineupAssignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Venue {
    Home,
    Away,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub club: u8,
    pub opponent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

/// A fixture, or a result once `score` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub opponent: String,
    pub kickoff: DateTime<Utc>,
    pub venue: Venue,
    #[serde(default)]
    pub competition: String,
    /// Catalog id of the formation the lineup is drawn in; blank means the
    /// configured default.
    #[serde(default)]
    pub formation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
    #[serde(default)]
    pub lineup: LineupAssignment,
}

impl MatchRecord {
    pub fn new(
        id: impl Into<String>,
        opponent: impl Into<String>,
        kickoff: DateTime<Utc>,
        venue: Venue,
        formation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            opponent: opponent.into(),
            kickoff,
            venue,
            competition: String::new(),
            formation: formation.into(),
            score: None,
            lineup: LineupAssignment::new(),
        }
    }

    pub fn is_played(&self) -> bool {
        self.score.is_some()
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.score.map(|s| match s.club.cmp(&s.opponent) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        })
    }

    /// "Club 2-1 Rovers" for home games, "Rovers 1-2 Club" away.
    pub fn scoreline(&self, club_name: &str) -> Option<String> {
        let score = self.score?;
        Some(match self.venue {
            Venue::Home => {
                format!("{} {}-{} {}", club_name, score.club, score.opponent, self.opponent)
            }
            Venue::Away => {
                format!("{} {}-{} {}", self.opponent, score.opponent, score.club, club_name)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixture() -> MatchRecord {
        let kickoff = Utc.with_ymd_and_hms(2026, 8, 15, 15, 0, 0).unwrap();
        MatchRecord::new("m1", "Rovers", kickoff, Venue::Away, "4-3-3")
    }

    #[test]
    fn test_fixture_has_no_outcome() {
        let m = fixture();
        assert!(!m.is_played());
        assert_eq!(m.outcome(), None);
        assert_eq!(m.scoreline("Club"), None);
    }

    #[test]
    fn test_away_scoreline_puts_opponent_first() {
        let mut m = fixture();
        m.score = Some(Score { club: 2, opponent: 1 });
        assert_eq!(m.outcome(), Some(MatchOutcome::Win));
        assert_eq!(m.scoreline("Club").unwrap(), "Rovers 1-2 Club");
    }

    #[test]
    fn test_record_without_lineup_deserializes() {
        let json = r#"{"id":"m2","opponent":"United","kickoff":"2026-09-01T19:45:00Z","venue":"home","formation":"4-4-2"}"#;
        let m: MatchRecord = serde_json::from_str(json).unwrap();
        assert!(m.lineup.is_empty());
        assert_eq!(m.venue, Venue::Home);
    }

    #[test]
    fn test_record_without_formation_loads_blank() {
        let json = r#"{"id":"m3","opponent":"City","kickoff":"2026-09-20T14:00:00Z","venue":"away"}"#;
        let m: MatchRecord = serde_json::from_str(json).unwrap();
        assert!(m.formation.is_empty());
    }
}
