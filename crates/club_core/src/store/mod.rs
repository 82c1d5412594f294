// Data access layer: the store trait services are handed, plus an in-memory
// implementation backed by a JSON snapshot file.

pub mod memory;
pub mod snapshot;

use thiserror::Error;

use crate::lineup::LineupAssignment;
use crate::models::{MatchRecord, PlayerStats, PositionCategory, RosterMember};

pub use memory::InMemoryStore;
pub use snapshot::{load_snapshot, save_snapshot, ClubSnapshot, SNAPSHOT_VERSION};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported snapshot version: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Optional narrowing for roster listings.
#[derive(Debug, Clone, Default)]
pub struct RosterFilter {
    pub category: Option<PositionCategory>,
    /// Case-insensitive substring of the display name.
    pub name_contains: Option<String>,
}

impl RosterFilter {
    pub fn category(category: PositionCategory) -> Self {
        Self { category: Some(category), ..Default::default() }
    }

    pub fn matches(&self, member: &RosterMember) -> bool {
        if let Some(category) = self.category {
            if member.category != category {
                return false;
            }
        }
        if let Some(needle) = &self.name_contains {
            if !member.name.to_lowercase().contains(&needle.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

/// Storage the lineup and stats services are given at construction.
pub trait ClubStore {
    fn get_roster_member(&self, id: &str) -> Result<Option<RosterMember>, StoreError>;

    /// Members ordered by shirt number.
    fn list_roster_members(
        &self,
        filter: Option<&RosterFilter>,
    ) -> Result<Vec<RosterMember>, StoreError>;

    /// Saved lineup for a match; empty when the match has none (or is unknown).
    fn get_saved_assignment(&self, match_id: &str) -> Result<LineupAssignment, StoreError>;

    fn save_assignment(
        &self,
        match_id: &str,
        assignment: &LineupAssignment,
    ) -> Result<(), StoreError>;

    fn get_match(&self, id: &str) -> Result<Option<MatchRecord>, StoreError>;

    /// Matches ordered by kickoff.
    fn list_matches(&self) -> Result<Vec<MatchRecord>, StoreError>;

    fn save_match(&self, record: MatchRecord) -> Result<(), StoreError>;

    fn get_player_stats(&self, player_id: &str) -> Result<Option<PlayerStats>, StoreError>;

    fn save_player_stats(&self, stats: PlayerStats) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_category_and_name() {
        let keeper = RosterMember::new("p1", "Sam Keeper", 1, "Goalkeeper");
        let striker = RosterMember::new("p9", "Jo Nine", 9, "Striker");

        let by_category = RosterFilter::category(PositionCategory::Forward);
        assert!(!by_category.matches(&keeper));
        assert!(by_category.matches(&striker));

        let by_name = RosterFilter { name_contains: Some("KEEP".into()), ..Default::default() };
        assert!(by_name.matches(&keeper));
        assert!(!by_name.matches(&striker));

        assert!(RosterFilter::default().matches(&keeper));
    }
}
