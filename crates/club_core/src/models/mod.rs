pub mod match_record;
pub mod player_stats;
pub mod roster;

pub use match_record::{MatchOutcome, MatchRecord, Score, Venue};
pub use player_stats::PlayerStats;
pub use roster::{PositionCategory, RosterMember};
