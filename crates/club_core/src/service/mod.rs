//! Services wiring the pure core to an injected [`ClubStore`](crate::store::ClubStore).

pub mod lineup_service;
pub mod stats_service;

pub use lineup_service::{LineupService, LineupView, MatchLineup};
pub use stats_service::StatsService;
