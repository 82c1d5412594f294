//! # club_core - Lineup and stats core for the club site
//!
//! Logic behind the lineup pitch and the admin OCR import:
//!
//! ## Features
//! - Built-in catalog of 13 formations on a normalized 100x140 pitch
//! - Lineup assignment with one-slot-per-player enforcement
//! - Placement resolution and viewport projection for the pitch diagram
//! - Role-based candidate filtering for slot pickers
//! - Table-driven extraction of goals/assists/cards/minutes from OCR text
//! - JSON API for the web front end, backed by an injected store

pub mod api;
pub mod config;
pub mod error;
pub mod lineup;
pub mod models;
pub mod service;
pub mod stats;
pub mod store;
pub mod tactics;

// Re-export main API functions
pub use api::{
    assign_json, candidates_for_slot_json, extract_stats_json, get_formation_json,
    list_formations_json, resolve_placements_json,
};
pub use config::ClubConfig;
pub use error::{CoreError, Result};

pub use lineup::{
    assign, candidates_for_role_tag, candidates_for_slot, resolve_placements, LineupAssignment,
    PitchPoint, Placement,
};
pub use models::{MatchRecord, PlayerStats, PositionCategory, RosterMember};
pub use service::{LineupService, LineupView, StatsService};
pub use stats::{extract_stats, ExtractedStatRecord, StatExtractor, StatField};
pub use store::{ClubStore, InMemoryStore, RosterFilter, StoreError};
pub use tactics::{
    get_formation, Formation, Position, PositionRole, DEFAULT_FORMATION_ID, FORMATION_CATALOG,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
