// crates/club_core/src/tactics/mod.rs
// Formation catalog: named formations with pitch coordinates and role tags

pub mod catalog;
pub mod formation;

pub use catalog::{
    get_formation, normalize_formation_id, FormationCatalog, DEFAULT_FORMATION_ID,
    FORMATION_CATALOG,
};
pub use formation::{
    Formation, Position, PositionRole, PITCH_LENGTH, PITCH_WIDTH, STARTING_ELEVEN,
};
