//! Lineup mapping: slot assignments, candidate filtering and pitch placement.

pub mod assignment;
pub mod candidates;
pub mod placement;
pub mod projection;

pub use assignment::{assign, LineupAssignment};
pub use candidates::{candidates_for_role, candidates_for_role_tag, candidates_for_slot};
pub use placement::{resolve_placements, unfilled_positions, Placement};
pub use projection::{project, project_position, PitchPoint};
