pub mod json_api;

pub use json_api::{
    assign_json, candidates_for_slot_json, extract_stats_json, get_formation_json,
    list_formations_json, resolve_placements_json, AssignRequest, CandidateRequest,
    PlacementRequest,
};

/// Prefixes of `Err` strings returned by the `*_json` functions.
pub mod error_codes {
    pub const INVALID_REQUEST: &str = "E_INVALID_REQUEST";
    pub const FORMATION_NOT_FOUND: &str = "E_FORMATION_NOT_FOUND";
    pub const UNKNOWN_POSITION: &str = "E_UNKNOWN_POSITION";
    pub const SERIALIZATION_FAILED: &str = "E_SERIALIZATION_FAILED";
}
