use serde::{Deserialize, Serialize};

use super::error_codes;
use crate::lineup::{self, LineupAssignment, PitchPoint};
use crate::models::RosterMember;
use crate::stats::extract_stats;
use crate::tactics::{get_formation, Formation, Position, FORMATION_CATALOG};

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn parse_request<'de, T: Deserialize<'de>>(request_json: &'de str) -> Result<T, String> {
    serde_json::from_str(request_json).map_err(|e| err_code(error_codes::INVALID_REQUEST, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| err_code(error_codes::SERIALIZATION_FAILED, e))
}

#[derive(Debug, Serialize)]
pub struct FormationResponse<'a> {
    pub formation_id: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation: Option<&'a Formation>,
}

/// `{"formation_id": ..., "found": bool, "formation": {...}}`; a miss is not an error.
pub fn get_formation_json(formation_id: &str) -> Result<String, String> {
    let formation = get_formation(formation_id);
    to_json(&FormationResponse {
        formation_id: formation.map_or_else(|| formation_id.to_string(), |f| f.id.clone()),
        found: formation.is_some(),
        formation,
    })
}

pub fn list_formations_json() -> Result<String, String> {
    to_json(&FORMATION_CATALOG.all())
}

// ============================================================================
// Placements
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PlacementRequest {
    pub formation_id: String,
    #[serde(default)]
    pub assignment: LineupAssignment,
    #[serde(default)]
    pub roster: Vec<RosterMember>,
}

#[derive(Debug, Serialize)]
pub struct PlacementDto<'a> {
    pub position: &'a Position,
    pub member: Option<&'a RosterMember>,
    pub point: PitchPoint,
    /// CSS `left` / `top` in percent.
    pub left_percent: f32,
    pub top_percent: f32,
}

#[derive(Debug, Serialize)]
pub struct PlacementResponse<'a> {
    pub formation_id: String,
    pub found: bool,
    pub placements: Vec<PlacementDto<'a>>,
}

pub fn resolve_placements_json(request_json: &str) -> Result<String, String> {
    let request: PlacementRequest = parse_request(request_json)?;

    let Some(formation) = get_formation(&request.formation_id) else {
        return to_json(&PlacementResponse {
            formation_id: request.formation_id,
            found: false,
            placements: Vec::new(),
        });
    };

    let placements = lineup::resolve_placements(formation, &request.assignment, &request.roster)
        .into_iter()
        .map(|p| {
            let (left_percent, top_percent) = p.css_percent();
            PlacementDto {
                position: p.position,
                member: p.member,
                point: p.point,
                left_percent,
                top_percent,
            }
        })
        .collect();

    to_json(&PlacementResponse { formation_id: formation.id.clone(), found: true, placements })
}

// ============================================================================
// Candidates
// ============================================================================

/// Either a raw `role` tag, or a `formation_id` + `position_id` pair.
#[derive(Debug, Deserialize)]
pub struct CandidateRequest {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub formation_id: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
    pub roster: Vec<RosterMember>,
}

pub fn candidates_for_slot_json(request_json: &str) -> Result<String, String> {
    let request: CandidateRequest = parse_request(request_json)?;

    let candidates = match (&request.role, &request.formation_id, &request.position_id) {
        (Some(role), _, _) => lineup::candidates_for_role_tag(role, &request.roster),
        (None, Some(formation_id), Some(position_id)) => {
            let formation = get_formation(formation_id).ok_or_else(|| {
                err_code(error_codes::FORMATION_NOT_FOUND, format!("'{formation_id}'"))
            })?;
            let position = formation.position(position_id).ok_or_else(|| {
                err_code(
                    error_codes::UNKNOWN_POSITION,
                    format!("'{position_id}' is not a slot of {}", formation.id),
                )
            })?;
            lineup::candidates_for_slot(position, &request.roster)
        }
        _ => {
            return Err(err_code(
                error_codes::INVALID_REQUEST,
                "expected `role` or `formation_id` + `position_id`",
            ))
        }
    };

    to_json(&candidates)
}

// ============================================================================
// Assignment edits
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    #[serde(default)]
    pub assignment: LineupAssignment,
    pub position_id: String,
    #[serde(default)]
    pub member_id: Option<String>,
}

/// Returns the updated assignment object; the request's copy is not reused.
pub fn assign_json(request_json: &str) -> Result<String, String> {
    let request: AssignRequest = parse_request(request_json)?;
    let next =
        lineup::assign(&request.assignment, &request.position_id, request.member_id.as_deref());
    to_json(&next)
}

// ============================================================================
// OCR stats
// ============================================================================

/// Raw OCR text in, partial stats object out (`{}` when nothing was found).
pub fn extract_stats_json(ocr_text: &str) -> Result<String, String> {
    to_json(&extract_stats(ocr_text))
}
