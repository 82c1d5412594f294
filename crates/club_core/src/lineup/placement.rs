use serde::Serialize;
use std::collections::{HashMap, HashSet};

use super::assignment::LineupAssignment;
use super::projection::{project_position, PitchPoint};
use crate::models::RosterMember;
use crate::tactics::{Formation, Position};

/// One renderable slot: the position, who fills it, and where to draw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement<'a> {
    pub position: &'a Position,
    pub member: Option<&'a RosterMember>,
    pub point: PitchPoint,
}

impl Placement<'_> {
    pub fn is_filled(&self) -> bool {
        self.member.is_some()
    }

    /// CSS `left` / `top` percentages for the pitch diagram.
    pub fn css_percent(&self) -> (f32, f32) {
        self.point.css_percent()
    }
}

/// Resolve every formation slot, in formation order, against the roster.
///
/// Assigned ids missing from `roster` render as empty slots; the roster may
/// have changed since the assignment was saved.
pub fn resolve_placements<'a>(
    formation: &'a Formation,
    assignment: &LineupAssignment,
    roster: &'a [RosterMember],
) -> Vec<Placement<'a>> {
    let by_id: HashMap<&str, &RosterMember> =
        roster.iter().map(|m| (m.id.as_str(), m)).collect();

    formation
        .positions
        .iter()
        .map(|position| {
            let member = assignment.member_at(&position.id).and_then(|member_id| {
                let found = by_id.get(member_id).copied();
                if found.is_none() {
                    log::warn!(
                        "formation {}: slot {} references unknown member {}",
                        formation.id,
                        position.id,
                        member_id
                    );
                }
                found
            });
            Placement { position, member, point: project_position(position) }
        })
        .collect()
}

/// Position ids with no resolvable member, in formation order.
pub fn unfilled_positions<'a>(
    formation: &'a Formation,
    assignment: &LineupAssignment,
    roster: &[RosterMember],
) -> Vec<&'a str> {
    let known: HashSet<&str> = roster.iter().map(|m| m.id.as_str()).collect();
    formation
        .positions
        .iter()
        .filter(|p| assignment.member_at(&p.id).map_or(true, |m| !known.contains(m)))
        .map(|p| p.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::assign;
    use crate::tactics::{get_formation, FORMATION_CATALOG};

    fn roster() -> Vec<RosterMember> {
        vec![
            RosterMember::new("p1", "Sam Keeper", 1, "Goalkeeper"),
            RosterMember::new("p4", "Lee Stone", 4, "Centre Back"),
            RosterMember::new("p8", "Kim Pass", 8, "Midfielder"),
            RosterMember::new("p9", "Jo Nine", 9, "Striker"),
        ]
    }

    #[test]
    fn test_empty_assignment_leaves_every_slot_empty() {
        let roster = roster();
        for formation in FORMATION_CATALOG.all() {
            let placements = resolve_placements(formation, &LineupAssignment::new(), &roster);
            assert_eq!(placements.len(), formation.positions.len());
            assert!(placements.iter().all(|p| !p.is_filled()), "{}", formation.id);
        }
    }

    #[test]
    fn test_placements_follow_formation_order() {
        let formation = get_formation("4-4-2").unwrap();
        let placements = resolve_placements(formation, &LineupAssignment::new(), &[]);
        let ids: Vec<&str> = placements.iter().map(|p| p.position.id.as_str()).collect();
        let expected: Vec<&str> = formation.positions.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_assigned_members_are_resolved() {
        let formation = get_formation("4-3-3").unwrap();
        let roster = roster();
        let a = assign(&LineupAssignment::new(), "GK", Some("p1"));
        let a = assign(&a, "ST", Some("p9"));

        let placements = resolve_placements(formation, &a, &roster);
        let gk = &placements[0];
        assert_eq!(gk.position.id, "GK");
        assert_eq!(gk.member.map(|m| m.name.as_str()), Some("Sam Keeper"));
        assert!((gk.point.y - 10.0 / 140.0).abs() < 1e-6);

        let st = placements.iter().find(|p| p.position.id == "ST").unwrap();
        assert_eq!(st.member.map(|m| m.id.as_str()), Some("p9"));
    }

    #[test]
    fn test_dangling_member_renders_empty() {
        let formation = get_formation("4-3-3").unwrap();
        let roster = roster();
        let a = assign(&LineupAssignment::new(), "GK", Some("p1"));
        let a = assign(&a, "CM", Some("transferred"));

        let placements = resolve_placements(formation, &a, &roster);
        let cm = placements.iter().find(|p| p.position.id == "CM").unwrap();
        assert!(cm.member.is_none());
        assert!(placements[0].is_filled());
    }

    #[test]
    fn test_unfilled_positions() {
        let formation = get_formation("4-5-1").unwrap();
        let roster = roster();
        let a = assign(&LineupAssignment::new(), "ST", Some("p9"));
        let open = unfilled_positions(formation, &a, &roster);
        assert_eq!(open.len(), 10);
        assert!(!open.contains(&"ST"));
    }
}
