use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::tactics::Formation;

/// Position id -> roster member id for one match or draft.
///
/// A member holds at most one slot; putting them somewhere new vacates the
/// slot they held before.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct LineupAssignment {
    slots: BTreeMap<String, String>,
}

impl LineupAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member_at(&self, position_id: &str) -> Option<&str> {
        self.slots.get(position_id).map(String::as_str)
    }

    pub fn position_of(&self, member_id: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(_, member)| member.as_str() == member_id)
            .map(|(position, _)| position.as_str())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// (position id, member id) pairs ordered by position id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(p, m)| (p.as_str(), m.as_str()))
    }

    /// Put `member_id` in `position_id`, vacating the member's previous slot.
    pub fn set(&mut self, position_id: impl Into<String>, member_id: impl Into<String>) {
        let member_id = member_id.into();
        self.slots.retain(|_, m| *m != member_id);
        self.slots.insert(position_id.into(), member_id);
    }

    /// Empty a slot, returning who was in it.
    pub fn clear(&mut self, position_id: &str) -> Option<String> {
        self.slots.remove(position_id)
    }

    /// `Some(member)` assigns, `None` clears.
    pub fn apply(&mut self, position_id: &str, member_id: Option<&str>) {
        match member_id {
            Some(member) => self.set(position_id, member),
            None => {
                self.clear(position_id);
            }
        }
    }

    /// Drop slots that do not exist in `formation`, returning the removed
    /// (position, member) pairs.
    pub fn retain_positions(&mut self, formation: &Formation) -> Vec<(String, String)> {
        let (kept, dropped): (BTreeMap<_, _>, BTreeMap<_, _>) = std::mem::take(&mut self.slots)
            .into_iter()
            .partition(|(position, _)| formation.has_position(position));
        self.slots = kept;
        dropped.into_iter().collect()
    }
}

/// Copy-on-write assign: returns the updated assignment, `assignment` is untouched.
pub fn assign(
    assignment: &LineupAssignment,
    position_id: &str,
    member_id: Option<&str>,
) -> LineupAssignment {
    let mut next = assignment.clone();
    next.apply(position_id, member_id);
    next
}

impl TryFrom<BTreeMap<String, String>> for LineupAssignment {
    type Error = CoreError;

    fn try_from(slots: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let mut holder: BTreeMap<&str, &str> = BTreeMap::new();
        for (position, member) in &slots {
            if let Some(first) = holder.insert(member, position) {
                return Err(CoreError::DuplicateAssignment {
                    member: member.clone(),
                    first: first.to_string(),
                    second: position.clone(),
                });
            }
        }
        Ok(Self { slots })
    }
}

impl From<LineupAssignment> for BTreeMap<String, String> {
    fn from(assignment: LineupAssignment) -> Self {
        assignment.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::get_formation;
    use proptest::prelude::*;

    #[test]
    fn test_reassign_vacates_previous_slot() {
        let empty = LineupAssignment::new();
        let a = assign(&empty, "ST", Some("p7"));
        let b = assign(&a, "LW", Some("p7"));

        assert_eq!(b.member_at("LW"), Some("p7"));
        assert_eq!(b.member_at("ST"), None);
        assert_eq!(b.iter().filter(|(_, m)| *m == "p7").count(), 1);
        assert_eq!(b.position_of("p7"), Some("LW"));
    }

    #[test]
    fn test_assign_leaves_input_untouched() {
        let a = assign(&LineupAssignment::new(), "GK", Some("p1"));
        let b = assign(&a, "GK", None);
        assert_eq!(a.member_at("GK"), Some("p1"));
        assert!(b.is_empty());
    }

    #[test]
    fn test_assign_replaces_occupant() {
        let a = assign(&LineupAssignment::new(), "ST", Some("p9"));
        let b = assign(&a, "ST", Some("p10"));
        assert_eq!(b.member_at("ST"), Some("p10"));
        assert_eq!(b.position_of("p9"), None);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_clearing_empty_slot_is_noop() {
        let a = assign(&LineupAssignment::new(), "CB", None);
        assert!(a.is_empty());
    }

    #[test]
    fn test_retain_positions_drops_missing_slots() {
        let mut a = LineupAssignment::new();
        a.set("GK", "p1");
        a.set("LW", "p11");
        a.set("CAM", "p10");

        let formation = get_formation("4-3-3").unwrap();
        let dropped = a.retain_positions(formation);

        assert_eq!(dropped, vec![("CAM".to_string(), "p10".to_string())]);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_json_is_a_plain_object() {
        let a = assign(&LineupAssignment::new(), "GK", Some("p1"));
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"GK":"p1"}"#);

        let back: LineupAssignment = serde_json::from_str(r#"{"GK":"p1","ST":"p9"}"#).unwrap();
        assert_eq!(back.member_at("ST"), Some("p9"));
    }

    #[test]
    fn test_json_with_member_in_two_slots_is_rejected() {
        let result: Result<LineupAssignment, _> =
            serde_json::from_str(r#"{"LW":"p7","ST":"p7"}"#);
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn prop_member_never_holds_two_slots(
            ops in prop::collection::vec((0usize..6, prop::option::of(0usize..8)), 0..40)
        ) {
            let positions = ["GK", "LB", "CB", "RB", "CM", "ST"];
            let mut a = LineupAssignment::new();
            for (pos, member) in ops {
                let member = member.map(|m| format!("p{}", m));
                a = assign(&a, positions[pos], member.as_deref());
            }

            let mut seen = std::collections::HashSet::new();
            for (_, member) in a.iter() {
                prop_assert!(seen.insert(member.to_string()));
            }
        }

        #[test]
        fn prop_last_assign_is_visible(pos in 0usize..6, member in 0usize..8) {
            let positions = ["GK", "LB", "CB", "RB", "CM", "ST"];
            let id = format!("p{}", member);
            let a = assign(&LineupAssignment::new(), "CM", Some("p3"));
            let b = assign(&a, positions[pos], Some(&id));
            prop_assert_eq!(b.member_at(positions[pos]), Some(id.as_str()));
            prop_assert_eq!(b.position_of(&id), Some(positions[pos]));
        }
    }
}
