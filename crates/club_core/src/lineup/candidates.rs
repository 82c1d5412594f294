use crate::models::RosterMember;
use crate::tactics::{Position, PositionRole};

/// Roster members whose category fits the slot's role.
pub fn candidates_for_slot<'a>(
    position: &Position,
    roster: &'a [RosterMember],
) -> Vec<&'a RosterMember> {
    candidates_for_role(position.role, roster)
}

pub fn candidates_for_role(role: PositionRole, roster: &[RosterMember]) -> Vec<&RosterMember> {
    roster.iter().filter(|m| m.category.fits(role)).collect()
}

/// Filter by a raw role tag. Tags this crate does not recognize filter nothing.
pub fn candidates_for_role_tag<'a>(tag: &str, roster: &'a [RosterMember]) -> Vec<&'a RosterMember> {
    match PositionRole::from_tag(tag) {
        Some(role) => candidates_for_role(role, roster),
        None => {
            log::debug!("unrecognized role tag {:?}, returning full roster", tag);
            roster.iter().collect()
        }
    }
}
