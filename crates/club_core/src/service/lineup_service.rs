use crate::error::{CoreError, Result};
use crate::lineup::{self, resolve_placements, unfilled_positions, LineupAssignment, Placement};
use crate::models::{MatchRecord, RosterMember};
use crate::store::ClubStore;
use crate::tactics::{get_formation, Formation, DEFAULT_FORMATION_ID};

/// Everything needed to draw one match's lineup.
#[derive(Debug, Clone)]
pub struct MatchLineup {
    pub record: MatchRecord,
    pub formation: &'static Formation,
    pub roster: Vec<RosterMember>,
    pub assignment: LineupAssignment,
}

impl MatchLineup {
    pub fn placements(&self) -> Vec<Placement<'_>> {
        resolve_placements(self.formation, &self.assignment, &self.roster)
    }

    /// Slots still waiting for a player, in formation order.
    pub fn unfilled(&self) -> Vec<&str> {
        unfilled_positions(self.formation, &self.assignment, &self.roster)
    }

    /// Candidates for one slot, `None` if the slot is not in this formation.
    pub fn candidates(&self, position_id: &str) -> Option<Vec<&RosterMember>> {
        let position = self.formation.position(position_id)?;
        Some(lineup::candidates_for_slot(position, &self.roster))
    }
}

/// Result of loading a lineup: the formation may not be in the catalog.
#[derive(Debug, Clone)]
pub enum LineupView {
    Ready(MatchLineup),
    FormationUnavailable { match_id: String, formation_id: String },
}

/// Lineup reads and edits against an injected store.
///
/// Every edit is a read of the saved lineup followed by a separate write, with
/// no lock held in between. Two editors working on the same match at once can
/// lose an update, and `change_formation` can overwrite a concurrent `assign`.
/// Callers that allow parallel edits must serialize them per match.
pub struct LineupService<'a, S: ClubStore + ?Sized> {
    store: &'a S,
    default_formation: &'a str,
}

impl<'a, S: ClubStore + ?Sized> LineupService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_default_formation(store, DEFAULT_FORMATION_ID)
    }

    /// Matches with a blank formation id are drawn in `formation_id`.
    pub fn with_default_formation(store: &'a S, formation_id: &'a str) -> Self {
        Self { store, default_formation: formation_id }
    }

    /// The record's formation id, or the default when it is blank.
    fn formation_id<'r>(&'r self, record: &'r MatchRecord) -> &'r str {
        let id = record.formation.trim();
        if id.is_empty() {
            self.default_formation
        } else {
            id
        }
    }

    fn require_match(&self, match_id: &str) -> Result<MatchRecord> {
        self.store
            .get_match(match_id)?
            .ok_or_else(|| CoreError::MatchNotFound(match_id.to_string()))
    }

    fn require_formation(&self, formation_id: &str) -> Result<&'static Formation> {
        get_formation(formation_id)
            .ok_or_else(|| CoreError::FormationNotFound(formation_id.to_string()))
    }

    pub fn load(&self, match_id: &str) -> Result<LineupView> {
        let record = self.require_match(match_id)?;

        let Some(formation) = get_formation(self.formation_id(&record)) else {
            log::warn!("match {} uses unknown formation {}", match_id, record.formation);
            return Ok(LineupView::FormationUnavailable {
                match_id: record.id,
                formation_id: record.formation,
            });
        };

        let roster = self.store.list_roster_members(None)?;
        let assignment = self.store.get_saved_assignment(match_id)?;

        Ok(LineupView::Ready(MatchLineup { record, formation, roster, assignment }))
    }

    /// Store a new fixture. A blank formation id takes the default; slots the
    /// formation does not have are dropped from the record's lineup.
    pub fn create_match(&self, mut record: MatchRecord) -> Result<MatchRecord> {
        let formation = self.require_formation(self.formation_id(&record))?;

        for (position, member) in record.lineup.retain_positions(formation) {
            log::warn!("match {}: {} dropped from unknown slot {}", record.id, member, position);
        }

        record.formation = formation.id.clone();
        self.store.save_match(record.clone())?;

        log::info!("match {} vs {} created in {}", record.id, record.opponent, formation.id);
        Ok(record)
    }

    /// Put a member in a slot (or clear it with `None`) and persist.
    pub fn assign(
        &self,
        match_id: &str,
        position_id: &str,
        member_id: Option<&str>,
    ) -> Result<LineupAssignment> {
        let record = self.require_match(match_id)?;
        let formation = self.require_formation(self.formation_id(&record))?;

        if !formation.has_position(position_id) {
            return Err(CoreError::UnknownPosition {
                formation: formation.id.clone(),
                position: position_id.to_string(),
            });
        }
        if let Some(member_id) = member_id {
            if self.store.get_roster_member(member_id)?.is_none() {
                return Err(CoreError::PlayerNotFound(member_id.to_string()));
            }
        }

        let current = self.store.get_saved_assignment(match_id)?;
        let next = lineup::assign(&current, position_id, member_id);
        self.store.save_assignment(match_id, &next)?;

        log::info!(
            "match {}: {} -> {}",
            match_id,
            position_id,
            member_id.unwrap_or("(empty)")
        );
        Ok(next)
    }

    /// Switch formation, keeping players whose slot id exists in the new one.
    /// A blank `formation_id` switches to the default formation.
    pub fn change_formation(&self, match_id: &str, formation_id: &str) -> Result<MatchRecord> {
        let mut record = self.require_match(match_id)?;
        let formation_id = match formation_id.trim() {
            "" => self.default_formation,
            id => id,
        };
        let formation = self.require_formation(formation_id)?;

        let dropped = record.lineup.retain_positions(formation);
        for (position, member) in &dropped {
            log::info!("match {}: {} leaves dropped slot {}", match_id, member, position);
        }

        record.formation = formation.id.clone();
        self.store.save_match(record.clone())?;
        Ok(record)
    }
}
