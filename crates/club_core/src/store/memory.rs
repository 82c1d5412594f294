use std::collections::HashMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::snapshot::{load_snapshot, save_snapshot, ClubSnapshot, SNAPSHOT_VERSION};
use super::{ClubStore, RosterFilter, StoreError};
use crate::lineup::LineupAssignment;
use crate::models::{MatchRecord, PlayerStats, RosterMember};

#[derive(Debug, Default)]
struct Tables {
    club_name: String,
    roster: HashMap<String, RosterMember>,
    matches: HashMap<String, MatchRecord>,
    stats: HashMap<String, PlayerStats>,
}

/// Thread-safe in-memory store. Passed to services explicitly; there is no
/// process-wide instance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: ClubSnapshot) -> Self {
        let tables = Tables {
            club_name: snapshot.club_name,
            roster: snapshot.roster.into_iter().map(|m| (m.id.clone(), m)).collect(),
            matches: snapshot.matches.into_iter().map(|m| (m.id.clone(), m)).collect(),
            stats: snapshot.stats.into_iter().map(|s| (s.player_id.clone(), s)).collect(),
        };
        Self { tables: RwLock::new(tables) }
    }

    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let snapshot = load_snapshot(path)?;
        log::info!(
            "Opened club store from {:?}: {} players, {} matches",
            path,
            snapshot.roster.len(),
            snapshot.matches.len()
        );
        Ok(Self::from_snapshot(snapshot))
    }

    /// Current contents, sorted so the written file diffs cleanly.
    pub fn snapshot(&self) -> Result<ClubSnapshot, StoreError> {
        let tables = self.read()?;

        let mut roster: Vec<RosterMember> = tables.roster.values().cloned().collect();
        roster.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));

        let mut matches: Vec<MatchRecord> = tables.matches.values().cloned().collect();
        matches.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| a.id.cmp(&b.id)));

        let mut stats: Vec<PlayerStats> = tables.stats.values().cloned().collect();
        stats.sort_by(|a, b| a.player_id.cmp(&b.player_id));

        Ok(ClubSnapshot {
            club_name: tables.club_name.clone(),
            roster,
            matches,
            stats,
            version: SNAPSHOT_VERSION,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        save_snapshot(path, &self.snapshot()?)?;
        log::info!("Club store saved to {:?}", path);
        Ok(())
    }

    pub fn club_name(&self) -> Result<String, StoreError> {
        Ok(self.read()?.club_name.clone())
    }

    pub fn upsert_roster_member(&self, member: RosterMember) -> Result<(), StoreError> {
        self.write()?.roster.insert(member.id.clone(), member);
        Ok(())
    }

    pub fn remove_roster_member(&self, id: &str) -> Result<Option<RosterMember>, StoreError> {
        Ok(self.write()?.roster.remove(id))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, StoreError> {
        self.tables.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, StoreError> {
        self.tables.write().map_err(|_| StoreError::Poisoned)
    }
}

impl ClubStore for InMemoryStore {
    fn get_roster_member(&self, id: &str) -> Result<Option<RosterMember>, StoreError> {
        Ok(self.read()?.roster.get(id).cloned())
    }

    fn list_roster_members(
        &self,
        filter: Option<&RosterFilter>,
    ) -> Result<Vec<RosterMember>, StoreError> {
        let tables = self.read()?;
        let mut members: Vec<RosterMember> = tables
            .roster
            .values()
            .filter(|m| filter.map_or(true, |f| f.matches(m)))
            .cloned()
            .collect();
        members.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));
        Ok(members)
    }

    fn get_saved_assignment(&self, match_id: &str) -> Result<LineupAssignment, StoreError> {
        Ok(self.read()?.matches.get(match_id).map(|m| m.lineup.clone()).unwrap_or_default())
    }

    fn save_assignment(
        &self,
        match_id: &str,
        assignment: &LineupAssignment,
    ) -> Result<(), StoreError> {
        let mut tables = self.write()?;
        let record = tables
            .matches
            .get_mut(match_id)
            .ok_or_else(|| StoreError::MatchNotFound(match_id.to_string()))?;
        record.lineup = assignment.clone();
        Ok(())
    }

    fn get_match(&self, id: &str) -> Result<Option<MatchRecord>, StoreError> {
        Ok(self.read()?.matches.get(id).cloned())
    }

    fn list_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        let mut matches: Vec<MatchRecord> = self.read()?.matches.values().cloned().collect();
        matches.sort_by(|a, b| a.kickoff.cmp(&b.kickoff).then_with(|| a.id.cmp(&b.id)));
        Ok(matches)
    }

    fn save_match(&self, record: MatchRecord) -> Result<(), StoreError> {
        self.write()?.matches.insert(record.id.clone(), record);
        Ok(())
    }

    fn get_player_stats(&self, player_id: &str) -> Result<Option<PlayerStats>, StoreError> {
        Ok(self.read()?.stats.get(player_id).cloned())
    }

    fn save_player_stats(&self, stats: PlayerStats) -> Result<(), StoreError> {
        self.write()?.stats.insert(stats.player_id.clone(), stats);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::assign;
    use crate::models::{PositionCategory, Venue};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn seeded() -> InMemoryStore {
        let mut snapshot = ClubSnapshot::new("Harbour FC");
        snapshot.roster = vec![
            RosterMember::new("p9", "Jo Nine", 9, "Striker"),
            RosterMember::new("p1", "Sam Keeper", 1, "Goalkeeper"),
            RosterMember::new("p4", "Lee Stone", 4, "Centre Back"),
        ];
        snapshot.matches = vec![
            MatchRecord::new(
                "m2",
                "United",
                Utc.with_ymd_and_hms(2026, 9, 1, 19, 45, 0).unwrap(),
                Venue::Home,
                "4-4-2",
            ),
            MatchRecord::new(
                "m1",
                "Rovers",
                Utc.with_ymd_and_hms(2026, 8, 15, 15, 0, 0).unwrap(),
                Venue::Away,
                "4-3-3",
            ),
        ];
        InMemoryStore::from_snapshot(snapshot)
    }

    #[test]
    fn test_roster_listing_is_ordered_and_filtered() {
        let store = seeded();
        let all = store.list_roster_members(None).unwrap();
        let numbers: Vec<u8> = all.iter().map(|m| m.number).collect();
        assert_eq!(numbers, vec![1, 4, 9]);

        let filter = RosterFilter::category(PositionCategory::Defender);
        let defenders = store.list_roster_members(Some(&filter)).unwrap();
        assert_eq!(defenders.len(), 1);
        assert_eq!(defenders[0].id, "p4");
    }

    #[test]
    fn test_assignment_roundtrip() {
        let store = seeded();
        assert!(store.get_saved_assignment("m1").unwrap().is_empty());

        let lineup = assign(&LineupAssignment::new(), "GK", Some("p1"));
        store.save_assignment("m1", &lineup).unwrap();
        assert_eq!(store.get_saved_assignment("m1").unwrap(), lineup);
    }

    #[test]
    fn test_unknown_match() {
        let store = seeded();
        assert!(store.get_saved_assignment("m404").unwrap().is_empty());
        let err = store.save_assignment("m404", &LineupAssignment::new()).unwrap_err();
        assert!(matches!(err, StoreError::MatchNotFound(_)));
        assert!(store.get_match("m404").unwrap().is_none());
    }

    #[test]
    fn test_matches_ordered_by_kickoff() {
        let store = seeded();
        let ids: Vec<String> = store.list_matches().unwrap().into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[test]
    fn test_player_stats_upsert() {
        let store = seeded();
        assert!(store.get_player_stats("p9").unwrap().is_none());

        let mut stats = PlayerStats::empty("p9");
        stats.goals = 4;
        store.save_player_stats(stats.clone()).unwrap();
        assert_eq!(store.get_player_stats("p9").unwrap(), Some(stats));
    }

    #[test]
    fn test_roster_edits() {
        let store = seeded();
        store.upsert_roster_member(RosterMember::new("p7", "Ray Wing", 7, "Winger")).unwrap();
        assert!(store.get_roster_member("p7").unwrap().is_some());
        assert!(store.remove_roster_member("p4").unwrap().is_some());
        assert_eq!(store.list_roster_members(None).unwrap().len(), 3);
    }

    #[test]
    fn test_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("club.json");

        let store = seeded();
        store.save_assignment("m2", &assign(&LineupAssignment::new(), "LS", Some("p9"))).unwrap();
        store.save_to(&path).unwrap();

        let reopened = InMemoryStore::open(&path).unwrap();
        assert_eq!(reopened.club_name().unwrap(), "Harbour FC");
        assert_eq!(reopened.get_saved_assignment("m2").unwrap().member_at("LS"), Some("p9"));
        assert_eq!(reopened.snapshot().unwrap(), store.snapshot().unwrap());
    }

    #[test]
    fn test_shared_across_threads() {
        let store = Arc::new(seeded());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let mut stats = PlayerStats::empty(format!("t{}", i));
                    stats.minutes = 90;
                    store.save_player_stats(stats).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.snapshot().unwrap().stats.len(), 4);
    }
}
