use crate::error::{CoreError, Result};
use crate::models::PlayerStats;
use crate::stats::{ExtractedStatRecord, StatExtractor};
use crate::store::ClubStore;

/// Admin flow: OCR text in, confirmed stats merged into the player's record.
pub struct StatsService<'a, S: ClubStore + ?Sized> {
    store: &'a S,
    extractor: StatExtractor,
}

impl<'a, S: ClubStore + ?Sized> StatsService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self::with_extractor(store, StatExtractor::default())
    }

    pub fn with_extractor(store: &'a S, extractor: StatExtractor) -> Self {
        Self { store, extractor }
    }

    /// Draft record for the admin to review; empty means nothing was detected.
    pub fn extract(&self, ocr_text: &str) -> ExtractedStatRecord {
        let record = self.extractor.extract(ocr_text);
        if record.is_empty() {
            log::info!("no stats detected in OCR text ({} bytes)", ocr_text.len());
        }
        record
    }

    /// Merge a confirmed record into the player's stats.
    ///
    /// Returns `None` without writing anything when the record is empty, so
    /// an unreadable screenshot never zeroes a player's numbers.
    pub fn apply_confirmed(
        &self,
        player_id: &str,
        record: &ExtractedStatRecord,
    ) -> Result<Option<PlayerStats>> {
        if self.store.get_roster_member(player_id)?.is_none() {
            return Err(CoreError::PlayerNotFound(player_id.to_string()));
        }
        if record.is_empty() {
            return Ok(None);
        }

        let mut stats = self
            .store
            .get_player_stats(player_id)?
            .unwrap_or_else(|| PlayerStats::empty(player_id));
        let written = record.apply_to(&mut stats);
        self.store.save_player_stats(stats.clone())?;

        log::info!("updated {} stat field(s) for {}", written, player_id);
        Ok(Some(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RosterMember;
    use crate::stats::StatField;
    use crate::store::{ClubSnapshot, InMemoryStore};

    fn store() -> InMemoryStore {
        let mut snapshot = ClubSnapshot::new("Harbour FC");
        snapshot.roster = vec![RosterMember::new("p9", "Jo Nine", 9, "Striker")];
        let mut stats = PlayerStats::empty("p9");
        stats.goals = 4;
        stats.assists = 2;
        stats.appearances = 6;
        snapshot.stats = vec![stats];
        InMemoryStore::from_snapshot(snapshot)
    }

    #[test]
    fn test_confirmed_record_overwrites_present_fields() {
        let store = store();
        let service = StatsService::new(&store);

        let draft = service.extract("Goals: 5\nMinutes 480");
        let stats = service.apply_confirmed("p9", &draft).unwrap().unwrap();

        assert_eq!(stats.goals, 5);
        assert_eq!(stats.minutes, 480);
        assert_eq!(stats.assists, 2);
        assert_eq!(stats.appearances, 6);
        assert_eq!(store.get_player_stats("p9").unwrap(), Some(stats));
    }

    #[test]
    fn test_empty_record_writes_nothing() {
        let store = store();
        let service = StatsService::new(&store);

        let draft = service.extract("blurry screenshot");
        assert!(draft.is_empty());
        assert_eq!(service.apply_confirmed("p9", &draft).unwrap(), None);
        assert_eq!(store.get_player_stats("p9").unwrap().unwrap().goals, 4);
    }

    #[test]
    fn test_max_value_screenshot_does_not_overflow() {
        let store = store();
        let service = StatsService::new(&store);

        let draft = service.extract("Goals: 4294967295\nAssists: 1\n");
        let stats = service.apply_confirmed("p9", &draft).unwrap().unwrap();

        assert_eq!(stats.goals, u32::MAX);
        assert_eq!(stats.goal_contributions(), u32::MAX);
    }

    #[test]
    fn test_unknown_player() {
        let store = store();
        let service = StatsService::new(&store);
        let draft = ExtractedStatRecord { goals: Some(1), ..Default::default() };
        assert!(matches!(
            service.apply_confirmed("nobody", &draft),
            Err(CoreError::PlayerNotFound(_))
        ));
    }

    #[test]
    fn test_first_confirmation_creates_stats() {
        let store = store();
        store.upsert_roster_member(RosterMember::new("p3", "New Signing", 3, "Left Back")).unwrap();
        let service = StatsService::new(&store);

        let draft = ExtractedStatRecord { yellow_cards: Some(1), ..Default::default() };
        let stats = service.apply_confirmed("p3", &draft).unwrap().unwrap();
        assert_eq!(stats.yellow_cards, 1);
        assert_eq!(stats.goals, 0);
    }

    #[test]
    fn test_restricted_extractor_is_used() {
        let store = store();
        let service =
            StatsService::with_extractor(&store, StatExtractor::new(&[StatField::Assists]));
        let draft = service.extract("Goals 3\nAssists 1");
        assert_eq!(draft.goals, None);
        assert_eq!(draft.assists, Some(1));
    }
}
