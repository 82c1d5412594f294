use serde::{Deserialize, Serialize};

use super::fields::StatField;
use crate::models::PlayerStats;

/// Partial statistics recovered from OCR text.
///
/// Absent fields mean "not detected", never zero. Only applied to a
/// [`PlayerStats`] after the admin confirms it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedStatRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assists: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow_cards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red_cards: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
}

impl ExtractedStatRecord {
    pub fn get(&self, field: StatField) -> Option<u32> {
        match field {
            StatField::Goals => self.goals,
            StatField::Assists => self.assists,
            StatField::YellowCards => self.yellow_cards,
            StatField::RedCards => self.red_cards,
            StatField::Minutes => self.minutes,
        }
    }

    pub fn set(&mut self, field: StatField, value: u32) {
        *self.slot_mut(field) = Some(value);
    }

    pub fn remove(&mut self, field: StatField) -> Option<u32> {
        self.slot_mut(field).take()
    }

    fn slot_mut(&mut self, field: StatField) -> &mut Option<u32> {
        match field {
            StatField::Goals => &mut self.goals,
            StatField::Assists => &mut self.assists,
            StatField::YellowCards => &mut self.yellow_cards,
            StatField::RedCards => &mut self.red_cards,
            StatField::Minutes => &mut self.minutes,
        }
    }

    /// Detected (field, value) pairs in table order.
    pub fn fields(&self) -> Vec<(StatField, u32)> {
        StatField::all().into_iter().filter_map(|f| self.get(f).map(|v| (f, v))).collect()
    }

    pub fn len(&self) -> usize {
        self.fields().len()
    }

    pub fn is_empty(&self) -> bool {
        StatField::all().into_iter().all(|f| self.get(f).is_none())
    }

    /// Overwrite the detected fields on `stats`, leaving the rest alone.
    /// Returns the number of fields written.
    pub fn apply_to(&self, stats: &mut PlayerStats) -> usize {
        let mut written = 0;
        for (field, value) in self.fields() {
            let target = match field {
                StatField::Goals => &mut stats.goals,
                StatField::Assists => &mut stats.assists,
                StatField::YellowCards => &mut stats.yellow_cards,
                StatField::RedCards => &mut stats.red_cards,
                StatField::Minutes => &mut stats.minutes,
            };
            *target = value;
            written += 1;
        }
        written
    }
}
