use serde::{Deserialize, Serialize};

/// Statistic fields the OCR extractor knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatField {
    Goals,
    Assists,
    YellowCards,
    RedCards,
    Minutes,
}

impl StatField {
    pub fn all() -> [StatField; 5] {
        [Self::Goals, Self::Assists, Self::YellowCards, Self::RedCards, Self::Minutes]
    }

    /// Key used in JSON records.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::Assists => "assists",
            Self::YellowCards => "yellowCards",
            Self::RedCards => "redCards",
            Self::Minutes => "minutes",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.key().eq_ignore_ascii_case(key.trim()))
    }
}

/// Where the number sits relative to the label on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOrder {
    /// `goals: 3`, `goals 3`
    LabelThenNumber,
    /// `3 goals`
    NumberThenLabel,
}

/// One row of the extraction table.
#[derive(Debug, Clone, Copy)]
pub struct StatFieldSpec {
    pub field: StatField,
    /// Regex fragment for the label; compiled case-insensitive.
    pub keyword: &'static str,
    /// Patterns tried per line, first parse wins.
    pub capture_order: &'static [CaptureOrder],
}

const BOTH_ORDERS: &[CaptureOrder] =
    &[CaptureOrder::LabelThenNumber, CaptureOrder::NumberThenLabel];

pub const STAT_FIELD_TABLE: &[StatFieldSpec] = &[
    StatFieldSpec { field: StatField::Goals, keyword: r"goals?", capture_order: BOTH_ORDERS },
    StatFieldSpec { field: StatField::Assists, keyword: r"assists?", capture_order: BOTH_ORDERS },
    StatFieldSpec {
        field: StatField::YellowCards,
        keyword: r"yellow(?:\s*cards?)?",
        capture_order: BOTH_ORDERS,
    },
    StatFieldSpec {
        field: StatField::RedCards,
        keyword: r"red(?:\s*cards?)?",
        capture_order: BOTH_ORDERS,
    },
    StatFieldSpec { field: StatField::Minutes, keyword: r"minutes?", capture_order: BOTH_ORDERS },
];

impl CaptureOrder {
    /// Full pattern for a label fragment. Labels start at a word boundary so
    /// "scored 2" is not read as a red card; the cost is that tokens OCR glued
    /// together ("TotalGoals: 4", "x3 goals") are not read either. Digits are
    /// ASCII only.
    pub fn pattern(&self, keyword: &str) -> String {
        match self {
            Self::LabelThenNumber => format!(r"(?i)\b{}\s*:?\s*([0-9]+)", keyword),
            Self::NumberThenLabel => format!(r"(?i)\b([0-9]+)\s*{}\b", keyword),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_field_once() {
        let mut fields: Vec<StatField> = STAT_FIELD_TABLE.iter().map(|s| s.field).collect();
        fields.sort();
        assert_eq!(fields, StatField::all().to_vec());
    }

    #[test]
    fn test_key_roundtrip() {
        for field in StatField::all() {
            assert_eq!(StatField::from_key(field.key()), Some(field));
        }
        assert_eq!(StatField::from_key("YELLOWCARDS"), Some(StatField::YellowCards));
        assert_eq!(StatField::from_key("saves"), None);
    }

    #[test]
    fn test_serde_key_matches_key() {
        let json = serde_json::to_string(&StatField::RedCards).unwrap();
        assert_eq!(json, "\"redCards\"");
    }
}
