use serde::{Deserialize, Serialize};

use crate::tactics::PositionRole;

/// Closed position category of a roster member.
///
/// Legacy records only carry a free-text position ("Left Back", "Striker").
/// That text is classified once when the record enters the crate; nothing
/// downstream matches on substrings again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionCategory {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
    Unclassified,
}

impl PositionCategory {
    /// Classify free-text position strings, case-insensitive.
    ///
    /// Rules are checked in order: "goal", "mid", "def"/"back",
    /// "forward"/"striker"/"wing". A defensive midfielder is a midfielder and
    /// a wing-back is a defender.
    ///
    /// Each member gets exactly one category, so a "Defensive Midfielder" is
    /// never offered for defender slots and a "Left Wing-Back" is never
    /// offered for forward slots.
    pub fn classify(raw: &str) -> Self {
        let text = raw.to_lowercase();
        if text.contains("goal") {
            Self::Goalkeeper
        } else if text.contains("mid") {
            Self::Midfielder
        } else if text.contains("def") || text.contains("back") {
            Self::Defender
        } else if ["forward", "striker", "wing"].iter().any(|k| text.contains(k)) {
            Self::Forward
        } else {
            Self::Unclassified
        }
    }

    pub fn role(&self) -> Option<PositionRole> {
        match self {
            Self::Goalkeeper => Some(PositionRole::Goalkeeper),
            Self::Defender => Some(PositionRole::Defender),
            Self::Midfielder => Some(PositionRole::Midfielder),
            Self::Forward => Some(PositionRole::Forward),
            Self::Unclassified => None,
        }
    }

    pub fn fits(&self, role: PositionRole) -> bool {
        self.role() == Some(role)
    }
}

impl From<PositionRole> for PositionCategory {
    fn from(role: PositionRole) -> Self {
        match role {
            PositionRole::Goalkeeper => Self::Goalkeeper,
            PositionRole::Defender => Self::Defender,
            PositionRole::Midfielder => Self::Midfielder,
            PositionRole::Forward => Self::Forward,
        }
    }
}

/// A club player as stored by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RosterMemberRecord")]
pub struct RosterMember {
    pub id: String,
    pub name: String,
    pub number: u8,
    /// Position text as entered by the admin, kept for display.
    pub position: String,
    pub category: PositionCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portrait: Option<String>,
}

/// Wire shape of a roster member; `category` is optional for legacy data.
#[derive(Debug, Deserialize)]
struct RosterMemberRecord {
    id: String,
    name: String,
    #[serde(default)]
    number: u8,
    #[serde(default)]
    position: String,
    #[serde(default)]
    category: Option<PositionCategory>,
    #[serde(default, alias = "image")]
    portrait: Option<String>,
}

impl From<RosterMemberRecord> for RosterMember {
    fn from(record: RosterMemberRecord) -> Self {
        let category = record
            .category
            .unwrap_or_else(|| PositionCategory::classify(&record.position));
        Self {
            id: record.id,
            name: record.name,
            number: record.number,
            position: record.position,
            category,
            portrait: record.portrait,
        }
    }
}

impl RosterMember {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        number: u8,
        position: impl Into<String>,
    ) -> Self {
        let position = position.into();
        Self {
            id: id.into(),
            name: name.into(),
            number,
            category: PositionCategory::classify(&position),
            position,
            portrait: None,
        }
    }

    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = Some(portrait.into());
        self
    }

    /// "#9 Ada Striker" style label for lists.
    pub fn display_label(&self) -> String {
        format!("#{} {}", self.number, self.name)
    }
}
