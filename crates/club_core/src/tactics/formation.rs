// crates/club_core/src/tactics/formation.rs
// Formation and position definitions on the normalized 100x140 pitch

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CoreError;

/// Width of the normalized pitch (left touchline = 0).
pub const PITCH_WIDTH: f32 = 100.0;
/// Length of the normalized pitch (goal line to goal line).
pub const PITCH_LENGTH: f32 = 140.0;

/// Number of slots every formation fills.
pub const STARTING_ELEVEN: usize = 11;

/// Role tag carried by every formation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionRole {
    pub fn all() -> [PositionRole; 4] {
        [Self::Goalkeeper, Self::Defender, Self::Midfielder, Self::Forward]
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GOALKEEPER",
            Self::Defender => "DEFENDER",
            Self::Midfielder => "MIDFIELDER",
            Self::Forward => "FORWARD",
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }

    /// Parse a role tag as sent by the presentation layer.
    ///
    /// Accepts the full tag or the short name, any case. Returns `None` for
    /// vocabularies this crate does not know yet.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_uppercase().as_str() {
            "GOALKEEPER" | "GK" => Some(Self::Goalkeeper),
            "DEFENDER" | "DEF" => Some(Self::Defender),
            "MIDFIELDER" | "MID" => Some(Self::Midfielder),
            "FORWARD" | "FWD" => Some(Self::Forward),
            _ => None,
        }
    }
}

/// One slot of a formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub label: String,
    pub role: PositionRole,
    pub x: f32, // 0.0 = left touchline, 100.0 = right touchline
    pub y: f32, // 0.0 = own goal line, 140.0 = opponent goal line
}

impl Position {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        role: PositionRole,
        x: f32,
        y: f32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role,
            x: x.clamp(0.0, PITCH_WIDTH),
            y: y.clamp(0.0, PITCH_LENGTH),
        }
    }
}

/// Named template of eleven pitch positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Formation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub positions: Vec<Position>,
}

impl Formation {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        positions: Vec<Position>,
    ) -> Self {
        Self { id: id.into(), name: name.into(), description: description.into(), positions }
    }

    pub fn position(&self, position_id: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.id == position_id)
    }

    pub fn has_position(&self, position_id: &str) -> bool {
        self.position(position_id).is_some()
    }

    pub fn goalkeeper(&self) -> Option<&Position> {
        self.positions.iter().find(|p| p.role == PositionRole::Goalkeeper)
    }

    pub fn role_count(&self, role: PositionRole) -> usize {
        self.positions.iter().filter(|p| p.role == role).count()
    }

    pub fn outfield_count(&self) -> usize {
        self.positions.len() - self.role_count(PositionRole::Goalkeeper)
    }

    /// Returns (defenders, midfielders, forwards)
    pub fn shape(&self) -> (usize, usize, usize) {
        (
            self.role_count(PositionRole::Defender),
            self.role_count(PositionRole::Midfielder),
            self.role_count(PositionRole::Forward),
        )
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let invalid = |reason: String| CoreError::InvalidFormation {
            formation: self.id.clone(),
            reason,
        };

        if self.positions.len() != STARTING_ELEVEN {
            return Err(invalid(format!(
                "expected {} positions, found {}",
                STARTING_ELEVEN,
                self.positions.len()
            )));
        }

        let keepers = self.role_count(PositionRole::Goalkeeper);
        if keepers != 1 {
            return Err(invalid(format!("expected exactly one goalkeeper, found {}", keepers)));
        }

        let mut seen = HashSet::new();
        for position in &self.positions {
            if !seen.insert(position.id.as_str()) {
                return Err(invalid(format!("duplicate position id {}", position.id)));
            }
            if !(0.0..=PITCH_WIDTH).contains(&position.x)
                || !(0.0..=PITCH_LENGTH).contains(&position.y)
            {
                return Err(invalid(format!(
                    "position {} is off the pitch at ({}, {})",
                    position.id, position.x, position.y
                )));
            }
        }

        Ok(())
    }
}
