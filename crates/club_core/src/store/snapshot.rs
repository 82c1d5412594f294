use serde::{Deserialize, Serialize};
use std::fs::{rename, File};
use std::io::Write;
use std::path::Path;

use super::StoreError;
use crate::models::{MatchRecord, PlayerStats, RosterMember};

pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything the in-memory store holds, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub club_name: String,
    #[serde(default)]
    pub roster: Vec<RosterMember>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    #[serde(default)]
    pub stats: Vec<PlayerStats>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

impl Default for ClubSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            club_name: String::new(),
            roster: Vec::new(),
            matches: Vec::new(),
            stats: Vec::new(),
        }
    }
}

impl ClubSnapshot {
    pub fn new(club_name: impl Into<String>) -> Self {
        Self { club_name: club_name.into(), ..Default::default() }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let snapshot: ClubSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}

pub fn load_snapshot(path: &Path) -> Result<ClubSnapshot, StoreError> {
    if !path.exists() {
        return Err(StoreError::FileNotFound { path: path.display().to_string() });
    }

    let json = std::fs::read_to_string(path)?;
    let snapshot = ClubSnapshot::from_json(&json)?;

    log::debug!("Loaded snapshot ({} bytes) from {:?}", json.len(), path);
    Ok(snapshot)
}

/// Write via a temp file and rename so readers never see a half-written file.
pub fn save_snapshot(path: &Path, snapshot: &ClubSnapshot) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_vec_pretty(snapshot)?;
    let temp_path = path.with_extension("tmp");

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&data)?;
        file.flush()?;
        file.sync_all()?;
    }

    rename(&temp_path, path)?;

    log::debug!("Saved {} bytes to {:?}", data.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("club.json");

        let mut snapshot = ClubSnapshot::new("Harbour FC");
        snapshot.roster.push(RosterMember::new("p1", "Sam Keeper", 1, "Goalkeeper"));
        snapshot.stats.push(PlayerStats::empty("p1"));

        save_snapshot(&path, &snapshot).unwrap();
        let loaded = load_snapshot(&path).unwrap();

        assert_eq!(loaded, snapshot);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_snapshot(&temp_dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { .. }));
    }

    #[test]
    fn test_future_version_rejected() {
        let err = ClubSnapshot::from_json(r#"{"version": 7}"#).unwrap_err();
        assert!(matches!(err, StoreError::VersionMismatch { found: 7, expected: 1 }));
    }

    #[test]
    fn test_minimal_document_loads() {
        let snapshot = ClubSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert!(snapshot.roster.is_empty());
    }
}
