// crates/club_core/src/tactics/catalog.rs
// Built-in formation catalog (13 formations) with pitch coordinates

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::formation::{Formation, Position, PositionRole};

/// Formation used when a match or config does not name one.
pub const DEFAULT_FORMATION_ID: &str = "4-3-3";

/// Process-wide catalog, built on first use and never mutated.
pub static FORMATION_CATALOG: Lazy<FormationCatalog> = Lazy::new(FormationCatalog::builtin);

/// Look up a built-in formation. `None` is a normal outcome for unknown ids.
pub fn get_formation(id: &str) -> Option<&'static Formation> {
    FORMATION_CATALOG.get(id)
}

/// Read-only table of formations indexed by normalized id.
#[derive(Debug, Clone)]
pub struct FormationCatalog {
    formations: Vec<Formation>,
    index: HashMap<String, usize>,
}

impl FormationCatalog {
    pub fn new(formations: Vec<Formation>) -> Self {
        let index = formations
            .iter()
            .enumerate()
            .map(|(i, f)| (normalize_formation_id(&f.id), i))
            .collect();
        Self { formations, index }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            create_433(),
            create_442(),
            create_352(),
            create_532(),
            create_4231(),
            create_343(),
            create_4141(),
            create_424(),
            create_4312(),
            create_451(),
            create_3421(),
            create_41212(),
            create_523(),
        ])
    }

    /// Accepts "4-3-3", "433", "T433" and surrounding whitespace.
    pub fn get(&self, id: &str) -> Option<&Formation> {
        self.index.get(&normalize_formation_id(id)).map(|&i| &self.formations[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn all(&self) -> &[Formation] {
        &self.formations
    }

    pub fn ids(&self) -> Vec<&str> {
        self.formations.iter().map(|f| f.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.formations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formations.is_empty()
    }
}

/// "4-3-3" / "433" / "t433" all normalize to "433".
pub fn normalize_formation_id(id: &str) -> String {
    let upper = id.trim().to_uppercase().replace(['-', ' '], "");
    upper.strip_prefix('T').map(str::to_string).unwrap_or(upper)
}

fn slot(id: &str, role: PositionRole, x: f32, y: f32) -> Position {
    Position::new(id, position_label(id), role, x, y)
}

fn position_label(id: &str) -> &'static str {
    match id {
        "GK" => "Goalkeeper",
        "LB" => "Left Back",
        "LCB" => "Left Centre-Back",
        "CB" => "Centre-Back",
        "RCB" => "Right Centre-Back",
        "RB" => "Right Back",
        "LWB" => "Left Wing-Back",
        "RWB" => "Right Wing-Back",
        "CDM" => "Defensive Midfielder",
        "LDM" => "Left Defensive Midfielder",
        "RDM" => "Right Defensive Midfielder",
        "LM" => "Left Midfielder",
        "LCM" => "Left Central Midfielder",
        "CM" => "Central Midfielder",
        "RCM" => "Right Central Midfielder",
        "RM" => "Right Midfielder",
        "LAM" => "Left Attacking Midfielder",
        "CAM" => "Attacking Midfielder",
        "RAM" => "Right Attacking Midfielder",
        "LW" => "Left Winger",
        "RW" => "Right Winger",
        "LS" => "Left Striker",
        "RS" => "Right Striker",
        "ST" => "Striker",
        _ => "Player",
    }
}

fn goalkeeper() -> Position {
    slot("GK", PositionRole::Goalkeeper, 50.0, 10.0)
}

fn back_four() -> [Position; 4] {
    use PositionRole::Defender;
    [
        slot("LB", Defender, 15.0, 25.0),
        slot("LCB", Defender, 38.0, 25.0),
        slot("RCB", Defender, 62.0, 25.0),
        slot("RB", Defender, 85.0, 25.0),
    ]
}

fn back_three() -> [Position; 3] {
    use PositionRole::Defender;
    [
        slot("LCB", Defender, 30.0, 25.0),
        slot("CB", Defender, 50.0, 22.0),
        slot("RCB", Defender, 70.0, 25.0),
    ]
}

fn back_five() -> [Position; 5] {
    use PositionRole::Defender;
    [
        slot("LWB", Defender, 10.0, 35.0),
        slot("LCB", Defender, 30.0, 25.0),
        slot("CB", Defender, 50.0, 22.0),
        slot("RCB", Defender, 70.0, 25.0),
        slot("RWB", Defender, 90.0, 35.0),
    ]
}

fn build(id: &str, description: &str, lines: Vec<Vec<Position>>) -> Formation {
    let mut positions = vec![goalkeeper()];
    positions.extend(lines.into_iter().flatten());
    Formation::new(id, id, description, positions)
}

/// 4-3-3 (Attacking width)
fn create_433() -> Formation {
    use PositionRole::*;
    build(
        "4-3-3",
        "Three forwards stretch the back line; wingers attack the flanks.",
        vec![
            back_four().to_vec(),
            vec![
                slot("LCM", Midfielder, 30.0, 62.0),
                slot("CM", Midfielder, 50.0, 55.0),
                slot("RCM", Midfielder, 70.0, 62.0),
            ],
            vec![
                slot("LW", Forward, 18.0, 105.0),
                slot("ST", Forward, 50.0, 115.0),
                slot("RW", Forward, 82.0, 105.0),
            ],
        ],
    )
}

/// 4-4-2 (Balanced)
fn create_442() -> Formation {
    use PositionRole::*;
    build(
        "4-4-2",
        "Two banks of four with a strike partnership.",
        vec![
            back_four().to_vec(),
            vec![
                slot("LM", Midfielder, 15.0, 65.0),
                slot("LCM", Midfielder, 38.0, 60.0),
                slot("RCM", Midfielder, 62.0, 60.0),
                slot("RM", Midfielder, 85.0, 65.0),
            ],
            vec![slot("LS", Forward, 38.0, 110.0), slot("RS", Forward, 62.0, 110.0)],
        ],
    )
}

/// 3-5-2 (Wing-backs in midfield)
fn create_352() -> Formation {
    use PositionRole::*;
    build(
        "3-5-2",
        "Back three with wing-backs pushing into a five-man midfield.",
        vec![
            back_three().to_vec(),
            vec![
                slot("LWB", Midfielder, 10.0, 58.0),
                slot("LCM", Midfielder, 32.0, 62.0),
                slot("CDM", Midfielder, 50.0, 50.0),
                slot("RCM", Midfielder, 68.0, 62.0),
                slot("RWB", Midfielder, 90.0, 58.0),
            ],
            vec![slot("LS", Forward, 38.0, 110.0), slot("RS", Forward, 62.0, 110.0)],
        ],
    )
}

/// 5-3-2 (Deep back five)
fn create_532() -> Formation {
    use PositionRole::*;
    build(
        "5-3-2",
        "Back five behind a compact midfield three.",
        vec![
            back_five().to_vec(),
            vec![
                slot("LCM", Midfielder, 30.0, 62.0),
                slot("CM", Midfielder, 50.0, 58.0),
                slot("RCM", Midfielder, 70.0, 62.0),
            ],
            vec![slot("LS", Forward, 38.0, 110.0), slot("RS", Forward, 62.0, 110.0)],
        ],
    )
}

/// 4-2-3-1 (Double pivot)
fn create_4231() -> Formation {
    use PositionRole::*;
    build(
        "4-2-3-1",
        "Double pivot screening the defence, three creators behind a lone striker.",
        vec![
            back_four().to_vec(),
            vec![slot("LDM", Midfielder, 38.0, 48.0), slot("RDM", Midfielder, 62.0, 48.0)],
            vec![
                slot("LAM", Midfielder, 20.0, 85.0),
                slot("CAM", Midfielder, 50.0, 82.0),
                slot("RAM", Midfielder, 80.0, 85.0),
            ],
            vec![slot("ST", Forward, 50.0, 115.0)],
        ],
    )
}

/// 3-4-3 (All-out attack)
fn create_343() -> Formation {
    use PositionRole::*;
    build(
        "3-4-3",
        "Back three, flat midfield four and a front three.",
        vec![
            back_three().to_vec(),
            vec![
                slot("LM", Midfielder, 12.0, 62.0),
                slot("LCM", Midfielder, 38.0, 58.0),
                slot("RCM", Midfielder, 62.0, 58.0),
                slot("RM", Midfielder, 88.0, 62.0),
            ],
            vec![
                slot("LW", Forward, 20.0, 105.0),
                slot("ST", Forward, 50.0, 115.0),
                slot("RW", Forward, 80.0, 105.0),
            ],
        ],
    )
}

/// 4-1-4-1 (Anchor)
fn create_4141() -> Formation {
    use PositionRole::*;
    build(
        "4-1-4-1",
        "A single holding midfielder behind a line of four.",
        vec![
            back_four().to_vec(),
            vec![slot("CDM", Midfielder, 50.0, 45.0)],
            vec![
                slot("LM", Midfielder, 15.0, 72.0),
                slot("LCM", Midfielder, 38.0, 68.0),
                slot("RCM", Midfielder, 62.0, 68.0),
                slot("RM", Midfielder, 85.0, 72.0),
            ],
            vec![slot("ST", Forward, 50.0, 115.0)],
        ],
    )
}

/// 4-2-4 (Front four)
fn create_424() -> Formation {
    use PositionRole::*;
    build(
        "4-2-4",
        "Two central midfielders feeding a front line of four.",
        vec![
            back_four().to_vec(),
            vec![slot("LCM", Midfielder, 38.0, 58.0), slot("RCM", Midfielder, 62.0, 58.0)],
            vec![
                slot("LW", Forward, 12.0, 100.0),
                slot("LS", Forward, 38.0, 112.0),
                slot("RS", Forward, 62.0, 112.0),
                slot("RW", Forward, 88.0, 100.0),
            ],
        ],
    )
}

/// 4-3-1-2 (Narrow with a playmaker)
fn create_4312() -> Formation {
    use PositionRole::*;
    build(
        "4-3-1-2",
        "Narrow midfield three, a playmaker in the hole and two strikers.",
        vec![
            back_four().to_vec(),
            vec![
                slot("LCM", Midfielder, 30.0, 58.0),
                slot("CDM", Midfielder, 50.0, 50.0),
                slot("RCM", Midfielder, 70.0, 58.0),
            ],
            vec![slot("CAM", Midfielder, 50.0, 85.0)],
            vec![slot("LS", Forward, 38.0, 112.0), slot("RS", Forward, 62.0, 112.0)],
        ],
    )
}

/// 4-5-1 (Compact)
fn create_451() -> Formation {
    use PositionRole::*;
    build(
        "4-5-1",
        "Crowded midfield five supporting a lone striker.",
        vec![
            back_four().to_vec(),
            vec![
                slot("LM", Midfielder, 12.0, 68.0),
                slot("LCM", Midfielder, 32.0, 62.0),
                slot("CM", Midfielder, 50.0, 55.0),
                slot("RCM", Midfielder, 68.0, 62.0),
                slot("RM", Midfielder, 88.0, 68.0),
            ],
            vec![slot("ST", Forward, 50.0, 112.0)],
        ],
    )
}

/// 3-4-2-1 (Two tens)
fn create_3421() -> Formation {
    use PositionRole::*;
    build(
        "3-4-2-1",
        "Back three, midfield four and two inside forwards behind the striker.",
        vec![
            back_three().to_vec(),
            vec![
                slot("LM", Midfielder, 12.0, 60.0),
                slot("LCM", Midfielder, 38.0, 55.0),
                slot("RCM", Midfielder, 62.0, 55.0),
                slot("RM", Midfielder, 88.0, 60.0),
            ],
            vec![slot("LAM", Midfielder, 35.0, 88.0), slot("RAM", Midfielder, 65.0, 88.0)],
            vec![slot("ST", Forward, 50.0, 115.0)],
        ],
    )
}

/// 4-1-2-1-2 (Diamond)
fn create_41212() -> Formation {
    use PositionRole::*;
    build(
        "4-1-2-1-2",
        "Midfield diamond from the holding player to the playmaker.",
        vec![
            back_four().to_vec(),
            vec![slot("CDM", Midfielder, 50.0, 45.0)],
            vec![slot("LCM", Midfielder, 30.0, 62.0), slot("RCM", Midfielder, 70.0, 62.0)],
            vec![slot("CAM", Midfielder, 50.0, 82.0)],
            vec![slot("LS", Forward, 38.0, 112.0), slot("RS", Forward, 62.0, 112.0)],
        ],
    )
}

/// 5-2-3 (Counter front three)
fn create_523() -> Formation {
    use PositionRole::*;
    build(
        "5-2-3",
        "Back five and a midfield pair releasing a front three on the break.",
        vec![
            back_five().to_vec(),
            vec![slot("LCM", Midfielder, 38.0, 60.0), slot("RCM", Midfielder, 62.0, 60.0)],
            vec![
                slot("LW", Forward, 18.0, 105.0),
                slot("ST", Forward, 50.0, 115.0),
                slot("RW", Forward, 82.0, 105.0),
            ],
        ],
    )
}
