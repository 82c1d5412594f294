//! Text rendering of a lineup on a pitch grid.

use club_core::Placement;

const COLS: usize = 60;
const ROWS: usize = 28;

/// Draw placements on a character grid, opponent goal at the top.
///
/// Projected y grows from the own goal line, so rows are flipped to put the
/// goalkeeper at the bottom like the web diagram.
pub fn render(placements: &[Placement<'_>]) -> String {
    let mut grid = vec![vec![' '; COLS]; ROWS];

    for (row, line) in grid.iter_mut().enumerate() {
        if row == 0 || row == ROWS - 1 {
            line.iter_mut().for_each(|c| *c = '-');
        } else if row == ROWS / 2 {
            line.iter_mut().for_each(|c| *c = '.');
        }
        line[0] = '|';
        line[COLS - 1] = '|';
    }

    for placement in placements {
        let (x, y) = placement.point.to_viewport((COLS - 1) as f32, (ROWS - 1) as f32);
        let row = (ROWS - 1).saturating_sub(y.round() as usize);
        let label = marker(placement);

        let start = (x.round() as usize).saturating_sub(label.len() / 2);
        let start = start.min(COLS - label.len());
        for (offset, ch) in label.chars().enumerate() {
            grid[row][start + offset] = ch;
        }
    }

    grid.into_iter().map(|line| line.into_iter().collect::<String>()).collect::<Vec<_>>().join("\n")
}

fn marker(placement: &Placement<'_>) -> String {
    match placement.member {
        Some(member) => format!("{}:{}", placement.position.id, member.number),
        None => format!("{}:--", placement.position.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use club_core::{assign, get_formation, resolve_placements, LineupAssignment, RosterMember};

    #[test]
    fn test_render_places_every_slot() {
        let formation = get_formation("4-4-2").unwrap();
        let roster = vec![RosterMember::new("p1", "Sam", 1, "Goalkeeper")];
        let a = assign(&LineupAssignment::new(), "GK", Some("p1"));
        let text = render(&resolve_placements(formation, &a, &roster));

        assert_eq!(text.lines().count(), ROWS);
        assert!(text.contains("GK:1"));
        assert!(text.contains("LS:--"));

        let gk_row = text.lines().position(|l| l.contains("GK:1")).unwrap();
        let ls_row = text.lines().position(|l| l.contains("LS:--")).unwrap();
        assert!(gk_row > ls_row, "goalkeeper should be drawn below the strikers");
    }
}
