use log::{debug, warn};

use super::neighbors::walk_8;
use crate::core::{CellStatus, Color, GridModel};

/// Flood-fills the non-sea region around `(row, col)` that shares its color.
///
/// Returns the number of repainted cells. Starting on sea, out of range, or on
/// a cell already painted `target` does nothing. A repainted cell no longer
/// matches the original color, which keeps the walk from re-entering it.
pub fn repaint(grid: &mut GridModel, row: i64, col: i64, target: Color) -> usize {
    let (status, original) = match (grid.status(row, col), grid.color(row, col)) {
        (Some(s), Some(c)) => (s, c),
        _ => {
            warn!("repaint outside the grid at ({}, {})", row, col);
            return 0;
        }
    };
    if status == CellStatus::Sea || original == target {
        return 0;
    }

    let painted = walk_8(row, col, |r, c| {
        let matches = matches!(
            (grid.status(r, c), grid.color(r, c)),
            (Some(s), Some(color)) if !s.is_sea() && color == original
        );
        matches && grid.set_color(r, c, target)
    });
    debug!("repainted {} cells from ({}, {}): {} -> {}", painted, row, col, original, target);
    painted
}
