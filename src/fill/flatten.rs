use log::debug;

use crate::core::{CellStatus, Color, GridModel};

/// Paints every non-sea cell `target` in one pass, ignoring connectivity.
/// Returns how many cells changed.
pub fn flatten(grid: &mut GridModel, target: Color) -> usize {
    let mut changed = 0;
    for (status, color) in grid.cells_mut() {
        if *status != CellStatus::Sea && *color != target {
            *color = target;
            changed += 1;
        }
    }
    debug!("flattened {} cells to {}", changed, target);
    changed
}
