// Island discovery.
//
// Row-major scan; each Land cell still undiscovered seeds an 8-connected walk
// that marks the whole island Discovered and paints it with the current fill
// color. The fill color is redrawn every time the scan passes a non-Land cell,
// so two islands with no such cell between their seeds share a color.

use log::debug;

use super::neighbors::walk_8;
use crate::core::{CellStatus, GridModel};
use crate::terrain::ColorSource;

/// Labels every island and returns how many were found.
///
/// A second call on the same grid returns 0: no Land cells remain.
pub fn find_islands<P: ColorSource>(grid: &mut GridModel, palette: &mut P) -> usize {
    let n = grid.size() as i64;
    let mut fill = palette.next_color();
    let mut islands = 0;

    for row in 0..n {
        for col in 0..n {
            if grid.status(row, col) != Some(CellStatus::Land) {
                fill = palette.next_color();
                continue;
            }
            islands += 1;
            let cells = walk_8(row, col, |r, c| {
                if grid.status(r, c) != Some(CellStatus::Land) {
                    return false;
                }
                grid.set_cell(r, c, CellStatus::Discovered, fill)
            });
            debug!("island {} seeded at ({}, {}): {} cells, {}", islands, row, col, cells, fill);
        }
    }
    islands
}
