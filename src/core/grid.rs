use rustc_hash::FxHashMap;

use super::error::Result;
use super::types::{cell_count, CellStatus, Color};

/// Square grid stored as two parallel row-major vectors.
///
/// `status` and `color` are only ever allocated together, so their lengths
/// always equal `size * size`.
#[derive(Debug, Clone, PartialEq)]
pub struct GridModel {
    size: usize,
    status: Vec<CellStatus>,
    color: Vec<Color>,
}

impl GridModel {
    /// An all-sea grid painted `fill`. `size` must lie in `1..=MAX_SIZE`.
    pub fn new(size: usize, fill: Color) -> Result<Self> {
        let cells = cell_count(size)?;
        Ok(Self {
            size,
            status: vec![CellStatus::Sea; cells],
            color: vec![fill; cells],
        })
    }

    /// Discards every cell and reallocates at `size`. Does not populate terrain.
    /// On error the grid is left as it was.
    pub fn resize(&mut self, size: usize, fill: Color) -> Result<()> {
        *self = GridModel::new(size, fill)?;
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    /// Linear index of `(row, col)`, or `None` when out of range.
    pub fn index(&self, row: i64, col: i64) -> Option<usize> {
        let n = self.size as i64;
        if row < 0 || row >= n || col < 0 || col >= n {
            return None;
        }
        Some(row as usize * self.size + col as usize)
    }

    pub fn status(&self, row: i64, col: i64) -> Option<CellStatus> {
        self.index(row, col).map(|i| self.status[i])
    }

    pub fn color(&self, row: i64, col: i64) -> Option<Color> {
        self.index(row, col).map(|i| self.color[i])
    }

    pub(crate) fn set_status(&mut self, row: i64, col: i64, status: CellStatus) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.status[i] = status;
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, row: i64, col: i64, color: Color) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.color[i] = color;
                true
            }
            None => false,
        }
    }

    /// Marks one cell as undiscovered land painted `color`.
    pub fn set_land(&mut self, row: i64, col: i64, color: Color) -> bool {
        self.set_cell(row, col, CellStatus::Land, color)
    }

    /// Sets both fields of one cell.
    pub(crate) fn set_cell(&mut self, row: i64, col: i64, status: CellStatus, color: Color) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.status[i] = status;
                self.color[i] = color;
                true
            }
            None => false,
        }
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = (&mut CellStatus, &mut Color)> {
        self.status.iter_mut().zip(self.color.iter_mut())
    }

    pub fn statuses(&self) -> &[CellStatus] {
        &self.status
    }

    pub fn colors(&self) -> &[Color] {
        &self.color
    }

    pub fn count_status(&self, status: CellStatus) -> usize {
        self.status.iter().filter(|&&s| s == status).count()
    }

    /// Cell count per color, sea included.
    pub fn color_histogram(&self) -> FxHashMap<Color, usize> {
        let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
        for &c in &self.color {
            *counts.entry(c).or_default() += 1;
        }
        counts
    }

    /// `~` sea, `#` land, `*` discovered; one line per row.
    pub fn render_ascii(&self) -> String {
        self.status
            .chunks(self.size.max(1))
            .map(|row| {
                row.iter()
                    .map(|s| match s {
                        CellStatus::Sea => '~',
                        CellStatus::Land => '#',
                        CellStatus::Discovered => '*',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds a grid from rows of `.` (sea) and `#` (land); used by tests.
#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str], sea: Color, land: Color) -> GridModel {
    let mut grid = GridModel::new(rows.len(), sea).unwrap();
    for (r, line) in rows.iter().enumerate() {
        for (c, ch) in line.chars().enumerate() {
            if ch == '#' {
                grid.set_land(r as i64, c as i64, land);
            }
        }
    }
    grid
}
