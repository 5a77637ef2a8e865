/// Moore neighborhood, top-left to bottom-right.
pub const OFFSETS_8: [(i64, i64); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Depth-first 8-connected walk on an explicit stack.
///
/// `visit(row, col)` decides whether the cell belongs to the region and
/// marks it when it does; a `false` return stops the walk at that cell.
/// Neighbors are pushed in reverse so they pop in `OFFSETS_8` order,
/// giving the same preorder as the recursive formulation. Returns the
/// number of visited cells.
pub fn walk_8<F>(row: i64, col: i64, mut visit: F) -> usize
where
    F: FnMut(i64, i64) -> bool,
{
    let mut visited = 0;
    let mut stack = vec![(row, col)];
    while let Some((r, c)) = stack.pop() {
        if !visit(r, c) {
            continue;
        }
        visited += 1;
        for &(dr, dc) in OFFSETS_8.iter().rev() {
            stack.push((r + dr, c + dc));
        }
    }
    visited
}
