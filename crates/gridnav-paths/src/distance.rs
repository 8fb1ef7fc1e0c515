use gridnav_core::Point;

/// Integer octile distance between two cells.
///
/// 8-directional grid metric with weight 10 per orthogonal step and 14
/// (≈ 10·√2) per diagonal step: `14·min(dx,dy) + 10·(max(dx,dy) − min(dx,dy))`.
/// Used both as the step cost between adjacent cells and as the A*
/// heuristic, which keeps the heuristic admissible and consistent for 8-way
/// movement.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    if dx > dy {
        14 * dy + 10 * (dx - dy)
    } else {
        14 * dx + 10 * (dy - dx)
    }
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
