//! Closed-form lattice polygon formulas.

use super::point::Point;

/// Twice the area of the closed polygon through `vertices` (shoelace formula).
pub fn shoelace_doubled(vertices: &[Point]) -> i64 {
    let n = vertices.len();
    let sum: i64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    sum.abs()
}

/// Lattice points on the boundary of a rectilinear closed path.
pub fn boundary_length(vertices: &[Point]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].manhattan(vertices[(i + 1) % n]))
        .sum()
}

/// Interior lattice points by Pick's theorem, `A = i + b/2 - 1`.
pub fn interior_points(doubled_area: i64, boundary: i64) -> i64 {
    (doubled_area - boundary) / 2 + 1
}

/// Lattice points covered by the polygon, boundary included.
pub fn lattice_points(vertices: &[Point]) -> i64 {
    let boundary = boundary_length(vertices);
    interior_points(shoelace_doubled(vertices), boundary) + boundary
}
