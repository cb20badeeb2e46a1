use std::collections::HashSet;

use proptest::prelude::*;

use super::*;

// ============================================================================
// Point / Direction
// ============================================================================

#[test]
fn test_neighbourhoods() {
    let p = Point::new(5, 5);
    let eight: HashSet<Point> = p.neighbours().collect();
    assert_eq!(eight.len(), 8);
    assert!(!eight.contains(&p));
    assert!(eight.iter().all(|n| (n.x - p.x).abs() <= 1 && (n.y - p.y).abs() <= 1));

    let four: Vec<Point> = p.orthogonal_neighbours().collect();
    assert_eq!(
        four,
        vec![
            Point::new(5, 4),
            Point::new(6, 5),
            Point::new(5, 6),
            Point::new(4, 5)
        ]
    );
}

#[test]
fn test_direction_turns() {
    for d in Direction::ALL {
        assert_eq!(d.turn_left().turn_right(), d);
        assert_eq!(d.turn_right().turn_right(), d.reverse());
        assert_eq!(d.delta() + d.reverse().delta(), Point::ORIGIN);
        assert_ne!(d.is_horizontal(), d.turn_left().is_horizontal());
    }
    assert_eq!(Point::new(0, 0) + Direction::North, Point::NORTH);
}

proptest! {
    #[test]
    fn prop_point_add_sub_inverse(ax in -1000i64..1000, ay in -1000i64..1000, bx in -1000i64..1000, by in -1000i64..1000) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(a + b - b, a);
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a - b, -(b - a));
        prop_assert_eq!(a.manhattan(b), (a - b).manhattan(Point::ORIGIN));
        prop_assert_eq!(a * 3, a + a + a);
    }
}

// ============================================================================
// SparseGrid
// ============================================================================

#[test]
fn test_parse_skips_background_and_trailing_lines() {
    let grid = SparseGrid::parse("#..\r\n.#.\n..#\n\n\n", '.');
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.len(), 3);
    assert_eq!(
        grid.find_all(|&c| c == '#'),
        vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)]
    );
    assert_eq!(*grid.get(Point::new(1, 0)), '.');
    assert_eq!(*grid.get(Point::new(-4, 9)), '.');
}

#[test]
fn test_get_wrapped_tiles_grid() {
    let grid = SparseGrid::parse("a.\n.b", '.');
    assert_eq!(*grid.get_wrapped(Point::new(2, 2)), 'a');
    assert_eq!(*grid.get_wrapped(Point::new(-1, -1)), 'b');
    assert_eq!(*grid.get_wrapped(Point::new(-2, 1)), '.');
}

#[test]
fn test_insert_background_removes() {
    let mut grid = SparseGrid::parse("ab", '.');
    assert_eq!(grid.insert(Point::new(0, 0), '.'), Some('a'));
    assert!(!grid.contains(Point::new(0, 0)));
    assert_eq!(grid.insert(Point::new(1, 0), 'c'), Some('b'));
    assert_eq!(grid.render(|&c| c), ".c\n");
}

#[test]
fn test_try_parse_reports_position() {
    let err = SparseGrid::try_parse("12\n3x", '.', 0u32, |c| c.to_digit(10)).unwrap_err();
    assert!(err.to_string().contains("(1, 1)"), "{err}");

    let grid = SparseGrid::try_parse("12\n34", '.', 0u32, |c| c.to_digit(10)).unwrap();
    assert_eq!(*grid.get(Point::new(1, 1)), 4);
}

proptest! {
    #[test]
    fn prop_parse_coordinates_match_text(rows in proptest::collection::vec("[.#]{1,8}", 1..8)) {
        let text = rows.join("\n");
        let grid = SparseGrid::parse(&text, '.');
        prop_assert_eq!(grid.height(), rows.len() as i64);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                prop_assert_eq!(*grid.get(Point::new(x as i64, y as i64)), ch);
            }
        }
        prop_assert_eq!(grid.render(|&c| c).lines().count(), rows.len());
    }
}

// ============================================================================
// Search
// ============================================================================

fn open_neighbours(grid: &SparseGrid<char>, p: Point) -> Vec<Point> {
    p.orthogonal_neighbours()
        .filter(|&n| grid.in_bounds(n) && *grid.get(n) != '#')
        .collect()
}

#[test]
fn test_reachable_stops_at_walls() {
    let grid = SparseGrid::parse("..#..\n..#..\n..#..", '.');
    let seen = reachable([Point::new(0, 0)], |&p| open_neighbours(&grid, p));
    assert_eq!(seen.len(), 6);
    assert!(!seen.contains(&Point::new(3, 0)));
}

#[test]
fn test_bfs_depth_limit() {
    let grid = SparseGrid::parse(".....", '.');
    let dist = bfs_distances(Point::new(0, 0), Some(2), |&p| open_neighbours(&grid, p));
    assert_eq!(dist.len(), 3);
    assert_eq!(dist[&Point::new(2, 0)], 2);
}

#[test]
fn test_dijkstra_unreachable_goal() {
    let grid = SparseGrid::parse("..#..", '.');
    let result = dijkstra(
        [Point::new(0, 0)],
        |&p| open_neighbours(&grid, p).into_iter().map(|n| (n, 1)),
        |&p| p == Point::new(4, 0),
    );
    assert_eq!(result, None);
}

#[test]
fn test_dijkstra_prefers_cheaper_detour() {
    // direct edge costs 10, detour costs 3
    let edges = |&n: &u8| -> Vec<(u8, u64)> {
        match n {
            0 => vec![(3, 10), (1, 1)],
            1 => vec![(2, 1)],
            2 => vec![(3, 1)],
            _ => vec![],
        }
    };
    assert_eq!(dijkstra([0u8], edges, |&n| n == 3), Some((3, 3)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bfs_agrees_with_unit_dijkstra(rows in proptest::collection::vec("[.#]{6}", 6)) {
        let grid = SparseGrid::parse(&rows.join("\n"), '.');
        let start = Point::new(0, 0);
        prop_assume!(*grid.get(start) == '.');

        let distances = bfs_distances(start, None, |&p| open_neighbours(&grid, p));
        for y in 0..6 {
            for x in 0..6 {
                let goal = Point::new(x, y);
                let shortest = dijkstra(
                    [start],
                    |&p| open_neighbours(&grid, p).into_iter().map(|n| (n, 1)),
                    |&p| p == goal,
                )
                .map(|(_, cost)| cost as usize);
                prop_assert_eq!(shortest, distances.get(&goal).copied());
            }
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

#[test]
fn test_unit_square() {
    let square = [
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(1, 1),
        Point::new(0, 1),
    ];
    assert_eq!(shoelace_doubled(&square), 2);
    assert_eq!(boundary_length(&square), 4);
    assert_eq!(interior_points(2, 4), 0);
    assert_eq!(lattice_points(&square), 4);
}

proptest! {
    #[test]
    fn prop_pick_matches_enumeration(
        x0 in -20i64..20, y0 in -20i64..20,
        w in 1i64..12, h in 2i64..12,
        notch_w in 0i64..12, notch_h in 1i64..12,
    ) {
        // L-shaped polygon: a w x h rectangle with its top-right corner cut out
        let notch_w = notch_w.min(w - 1).max(0);
        let notch_h = notch_h.min(h - 1);
        let vertices = if notch_w == 0 {
            vec![
                Point::new(x0, y0),
                Point::new(x0 + w, y0),
                Point::new(x0 + w, y0 + h),
                Point::new(x0, y0 + h),
            ]
        } else {
            vec![
                Point::new(x0, y0),
                Point::new(x0 + w - notch_w, y0),
                Point::new(x0 + w - notch_w, y0 + notch_h),
                Point::new(x0 + w, y0 + notch_h),
                Point::new(x0 + w, y0 + h),
                Point::new(x0, y0 + h),
            ]
        };

        let covered: HashSet<Point> = (x0..=x0 + w)
            .flat_map(|x| (y0..=y0 + h).map(move |y| Point::new(x, y)))
            .filter(|p| !(p.x > x0 + w - notch_w && p.y < y0 + notch_h))
            .collect();

        prop_assert_eq!(lattice_points(&vertices) as usize, covered.len());
        let expected_area = 2 * (w * h - notch_w * notch_h);
        prop_assert_eq!(shoelace_doubled(&vertices), expected_area);
    }
}
