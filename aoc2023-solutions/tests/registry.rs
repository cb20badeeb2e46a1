//! Every 2023 day registers itself through the plugin system.

use aoc_solver::{FactoryInfo, SolverError, SolverRegistryBuilder};

use aoc2023_solutions as _;

#[test]
fn test_all_days_registered() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("no duplicate registrations")
        .build();

    let days: Vec<FactoryInfo> = registry
        .storage()
        .iter_info()
        .filter(|info| info.year == 2023)
        .collect();

    assert_eq!(days.len(), 22);
    for (info, day) in days.iter().zip(1u8..) {
        assert_eq!(info.day, day);
        assert_eq!(info.parts, 2);
    }
}

#[test]
fn test_tag_filter_selects_grid_days() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"dijkstra"))
        .unwrap()
        .build();

    let days: Vec<u8> = registry.storage().iter_info().map(|info| info.day).collect();
    assert_eq!(days, vec![17]);
}

#[test]
fn test_create_and_solve_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2023, 6, "Time:      7  15   30\nDistance:  9  40  200\n")
        .unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2023, 6, 2));
    assert_eq!(solver.solve(1).unwrap().answer, "288");
    assert_eq!(solver.solve(2).unwrap().answer, "71503");
    assert!(solver.solve(3).is_err());
}

#[test]
fn test_parse_error_surfaces() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let result = registry.create_solver(2023, 2, "not a game");
    assert!(matches!(result, Err(SolverError::ParseError(_))));
    assert!(matches!(
        registry.create_solver(2023, 25, ""),
        Err(SolverError::NotFound(2023, 25))
    ));
}
