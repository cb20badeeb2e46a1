use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverPlugin, SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2017, day = 3, tags = ["grid", "slow"])]
struct Tagged;

impl AocParser for Tagged {
    type SharedData = Vec<u32>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        input
            .split_whitespace()
            .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.into())))
            .collect()
    }
}

impl PartSolver<1> for Tagged {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for Tagged {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u32>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2017, day = 4)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData = usize;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        Ok(input.len())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

fn find_plugin(year: u16, day: u8) -> Option<&'static SolverPlugin> {
    aoc_solver::inventory::iter::<SolverPlugin>().find(|p| p.year == year && p.day == day)
}

#[test]
fn test_plugins_are_submitted_with_tags() {
    let tagged = find_plugin(2017, 3).expect("tagged solver submitted");
    assert_eq!(tagged.tags, &["grid", "slow"]);
    assert_eq!(tagged.solver.parts(), 2);

    let untagged = find_plugin(2017, 4).expect("untagged solver submitted");
    assert!(untagged.tags.is_empty());
    assert_eq!(untagged.solver.parts(), 1);
}

#[test]
fn test_register_all_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2017, 3, "1 2 3 4").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "4");
    assert_eq!(solver.solve(2).unwrap().answer, "10");

    let mut solver = registry.create_solver(2017, 4, "hello").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "5");
}

#[test]
fn test_register_filtered_by_tag() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2017, 3));
    assert!(!registry.storage().contains(2017, 4));
    assert_eq!(registry.storage().len(), 1);
}

#[test]
fn test_plugins_collide_with_manual_registration() {
    let builder = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.day == 4)
        .unwrap();
    let result = builder.register_solver_plugins(|plugin| plugin.day == 4);
    assert!(result.is_err());
}
