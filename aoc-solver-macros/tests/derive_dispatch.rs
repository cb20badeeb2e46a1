use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

/// Part 2 reads what part 1 left behind in the shared data
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Dependent;

#[derive(Debug, Default)]
struct DependentData {
    values: Vec<u32>,
    largest: Option<u32>,
}

impl AocParser for Dependent {
    type SharedData = DependentData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let values = input
            .split(',')
            .map(|v| v.parse().map_err(|_| ParseError::InvalidFormat(v.into())))
            .collect::<Result<_, _>>()?;
        Ok(DependentData {
            values,
            largest: None,
        })
    }
}

impl PartSolver<1> for Dependent {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let largest = shared.values.iter().copied().max().unwrap_or(0);
        shared.largest = Some(largest);
        Ok(largest.to_string())
    }
}

impl PartSolver<2> for Dependent {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let largest = shared
            .largest
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))?;
        Ok((largest * 2).to_string())
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct SinglePart;

impl AocParser for SinglePart {
    type SharedData = String;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        Ok(input.to_uppercase())
    }
}

impl PartSolver<1> for SinglePart {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.clone())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(SumProduct::PARTS, 2);
    assert_eq!(SinglePart::PARTS, 1);
}

#[test]
fn test_dispatch_to_each_part() {
    let mut shared = SumProduct::parse("2\n3\n4").unwrap();
    assert_eq!(SumProduct::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(SumProduct::solve_part(&mut shared, 2).unwrap(), "24");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = SinglePart::parse("abc").unwrap();
    assert!(matches!(
        SinglePart::solve_part(&mut shared, 2),
        Err(SolveError::PartNotImplemented(2))
    ));
    assert!(matches!(
        SinglePart::solve_part_checked_range(&mut shared, 2),
        Err(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn test_dependent_parts_share_state() {
    let mut shared = Dependent::parse("4,9,2").unwrap();
    assert_eq!(Dependent::solve_part(&mut shared, 1).unwrap(), "9");
    assert_eq!(Dependent::solve_part(&mut shared, 2).unwrap(), "18");
}

#[test]
fn test_dependent_part_two_alone_fails() {
    let mut shared = Dependent::parse("4,9,2").unwrap();
    assert!(matches!(
        Dependent::solve_part(&mut shared, 2),
        Err(SolveError::SolveFailed(_))
    ));
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        SumProduct::parse("1\nx"),
        Err(ParseError::InvalidFormat(_))
    ));
}
