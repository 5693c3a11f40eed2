use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 24, tags = ["macro-test", "auto"])]
pub struct AutoRegistered;

impl AocParser for AutoRegistered {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for AutoRegistered {
    fn solve(shared: &mut &str) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for AutoRegistered {
    fn solve(shared: &mut &str) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2034, day = 25)]
pub struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = ();

    fn parse(_: &str) -> Result<(), ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(_: &mut ()) -> Result<String, SolveError> {
        Ok("done".to_string())
    }
}

#[test]
fn test_plugin_registered_with_tags() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2034 && p.day == 24)
        .expect("plugin should be submitted");

    assert_eq!(plugin.tags, &["macro-test", "auto"]);
    assert_eq!(plugin.solver.parts(), 2);
}

#[test]
fn test_auto_registered_solver_runs() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2034)
        .expect("no duplicate registrations")
        .build();

    let mut solver = registry.create_solver(2034, 24, "  abc \n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "cba");

    let mut solver = registry.create_solver(2034, 25, "").unwrap();
    assert_eq!(solver.parts(), 1);
    assert_eq!(solver.solve(1).unwrap().answer, "done");
}

#[test]
fn test_tag_filter_excludes_untagged() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.contains(2034, 24));
    assert!(!registry.contains(2034, 25));
}
