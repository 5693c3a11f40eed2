use super::*;
use aoc_solver::{DynSolver, Solver as _, SolverInstance};
use proptest::prelude::*;

const EXAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

fn example_simulator() -> FlashSimulator {
    Solver::parse(EXAMPLE).unwrap()
}

fn snapshot(simulator: &FlashSimulator) -> Vec<Vec<u32>> {
    simulator.rows().map(<[u32]>::to_vec).collect()
}

fn digits(rows: &[&str]) -> Vec<Vec<u32>> {
    rows.iter().map(|row| parse_digit_row(row).unwrap()).collect()
}

#[test]
fn test_parse_example() {
    let simulator = example_simulator();
    assert_eq!(simulator.width(), 10);
    assert_eq!(simulator.height(), 10);
    assert_eq!(simulator.cell_count(), 100);
    assert_eq!(simulator.energy(0, 0), Some(5));
    assert_eq!(simulator.energy(9, 9), Some(6));
    assert_eq!(simulator.energy(10, 0), None);
    assert_eq!(simulator.step_count(), 0);
    assert_eq!(simulator.flash_count(), 0);
}

#[test]
fn test_parse_rejects_non_digit() {
    let err = Solver::parse("123\n1x3\n").unwrap_err();
    match err {
        ParseError::InvalidFormat(msg) => assert!(msg.contains("(line 2)"), "{msg}"),
        other => panic!("expected InvalidFormat, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_ragged_rows() {
    assert!(matches!(
        Solver::parse("123\n12\n"),
        Err(ParseError::InvalidFormat(_))
    ));
}

#[test]
fn test_new_rejects_invalid_grids() {
    let empty: Vec<Vec<u32>> = Vec::new();
    assert_eq!(
        FlashSimulator::new(&empty).unwrap_err(),
        SimulatorError::InvalidInput("energy grid has no rows")
    );
    assert_eq!(
        FlashSimulator::new(&[Vec::<u32>::new()]).unwrap_err(),
        SimulatorError::InvalidInput("energy grid rows have no columns")
    );
    assert_eq!(
        FlashSimulator::new(&[vec![1, 2], vec![3]]).unwrap_err(),
        SimulatorError::InvalidInput("energy grid rows differ in length")
    );
}

#[test]
fn test_small_grid_cascade() {
    let mut simulator =
        FlashSimulator::new(&digits(&["11111", "19991", "19191", "19991", "11111"])).unwrap();

    assert!(!simulator.simulate_step());
    assert_eq!(simulator.flash_count(), 9);
    assert_eq!(
        snapshot(&simulator),
        digits(&["34543", "40004", "50005", "40004", "34543"])
    );

    assert!(!simulator.simulate_step());
    assert_eq!(simulator.flash_count(), 9);
    assert_eq!(simulator.step_count(), 2);
    assert_eq!(
        snapshot(&simulator),
        digits(&["45654", "51115", "61116", "51115", "45654"])
    );
}

#[test]
fn test_cell_flashes_at_most_once_per_step() {
    // The centre receives eight extra charges but must still flash only once.
    let mut simulator =
        FlashSimulator::new(&digits(&["99999", "99999", "99899", "99999", "99999"])).unwrap();

    assert!(simulator.simulate_step());
    assert_eq!(simulator.flash_count(), 25);
    assert!(simulator.rows().flatten().all(|&energy| energy == 0));
}

#[test]
fn test_example_flash_counts() {
    let mut simulator = example_simulator();
    simulator.simulate_n_steps(10);
    assert_eq!(simulator.flash_count(), 204);
    simulator.simulate_n_steps(90);
    assert_eq!(simulator.flash_count(), 1656);
    assert_eq!(simulator.step_count(), 100);
}

#[test]
fn test_example_synchronizes_at_step_195() {
    let mut simulator = example_simulator();
    simulator.simulate_until_all_flash();
    assert_eq!(simulator.step_count(), 195);
    assert!(simulator.rows().flatten().all(|&energy| energy == 0));
}

#[test]
fn test_sync_limit_is_respected() {
    let mut simulator = example_simulator();
    assert_eq!(simulator.simulate_until_all_flash_within(194), None);
    assert_eq!(simulator.step_count(), 194);

    simulator.reset();
    assert_eq!(simulator.simulate_until_all_flash_within(195), Some(195));
}

#[test]
fn test_zero_steps_is_a_no_op() {
    let mut simulator = example_simulator();
    let before = snapshot(&simulator);
    simulator.simulate_n_steps(0);
    assert_eq!(snapshot(&simulator), before);
    assert_eq!(simulator.step_count(), 0);
}

#[test]
fn test_reset_restores_initial_grid() {
    let mut simulator = example_simulator();
    let initial = snapshot(&simulator);
    simulator.simulate_n_steps(37);
    simulator.reset();

    assert_eq!(snapshot(&simulator), initial);
    assert_eq!(simulator.step_count(), 0);
    assert_eq!(simulator.flash_count(), 0);

    simulator.simulate_n_steps(100);
    assert_eq!(simulator.flash_count(), 1656);
}

#[test]
fn test_parts_are_independent_of_order() {
    let mut instance = SolverInstance::<Solver>::new(2021, 11, EXAMPLE).unwrap();
    assert_eq!(instance.solve(2).unwrap().answer, "195");
    assert_eq!(instance.solve(1).unwrap().answer, "1656");
    assert_eq!(instance.solve(2).unwrap().answer, "195");
}

#[test]
fn test_solve_part_dispatch() {
    let mut simulator = example_simulator();
    assert_eq!(Solver::solve_part(&mut simulator, 1).unwrap(), "1656");
    assert_eq!(Solver::solve_part(&mut simulator, 2).unwrap(), "195");
    assert!(matches!(
        Solver::solve_part(&mut simulator, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
}

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<u32>>> {
    (1usize..7, 1usize..7).prop_flat_map(|(height, width)| {
        prop::collection::vec(prop::collection::vec(0u32..10, width), height)
    })
}

proptest! {
    #[test]
    fn prop_energies_stay_in_range_and_counts_grow(grid in grid_strategy(), steps in 1u64..40) {
        let mut simulator = FlashSimulator::new(&grid).unwrap();
        let cells = simulator.cell_count() as u64;

        for step in 1..=steps {
            let before = simulator.flash_count();
            let synchronized = simulator.simulate_step();
            let flashes = simulator.flash_count() - before;

            prop_assert!(flashes <= cells);
            prop_assert_eq!(synchronized, flashes == cells);
            prop_assert_eq!(simulator.step_count(), step);
            prop_assert!(simulator.rows().flatten().all(|&energy| energy <= FLASH_THRESHOLD));
        }
    }

    #[test]
    fn prop_steps_compose(grid in grid_strategy(), n in 0u64..20, m in 0u64..20) {
        let mut split = FlashSimulator::new(&grid).unwrap();
        split.simulate_n_steps(n);
        split.simulate_n_steps(m);

        let mut joined = FlashSimulator::new(&grid).unwrap();
        joined.simulate_n_steps(n + m);

        prop_assert_eq!(snapshot(&split), snapshot(&joined));
        prop_assert_eq!(split.flash_count(), joined.flash_count());
        prop_assert_eq!(split.step_count(), joined.step_count());
    }

    #[test]
    fn prop_reset_is_idempotent(grid in grid_strategy(), steps in 0u64..30) {
        let mut simulator = FlashSimulator::new(&grid).unwrap();
        simulator.simulate_n_steps(steps);
        simulator.reset();
        let once = snapshot(&simulator);
        simulator.reset();

        prop_assert_eq!(&snapshot(&simulator), &once);
        prop_assert_eq!(once, grid);
        prop_assert_eq!(simulator.flash_count(), 0);
    }

    #[test]
    fn prop_runs_are_deterministic(grid in grid_strategy(), steps in 0u64..30) {
        let mut first = FlashSimulator::new(&grid).unwrap();
        first.simulate_n_steps(steps);
        let after_first = (snapshot(&first), first.flash_count());

        first.reset();
        first.simulate_n_steps(steps);
        prop_assert_eq!((snapshot(&first), first.flash_count()), after_first);
    }
}
