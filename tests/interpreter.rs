// tests/interpreter.rs
use plateau_rover::{Direction, Instruction, Plateau, RoverInterpreter, RoverState, Turn};
use proptest::prelude::*;
use rstest::rstest;

fn plateau_5x5() -> Plateau {
    Plateau::new(5, 5)
}

#[test]
fn test_first_sample_rover() {
    let interpreter = RoverInterpreter::standard();
    let out = interpreter
        .process_rover("1 2 N", "LMLMLMLMM", &plateau_5x5())
        .unwrap();
    assert_eq!(out, "1 3 N");
}

#[test]
fn test_second_sample_rover() {
    let interpreter = RoverInterpreter::standard();
    let report = interpreter.run(
        RoverState::new(3, 3, Direction::East),
        "MMRMMRMRRM",
        &plateau_5x5(),
    );
    assert_eq!(report.final_state, RoverState::new(5, 1, Direction::East));
    assert_eq!(report.initial, RoverState::new(3, 3, Direction::East));
    assert_eq!(report.moves, 6);
    assert_eq!(report.blocked_moves, 0);
}

#[test]
fn test_whitespace_between_instructions_is_skipped() {
    let interpreter = RoverInterpreter::standard();
    let plateau = plateau_5x5();
    let spaced = interpreter
        .process_rover("1 2 N", "L M L M\tL M L M M", &plateau)
        .unwrap();
    assert_eq!(spaced, "1 3 N");
}

#[test]
fn test_move_off_edge_is_dropped() {
    let interpreter = RoverInterpreter::standard();
    // Heads north off the top edge, then keeps going after the blocked moves.
    let report = interpreter.run(RoverState::new(5, 5, Direction::North), "MMLM", &plateau_5x5());
    assert_eq!(report.final_state, RoverState::new(4, 5, Direction::West));
    assert_eq!(report.moves, 1);
    assert_eq!(report.blocked_moves, 2);
}

#[rstest]
#[case(Direction::South)]
#[case(Direction::West)]
fn test_origin_holds_at_lower_bound(#[case] dir: Direction) {
    let interpreter = RoverInterpreter::standard();
    let start = RoverState::new(0, 0, dir);
    let report = interpreter.run(start, "M", &plateau_5x5());
    assert_eq!(report.final_state, start);
    assert_eq!(report.blocked_moves, 1);
}

#[test]
fn test_zero_plateau_allows_only_turns() {
    let interpreter = RoverInterpreter::standard();
    let report = interpreter.run(
        RoverState::new(0, 0, Direction::North),
        "MRMRMRMRM",
        &Plateau::new(0, 0),
    );
    assert_eq!(report.final_state, RoverState::new(0, 0, Direction::North));
    assert_eq!(report.moves, 0);
    assert_eq!(report.blocked_moves, 5);
}

#[test]
fn test_start_outside_plateau_is_kept() {
    let interpreter = RoverInterpreter::standard();
    let out = interpreter
        .process_rover("100 100 N", "MLMLM", &plateau_5x5())
        .unwrap();
    assert_eq!(out, "100 100 S");
}

#[test]
fn test_unmapped_symbols_are_ignored() {
    let interpreter = RoverInterpreter::standard();
    let out = interpreter
        .process_rover("1 2 N", "MXMé?", &plateau_5x5())
        .unwrap();
    assert_eq!(out, "1 4 N");
}

#[test]
fn test_empty_interpreter_ignores_everything() {
    let interpreter = RoverInterpreter::new();
    let out = interpreter
        .process_rover("1 2 N", "LMLMRM", &plateau_5x5())
        .unwrap();
    assert_eq!(out, "1 2 N");
}

#[test]
fn test_custom_symbol_map() {
    let mut interpreter = RoverInterpreter::new();
    interpreter.set_op(b'F', Instruction::Move);
    interpreter.set_op(b'<', Instruction::Turn(Turn::Left));
    interpreter.set_op(b'>', Instruction::Turn(Turn::Right));

    let out = interpreter
        .process_rover("0 0 N", "FF>FF<F", &plateau_5x5())
        .unwrap();
    assert_eq!(out, "2 3 N");
    assert_eq!(interpreter.op('M'), Instruction::Ignore);
}

#[test]
fn test_with_map_replaces_mapping() {
    let mut map = vec![Instruction::Ignore; 128];
    map[b'M' as usize] = Instruction::Turn(Turn::Right);
    let interpreter = RoverInterpreter::standard().with_map(map);

    assert_eq!(interpreter.op('M'), Instruction::Turn(Turn::Right));
    assert_eq!(interpreter.op('L'), Instruction::Ignore);
}

#[test]
fn test_malformed_position_is_an_error() {
    let interpreter = RoverInterpreter::standard();
    assert!(interpreter.process_rover("1 2", "M", &plateau_5x5()).is_err());
}

#[rstest]
#[case::max_plateau(Plateau::new(i64::MAX, i64::MAX))]
#[case::small_plateau(plateau_5x5())]
fn test_move_past_i64_max_is_blocked(#[case] plateau: Plateau) {
    let interpreter = RoverInterpreter::standard();

    let east = RoverState::new(i64::MAX, 0, Direction::East);
    let report = interpreter.run(east, "M", &plateau);
    assert_eq!(report.final_state, east);
    assert_eq!(report.blocked_moves, 1);

    let north = RoverState::new(0, i64::MAX, Direction::North);
    let report = interpreter.run(north, "MM", &plateau);
    assert_eq!(report.final_state, north);
    assert_eq!(report.blocked_moves, 2);
}

#[test]
fn test_ahead_is_none_past_i64_max() {
    assert_eq!(RoverState::new(i64::MAX, 3, Direction::East).ahead(), None);
    assert_eq!(RoverState::new(3, i64::MAX, Direction::North).ahead(), None);
    assert_eq!(
        RoverState::new(i64::MAX, 3, Direction::West).ahead(),
        Some(glam::I64Vec2::new(i64::MAX - 1, 3))
    );
}

fn any_direction() -> impl Strategy<Value = Direction> {
    proptest::sample::select(Direction::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_blocked_move_is_a_no_op(
        w in 0i64..20,
        h in 0i64..20,
        along in 0.0f64..=1.0,
        dir in any_direction(),
    ) {
        let plateau = Plateau::new(w, h);
        // Place the rover on the edge it is facing.
        let (x, y) = match dir {
            Direction::North => ((along * w as f64) as i64, h),
            Direction::South => ((along * w as f64) as i64, 0),
            Direction::East => (w, (along * h as f64) as i64),
            Direction::West => (0, (along * h as f64) as i64),
        };
        let start = RoverState::new(x, y, dir);

        let report = RoverInterpreter::standard().run(start, "M", &plateau);
        prop_assert_eq!(report.final_state, start);
        prop_assert_eq!(report.blocked_moves, 1);
    }

    #[test]
    fn test_rover_stays_on_plateau(
        w in 0i64..10,
        h in 0i64..10,
        dir in any_direction(),
        instructions in "[LRM]{1,64}",
    ) {
        let plateau = Plateau::new(w, h);
        let start = RoverState::new(w / 2, h / 2, dir);
        let report = RoverInterpreter::standard().run(start, &instructions, &plateau);

        prop_assert!(plateau.contains(report.final_state.position));
        let move_count = instructions.chars().filter(|&c| c == 'M').count();
        prop_assert_eq!(report.moves + report.blocked_moves, move_count);
    }

    #[test]
    fn test_moves_near_i64_max_never_panic(
        offset_x in 0i64..4,
        offset_y in 0i64..4,
        max_plateau in any::<bool>(),
        dir in any_direction(),
        instructions in "[LRM]{1,32}",
    ) {
        let plateau = if max_plateau {
            Plateau::new(i64::MAX, i64::MAX)
        } else {
            plateau_5x5()
        };
        let start = RoverState::new(i64::MAX - offset_x, i64::MAX - offset_y, dir);
        let report = RoverInterpreter::standard().run(start, &instructions, &plateau);

        let move_count = instructions.chars().filter(|&c| c == 'M').count();
        prop_assert_eq!(report.moves + report.blocked_moves, move_count);
        if !max_plateau {
            // Starts outside the 5x5 plateau, so every move is dropped.
            prop_assert_eq!(report.final_state.position, start.position);
            prop_assert_eq!(report.moves, 0);
        }
    }
}
