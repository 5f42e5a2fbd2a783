use shapekit_path::{interpret, DrawOp, MalformedPathError};

fn mv(x: f64, y: f64) -> DrawOp {
    DrawOp::MoveTo { x, y }
}

fn ln(x: f64, y: f64) -> DrawOp {
    DrawOp::LineTo { x, y }
}

fn ops(path: &str) -> Vec<DrawOp> {
    interpret(path).unwrap().into_ops()
}

#[test]
fn test_closed_triangle() {
    assert_eq!(
        ops("M0,0 L10,0 L10,10 Z"),
        vec![mv(0.0, 0.0), ln(10.0, 0.0), ln(10.0, 10.0), ln(0.0, 0.0)]
    );
}

#[test]
fn test_horizontal_and_vertical() {
    assert_eq!(ops("M0,0 H10"), vec![mv(0.0, 0.0), ln(10.0, 0.0)]);
    assert_eq!(ops("M0,0 V10"), vec![mv(0.0, 0.0), ln(0.0, 10.0)]);
}

#[test]
fn test_cubic() {
    assert_eq!(
        ops("M0,0 C0,0 10,10 10,0"),
        vec![
            mv(0.0, 0.0),
            DrawOp::CubicBezierTo {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 10.0,
                x: 10.0,
                y: 0.0
            }
        ]
    );
}

#[test]
fn test_unknown_command_fails() {
    let err = interpret("X0,0").unwrap_err();
    assert_eq!(
        err,
        MalformedPathError::UnknownCommand {
            command: 'X',
            offset: 0
        }
    );
}

#[test]
fn test_unknown_command_midway_returns_no_outline() {
    let err = interpret("M0,0 L10,0 K5,5").unwrap_err();
    assert_eq!(
        err,
        MalformedPathError::UnknownCommand {
            command: 'K',
            offset: 11
        }
    );
}

#[test]
fn test_missing_argument_fails() {
    let err = interpret("M0,0 L10").unwrap_err();
    assert!(matches!(
        err,
        MalformedPathError::ExpectedNumber { command: 'L', .. }
    ));
}

#[test]
fn test_implicit_repeat() {
    assert_eq!(
        ops("M0,0 L10,0 20,0"),
        vec![mv(0.0, 0.0), ln(10.0, 0.0), ln(20.0, 0.0)]
    );
}

#[test]
fn test_repeated_moveto_becomes_lineto() {
    assert_eq!(
        ops("M0,0 10,0 10,10"),
        vec![mv(0.0, 0.0), ln(10.0, 0.0), ln(10.0, 10.0)]
    );
    assert_eq!(ops("m1,1 2,2"), vec![mv(1.0, 1.0), ln(3.0, 3.0)]);
}

#[test]
fn test_relative_commands() {
    assert_eq!(
        ops("m10,10 l5,0 v5 h-5 z"),
        vec![
            mv(10.0, 10.0),
            ln(15.0, 10.0),
            ln(15.0, 15.0),
            ln(10.0, 15.0),
            ln(10.0, 10.0)
        ]
    );
}

#[test]
fn test_relative_cubic_is_relative_to_segment_start() {
    assert_eq!(
        ops("M10,10 c0,5 5,5 5,0")[1],
        DrawOp::CubicBezierTo {
            x1: 10.0,
            y1: 15.0,
            x2: 15.0,
            y2: 15.0,
            x: 15.0,
            y: 10.0
        }
    );
}

#[test]
fn test_smooth_cubic_reflects_previous_control() {
    let ops = ops("M0,0 C0,10 10,10 10,0 S20,-10 20,0");
    assert_eq!(
        ops[2],
        DrawOp::CubicBezierTo {
            x1: 10.0,
            y1: -10.0,
            x2: 20.0,
            y2: -10.0,
            x: 20.0,
            y: 0.0
        }
    );
}

#[test]
fn test_smooth_cubic_chain_reflects_its_own_control() {
    let ops = ops("M0,0 C0,10 10,10 10,0 s10,-10 10,0 s10,10 10,0");
    assert_eq!(
        ops[3],
        DrawOp::CubicBezierTo {
            x1: 20.0,
            y1: 10.0,
            x2: 30.0,
            y2: 10.0,
            x: 30.0,
            y: 0.0
        }
    );
}

#[test]
fn test_smooth_quadratic_reflects_previous_control() {
    let ops = ops("M0,0 Q5,10 10,0 T20,0");
    assert_eq!(
        ops[1],
        DrawOp::QuadraticBezierTo {
            x1: 5.0,
            y1: 10.0,
            x: 10.0,
            y: 0.0
        }
    );
    assert_eq!(
        ops[2],
        DrawOp::QuadraticBezierTo {
            x1: 15.0,
            y1: -10.0,
            x: 20.0,
            y: 0.0
        }
    );
}

#[test]
fn test_relative_smooth_quadratic() {
    let ops = ops("m0,0 q5,10 10,0 t10,0");
    assert_eq!(
        ops[2],
        DrawOp::QuadraticBezierTo {
            x1: 15.0,
            y1: -10.0,
            x: 20.0,
            y: 0.0
        }
    );
}

#[test]
fn test_zero_length_close_is_skipped() {
    assert_eq!(
        ops("M0,0 L10,0 L0,0 Z"),
        vec![mv(0.0, 0.0), ln(10.0, 0.0), ln(0.0, 0.0)]
    );
}

#[test]
fn test_close_returns_cursor_to_subpath_start() {
    assert_eq!(
        ops("M0,0 L10,0 L10,10 Z l5,5"),
        vec![
            mv(0.0, 0.0),
            ln(10.0, 0.0),
            ln(10.0, 10.0),
            ln(0.0, 0.0),
            mv(0.0, 0.0),
            ln(5.0, 5.0)
        ]
    );
}

#[test]
fn test_each_subpath_closes_to_its_own_start() {
    let ops = ops("M0,0 L1,0 L1,1 Z M5,5 L6,5 L6,6 Z");
    assert_eq!(ops[3], ln(0.0, 0.0));
    assert_eq!(ops[7], ln(5.0, 5.0));
}

#[test]
fn test_number_after_close_is_an_error() {
    assert!(matches!(
        interpret("M0,0 L1,1 Z 5"),
        Err(MalformedPathError::UnknownCommand { command: '5', .. })
    ));
}

#[test]
fn test_empty_and_blank_input() {
    assert!(interpret("").unwrap().is_empty());
    assert!(interpret("  \n ").unwrap().is_empty());
}

#[test]
fn test_whitespace_and_compact_numbers() {
    assert_eq!(
        ops("  M-1.5-2.5L.5,.5\n\tl-.5-.5 "),
        vec![mv(-1.5, -2.5), ln(0.5, 0.5), ln(0.0, 0.0)]
    );
}

#[test]
fn test_drawing_without_moveto_starts_at_origin() {
    assert_eq!(ops("L10,10"), vec![mv(0.0, 0.0), ln(10.0, 10.0)]);
}
