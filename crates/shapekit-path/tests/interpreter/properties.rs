use proptest::prelude::*;
use shapekit_path::{interpret, DrawOp};

proptest! {
    #[test]
    fn prop_never_panics(input in "\\PC*") {
        let _ = interpret(&input);
    }

    #[test]
    fn prop_outline_starts_with_move(input in "[MLHVZmlhvz0-9 ,.-]{0,64}") {
        if let Ok(outline) = interpret(&input) {
            if let Some(first) = outline.ops().first() {
                prop_assert!(first.is_move());
            }
        }
    }

    #[test]
    fn prop_first_move_uses_first_numbers(
        x in (-1000i32..1000, 0u8..100),
        y in (-1000i32..1000, 0u8..100),
        tail in "( [Ll]-?[0-9]{1,3},-?[0-9]{1,3}){0,6}",
    ) {
        let x = format!("{}.{:02}", x.0, x.1);
        let y = format!("{}.{:02}", y.0, y.1);
        let outline = interpret(&format!("M{x},{y}{tail}")).unwrap();
        prop_assert_eq!(
            outline.ops()[0],
            DrawOp::MoveTo { x: x.parse().unwrap(), y: y.parse().unwrap() }
        );
    }

    #[test]
    fn prop_relative_matches_absolute(
        start in (-100i32..100, -100i32..100),
        deltas in prop::collection::vec((-50i32..50, -50i32..50), 1..16),
    ) {
        let (sx, sy) = start;
        let mut relative = format!("M{sx},{sy}");
        let mut absolute = format!("M{sx},{sy}");
        let (mut x, mut y) = (sx, sy);
        for (dx, dy) in &deltas {
            x += dx;
            y += dy;
            relative.push_str(&format!(" l{dx},{dy}"));
            absolute.push_str(&format!(" L{x},{y}"));
        }

        let relative = interpret(&relative).unwrap();
        let absolute = interpret(&absolute).unwrap();
        prop_assert_eq!(relative, absolute);
    }

    #[test]
    fn prop_close_returns_to_start(
        start in (-100i32..100, -100i32..100),
        points in prop::collection::vec((-50i32..50, -50i32..50), 1..8),
    ) {
        let (sx, sy) = start;
        let mut path = format!("M{sx},{sy}");
        for (x, y) in &points {
            path.push_str(&format!(" L{x},{y}"));
        }
        path.push_str(" Z");

        let outline = interpret(&path).unwrap();
        let last = outline.ops().last().copied();
        prop_assert_eq!(last.map(|op| op.end_point()), Some(shapekit_core::Point::new(sx as f64, sy as f64)));
        let ends_with_line = matches!(last, Some(DrawOp::LineTo { .. }));
        prop_assert!(ends_with_line);
    }
}
