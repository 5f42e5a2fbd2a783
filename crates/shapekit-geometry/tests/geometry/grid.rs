use proptest::prelude::*;
use shapekit_core::Point;
use shapekit_geometry::{GridOptions, Polygon};

fn square(size: f64) -> Polygon {
    Polygon::from_coords(&[[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]])
}

#[test]
fn test_grid_order_and_edges() {
    // Samples on the max-x and max-y edges fall outside under ray casting.
    let grid = square(10.0)
        .grid(&GridOptions { rows: 2, cols: 2 })
        .unwrap();
    assert_eq!(
        grid,
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
        ]
    );
}

#[test]
fn test_default_density() {
    let rect = Polygon::from_coords(&[[0.0, 0.0], [20.0, 0.0], [20.0, 10.0], [0.0, 10.0]]);
    let grid = rect.grid(&GridOptions::default()).unwrap();
    assert_eq!(grid.len(), 20 * 10);
}

#[test]
fn test_grid_skips_concave_notch() {
    let u = Polygon::from_coords(&[
        [0.0, 0.0],
        [9.0, 0.0],
        [9.0, 9.0],
        [6.0, 9.0],
        [6.0, 3.0],
        [3.0, 3.0],
        [3.0, 9.0],
        [0.0, 9.0],
    ]);
    let grid = u.grid(&GridOptions { rows: 9, cols: 9 }).unwrap();
    assert!(!grid.contains(&Point::new(4.0, 6.0)));
    assert!(grid.contains(&Point::new(1.0, 6.0)));
    assert!(grid.contains(&Point::new(4.0, 1.0)));
}

#[test]
fn test_grid_options_from_json() {
    let options: GridOptions = serde_json::from_str(r#"{ "rows": 4 }"#).unwrap();
    assert_eq!(options, GridOptions { rows: 4, cols: 10 });
}

proptest! {
    #[test]
    fn prop_grid_samples_are_inside(
        coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..12),
        rows in 1u32..30,
        cols in 1u32..30,
    ) {
        let polygon: Polygon = coords.into_iter().map(Point::from).collect();
        let grid = polygon.grid(&GridOptions { rows, cols }).unwrap();
        prop_assert!(grid.len() <= ((rows + 1) * (cols + 1)) as usize);
        for p in &grid {
            prop_assert!(polygon.contains(*p));
        }
    }
}
