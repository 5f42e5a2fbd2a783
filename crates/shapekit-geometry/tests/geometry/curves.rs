use shapekit_geometry::{
    arched_curve, lon_lat_to_xyz, mercator, ArchOptions, Bounds3, CatmullRom, CurveType, Point3,
};

const EPS: f64 = 1e-9;

#[test]
fn test_arch_is_symmetric() {
    let start = Point3::new(-10.0, 2.0, 0.0);
    let end = Point3::new(10.0, 2.0, 0.0);
    let samples = arched_curve(start, end, &ArchOptions::default());
    for i in 0..=50 {
        let a = samples[i];
        let b = samples[50 - i];
        assert!((a.x + b.x).abs() < 1e-6, "x mismatch at {i}");
        assert!((a.z - b.z).abs() < 1e-6, "z mismatch at {i}");
        assert!((a.y - 2.0).abs() < EPS);
    }
}

#[test]
fn test_arch_height_and_divisions() {
    let options = ArchOptions {
        height: 12.0,
        divisions: 4,
        curve_type: CurveType::Chordal,
    };
    let samples = arched_curve(Point3::origin(), Point3::new(8.0, 0.0, 0.0), &options);
    assert_eq!(samples.len(), 5);

    let bounds = Bounds3::from_points(&samples).unwrap();
    assert!((bounds.max.z - 12.0).abs() < EPS);
    assert!((bounds.size().x - 8.0).abs() < EPS);
}

#[test]
fn test_arch_between_projected_cities() {
    let shanghai = lon_lat_to_xyz(100.0, 121.49, 31.23);
    let beijing = lon_lat_to_xyz(100.0, 116.40, 39.90);
    let samples = arched_curve(shanghai.into(), beijing.into(), &ArchOptions::default());
    assert!((samples[0].coords - shanghai).norm() < EPS);
    assert!((samples[50].coords - beijing).norm() < EPS);
}

#[test]
fn test_uniform_tension_changes_shape() {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 3.0, 0.0),
        Point3::new(4.0, 0.0, 0.0),
    ];
    let loose = CatmullRom::new(points.clone(), CurveType::CatmullRom { tension: 0.5 }).unwrap();
    let tight = CatmullRom::new(points, CurveType::CatmullRom { tension: 0.0 }).unwrap();
    let a = loose.point_at(0.25);
    let b = tight.point_at(0.25);
    assert!((a - b).norm() > 1e-3);
}

#[test]
fn test_curve_type_serde() {
    let value = serde_json::to_value(CurveType::CatmullRom { tension: 0.5 }).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "type": "catmull_rom", "tension": 0.5 })
    );
    let options: ArchOptions = serde_json::from_str(r#"{ "height": 2.0 }"#).unwrap();
    assert_eq!(options.divisions, 50);
    assert_eq!(options.curve_type, CurveType::Centripetal);
}

#[test]
fn test_mercator_known_city() {
    let p = mercator(121.49131393432617, 31.232206344604492);
    assert!((p.x - 13_524_351.201_092).abs() < 1e-2);
    assert!((p.y - 3_662_942.417_110).abs() < 1e-2);
}
