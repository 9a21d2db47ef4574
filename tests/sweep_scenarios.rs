use landfield::records::{SQUARE_FEET, from_json_str, land_value};
use landfield::{
    Config, Extent, FieldError, IndexConfig, LandField, PointRecord, QuadTree, SweepConfig,
    axis_centers, sweep,
};

fn unit_a(r: &PointRecord) -> bool {
    r.land_unit == "A" && r.land_value > 0.0
}

#[test]
fn test_forced_high_edge_center() {
    let xs = axis_centers(0.0, 1.0, 0.5, 0.1).unwrap();
    assert!(xs.iter().any(|&x| (x - 0.9).abs() < 1e-9));
    assert!((xs.last().copied().unwrap() - 0.9).abs() < 1e-12);
}

#[test]
fn test_concrete_scenario() {
    let records = vec![
        PointRecord::new(0.0, 0.0, 10.0, "A"),
        PointRecord::new(0.0, 0.0, 20.0, "A"),
        PointRecord::new(1.0, 1.0, 100.0, "B"),
        PointRecord::new(0.05, 0.05, 5.0, "A"),
    ];
    let tree = QuadTree::build(records, IndexConfig::default());
    let cells = sweep(
        &tree,
        &Extent::new(0.0, 0.1, 0.0, 0.1),
        0.05,
        0.05,
        unit_a,
        land_value,
    )
    .unwrap();

    assert!(!cells.is_empty());
    let all_three = 35.0 / 3.0;
    let allowed = [15.0, 5.0, all_three];
    for cell in &cells {
        assert!(
            allowed.iter().any(|v| (cell.value - v).abs() < 1e-9),
            "unexpected aggregate {:?}",
            cell
        );
    }
    assert!(cells.iter().any(|c| (c.value - all_three).abs() < 1e-9));
}

#[test]
fn test_empty_windows_are_dropped() {
    let records = vec![
        PointRecord::new(0.0, 0.0, 3.0, "A"),
        PointRecord::new(1.0, 1.0, 4.0, "A"),
    ];
    let tree = QuadTree::build(records, IndexConfig::default());
    let extent = Extent::new(0.0, 1.0, 0.0, 1.0);

    let cells = sweep(&tree, &extent, 0.1, 0.02, unit_a, land_value).unwrap();
    let lattice = axis_centers(0.0, 1.0, 0.1, 0.02).unwrap().len().pow(2);

    assert!(!cells.is_empty());
    assert!(cells.len() < lattice);
    assert!(cells.iter().all(|c| c.value == 3.0 || c.value == 4.0));
}

#[test]
fn test_reject_all_predicate_yields_nothing() {
    let records: Vec<PointRecord> = (0..200)
        .map(|i| PointRecord::new((i % 20) as f64 * 0.01, (i / 20) as f64 * 0.01, 9.0, "A"))
        .collect();
    let tree = QuadTree::build(records, IndexConfig::default());

    let cells = sweep(
        &tree,
        &Extent::new(0.0, 0.19, 0.0, 0.09),
        0.01,
        0.02,
        |_: &PointRecord| false,
        land_value,
    )
    .unwrap();
    assert!(cells.is_empty());
}

#[test]
fn test_invalid_parameters_fail_fast() {
    let tree = QuadTree::build(vec![PointRecord::new(0.0, 0.0, 1.0, "A")], IndexConfig::default());
    let extent = Extent::new(0.0, 1.0, 0.0, 1.0);

    assert!(matches!(
        sweep(&tree, &extent, 0.0, 0.1, unit_a, land_value),
        Err(FieldError::InvalidParameter(_))
    ));
    assert!(matches!(
        sweep(&tree, &extent, 0.1, -1.0, unit_a, land_value),
        Err(FieldError::InvalidParameter(_))
    ));
    assert!(matches!(
        sweep(&tree, &Extent::new(1.0, 0.0, 0.0, 1.0), 0.1, 0.1, unit_a, land_value),
        Err(FieldError::InvalidParameter(_))
    ));
}

#[test]
fn test_empty_input_is_not_an_error() {
    let tree: QuadTree<PointRecord> = QuadTree::build(Vec::new(), IndexConfig::default());
    let cells = sweep(&tree, &Extent::new(0.0, 1.0, 0.0, 1.0), 0.25, 0.1, unit_a, land_value)
        .unwrap();
    assert!(cells.is_empty());
}

#[test]
fn test_json_to_cells() {
    let _ = env_logger::builder().is_test(true).try_init();

    let json = r#"[
        {"id": 1, "lat": 25.9600, "lon": -80.2200, "land_value": 10.0, "land_unit": "Square Ft.", "land_area": 5000},
        {"id": 2, "lat": 25.9601, "lon": -80.2201, "land_value": 30.0, "land_unit": "Square Ft.", "land_area": 5000},
        {"id": 3, "lat": 25.9602, "lon": -80.2202, "land_value": 9000.0, "land_unit": "Acre", "land_area": 1},
        {"id": 4, "lat": 25.9603, "lon": -80.2203, "land_value": 0.0, "land_unit": "Square Ft.", "land_area": 5000},
        {"id": 5, "lat": null, "lon": -80.2203, "land_value": 50.0, "land_unit": "Square Ft.", "land_area": 5000}
    ]"#;
    let records = from_json_str(json).unwrap();
    assert_eq!(records.len(), 4);

    let config = Config::default().with_sweep(SweepConfig::fine());
    let field = LandField::build(records, &config);
    assert_eq!(field.points().len(), 4);

    let cells = field.cells().unwrap();
    assert!(!cells.is_empty());
    for cell in &cells {
        assert!(cell.value == 10.0 || cell.value == 30.0 || cell.value == 20.0);
    }

    let acre_only = field
        .cells_with(|r| r.land_unit == "Acre", land_value)
        .unwrap();
    assert!(acre_only.iter().all(|c| c.value == 9000.0));

    let range = landfield::spatial::value_range(&cells).unwrap();
    assert!(range.0 >= 10.0 && range.1 <= 30.0);
    assert!(field.points().iter().any(|r| r.land_unit == SQUARE_FEET));
}
