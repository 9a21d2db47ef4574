use landfield::{Extent, IndexConfig, PointRecord, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Coordinates snapped to a 0.05 grid so co-located records and records on
/// rectangle edges show up often.
fn random_records(rng: &mut StdRng, n: usize) -> Vec<PointRecord> {
    (0..n)
        .map(|_| {
            let lat = (rng.gen_range(-20..=20) as f64) * 0.05;
            let lon = (rng.gen_range(-20..=20) as f64) * 0.05;
            PointRecord::new(lat, lon, rng.gen_range(0.0..100.0), "Square Ft.")
        })
        .collect()
}

fn random_rect(rng: &mut StdRng) -> Extent {
    let snap = |v: i32| v as f64 * 0.05;
    let (a, b) = (rng.gen_range(-25..=25), rng.gen_range(-25..=25));
    let (c, d) = (rng.gen_range(-25..=25), rng.gen_range(-25..=25));
    if rng.gen_bool(0.2) {
        // Zero-area rectangle.
        return Extent::new(snap(a), snap(a), snap(c), snap(c));
    }
    Extent::new(snap(a.min(b)), snap(a.max(b)), snap(c.min(d)), snap(c.max(d)))
}

fn brute_force(records: &[PointRecord], rect: &Extent) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| rect.contains(r.lat, r.lon))
        .map(|(i, _)| i)
        .collect()
}

fn sorted(mut v: Vec<usize>) -> Vec<usize> {
    v.sort_unstable();
    v
}

#[test]
fn test_query_everything_returns_every_record() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in [0, 1, 7, 64, 500] {
        let records = random_records(&mut rng, n);
        let tree = QuadTree::build(records.clone(), IndexConfig::default());

        let all = sorted(tree.query_indices(&Extent::everything()));
        assert_eq!(all, (0..n).collect::<Vec<_>>(), "n = {}", n);
    }
}

#[test]
fn test_range_query_matches_brute_force() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = StdRng::seed_from_u64(42);

    for round in 0..40 {
        let n = rng.gen_range(0..400);
        let records = random_records(&mut rng, n);
        let capacity = rng.gen_range(1..16);
        let tree = QuadTree::build(
            records.clone(),
            IndexConfig::default().with_bucket_capacity(capacity),
        );

        for _ in 0..25 {
            let rect = random_rect(&mut rng);
            assert_eq!(
                sorted(tree.query_indices(&rect)),
                brute_force(&records, &rect),
                "round {}, capacity {}, rect {:?}",
                round,
                capacity,
                rect
            );
        }
    }
}

#[test]
fn test_partitioning_does_not_change_results() {
    let mut rng = StdRng::seed_from_u64(7);
    let records = random_records(&mut rng, 300);
    let rects: Vec<Extent> = (0..50).map(|_| random_rect(&mut rng)).collect();

    let configs = [
        IndexConfig::default().with_bucket_capacity(1),
        IndexConfig::default().with_bucket_capacity(4).with_max_depth(3),
        IndexConfig::default().with_bucket_capacity(1000),
    ];
    let trees: Vec<_> = configs
        .iter()
        .map(|c| QuadTree::build(records.clone(), *c))
        .collect();

    for rect in &rects {
        let expected = sorted(trees[0].query_indices(rect));
        for tree in &trees[1..] {
            assert_eq!(sorted(tree.query_indices(rect)), expected);
        }
    }
}

#[test]
fn test_rectangle_outside_data_is_empty() {
    let mut rng = StdRng::seed_from_u64(3);
    let records = random_records(&mut rng, 200);
    let tree = QuadTree::build(records, IndexConfig::default());

    assert!(tree.query(&Extent::new(5.0, 6.0, 5.0, 6.0)).is_empty());
    assert!(tree.query(&Extent::new(-6.0, -5.0, -1.0, 1.0)).is_empty());
    assert_eq!(tree.count_in(&Extent::new(1.5, 1.5, 0.0, 0.0)), 0);
}

#[test]
fn test_edge_points_are_included() {
    let records = vec![
        PointRecord::new(0.0, 0.0, 1.0, "A"),
        PointRecord::new(1.0, 0.0, 1.0, "A"),
        PointRecord::new(0.0, 1.0, 1.0, "A"),
        PointRecord::new(1.0, 1.0, 1.0, "A"),
        PointRecord::new(0.5, 1.0, 1.0, "A"),
        PointRecord::new(1.0000001, 0.5, 1.0, "A"),
    ];
    let tree = QuadTree::build(records, IndexConfig::default().with_bucket_capacity(1));

    assert_eq!(
        sorted(tree.query_indices(&Extent::new(0.0, 1.0, 0.0, 1.0))),
        vec![0, 1, 2, 3, 4]
    );
    assert_eq!(
        sorted(tree.query_indices(&Extent::new(0.5, 0.5, 1.0, 1.0))),
        vec![4]
    );
}

#[test]
fn test_duplicates_are_all_returned() {
    let mut records = vec![PointRecord::new(0.25, 0.25, 10.0, "A"); 40];
    records.push(PointRecord::new(0.75, 0.75, 20.0, "A"));
    let tree = QuadTree::build(records, IndexConfig::default().with_bucket_capacity(2));

    let hits = tree.query(&Extent::new(0.0, 0.5, 0.0, 0.5));
    assert_eq!(hits.len(), 40);
    assert!(hits.iter().all(|r| r.land_value == 10.0));
}
