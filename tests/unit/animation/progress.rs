use super::*;

#[test]
fn progress_never_leaves_unit_range() {
    for scroll in [-1.0e9, -250.0, -0.5, 0.0, 1.0, 250.0, 499.9, 500.0, 501.0, 1.0e12] {
        for distance in [0.001, 1.0, 400.0, 500.0, 1.0e6] {
            let p = Progress::from_scroll(scroll, distance).unwrap().value();
            assert!((0.0..=1.0).contains(&p), "scroll={scroll} distance={distance}");
        }
    }
    assert_eq!(
        Progress::from_scroll(f64::INFINITY, 10.0),
        Some(Progress::END)
    );
    assert_eq!(
        Progress::from_scroll(f64::NEG_INFINITY, 10.0),
        Some(Progress::START)
    );
}

#[test]
fn progress_is_the_scroll_ratio_inside_the_range() {
    assert_eq!(Progress::from_scroll(250.0, 500.0).unwrap().value(), 0.5);
    assert_eq!(Progress::from_scroll(100.0, 400.0).unwrap().value(), 0.25);
}

#[test]
fn unusable_distances_yield_none() {
    for distance in [0.0, -0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert_eq!(Progress::from_scroll(100.0, distance), None);
    }
    assert_eq!(Progress::from_scroll(f64::NAN, 100.0), None);
}

#[test]
fn new_clamps_and_maps_nan_to_start() {
    assert_eq!(Progress::new(2.0), Progress::END);
    assert_eq!(Progress::new(-2.0), Progress::START);
    assert_eq!(Progress::new(f64::NAN), Progress::START);
}
