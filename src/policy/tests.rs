use super::*;
use crate::model::fixtures::{location, north_of, restaurant, time};

#[test]
fn test_is_open_strictly_inside_interval() {
    let opens = time(18, 0);
    let closes = time(23, 0);

    assert!(is_open(time(20, 0), opens, closes));
    assert!(!is_open(time(18, 0), opens, closes));
    assert!(!is_open(time(23, 0), opens, closes));
    assert!(!is_open(time(17, 59), opens, closes));
    assert!(is_open(time(18, 1), opens, closes));
}

#[test]
fn test_is_open_overnight_interval_never_matches() {
    let opens = time(22, 0);
    let closes = time(2, 0);

    for now in [time(23, 0), time(1, 0), time(12, 0), time(0, 0)] {
        assert!(!is_open(now, opens, closes), "unexpectedly open at {now}");
    }
}

#[test]
fn test_serving_radius_examples() {
    assert_eq!(serving_radius_km(time(9, 0)), 3.0);
    assert_eq!(serving_radius_km(time(12, 0)), 5.0);
    assert_eq!(serving_radius_km(time(13, 30)), 3.0);
    assert_eq!(serving_radius_km(time(20, 0)), 3.0);
    assert_eq!(serving_radius_km(time(23, 0)), 5.0);
}

#[test]
fn test_peak_hour_boundaries_are_inclusive_by_hour() {
    assert!(is_peak_hour(time(8, 0)));
    assert!(is_peak_hour(time(10, 0)));
    assert!(is_peak_hour(time(10, 59)));
    assert!(!is_peak_hour(time(7, 59)));
    assert!(!is_peak_hour(time(11, 0)));

    assert!(is_peak_hour(time(14, 45)));
    assert!(!is_peak_hour(time(15, 0)));

    assert!(is_peak_hour(time(19, 0)));
    assert!(is_peak_hour(time(21, 30)));
    assert!(!is_peak_hour(time(22, 0)));
}

#[test]
fn test_eligible_when_open_and_near() {
    let origin = location(12.95, 77.63);
    let record = restaurant("1", "Near", north_of(origin, 2.0));

    assert!(is_eligible(&record, time(9, 30), origin, 3.0));
}

#[test]
fn test_ineligible_when_closed() {
    let origin = location(12.95, 77.63);
    let record = restaurant("1", "Near", north_of(origin, 0.5));

    assert!(!is_eligible(&record, time(7, 0), origin, 3.0));
    assert!(!is_eligible(&record, time(22, 0), origin, 3.0));
}

#[test]
fn test_eligibility_radius_boundary_is_exclusive() {
    let origin = location(12.95, 77.63);
    let record = restaurant("1", "Edge", north_of(origin, 3.0));
    let exact = crate::geo::distance_km(origin, record.location);

    assert!(!is_eligible(&record, time(12, 0), origin, exact));
    assert!(is_eligible(&record, time(12, 0), origin, exact + 1e-9));
}

#[test]
fn test_proximity_filter_keeps_order_and_projects() {
    let origin = location(12.95, 77.63);
    let now = time(12, 0);
    let records = vec![
        restaurant("a", "First", north_of(origin, 1.0)),
        restaurant("b", "TooFar", north_of(origin, 6.0)),
        restaurant("c", "Second", north_of(origin, 4.0)),
    ];

    let filter = ProximityFilter::new(origin, now, 5.0);
    let views = filter.apply(records);

    let ids: Vec<_> = views.iter().map(|v| v.restaurant_id.as_str()).collect();
    assert_eq!(ids, ["a", "c"]);
    assert_eq!(filter.radius_km(), 5.0);
}
