use nearbite::model::fixtures::{item, location, menu, north_of, restaurant, time};
use nearbite::{Catalog, Location};

/// Query origin used throughout: central Bengaluru.
pub fn origin() -> Location {
    location(12.95, 77.63)
}

/// A small catalog around [`origin`]:
///
/// - `near` 2 km, open 08:00-22:00, "South Indian", serves Masala Dosa
/// - `mid` 4 km, open 08:00-22:00, "Tamil"
/// - `late` 1 km, open 18:00-23:00, serves Masala Dosa
/// - `far` 30 km, open 08:00-22:00, "South Indian"
pub fn catalog() -> Catalog {
    let mut near = restaurant("near", "Dosa Corner", north_of(origin(), 2.0));
    near.attributes = vec!["South Indian".to_string()];

    let mut mid = restaurant("mid", "Chettinad Spice", north_of(origin(), 4.0));
    mid.attributes = vec!["Tamil".to_string()];

    let mut late = restaurant("late", "Night Dosa", north_of(origin(), 1.0));
    late.opens_at = time(18, 0);
    late.closes_at = time(23, 0);

    let mut far = restaurant("far", "Dosa Corner", north_of(origin(), 30.0));
    far.attributes = vec!["South Indian".to_string()];

    let dosa = item("i1", "Masala Dosa", &["Vegetarian", "Crispy"]);

    Catalog {
        restaurants: vec![near, mid, late, far],
        menus: vec![
            menu("near", vec![dosa.clone()]),
            menu("late", vec![dosa.clone()]),
        ],
        items: vec![dosa],
    }
}
