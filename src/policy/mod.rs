//! Serving rules: opening hours, time-dependent serving radius and the proximity filter that
//! combines them.

pub mod hours;
pub mod proximity;
pub mod radius;

#[cfg(test)]
mod tests;

pub use hours::is_open;
pub use proximity::{ProximityFilter, is_eligible};
pub use radius::{is_peak_hour, serving_radius_km};
