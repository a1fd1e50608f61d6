use chrono::{NaiveTime, Timelike};

use crate::constants::{
    NORMAL_HOURS_SERVING_RADIUS_KM, PEAK_HOUR_WINDOWS, PEAK_HOURS_SERVING_RADIUS_KM,
};

/// Returns `true` if the hour of `now` falls in any peak window (both ends inclusive).
#[inline]
pub fn is_peak_hour(now: NaiveTime) -> bool {
    let hour = now.hour();
    PEAK_HOUR_WINDOWS
        .iter()
        .any(|&(first, last)| (first..=last).contains(&hour))
}

/// Serving radius for a request made at `now`.
#[inline]
pub fn serving_radius_km(now: NaiveTime) -> f64 {
    if is_peak_hour(now) {
        PEAK_HOURS_SERVING_RADIUS_KM
    } else {
        NORMAL_HOURS_SERVING_RADIUS_KM
    }
}
