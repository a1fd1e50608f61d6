use chrono::NaiveTime;

/// Returns `true` if `now` is strictly inside `(opens_at, closes_at)`.
///
/// Intervals that wrap past midnight (`closes_at < opens_at`) never match.
#[inline]
pub fn is_open(now: NaiveTime, opens_at: NaiveTime, closes_at: NaiveTime) -> bool {
    now > opens_at && now < closes_at
}
