//! Nearest-point lookups over a projected series.
//!
//! - Empty series => `None` (nothing to highlight).
//! - Ties => the first index scanned wins; a later point only replaces the
//!   current best when it is strictly closer.
//! - Targets outside the data range are not rejected; the closest point at
//!   the edge is returned.

use crate::domain::series::SeriesPoint;

/// Returns the index of the point whose `y` is closest to `target_y`.
pub fn closest_by_y(series: &[SeriesPoint], target_y: f64) -> Option<usize> {
    closest_by(series, target_y, |point| point.y)
}

/// Returns the index of the point whose `x` is closest to `target_x`.
pub fn closest_by_x(series: &[SeriesPoint], target_x: f64) -> Option<usize> {
    closest_by(series, target_x, |point| point.x)
}

pub(crate) fn closest_by<T, F>(items: &[T], target: f64, value: F) -> Option<usize>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(usize, f64)> = None;
    for (index, item) in items.iter().enumerate() {
        let distance = (value(item) - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
