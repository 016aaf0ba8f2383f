use crate::domain::result_record::ResultRecord;

pub const MIN_POWER: f64 = 0.6;
pub const MAX_POWER: f64 = 0.95;

pub fn is_valid_power(power: f64) -> bool {
    (MIN_POWER..=MAX_POWER).contains(&power)
}

/// Keeps records whose primary endpoint power lies in
/// `[MIN_POWER, MAX_POWER]` and sorts them ascending by power.
///
/// The sort is stable, so records with equal power keep their input order.
pub fn filter_results(records: &[ResultRecord]) -> Vec<ResultRecord> {
    let mut filtered: Vec<ResultRecord> = records
        .iter()
        .filter(|record| is_valid_power(record.primary_endpoint_power))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| {
        a.primary_endpoint_power
            .partial_cmp(&b.primary_endpoint_power)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    filtered
}
