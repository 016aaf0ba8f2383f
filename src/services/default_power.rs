use crate::domain::result_record::ResultRecord;
use crate::domain::settings::resolve_nominal_power;
use crate::services::nearest_point::closest_by;

/// Index into the filtered OPTIVIS records whose power is closest to
/// `target_power` (0.8 when unset). Falls back to 0 for an empty slice.
pub fn locate_default_index(optivis_filtered: &[ResultRecord], target_power: Option<f64>) -> usize {
    let target = resolve_nominal_power(target_power);
    closest_by(optivis_filtered, target, |record| record.primary_endpoint_power).unwrap_or(0)
}
