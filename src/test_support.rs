use crate::domain::result_record::{DesignMethod, ResultRecord};
use crate::domain::series::SeriesPoint;

pub fn optivis_record(power: f64, total_patients: u64) -> ResultRecord {
    build_record(DesignMethod::Optivis, power, total_patients)
}

pub fn traditional_record(power: f64, total_patients: u64) -> ResultRecord {
    build_record(DesignMethod::Traditional, power, total_patients)
}

// Screening and cost scale with the sample size so projections stay easy to check.
pub fn build_record(method: DesignMethod, power: f64, total_patients: u64) -> ResultRecord {
    ResultRecord {
        design_method: method,
        enrollment: total_patients as f64 / 10.0,
        primary_endpoint_power: power,
        total_patients,
        n_to_screen: total_patients * 2,
        cost: total_patients as f64 * 10_000.0,
    }
}

pub fn points(values: &[(f64, f64)]) -> Vec<SeriesPoint> {
    values.iter().copied().map(SeriesPoint::from).collect()
}

pub fn powers(records: &[ResultRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|record| record.primary_endpoint_power)
        .collect()
}
