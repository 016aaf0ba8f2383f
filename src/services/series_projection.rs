use crate::domain::result_record::ResultRecord;
use crate::domain::series::{ProjectionKind, SeriesPoint};

const DOLLARS_PER_MILLION: f64 = 1_000_000.0;

/// Maps each record onto the chart dimension named by `kind`.
/// Output order and length follow `filtered`.
pub fn project(filtered: &[ResultRecord], kind: ProjectionKind) -> Vec<SeriesPoint> {
    filtered
        .iter()
        .map(|record| project_record(record, kind))
        .collect()
}

pub fn project_record(record: &ResultRecord, kind: ProjectionKind) -> SeriesPoint {
    match kind {
        ProjectionKind::SampleSizeVsScreen => SeriesPoint::new(
            record.total_patients as f64,
            record.n_to_screen as f64,
        ),
        ProjectionKind::EnrollmentVsPower => {
            SeriesPoint::new(record.enrollment, record.primary_endpoint_power)
        }
        ProjectionKind::SampleSizeVsCost => SeriesPoint::new(
            record.total_patients as f64,
            record.cost / DOLLARS_PER_MILLION,
        ),
    }
}
