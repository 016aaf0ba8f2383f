use serde::Serialize;

use crate::domain::highlight::HighlightSelection;
use crate::domain::result_record::{DesignMethod, ResultRecord};
use crate::services::processed_study_data::ProcessedStudyData;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DesignPoint {
    pub primary_endpoint_power: f64,
    pub enrollment: f64,
    pub total_patients: u64,
    pub n_to_screen: u64,
    pub cost_millions: f64,
}

impl From<&ResultRecord> for DesignPoint {
    fn from(record: &ResultRecord) -> Self {
        Self {
            primary_endpoint_power: record.primary_endpoint_power,
            enrollment: record.enrollment,
            total_patients: record.total_patients,
            n_to_screen: record.n_to_screen,
            cost_millions: record.cost / 1_000_000.0,
        }
    }
}

/// Side-by-side view of the two highlighted designs. Savings are
/// Traditional minus OPTIVIS, so positive numbers favour OPTIVIS.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ComparisonSummary {
    pub optivis: DesignPoint,
    pub traditional: DesignPoint,
    pub patients_saved: i64,
    pub screenings_saved: i64,
    pub cost_saved_millions: f64,
    pub enrollment_saved: f64,
    pub sample_size_reduction_percent: f64,
}

impl ComparisonSummary {
    pub fn new(optivis: &ResultRecord, traditional: &ResultRecord) -> Self {
        let optivis = DesignPoint::from(optivis);
        let traditional = DesignPoint::from(traditional);
        let patients_saved = count_saved(traditional.total_patients, optivis.total_patients);
        let sample_size_reduction_percent = if traditional.total_patients == 0 {
            0.0
        } else {
            patients_saved as f64 / traditional.total_patients as f64 * 100.0
        };

        Self {
            patients_saved,
            screenings_saved: count_saved(traditional.n_to_screen, optivis.n_to_screen),
            cost_saved_millions: traditional.cost_millions - optivis.cost_millions,
            enrollment_saved: traditional.enrollment - optivis.enrollment,
            sample_size_reduction_percent,
            optivis,
            traditional,
        }
    }

    /// `None` unless both sides of the selection point at a record.
    pub fn from_selection(data: &ProcessedStudyData, selection: &HighlightSelection) -> Option<Self> {
        let optivis = data
            .filtered(DesignMethod::Optivis)
            .get(selection.optivis?)?;
        let traditional = data
            .filtered(DesignMethod::Traditional)
            .get(selection.traditional?)?;
        Some(Self::new(optivis, traditional))
    }
}

/// `traditional - optivis`, saturating at the `i64` bounds.
fn count_saved(traditional: u64, optivis: u64) -> i64 {
    let difference = i128::from(traditional) - i128::from(optivis);
    i64::try_from(difference).unwrap_or(if difference > 0 { i64::MAX } else { i64::MIN })
}
