use tracing::debug;

use crate::domain::result_record::{DesignMethod, ResultRecord};
use crate::domain::series::{ProjectionKind, SeriesPair};
use crate::services::result_filter::filter_results;
use crate::services::series_projection::project;

/// Filtered records and chart-ready series for both design methods.
///
/// When the filtered OPTIVIS set is empty every series is empty, including
/// the Traditional ones, even if Traditional records survived the filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProcessedStudyData {
    optivis: Vec<ResultRecord>,
    traditional: Vec<ResultRecord>,
    sample_size_vs_screen: SeriesPair,
    enrollment_vs_power: SeriesPair,
    sample_size_vs_cost: SeriesPair,
}

impl ProcessedStudyData {
    pub fn from_results(optivis: &[ResultRecord], traditional: &[ResultRecord]) -> Self {
        let optivis = filter_results(optivis);
        let traditional = filter_results(traditional);
        debug!(
            optivis = optivis.len(),
            traditional = traditional.len(),
            "filtered result sets"
        );

        if optivis.is_empty() {
            return Self {
                optivis,
                traditional,
                ..Self::default()
            };
        }

        let pair = |kind| SeriesPair {
            optivis: project(&optivis, kind),
            traditional: project(&traditional, kind),
        };
        Self {
            sample_size_vs_screen: pair(ProjectionKind::SampleSizeVsScreen),
            enrollment_vs_power: pair(ProjectionKind::EnrollmentVsPower),
            sample_size_vs_cost: pair(ProjectionKind::SampleSizeVsCost),
            optivis,
            traditional,
        }
    }

    pub fn filtered(&self, method: DesignMethod) -> &[ResultRecord] {
        match method {
            DesignMethod::Optivis => &self.optivis,
            DesignMethod::Traditional => &self.traditional,
        }
    }

    pub fn series(&self, kind: ProjectionKind) -> &SeriesPair {
        match kind {
            ProjectionKind::SampleSizeVsScreen => &self.sample_size_vs_screen,
            ProjectionKind::EnrollmentVsPower => &self.enrollment_vs_power,
            ProjectionKind::SampleSizeVsCost => &self.sample_size_vs_cost,
        }
    }

    pub fn is_empty(&self) -> bool {
        ProjectionKind::ALL
            .iter()
            .all(|kind| self.series(*kind).is_empty())
    }
}
