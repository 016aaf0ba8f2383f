use crate::domain::highlight::HighlightSelection;
use crate::domain::result_record::DesignMethod;
use crate::domain::series::ProjectionKind;
use crate::domain::settings::DashboardSettings;
use crate::services::default_power::locate_default_index;
use crate::services::nearest_point::{closest_by_x, closest_by_y};
use crate::services::processed_study_data::ProcessedStudyData;

/// Picks the highlighted OPTIVIS point for one chart and the Traditional
/// point of the same chart whose y is closest to it.
///
/// A target x in `settings` for this chart wins over the nominal power.
/// Each chart matches on its own dependent axis, so the Traditional index
/// can differ between charts.
pub fn select_highlight(
    data: &ProcessedStudyData,
    kind: ProjectionKind,
    settings: &DashboardSettings,
) -> HighlightSelection {
    let pair = data.series(kind);
    if pair.optivis.is_empty() {
        return HighlightSelection::none(kind);
    }

    let optivis = match settings.target_x.get(kind) {
        Some(target_x) => closest_by_x(&pair.optivis, target_x),
        None => Some(locate_default_index(
            data.filtered(DesignMethod::Optivis),
            settings.nominal_power,
        )),
    };

    let traditional = optivis
        .and_then(|index| pair.optivis.get(index))
        .and_then(|point| closest_by_y(&pair.traditional, point.y));

    HighlightSelection {
        projection: kind,
        optivis,
        traditional,
    }
}

pub fn select_all_highlights(
    data: &ProcessedStudyData,
    settings: &DashboardSettings,
) -> Vec<HighlightSelection> {
    ProjectionKind::ALL
        .iter()
        .map(|kind| select_highlight(data, *kind, settings))
        .collect()
}
