use crate::commands::base_commands::Commands;
use crate::commands::study_loader::{load_study, CommandError};
use optivis::domain::highlight::HighlightSelection;
use optivis::domain::series::{ProjectionKind, SeriesPoint};
use optivis::services::highlight::select_highlight;
use optivis::services::processed_study_data::ProcessedStudyData;

pub fn highlight_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Highlight {
        input,
        config,
        projection,
        target_x,
        nominal_power,
    } = cmd
    {
        let kind = ProjectionKind::from(projection);
        let mut study = load_study(&input, config.as_deref())?;
        if target_x.is_some() {
            study.settings.target_x.set(kind, target_x);
        }
        if nominal_power.is_some() {
            study.settings.nominal_power = nominal_power;
        }

        let selection = select_highlight(&study.data, kind, &study.settings);
        println!("{}", format_highlight(&study.data, &selection));
    }
    Ok(())
}

pub fn format_highlight(data: &ProcessedStudyData, selection: &HighlightSelection) -> String {
    let pair = data.series(selection.projection);
    [
        format!("Chart: {}", selection.projection.title()),
        format_side("OPTIVIS", selection.optivis, &pair.optivis),
        format_side("Traditional", selection.traditional, &pair.traditional),
    ]
    .join("\n")
}

fn format_side(label: &str, index: Option<usize>, series: &[SeriesPoint]) -> String {
    match index.and_then(|index| series.get(index).map(|point| (index, point))) {
        Some((index, point)) => format!(
            "{label} index: {index} (x={:.2}, y={:.2})",
            point.x, point.y
        ),
        None => format!("{label} index: none"),
    }
}
