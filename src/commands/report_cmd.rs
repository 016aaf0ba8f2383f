use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_comparison_report;
use crate::commands::study_loader::{load_study, CommandError};
use optivis::domain::series::ProjectionKind;
use optivis::services::comparison::ComparisonSummary;
use optivis::services::highlight::select_highlight;

pub fn report_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Report {
        input,
        config,
        projection,
    } = cmd
    {
        let kind = ProjectionKind::from(projection);
        let study = load_study(&input, config.as_deref())?;
        let selection = select_highlight(&study.data, kind, &study.settings);
        let summary = ComparisonSummary::from_selection(&study.data, &selection);

        println!(
            "{}",
            format_comparison_report(
                &study.data_source,
                kind,
                study.settings.nominal_power_or_default(),
                summary.as_ref(),
            )
        );
    }
    Ok(())
}
