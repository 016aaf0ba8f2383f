use crate::commands::base_commands::Commands;
use crate::commands::study_loader::{load_study, CommandError};
use optivis::services::chart_plot::write_chart_pngs;
use optivis::services::highlight::select_all_highlights;

pub fn plot_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Plot {
        input,
        config,
        output,
    } = cmd
    {
        let study = load_study(&input, config.as_deref())?;
        let highlights = select_all_highlights(&study.data, &study.settings);
        let paths = write_chart_pngs(&output, &study.data, &highlights, study.settings.chart)?;
        for path in paths {
            println!("Chart written to {path}");
        }
    }
    Ok(())
}
