use chrono::Local;

use crate::commands::base_commands::Commands;
use crate::commands::study_loader::{load_study, CommandError};
use optivis::services::highlight::select_all_highlights;
use optivis::services::processed_yaml::serialize_processed_to_yaml;

pub fn process_command(cmd: Commands) -> Result<(), CommandError> {
    if let Commands::Process {
        input,
        config,
        output,
    } = cmd
    {
        let study = load_study(&input, config.as_deref())?;
        let highlights = select_all_highlights(&study.data, &study.settings);

        let mut buffer = Vec::new();
        serialize_processed_to_yaml(
            &mut buffer,
            &study.data,
            &highlights,
            study.settings.nominal_power_or_default(),
            Local::now().date_naive(),
        )
        .map_err(CommandError::Serialize)?;

        std::fs::write(&output, buffer).map_err(|source| CommandError::Write {
            path: output.clone(),
            source,
        })?;
        println!("Processed series from {} written to {output}", study.data_source);
    }
    Ok(())
}
