use std::io;

use thiserror::Error;
use tracing::{info, warn};

use optivis::domain::settings::DashboardSettings;
use optivis::services::chart_plot::ChartPlotError;
use optivis::services::processed_study_data::ProcessedStudyData;
use optivis::services::results_json::{load_results_from_json_file, ResultsJsonError};
use optivis::services::settings_yaml::{load_settings_if_provided, SettingsYamlError};

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Results(#[from] ResultsJsonError),
    #[error(transparent)]
    Settings(#[from] SettingsYamlError),
    #[error(transparent)]
    Plot(#[from] ChartPlotError),
    #[error("failed to serialize processed data: {0}")]
    Serialize(io::Error),
    #[error("failed to write output file {path}: {source}")]
    Write { path: String, source: io::Error },
}

pub struct LoadedStudy {
    pub data_source: String,
    pub data: ProcessedStudyData,
    pub settings: DashboardSettings,
}

/// Reads the backend response and settings, then runs filtering and projection.
pub fn load_study(input: &str, config: Option<&str>) -> Result<LoadedStudy, CommandError> {
    let settings = load_settings_if_provided(config)?;
    let results = load_results_from_json_file(input)?;
    let data = ProcessedStudyData::from_results(&results.optivis, &results.traditional);
    if data.is_empty() {
        warn!(path = %input, "no OPTIVIS results within the valid power range; charts will be empty");
    } else {
        info!(path = %input, "processed study data");
    }

    Ok(LoadedStudy {
        data_source: data_source_name(input),
        data,
        settings,
    })
}

fn data_source_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_name_strips_directories() {
        assert_eq!(data_source_name("runs/2026/results.json"), "results.json");
        assert_eq!(data_source_name("results.json"), "results.json");
    }
}
