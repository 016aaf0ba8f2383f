use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::series::ProjectionKind;
use crate::domain::settings::{ChartSize, DashboardSettings, TargetX};

#[derive(Error, Debug)]
pub enum SettingsYamlError {
    #[error("failed to read settings file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid nominal_power in {path}: {value} is not a finite number")]
    NonFiniteNominalPower { path: PathBuf, value: f64 },
    #[error("invalid target_x.{projection} in {path}: {value} is not a finite number")]
    NonFiniteTarget {
        path: PathBuf,
        projection: &'static str,
        value: f64,
    },
    #[error("invalid chart size in {path}: {width}x{height}")]
    InvalidChartSize { path: PathBuf, width: u32, height: u32 },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsRecord {
    nominal_power: Option<f64>,
    target_x: Option<TargetXRecord>,
    chart: Option<ChartRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetXRecord {
    sample_size_vs_screen: Option<f64>,
    enrollment_vs_power: Option<f64>,
    sample_size_vs_cost: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChartRecord {
    width: Option<u32>,
    height: Option<u32>,
}

/// Loads dashboard settings from a YAML file. Every key is optional; missing
/// keys fall back to [`DashboardSettings::default`].
///
/// # Errors
/// - I/O or YAML syntax failures, and unknown keys.
/// - A non-finite `nominal_power` or `target_x` value.
/// - A zero chart dimension.
///
/// Finite targets outside the data range are accepted; highlighting falls
/// back to the closest available point.
pub fn load_settings_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<DashboardSettings, SettingsYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SettingsYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = deserialize_settings_from_yaml_str(&contents, path)?;
    info!(path = %path.display(), "loaded dashboard settings");
    Ok(settings)
}

/// Loads settings when a path is given, otherwise returns the defaults.
pub fn load_settings_if_provided(
    path: Option<&str>,
) -> Result<DashboardSettings, SettingsYamlError> {
    match path {
        Some(path) => load_settings_from_yaml_file(path),
        None => Ok(DashboardSettings::new()),
    }
}

pub fn deserialize_settings_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<DashboardSettings, SettingsYamlError> {
    let record: SettingsRecord = if input.trim().is_empty() {
        SettingsRecord::default()
    } else {
        serde_yaml::from_str(input).map_err(|source| SettingsYamlError::Parse {
            path: origin_path.to_path_buf(),
            source,
        })?
    };

    if let Some(value) = record.nominal_power {
        if !value.is_finite() {
            return Err(SettingsYamlError::NonFiniteNominalPower {
                path: origin_path.to_path_buf(),
                value,
            });
        }
    }

    let target_record = record.target_x.unwrap_or_default();
    let mut target_x = TargetX::default();
    for (kind, value) in [
        (ProjectionKind::SampleSizeVsScreen, target_record.sample_size_vs_screen),
        (ProjectionKind::EnrollmentVsPower, target_record.enrollment_vs_power),
        (ProjectionKind::SampleSizeVsCost, target_record.sample_size_vs_cost),
    ] {
        if let Some(value) = value.filter(|value| !value.is_finite()) {
            return Err(SettingsYamlError::NonFiniteTarget {
                path: origin_path.to_path_buf(),
                projection: kind.key(),
                value,
            });
        }
        target_x.set(kind, value);
    }

    let default_chart = ChartSize::default();
    let chart = match record.chart {
        Some(chart) => ChartSize {
            width: chart.width.unwrap_or(default_chart.width),
            height: chart.height.unwrap_or(default_chart.height),
        },
        None => default_chart,
    };
    if chart.width == 0 || chart.height == 0 {
        return Err(SettingsYamlError::InvalidChartSize {
            path: origin_path.to_path_buf(),
            width: chart.width,
            height: chart.height,
        });
    }

    Ok(DashboardSettings {
        nominal_power: record.nominal_power,
        target_x,
        chart,
    })
}
