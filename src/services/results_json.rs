use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::result_record::{DesignMethod, ResultRecord};

#[derive(Error, Debug)]
pub enum ResultsJsonError {
    #[error("failed to read results file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse results json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{method} record {index}: {field} is not a finite number")]
    NonFinite {
        method: DesignMethod,
        index: usize,
        field: &'static str,
    },
    #[error("{method} record {index}: {field} must not be negative (got {value})")]
    Negative {
        method: DesignMethod,
        index: usize,
        field: &'static str,
        value: f64,
    },
    #[error("{method} record {index}: primaryEndpointPower {value} is outside [0, 1]")]
    PowerOutOfRange {
        method: DesignMethod,
        index: usize,
        value: f64,
    },
    #[error("{expected} record {index} has designMethod {found}")]
    MethodMismatch {
        expected: DesignMethod,
        index: usize,
        found: DesignMethod,
    },
}

/// Both result collections returned by the modeling backend for one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudyResults {
    pub optivis: Vec<ResultRecord>,
    pub traditional: Vec<ResultRecord>,
}

#[derive(Debug, Deserialize)]
struct ResponseRecord {
    #[serde(rename = "OPTIVIS", default)]
    optivis: Vec<ResultRecordJson>,
    #[serde(rename = "TRADITIONAL", default)]
    traditional: Vec<ResultRecordJson>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultRecordJson {
    design_method: DesignMethodJson,
    enrollment: f64,
    primary_endpoint_power: f64,
    total_patients: u64,
    n_to_screen: u64,
    cost: f64,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum DesignMethodJson {
    Optivis,
    Traditional,
}

impl From<DesignMethodJson> for DesignMethod {
    fn from(value: DesignMethodJson) -> Self {
        match value {
            DesignMethodJson::Optivis => DesignMethod::Optivis,
            DesignMethodJson::Traditional => DesignMethod::Traditional,
        }
    }
}

pub fn load_results_from_json_file<P: AsRef<Path>>(path: P) -> Result<StudyResults, ResultsJsonError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let results = deserialize_results_from_json_str(&contents)?;
    info!(
        path = %path.display(),
        optivis = results.optivis.len(),
        traditional = results.traditional.len(),
        "loaded simulation results"
    );
    Ok(results)
}

/// Parses a backend response and rejects records the pipeline cannot rank:
/// non-finite or negative numbers, powers outside `[0, 1]`, and records
/// filed under the wrong design method.
pub fn deserialize_results_from_json_str(input: &str) -> Result<StudyResults, ResultsJsonError> {
    let response: ResponseRecord = serde_json::from_str(input)?;
    Ok(StudyResults {
        optivis: convert_records(response.optivis, DesignMethod::Optivis)?,
        traditional: convert_records(response.traditional, DesignMethod::Traditional)?,
    })
}

fn convert_records(
    records: Vec<ResultRecordJson>,
    expected: DesignMethod,
) -> Result<Vec<ResultRecord>, ResultsJsonError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record_from_json(record, expected, index))
        .collect()
}

fn record_from_json(
    record: ResultRecordJson,
    expected: DesignMethod,
    index: usize,
) -> Result<ResultRecord, ResultsJsonError> {
    let found = DesignMethod::from(record.design_method);
    if found != expected {
        return Err(ResultsJsonError::MethodMismatch {
            expected,
            index,
            found,
        });
    }

    let enrollment = checked_amount(record.enrollment, expected, index, "enrollment")?;
    let cost = checked_amount(record.cost, expected, index, "cost")?;
    let power = record.primary_endpoint_power;
    if !power.is_finite() {
        return Err(ResultsJsonError::NonFinite {
            method: expected,
            index,
            field: "primaryEndpointPower",
        });
    }
    if !(0.0..=1.0).contains(&power) {
        return Err(ResultsJsonError::PowerOutOfRange {
            method: expected,
            index,
            value: power,
        });
    }

    Ok(ResultRecord {
        design_method: found,
        enrollment,
        primary_endpoint_power: power,
        total_patients: record.total_patients,
        n_to_screen: record.n_to_screen,
        cost,
    })
}

fn checked_amount(
    value: f64,
    method: DesignMethod,
    index: usize,
    field: &'static str,
) -> Result<f64, ResultsJsonError> {
    if !value.is_finite() {
        return Err(ResultsJsonError::NonFinite {
            method,
            index,
            field,
        });
    }
    if value < 0.0 {
        return Err(ResultsJsonError::Negative {
            method,
            index,
            field,
            value,
        });
    }
    Ok(value)
}
