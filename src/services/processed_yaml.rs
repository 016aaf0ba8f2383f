use std::io::{self, Write};

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::highlight::HighlightSelection;
use crate::domain::series::SeriesPair;
use crate::services::processed_study_data::ProcessedStudyData;

#[derive(Serialize)]
struct ProcessedRecord<'a> {
    generated_on: String,
    nominal_power: f64,
    charts: Vec<ChartRecord<'a>>,
}

#[derive(Serialize)]
struct ChartRecord<'a> {
    projection: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    series: &'a SeriesPair,
    highlight: HighlightRecord,
}

#[derive(Serialize)]
struct HighlightRecord {
    optivis: Option<usize>,
    traditional: Option<usize>,
}

/// Writes every chart's series pair together with its highlight as YAML.
/// Charts appear in the order of `highlights`.
pub fn serialize_processed_to_yaml<W: Write>(
    writer: &mut W,
    data: &ProcessedStudyData,
    highlights: &[HighlightSelection],
    nominal_power: f64,
    generated_on: NaiveDate,
) -> io::Result<()> {
    let record = ProcessedRecord {
        generated_on: generated_on.format("%Y-%m-%d").to_string(),
        nominal_power,
        charts: highlights
            .iter()
            .map(|selection| chart_record(data, selection))
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn chart_record<'a>(data: &'a ProcessedStudyData, selection: &HighlightSelection) -> ChartRecord<'a> {
    let kind = selection.projection;
    ChartRecord {
        projection: kind.key(),
        x_label: kind.x_label(),
        y_label: kind.y_label(),
        series: data.series(kind),
        highlight: HighlightRecord {
            optivis: selection.optivis,
            traditional: selection.traditional,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::settings::DashboardSettings;
    use crate::services::highlight::select_all_highlights;
    use crate::test_support::{optivis_record, traditional_record};

    #[test]
    fn serialize_processed_to_yaml_writes_charts_and_highlights() {
        let data = ProcessedStudyData::from_results(
            &[optivis_record(0.8, 200), optivis_record(0.7, 150)],
            &[traditional_record(0.79, 250)],
        );
        let settings = DashboardSettings::new();
        let highlights = select_all_highlights(&data, &settings);

        let mut buf = Vec::new();
        serialize_processed_to_yaml(
            &mut buf,
            &data,
            &highlights,
            settings.nominal_power_or_default(),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        )
        .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("generated_on: 2026-03-02"));
        assert!(output.contains("nominal_power: 0.8"));
        assert!(output.contains("projection: sample_size_vs_screen"));
        assert!(output.contains("projection: enrollment_vs_power"));
        assert!(output.contains("projection: sample_size_vs_cost"));
        assert!(output.contains("optivis: 1"));
        assert!(output.contains("traditional: 0"));
        assert!(output.contains("x: 200.0"));
    }

    #[test]
    fn serialize_processed_to_yaml_writes_null_highlights_for_empty_data() {
        let data = ProcessedStudyData::from_results(&[], &[traditional_record(0.79, 250)]);
        let highlights = select_all_highlights(&data, &DashboardSettings::new());

        let mut buf = Vec::new();
        serialize_processed_to_yaml(
            &mut buf,
            &data,
            &highlights,
            0.8,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        )
        .unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("optivis: []"));
        assert!(output.contains("optivis: null"));
    }
}
