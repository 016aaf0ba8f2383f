use optivis::domain::result_record::{DesignMethod, ResultRecord};
use optivis::domain::series::{ProjectionKind, SeriesPoint};
use optivis::domain::settings::DashboardSettings;
use optivis::services::default_power::locate_default_index;
use optivis::services::highlight::select_highlight;
use optivis::services::nearest_point::closest_by_y;
use optivis::services::processed_study_data::ProcessedStudyData;
use optivis::services::result_filter::filter_results;
use optivis::services::results_json::deserialize_results_from_json_str;
use optivis::services::series_projection::project;

fn record(method: DesignMethod, power: f64, total_patients: u64) -> ResultRecord {
    ResultRecord {
        design_method: method,
        enrollment: total_patients as f64 / 10.0,
        primary_endpoint_power: power,
        total_patients,
        n_to_screen: total_patients * 3,
        cost: total_patients as f64 * 10_000.0,
    }
}

#[test]
fn filtered_optivis_defaults_to_exact_nominal_power() {
    let optivis: Vec<ResultRecord> = [(0.5, 100), (0.65, 150), (0.8, 200), (0.9, 250), (0.97, 300)]
        .into_iter()
        .map(|(power, patients)| record(DesignMethod::Optivis, power, patients))
        .collect();

    let filtered = filter_results(&optivis);
    let powers: Vec<f64> = filtered.iter().map(|r| r.primary_endpoint_power).collect();
    assert_eq!(powers, vec![0.65, 0.8, 0.9]);
    assert_eq!(locate_default_index(&filtered, Some(0.8)), 1);
}

#[test]
fn traditional_highlight_syncs_to_optivis_power() {
    let optivis = filter_results(&[
        record(DesignMethod::Optivis, 0.65, 150),
        record(DesignMethod::Optivis, 0.8, 200),
    ]);
    let optivis_power = project(&optivis, ProjectionKind::EnrollmentVsPower);
    assert_eq!(optivis_power[1].y, 0.8);

    let traditional = vec![
        SeriesPoint::new(90.0, 0.7),
        SeriesPoint::new(140.0, 0.79),
        SeriesPoint::new(210.0, 0.88),
    ];
    assert_eq!(closest_by_y(&traditional, optivis_power[1].y), Some(1));
    assert_eq!(closest_by_y(&[], 0.8), None);
}

#[test]
fn cost_projection_reports_millions() {
    let mut costly = record(DesignMethod::Optivis, 0.8, 120);
    costly.cost = 2_500_000.0;

    let series = project(&[costly], ProjectionKind::SampleSizeVsCost);
    assert_eq!(series, vec![SeriesPoint::new(120.0, 2.5)]);
}

#[test]
fn backend_response_flows_through_to_highlight() {
    let response = r#"{
        "OPTIVIS": [
            {"designMethod": "OPTIVIS", "enrollment": 20, "primaryEndpointPower": 0.8, "totalPatients": 200, "nToScreen": 400, "cost": 2000000},
            {"designMethod": "OPTIVIS", "enrollment": 12, "primaryEndpointPower": 0.62, "totalPatients": 120, "nToScreen": 240, "cost": 1200000}
        ],
        "TRADITIONAL": [
            {"designMethod": "TRADITIONAL", "enrollment": 26, "primaryEndpointPower": 0.81, "totalPatients": 260, "nToScreen": 780, "cost": 2600000}
        ]
    }"#;

    let results = deserialize_results_from_json_str(response).unwrap();
    let data = ProcessedStudyData::from_results(&results.optivis, &results.traditional);
    let selection = select_highlight(
        &data,
        ProjectionKind::SampleSizeVsScreen,
        &DashboardSettings::new(),
    );

    assert_eq!(selection.optivis, Some(1));
    assert_eq!(selection.traditional, Some(0));
    let screen = data.series(ProjectionKind::SampleSizeVsScreen);
    assert_eq!(screen.optivis[1], SeriesPoint::new(200.0, 400.0));
    assert_eq!(screen.traditional[0], SeriesPoint::new(260.0, 780.0));
}
