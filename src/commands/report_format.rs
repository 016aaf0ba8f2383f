use optivis::domain::series::ProjectionKind;
use optivis::services::comparison::ComparisonSummary;

pub fn format_comparison_report(
    data_source: &str,
    kind: ProjectionKind,
    nominal_power: f64,
    summary: Option<&ComparisonSummary>,
) -> String {
    let mut lines = Vec::new();
    lines.push("Design Comparison Report".to_string());
    lines.push(format!("Data source: {data_source}"));
    lines.push(format!("Chart: {}", kind.title()));
    lines.push(format!("Nominal power: {nominal_power:.2}"));
    lines.push(String::new());

    let Some(summary) = summary else {
        lines.push("No comparison available: no highlighted point for both designs".to_string());
        return lines.join("\n");
    };

    lines.push("Metric | OPTIVIS | Traditional | Saved".to_string());
    lines.push("-------|---------|-------------|------".to_string());
    lines.push(format!(
        "Power | {:.3} | {:.3} | -",
        summary.optivis.primary_endpoint_power, summary.traditional.primary_endpoint_power
    ));
    lines.push(format!(
        "Total patients | {} | {} | {}",
        summary.optivis.total_patients, summary.traditional.total_patients, summary.patients_saved
    ));
    lines.push(format!(
        "Patients to screen | {} | {} | {}",
        summary.optivis.n_to_screen, summary.traditional.n_to_screen, summary.screenings_saved
    ));
    lines.push(format!(
        "Enrollment | {:.2} | {:.2} | {:.2}",
        summary.optivis.enrollment, summary.traditional.enrollment, summary.enrollment_saved
    ));
    lines.push(format!(
        "Cost (millions) | {:.2} | {:.2} | {:.2}",
        summary.optivis.cost_millions, summary.traditional.cost_millions, summary.cost_saved_millions
    ));
    lines.push(String::new());
    lines.push(format!(
        "Sample size reduction: {:.2}%",
        summary.sample_size_reduction_percent
    ));

    lines.join("\n")
}
