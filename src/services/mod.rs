pub mod chart_plot;
pub mod comparison;
pub mod default_power;
pub mod highlight;
pub mod nearest_point;
pub mod processed_study_data;
pub mod processed_yaml;
pub mod result_filter;
pub mod results_json;
pub mod series_projection;
pub mod settings_yaml;
