pub mod base_commands;
pub mod highlight_cmd;
pub mod plot_cmd;
pub mod process_cmd;
pub mod report_cmd;
pub mod report_format;
pub mod study_loader;
