use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use optivis::domain::series::ProjectionKind;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter and project simulation results into chart series (YAML)
    Process {
        /// Simulation results JSON returned by the modeling backend
        #[arg(short, long)]
        input: String,
        /// Optional dashboard settings YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Print the highlighted OPTIVIS / Traditional point pair for one chart
    Highlight {
        /// Simulation results JSON returned by the modeling backend
        #[arg(short, long)]
        input: String,
        /// Optional dashboard settings YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Chart to highlight
        #[arg(short = 'k', long, value_enum, default_value_t = ProjectionArg::EnrollmentVsPower)]
        projection: ProjectionArg,
        /// Highlight the OPTIVIS point closest to this x value
        #[arg(short = 'x', long, value_parser = parse_finite)]
        target_x: Option<f64>,
        /// Nominal power used when no x value is given (default 0.8)
        #[arg(short = 'p', long, value_parser = parse_finite)]
        nominal_power: Option<f64>,
    },
    /// Print a comparison table for the highlighted designs
    Report {
        /// Simulation results JSON returned by the modeling backend
        #[arg(short, long)]
        input: String,
        /// Optional dashboard settings YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Chart whose highlight is compared
        #[arg(short = 'k', long, value_enum, default_value_t = ProjectionArg::EnrollmentVsPower)]
        projection: ProjectionArg,
    },
    /// Render all three comparison charts as PNG files
    Plot {
        /// Simulation results JSON returned by the modeling backend
        #[arg(short, long)]
        input: String,
        /// Optional dashboard settings YAML
        #[arg(short, long)]
        config: Option<String>,
        /// Output path prefix; one `<prefix>.<chart>.png` is written per chart
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProjectionArg {
    SampleSizeVsScreen,
    EnrollmentVsPower,
    SampleSizeVsCost,
}

impl From<ProjectionArg> for ProjectionKind {
    fn from(value: ProjectionArg) -> Self {
        match value {
            ProjectionArg::SampleSizeVsScreen => ProjectionKind::SampleSizeVsScreen,
            ProjectionArg::EnrollmentVsPower => ProjectionKind::EnrollmentVsPower,
            ProjectionArg::SampleSizeVsCost => ProjectionKind::SampleSizeVsCost,
        }
    }
}

fn parse_finite(value: &str) -> Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("`{value}` is not a finite number"))
    }
}
