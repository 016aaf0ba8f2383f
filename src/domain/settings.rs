use crate::domain::series::ProjectionKind;

pub const DEFAULT_NOMINAL_POWER: f64 = 0.8;

/// The power a highlight targets when the user has not chosen one.
pub fn resolve_nominal_power(nominal_power: Option<f64>) -> f64 {
    nominal_power.unwrap_or(DEFAULT_NOMINAL_POWER)
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TargetX {
    pub sample_size_vs_screen: Option<f64>,
    pub enrollment_vs_power: Option<f64>,
    pub sample_size_vs_cost: Option<f64>,
}

impl TargetX {
    pub fn get(&self, kind: ProjectionKind) -> Option<f64> {
        match kind {
            ProjectionKind::SampleSizeVsScreen => self.sample_size_vs_screen,
            ProjectionKind::EnrollmentVsPower => self.enrollment_vs_power,
            ProjectionKind::SampleSizeVsCost => self.sample_size_vs_cost,
        }
    }

    pub fn set(&mut self, kind: ProjectionKind, value: Option<f64>) {
        match kind {
            ProjectionKind::SampleSizeVsScreen => self.sample_size_vs_screen = value,
            ProjectionKind::EnrollmentVsPower => self.enrollment_vs_power = value,
            ProjectionKind::SampleSizeVsCost => self.sample_size_vs_cost = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
        }
    }
}

/// User selections that drive highlighting and chart output.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashboardSettings {
    pub nominal_power: Option<f64>,
    pub target_x: TargetX,
    pub chart: ChartSize,
}

impl DashboardSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nominal_power_or_default(&self) -> f64 {
        resolve_nominal_power(self.nominal_power)
    }
}
