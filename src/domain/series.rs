use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
}

impl SeriesPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for SeriesPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// The three chart dimensions a result record can be projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// `(total_patients, n_to_screen)`
    SampleSizeVsScreen,
    /// `(enrollment, primary_endpoint_power)`
    EnrollmentVsPower,
    /// `(total_patients, cost in millions)`
    SampleSizeVsCost,
}

impl ProjectionKind {
    pub const ALL: [ProjectionKind; 3] = [
        ProjectionKind::SampleSizeVsScreen,
        ProjectionKind::EnrollmentVsPower,
        ProjectionKind::SampleSizeVsCost,
    ];

    /// Stable snake_case key, used in settings files, YAML output and file names.
    pub fn key(&self) -> &'static str {
        match self {
            ProjectionKind::SampleSizeVsScreen => "sample_size_vs_screen",
            ProjectionKind::EnrollmentVsPower => "enrollment_vs_power",
            ProjectionKind::SampleSizeVsCost => "sample_size_vs_cost",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProjectionKind::SampleSizeVsScreen => "Sample Size vs Patients Screened",
            ProjectionKind::EnrollmentVsPower => "Enrollment vs Power",
            ProjectionKind::SampleSizeVsCost => "Sample Size vs Cost",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ProjectionKind::SampleSizeVsScreen | ProjectionKind::SampleSizeVsCost => {
                "Total patients"
            }
            ProjectionKind::EnrollmentVsPower => "Enrollment",
        }
    }

    pub fn y_label(&self) -> &'static str {
        match self {
            ProjectionKind::SampleSizeVsScreen => "Patients to screen",
            ProjectionKind::EnrollmentVsPower => "Primary endpoint power",
            ProjectionKind::SampleSizeVsCost => "Cost (millions)",
        }
    }
}

/// One projected series per design method for the same chart.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SeriesPair {
    pub optivis: Vec<SeriesPoint>,
    pub traditional: Vec<SeriesPoint>,
}

impl SeriesPair {
    pub fn is_empty(&self) -> bool {
        self.optivis.is_empty() && self.traditional.is_empty()
    }
}
