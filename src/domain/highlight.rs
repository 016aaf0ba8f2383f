use crate::domain::series::ProjectionKind;

/// The synchronized highlight for one chart. `None` on either side means
/// there is nothing to highlight for that design method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSelection {
    pub projection: ProjectionKind,
    pub optivis: Option<usize>,
    pub traditional: Option<usize>,
}

impl HighlightSelection {
    pub fn none(projection: ProjectionKind) -> Self {
        Self {
            projection,
            optivis: None,
            traditional: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.optivis.is_some() && self.traditional.is_some()
    }
}
