use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignMethod {
    Optivis,
    Traditional,
}

impl DesignMethod {
    /// Name used by the modeling backend for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            DesignMethod::Optivis => "OPTIVIS",
            DesignMethod::Traditional => "TRADITIONAL",
        }
    }
}

impl fmt::Display for DesignMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One simulation-run outcome for one design method.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub design_method: DesignMethod,
    pub enrollment: f64,
    pub primary_endpoint_power: f64,
    pub total_patients: u64,
    pub n_to_screen: u64,
    pub cost: f64,
}
