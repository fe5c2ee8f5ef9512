use crate::conf::types::RenderConfig;
use crate::conf::validation::report::ValidationReport;

/// A render config that passed validation, with any warnings it produced.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub config: RenderConfig,
    pub validation: ValidationReport,
}
