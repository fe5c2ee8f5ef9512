use crate::conf::types::ValuesFormat;
use crate::conf::validation::ValidationReport;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO
    //-------------------------------------------------------------------------
    #[error("failed to read values file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported values file extension: {path}")]
    #[diagnostic(help("values files must end in .yaml, .yml, .toml or .hcl"))]
    UnsupportedFormat { path: PathBuf },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("invalid {format} values file: {path}\n\n{reason}")]
    Parse {
        path: PathBuf,
        format: ValuesFormat,
        reason: String,
    },

    #[error("invalid chart values: {reason}")]
    Schema { reason: String },

    //-------------------------------------------------------------------------
    // Overrides
    //-------------------------------------------------------------------------
    #[error("invalid --set override '{raw}': {reason}")]
    #[diagnostic(help("overrides take the form path.to.key=value, escape literal dots as \\."))]
    InvalidOverride { raw: String, reason: String },

    //-------------------------------------------------------------------------
    // Validation
    //-------------------------------------------------------------------------
    #[error("values validation failed ({} errors)", .report.errors.len())]
    Validation { report: ValidationReport },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, format: ValuesFormat, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            format,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_override(raw: &str, reason: &str) -> Self {
        Self::InvalidOverride {
            raw: raw.to_owned(),
            reason: reason.to_owned(),
        }
    }
}
