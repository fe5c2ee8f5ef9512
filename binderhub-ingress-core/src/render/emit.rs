use crate::render::Ingress;
use clap::ValueEnum;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize manifest as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to serialize manifest as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize a rendered manifest. YAML output starts with a `---` marker so it
/// can be concatenated with other manifests.
pub fn emit(ingress: &Ingress, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Yaml => Ok(format!("---\n{}", serde_yaml::to_string(ingress)?)),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(ingress)?;
            s.push('\n');
            Ok(s)
        }
    }
}
