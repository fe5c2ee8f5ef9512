use crate::conf::error::ConfigError;
use crate::conf::merge::merge_values;
use crate::conf::overrides::{apply_overrides, parse_override};
use crate::conf::types::{ChartValues, RenderConfig, ValuesFormat};
use crate::conf::validation::{ValidatedConfig, validate_render_config};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Everything the command line contributes to a render.
#[derive(Debug, Clone, Default)]
pub struct LoadRequest {
    /// Values files, applied in order; later files win.
    pub values_files: Vec<PathBuf>,
    /// Raw `--set` assignments, applied after all files.
    pub overrides: Vec<String>,
    pub release_name: Option<String>,
}

/// Load, merge, validate. Fails on any validation error.
pub fn load_render_config(request: &LoadRequest) -> Result<ValidatedConfig, ConfigError> {
    let config = resolve_render_config(request)?;

    //--------------------------------------------------------------------------
    // Semantic validation (aggregate all issues)
    //--------------------------------------------------------------------------
    let validation = validate_render_config(&config);
    if !validation.errors.is_empty() {
        return Err(ConfigError::Validation { report: validation });
    }

    Ok(ValidatedConfig { config, validation })
}

/// Load and merge values into a render config without validating it.
pub fn resolve_render_config(request: &LoadRequest) -> Result<RenderConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let mut doc = Value::Mapping(Mapping::new());
    for path in &request.values_files {
        merge_values(&mut doc, load_values_document(path)?);
    }

    //--------------------------------------------------------------------------
    // Command line overrides
    //--------------------------------------------------------------------------
    let overrides = request
        .overrides
        .iter()
        .map(|raw| parse_override(raw))
        .collect::<Result<Vec<_>, _>>()?;
    apply_overrides(&mut doc, &overrides);

    let values = chart_values(doc)?;
    let config = values.into_render_config(request.release_name.clone());

    info!(
        files = request.values_files.len(),
        overrides = overrides.len(),
        ingress_enabled = config.ingress_enabled,
        "resolved chart values"
    );

    Ok(config)
}

/// Load a single values file into typed chart values.
pub fn load_values(path: &Path) -> Result<ChartValues, ConfigError> {
    chart_values(load_values_document(path)?)
}

/// Load a single values file as an untyped document, ready to be merged.
pub fn load_values_document(path: &Path) -> Result<Value, ConfigError> {
    let format = ValuesFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let doc = match format {
        ValuesFormat::Yaml => serde_yaml::from_str::<Value>(&s)
            .map_err(|e| ConfigError::parse(path, format, e))?,
        ValuesFormat::Toml => {
            toml::from_str::<Value>(&s).map_err(|e| ConfigError::parse(path, format, e))?
        }
        ValuesFormat::Hcl => {
            hcl::from_str::<Value>(&s).map_err(|e| ConfigError::parse(path, format, e))?
        }
    };

    debug!(path = %path.display(), %format, "loaded values file");
    Ok(doc)
}

fn chart_values(doc: Value) -> Result<ChartValues, ConfigError> {
    // An empty file is a null document; treat it as "no values".
    if doc.is_null() {
        return Ok(ChartValues::default());
    }
    serde_yaml::from_value(doc).map_err(|e| ConfigError::Schema {
        reason: e.to_string(),
    })
}
