mod error;
mod loader;
mod merge;
mod overrides;
#[cfg(test)]
mod tests;
pub mod types;
pub mod validation;

pub use error::ConfigError;
pub use loader::{
    LoadRequest, load_render_config, load_values, load_values_document, resolve_render_config,
};
pub use overrides::{Override, apply_overrides, parse_override};
pub use types::{ChartValues, IngressApiVersion, RenderConfig};
pub use validation::ValidatedConfig;
