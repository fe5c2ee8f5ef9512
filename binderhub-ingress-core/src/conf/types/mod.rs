mod api_version;
mod format;
mod render_config;
mod values;

pub use api_version::*;
pub use format::*;
pub use render_config::*;
pub use values::*;
