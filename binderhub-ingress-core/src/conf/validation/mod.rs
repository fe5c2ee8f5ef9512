mod dns;
mod report;
#[cfg(test)]
mod tests;
mod validate;
mod validated_config;

pub use dns::{is_dns1123_label, is_valid_host};
pub use report::*;
pub use validate::*;
pub use validated_config::ValidatedConfig;
