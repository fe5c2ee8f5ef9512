use serde::Serialize;
use std::fmt;
use std::path::Path;

/// On-disk notation of a values file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValuesFormat {
    Yaml,
    Toml,
    Hcl,
}

impl ValuesFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            "hcl" => Some(Self::Hcl),
            _ => None,
        }
    }
}

impl fmt::Display for ValuesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => f.write_str("YAML"),
            Self::Toml => f.write_str("TOML"),
            Self::Hcl => f.write_str("HCL"),
        }
    }
}
