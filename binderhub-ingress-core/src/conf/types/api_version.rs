use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ingress API group/version the rendered manifest targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum IngressApiVersion {
    #[default]
    #[serde(rename = "extensions/v1beta1")]
    ExtensionsV1beta1,
    #[serde(rename = "networking.k8s.io/v1")]
    NetworkingV1,
}

impl IngressApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtensionsV1beta1 => "extensions/v1beta1",
            Self::NetworkingV1 => "networking.k8s.io/v1",
        }
    }
}

impl fmt::Display for IngressApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngressApiVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extensions/v1beta1" => Ok(Self::ExtensionsV1beta1),
            "networking.k8s.io/v1" => Ok(Self::NetworkingV1),
            _ => Err(format!("unsupported ingress apiVersion: {s}")),
        }
    }
}
