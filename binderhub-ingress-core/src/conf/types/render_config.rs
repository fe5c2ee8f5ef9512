use crate::conf::types::{IngressApiVersion, KUBE_LEGO};
use serde::Serialize;
use std::collections::BTreeMap;

/// Prefix of the secret kube-lego writes the issued certificate into.
pub const TLS_SECRET_PREFIX: &str = "kubelego-tls-binder-";

/// Flat configuration record handed to the renderer.
///
/// Built once per render from the chart values and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    pub ingress_enabled: bool,
    pub https_enabled: bool,
    pub https_type: String,
    pub annotations: BTreeMap<String, String>,
    pub host: String,
    pub release_name: String,
    pub api_version: IngressApiVersion,
}

impl RenderConfig {
    pub fn uses_kube_lego(&self) -> bool {
        self.https_type == KUBE_LEGO
    }

    /// TLS is only terminated when HTTPS is on and kube-lego provisions the cert.
    pub fn tls_enabled(&self) -> bool {
        self.https_enabled && self.uses_kube_lego()
    }

    pub fn tls_secret_name(&self) -> String {
        format!("{TLS_SECRET_PREFIX}{}", self.release_name)
    }
}
