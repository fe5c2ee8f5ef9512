//! Ingress rendering.
//!
//! [`render`] turns a [`RenderConfig`] into the `binder` Ingress document, or
//! nothing when the ingress is disabled. It is a pure function: no IO, no
//! validation, no shared state. Callers are expected to validate first (see
//! [`crate::conf::load_render_config`]).

mod emit;
mod types;

pub use emit::{OutputFormat, RenderError, emit};
pub use types::*;

use crate::conf::RenderConfig;
use std::collections::BTreeMap;
use tracing::debug;

pub const INGRESS_NAME: &str = "binder";
pub const BACKEND_SERVICE: &str = "binder";
pub const BACKEND_PORT: u16 = 8585;
pub const ROOT_PATH: &str = "/";
pub const TLS_ACME_ANNOTATION: &str = "kubernetes.io/tls-acme";

pub fn render(config: &RenderConfig) -> Option<Ingress> {
    if !config.ingress_enabled {
        debug!("ingress disabled, nothing to render");
        return None;
    }

    let annotations = annotations(config);
    let tls = config.tls_enabled().then(|| {
        vec![IngressTls {
            secret_name: config.tls_secret_name(),
            hosts: vec![config.host.clone()],
        }]
    });

    debug!(
        host = %config.host,
        annotations = annotations.len(),
        tls = tls.is_some(),
        "rendered ingress"
    );

    Some(Ingress {
        api_version: config.api_version,
        kind: INGRESS_KIND.to_owned(),
        metadata: ObjectMeta {
            name: INGRESS_NAME.to_owned(),
            annotations: (!annotations.is_empty()).then_some(annotations),
        },
        spec: IngressSpec {
            rules: vec![root_rule(config)],
            tls,
        },
    })
}

/// User annotations, plus the ACME marker kube-lego watches for.
fn annotations(config: &RenderConfig) -> BTreeMap<String, String> {
    let mut annotations = config.annotations.clone();
    if config.uses_kube_lego() {
        annotations.insert(TLS_ACME_ANNOTATION.to_owned(), "true".to_owned());
    }
    annotations
}

fn root_rule(config: &RenderConfig) -> IngressRule {
    IngressRule {
        host: config.host.clone(),
        http: HttpIngressRuleValue {
            paths: vec![HttpIngressPath::root(config.api_version)],
        },
    }
}
