use crate::conf::types::RenderConfig;
use crate::conf::validation::dns::{is_dns1123_label, is_valid_host};
use crate::conf::validation::report::ValidationReport;
use crate::render::TLS_ACME_ANNOTATION;
use tracing::debug;

/// Validate everything the renderer assumes about its input.
///
/// A disabled ingress renders nothing, so nothing is checked.
pub fn validate_render_config(config: &RenderConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.ingress_enabled {
        validate_host(config, &mut report);
        validate_release(config, &mut report);
        validate_annotations(config, &mut report);
        validate_https(config, &mut report);
    }

    debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "validated render config"
    );
    report
}

pub fn validate_host(config: &RenderConfig, report: &mut ValidationReport) {
    if config.host.is_empty() {
        report.missing_host();
    } else if !is_valid_host(&config.host) {
        report.invalid_host(&config.host);
    }
}

/// The release name ends up in the TLS secret name, so it must be a DNS label.
pub fn validate_release(config: &RenderConfig, report: &mut ValidationReport) {
    if config.release_name.is_empty() {
        report.missing_release_name();
        return;
    }

    if !is_dns1123_label(&config.release_name) {
        report.invalid_release_name(&config.release_name);
    }
}

pub fn validate_annotations(config: &RenderConfig, report: &mut ValidationReport) {
    if config.annotations.keys().any(|k| k.is_empty()) {
        report.empty_annotation_key();
    }

    if config.uses_kube_lego() {
        if let Some(value) = config.annotations.get(TLS_ACME_ANNOTATION) {
            if value != "true" {
                report.tls_acme_annotation_overridden(value);
            }
        }
    }
}

pub fn validate_https(config: &RenderConfig, report: &mut ValidationReport) {
    if config.https_enabled && !config.uses_kube_lego() {
        report.https_without_provisioner(&config.https_type);
    }
}
