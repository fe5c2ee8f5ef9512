use crate::conf::ConfigError;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    /// Dotted values path the issue is about, e.g. `ingress.host`.
    pub field: String,
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

#[derive(Serialize)]
struct ValidationReportJson<'a> {
    errors: &'a [ValidationIssue],
    warnings: &'a [ValidationIssue],
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, message: String, field: &str, help: Option<String>) {
        self.errors.push(ValidationIssue {
            severity: Severity::Error,
            message,
            field: field.to_owned(),
            help,
        });
    }

    pub(crate) fn warning(&mut self, message: String, field: &str, help: Option<String>) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            field: field.to_owned(),
            help,
        });
    }

    fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ValidationReportJson {
            errors: &self.errors,
            warnings: &self.warnings,
        })
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for issue in self.issues() {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            let _ = writeln!(out, "{}: {}: {}", issue.field, severity, issue.message);

            if let Some(help) = &issue.help {
                let _ = writeln!(out, "  help: {}", help);
            }
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        if self.has_violations() {
            let _ = writeln!(
                out,
                "values validation found {} errors, {} warnings\n",
                self.errors.len(),
                self.warnings.len()
            );
        }

        for issue in self.issues() {
            let _ = writeln!(out, "{}", issue.field.bold());
            match issue.severity {
                Severity::Error => {
                    let _ = writeln!(out, "  {}: {}", "error".red().bold(), issue.message);
                }
                Severity::Warning => {
                    let _ = writeln!(out, "  {}: {}", "warning".yellow().bold(), issue.message);
                }
            }
            if let Some(help) = &issue.help {
                let _ = writeln!(out, "  {}: {}", "help".cyan(), help);
            }
            out.push('\n');
        }
        out
    }
}

/// Loading
impl ValidationReport {
    pub fn load_failed(&mut self, err: &ConfigError) {
        self.error(err.to_string(), "values", None);
    }
}

/// Host validation
impl ValidationReport {
    pub fn missing_host(&mut self) {
        self.error(
            "ingress is enabled but no host is set".to_string(),
            "ingress.host",
            Some("Set ingress.host to the public DNS name, e.g. --set ingress.host=binder.example.org".to_string()),
        );
    }

    pub fn invalid_host(&mut self, host: &str) {
        self.error(
            format!("invalid host name: {}", host),
            "ingress.host",
            Some("Hosts are lowercase DNS names; a leading '*.' wildcard is allowed.".to_string()),
        );
    }
}

/// Release validation
impl ValidationReport {
    pub fn missing_release_name(&mut self) {
        self.error(
            "no release name given".to_string(),
            "releaseName",
            Some("Pass --release-name or set releaseName in a values file.".to_string()),
        );
    }

    pub fn invalid_release_name(&mut self, name: &str) {
        self.error(
            format!("invalid release name: {}", name),
            "releaseName",
            Some("Release names are DNS-1123 labels: lowercase alphanumerics and '-'.".to_string()),
        );
    }
}

/// Annotation and HTTPS validation
impl ValidationReport {
    pub fn empty_annotation_key(&mut self) {
        self.error(
            "annotation with an empty key".to_string(),
            "ingress.annotations",
            None,
        );
    }

    pub fn tls_acme_annotation_overridden(&mut self, value: &str) {
        self.warning(
            format!(
                "annotation kubernetes.io/tls-acme={} will be replaced with \"true\"",
                value
            ),
            "ingress.annotations",
            Some("kube-lego manages this annotation; remove it from the values.".to_string()),
        );
    }

    pub fn https_without_provisioner(&mut self, kind: &str) {
        self.warning(
            format!(
                "https is enabled but https.type is '{}'; no TLS block will be rendered",
                kind
            ),
            "ingress.https.type",
            Some("Only https.type=kube-lego provisions certificates.".to_string()),
        );
    }
}
