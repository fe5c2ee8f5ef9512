use crate::conf::validation::ValidationReport;

fn report_with_issues() -> ValidationReport {
    let mut report = ValidationReport::default();
    report.missing_host();
    report.https_without_provisioner("cert-manager");
    report
}

#[test]
fn plain_lists_errors_then_warnings() {
    // Act
    let text = report_with_issues().render_plain();

    // Assert
    let lines: Vec<_> = text.lines().filter(|l| !l.starts_with("  ")).collect();
    assert_eq!(
        lines,
        vec![
            "ingress.host: error: ingress is enabled but no host is set",
            "ingress.https.type: warning: https is enabled but https.type is 'cert-manager'; no TLS block will be rendered",
        ]
    );
    assert!(text.contains("  help: "));
}

#[test]
fn json_has_errors_and_warnings() {
    // Act
    let json = report_with_issues().render_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Assert
    assert_eq!(value["errors"][0]["severity"], "Error");
    assert_eq!(value["errors"][0]["field"], "ingress.host");
    assert_eq!(value["warnings"][0]["severity"], "Warning");
}

#[test]
fn pretty_has_counts_header() {
    let text = report_with_issues().render_pretty();
    assert!(text.starts_with("values validation found 1 errors, 1 warnings"));
}

#[test]
fn empty_report_renders_nothing() {
    let report = ValidationReport::default();
    assert!(!report.has_violations());
    assert_eq!(report.render_plain(), "");
    assert_eq!(report.render_pretty(), "");
}
