use crate::cli::ReportFormat;
use crate::cli::render::print_config_error;
use crate::conf::validation::{ValidationReport, validate_render_config};
use crate::conf::{ConfigError, LoadRequest, RenderConfig, resolve_render_config};
use crate::render::render;
use std::process::ExitCode;

pub fn check(request: LoadRequest, format: ReportFormat) -> anyhow::Result<ExitCode> {
    let config = match resolve_render_config(&request) {
        Ok(config) => config,
        Err(err) if format == ReportFormat::Json => {
            println!("{}", load_failure_json(&err)?);
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => {
            print_config_error(err, format == ReportFormat::Plain);
            return Ok(ExitCode::FAILURE);
        }
    };

    let report = validate_render_config(&config);
    print!("{}", report_output(&report, &config, format)?);

    Ok(exit_code(&report))
}

/// A load or parse failure as a JSON report with a single error.
pub fn load_failure_json(err: &ConfigError) -> serde_json::Result<String> {
    let mut report = ValidationReport::default();
    report.load_failed(err);
    report.render_json()
}

/// Report text for `format`; valid configs also get the summary unless JSON.
pub fn report_output(
    report: &ValidationReport,
    config: &RenderConfig,
    format: ReportFormat,
) -> anyhow::Result<String> {
    let mut out = match format {
        ReportFormat::Json => return Ok(format!("{}\n", report.render_json()?)),
        ReportFormat::Plain => report.render_plain(),
        ReportFormat::Pretty => report.render_pretty(),
    };
    if report.is_valid() {
        out.push_str(&summary(config));
    }
    Ok(out)
}

/// Human summary of what `render` would produce for this config.
pub fn summary(config: &RenderConfig) -> String {
    let Some(ingress) = render(config) else {
        return "✔ Values loaded successfully\n✔ ingress disabled, nothing to render\n".to_owned();
    };

    let mut lines = vec!["✔ Values loaded successfully".to_owned()];

    for rule in &ingress.spec.rules {
        for path in &rule.http.paths {
            lines.push(format!(
                "✔ host {} -> {}:{}",
                rule.host,
                path.backend.service_name(),
                path.backend.service_port()
            ));
        }
    }
    lines.push(format!("✔ apiVersion {}", ingress.api_version));
    lines.push(format!(
        "✔ {} annotations",
        ingress.metadata.annotations.as_ref().map_or(0, |a| a.len())
    ));

    match ingress.spec.tls.as_deref() {
        Some([tls, ..]) => lines.push(format!("✔ TLS via kube-lego, secret {}", tls.secret_name)),
        _ => lines.push("✔ TLS disabled".to_owned()),
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn exit_code(report: &ValidationReport) -> ExitCode {
    if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
