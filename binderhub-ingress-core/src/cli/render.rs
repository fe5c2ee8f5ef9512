use crate::conf::{ConfigError, LoadRequest, load_render_config};
use crate::render::{OutputFormat, emit};
use anyhow::Context;
use miette::Report;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

pub fn render(
    request: LoadRequest,
    output: OutputFormat,
    out: Option<PathBuf>,
    plain: bool,
) -> anyhow::Result<ExitCode> {
    let validated = match load_render_config(&request) {
        Ok(validated) => validated,
        Err(err) => {
            print_config_error(err, plain);
            return Ok(ExitCode::FAILURE);
        }
    };

    for issue in &validated.validation.warnings {
        warn!(field = %issue.field, "{}", issue.message);
    }

    let Some(ingress) = crate::render::render(&validated.config) else {
        info!("ingress disabled, no manifest written");
        return Ok(ExitCode::SUCCESS);
    };

    let manifest = emit(&ingress, output)?;

    match out {
        Some(path) => {
            fs::write(&path, &manifest)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote ingress manifest");
        }
        None => print!("{manifest}"),
    }

    Ok(ExitCode::SUCCESS)
}

pub fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);

    if let ConfigError::Validation { report } = &err {
        let text = if plain {
            report.render_plain()
        } else {
            report.render_pretty()
        };
        eprint!("{text}");
    } else if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }

    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Schema { .. } => Some(
            "Chart values for the ingress look like this:\n\
             \n\
             ingress:\n\
             \x20 enabled: true\n\
             \x20 host: binder.example.org\n\
             \x20 annotations: {}\n\
             \x20 https:\n\
             \x20   enabled: true\n\
             \x20   type: kube-lego",
        ),

        ConfigError::ReadFile { .. } => {
            Some("Run `binderhub-ingress init` to create a sample values.yaml.")
        }

        _ => None,
    }
}
