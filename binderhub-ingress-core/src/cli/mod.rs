mod check;
mod init;
mod render;
#[cfg(test)]
mod tests;

pub use check::*;
pub use init::*;
pub use render::*;

use crate::conf::LoadRequest;
use crate::render::OutputFormat;
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the ingress manifest
    Render {
        #[command(flatten)]
        values: ValuesArgs,

        /// Manifest serialization
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        output: OutputFormat,

        /// Write the manifest to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Print errors without color or diagnostics
        #[arg(long)]
        plain: bool,
    },

    /// Validate values and summarize what would be rendered
    Check {
        #[command(flatten)]
        values: ValuesArgs,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Pretty)]
        format: ReportFormat,
    },

    /// Write a sample values file
    Init {
        /// Path of the values file to create
        #[arg(default_value = "values.yaml")]
        path: PathBuf,
    },
}

/// Values sources shared by `render` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct ValuesArgs {
    /// Values file (YAML, TOML or HCL); repeat to layer files
    #[arg(short = 'f', long = "values")]
    pub values_files: Vec<PathBuf>,

    /// Override a value, e.g. --set ingress.host=binder.example.org
    #[arg(long = "set")]
    pub overrides: Vec<String>,

    /// Release name used in the TLS secret name
    #[arg(long)]
    pub release_name: Option<String>,
}

impl From<ValuesArgs> for LoadRequest {
    fn from(args: ValuesArgs) -> Self {
        LoadRequest {
            values_files: args.values_files,
            overrides: args.overrides,
            release_name: args.release_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

/// Dispatch a parsed subcommand.
pub fn run(command: Command) -> anyhow::Result<std::process::ExitCode> {
    match command {
        Command::Render {
            values,
            output,
            out,
            plain,
        } => render(values.into(), output, out, plain),
        Command::Check { values, format } => check(values.into(), format),
        Command::Init { path } => init(path),
    }
}
