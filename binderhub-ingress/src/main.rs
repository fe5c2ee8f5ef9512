use binderhub_ingress_core::cli::{self, Command};
use binderhub_ingress_core::logging::init_logging;
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "binderhub-ingress",
    version,
    about = "Render the BinderHub ingress manifest from chart values"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging();

    match cli::run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
