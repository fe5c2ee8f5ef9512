use binderhub_ingress_core::cli::{self, Command, ValuesArgs};
use binderhub_ingress_core::render::OutputFormat;
use serde_yaml::Value;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tempfile::{TempDir, tempdir};

/// Path of a checked-in fixture under `integration-tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub fn yaml(s: &str) -> Value {
    serde_yaml::from_str(s).expect("fixture is not valid YAML")
}

/// Scratch directory for values files written by a test.
pub struct ValuesDir {
    dir: TempDir,
}

impl ValuesDir {
    pub fn new() -> Self {
        Self {
            dir: tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write values file");
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

impl Default for ValuesDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of driving the `render` subcommand end to end.
pub struct RenderRun {
    pub exit: ExitCode,
    /// Manifest text, or `None` when nothing was written.
    pub manifest: Option<String>,
}

/// Run `render` the way the binary would, writing the manifest to a scratch
/// file so the test can read it back.
pub fn render_with(values: ValuesArgs, output: OutputFormat) -> RenderRun {
    let scratch = ValuesDir::new();
    let out = scratch.path("manifest.out");

    let exit = cli::run(Command::Render {
        values,
        output,
        out: Some(out.clone()),
        plain: true,
    })
    .expect("render command failed");

    let manifest = fs::read_to_string(&out).ok();
    RenderRun { exit, manifest }
}
