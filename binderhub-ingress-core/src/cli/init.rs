use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(RustEmbed)]
#[folder = "values-templates/"]
pub struct ValuesTemplates;

pub fn init(path: PathBuf) -> Result<ExitCode> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    write_file(&path, &template("values.yaml")?)?;

    println!("✔ Wrote sample values to {}", path.display());
    println!();
    println!("Next steps:");
    println!("  binderhub-ingress check -f {}", path.display());
    println!(
        "  binderhub-ingress render -f {} --release-name binder",
        path.display()
    );

    Ok(ExitCode::SUCCESS)
}

/// Fetch an embedded values template as UTF-8 text
pub fn template(path: &str) -> Result<String> {
    let file = ValuesTemplates::get(path)
        .with_context(|| format!("missing embedded values template: {path}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("values template is not valid UTF-8")?;

    Ok(s.to_owned())
}

/// Create `path` and write it; refuses atomically if anything is already there.
fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            bail!("{} already exists", path.display())
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to create {}", path.display()));
        }
    };
    f.write_all(contents.trim_start().as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))
}
