use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Defaults;
use crate::target::Target;
use crate::template::RenderContext;

mod config;
mod target;
mod template;

/// Render a Dockerfile for a target OS and compiler combination.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Destination path for the rendered Dockerfile.
    #[arg(long)]
    out: PathBuf,

    /// Target operating system as <name>-<version>, e.g. ubuntu-22.04.
    #[arg(long)]
    os: String,

    /// Target compiler as <name>-<version>, e.g. gcc-11.
    #[arg(long)]
    compiler: String,

    /// Directory holding the per-OS Dockerfile templates.
    /// Defaults to the directory containing this executable.
    #[arg(long)]
    templates: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("target: {0}")]
    Target(#[from] target::Error),

    #[error("compiler: {0}")]
    Compiler(#[from] config::Error),

    #[error("template: {0}")]
    Template(#[from] template::Error),

    #[error("write {path}: {err}")]
    WriteOutput { err: std::io::Error, path: String },

    #[error("locate template root: {0}")]
    TemplateRoot(std::io::Error),
}

fn main() {
    match run() {
        Ok(_) => std::process::exit(0),
        Err(err) => {
            error!("fatal: {}", err.to_string());
            std::process::exit(1)
        }
    }
}

fn run() -> Result<(), Error> {
    env_logger::init();

    let args = Cli::parse();

    let root = match &args.templates {
        Some(root) => root.clone(),
        None => default_template_root()?,
    };

    let output = generate(&args.os, &args.compiler, &root)?;

    write_output(&args.out, &output)?;
    info!("wrote {}", args.out.display());
    Ok(())
}

/// Overwrite `out` with the rendered text.
fn write_output(out: &Path, contents: &str) -> Result<(), Error> {
    std::fs::write(out, contents).map_err(|err| Error::WriteOutput {
        err,
        path: out.display().to_string(),
    })
}

/// Resolve the target, look up the C++ compiler name and render the
/// matching per-OS template.
fn generate(os: &str, compiler: &str, root: &Path) -> Result<String, Error> {
    let defaults = Defaults::default();
    let target = Target::parse(os, compiler)?;
    debug!("resolved target: {target:?}");

    let cc = target.compiler_name.as_str();
    let cxx = defaults.cxx_for(cc)?;

    info!(
        "rendering {}/Dockerfile for {} {} with cc={} cxx={} version={}",
        target.os_name, target.os_name, target.os_version, cc, cxx, target.compiler_version
    );

    Ok(template::render(
        root,
        &target.os_name,
        &RenderContext {
            os_version: &target.os_version,
            cc,
            cxx,
            compiler_version: &target.compiler_version,
        },
    )?)
}

/// Templates live next to the program, one directory per OS name.
fn default_template_root() -> Result<PathBuf, Error> {
    let exe = std::env::current_exe().map_err(Error::TemplateRoot)?;
    Ok(exe.parent().unwrap_or(Path::new(".")).to_path_buf())
}
