//! RL-011/012: External LaTeX compiler invocation.
//!
//! The source is copied into a fresh temporary directory and compiled there,
//! so the `.aux`/`.log`/`.out` files the compiler scatters never reach the
//! user's directory. Only the PDF is copied back. The temporary directory is
//! removed on every exit path when its guard drops.

pub mod confirm;
pub mod guidance;
pub mod local;
pub mod locate;

use crate::core::paths::{is_safe_stem, validate_file_path};
use crate::core::settings::CompilerSettings;
use crate::error::{Error, Result};
use confirm::Confirm;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output from running the compiler.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CompileOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// A resolved compiler executable and the flags it runs with.
#[derive(Debug, Clone)]
pub struct Compiler {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Compiler {
    /// Resolve the configured compiler. `Ok(None)` means it is not installed.
    pub fn resolve(settings: &CompilerSettings) -> Result<Option<Compiler>> {
        if !locate::is_allowed(&settings.program) {
            return Err(Error::CompilerNotAllowed(settings.program.clone()));
        }
        Ok(
            locate::locate(&settings.program, &settings.search_paths).map(|program| Compiler {
                program,
                args: settings.args.clone(),
            }),
        )
    }
}

/// Compile `source` (a `.tex` file) with `compiler` in isolation.
///
/// Returns the path of the PDF written next to `source`.
pub fn build_pdf(compiler: &Compiler, source: &Path) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| is_safe_stem(s))
        .ok_or_else(|| {
            Error::InvalidPath(format!(
                "{} (file name must be letters, digits, '-' or '_')",
                source.display()
            ))
        })?;

    let workdir = tempfile::Builder::new().prefix("resume2latex-").tempdir()?;
    let tex_name = format!("{}.tex", stem);
    let pdf_name = format!("{}.pdf", stem);
    std::fs::copy(source, workdir.path().join(&tex_name)).map_err(|source_err| Error::Read {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    debug!(workdir = %workdir.path().display(), "isolated build directory ready");

    info!(source = %source.display(), compiler = %compiler.program.display(), "compiling");
    let output = local::run_compiler(&compiler.program, &compiler.args, &tex_name, workdir.path())?;
    if !output.success() {
        return Err(Error::CompileFailed {
            code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        });
    }

    let artifact = workdir.path().join(&pdf_name);
    if !artifact.is_file() {
        return Err(Error::ArtifactMissing(PathBuf::from(pdf_name)));
    }

    let destination = source.with_file_name(&pdf_name);
    std::fs::copy(&artifact, &destination).map_err(|e| Error::Write {
        path: destination.clone(),
        source: e,
    })?;
    Ok(destination)
}

/// Validate `source`, find the compiler (offering install guidance when it
/// is missing) and build the PDF.
pub fn compile_to_pdf(
    source: &Path,
    settings: &CompilerSettings,
    cwd: &Path,
    confirm: &mut dyn Confirm,
) -> Result<PathBuf> {
    validate_file_path(source, cwd)?;
    if !source.is_file() {
        return Err(Error::Read {
            path: source.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        });
    }

    let Some(compiler) = Compiler::resolve(settings)? else {
        match guidance::offer_install_guidance(confirm, std::env::consts::OS) {
            Some(text) => println!("{}", text),
            None => println!("PDF compilation cancelled."),
        }
        return Err(Error::CompilerNotFound(settings.program.clone()));
    };

    build_pdf(&compiler, source)
}
