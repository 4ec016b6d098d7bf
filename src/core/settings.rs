//! RL-008: Optional TOML settings.
//!
//! Looked up from `--config`, else `resume2latex.toml` in the working
//! directory, else defaults. `RESUME2LATEX_COMPILER` overrides the compiler
//! program regardless of source.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings file picked up from the working directory.
pub const DEFAULT_SETTINGS_FILE: &str = "resume2latex.toml";

/// Environment override for `compiler.program`.
pub const COMPILER_ENV: &str = "RESUME2LATEX_COMPILER";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub compiler: CompilerSettings,
}

/// How to find and run the LaTeX compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerSettings {
    /// Command name or path; base name must be allow-listed
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the source file name
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Extra directories searched after PATH and the built-in locations
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

fn default_program() -> String {
    "pdflatex".to_string()
}

fn default_args() -> Vec<String> {
    vec![
        "-interaction=nonstopmode".to_string(),
        "-halt-on-error".to_string(),
    ]
}

impl Default for CompilerSettings {
    fn default() -> Self {
        CompilerSettings {
            program: default_program(),
            args: default_args(),
            search_paths: Vec::new(),
        }
    }
}

/// Parse settings from TOML text.
pub fn parse_settings(text: &str) -> Result<Settings> {
    toml::from_str(text).map_err(|e| Error::Settings(e.to_string()))
}

/// Load settings for this run.
///
/// An explicit path must exist; the implicit one is optional.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let candidate = cwd.join(DEFAULT_SETTINGS_FILE);
            candidate.is_file().then_some(candidate)
        }
    };

    let mut settings = match path {
        Some(p) => {
            let text = std::fs::read_to_string(&p).map_err(|source| Error::Read {
                path: p.clone(),
                source,
            })?;
            debug!(path = %p.display(), "loaded settings");
            parse_settings(&text)?
        }
        None => Settings::default(),
    };

    if let Ok(program) = std::env::var(COMPILER_ENV) {
        if !program.trim().is_empty() {
            debug!(%program, "compiler overridden from environment");
            settings.compiler.program = program;
        }
    }

    Ok(settings)
}
