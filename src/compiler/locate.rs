//! RL-011: Compiler discovery.
//!
//! Lookup order: explicit path → PATH → built-in install locations →
//! configured search paths.

use std::path::{Path, PathBuf};
use tracing::debug;

/// LaTeX engines the tool is willing to run.
pub const ALLOWED_COMPILERS: &[&str] = &["pdflatex", "xelatex", "lualatex", "latexmk"];

/// Base name of `program` without directories or a `.exe` suffix.
fn base_name(program: &str) -> &str {
    let name = Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program);
    name.strip_suffix(".exe").unwrap_or(name)
}

/// True when the program's base name is in [`ALLOWED_COMPILERS`].
pub fn is_allowed(program: &str) -> bool {
    ALLOWED_COMPILERS.contains(&base_name(program))
}

/// Well-known install locations for `name` on `os`.
pub fn fallback_locations(name: &str, os: &str) -> Vec<PathBuf> {
    let dirs: &[&str] = match os {
        "macos" => &[
            "/Library/TeX/texbin",
            "/usr/local/texlive/2024basic/bin/universal-darwin",
            "/usr/local/texlive/2024/bin/universal-darwin",
            "/usr/local/texlive/2023/bin/universal-darwin",
            "/usr/local/texlive/2022/bin/universal-darwin",
            "/opt/homebrew/bin",
            "/usr/local/bin",
        ],
        "linux" => &[
            "/usr/bin",
            "/usr/local/bin",
            "/usr/local/texlive/2024/bin/x86_64-linux",
            "/usr/local/texlive/2023/bin/x86_64-linux",
            "/usr/local/texlive/2024/bin/aarch64-linux",
        ],
        "windows" => &[
            r"C:\Program Files\MiKTeX\miktex\bin\x64",
            r"C:\texlive\2024\bin\windows",
            r"C:\texlive\2023\bin\windows",
        ],
        _ => &["/usr/local/bin", "/usr/bin"],
    };
    let file = executable_name(name, os);
    dirs.iter().map(|d| Path::new(d).join(&file)).collect()
}

fn executable_name(name: &str, os: &str) -> String {
    if os == "windows" && !name.ends_with(".exe") {
        format!("{}.exe", name)
    } else {
        name.to_string()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// First directory in `dirs` containing an executable `name`.
pub fn find_in_dirs<I>(name: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    dirs.into_iter()
        .map(|d| d.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Locate `program` for the current platform.
pub fn locate(program: &str, search_paths: &[PathBuf]) -> Option<PathBuf> {
    let os = std::env::consts::OS;

    if Path::new(program).components().count() > 1 {
        let explicit = PathBuf::from(program);
        return is_executable(&explicit).then_some(explicit);
    }

    let file = executable_name(program, os);
    if let Some(path_var) = std::env::var_os("PATH") {
        if let Some(found) = find_in_dirs(&file, std::env::split_paths(&path_var)) {
            debug!(path = %found.display(), "compiler found on PATH");
            return Some(found);
        }
    }

    let found = fallback_locations(program, os)
        .into_iter()
        .find(|p| is_executable(p))
        .or_else(|| find_in_dirs(&file, search_paths.iter().cloned()));
    if let Some(ref p) = found {
        debug!(path = %p.display(), "compiler found outside PATH");
    }
    found
}
