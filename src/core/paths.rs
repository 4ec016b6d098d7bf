//! RL-006: Output filename derivation and file path policy.

use crate::error::{Error, Result};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Characters rejected anywhere in a user-supplied path.
const DANGEROUS_CHARS: &[char] = &[
    ';', '|', '&', '`', '$', '(', ')', '{', '}', '[', ']', '"', '\'',
];

static NON_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\-]").expect("static regex"));

static SAFE_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("static regex"));

/// Fallback when the name yields an empty slug.
pub const FALLBACK_OUTPUT: &str = "resume.tex";

/// Filesystem-safe stem for a person's name.
///
/// Spaces become hyphens, everything outside `[A-Za-z0-9-]` becomes an
/// underscore, and leading/trailing underscores are trimmed. Runs are not
/// collapsed.
pub fn name_slug(name: &str) -> String {
    let hyphenated = name.replace(' ', "-");
    NON_SLUG
        .replace_all(&hyphenated, "_")
        .trim_matches('_')
        .to_string()
}

/// Default output filename: `<slug>_resume.tex`.
pub fn output_filename(name: &str) -> PathBuf {
    let slug = name_slug(name);
    if slug.is_empty() {
        return PathBuf::from(FALLBACK_OUTPUT);
    }
    PathBuf::from(format!("{slug}_resume.tex"))
}

/// Validate a user-supplied input or output path.
///
/// Rejects parent-directory components, absolute paths outside `cwd`, and
/// shell-significant characters. Only the part below `cwd` is checked for
/// characters, so the working directory's own name never fails the policy.
pub fn validate_file_path(path: &Path, cwd: &Path) -> Result<()> {
    let display = path.display().to_string();
    if display.trim().is_empty() {
        return Err(Error::InvalidPath("empty path".to_string()));
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(Error::InvalidPath(format!("{display} (parent directory reference)")));
    }
    let relative = if path.is_absolute() {
        path.strip_prefix(cwd).map_err(|_| {
            Error::InvalidPath(format!("{display} (outside {})", cwd.display()))
        })?
    } else {
        path
    };
    if relative.to_string_lossy().contains(DANGEROUS_CHARS) {
        return Err(Error::InvalidPath(format!("{display} (disallowed characters)")));
    }
    Ok(())
}

/// True when a file stem is safe to hand to the compiler.
pub fn is_safe_stem(stem: &str) -> bool {
    SAFE_STEM.is_match(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rl006_slug_simple() {
        assert_eq!(output_filename("John Doe"), PathBuf::from("John-Doe_resume.tex"));
    }

    #[test]
    fn test_rl006_slug_no_collapsing() {
        // Double space -> two hyphens; apostrophe -> underscore.
        assert_eq!(
            output_filename("Mary  Jane O'Brien"),
            PathBuf::from("Mary--Jane-O_Brien_resume.tex")
        );
    }

    #[test]
    fn test_rl006_slug_trims_underscores_only() {
        assert_eq!(name_slug("(Jane)"), "Jane");
        assert_eq!(name_slug(" Jane "), "-Jane-");
    }

    #[test]
    fn test_rl006_slug_non_ascii() {
        assert_eq!(name_slug("José Núñez"), "Jos_-N__ez");
    }

    #[test]
    fn test_rl006_slug_empty_fallback() {
        assert_eq!(output_filename("!!!"), PathBuf::from(FALLBACK_OUTPUT));
        assert_eq!(output_filename(""), PathBuf::from(FALLBACK_OUTPUT));
    }

    #[test]
    fn test_rl006_validate_relative_ok() {
        let cwd = Path::new("/work");
        assert!(validate_file_path(Path::new("resume.json"), cwd).is_ok());
        assert!(validate_file_path(Path::new("out/My-Name_resume.tex"), cwd).is_ok());
    }

    #[test]
    fn test_rl006_validate_rejects_traversal() {
        let cwd = Path::new("/work");
        assert!(validate_file_path(Path::new("../secret.json"), cwd).is_err());
        assert!(validate_file_path(Path::new("a/../../b.tex"), cwd).is_err());
    }

    #[test]
    fn test_rl006_validate_absolute() {
        let cwd = Path::new("/work");
        assert!(validate_file_path(Path::new("/work/sub/r.json"), cwd).is_ok());
        assert!(validate_file_path(Path::new("/etc/passwd"), cwd).is_err());
        // Prefix match is by component, not by string.
        assert!(validate_file_path(Path::new("/workshop/r.json"), cwd).is_err());
    }

    #[test]
    fn test_rl006_validate_dangerous_chars() {
        let cwd = Path::new("/work");
        for bad in ["a;b.tex", "x|y", "$(rm).tex", "q'.json", "b`c`"] {
            assert!(validate_file_path(Path::new(bad), cwd).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_rl006_validate_cwd_name_not_checked() {
        let cwd = Path::new("/home/ada/Resume (2024)");
        assert!(validate_file_path(&cwd.join("John-Doe_resume.tex"), cwd).is_ok());
        assert!(validate_file_path(Path::new("John-Doe_resume.tex"), cwd).is_ok());
        assert!(validate_file_path(&cwd.join("a;b.tex"), cwd).is_err());
    }

    #[test]
    fn test_rl006_validate_empty() {
        assert!(validate_file_path(Path::new(""), Path::new("/work")).is_err());
    }

    #[test]
    fn test_rl006_safe_stem() {
        assert!(is_safe_stem("John-Doe_resume"));
        assert!(!is_safe_stem("John Doe"));
        assert!(!is_safe_stem(""));
        assert!(!is_safe_stem("a.b"));
    }
}
