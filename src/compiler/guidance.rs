//! RL-014: Platform install guidance for a missing LaTeX compiler.
//!
//! Guidance is printed only. Nothing is ever installed.

use super::confirm::Confirm;

pub const INSTALL_PROMPT: &str =
    "No LaTeX compiler was found. Show instructions for installing a LaTeX distribution?";

/// Install instructions for an OS name as reported by `std::env::consts::OS`.
pub fn install_guidance(os: &str) -> String {
    match os {
        "macos" => "To install LaTeX on macOS, run:\n\
                    \x20 brew install --cask basictex\n\
                    Then make sure the TeX binaries are on your PATH and try again."
            .to_string(),
        "linux" => "To install LaTeX, run one of:\n\
                    \n\
                    Debian/Ubuntu:\n\
                    \x20 sudo apt-get update && sudo apt-get install -y texlive-full\n\
                    \n\
                    RHEL/CentOS/Fedora:\n\
                    \x20 sudo yum install -y texlive\n\
                    \n\
                    Then try again."
            .to_string(),
        "windows" => "Install MiKTeX manually:\n\
                      \x20 1. Download from https://miktex.org/\n\
                      \x20 2. Run the installer\n\
                      \x20 3. Restart your terminal"
            .to_string(),
        other => format!("Unsupported operating system: {}", other),
    }
}

/// Ask whether to show guidance; returns it when the user accepts.
pub fn offer_install_guidance(confirm: &mut dyn Confirm, os: &str) -> Option<String> {
    if confirm.confirm(INSTALL_PROMPT) {
        Some(install_guidance(os))
    } else {
        None
    }
}
