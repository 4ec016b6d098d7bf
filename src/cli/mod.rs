//! RL-015: CLI subcommands — generate, check, compile, template, schema, completions.

use crate::compiler::{self, confirm::Confirm, confirm::StdinConfirm};
use crate::core::{assembler, checker, parser, paths, settings, types, writer};
use crate::error::{Error, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "resume2latex",
    version,
    about = "Generate a LaTeX resume from structured JSON/YAML data, check it, and compile it to PDF"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (default: ./resume2latex.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug detail to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a LaTeX resume from a JSON or YAML record
    Generate {
        /// Resume record (.json, .yaml, .yml); a .tex file with --pdf is compiled directly
        input: PathBuf,

        /// Output file (default: <Name>_resume.tex)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Check the generated LaTeX for syntax issues
        #[arg(short, long)]
        validate: bool,

        /// Compile the generated LaTeX to PDF
        #[arg(short, long)]
        pdf: bool,
    },

    /// Check an existing LaTeX file for syntax issues
    Check {
        /// LaTeX file to check
        file: PathBuf,
    },

    /// Compile an existing LaTeX file to PDF
    Compile {
        /// LaTeX file to compile
        file: PathBuf,
    },

    /// Write a starter resume record
    Template {
        /// Output file; .yaml/.yml writes YAML, anything else JSON
        #[arg(short, long, default_value = "resume_template.json")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the JSON Schema of the resume record
    Schema,

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Dispatch a parsed command line.
pub fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = cli.config.as_deref();
    let mut confirm = StdinConfirm;

    match cli.command {
        Commands::Generate {
            input,
            output,
            validate,
            pdf,
        } => cmd_generate(
            &input,
            output.as_deref(),
            validate,
            pdf,
            config,
            &cwd,
            &mut confirm,
        ),
        Commands::Check { file } => cmd_check(&file, &cwd),
        Commands::Compile { file } => cmd_compile(&file, config, &cwd, &mut confirm),
        Commands::Template { output, force } => cmd_template(&output, force, &cwd),
        Commands::Schema => cmd_schema(),
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "resume2latex", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Print the detail an error's one-line message leaves out.
pub fn print_error_details(e: &Error) {
    match e {
        Error::InvalidRecord(messages) => {
            for m in messages {
                eprintln!("  ERROR: {}", m);
            }
        }
        Error::CompileFailed { stdout, stderr, .. } => {
            if !stdout.is_empty() {
                eprintln!("Compiler output:\n{}", stdout);
            }
            if !stderr.is_empty() {
                eprintln!("Compiler errors:\n{}", stderr);
            }
        }
        _ => {}
    }
}

/// Resolve a user path against `cwd` after applying the path policy.
fn user_path(path: &Path, cwd: &Path) -> Result<PathBuf> {
    paths::validate_file_path(path, cwd)?;
    Ok(if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    })
}

fn is_tex(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("tex"))
}

fn separator() {
    println!("\n{}", "=".repeat(50));
}

fn cmd_generate(
    input: &Path,
    output: Option<&Path>,
    validate: bool,
    pdf: bool,
    config: Option<&Path>,
    cwd: &Path,
    confirm: &mut dyn Confirm,
) -> Result<()> {
    let input = user_path(input, cwd)?;

    if is_tex(&input) {
        if !pdf {
            return Err(Error::InvalidPath(format!(
                "{} is already LaTeX; use --pdf to compile it",
                input.display()
            )));
        }
        return cmd_compile(&input, config, cwd, confirm);
    }

    let (record, warnings) = parser::load_record(&input)?;
    for w in &warnings {
        warn!("{}", w);
        eprintln!("warning: {}", w);
    }

    let output = match output {
        Some(path) => user_path(path, cwd)?,
        None => cwd.join(paths::output_filename(&record.personal_info.name)),
    };

    let latex = assembler::assemble(&record);
    writer::write_atomic(&output, &latex)?;
    info!(output = %output.display(), bytes = latex.len(), "resume written");
    println!("Resume generated successfully: {}", output.display());

    if validate {
        separator();
        print_report(&output, &checker::check_latex(&latex))?;
        println!("Resume generation and validation completed successfully!");
    }

    if pdf {
        separator();
        cmd_compile(&output, config, cwd, confirm)?;
    }

    Ok(())
}

/// Print a checker report; a failing report becomes `ValidationFailed`.
fn print_report(file: &Path, report: &checker::CheckReport) -> Result<()> {
    println!("Validating {}...", file.display());
    println!("{}", "=".repeat(50));
    if report.passed() {
        println!("No syntax issues found!");
        println!("LaTeX file appears to be valid");
        return Ok(());
    }
    println!("Found the following issues:");
    for finding in &report.findings {
        println!("  - {}", finding);
    }
    Err(Error::ValidationFailed(report.findings.len()))
}

fn cmd_check(file: &Path, cwd: &Path) -> Result<()> {
    let file = user_path(file, cwd)?;
    let report = checker::check_file(&file)?;
    print_report(&file, &report)
}

fn cmd_compile(
    file: &Path,
    config: Option<&Path>,
    cwd: &Path,
    confirm: &mut dyn Confirm,
) -> Result<()> {
    let file = user_path(file, cwd)?;
    let settings = settings::load_settings(config, cwd)?;
    println!("Compiling {} to PDF...", file.display());
    let pdf = compiler::compile_to_pdf(&file, &settings.compiler, cwd, confirm)?;
    println!("PDF generated successfully: {}", pdf.display());
    Ok(())
}

/// Serialize the starter record in the format implied by `path`.
fn render_template(path: &Path) -> Result<String> {
    let record = types::ResumeRecord::template();
    let text = match parser::RecordFormat::from_path(path) {
        parser::RecordFormat::Json => serde_json::to_string_pretty(&record)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(std::io::Error::other)?,
        parser::RecordFormat::Yaml => {
            serde_yaml_ng::to_string(&record).map_err(std::io::Error::other)?
        }
    };
    Ok(text)
}

fn cmd_template(output: &Path, force: bool, cwd: &Path) -> Result<()> {
    let path = user_path(output, cwd)?;
    if path.exists() && !force {
        return Err(Error::Write {
            path,
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "file already exists (use --force to overwrite)",
            ),
        });
    }

    writer::write_atomic(&path, &render_template(&path)?)?;

    println!("Template created: {}", path.display());
    println!("Next steps:");
    println!("  1. Edit {} with your information", path.display());
    println!("  2. resume2latex generate {} --validate", output.display());
    println!("  3. resume2latex generate {} --pdf", output.display());
    Ok(())
}

/// JSON Schema of the resume record, pretty-printed.
pub fn record_schema() -> Result<String> {
    let schema = schemars::schema_for!(types::ResumeRecord);
    Ok(serde_json::to_string_pretty(&schema).map_err(std::io::Error::other)?)
}

fn cmd_schema() -> Result<()> {
    println!("{}", record_schema()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::tests::MINIMAL_JSON;

    fn never() -> impl FnMut(&str) -> bool {
        |_: &str| -> bool { panic!("should not prompt") }
    }

    #[test]
    fn test_rl015_cli_parses() {
        Cli::command().debug_assert();
        let cli = Cli::try_parse_from([
            "resume2latex",
            "--verbose",
            "generate",
            "me.json",
            "-o",
            "out.tex",
            "-v",
            "-p",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Generate {
                input,
                output,
                validate,
                pdf,
            } => {
                assert_eq!(input, PathBuf::from("me.json"));
                assert_eq!(output, Some(PathBuf::from("out.tex")));
                assert!(validate && pdf);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_rl015_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["resume2latex", "-q", "--verbose", "schema"]).is_err());
    }

    #[test]
    fn test_rl015_generate_default_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resume.json"), MINIMAL_JSON).unwrap();

        cmd_generate(
            Path::new("resume.json"),
            None,
            true,
            false,
            None,
            dir.path(),
            &mut never(),
        )
        .unwrap();

        let out = dir.path().join("John-Doe_resume.tex");
        let latex = std::fs::read_to_string(&out).unwrap();
        assert!(latex.contains("\\textbf{\\Huge \\scshape John Doe}"));
        assert!(checker::check_latex(&latex).passed());
    }

    #[test]
    fn test_rl015_generate_explicit_output() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resume.json"), MINIMAL_JSON).unwrap();
        cmd_generate(
            Path::new("resume.json"),
            Some(Path::new("out/cv.tex")),
            false,
            false,
            None,
            dir.path(),
            &mut never(),
        )
        .unwrap();
        assert!(dir.path().join("out").join("cv.tex").is_file());
        assert!(!dir.path().join("John-Doe_resume.tex").exists());
    }

    #[test]
    fn test_rl015_generate_invalid_record_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("resume.json"),
            MINIMAL_JSON.replace("John Doe", " "),
        )
        .unwrap();
        let err = cmd_generate(
            Path::new("resume.json"),
            None,
            false,
            false,
            None,
            dir.path(),
            &mut never(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidRecord(_)));
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_rl015_generate_rejects_bad_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resume.json"), MINIMAL_JSON).unwrap();
        let err = cmd_generate(
            Path::new("../resume.json"),
            None,
            false,
            false,
            None,
            dir.path(),
            &mut never(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));

        let err = cmd_generate(
            Path::new("resume.json"),
            Some(Path::new("out;rm.tex")),
            false,
            false,
            None,
            dir.path(),
            &mut never(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidPath(_)));
    }

    #[test]
    fn test_rl015_generate_tex_requires_pdf() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cv.tex"), "x").unwrap();
        let err = cmd_generate(
            Path::new("cv.tex"),
            None,
            false,
            false,
            None,
            dir.path(),
            &mut never(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("use --pdf"));
    }

    #[test]
    fn test_rl015_check_pass_and_fail() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.tex");
        let record = parser::parse_record(MINIMAL_JSON, parser::RecordFormat::Json).unwrap();
        std::fs::write(&good, assembler::assemble(&record)).unwrap();
        cmd_check(Path::new("good.tex"), dir.path()).unwrap();

        // Glued %, an unclosed group and no document markers; the % hides the rest.
        std::fs::write(dir.path().join("bad.tex"), "{ & more 25% }").unwrap();
        let err = cmd_check(Path::new("bad.tex"), dir.path()).unwrap_err();
        assert!(matches!(err, Error::ValidationFailed(3)));
    }

    #[test]
    fn test_rl015_check_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = cmd_check(Path::new("none.tex"), dir.path()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn test_rl015_template_json_and_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let out = Path::new("resume_template.json");
        cmd_template(out, false, dir.path()).unwrap();

        let path = dir.path().join(out);
        let record = parser::parse_record_file(&path).unwrap();
        assert_eq!(record, types::ResumeRecord::template());

        std::fs::write(&path, "mine").unwrap();
        let err = cmd_template(out, false, dir.path()).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "mine");

        cmd_template(out, true, dir.path()).unwrap();
        assert_ne!(std::fs::read_to_string(&path).unwrap(), "mine");
    }

    #[test]
    fn test_rl015_template_yaml() {
        let dir = tempfile::tempdir().unwrap();
        cmd_template(Path::new("starter.yaml"), false, dir.path()).unwrap();
        let text = std::fs::read_to_string(dir.path().join("starter.yaml")).unwrap();
        assert!(text.starts_with("personal_info:"));
        let record = parser::parse_record(&text, parser::RecordFormat::Yaml).unwrap();
        assert_eq!(record.personal_info.name, "John Doe");
    }

    #[test]
    fn test_rl015_schema_lists_sections() {
        let schema = record_schema().unwrap();
        for key in [
            "personal_info",
            "education",
            "professional_experience",
            "project_experience",
            "additional_information",
        ] {
            assert!(schema.contains(key), "{key}");
        }
    }

    #[test]
    fn test_rl015_compile_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = cmd_compile(Path::new("ghost.tex"), None, dir.path(), &mut never()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    /// Install a fake `pdflatex` under `dir/bin` and a settings file that
    /// points at it. Returns the settings path.
    #[cfg(unix)]
    fn fake_compiler_config(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let exe = dir.join("bin").join("pdflatex");
        std::fs::create_dir_all(exe.parent().unwrap()).unwrap();
        std::fs::write(
            &exe,
            "#!/bin/sh\nfor last; do :; done\necho '%PDF' > \"${last%.tex}.pdf\"\n",
        )
        .unwrap();
        std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

        let config = dir.join("custom.toml");
        std::fs::write(
            &config,
            format!("[compiler]\nprogram = \"{}\"\n", exe.display()),
        )
        .unwrap();
        config
    }

    #[cfg(unix)]
    #[test]
    fn test_rl015_generate_with_pdf_via_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = fake_compiler_config(dir.path());
        std::fs::write(dir.path().join("resume.json"), MINIMAL_JSON).unwrap();

        cmd_generate(
            Path::new("resume.json"),
            None,
            true,
            true,
            Some(config.as_path()),
            dir.path(),
            &mut never(),
        )
        .unwrap();

        assert!(dir.path().join("John-Doe_resume.tex").is_file());
        assert!(dir.path().join("John-Doe_resume.pdf").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn test_rl015_pdf_in_directory_with_shell_chars() {
        let root = tempfile::tempdir().unwrap();
        let cwd = root.path().join("Resume (2024)");
        std::fs::create_dir_all(&cwd).unwrap();
        let config = fake_compiler_config(&cwd);
        std::fs::write(cwd.join("resume.json"), MINIMAL_JSON).unwrap();

        cmd_generate(
            Path::new("resume.json"),
            None,
            false,
            true,
            Some(config.as_path()),
            &cwd,
            &mut never(),
        )
        .unwrap();
        assert!(cwd.join("John-Doe_resume.pdf").is_file());

        std::fs::remove_file(cwd.join("John-Doe_resume.pdf")).unwrap();
        cmd_compile(
            Path::new("John-Doe_resume.tex"),
            Some(config.as_path()),
            &cwd,
            &mut never(),
        )
        .unwrap();
        assert!(cwd.join("John-Doe_resume.pdf").is_file());

        std::fs::remove_file(cwd.join("John-Doe_resume.pdf")).unwrap();
        cmd_generate(
            Path::new("John-Doe_resume.tex"),
            None,
            false,
            true,
            Some(config.as_path()),
            &cwd,
            &mut never(),
        )
        .unwrap();
        assert!(cwd.join("John-Doe_resume.pdf").is_file());
    }
}
