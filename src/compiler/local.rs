//! RL-012: Run the compiler as a child process.
//!
//! The child runs with an explicit working directory; the process-wide cwd is
//! never touched. Waiting races Ctrl-C so an interrupt kills the child and
//! unwinds normally, letting the caller's temp directory guard clean up.

use super::CompileOutput;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Stdio;
use tracing::{debug, warn};

/// Run `program args.. file_name` inside `workdir` and capture its output.
pub fn run_compiler(
    program: &Path,
    args: &[String],
    file_name: &str,
    workdir: &Path,
) -> Result<CompileOutput> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(spawn_and_wait(program, args, file_name, workdir))
}

async fn spawn_and_wait(
    program: &Path,
    args: &[String],
    file_name: &str,
    workdir: &Path,
) -> Result<CompileOutput> {
    let child = tokio::process::Command::new(program)
        .args(args)
        .arg(file_name)
        .current_dir(workdir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::CompilerNotFound(program.display().to_string()),
            _ => Error::Io(e),
        })?;
    debug!(program = %program.display(), workdir = %workdir.display(), "compiler spawned");

    // If the handler cannot be installed, never report an interrupt.
    let interrupt = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        output = child.wait_with_output() => {
            let output = output?;
            Ok(CompileOutput {
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            })
        }
        () = interrupt => {
            warn!("interrupted; stopping compiler");
            Err(Error::Interrupted)
        }
    }
}
