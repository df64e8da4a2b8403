use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

use pwgen::{Config, Password};

/// Copy `password` to the clipboard, telling the user how it went. Failing to copy is not fatal:
/// the password has already been shown.
pub(crate) fn copy_and_report(config: &Config, password: &Password) {
    match send_to_clipboard(config, password.as_str().as_bytes()) {
        Ok(()) => eprintln!("Copied to the clipboard."),
        Err(err) => eprintln!("Warning: failed to copy to the clipboard: {err:#}"),
    }
}

fn send_to_clipboard(config: &Config, data: &[u8]) -> anyhow::Result<()> {
    let mut cmd = match config.clipboard_command.as_deref() {
        Some([program, args @ ..]) => {
            let mut cmd = Command::new(program);
            cmd.args(args);
            cmd
        }
        _ => clipboard_cmd(),
    };
    log::debug!("copying to the clipboard with {:?}", cmd);
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start `{program}`"))?;
    // Dropping stdin closes the pipe, which some clipboard tools wait for.
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin
            .write_all(data)
            .with_context(|| format!("failed to write to `{program}`")),
        None => Err(anyhow::anyhow!("no stdin pipe to the clipboard command")),
    };
    // Reap the child even when the write failed.
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for `{program}` to finish"));
    written?;
    let exit_status = exit_status?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("`{program}` exited with {exit_status}"))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
