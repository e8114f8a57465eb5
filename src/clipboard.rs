use anyhow::{Context, Result, anyhow};
use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

#[cfg(target_os = "macos")]
const CANDIDATES: &[(&str, &[&str])] = &[("pbcopy", &[])];

#[cfg(target_os = "windows")]
const CANDIDATES: &[(&str, &[&str])] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Writes text to the system clipboard by piping it into a helper program.
pub struct Clipboard {
    command: Option<Vec<String>>,
}

impl Clipboard {
    /// `command` replaces the platform helpers; it is split on whitespace
    /// and receives the text on stdin.
    pub fn new(command: Option<String>) -> Self {
        let command = command
            .map(|line| line.split_whitespace().map(str::to_string).collect::<Vec<_>>())
            .filter(|parts| !parts.is_empty());
        Self { command }
    }

    pub fn write(&self, text: &str) -> Result<()> {
        if let Some(parts) = &self.command {
            let args: Vec<&str> = parts[1..].iter().map(String::as_str).collect();
            return pipe_to(&parts[0], &args, text).context("unable to copy to clipboard");
        }

        let mut last_error = None;
        for (program, args) in CANDIDATES {
            match pipe_to(program, args, text) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    debug!("clipboard helper {} failed: {:#}", program, err);
                    last_error = Some(err);
                }
            }
        }
        Err(last_error
            .unwrap_or_else(|| anyhow!("no clipboard helper for this platform"))
            .context("unable to copy to clipboard"))
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to execute {}", program))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write to {}", program))?;
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {}", program))?;
    if !status.success() {
        return Err(anyhow!("{} exited with status {}", program, status));
    }
    Ok(())
}
