use std::process::{Child, Command, Stdio};

use tracing::debug;

use super::Voice;

/// Speech programs tried in order when no command is configured.
const CANDIDATES: &[&str] = &["espeak-ng", "espeak", "spd-say", "say"];

/// Speaks through an external text-to-speech program.
///
/// Best effort: if no program is available, or spawning fails, the voice
/// quietly goes mute.
pub struct SpeechVoice {
    command: Option<Vec<String>>,
    child: Option<Child>,
}

impl SpeechVoice {
    /// Use `command` (program plus optional arguments) or the first candidate on PATH.
    pub fn new(command: Option<&str>) -> Self {
        let command = match command {
            Some(cmd) => split_command(cmd),
            None => detect_program().map(|p| vec![p]),
        };
        if let Some(cmd) = &command {
            debug!(program = %cmd[0], "speech voice ready");
        }
        Self {
            command,
            child: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.command.is_some()
    }
}

impl Voice for SpeechVoice {
    fn speak(&mut self, text: &str) {
        let Some(cmd) = &self.command else {
            return;
        };
        let spawned = Command::new(&cmd[0])
            .args(&cmd[1..])
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => self.child = Some(child),
            Err(e) => {
                debug!(program = %cmd[0], error = %e, "speech spawn failed, disabling");
                self.command = None;
            }
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Already-finished children just get reaped.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Drop for SpeechVoice {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn split_command(cmd: &str) -> Option<Vec<String>> {
    let parts: Vec<String> = cmd.split_whitespace().map(String::from).collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts)
    }
}

fn detect_program() -> Option<String> {
    let path = std::env::var_os("PATH")?;
    let dirs: Vec<_> = std::env::split_paths(&path).collect();
    CANDIDATES
        .iter()
        .find(|name| dirs.iter().any(|dir| dir.join(name).is_file()))
        .map(|name| name.to_string())
}
