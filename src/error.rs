use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A directory could not be listed.
#[derive(Debug, Error)]
#[error("cannot read directory {}: {source}", .path.display())]
pub struct FilesystemError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Anything that stops a secret manifest from being produced.
#[derive(Debug, Error)]
pub enum SecretBuildError {
    #[error("reading {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: file content is empty", .0.display())]
    EmptyFile(PathBuf),

    #[error("parsing {} as yaml: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{}: value of key '{key}' is not a scalar", .path.display())]
    NonScalarValue { path: PathBuf, key: String },

    #[error("only one binary value can be read from stdin, got: {}", .0.join(", "))]
    BinaryValues(Vec<String>),

    #[error("{}", command_error_text(.command, .reason, .stderr))]
    Command {
        command: String,
        reason: String,
        stderr: String,
    },
}

impl SecretBuildError {
    pub fn command(args: &[String], reason: impl ToString, stderr: &[u8]) -> Self {
        SecretBuildError::Command {
            command: args.join(" "),
            reason: reason.to_string(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }
}

fn command_error_text(command: &str, reason: &str, stderr: &str) -> String {
    let mut text = format!("command '{command}' failed: {reason}");
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        text.push('\n');
        text.push_str(stderr);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_includes_trimmed_stderr() {
        let args = vec!["kubeseal".to_string(), "--format".into(), "yaml".into()];
        let err = SecretBuildError::command(&args, "exit status: 1", b"  error: cannot fetch certificate\n");
        assert_eq!(
            err.to_string(),
            "command 'kubeseal --format yaml' failed: exit status: 1\nerror: cannot fetch certificate"
        );
    }

    #[test]
    fn command_error_without_stderr_is_one_line() {
        let args = vec!["kubectl".to_string()];
        let err = SecretBuildError::command(&args, "No such file or directory", b"   ");
        assert_eq!(err.to_string(), "command 'kubectl' failed: No such file or directory");
    }
}
