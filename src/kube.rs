use std::path::PathBuf;
use std::process::Stdio;
use std::sync::OnceLock;

use async_trait::async_trait;
use regex::bytes::Regex;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::defaults::Defaults;
use crate::error::SecretBuildError;
use crate::secrets::SecretData;

/// Where kubectl reads a value that cannot travel as a command-line literal.
const STDIN_FILE: &str = "/dev/stdin";

/// Input handed to the secret builder once the wizard is complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    pub secrets: SecretData,
    pub namespace: String,
    pub secret_name: String,
    pub certificate_path: Option<PathBuf>,
}

/// Produces manifest bytes: plain when no certificate is set, sealed otherwise.
#[async_trait]
pub trait SecretBuilder: Send + Sync {
    async fn build(&self, request: &BuildRequest) -> Result<Vec<u8>, SecretBuildError>;
}

/// Shells out to `kubectl create secret` and pipes through `kubeseal` when sealing.
#[derive(Debug, Clone)]
pub struct Kubectl {
    pub kubectl: String,
    pub kubeseal: String,
}

impl Default for Kubectl {
    fn default() -> Self {
        Self {
            kubectl: Defaults::KUBECTL_BIN.to_string(),
            kubeseal: Defaults::KUBESEAL_BIN.to_string(),
        }
    }
}

#[async_trait]
impl SecretBuilder for Kubectl {
    async fn build(&self, request: &BuildRequest) -> Result<Vec<u8>, SecretBuildError> {
        tracing::info!(
            namespace = %request.namespace,
            secret = %request.secret_name,
            keys = request.secrets.len(),
            sealed = request.certificate_path.is_some(),
            "building secret manifest"
        );

        let payload = stdin_payload(request)?;
        let manifest = run(&self.kubectl, &create_secret_args(request), payload).await?;

        let output = match &request.certificate_path {
            None => manifest,
            Some(cert) => run(&self.kubeseal, &kubeseal_args(cert), Some(&manifest)).await?,
        };

        Ok(strip_creation_timestamp(&output))
    }
}

/// Text without NUL bytes can be passed as an argument unchanged.
fn as_literal(value: &[u8]) -> Option<&str> {
    std::str::from_utf8(value).ok().filter(|text| !text.contains('\0'))
}

/// Arguments for `kubectl create secret generic`: `--from-literal` per text
/// value, `--from-file` on stdin for a binary one.
pub fn create_secret_args(request: &BuildRequest) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "create".into(),
        "secret".into(),
        "generic".into(),
        request.secret_name.clone(),
        "-n".into(),
        request.namespace.clone(),
        "--dry-run=client".into(),
        "-o".into(),
        "yaml".into(),
    ];
    for (k, v) in &request.secrets {
        match as_literal(v) {
            Some(text) => args.push(format!("--from-literal={k}={text}")),
            None => args.push(format!("--from-file={k}={STDIN_FILE}")),
        }
    }
    args
}

/// The single binary value, if any, which kubectl reads from stdin.
pub fn stdin_payload(request: &BuildRequest) -> Result<Option<&[u8]>, SecretBuildError> {
    let binary = || request.secrets.iter().filter(|(_, v)| as_literal(v).is_none());
    let mut found = binary();
    match (found.next(), found.next()) {
        (None, _) => Ok(None),
        (Some((_, value)), None) => Ok(Some(value.as_slice())),
        _ => Err(SecretBuildError::BinaryValues(binary().map(|(k, _)| k.clone()).collect())),
    }
}

fn kubeseal_args(cert: &std::path::Path) -> Vec<String> {
    vec![
        "--format".into(),
        "yaml".into(),
        "--cert".into(),
        cert.display().to_string(),
    ]
}

/// kubectl emits `creationTimestamp: null` for dry runs; it is noise in a manifest file.
pub fn strip_creation_timestamp(manifest: &[u8]) -> Vec<u8> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s*creationTimestamp: null").expect("static regex"));
    re.replace_all(manifest, &b""[..]).into_owned()
}

/// Runs one program to completion, optionally feeding `input` on stdin.
async fn run(program: &str, args: &[String], input: Option<&[u8]>) -> Result<Vec<u8>, SecretBuildError> {
    let mut argv = vec![program.to_string()];
    argv.extend(args.iter().cloned());

    let mut child = Command::new(program)
        .args(args)
        .stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| SecretBuildError::command(&argv, e, b""))?;

    let output = match (input, child.stdin.take()) {
        (Some(bytes), Some(mut stdin)) => {
            let feed = async move {
                let res = stdin.write_all(bytes).await;
                drop(stdin);
                res
            };
            let (fed, output) = tokio::join!(feed, child.wait_with_output());
            let output = output.map_err(|e| SecretBuildError::command(&argv, e, b""))?;
            if let Err(e) = fed {
                if output.status.success() {
                    return Err(SecretBuildError::command(&argv, e, &output.stderr));
                }
            }
            output
        }
        _ => child
            .wait_with_output()
            .await
            .map_err(|e| SecretBuildError::command(&argv, e, b""))?,
    };

    if !output.status.success() {
        tracing::warn!(program, status = %output.status, "external command failed");
        return Err(SecretBuildError::command(&argv, output.status, &output.stderr));
    }
    Ok(output.stdout)
}
