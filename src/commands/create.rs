use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::TargetArgs;
use crate::kube::{BuildRequest, SecretBuilder};
use crate::secrets::{FileMode, SecretSpec};

/// Turns command-line arguments into the same `SecretSpec` the wizard assembles.
pub fn spec_from_args(target: TargetArgs, mode: FileMode, key: Option<String>) -> SecretSpec {
    SecretSpec {
        mode,
        source_path: target.file,
        secret_key: key,
        namespace: target.namespace,
        secret_name: target.secret_name,
        certificate_path: target.cert,
    }
}

/// Builds the manifest for `spec`.
pub async fn generate(spec: &SecretSpec, builder: &dyn SecretBuilder) -> Result<Vec<u8>> {
    let request = BuildRequest {
        secrets: spec.load_secrets()?,
        namespace: spec.namespace.clone(),
        secret_name: spec.secret_name.clone(),
        certificate_path: spec.certificate_path.clone(),
    };
    tracing::info!(
        source = %spec.source_path.display(),
        mode = %spec.mode,
        entries = request.secrets.len(),
        sealed = request.certificate_path.is_some(),
        "building secret"
    );
    let manifest = builder.build(&request).await?;
    Ok(manifest)
}

pub fn emit(manifest: &[u8], out: &mut impl Write) -> Result<()> {
    out.write_all(manifest).context("writing manifest to stdout")?;
    out.flush()?;
    Ok(())
}
