use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::SecretBuildError;

/// How the chosen input file becomes secret data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    /// The whole file is the value of a single key.
    RawFile,
    /// The file is a yaml mapping of keys to values.
    YamlMap,
}

impl FileMode {
    pub const ALL: [FileMode; 2] = [FileMode::RawFile, FileMode::YamlMap];

    pub fn label(self) -> &'static str {
        match self {
            FileMode::RawFile => "file",
            FileMode::YamlMap => "yaml",
        }
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// True when the path looks like a yaml key/value file.
pub fn is_structured(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false)
}

/// Secret entries by key. Values are kept as raw bytes.
pub type SecretData = BTreeMap<String, Vec<u8>>;

/// Everything needed to produce one secret manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSpec {
    pub mode: FileMode,
    pub source_path: PathBuf,
    /// Only used in raw-file mode.
    pub secret_key: Option<String>,
    pub namespace: String,
    pub secret_name: String,
    pub certificate_path: Option<PathBuf>,
}

impl SecretSpec {
    /// Reads the source file and resolves it into key/value pairs.
    pub fn load_secrets(&self) -> Result<SecretData, SecretBuildError> {
        match self.mode {
            FileMode::RawFile => {
                let key = self.secret_key.clone().unwrap_or_default();
                load_raw_file(&self.source_path, &key)
            }
            FileMode::YamlMap => load_yaml_map(&self.source_path),
        }
    }
}

fn read_non_empty(path: &Path) -> Result<Vec<u8>, SecretBuildError> {
    let content = fs::read(path).map_err(|source| SecretBuildError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    if content.is_empty() {
        return Err(SecretBuildError::EmptyFile(path.to_path_buf()));
    }
    Ok(content)
}

/// The entire file content becomes the value of `key`, byte for byte.
pub fn load_raw_file(path: &Path, key: &str) -> Result<SecretData, SecretBuildError> {
    let content = read_non_empty(path)?;
    Ok(BTreeMap::from([(key.to_string(), content)]))
}

/// Parses a yaml mapping; scalar values are stringified.
pub fn load_yaml_map(path: &Path) -> Result<SecretData, SecretBuildError> {
    let content = read_non_empty(path)?;
    let raw: BTreeMap<String, Value> =
        serde_yaml::from_slice(&content).map_err(|source| SecretBuildError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null => String::new(),
            _ => {
                return Err(SecretBuildError::NonScalarValue {
                    path: path.to_path_buf(),
                    key,
                })
            }
        };
        out.insert(key, text.into_bytes());
    }
    Ok(out)
}
