//! Per-project transform manifest (`transform.yaml`).

use crate::error::{ReleaseError, Result};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Value of a manifest `env` entry
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    /// Literal default used when the deployer supplies nothing
    Default(Value),
    /// No default; the deployer must supply a value
    Required,
}

/// One declared environment variable
#[derive(Debug, Clone, PartialEq)]
pub struct EnvVar {
    pub name: String,
    pub value: EnvValue,
}

impl EnvVar {
    pub fn is_required(&self) -> bool {
        self.value == EnvValue::Required
    }
}

/// The fields of a transform manifest this tool reads.
///
/// `env` keeps document order so the generated deploy command lists
/// variables in the order the manifest declares them.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub description: String,
    pub env: Vec<EnvVar>,
}

#[derive(Deserialize)]
struct RawManifest {
    description: String,
    #[serde(default)]
    env: Option<Mapping>,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    ///
    /// `required_marker` is the env value that means "no default".
    pub fn load(path: &Path, required_marker: &str) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            ReleaseError::manifest(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::parse(&text, required_marker).map_err(|e| match e {
            ReleaseError::Manifest(msg) => {
                ReleaseError::manifest(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Parse manifest text
    pub fn parse(text: &str, required_marker: &str) -> Result<Self> {
        let raw: RawManifest = serde_yaml::from_str(text)
            .map_err(|e| ReleaseError::manifest(format!("Invalid manifest: {}", e)))?;

        let mut env = Vec::new();
        for (key, value) in raw.env.unwrap_or_default() {
            let name = scalar_to_string(&key).ok_or_else(|| {
                ReleaseError::manifest(format!("Invalid env variable name: {:?}", key))
            })?;
            let value = match value {
                Value::String(ref s) if s == required_marker => EnvValue::Required,
                other => EnvValue::Default(other),
            };
            env.push(EnvVar { name, value });
        }

        Ok(Manifest {
            description: raw.description,
            env,
        })
    }

    /// Names of env variables without a default, in declaration order
    pub fn required_env(&self) -> Vec<&str> {
        self.env
            .iter()
            .filter(|var| var.is_required())
            .map(|var| var.name.as_str())
            .collect()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
