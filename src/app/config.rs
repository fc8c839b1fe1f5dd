use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::call::Value;
use crate::domain::error::{MockError, Result};

/// Mock construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// First-parameter names that mark the target as an instance method.
    pub receiver_names: Vec<String>,
    /// Value injected in place of the receiver on every call.
    pub self_placeholder: Value,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            receiver_names: vec!["self".to_string(), "this".to_string()],
            self_placeholder: Value::Null,
        }
    }
}

impl MockConfig {
    /// Treat every target as a plain function, whatever its first parameter is called.
    pub fn free_function() -> Self {
        Self {
            receiver_names: Vec::new(),
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MockError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
