use std::fmt;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ManifestGroup {
    pub folder: String,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageEntry {
    pub file: String,
    pub title: String,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

pub fn parse_manifest(raw: &str) -> Result<Vec<ManifestGroup>, ManifestError> {
    serde_json::from_str(raw).map_err(|err| ManifestError::Json {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Json {
                line,
                column,
                message,
            } => write!(f, "invalid manifest at {line}:{column}: {message}"),
        }
    }
}

impl std::error::Error for ManifestError {}
