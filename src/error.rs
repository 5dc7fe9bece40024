//! Error taxonomy.
//!
//! - `LoadError`: one dataset tier could not produce a usable dataset.
//!   Recovered by the loader falling through to the next tier.
//! - `BuildError`: the dataset resolved but cannot form a body hierarchy.
//!   Fatal to startup.

use std::path::PathBuf;

/// Failure of a single dataset tier (remote, local, ...).
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("[{tier}] invalid endpoint {url}: {source}")]
    InvalidUrl {
        tier: &'static str,
        url: String,
        source: url::ParseError,
    },
    #[error("[{tier}] request failed: {source}")]
    Request {
        tier: &'static str,
        source: reqwest::Error,
    },
    #[error("[{tier}] response {status}")]
    Status { tier: &'static str, status: u16 },
    #[error("[{tier}] cannot read {}: {source}", path.display())]
    Io {
        tier: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("[{tier}] invalid JSON: {source}")]
    Parse {
        tier: &'static str,
        source: serde_json::Error,
    },
    #[error("[{tier}] data missing expected structure: {reason}")]
    Structure { tier: &'static str, reason: String },
}

impl LoadError {
    /// Label of the tier that failed.
    pub fn tier(&self) -> &'static str {
        match self {
            LoadError::InvalidUrl { tier, .. }
            | LoadError::Request { tier, .. }
            | LoadError::Status { tier, .. }
            | LoadError::Io { tier, .. }
            | LoadError::Parse { tier, .. }
            | LoadError::Structure { tier, .. } => *tier,
        }
    }
}

/// The dataset cannot be turned into a body hierarchy.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("Dataset missing star data ({0} top-level bodies)")]
    MissingStar(usize),
}
