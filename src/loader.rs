//! Tiered dataset loader: remote → local cache → embedded.
//!
//! Each tier is tried once, in order. The first tier whose payload parses
//! and carries a non-empty `bodies` list wins; any failure is logged as a
//! warning and falls through. The embedded tier cannot fail, so `load`
//! always yields a dataset.

use std::path::PathBuf;
use std::time::Duration;

use crate::config::ExplorerConfig;
use crate::data::embedded::embedded_dataset;
use crate::data::Dataset;
use crate::error::LoadError;
use crate::net::fetch::fetch_json;

/// Which tier served the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Remote,
    Local,
    Embedded,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Remote => "remote",
            Tier::Local => "local",
            Tier::Embedded => "embedded",
        }
    }
}

/// A fallible source of raw dataset text.
pub trait DataSource: Send {
    fn tier(&self) -> Tier;

    /// Fetch the raw document. Structural validation happens in the loader.
    fn fetch(&self) -> Result<String, LoadError>;
}

/// HTTP endpoint.
pub struct RemoteSource {
    pub url: String,
    pub timeout: Duration,
}

impl DataSource for RemoteSource {
    fn tier(&self) -> Tier {
        Tier::Remote
    }

    fn fetch(&self) -> Result<String, LoadError> {
        let result = fetch_json(&self.url, self.timeout, Tier::Remote.label())?;
        log::debug!(
            "Fetched {} ({} bytes, {}, status {})",
            result.url,
            result.body.len(),
            result.content_type,
            result.status
        );
        Ok(result.body)
    }
}

/// Cached copy on the local filesystem.
pub struct LocalSource {
    pub path: PathBuf,
}

impl DataSource for LocalSource {
    fn tier(&self) -> Tier {
        Tier::Local
    }

    fn fetch(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            tier: Tier::Local.label(),
            path: self.path.clone(),
            source,
        })
    }
}

/// Dataset together with the tier that produced it.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub tier: Tier,
}

/// Parse and validate a raw document.
///
/// Fails when the JSON is malformed, when `bodies` is absent, not a list or
/// empty, or when any record breaks the schema.
pub fn parse_dataset(text: &str, tier: &'static str) -> Result<Dataset, LoadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| LoadError::Parse { tier, source })?;

    let structure = |reason: String| LoadError::Structure { tier, reason };

    match value.get("bodies") {
        Some(serde_json::Value::Array(list)) if !list.is_empty() => {}
        Some(serde_json::Value::Array(_)) => return Err(structure("`bodies` is empty".into())),
        Some(_) => return Err(structure("`bodies` is not a list".into())),
        None => return Err(structure("`bodies` is missing".into())),
    }

    let dataset: Dataset =
        serde_json::from_value(value).map_err(|e| structure(e.to_string()))?;
    dataset.check().map_err(structure)?;
    Ok(dataset)
}

/// The three-tier loader.
pub struct DatasetLoader {
    tiers: Vec<Box<dyn DataSource>>,
}

impl DatasetLoader {
    /// Remote endpoint first, then the local cache.
    pub fn new(remote: Box<dyn DataSource>, local: Box<dyn DataSource>) -> Self {
        Self {
            tiers: vec![remote, local],
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(
            Box::new(RemoteSource {
                url: config.remote_url.clone(),
                timeout: config.request_timeout,
            }),
            Box::new(LocalSource {
                path: config.local_path.clone(),
            }),
        )
    }

    /// Resolve a dataset. Never fails.
    pub fn load(&self) -> LoadedDataset {
        for source in &self.tiers {
            let tier = source.tier();
            match source
                .fetch()
                .and_then(|text| parse_dataset(&text, tier.label()))
            {
                Ok(dataset) => {
                    log::info!(
                        "Loaded {} bodies from {} tier ({}, updated {})",
                        dataset.body_count(),
                        tier.label(),
                        dataset.source,
                        dataset.updated
                    );
                    return LoadedDataset { dataset, tier };
                }
                Err(e) => {
                    log::warn!("{} data unavailable, falling through: {}", tier.label(), e);
                }
            }
        }

        let dataset = embedded_dataset();
        log::info!(
            "Using embedded fallback dataset ({} bodies)",
            dataset.body_count()
        );
        LoadedDataset {
            dataset,
            tier: Tier::Embedded,
        }
    }
}
