//! Explorer configuration.
//!
//! Everything has a default; only the two dataset endpoints can be
//! overridden from the environment.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REMOTE_URL: &str =
    "https://raw.githubusercontent.com/typpo/spacekit/master/data/planets.json";
pub const DEFAULT_LOCAL_PATH: &str = "data/solar_system.json";

pub const ENV_REMOTE_URL: &str = "SOLAR_EXPLORER_REMOTE_URL";
pub const ENV_LOCAL_PATH: &str = "SOLAR_EXPLORER_LOCAL_PATH";

/// Scene-unit conversion factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneScales {
    /// Scene units per km of orbital distance
    pub distance: f64,
    /// Scene units per km of body radius
    pub radius: f64,
    /// Smallest rendered sphere radius (scene units)
    pub min_body_radius: f64,
}

impl Default for SceneScales {
    fn default() -> Self {
        Self {
            distance: 1.0 / 5e6,
            radius: 1.0 / 1200.0,
            min_body_radius: 0.5,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// First-choice dataset endpoint
    pub remote_url: String,
    /// Local cached copy of the dataset
    pub local_path: PathBuf,
    /// Timeout for the remote request
    pub request_timeout: Duration,
    /// Simulated days per real second
    pub day_scale: f64,
    pub scales: SceneScales,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            remote_url: DEFAULT_REMOTE_URL.to_string(),
            local_path: PathBuf::from(DEFAULT_LOCAL_PATH),
            request_timeout: Duration::from_secs(15),
            day_scale: 30.0,
            scales: SceneScales::default(),
        }
    }
}

impl ExplorerConfig {
    /// Defaults with endpoint overrides from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            std::env::var(ENV_REMOTE_URL).ok(),
            std::env::var(ENV_LOCAL_PATH).ok(),
        )
    }

    /// Apply endpoint overrides; empty values are ignored.
    pub fn with_overrides(mut self, remote_url: Option<String>, local_path: Option<String>) -> Self {
        if let Some(url) = remote_url.filter(|u| !u.trim().is_empty()) {
            self.remote_url = url.trim().to_string();
        }
        if let Some(path) = local_path.filter(|p| !p.trim().is_empty()) {
            self.local_path = PathBuf::from(path.trim());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ExplorerConfig::default();
        assert_eq!(config.remote_url, DEFAULT_REMOTE_URL);
        assert_eq!(config.local_path, PathBuf::from(DEFAULT_LOCAL_PATH));
        assert_eq!(config.day_scale, 30.0);
        assert_eq!(config.scales.distance, 2e-7);
    }

    #[test]
    fn overrides_replace_endpoints() {
        let config = ExplorerConfig::default().with_overrides(
            Some("http://localhost:8000/bodies.json".into()),
            Some("/tmp/bodies.json".into()),
        );
        assert_eq!(config.remote_url, "http://localhost:8000/bodies.json");
        assert_eq!(config.local_path, PathBuf::from("/tmp/bodies.json"));
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = ExplorerConfig::default().with_overrides(Some("  ".into()), None);
        assert_eq!(config.remote_url, DEFAULT_REMOTE_URL);
    }
}
