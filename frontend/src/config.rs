use leptos::*;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

pub const DEFAULT_HOME_BACKGROUND: &str = "/assets/home.webp";

// Resolved by the asset pipeline and baked into the binary.
const EMBEDDED_MANIFEST: &str = include_str!("../assets/manifest.json");

static MANIFEST: OnceLock<AssetManifest> = OnceLock::new();

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("asset `{0}` has an empty path")]
    EmptyAsset(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub home_background: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            home_background: DEFAULT_HOME_BACKGROUND.to_string(),
        }
    }
}

impl AssetManifest {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let manifest: AssetManifest = serde_json::from_str(raw)?;
        if manifest.home_background.trim().is_empty() {
            return Err(ConfigError::EmptyAsset("home_background"));
        }
        Ok(manifest)
    }

    /// Manifest shipped with the build. Falls back to the defaults when the
    /// embedded file cannot be used.
    pub fn embedded() -> &'static AssetManifest {
        MANIFEST.get_or_init(|| {
            AssetManifest::parse(EMBEDDED_MANIFEST).unwrap_or_else(|err| {
                log::warn!("falling back to default asset manifest: {}", err);
                AssetManifest::default()
            })
        })
    }

    pub fn background_style(&self) -> String {
        format!("background-image: url('{}');", self.home_background)
    }
}

pub fn provide_asset_manifest(manifest: AssetManifest) {
    provide_context(manifest);
}

pub fn use_asset_manifest() -> AssetManifest {
    use_context::<AssetManifest>().unwrap_or_else(|| AssetManifest::embedded().clone())
}
