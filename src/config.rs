use std::{fs, path::Path};

use anyhow::bail;
use serde::Deserialize;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Contents of the page `<title>`.
    pub title: String,
    /// Prepended to stylesheet and script links, e.g. `/sitemap/`.
    pub base_path: String,
    /// Sitemap JSON, relative to the site home.
    pub input: String,
    /// Prefix for image paths that are not absolute URLs.
    pub image_prefix: String,
    pub assets_dir: String,
    pub static_dir: String,
    pub templates_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Telemundo Sitemap".to_string(),
            base_path: String::new(),
            input: "assets/sitemap.json".to_string(),
            image_prefix: "assets/".to_string(),
            assets_dir: "assets".to_string(),
            static_dir: "static".to_string(),
            templates_dir: "templates".to_string(),
        }
    }
}

impl Config {
    /// Loads `config.toml` from the site home, falling back to the defaults
    /// when there is none.
    pub fn load(home: &Path) -> anyhow::Result<Self> {
        let config_file = home.join(CONFIG_FILE);

        if !config_file.exists() {
            tracing::debug!(home = %home.display(), "no {CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }

        let config_text = fs::read_to_string(&config_file)?;
        let config: Self = toml::from_str(&config_text)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let assets_dir = self.assets_dir.trim_matches('/');
        if assets_dir.is_empty() {
            bail!("assets_dir must name a directory below the site home");
        }

        if !self.image_prefix.contains("://")
            && self.image_prefix.trim_matches('/') != assets_dir
        {
            tracing::warn!(
                image_prefix = %self.image_prefix,
                assets_dir = %self.assets_dir,
                "image_prefix does not point at assets_dir, local images will not resolve"
            );
        }

        Ok(())
    }
}
