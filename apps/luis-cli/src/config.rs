use std::path::Path;
use std::time::Duration;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use luis_programmatic::{LuisClientConfig, Region};
use serde::{Deserialize, Serialize};

/// Environment variable prefix, e.g. `LUIS_SUBSCRIPTION_KEY`
pub const ENV_PREFIX: &str = "LUIS_";

/// Layered CLI configuration: YAML file < `LUIS_*` environment < flags.
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    pub region: Option<String>,
    pub subscription_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl CliConfig {
    /// Merge the configuration layers.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not exist or any layer does not parse.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file {} not found", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
            .context("invalid configuration")
    }

    /// Build the client configuration.
    ///
    /// # Errors
    ///
    /// Fails if no subscription key is configured or the region is unknown.
    pub fn client_config(&self) -> anyhow::Result<LuisClientConfig> {
        let Some(key) = self.subscription_key.as_deref().filter(|k| !k.is_empty()) else {
            bail!("no subscription key: pass --subscription-key, set LUIS_SUBSCRIPTION_KEY or add subscription_key to the config file");
        };
        let region = match self.region.as_deref() {
            Some(label) => label.parse::<Region>()?,
            None => Region::default(),
        };

        let mut config = LuisClientConfig::new(region, key);
        if let Some(base_url) = self.base_url.as_deref() {
            config = config.with_base_url(base_url);
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}
