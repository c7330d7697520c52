//! Configuration for the upstream generator and the offline fallback

use std::time::Duration;
use serde::{Deserialize, Serialize};
use log::debug;

pub const DEFAULT_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_OFFLINE_DELAY_MS: u64 = 2000;

pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_BASE: &str = "FRIDGECHEF_API_BASE";
pub const ENV_MODEL: &str = "FRIDGECHEF_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "FRIDGECHEF_TIMEOUT_SECS";
pub const ENV_OFFLINE_DELAY_MS: &str = "FRIDGECHEF_OFFLINE_DELAY_MS";

/// fridgechef configuration. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChefConfig
{   /// Upstream credential; `None` or blank selects the offline generator
    pub api_key: Option<String>
  , /// Upstream API base URL
    pub api_base: String
  , /// Model name used in the generate endpoint
    pub model: String
  , /// Upstream request timeout in seconds
    pub timeout_secs: u64
  , /// Simulated latency of the offline generator
    pub offline_delay_ms: u64
}

impl Default for ChefConfig
{   fn default() -> Self
    {   ChefConfig
        {   api_key: None
          , api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , timeout_secs: DEFAULT_TIMEOUT_SECS
          , offline_delay_ms: DEFAULT_OFFLINE_DELAY_MS
        }
    }
}

impl ChefConfig
{   /// Build a config from the process environment.
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, crate::error::Error>
    {   Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F)
      -> Result<Self, crate::error::Error>
    where F: Fn(&str) -> Option<String>
    {   let mut config = ChefConfig::default();

        config.api_key = lookup(ENV_API_KEY);
        if let Some(base) = lookup(ENV_API_BASE)
        {   config.api_base = base.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(ENV_MODEL)
        {   config.model = model;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS)
        {   config.timeout_secs = parse_number(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_OFFLINE_DELAY_MS)
        {   config.offline_delay_ms
              = parse_number(ENV_OFFLINE_DELAY_MS, &raw)?;
        }

        debug!(
          "Loaded config: model={}, timeout={}s, credential={}",
          config.model,
          config.timeout_secs,
          config.has_credential()
        );
        Ok(config)
    }

    /// Credential with surrounding whitespace removed, if any is left
    pub fn credential(&self) -> Option<&str>
    {   self.api_key
          .as_deref()
          .map(str::trim)
          .filter(|k| !k.is_empty())
    }

    pub fn has_credential(&self) -> bool
    {   self.credential().is_some()
    }

    pub fn timeout(&self) -> Duration
    {   Duration::from_secs(self.timeout_secs)
    }

    pub fn offline_delay(&self) -> Duration
    {   Duration::from_millis(self.offline_delay_ms)
    }
}

fn parse_number(name: &str, raw: &str)
  -> Result<u64, crate::error::Error>
{   raw.trim().parse::<u64>().map_err(|e| {
      crate::error::Error::InvalidConfiguration(
        format!("{}={:?}: {}", name, raw, e)
      )
    })
}
