use anyhow::Context;
use serde::Deserialize;
use tracing::{
  error,
  info,
  warn
};

pub const DEFAULT_TICK_MS: u32 = 1_000;
pub const DEFAULT_DRAFT_KEY: &str =
  "formData";
pub const DEFAULT_SUBMITTED_KEY: &str =
  "submittedData";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct TimerConfig {
  pub tick_ms: u32
}

impl Default for TimerConfig {
  fn default() -> Self {
    Self {
      tick_ms: DEFAULT_TICK_MS
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub draft_key:     String,
  pub submitted_key: String
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      draft_key:     DEFAULT_DRAFT_KEY
        .to_string(),
      submitted_key:
        DEFAULT_SUBMITTED_KEY.to_string()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(default)]
pub struct DemoConfig {
  pub timer:   TimerConfig,
  pub storage: StorageConfig
}

impl DemoConfig {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let parsed =
      toml::from_str::<DemoConfig>(text)
        .context(
          "failed to parse demo config"
        )?;
    Ok(parsed.normalized())
  }

  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(config) => {
        info!(
          tick_ms = config.timer.tick_ms,
          draft_key = %config.storage.draft_key,
          submitted_key = %config.storage.submitted_key,
          "loaded demo config"
        );
        config
      }
      | Err(error) => {
        error!(error = %format!("{error:#}"), "using default demo config");
        DemoConfig::default()
      }
    }
  }

  fn normalized(mut self) -> Self {
    if self.timer.tick_ms == 0 {
      warn!(
        "timer.tick_ms must be positive; \
         using default"
      );
      self.timer.tick_ms =
        DEFAULT_TICK_MS;
    }
    if self
      .storage
      .draft_key
      .trim()
      .is_empty()
    {
      warn!(
        "storage.draft_key is blank; \
         using default"
      );
      self.storage.draft_key =
        DEFAULT_DRAFT_KEY.to_string();
    }
    if self
      .storage
      .submitted_key
      .trim()
      .is_empty()
    {
      warn!(
        "storage.submitted_key is \
         blank; using default"
      );
      self.storage.submitted_key =
        DEFAULT_SUBMITTED_KEY.to_string();
    }
    // The two channels must never share a key.
    if self.storage.draft_key
      == self.storage.submitted_key
    {
      warn!(
        key = %self.storage.draft_key,
        "storage keys collide; using \
         defaults"
      );
      self.storage = StorageConfig::default();
    }
    self
  }
}
