use anyhow::anyhow;
use fourfold_core::{
  DemoConfig,
  KeyValueStore
};

const DEMO_CONFIG_TOML: &str =
  include_str!("../../assets/fourfold.toml");

pub(crate) fn load_demo_config() -> DemoConfig {
  DemoConfig::load_or_default(
    DEMO_CONFIG_TOML
  )
}

/// `window.localStorage` as a [`KeyValueStore`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserStore;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| anyhow!("no window"))?
    .local_storage()
    .map_err(|error| {
      anyhow!(
        "localStorage unavailable: \
         {error:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!("localStorage disabled")
    })
}

impl KeyValueStore for BrowserStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|error| {
        anyhow!(
          "failed reading {key}: \
           {error:?}"
        )
      })
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        anyhow!(
          "failed writing {key}: \
           {error:?}"
        )
      })
  }
}
