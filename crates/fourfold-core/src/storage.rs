use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{
  debug,
  error
};

pub trait KeyValueStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  entries: BTreeMap<String, String>
}

impl MemoryStore {
  pub fn raw(
    &self,
    key: &str
  ) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }
}

impl KeyValueStore for MemoryStore {
  fn get(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.entries.get(key).cloned())
  }

  fn set(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .entries
      .insert(key.to_string(), value.to_string());
    Ok(())
  }
}

/// Reads `key` and decodes it as JSON.
///
/// Missing keys, unreadable stores and values that do not
/// match `T` all come back as `None`; the latter two are
/// logged and otherwise swallowed.
pub fn read_json<T, S>(
  store: &S,
  key: &str
) -> Option<T>
where
  T: DeserializeOwned,
  S: KeyValueStore + ?Sized
{
  let raw = match store.get(key) {
    | Ok(Some(raw)) => raw,
    | Ok(None) => {
      debug!(key, "no stored value");
      return None;
    }
    | Err(error) => {
      error!(key, error = %format!("{error:#}"), "failed reading stored value");
      return None;
    }
  };

  match serde_json::from_str::<T>(&raw) {
    | Ok(value) => Some(value),
    | Err(error) => {
      error!(
        key,
        %error,
        "discarding unparsable stored \
         value"
      );
      None
    }
  }
}

pub fn write_json<T, S>(
  store: &mut S,
  key: &str,
  value: &T
) -> bool
where
  T: Serialize + ?Sized,
  S: KeyValueStore + ?Sized
{
  let json = match serde_json::to_string(value) {
    | Ok(json) => json,
    | Err(error) => {
      error!(key, %error, "failed encoding value");
      return false;
    }
  };

  match store.set(key, &json) {
    | Ok(()) => {
      debug!(key, bytes = json.len(), "stored value");
      true
    }
    | Err(error) => {
      error!(key, error = %format!("{error:#}"), "failed writing stored value");
      false
    }
  }
}

#[cfg(not(target_arch = "wasm32"))]
pub use dir::DirStore;

#[cfg(not(target_arch = "wasm32"))]
mod dir {
  use std::fs;
  use std::io::{
    ErrorKind,
    Write
  };
  use std::path::{
    Path,
    PathBuf
  };

  use anyhow::{
    Context,
    anyhow,
    bail
  };
  use tempfile::NamedTempFile;
  use tracing::info;

  use super::KeyValueStore;

  #[derive(Debug, Clone)]
  pub struct DirStore {
    root: PathBuf
  }

  impl DirStore {
    #[tracing::instrument(skip(root))]
    pub fn open(
      root: &Path
    ) -> anyhow::Result<Self> {
      fs::create_dir_all(root).with_context(
        || {
          format!(
            "failed to create {}",
            root.display()
          )
        }
      )?;
      info!(root = %root.display(), "opened directory store");
      Ok(Self {
        root: root.to_path_buf()
      })
    }

    pub fn root(&self) -> &Path {
      &self.root
    }

    fn path_for(
      &self,
      key: &str
    ) -> anyhow::Result<PathBuf> {
      if key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
      {
        bail!("invalid storage key: {key:?}");
      }
      Ok(self.root.join(format!("{key}.json")))
    }
  }

  impl KeyValueStore for DirStore {
    fn get(
      &self,
      key: &str
    ) -> anyhow::Result<Option<String>> {
      let path = self.path_for(key)?;
      match fs::read_to_string(&path) {
        | Ok(text) => Ok(Some(text)),
        | Err(err)
          if err.kind()
            == ErrorKind::NotFound =>
        {
          Ok(None)
        }
        | Err(err) => {
          Err(err).with_context(|| {
            format!(
              "failed reading {}",
              path.display()
            )
          })
        }
      }
    }

    fn set(
      &mut self,
      key: &str,
      value: &str
    ) -> anyhow::Result<()> {
      let path = self.path_for(key)?;
      let mut temp =
        NamedTempFile::new_in(&self.root)?;
      temp.write_all(value.as_bytes())?;
      temp.flush()?;
      temp.persist(&path).map_err(|err| {
        anyhow!(
          "failed to persist {}: {}",
          path.display(),
          err
        )
      })?;
      Ok(())
    }
  }
}
