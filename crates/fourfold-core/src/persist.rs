use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::StorageConfig;
use crate::form::{
  DraftForm,
  FormField,
  ProfileForm,
  SubmittedForm
};
use crate::storage::{
  self,
  KeyValueStore
};

/// Mirrors one value into one storage key.
///
/// Callers invoke [`StoreMirror::sync`] whenever the value
/// changes; the state itself never touches storage.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct StoreMirror {
  key: String
}

impl StoreMirror {
  pub fn new(key: impl Into<String>) -> Self {
    Self {
      key: key.into()
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn restore<T, S>(
    &self,
    store: &S
  ) -> Option<T>
  where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized
  {
    storage::read_json(store, &self.key)
  }

  pub fn sync<T, S>(
    &self,
    store: &mut S,
    value: &T
  ) -> bool
  where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized
  {
    storage::write_json(store, &self.key, value)
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ProfileChannels {
  pub draft:     StoreMirror,
  pub submitted: StoreMirror
}

impl Default for ProfileChannels {
  fn default() -> Self {
    Self::from_config(
      &StorageConfig::default()
    )
  }
}

impl ProfileChannels {
  pub fn from_config(
    config: &StorageConfig
  ) -> Self {
    Self {
      draft:     StoreMirror::new(
        config.draft_key.clone()
      ),
      submitted: StoreMirror::new(
        config.submitted_key.clone()
      )
    }
  }

  pub fn restore_draft<S>(
    &self,
    store: &S
  ) -> DraftForm
  where
    S: KeyValueStore + ?Sized
  {
    self
      .draft
      .restore(store)
      .unwrap_or_default()
  }

  pub fn restore_submitted<S>(
    &self,
    store: &S
  ) -> Option<SubmittedForm>
  where
    S: KeyValueStore + ?Sized
  {
    self.submitted.restore(store)
  }

  pub fn restore<S>(
    &self,
    store: &S
  ) -> ProfileForm
  where
    S: KeyValueStore + ?Sized
  {
    ProfileForm::new(
      self.restore_draft(store),
      self.restore_submitted(store)
    )
  }

  pub fn sync_draft<S>(
    &self,
    store: &mut S,
    draft: &DraftForm
  ) -> bool
  where
    S: KeyValueStore + ?Sized
  {
    self.draft.sync(store, draft)
  }

  pub fn sync_submitted<S>(
    &self,
    store: &mut S,
    submitted: Option<&SubmittedForm>
  ) -> bool
  where
    S: KeyValueStore + ?Sized
  {
    match submitted {
      | Some(submitted) => {
        self.submitted.sync(store, submitted)
      }
      | None => false
    }
  }
}

/// Headless host for the profile form, used where no UI
/// runtime drives the effects: every mutation is followed by
/// the same [`ProfileChannels`] write the browser effects
/// make. The frontend keeps state and storage apart and calls
/// `sync_draft`/`sync_submitted` from its effects instead.
#[derive(Debug)]
pub struct ProfileSession<S> {
  store:    S,
  channels: ProfileChannels,
  form:     ProfileForm
}

impl<S: KeyValueStore> ProfileSession<S> {
  pub fn mount(
    store: S,
    channels: ProfileChannels
  ) -> Self {
    let mut store = store;
    let form = channels.restore(&store);
    // written on mount too, so an unparsable stored draft is
    // replaced by the default
    channels.sync_draft(&mut store, &form.draft);
    debug!(
      restored_submission =
        form.submitted.is_some(),
      "profile form mounted"
    );
    Self {
      store,
      channels,
      form
    }
  }

  pub fn form(&self) -> &ProfileForm {
    &self.form
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  pub fn into_store(self) -> S {
    self.store
  }

  pub fn update_field(
    &mut self,
    field: FormField,
    value: impl Into<String>
  ) {
    self.form.update_field(field, value);
    self
      .channels
      .sync_draft(&mut self.store, &self.form.draft);
  }

  pub fn update_named(
    &mut self,
    name: &str,
    value: impl Into<String>
  ) -> bool {
    if !self.form.update_named(name, value) {
      return false;
    }
    self
      .channels
      .sync_draft(&mut self.store, &self.form.draft);
    true
  }

  pub fn submit(&mut self) -> SubmittedForm {
    let snapshot = self.form.submit().clone();
    self
      .channels
      .submitted
      .sync(&mut self.store, &snapshot);
    snapshot
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::storage::MemoryStore;

  #[test]
  fn nothing_stored_restores_empty_form() {
    let store = MemoryStore::default();
    let form =
      ProfileChannels::default().restore(&store);

    assert_eq!(form, ProfileForm::default());
  }

  #[test]
  fn mirror_writes_under_its_key() {
    let mut store = MemoryStore::default();
    let mirror = StoreMirror::new("draft");

    assert!(mirror.sync(
      &mut store,
      &DraftForm {
        age: "30".to_string(),
        ..DraftForm::default()
      }
    ));
    assert_eq!(
      store.raw("draft"),
      Some(
        r#"{"username":"","fullName":"","age":"30"}"#
      )
    );
  }

  #[test]
  fn absent_submission_is_not_written() {
    let mut store = MemoryStore::default();
    let channels = ProfileChannels::default();

    assert!(
      !channels.sync_submitted(&mut store, None)
    );
    assert_eq!(store.raw("submittedData"), None);
  }

  #[test]
  fn channels_follow_configured_keys() {
    let channels =
      ProfileChannels::from_config(
        &StorageConfig {
          draft_key:     "d".to_string(),
          submitted_key: "s".to_string()
        }
      );

    assert_eq!(channels.draft.key(), "d");
    assert_eq!(channels.submitted.key(), "s");
  }

  // Replays the frontend effects: a draft effect that runs on
  // mount and after every draft change, and a submission
  // effect that runs on mount and after every submit.
  #[test]
  fn channel_syncs_in_effect_order() {
    let mut store = MemoryStore::default();
    let channels = ProfileChannels::default();

    let mut form = channels.restore(&store);
    assert!(
      channels.sync_draft(&mut store, &form.draft)
    );
    assert!(!channels.sync_submitted(
      &mut store,
      form.submitted.as_ref()
    ));
    assert_eq!(
      store.raw("formData"),
      Some(r#"{"username":"","fullName":"","age":""}"#)
    );
    assert_eq!(store.raw("submittedData"), None);

    assert!(form.update_named("username", "alex"));
    channels.sync_draft(&mut store, &form.draft);
    form.submit();
    channels.sync_submitted(
      &mut store,
      form.submitted.as_ref()
    );

    assert!(form.update_named("username", "sam"));
    channels.sync_draft(&mut store, &form.draft);

    let reloaded = channels.restore(&store);
    assert_eq!(reloaded.draft.username, "sam");
    assert_eq!(
      reloaded
        .submitted
        .map(|s| s.record().username.clone()),
      Some("alex".to_string())
    );
  }

  #[test]
  fn session_writes_through_on_every_change() {
    let mut session = ProfileSession::mount(
      MemoryStore::default(),
      ProfileChannels::default()
    );

    session.update_field(
      FormField::Username,
      "a"
    );
    assert_eq!(
      session.store().raw("formData"),
      Some(r#"{"username":"a","fullName":"","age":""}"#)
    );

    session.update_field(
      FormField::Username,
      "al"
    );
    assert_eq!(
      session.store().raw("formData"),
      Some(r#"{"username":"al","fullName":"","age":""}"#)
    );
    assert_eq!(
      session.store().raw("submittedData"),
      None
    );
  }

  #[test]
  fn mount_rewrites_malformed_draft() {
    let mut store = MemoryStore::default();
    store
      .set("formData", "{not json")
      .expect("memory set");

    let session = ProfileSession::mount(
      store,
      ProfileChannels::default()
    );

    assert_eq!(
      session.form().draft,
      DraftForm::default()
    );
    assert_eq!(
      session.store().raw("formData"),
      Some(r#"{"username":"","fullName":"","age":""}"#)
    );
  }

  #[test]
  fn unknown_field_does_not_write() {
    let mut session = ProfileSession::mount(
      MemoryStore::default(),
      ProfileChannels::default()
    );

    let before = session
      .store()
      .raw("formData")
      .map(str::to_string);

    assert!(!session.update_named("email", "x"));
    assert_eq!(
      session
        .store()
        .raw("formData")
        .map(str::to_string),
      before
    );
  }
}
