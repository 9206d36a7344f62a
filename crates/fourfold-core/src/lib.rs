pub mod config;
pub mod form;
pub mod persist;
pub mod storage;
pub mod tasks;
pub mod tick;
pub mod timer;
pub mod visibility;

pub use config::DemoConfig;
pub use form::{
  DraftForm,
  FormField,
  ProfileForm,
  SubmittedForm
};
pub use persist::StoreMirror;
pub use storage::{
  KeyValueStore,
  MemoryStore
};
pub use tasks::{
  TaskComposer,
  TaskList
};
pub use tick::TickSlot;
pub use timer::{
  Elapsed,
  Stopwatch,
  TimerPhase
};
pub use visibility::Visibility;
