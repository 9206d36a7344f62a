use tracing::{
  debug,
  warn
};

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskList {
  items: Vec<String>
}

impl TaskList {
  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &str> {
    self.items.iter().map(String::as_str)
  }

  pub fn add(
    &mut self,
    text: &str
  ) -> Option<usize> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
      return None;
    }

    self.items.push(trimmed.to_string());
    Some(self.items.len() - 1)
  }
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskComposer {
  pub input: String,
  pub tasks: TaskList
}

impl TaskComposer {
  pub fn set_input(
    &mut self,
    value: impl Into<String>
  ) {
    self.input = value.into();
  }

  /// Adds the current input as a task. The input is cleared
  /// only when something was added.
  pub fn submit(&mut self) -> bool {
    match self.tasks.add(&self.input) {
      | Some(index) => {
        debug!(
          index,
          count = self.tasks.len(),
          "task added"
        );
        self.input.clear();
        true
      }
      | None => {
        warn!("ignored empty task");
        false
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_trims_and_appends_in_order() {
    let mut list = TaskList::default();

    assert_eq!(list.add("  buy milk "), Some(0));
    assert_eq!(list.add("walk dog"), Some(1));
    assert_eq!(list.add("buy milk"), Some(2));

    assert_eq!(
      list.iter().collect::<Vec<_>>(),
      vec!["buy milk", "walk dog", "buy milk"]
    );
  }

  #[test]
  fn blank_input_is_ignored() {
    let mut list = TaskList::default();

    for blank in ["", " ", "\t\n", "   \r\n "] {
      assert_eq!(list.add(blank), None);
    }
    assert!(list.is_empty());
  }

  #[test]
  fn composer_clears_input_only_on_success() {
    let mut composer =
      TaskComposer::default();

    composer.set_input("   ");
    assert!(!composer.submit());
    assert_eq!(composer.input, "   ");
    assert!(composer.tasks.is_empty());

    composer.set_input("  ship it  ");
    assert!(composer.submit());
    assert_eq!(composer.input, "");
    assert_eq!(
      composer.tasks.iter().collect::<Vec<_>>(),
      vec!["ship it"]
    );
  }

  #[test]
  fn inner_whitespace_is_preserved() {
    let mut list = TaskList::default();
    list.add("  a   b  ");

    assert_eq!(list.iter().next(), Some("a   b"));
  }
}
