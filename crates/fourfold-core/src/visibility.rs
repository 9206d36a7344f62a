use tracing::debug;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Visibility {
  visible: bool
}

impl Default for Visibility {
  fn default() -> Self {
    Self {
      visible: true
    }
  }
}

impl Visibility {
  pub fn is_visible(&self) -> bool {
    self.visible
  }

  pub fn hide(&mut self) -> bool {
    if !self.visible {
      return false;
    }

    self.visible = false;
    debug!("label hidden");
    true
  }
}

#[cfg(test)]
mod tests {
  use super::Visibility;

  #[test]
  fn starts_visible() {
    assert!(
      Visibility::default().is_visible()
    );
  }

  #[test]
  fn hide_is_one_way_and_repeatable() {
    let mut flag = Visibility::default();

    assert!(flag.hide());
    assert!(!flag.is_visible());

    for _ in 0..3 {
      assert!(!flag.hide());
      assert!(!flag.is_visible());
    }
  }
}
