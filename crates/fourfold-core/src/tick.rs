use tracing::info;

use crate::timer::TimerPhase;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum SlotChange {
  Armed,
  Cancelled,
  Unchanged
}

/// Holds at most one live tick handle.
///
/// `H` is whatever keeps the periodic callback alive; in the
/// browser that is a `gloo` interval, which cancels itself on
/// drop. The slot is only armed when the timer is running and
/// the slot is empty, so a second handle can never exist.
#[derive(Debug)]
pub struct TickSlot<H> {
  live:  Option<H>,
  armed: u64
}

impl<H> Default for TickSlot<H> {
  fn default() -> Self {
    Self {
      live:  None,
      armed: 0
    }
  }
}

impl<H> TickSlot<H> {
  pub fn is_live(&self) -> bool {
    self.live.is_some()
  }

  pub fn armed_count(&self) -> u64 {
    self.armed
  }

  pub fn follow<F>(
    &mut self,
    phase: TimerPhase,
    period_ms: u32,
    arm: F
  ) -> SlotChange
  where
    F: FnOnce(u32) -> H
  {
    match (phase, self.live.is_some()) {
      | (TimerPhase::Running, false) => {
        self.live = Some(arm(period_ms));
        self.armed += 1;
        info!(
          period_ms,
          armed = self.armed,
          "tick source armed"
        );
        SlotChange::Armed
      }
      | (TimerPhase::Stopped, true) => {
        self.cancel();
        SlotChange::Cancelled
      }
      | _ => SlotChange::Unchanged
    }
  }

  pub fn cancel(&mut self) -> bool {
    match self.live.take() {
      | Some(handle) => {
        drop(handle);
        info!("tick source cancelled");
        true
      }
      | None => false
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::rc::Rc;

  use super::*;

  struct LiveToken(Rc<Cell<u32>>);

  impl Drop for LiveToken {
    fn drop(&mut self) {
      self.0.set(self.0.get() - 1);
    }
  }

  fn arm(
    live: &Rc<Cell<u32>>
  ) -> impl FnOnce(u32) -> LiveToken {
    let live = live.clone();
    move |_| {
      live.set(live.get() + 1);
      LiveToken(live.clone())
    }
  }

  #[test]
  fn arms_once_while_running() {
    let live = Rc::new(Cell::new(0));
    let mut slot = TickSlot::default();

    assert_eq!(
      slot.follow(
        TimerPhase::Running,
        1000,
        arm(&live)
      ),
      SlotChange::Armed
    );
    assert_eq!(
      slot.follow(
        TimerPhase::Running,
        1000,
        arm(&live)
      ),
      SlotChange::Unchanged
    );

    assert_eq!(live.get(), 1);
    assert_eq!(slot.armed_count(), 1);
  }

  #[test]
  fn stopping_drops_the_handle() {
    let live = Rc::new(Cell::new(0));
    let mut slot = TickSlot::default();

    slot.follow(
      TimerPhase::Running,
      1000,
      arm(&live)
    );
    assert_eq!(
      slot.follow(
        TimerPhase::Stopped,
        1000,
        arm(&live)
      ),
      SlotChange::Cancelled
    );

    assert_eq!(live.get(), 0);
    assert!(!slot.is_live());
    assert!(!slot.cancel());
  }

  #[test]
  fn dropping_the_slot_cancels() {
    let live = Rc::new(Cell::new(0));
    {
      let mut slot = TickSlot::default();
      slot.follow(
        TimerPhase::Running,
        1000,
        arm(&live)
      );
      assert_eq!(live.get(), 1);
    }
    assert_eq!(live.get(), 0);
  }

  #[test]
  fn passes_period_to_the_handle_factory() {
    let mut slot = TickSlot::default();
    slot.follow(
      TimerPhase::Running,
      250,
      |period| period
    );

    assert_eq!(slot.live, Some(250));
  }
}
