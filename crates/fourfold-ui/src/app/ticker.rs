use std::rc::Rc;

use fourfold_core::Stopwatch;
use fourfold_core::timer::TimerCommand;
use gloo::timers::callback::Interval;
use yew::Reducible;

/// Reducer state for the timer card. Ticks are dispatched by
/// the interval, so they always see the latest state.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
)]
pub(crate) struct StopwatchModel(
  pub Stopwatch
);

impl Reducible for StopwatchModel {
  type Action = TimerCommand;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = self.0;
    if next.apply(action) {
      Rc::new(StopwatchModel(next))
    } else {
      self
    }
  }
}

pub(crate) type TickHandle = Interval;
