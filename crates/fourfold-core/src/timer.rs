use std::fmt;

use tracing::{
  debug,
  info
};

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Elapsed {
  pub minutes: u32,
  pub seconds: u8
}

impl Elapsed {
  pub const ZERO: Self = Self {
    minutes: 0,
    seconds: 0
  };

  pub fn advanced(self) -> Self {
    if self.seconds >= 59 {
      Self {
        minutes: self
          .minutes
          .saturating_add(1),
        seconds: 0
      }
    } else {
      Self {
        minutes: self.minutes,
        seconds: self.seconds + 1
      }
    }
  }
}

impl fmt::Display for Elapsed {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "{} mins {} secs",
      self.minutes, self.seconds
    )
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum TimerPhase {
  #[default]
  Stopped,
  Running
}

impl TimerPhase {
  pub fn is_running(self) -> bool {
    matches!(self, TimerPhase::Running)
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | TimerPhase::Stopped => "stopped",
      | TimerPhase::Running => "running"
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum TimerCommand {
  Start,
  Stop,
  Reset,
  Tick
}

/// Start/stop/reset state machine behind the interval
/// timer.
///
/// Transitions are guarded: `start` only leaves
/// [`TimerPhase::Stopped`] and `stop` only leaves
/// [`TimerPhase::Running`]. Invalid calls are no-ops and
/// report `false`, so callers that schedule a tick source on
/// a successful `start` can never schedule two.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Stopwatch {
  elapsed: Elapsed,
  phase:   TimerPhase
}

impl Stopwatch {
  pub fn elapsed(&self) -> Elapsed {
    self.elapsed
  }

  pub fn phase(&self) -> TimerPhase {
    self.phase
  }

  pub fn can_start(&self) -> bool {
    !self.phase.is_running()
  }

  pub fn can_stop(&self) -> bool {
    self.phase.is_running()
  }

  pub fn start(&mut self) -> bool {
    if !self.can_start() {
      debug!(
        "start ignored; timer already \
         running"
      );
      return false;
    }

    self.phase = TimerPhase::Running;
    info!(elapsed = %self.elapsed, "timer started");
    true
  }

  pub fn stop(&mut self) -> bool {
    if !self.can_stop() {
      debug!(
        "stop ignored; timer not \
         running"
      );
      return false;
    }

    self.phase = TimerPhase::Stopped;
    info!(elapsed = %self.elapsed, "timer stopped");
    true
  }

  /// Zeroes the elapsed time and forces the stopped phase.
  /// Returns whether the timer was running, i.e. whether a
  /// tick source has to be cancelled.
  pub fn reset(&mut self) -> bool {
    let was_running =
      self.phase.is_running();
    self.elapsed = Elapsed::ZERO;
    self.phase = TimerPhase::Stopped;
    info!(was_running, "timer reset");
    was_running
  }

  pub fn tick(&mut self) -> bool {
    if !self.phase.is_running() {
      debug!(
        "tick dropped while stopped"
      );
      return false;
    }

    self.elapsed =
      self.elapsed.advanced();
    true
  }

  pub fn apply(
    &mut self,
    command: TimerCommand
  ) -> bool {
    match command {
      | TimerCommand::Start => self.start(),
      | TimerCommand::Stop => self.stop(),
      | TimerCommand::Reset => {
        self.reset();
        true
      }
      | TimerCommand::Tick => self.tick()
    }
  }
}
