mod storage;
mod ticker;

use fourfold_core::persist::ProfileChannels;
use fourfold_core::timer::TimerCommand;
use fourfold_core::{
  ProfileForm,
  TaskComposer,
  TickSlot,
  Visibility
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_reducer,
  use_state
};

use self::storage::{
  BrowserStore,
  load_demo_config
};
use self::ticker::{
  StopwatchModel,
  TickHandle
};
use crate::components::{
  ProfileFormCard,
  TaskCard,
  TimerCard,
  VanishCard
};

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_demo_config);
  let channels = {
    let storage = config.storage.clone();
    use_state(move || {
      ProfileChannels::from_config(
        &storage
      )
    })
  };

  let visibility =
    use_state(Visibility::default);
  let stopwatch =
    use_reducer(StopwatchModel::default);
  let tick_slot =
    use_mut_ref(TickSlot::<TickHandle>::default);
  let composer =
    use_state(TaskComposer::default);
  let profile = {
    let channels = (*channels).clone();
    use_state(move || {
      channels.restore(&BrowserStore)
    })
  };

  {
    use_effect_with((), move |_| {
      tracing::debug!(
        "frontend mounted and hooks \
         initialized"
      );
      || ()
    });
  }

  // Tick source follows the timer phase. Only entering the
  // running phase with an empty slot creates an interval.
  {
    let tick_slot = tick_slot.clone();
    let dispatcher = stopwatch.dispatcher();
    let tick_ms = config.timer.tick_ms;
    use_effect_with(
      stopwatch.0.phase(),
      move |phase| {
        tick_slot.borrow_mut().follow(
          *phase,
          tick_ms,
          |period_ms| {
            TickHandle::new(
              period_ms,
              move || {
                dispatcher
                  .dispatch(TimerCommand::Tick);
              }
            )
          }
        );
        tracing::debug!(
          phase = phase.as_key(),
          "timer phase changed"
        );
        || ()
      }
    );
  }

  {
    let tick_slot = tick_slot.clone();
    use_effect_with((), move |_| {
      move || {
        if tick_slot.borrow_mut().cancel() {
          tracing::debug!(
            "cancelled tick source on \
             teardown"
          );
        }
      }
    });
  }

  {
    let channels = channels.clone();
    use_effect_with(
      profile.draft.clone(),
      move |draft| {
        if channels
          .sync_draft(&mut BrowserStore, draft)
        {
          tracing::debug!(
            key = %channels.draft.key(),
            "persisted form draft"
          );
        }
        || ()
      }
    );
  }

  {
    let channels = channels.clone();
    use_effect_with(
      profile.submitted.clone(),
      move |submitted| {
        if channels.sync_submitted(
          &mut BrowserStore,
          submitted.as_ref()
        ) {
          tracing::debug!(
            key = %channels.submitted.key(),
            "persisted form submission"
          );
        }
        || ()
      }
    );
  }

  let on_hide = {
    let visibility = visibility.clone();
    Callback::from(move |_: MouseEvent| {
      let mut next = *visibility;
      if next.hide() {
        visibility.set(next);
      }
    })
  };

  let on_start = {
    let dispatcher = stopwatch.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(TimerCommand::Start);
    })
  };

  let on_stop = {
    let dispatcher = stopwatch.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(TimerCommand::Stop);
    })
  };

  let on_reset = {
    let dispatcher = stopwatch.dispatcher();
    Callback::from(move |_: MouseEvent| {
      dispatcher.dispatch(TimerCommand::Reset);
    })
  };

  let on_task_input = {
    let composer = composer.clone();
    Callback::from(move |value: String| {
      let mut next = (*composer).clone();
      next.set_input(value);
      composer.set(next);
    })
  };

  let on_task_submit = {
    let composer = composer.clone();
    Callback::from(move |()| {
      let mut next = (*composer).clone();
      if next.submit() {
        composer.set(next);
      }
    })
  };

  let on_field = {
    let profile = profile.clone();
    Callback::from(
      move |(name, value): (String, String)| {
        let mut next: ProfileForm =
          (*profile).clone();
        if next.update_named(&name, value) {
          profile.set(next);
        }
      }
    )
  };

  let on_profile_submit = {
    let profile = profile.clone();
    Callback::from(move |()| {
      let mut next = (*profile).clone();
      next.submit();
      profile.set(next);
    })
  };

  html! {
      <main class="container">
          <VanishCard visible={visibility.is_visible()} {on_hide} />
          <TimerCard
              elapsed={stopwatch.0.elapsed()}
              running={stopwatch.0.phase().is_running()}
              {on_start}
              {on_stop}
              {on_reset}
          />
          <TaskCard
              input={composer.input.clone()}
              tasks={composer.tasks.clone()}
              on_input={on_task_input}
              on_submit={on_task_submit}
          />
          <ProfileFormCard
              draft={profile.draft.clone()}
              submitted={profile.submitted.clone()}
              {on_field}
              on_submit={on_profile_submit}
          />
      </main>
  }
}
