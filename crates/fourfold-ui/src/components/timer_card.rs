use fourfold_core::Elapsed;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::Card;

#[derive(Properties, PartialEq)]
pub struct TimerCardProps {
  pub elapsed:  Elapsed,
  pub running:  bool,
  pub on_start: Callback<MouseEvent>,
  pub on_stop:  Callback<MouseEvent>,
  pub on_reset: Callback<MouseEvent>
}

#[function_component(TimerCard)]
pub fn timer_card(
  props: &TimerCardProps
) -> Html {
  html! {
      <Card title={"2. Create a Basic Timer"}>
          <div class="elapsed">{ props.elapsed.to_string() }</div>
          <div class="row">
              <button class="btn start" disabled={props.running} onclick={props.on_start.clone()}>{ "Start" }</button>
              <button class="btn stop" disabled={!props.running} onclick={props.on_stop.clone()}>{ "Stop" }</button>
              <button class="btn reset" onclick={props.on_reset.clone()}>{ "Reset" }</button>
          </div>
      </Card>
  }
}
