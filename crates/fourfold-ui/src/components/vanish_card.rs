use yew::{
  AttrValue,
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

use super::Card;

const VANISH_LABEL: &str =
  "1. Make this vanish";

#[derive(Properties, PartialEq)]
pub struct VanishCardProps {
  pub visible: bool,
  pub on_hide: Callback<MouseEvent>
}

/// The heading goes away for good once clicked; the button
/// itself never does.
#[function_component(VanishCard)]
pub fn vanish_card(
  props: &VanishCardProps
) -> Html {
  let title = props
    .visible
    .then_some(AttrValue::Static(
      VANISH_LABEL
    ));

  html! {
      <Card {title}>
          <button class="btn" onclick={props.on_hide.clone()}>{ "Click me!" }</button>
      </Card>
  }
}
