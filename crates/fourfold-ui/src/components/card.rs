use yew::{
  AttrValue,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct CardProps {
  #[prop_or_default]
  pub title:    Option<AttrValue>,
  #[prop_or_default]
  pub children: Html
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
  html! {
      <section class="card">
          {
              match &props.title {
                  Some(title) => html! { <h2>{ title.as_str() }</h2> },
                  None => html! {}
              }
          }
          { props.children.clone() }
      </section>
  }
}
