use fourfold_core::{
  DraftForm,
  FormField,
  SubmittedForm
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::{
  Card,
  SubmittedSummary
};

#[derive(Properties, PartialEq)]
pub struct ProfileFormCardProps {
  pub draft:     DraftForm,
  pub submitted: Option<SubmittedForm>,
  pub on_field:
    Callback<(String, String)>,
  pub on_submit: Callback<()>
}

fn input_type(
  field: FormField
) -> &'static str {
  match field {
    | FormField::Age => "number",
    | _ => "text"
  }
}

#[function_component(ProfileFormCard)]
pub fn profile_form_card(
  props: &ProfileFormCardProps
) -> Html {
  let oninput = {
    let on_field = props.on_field.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_field
          .emit((input.name(), input.value()));
      }
    )
  };

  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        on_submit.emit(());
      }
    )
  };

  html! {
      <Card title={"4. Submit a form"}>
          <form {onsubmit}>
              {
                  for FormField::ALL.into_iter().map(|field| html! {
                      <div class="field" key={field.name()}>
                          <label>{ field.label() }</label>
                          <input
                              type={input_type(field)}
                              name={field.name()}
                              value={props.draft.get(field).to_string()}
                              oninput={oninput.clone()}
                          />
                      </div>
                  })
              }
              <button class="btn" type="submit">{ "Submit" }</button>
          </form>
          {
              match &props.submitted {
                  Some(submitted) => html! { <SubmittedSummary submitted={submitted.clone()} /> },
                  None => html! {}
              }
          }
      </Card>
  }
}
