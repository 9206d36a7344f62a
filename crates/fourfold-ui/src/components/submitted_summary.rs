use fourfold_core::SubmittedForm;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

const CAPTION: &str =
  "Request Sent to DB with below \
   request data";

#[derive(Properties, PartialEq)]
pub struct SubmittedSummaryProps {
  pub submitted: SubmittedForm
}

#[function_component(SubmittedSummary)]
pub fn submitted_summary(
  props: &SubmittedSummaryProps
) -> Html {
  html! {
      <div class="submitted">
          <h3>{ CAPTION }</h3>
          <ul>
              {
                  for props.submitted.summary_lines().into_iter().map(|(label, value)| html! {
                      <li>{ format!("{label}: {value}") }</li>
                  })
              }
          </ul>
      </div>
  }
}
