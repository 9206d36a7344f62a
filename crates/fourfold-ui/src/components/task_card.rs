use fourfold_core::TaskList;
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

use super::Card;

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub input:     String,
  pub tasks:     TaskList,
  pub on_input:  Callback<String>,
  pub on_submit: Callback<()>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let oninput = {
    let on_input = props.on_input.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_input.emit(input.value());
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
      <Card title={"3. Add to a list"}>
          <form class="row" {onsubmit}>
              <input type="text" placeholder="Enter a task" value={props.input.clone()} {oninput} />
              <button class="btn" type="submit">{ "Add Task" }</button>
          </form>
          <ul class="task-list">
              {
                  for props.tasks.iter().enumerate().map(|(index, task)| html! {
                      <li key={index.to_string()}>{ task }</li>
                  })
              }
          </ul>
      </Card>
  }
}
