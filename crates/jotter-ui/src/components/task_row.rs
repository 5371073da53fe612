use jotter_shared::{
  Task,
  Uuid
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub task:      Task,
  pub on_toggle: Callback<Uuid>,
  pub on_delete: Callback<Uuid>
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let id = props.task.id;
  let on_toggle =
    props.on_toggle.clone();
  let on_delete =
    props.on_delete.clone();
  let class = if props.task.completed {
    "task-row done"
  } else {
    "task-row"
  };
  let text_style =
    if props.task.completed {
      "text-decoration: line-through;"
    } else {
      ""
    };

  html! {
      <li class={class}>
          <label>
              <input
                  type="checkbox"
                  checked={props.task.completed}
                  onchange={move |_: web_sys::Event| on_toggle.emit(id)}
              />
              <span style={text_style}>{ &props.task.text }</span>
          </label>
          <button
              class="delete"
              onclick={move |_| on_delete.emit(id)}
          >
              { "Delete" }
          </button>
      </li>
  }
}
