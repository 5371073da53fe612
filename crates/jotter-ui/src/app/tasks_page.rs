use gloo::dialogs::alert;
use jotter_shared::Uuid;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  TargetCast,
  function_component,
  html,
  use_reducer
};

use super::state::{
  TasksAction,
  TasksState
};
use super::{
  Route,
  ui_debug
};
use crate::components::{
  NavLink,
  TaskRow
};

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
  let tasks =
    use_reducer(TasksState::default);

  let on_text_input = {
    let tasks = tasks.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      tasks.dispatch(
        TasksAction::SetText(
          input.value()
        )
      );
    })
  };

  let on_add_click = {
    let tasks = tasks.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.add_task.click",
        "add task click fired"
      );
      if let Err(err) =
        tasks.screen.draft().validate()
      {
        alert(&err.to_string());
        return;
      }
      tasks.dispatch(TasksAction::Submit);
    })
  };

  let on_toggle = {
    let tasks = tasks.clone();
    Callback::from(move |id: Uuid| {
      tasks.dispatch(
        TasksAction::Toggle(id)
      );
    })
  };

  let on_delete = {
    let tasks = tasks.clone();
    Callback::from(move |id: Uuid| {
      tasks.dispatch(
        TasksAction::Delete(id)
      );
    })
  };

  let total = tasks.screen.tasks().len();
  let remaining =
    tasks.screen.remaining();

  html! {
      <section class="page tasks">
          <header class="header">
              <h1>{ "Tasks" }</h1>
              <span class="badge">{ format!("{remaining} of {total} open") }</span>
              <NavLink to={Route::Notes} label="Go to Notes" />
          </header>
          <div class="form">
              <input
                  type="text"
                  placeholder="What needs doing?"
                  value={tasks.screen.draft().text.clone()}
                  oninput={on_text_input}
              />
              <button class="primary" onclick={on_add_click}>{ "Add Task" }</button>
          </div>
          <ul class="task-list">
              {
                  for tasks.screen.tasks().iter().cloned().map(|task| {
                      let key = task.id.to_string();
                      html! {
                          <TaskRow
                              key={key}
                              task={task}
                              on_toggle={on_toggle.clone()}
                              on_delete={on_delete.clone()}
                          />
                      }
                  })
              }
          </ul>
      </section>
  }
}
