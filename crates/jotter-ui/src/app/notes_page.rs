use gloo::dialogs::alert;
use jotter_shared::Uuid;
use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement
};
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
  NotesAction,
  NotesState
};
use super::{
  Route,
  ui_debug
};
use crate::components::{
  NavLink,
  NoteCard
};

#[function_component(NotesPage)]
pub fn notes_page() -> Html {
  let notes =
    use_reducer(NotesState::default);

  let on_title_input = {
    let notes = notes.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      notes.dispatch(
        NotesAction::SetTitle(
          input.value()
        )
      );
    })
  };

  let on_content_input = {
    let notes = notes.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlTextAreaElement =
        e.target_unchecked_into();
      notes.dispatch(
        NotesAction::SetContent(
          input.value()
        )
      );
    })
  };

  let on_add_click = {
    let notes = notes.clone();
    Callback::from(move |_: MouseEvent| {
      ui_debug(
        "button.add_note.click",
        "add note click fired"
      );
      if let Err(err) =
        notes.screen.draft().validate()
      {
        alert(&err.to_string());
        return;
      }
      notes.dispatch(NotesAction::Submit);
    })
  };

  let on_delete = {
    let notes = notes.clone();
    Callback::from(move |id: Uuid| {
      notes.dispatch(
        NotesAction::Delete(id)
      );
    })
  };

  let draft = notes.screen.draft();

  html! {
      <section class="page notes">
          <header class="header">
              <h1>{ "Notes" }</h1>
              <NavLink to={Route::Tasks} label="Go to Tasks" />
          </header>
          <div class="form">
              <input
                  type="text"
                  placeholder="Title"
                  value={draft.title.clone()}
                  oninput={on_title_input}
              />
              <textarea
                  placeholder="Write your note..."
                  value={draft.content.clone()}
                  oninput={on_content_input}
              />
              <button class="primary" onclick={on_add_click}>{ "Add Note" }</button>
          </div>
          <div class="note-grid">
              {
                  for notes.screen.notes().iter().cloned().map(|note| {
                      let key = note.id.to_string();
                      html! {
                          <NoteCard
                              key={key}
                              note={note}
                              on_delete={on_delete.clone()}
                          />
                      }
                  })
              }
          </div>
      </section>
  }
}
