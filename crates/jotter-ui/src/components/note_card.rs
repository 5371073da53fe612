use jotter_shared::{
  Note,
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
pub struct NoteCardProps {
  pub note:      Note,
  pub on_delete: Callback<Uuid>
}

#[function_component(NoteCard)]
pub fn note_card(
  props: &NoteCardProps
) -> Html {
  let id = props.note.id;
  let on_delete =
    props.on_delete.clone();
  let title_class =
    if props.note.title.is_empty() {
      "note-title placeholder"
    } else {
      "note-title"
    };
  let content_class =
    if props.note.content.is_empty() {
      "note-content placeholder"
    } else {
      "note-content"
    };

  html! {
      <article class="note-card">
          <h3 class={title_class}>{ props.note.display_title() }</h3>
          <p class={content_class}>{ props.note.display_content() }</p>
          <button
              class="delete"
              onclick={move |_| on_delete.emit(id)}
          >
              { "Delete" }
          </button>
      </article>
  }
}
