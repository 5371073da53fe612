use std::rc::Rc;

use jotter_shared::{
  NotesScreen,
  TasksScreen,
  Uuid
};
use yew::Reducible;

/// Page state of the notes route. Every accepted action yields a fresh
/// `Rc`; rejected or no-op actions hand back the current one so nothing
/// re-renders.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct NotesState {
  pub screen: NotesScreen
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotesAction {
  SetTitle(String),
  SetContent(String),
  Submit,
  Delete(Uuid)
}

impl Reducible for NotesState {
  type Action = NotesAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | NotesAction::SetTitle(title) => {
        next.screen.set_title(title);
      }
      | NotesAction::SetContent(
        content
      ) => {
        next.screen.set_content(content);
      }
      | NotesAction::Submit => {
        match next.screen.add() {
          | Ok(note) => {
            tracing::debug!(
              id = %note.id,
              count = next.screen.notes().len(),
              "note added"
            );
          }
          | Err(err) => {
            tracing::warn!(
              error = %err,
              "note submit rejected"
            );
            return self;
          }
        }
      }
      | NotesAction::Delete(id) => {
        if next.screen.delete(id).is_none()
        {
          tracing::debug!(%id, "delete of unknown note ignored");
          return self;
        }
      }
    }
    Rc::new(next)
  }
}

#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TasksState {
  pub screen: TasksScreen
}

#[derive(Debug, Clone, PartialEq)]
pub enum TasksAction {
  SetText(String),
  Submit,
  Toggle(Uuid),
  Delete(Uuid)
}

impl Reducible for TasksState {
  type Action = TasksAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | TasksAction::SetText(text) => {
        next.screen.set_text(text);
      }
      | TasksAction::Submit => {
        match next.screen.add() {
          | Ok(task) => {
            tracing::debug!(
              id = %task.id,
              count = next.screen.tasks().len(),
              "task added"
            );
          }
          | Err(err) => {
            tracing::warn!(
              error = %err,
              "task submit rejected"
            );
            return self;
          }
        }
      }
      | TasksAction::Toggle(id) => {
        let Some(completed) =
          next.screen.toggle_completion(id)
        else {
          tracing::debug!(%id, "toggle of unknown task ignored");
          return self;
        };
        tracing::debug!(%id, completed, "task toggled");
      }
      | TasksAction::Delete(id) => {
        if next.screen.delete(id).is_none()
        {
          tracing::debug!(%id, "delete of unknown task ignored");
          return self;
        }
      }
    }
    Rc::new(next)
  }
}
