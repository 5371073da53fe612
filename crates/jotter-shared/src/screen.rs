use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

use crate::collection::Collection;
use crate::error::ValidationError;
use crate::note::{
  Note,
  NoteDraft
};
use crate::task::{
  Task,
  TaskDraft
};

/// The two screens a user can navigate between.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
pub enum ScreenKind {
  #[default]
  Notes,
  Tasks
}

impl ScreenKind {
  pub fn as_key(self) -> &'static str {
    match self {
      | ScreenKind::Notes => "notes",
      | ScreenKind::Tasks => "tasks"
    }
  }

  /// The screen the navigation link on `self` points to.
  pub fn other(self) -> Self {
    match self {
      | ScreenKind::Notes => {
        ScreenKind::Tasks
      }
      | ScreenKind::Tasks => {
        ScreenKind::Notes
      }
    }
  }
}

impl fmt::Display for ScreenKind {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Error,
)]
#[error(
  "unknown screen '{0}' (expected \
   notes or tasks)"
)]
pub struct UnknownScreen(pub String);

impl FromStr for ScreenKind {
  type Err = UnknownScreen;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "notes" | "note" => {
        Ok(ScreenKind::Notes)
      }
      | "tasks" | "task" => {
        Ok(ScreenKind::Tasks)
      }
      | _ => {
        Err(UnknownScreen(s.to_string()))
      }
    }
  }
}

/// Notes collection plus the pending title/content inputs.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct NotesScreen {
  notes: Collection<Note>,
  draft: NoteDraft
}

impl NotesScreen {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn notes(&self) -> &Collection<Note> {
    &self.notes
  }

  pub fn draft(&self) -> &NoteDraft {
    &self.draft
  }

  pub fn set_title(
    &mut self,
    title: impl Into<String>
  ) {
    self.draft.title = title.into();
  }

  pub fn set_content(
    &mut self,
    content: impl Into<String>
  ) {
    self.draft.content = content.into();
  }

  /// Turns the pending inputs into a note appended at the end.
  ///
  /// On success both inputs are cleared. On failure nothing changes,
  /// inputs included.
  pub fn add(
    &mut self
  ) -> Result<Note, ValidationError> {
    let note = Note::new(
      &self.draft.title,
      &self.draft.content
    )?;
    self.notes.push(note.clone());
    self.draft.clear();
    Ok(note)
  }

  pub fn delete(
    &mut self,
    id: Uuid
  ) -> Option<Note> {
    self.notes.remove(id)
  }
}

/// Task collection plus the pending text input.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TasksScreen {
  tasks: Collection<Task>,
  draft: TaskDraft
}

impl TasksScreen {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn tasks(&self) -> &Collection<Task> {
    &self.tasks
  }

  pub fn draft(&self) -> &TaskDraft {
    &self.draft
  }

  pub fn set_text(
    &mut self,
    text: impl Into<String>
  ) {
    self.draft.text = text.into();
  }

  /// Turns the pending text into an incomplete task appended at the
  /// end, clearing the input. On failure nothing changes.
  pub fn add(
    &mut self
  ) -> Result<Task, ValidationError> {
    let task = Task::new(&self.draft.text)?;
    self.tasks.push(task.clone());
    self.draft.clear();
    Ok(task)
  }

  /// Flips `completed` on the matching task and returns the new value,
  /// or `None` when no task has `id`.
  pub fn toggle_completion(
    &mut self,
    id: Uuid
  ) -> Option<bool> {
    self.tasks.update(id, Task::toggle)
  }

  pub fn delete(
    &mut self,
    id: Uuid
  ) -> Option<Task> {
    self.tasks.remove(id)
  }

  pub fn remaining(&self) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| !task.completed)
      .count()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn screen_kind_parses_and_links_to_the_other()
   {
    assert_eq!(
      "Tasks".parse::<ScreenKind>(),
      Ok(ScreenKind::Tasks)
    );
    assert_eq!(
      " note ".parse::<ScreenKind>(),
      Ok(ScreenKind::Notes)
    );
    assert!(
      "calendar"
        .parse::<ScreenKind>()
        .is_err()
    );
    assert_eq!(
      ScreenKind::Notes.other(),
      ScreenKind::Tasks
    );
    assert_eq!(
      ScreenKind::Tasks.other().as_key(),
      "notes"
    );
  }

  #[test]
  fn failed_note_add_keeps_pending_input()
  {
    let mut screen = NotesScreen::new();
    screen.set_title("   ");
    screen.set_content("\n");

    assert_eq!(
      screen.add(),
      Err(ValidationError::EmptyNote)
    );
    assert!(screen.notes().is_empty());
    assert_eq!(screen.draft().title, "   ");
    assert_eq!(
      screen.draft().content,
      "\n"
    );
  }

  #[test]
  fn failed_task_add_keeps_pending_input()
  {
    let mut screen = TasksScreen::new();
    screen.set_text("  ");

    assert_eq!(
      screen.add(),
      Err(ValidationError::EmptyTask)
    );
    assert!(screen.tasks().is_empty());
    assert_eq!(screen.draft().text, "  ");
  }

  #[test]
  fn remaining_counts_incomplete_tasks() {
    let mut screen = TasksScreen::new();
    for text in ["a", "b", "c"] {
      screen.set_text(text);
      screen.add().expect("add task");
    }
    let first = screen
      .tasks()
      .ids()
      .next()
      .expect("first task");

    assert_eq!(screen.remaining(), 3);
    screen.toggle_completion(first);
    assert_eq!(screen.remaining(), 2);
  }
}
