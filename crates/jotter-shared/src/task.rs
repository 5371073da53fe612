use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

use crate::collection::Entity;
use crate::error::ValidationError;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        Uuid,
  pub text:      String,
  #[serde(default)]
  pub completed: bool
}

impl Task {
  /// Builds an incomplete task from raw input. The trimmed text must
  /// not be empty.
  pub fn new(
    text: &str
  ) -> Result<Self, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
      return Err(
        ValidationError::EmptyTask
      );
    }

    Ok(Self {
      id:        Uuid::new_v4(),
      text:      text.to_string(),
      completed: false
    })
  }

  /// Flips `completed` and returns the new value.
  pub fn toggle(&mut self) -> bool {
    self.completed = !self.completed;
    self.completed
  }
}

impl Entity for Task {
  fn id(&self) -> Uuid {
    self.id
  }
}

/// Pending, unvalidated input of the tasks form.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskDraft {
  pub text: String
}

impl TaskDraft {
  pub fn validate(
    &self
  ) -> Result<(), ValidationError> {
    if self.text.trim().is_empty() {
      Err(ValidationError::EmptyTask)
    } else {
      Ok(())
    }
  }

  pub fn clear(&mut self) {
    self.text.clear();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_task_starts_incomplete_and_trimmed()
   {
    let task = Task::new(
      "  Write report  "
    )
    .expect("valid task");
    assert_eq!(task.text, "Write report");
    assert!(!task.completed);
  }

  #[test]
  fn whitespace_only_text_is_rejected() {
    assert_eq!(
      Task::new(" \t\n"),
      Err(ValidationError::EmptyTask)
    );
    assert!(
      TaskDraft::default()
        .validate()
        .is_err()
    );
  }

  #[test]
  fn toggle_inverts_and_double_toggle_restores()
   {
    let mut task =
      Task::new("x").expect("valid task");
    assert!(task.toggle());
    assert!(!task.toggle());
    assert!(!task.completed);
  }
}
