use serde::{
  Deserialize,
  Serialize
};
use uuid::Uuid;

use crate::collection::Entity;
use crate::error::ValidationError;

pub const UNTITLED_NOTE: &str =
  "Untitled Note";
pub const EMPTY_NOTE_CONTENT: &str =
  "No content.";

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Note {
  pub id:      Uuid,
  #[serde(default)]
  pub title:   String,
  #[serde(default)]
  pub content: String
}

impl Note {
  /// Builds a note from raw input, trimming both fields. At least one
  /// of them must be non-empty.
  pub fn new(
    title: &str,
    content: &str
  ) -> Result<Self, ValidationError> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty()
      && content.is_empty()
    {
      return Err(
        ValidationError::EmptyNote
      );
    }

    Ok(Self {
      id:      Uuid::new_v4(),
      title:   title.to_string(),
      content: content.to_string()
    })
  }

  pub fn display_title(&self) -> &str {
    if self.title.is_empty() {
      UNTITLED_NOTE
    } else {
      &self.title
    }
  }

  pub fn display_content(
    &self
  ) -> &str {
    if self.content.is_empty() {
      EMPTY_NOTE_CONTENT
    } else {
      &self.content
    }
  }
}

impl Entity for Note {
  fn id(&self) -> Uuid {
    self.id
  }
}

/// Pending, unvalidated input of the notes form.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct NoteDraft {
  pub title:   String,
  pub content: String
}

impl NoteDraft {
  pub fn validate(
    &self
  ) -> Result<(), ValidationError> {
    if self.title.trim().is_empty()
      && self.content.trim().is_empty()
    {
      Err(ValidationError::EmptyNote)
    } else {
      Ok(())
    }
  }

  pub fn clear(&mut self) {
    self.title.clear();
    self.content.clear();
  }
}
