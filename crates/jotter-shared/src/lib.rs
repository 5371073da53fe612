//! Domain types shared by the terminal and web front ends.
//!
//! Everything here is plain in-memory state: two entity kinds, one
//! ordered collection type keyed by id, and the per-screen logic that
//! validates pending input before it becomes an entity.

pub mod collection;
pub mod error;
pub mod note;
pub mod screen;
pub mod task;

pub use collection::{
  Collection,
  Entity,
  PrefixMatch
};
pub use error::ValidationError;
pub use note::{
  Note,
  NoteDraft
};
pub use screen::{
  NotesScreen,
  ScreenKind,
  TasksScreen,
  UnknownScreen
};
pub use task::{
  Task,
  TaskDraft
};
pub use uuid::Uuid;
