use thiserror::Error;

/// Rejection of an add operation whose required input is blank after
/// trimming. The only error the domain raises.
#[derive(
  Debug,
  Clone,
  Copy,
  Error,
  PartialEq,
  Eq,
)]
pub enum ValidationError {
  #[error(
    "Please enter a title or some \
     content for the note."
  )]
  EmptyNote,

  #[error(
    "Please enter some text for the \
     task."
  )]
  EmptyTask
}
