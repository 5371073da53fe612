use std::collections::HashSet;

use jotter_shared::{
  NotesScreen,
  TasksScreen,
  ValidationError
};

fn task_texts(
  screen: &TasksScreen
) -> Vec<String> {
  screen
    .tasks()
    .iter()
    .map(|task| task.text.clone())
    .collect()
}

#[test]
fn groceries_note_is_added_then_deleted() {
  let mut screen = NotesScreen::new();
  screen.set_title("Groceries");
  screen.set_content("Milk, eggs");

  let note = screen.add().expect("add note");
  assert_eq!(screen.notes().len(), 1);
  let stored = &screen.notes().as_slice()[0];
  assert_eq!(stored.title, "Groceries");
  assert_eq!(stored.content, "Milk, eggs");
  assert!(screen.draft().title.is_empty());
  assert!(screen.draft().content.is_empty());

  let removed = screen.delete(note.id);
  assert_eq!(removed, Some(note));
  assert!(screen.notes().is_empty());
}

#[test]
fn empty_note_is_rejected_and_collection_stays_empty() {
  let mut screen = NotesScreen::new();
  screen.set_title("");
  screen.set_content("");

  assert_eq!(screen.add(), Err(ValidationError::EmptyNote));
  assert!(screen.notes().is_empty());
}

#[test]
fn write_report_task_toggles_back_and_forth() {
  let mut screen = TasksScreen::new();
  screen.set_text("Write report");
  let task = screen.add().expect("add task");
  assert!(!screen.tasks().get(task.id).expect("stored").completed);

  assert_eq!(screen.toggle_completion(task.id), Some(true));
  assert!(screen.tasks().get(task.id).expect("stored").completed);

  assert_eq!(screen.toggle_completion(task.id), Some(false));
  assert!(!screen.tasks().get(task.id).expect("stored").completed);
}

#[test]
fn deleting_middle_task_keeps_order() {
  let mut screen = TasksScreen::new();
  let mut ids = Vec::new();
  for text in ["A", "B", "C"] {
    screen.set_text(text);
    ids.push(screen.add().expect("add task").id);
  }

  screen.delete(ids[1]);
  assert_eq!(task_texts(&screen), vec!["A", "C"]);
}

#[test]
fn size_counts_only_valid_adds_and_ids_are_distinct() {
  let mut screen = TasksScreen::new();
  let inputs = ["one", "", "two", "   ", "three", "\t", "four"];
  let mut accepted = 0;
  for input in inputs {
    screen.set_text(input);
    if screen.add().is_ok() {
      accepted += 1;
    }
  }

  assert_eq!(accepted, 4);
  assert_eq!(screen.tasks().len(), accepted);
  let distinct: HashSet<_> = screen.tasks().ids().collect();
  assert_eq!(distinct.len(), accepted);
  assert_eq!(task_texts(&screen), vec!["one", "two", "three", "four"]);
}

#[test]
fn add_appends_at_the_end() {
  let mut screen = NotesScreen::new();
  for title in ["first", "second"] {
    screen.set_title(title);
    screen.add().expect("add note");
  }
  let before: Vec<_> = screen.notes().ids().collect();

  screen.set_content("only content");
  let added = screen.add().expect("add note");

  let after: Vec<_> = screen.notes().ids().collect();
  assert_eq!(after.len(), before.len() + 1);
  assert_eq!(&after[..before.len()], &before[..]);
  assert_eq!(after.last(), Some(&added.id));
  assert_eq!(added.display_title(), "Untitled Note");
}

#[test]
fn delete_and_toggle_on_unknown_id_are_no_ops() {
  let mut notes = NotesScreen::new();
  notes.set_title("keep");
  let kept = notes.add().expect("add note");

  let mut tasks = TasksScreen::new();
  tasks.set_text("keep");
  tasks.add().expect("add task");
  let tasks_before = tasks.clone();

  let stranger = jotter_shared::Uuid::new_v4();
  assert!(notes.delete(stranger).is_none());
  assert_eq!(notes.notes().ids().collect::<Vec<_>>(), vec![kept.id]);

  assert!(tasks.toggle_completion(stranger).is_none());
  assert!(tasks.delete(stranger).is_none());
  assert_eq!(tasks, tasks_before);
}
