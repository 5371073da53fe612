use std::io::Cursor;

use jotter_core::render::{Renderer, short_id};
use jotter_core::session::{ActiveScreen, Flow, Session};
use jotter_shared::ScreenKind;

fn run_lines(session: &mut Session, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        session.execute(line, &mut out).expect("execute line");
    }
    String::from_utf8(out).expect("utf8 output")
}

fn task_texts(session: &Session) -> Vec<(String, bool)> {
    match session.screen() {
        ActiveScreen::Tasks(screen) => screen
            .tasks()
            .iter()
            .map(|task| (task.text.clone(), task.completed))
            .collect(),
        ActiveScreen::Notes(_) => panic!("expected tasks screen"),
    }
}

#[test]
fn note_is_added_from_pending_fields_and_deleted_by_prefix() {
    let mut session = Session::new(ScreenKind::Notes, Renderer::plain());
    let out = run_lines(&mut session, &["title Groceries", "content Milk, eggs", "add"]);
    assert!(out.contains("added note"));

    let ActiveScreen::Notes(screen) = session.screen() else {
        panic!("expected notes screen");
    };
    let note = screen.notes().as_slice()[0].clone();
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.content, "Milk, eggs");
    assert!(screen.draft().title.is_empty());

    let out = run_lines(&mut session, &[format!("delete {}", short_id(note.id)).as_str()]);
    assert!(out.contains("Notes (0)"));
}

#[test]
fn blank_note_add_raises_alert_and_changes_nothing() {
    let mut session = Session::new(ScreenKind::Notes, Renderer::plain());
    run_lines(&mut session, &["title    ", "content"]);
    let before = session.screen().clone();

    let out = run_lines(&mut session, &["add"]);
    assert!(out.contains("alert: Please enter a title or some content"));
    assert_eq!(session.screen(), &before);
    let ActiveScreen::Notes(screen) = session.screen() else {
        panic!("expected notes screen");
    };
    assert!(screen.notes().is_empty());
    assert!(screen.draft().title.is_empty());
    assert!(screen.draft().content.is_empty());
}

#[test]
fn tasks_toggle_and_delete_keep_order() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    run_lines(&mut session, &["add A", "text B", "add", "add C"]);
    assert_eq!(
        task_texts(&session),
        vec![
            ("A".to_string(), false),
            ("B".to_string(), false),
            ("C".to_string(), false),
        ]
    );

    let ActiveScreen::Tasks(screen) = session.screen() else {
        panic!("expected tasks screen");
    };
    let b = screen.tasks().as_slice()[1].id;
    let a = screen.tasks().as_slice()[0].id;

    let out = run_lines(&mut session, &[format!("toggle {a}").as_str()]);
    assert!(out.contains("Tasks (2 of 3 open)"));
    run_lines(&mut session, &[format!("del {}", short_id(b)).as_str()]);
    assert_eq!(
        task_texts(&session),
        vec![("A".to_string(), true), ("C".to_string(), false)]
    );
}

#[test]
fn unknown_id_is_a_no_op() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    run_lines(&mut session, &["add keep"]);
    let before = session.screen().clone();

    let out = run_lines(
        &mut session,
        &["toggle ffffffff-ffff", "delete ffffffff-ffff"],
    );
    assert!(out.contains("no task matches"));
    assert_eq!(session.screen(), &before);
}

#[test]
fn bare_task_add_raises_alert_and_changes_nothing() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    run_lines(&mut session, &["add keep", "text   "]);
    let before = session.screen().clone();

    let out = run_lines(&mut session, &["add"]);
    assert!(out.contains("alert: Please enter some text for the task."));
    assert_eq!(session.screen(), &before);
    assert_eq!(task_texts(&session), vec![("keep".to_string(), false)]);
}

#[test]
fn ambiguous_id_prefix_is_reported_and_changes_nothing() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    // 17 ids over 16 leading hex digits: at least two share the first one.
    for n in 0..17 {
        run_lines(&mut session, &[format!("add task {n}").as_str()]);
    }
    let ActiveScreen::Tasks(screen) = session.screen() else {
        panic!("expected tasks screen");
    };
    let leading: Vec<char> = screen
        .tasks()
        .ids()
        .map(|id| id.to_string().chars().next().expect("hex digit"))
        .collect();
    let shared = leading
        .iter()
        .copied()
        .find(|c| leading.iter().filter(|other| *other == c).count() > 1)
        .expect("shared leading digit");
    let count = leading.iter().filter(|c| **c == shared).count();
    let before = session.screen().clone();

    let out = run_lines(
        &mut session,
        &[format!("toggle {shared}").as_str(), format!("delete {shared}").as_str()],
    );
    let expected = format!("error: id prefix {shared} matches {count} tasks");
    assert_eq!(out.matches(expected.as_str()).count(), 2, "output: {out}");
    assert_eq!(session.screen(), &before);
}

#[test]
fn navigating_away_discards_the_left_screen() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    run_lines(&mut session, &["add one", "go notes"]);
    assert_eq!(session.kind(), ScreenKind::Notes);

    let out = run_lines(&mut session, &["tasks"]);
    assert_eq!(session.kind(), ScreenKind::Tasks);
    assert!(out.contains("No tasks yet."));
    assert!(task_texts(&session).is_empty());
}

#[test]
fn usage_errors_do_not_end_the_session() {
    let mut session = Session::new(ScreenKind::Notes, Renderer::plain());
    let out = run_lines(&mut session, &["frobnicate", "toggle abc", "text hello"]);

    assert!(out.contains("error: unknown or ambiguous command: frobnicate"));
    assert!(out.contains("toggle is not available on the notes screen"));
    assert!(out.contains("text is not available on the notes screen"));
    assert_eq!(session.kind(), ScreenKind::Notes);
}

#[test]
fn list_json_prints_the_collection() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    run_lines(&mut session, &["add Write report"]);
    let out = run_lines(&mut session, &["list --json"]);

    let value: serde_json::Value = serde_json::from_str(&out).expect("json output");
    assert_eq!(value[0]["text"], "Write report");
    assert_eq!(value[0]["completed"], false);
}

#[test]
fn prompt_names_the_screen_before_each_line() {
    let mut session = Session::new(ScreenKind::Notes, Renderer::plain());
    let mut out = Vec::<u8>::new();
    session
        .run(Cursor::new("go tasks\n"), &mut out, Some("jotter>"))
        .expect("run script");

    let out = String::from_utf8(out).expect("utf8 output");
    assert!(out.contains("[notes] jotter> "));
    assert!(out.contains("[tasks] jotter> "));
}

#[test]
fn run_stops_at_quit() {
    let mut session = Session::new(ScreenKind::Tasks, Renderer::plain());
    let script = "add first\nquit\nadd never\n";
    let mut out = Vec::<u8>::new();
    session
        .run(Cursor::new(script), &mut out, None)
        .expect("run script");

    assert_eq!(task_texts(&session).len(), 1);
    assert_eq!(
        session.execute("quit", &mut Vec::<u8>::new()).expect("quit"),
        Flow::Quit
    );
}
