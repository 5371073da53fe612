use std::io::{IsTerminal, Write};

use jotter_shared::{NotesScreen, TasksScreen, Uuid};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;

/// Leading id characters shown in tables. Enough to type back as a
/// unique prefix in practice.
pub const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let color = cfg.get_bool("color")?.unwrap_or(true);

        Ok(Self {
            color: color && std::io::stdout().is_terminal(),
        })
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip_all)]
    pub fn print_notes<W: Write>(&self, out: &mut W, screen: &NotesScreen) -> anyhow::Result<()> {
        writeln!(out, "Notes ({})", screen.notes().len())?;
        if screen.notes().is_empty() {
            writeln!(out, "No notes yet.")?;
            return Ok(());
        }

        let headers = vec!["ID".to_string(), "Title".to_string(), "Content".to_string()];
        let rows = screen
            .notes()
            .iter()
            .map(|note| {
                vec![
                    self.paint(&short_id(note.id), "33"),
                    note.display_title().to_string(),
                    single_line(note.display_content()),
                ]
            })
            .collect();

        write_table(out, headers, rows)
    }

    #[tracing::instrument(skip_all)]
    pub fn print_tasks<W: Write>(&self, out: &mut W, screen: &TasksScreen) -> anyhow::Result<()> {
        writeln!(
            out,
            "Tasks ({} of {} open)",
            screen.remaining(),
            screen.tasks().len()
        )?;
        if screen.tasks().is_empty() {
            writeln!(out, "No tasks yet.")?;
            return Ok(());
        }

        let headers = vec!["ID".to_string(), "Done".to_string(), "Task".to_string()];
        let rows = screen
            .tasks()
            .iter()
            .map(|task| {
                let (mark, text) = if task.completed {
                    ("[x]", self.paint(&task.text, "9"))
                } else {
                    ("[ ]", task.text.clone())
                };
                vec![
                    self.paint(&short_id(task.id), "33"),
                    mark.to_string(),
                    text,
                ]
            })
            .collect();

        write_table(out, headers, rows)
    }

    pub fn print_note_form<W: Write>(&self, out: &mut W, screen: &NotesScreen) -> anyhow::Result<()> {
        let draft = screen.draft();
        writeln!(out, "title:   {}", draft.title)?;
        writeln!(out, "content: {}", draft.content)?;
        Ok(())
    }

    pub fn print_task_form<W: Write>(&self, out: &mut W, screen: &TasksScreen) -> anyhow::Result<()> {
        writeln!(out, "text:    {}", screen.draft().text)?;
        Ok(())
    }

    pub fn print_json<W: Write, T: Serialize + ?Sized>(&self, out: &mut W, value: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn alert<W: Write>(&self, out: &mut W, message: &str) -> anyhow::Result<()> {
        writeln!(out, "alert: {}", self.paint(message, "31"))?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

pub fn short_id(id: Uuid) -> String {
    let full = id.hyphenated().to_string();
    full[..SHORT_ID_LEN].to_string()
}

fn single_line(text: &str) -> String {
    text.lines().map(str::trim).collect::<Vec<_>>().join(" / ")
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for idx in 0..column_count {
        write!(writer, "{:-<width$} ", "", width = widths[idx])?;
    }
    writeln!(writer)?;

    for row in rows {
        for idx in 0..column_count {
            let cell = &row[idx];
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
