use std::io::{BufRead, Write};

use jotter_shared::{NotesScreen, PrefixMatch, ScreenKind, TasksScreen, Uuid};
use tracing::{debug, info, instrument};

use crate::commands::{Command, HELP_TEXT};
use crate::render::{Renderer, short_id};

/// Whether the read loop should keep going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The screen currently on display. Only one exists at a time; leaving a
/// screen drops its state.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveScreen {
    Notes(NotesScreen),
    Tasks(TasksScreen),
}

impl ActiveScreen {
    fn fresh(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::Notes => ActiveScreen::Notes(NotesScreen::new()),
            ScreenKind::Tasks => ActiveScreen::Tasks(TasksScreen::new()),
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            ActiveScreen::Notes(_) => ScreenKind::Notes,
            ActiveScreen::Tasks(_) => ScreenKind::Tasks,
        }
    }

    fn len(&self) -> usize {
        match self {
            ActiveScreen::Notes(screen) => screen.notes().len(),
            ActiveScreen::Tasks(screen) => screen.tasks().len(),
        }
    }
}

#[derive(Debug)]
pub struct Session {
    screen: ActiveScreen,
    renderer: Renderer,
}

impl Session {
    pub fn new(start: ScreenKind, renderer: Renderer) -> Self {
        Self {
            screen: ActiveScreen::fresh(start),
            renderer,
        }
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    pub fn kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// Reads commands until end of input or `quit`. A prompt is written
    /// before each line when one is given.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        prompt: Option<&str>,
    ) -> anyhow::Result<()> {
        self.render(out)?;
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(out, "[{}] {} ", self.kind(), prompt)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                if prompt.is_some() {
                    writeln!(out)?;
                }
                break;
            };
            if self.execute(&line?, out)? == Flow::Quit {
                break;
            }
        }

        info!(screen = %self.kind(), "session finished");
        Ok(())
    }

    /// Runs one line of input. Usage mistakes are reported on `out` and
    /// the session carries on; only write failures are returned as errors.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.apply(command, out),
            Ok(None) => Ok(Flow::Continue),
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                Ok(Flow::Continue)
            }
        }
    }

    #[instrument(skip(self, out))]
    fn apply<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<Flow> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => write!(out, "{HELP_TEXT}")?,
            Command::Show => self.render(out)?,
            Command::Go(kind) => self.navigate(kind, out)?,
            Command::List { json } => self.list(json, out)?,
            command => match &mut self.screen {
                ActiveScreen::Notes(screen) => apply_notes(screen, &self.renderer, command, out)?,
                ActiveScreen::Tasks(screen) => apply_tasks(screen, &self.renderer, command, out)?,
            },
        }
        Ok(Flow::Continue)
    }

    fn navigate<W: Write>(&mut self, kind: ScreenKind, out: &mut W) -> anyhow::Result<()> {
        if kind != self.kind() {
            let left = self.kind();
            let discarded = self.screen.len();
            self.screen = ActiveScreen::fresh(kind);
            info!(from = %left, to = %kind, discarded, "navigated");
        }
        self.render(out)
    }

    fn list<W: Write>(&self, json: bool, out: &mut W) -> anyhow::Result<()> {
        match (&self.screen, json) {
            (ActiveScreen::Notes(screen), true) => self.renderer.print_json(out, screen.notes()),
            (ActiveScreen::Tasks(screen), true) => self.renderer.print_json(out, screen.tasks()),
            (ActiveScreen::Notes(screen), false) => self.renderer.print_notes(out, screen),
            (ActiveScreen::Tasks(screen), false) => self.renderer.print_tasks(out, screen),
        }
    }

    fn render<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        match &self.screen {
            ActiveScreen::Notes(screen) => {
                self.renderer.print_notes(out, screen)?;
                self.renderer.print_note_form(out, screen)?;
            }
            ActiveScreen::Tasks(screen) => {
                self.renderer.print_tasks(out, screen)?;
                self.renderer.print_task_form(out, screen)?;
            }
        }
        writeln!(out, "-> go {}", self.kind().other())?;
        Ok(())
    }
}

fn apply_notes<W: Write>(
    screen: &mut NotesScreen,
    renderer: &Renderer,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Title(title) => screen.set_title(title),
        Command::Content(content) => screen.set_content(content),
        Command::Add(Some(_)) => {
            writeln!(out, "error: add takes no text here; use title/content first")?;
        }
        Command::Add(None) => match screen.add() {
            Ok(note) => {
                debug!(id = %note.id, "note added");
                writeln!(out, "added note {}", short_id(note.id))?;
                renderer.print_notes(out, screen)?;
            }
            Err(err) => {
                debug!(error = %err, "note rejected");
                renderer.alert(out, &err.to_string())?;
            }
        },
        Command::Delete(raw) => {
            if let Some(id) = resolve(screen.notes().resolve_prefix(&raw), &raw, "note", out)? {
                screen.delete(id);
                debug!(%id, "note deleted");
                renderer.print_notes(out, screen)?;
            }
        }
        other => not_here(&other, ScreenKind::Notes, out)?,
    }
    Ok(())
}

fn apply_tasks<W: Write>(
    screen: &mut TasksScreen,
    renderer: &Renderer,
    command: Command,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Text(text) => screen.set_text(text),
        Command::Add(inline) => {
            if let Some(text) = inline {
                screen.set_text(text);
            }
            match screen.add() {
                Ok(task) => {
                    debug!(id = %task.id, "task added");
                    writeln!(out, "added task {}", short_id(task.id))?;
                    renderer.print_tasks(out, screen)?;
                }
                Err(err) => {
                    debug!(error = %err, "task rejected");
                    renderer.alert(out, &err.to_string())?;
                }
            }
        }
        Command::Toggle(raw) => {
            if let Some(id) = resolve(screen.tasks().resolve_prefix(&raw), &raw, "task", out)? {
                let completed = screen.toggle_completion(id);
                debug!(%id, ?completed, "task toggled");
                renderer.print_tasks(out, screen)?;
            }
        }
        Command::Delete(raw) => {
            if let Some(id) = resolve(screen.tasks().resolve_prefix(&raw), &raw, "task", out)? {
                screen.delete(id);
                debug!(%id, "task deleted");
                renderer.print_tasks(out, screen)?;
            }
        }
        other => not_here(&other, ScreenKind::Tasks, out)?,
    }
    Ok(())
}

/// Turns a prefix lookup into an id. A missing id is a no-op for the
/// caller; an ambiguous one is a usage error on this line.
fn resolve<W: Write>(
    found: PrefixMatch,
    raw: &str,
    what: &str,
    out: &mut W,
) -> anyhow::Result<Option<Uuid>> {
    match found {
        PrefixMatch::Unique(id) => Ok(Some(id)),
        PrefixMatch::NoMatch => {
            debug!(id = raw, what, "no entity with id; nothing to do");
            writeln!(out, "no {what} matches {raw}")?;
            Ok(None)
        }
        PrefixMatch::Ambiguous(count) => {
            writeln!(out, "error: id prefix {raw} matches {count} {what}s")?;
            Ok(None)
        }
    }
}

fn not_here<W: Write>(command: &Command, here: ScreenKind, out: &mut W) -> anyhow::Result<()> {
    let name = match command {
        Command::Title(_) => "title",
        Command::Content(_) => "content",
        Command::Text(_) => "text",
        Command::Toggle(_) => "toggle",
        _ => "that command",
    };
    writeln!(
        out,
        "error: {name} is not available on the {here} screen (go {})",
        here.other()
    )?;
    Ok(())
}
