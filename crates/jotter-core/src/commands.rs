use anyhow::{Context, anyhow};
use jotter_shared::ScreenKind;
use tracing::debug;

pub fn known_command_names() -> Vec<&'static str> {
    vec![
        "add", "content", "delete", "exit", "go", "help", "list", "notes", "quit", "show",
        "tasks", "text", "title", "toggle",
    ]
}

pub fn expand_command_abbrev<'a>(token: &'a str, known: &[&'a str]) -> Option<&'a str> {
    if known.contains(&token) {
        return Some(token);
    }

    let mut matches = known.iter().copied().filter(|name| name.starts_with(token));
    let first = matches.next()?;
    if matches.next().is_some() {
        None
    } else {
        Some(first)
    }
}

/// One line of session input, resolved to the action it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Show,
    Quit,
    Go(ScreenKind),
    List { json: bool },
    Title(String),
    Content(String),
    Text(String),
    Add(Option<String>),
    Toggle(String),
    Delete(String),
}

impl Command {
    /// Parses a session line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let lowered = word.to_ascii_lowercase();
        let known = known_command_names();
        let name = expand_command_abbrev(&lowered, &known)
            .ok_or_else(|| anyhow!("unknown or ambiguous command: {word}"))?;
        debug!(token = %word, command = name, "resolved command token");

        let command = match name {
            "help" => Command::Help,
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            "notes" => Command::Go(ScreenKind::Notes),
            "tasks" => Command::Go(ScreenKind::Tasks),
            "go" => {
                let target = required(name, rest, "screen")?;
                Command::Go(
                    target
                        .parse::<ScreenKind>()
                        .context("go needs a screen name")?,
                )
            }
            "list" => match rest {
                "" => Command::List { json: false },
                "--json" => Command::List { json: true },
                other => return Err(anyhow!("list: unexpected argument {other}")),
            },
            "title" => Command::Title(rest.to_string()),
            "content" => Command::Content(rest.to_string()),
            "text" => Command::Text(rest.to_string()),
            "add" => Command::Add((!rest.is_empty()).then(|| rest.to_string())),
            "toggle" => Command::Toggle(required(name, rest, "id")?.to_string()),
            "delete" => Command::Delete(required(name, rest, "id")?.to_string()),
            other => return Err(anyhow!("unhandled command: {other}")),
        };

        Ok(Some(command))
    }
}

fn required<'a>(command: &str, rest: &'a str, what: &str) -> anyhow::Result<&'a str> {
    if rest.is_empty() {
        Err(anyhow!("{command}: missing {what}"))
    } else {
        Ok(rest)
    }
}

pub const HELP_TEXT: &str = "\
Anywhere:
  show                 render the current screen
  go notes|tasks       follow the navigation link (also: notes, tasks)
  help                 this text
  quit                 leave the session

Notes screen:
  title <text>         set the pending title
  content <text>       set the pending content
  add                  add a note from the pending title and content
  delete <id>          delete a note (id or unique id prefix)
  list [--json]        list notes

Tasks screen:
  text <text>          set the pending task text
  add [text]           add a task (inline text replaces the pending text)
  toggle <id>          flip a task between open and completed
  delete <id>          delete a task
  list [--json]        list tasks

Commands may be shortened to any unique prefix.
";
