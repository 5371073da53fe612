pub mod cli;
pub mod commands;
pub mod config;
pub mod render;
pub mod session;

use std::ffi::OsString;
use std::fs::File;
use std::io::{
  self,
  BufReader,
  IsTerminal
};

use anyhow::Context;
use clap::Parser;
use tracing::{
  debug,
  info
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let pre =
    cli::preprocess_args(&raw_args)?;
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting jotter"
  );
  debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.jotterrc.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
  );

  let start = match cli.screen {
    | Some(screen) => screen,
    | None => cfg.default_screen()?
  };
  let renderer =
    render::Renderer::new(&cfg)?;
  let mut session =
    session::Session::new(
      start, renderer
    );

  let mut stdout = io::stdout().lock();
  if let Some(path) = cli.script {
    let file = File::open(&path)
      .with_context(|| {
        format!(
          "failed to open script {}",
          path.display()
        )
      })?;
    session.run(
      BufReader::new(file),
      &mut stdout,
      None
    )?;
  } else {
    let stdin = io::stdin();
    let prompt = stdin
      .is_terminal()
      .then(|| cfg.prompt());
    session.run(
      stdin.lock(),
      &mut stdout,
      prompt.as_deref()
    )?;
  }

  info!("done");
  Ok(())
}
