use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use history_core::{update, HistoryScreen, HistoryStore, Msg};
use history_logging::{history_info, history_warn};
use history_store::{FileHistoryStore, MemoryHistoryStore, PersistError};

use super::cli::Cli;
use super::config::HistoryConfig;
use super::effects::{EffectRunner, Flow};
use super::input::{parse_command, Command, HELP};
use super::logging;
use super::render::render;
use super::share::CommandShareTarget;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, history_logging::parse_level(&cli.log_level));

    let config = HistoryConfig::load(&cli.config)?.apply_cli(&cli);
    let store = FileHistoryStore::open(&config.store_path, config.store_settings())
        .with_context(|| format!("failed to open history {:?}", config.store_path))?;
    let runner = EffectRunner::new(
        Box::new(CommandShareTarget::new(config.share_command.clone())),
        config.share_subject.clone(),
    );

    let mut console = Console::new(HistoryScreen::new(store, config.title), runner);
    let stdin = io::stdin();
    let stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

/// Stores that can take a fresh scan from the console.
pub(crate) trait RecordScan {
    fn record_scan(&mut self, text: &str, format: &str) -> Result<(), PersistError>;
}

impl RecordScan for FileHistoryStore {
    fn record_scan(&mut self, text: &str, format: &str) -> Result<(), PersistError> {
        self.add_scan(text, format)
    }
}

impl RecordScan for MemoryHistoryStore {
    fn record_scan(&mut self, text: &str, format: &str) -> Result<(), PersistError> {
        self.add_scan(text, format);
        Ok(())
    }
}

/// Line-driven event loop: each command becomes a `Msg`, effects are run
/// and the list is redrawn when the state reports itself dirty.
pub(crate) struct Console<S> {
    state: Option<HistoryScreen<S>>,
    runner: EffectRunner,
}

impl<S: HistoryStore + RecordScan> Console<S> {
    pub(crate) fn new(state: HistoryScreen<S>, runner: EffectRunner) -> Self {
        Self {
            state: Some(state),
            runner,
        }
    }

    pub(crate) fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        if self.dispatch(Msg::Activated, out)? == Flow::Exit {
            return Ok(());
        }
        for line in input.lines() {
            let line = line?;
            let flow = match parse_command(&line) {
                Ok(command) => self.handle(command, out)?,
                Err(message) => {
                    writeln!(out, "{message}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        history_info!("History console closed");
        Ok(())
    }

    fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        match command {
            Command::Dispatch(msg) => self.dispatch(msg, out),
            Command::Add { text, format } => {
                if let Some(state) = self.state.as_mut() {
                    if let Err(err) = state.store_mut().record_scan(&text, &format) {
                        history_warn!("Could not record scan: {}", err);
                        writeln!(out, "Could not record scan: {err}")?;
                    }
                }
                self.dispatch(Msg::Activated, out)
            }
            Command::Show => {
                if let Some(state) = self.state.as_ref() {
                    write_lines(out, &render(&state.view()))?;
                }
                Ok(Flow::Continue)
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                Ok(Flow::Continue)
            }
            Command::Quit => Ok(Flow::Exit),
        }
    }

    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<Flow> {
        let Some(state) = self.state.take() else {
            return Ok(Flow::Exit);
        };
        let (mut state, effects) = update(state, msg);
        let lines = state.consume_dirty().then(|| render(&state.view()));
        self.state = Some(state);

        if let Some(lines) = lines {
            write_lines(out, &lines)?;
        }
        self.runner.run(effects, out)
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> Option<&HistoryScreen<S>> {
        self.state.as_ref()
    }
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
