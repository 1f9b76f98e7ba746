use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use musicscope_core::{update, AppState, Msg};
use musicscope_logging::{scope_info, scope_warn};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{help_text, parse_command, Command};
use super::ui::render::render;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log, config.level());
    scope_info!("Starting MusicScope dashboard");

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(config.client_settings(), cmd_tx.clone())?;
    spawn_input_reader(cmd_tx.clone());

    let mut app = App {
        state: AppState::with_selections(config.country, config.compare),
        runner,
        out: io::stdout(),
    };
    app.print(&help_text())?;
    let _ = cmd_tx.send(Command::Dispatch(Msg::Started));
    drop(cmd_tx);

    while let Ok(command) = cmd_rx.recv() {
        match command {
            Command::Dispatch(msg) => app.dispatch_msg(msg)?,
            Command::Help => app.print(&help_text())?,
            Command::Unknown(line) => {
                app.print(&format!("Unknown command: {line} (type `help`)\n"))?;
            }
            Command::Quit => break,
        }
    }

    scope_info!("MusicScope dashboard stopped");
    Ok(())
}

struct App {
    state: AppState,
    runner: EffectRunner,
    out: io::Stdout,
}

impl App {
    /// Single writer: every state transition happens here, on the main thread.
    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        self.runner.enqueue(effects);
        match view {
            Some(view) => self.print(&render(&view)),
            None => Ok(()),
        }
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_all(text.as_bytes())?;
        out.write_all(b"> ")?;
        out.flush()
    }
}

fn spawn_input_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    scope_warn!("Failed to read stdin: {}", err);
                    break;
                }
            };
            if let Some(command) = parse_command(&line) {
                if cmd_tx.send(command).is_err() {
                    return;
                }
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });
}
