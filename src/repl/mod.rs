//! Line-oriented REPL driving an [`EditorSession`].
//!
//! Every input line is `command [argument]`. Output goes to any `Write`, input comes from
//! any `BufRead`, so the whole loop runs without a terminal in tests.

mod builtin_commands;

use crate::commands::CommandRegistry;
use crate::session::EditorSession;
use anyhow::{Context, Result};
use crossterm::style::{style, Color, Stylize};
use log::debug;
use std::io::{BufRead, Write};

pub use builtin_commands::register_builtin_commands;

/// REPL state: the session plus I/O handles.
pub struct Repl<'io> {
    pub(crate) session: EditorSession,
    pub(crate) commands: CommandRegistry,
    input: &'io mut dyn BufRead,
    output: &'io mut dyn Write,
    /// Emit ANSI colours.
    color: bool,
    /// Set by a `quit` refused because of unsaved changes.
    pub(crate) quit_armed: bool,
}

impl<'io> Repl<'io> {
    /// Create a REPL with the built-in commands registered.
    pub fn new(
        session: EditorSession,
        input: &'io mut dyn BufRead,
        output: &'io mut dyn Write,
        color: bool,
    ) -> Self {
        let mut commands = CommandRegistry::new();
        register_builtin_commands(&mut commands);
        Self {
            session,
            commands,
            input,
            output,
            color,
            quit_armed: false,
        }
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Read-eval loop until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.say("Type 'help' for commands.")?;
        loop {
            self.prompt("> ")?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if self.execute_line(&line)? {
                break;
            }
        }
        Ok(())
    }

    /// Run one input line. Returns `Ok(true)` when the REPL should exit.
    pub fn execute_line(&mut self, line: &str) -> Result<bool> {
        let line = line.trim_start();
        if line.is_empty() {
            return Ok(false);
        }
        let (name, arg) = line
            .split_once(|c: char| c == ' ' || c == '\t')
            .unwrap_or((line, ""));
        debug!("command '{name}' arg {arg:?}");

        let Some(run) = self.commands.get(name).map(|c| c.run) else {
            let mut msg = format!("Unknown command: '{name}'");
            if let Some(suggestion) = self.commands.suggest_command(name) {
                msg.push_str(&format!(". Did you mean '{}'?", suggestion.name));
            }
            self.warn(&msg)?;
            return Ok(false);
        };

        if !name.eq_ignore_ascii_case("quit") {
            self.quit_armed = false;
        }
        run(self, arg)
    }

    /// Next input line without its line terminator, `None` at end of input.
    pub(crate) fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("Reading input")?;
        if n == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Apply colour when enabled.
    pub(crate) fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }

    /// Print a line.
    pub(crate) fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{msg}").context("Writing output")
    }

    /// Print a line in the warning colour.
    pub(crate) fn warn(&mut self, msg: &str) -> Result<()> {
        let painted = self.paint(msg, Color::Yellow);
        self.say(&painted)
    }

    /// Print without a newline and flush (for prompts).
    pub(crate) fn prompt(&mut self, msg: &str) -> Result<()> {
        write!(self.output, "{msg}").context("Writing output")?;
        self.output.flush().context("Flushing output")
    }
}
