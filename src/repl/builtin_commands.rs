//! Built-in REPL commands.

use super::Repl;
use crate::commands::{Command, CommandFn, CommandRegistry};
use crate::session::normalize_file_name;
use crate::types::{Completion, HistoryOutcome, SpellVerdict};
use crate::utils::levenshtein_distance;
use anyhow::Result;
use crossterm::style::Color;
use log::warn;
use std::path::PathBuf;

fn builtin(name: &str, usage: &str, description: &str, run: CommandFn) -> Command {
    Command {
        name: name.to_string(),
        usage: usage.to_string(),
        description: description.to_string(),
        run,
    }
}

/// Register all built-in REPL commands.
pub fn register_builtin_commands(reg: &mut CommandRegistry) {
    reg.register(builtin("type", "type TEXT", "Type TEXT at the end of the document", |r, arg| {
        r.session.type_str(arg);
        Ok(false)
    }));

    reg.register(builtin("line", "line TEXT", "Type TEXT followed by a newline", |r, arg| {
        r.session.type_line(arg);
        Ok(false)
    }));

    reg.register(builtin("back", "back", "Delete the last character", |r, _| {
        match r.session.backspace() {
            Some(ch) => r.say(&format!("Deleted {ch:?}.")),
            None => r.say("Nothing to delete."),
        }?;
        Ok(false)
    }));

    reg.register(builtin("complete", "complete", "Autocomplete the last word", |r, _| {
        r.cmd_complete()?;
        Ok(false)
    }));

    reg.register(builtin(
        "fix",
        "fix [WORD]",
        "Suggest dictionary words close to WORD or the last word",
        |r, arg| {
            r.cmd_fix(arg.trim())?;
            Ok(false)
        },
    ));

    reg.register(builtin("spell", "spell LINE", "Spell-check every word of LINE", |r, arg| {
        r.cmd_spell(arg)?;
        Ok(false)
    }));

    reg.register(builtin("undo", "undo", "Undo the last word", |r, _| {
        match r.session.undo() {
            HistoryOutcome::Applied { .. } => r.say("Undone."),
            HistoryOutcome::Nothing => r.say("Nothing to undo."),
        }?;
        Ok(false)
    }));

    reg.register(builtin("redo", "redo", "Redo the last undone word", |r, _| {
        match r.session.redo() {
            HistoryOutcome::Applied { .. } => r.say("Redone."),
            HistoryOutcome::Nothing => r.say("Nothing to redo."),
        }?;
        Ok(false)
    }));

    reg.register(builtin("show", "show", "Print the document", |r, _| {
        let text = r.session.text();
        r.say("----------")?;
        r.prompt(&text)?;
        if !text.is_empty() && !text.ends_with('\n') {
            r.say("")?;
        }
        r.say("----------")?;
        Ok(false)
    }));

    reg.register(builtin("open", "open NAME", "Load NAME(.txt), replacing the document", |r, arg| {
        r.cmd_open(arg.trim())?;
        Ok(false)
    }));

    reg.register(builtin("save", "save [NAME]", "Save to NAME(.txt) or the current file", |r, arg| {
        r.cmd_save(arg.trim())?;
        Ok(false)
    }));

    reg.register(builtin("help", "help [QUERY]", "List commands (matching QUERY)", |r, arg| {
        r.cmd_help(arg.trim())?;
        Ok(false)
    }));

    reg.register(builtin("quit", "quit", "Exit (asks again if there are unsaved changes)", |r, _| {
        r.try_quit()
    }));
}

impl Repl<'_> {
    /// Show numbered suggestions for the last word and apply the choice typed next.
    fn cmd_complete(&mut self) -> Result<()> {
        let word = self.session.last_word();
        let suggestions = self.session.autocomplete_suggestions();
        if suggestions.is_empty() {
            return self.say("No suggestions found.");
        }

        self.say(&format!("Suggestions for '{word}':"))?;
        for (i, s) in suggestions.iter().enumerate() {
            self.say(&format!("  {}. {s}", i + 1))?;
        }
        self.prompt("Choose (0 to cancel): ")?;

        // End of input while choosing counts as cancel.
        let choice = match self.read_line()? {
            Some(line) => match line.trim().parse::<usize>() {
                Ok(n) => n,
                Err(_) => return self.warn("Invalid choice."),
            },
            None => 0,
        };

        match self.session.apply_completion(&suggestions, choice) {
            Completion::Replaced(w) => self.say(&format!("Replaced with '{w}'.")),
            Completion::Cancelled => self.say("Cancelled."),
            Completion::InvalidChoice => self.warn("Invalid choice."),
        }
    }

    fn cmd_fix(&mut self, arg: &str) -> Result<()> {
        let word = if arg.is_empty() { self.session.last_word() } else { arg.to_string() };
        if word.is_empty() {
            return self.say("No word to check.");
        }
        let suggestions = self.session.fuzzy_suggestions(&word);
        if suggestions.is_empty() {
            return self.say("No suggestions found.");
        }
        let word = word.to_lowercase();
        let listed: Vec<String> = suggestions
            .iter()
            .map(|s| format!("{s} ({})", levenshtein_distance(&word, s)))
            .collect();
        self.say(&format!("Did you mean: {}", listed.join(", ")))
    }

    fn cmd_spell(&mut self, line: &str) -> Result<()> {
        let tokens = self.session.spell_check(line);
        if tokens.is_empty() {
            return self.say("Nothing to check.");
        }
        for token in tokens {
            let msg = match token.verdict {
                SpellVerdict::Ok => format!("  {}: {}", token.word, self.paint("ok", Color::Green)),
                SpellVerdict::Unknown if token.suggestions.is_empty() => {
                    format!("  {}: {}", token.word, self.paint("unknown", Color::Red))
                }
                SpellVerdict::Unknown => format!(
                    "  {}: {} (did you mean: {})",
                    token.word,
                    self.paint("unknown", Color::Red),
                    token.suggestions.join(", ")
                ),
            };
            self.say(&msg)?;
        }
        Ok(())
    }

    fn cmd_open(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return self.warn("Usage: open NAME");
        }
        let path = normalize_file_name(name);
        match self.session.open_path(&path) {
            Ok(()) => self.say(&format!("Opened: {}", path.display())),
            Err(e) => {
                warn!("open failed: {e:#}");
                self.warn(&format!("Error: {e:#}"))
            }
        }
    }

    fn cmd_save(&mut self, name: &str) -> Result<()> {
        let path: PathBuf = if name.is_empty() {
            match self.session.file_path() {
                Some(p) => p.clone(),
                None => return self.warn("Usage: save NAME"),
            }
        } else {
            normalize_file_name(name)
        };
        match self.session.save_to_path(&path) {
            Ok(()) => self.say(&format!("Saved: {}", path.display())),
            Err(e) => {
                warn!("save failed: {e:#}");
                self.warn(&format!("Error: {e:#}"))
            }
        }
    }

    fn cmd_help(&mut self, query: &str) -> Result<()> {
        let lines: Vec<String> = {
            let cmds = if query.is_empty() {
                self.commands.list()
            } else {
                self.commands.search(query, usize::MAX)
            };
            cmds.iter()
                .map(|c| format!("  {:<14} {}", c.usage, c.description))
                .collect()
        };
        if lines.is_empty() {
            return self.say(&format!("No commands match '{query}'."));
        }
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    /// Quit, unless there are unsaved changes and this is the first attempt.
    fn try_quit(&mut self) -> Result<bool> {
        if self.session.is_dirty() && !self.quit_armed {
            self.quit_armed = true;
            self.warn("Unsaved changes. Type 'quit' again to discard them.")?;
            return Ok(false);
        }
        Ok(true)
    }
}
