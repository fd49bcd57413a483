//! Command registry for the REPL.

use crate::repl::Repl;
use crate::utils::levenshtein_distance;
use anyhow::Result;
use std::collections::HashMap;

/// Runs a command with its argument text. Returns `Ok(true)` when the REPL should exit.
pub type CommandFn = fn(&mut Repl<'_>, &str) -> Result<bool>;

/// A user-invokable action.
#[derive(Clone)]
pub struct Command {
    pub name: String,
    /// Usage line shown in help, e.g. `"open NAME"`.
    pub usage: String,
    pub description: String,
    pub run: CommandFn,
}

/// Registry of known commands + lookup table for fast resolving.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    by_name: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a command. Names are case-insensitive.
    pub fn register(&mut self, cmd: Command) {
        let name_key = cmd.name.to_lowercase();
        if let Some(&idx) = self.by_name.get(&name_key) {
            self.commands[idx] = cmd;
        } else {
            let idx = self.commands.len();
            self.commands.push(cmd);
            self.by_name.insert(name_key, idx);
        }
    }

    /// Lookup a command by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Command> {
        let idx = *self.by_name.get(&name.to_lowercase())?;
        self.commands.get(idx)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All commands, sorted by name, for help output.
    pub fn list(&self) -> Vec<&Command> {
        let mut v: Vec<&Command> = self.commands.iter().collect();
        v.sort_by(|a, b| a.name.cmp(&b.name));
        v
    }

    /// Commands whose name or description contains `query`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Command> {
        let q = query.to_lowercase();
        let mut items: Vec<&Command> = self
            .commands
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&q) || c.description.to_lowercase().contains(&q)
            })
            .collect();
        items.sort_by_key(|c| c.name.to_lowercase());
        items.truncate(limit);
        items
    }

    /// Find the closest command by name using Levenshtein distance.
    pub fn suggest_command(&self, name: &str) -> Option<&Command> {
        let name = name.to_lowercase();
        let mut best_dist = usize::MAX;
        let mut best_cmd = None;

        for cmd in &self.commands {
            let dist = levenshtein_distance(&name, &cmd.name.to_lowercase());
            if dist < best_dist {
                best_dist = dist;
                best_cmd = Some(cmd);
            }
        }

        // Only suggest when the distance is small next to the word length.
        let cmd = best_cmd?;
        let longest = name.chars().count().max(cmd.name.chars().count());
        let threshold = (longest * 2).div_ceil(5);
        (best_dist <= threshold.max(2)).then_some(cmd)
    }
}
