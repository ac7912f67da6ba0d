use crate::cli::core::{CommandResult, ShellContext};

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

/// Registration-ordered command table.
///
/// The set is small enough that linear lookup beats a map.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<CommandEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, entry: CommandEntry) {
        if self.get(entry.name).is_none() {
            self.commands.push(entry);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.iter().find(|entry| entry.name == name)
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandEntry> {
        self.commands.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|entry| entry.name)
    }

    pub fn handler(&self, name: &str) -> Option<CommandHandler> {
        self.get(name).map(|entry| entry.handler)
    }
}
