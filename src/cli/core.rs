//! Shell context, command dispatch, and the command error taxonomy.

use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use strsim::levenshtein;
use uuid::Uuid;

use crate::cli::io as cli_io;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::{commands, help};
use crate::currency::Amount;
use crate::errors::LedgerError;
use crate::ledger::{Category, ExpenseLedger, ExpenseRecord};

/// How the shell was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Errors that abort the shell itself, as opposed to a single command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors produced by individual commands; all are reported and recovered.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    InvalidArguments(String),
    #[error("prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Owns the ledger for the session and everything command handlers need.
///
/// The ledger lives here and is passed by reference into rendering code;
/// nothing reaches it through global state.
pub struct ShellContext {
    mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) ledger: ExpenseLedger,
    pub(crate) theme: ColorfulTheme,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        Self {
            mode,
            registry,
            ledger: ExpenseLedger::new(),
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    /// Today's date in the `dd/MM/yyyy` form the date field defaults to.
    pub(crate) fn today(&self) -> String {
        Local::now().format("%d/%m/%Y").to_string()
    }

    pub(crate) fn prompt(&self) -> String {
        if self.ledger.is_empty() {
            "expenses > ".to_string()
        } else {
            format!(
                "expenses ({}) total {} > ",
                self.ledger.len(),
                self.ledger.total()
            )
        }
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => {
                    self.running = false;
                    Ok(LoopControl::Exit)
                }
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, input), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 2 {
                cli_io::print_info(format!("Did you mean `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit the expense shell?")
            .default(true)
            .interact()
            .map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                cli_io::print_info("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Ledger(LedgerError::NotFound) => {
                self.print_error("No expense record matches that selection.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_help_overview(&self) {
        help::print_overview(&self.registry);
    }

    /// Interactive add form: text inputs with the date pre-filled to today
    /// and the category chosen from the fixed set.
    pub(crate) fn run_add_wizard(&mut self) -> CommandResult {
        if self.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(
                "usage: add <description> <amount> [date] [category]".into(),
            ));
        }

        let description: String = Input::with_theme(&self.theme)
            .with_prompt("Description")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Description cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let amount: String = Input::with_theme(&self.theme)
            .with_prompt("Amount")
            .validate_with(|input: &String| -> Result<(), &str> {
                input
                    .parse::<Amount>()
                    .map(|_| ())
                    .map_err(|_| "Amount must be a non-negative number")
            })
            .interact_text()?;

        let date: String = Input::with_theme(&self.theme)
            .with_prompt("Date")
            .default(self.today())
            .interact_text()?;

        let labels: Vec<&str> = Category::ALL.iter().map(Category::label).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()?;
        let category = Category::ALL[selection];

        self.add_expense(&description, &amount, &date, category)
    }

    /// Validates through the ledger and reports the outcome.
    pub(crate) fn add_expense(
        &mut self,
        description: &str,
        amount_text: &str,
        date: &str,
        category: Category,
    ) -> CommandResult {
        let id = self.ledger.add(description, amount_text, date, category)?;
        let record = self
            .ledger
            .record(id)
            .expect("record just added should exist");
        cli_io::print_success(format!("Expense added: {}", record_summary(record)));
        Ok(())
    }

    /// Interactive picker over the current records; `None` means cancelled.
    pub(crate) fn select_record_index(&self) -> Result<Option<usize>, CommandError> {
        if self.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments("usage: remove <index>".into()));
        }
        if self.ledger.is_empty() {
            self.print_warning("No expenses recorded.");
            return Ok(None);
        }
        let items: Vec<String> = self.ledger.records().iter().map(record_summary).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select the expense to remove")
            .items(&items)
            .default(0)
            .interact_opt()?;
        Ok(selection)
    }

    /// Resolves a displayed index to its record and removes it.
    ///
    /// The index space only ever contains real records; the rendered total
    /// row has no index, so it can never be submitted here.
    pub(crate) fn remove_record_at(&mut self, index: usize) -> CommandResult {
        let (id, summary) = {
            let record = self
                .ledger
                .records()
                .get(index)
                .ok_or(CommandError::Ledger(LedgerError::NotFound))?;
            (record.id, record_summary(record))
        };

        if self.mode == CliMode::Interactive
            && !cli_io::confirm_action(&self.theme, "Remove this expense?", false)?
        {
            cli_io::print_info("Removal cancelled.");
            return Ok(());
        }

        self.remove_expense(id, &summary)
    }

    fn remove_expense(&mut self, id: Uuid, summary: &str) -> CommandResult {
        self.ledger.remove(id)?;
        cli_io::print_success(format!("Expense removed: {}", summary));
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }
}

/// One-line rendering of a record for confirmations and result messages.
pub(crate) fn record_summary(record: &ExpenseRecord) -> String {
    format!(
        "{} {} on {} [{}]",
        record.description, record.amount, record.date, record.category
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_context() -> ShellContext {
        ShellContext::new(CliMode::Script)
    }

    #[test]
    fn add_command_appends_a_record() {
        let mut context = script_context();
        context
            .process_line("add Lunch 10.00 01/01/2025 Food")
            .expect("add succeeds");
        assert_eq!(context.ledger.len(), 1);
        assert_eq!(context.ledger.total(), "10.00".parse::<Amount>().unwrap());
    }

    #[test]
    fn add_defaults_date_and_category_when_omitted() {
        let mut context = script_context();
        context.process_line("add Coffee 3,20").expect("add succeeds");
        let record = &context.ledger.records()[0];
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.date, context.today());
    }

    #[test]
    fn remove_command_deletes_by_displayed_index() {
        let mut context = script_context();
        context
            .process_line("add Lunch 10.00 01/01/2025 Food")
            .unwrap();
        context
            .process_line("add Bus 2,50 01/01/2025 Transport")
            .unwrap();
        context.process_line("remove 0").expect("remove succeeds");
        assert_eq!(context.ledger.len(), 1);
        assert_eq!(context.ledger.total(), "2.50".parse::<Amount>().unwrap());
    }

    #[test]
    fn remove_with_out_of_range_index_is_not_found() {
        let mut context = script_context();
        let err = context
            .process_line("remove 5")
            .expect_err("out of range index must fail");
        assert!(matches!(
            err,
            CommandError::Ledger(LedgerError::NotFound)
        ));
    }

    #[test]
    fn add_with_bad_amount_reports_parse_error_and_keeps_ledger_clean() {
        let mut context = script_context();
        let err = context
            .process_line("add Lunch abc")
            .expect_err("bad amount must fail");
        assert!(matches!(err, CommandError::Ledger(LedgerError::Parse(_))));
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn add_with_unknown_category_is_a_validation_error() {
        let mut context = script_context();
        let err = context
            .process_line("add Rent 500 01/01/2025 Housing")
            .expect_err("unknown category must fail");
        assert!(matches!(
            err,
            CommandError::Ledger(LedgerError::Validation(_))
        ));
        assert!(context.ledger.is_empty());
    }

    #[test]
    fn exit_command_requests_loop_exit() {
        let mut context = script_context();
        let control = context.process_line("exit").expect("exit is handled");
        assert_eq!(control, LoopControl::Exit);
    }

    #[test]
    fn unknown_command_continues_the_loop() {
        let mut context = script_context();
        let control = context.process_line("frobnicate").expect("unknown is soft");
        assert_eq!(control, LoopControl::Continue);
    }
}
