use crate::cli::output;

/// Startup banner shown once when the shell opens in interactive mode.
pub struct Banner;

impl Banner {
    pub fn render() {
        output::section("Expense Manager");
        output::info("Track personal expenses for this session.");
        output::info("  add     record an expense (description, amount, date, category)");
        output::info("  remove  delete a recorded expense");
        output::info("  list    show every expense with the running total");
        output::info("  group   show totals per category");
        output::info("Type `help` for all commands. Nothing is saved on exit.");
    }
}
