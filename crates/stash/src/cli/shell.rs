//! Interactive menu loop.
//!
//! The shell reads from any `BufRead` and writes to any `Write`, so tests can drive
//! it with canned input. All prompts loop until they get a usable value; end of
//! input at any prompt ends the session.

use super::render::{
    error_message, render_comparisons, render_criteria_menu, render_found, render_menu,
    render_messages, render_table,
};
use stashapp::api::StashApi;
use stashapp::commands::CmdResult;
use stashapp::error::{Result, StashError};
use stashapp::model::Priority;
use stashapp::ordering::Criterion;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Add,
    Remove,
    List,
    Sort,
    Search,
}

impl FromStr for MenuChoice {
    type Err = StashError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.parse::<i64>() {
            Ok(0) => Ok(MenuChoice::Exit),
            Ok(1) => Ok(MenuChoice::Add),
            Ok(2) => Ok(MenuChoice::Remove),
            Ok(3) => Ok(MenuChoice::List),
            Ok(4) => Ok(MenuChoice::Sort),
            Ok(5) => Ok(MenuChoice::Search),
            _ => Err(StashError::InvalidChoice(trimmed.to_string())),
        }
    }
}

/// Whether the session goes on after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    api: StashApi,
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(api: StashApi, input: R, output: W, interactive: bool) -> Self {
        Self {
            api,
            input,
            output,
            interactive,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.interactive {
                console::Term::stdout().clear_screen()?;
            }
            let menu = render_menu(self.api.inventory());
            self.write(&menu)?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                break;
            };
            let flow = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => {
                    tracing::debug!(?choice, "menu");
                    self.dispatch(choice)?
                }
                Err(e) => {
                    self.show_error(&e)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            if self.interactive && self.prompt("\nPress ENTER to continue...")?.is_none() {
                break;
            }
        }
        self.write("Leaving the island... Good luck, survivor!\n")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Remove => self.remove(),
            MenuChoice::List => self.list(),
            MenuChoice::Sort => self.sort(),
            MenuChoice::Search => self.search(),
            MenuChoice::Exit => Ok(Flow::Quit),
        }
    }

    fn add(&mut self) -> Result<Flow> {
        if let Err(e) = self.api.check_add() {
            return self.recover(e);
        }
        let Some(name) = self.prompt_text("Item name: ", true)? else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = self.prompt_text("Item type (e.g. arma, municao, cura): ", false)? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) = self.prompt_number("Quantity: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(priority) = self.prompt_priority()? else {
            return Ok(Flow::Quit);
        };

        let result = self.api.add_record(&name, &kind, quantity, priority);
        self.report(result)
    }

    fn remove(&mut self) -> Result<Flow> {
        if let Err(e) = self.api.check_remove() {
            return self.recover(e);
        }
        let Some(name) = self.prompt("Name of the item to remove: ")? else {
            return Ok(Flow::Quit);
        };
        let result = self.api.remove_record(&name);
        self.report(result)
    }

    fn list(&mut self) -> Result<Flow> {
        match self.api.list_records() {
            Ok(result) => {
                self.write(&render_table(&result.listed_records))?;
                self.write(&render_messages(&result.messages))?;
                Ok(Flow::Continue)
            }
            Err(e) => self.recover(e),
        }
    }

    fn sort(&mut self) -> Result<Flow> {
        if let Err(e) = self.api.check_sort() {
            return self.recover(e);
        }
        self.write(&render_criteria_menu())?;
        let Some(line) = self.prompt("Choose: ")? else {
            return Ok(Flow::Quit);
        };
        let criterion = match line.parse::<Criterion>() {
            Ok(criterion) => criterion,
            Err(e) => return self.recover(e),
        };

        match self.api.sort_records(criterion) {
            Ok(result) => {
                self.write(&render_messages(&result.messages))?;
                if let Some(comparisons) = result.comparisons {
                    self.write(&render_comparisons("Comparisons performed", comparisons))?;
                }
                self.write(&render_table(&result.listed_records))?;
                Ok(Flow::Continue)
            }
            Err(e) => self.recover(e),
        }
    }

    fn search(&mut self) -> Result<Flow> {
        if let Err(e) = self.api.check_find() {
            return self.recover(e);
        }
        let Some(name) = self.prompt("Name of the item to search for: ")? else {
            return Ok(Flow::Quit);
        };

        match self.api.find_record(&name) {
            Ok(result) => {
                if let Some(found) = result.listed_records.first() {
                    self.write(&render_found(found))?;
                }
                if let Some(comparisons) = result.comparisons {
                    self.write(&render_comparisons("Search comparisons", comparisons))?;
                }
                Ok(Flow::Continue)
            }
            Err(StashError::NotFound {
                name,
                comparisons: Some(comparisons),
            }) => {
                let miss = StashError::not_found(name);
                self.show_error(&miss)?;
                self.write(&render_comparisons("Search comparisons", comparisons))?;
                Ok(Flow::Continue)
            }
            Err(e) => self.recover(e),
        }
    }

    fn report(&mut self, result: Result<CmdResult>) -> Result<Flow> {
        match result {
            Ok(result) => {
                self.write(&render_messages(&result.messages))?;
                Ok(Flow::Continue)
            }
            Err(e) => self.recover(e),
        }
    }

    /// Shows a recoverable error and stays in the session; I/O errors propagate.
    fn recover(&mut self, err: StashError) -> Result<Flow> {
        if let StashError::Io(_) = err {
            return Err(err);
        }
        self.show_error(&err)?;
        Ok(Flow::Continue)
    }

    fn show_error(&mut self, err: &StashError) -> Result<()> {
        tracing::debug!(error = %err, "operation rejected");
        let rendered = render_messages(&[error_message(err)]);
        self.write(&rendered)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes `label` and reads one line without its line ending. `None` on EOF.
    ///
    /// Input is raw bytes; invalid UTF-8 is replaced rather than rejected.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.write(label)?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt_text(&mut self, label: &str, is_name: bool) -> Result<Option<String>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            let value = if is_name {
                self.api.normalize_name(&line)
            } else {
                self.api.normalize_kind(&line)
            };
            if !value.is_empty() {
                return Ok(Some(value));
            }
            self.write("This field cannot be empty.\n")?;
        }
    }

    fn prompt_number(&mut self, label: &str) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.write("Enter a whole number.\n")?,
            }
        }
    }

    fn prompt_priority(&mut self) -> Result<Option<Priority>> {
        loop {
            let Some(value) = self.prompt_number("Priority (1-low to 5-high): ")? else {
                return Ok(None);
            };
            match Priority::new(value) {
                Ok(priority) => return Ok(Some(priority)),
                Err(e) => self.show_error(&e)?,
            }
        }
    }
}
