//! Line commands understood by the terminal front end.
//!
//! ```text
//! toggle <row>    flip a todo between the two lists
//! remove <row>    delete a todo
//! help            list commands
//! quit            leave
//! <anything else> typed into the form and submitted as a new todo
//! ```

use crate::services::{ServiceError, TodoServices};
use crate::view::{RowIndex, TodoForm};

/// Help text printed by the `help` command
pub const HELP: &str = "\
commands:
  <text>          add a todo
  toggle <row>    move a todo between todo and complete
  remove <row>    delete a todo
  help            show this message
  quit            exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add the text as a todo
    Submit(String),
    /// Toggle the todo on a row
    Toggle(usize),
    /// Remove the todo on a row
    Remove(usize),
    /// Print help
    Help,
    /// Leave the program
    Quit,
}

impl Command {
    /// Parses one input line
    ///
    /// `toggle` and `remove` followed by something other than a row number
    /// are treated as todo text.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed {
            "help" | "?" => return Self::Help,
            "quit" | "exit" => return Self::Quit,
            _ => {},
        }

        if let Some((verb, rest)) = trimmed.split_once(char::is_whitespace) {
            if let Ok(row) = rest.trim().parse::<usize>() {
                match verb {
                    "toggle" | "t" => return Self::Toggle(row),
                    "remove" | "rm" => return Self::Remove(row),
                    _ => {},
                }
            }
        }

        Self::Submit(line.to_string())
    }
}

/// What happened after applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command went to the store
    Applied,
    /// The row number is not on screen
    UnknownRow(usize),
    /// Help was requested
    Help,
    /// The user asked to leave
    Quit,
}

/// Applies `command` against the rows currently on screen
///
/// # Errors
///
/// Propagates [`ServiceError`] from the services.
pub async fn apply<S: TodoServices>(
    command: Command,
    rows: &RowIndex,
    form: &mut TodoForm,
    services: &S,
) -> Result<Outcome, ServiceError> {
    match command {
        Command::Submit(text) => {
            form.set_input(text);
            form.submit(services).await?;
            Ok(Outcome::Applied)
        },
        Command::Toggle(row) => match rows.get(row) {
            Some(id) => {
                services.toggle_todo(id).await?;
                Ok(Outcome::Applied)
            },
            None => Ok(Outcome::UnknownRow(row)),
        },
        Command::Remove(row) => match rows.get(row) {
            Some(id) => {
                services.remove_todo(id).await?;
                Ok(Outcome::Applied)
            },
            None => Ok(Outcome::UnknownRow(row)),
        },
        Command::Help => Ok(Outcome::Help),
        Command::Quit => Ok(Outcome::Quit),
    }
}
