//! Command execution and reply formatting.
//!
//! The [`Interpreter`] owns the address book for the lifetime of a prompt
//! session and turns each [`Command`] into a reply string. Errors from the
//! book are caught here and rendered for the user.

use super::command::Command;
use crate::book::AddressBook;
use crate::config::Config;
use crate::error::{BookError, BookResult, CommandError};
use crate::models::Record;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Reply printed for a missing contact.
pub const NOT_FOUND_REPLY: &str = "Contact not found";

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading.
    Message(String),
    /// Print nothing and keep reading.
    Silent,
    /// Print the message and stop.
    Exit(String),
}

/// Line-oriented front end for an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Interpreter {
    book: AddressBook,
    page_size: usize,
}

impl Interpreter {
    /// Create an interpreter with an empty book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config.page_size)
    }

    /// Create an interpreter around an existing book.
    pub fn with_book(book: AddressBook, page_size: usize) -> Self {
        Self { book, page_size }
    }

    /// The book this interpreter operates on.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Consume the interpreter, returning its book.
    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Parse and execute one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(e) => {
                warn!(error = %e, "Rejected command input");
                Reply::Message(e.to_string())
            }
        }
    }

    /// Execute a parsed command.
    ///
    /// A phone that fails validation in `add` or `change` is reported as
    /// malformed input, like a missing phone.
    pub fn execute(&mut self, command: Command) -> Reply {
        let keyword = command.keyword();
        let phone_input = matches!(command, Command::Add { .. } | Command::Change { .. });

        let reply = match command {
            Command::Empty => return Reply::Silent,
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change { name, phone } => self.change_contact(&name, &phone),
            Command::Phone { name } => self.get_phone(&name),
            Command::ShowAll => self.show_all(),
            Command::Find { query } => Ok(self.find_contacts(&query)),
            Command::Delete { name } => self.delete_contact(&name),
            Command::Birthday { name, date } => self.set_birthday(&name, &date),
            Command::Days { name } => self.days_to_birthday(&name),
            Command::Unknown(_) => Ok("Unknown command".to_string()),
        };

        match reply {
            Ok(message) => {
                debug!(command = keyword, "Command completed");
                Reply::Message(message)
            }
            Err(BookError::Validation(e)) if phone_input => {
                warn!(command = keyword, error = %e, "Rejected phone input");
                Reply::Message(CommandError::MissingNameAndPhone.to_string())
            }
            Err(e) => {
                warn!(command = keyword, error = %e, "Command failed");
                Reply::Message(Self::render_error(&e))
            }
        }
    }

    /// Run the prompt loop until an exit command or end of input.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `output`.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W, prompt: &str) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut line = String::new();

        loop {
            write!(output, "{}", prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                info!("End of input");
                break;
            }

            match self.handle_line(&line) {
                Reply::Message(message) => writeln!(output, "{}", message)?,
                Reply::Silent => {}
                Reply::Exit(message) => {
                    writeln!(output, "{}", message)?;
                    break;
                }
            }
        }

        output.flush()
    }

    fn render_error(error: &BookError) -> String {
        match error {
            BookError::NotFound(_) => NOT_FOUND_REPLY.to_string(),
            BookError::Validation(e) => e.to_string(),
            BookError::InvalidArgument(_) => error.to_string(),
        }
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let record = Record::new(name, phone)?;
        let reply = format!("Contact {} added", record.name());
        self.book.add_record(record);
        Ok(reply)
    }

    fn change_contact(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let record = self.book.edit_phone(name, phone)?;
        Ok(format!("Phone number for {} changed", record.name()))
    }

    fn get_phone(&self, name: &str) -> BookResult<String> {
        let record = self
            .book
            .lookup(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        Ok(format!(
            "Phone number for {}: {}",
            record.name(),
            record.phone()
        ))
    }

    fn show_all(&self) -> BookResult<String> {
        if self.book.is_empty() {
            return Ok("No contacts found".to_string());
        }

        let pages = self.book.iterate(self.page_size)?;
        let numbered = pages.len() > 1;

        let mut lines = vec!["Contacts:".to_string()];
        for (number, page) in pages.enumerate() {
            if numbered {
                lines.push(format!("Page {}:", number + 1));
            }
            lines.extend(page.iter().map(|record| record.to_string()));
        }
        Ok(lines.join("\n"))
    }

    fn find_contacts(&self, query: &str) -> String {
        let found = self.book.find_records(query);
        if found.is_empty() {
            return format!("No contacts match '{}'", query);
        }

        let mut lines = vec![format!("Found {} contact(s):", found.len())];
        lines.extend(found.iter().map(|record| record.to_string()));
        lines.join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<String> {
        let removed = self.book.remove_record(name)?;
        Ok(format!("Contact {} deleted", removed.name()))
    }

    fn set_birthday(&mut self, name: &str, date: &str) -> BookResult<String> {
        let record = self
            .book
            .lookup_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        let birthday = record.edit_birthday(date)?.to_string();
        Ok(format!("Birthday for {} set to {}", record.name(), birthday))
    }

    fn days_to_birthday(&self, name: &str) -> BookResult<String> {
        let record = self
            .book
            .lookup(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        Ok(match record.days_to_birthday() {
            Some(days) => format!("{} day(s) until {}'s birthday", days, record.name()),
            None => format!("No birthday set for {}", record.name()),
        })
    }
}
