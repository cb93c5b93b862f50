//! A REPL session: the contact book plus everything needed to run commands.

use super::handlers::{self, FAREWELL, GREETING, INVALID_COMMAND};
use super::parser::{parse_line, Command};
use crate::book::ContactBook;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::CommandResult;
use crate::matching::ContactMatcher;
use tracing::{debug, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and read the next line.
    Continue(String),
    /// Print the text and stop.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// Owns the contact book for the lifetime of the REPL.
pub struct Session<C: Clock = SystemClock> {
    book: ContactBook,
    config: Config,
    clock: C,
    matcher: ContactMatcher,
}

impl Session<SystemClock> {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(config: Config, clock: C) -> Self {
        Self {
            book: ContactBook::new(),
            config,
            clock,
            matcher: ContactMatcher::new(),
        }
    }

    pub fn book(&self) -> &ContactBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one input line. Returns `None` for a blank line.
    pub fn execute(&mut self, line: &str) -> Option<Reply> {
        let parsed = parse_line(line)?;

        let command = match parsed.command.parse::<Command>() {
            Ok(command) => command,
            Err(unknown) => {
                debug!(command = %unknown, "Unknown command");
                return Some(Reply::Continue(INVALID_COMMAND.to_string()));
            }
        };

        debug!(command = command.name(), args = parsed.args.len(), "Executing command");

        if command == Command::Exit {
            return Some(Reply::Exit(FAREWELL.to_string()));
        }

        let text = match self.dispatch(command, &parsed.args) {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    command = command.name(),
                    error = %e,
                    input = ?e.rejected_input(),
                    "Command failed"
                );
                e.to_string()
            }
        };
        Some(Reply::Continue(text))
    }

    fn dispatch(&mut self, command: Command, args: &[&str]) -> CommandResult<String> {
        let book = &mut self.book;
        match command {
            Command::Hello => Ok(GREETING.to_string()),
            Command::Add => handlers::add_contact(args, book),
            Command::Change => handlers::change_contact(args, book),
            Command::Phone => handlers::show_phone(args, book),
            Command::All => Ok(handlers::show_all(book)),
            Command::AddBirthday => handlers::add_birthday(args, book),
            Command::ShowBirthday => handlers::show_birthday(args, book),
            Command::Birthdays => Ok(handlers::birthdays(
                book,
                self.clock.today(),
                self.config.birthday_window_days,
            )),
            Command::RemovePhone => handlers::remove_phone(args, book),
            Command::Delete => handlers::delete_contact(args, book),
            Command::Show => handlers::show_contact(args, book),
            Command::Find => handlers::find_contacts(args, book, &self.matcher, &self.config),
            Command::Help => Ok(handlers::help()),
            Command::Exit => Ok(FAREWELL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn session() -> Session<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        Session::with_clock(Config::default(), FixedClock(today))
    }

    fn run(session: &mut Session<FixedClock>, line: &str) -> String {
        session.execute(line).unwrap().text().to_string()
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert!(session().execute("   ").is_none());
    }

    #[test]
    fn test_hello_and_unknown() {
        let mut s = session();
        assert_eq!(run(&mut s, "hello"), "How can I help you?");
        assert_eq!(run(&mut s, "fly away"), "Invalid command.");
    }

    #[test]
    fn test_exit_and_close_stop_the_loop() {
        let mut s = session();
        assert_eq!(s.execute("exit"), Some(Reply::Exit("Good bye!".into())));
        assert_eq!(s.execute("CLOSE"), Some(Reply::Exit("Good bye!".into())));
    }

    #[test]
    fn test_errors_become_messages() {
        let mut s = session();
        assert_eq!(run(&mut s, "add John 12"), "Invalid phone number format");
        assert_eq!(
            run(&mut s, "phone"),
            "Invalid arguments for 'phone'. Usage: phone <name>"
        );
        assert!(s.book().is_empty());
    }

    #[test]
    fn test_birthdays_uses_clock_and_window() {
        let mut s = session();
        run(&mut s, "add Ann");
        run(&mut s, "add-birthday Ann 15.06.1990");
        assert_eq!(run(&mut s, "birthdays"), "Ann's birthday: 2024.06.17");

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let config = Config {
            birthday_window_days: 2,
            ..Config::default()
        };
        let mut narrow = Session::with_clock(config, FixedClock(today));
        run(&mut narrow, "add Ann");
        run(&mut narrow, "add-birthday Ann 15.06.1990");
        assert_eq!(run(&mut narrow, "birthdays"), "No upcoming birthdays");
    }
}
