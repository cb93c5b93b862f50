//! Command handlers.
//!
//! Each handler reads or mutates the [`ContactBook`] and returns the text to
//! print. Failures come back as [`CommandError`] and are rendered by the
//! session; they never end the loop.

use super::parser::Command;
use crate::book::{AddOutcome, ContactBook};
use crate::config::Config;
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{BookError, CommandError, CommandResult};
use crate::matching::ContactMatcher;
use chrono::NaiveDate;
use tracing::debug;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";

fn require_args(command: Command, args: &[&str]) -> CommandResult<()> {
    if args.len() < command.min_args() {
        return Err(CommandError::InvalidArguments {
            command: command.name(),
            usage: command.usage(),
        });
    }
    Ok(())
}

fn not_found(name: &str) -> CommandError {
    BookError::ContactNotFound(name.to_string()).into()
}

/// `add <name> [phone]`
pub fn add_contact(args: &[&str], book: &mut ContactBook) -> CommandResult<String> {
    require_args(Command::Add, args)?;

    let name = ContactName::new(args[0])?;
    // Validate before touching the book so a bad phone stores nothing.
    let phone = args
        .get(1)
        .filter(|raw| !raw.is_empty())
        .map(|raw| PhoneNumber::new(*raw))
        .transpose()?;

    let message = match book.add_contact(name, phone) {
        AddOutcome::Added => "Contact added.",
        AddOutcome::Updated => "Contact updated.",
    };
    Ok(message.to_string())
}

/// `change <name> <new_phone>`
pub fn change_contact(args: &[&str], book: &mut ContactBook) -> CommandResult<String> {
    require_args(Command::Change, args)?;
    let (name, new_phone) = (args[0], args[1]);

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    let old_phone = record
        .primary_phone()
        .map(|phone| phone.as_str().to_string())
        .ok_or_else(|| BookError::NoPhones(name.to_string()))?;

    record.edit_phone(&old_phone, new_phone)?;
    debug!(contact = %name, "Primary phone replaced");
    Ok(format!("Phone number updated for {}", name))
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &ContactBook) -> CommandResult<String> {
    require_args(Command::Phone, args)?;
    let name = args[0];

    match book.find(name).and_then(|record| record.primary_phone()) {
        Some(phone) => Ok(format!("Phone number for {}: {}", name, phone)),
        None => Ok(format!("Phone number not found for {}", name)),
    }
}

/// `all`
pub fn show_all(book: &ContactBook) -> String {
    if book.is_empty() {
        return "No contacts found".to_string();
    }

    book.iter()
        .map(|record| format!("{}: {}", record.name(), record.phones_joined(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut ContactBook) -> CommandResult<String> {
    require_args(Command::AddBirthday, args)?;
    let (name, raw) = (args[0], args[1]);

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    record.set_birthday(raw)?;
    Ok(format!("Birthday added for {}", name))
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &ContactBook) -> CommandResult<String> {
    require_args(Command::ShowBirthday, args)?;
    let name = args[0];

    match book.find(name).and_then(|record| record.birthday()) {
        Some(birthday) => Ok(format!("{}'s birthday: {}", name, birthday)),
        None => Ok(format!("Birthday not found for {}", name)),
    }
}

/// `birthdays`
pub fn birthdays(book: &ContactBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays".to_string();
    }

    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut ContactBook) -> CommandResult<String> {
    require_args(Command::RemovePhone, args)?;
    let (name, phone) = (args[0], args[1]);

    let record = book.find_mut(name).ok_or_else(|| not_found(name))?;
    let removed = record.remove_phone(phone);
    debug!(contact = %name, removed, "Phones removed");
    Ok(format!("Phone number removed for {}", name))
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut ContactBook) -> CommandResult<String> {
    require_args(Command::Delete, args)?;
    let name = args[0];

    book.delete(name).ok_or_else(|| not_found(name))?;
    Ok(format!("Contact {} deleted.", name))
}

/// `show <name>`
pub fn show_contact(args: &[&str], book: &ContactBook) -> CommandResult<String> {
    require_args(Command::Show, args)?;
    let name = args[0];

    book.find(name)
        .map(|record| record.describe())
        .ok_or_else(|| not_found(name))
}

/// `find <query>`; all arguments form one query so full names work.
pub fn find_contacts(
    args: &[&str],
    book: &ContactBook,
    matcher: &ContactMatcher,
    config: &Config,
) -> CommandResult<String> {
    require_args(Command::Find, args)?;
    let query = args.join(" ");

    let matches = matcher.find_matches(
        &query,
        book,
        config.max_match_results,
        config.match_confidence_threshold,
    );
    debug!(query = %query, matches = matches.len(), "Contact search finished");

    if matches.is_empty() {
        return Ok(format!("No contacts match '{}'", query));
    }

    Ok(matches
        .iter()
        .map(|m| m.record.describe())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `help`
pub fn help() -> String {
    let width = Command::ALL
        .iter()
        .map(|command| command.usage().len())
        .max()
        .unwrap_or(0);

    Command::ALL
        .iter()
        .map(|command| format!("{:width$}  {}", command.usage(), command.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
