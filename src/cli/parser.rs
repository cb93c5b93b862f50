//! Command-line parsing for the REPL.

use std::str::FromStr;

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Show,
    Find,
    Help,
    Exit,
}

impl Command {
    pub const ALL: [Command; 14] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::RemovePhone,
        Command::Delete,
        Command::Show,
        Command::Find,
        Command::Help,
        Command::Exit,
    ];

    /// Canonical command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone",
            Command::Delete => "delete",
            Command::Show => "show",
            Command::Find => "find",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> [phone]",
            Command::Change => "change <name> <new_phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::Show => "show <name>",
            Command::Find => "find <name or phone>",
            Command::Help => "help",
            Command::Exit => "close | exit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Hello => "Greet the assistant",
            Command::Add => "Add a contact or append a phone to an existing one",
            Command::Change => "Replace a contact's first phone number",
            Command::Phone => "Show a contact's first phone number",
            Command::All => "List every contact with its phones",
            Command::AddBirthday => "Set a contact's birthday",
            Command::ShowBirthday => "Show a contact's birthday",
            Command::Birthdays => "List birthdays to celebrate in the coming days",
            Command::RemovePhone => "Remove a phone number from a contact",
            Command::Delete => "Delete a contact",
            Command::Show => "Show everything stored for a contact",
            Command::Find => "Search contacts by name or phone",
            Command::Help => "Show this help",
            Command::Exit => "Leave the assistant",
        }
    }

    /// Minimum number of arguments the command needs.
    pub fn min_args(&self) -> usize {
        match self {
            Command::Add | Command::Phone | Command::ShowBirthday => 1,
            Command::Delete | Command::Show | Command::Find => 1,
            Command::Change | Command::AddBirthday | Command::RemovePhone => 2,
            Command::Hello | Command::All | Command::Birthdays | Command::Help | Command::Exit => 0,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "show" => Ok(Command::Show),
            "find" => Ok(Command::Find),
            "help" => Ok(Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            other => Err(other.to_string()),
        }
    }
}

/// A line split into a command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub command: &'a str,
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace. Returns `None` for a blank line.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some(ParsedLine {
        command,
        args: words.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_splits_words() {
        let parsed = parse_line("  add   John 1234567890 ").unwrap();
        assert_eq!(parsed.command, "add");
        assert_eq!(parsed.args, ["John", "1234567890"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t").is_none());
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("add-birthday".parse::<Command>(), Ok(Command::AddBirthday));
        assert_eq!("HELLO".parse::<Command>(), Ok(Command::Hello));
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert!("remove".parse::<Command>().is_err());
    }

    #[test]
    fn test_every_name_parses_back() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
    }
}
