//! Command-line input parsing.

use std::fmt;
use std::str::FromStr;

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    Search,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 13] = [
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
        Command::Search,
        Command::Help,
        Command::Exit,
    ];

    /// Canonical command token.
    pub fn name(self) -> &'static str {
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
            Command::Search => "search",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old_phone> <new_phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays [days]",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::Search => "search <query>",
            Command::Help => "help",
            Command::Exit => "close | exit",
        }
    }

    /// Number of positional arguments that must be present.
    pub fn required_args(self) -> usize {
        match self {
            Command::Change => 3,
            Command::Add | Command::AddBirthday | Command::RemovePhone => 2,
            Command::Phone | Command::ShowBirthday | Command::Delete | Command::Search => 1,
            Command::Hello
            | Command::All
            | Command::Birthdays
            | Command::Help
            | Command::Exit => 0,
        }
    }
}

impl FromStr for Command {
    type Err = String;

    /// Case-insensitive; `close` is an alias for `exit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "close" | "exit" => Ok(Command::Exit),
            token => Command::ALL
                .into_iter()
                .find(|command| command.name() == token)
                .ok_or_else(|| format!("Unknown command: {}", s)),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split a line into a lowercased command token and its arguments.
///
/// Returns `None` for a blank line. Arguments keep their case.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let (command, args) = parse_input("  ADD John 1234567890 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["John", "1234567890"]);
    }

    #[test]
    fn test_parse_input_blank() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t\n").is_none());
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (_, args) = parse_input("phone JOHN").unwrap();
        assert_eq!(args, vec!["JOHN"]);
    }

    #[test]
    fn test_command_from_str() {
        assert_eq!("hello".parse::<Command>(), Ok(Command::Hello));
        assert_eq!("Add-Birthday".parse::<Command>(), Ok(Command::AddBirthday));
        assert_eq!("CLOSE".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Exit));
        assert!("remove".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_every_command_parses_from_its_name() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_required_args() {
        assert_eq!(Command::Change.required_args(), 3);
        assert_eq!(Command::Add.required_args(), 2);
        assert_eq!(Command::Phone.required_args(), 1);
        assert_eq!(Command::Birthdays.required_args(), 0);
    }
}
