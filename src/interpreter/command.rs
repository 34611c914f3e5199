//! Parsing of prompt lines into commands.

use crate::error::{CommandError, CommandResult};

/// A parsed prompt command.
///
/// Keywords are matched case-insensitively; arguments keep their case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    ShowAll,
    Find { query: String },
    Delete { name: String },
    Birthday { name: String, date: String },
    Days { name: String },
    Exit,
    /// Blank input
    Empty,
    Unknown(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` when a known command is missing arguments.
    pub fn parse(line: &str) -> CommandResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = tokens.split_first() else {
            return Ok(Self::Empty);
        };

        let command = match keyword.to_lowercase().as_str() {
            "hello" if args.is_empty() => Self::Hello,
            "add" => {
                let (name, phone) = name_and_phone(args)?;
                Self::Add { name, phone }
            }
            "change" => {
                let (name, phone) = name_and_phone(args)?;
                Self::Change { name, phone }
            }
            "birthday" => match args {
                [name, date] => Self::Birthday {
                    name: name.to_string(),
                    date: date.to_string(),
                },
                _ => return Err(CommandError::MissingNameAndBirthday),
            },
            "phone" => Self::Phone {
                name: remainder(args).ok_or(CommandError::MissingName)?,
            },
            "delete" | "remove" => Self::Delete {
                name: remainder(args).ok_or(CommandError::MissingName)?,
            },
            "days" => Self::Days {
                name: remainder(args).ok_or(CommandError::MissingName)?,
            },
            "find" | "search" => Self::Find {
                query: remainder(args).ok_or(CommandError::MissingQuery)?,
            },
            "show" if is_word(args, "all") => Self::ShowAll,
            "good" if is_word(args, "bye") => Self::Exit,
            "exit" | "close" if args.is_empty() => Self::Exit,
            _ => Self::Unknown(line.trim().to_string()),
        };

        Ok(command)
    }

    /// Short name used in logs.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add { .. } => "add",
            Self::Change { .. } => "change",
            Self::Phone { .. } => "phone",
            Self::ShowAll => "show all",
            Self::Find { .. } => "find",
            Self::Delete { .. } => "delete",
            Self::Birthday { .. } => "birthday",
            Self::Days { .. } => "days",
            Self::Exit => "exit",
            Self::Empty => "empty",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// First token as the name, the remaining tokens joined as the phone.
///
/// Every phone token must consist of digits and phone punctuation, so a
/// second name word is not folded into the number.
fn name_and_phone(args: &[&str]) -> CommandResult<(String, String)> {
    match args.split_first() {
        Some((name, rest)) if !rest.is_empty() && rest.iter().all(|t| is_phone_token(t)) => {
            Ok((name.to_string(), rest.join(" ")))
        }
        _ => Err(CommandError::MissingNameAndPhone),
    }
}

fn is_phone_token(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.'))
}

fn remainder(args: &[&str]) -> Option<String> {
    if args.is_empty() {
        None
    } else {
        Some(args.join(" "))
    }
}

fn is_word(args: &[&str], word: &str) -> bool {
    matches!(args, [only] if only.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords_case_insensitive() {
        assert_eq!(Command::parse("hello").unwrap(), Command::Hello);
        assert_eq!(Command::parse("  HeLLo ").unwrap(), Command::Hello);
        assert_eq!(Command::parse("show all").unwrap(), Command::ShowAll);
        assert_eq!(Command::parse("SHOW   ALL").unwrap(), Command::ShowAll);
        assert_eq!(Command::parse("Good Bye").unwrap(), Command::Exit);
        assert_eq!(Command::parse("close").unwrap(), Command::Exit);
        assert_eq!(Command::parse("EXIT").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_add_keeps_argument_case() {
        assert_eq!(
            Command::parse("ADD Alice 123-456-7890").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "123-456-7890".to_string()
            }
        );
    }

    #[test]
    fn test_parse_phone_argument_may_contain_spaces() {
        assert_eq!(
            Command::parse("change Bob (098) 765 4321").unwrap(),
            Command::Change {
                name: "Bob".to_string(),
                phone: "(098) 765 4321".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_words_after_name() {
        assert_eq!(
            Command::parse("add Alice Smith 1234567890").unwrap_err(),
            CommandError::MissingNameAndPhone
        );
        assert_eq!(
            Command::parse("change Alice 123 Main").unwrap_err(),
            CommandError::MissingNameAndPhone
        );
        assert_eq!(
            Command::parse("add Alice abc").unwrap_err(),
            CommandError::MissingNameAndPhone
        );
        assert_eq!(
            Command::parse("add Alice +1 555.123-4567").unwrap(),
            Command::Add {
                name: "Alice".to_string(),
                phone: "+1 555.123-4567".to_string()
            }
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        assert_eq!(
            Command::parse("add").unwrap_err(),
            CommandError::MissingNameAndPhone
        );
        assert_eq!(
            Command::parse("add Alice").unwrap_err(),
            CommandError::MissingNameAndPhone
        );
        assert_eq!(
            Command::parse("change Alice").unwrap_err(),
            CommandError::MissingNameAndPhone
        );
        assert_eq!(
            Command::parse("birthday Alice").unwrap_err(),
            CommandError::MissingNameAndBirthday
        );
        assert_eq!(
            Command::parse("birthday Alice 1.2.1990 extra").unwrap_err(),
            CommandError::MissingNameAndBirthday
        );
        assert_eq!(Command::parse("phone").unwrap_err(), CommandError::MissingName);
        assert_eq!(Command::parse("delete ").unwrap_err(), CommandError::MissingName);
        assert_eq!(Command::parse("days").unwrap_err(), CommandError::MissingName);
        assert_eq!(Command::parse("find").unwrap_err(), CommandError::MissingQuery);
    }

    #[test]
    fn test_parse_name_commands() {
        assert_eq!(
            Command::parse("phone alice").unwrap(),
            Command::Phone {
                name: "alice".to_string()
            }
        );
        assert_eq!(
            Command::parse("remove Bob").unwrap(),
            Command::Delete {
                name: "Bob".to_string()
            }
        );
        assert_eq!(
            Command::parse("search 987").unwrap(),
            Command::Find {
                query: "987".to_string()
            }
        );
        assert_eq!(
            Command::parse("birthday Bob 1.2.1990").unwrap(),
            Command::Birthday {
                name: "Bob".to_string(),
                date: "1.2.1990".to_string()
            }
        );
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
        assert_eq!(Command::parse("   ").unwrap(), Command::Empty);
        assert_eq!(
            Command::parse("show everything").unwrap(),
            Command::Unknown("show everything".to_string())
        );
        assert_eq!(
            Command::parse("hello there").unwrap(),
            Command::Unknown("hello there".to_string())
        );
        assert_eq!(
            Command::parse("good").unwrap(),
            Command::Unknown("good".to_string())
        );
    }

    #[test]
    fn test_keyword() {
        assert_eq!(Command::ShowAll.keyword(), "show all");
        assert_eq!(Command::parse("remove x").unwrap().keyword(), "delete");
    }
}
