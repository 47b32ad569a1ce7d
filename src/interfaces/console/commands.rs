use thiserror::Error;

use crate::application::dtos::employee_dto::EmployeeDto;

pub const HELP: &str = "\
Commands:
  list                                   show the employee table
  reload                                 fetch the list from the backend
  add <first> <last> <email>             create an employee
  edit <id>                              show the values of an employee
  update <id> <first> <last> <email>     change an employee
  delete <id>                            delete (can be undone for a few seconds)
  undo                                   restore the last deleted employee
  help                                   show this text
  quit                                   exit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid employee id '{0}'")]
    InvalidId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Reload,
    Add(EmployeeDto),
    Edit(i64),
    Update(i64, EmployeeDto),
    Delete(i64),
    Undo,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (name.to_ascii_lowercase().as_str(), args) {
            ("list" | "ls", []) => Command::List,
            ("reload", []) => Command::Reload,
            ("add", [first, last, email]) => Command::Add(EmployeeDto::draft(*first, *last, *email)),
            ("add", _) => return Err(CommandError::Usage("add <first> <last> <email>")),
            ("edit", [id]) => Command::Edit(parse_id(id)?),
            ("edit", _) => return Err(CommandError::Usage("edit <id>")),
            ("update", [id, first, last, email]) => {
                Command::Update(parse_id(id)?, EmployeeDto::draft(*first, *last, *email))
            },
            ("update", _) => return Err(CommandError::Usage("update <id> <first> <last> <email>")),
            ("delete" | "rm", [id]) => Command::Delete(parse_id(id)?),
            ("delete" | "rm", _) => return Err(CommandError::Usage("delete <id>")),
            ("undo", []) => Command::Undo,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            _ => return Err(CommandError::Unknown(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(raw: &str) -> Result<i64, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn test_parses_employee_commands() {
        assert_eq!(Command::parse("delete 7"), Ok(Some(Command::Delete(7))));
        assert_eq!(Command::parse("  UNDO "), Ok(Some(Command::Undo)));
        assert_eq!(
            Command::parse("update 3 Grace Hopper grace@example.com"),
            Ok(Some(Command::Update(3, EmployeeDto::draft("Grace", "Hopper", "grace@example.com"))))
        );
        assert_eq!(
            Command::parse("add Ada Lovelace ada@example.com"),
            Ok(Some(Command::Add(EmployeeDto::draft("Ada", "Lovelace", "ada@example.com"))))
        );
    }

    #[test]
    fn test_reports_bad_input() {
        assert_eq!(Command::parse("delete x"), Err(CommandError::InvalidId("x".to_string())));
        assert_eq!(Command::parse("add Ada"), Err(CommandError::Usage("add <first> <last> <email>")));
        assert!(matches!(Command::parse("fly away"), Err(CommandError::Unknown(_))));
    }
}
