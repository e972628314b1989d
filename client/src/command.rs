//! Commands accepted by the terminal front-end.

use shelf_engine::{BookId, SortKey, SortOrder};
use std::str::FromStr;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Next,
    Previous,
    Sort(SortKey),
    Order(SortOrder),
    Set { field: String, value: String },
    Edit(BookId),
    Cancel,
    Submit,
    Delete(BookId),
    Help,
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

pub const HELP: &str = "\
commands:
  list                  re-fetch the current page
  next | prev           change page
  sort <title|author|year>
  order <asc|desc>
  set <field> <value>   fields: title author year genre pages available
  edit <id>             load a displayed book into the form
  cancel                clear the form
  submit                add or update from the form
  delete <id>           delete a book (asks first)
  help | quit";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => Err(ParseError::Empty),
            "list" | "refresh" => Ok(Command::Refresh),
            "next" => Ok(Command::Next),
            "prev" | "previous" => Ok(Command::Previous),
            "sort" => SortKey::from_param(rest)
                .map(Command::Sort)
                .ok_or(ParseError::Usage("sort <title|author|year>")),
            "order" => match rest {
                "asc" => Ok(Command::Order(SortOrder::Asc)),
                "desc" => Ok(Command::Order(SortOrder::Desc)),
                _ => Err(ParseError::Usage("order <asc|desc>")),
            },
            "set" => match rest.split_once(char::is_whitespace) {
                Some((field, value)) => Ok(Command::Set {
                    field: field.to_string(),
                    value: value.trim().to_string(),
                }),
                None if !rest.is_empty() => Ok(Command::Set {
                    field: rest.to_string(),
                    value: String::new(),
                }),
                None => Err(ParseError::Usage("set <field> <value>")),
            },
            "edit" => parse_id(rest, "edit <id>").map(Command::Edit),
            "delete" => parse_id(rest, "delete <id>").map(Command::Delete),
            "cancel" => Ok(Command::Cancel),
            "submit" => Ok(Command::Submit),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(text: &str, usage: &'static str) -> Result<BookId, ParseError> {
    text.parse().map_err(|_| ParseError::Usage(usage))
}
