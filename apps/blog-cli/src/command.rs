//! Session commands - one line of input is one user event.

use std::str::FromStr;

use thiserror::Error;

use inkwell_core::DomainError;
use inkwell_core::domain::{Field, FieldValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the post list.
    List { json: bool },
    /// Print one post in full, by 1-based position.
    Show(usize),
    /// A field widget reported a new value.
    Set(FieldValue),
    /// A field widget lost focus.
    Blur(Field),
    TagAdd(String),
    TagRemove(String),
    /// Print the draft with its visible errors.
    Draft { json: bool },
    Submit,
    Help,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Missing {0}")]
    MissingArgument(&'static str),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Invalid post position: {0}")]
    InvalidPosition(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub const HELP: &str = "\
Commands:
  list [--json]            show all posts
  show <position>          show one post in full
  set <field> <value>      edit title, content, tags (comma separated) or category
  blur <field>             leave a field, validating it
  tag add <label>          add a tag
  tag remove <label>       remove a tag
  draft [--json]           show the draft and its errors
  submit                   validate and publish the draft
  help                     show this help
  quit                     leave the session";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_word(line.trim());

        match verb.to_ascii_lowercase().as_str() {
            "list" | "ls" => match rest {
                "" => Ok(Command::List { json: false }),
                "--json" => Ok(Command::List { json: true }),
                other => Err(CommandError::UnexpectedArgument(other.to_string())),
            },
            "show" => parse_position(rest).map(Command::Show),
            "set" => {
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                Ok(Command::Set(field_value(field.parse()?, value)?))
            }
            "blur" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument("field"));
                }
                Ok(Command::Blur(rest.parse()?))
            }
            "tag" => {
                let (action, label) = split_word(rest);
                match action.to_ascii_lowercase().as_str() {
                    "add" => Ok(Command::TagAdd(label.to_string())),
                    "remove" | "rm" => Ok(Command::TagRemove(label.to_string())),
                    "" => Err(CommandError::MissingArgument("tag action (add or remove)")),
                    _ => Err(CommandError::UnexpectedArgument(action.to_string())),
                }
            }
            "draft" => match rest {
                "" => Ok(Command::Draft { json: false }),
                "--json" => Ok(Command::Draft { json: true }),
                other => Err(CommandError::UnexpectedArgument(other.to_string())),
            },
            "submit" | "publish" => Ok(Command::Submit),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_position(input: &str) -> Result<usize, CommandError> {
    if input.is_empty() {
        return Err(CommandError::MissingArgument("post position"));
    }
    input
        .parse::<usize>()
        .ok()
        .filter(|position| *position >= 1)
        .ok_or_else(|| CommandError::InvalidPosition(input.to_string()))
}

fn field_value(field: Field, raw: &str) -> Result<FieldValue, CommandError> {
    Ok(match field {
        Field::Title => FieldValue::Title(raw.to_string()),
        Field::Content => FieldValue::Content(raw.to_string()),
        Field::Tags => {
            let mut tags: Vec<String> = Vec::new();
            for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                if !tags.iter().any(|t| t == tag) {
                    tags.push(tag.to_string());
                }
            }
            FieldValue::Tags(tags)
        }
        Field::Category => FieldValue::Category(raw.parse()?),
    })
}
