//! # Command parsing
//!
//! Turns one raw input line into a validated [`Command`] value or a
//! [`ParseError`]. The pipeline is: [`tokenize`] splits the keyword from the
//! argument remainder, [`parse_command`] routes the keyword to the right
//! per-command grammar, and each grammar uses [`fields::extract`] plus the
//! validation helpers below to build its command.
//!
//! Parsing is a pure, synchronous function of the input line; nothing is
//! retained between calls. The only side effect anywhere in here is the
//! file-existence check of the `statistics` grammar.

use crate::commands::{Command, FIND_USAGE, HELP_USAGE};
use crate::error::ParseError;
use crate::index::Index;
use std::str::FromStr;

pub mod fields;
pub mod note;
pub mod question;
pub mod statistics;
pub mod student;

use fields::{Field, FieldMap};

/// Splits a line into its command keyword and the argument remainder.
///
/// The line is trimmed first; a line without arguments yields an empty
/// remainder, and an empty line yields an empty keyword. Never fails.
pub fn tokenize(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((keyword, remainder)) => (keyword, remainder),
        None => (trimmed, ""),
    }
}

/// Parses one input line into a command value.
///
/// Keyword matching is a case-sensitive exact match on the first
/// whitespace-delimited token. Blank input is reported as a format error for
/// the default `help` command. No-argument commands ignore trailing tokens.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let (keyword, remainder) = tokenize(line);
    match keyword {
        "" => Err(ParseError::invalid_format(HELP_USAGE)),
        "add" => student::parse_add(remainder),
        "edit" => student::parse_edit(remainder),
        "delete" => student::parse_delete(remainder),
        "find" => parse_find(remainder),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "exit" => Ok(Command::Exit),
        "help" => Ok(Command::Help),
        "statistics" => statistics::parse(remainder),
        "question" => question::parse(remainder),
        "note" => note::parse(remainder),
        _ => Err(ParseError::UnknownCommand),
    }
}

fn parse_find(remainder: &str) -> Result<Command, ParseError> {
    let keywords: Vec<String> = remainder.split_whitespace().map(String::from).collect();
    if keywords.is_empty() {
        return Err(ParseError::invalid_format(FIND_USAGE));
    }
    Ok(Command::Find { keywords })
}

/// Parses a leading bare token as a one-based index. An absent token is a
/// format error (the grammar required one); a present but malformed token is
/// an index error.
pub(crate) fn parse_index(token: &str, usage: &'static str) -> Result<Index, ParseError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ParseError::invalid_format(usage));
    }
    Index::from_str(token).map_err(|_| ParseError::InvalidIndex(token.to_string()))
}

/// A mandatory-non-empty field: missing or blank after trimming is a format
/// error carrying the command's usage string.
pub(crate) fn required_value(
    map: &FieldMap,
    field: Field,
    usage: &'static str,
) -> Result<String, ParseError> {
    match map.get(field) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ParseError::invalid_format(usage)),
    }
}

/// An optional field: absent is fine, present-but-blank is a format error.
pub(crate) fn optional_value(
    map: &FieldMap,
    field: Field,
    usage: &'static str,
) -> Result<Option<String>, ParseError> {
    match map.get(field) {
        None => Ok(None),
        Some(value) if !value.is_empty() => Ok(Some(value.to_string())),
        Some(_) => Err(ParseError::invalid_format(usage)),
    }
}
