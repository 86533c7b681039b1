//! Grammars for the `note` command family, mirroring the question family:
//! `edit`, `delete` and `list` subcommands, everything else is creation.

use super::fields::{self, Field};
use super::{optional_value, parse_index, required_value, tokenize};
use crate::commands::{
    Command, NoteCommand, NoteEdits, NOTE_CREATE_USAGE, NOTE_DELETE_USAGE, NOTE_EDIT_USAGE,
};
use crate::error::ParseError;
use crate::model::Priority;
use std::str::FromStr;

const NOTE_FIELDS: &[Field] = &[Field::Title, Field::Description, Field::Priority];

pub fn parse(remainder: &str) -> Result<Command, ParseError> {
    let (subcommand, rest) = tokenize(remainder);
    match subcommand {
        "edit" => parse_edit(rest),
        "delete" => parse_delete(rest),
        "list" => Ok(Command::Note(NoteCommand::List)),
        _ => parse_create(remainder),
    }
}

fn parse_priority(tag: &str, usage: &'static str) -> Result<Priority, ParseError> {
    Priority::from_str(tag).map_err(|_| ParseError::invalid_format(usage))
}

fn parse_create(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, NOTE_FIELDS);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(NOTE_CREATE_USAGE));
    }
    let title = required_value(&map, Field::Title, NOTE_CREATE_USAGE)?;
    let description = required_value(&map, Field::Description, NOTE_CREATE_USAGE)?;
    let priority = optional_value(&map, Field::Priority, NOTE_CREATE_USAGE)?
        .map(|tag| parse_priority(&tag, NOTE_CREATE_USAGE))
        .transpose()?;
    Ok(Command::Note(NoteCommand::Create {
        title,
        description,
        priority,
    }))
}

fn parse_edit(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, NOTE_FIELDS);
    let index = parse_index(map.preamble(), NOTE_EDIT_USAGE)?;
    let edits = NoteEdits {
        title: optional_value(&map, Field::Title, NOTE_EDIT_USAGE)?,
        description: optional_value(&map, Field::Description, NOTE_EDIT_USAGE)?,
        priority: optional_value(&map, Field::Priority, NOTE_EDIT_USAGE)?
            .map(|tag| parse_priority(&tag, NOTE_EDIT_USAGE))
            .transpose()?,
    };
    if edits.is_empty() {
        return Err(ParseError::invalid_format(NOTE_EDIT_USAGE));
    }
    Ok(Command::Note(NoteCommand::Edit { index, edits }))
}

fn parse_delete(remainder: &str) -> Result<Command, ParseError> {
    let index = parse_index(remainder, NOTE_DELETE_USAGE)?;
    Ok(Command::Note(NoteCommand::Delete { index }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;

    #[test]
    fn create_with_and_without_priority() {
        assert_eq!(
            parse("t/Revision d/Chapter 3").unwrap(),
            Command::Note(NoteCommand::Create {
                title: "Revision".into(),
                description: "Chapter 3".into(),
                priority: None,
            })
        );
        assert_eq!(
            parse("t/Revision d/Chapter 3 p/medium").unwrap(),
            Command::Note(NoteCommand::Create {
                title: "Revision".into(),
                description: "Chapter 3".into(),
                priority: Some(Priority::Medium),
            })
        );
    }

    #[test]
    fn create_requires_title_and_description() {
        let expected = Err(ParseError::invalid_format(NOTE_CREATE_USAGE));
        assert_eq!(parse(""), expected);
        assert_eq!(parse("t/Revision"), expected);
        assert_eq!(parse("d/Chapter 3"), expected);
        assert_eq!(parse("t/ d/Chapter 3"), expected);
    }

    #[test]
    fn create_validates_the_priority_tag() {
        assert_eq!(
            parse("t/Revision d/Chapter 3 p/urgent"),
            Err(ParseError::invalid_format(NOTE_CREATE_USAGE))
        );
    }

    #[test]
    fn edit_parses_index_and_fields() {
        assert_eq!(
            parse("edit 3 t/New title p/low").unwrap(),
            Command::Note(NoteCommand::Edit {
                index: Index::from_one_based(3).unwrap(),
                edits: NoteEdits {
                    title: Some("New title".into()),
                    description: None,
                    priority: Some(Priority::Low),
                },
            })
        );
        assert_eq!(
            parse("edit 3"),
            Err(ParseError::invalid_format(NOTE_EDIT_USAGE))
        );
    }

    #[test]
    fn delete_requires_an_index() {
        assert_eq!(
            parse("delete"),
            Err(ParseError::invalid_format(NOTE_DELETE_USAGE))
        );
        assert_eq!(
            parse("delete x"),
            Err(ParseError::InvalidIndex("x".into()))
        );
    }
}
