//! Grammars for the `question` command family. The first token of the
//! remainder picks the subcommand; anything else is treated as the creation
//! grammar, whose fields all start with markers.

use super::fields::{self, Field};
use super::{optional_value, parse_index, required_value, tokenize};
use crate::commands::{
    Command, QuestionCommand, QuestionEdits, QUESTION_CREATE_USAGE, QUESTION_DELETE_USAGE,
    QUESTION_EDIT_USAGE,
};
use crate::error::ParseError;
use crate::model::QuestionKind;
use std::str::FromStr;

const QUESTION_FIELDS: &[Field] = &[Field::Question, Field::Answer, Field::Type];

pub fn parse(remainder: &str) -> Result<Command, ParseError> {
    let (subcommand, rest) = tokenize(remainder);
    match subcommand {
        "edit" => parse_edit(rest),
        "delete" => parse_delete(rest),
        "list" => Ok(Command::Question(QuestionCommand::List)),
        _ => parse_create(remainder),
    }
}

fn parse_kind(tag: &str, usage: &'static str) -> Result<QuestionKind, ParseError> {
    QuestionKind::from_str(tag).map_err(|_| ParseError::invalid_format(usage))
}

fn parse_create(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, QUESTION_FIELDS);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(QUESTION_CREATE_USAGE));
    }
    let text = required_value(&map, Field::Question, QUESTION_CREATE_USAGE)?;
    let answer = required_value(&map, Field::Answer, QUESTION_CREATE_USAGE)?;
    let tag = required_value(&map, Field::Type, QUESTION_CREATE_USAGE)?;
    let kind = parse_kind(&tag, QUESTION_CREATE_USAGE)?;
    Ok(Command::Question(QuestionCommand::Create {
        text,
        answer,
        kind,
    }))
}

fn parse_edit(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, QUESTION_FIELDS);
    let index = parse_index(map.preamble(), QUESTION_EDIT_USAGE)?;
    let edits = QuestionEdits {
        text: optional_value(&map, Field::Question, QUESTION_EDIT_USAGE)?,
        answer: optional_value(&map, Field::Answer, QUESTION_EDIT_USAGE)?,
        kind: optional_value(&map, Field::Type, QUESTION_EDIT_USAGE)?
            .map(|tag| parse_kind(&tag, QUESTION_EDIT_USAGE))
            .transpose()?,
    };
    if edits.is_empty() {
        return Err(ParseError::invalid_format(QUESTION_EDIT_USAGE));
    }
    Ok(Command::Question(QuestionCommand::Edit { index, edits }))
}

fn parse_delete(remainder: &str) -> Result<Command, ParseError> {
    let index = parse_index(remainder, QUESTION_DELETE_USAGE)?;
    Ok(Command::Question(QuestionCommand::Delete { index }))
}
