//! Grammars for the student commands: `add`, `edit` and `delete`.

use super::fields::{self, Field};
use super::{optional_value, parse_index, required_value};
use crate::commands::{Command, StudentEdits, ADD_USAGE, DELETE_USAGE, EDIT_USAGE};
use crate::error::ParseError;

const STUDENT_FIELDS: &[Field] = &[Field::Name, Field::Phone, Field::Email];

pub fn parse_add(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, STUDENT_FIELDS);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(ADD_USAGE));
    }
    let name = required_value(&map, Field::Name, ADD_USAGE)?;
    let phone = optional_value(&map, Field::Phone, ADD_USAGE)?;
    let email = optional_value(&map, Field::Email, ADD_USAGE)?;
    Ok(Command::Add { name, phone, email })
}

pub fn parse_edit(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, STUDENT_FIELDS);
    let index = parse_index(map.preamble(), EDIT_USAGE)?;
    let edits = StudentEdits {
        name: optional_value(&map, Field::Name, EDIT_USAGE)?,
        phone: optional_value(&map, Field::Phone, EDIT_USAGE)?,
        email: optional_value(&map, Field::Email, EDIT_USAGE)?,
    };
    if edits.is_empty() {
        return Err(ParseError::invalid_format(EDIT_USAGE));
    }
    Ok(Command::Edit { index, edits })
}

pub fn parse_delete(remainder: &str) -> Result<Command, ParseError> {
    let index = parse_index(remainder, DELETE_USAGE)?;
    Ok(Command::Delete { index })
}
