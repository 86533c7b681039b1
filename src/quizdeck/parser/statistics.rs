//! Grammar for `statistics file/PATH`. The only effectful check in the
//! parser: the referenced file must exist when the command is built.

use super::fields::{self, Field};
use super::required_value;
use crate::commands::{Command, STATISTICS_USAGE};
use crate::error::ParseError;
use std::path::PathBuf;

pub fn parse(remainder: &str) -> Result<Command, ParseError> {
    let map = fields::extract(remainder, &[Field::File]);
    if !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(STATISTICS_USAGE));
    }
    let path = PathBuf::from(required_value(&map, Field::File, STATISTICS_USAGE)?);
    if !path.exists() {
        return Err(ParseError::FileNotFound(path));
    }
    Ok(Command::StatisticsAdd { path })
}
