//! # API Facade
//!
//! The single entry point for running input lines, regardless of the UI in
//! front of it. The facade owns the model, dispatches each line through the
//! parser and the execution layer, and returns structured results. It never
//! prints and never exits the process; presentation belongs to the caller.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Model;
use crate::parser;

pub struct QuizdeckApi {
    model: Model,
}

impl QuizdeckApi {
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Parses and executes one input line.
    pub fn run_line(&mut self, line: &str) -> Result<CmdResult> {
        let command = parser::parse_command(line)?;
        commands::execute(command, &mut self.model)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}

impl Default for QuizdeckApi {
    fn default() -> Self {
        Self::new(Model::new())
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizdeckError;

    #[test]
    fn run_line_parses_then_executes() {
        let mut api = QuizdeckApi::default();
        api.run_line("add n/John Doe").unwrap();
        assert_eq!(api.model().students().len(), 1);

        let result = api.run_line("find john").unwrap();
        assert_eq!(result.messages.last().unwrap().content, "1 students listed!");
    }

    #[test]
    fn parse_failures_surface_as_parse_errors() {
        let mut api = QuizdeckApi::default();
        let err = api.run_line("unknownCommand").unwrap_err();
        assert!(matches!(err, QuizdeckError::Parse(_)));
        assert_eq!(err.to_string(), "Unknown command");
    }

    #[test]
    fn exit_sets_the_exit_flag() {
        let mut api = QuizdeckApi::default();
        let result = api.run_line("exit").unwrap();
        assert!(result.exit);
    }
}
