//! Command values and their execution.
//!
//! [`Command`] is the sum type produced by the parser: one variant per
//! command kind, carrying only validated, typed fields. [`execute`] runs a
//! command against the model and returns a [`CmdResult`] of leveled messages;
//! it never prints. Usage strings live here next to the commands they
//! describe and are echoed verbatim inside format errors.

use crate::error::Result;
use crate::index::Index;
use crate::model::{Model, Priority, QuestionKind};
use once_cell::sync::Lazy;
use std::path::PathBuf;

pub mod note;
pub mod question;
pub mod statistics;
pub mod student;

pub const ADD_USAGE: &str = "add: Adds a student to the class list. \
     Parameters: n/NAME [p/PHONE] [e/EMAIL]\n\
     Example: add n/John Doe p/98765432 e/johnd@example.com";

pub const EDIT_USAGE: &str = "edit: Edits the student at the given index. \
     Parameters: INDEX [n/NAME] [p/PHONE] [e/EMAIL]\n\
     Example: edit 1 p/91234567";

pub const DELETE_USAGE: &str = "delete: Deletes the student at the given index. \
     Parameters: INDEX\n\
     Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds all students whose names contain any of \
     the given keywords. Parameters: KEYWORD [MORE_KEYWORDS]...\n\
     Example: find alice bob charlie";

pub const STATISTICS_USAGE: &str = "statistics: Imports a statistics spreadsheet. \
     Parameters: file/PATH\n\
     Example: statistics file/results.xlsx";

pub const QUESTION_CREATE_USAGE: &str = "question: Creates a new question. \
     Parameters: q/TEXT a/ANSWER type/TYPE (TYPE is mcq or open)\n\
     Example: question q/What is 2 + 2? a/4 type/open";

pub const QUESTION_EDIT_USAGE: &str = "question edit: Edits the question at the given index. \
     Parameters: INDEX [q/TEXT] [a/ANSWER] [type/TYPE]\n\
     Example: question edit 1 a/5";

pub const QUESTION_DELETE_USAGE: &str = "question delete: Deletes the question at the given \
     index. Parameters: INDEX\n\
     Example: question delete 1";

pub const NOTE_CREATE_USAGE: &str = "note: Creates a new note. \
     Parameters: t/TITLE d/DESCRIPTION [p/PRIORITY] (PRIORITY is high, medium or low)\n\
     Example: note t/Revision d/Go through chapter 3 p/high";

pub const NOTE_EDIT_USAGE: &str = "note edit: Edits the note at the given index. \
     Parameters: INDEX [t/TITLE] [d/DESCRIPTION] [p/PRIORITY]\n\
     Example: note edit 1 p/low";

pub const NOTE_DELETE_USAGE: &str = "note delete: Deletes the note at the given index. \
     Parameters: INDEX\n\
     Example: note delete 1";

pub const HELP_USAGE: &str = "help: Shows the list of available commands.\n\
     Example: help";

/// The full command reference printed by `help`.
pub static HELP_TEXT: Lazy<String> = Lazy::new(|| {
    [
        ADD_USAGE,
        EDIT_USAGE,
        DELETE_USAGE,
        FIND_USAGE,
        "list: Lists all students.",
        "clear: Clears the class list.",
        STATISTICS_USAGE,
        QUESTION_CREATE_USAGE,
        QUESTION_EDIT_USAGE,
        QUESTION_DELETE_USAGE,
        "question list: Lists all questions.",
        NOTE_CREATE_USAGE,
        NOTE_EDIT_USAGE,
        NOTE_DELETE_USAGE,
        "note list: Lists all notes.",
        HELP_USAGE,
        "exit: Exits the program.",
    ]
    .join("\n\n")
});

/// Edits to apply to a student record; at least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentEdits {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl StudentEdits {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionEdits {
    pub text: Option<String>,
    pub answer: Option<String>,
    pub kind: Option<QuestionKind>,
}

impl QuestionEdits {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.answer.is_none() && self.kind.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEdits {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
}

impl NoteEdits {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionCommand {
    Create {
        text: String,
        answer: String,
        kind: QuestionKind,
    },
    Edit {
        index: Index,
        edits: QuestionEdits,
    },
    Delete {
        index: Index,
    },
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteCommand {
    Create {
        title: String,
        description: String,
        priority: Option<Priority>,
    },
    Edit {
        index: Index,
        edits: NoteEdits,
    },
    Delete {
        index: Index,
    },
    List,
}

/// A fully parsed, validated command, ready for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        phone: Option<String>,
        email: Option<String>,
    },
    Edit {
        index: Index,
        edits: StudentEdits,
    },
    Delete {
        index: Index,
    },
    Find {
        keywords: Vec<String>,
    },
    List,
    Clear,
    Exit,
    Help,
    StatisticsAdd {
        path: PathBuf,
    },
    Question(QuestionCommand),
    Note(NoteCommand),
}

impl Command {
    /// Canonical text form of the command. Feeding the result back through
    /// the parser reproduces an equal command value.
    pub fn command_text(&self) -> String {
        match self {
            Command::Add { name, phone, email } => {
                let mut text = format!("add n/{}", name);
                if let Some(phone) = phone {
                    text.push_str(&format!(" p/{}", phone));
                }
                if let Some(email) = email {
                    text.push_str(&format!(" e/{}", email));
                }
                text
            }
            Command::Edit { index, edits } => {
                let mut text = format!("edit {}", index);
                if let Some(name) = &edits.name {
                    text.push_str(&format!(" n/{}", name));
                }
                if let Some(phone) = &edits.phone {
                    text.push_str(&format!(" p/{}", phone));
                }
                if let Some(email) = &edits.email {
                    text.push_str(&format!(" e/{}", email));
                }
                text
            }
            Command::Delete { index } => format!("delete {}", index),
            Command::Find { keywords } => format!("find {}", keywords.join(" ")),
            Command::List => "list".to_string(),
            Command::Clear => "clear".to_string(),
            Command::Exit => "exit".to_string(),
            Command::Help => "help".to_string(),
            Command::StatisticsAdd { path } => format!("statistics file/{}", path.display()),
            Command::Question(QuestionCommand::Create { text, answer, kind }) => {
                format!("question q/{} a/{} type/{}", text, answer, kind)
            }
            Command::Question(QuestionCommand::Edit { index, edits }) => {
                let mut text = format!("question edit {}", index);
                if let Some(q) = &edits.text {
                    text.push_str(&format!(" q/{}", q));
                }
                if let Some(a) = &edits.answer {
                    text.push_str(&format!(" a/{}", a));
                }
                if let Some(kind) = edits.kind {
                    text.push_str(&format!(" type/{}", kind));
                }
                text
            }
            Command::Question(QuestionCommand::Delete { index }) => {
                format!("question delete {}", index)
            }
            Command::Question(QuestionCommand::List) => "question list".to_string(),
            Command::Note(NoteCommand::Create {
                title,
                description,
                priority,
            }) => {
                let mut text = format!("note t/{} d/{}", title, description);
                if let Some(priority) = priority {
                    text.push_str(&format!(" p/{}", priority));
                }
                text
            }
            Command::Note(NoteCommand::Edit { index, edits }) => {
                let mut text = format!("note edit {}", index);
                if let Some(t) = &edits.title {
                    text.push_str(&format!(" t/{}", t));
                }
                if let Some(d) = &edits.description {
                    text.push_str(&format!(" d/{}", d));
                }
                if let Some(priority) = edits.priority {
                    text.push_str(&format!(" p/{}", priority));
                }
                text
            }
            Command::Note(NoteCommand::Delete { index }) => format!("note delete {}", index),
            Command::Note(NoteCommand::List) => "note list".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }
}

/// Runs a validated command against the model.
///
/// The parser guarantees field-level validity; range checks against the
/// current lists happen here.
pub fn execute(command: Command, model: &mut Model) -> Result<CmdResult> {
    match command {
        Command::Add { name, phone, email } => student::add(model, name, phone, email),
        Command::Edit { index, edits } => student::edit(model, index, &edits),
        Command::Delete { index } => student::delete(model, index),
        Command::Find { keywords } => student::find(model, &keywords),
        Command::List => student::list(model),
        Command::Clear => student::clear(model),
        Command::Exit => Ok(CmdResult::default()
            .with_message(CmdMessage::info("Exiting quizdeck as requested ..."))
            .with_exit()),
        Command::Help => {
            Ok(CmdResult::default().with_message(CmdMessage::info(HELP_TEXT.as_str())))
        }
        Command::StatisticsAdd { path } => statistics::add(model, path),
        Command::Question(command) => question::run(model, command),
        Command::Note(command) => note::run(model, command),
    }
}
