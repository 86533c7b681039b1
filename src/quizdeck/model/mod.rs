//! The in-memory data model: plain record types plus [`Model`], a list-backed
//! container with no concurrency or persistence logic of its own. Duplicate
//! detection uses each record's weaker `is_same_*` identity, not full
//! equality.

use crate::error::{QuizdeckError, Result};
use crate::index::Index;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod note;
pub mod question;
pub mod student;

pub use note::{Note, Priority};
pub use question::{Question, QuestionKind};
pub use student::Student;

pub const MESSAGE_DUPLICATE_STUDENT: &str = "This student already exists in the class list";
pub const MESSAGE_DUPLICATE_QUESTION: &str = "This question already exists in the question list";
pub const MESSAGE_DUPLICATE_NOTE: &str = "This note already exists in the note list";
pub const MESSAGE_INVALID_STUDENT_INDEX: &str = "The student index provided is invalid";
pub const MESSAGE_INVALID_QUESTION_INDEX: &str = "The question index provided is invalid";
pub const MESSAGE_INVALID_NOTE_INDEX: &str = "The note index provided is invalid";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Model {
    students: Vec<Student>,
    questions: Vec<Question>,
    notes: Vec<Note>,
    statistics_files: Vec<PathBuf>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn statistics_files(&self) -> &[PathBuf] {
        &self.statistics_files
    }

    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.students.iter().any(|s| s.is_same_student(&student)) {
            return Err(QuizdeckError::Execution(
                MESSAGE_DUPLICATE_STUDENT.to_string(),
            ));
        }
        self.students.push(student);
        Ok(())
    }

    pub fn student(&self, index: Index) -> Result<&Student> {
        self.students
            .get(index.zero_based())
            .ok_or_else(|| QuizdeckError::Execution(MESSAGE_INVALID_STUDENT_INDEX.to_string()))
    }

    pub fn set_student(&mut self, index: Index, student: Student) -> Result<()> {
        // The edited record may keep its own identity but must not collide
        // with any other record.
        let pos = index.zero_based();
        if pos >= self.students.len() {
            return Err(QuizdeckError::Execution(
                MESSAGE_INVALID_STUDENT_INDEX.to_string(),
            ));
        }
        if self
            .students
            .iter()
            .enumerate()
            .any(|(i, s)| i != pos && s.is_same_student(&student))
        {
            return Err(QuizdeckError::Execution(
                MESSAGE_DUPLICATE_STUDENT.to_string(),
            ));
        }
        self.students[pos] = student;
        Ok(())
    }

    pub fn remove_student(&mut self, index: Index) -> Result<Student> {
        let pos = index.zero_based();
        if pos >= self.students.len() {
            return Err(QuizdeckError::Execution(
                MESSAGE_INVALID_STUDENT_INDEX.to_string(),
            ));
        }
        Ok(self.students.remove(pos))
    }

    pub fn clear_students(&mut self) {
        self.students.clear();
    }

    pub fn find_students(&self, keywords: &[String]) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.name_matches(keywords))
            .collect()
    }

    pub fn add_question(&mut self, question: Question) -> Result<()> {
        if self.questions.iter().any(|q| q.is_same_question(&question)) {
            return Err(QuizdeckError::Execution(
                MESSAGE_DUPLICATE_QUESTION.to_string(),
            ));
        }
        self.questions.push(question);
        Ok(())
    }

    pub fn question(&self, index: Index) -> Result<&Question> {
        self.questions
            .get(index.zero_based())
            .ok_or_else(|| QuizdeckError::Execution(MESSAGE_INVALID_QUESTION_INDEX.to_string()))
    }

    pub fn set_question(&mut self, index: Index, question: Question) -> Result<()> {
        let pos = index.zero_based();
        if pos >= self.questions.len() {
            return Err(QuizdeckError::Execution(
                MESSAGE_INVALID_QUESTION_INDEX.to_string(),
            ));
        }
        if self
            .questions
            .iter()
            .enumerate()
            .any(|(i, q)| i != pos && q.is_same_question(&question))
        {
            return Err(QuizdeckError::Execution(
                MESSAGE_DUPLICATE_QUESTION.to_string(),
            ));
        }
        self.questions[pos] = question;
        Ok(())
    }

    pub fn remove_question(&mut self, index: Index) -> Result<Question> {
        let pos = index.zero_based();
        if pos >= self.questions.len() {
            return Err(QuizdeckError::Execution(
                MESSAGE_INVALID_QUESTION_INDEX.to_string(),
            ));
        }
        Ok(self.questions.remove(pos))
    }

    pub fn add_note(&mut self, note: Note) -> Result<()> {
        if self.notes.iter().any(|n| n.is_same_note(&note)) {
            return Err(QuizdeckError::Execution(MESSAGE_DUPLICATE_NOTE.to_string()));
        }
        self.notes.push(note);
        Ok(())
    }

    pub fn note(&self, index: Index) -> Result<&Note> {
        self.notes
            .get(index.zero_based())
            .ok_or_else(|| QuizdeckError::Execution(MESSAGE_INVALID_NOTE_INDEX.to_string()))
    }

    pub fn set_note(&mut self, index: Index, note: Note) -> Result<()> {
        let pos = index.zero_based();
        if pos >= self.notes.len() {
            return Err(QuizdeckError::Execution(
                MESSAGE_INVALID_NOTE_INDEX.to_string(),
            ));
        }
        if self
            .notes
            .iter()
            .enumerate()
            .any(|(i, n)| i != pos && n.is_same_note(&note))
        {
            return Err(QuizdeckError::Execution(MESSAGE_DUPLICATE_NOTE.to_string()));
        }
        self.notes[pos] = note;
        Ok(())
    }

    pub fn remove_note(&mut self, index: Index) -> Result<Note> {
        let pos = index.zero_based();
        if pos >= self.notes.len() {
            return Err(QuizdeckError::Execution(
                MESSAGE_INVALID_NOTE_INDEX.to_string(),
            ));
        }
        Ok(self.notes.remove(pos))
    }

    pub fn record_statistics_file(&mut self, path: PathBuf) {
        self.statistics_files.push(path);
    }
}
