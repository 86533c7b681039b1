use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of question type tags accepted by `type/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    Mcq,
    OpenEnded,
}

impl QuestionKind {
    pub fn tag(self) -> &'static str {
        match self {
            QuestionKind::Mcq => "mcq",
            QuestionKind::OpenEnded => "open",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mcq" => Ok(QuestionKind::Mcq),
            "open" => Ok(QuestionKind::OpenEnded),
            other => Err(format!("Unknown question type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answer: String,
    pub kind: QuestionKind,
}

impl Question {
    pub fn new(text: String, answer: String, kind: QuestionKind) -> Self {
        Self { text, answer, kind }
    }

    /// Weaker identity: two questions with the same text are the same
    /// question even if their answers or types differ.
    pub fn is_same_question(&self, other: &Question) -> bool {
        self.text == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        assert_eq!(QuestionKind::from_str("mcq"), Ok(QuestionKind::Mcq));
        assert_eq!(QuestionKind::from_str("open"), Ok(QuestionKind::OpenEnded));
        assert_eq!(QuestionKind::Mcq.to_string(), "mcq");
        assert_eq!(QuestionKind::OpenEnded.to_string(), "open");
    }

    #[test]
    fn kind_tags_are_case_sensitive_and_closed() {
        assert!(QuestionKind::from_str("MCQ").is_err());
        assert!(QuestionKind::from_str("open-ended").is_err());
        assert!(QuestionKind::from_str("").is_err());
    }

    #[test]
    fn same_question_compares_text_only() {
        let a = Question::new("2 + 2?".into(), "4".into(), QuestionKind::OpenEnded);
        let b = Question::new("2 + 2?".into(), "four".into(), QuestionKind::Mcq);
        assert!(a.is_same_question(&b));
        assert_ne!(a, b);
    }
}
