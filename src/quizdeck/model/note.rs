use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn tag(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("Unknown priority: {}", other)),
        }
    }
}

/// A free-form note with a title, a description and an optional priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub title: String,
    pub description: String,
    pub priority: Option<Priority>,
}

impl Note {
    pub fn new(title: String, description: String, priority: Option<Priority>) -> Self {
        Self {
            title,
            description,
            priority,
        }
    }

    /// Weaker identity: notes are the same note when their titles match.
    /// Full equality (derived) also compares description and priority.
    pub fn is_same_note(&self, other: &Note) -> bool {
        self.title == other.title
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)?;
        if let Some(priority) = self.priority {
            write!(f, " [{}]", priority)?;
        }
        Ok(())
    }
}
