use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Student {
    pub fn new(name: String, phone: Option<String>, email: Option<String>) -> Self {
        Self { name, phone, email }
    }

    /// Weaker identity used for duplicate detection: same name, regardless of
    /// contact details.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.name == other.name
    }

    /// True when any whitespace-separated word of the name matches one of the
    /// keywords, ignoring case.
    pub fn name_matches(&self, keywords: &[String]) -> bool {
        self.name.split_whitespace().any(|word| {
            keywords
                .iter()
                .any(|keyword| word.eq_ignore_ascii_case(keyword))
        })
    }
}
