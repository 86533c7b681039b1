//! Prefixed-field extraction for command arguments.
//!
//! A command's argument remainder is a sequence of fields introduced by
//! literal markers, e.g. `q/What is ownership? a/A set of rules type/open`.
//! Field names form a closed enum so parsers cannot misspell a marker, and
//! each grammar passes only the markers it recognizes.
//!
//! Extraction never fails: validation of what was (or was not) extracted is
//! the calling parser's job.

use std::collections::HashMap;

/// The closed set of field names used across all command grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Question,
    Answer,
    Type,
    Title,
    Description,
    Priority,
    File,
}

impl Field {
    /// The literal marker that introduces this field in command text.
    pub fn marker(self) -> &'static str {
        match self {
            Field::Name => "n/",
            Field::Phone => "p/",
            Field::Email => "e/",
            Field::Question => "q/",
            Field::Answer => "a/",
            Field::Type => "type/",
            Field::Title => "t/",
            Field::Description => "d/",
            Field::Priority => "p/",
            Field::File => "file/",
        }
    }
}

/// The result of one extraction pass: the bare text before the first marker
/// (owned by grammars that take a leading index) and one trimmed value per
/// field seen. Duplicate markers keep the last occurrence.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldMap {
    preamble: String,
    values: HashMap<Field, String>,
}

impl FieldMap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The trimmed value of a field, or `None` if its marker never appeared.
    /// A marker with nothing after it yields `Some("")`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Splits `remainder` into a preamble and per-field values.
///
/// Markers are matched case-sensitively and only at value boundaries: the
/// start of the remainder or right after whitespace. Marker text embedded in
/// the middle of a token never starts a new field. Everything between one
/// marker and the next (or the end of the string) is that field's value,
/// trimmed of surrounding whitespace.
pub fn extract(remainder: &str, recognized: &[Field]) -> FieldMap {
    let mut occurrences: Vec<(usize, Field)> = Vec::new();
    for &field in recognized {
        let marker = field.marker();
        let mut from = 0;
        while let Some(found) = remainder[from..].find(marker) {
            let at = from + found;
            let at_boundary = at == 0
                || remainder[..at]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace);
            if at_boundary {
                occurrences.push((at, field));
            }
            from = at + marker.len();
        }
    }
    occurrences.sort_by_key(|&(at, _)| at);

    let preamble_end = occurrences.first().map_or(remainder.len(), |&(at, _)| at);
    let mut map = FieldMap {
        preamble: remainder[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, &(at, field)) in occurrences.iter().enumerate() {
        let value_start = at + field.marker().len();
        let value_end = occurrences
            .get(i + 1)
            .map_or(remainder.len(), |&(next, _)| next);
        let value = remainder[value_start..value_end].trim().to_string();
        // ascending scan order makes the last occurrence win
        map.values.insert(field, value);
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION_FIELDS: &[Field] = &[Field::Question, Field::Answer, Field::Type];

    #[test]
    fn splits_fields_and_trims_values() {
        let map = extract(" q/What is ownership?  a/A set of rules type/open ", QUESTION_FIELDS);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.get(Field::Question), Some("What is ownership?"));
        assert_eq!(map.get(Field::Answer), Some("A set of rules"));
        assert_eq!(map.get(Field::Type), Some("open"));
    }

    #[test]
    fn text_before_first_marker_is_the_preamble() {
        let map = extract(" 1 q/New text", QUESTION_FIELDS);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.get(Field::Question), Some("New text"));
    }

    #[test]
    fn whole_remainder_is_preamble_when_no_marker_matches() {
        let map = extract("foo bar baz", QUESTION_FIELDS);
        assert_eq!(map.preamble(), "foo bar baz");
        assert!(map.is_empty());
    }

    #[test]
    fn duplicate_marker_keeps_the_last_occurrence() {
        let map = extract("q/first a/x q/second", QUESTION_FIELDS);
        assert_eq!(map.get(Field::Question), Some("second"));
        assert_eq!(map.get(Field::Answer), Some("x"));
    }

    #[test]
    fn marker_text_inside_a_token_does_not_fire() {
        // "q/" appears mid-token in "faq/answers"
        let map = extract("a/see faq/answers type/open", QUESTION_FIELDS);
        assert_eq!(map.get(Field::Answer), Some("see faq/answers"));
        assert_eq!(map.get(Field::Question), None);
        assert_eq!(map.get(Field::Type), Some("open"));
    }

    #[test]
    fn marker_after_whitespace_inside_a_value_does_fire() {
        // Boundary-scan contract: a recognized marker at a token start always
        // begins a new field, even if the user meant it literally.
        let map = extract("q/compare x a/1 type/mcq", QUESTION_FIELDS);
        assert_eq!(map.get(Field::Question), Some("compare x"));
        assert_eq!(map.get(Field::Answer), Some("1"));
    }

    #[test]
    fn marker_with_no_following_text_is_present_but_empty() {
        let map = extract("q/ a/answer", QUESTION_FIELDS);
        assert_eq!(map.get(Field::Question), Some(""));
        assert!(map.contains(Field::Question));
        assert_eq!(map.get(Field::Answer), Some("answer"));
    }

    #[test]
    fn unrecognized_markers_stay_inside_values() {
        // t/ is not in the question grammar, so it is ordinary text
        let map = extract("q/draw t/chart a/ok type/mcq", QUESTION_FIELDS);
        assert_eq!(map.get(Field::Question), Some("draw t/chart"));
    }

    #[test]
    fn empty_remainder_yields_empty_map() {
        let map = extract("", QUESTION_FIELDS);
        assert_eq!(map.preamble(), "");
        assert!(map.is_empty());
    }

    #[test]
    fn longer_marker_is_not_shadowed_by_shorter_ones() {
        let map = extract(
            "t/Title d/uses type/ as text",
            &[Field::Title, Field::Description, Field::Priority],
        );
        // "type/" starts with 't' but does not match "t/", so it stays put
        assert_eq!(map.get(Field::Description), Some("uses type/ as text"));
        assert_eq!(map.get(Field::Title), Some("Title"));
    }
}
