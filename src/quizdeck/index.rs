use std::fmt;
use std::str::FromStr;

/// A one-based index into one of the model's record lists, as typed by the
/// user. Parsing validates syntax only; whether the index actually points at
/// a record is checked at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index(usize);

impl Index {
    /// Builds an index from a one-based position. Returns `None` for zero.
    pub fn from_one_based(n: usize) -> Option<Self> {
        if n == 0 {
            None
        } else {
            Some(Index(n))
        }
    }

    pub fn one_based(self) -> usize {
        self.0
    }

    pub fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Index {
    type Err = String;

    // Strictly digits, no sign, no leading '+', and non-zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid index format: {}", s));
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Index(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!(Index::from_str("1"), Ok(Index::from_one_based(1).unwrap()));
        assert_eq!(
            Index::from_str("42"),
            Ok(Index::from_one_based(42).unwrap())
        );
        assert_eq!(Index::from_str(" 3 ").unwrap().one_based(), 3);
    }

    #[test]
    fn rejects_non_positive_and_non_numeric() {
        assert!(Index::from_str("").is_err());
        assert!(Index::from_str("0").is_err());
        assert!(Index::from_str("-1").is_err());
        assert!(Index::from_str("+1").is_err());
        assert!(Index::from_str("abc").is_err());
        assert!(Index::from_str("1a").is_err());
        assert!(Index::from_str("1 2").is_err());
    }

    #[test]
    fn zero_based_conversion() {
        let idx = Index::from_one_based(5).unwrap();
        assert_eq!(idx.one_based(), 5);
        assert_eq!(idx.zero_based(), 4);
        assert_eq!(idx.to_string(), "5");
    }
}
