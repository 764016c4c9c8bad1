use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::GateError;

/// The set of plates that are allowed through the gate.
///
/// Loaded once at startup and never mutated afterwards. Lookups are
/// exact-match against the normalized form (uppercase, trimmed).
pub struct Registry {
    plates: HashSet<String>,
}

impl Registry {

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, GateError> {
        let mut plates = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let plate = line.trim().to_uppercase();
            if !plate.is_empty() {
                plates.insert(plate);
            }
        }
        Ok(Self { plates })
    }

    pub fn contains(&self, text: &str) -> bool {
        self.plates.contains(text)
    }

    pub fn len(&self) -> usize {
        self.plates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

}

#[cfg(test)]
mod test {

    use std::io::Cursor;

    use super::Registry;

    fn from_str(s: &str) -> Registry {
        Registry::from_reader(Cursor::new(s)).unwrap()
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let registry = from_str(" ab12-3 \n");
        assert!(registry.contains("AB12-3"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_lines_collapse() {
        let registry = from_str("AB12-3\n ab12-3\nab12-3 \n");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let registry = from_str("\n\nABC-123\n   \n");
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(""));
    }

    #[test]
    fn membership_is_exact_match_only() {
        let registry = from_str("ABC-123\n");
        assert!(registry.contains("ABC-123"));
        // a substring of a registered plate is not a match
        assert!(!registry.contains("ABC-12"));
        assert!(!registry.contains("BC-123"));
        assert!(!registry.contains("ABC123"));
    }

    #[test]
    fn empty_file_yields_empty_registry() {
        let registry = from_str("");
        assert!(registry.is_empty());
    }

}
