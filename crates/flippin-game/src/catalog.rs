//! The set of playable puzzles, keyed by name.

use crate::{Puzzle, PuzzleError, PuzzleStates, validate_custom_puzzle};

/// Prefix applied to the names of built-in and imported custom puzzles.
pub const CUSTOM_PREFIX: &str = "CSTM-";

/// Errors raised while importing a puzzle file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ImportError {
    /// The file is not a JSON list of `[title, {start, end}]` entries.
    #[display("invalid puzzle file: {_0}")]
    Json(#[from] serde_json::Error),
}

/// Playable puzzles in insertion order, with unique names.
///
/// A new catalog holds the built-in example and sandbox puzzles. Custom
/// puzzles added later are validated first and keep the name they were first
/// registered under; a later puzzle with the same name is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCatalog {
    puzzles: Vec<Puzzle>,
}

impl Default for PuzzleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleCatalog {
    /// Creates a catalog with the built-in puzzles.
    #[must_use]
    pub fn new() -> Self {
        let mut this = Self {
            puzzles: Vec::new(),
        };
        for puzzle in [Puzzle::freeplay_example(), Puzzle::sandbox()] {
            this.insert(puzzle);
        }
        this
    }

    /// Returns the catalog name for a custom puzzle title.
    #[must_use]
    pub fn custom_name(title: &str) -> String {
        format!("{CUSTOM_PREFIX}{title}")
    }

    fn insert(&mut self, puzzle: Puzzle) -> bool {
        let name = Self::custom_name(puzzle.title());
        if self.get(&name).is_some() {
            log::debug!("puzzle {name:?} already exists, keeping the first one");
            return false;
        }
        self.puzzles.push(puzzle.with_title(name));
        true
    }

    /// Validates and adds a custom puzzle.
    ///
    /// Returns `Ok(false)` if a puzzle with the same name is already present.
    ///
    /// # Errors
    ///
    /// Returns the [`PuzzleError`] from [`validate_custom_puzzle`] if the
    /// puzzle is rejected.
    pub fn add_custom(&mut self, title: &str, states: &PuzzleStates) -> Result<bool, PuzzleError> {
        let puzzle = validate_custom_puzzle(title, states)?;
        Ok(self.insert(puzzle))
    }

    /// Adds every valid custom puzzle, skipping rejected ones.
    ///
    /// Returns the number of puzzles added.
    pub fn import_customs<'a, I>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a PuzzleStates)>,
    {
        let mut added = 0;
        for (title, states) in entries {
            match self.add_custom(title, states) {
                Ok(true) => added += 1,
                Ok(false) => {}
                Err(err) => log::warn!("skipping custom puzzle {title:?}: {err}"),
            }
        }
        added
    }

    /// Adds the custom puzzles from a JSON list of `[title, {start, end}]` entries.
    ///
    /// Returns the number of puzzles added.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Json`] if `json` does not have the expected shape.
    /// Entries that have the right shape but fail validation are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flippin_game::PuzzleCatalog;
    ///
    /// let mut catalog = PuzzleCatalog::new();
    /// let added = catalog.import_json(
    ///     r#"[["Mine", {"start": "1011110111112101211101210", "end": "0202002020000001000101110"}]]"#,
    /// )?;
    /// assert_eq!(added, 1);
    /// assert!(catalog.get("CSTM-Mine").is_some());
    /// # Ok::<(), flippin_game::ImportError>(())
    /// ```
    pub fn import_json(&mut self, json: &str) -> Result<usize, ImportError> {
        let entries: Vec<(String, PuzzleStates)> = serde_json::from_str(json)?;
        Ok(self.import_customs(
            entries
                .iter()
                .map(|(title, states)| (title.as_str(), states)),
        ))
    }

    /// Looks up a puzzle by its catalog name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.title() == name)
    }

    /// Returns an iterator over the puzzles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    /// Returns an iterator over the catalog names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.puzzles.iter().map(Puzzle::title)
    }

    /// Returns the number of puzzles.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Returns `true` if the catalog has no puzzles.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "1011110111112101211101210";
    const SOLVABLE_END: &str = "0202002020000001000101110";
    const UNSOLVABLE_END: &str = "0011110111112101211101210";

    #[test]
    fn test_new_catalog_has_builtins() {
        let catalog = PuzzleCatalog::new();
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            ["CSTM-Example", "CSTM-Sandbox"]
        );
        let example = catalog.get("CSTM-Example").unwrap();
        assert_eq!(example.start(), Puzzle::freeplay_example().start());
        assert!(catalog.get("Example").is_none());
    }

    #[test]
    fn test_add_custom() {
        let mut catalog = PuzzleCatalog::new();
        let states = PuzzleStates::new(START, SOLVABLE_END);
        assert_eq!(catalog.add_custom("Mine", &states), Ok(true));
        assert_eq!(catalog.len(), 3);

        let puzzle = catalog.get("CSTM-Mine").unwrap();
        assert_eq!(puzzle.end().to_string(), SOLVABLE_END);

        let unsolvable = PuzzleStates::new(START, UNSOLVABLE_END);
        assert_eq!(
            catalog.add_custom("Bad", &unsolvable),
            Err(PuzzleError::Unsolvable)
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_first_name_wins() {
        let mut catalog = PuzzleCatalog::new();
        let first = PuzzleStates::new(START, SOLVABLE_END);
        let second = PuzzleStates::new(SOLVABLE_END, START);
        assert_eq!(catalog.add_custom("Dup", &first), Ok(true));
        assert_eq!(catalog.add_custom("Dup", &second), Ok(false));
        assert_eq!(
            catalog.get("CSTM-Dup").unwrap().start().to_string(),
            START
        );

        // built-in names are taken too
        assert_eq!(catalog.add_custom("Example", &second), Ok(false));
    }

    #[test]
    fn test_import_json_skips_invalid_entries() {
        let mut catalog = PuzzleCatalog::new();
        let json = format!(
            r#"[
                ["Good", {{"start": "{START}", "end": "{SOLVABLE_END}"}}],
                ["", {{"start": "{START}", "end": "{SOLVABLE_END}"}}],
                ["Easy", {{"start": "{START}", "end": "{START}"}}],
                ["Unsolvable", {{"start": "{START}", "end": "{UNSOLVABLE_END}"}}],
                ["Missing", {{"start": "{START}"}}],
                ["Short", {{"start": "012", "end": "{SOLVABLE_END}"}}]
            ]"#
        );
        assert_eq!(catalog.import_json(&json).unwrap(), 1);
        assert_eq!(
            catalog.names().collect::<Vec<_>>(),
            ["CSTM-Example", "CSTM-Sandbox", "CSTM-Good"]
        );
    }

    #[test]
    fn test_import_json_rejects_wrong_shape() {
        let mut catalog = PuzzleCatalog::new();
        assert!(catalog.import_json("{}").is_err());
        assert!(catalog.import_json("not json").is_err());
        assert_eq!(catalog.len(), 2);
    }
}
