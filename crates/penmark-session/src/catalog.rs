//! Puzzle catalog and solved-puzzle tracking types.
//!
//! These are the serde surface shared with whatever stores or fetches
//! puzzles. The session core never reads the solved store; it only calls
//! [`SolvedSink::mark_solved`](crate::SolvedSink).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use penmark_board::{ParsePuzzleError, Puzzle, PuzzleId};

/// Catalog difficulty tiers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// The introductory tier.
    #[display("easy")]
    Easy,
    /// The default progression tier.
    #[display("medium")]
    Medium,
    /// Puzzles needing sustained mark bookkeeping.
    #[display("hard")]
    Hard,
    /// The hardest catalog tier.
    #[display("expert")]
    Expert,
}

/// One catalog puzzle: the 81-character board string, its solution, and
/// the identifier used for solved tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier used for solved tracking.
    pub id: String,
    /// The 81-character board string.
    pub puzzle: String,
    /// Optional 81-character solution string.
    #[serde(default)]
    pub solution: Option<String>,
}

impl CatalogEntry {
    /// Parses the entry into a loadable [`Puzzle`].
    ///
    /// # Errors
    ///
    /// Returns the parse error of the board or solution string.
    pub fn to_puzzle(&self) -> Result<Puzzle, ParsePuzzleError> {
        Puzzle::parse(
            &self.puzzle,
            self.solution.as_deref(),
            Some(PuzzleId::from(self.id.as_str())),
        )
    }
}

/// Puzzles grouped by difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(pub BTreeMap<Difficulty, Vec<CatalogEntry>>);

impl Catalog {
    /// The entries for a difficulty, empty when the tier is absent.
    #[must_use]
    pub fn entries(&self, difficulty: Difficulty) -> &[CatalogEntry] {
        self.0.get(&difficulty).map_or(&[], Vec::as_slice)
    }

    /// The first entry of a tier not yet present in `solved`.
    #[must_use]
    pub fn first_unsolved(
        &self,
        difficulty: Difficulty,
        solved: &SolvedRecord,
    ) -> Option<&CatalogEntry> {
        self.entries(difficulty)
            .iter()
            .find(|entry| !solved.contains(difficulty, &entry.id))
    }
}

/// The solved-puzzle record: difficulty to set of puzzle ids.
///
/// `mark_solved` is the only write the core side performs; persistence
/// format and location belong to the collaborator holding this value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolvedRecord(pub BTreeMap<Difficulty, BTreeSet<String>>);

impl SolvedRecord {
    /// Records a puzzle as solved. Idempotent.
    pub fn mark_solved(&mut self, difficulty: Difficulty, id: &str) {
        self.0.entry(difficulty).or_default().insert(id.to_owned());
    }

    /// Whether `id` is recorded as solved at `difficulty`.
    #[must_use]
    pub fn contains(&self, difficulty: Difficulty, id: &str) -> bool {
        self.0
            .get(&difficulty)
            .is_some_and(|ids| ids.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_round_trips_through_json() {
        let json = format!(
            r#"{{
            "easy": [
                {{"id": "easy-1", "puzzle": "530070000600195000098000060800060003400803001700020006060000280000419005000080079", "solution": "534678912672195348198342567859761423426853791713924856961537284287419635345286179"}},
                {{"id": "easy-2", "puzzle": "{}"}}
            ],
            "hard": []
        }}"#,
            ".".repeat(81)
        );
        let catalog: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(catalog.entries(Difficulty::Easy).len(), 2);
        assert!(catalog.entries(Difficulty::Hard).is_empty());
        assert!(catalog.entries(Difficulty::Expert).is_empty());

        let puzzle = catalog.entries(Difficulty::Easy)[0].to_puzzle().unwrap();
        assert!(puzzle.solution.is_some());
        assert_eq!(puzzle.id.as_ref().map(ToString::to_string).as_deref(), Some("easy-1"));

        let round_trip: Catalog =
            serde_json::from_str(&serde_json::to_string(&catalog).unwrap()).unwrap();
        assert_eq!(round_trip, catalog);
    }

    #[test]
    fn first_unsolved_skips_recorded_ids() {
        let catalog: Catalog = serde_json::from_str(
            r#"{"easy": [{"id": "a", "puzzle": "x"}, {"id": "b", "puzzle": "x"}]}"#,
        )
        .unwrap();
        let mut solved = SolvedRecord::default();
        assert_eq!(
            catalog.first_unsolved(Difficulty::Easy, &solved).unwrap().id,
            "a"
        );
        solved.mark_solved(Difficulty::Easy, "a");
        assert_eq!(
            catalog.first_unsolved(Difficulty::Easy, &solved).unwrap().id,
            "b"
        );
        solved.mark_solved(Difficulty::Easy, "b");
        assert!(catalog.first_unsolved(Difficulty::Easy, &solved).is_none());
        assert!(solved.contains(Difficulty::Easy, "a"));
        assert!(!solved.contains(Difficulty::Hard, "a"));
    }
}
