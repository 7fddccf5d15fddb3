//! Solution representation and verification

use super::ExactCoverProblem;
use crate::sat::EncodingEstimate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// A solved exact cover: which subsets to take, plus solve metadata
///
/// Subset indices follow the order the solver's model listed them in, not
/// collection order. An empty selection is a genuine solution (of the empty
/// universe), not the absence of one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Indices into the problem's collection, in model order
    pub selected: Vec<usize>,
    /// Snapshot of the selected subsets' elements, one per in-range index in
    /// `selected`
    pub subsets: Vec<Vec<String>>,
    /// Metadata about the problem and its encoding
    pub metadata: SolutionMetadata,
    /// Wall time of the whole encode, solve and decode pipeline
    #[serde(skip)]
    pub solve_time: Duration,
}

/// Metadata about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Number of universe elements in the problem
    pub element_count: usize,
    /// Number of subsets in the problem's collection
    pub subset_count: usize,
    /// Number of subsets selected for the cover
    pub selected_count: usize,
    /// Size of the CNF formula the solver saw
    pub variable_count: usize,
    pub clause_count: usize,
}

impl Solution {
    /// Create a new solution from the decoded subset indices
    ///
    /// Indices outside the problem's collection are skipped when snapshotting
    /// subset contents, the same way `validate_selection` skips them.
    pub fn new(
        problem: &ExactCoverProblem,
        selected: Vec<usize>,
        estimate: &EncodingEstimate,
        solve_time: Duration,
    ) -> Self {
        let subsets = selected
            .iter()
            .filter_map(|&index| problem.collection().get(index).cloned())
            .collect();

        let metadata = SolutionMetadata {
            element_count: problem.element_count(),
            subset_count: problem.subset_count(),
            selected_count: selected.len(),
            variable_count: estimate.variable_count,
            clause_count: estimate.clause_count(),
        };

        Self {
            selected,
            subsets,
            metadata,
            solve_time,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// Result of checking a selection against the exact cover rules
#[derive(Debug, Clone)]
pub struct SelectionReport {
    pub is_valid: bool,
    /// Universe elements no selected subset covers
    pub uncovered: Vec<String>,
    /// Universe elements covered by more than one selected subset
    pub overlapping: Vec<String>,
}

/// Independently verify that a selection is an exact cover
///
/// Every universe element must be covered exactly once. Elements outside
/// the universe are ignored here just as the encoding ignores them, so a
/// selection the solver produced always passes.
pub fn validate_selection(problem: &ExactCoverProblem, selected: &[usize]) -> SelectionReport {
    let mut cover_counts: HashMap<&str, usize> = HashMap::new();
    for &index in selected {
        if let Some(subset) = problem.collection().get(index) {
            for element in subset {
                *cover_counts.entry(element.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut seen = HashSet::new();
    let mut uncovered = Vec::new();
    let mut overlapping = Vec::new();
    for element in problem.universe() {
        if !seen.insert(element.as_str()) {
            continue;
        }
        match cover_counts.get(element.as_str()).copied().unwrap_or(0) {
            0 => uncovered.push(element.clone()),
            1 => {}
            _ => overlapping.push(element.clone()),
        }
    }

    SelectionReport {
        is_valid: uncovered.is_empty() && overlapping.is_empty(),
        uncovered,
        overlapping,
    }
}

impl std::fmt::Display for SelectionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            writeln!(f, "Selection check: VALID")?;
        } else {
            writeln!(f, "Selection check: INVALID")?;
            if !self.uncovered.is_empty() {
                writeln!(f, "  Uncovered elements: {}", self.uncovered.join(", "))?;
            }
            if !self.overlapping.is_empty() {
                writeln!(f, "  Overlapping elements: {}", self.overlapping.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::estimate_encoding;

    fn test_problem() -> ExactCoverProblem {
        ExactCoverProblem::new(
            vec!["1".into(), "2".into(), "3".into()],
            vec![
                vec!["1".into(), "2".into()],
                vec!["3".into()],
                vec!["1".into()],
                vec!["2".into(), "3".into()],
            ],
        )
    }

    #[test]
    fn test_valid_selections() {
        let problem = test_problem();

        assert!(validate_selection(&problem, &[0, 1]).is_valid);
        assert!(validate_selection(&problem, &[2, 3]).is_valid);
    }

    #[test]
    fn test_overlapping_selection() {
        let problem = test_problem();
        let report = validate_selection(&problem, &[0, 3]);

        assert!(!report.is_valid);
        assert!(report.uncovered.is_empty());
        assert_eq!(report.overlapping, vec!["2"]);
    }

    #[test]
    fn test_uncovered_selection() {
        let problem = test_problem();
        let report = validate_selection(&problem, &[1, 2]);

        assert!(!report.is_valid);
        assert_eq!(report.uncovered, vec!["2"]);
        assert!(report.overlapping.is_empty());
    }

    #[test]
    fn test_elements_outside_universe_are_ignored() {
        let problem = ExactCoverProblem::new(
            vec!["a".into()],
            vec![vec!["a".into(), "x".into()]],
        );

        assert!(validate_selection(&problem, &[0]).is_valid);
    }

    #[test]
    fn test_empty_selection_of_empty_problem() {
        let problem = ExactCoverProblem::new(vec![], vec![]);
        assert!(validate_selection(&problem, &[]).is_valid);
    }

    #[test]
    fn test_report_display() {
        let problem = test_problem();
        let report = validate_selection(&problem, &[0, 3]);
        let formatted = report.to_string();

        assert!(formatted.contains("INVALID"));
        assert!(formatted.contains("Overlapping elements: 2"));
    }

    #[test]
    fn test_solution_json_round_trip() {
        let problem = test_problem();
        let estimate = estimate_encoding(&problem);
        let solution = Solution::new(&problem, vec![0, 1], &estimate, Duration::from_millis(25));

        let json = solution.to_json().unwrap();
        let restored = Solution::from_json(&json).unwrap();

        assert_eq!(restored.selected, vec![0, 1]);
        assert_eq!(restored.subsets, solution.subsets);
        assert_eq!(restored.metadata.selected_count, 2);
        assert_eq!(restored.metadata.variable_count, 4);
        assert_eq!(restored.metadata.clause_count, 6);
        // solve_time is not serialized
        assert_eq!(restored.solve_time, Duration::ZERO);
    }

    #[test]
    fn test_solution_file_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("solution.json");

        let problem = test_problem();
        let estimate = estimate_encoding(&problem);
        let solution = Solution::new(&problem, vec![2, 3], &estimate, Duration::from_secs(1));

        solution.save_to_file(&path).unwrap();
        let restored = Solution::load_from_file(&path).unwrap();

        assert_eq!(restored.selected, vec![2, 3]);
        assert_eq!(restored.subsets[0], vec!["1"]);
    }
}
