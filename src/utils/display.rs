//! Display and output formatting utilities

use crate::cover::{ExactCoverProblem, Solution};

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Banner printed above the outcome of a solve run
    pub fn results_banner() -> String {
        let mut output = String::new();
        output.push_str("#####################\n");
        output.push_str("###### RESULTS ######\n");
        output.push_str("#####################\n");
        output
    }

    /// Format the outcome of a solve run, banner included
    pub fn format_results(solution: Option<&Solution>) -> String {
        let mut output = Self::results_banner();
        output.push('\n');

        match solution {
            Some(solution) => output.push_str(&Self::format_cover(solution)),
            None => output.push_str(
                "No exact cover exists: no sub-collection covers every element exactly once.\n",
            ),
        }

        output
    }

    /// Format a found cover with its subsets spelled out
    ///
    /// Subsets are named S_1, S_2, ... after their one-based position in
    /// the input file, matching how people number them on paper.
    pub fn format_cover(solution: &Solution) -> String {
        let mut output = String::new();

        let names: Vec<String> = solution
            .selected
            .iter()
            .map(|&index| format!("S_{}", index + 1))
            .collect();

        output.push_str(&format!(
            "Found an exact cover using {} of {} subsets:\n",
            solution.metadata.selected_count, solution.metadata.subset_count
        ));
        output.push_str(&format!("S* = {{ {} }}, where:\n", names.join(", ")));
        for (name, subset) in names.iter().zip(&solution.subsets) {
            output.push_str(&format!("  {} = {{ {} }}\n", name, subset.join(", ")));
        }

        output
    }

    /// Format a short summary of a problem instance
    pub fn format_problem_summary(problem: &ExactCoverProblem) -> String {
        let mut output = String::new();

        output.push_str("Problem Summary:\n");
        output.push_str(&format!("  Universe elements: {}\n", problem.element_count()));
        output.push_str(&format!("  Subsets: {}\n", problem.subset_count()));

        let uncovered = problem.uncovered_elements();
        if uncovered.is_empty() {
            output.push_str("  Uncovered elements: none\n");
        } else {
            output.push_str(&format!("  Uncovered elements: {}\n", uncovered.join(", ")));
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::estimate_encoding;
    use std::time::Duration;

    fn test_solution() -> Solution {
        let problem = ExactCoverProblem::new(
            vec!["1".into(), "2".into(), "3".into()],
            vec![
                vec!["1".into(), "2".into()],
                vec!["3".into()],
                vec!["1".into()],
                vec!["2".into(), "3".into()],
            ],
        );
        let estimate = estimate_encoding(&problem);
        Solution::new(&problem, vec![0, 1], &estimate, Duration::from_millis(10))
    }

    #[test]
    fn test_cover_formatting() {
        let formatted = SolutionFormatter::format_cover(&test_solution());

        assert!(formatted.contains("S* = { S_1, S_2 }"));
        assert!(formatted.contains("S_1 = { 1, 2 }"));
        assert!(formatted.contains("S_2 = { 3 }"));
    }

    #[test]
    fn test_results_include_banner() {
        let found = SolutionFormatter::format_results(Some(&test_solution()));
        assert!(found.contains("RESULTS"));
        assert!(found.contains("exact cover"));

        let missing = SolutionFormatter::format_results(None);
        assert!(missing.contains("RESULTS"));
        assert!(missing.contains("No exact cover exists"));
    }

    #[test]
    fn test_problem_summary() {
        let problem = ExactCoverProblem::new(
            vec!["a".into(), "b".into()],
            vec![vec!["a".into()]],
        );
        let summary = SolutionFormatter::format_problem_summary(&problem);

        assert!(summary.contains("Universe elements: 2"));
        assert!(summary.contains("Uncovered elements: b"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
