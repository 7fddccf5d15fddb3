//! Exact cover problem instances

use std::collections::HashMap;

/// An exact cover instance: a universe of elements and a collection of
/// subsets drawn from it.
///
/// The goal is a sub-collection whose members are pairwise disjoint and
/// whose union is the whole universe. A membership index (element to the
/// indices of the subsets containing it) is built once at construction and
/// read-only afterwards; every query against the instance goes through it.
///
/// Elements that appear in subsets but not in the universe place no
/// constraint on anything. They are ignored rather than rejected, so a
/// subset collection can be reused against a smaller universe.
#[derive(Debug, Clone)]
pub struct ExactCoverProblem {
    /// Universe elements in input order
    universe: Vec<String>,
    /// Subsets in input order; subset i is modeled by one SAT variable
    collection: Vec<Vec<String>>,
    /// Map from element to the indices of the subsets containing it
    membership: HashMap<String, Vec<usize>>,
}

impl ExactCoverProblem {
    /// Build a problem from its universe and subset collection
    ///
    /// Subsets are sets: an element repeated inside one subset line is
    /// collapsed to a single occurrence.
    pub fn new(universe: Vec<String>, collection: Vec<Vec<String>>) -> Self {
        let mut membership: HashMap<String, Vec<usize>> = HashMap::new();
        let collection: Vec<Vec<String>> = collection
            .into_iter()
            .enumerate()
            .map(|(index, subset)| {
                let mut deduped: Vec<String> = Vec::with_capacity(subset.len());
                for element in subset {
                    if deduped.contains(&element) {
                        continue;
                    }
                    membership.entry(element.clone()).or_default().push(index);
                    deduped.push(element);
                }
                deduped
            })
            .collect();

        Self { universe, collection, membership }
    }

    /// Universe elements in input order
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// The subset collection in input order
    pub fn collection(&self) -> &[Vec<String>] {
        &self.collection
    }

    /// Indices of the subsets containing `element`, in collection order
    ///
    /// Unknown elements yield the empty slice.
    pub fn subsets_containing(&self, element: &str) -> &[usize] {
        self.membership.get(element).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of universe elements
    pub fn element_count(&self) -> usize {
        self.universe.len()
    }

    /// Number of subsets in the collection
    pub fn subset_count(&self) -> usize {
        self.collection.len()
    }

    /// Universe elements no subset covers
    ///
    /// Any such element makes the instance unsolvable, which the encoding
    /// expresses as an empty clause.
    pub fn uncovered_elements(&self) -> Vec<&str> {
        self.universe
            .iter()
            .filter(|element| self.subsets_containing(element).is_empty())
            .map(String::as_str)
            .collect()
    }
}
