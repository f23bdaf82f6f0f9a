use std::collections::BTreeMap;

use crate::problem::{Category, Problem};

/// Required number of problems per category
pub type Quotas = BTreeMap<Category, usize>;

/// Sum of all quotas, saturating at `usize::MAX`
pub fn total_quota(quotas: &Quotas) -> usize {
    quotas
        .values()
        .fold(0usize, |total, &count| total.saturating_add(count))
}

/// Outcome of one batch generation call
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Accepted problems in acceptance order
    pub problems: Vec<Problem>,
    /// Categories whose quota was not met, with the missing count
    pub shortfall: BTreeMap<Category, usize>,
    /// Random draws consumed
    pub tries: usize,
}

impl GenerationReport {
    pub fn is_complete(&self) -> bool {
        self.shortfall.is_empty()
    }

    /// Accepted problems per category; every category is present
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        let mut counts: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|&c| (c, 0)).collect();
        for problem in &self.problems {
            *counts.entry(problem.category).or_insert(0) += 1;
        }
        counts
    }
}
