use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::pool::ProblemSource;
use crate::problem::{Category, Problem};
use crate::sampler::errors::SamplerError;

/// Difficulty level offered to players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Percentage of each category in a session, summing to 100
    pub fn distribution(self) -> BTreeMap<Category, u32> {
        let [no_parens, one_paren, multi_paren] = match self {
            Difficulty::Easy => [100, 0, 0],
            Difficulty::Normal => [50, 50, 0],
            Difficulty::Hard => [20, 40, 40],
        };
        BTreeMap::from([
            (Category::NoParens, no_parens),
            (Category::OneParen, one_paren),
            (Category::MultiParen, multi_paren),
        ])
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Normal => write!(f, "normal"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// `count * percent / 100` rounded half up, without overflowing for any `count`
fn percent_of(count: usize, percent: usize) -> usize {
    (count / 100) * percent + ((count % 100) * percent + 50) / 100
}

/// How many problems of each category a session of `count` problems gets.
///
/// Each share is rounded half up; any rounding error is absorbed by the
/// category with the largest count, the later one on ties.
pub fn category_counts(difficulty: Difficulty, count: usize) -> BTreeMap<Category, usize> {
    let mut counts: BTreeMap<Category, usize> = difficulty
        .distribution()
        .into_iter()
        .map(|(category, percent)| (category, percent_of(count, percent as usize)))
        .collect();

    // rounding moves the total at most a couple of problems from `count`
    let total: i128 = counts.values().map(|&n| n as i128).sum();
    let missing = count as i128 - total;
    let largest = counts
        .iter()
        .max_by_key(|&(_, &n)| n)
        .map(|(&category, _)| category);

    if let Some(slot) = largest.and_then(|category| counts.get_mut(&category)) {
        *slot = slot.saturating_add_signed(missing as isize);
    }

    counts
}

/// Pick `count` distinct problems for a session, shuffled.
///
/// # Errors
///
/// Returns an error if some category has fewer problems than its share needs.
pub fn sample<S, R>(
    source: &S,
    difficulty: Difficulty,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Problem>, SamplerError>
where
    S: ProblemSource + ?Sized,
    R: Rng + ?Sized,
{
    let counts = category_counts(difficulty, count);
    debug!("Sampling {} {} problems as {:?}", count, difficulty, counts);

    for (&category, &needed) in &counts {
        let available = source.problems_in(category).len();
        if available < needed {
            return Err(SamplerError::NotEnoughProblems {
                category,
                needed,
                available,
            });
        }
    }

    // every share fits in the source, so the sum is bounded by its size
    let mut selected = Vec::with_capacity(counts.values().sum());
    for (category, needed) in counts {
        selected.extend(
            source
                .problems_in(category)
                .choose_multiple(rng, needed)
                .cloned(),
        );
    }

    selected.shuffle(rng);
    Ok(selected)
}
