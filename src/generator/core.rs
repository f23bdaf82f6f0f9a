use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::classifier::Classifier;
use crate::filter::is_trivial;
use crate::generator::config::GeneratorConfig;
use crate::generator::errors::GeneratorError;
use crate::generator::report::{GenerationReport, Quotas, total_quota};
use crate::problem::{Category, Numbers, Problem};

/// Draws random puzzles until per-category quotas are filled
#[derive(Debug, Clone)]
pub struct BatchGenerator {
    config: GeneratorConfig,
    classifier: Classifier,
}

impl BatchGenerator {
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        Self::with_classifier(config, Classifier::default())
    }

    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_classifier(
        config: GeneratorConfig,
        classifier: Classifier,
    ) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config, classifier })
    }

    fn draw(&self, rng: &mut StdRng) -> (Numbers, i64) {
        let numbers: Numbers =
            std::array::from_fn(|_| rng.gen_range(self.config.number_range.clone()));
        let target = rng.gen_range(self.config.target_range.clone());
        (numbers, target)
    }

    /// Generate problems until every quota is met or the try budget
    /// (`sum(quotas) * max_tries_per_problem`) runs out.
    ///
    /// Draws come from one RNG in sequence. Each chunk of draws is filtered
    /// and classified in parallel, then accepted in draw order, so a seeded
    /// run yields the same report regardless of thread count. A shortfall is
    /// reported, never raised.
    pub fn generate(&self, quotas: &Quotas) -> GenerationReport {
        let mut remaining: BTreeMap<Category, usize> = quotas
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&category, &count)| (category, count))
            .collect();
        let total = total_quota(&remaining);
        let max_total_tries = total.saturating_mul(self.config.max_tries_per_problem);

        info!(
            "Generating {} problems ({:?}) with a budget of {} tries",
            total, remaining, max_total_tries
        );

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut problems = Vec::with_capacity(total.min(self.config.chunk_size));
        let mut tries = 0usize;

        while tries < max_total_tries {
            // nothing harder than the hardest open quota can be accepted
            let Some(&hardest) = remaining.keys().next_back() else {
                break;
            };
            let chunk = self.config.chunk_size.min(max_total_tries - tries);
            let draws: Vec<(Numbers, i64)> = (0..chunk).map(|_| self.draw(&mut rng)).collect();

            let outcomes: Vec<Option<Category>> = draws
                .par_iter()
                .map(|(numbers, target)| {
                    if is_trivial(numbers, *target) {
                        return None;
                    }
                    self.classifier
                        .classify_within(numbers, *target, hardest)
                        .map(|found| found.category)
                })
                .collect();

            for ((numbers, target), outcome) in draws.into_iter().zip(outcomes) {
                tries += 1;
                let Some(category) = outcome else {
                    continue;
                };
                let Some(left) = remaining.get_mut(&category) else {
                    continue;
                };

                problems.push(Problem {
                    numbers,
                    target,
                    category,
                });
                *left -= 1;
                if *left == 0 {
                    remaining.remove(&category);
                }
                if remaining.is_empty() {
                    break;
                }
            }

            debug!(
                "{} tries so far, {} accepted, remaining {:?}",
                tries,
                problems.len(),
                remaining
            );
        }

        if remaining.is_empty() {
            info!("Generated {} problems in {} tries", problems.len(), tries);
        } else {
            warn!(
                "Try budget of {} exhausted with quotas unmet: {:?}",
                max_total_tries, remaining
            );
        }

        GenerationReport {
            problems,
            shortfall: remaining,
            tries,
        }
    }
}

impl Default for BatchGenerator {
    fn default() -> Self {
        Self {
            config: GeneratorConfig::default(),
            classifier: Classifier::default(),
        }
    }
}
