use log::debug;

use crate::classifier::templates::{OPERATOR_COUNT, TEMPLATES, Template};
use crate::expression::{Operator, evaluate};
use crate::problem::{Category, Classification, Numbers};
use crate::utils::permutations;

/// All operator triples, `op1` outermost and `op3` innermost
fn operator_triples() -> Vec<[Operator; OPERATOR_COUNT]> {
    let mut triples = Vec::with_capacity(Operator::ALL.len().pow(OPERATOR_COUNT as u32));
    for op1 in Operator::ALL {
        for op2 in Operator::ALL {
            for op3 in Operator::ALL {
                triples.push([op1, op2, op3]);
            }
        }
    }
    triples
}

/// Finds the simplest expression reaching a target and classifies it
#[derive(Debug, Clone)]
pub struct Classifier {
    templates: Vec<Template>,
}

impl Classifier {
    /// Templates are searched easiest category first, keeping the given
    /// order within a category.
    pub fn new(mut templates: Vec<Template>) -> Self {
        templates.sort_by_key(|template| template.category);
        Self { templates }
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Search every template, then every ordering of `numbers`, then every
    /// operator triple, returning the first rendering that evaluates to
    /// `target`. `None` means no arrangement reaches the target.
    pub fn classify(&self, numbers: &Numbers, target: i64) -> Option<Classification> {
        self.search(self.templates.iter(), numbers, target)
    }

    /// Like [`Classifier::classify`], but stops at the first template harder
    /// than `hardest`. Any result it returns is exactly what `classify` returns.
    pub fn classify_within(
        &self,
        numbers: &Numbers,
        target: i64,
        hardest: Category,
    ) -> Option<Classification> {
        let templates = self
            .templates
            .iter()
            .take_while(|template| template.category <= hardest);
        self.search(templates, numbers, target)
    }

    fn search<'a>(
        &self,
        templates: impl Iterator<Item = &'a Template>,
        numbers: &Numbers,
        target: i64,
    ) -> Option<Classification> {
        let orderings: Vec<Numbers> = permutations(numbers)
            .into_iter()
            .filter_map(|perm| Numbers::try_from(perm).ok())
            .collect();
        let triples = operator_triples();
        let mut evaluated = 0usize;

        for template in templates {
            for operands in &orderings {
                for operators in &triples {
                    let expression = template.render(operands, operators);
                    evaluated += 1;
                    if evaluate(&expression) == Ok(target) {
                        debug!(
                            "{:?} -> {}: '{}' after {} evaluations",
                            numbers, target, expression, evaluated
                        );
                        return Some(Classification {
                            category: template.category,
                            simplest_solution: expression,
                        });
                    }
                }
            }
        }

        debug!(
            "{:?} -> {}: no solution in {} evaluations",
            numbers, target, evaluated
        );
        None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        debug!("Using {} built-in templates", TEMPLATES.len());
        Self::new(TEMPLATES.to_vec())
    }
}
