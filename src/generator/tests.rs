use std::collections::BTreeMap;

use crate::classifier::{Classifier, TEMPLATES};
use crate::filter::is_trivial;
use crate::generator::{
    BatchGenerator, GenerationReport, GeneratorConfig, GeneratorError, Quotas, total_quota,
};
use crate::problem::Category;

fn seeded(seed: u64) -> BatchGenerator {
    let config = GeneratorConfig {
        seed: Some(seed),
        chunk_size: 32,
        ..GeneratorConfig::default()
    };
    match BatchGenerator::new(config) {
        Ok(generator) => generator,
        Err(e) => panic!("default config should be valid: {}", e),
    }
}

fn quotas(no_parens: usize, one_paren: usize, multi_paren: usize) -> Quotas {
    BTreeMap::from([
        (Category::NoParens, no_parens),
        (Category::OneParen, one_paren),
        (Category::MultiParen, multi_paren),
    ])
}

#[test]
fn test_generates_exact_mixed_quotas() {
    let report = seeded(42).generate(&quotas(5, 3, 2));
    assert!(report.is_complete());
    assert_eq!(report.problems.len(), 10);
    assert_eq!(report.counts(), quotas(5, 3, 2));
}

#[test]
fn test_single_category_quotas() {
    for category in [Category::NoParens, Category::OneParen] {
        let report = seeded(7).generate(&BTreeMap::from([(category, 10)]));
        assert_eq!(report.problems.len(), 10);
        assert!(report.problems.iter().all(|p| p.category == category));
    }

    let report = seeded(7).generate(&quotas(0, 0, 3));
    assert_eq!(report.problems.len(), 3);
    assert!(
        report
            .problems
            .iter()
            .all(|p| p.category == Category::MultiParen)
    );
}

#[test]
fn test_problems_are_not_trivial_and_in_range() {
    let report = seeded(3).generate(&quotas(20, 5, 1));
    assert!(report.is_complete());
    for problem in &report.problems {
        assert!(!is_trivial(&problem.numbers, problem.target), "{}", problem);
        assert!(problem.numbers.iter().all(|n| (0..=9).contains(n)));
        assert!((0..=20).contains(&problem.target));
    }
}

#[test]
fn test_recorded_category_matches_reclassification() {
    let classifier = Classifier::default();
    let report = seeded(11).generate(&quotas(4, 4, 2));
    for problem in &report.problems {
        let found = classifier.classify(&problem.numbers, problem.target);
        assert_eq!(found.map(|c| c.category), Some(problem.category), "{}", problem);
    }
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let first = seeded(2024).generate(&quotas(6, 3, 1));
    let second = seeded(2024).generate(&quotas(6, 3, 1));
    assert_eq!(first, second);
}

#[test]
fn test_chunk_size_does_not_change_accepted_problems() {
    let small = seeded(99).generate(&quotas(6, 3, 1));
    let config = GeneratorConfig {
        seed: Some(99),
        chunk_size: 1,
        ..GeneratorConfig::default()
    };
    let sequential = BatchGenerator::new(config).map(|g| g.generate(&quotas(6, 3, 1)));
    assert_eq!(sequential, Ok(small));
}

#[test]
fn test_empty_quotas_do_nothing() {
    let report = seeded(1).generate(&quotas(0, 0, 0));
    assert_eq!(report, GenerationReport::default());
    assert!(report.is_complete());

    let report = seeded(1).generate(&Quotas::new());
    assert_eq!(report.tries, 0);
}

#[test]
fn test_shortfall_when_category_is_unreachable() {
    // without nested templates nothing is ever classified multi-paren
    let classifier = Classifier::new(TEMPLATES[..5].to_vec());
    let config = GeneratorConfig {
        seed: Some(5),
        max_tries_per_problem: 20,
        chunk_size: 16,
        ..GeneratorConfig::default()
    };
    let generator = BatchGenerator::with_classifier(config, classifier);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        let report = generator.generate(&quotas(1, 0, 2));
        assert!(!report.is_complete());
        assert_eq!(report.tries, 60);
        assert_eq!(report.shortfall, BTreeMap::from([(Category::MultiParen, 2)]));
        assert_eq!(report.counts().get(&Category::NoParens), Some(&1));
    }
}

#[test]
fn test_shortfall_when_budget_too_small() {
    let config = GeneratorConfig {
        seed: Some(8),
        max_tries_per_problem: 1,
        chunk_size: 4,
        ..GeneratorConfig::default()
    };
    let generator = BatchGenerator::new(config);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        let report = generator.generate(&quotas(0, 0, 5));
        assert!(report.tries <= 5);
        let accepted = report.problems.len();
        assert_eq!(
            report.shortfall.get(&Category::MultiParen).copied().unwrap_or(0) + accepted,
            5
        );
    }
}

#[test]
fn test_narrow_ranges() {
    let config = GeneratorConfig {
        number_range: 1..=3,
        target_range: 5..=5,
        seed: Some(17),
        chunk_size: 8,
        ..GeneratorConfig::default()
    };
    let generator = BatchGenerator::new(config);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        let report = generator.generate(&quotas(3, 0, 0));
        assert!(report.is_complete());
        for problem in &report.problems {
            assert_eq!(problem.target, 5);
            assert!(problem.numbers.iter().all(|n| (1..=3).contains(n)));
        }
    }
}

#[test]
fn test_config_validation() {
    assert_eq!(GeneratorConfig::default().validate(), Ok(()));

    let empty_numbers = GeneratorConfig {
        number_range: 5..=4,
        ..GeneratorConfig::default()
    };
    assert_eq!(
        empty_numbers.validate(),
        Err(GeneratorError::EmptyRange {
            name: "number",
            start: 5,
            end: 4
        })
    );

    let empty_targets = GeneratorConfig {
        target_range: 1..=0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        empty_targets.validate(),
        Err(GeneratorError::EmptyRange { name: "target", .. })
    ));

    let no_budget = GeneratorConfig {
        max_tries_per_problem: 0,
        ..GeneratorConfig::default()
    };
    assert_eq!(no_budget.validate(), Err(GeneratorError::ZeroTryBudget));

    let no_chunk = GeneratorConfig {
        chunk_size: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        BatchGenerator::new(no_chunk),
        Err(GeneratorError::ZeroChunkSize)
    ));
}

#[test]
fn test_negative_numbers_are_allowed() {
    let config = GeneratorConfig {
        number_range: -3..=3,
        seed: Some(13),
        chunk_size: 16,
        ..GeneratorConfig::default()
    };
    assert_eq!(config.validate(), Ok(()));
    let report = BatchGenerator::new(config).map(|g| g.generate(&quotas(4, 2, 0)));
    assert!(matches!(&report, Ok(r) if r.is_complete()));
    if let Ok(report) = report {
        let classifier = Classifier::default();
        for problem in &report.problems {
            assert!(problem.numbers.iter().all(|n| (-3..=3).contains(n)));
            let found = classifier.classify(&problem.numbers, problem.target);
            assert_eq!(found.map(|c| c.category), Some(problem.category));
        }
    }
}

#[test]
fn test_negative_targets_are_allowed() {
    let config = GeneratorConfig {
        target_range: -5..=-1,
        seed: Some(21),
        chunk_size: 8,
        ..GeneratorConfig::default()
    };
    let report = BatchGenerator::new(config).map(|g| g.generate(&quotas(3, 0, 0)));
    assert!(matches!(&report, Ok(r) if r.is_complete()));
}

#[test]
fn test_total_quota_saturates() {
    assert_eq!(total_quota(&quotas(5, 3, 2)), 10);
    assert_eq!(total_quota(&Quotas::new()), 0);
    assert_eq!(total_quota(&quotas(usize::MAX, 1, usize::MAX)), usize::MAX);
}

#[test]
fn test_unsolvable_draws_spend_whole_budget() {
    let config = GeneratorConfig {
        seed: Some(8),
        max_tries_per_problem: 1,
        chunk_size: 16,
        ..GeneratorConfig::default()
    };
    let classifier = Classifier::new(Vec::new());
    let generator = BatchGenerator::with_classifier(config, classifier);
    assert!(generator.is_ok());
    if let Ok(generator) = generator {
        // nothing classifies, so the draws run until the budget is spent
        let report = generator.generate(&quotas(40, 0, 24));
        assert_eq!(report.tries, 64);
        assert!(report.problems.is_empty());
        assert_eq!(
            report.shortfall,
            BTreeMap::from([(Category::NoParens, 40), (Category::MultiParen, 24)])
        );
    }
}
