use crate::pool::{PoolError, ProblemPool, ProblemSource};
use crate::problem::{Category, Problem};

fn problem(numbers: [i64; 4], target: i64, category: Category) -> Problem {
    Problem {
        numbers,
        target,
        category,
    }
}

fn sample_pool() -> ProblemPool {
    ProblemPool::new(vec![
        problem([1, 2, 3, 4], 10, Category::NoParens),
        problem([2, 3, 4, 1], 20, Category::OneParen),
        problem([3, 4, 7, 3], 15, Category::MultiParen),
        problem([2, 3, 4, 5], 14, Category::NoParens),
    ])
}

#[test]
fn test_json_lines_layout() {
    let pool = ProblemPool::new(vec![
        problem([1, 2, 3, 4], 10, Category::NoParens),
        problem([2, 3, 4, 1], 20, Category::OneParen),
    ]);
    let text = pool.to_json_lines().unwrap_or_default();
    let expected = "[\n\
        {\"numbers\":[1,2,3,4],\"target\":10,\"category\":\"no-parens\"},\n\
        {\"numbers\":[2,3,4,1],\"target\":20,\"category\":\"one-paren\"}\n\
        ]";
    assert_eq!(text, expected);
}

#[test]
fn test_empty_pool_is_valid_json() {
    let pool = ProblemPool::default();
    assert!(pool.is_empty());
    let text = pool.to_json_lines().unwrap_or_default();
    assert_eq!(text, "[\n]");
    assert!(matches!(ProblemPool::from_json(&text), Ok(p) if p.is_empty()));
}

#[test]
fn test_category_index() {
    let pool = sample_pool();
    assert_eq!(pool.len(), 4);
    assert_eq!(pool.problems_in(Category::NoParens).len(), 2);
    assert_eq!(pool.problems_in(Category::OneParen).len(), 1);
    assert_eq!(
        pool.problems_in(Category::MultiParen).first().map(|p| p.target),
        Some(15)
    );

    let counts = pool.category_counts();
    assert_eq!(counts.get(&Category::NoParens), Some(&2));
    assert_eq!(counts.get(&Category::MultiParen), Some(&1));
}

#[test]
fn test_missing_category_is_empty() {
    let pool = ProblemPool::from(vec![problem([1, 2, 3, 4], 10, Category::NoParens)]);
    assert!(pool.problems_in(Category::MultiParen).is_empty());
    assert_eq!(pool.category_counts().get(&Category::MultiParen), Some(&0));
}

#[test]
fn test_write_and_read_file() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let path = dir.path().join("data").join("problems.json");
        let pool = sample_pool();
        assert!(pool.write_to(&path).is_ok());

        let loaded = ProblemPool::read_from(&path);
        assert!(loaded.is_ok());
        if let Ok(loaded) = loaded {
            assert_eq!(loaded, pool);
        }
    }
}

#[test]
fn test_read_accepts_pretty_printed_array() {
    let text = r#"[
        {
            "numbers": [9, 8, 7, 6],
            "target": 4,
            "category": "no-parens"
        }
    ]"#;
    let pool = ProblemPool::from_json(text);
    assert!(matches!(pool, Ok(p) if p.problems().len() == 1));
}

#[test]
fn test_read_errors() {
    assert!(matches!(
        ProblemPool::from_json(r#"[{"numbers":[1,2],"target":3,"category":"no-parens"}]"#),
        Err(PoolError::Json(_))
    ));
    assert!(matches!(
        ProblemPool::from_json(r#"[{"numbers":[1,2,3,4],"target":3,"category":"easy"}]"#),
        Err(PoolError::Json(_))
    ));

    let dir = tempfile::tempdir();
    if let Ok(dir) = dir {
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ProblemPool::read_from(&missing),
            Err(PoolError::Io { .. })
        ));
    }
}
