use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::pool::errors::PoolError;
use crate::problem::{Category, Problem};

/// Read access to stored problems, grouped by category
pub trait ProblemSource {
    fn problems_in(&self, category: Category) -> &[Problem];
}

/// An in-memory problem database indexed by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemPool {
    problems: Vec<Problem>,
    by_category: BTreeMap<Category, Vec<Problem>>,
}

impl ProblemPool {
    pub fn new(problems: Vec<Problem>) -> Self {
        let mut by_category: BTreeMap<Category, Vec<Problem>> = BTreeMap::new();
        for problem in &problems {
            by_category
                .entry(problem.category)
                .or_default()
                .push(problem.clone());
        }
        Self {
            problems,
            by_category,
        }
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Number of problems per category; every category is present
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        Category::ALL
            .iter()
            .map(|&category| (category, self.problems_in(category).len()))
            .collect()
    }

    /// Render as a JSON array with one problem per line.
    ///
    /// # Errors
    ///
    /// Returns an error if a problem fails to serialize.
    pub fn to_json_lines(&self) -> Result<String, PoolError> {
        let lines = self
            .problems
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;

        let mut out = String::from("[\n");
        out.push_str(&lines.join(",\n"));
        if !lines.is_empty() {
            out.push('\n');
        }
        out.push(']');
        Ok(out)
    }

    /// Parse any JSON array of problems.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON array of valid problems.
    pub fn from_json(text: &str) -> Result<Self, PoolError> {
        let problems: Vec<Problem> = serde_json::from_str(text)?;
        Ok(Self::new(problems))
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<(), PoolError> {
        let text = self.to_json_lines()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PoolError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, text).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote {} problems to {}", self.len(), path.display());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not hold a JSON
    /// array of problems.
    pub fn read_from(path: &Path) -> Result<Self, PoolError> {
        let text = fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let pool = Self::from_json(&text)?;
        debug!(
            "Read {} problems from {}: {:?}",
            pool.len(),
            path.display(),
            pool.category_counts()
        );
        Ok(pool)
    }
}

impl ProblemSource for ProblemPool {
    fn problems_in(&self, category: Category) -> &[Problem] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl From<Vec<Problem>> for ProblemPool {
    fn from(problems: Vec<Problem>) -> Self {
        Self::new(problems)
    }
}
