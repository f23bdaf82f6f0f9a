use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Empty {name} range: {start}..={end}")]
    EmptyRange {
        name: &'static str,
        start: i64,
        end: i64,
    },
    #[error("Tries per problem must be at least 1")]
    ZeroTryBudget,
    #[error("Chunk size must be at least 1")]
    ZeroChunkSize,
}
