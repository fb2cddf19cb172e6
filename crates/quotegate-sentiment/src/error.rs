use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentimentError {
    /// Articles were fetched but none carried a description to score.
    #[error("no articles with descriptions to analyze")]
    NoAnalyzableContent,
}
