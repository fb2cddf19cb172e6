//! Article sentiment scoring and aggregation.
//!
//! Scores article descriptions with a lexicon-based scorer, attaches the
//! per-article result, and reduces the batch to an average polarity mapped to
//! a Positive / Neutral / Negative label.

pub mod aggregate;
pub mod error;
pub mod scorer;
pub mod types;

pub use aggregate::{classify, summarize, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use error::SentimentError;
pub use scorer::{LexiconScorer, SentimentScorer};
pub use types::{OverallSentiment, SentimentSummary};
