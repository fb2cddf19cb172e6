use serde::Serialize;

/// Three-bucket label for an average polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallSentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallSentiment::Positive => write!(f, "Positive"),
            OverallSentiment::Neutral => write!(f, "Neutral"),
            OverallSentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Aggregated sentiment over one batch of articles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    /// Mean polarity of the scored articles only.
    pub average_polarity: f64,
    pub overall_sentiment: OverallSentiment,
    /// Number of articles that had a description and were scored.
    pub analyzed_articles: usize,
}
