//! Batch scoring: attach per-article sentiment and reduce to one label.

use quotegate_core::Article;

use crate::error::SentimentError;
use crate::scorer::SentimentScorer;
use crate::types::{OverallSentiment, SentimentSummary};

/// Average polarity strictly above this is `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Average polarity strictly below this is `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Maps an average polarity to its label. Both thresholds are exclusive.
#[must_use]
pub fn classify(average_polarity: f64) -> OverallSentiment {
    if average_polarity > POSITIVE_THRESHOLD {
        OverallSentiment::Positive
    } else if average_polarity < NEGATIVE_THRESHOLD {
        OverallSentiment::Negative
    } else {
        OverallSentiment::Neutral
    }
}

/// Scores every article that has a description, storing the result on the
/// article, and returns the batch summary.
///
/// Articles without a description are left untouched and excluded from the
/// average. Input order is preserved.
///
/// # Errors
///
/// Returns [`SentimentError::NoAnalyzableContent`] when no article in the
/// batch has a description.
pub fn summarize<S>(
    articles: &mut [Article],
    scorer: &S,
) -> Result<SentimentSummary, SentimentError>
where
    S: SentimentScorer + ?Sized,
{
    let mut polarity_sum = 0.0_f64;
    let mut analyzed = 0_usize;

    for article in articles.iter_mut() {
        let Some(text) = article.scorable_text() else {
            continue;
        };
        let sentiment = scorer.score(text);
        polarity_sum += sentiment.polarity;
        analyzed += 1;
        article.attach_sentiment(sentiment);
    }

    if analyzed == 0 {
        tracing::info!(
            fetched = articles.len(),
            "no article descriptions to score"
        );
        return Err(SentimentError::NoAnalyzableContent);
    }

    #[allow(clippy::cast_precision_loss)]
    let average_polarity = polarity_sum / analyzed as f64;
    let overall_sentiment = classify(average_polarity);

    tracing::debug!(
        analyzed,
        skipped = articles.len() - analyzed,
        average_polarity,
        overall = %overall_sentiment,
        "scored article batch"
    );

    Ok(SentimentSummary {
        average_polarity,
        overall_sentiment,
        analyzed_articles: analyzed,
    })
}
