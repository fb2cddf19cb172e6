//! Lexicon-based polarity/subjectivity scorer for financial news text.

use std::sync::LazyLock;

use quotegate_core::Sentiment;
use regex::Regex;

/// Anything that can turn free text into a polarity/subjectivity pair.
///
/// Implementations must return polarity in `[-1.0, 1.0]` and subjectivity in
/// `[0.0, 1.0]`.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> Sentiment;
}

/// Word weights as `(word, polarity, subjectivity)`.
///
/// Keys are lowercase single words.
pub(crate) const LEXICON: &[(&str, f64, f64)] = &[
    // Positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("strong", 0.43, 0.73),
    ("stronger", 0.45, 0.7),
    ("positive", 0.23, 0.55),
    ("gain", 0.4, 0.3),
    ("gains", 0.4, 0.3),
    ("surge", 0.5, 0.4),
    ("surged", 0.5, 0.4),
    ("soar", 0.6, 0.5),
    ("soared", 0.6, 0.5),
    ("rally", 0.4, 0.35),
    ("rallied", 0.4, 0.35),
    ("record", 0.3, 0.2),
    ("beat", 0.35, 0.3),
    ("beats", 0.35, 0.3),
    ("growth", 0.3, 0.25),
    ("profit", 0.3, 0.2),
    ("profitable", 0.5, 0.4),
    ("upgrade", 0.4, 0.3),
    ("upgraded", 0.4, 0.3),
    ("bullish", 0.6, 0.6),
    ("optimistic", 0.5, 0.7),
    ("robust", 0.4, 0.5),
    ("success", 0.3, 0.3),
    ("successful", 0.75, 0.95),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("win", 0.8, 0.4),
    ("boost", 0.35, 0.3),
    ("innovative", 0.5, 0.6),
    ("impressive", 1.0, 1.0),
    ("happy", 0.8, 1.0),
    ("new", 0.14, 0.45),
    // Negative
    ("bad", -0.7, 0.67),
    ("poor", -0.4, 0.6),
    ("weak", -0.38, 0.63),
    ("weaker", -0.4, 0.6),
    ("negative", -0.3, 0.4),
    ("loss", -0.4, 0.3),
    ("losses", -0.4, 0.3),
    ("fall", -0.3, 0.3),
    ("fell", -0.3, 0.3),
    ("drop", -0.3, 0.3),
    ("dropped", -0.3, 0.3),
    ("plunge", -0.6, 0.5),
    ("plunged", -0.6, 0.5),
    ("crash", -0.7, 0.6),
    ("slump", -0.5, 0.4),
    ("miss", -0.35, 0.3),
    ("missed", -0.35, 0.3),
    ("downgrade", -0.4, 0.3),
    ("downgraded", -0.4, 0.3),
    ("bearish", -0.6, 0.6),
    ("pessimistic", -0.5, 0.7),
    ("decline", -0.3, 0.3),
    ("declined", -0.3, 0.3),
    ("lawsuit", -0.4, 0.3),
    ("fraud", -0.8, 0.6),
    ("bankruptcy", -0.8, 0.4),
    ("layoffs", -0.5, 0.4),
    ("recession", -0.5, 0.4),
    ("risk", -0.2, 0.4),
    ("risky", -0.5, 0.6),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("terrible", -1.0, 1.0),
    ("volatile", -0.2, 0.5),
    ("uncertain", -0.2, 0.6),
    ("concern", -0.3, 0.4),
    ("concerns", -0.3, 0.4),
    ("warning", -0.4, 0.4),
];

/// Multipliers applied to the next lexicon word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("highly", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("remarkably", 1.3),
    ("sharply", 1.3),
    ("slightly", 0.7),
    ("somewhat", 0.8),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "without", "hardly", "cannot",
];

/// Factor applied to a negated word's polarity.
const NEGATION_FACTOR: f64 = -0.5;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("valid word regex"));

/// The default [`SentimentScorer`], backed by a built-in finance lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> Sentiment {
        lexicon_sentiment(text)
    }
}

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|&(_, polarity, subjectivity)| (polarity, subjectivity))
}

fn intensity(word: &str) -> Option<f64> {
    INTENSIFIERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|&(_, factor)| factor)
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't")
}

/// Scores `text` as the mean polarity and mean subjectivity of the lexicon
/// words it contains.
///
/// A negation before a word flips and halves its polarity; an intensifier
/// scales both components. Text with no lexicon words scores `0.0 / 0.0`.
#[must_use]
pub fn lexicon_sentiment(text: &str) -> Sentiment {
    let normalised = text.to_lowercase().replace('\u{2019}', "'");

    let mut polarity_sum = 0.0_f64;
    let mut subjectivity_sum = 0.0_f64;
    let mut matched = 0_u32;
    let mut negated = false;
    let mut factor = 1.0_f64;

    for token in WORD.find_iter(&normalised).map(|m| m.as_str()) {
        if is_negation(token) {
            negated = true;
            continue;
        }
        if let Some(f) = intensity(token) {
            factor *= f;
            continue;
        }
        if let Some((polarity, subjectivity)) = lookup(token) {
            let mut polarity = polarity * factor;
            if negated {
                polarity *= NEGATION_FACTOR;
            }
            polarity_sum += polarity.clamp(-1.0, 1.0);
            subjectivity_sum += (subjectivity * factor).clamp(0.0, 1.0);
            matched += 1;
        }
        negated = false;
        factor = 1.0;
    }

    if matched == 0 {
        return Sentiment {
            polarity: 0.0,
            subjectivity: 0.0,
        };
    }

    let n = f64::from(matched);
    Sentiment {
        polarity: (polarity_sum / n).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
    }
}
