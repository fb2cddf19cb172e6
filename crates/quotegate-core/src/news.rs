use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentiment attached to an article after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// In `[-1.0, 1.0]`; negative is unfavorable.
    pub polarity: f64,
    /// In `[0.0, 1.0]`; 0 is objective.
    pub subjectivity: f64,
}

/// A news item exactly as the upstream provider returned it.
///
/// Every provider field, known or not and whatever its shape, is kept in
/// `fields` and serialized back out unchanged. Typed accessors read the few
/// fields the gateway needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(flatten)]
    fields: Map<String, Value>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    sentiment: Option<Sentiment>,
}

impl From<Map<String, Value>> for Article {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            sentiment: None,
        }
    }
}

impl Article {
    /// Raw provider fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
    }

    /// Description text suitable for scoring, or `None` when absent, empty or
    /// not a string.
    #[must_use]
    pub fn scorable_text(&self) -> Option<&str> {
        self.description().filter(|d| !d.is_empty())
    }

    #[must_use]
    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    /// Attaches a score, replacing any `sentiment` key the provider sent.
    pub fn attach_sentiment(&mut self, sentiment: Sentiment) {
        self.fields.remove("sentiment");
        self.sentiment = Some(sentiment);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn newsapi_article() -> Value {
        json!({
            "source": { "id": "reuters", "name": "Reuters", "country": "us" },
            "author": "Jane Doe",
            "title": "Chipmaker beats estimates",
            "description": "Shares rose after strong results.",
            "url": "https://example.com/a",
            "urlToImage": null,
            "publishedAt": "2024-05-01T12:00:00Z",
            "content": "Full text",
            "rank": 3
        })
    }

    #[test]
    fn article_round_trips_provider_json_exactly() {
        for input in [
            newsapi_article(),
            json!({ "source": { "id": "reuters", "name": "Reuters", "country": "us" }, "title": "t" }),
            json!({ "title": "only a title" }),
        ] {
            let article: Article = serde_json::from_value(input.clone()).expect("parse");
            let output = serde_json::to_value(&article).expect("serialize");
            assert_eq!(output, input);
        }
    }

    #[test]
    fn unexpected_field_shapes_are_tolerated() {
        let input = json!({
            "source": "Reuters",
            "author": 42,
            "description": "Markets rallied"
        });
        let article: Article = serde_json::from_value(input.clone()).expect("parse");

        assert_eq!(article.scorable_text(), Some("Markets rallied"));
        assert_eq!(serde_json::to_value(&article).expect("serialize"), input);
    }

    #[test]
    fn accessors_read_provider_fields() {
        let article: Article = serde_json::from_value(newsapi_article()).expect("parse");
        assert_eq!(article.title(), Some("Chipmaker beats estimates"));
        assert_eq!(
            article.description(),
            Some("Shares rose after strong results.")
        );
        assert_eq!(article.fields()["rank"], 3);
        assert!(article.sentiment().is_none());
    }

    #[test]
    fn attached_sentiment_is_serialized() {
        let mut article: Article = serde_json::from_value(newsapi_article()).expect("parse");
        article.attach_sentiment(Sentiment {
            polarity: 0.25,
            subjectivity: 0.5,
        });
        let json = serde_json::to_value(&article).expect("serialize");
        assert_eq!(json["sentiment"]["polarity"], 0.25);
        assert_eq!(json["sentiment"]["subjectivity"], 0.5);
        assert_eq!(json["title"], "Chipmaker beats estimates");
    }

    #[test]
    fn attached_sentiment_replaces_provider_key() {
        let mut article: Article =
            serde_json::from_value(json!({ "description": "d", "sentiment": "n/a" }))
                .expect("parse");
        article.attach_sentiment(Sentiment {
            polarity: -0.1,
            subjectivity: 0.2,
        });

        assert!(!article.fields().contains_key("sentiment"));
        let text = serde_json::to_string(&article).expect("serialize");
        assert_eq!(text.matches("\"sentiment\"").count(), 1, "got {text}");
    }

    #[test]
    fn scorable_text_skips_missing_empty_and_non_string_descriptions() {
        let parse = |v: Value| -> Article { serde_json::from_value(v).expect("parse") };

        assert_eq!(parse(json!({ "title": "t" })).scorable_text(), None);
        assert_eq!(parse(json!({ "description": null })).scorable_text(), None);
        assert_eq!(parse(json!({ "description": "" })).scorable_text(), None);
        assert_eq!(parse(json!({ "description": 7 })).scorable_text(), None);
        assert_eq!(
            parse(json!({ "description": "Markets rallied" })).scorable_text(),
            Some("Markets rallied")
        );
    }
}
