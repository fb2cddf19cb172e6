use axum::{
    extract::{Path, State},
    Extension, Json,
};
use quotegate_core::Article;
use quotegate_sentiment::{summarize, SentimentError, SentimentSummary};

use crate::middleware::RequestId;

use super::{map_provider_error, ApiError, AppState, NO_ANALYZABLE_CONTENT};

const FETCH_FAILED: &str = "Unable to fetch articles or no articles found";
const NOTHING_TO_ANALYZE: &str = "No articles found with descriptions for sentiment analysis";

pub(super) async fn list_articles(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(keyword): Path<String>,
) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state
        .newsapi
        .everything(&keyword)
        .await
        .map_err(|e| map_provider_error(req_id.0, &e, FETCH_FAILED))?;
    Ok(Json(articles))
}

pub(super) async fn keyword_sentiment(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(keyword): Path<String>,
) -> Result<Json<SentimentSummary>, ApiError> {
    let mut articles = state
        .newsapi
        .everything(&keyword)
        .await
        .map_err(|e| map_provider_error(req_id.0.clone(), &e, FETCH_FAILED))?;

    match summarize(&mut articles, state.scorer.as_ref()) {
        Ok(summary) => {
            tracing::info!(
                keyword = %keyword,
                analyzed = summary.analyzed_articles,
                overall = %summary.overall_sentiment,
                "keyword sentiment computed"
            );
            Ok(Json(summary))
        }
        Err(SentimentError::NoAnalyzableContent) => Err(ApiError::new(
            req_id.0,
            NO_ANALYZABLE_CONTENT,
            NOTHING_TO_ANALYZE,
        )),
    }
}
