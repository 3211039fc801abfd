use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;
use std::sync::Arc;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::{resolve_weights, summarize, RankOutcome, Ranker};
use crate::models::{
    Candidate, CandidateOptions, CandidateQuery, CandidateWeights, HealthResponse, QueryText,
    RankRequest, RankResponse, RankedCandidate, SummaryRequest,
};
use crate::routes::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
    pub max_candidates: usize,
}

impl AppState {
    pub fn new(ranker: Ranker, max_candidates: usize) -> Self {
        Self {
            ranker,
            max_candidates,
        }
    }

    fn check_pool_size(&self, count: usize) -> Result<(), ApiError> {
        if count > self.max_candidates {
            return Err(ApiError::TooManyCandidates {
                count,
                limit: self.max_candidates,
            });
        }
        Ok(())
    }

    /// A result limit may not exceed the pool size limit; 0 means unbounded
    fn check_max_results(&self, max_results: Option<usize>) -> Result<(), ApiError> {
        if max_results.is_some_and(|n| n > self.max_candidates) {
            let mut errors = ValidationErrors::new();
            let mut error = ValidationError::new("max_results_exceeds_limit");
            error.add_param("limit".into(), &self.max_candidates);
            errors.add("options", error);
            return Err(ApiError::Validation(errors));
        }
        Ok(())
    }
}

/// Scoring job run on the blocking pool for a rank request
type RankJob = fn(&Ranker, &[Candidate], &CandidateQuery, &CandidateWeights, &CandidateOptions) -> RankOutcome;

fn run_ranker(
    ranker: &Ranker,
    candidates: &[Candidate],
    query: &CandidateQuery,
    weights: &CandidateWeights,
    options: &CandidateOptions,
) -> RankOutcome {
    ranker.rank(candidates, query, weights, options)
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/candidates/rank", web::post().to(rank))
        .route("/candidates/summary", web::post().to(summary))
        .route("/query/parse", web::post().to(parse_query));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank candidates endpoint
///
/// POST /api/v1/candidates/rank
///
/// Request body:
/// ```json
/// {
///   "candidates": [{"name": "string", "email": "string", "skills": ["string"]}],
///   "query": {"skills": ["string"], "budgetRange": {"min": 0, "max": 150000}},
///   "weights": {"skills": 40, "experience": 25},
///   "options": {"maxResults": 10, "minScore": 0, "caseSensitive": false}
/// }
/// ```
///
/// Scoring runs on the blocking pool. If it fails, the candidates come back
/// unranked in input order with `"ranked": false`.
async fn rank(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> Result<HttpResponse, ApiError> {
    rank_with(state, req, run_ranker).await
}

async fn rank_with(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
    job: RankJob,
) -> Result<HttpResponse, ApiError> {
    req.validate().map_err(|errors| {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        ApiError::from(errors)
    })?;
    state.check_pool_size(req.candidates.len())?;
    state.check_max_results(req.options.max_results)?;

    let request_id = uuid::Uuid::new_v4().to_string();
    let options = req.engine_options();
    let RankRequest {
        candidates,
        query,
        weights,
        ..
    } = req.into_inner();

    tracing::info!(
        "Ranking {} candidates (request: {})",
        candidates.len(),
        request_id
    );

    let pool = Arc::new(candidates);
    let shared = Arc::clone(&pool);
    let ranker = state.ranker.clone();

    let outcome = web::block(move || job(&ranker, &shared, &query, &weights, &options)).await;

    let response = match outcome {
        Ok(outcome) => ranked_response(request_id, outcome),
        Err(e) => {
            tracing::error!("Ranking failed for request {}, returning unranked pool: {}", request_id, e);
            let limit = options.max_results.unwrap_or(pool.len());
            RankResponse {
                request_id,
                ranked: false,
                results: unranked(&pool, limit),
                total_candidates: pool.len(),
                weights: resolve_weights(&weights, state.ranker.defaults()),
                warnings: vec![],
            }
        }
    };

    tracing::info!(
        "Returning {} results for request {} (from {} candidates)",
        response.results.len(),
        response.request_id,
        response.total_candidates
    );

    Ok(HttpResponse::Ok().json(response))
}

fn ranked_response(request_id: String, outcome: RankOutcome) -> RankResponse {
    RankResponse {
        request_id,
        ranked: true,
        results: outcome.results,
        total_candidates: outcome.total_candidates,
        weights: outcome.weights,
        warnings: outcome.warning.iter().map(|w| w.to_string()).collect(),
    }
}

/// Input order, no scores: what a caller shows when ranking is unavailable
fn unranked(pool: &[Candidate], limit: usize) -> Vec<RankedCandidate> {
    pool.iter()
        .take(limit)
        .map(|candidate| RankedCandidate {
            candidate: candidate.clone(),
            ranking_score: 0.0,
            score_breakdown: BTreeMap::new(),
            matched_criteria: vec![],
        })
        .collect()
}

/// Candidate pool summary endpoint
///
/// POST /api/v1/candidates/summary
async fn summary(
    state: web::Data<AppState>,
    req: web::Json<SummaryRequest>,
) -> Result<HttpResponse, ApiError> {
    state.check_pool_size(req.candidates.len())?;

    let candidates = req.into_inner().candidates;
    let summary = web::block(move || summarize(&candidates)).await?;

    tracing::debug!("Summarized {} candidates", summary.total_candidates);

    Ok(HttpResponse::Ok().json(summary))
}

/// Build a structured query from comma-separated search form fields
///
/// POST /api/v1/query/parse
async fn parse_query(req: web::Json<QueryText>) -> impl Responder {
    HttpResponse::Ok().json(req.into_inner().into_query())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body, http::StatusCode};
    use serde_json::{json, Value};

    fn crashing_job(
        _: &Ranker,
        _: &[Candidate],
        _: &CandidateQuery,
        _: &CandidateWeights,
        _: &CandidateOptions,
    ) -> RankOutcome {
        panic!("scoring worker crashed");
    }

    fn rank_request(count: usize, max_results: usize) -> web::Json<RankRequest> {
        let candidates: Vec<Value> = (0..count)
            .map(|i| json!({"name": format!("User {}", i), "email": format!("user{}@example.com", i), "skills": ["Rust"]}))
            .collect();
        let request = serde_json::from_value(json!({
            "candidates": candidates,
            "query": {"skills": ["Rust"]},
            "options": {"maxResults": max_results}
        }))
        .unwrap();
        web::Json(request)
    }

    #[actix_web::test]
    async fn test_crashed_job_falls_back_to_unranked_pool() {
        let state = web::Data::new(AppState::new(Ranker::default(), 10));

        let resp = rank_with(state, rank_request(3, 2), crashing_job).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = body::to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["ranked"], false);
        assert_eq!(body["totalCandidates"], 3);
        assert_eq!(body["results"].as_array().unwrap().len(), 2);
        assert_eq!(body["results"][0]["email"], "user0@example.com");
        assert_eq!(body["results"][0]["rankingScore"], 0.0);
        assert_eq!(body["weights"]["skills"], 40.0);
    }

    #[actix_web::test]
    async fn test_healthy_job_ranks() {
        let state = web::Data::new(AppState::new(Ranker::default(), 10));

        let resp = rank_with(state, rank_request(3, 0), run_ranker).await.unwrap();

        let bytes = body::to_bytes(resp.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["ranked"], true);
        assert_eq!(body["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_max_results_limit() {
        let state = AppState::new(Ranker::default(), 2);

        assert!(state.check_max_results(None).is_ok());
        assert!(state.check_max_results(Some(0)).is_ok());
        assert!(state.check_max_results(Some(2)).is_ok());
        assert!(matches!(state.check_max_results(Some(3)), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_unranked_keeps_input_order() {
        let pool: Vec<Candidate> = (0..5)
            .map(|i| Candidate::new(format!("User {}", i), format!("user{}@example.com", i)))
            .collect();

        let results = unranked(&pool, 3);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].candidate.email, "user0@example.com");
        assert_eq!(results[2].candidate.email, "user2@example.com");
        assert!(results.iter().all(|r| r.score_breakdown.is_empty() && r.ranking_score == 0.0));
    }

    #[test]
    fn test_pool_size_limit() {
        let state = AppState::new(Ranker::default(), 2);

        assert!(state.check_pool_size(2).is_ok());
        assert!(matches!(
            state.check_pool_size(3),
            Err(ApiError::TooManyCandidates { count: 3, limit: 2 })
        ));
    }
}
