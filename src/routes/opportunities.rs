use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{
    match_tier, notification_enabled, priority_level, score_validated, validate_opportunity, Matcher,
};
use crate::core::urgency::days_until;
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, ScoreRequest, ScoreResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all opportunity-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/opportunities/rank", web::post().to(rank_opportunities))
        .route("/opportunities/score", web::post().to(score_opportunity));
}

fn validation_failed(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank opportunities endpoint
///
/// POST /api/v1/opportunities/rank
///
/// Request body:
/// ```json
/// {
///   "profile": { "academicStatus": "undergraduate", "interests": ["STEM"] },
///   "opportunities": [{ "id": "string", "amount": 1000, "deadline": "2026-05-01" }],
///   "today": "2026-03-01",
///   "limit": 20
/// }
/// ```
async fn rank_opportunities(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: field_errors={:?}", errors);
        return validation_failed(errors.to_string());
    }

    let max_opportunities = state.matching.max_opportunities;
    if req.opportunities.len() > max_opportunities {
        return validation_failed(format!(
            "At most {} opportunities can be ranked per request, got {}",
            max_opportunities,
            req.opportunities.len()
        ));
    }

    let RankRequest { profile, opportunities, today, limit } = req.into_inner();
    let today = today.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let limit = limit.unwrap_or(state.matching.default_limit) as usize;

    tracing::info!(
        "Ranking {} opportunities for {:?} candidate, limit: {}",
        opportunities.len(),
        profile.academic_status,
        limit
    );

    // Large batches are CPU-bound; keep them off the async workers
    let matcher = state.matcher.clone();
    let result = match tokio::task::spawn_blocking(move || {
        matcher.rank(&profile, opportunities, today, Some(limit))
    })
    .await
    {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Ranking task failed: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Ranking failed".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let response = RankResponse {
        ranking_id: uuid::Uuid::new_v4().to_string(),
        total_value: result.ranked.iter().map(|r| r.opportunity.amount).sum(),
        results: result.ranked,
        excluded: result.excluded,
        total_opportunities: result.total_opportunities,
        below_threshold: result.below_threshold,
    };

    tracing::info!(
        "Returning {} ranked opportunities (from {}, {} excluded)",
        response.results.len(),
        response.total_opportunities,
        response.excluded.len()
    );

    HttpResponse::Ok().json(response)
}

/// Score a single opportunity endpoint
///
/// POST /api/v1/opportunities/score
///
/// Returns the full component breakdown, including for ineligible or
/// below-threshold opportunities, so clients can show why something ranks
/// where it does.
async fn score_opportunity(req: web::Json<ScoreRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors.to_string());
    }

    let today = req.today.unwrap_or_else(|| chrono::Utc::now().date_naive());

    let deadline = match validate_opportunity(&req.opportunity) {
        Ok(deadline) => deadline,
        Err(e) => {
            tracing::warn!(opportunity_id = %req.opportunity.id, "Cannot score opportunity: {}", e);
            return HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Invalid opportunity".to_string(),
                message: e.to_string(),
                status_code: 422,
            });
        }
    };

    let score = score_validated(&req.profile, &req.opportunity, deadline, today);
    let days = days_until(deadline, today);

    HttpResponse::Ok().json(ScoreResponse {
        opportunity_id: req.opportunity.id.clone(),
        match_tier: match_tier(score.total),
        priority_level: priority_level(score.total, req.opportunity.amount, days),
        notification_enabled: notification_enabled(score.total),
        days_until_deadline: days,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState {
            matcher: Matcher::new(100),
            matching: MatchingSettings::default(),
        })
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
    }

    #[actix_web::test]
    async fn test_rank_endpoint() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let body = json!({
            "profile": {
                "academicStatus": "undergraduate",
                "interests": ["STEM"],
                "financialNeed": 10000,
                "motivation": ["scholarships"],
                "timeCommitment": "flexible"
            },
            "opportunities": [
                { "id": "stem-1", "amount": 10000, "deadline": "2026-04-15", "tags": ["STEM", "undergraduate"] },
                { "id": "broken", "amount": 500, "deadline": "not a date" }
            ],
            "today": "2026-03-01"
        });
        let req = test::TestRequest::post().uri("/opportunities/rank").set_json(&body).to_request();
        let resp: RankResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_opportunities, 2);
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].opportunity.id, "stem-1");
        assert_eq!(resp.results[0].score.total, 82);
        assert_eq!(resp.excluded[0].opportunity_id, "broken");
        assert_eq!(resp.total_value, 10000.0);
    }

    #[actix_web::test]
    async fn test_rank_keeps_batch_with_null_deadline() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let body = json!({
            "profile": { "academicStatus": "undergraduate", "interests": ["STEM"] },
            "opportunities": [
                { "id": "stem-1", "amount": 10000, "deadline": "2026-04-15", "tags": ["STEM"] },
                { "id": "no-deadline", "amount": 500, "deadline": null },
                { "id": "odd-amount", "amount": "a lot", "deadline": "2026-04-15" }
            ],
            "today": "2026-03-01"
        });
        let req = test::TestRequest::post().uri("/opportunities/rank").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let resp: RankResponse = test::read_body_json(resp).await;
        assert_eq!(resp.total_opportunities, 3);
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].opportunity.id, "stem-1");

        let excluded: Vec<&str> = resp.excluded.iter().map(|e| e.opportunity_id.as_str()).collect();
        assert_eq!(excluded, vec!["no-deadline", "odd-amount"]);
        assert!(resp.excluded[0].reason.contains("missing deadline"));
    }

    #[actix_web::test]
    async fn test_rank_rejects_invalid_gpa() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let body = json!({
            "profile": { "academicStatus": "graduate", "gpa": 5.2 },
            "opportunities": []
        });
        let req = test::TestRequest::post().uri("/opportunities/rank").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_score_endpoint_reports_bad_deadline() {
        let app = test::init_service(App::new().configure(configure)).await;
        let body = json!({
            "profile": { "academicStatus": "undergraduate" },
            "opportunity": { "id": "x", "amount": 100, "deadline": "31/02/2026" }
        });
        let req = test::TestRequest::post().uri("/opportunities/score").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 422);
    }

    #[actix_web::test]
    async fn test_score_endpoint_breakdown() {
        let app = test::init_service(App::new().configure(configure)).await;
        let body = json!({
            "profile": { "academicStatus": "undergraduate", "motivation": ["urgent-funding"] },
            "opportunity": { "id": "x", "amount": 100, "deadline": "2026-03-04" },
            "today": "2026-03-01"
        });
        let req = test::TestRequest::post().uri("/opportunities/score").set_json(&body).to_request();
        let resp: ScoreResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.score.urgency, 20);
        assert_eq!(resp.days_until_deadline, 3);
    }

    #[actix_web::test]
    async fn test_score_endpoint_accepts_timestamp_deadline() {
        let app = test::init_service(App::new().configure(configure)).await;
        let body = json!({
            "profile": { "academicStatus": "undergraduate" },
            "opportunity": { "id": "x", "amount": 100, "deadline": "2026-03-11T23:59:00-05:00" },
            "today": "2026-03-01"
        });
        let req = test::TestRequest::post().uri("/opportunities/score").set_json(&body).to_request();
        let resp: ScoreResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.days_until_deadline, 10);
        assert_eq!(resp.notification_enabled, resp.score.total >= 70);
    }

    #[actix_web::test]
    async fn test_score_endpoint_reports_missing_deadline() {
        let app = test::init_service(App::new().configure(configure)).await;
        let body = json!({
            "profile": { "academicStatus": "undergraduate" },
            "opportunity": { "id": "x", "amount": 100 }
        });
        let req = test::TestRequest::post().uri("/opportunities/score").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 422);
    }
}
