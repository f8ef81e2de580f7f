use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::RecommendationSettings;
use crate::core::{RecommendError, Recommender};
use crate::models::{
    ErrorResponse, HealthResponse, RandomInternshipsQuery, RecommendRequest, RecommendResponse,
    StudentProfile, TopKQuery,
};
use crate::routes::profiles::student_error_response;
use crate::services::DatasetStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DatasetStore>,
    pub recommender: Recommender,
    pub recommendation: RecommendationSettings,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/internships/random", web::get().to(random_internships))
        .route("/recommendations", web::post().to(recommend_for_profile))
        .route("/recommendations/{student_id}", web::get().to(recommend_for_student));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let loaded = state.store.internship_count();
    let status = if loaded > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        internships_loaded: loaded,
    })
}

/// Random listings for the landing page
///
/// GET /api/v1/internships/random?count=5
async fn random_internships(
    state: web::Data<AppState>,
    query: web::Query<RandomInternshipsQuery>,
) -> impl Responder {
    let count = query.count.min(state.recommendation.max_top_k);
    HttpResponse::Ok().json(state.store.random_internships(count))
}

/// Recommend listings for an inline profile
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "profile": {
///     "skills": ["Python"],
///     "preferred_locations": ["Remote"],
///     "min_expected_stipend": 0,
///     "max_duration_months": 12,
///     "preferred_intern_types": []
///   },
///   "topK": 5
/// }
/// ```
async fn recommend_for_profile(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let top_k = state.recommendation.resolve_top_k(req.top_k);
    respond_with_recommendations(&state, &req.profile, top_k)
}

/// Recommend listings for a stored student profile
///
/// GET /api/v1/recommendations/{student_id}?topK=5
async fn recommend_for_student(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<TopKQuery>,
) -> impl Responder {
    let student_id = path.into_inner();

    let profile = match state.store.get_student(&student_id).await {
        Ok(profile) => profile,
        Err(e) => return student_error_response(&student_id, e),
    };

    let top_k = state.recommendation.resolve_top_k(query.top_k);
    tracing::info!("Finding recommendations for student: {}, top_k: {}", student_id, top_k);

    respond_with_recommendations(&state, &profile, top_k)
}

fn respond_with_recommendations(
    state: &AppState,
    profile: &StudentProfile,
    top_k: usize,
) -> HttpResponse {
    match state.recommender.recommend(profile, state.store.internships(), top_k) {
        Ok(result) => {
            tracing::info!(
                "Returning {} recommendations (from {} listings)",
                result.internships.len(),
                result.total_records
            );

            HttpResponse::Ok().json(RecommendResponse {
                total_results: result.internships.len(),
                recommendations: result.internships,
            })
        }
        Err(e @ RecommendError::InvalidProfile(_)) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid profile".to_string(),
            message: e.to_string(),
            status_code: 400,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InternshipRecord;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn listing(role: &str, location: &str, skills: &str) -> InternshipRecord {
        InternshipRecord {
            role: Some(role.into()),
            company_name: Some("Acme".into()),
            location: Some(location.into()),
            skills: Some(skills.into()),
            ..Default::default()
        }
    }

    fn create_state() -> AppState {
        let student = StudentProfile {
            id: Some("s1".to_string()),
            skills: vec!["rust".to_string()],
            ..Default::default()
        };

        AppState {
            store: Arc::new(DatasetStore::new(
                vec![
                    listing("Rust Intern", "Pune", "Rust, Tokio"),
                    listing("Remote Intern", "Remote", "Go"),
                    listing("Design Intern", "Mumbai", "Figma"),
                ],
                vec![student],
            )),
            recommender: Recommender::with_default_weights(),
            recommendation: RecommendationSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_recommend_inline_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations")
            .set_json(json!({
                "profile": { "skills": ["Rust"], "preferred_locations": ["remote"] },
                "topK": 5
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let roles: Vec<&str> = body["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["Role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["Remote Intern", "Rust Intern"]);
        assert!(body["recommendations"][0].get("score").is_none());
    }

    #[actix_web::test]
    async fn test_recommend_invalid_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/recommendations")
            .set_json(json!({ "profile": { "max_duration_months": 0 } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_recommend_stored_student() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/recommendations/s1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_results"], 1);
        assert_eq!(body["recommendations"][0]["Role"], "Rust Intern");

        let req = test::TestRequest::get().uri("/recommendations/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_random_internships() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/internships/random?count=2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.internships_loaded, 3);
    }
}
