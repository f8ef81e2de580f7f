use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ErrorResponse, StudentProfile};
use crate::routes::AppState;
use crate::services::DatasetError;

/// Configure stored-profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile/{student_id}")
            .route(web::get().to(get_profile))
            .route(web::put().to(update_profile))
            .route(web::delete().to(delete_profile)),
    );
}

/// Fetch a stored student profile
///
/// GET /api/v1/profile/{student_id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let student_id = path.into_inner();

    match state.store.get_student(&student_id).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => student_error_response(&student_id, e),
    }
}

/// Replace a stored student profile
///
/// PUT /api/v1/profile/{student_id}
///
/// The body is a full profile. Any id in the body is ignored in favour
/// of the path.
async fn update_profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    profile: web::Json<StudentProfile>,
) -> impl Responder {
    let student_id = path.into_inner();

    if let Err(errors) = profile.validate() {
        tracing::info!("Validation failed for profile {}: field_errors={:?}", student_id, errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.store.update_student(&student_id, profile.into_inner()).await {
        Ok(updated) => {
            tracing::info!("Updated profile for student: {}", student_id);
            HttpResponse::Ok().json(updated)
        }
        Err(e) => student_error_response(&student_id, e),
    }
}

/// Remove a stored student profile
///
/// DELETE /api/v1/profile/{student_id}
async fn delete_profile(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let student_id = path.into_inner();

    match state.store.delete_student(&student_id).await {
        Ok(_) => {
            tracing::info!("Deleted profile for student: {}", student_id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => student_error_response(&student_id, e),
    }
}

/// Map a store error for a student lookup onto an HTTP response
pub(crate) fn student_error_response(student_id: &str, err: DatasetError) -> HttpResponse {
    match &err {
        DatasetError::NotFound(_) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Student not found".to_string(),
            message: err.to_string(),
            status_code: 404,
        }),
        _ => {
            tracing::error!("Failed to fetch student {}: {}", student_id, err);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch student".to_string(),
                message: err.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RecommendationSettings;
    use crate::core::Recommender;
    use crate::services::DatasetStore;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn create_state() -> AppState {
        let student = StudentProfile {
            id: Some("s1".to_string()),
            name: Some("Asha".to_string()),
            skills: vec!["rust".to_string()],
            ..Default::default()
        };

        AppState {
            store: Arc::new(DatasetStore::new(vec![], vec![student])),
            recommender: Recommender::with_default_weights(),
            recommendation: RecommendationSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_get_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/profile/s1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["skills"], json!(["rust"]));

        let req = test::TestRequest::get().uri("/profile/missing").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_update_profile() {
        let state = web::Data::new(create_state());
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/profile/s1")
            .set_json(json!({ "skills": ["Go"], "preferred_locations": ["Remote"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let stored = state.store.get_student("s1").await.unwrap();
        assert_eq!(stored.skills, vec!["Go".to_string()]);
        assert_eq!(stored.id.as_deref(), Some("s1"));
        assert_eq!(stored.name, None);
    }

    #[actix_web::test]
    async fn test_update_profile_rejects_invalid_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/profile/s1")
            .set_json(json!({ "max_duration_months": 0 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_update_unknown_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/profile/ghost")
            .set_json(json!({ "skills": ["Go"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_delete_profile() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::delete().uri("/profile/s1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);

        let req = test::TestRequest::get().uri("/profile/s1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::delete().uri("/profile/s1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
