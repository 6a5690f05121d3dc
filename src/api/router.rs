//! AI diagnostic routes.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes live under `/api/ai/`. Authentication is handled by the deployment
//! in front of this router; the handlers here only do input validation and
//! pipeline orchestration.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::error::ApiError;
use crate::api::types::{
    AnimalSummary, ApiContext, DiagnoseRequest, DiagnoseResponse, QuickCheckRequest,
    RecommendationsRequest, StatusResponse,
};
use crate::models::{CareRecommendations, DiagnosisResult};
use crate::pipeline::severity::health_record_draft;
use crate::pipeline::validate::{
    build_clinical_context, validate_animal_request, RawDiagnoseInput,
};

/// Build the AI API router.
pub fn ai_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/api/ai/diagnose", post(diagnose))
        .route("/api/ai/quick-check", post(quick_check))
        .route("/api/ai/recommendations", post(recommendations))
        .route("/api/ai/status", get(status))
        .with_state(ctx)
}

/// POST /api/ai/diagnose — full diagnosis for a stored animal, optionally
/// deriving a health-record draft for the external store.
async fn diagnose(
    State(ctx): State<ApiContext>,
    Json(request): Json<DiagnoseRequest>,
) -> Result<Json<DiagnoseResponse>, ApiError> {
    validate_animal_request(request.animal_id.as_deref(), &request.symptoms)?;
    let animal_id = request.animal_id.as_deref().unwrap_or_default();

    let animal = ctx
        .animals
        .find(animal_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Animal not found".into()))?;

    let clinical = build_clinical_context(RawDiagnoseInput {
        species: Some(animal.species.to_string()),
        breed: animal.breed.clone(),
        age_years: animal.age_years,
        weight_kg: animal.weight_kg,
        gender: animal.gender.map(|g| g.to_string()),
        symptoms: request.symptoms,
        duration: request.duration,
        additional_notes: request.additional_info,
    })?;

    let diagnosis = ctx.service.diagnose(&clinical).await?;
    let health_record = request
        .save_to_records
        .then(|| health_record_draft(&clinical, &diagnosis));

    Ok(Json(DiagnoseResponse {
        animal: AnimalSummary::from(&animal),
        diagnosis,
        health_record,
    }))
}

/// POST /api/ai/quick-check — symptom check without a stored animal and
/// without record derivation.
async fn quick_check(
    State(ctx): State<ApiContext>,
    Json(request): Json<QuickCheckRequest>,
) -> Result<Json<DiagnosisResult>, ApiError> {
    let clinical = build_clinical_context(RawDiagnoseInput {
        species: request.species,
        symptoms: request.symptoms,
        additional_notes: request.additional_info,
        ..Default::default()
    })?;

    let diagnosis = ctx.service.diagnose(&clinical).await?;
    Ok(Json(diagnosis))
}

/// POST /api/ai/recommendations — condition-specific care advice.
async fn recommendations(
    State(ctx): State<ApiContext>,
    Json(request): Json<RecommendationsRequest>,
) -> Result<Json<CareRecommendations>, ApiError> {
    let recs = ctx
        .service
        .get_care_recommendations(&request.species, &request.condition)
        .await?;
    Ok(Json(recs))
}

/// GET /api/ai/status — provider availability for UI short-circuiting.
async fn status(State(ctx): State<ApiContext>) -> Json<StatusResponse> {
    let configured = ctx.service.is_configured();
    Json(StatusResponse {
        configured,
        available: configured,
        model: ctx.service.model().to_string(),
        message: if configured {
            "AI diagnostic service is available".to_string()
        } else {
            "AI service is not configured. Diagnosis requests will return demo results.".to_string()
        },
    })
}
