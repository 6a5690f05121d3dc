//! Shared types for the AI API layer: request/response DTOs, the external
//! animal-store collaborator seam, and the router state.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{DiagnosisResult, Gender, HealthRecordDraft, Species};
use crate::pipeline::DiagnosticService;

/// Shared state for all AI routes.
#[derive(Clone)]
pub struct ApiContext {
    pub service: Arc<DiagnosticService>,
    pub animals: Arc<dyn AnimalDirectory>,
}

/// The animal store is an external collaborator; this seam is how the
/// diagnose route resolves an animal reference into a patient profile.
#[async_trait]
pub trait AnimalDirectory: Send + Sync {
    async fn find(&self, animal_id: &str) -> Option<AnimalProfile>;
}

/// Patient profile as resolved from the animal store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalProfile {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub age_years: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<Gender>,
}

/// In-memory directory, for tests and single-process demo deployments.
#[derive(Default)]
pub struct InMemoryAnimalDirectory {
    animals: HashMap<String, AnimalProfile>,
}

impl InMemoryAnimalDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animal(mut self, profile: AnimalProfile) -> Self {
        self.animals.insert(profile.id.clone(), profile);
        self
    }
}

#[async_trait]
impl AnimalDirectory for InMemoryAnimalDirectory {
    async fn find(&self, animal_id: &str) -> Option<AnimalProfile> {
        self.animals.get(animal_id).cloned()
    }
}

// ── Request bodies ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseRequest {
    pub animal_id: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub additional_info: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub save_to_records: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckRequest {
    pub species: Option<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub additional_info: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub species: String,
    #[serde(default)]
    pub condition: String,
}

// ── Response bodies ─────────────────────────────────────────

/// Slim animal echo on diagnose responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSummary {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
}

impl From<&AnimalProfile> for AnimalSummary {
    fn from(profile: &AnimalProfile) -> Self {
        Self {
            id: profile.id.clone(),
            name: profile.name.clone(),
            species: profile.species,
            breed: profile.breed.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnoseResponse {
    pub diagnosis: DiagnosisResult,
    pub animal: AnimalSummary,
    /// Present when the caller asked for the diagnosis to be saved; the
    /// external health-record collaborator persists it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_record: Option<HealthRecordDraft>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub configured: bool,
    pub available: bool,
    pub model: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AnimalProfile {
        AnimalProfile {
            id: "a1".into(),
            name: "Rex".into(),
            species: Species::Dog,
            breed: Some("Labrador".into()),
            age_years: Some(5.0),
            weight_kg: Some(30.0),
            gender: Some(Gender::Male),
        }
    }

    #[tokio::test]
    async fn in_memory_directory_finds_registered_animal() {
        let directory = InMemoryAnimalDirectory::new().with_animal(profile());
        assert!(directory.find("a1").await.is_some());
        assert!(directory.find("missing").await.is_none());
    }

    #[test]
    fn diagnose_request_deserializes_camel_case() {
        let body = r#"{"animalId": "a1", "symptoms": ["Vomiting"], "saveToRecords": true}"#;
        let request: DiagnoseRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.animal_id.as_deref(), Some("a1"));
        assert!(request.save_to_records);
        assert!(request.additional_info.is_none());
    }

    #[test]
    fn animal_summary_drops_measurements() {
        let summary = AnimalSummary::from(&profile());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["name"], "Rex");
        assert!(json.get("weightKg").is_none());
    }
}
