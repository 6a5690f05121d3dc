//! Deterministic offline diagnosis, used when the upstream provider is
//! unavailable, unauthorized or quota-exhausted. Pure function of species
//! and symptoms; never performs I/O and never fails.

use chrono::{DateTime, Utc};

use crate::config::FALLBACK_MODEL;
use crate::models::{DiagnosisResult, PossibleCondition, Probability, Species, Urgency};

/// Disclaimer carried by every fallback result. Distinct from the normal
/// disclaimer text so callers and UIs can tell a demo result apart.
pub const FALLBACK_DISCLAIMER: &str = "This is a demo diagnosis generated without \
the AI provider. It is not medical advice; please consult a veterinarian for a \
professional assessment.";

/// Build a conservative stand-in diagnosis for the given species and
/// symptoms. Identical inputs produce identical results apart from the
/// caller-supplied timestamp.
pub fn fallback_diagnosis(
    species: Species,
    symptoms: &[String],
    now: DateTime<Utc>,
) -> DiagnosisResult {
    let joined = symptoms.join(", ");

    DiagnosisResult {
        possible_conditions: vec![PossibleCondition {
            name: "General health check recommended".to_string(),
            probability: Probability::Medium,
            description: format!(
                "Based on the reported symptoms ({joined}), a veterinary examination \
                 is recommended to determine the cause.",
            ),
            common_in: Some(format!("{species} (all breeds and ages)")),
        }],
        recommended_actions: vec![
            "Monitor your pet closely for any changes".to_string(),
            "Ensure fresh water is always available".to_string(),
            "Schedule a veterinary appointment".to_string(),
        ],
        warning_signs_to_watch: vec![
            "Symptoms worsening or persisting beyond 24-48 hours".to_string(),
            "Refusal to eat or drink".to_string(),
            "Lethargy or unresponsiveness".to_string(),
        ],
        home_care_tips: vec![
            "Keep your pet comfortable and calm".to_string(),
            "Note any changes in appetite, behavior, or elimination".to_string(),
        ],
        medications: vec![],
        urgency: Urgency::Medium,
        should_see_vet: true,
        timeframe: "within 24-48 hours".to_string(),
        disclaimer: FALLBACK_DISCLAIMER.to_string(),
        analyzed_at: now,
        model: FALLBACK_MODEL.to_string(),
    }
}
