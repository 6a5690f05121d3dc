//! Validation gate: raw request fields in, a complete [`ClinicalContext`]
//! out, or a `Validation` error naming the first missing field. No partial
//! contexts are ever returned, and nothing downstream (including the
//! provider client) runs before this gate passes.

use std::str::FromStr;

use crate::models::{ClinicalContext, Gender, Species};
use crate::pipeline::DiagnosticError;

/// Raw, untrusted fields of a diagnosis request. The standard route fills
/// `species` and the scalar fields from the resolved animal profile; the
/// quick-check route takes them straight from the request body.
#[derive(Debug, Clone, Default)]
pub struct RawDiagnoseInput {
    pub species: Option<String>,
    pub breed: Option<String>,
    pub age_years: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<String>,
    pub symptoms: Vec<String>,
    pub duration: Option<String>,
    pub additional_notes: Option<String>,
}

/// First gate for the animal-backed diagnose route, checked before the
/// animal store is even consulted: the request must reference an animal and
/// carry at least one symptom.
pub fn validate_animal_request(
    animal_id: Option<&str>,
    symptoms: &[String],
) -> Result<(), DiagnosticError> {
    match animal_id {
        Some(id) if !id.trim().is_empty() => {}
        _ => return Err(DiagnosticError::Validation("Animal ID is required".into())),
    }
    if non_empty_symptoms(symptoms).is_empty() {
        return Err(DiagnosticError::Validation(
            "At least one symptom is required for diagnosis".into(),
        ));
    }
    Ok(())
}

/// Build a validated clinical context from raw fields.
///
/// Check order is fixed: missing/empty symptoms first, then missing or
/// unrecognized species. Optional scalars that fail to parse are dropped
/// rather than failing the request.
pub fn build_clinical_context(
    input: RawDiagnoseInput,
) -> Result<ClinicalContext, DiagnosticError> {
    let symptoms = non_empty_symptoms(&input.symptoms);
    if symptoms.is_empty() {
        return Err(DiagnosticError::Validation(
            "At least one symptom is required for diagnosis".into(),
        ));
    }

    let species = match input.species.as_deref().map(str::trim) {
        Some(s) if !s.is_empty() => Species::from_str(s)
            .map_err(|e| DiagnosticError::Validation(e.to_string()))?,
        _ => return Err(DiagnosticError::Validation("Species is required".into())),
    };

    Ok(ClinicalContext {
        species,
        breed: input.breed.filter(|b| !b.trim().is_empty()),
        age_years: input.age_years,
        weight_kg: input.weight_kg,
        gender: input.gender.as_deref().and_then(|g| Gender::from_str(g).ok()),
        symptoms,
        duration: input.duration.filter(|d| !d.trim().is_empty()),
        additional_notes: input.additional_notes.filter(|n| !n.trim().is_empty()),
    })
}

fn non_empty_symptoms(symptoms: &[String]) -> Vec<String> {
    symptoms
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
