//! Response validation and normalization: raw provider text in, a fully
//! populated [`DiagnosisResult`] out, or a parse error. Missing field groups
//! default to empty; `urgency` is enforced against the closed enum; the
//! `analyzed_at` and `model` stamps always come from the call site, never
//! from the provider.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{
    CareRecommendations, DiagnosisResult, MedicationSuggestion, PossibleCondition, Urgency,
};
use crate::pipeline::DiagnosticError;

/// Disclaimer attached when the provider omits one.
pub const DEFAULT_DISCLAIMER: &str = "This is AI-generated advice and should not \
replace professional veterinary consultation.";

/// Disclaimer attached when a care-recommendations response omits one.
pub const CARE_DISCLAIMER: &str = "Always consult with a veterinarian for proper \
diagnosis and treatment.";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDiagnosis {
    #[serde(default)]
    possible_conditions: Vec<serde_json::Value>,
    #[serde(default)]
    recommended_actions: Vec<serde_json::Value>,
    #[serde(default)]
    warning_signs_to_watch: Vec<serde_json::Value>,
    #[serde(default)]
    home_care_tips: Vec<serde_json::Value>,
    #[serde(default)]
    medications: Vec<serde_json::Value>,
    urgency: Option<String>,
    #[serde(default)]
    should_see_vet: bool,
    timeframe: Option<String>,
    disclaimer: Option<String>,
}

/// Parse and normalize a diagnosis response.
///
/// `model` and `now` are stamped onto the result unconditionally, so the two
/// metadata fields are never provider-controlled.
pub fn parse_diagnosis(
    raw: &str,
    model: &str,
    now: DateTime<Utc>,
) -> Result<DiagnosisResult, DiagnosticError> {
    let json_str = strip_code_fences(raw);
    let parsed: RawDiagnosis = serde_json::from_str(json_str)
        .map_err(|e| DiagnosticError::MalformedResponse(e.to_string()))?;

    let urgency_str = parsed
        .urgency
        .ok_or_else(|| DiagnosticError::JsonParsing("missing urgency".into()))?;
    let urgency = Urgency::from_str(urgency_str.trim())
        .map_err(|e| DiagnosticError::JsonParsing(e.to_string()))?;

    Ok(DiagnosisResult {
        possible_conditions: parse_items_lenient::<PossibleCondition>(&parsed.possible_conditions),
        recommended_actions: string_items(&parsed.recommended_actions),
        warning_signs_to_watch: string_items(&parsed.warning_signs_to_watch),
        home_care_tips: string_items(&parsed.home_care_tips),
        medications: parse_items_lenient::<MedicationSuggestion>(&parsed.medications),
        urgency,
        should_see_vet: parsed.should_see_vet,
        timeframe: parsed.timeframe.unwrap_or_default(),
        disclaimer: parsed
            .disclaimer
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DISCLAIMER.to_string()),
        analyzed_at: now,
        model: model.to_string(),
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCareRecommendations {
    condition: Option<String>,
    species: Option<String>,
    #[serde(default)]
    home_care: Vec<serde_json::Value>,
    #[serde(default)]
    diet_recommendations: Vec<serde_json::Value>,
    activity_guidance: Option<String>,
    #[serde(default)]
    warning_signs_requiring_vet: Vec<serde_json::Value>,
    typical_recovery_time: Option<String>,
    #[serde(default)]
    preventive_measures: Vec<serde_json::Value>,
    disclaimer: Option<String>,
}

/// Parse a care-recommendations response. `species` and `condition` default
/// from the request when the provider echoes them back poorly.
pub fn parse_care_recommendations(
    raw: &str,
    species: &str,
    condition: &str,
) -> Result<CareRecommendations, DiagnosticError> {
    let json_str = strip_code_fences(raw);
    let parsed: RawCareRecommendations = serde_json::from_str(json_str)
        .map_err(|e| DiagnosticError::MalformedResponse(e.to_string()))?;

    Ok(CareRecommendations {
        condition: parsed
            .condition
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| condition.to_string()),
        species: parsed
            .species
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| species.to_string()),
        home_care: string_items(&parsed.home_care),
        diet_recommendations: string_items(&parsed.diet_recommendations),
        activity_guidance: parsed.activity_guidance.unwrap_or_default(),
        warning_signs_requiring_vet: string_items(&parsed.warning_signs_requiring_vet),
        typical_recovery_time: parsed.typical_recovery_time.unwrap_or_default(),
        preventive_measures: string_items(&parsed.preventive_measures),
        disclaimer: parsed
            .disclaimer
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| CARE_DISCLAIMER.to_string()),
    })
}

/// Tolerate a fenced ```json block around the payload. JSON mode usually
/// returns bare JSON, but some models fence it anyway.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    if let Some(start) = trimmed.find("```json") {
        let content = &trimmed[start + 7..];
        if let Some(end) = content.find("```") {
            return content[..end].trim();
        }
        return content.trim();
    }
    trimmed
}

/// Parse array items leniently — skip entries that fail to deserialize.
fn parse_items_lenient<T: for<'de> Deserialize<'de>>(items: &[serde_json::Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}

/// Keep only non-empty string entries of a string-sequence field.
fn string_items(items: &[serde_json::Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
