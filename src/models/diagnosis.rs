use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{MedicationType, Probability, Urgency};

/// One candidate condition from a diagnostic attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossibleCondition {
    pub name: String,
    pub probability: Probability,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_in: Option<String>,
}

/// A medication suggested by the provider. Suggestions are shown to the
/// owner as-is; only OTC entries ever reach a persisted health record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationSuggestion {
    pub name: String,
    #[serde(rename = "type")]
    pub medication_type: MedicationType,
    pub dosage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Structured, typed output of a diagnostic attempt (real or fallback).
///
/// Every sequence field defaults to empty rather than being absent, and
/// `urgency` and `disclaimer` are always populated — the fallback generator
/// honors the same contract. `analyzed_at` and `model` are stamped by the
/// normalizer and never provider-controlled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub possible_conditions: Vec<PossibleCondition>,
    pub recommended_actions: Vec<String>,
    pub warning_signs_to_watch: Vec<String>,
    pub home_care_tips: Vec<String>,
    pub medications: Vec<MedicationSuggestion>,
    pub urgency: Urgency,
    pub should_see_vet: bool,
    pub timeframe: String,
    pub disclaimer: String,
    pub analyzed_at: DateTime<Utc>,
    pub model: String,
}

impl DiagnosisResult {
    /// Short summary for the health-record `diagnosis` field: the top
    /// condition's name, or a generic label when the provider named none.
    pub fn summary(&self) -> String {
        self.possible_conditions
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "AI-assisted diagnosis".to_string())
    }
}

/// Output of the single-shot care-recommendations call. No fallback tier
/// exists for this shape; a parse failure is surfaced to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRecommendations {
    pub condition: String,
    pub species: String,
    pub home_care: Vec<String>,
    pub diet_recommendations: Vec<String>,
    pub activity_guidance: String,
    pub warning_signs_requiring_vet: Vec<String>,
    pub typical_recovery_time: String,
    pub preventive_measures: Vec<String>,
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(name: &str) -> PossibleCondition {
        PossibleCondition {
            name: name.into(),
            probability: Probability::High,
            description: "desc".into(),
            common_in: None,
        }
    }

    #[test]
    fn summary_uses_first_condition() {
        let result = DiagnosisResult {
            possible_conditions: vec![condition("Gastroenteritis"), condition("Pancreatitis")],
            recommended_actions: vec![],
            warning_signs_to_watch: vec![],
            home_care_tips: vec![],
            medications: vec![],
            urgency: Urgency::Medium,
            should_see_vet: true,
            timeframe: "within 24 hours".into(),
            disclaimer: "d".into(),
            analyzed_at: Utc::now(),
            model: "gpt-4o-mini".into(),
        };
        assert_eq!(result.summary(), "Gastroenteritis");
    }

    #[test]
    fn summary_falls_back_when_no_conditions() {
        let result = DiagnosisResult {
            possible_conditions: vec![],
            recommended_actions: vec![],
            warning_signs_to_watch: vec![],
            home_care_tips: vec![],
            medications: vec![],
            urgency: Urgency::Low,
            should_see_vet: false,
            timeframe: String::new(),
            disclaimer: "d".into(),
            analyzed_at: Utc::now(),
            model: "gpt-4o-mini".into(),
        };
        assert_eq!(result.summary(), "AI-assisted diagnosis");
    }

    #[test]
    fn serializes_camel_case_wire_shape() {
        let suggestion = MedicationSuggestion {
            name: "Famotidine".into(),
            medication_type: MedicationType::Otc,
            dosage: "0.5 mg/kg".into(),
            notes: None,
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "Over-the-counter");
        assert_eq!(json["name"], "Famotidine");
        assert!(json.get("notes").is_none());
    }
}
