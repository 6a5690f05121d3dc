//! Severity/urgency mapping and health-record derivation. The urgency →
//! severity map is an exhaustive match so the compiler enforces totality.

use crate::models::{
    ClinicalContext, DiagnosisResult, HealthRecordDraft, MedicationEntry, MedicationSuggestion,
    MedicationType, Severity, Urgency,
};

/// Default dosing frequency assigned to persisted medications.
pub const DEFAULT_FREQUENCY: &str = "As directed";

/// Map a provider urgency onto the health-record severity taxonomy.
pub fn severity_for_urgency(urgency: Urgency) -> Severity {
    match urgency {
        Urgency::Emergency => Severity::Critical,
        Urgency::High => Severity::High,
        Urgency::Medium => Severity::Medium,
        Urgency::Low => Severity::Low,
    }
}

/// Medications eligible for automatic persistence: over-the-counter entries
/// only. Prescription suggestions stay user-visible but are never written
/// into a record without professional involvement.
pub fn persistable_medications(suggestions: &[MedicationSuggestion]) -> Vec<MedicationEntry> {
    suggestions
        .iter()
        .filter(|m| m.medication_type == MedicationType::Otc)
        .map(|m| MedicationEntry {
            name: m.name.clone(),
            dosage: m.dosage.clone(),
            frequency: DEFAULT_FREQUENCY.to_string(),
            notes: m.notes.clone(),
        })
        .collect()
}

/// Build the record the external health-record store consumes when the
/// caller asks for a diagnosis to be saved.
pub fn health_record_draft(
    ctx: &ClinicalContext,
    diagnosis: &DiagnosisResult,
) -> HealthRecordDraft {
    let conditions = diagnosis
        .possible_conditions
        .iter()
        .map(|c| format!("- {} ({}): {}", c.name, c.probability, c.description))
        .collect::<Vec<_>>()
        .join("\n");

    let notes = format!(
        "AI Diagnosis Analysis:\n{conditions}\n\nAdditional Info: {}",
        ctx.additional_notes.as_deref().unwrap_or("None provided"),
    );

    HealthRecordDraft {
        symptoms: ctx.symptoms.clone(),
        diagnosis: diagnosis.summary(),
        notes,
        severity: severity_for_urgency(diagnosis.urgency),
        medications: persistable_medications(&diagnosis.medications),
    }
}
