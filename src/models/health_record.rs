use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// A medication entry in the form the health-record store persists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationEntry {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// What this core hands to the external health-record collaborator when the
/// caller asks for a diagnosis to be saved. This crate never writes storage
/// itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordDraft {
    pub symptoms: Vec<String>,
    pub diagnosis: String,
    pub notes: String,
    pub severity: Severity,
    pub medications: Vec<MedicationEntry>,
}
