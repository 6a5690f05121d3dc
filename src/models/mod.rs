pub mod clinical_context;
pub mod diagnosis;
pub mod enums;
pub mod health_record;

pub use clinical_context::ClinicalContext;
pub use diagnosis::{CareRecommendations, DiagnosisResult, MedicationSuggestion, PossibleCondition};
pub use enums::{Gender, InvalidEnum, MedicationType, Probability, Severity, Species, Urgency};
pub use health_record::{HealthRecordDraft, MedicationEntry};
