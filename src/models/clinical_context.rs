use serde::{Deserialize, Serialize};

use super::enums::{Gender, Species};

/// Normalized patient + symptom input to the diagnostic pipeline.
///
/// Constructed per request by the validation gate and discarded after the
/// call. By the time a context reaches the prompt builder, `symptoms` is
/// guaranteed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalContext {
    pub species: Species,
    pub breed: Option<String>,
    pub age_years: Option<f64>,
    pub weight_kg: Option<f64>,
    pub gender: Option<Gender>,
    pub symptoms: Vec<String>,
    pub duration: Option<String>,
    pub additional_notes: Option<String>,
}

impl ClinicalContext {
    /// Minimal context: species + symptoms, everything else unknown.
    pub fn new(species: Species, symptoms: Vec<String>) -> Self {
        Self {
            species,
            breed: None,
            age_years: None,
            weight_kg: None,
            gender: None,
            symptoms,
            duration: None,
            additional_notes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_only_required_fields() {
        let ctx = ClinicalContext::new(Species::Dog, vec!["Vomiting".into()]);
        assert_eq!(ctx.species, Species::Dog);
        assert_eq!(ctx.symptoms, vec!["Vomiting".to_string()]);
        assert!(ctx.breed.is_none());
        assert!(ctx.age_years.is_none());
        assert!(ctx.gender.is_none());
        assert!(ctx.duration.is_none());
    }
}
