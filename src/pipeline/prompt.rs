//! Prompt construction for the diagnostic provider. Pure functions:
//! identical contexts produce identical prompt text, symptom order included.

use crate::models::ClinicalContext;

/// System instruction for symptom analysis. Fixes the provider's role and
/// the exact JSON shape the normalizer expects.
pub const DIAGNOSTIC_SYSTEM_PROMPT: &str = r#"You are an expert veterinary diagnostic assistant. Your role is to help pet owners understand potential health issues based on symptoms they observe in their pets.

IMPORTANT GUIDELINES:
1. Always emphasize that your analysis is NOT a substitute for professional veterinary care
2. Recommend seeing a veterinarian for serious symptoms
3. Consider species-specific conditions and treatments
4. Be clear about uncertainty when symptoms could indicate multiple conditions
5. Provide practical home care advice when appropriate
6. Flag emergency situations clearly

Respond ONLY with valid JSON in the following structure:
{
  "possibleConditions": [
    {
      "name": "Condition Name",
      "probability": "High/Medium/Low",
      "description": "Brief description of the condition",
      "commonIn": "Species/breeds commonly affected"
    }
  ],
  "recommendedActions": ["Action 1", "Action 2"],
  "medications": [
    {
      "name": "Medication name (if applicable)",
      "type": "Over-the-counter/Prescription",
      "dosage": "General dosage guidance",
      "notes": "Important notes or warnings"
    }
  ],
  "warningSignsToWatch": ["Sign 1", "Sign 2"],
  "homeCareTips": ["Tip 1", "Tip 2"],
  "urgency": "Low/Medium/High/Emergency",
  "shouldSeeVet": true/false,
  "timeframe": "When to see a vet (e.g., 'within 24 hours', 'immediately')",
  "disclaimer": "This is AI-generated advice and should not replace professional veterinary consultation."
}"#;

/// System instruction for the care-recommendations call.
pub const CARE_ADVISOR_SYSTEM_PROMPT: &str = "You are a veterinary care advisor. \
Provide helpful, accurate care recommendations while always emphasizing the \
importance of professional veterinary care.";

/// Build the user prompt for symptom analysis.
///
/// Sections appear in fixed order and only when their data is present:
/// Patient Information, Reported Symptoms (numbered 1..N in input order),
/// Duration, Additional Information, closing analysis instruction.
pub fn build_diagnosis_prompt(ctx: &ClinicalContext) -> String {
    let mut prompt = format!("Please analyze the following symptoms for a {}", ctx.species);
    if let Some(breed) = &ctx.breed {
        prompt.push_str(&format!(" ({breed})"));
    }
    prompt.push_str(":\n\n");

    prompt.push_str("**Patient Information:**\n");
    prompt.push_str(&format!("- Species: {}\n", ctx.species));
    if let Some(breed) = &ctx.breed {
        prompt.push_str(&format!("- Breed: {breed}\n"));
    }
    if let Some(age) = ctx.age_years {
        prompt.push_str(&format!("- Age: {age} years\n"));
    }
    if let Some(weight) = ctx.weight_kg {
        prompt.push_str(&format!("- Weight: {weight} kg\n"));
    }
    if let Some(gender) = ctx.gender {
        prompt.push_str(&format!("- Gender: {gender}\n"));
    }

    prompt.push_str("\n**Reported Symptoms:**\n");
    for (index, symptom) in ctx.symptoms.iter().enumerate() {
        prompt.push_str(&format!("{}. {symptom}\n", index + 1));
    }

    if let Some(duration) = &ctx.duration {
        prompt.push_str(&format!("\n**Duration of Symptoms:** {duration}\n"));
    }

    if let Some(notes) = &ctx.additional_notes {
        prompt.push_str(&format!("\n**Additional Information from Owner:**\n{notes}\n"));
    }

    prompt.push_str(
        "\nPlease provide a comprehensive analysis including possible conditions, \
         recommended actions, and whether the pet should see a veterinarian.",
    );

    prompt
}

/// Build the user prompt for condition-specific care recommendations.
pub fn build_care_prompt(species: &str, condition: &str) -> String {
    format!(
        r#"Provide detailed care recommendations for a {species} diagnosed with or showing signs of "{condition}".

Include:
1. Home care tips
2. Diet recommendations
3. Activity level guidance
4. Warning signs that require immediate vet attention
5. Typical recovery timeline
6. Preventive measures for the future

Respond in JSON format:
{{
  "condition": "{condition}",
  "species": "{species}",
  "homeCare": ["tip1", "tip2"],
  "dietRecommendations": ["recommendation1", "recommendation2"],
  "activityGuidance": "description",
  "warningSignsRequiringVet": ["sign1", "sign2"],
  "typicalRecoveryTime": "timeline description",
  "preventiveMeasures": ["measure1", "measure2"],
  "disclaimer": "Always consult with a veterinarian for proper diagnosis and treatment."
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClinicalContext, Gender, Species};

    fn context(symptoms: &[&str]) -> ClinicalContext {
        ClinicalContext::new(
            Species::Dog,
            symptoms.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn symptoms_are_numbered_in_input_order() {
        let ctx = context(&["Vomiting", "Lethargy", "Loss of appetite"]);
        let prompt = build_diagnosis_prompt(&ctx);
        assert!(prompt.contains("1. Vomiting\n"));
        assert!(prompt.contains("2. Lethargy\n"));
        assert!(prompt.contains("3. Loss of appetite\n"));
        let vomiting = prompt.find("1. Vomiting").unwrap();
        let lethargy = prompt.find("2. Lethargy").unwrap();
        assert!(vomiting < lethargy);
    }

    #[test]
    fn prompt_is_deterministic() {
        let ctx = context(&["Vomiting", "Lethargy"]);
        assert_eq!(build_diagnosis_prompt(&ctx), build_diagnosis_prompt(&ctx));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let prompt = build_diagnosis_prompt(&context(&["Coughing"]));
        assert!(!prompt.contains("Breed:"));
        assert!(!prompt.contains("Age:"));
        assert!(!prompt.contains("Weight:"));
        assert!(!prompt.contains("Gender:"));
        assert!(!prompt.contains("Duration of Symptoms"));
        assert!(!prompt.contains("Additional Information"));
    }

    #[test]
    fn present_fields_appear_in_patient_section() {
        let ctx = ClinicalContext {
            breed: Some("Labrador".into()),
            age_years: Some(5.0),
            weight_kg: Some(30.0),
            gender: Some(Gender::Male),
            duration: Some("1-3 days".into()),
            additional_notes: Some("Ate garbage yesterday".into()),
            ..context(&["Vomiting"])
        };
        let prompt = build_diagnosis_prompt(&ctx);
        assert!(prompt.contains("for a Dog (Labrador):"));
        assert!(prompt.contains("- Breed: Labrador\n"));
        assert!(prompt.contains("- Age: 5 years\n"));
        assert!(prompt.contains("- Weight: 30 kg\n"));
        assert!(prompt.contains("- Gender: Male\n"));
        assert!(prompt.contains("**Duration of Symptoms:** 1-3 days"));
        assert!(prompt.contains("Ate garbage yesterday"));
    }

    #[test]
    fn closing_instruction_always_present() {
        let prompt = build_diagnosis_prompt(&context(&["Limping"]));
        assert!(prompt.contains("possible conditions"));
        assert!(prompt.contains("see a veterinarian"));
    }

    #[test]
    fn system_prompt_fixes_output_contract() {
        assert!(DIAGNOSTIC_SYSTEM_PROMPT.contains("NOT a substitute"));
        assert!(DIAGNOSTIC_SYSTEM_PROMPT.contains("valid JSON"));
        assert!(DIAGNOSTIC_SYSTEM_PROMPT.contains("\"urgency\""));
        assert!(DIAGNOSTIC_SYSTEM_PROMPT.contains("Low/Medium/High/Emergency"));
    }

    #[test]
    fn care_prompt_names_species_and_condition() {
        let prompt = build_care_prompt("Cat", "Feline asthma");
        assert!(prompt.contains("for a Cat"));
        assert!(prompt.contains("\"Feline asthma\""));
        assert!(prompt.contains("homeCare"));
        assert!(prompt.contains("preventiveMeasures"));
    }
}
