//! Diagnostic orchestrator: sequences validate → prompt → provider call →
//! normalize for one request/response cycle, consulting the error classifier
//! when the attempt fails. At most one upstream attempt per invocation; no
//! retry loop.

use std::sync::Arc;

use chrono::Utc;

use crate::config::{
    DiagnosticConfig, MAX_DIAGNOSIS_TOKENS, MAX_RECOMMENDATION_TOKENS, TEMPERATURE,
};
use crate::models::{CareRecommendations, ClinicalContext, DiagnosisResult};
use crate::pipeline::classify::{classify_failure, FailureDisposition};
use crate::pipeline::fallback::fallback_diagnosis;
use crate::pipeline::parser::{parse_care_recommendations, parse_diagnosis};
use crate::pipeline::prompt::{
    build_care_prompt, build_diagnosis_prompt, CARE_ADVISOR_SYSTEM_PROMPT,
    DIAGNOSTIC_SYSTEM_PROMPT,
};
use crate::pipeline::provider::{ChatProvider, CompletionParams, OpenAiClient};
use crate::pipeline::DiagnosticError;

/// One diagnostic pipeline instance. Owns the provider seam and the
/// process-wide configuration; cheap to share behind an `Arc` across
/// concurrent request chains.
pub struct DiagnosticService {
    config: Arc<DiagnosticConfig>,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl DiagnosticService {
    /// Build the service from configuration. Without a credential no client
    /// is constructed at all; every diagnosis resolves through the fallback
    /// generator.
    pub fn from_config(config: Arc<DiagnosticConfig>) -> Self {
        let provider = match OpenAiClient::from_config(&config) {
            Ok(client) => Some(Arc::new(client) as Arc<dyn ChatProvider>),
            Err(DiagnosticError::Unconfigured) => None,
            Err(error) => {
                // A credential is present but the client could not be built;
                // without a log this looks identical to running unconfigured.
                tracing::warn!(%error, "provider client unavailable, all diagnoses will use fallback results");
                None
            }
        };
        Self { config, provider }
    }

    /// Build the service with an injected provider (tests, alternate
    /// backends).
    pub fn with_provider(config: Arc<DiagnosticConfig>, provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            config,
            provider: Some(provider),
        }
    }

    /// Is the upstream diagnostic provider usable? Exposed so callers can
    /// short-circuit UI messaging before invoking [`Self::diagnose`].
    pub fn is_configured(&self) -> bool {
        self.config.is_configured() && self.provider.is_some()
    }

    /// Configured model identifier.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Run one diagnostic cycle for a validated clinical context.
    ///
    /// Returns a real result, a fallback result (service degradation), or an
    /// error — errors are only ever caller-input or provider-contract
    /// violations, never transient provider issues.
    pub async fn diagnose(
        &self,
        ctx: &ClinicalContext,
    ) -> Result<DiagnosisResult, DiagnosticError> {
        tracing::debug!(species = %ctx.species, symptoms = ctx.symptoms.len(), "diagnose");

        // The validation gate runs before anything else; an empty symptom
        // list must never reach the prompt builder or the provider.
        if ctx.symptoms.is_empty() {
            return Err(DiagnosticError::Validation(
                "At least one symptom is required for diagnosis".into(),
            ));
        }

        match self.attempt_diagnosis(ctx).await {
            Ok(result) => Ok(result),
            Err(error) => match classify_failure(&error) {
                FailureDisposition::Degrade { notice } => {
                    tracing::warn!(%error, "diagnostic provider unavailable, serving fallback");
                    let mut result = fallback_diagnosis(ctx.species, &ctx.symptoms, Utc::now());
                    if let Some(notice) = notice {
                        result.disclaimer = notice.to_string();
                    }
                    Ok(result)
                }
                FailureDisposition::Propagate => {
                    tracing::error!(%error, "diagnostic attempt failed");
                    Err(error)
                }
            },
        }
    }

    /// Single-shot care recommendations for a known condition. Reuses the
    /// provider client but has no fallback tier: any failure, including an
    /// unconfigured provider, surfaces to the caller.
    pub async fn get_care_recommendations(
        &self,
        species: &str,
        condition: &str,
    ) -> Result<CareRecommendations, DiagnosticError> {
        tracing::debug!(species, condition, "care recommendations");

        if species.trim().is_empty() || condition.trim().is_empty() {
            return Err(DiagnosticError::Validation(
                "Species and condition are required".into(),
            ));
        }

        let provider = self.usable_provider()?;
        let prompt = build_care_prompt(species, condition);
        let raw = provider
            .complete(
                CARE_ADVISOR_SYSTEM_PROMPT,
                &prompt,
                CompletionParams {
                    model: &self.config.model,
                    temperature: TEMPERATURE,
                    max_output_tokens: MAX_RECOMMENDATION_TOKENS,
                    json_mode: true,
                },
            )
            .await?;

        parse_care_recommendations(&raw, species, condition)
    }

    /// One upstream attempt: prompt → provider → normalize.
    async fn attempt_diagnosis(
        &self,
        ctx: &ClinicalContext,
    ) -> Result<DiagnosisResult, DiagnosticError> {
        let provider = self.usable_provider()?;
        let prompt = build_diagnosis_prompt(ctx);

        let raw = provider
            .complete(
                DIAGNOSTIC_SYSTEM_PROMPT,
                &prompt,
                CompletionParams {
                    model: &self.config.model,
                    temperature: TEMPERATURE,
                    max_output_tokens: MAX_DIAGNOSIS_TOKENS,
                    json_mode: true,
                },
            )
            .await?;

        parse_diagnosis(&raw, &self.config.model, Utc::now())
    }

    fn usable_provider(&self) -> Result<&Arc<dyn ChatProvider>, DiagnosticError> {
        if !self.config.is_configured() {
            return Err(DiagnosticError::Unconfigured);
        }
        self.provider.as_ref().ok_or(DiagnosticError::Unconfigured)
    }
}
