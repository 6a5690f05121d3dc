pub mod classify;
pub mod fallback;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod provider;
pub mod severity;
pub mod validate;

pub use classify::{classify_failure, FailureDisposition};
pub use fallback::fallback_diagnosis;
pub use orchestrator::DiagnosticService;
pub use parser::{parse_care_recommendations, parse_diagnosis};
pub use provider::{ChatProvider, CompletionParams, MockChatProvider, OpenAiClient};
pub use severity::{health_record_draft, persistable_medications, severity_for_urgency};
pub use validate::{build_clinical_context, validate_animal_request, RawDiagnoseInput};

use thiserror::Error;

/// Closed failure taxonomy for the diagnostic pipeline.
///
/// Only `Validation` and the two parse variants ever cross the pipeline
/// boundary as errors; every other variant is resolved to a fallback result
/// by the orchestrator (see [`classify_failure`]).
#[derive(Error, Debug)]
pub enum DiagnosticError {
    /// No provider credential present; no upstream call is ever attempted.
    #[error("diagnostic provider is not configured")]
    Unconfigured,

    /// The provider rejected the credential.
    #[error("diagnostic provider rejected the configured credential")]
    InvalidCredential,

    /// Account quota exhausted upstream.
    #[error("diagnostic provider quota exceeded")]
    QuotaExceeded,

    /// Upstream rate limiting (429 without a quota code).
    #[error("diagnostic provider rate limit exceeded")]
    RateLimited,

    /// Connect failure, timeout, or any other transport-level problem.
    #[error("transport error calling diagnostic provider: {0}")]
    Transport(String),

    /// The provider answered with no usable text payload.
    #[error("diagnostic provider returned an empty response")]
    EmptyResponse,

    /// The response text is not the expected structured format.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// The structured payload failed schema validation.
    #[error("provider response failed validation: {0}")]
    JsonParsing(String),

    /// Caller input malformed; surfaced before any other component runs.
    #[error("{0}")]
    Validation(String),
}
