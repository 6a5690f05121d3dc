//! Error classifier: decides whether a pipeline failure degrades to the
//! fallback generator or propagates to the caller. Exhaustive match over the
//! closed [`DiagnosticError`] taxonomy — a new variant is a build error here,
//! not a silent passthrough.

use crate::pipeline::DiagnosticError;

/// Disclaimer used when the provider is temporarily unavailable
/// (rate limited or out of quota).
pub const TEMPORARY_UNAVAILABILITY_NOTICE: &str = "The AI diagnostic service is \
temporarily unavailable; this is a demo result generated offline. Please try \
again later and consult a veterinarian for a professional assessment.";

/// What the orchestrator should do with a failed diagnostic attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDisposition {
    /// Resolve the call with a fallback diagnosis. When `notice` is set it
    /// overwrites the fallback disclaimer.
    Degrade { notice: Option<&'static str> },
    /// Surface the error to the caller unchanged.
    Propagate,
}

/// Classify a diagnostic failure.
///
/// Service-degradation failures (missing or bad credential, quota, rate
/// limit, transport, empty body) resolve silently to the fallback; only the
/// quota/rate-limit pair annotates the disclaimer. Parse failures and caller
/// validation errors always propagate: presenting a corrupted provider
/// response as clinical guidance is worse than an explicit error.
pub fn classify_failure(error: &DiagnosticError) -> FailureDisposition {
    match error {
        DiagnosticError::Unconfigured => FailureDisposition::Degrade { notice: None },
        DiagnosticError::InvalidCredential => FailureDisposition::Degrade { notice: None },
        DiagnosticError::QuotaExceeded | DiagnosticError::RateLimited => {
            FailureDisposition::Degrade {
                notice: Some(TEMPORARY_UNAVAILABILITY_NOTICE),
            }
        }
        DiagnosticError::Transport(_) | DiagnosticError::EmptyResponse => {
            FailureDisposition::Degrade { notice: None }
        }
        DiagnosticError::MalformedResponse(_) | DiagnosticError::JsonParsing(_) => {
            FailureDisposition::Propagate
        }
        DiagnosticError::Validation(_) => FailureDisposition::Propagate,
    }
}
