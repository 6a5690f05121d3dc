//! VetAI — AI-assisted veterinary symptom analysis.
//!
//! The crate is organized around a diagnostic pipeline: clinical input is
//! validated into a [`models::ClinicalContext`], rendered into prompts, sent
//! to a chat-completion provider, and the structured reply is parsed and
//! normalized into a [`models::DiagnosisResult`]. Provider failures degrade
//! to a deterministic fallback result rather than erroring; only caller
//! mistakes and unparseable provider output surface as errors.
//!
//! The [`api`] module exposes the pipeline over HTTP with axum.

pub mod api;
pub mod config;
pub mod models;
pub mod pipeline;
