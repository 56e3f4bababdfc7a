//! Submission intake: decoding, classification, and response composition.
//!
//! The pipeline is strictly sequential per request — decode the body,
//! classify the validated submission, record the decision, compose the
//! response. Transports (the axum router here, the CLI in the api service)
//! share one [`IntakePipeline`] so the schema rules and the business rules
//! exist exactly once.

pub mod classifier;
pub mod decoder;
pub mod domain;
pub mod log;
pub mod pipeline;
pub mod response;
pub mod router;

#[cfg(test)]
mod tests;

pub use classifier::{classify, is_target_audience, matches_rejection_rule, IntakeDecision};
pub use decoder::{
    DecodeError, FieldViolation, SchemaMode, SchemaPolicy, SubmissionDecoder, ValidationReport,
};
pub use domain::{BusinessTenure, ExperienceLevel, RevenueBracket, Submission};
pub use log::{DecisionLog, DecisionRecord, TracingDecisionLog};
pub use pipeline::{IntakeOutcome, IntakePipeline};
pub use router::intake_router;
