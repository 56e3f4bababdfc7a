//! Founder intake service library.
//!
//! One Decoder -> Classifier -> Composer pipeline for the founder profile
//! form, shared by every transport that fronts it. The HTTP router and the
//! CLI both delegate to [`intake::IntakePipeline`]; schema strictness is a
//! configuration knob rather than a second implementation.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
