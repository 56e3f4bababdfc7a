use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::classifier::{is_target_audience, IntakeDecision};
use super::domain::{BusinessTenure, ExperienceLevel, RevenueBracket, Submission};

/// Structured operational record of one classified submission. Emitted for
/// visibility only; correctness never depends on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecord {
    pub decision: &'static str,
    pub target_user: bool,
    pub business_description: ExperienceLevel,
    pub business_years: BusinessTenure,
    pub annual_revenue: RevenueBracket,
    pub open_to_contact: bool,
    pub name: String,
    pub email: String,
    pub received_at: DateTime<Utc>,
}

impl DecisionRecord {
    pub fn new(submission: &Submission, decision: IntakeDecision) -> Self {
        Self {
            decision: decision.label(),
            target_user: is_target_audience(submission),
            business_description: submission.business_description,
            business_years: submission.business_years,
            annual_revenue: submission.annual_revenue,
            open_to_contact: submission.open_to_contact,
            name: submission.name.clone(),
            email: submission.email.clone(),
            received_at: Utc::now(),
        }
    }
}

/// Injected logging capability so the pipeline stays testable without I/O.
pub trait DecisionLog: Send + Sync {
    fn record(&self, record: &DecisionRecord);
}

/// Production sink: one tracing event per decision.
#[derive(Debug, Default, Clone)]
pub struct TracingDecisionLog;

impl DecisionLog for TracingDecisionLog {
    fn record(&self, record: &DecisionRecord) {
        info!(
            decision = record.decision,
            target_user = record.target_user,
            business_description = record.business_description.tag(),
            business_years = record.business_years.tag(),
            annual_revenue = record.annual_revenue.tag(),
            open_to_contact = record.open_to_contact,
            name = %record.name,
            email = %record.email,
            "form submission classified"
        );
    }
}
