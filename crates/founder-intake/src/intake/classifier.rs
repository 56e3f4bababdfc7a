use super::domain::{BusinessTenure, ExperienceLevel, RevenueBracket, Submission};

/// Outcome of classifying a validated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeDecision {
    Rejected,
    AcceptedTargetUser,
    AcceptedOther,
}

impl IntakeDecision {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::AcceptedTargetUser => "accepted_target_user",
            Self::AcceptedOther => "accepted",
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Exact conjunction over four fields; any single differing field flips the
/// outcome away from rejection.
pub fn matches_rejection_rule(submission: &Submission) -> bool {
    submission.business_description == ExperienceLevel::StudentFresher
        && submission.business_years == BusinessTenure::LessThanOne
        && submission.annual_revenue == RevenueBracket::FiveToTenLakhs
        && !submission.open_to_contact
}

/// Students and first-year founders are the program's target audience,
/// independent of revenue and contact preference.
pub fn is_target_audience(submission: &Submission) -> bool {
    submission.business_description == ExperienceLevel::StudentFresher
        && submission.business_years == BusinessTenure::LessThanOne
}

/// Pure and total over valid submissions. Callers are responsible for
/// logging the decision.
pub fn classify(submission: &Submission) -> IntakeDecision {
    if matches_rejection_rule(submission) {
        return IntakeDecision::Rejected;
    }

    if is_target_audience(submission) {
        IntakeDecision::AcceptedTargetUser
    } else {
        IntakeDecision::AcceptedOther
    }
}
