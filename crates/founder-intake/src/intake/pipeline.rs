use std::sync::Arc;

use tracing::warn;

use super::classifier::{classify, IntakeDecision};
use super::decoder::{DecodeError, SchemaPolicy, SubmissionDecoder};
use super::domain::Submission;
use super::log::{DecisionLog, DecisionRecord};

/// Result of running one request body through the pipeline. Rejection is an
/// outcome, not an error: the submission was valid and a decision was made.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeOutcome {
    Rejected(Submission),
    Accepted {
        submission: Submission,
        target_user: bool,
    },
}

/// Decoder -> classifier -> decision log, composed once and shared by every
/// transport. Stateless between requests.
pub struct IntakePipeline<L> {
    decoder: SubmissionDecoder,
    log: Arc<L>,
}

impl<L> IntakePipeline<L>
where
    L: DecisionLog,
{
    pub fn new(policy: SchemaPolicy, log: Arc<L>) -> Self {
        Self {
            decoder: SubmissionDecoder::with_policy(policy),
            log,
        }
    }

    pub fn policy(&self) -> &SchemaPolicy {
        self.decoder.policy()
    }

    /// Decode, classify, and record one submission. Decoding failures are
    /// logged at warn level and produce no decision record.
    pub fn process(&self, body: &[u8]) -> Result<IntakeOutcome, DecodeError> {
        let submission = self.decoder.decode(body).map_err(|err| {
            warn!(error = %err, "submission failed validation");
            err
        })?;

        let decision = classify(&submission);
        self.log.record(&DecisionRecord::new(&submission, decision));

        Ok(match decision {
            IntakeDecision::Rejected => IntakeOutcome::Rejected(submission),
            IntakeDecision::AcceptedTargetUser => IntakeOutcome::Accepted {
                submission,
                target_user: true,
            },
            IntakeDecision::AcceptedOther => IntakeOutcome::Accepted {
                submission,
                target_user: false,
            },
        })
    }
}
