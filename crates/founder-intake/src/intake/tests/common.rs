use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::intake::decoder::SchemaPolicy;
use crate::intake::domain::{BusinessTenure, ExperienceLevel, RevenueBracket, Submission};
use crate::intake::log::{DecisionLog, DecisionRecord};
use crate::intake::pipeline::IntakePipeline;

/// In-memory decision sink so tests can observe what production would log.
#[derive(Default, Clone)]
pub(super) struct RecordingLog {
    records: Arc<Mutex<Vec<DecisionRecord>>>,
}

impl RecordingLog {
    pub(super) fn records(&self) -> Vec<DecisionRecord> {
        self.records.lock().expect("log mutex poisoned").clone()
    }
}

impl DecisionLog for RecordingLog {
    fn record(&self, record: &DecisionRecord) {
        self.records
            .lock()
            .expect("log mutex poisoned")
            .push(record.clone());
    }
}

pub(super) fn strict_pipeline() -> (IntakePipeline<RecordingLog>, RecordingLog) {
    let log = RecordingLog::default();
    let pipeline = IntakePipeline::new(SchemaPolicy::strict(), Arc::new(log.clone()));
    (pipeline, log)
}

pub(super) fn lenient_pipeline() -> (IntakePipeline<RecordingLog>, RecordingLog) {
    let log = RecordingLog::default();
    let pipeline = IntakePipeline::new(SchemaPolicy::lenient(), Arc::new(log.clone()));
    (pipeline, log)
}

/// A complete, strict-mode-valid submission body that is accepted.
pub(super) fn accepted_body() -> Value {
    json!({
        "name": "Asha Rao",
        "email": "asha@raodesigns.in",
        "businessName": "Rao Designs",
        "businessDescription": "3_to_5_years",
        "businessYears": "3_to_5",
        "annualRevenue": "10_to_25_lakhs",
        "openToContact": true,
        "phone": "9876501234",
        "biggestChallenge": "Finding repeat customers"
    })
}

/// The exact profile the rejection rule matches.
pub(super) fn rejection_body() -> Value {
    json!({
        "name": "A",
        "email": "a@b.com",
        "businessName": "Side Project",
        "businessDescription": "student_fresher",
        "businessYears": "less_than_1",
        "annualRevenue": "5_to_10_lakhs",
        "openToContact": false,
        "phone": "123"
    })
}

pub(super) fn encode(body: &Value) -> Vec<u8> {
    serde_json::to_vec(body).expect("serialize test body")
}

pub(super) fn sample_submission() -> Submission {
    Submission {
        name: "Asha Rao".to_string(),
        email: "asha@raodesigns.in".to_string(),
        business_name: Some("Rao Designs".to_string()),
        business_description: ExperienceLevel::ThreeToFiveYears,
        business_years: BusinessTenure::ThreeToFive,
        annual_revenue: RevenueBracket::TenToTwentyFiveLakhs,
        phone: Some("9876501234".to_string()),
        biggest_challenge: None,
        open_to_contact: true,
    }
}

/// The submission shape that matches the rejection rule.
pub(super) fn rejection_submission() -> Submission {
    Submission {
        name: "A".to_string(),
        email: "a@b.com".to_string(),
        business_name: Some("Side Project".to_string()),
        business_description: ExperienceLevel::StudentFresher,
        business_years: BusinessTenure::LessThanOne,
        annual_revenue: RevenueBracket::FiveToTenLakhs,
        phone: Some("123".to_string()),
        biggest_challenge: None,
        open_to_contact: false,
    }
}
