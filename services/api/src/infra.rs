use founder_intake::intake::{DecisionLog, DecisionRecord};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Decision sink that keeps records in memory, for the classify command and
/// for tests.
#[derive(Default, Clone)]
pub(crate) struct RecordingDecisionLog {
    records: Arc<Mutex<Vec<DecisionRecord>>>,
}

impl RecordingDecisionLog {
    pub(crate) fn records(&self) -> Vec<DecisionRecord> {
        self.records.lock().expect("decision log mutex poisoned").clone()
    }
}

impl DecisionLog for RecordingDecisionLog {
    fn record(&self, record: &DecisionRecord) {
        self.records
            .lock()
            .expect("decision log mutex poisoned")
            .push(record.clone());
    }
}
