use crate::infra::RecordingDecisionLog;
use clap::Args;
use founder_intake::error::AppError;
use founder_intake::intake::{
    DecodeError, IntakeOutcome, IntakePipeline, SchemaMode, SchemaPolicy,
};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// Read the submission JSON from this file instead of stdin
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Decode with the lenient schema (optional fields get defaults)
    #[arg(long)]
    pub(crate) lenient: bool,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let body = match args.file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            std::io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let mode = if args.lenient {
        SchemaMode::Lenient
    } else {
        SchemaMode::Strict
    };
    let log = Arc::new(RecordingDecisionLog::default());
    let pipeline = IntakePipeline::new(SchemaPolicy::new(mode), log.clone());

    match pipeline.process(&body) {
        Ok(IntakeOutcome::Accepted {
            submission,
            target_user,
        }) => {
            println!("decision: accepted (target user: {target_user})");
            match serde_json::to_string_pretty(&submission) {
                Ok(json) => println!("validated submission:\n{json}"),
                Err(err) => println!("validated submission unavailable: {err}"),
            }
        }
        Ok(IntakeOutcome::Rejected(_)) => {
            println!("decision: rejected (matches the program-fit rejection rule)");
        }
        Err(DecodeError::Malformed { source }) => {
            println!("input is not valid JSON: {source}");
        }
        Err(DecodeError::Schema(report)) => {
            println!("validation failed:");
            for violation in report.violations() {
                println!("  - {}: {}", violation.field, violation.reason);
            }
        }
    }

    for record in log.records() {
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("decision record:\n{json}"),
            Err(err) => println!("decision record unavailable: {err}"),
        }
    }

    Ok(())
}
