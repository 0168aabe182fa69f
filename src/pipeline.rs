use chrono::NaiveDate;
use serde::Serialize;

use crate::config::LedgerConfig;
use crate::error::LedgerError;
use crate::fines::{self, FineSummary};
use crate::loader::LoadedInputs;
use crate::models::AggregateRecord;
use crate::{members, session, submissions};

/// A fully populated record ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    pub date: NaiveDate,
    pub record: AggregateRecord,
    pub summary: FineSummary,
}

pub fn run_ledger(
    inputs: &LoadedInputs,
    date: NaiveDate,
    best_assignee: &str,
    config: &LedgerConfig,
) -> Result<Ledger, LedgerError> {
    let record = session::build_aggregate_record(&inputs.session_text)?;
    tracing::info!(participants = record.participants.len(), "session record parsed");

    let record = members::classify_members(record, &inputs.roster);
    tracing::info!(
        assignees = record.assignees.len(),
        graduates = record.graduates.len(),
        "participants classified"
    );

    let interim = submissions::extract_tables(&inputs.interim_text);
    let final_tables = submissions::extract_tables(&inputs.final_text);
    let mut record = submissions::reconcile_submissions(
        record,
        &interim,
        &final_tables,
        config.submission_threshold,
    );
    record.best_assignee = Some(best_assignee.to_string());
    tracing::info!(
        failers = record.failers.len(),
        late = record.late_submitters.len(),
        completers = record.completers.len(),
        "submissions reconciled"
    );

    let summary = fines::compute_fines(&record, &config.fines, config.presenter_reward);
    tracing::info!(total = summary.total, "fines computed");

    Ok(Ledger {
        date,
        record,
        summary,
    })
}
