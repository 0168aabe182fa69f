use crate::error::LedgerError;
use crate::models::{AggregateRecord, NameList};
use crate::names::extract_names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    Participants,
    LatecomersEarly,
    LatecomersMid,
    LatecomersLate,
    NonVoters,
    AbsenteesExcused,
    AbsenteesUnexcused,
    Presenters,
}

impl SessionField {
    fn slot(self, record: &mut AggregateRecord) -> &mut NameList {
        match self {
            SessionField::Participants => &mut record.participants,
            SessionField::LatecomersEarly => &mut record.latecomers_early,
            SessionField::LatecomersMid => &mut record.latecomers_mid,
            SessionField::LatecomersLate => &mut record.latecomers_late,
            SessionField::NonVoters => &mut record.non_voters,
            SessionField::AbsenteesExcused => &mut record.absentees_excused,
            SessionField::AbsenteesUnexcused => &mut record.absentees_unexcused,
            SessionField::Presenters => &mut record.presenters,
        }
    }
}

/// Routes a session-record line containing `needle` into `field`.
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    pub needle: &'static str,
    pub field: SessionField,
    /// Append across matching lines instead of replacing.
    pub accumulate: bool,
}

const fn rule(needle: &'static str, field: SessionField, accumulate: bool) -> LabelRule {
    LabelRule {
        needle,
        field,
        accumulate,
    }
}

/// Evaluated in order; the first rule whose needle occurs in a line wins.
pub const SESSION_RULES: &[LabelRule] = &[
    rule("3:35", SessionField::LatecomersEarly, false),
    rule("4:00", SessionField::LatecomersMid, false),
    rule("4:30", SessionField::LatecomersLate, false),
    rule("미투표자", SessionField::NonVoters, false),
    rule("무단", SessionField::AbsenteesUnexcused, false),
    rule("정오 이후", SessionField::AbsenteesExcused, false),
    rule("조:", SessionField::Participants, true),
    rule("발제자:", SessionField::Presenters, false),
];

pub const SESSION_DOCUMENT: &str = "session record";

pub fn build_aggregate_record(session_text: &str) -> Result<AggregateRecord, LedgerError> {
    build_aggregate_record_with(session_text, SESSION_RULES)
}

pub fn build_aggregate_record_with(
    session_text: &str,
    rules: &[LabelRule],
) -> Result<AggregateRecord, LedgerError> {
    let mut record = AggregateRecord::default();
    let mut saw_participants = false;

    for line in session_text.lines() {
        let Some(rule) = rules.iter().find(|rule| line.contains(rule.needle)) else {
            continue;
        };

        let names = extract_names(line);
        tracing::debug!(field = ?rule.field, count = names.len(), "routed session line");
        if rule.field == SessionField::Participants {
            saw_participants = true;
        }

        let slot = rule.field.slot(&mut record);
        if rule.accumulate {
            slot.extend(names);
        } else {
            *slot = names;
        }
    }

    if !saw_participants {
        return Err(LedgerError::MissingSection {
            section: "participant groups (조:)",
            document: SESSION_DOCUMENT,
        });
    }

    Ok(record)
}
