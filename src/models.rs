use std::collections::BTreeMap;

use serde::Serialize;

/// Names extracted from one labelled line, sorted ascending.
pub type NameList = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MembershipGrade {
    Regular,
    Graduated,
    Other(String),
}

impl MembershipGrade {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "일반" => MembershipGrade::Regular,
            "수료" => MembershipGrade::Graduated,
            other => MembershipGrade::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub name: String,
    pub grade: MembershipGrade,
    /// Every roster column, passed through untouched.
    pub columns: BTreeMap<String, String>,
}

/// Display name to member attributes. Lookups are exact string matches.
pub type Roster = BTreeMap<String, MemberRecord>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateRecord {
    pub participants: NameList,
    pub latecomers_early: NameList,
    pub latecomers_mid: NameList,
    pub latecomers_late: NameList,
    pub non_voters: NameList,
    pub absentees_excused: NameList,
    pub absentees_unexcused: NameList,
    pub presenters: NameList,
    pub assignees: NameList,
    pub graduates: NameList,
    pub failers: NameList,
    pub late_submitters: NameList,
    pub completers: NameList,
    pub best_assignee: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRow {
    pub name: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionTable {
    pub rows: Vec<SubmissionRow>,
}

/// Counted rows per assignee within one snapshot.
pub type SubmissionCount = BTreeMap<String, usize>;
