use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::FineSchedule;
use crate::models::AggregateRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FineCategory {
    NonVoter,
    AbsenteeExcused,
    AbsenteeUnexcused,
    LatecomerEarly,
    LatecomerMid,
    LatecomerLate,
    LateSubmitter,
    Failer,
}

impl FineCategory {
    pub const ALL: [FineCategory; 8] = [
        FineCategory::NonVoter,
        FineCategory::AbsenteeExcused,
        FineCategory::AbsenteeUnexcused,
        FineCategory::LatecomerEarly,
        FineCategory::LatecomerMid,
        FineCategory::LatecomerLate,
        FineCategory::LateSubmitter,
        FineCategory::Failer,
    ];

    pub fn members(self, record: &AggregateRecord) -> &[String] {
        match self {
            FineCategory::NonVoter => &record.non_voters,
            FineCategory::AbsenteeExcused => &record.absentees_excused,
            FineCategory::AbsenteeUnexcused => &record.absentees_unexcused,
            FineCategory::LatecomerEarly => &record.latecomers_early,
            FineCategory::LatecomerMid => &record.latecomers_mid,
            FineCategory::LatecomerLate => &record.latecomers_late,
            FineCategory::LateSubmitter => &record.late_submitters,
            FineCategory::Failer => &record.failers,
        }
    }

    pub fn unit_amount(self, schedule: &FineSchedule) -> u64 {
        match self {
            FineCategory::NonVoter => schedule.non_voter,
            FineCategory::AbsenteeExcused => schedule.absentee_excused,
            FineCategory::AbsenteeUnexcused => schedule.absentee_unexcused,
            FineCategory::LatecomerEarly => schedule.latecomer_early,
            FineCategory::LatecomerMid => schedule.latecomer_mid,
            FineCategory::LatecomerLate => schedule.latecomer_late,
            FineCategory::LateSubmitter => schedule.late_submitter,
            FineCategory::Failer => schedule.failer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FineSummary {
    pub fines: BTreeMap<FineCategory, u64>,
    pub total: u64,
    pub presenter_rewards: u64,
}

/// Charges every listed name in every category. A person in two categories
/// pays both.
pub fn compute_fines(
    record: &AggregateRecord,
    schedule: &FineSchedule,
    presenter_reward: u64,
) -> FineSummary {
    let fines: BTreeMap<FineCategory, u64> = FineCategory::ALL
        .iter()
        .map(|&category| {
            let count = category.members(record).len() as u64;
            (category, count * category.unit_amount(schedule))
        })
        .collect();
    let total = fines.values().sum();

    FineSummary {
        fines,
        total,
        presenter_rewards: record.presenters.len() as u64 * presenter_reward,
    }
}
