use crate::models::{AggregateRecord, MembershipGrade, Roster};

/// Splits participants into assignees and graduates by roster grade.
///
/// Participants missing from the roster are skipped. Presenters are never
/// assignees, whatever their grade. A name listed in several groups is
/// classified once.
pub fn classify_members(mut record: AggregateRecord, roster: &Roster) -> AggregateRecord {
    let mut assignees = Vec::new();
    let mut graduates = Vec::new();

    for name in &record.participants {
        let Some(member) = roster.get(name) else {
            tracing::debug!(%name, "participant not on roster");
            continue;
        };

        match member.grade {
            MembershipGrade::Regular if !record.presenters.contains(name) => {
                assignees.push(name.clone())
            }
            MembershipGrade::Graduated => graduates.push(name.clone()),
            _ => {}
        }
    }

    assignees.sort();
    assignees.dedup();
    graduates.sort();
    graduates.dedup();
    record.assignees = assignees;
    record.graduates = graduates;
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberRecord;

    fn roster(entries: &[(&str, &str)]) -> Roster {
        entries
            .iter()
            .map(|(name, grade)| {
                (
                    name.to_string(),
                    MemberRecord {
                        name: name.to_string(),
                        grade: MembershipGrade::parse(grade),
                        columns: Default::default(),
                    },
                )
            })
            .collect()
    }

    fn record(participants: &[&str], presenters: &[&str]) -> AggregateRecord {
        AggregateRecord {
            participants: participants.iter().map(|s| s.to_string()).collect(),
            presenters: presenters.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn splits_regular_and_graduated() {
        let roster = roster(&[("다", "일반"), ("가", "일반"), ("나", "수료")]);
        let classified = classify_members(record(&["다", "나", "가"], &[]), &roster);
        assert_eq!(classified.assignees, vec!["가", "다"]);
        assert_eq!(classified.graduates, vec!["나"]);
    }

    #[test]
    fn unregistered_participants_are_skipped() {
        let roster = roster(&[("가", "일반")]);
        let classified = classify_members(record(&["가", "손님"], &[]), &roster);
        assert_eq!(classified.assignees, vec!["가"]);
        assert!(classified.graduates.is_empty());
    }

    #[test]
    fn regular_presenter_is_not_an_assignee() {
        let roster = roster(&[("가", "일반"), ("나", "일반")]);
        let classified = classify_members(record(&["가", "나"], &["나"]), &roster);
        assert_eq!(classified.assignees, vec!["가"]);
    }

    #[test]
    fn graduated_presenter_still_counts_as_graduate() {
        let roster = roster(&[("가", "수료")]);
        let classified = classify_members(record(&["가"], &["가"]), &roster);
        assert_eq!(classified.graduates, vec!["가"]);
    }

    #[test]
    fn other_grades_are_neither() {
        let roster = roster(&[("가", "휴면")]);
        let classified = classify_members(record(&["가"], &[]), &roster);
        assert!(classified.assignees.is_empty());
        assert!(classified.graduates.is_empty());
    }

    #[test]
    fn name_in_two_groups_is_classified_once() {
        let roster = roster(&[("Amy", "일반"), ("Cal", "수료")]);
        let classified = classify_members(record(&["Amy", "Cal", "Amy", "Cal"], &[]), &roster);
        assert_eq!(classified.assignees, vec!["Amy"]);
        assert_eq!(classified.graduates, vec!["Cal"]);
    }

    #[test]
    fn name_match_is_exact() {
        let roster = roster(&[("김민수", "일반")]);
        let classified = classify_members(record(&["김 민수"], &[]), &roster);
        assert!(classified.assignees.is_empty());
    }
}
