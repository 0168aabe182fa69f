use crate::models::{AggregateRecord, SubmissionCount, SubmissionRow, SubmissionTable};

/// Collects the two-column tab-delimited tables of a submission log.
///
/// Consecutive tab-bearing lines form one table; any other line, or the end
/// of the text, closes it. A table with a row of any other width is
/// dropped whole, since prose sometimes carries stray tabs.
pub fn extract_tables(text: &str) -> Vec<SubmissionTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<&str>> = Vec::new();

    for line in text.lines() {
        if line.contains('\t') {
            current.push(line.split('\t').collect());
        } else {
            close_table(&mut current, &mut tables);
        }
    }
    close_table(&mut current, &mut tables);

    tables
}

fn close_table(current: &mut Vec<Vec<&str>>, tables: &mut Vec<SubmissionTable>) {
    if current.is_empty() {
        return;
    }

    let rows = std::mem::take(current);
    if rows.iter().any(|columns| columns.len() != 2) {
        tracing::debug!(rows = rows.len(), "discarded table that is not two columns wide");
        return;
    }

    tables.push(SubmissionTable {
        rows: rows
            .into_iter()
            .map(|columns| SubmissionRow {
                name: columns[0].to_string(),
                answer: columns[1].to_string(),
            })
            .collect(),
    });
}

/// Counts rows with both cells filled, per assignee. Other names are ignored.
pub fn count_names(tables: &[SubmissionTable], assignees: &[String]) -> SubmissionCount {
    let mut counts = SubmissionCount::new();

    for row in tables.iter().flat_map(|table| table.rows.iter()) {
        let name = row.name.trim();
        let answer = row.answer.trim();
        if name.is_empty() || answer.is_empty() {
            continue;
        }
        if assignees.iter().any(|assignee| assignee == name) {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }

    counts
}

/// Sorts assignees into failers, late submitters and completers.
///
/// Failing the bar in the final snapshot is a failure; meeting it only in
/// the final snapshot is a late submission.
pub fn reconcile_submissions(
    mut record: AggregateRecord,
    interim: &[SubmissionTable],
    final_tables: &[SubmissionTable],
    threshold: usize,
) -> AggregateRecord {
    let interim_counts = count_names(interim, &record.assignees);
    let final_counts = count_names(final_tables, &record.assignees);

    let mut failers = Vec::new();
    let mut late_submitters = Vec::new();
    let mut completers = Vec::new();

    for name in &record.assignees {
        let interim_count = interim_counts.get(name).copied().unwrap_or(0);
        let final_count = final_counts.get(name).copied().unwrap_or(0);

        if final_count < threshold {
            failers.push(name.clone());
        } else if interim_count < threshold {
            late_submitters.push(name.clone());
        } else {
            completers.push(name.clone());
        }
    }

    failers.sort();
    late_submitters.sort();
    completers.sort();
    record.failers = failers;
    record.late_submitters = late_submitters;
    record.completers = completers;
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> SubmissionTable {
        SubmissionTable {
            rows: rows
                .iter()
                .map(|(name, answer)| SubmissionRow {
                    name: name.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn record_with_assignees(assignees: &[&str]) -> AggregateRecord {
        AggregateRecord {
            assignees: names(assignees),
            ..Default::default()
        }
    }

    #[test]
    fn keeps_two_column_block_and_drops_wider_one() {
        let text = "1주차 과제\n가\t답변 하나\n나\t답변 둘\n\n가\t나\t다\n라\t마\t바\n";
        let tables = extract_tables(text);
        assert_eq!(tables, vec![table(&[("가", "답변 하나"), ("나", "답변 둘")])]);
    }

    #[test]
    fn one_wide_row_discards_the_whole_table() {
        let text = "가\t답\n나\t답\t덧붙임\n다\t답";
        assert!(extract_tables(text).is_empty());
    }

    #[test]
    fn table_at_end_of_text_is_kept() {
        let tables = extract_tables("서문\n가\t답");
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows[0].name, "가");
    }

    #[test]
    fn separate_blocks_stay_in_document_order() {
        let tables = extract_tables("가\t1\n\n나\t2\n다\t3");
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].rows.len(), 2);
    }

    #[test]
    fn text_without_tabs_has_no_tables() {
        assert!(extract_tables("그냥 문장입니다.\n또 다른 문장.").is_empty());
    }

    #[test]
    fn counts_only_filled_rows_of_assignees() {
        let tables = vec![
            table(&[("가", "답"), (" 가 ", " 답 "), ("나", "답"), ("가", "  ")]),
            table(&[("", "답"), ("가", "답")]),
        ];
        let counts = count_names(&tables, &names(&["가"]));
        assert_eq!(counts.get("가"), Some(&3));
        assert!(!counts.contains_key("나"));
    }

    #[test]
    fn classifies_against_threshold() {
        let interim = vec![table(&[("가", "1"), ("가", "2"), ("나", "1"), ("나", "2"), ("나", "3")])];
        let final_tables = vec![table(&[
            ("가", "1"),
            ("가", "2"),
            ("가", "3"),
            ("나", "1"),
            ("나", "2"),
            ("나", "3"),
            ("다", "1"),
        ])];

        let record = reconcile_submissions(
            record_with_assignees(&["가", "나", "다"]),
            &interim,
            &final_tables,
            3,
        );
        assert_eq!(record.failers, names(&["다"]));
        assert_eq!(record.late_submitters, names(&["가"]));
        assert_eq!(record.completers, names(&["나"]));
    }

    #[test]
    fn assignee_absent_from_final_snapshot_fails() {
        let record = reconcile_submissions(record_with_assignees(&["가"]), &[], &[], 3);
        assert_eq!(record.failers, names(&["가"]));
        assert!(record.completers.is_empty());
    }

    #[test]
    fn same_snapshot_twice_never_yields_late_submitters() {
        let tables = vec![table(&[("가", "1"), ("가", "2"), ("가", "3"), ("나", "1")])];
        let record =
            reconcile_submissions(record_with_assignees(&["가", "나"]), &tables, &tables, 3);
        assert!(record.late_submitters.is_empty());
        assert_eq!(record.failers, names(&["나"]));
        assert_eq!(record.completers, names(&["가"]));
    }

    #[test]
    fn threshold_is_configurable() {
        let tables = vec![table(&[("가", "1")])];
        let record = reconcile_submissions(record_with_assignees(&["가"]), &[], &tables, 1);
        assert_eq!(record.late_submitters, names(&["가"]));
    }
}
