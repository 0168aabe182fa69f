use std::collections::BTreeMap;
use std::io::Read;

use anyhow::Context;

use crate::config::RosterColumns;
use crate::models::{MemberRecord, MembershipGrade, Roster};

/// One roster sheet row, header name to cell text. Blank cells are absent.
pub type RawRow = BTreeMap<String, String>;

/// Keys rows by their display name. Rows without one are dropped; a later
/// row with the same name replaces the earlier one.
pub fn build_roster(rows: Vec<RawRow>, columns: &RosterColumns) -> Roster {
    let mut roster = Roster::new();

    for row in rows {
        let Some(name) = row.get(&columns.name_column).cloned() else {
            continue;
        };
        let grade = row
            .get(&columns.grade_column)
            .map(|raw| MembershipGrade::parse(raw))
            .unwrap_or_else(|| MembershipGrade::Other(String::new()));

        roster.insert(
            name.clone(),
            MemberRecord {
                name,
                grade,
                columns: row,
            },
        );
    }

    roster
}

/// Reads a CSV export of the roster sheet, skipping the title rows above
/// the header.
pub fn read_roster_csv<R: Read>(
    reader: R,
    columns: &RosterColumns,
) -> anyhow::Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = reader.records().skip(columns.header_row);
    let header = match records.next() {
        Some(record) => record.context("failed to read roster header row")?,
        None => return Ok(Vec::new()),
    };
    let header: Vec<String> = header.iter().map(|cell| cell.trim().to_string()).collect();

    let mut rows = Vec::new();
    for result in records {
        let record = result.context("failed to read roster row")?;
        let row: RawRow = header
            .iter()
            .zip(record.iter())
            .filter(|(key, value)| !key.is_empty() && !value.trim().is_empty())
            .map(|(key, value)| (key.clone(), value.trim().to_string()))
            .collect();
        if !row.is_empty() {
            rows.push(row);
        }
    }

    Ok(rows)
}

/// Parses a previously exported members map (name to row object).
pub fn read_members_json(raw: &str, columns: &RosterColumns) -> anyhow::Result<Roster> {
    let parsed: BTreeMap<String, BTreeMap<String, serde_json::Value>> =
        serde_json::from_str(raw).context("members file is not a name-to-row JSON object")?;

    let rows: Vec<RawRow> = parsed
        .into_values()
        .map(|row| {
            row.into_iter()
                .filter_map(|(key, value)| cell_text(value).map(|text| (key, text)))
                .collect::<RawRow>()
        })
        .collect();

    Ok(build_roster(rows, columns))
}

pub fn to_members_json(roster: &Roster) -> anyhow::Result<String> {
    let members: BTreeMap<&String, &RawRow> = roster
        .iter()
        .map(|(name, member)| (name, &member.columns))
        .collect();
    Ok(serde_json::to_string_pretty(&members)?)
}

fn cell_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}
