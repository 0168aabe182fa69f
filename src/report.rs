use std::fmt::Write;

use crate::config::LedgerConfig;
use crate::fines::FineCategory;
use crate::pipeline::Ledger;

/// Formats an amount as "12,000원".
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{grouped}원")
}

/// Escapes pipes so a name cannot split a table row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn join_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| escape_cell(name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn fine_row(
    output: &mut String,
    label: &str,
    category: FineCategory,
    ledger: &Ledger,
    config: &LedgerConfig,
) {
    let _ = writeln!(
        output,
        "| {} | {} | {} | {} |",
        label,
        join_names(category.members(&ledger.record)),
        format_won(category.unit_amount(&config.fines)),
        format_won(ledger.summary.fines.get(&category).copied().unwrap_or(0))
    );
}

pub fn build_report(ledger: &Ledger, config: &LedgerConfig) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# 따책회계록 - {}", ledger.date);
    let _ = writeln!(output);
    let _ = writeln!(output, "| 구분 | 이름 | 벌금 구분 | 벌금 |");
    let _ = writeln!(output, "| --- | --- | ---: | ---: |");

    fine_row(&mut output, "미투표자", FineCategory::NonVoter, ledger, config);
    fine_row(&mut output, "불참자(정오 이후)", FineCategory::AbsenteeExcused, ledger, config);
    fine_row(&mut output, "무단 불참자", FineCategory::AbsenteeUnexcused, ledger, config);
    fine_row(&mut output, "지각자 3:35~3:59", FineCategory::LatecomerEarly, ledger, config);
    fine_row(&mut output, "지각자 4:00~4:29", FineCategory::LatecomerMid, ledger, config);
    fine_row(&mut output, "지각자 4:30~", FineCategory::LatecomerLate, ledger, config);
    fine_row(&mut output, "과제 지각자", FineCategory::LateSubmitter, ledger, config);
    fine_row(&mut output, "과제 미제출자", FineCategory::Failer, ledger, config);

    let _ = writeln!(
        output,
        "| 총 벌금 | | | {} |",
        format_won(ledger.summary.total)
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "| 구분 | 이름 |");
    let _ = writeln!(output, "| --- | --- |");
    let _ = writeln!(
        output,
        "| 발제자 포상금({}) | {} |",
        format_won(config.presenter_reward),
        join_names(&ledger.record.presenters)
    );
    let _ = writeln!(
        output,
        "| 우수과제자 | {} |",
        escape_cell(ledger.record.best_assignee.as_deref().unwrap_or(""))
    );

    output
}

pub fn build_json_report(ledger: &Ledger) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(ledger)?)
}
