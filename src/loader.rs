use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::RosterColumns;
use crate::error::LedgerError;
use crate::models::Roster;
use crate::roster;

/// Input paths as handed over by the caller; any of them may be absent.
#[derive(Debug, Clone, Default)]
pub struct InputPaths {
    pub roster: Option<PathBuf>,
    pub session: Option<PathBuf>,
    pub interim: Option<PathBuf>,
    pub final_log: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RequiredPaths {
    pub roster: PathBuf,
    pub session: PathBuf,
    pub interim: PathBuf,
    pub final_log: PathBuf,
}

impl InputPaths {
    /// Fails on the first absent input, before anything is read.
    pub fn require(self) -> Result<RequiredPaths, LedgerError> {
        Ok(RequiredPaths {
            roster: self.roster.ok_or(LedgerError::MissingInput { input: "roster" })?,
            session: self.session.ok_or(LedgerError::MissingInput {
                input: "session record document",
            })?,
            interim: self.interim.ok_or(LedgerError::MissingInput {
                input: "interim submission document",
            })?,
            final_log: self.final_log.ok_or(LedgerError::MissingInput {
                input: "final submission document",
            })?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoadedInputs {
    pub roster: Roster,
    pub session_text: String,
    pub interim_text: String,
    pub final_text: String,
}

/// Reads the roster and the three documents concurrently.
pub async fn load_inputs(
    paths: &RequiredPaths,
    columns: &RosterColumns,
) -> anyhow::Result<LoadedInputs> {
    let (roster, session_text, interim_text, final_text) = tokio::try_join!(
        load_roster(&paths.roster, columns),
        read_text(&paths.session),
        read_text(&paths.interim),
        read_text(&paths.final_log),
    )?;

    tracing::info!(
        members = roster.len(),
        session_bytes = session_text.len(),
        interim_bytes = interim_text.len(),
        final_bytes = final_text.len(),
        "inputs loaded"
    );

    Ok(LoadedInputs {
        roster,
        session_text,
        interim_text,
        final_text,
    })
}

async fn read_text(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Loads a members JSON export or, for any other extension, a roster CSV.
pub async fn load_roster(path: &Path, columns: &RosterColumns) -> anyhow::Result<Roster> {
    let raw = read_text(path).await?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        roster::read_members_json(&raw, columns)
            .with_context(|| format!("failed to parse members file {}", path.display()))
    } else {
        let rows = roster::read_roster_csv(raw.as_bytes(), columns)
            .with_context(|| format!("failed to parse roster CSV {}", path.display()))?;
        Ok(roster::build_roster(rows, columns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MembershipGrade;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn require_names_the_missing_document() {
        let paths = InputPaths {
            roster: Some(PathBuf::from("members.json")),
            session: Some(PathBuf::from("session.txt")),
            interim: None,
            final_log: Some(PathBuf::from("final.txt")),
        };
        assert_eq!(
            paths.require().unwrap_err(),
            LedgerError::MissingInput {
                input: "interim submission document"
            }
        );
    }

    #[test]
    fn require_checks_roster_first() {
        assert_eq!(
            InputPaths::default().require().unwrap_err(),
            LedgerError::MissingInput { input: "roster" }
        );
    }

    #[tokio::test]
    async fn loads_all_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RequiredPaths {
            roster: write(dir.path(), "roster.csv", "명부\n성명,회원 등급\n가,일반\n"),
            session: write(dir.path(), "session.txt", "조: 가"),
            interim: write(dir.path(), "interim.txt", "가\t답"),
            final_log: write(dir.path(), "final.txt", "가\t답\n가\t답"),
        };

        let inputs = load_inputs(&paths, &RosterColumns::default()).await.unwrap();
        assert_eq!(inputs.roster["가"].grade, MembershipGrade::Regular);
        assert_eq!(inputs.session_text, "조: 가");
        assert_eq!(inputs.final_text.lines().count(), 2);
    }

    #[tokio::test]
    async fn json_roster_is_detected_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "members.JSON",
            r#"{"가": {"성명": "가", "회원 등급": "수료"}}"#,
        );
        let roster = load_roster(&path, &RosterColumns::default()).await.unwrap();
        assert_eq!(roster["가"].grade, MembershipGrade::Graduated);
    }

    #[tokio::test]
    async fn unreadable_document_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let paths = RequiredPaths {
            roster: write(dir.path(), "roster.csv", "명부\n성명,회원 등급\n"),
            session: dir.path().join("missing.txt"),
            interim: write(dir.path(), "interim.txt", ""),
            final_log: write(dir.path(), "final.txt", ""),
        };

        let err = load_inputs(&paths, &RosterColumns::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
