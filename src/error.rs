use thiserror::Error;

/// Fatal conditions that stop a ledger run before any fine is computed.
///
/// Per-record anomalies (unknown names, malformed tab regions) are not
/// errors; they are skipped and logged at debug level.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A required label never appeared in a source document.
    #[error("section '{section}' not found in {document}; add the line and retry")]
    MissingSection {
        section: &'static str,
        document: &'static str,
    },

    /// A required document, roster or field was not supplied.
    #[error("missing input: {input}")]
    MissingInput { input: &'static str },
}
