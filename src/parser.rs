//! Parsing of the linter's line-oriented output.
//!
//! The tool's textual format is not a formal contract, so all
//! stringly-typed handling lives behind [`parse_output`]; the rest of the
//! crate only ever sees structured records.

use tracing::warn;

/// One parsed line of linter output.
///
/// The file field still carries the flattened workspace path; translation
/// back to repository terms happens in [`crate::translate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    /// Severity label as printed by the tool ("warning", "error", ...).
    pub severity: String,
    /// Flattened file reference.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Free-form message; may contain colons and flattened paths.
    pub message: String,
}

/// Parse raw tool output into records, in emission order.
///
/// Expected line format is `file:line:column:severity:message`, where only
/// the message may contain further colons. The column field is parsed
/// positionally but not retained. A line with fewer than five fields, or a
/// line number that is not a non-negative integer, is warned about and
/// skipped; malformed lines never abort the batch.
pub fn parse_output(raw: &str) -> Vec<DiagnosticRecord> {
    let mut records = Vec::new();
    for line in raw.lines() {
        let fields: Vec<&str> = line.splitn(5, ':').collect();
        if fields.len() != 5 {
            warn!("failed to parse string {}", line);
            continue;
        }

        let (file, lino, _column, severity, message) =
            (fields[0], fields[1], fields[2], fields[3], fields[4]);
        let line_number: usize = match lino.parse() {
            Ok(n) => n,
            Err(_) => {
                warn!("failed to parse line number from '{}' in '{}'", lino, line);
                continue;
            }
        };

        records.push(DiagnosticRecord {
            severity: severity.to_string(),
            file: file.to_string(),
            line: line_number,
            message: message.to_string(),
        });
    }
    records
}
