//! `audit`: re-verify every round in a JSONL archive written by `sim`.

use crate::error::{BatchValidationError, CliError};
use crate::io_utils::read_text_auto;
use crate::ui;
use cardroom_engine::audit::{audit_round, AuditReport};
use cardroom_engine::logger::RoundRecord;
use std::io::Write;

/// Reads `input` (plain or `.zst`), rebuilds each round's shoe from its
/// revealed seeds and reports every record that does not check out.
/// Failures are keyed by line number.
pub fn handle_audit_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text_auto(input) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &e)?;
            return Err(CliError::InvalidInput(e));
        }
    };

    let mut audited = 0usize;
    let mut failures: Vec<BatchValidationError<usize>> = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        audited += 1;
        let line_no = idx + 1;
        let record: RoundRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                failures.push(BatchValidationError {
                    item_context: line_no,
                    message: format!("invalid record: {}", e),
                });
                continue;
            }
        };
        match audit_round(&record) {
            Ok(report) if report.is_ok() => {}
            Ok(report) => failures.push(BatchValidationError {
                item_context: line_no,
                message: describe_failure(&report),
            }),
            Err(e) => failures.push(BatchValidationError {
                item_context: line_no,
                message: format!("round {}: {}", record.round_id, e),
            }),
        }
    }

    if audited == 0 {
        let msg = format!("no rounds found in {}", input);
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    writeln!(out, "Audited: {} rounds", audited)?;
    if failures.is_empty() {
        writeln!(out, "OK")?;
        return Ok(());
    }
    for failure in &failures {
        ui::write_error(err, &failure.to_string())?;
    }
    writeln!(out, "Failed: {}", failures.len())?;
    Err(CliError::InvalidInput(format!(
        "{} of {} rounds failed audit",
        failures.len(),
        audited
    )))
}

fn describe_failure(report: &AuditReport) -> String {
    let mut failed = Vec::new();
    if !report.public_hash_ok {
        failed.push("public hash");
    }
    if !report.shoe_hash_ok {
        failed.push("shoe hash");
    }
    if !report.shoe_order_ok {
        failed.push("shoe order");
    }
    if !report.cards_ok {
        failed.push("cards");
    }
    format!("round {} failed: {}", report.round_id, failed.join(", "))
}
