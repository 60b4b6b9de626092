//! Audit log CLI command

use crate::error::ReadlogResult;
use crate::storage::Storage;

/// Print the most recent audit records, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> ReadlogResult<()> {
    let records = storage.audit().read_recent(limit)?;

    if records.is_empty() {
        println!("No audit records yet.");
        return Ok(());
    }

    for record in &records {
        println!("{}", record.format_human_readable());
    }
    Ok(())
}
