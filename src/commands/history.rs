use crate::db::{keys, Repository};
use crate::errors::Result;
use crate::models::InvoiceRecord;

/// Load the invoice history, most recent first.
pub fn get_history(repo: &impl Repository) -> Vec<InvoiceRecord> {
    repo.get_or_default(keys::INVOICE_HISTORY)
}

/// Append a frozen record to the history. Records are prepended so the list
/// stays most-recent-first, and the write replaces the whole stored array.
pub fn record_invoice(repo: &impl Repository, record: &InvoiceRecord) -> Result<()> {
    let mut history = get_history(repo);
    history.insert(0, record.clone());
    repo.set(keys::INVOICE_HISTORY, &history)?;

    Ok(())
}

/// Delete a record by id. No-op when absent.
pub fn delete_invoice(repo: &impl Repository, id: &str) -> Result<()> {
    let mut history = get_history(repo);
    history.retain(|record| record.id != id);
    repo.set(keys::INVOICE_HISTORY, &history)?;

    Ok(())
}
