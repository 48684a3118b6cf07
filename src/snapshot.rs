use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use crate::errors::ValidationError;
use crate::models::{InvoiceDraft, InvoiceRecord};
use crate::totals;

/// Freeze the current draft into an immutable record for preview, export,
/// and history. Totals are re-derived from the draft and every unit price is
/// normalized to two decimals. The record owns deep copies of everything, so
/// edits to the live draft after this point cannot reach it.
pub fn build_snapshot(draft: &InvoiceDraft) -> Result<InvoiceRecord, ValidationError> {
    if draft.items.is_empty() {
        return Err(ValidationError::EmptyInvoice);
    }
    if draft.items.iter().any(|item| item.name.trim().is_empty()) {
        return Err(ValidationError::MissingField { field: "item name" });
    }

    let mut items = draft.items.clone();
    for item in &mut items {
        item.unit_price = totals::format_amount(&item.unit_price);
    }

    Ok(InvoiceRecord {
        id: Uuid::new_v4().to_string(),
        invoice_number: draft.invoice_number.clone(),
        issue_date: draft.issue_date.clone(),
        bill_from: draft.bill_from.clone(),
        bill_to: draft.bill_to.clone(),
        notes: draft.notes.clone(),
        terms: draft.terms.clone(),
        currency_symbol: draft.currency_symbol.clone(),
        tax_rate: draft.tax_rate.clone(),
        discount_rate: draft.discount_rate.clone(),
        totals: draft.totals(),
        items,
        created_at: Utc::now(),
    })
}

/// Default invoice number for when the user leaves the field empty:
/// `INV-<unix millis>-<0..=999>`.
pub fn default_invoice_number() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u16 = rand::thread_rng().gen_range(0..1000);
    format!("INV-{millis}-{suffix}")
}
