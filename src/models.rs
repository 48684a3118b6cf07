use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where a line item's fields came from. Editing any field other than the
/// catalog selector moves a `Catalog` item back to `Manual`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemSource {
    Catalog {
        #[serde(rename = "entryId")]
        entry_id: String,
    },
    Manual,
}

/// One billable row on an invoice. `unit_price` and `quantity` hold the raw
/// form input; the totals engine parses them leniently (non-numeric counts
/// as zero for that item only).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub source: ItemSource,
    pub name: String,
    pub description: String,
    pub unit_price: String,
    pub quantity: String,
}

/// A reusable product/service template selectable when adding a line item.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Form input for creating or updating a catalog entry. Price arrives as the
/// raw input string and is validated at the command boundary.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCatalogEntry {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// One billing party (sender or recipient) on an invoice.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub address: String,
    pub email: String,
}

/// The in-progress invoice for one editing session. Created fresh per
/// session, mutated through the form, discarded when the session closes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub issue_date: String,
    pub bill_from: Party,
    pub bill_to: Party,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    pub currency_symbol: String,
    /// Tax rate percent as raw form input; non-numeric is treated as 0.
    pub tax_rate: String,
    /// Discount rate percent as raw form input; non-numeric is treated as 0.
    pub discount_rate: String,
    pub items: Vec<LineItem>,
}

/// Derived totals, always re-computed in full from the draft. All values
/// carry exactly two fractional digits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedTotals {
    pub sub_total: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub grand_total: Decimal,
}

/// The frozen record of an invoice at submission time: what was actually
/// presented and exported. Owns deep copies; later draft edits never reach it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub id: String,
    pub invoice_number: String,
    pub issue_date: String,
    pub bill_from: Party,
    pub bill_to: Party,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    pub currency_symbol: String,
    pub tax_rate: String,
    pub discount_rate: String,
    pub items: Vec<LineItem>,
    pub totals: DerivedTotals,
    pub created_at: DateTime<Utc>,
}

/// Billing-party profile persisted under `billingInfo`, reused across
/// invoices.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BillingProfile {
    pub name: String,
    pub company: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub email: String,
    pub phone: String,
}
