use uuid::Uuid;

use crate::models::{CatalogEntry, DerivedTotals, InvoiceDraft, ItemSource, LineItem, Party};
use crate::totals;

pub const DEFAULT_NOTES: &str = "Thank you for doing business with us. Have a great day!";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
const DEFAULT_UNIT_PRICE: &str = "1.00";
const DEFAULT_QUANTITY: &str = "1";

/// Line-item id generator, injected so uniqueness is a property of the
/// collaborator rather than an accident of the store.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Production id source: random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic id source for tests: item-1, item-2, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("item-{}", self.next)
    }
}

/// A typed field edit on a line item. Any of these detaches the item from
/// its catalog entry; only `InvoiceDraft::select_catalog_entry` re-links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemField {
    Name(String),
    Description(String),
    UnitPrice(String),
    Quantity(String),
}

fn blank_item(id: String) -> LineItem {
    LineItem {
        id,
        source: ItemSource::Manual,
        name: String::new(),
        description: String::new(),
        unit_price: DEFAULT_UNIT_PRICE.to_string(),
        quantity: DEFAULT_QUANTITY.to_string(),
    }
}

impl InvoiceDraft {
    /// Fresh editing session: empty parties, default notes and currency,
    /// one blank line item ready to fill in.
    pub fn new(ids: &mut dyn IdSource) -> Self {
        InvoiceDraft {
            invoice_number: "1".to_string(),
            issue_date: String::new(),
            bill_from: Party::default(),
            bill_to: Party::default(),
            notes: DEFAULT_NOTES.to_string(),
            terms: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            tax_rate: String::new(),
            discount_rate: String::new(),
            items: vec![blank_item(ids.next_id())],
        }
    }

    /// Append a blank line item and return its id.
    pub fn add_item(&mut self, ids: &mut dyn IdSource) -> String {
        let id = ids.next_id();
        self.items.push(blank_item(id.clone()));
        id
    }

    /// Remove the item with the given id. No-op when absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Apply a field edit. Editing anything other than the catalog selector
    /// detaches the item from its catalog entry. Unknown ids are a no-op.
    pub fn edit_item(&mut self, id: &str, edit: ItemField) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        match edit {
            ItemField::Name(value) => item.name = value,
            ItemField::Description(value) => item.description = value,
            ItemField::UnitPrice(value) => item.unit_price = value,
            ItemField::Quantity(value) => item.quantity = value,
        }
        item.source = ItemSource::Manual;
    }

    /// Apply a catalog selection. `Some` copies the entry's fields onto the
    /// item and links it; `None` (manual entry chosen) resets the item to
    /// blank defaults. Quantity resets to 1 either way.
    pub fn select_catalog_entry(&mut self, id: &str, entry: Option<&CatalogEntry>) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        match entry {
            Some(entry) => {
                item.source = ItemSource::Catalog {
                    entry_id: entry.id.clone(),
                };
                item.name = entry.name.clone();
                item.description = entry.description.clone();
                item.unit_price = totals::round2(entry.price).to_string();
            }
            None => {
                item.source = ItemSource::Manual;
                item.name = String::new();
                item.description = String::new();
                item.unit_price = DEFAULT_UNIT_PRICE.to_string();
            }
        }
        item.quantity = DEFAULT_QUANTITY.to_string();
    }

    /// Re-derive all totals from the current items and rates.
    pub fn totals(&self) -> DerivedTotals {
        totals::compute_totals(&self.items, &self.tax_rate, &self.discount_rate)
    }
}
