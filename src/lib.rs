//! Truebill core: invoice drafting, derived totals, product catalog, and
//! local invoice history.
//!
//! The UI shell owns rendering, routing, and the rasterize-to-PDF pipeline;
//! this crate owns the state and arithmetic behind them. A draft invoice is
//! edited through [`models::InvoiceDraft`], totals are re-derived in full on
//! every change, and submission freezes the draft into an immutable
//! [`models::InvoiceRecord`] that lands in the persisted history.

pub mod catalog;
pub mod commands;
pub mod db;
pub mod errors;
pub mod export;
pub mod invoice;
pub mod models;
pub mod snapshot;
pub mod totals;


pub use db::{Database, MemoryRepository, Repository};
pub use errors::{Error, ExportError, PersistenceError, Result, ValidationError};
pub use invoice::{IdSource, ItemField, SequentialIds, UuidIds};
pub use models::{
    BillingProfile, CatalogEntry, DerivedTotals, InvoiceDraft, InvoiceRecord, ItemSource,
    LineItem, NewCatalogEntry, Party,
};
pub use snapshot::build_snapshot;
pub use totals::compute_totals;
