use crate::errors::{ExportError, ValidationError};
use crate::models::InvoiceRecord;

/// The rasterize/PDF/print pipeline. Implemented by the UI shell; the core
/// hands over an immutable record and does not await completion.
pub trait ExportSurface {
    fn save_pdf(&self, record: &InvoiceRecord, filename: &str) -> Result<(), ExportError>;
    fn print(&self, record: &InvoiceRecord) -> Result<(), ExportError>;
}

/// Download filename for a record's PDF copy.
pub fn pdf_filename(record: &InvoiceRecord) -> String {
    format!("invoice-{}.pdf", record.invoice_number)
}

/// Prefilled message for the share deep link.
pub fn share_message(record: &InvoiceRecord) -> String {
    format!(
        "Hello, please find your invoice attached.\nTotal amount due: {} {}",
        record.currency_symbol, record.totals.grand_total
    )
}

/// Build a `https://wa.me/<phone>?text=<message>` deep link. The phone is
/// reduced to digits with a single leading `+`; a digit-free input is a
/// validation error.
pub fn whatsapp_share_url(phone: &str, message: &str) -> Result<String, ValidationError> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(ValidationError::MissingField {
            field: "phone number",
        });
    }

    Ok(format!(
        "https://wa.me/+{}?text={}",
        digits,
        urlencoding::encode(message)
    ))
}
