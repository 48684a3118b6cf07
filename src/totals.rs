use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DerivedTotals, LineItem};

/// Round to two decimal places, half away from zero, with the scale pinned
/// to exactly two digits so display and serialization always show cents.
pub fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Lenient parse of a money or rate input. Missing or non-numeric is zero.
pub fn parse_amount(raw: &str) -> Decimal {
    raw.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Lenient parse of a quantity input, truncated to a whole number. Missing
/// or non-numeric is zero, which zeroes that item's contribution only.
pub fn parse_quantity(raw: &str) -> Decimal {
    parse_amount(raw).trunc()
}

/// Normalize a raw price input to a two-decimal display string.
pub fn format_amount(raw: &str) -> String {
    round2(parse_amount(raw)).to_string()
}

/// Derive all invoice totals from the line items and rate inputs.
///
/// The subtotal is summed at full precision and rounded once at the end, so
/// per-item rounding error never compounds. Discount and tax are taken from
/// the rounded subtotal; the grand total is not clamped, so a discount rate
/// above 100% can legitimately drive it negative.
pub fn compute_totals(items: &[LineItem], tax_rate: &str, discount_rate: &str) -> DerivedTotals {
    let exact: Decimal = items
        .iter()
        .map(|item| parse_amount(&item.unit_price) * parse_quantity(&item.quantity))
        .sum();

    let sub_total = round2(exact);
    let discount_amount = round2(sub_total * parse_amount(discount_rate) / Decimal::ONE_HUNDRED);
    let tax_amount = round2(sub_total * parse_amount(tax_rate) / Decimal::ONE_HUNDRED);
    let grand_total = round2(sub_total - discount_amount + tax_amount);

    DerivedTotals {
        sub_total,
        tax_amount,
        discount_amount,
        grand_total,
    }
}
