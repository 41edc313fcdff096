//! # Checkout Arithmetic
//!
//! Pure payment-gate functions evaluated against the server-computed grand
//! total. The gate only disables the confirm action in the UI; the backend
//! validates payment sufficiency independently.

/// Change due: `cash_tendered - grand_total`, never negative.
pub fn change(cash_tendered: i64, grand_total: i64) -> i64 {
    (cash_tendered - grand_total).max(0)
}

/// Whether the confirm action is enabled: some cash was tendered and it
/// covers the grand total.
pub fn can_confirm(cash_tendered: i64, grand_total: i64) -> bool {
    cash_tendered > 0 && cash_tendered >= grand_total
}
