//! Day-over-day change computation.

use rust_decimal::Decimal;

/// Fractional change of `today` against the `yesterday` baseline.
///
/// Returns `None` when either side is unresolved or the baseline is zero;
/// an unknown baseline must never read as "unchanged". Callers apply
/// percentage formatting at display time.
pub fn calc_change(today: Option<Decimal>, yesterday: Option<Decimal>) -> Option<Decimal> {
    let today = today?;
    let yesterday = yesterday?;
    if yesterday.is_zero() {
        return None;
    }
    Some((today - yesterday) / yesterday)
}
