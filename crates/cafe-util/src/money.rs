//! Currency display

/// Currency label printed in front of every amount
pub const CURRENCY_LABEL: &str = "PHP";

/// Format an amount with the currency label and two decimals, e.g. `PHP 20.00`.
///
/// Amounts are carried unrounded; rounding happens only here.
pub fn format_amount(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY_LABEL, amount)
}
