/// Format a price for display, e.g. `19.99` -> `$19.99`.
///
/// Amounts are shown with two decimals unless that would hide digits the
/// catalog sent (`0.125` stays `$0.125`).
pub fn format_price(amount: f64) -> String {
    let padded = format!("{:.2}", amount);
    if padded.parse::<f64>() == Ok(amount) {
        format!("${}", padded)
    } else {
        format!("${}", amount)
    }
}
