use crate::models::Share;

/// `₹1500`, `₹12.5`: the symbol glued to the shortest exact number.
pub fn money(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, amount)
}

/// `Asha(50); Ravi(25.5)`
pub fn shares_summary(shares: &[Share]) -> String {
    shares
        .iter()
        .map(|s| format!("{}({})", s.display_name, s.share_amount))
        .collect::<Vec<_>>()
        .join("; ")
}
