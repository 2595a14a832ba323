//! Quick-pick symbols offered next to the search box.

pub const PRESET_SYMBOLS: [&str; 4] = ["RELIANCE.NS", "TCS.NS", "INFY.NS", "HDFCBANK.NS"];

/// Resolves a quick-pick by 1-based index or by name (case-insensitive).
pub fn resolve_preset(choice: &str) -> Option<&'static str> {
    let choice = choice.trim();
    if let Ok(index) = choice.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| PRESET_SYMBOLS.get(i))
            .copied();
    }
    PRESET_SYMBOLS
        .iter()
        .find(|symbol| symbol.eq_ignore_ascii_case(choice))
        .copied()
}
