//! Monetary units and money range rules.

pub type Amount = i64;

pub const COIN: Amount = 100_000_000;
pub const CENT: Amount = 1_000_000;

/// Returns true when `value` lies in `0..=max_money`.
///
/// The ceiling is per network (`ConsensusParams::max_money`).
pub fn money_range(value: Amount, max_money: Amount) -> bool {
    (0..=max_money).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_range_bounds() {
        let max = 21_000_000 * COIN;
        assert!(money_range(0, max));
        assert!(money_range(max, max));
        assert!(!money_range(max + 1, max));
        assert!(!money_range(-CENT, max));
    }
}
