//! Greedy decomposition of an amount over the fixed denomination table.
//!
//! Every step takes as many of the largest remaining denomination as fit.
//! Each value in the table divides the one above it, so the greedy answer is
//! also the shortest one.

use crate::core::{Denomination, Result, Tender, TenderLine, DENOMINATIONS};
use crate::utils::error::TenderError;

/// Breaks `amount` into denomination counts, largest first.
pub fn tender(amount: i64) -> Result<Tender> {
    let amount = checked_amount(amount)?;
    let mut remaining = amount;

    let lines = DENOMINATIONS
        .iter()
        .map(|&denomination| {
            let count = remaining / denomination.value();
            remaining -= count * denomination.value();
            TenderLine {
                denomination,
                count,
            }
        })
        .collect();

    // The table ends at 1, nothing can be left over.
    debug_assert_eq!(remaining, 0);

    let breakdown = Tender { amount, lines };
    tracing::debug!(amount, coins = breakdown.coin_count(), "tendered amount");
    Ok(breakdown)
}

/// Returns the greedy symbol string for `amount`, e.g. `116` -> `"DYNP"`.
///
/// The string holds one character per coin, roughly `amount / 100` bytes.
/// For amounts near `i64::MAX` that allocation cannot succeed; use [`tender`]
/// for the counts instead.
pub fn denominate(amount: i64) -> Result<String> {
    tender(amount).map(|t| t.symbols())
}

/// Same as [`tender`] for textual input. Anything other than a whole,
/// non-negative integer is rejected.
pub fn tender_str(input: &str) -> Result<Tender> {
    let trimmed = input.trim();
    let amount: i64 = trimmed.parse().map_err(|e| {
        TenderError::invalid_input(trimmed, format!("not a whole number ({})", e))
    })?;
    tender(amount)
}

/// Same as [`denominate`] for textual input.
pub fn denominate_str(input: &str) -> Result<String> {
    tender_str(input).map(|t| t.symbols())
}

/// Sums a symbol string back into its amount.
pub fn parse_symbols(symbols: &str) -> Result<u64> {
    symbols.trim().chars().try_fold(0u64, |total, symbol| {
        let denomination = Denomination::from_symbol(symbol).ok_or_else(|| {
            TenderError::invalid_input(symbols, format!("unknown symbol '{}'", symbol))
        })?;
        total
            .checked_add(denomination.value())
            .ok_or_else(|| TenderError::invalid_input(symbols, "total overflows u64"))
    })
}

fn checked_amount(amount: i64) -> Result<u64> {
    u64::try_from(amount)
        .map_err(|_| TenderError::invalid_input(amount, "amount must not be negative"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(symbols: &str) -> u64 {
        parse_symbols(symbols).unwrap()
    }

    #[test]
    fn test_known_amounts() {
        assert_eq!(denominate(0).unwrap(), "");
        assert_eq!(denominate(3).unwrap(), "PPP");
        assert_eq!(denominate(300).unwrap(), "DDD");
        assert_eq!(denominate(20).unwrap(), "YY");
        assert_eq!(denominate(116).unwrap(), "DYNP");
        assert_eq!(denominate(6).unwrap(), "NP");
        assert_eq!(denominate(15).unwrap(), "YN");
        assert_eq!(denominate(99).unwrap(), "YYYYYYYYYNPPPP");
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let err = denominate(-1).unwrap_err();
        assert!(err.is_invalid_input());

        assert!(denominate(i64::MIN).unwrap_err().is_invalid_input());
        assert!(tender(-100).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_symbols_sum_to_amount() {
        for n in 0..=2_000i64 {
            let symbols = denominate(n).unwrap();
            assert_eq!(value_of(&symbols), n as u64, "amount {}", n);
        }
    }

    #[test]
    fn test_symbols_are_grouped_in_descending_order() {
        for n in 0..=2_000i64 {
            let symbols = denominate(n).unwrap();
            let values: Vec<u64> = symbols
                .chars()
                .map(|c| Denomination::from_symbol(c).unwrap().value())
                .collect();
            assert!(values.windows(2).all(|w| w[0] >= w[1]), "amount {}", n);
        }
    }

    #[test]
    fn test_result_is_minimal() {
        for n in 0..=2_000i64 {
            let symbols = denominate(n).unwrap();
            let count = |c: char| symbols.chars().filter(|&s| s == c).count();
            assert!(count('Y') <= 9);
            assert!(count('N') <= 1);
            assert!(count('P') <= 4);
        }
    }

    #[test]
    fn test_deterministic() {
        for n in [0, 1, 5, 116, 1_234] {
            assert_eq!(denominate(n).unwrap(), denominate(n).unwrap());
        }
    }

    #[test]
    fn test_tender_counts() {
        let t = tender(1_234).unwrap();
        let counts: Vec<u64> = t.lines.iter().map(|l| l.count).collect();
        assert_eq!(counts, vec![12, 3, 0, 4]);
        assert_eq!(t.total(), 1_234);
        assert_eq!(t.amount, 1_234);
    }

    #[test]
    fn test_tender_handles_large_amounts() {
        let t = tender(i64::MAX).unwrap();
        assert_eq!(t.total(), i64::MAX as u64);
    }

    #[test]
    fn test_denominate_str() {
        assert_eq!(denominate_str("116").unwrap(), "DYNP");
        assert_eq!(denominate_str("  20\n").unwrap(), "YY");
        assert_eq!(denominate_str("0").unwrap(), "");

        for bad in ["-1", "1.5", "abc", "", "12a", "99999999999999999999"] {
            let err = denominate_str(bad).unwrap_err();
            assert!(err.is_invalid_input(), "input {:?}", bad);
        }
    }

    #[test]
    fn test_tender_str() {
        let t = tender_str(" 116 ").unwrap();
        assert_eq!(t.amount, 116);
        assert_eq!(t.symbols(), "DYNP");

        assert!(tender_str("-1").unwrap_err().is_invalid_input());
        assert!(tender_str("1.5").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_tender_str_large_amount_without_symbols() {
        let t = tender_str("9223372036854775807").unwrap();
        assert_eq!(t.total(), i64::MAX as u64);
        assert_eq!(t.lines[0].count, i64::MAX as u64 / 100);
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_symbols("DYNP").unwrap(), 116);
        assert_eq!(parse_symbols("").unwrap(), 0);
        assert_eq!(parse_symbols("PD").unwrap(), 101);
        assert!(parse_symbols("DXP").unwrap_err().is_invalid_input());
    }
}
