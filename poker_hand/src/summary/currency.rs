//! Currency normalization for summary amounts.
//!
//! Every monetary value leaving the parser is expressed in dollars. Amounts in
//! other currencies are converted with a fixed rate table, once, after the
//! numeric literal has been parsed.

use serde::{Deserialize, Serialize};

/// Currencies the poker client writes into summary files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    /// `$`, the reference currency
    Dollar,
    /// `¥`
    Yuan,
    /// `€`
    Euro,
}

impl Currency {
    /// Look up a currency by its symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '$' => Some(Self::Dollar),
            '¥' => Some(Self::Yuan),
            '€' => Some(Self::Euro),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Dollar => '$',
            Self::Yuan => '¥',
            Self::Euro => '€',
        }
    }

    /// Dollars per one unit of this currency
    pub fn rate(self) -> f64 {
        match self {
            Self::Dollar => 1.0,
            Self::Yuan => 0.14,
            Self::Euro => 1.04,
        }
    }

    /// Convert an amount in this currency to dollars
    pub fn to_reference(self, amount: f64) -> f64 {
        amount * self.rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_symbol() {
        assert_eq!(Currency::from_symbol('$'), Some(Currency::Dollar));
        assert_eq!(Currency::from_symbol('¥'), Some(Currency::Yuan));
        assert_eq!(Currency::from_symbol('€'), Some(Currency::Euro));
        assert_eq!(Currency::from_symbol('£'), None);
    }

    #[test]
    fn test_symbol_round_trips() {
        for currency in [Currency::Dollar, Currency::Yuan, Currency::Euro] {
            assert_eq!(Currency::from_symbol(currency.symbol()), Some(currency));
        }
    }

    #[test]
    fn test_to_reference() {
        assert_eq!(Currency::Dollar.to_reference(2.5), 2.5);
        assert!((Currency::Yuan.to_reference(100.0) - 14.0).abs() < 1e-9);
        assert!((Currency::Euro.to_reference(10.0) - 10.4).abs() < 1e-9);
    }
}
