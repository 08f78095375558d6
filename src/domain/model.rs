use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed coin or note value with its one-character display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    Dollar,
    Dime,
    Nickel,
    Penny,
}

/// Denomination table, strictly descending by value and ending at 1.
pub const DENOMINATIONS: [Denomination; 4] = [
    Denomination::Dollar,
    Denomination::Dime,
    Denomination::Nickel,
    Denomination::Penny,
];

impl Denomination {
    pub const fn value(self) -> u64 {
        match self {
            Self::Dollar => 100,
            Self::Dime => 10,
            Self::Nickel => 5,
            Self::Penny => 1,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Dollar => 'D',
            Self::Dime => 'Y',
            Self::Nickel => 'N',
            Self::Penny => 'P',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        DENOMINATIONS.iter().copied().find(|d| d.symbol() == symbol)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One row of a breakdown: how many of a denomination were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenderLine {
    pub denomination: Denomination,
    pub count: u64,
}

/// Greedy breakdown of an amount, one line per denomination in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tender {
    pub amount: u64,
    pub lines: Vec<TenderLine>,
}

impl Tender {
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| line.denomination.value() * line.count)
            .sum()
    }

    pub fn coin_count(&self) -> u64 {
        self.lines.iter().map(|line| line.count).sum()
    }

    /// One character per coin; see [`crate::denominate`] on very large amounts.
    pub fn symbols(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            for _ in 0..line.count {
                write!(f, "{}", line.denomination.symbol())?;
            }
        }
        Ok(())
    }
}
