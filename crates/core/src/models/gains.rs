use serde::{Deserialize, Serialize};

use super::round2;

/// Day and total gain for a lot, a holding, or a whole portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gains {
    /// Value change since the day's opening price
    pub day: f64,
    /// Value change since purchase (against cost basis)
    pub total: f64,
}

impl Gains {
    pub fn new(day: f64, total: f64) -> Self {
        Self {
            day: round2(day),
            total: round2(total),
        }
    }
}

impl std::ops::Add for Gains {
    type Output = Gains;

    fn add(self, rhs: Gains) -> Gains {
        Gains::new(self.day + rhs.day, self.total + rhs.total)
    }
}

impl std::iter::Sum for Gains {
    fn sum<I: Iterator<Item = Gains>>(iter: I) -> Gains {
        iter.fold(Gains::default(), |acc, g| acc + g)
    }
}

/// Gains broken down per holding, plus the aggregate across them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioGains {
    /// `(symbol, gains)` in portfolio order
    pub holdings: Vec<(String, Gains)>,
    /// Sum of every entry in `holdings`
    pub total: Gains,
}

impl PortfolioGains {
    /// Look up one holding's gains (case-insensitive).
    pub fn get(&self, symbol: &str) -> Option<&Gains> {
        let upper = symbol.to_uppercase();
        self.holdings
            .iter()
            .find(|(s, _)| *s == upper)
            .map(|(_, g)| g)
    }
}
