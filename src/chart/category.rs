use crate::error::{MoneyManagerError, Result};

/// One category of a chart and its non-negative amount.
///
/// Construction validates the amount, so every `CategoryAmount` in the
/// pipeline is finite and `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAmount {
    name: String,
    amount: f64,
}

impl CategoryAmount {
    /// Create a validated category.
    ///
    /// # Errors
    /// Returns `InvalidInput` if the amount is negative, NaN or infinite.
    pub fn new(name: impl Into<String>, amount: f64) -> Result<Self> {
        let name = name.into();
        if !amount.is_finite() {
            return Err(MoneyManagerError::invalid_input(format!(
                "amount for '{name}' must be a finite number, got {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(MoneyManagerError::invalid_input(format!(
                "amount for '{name}' must not be negative, got {amount}"
            )));
        }
        Ok(Self { name, amount })
    }

    /// Build an ordered, validated sequence from `(name, amount)` pairs.
    ///
    /// # Errors
    /// Returns the first validation error encountered.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, amount)| Self::new(name, amount))
            .collect()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

impl std::str::FromStr for CategoryAmount {
    type Err = MoneyManagerError;

    /// Parse `NAME=AMOUNT`, splitting on the last `=`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((name, amount)) = s.rsplit_once('=') else {
            return Err(MoneyManagerError::invalid_input(format!(
                "expected NAME=AMOUNT, got '{s}'"
            )));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(MoneyManagerError::invalid_input(format!(
                "category name is empty in '{s}'"
            )));
        }
        let amount: f64 = amount.trim().parse().map_err(|_| {
            MoneyManagerError::invalid_input(format!("amount for '{name}' is not a number: '{amount}'"))
        })?;
        Self::new(name, amount)
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
