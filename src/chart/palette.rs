use crate::error::{MoneyManagerError, Result};
use crate::output::svg::ChartColor;

/// Ordered, non-empty set of slice colors.
///
/// Colors are assigned by position and cycle when a chart has more
/// categories than colors: category `i` gets `colors[i % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<ChartColor>,
}

impl Palette {
    /// # Errors
    /// Returns `InvalidInput` if `colors` is empty.
    pub fn new(colors: Vec<ChartColor>) -> Result<Self> {
        if colors.is_empty() {
            return Err(MoneyManagerError::invalid_input(
                "palette must contain at least one color",
            ));
        }
        Ok(Self { colors })
    }

    /// Parse a palette from color strings.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty list or any unparseable color.
    pub fn parse<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|c| c.as_ref().parse::<ChartColor>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    #[must_use]
    pub fn color_for(&self, index: usize) -> &ChartColor {
        &self.colors[index % self.colors.len()]
    }

    /// Number of colors; at least 1.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn colors(&self) -> &[ChartColor] {
        &self.colors
    }
}

#[cfg(test)]
#[path = "palette_tests.rs"]
mod tests;
