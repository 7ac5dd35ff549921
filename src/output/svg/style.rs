//! SVG styling primitives: colors, text anchoring and font weight.

use std::fmt;
use std::str::FromStr;

use crate::error::MoneyManagerError;

/// Color token for slices, swatches and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Hex color in `#RGB` or `#RRGGBB` form (e.g., "#FF9999")
    Hex(String),
    /// CSS color keyword (e.g., "orange")
    Named(String),
}

impl ChartColor {
    /// Create a hex color without validation. Use `parse` for user input.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Create a named color without validation.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::Named(name) => name.clone(),
        }
    }

    /// RGB components for hex colors; `None` for named colors.
    #[must_use]
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let Self::Hex(hex) = self else {
            return None;
        };
        let digits = hex.strip_prefix('#')?;
        match digits.len() {
            3 => {
                let mut channels = digits.chars().map(|c| c.to_digit(16));
                let mut next = || -> Option<u8> {
                    let v = u8::try_from(channels.next()??).ok()?;
                    Some(v * 17)
                };
                Some((next()?, next()?, next()?))
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    digits.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
                };
                Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            _ => None,
        }
    }
}

impl FromStr for ChartColor {
    type Err = MoneyManagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(digits) = trimmed.strip_prefix('#') {
            let valid_len = matches!(digits.len(), 3 | 6);
            if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Ok(Self::Hex(trimmed.to_string()));
            }
            return Err(MoneyManagerError::invalid_input(format!(
                "invalid hex color '{trimmed}': expected #RGB or #RRGGBB"
            )));
        }

        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(Self::Named(trimmed.to_ascii_lowercase()));
        }

        Err(MoneyManagerError::invalid_input(format!(
            "invalid color '{s}': expected a hex value or a color name"
        )))
    }
}

impl fmt::Display for ChartColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Font weight for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Bold => write!(f, "bold"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
