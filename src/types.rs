//! Core types for spark-flex.
//!
//! Layout enums shared by the component and the host, plus the two size
//! types: [`Size`] is what callers write, [`Dimension`] is what the host
//! resolves it to.

use std::fmt;

use crate::error::FlexError;

// =============================================================================
// Size - caller-facing length
// =============================================================================

/// A length as written by the caller: a number of terminal cells or text.
///
/// Text is kept verbatim in rendered styles and only parsed when the host
/// mounts the tree. Accepted text forms are `"12"`, `"12ch"`, `"50%"` and
/// `"auto"`.
///
/// ```
/// use spark_flex::types::Size;
///
/// let cells = Size::from(8);
/// let text = Size::from("1rem");
/// assert_eq!(cells, Size::Number(8.0));
/// assert_eq!(text, Size::Text("1rem".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Size {
    Number(f32),
    Text(String),
}

impl Size {
    /// Resolve to a host dimension.
    pub fn to_dimension(&self) -> Result<Dimension, FlexError> {
        match self {
            Size::Number(n) => cells_from_f32(*n).ok_or_else(|| FlexError::InvalidSize(n.to_string())),
            Size::Text(text) => parse_dimension(text),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Size::Number(n) => write!(f, "{}", n),
            Size::Text(t) => f.write_str(t),
        }
    }
}

impl From<u16> for Size {
    fn from(value: u16) -> Self {
        Self::Number(value as f32)
    }
}

impl From<i32> for Size {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<f32> for Size {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Size {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Size {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn cells_from_f32(n: f32) -> Option<Dimension> {
    if !n.is_finite() || n < 0.0 || n > u16::MAX as f32 {
        return None;
    }
    Some(Dimension::Cells(n.round() as u16))
}

fn parse_dimension(text: &str) -> Result<Dimension, FlexError> {
    let trimmed = text.trim();
    let invalid = || FlexError::InvalidSize(text.to_string());

    if trimmed.eq_ignore_ascii_case("auto") {
        return Ok(Dimension::Auto);
    }
    if let Some(pct) = trimmed.strip_suffix('%') {
        let value: f32 = pct.trim().parse().map_err(|_| invalid())?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid());
        }
        return Ok(Dimension::Percent(value));
    }
    let number = trimmed.strip_suffix("ch").unwrap_or(trimmed).trim();
    let value: f32 = number.parse().map_err(|_| invalid())?;
    cells_from_f32(value).ok_or_else(invalid)
}

// =============================================================================
// Dimension - host-resolved length
// =============================================================================

/// Dimension value for width/height.
///
/// ```
/// use spark_flex::types::Dimension;
///
/// let width = Dimension::Cells(50);       // 50 characters
/// let height = Dimension::Percent(100.0); // Full parent height
/// let auto = Dimension::Auto;             // Content-determined
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Auto-size based on content.
    #[default]
    Auto,
    /// Absolute size in terminal cells.
    Cells(u16),
    /// Percentage of parent size (0-100).
    Percent(f32),
}

// =============================================================================
// Flex Enums
// =============================================================================

/// Flex direction for container layout.
///
/// The host default is `Row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::RowReverse => "row-reverse",
            Self::ColumnReverse => "column-reverse",
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flex wrap behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

/// Justify content (main axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Align items (cross axis alignment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    Center,
    FlexEnd,
    Baseline,
}

/// Display mode of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Flex,
    None,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_size_to_cells() {
        assert_eq!(Size::from(8).to_dimension().unwrap(), Dimension::Cells(8));
        assert_eq!(Size::from(2.6f32).to_dimension().unwrap(), Dimension::Cells(3));
        assert_eq!(Size::from(0).to_dimension().unwrap(), Dimension::Cells(0));
    }

    #[test]
    fn test_text_size_forms() {
        assert_eq!(Size::from("12").to_dimension().unwrap(), Dimension::Cells(12));
        assert_eq!(Size::from(" 4ch ").to_dimension().unwrap(), Dimension::Cells(4));
        assert_eq!(Size::from("AUTO").to_dimension().unwrap(), Dimension::Auto);
        assert_eq!(Size::from("50%").to_dimension().unwrap(), Dimension::Percent(50.0));
    }

    #[test]
    fn test_invalid_sizes() {
        assert!(matches!(
            Size::from("1rem").to_dimension(),
            Err(FlexError::InvalidSize(s)) if s == "1rem"
        ));
        assert!(Size::from(-1).to_dimension().is_err());
        assert!(Size::Number(f32::NAN).to_dimension().is_err());
        assert!(Size::from("-5%").to_dimension().is_err());
    }

    #[test]
    fn test_size_display_is_verbatim() {
        assert_eq!(Size::from("1rem").to_string(), "1rem");
        assert_eq!(Size::from(8).to_string(), "8");
    }

    #[test]
    fn test_flex_direction_names() {
        assert_eq!(FlexDirection::default(), FlexDirection::Row);
        assert_eq!(FlexDirection::RowReverse.to_string(), "row-reverse");
        assert_eq!(FlexDirection::ColumnReverse.as_str(), "column-reverse");
    }
}
