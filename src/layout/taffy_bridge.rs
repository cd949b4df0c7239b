//! Taffy Bridge - Element styles to Taffy styles.
//!
//! Converts our [`Style`] into a `taffy::Style`. Unset properties keep
//! Taffy's defaults, which match the host defaults (flex display, row
//! direction, auto sizes).

use taffy::{
    AlignItems as TaffyAlignItems, Dimension as TaffyDimension, Display as TaffyDisplay,
    FlexDirection as TaffyFlexDirection, FlexWrap as TaffyFlexWrap,
    JustifyContent as TaffyJustifyContent, LengthPercentage, LengthPercentageAuto, Rect,
    Size as TaffySize, Style as TaffyStyle,
};

use crate::error::FlexError;
use crate::node::Style;
use crate::types::{AlignItems, Dimension, Display, FlexDirection, FlexWrap, JustifyContent, Size};

// =============================================================================
// DIMENSION CONVERSION
// =============================================================================

fn to_taffy_dimension(dim: Dimension) -> TaffyDimension {
    match dim {
        Dimension::Auto => TaffyDimension::Auto,
        Dimension::Cells(n) => TaffyDimension::Length(n as f32),
        Dimension::Percent(p) => TaffyDimension::Percent(p / 100.0),
    }
}

fn to_taffy_lpa(dim: Dimension) -> LengthPercentageAuto {
    match dim {
        Dimension::Auto => LengthPercentageAuto::Auto,
        Dimension::Cells(n) => LengthPercentageAuto::Length(n as f32),
        Dimension::Percent(p) => LengthPercentageAuto::Percent(p / 100.0),
    }
}

/// Padding and gap cannot be auto; auto resolves to zero.
fn to_taffy_lp(dim: Dimension) -> LengthPercentage {
    match dim {
        Dimension::Auto => LengthPercentage::Length(0.0),
        Dimension::Cells(n) => LengthPercentage::Length(n as f32),
        Dimension::Percent(p) => LengthPercentage::Percent(p / 100.0),
    }
}

fn resolve(size: Option<&Size>) -> Result<Option<Dimension>, FlexError> {
    size.map(Size::to_dimension).transpose()
}

fn dimension_or_auto(size: Option<&Size>) -> Result<TaffyDimension, FlexError> {
    Ok(resolve(size)?.map_or(TaffyDimension::Auto, to_taffy_dimension))
}

// =============================================================================
// ENUM CONVERSIONS
// =============================================================================

fn to_taffy_display(display: Display) -> TaffyDisplay {
    match display {
        Display::Flex => TaffyDisplay::Flex,
        Display::None => TaffyDisplay::None,
    }
}

fn to_taffy_flex_direction(dir: FlexDirection) -> TaffyFlexDirection {
    match dir {
        FlexDirection::Row => TaffyFlexDirection::Row,
        FlexDirection::Column => TaffyFlexDirection::Column,
        FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
        FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
    }
}

fn to_taffy_flex_wrap(wrap: FlexWrap) -> TaffyFlexWrap {
    match wrap {
        FlexWrap::NoWrap => TaffyFlexWrap::NoWrap,
        FlexWrap::Wrap => TaffyFlexWrap::Wrap,
        FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
    }
}

fn to_taffy_justify_content(justify: JustifyContent) -> TaffyJustifyContent {
    match justify {
        JustifyContent::FlexStart => TaffyJustifyContent::FlexStart,
        JustifyContent::Center => TaffyJustifyContent::Center,
        JustifyContent::FlexEnd => TaffyJustifyContent::FlexEnd,
        JustifyContent::SpaceBetween => TaffyJustifyContent::SpaceBetween,
        JustifyContent::SpaceAround => TaffyJustifyContent::SpaceAround,
        JustifyContent::SpaceEvenly => TaffyJustifyContent::SpaceEvenly,
    }
}

fn to_taffy_align_items(align: AlignItems) -> TaffyAlignItems {
    match align {
        AlignItems::Stretch => TaffyAlignItems::Stretch,
        AlignItems::FlexStart => TaffyAlignItems::FlexStart,
        AlignItems::Center => TaffyAlignItems::Center,
        AlignItems::FlexEnd => TaffyAlignItems::FlexEnd,
        AlignItems::Baseline => TaffyAlignItems::Baseline,
    }
}

// =============================================================================
// STYLE BUILDING
// =============================================================================

/// Build a Taffy style from an element style.
///
/// Fails with [`FlexError::InvalidSize`] when a length cannot be resolved.
pub fn to_taffy_style(style: &Style) -> Result<TaffyStyle, FlexError> {
    let mut out = TaffyStyle {
        size: TaffySize {
            width: dimension_or_auto(style.width.as_ref())?,
            height: dimension_or_auto(style.height.as_ref())?,
        },
        min_size: TaffySize {
            width: dimension_or_auto(style.min_width.as_ref())?,
            height: dimension_or_auto(style.min_height.as_ref())?,
        },
        max_size: TaffySize {
            width: dimension_or_auto(style.max_width.as_ref())?,
            height: dimension_or_auto(style.max_height.as_ref())?,
        },
        align_items: style.align_items.map(to_taffy_align_items),
        justify_content: style.justify_content.map(to_taffy_justify_content),
        ..Default::default()
    };

    if let Some(display) = style.display {
        out.display = to_taffy_display(display);
    }
    if let Some(dir) = style.flex_direction {
        out.flex_direction = to_taffy_flex_direction(dir);
    }
    if let Some(wrap) = style.flex_wrap {
        out.flex_wrap = to_taffy_flex_wrap(wrap);
    }
    if let Some(grow) = style.flex_grow {
        out.flex_grow = grow;
    }
    if let Some(shrink) = style.flex_shrink {
        out.flex_shrink = shrink;
    }
    if let Some(gap) = resolve(style.gap.as_ref())? {
        let gap = to_taffy_lp(gap);
        out.gap = TaffySize { width: gap, height: gap };
    }
    if let Some(padding) = resolve(style.padding.as_ref())? {
        let p = to_taffy_lp(padding);
        out.padding = Rect { left: p, right: p, top: p, bottom: p };
    }
    if let Some(margin) = resolve(style.margin.as_ref())? {
        let m = to_taffy_lpa(margin);
        out.margin = Rect { left: m, right: m, top: m, bottom: m };
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_conversion() {
        assert!(matches!(to_taffy_dimension(Dimension::Auto), TaffyDimension::Auto));
        assert!(matches!(to_taffy_dimension(Dimension::Cells(50)), TaffyDimension::Length(50.0)));
        if let TaffyDimension::Percent(p) = to_taffy_dimension(Dimension::Percent(50.0)) {
            assert!((p - 0.5).abs() < 0.001);
        } else {
            panic!("Expected Percent variant");
        }
    }

    #[test]
    fn test_unset_style_keeps_defaults() {
        let out = to_taffy_style(&Style::default()).unwrap();
        let defaults = TaffyStyle::default();
        assert_eq!(out.display, defaults.display);
        assert_eq!(out.flex_direction, TaffyFlexDirection::Row);
        assert_eq!(out.flex_shrink, defaults.flex_shrink);
        assert_eq!(out.align_items, None);
        assert_eq!(out.justify_content, None);
    }

    #[test]
    fn test_container_properties() {
        let style = Style {
            display: Some(Display::Flex),
            flex_direction: Some(FlexDirection::ColumnReverse),
            align_items: Some(AlignItems::Center),
            justify_content: Some(JustifyContent::Center),
            gap: Some(Size::from(2)),
            ..Default::default()
        };

        let out = to_taffy_style(&style).unwrap();
        assert_eq!(out.display, TaffyDisplay::Flex);
        assert_eq!(out.flex_direction, TaffyFlexDirection::ColumnReverse);
        assert_eq!(out.align_items, Some(TaffyAlignItems::Center));
        assert_eq!(out.justify_content, Some(TaffyJustifyContent::Center));
        assert_eq!(out.gap.width, LengthPercentage::Length(2.0));
    }

    #[test]
    fn test_text_sizes_resolve() {
        let style = Style::default().width("50%").height("3ch");
        let out = to_taffy_style(&style).unwrap();
        assert_eq!(out.size.width, TaffyDimension::Percent(0.5));
        assert_eq!(out.size.height, TaffyDimension::Length(3.0));
    }

    #[test]
    fn test_invalid_size_is_an_error() {
        let style = Style::default().width("1rem");
        assert!(matches!(to_taffy_style(&style), Err(FlexError::InvalidSize(_))));
    }
}
