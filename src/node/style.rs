//! Style set attached to an element.
//!
//! Every property is optional; `None` means "host default". Styles combine
//! with [`Style::merge`], a shallow last-write-wins merge.

use crate::types::{AlignItems, Display, FlexDirection, FlexWrap, JustifyContent, Size};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    // Container
    pub display: Option<Display>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_wrap: Option<FlexWrap>,
    pub align_items: Option<AlignItems>,
    pub justify_content: Option<JustifyContent>,
    pub gap: Option<Size>,

    // Item
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,

    // Dimensions
    pub width: Option<Size>,
    pub height: Option<Size>,
    pub min_width: Option<Size>,
    pub min_height: Option<Size>,
    pub max_width: Option<Size>,
    pub max_height: Option<Size>,

    // Spacing (all sides)
    pub padding: Option<Size>,
    pub margin: Option<Size>,
}

/// Copy every property set in `$src` over `$dst`.
macro_rules! merge_fields {
    ($dst:expr, $src:expr, $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = &$src.$field {
                $dst.$field = Some(value.clone());
            }
        )*
    };
}

impl Style {
    /// Merge `overrides` on top of `self`; set properties in `overrides` win.
    pub fn merge(mut self, overrides: &Style) -> Style {
        merge_fields!(
            self,
            overrides,
            display,
            flex_direction,
            flex_wrap,
            align_items,
            justify_content,
            gap,
            flex_grow,
            flex_shrink,
            width,
            height,
            min_width,
            min_height,
            max_width,
            max_height,
            padding,
            margin,
        );
        self
    }

    pub fn width(mut self, width: impl Into<Size>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Size>) -> Self {
        self.height = Some(height.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_override_wins() {
        let base = Style {
            display: Some(Display::Flex),
            flex_direction: Some(FlexDirection::Row),
            align_items: Some(AlignItems::Center),
            ..Default::default()
        };
        let overrides = Style {
            flex_direction: Some(FlexDirection::Column),
            width: Some(Size::from(10)),
            ..Default::default()
        };

        let merged = base.merge(&overrides);
        assert_eq!(merged.display, Some(Display::Flex));
        assert_eq!(merged.flex_direction, Some(FlexDirection::Column));
        assert_eq!(merged.align_items, Some(AlignItems::Center));
        assert_eq!(merged.width, Some(Size::from(10)));
    }

    #[test]
    fn test_merge_empty_is_identity() {
        let base = Style::default().width(4).height("2");
        assert_eq!(base.clone().merge(&Style::default()), base);
    }
}
