//! Style types with CSS-like cascading semantics.

use bitflags::bitflags;

/// A terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 24-bit RGB color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Create an RGB color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSED  = 0b0001_0000;
    }
}

/// A text style: optional foreground, background, and attribute flags.
///
/// Every field is optional so styles compose: a `None` field means "inherit
/// whatever is already there". [`Style::patch`] merges another style on top,
/// with the other style winning for any property it sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Attribute flags, if set.
    pub attrs: Option<StyleFlags>,
}

impl Style {
    /// Create an empty style (all fields inherit).
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Add attribute flags on top of any already set.
    #[must_use]
    pub fn add_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or_default().union(attrs));
        self
    }

    /// Merge `other` on top of `self`.
    ///
    /// Properties set in `other` win; unset properties keep `self`'s value.
    /// Attribute flags are unioned rather than replaced, mirroring how CSS
    /// classes accumulate text decorations.
    #[must_use]
    pub fn patch(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: match (self.attrs, other.attrs) {
                (Some(a), Some(b)) => Some(a.union(b)),
                (a, b) => b.or(a),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_other_wins_for_set_properties() {
        let base = Style::new().fg(Color::White).bg(Color::Black);
        let over = Style::new().fg(Color::Yellow);
        let merged = base.patch(&over);
        assert_eq!(merged.fg, Some(Color::Yellow));
        assert_eq!(merged.bg, Some(Color::Black));
    }

    #[test]
    fn patch_unions_attrs() {
        let base = Style::new().attrs(StyleFlags::BOLD);
        let over = Style::new().attrs(StyleFlags::REVERSED);
        let merged = base.patch(&over);
        assert_eq!(merged.attrs, Some(StyleFlags::BOLD | StyleFlags::REVERSED));
    }

    #[test]
    fn patch_empty_is_identity() {
        let base = Style::new().fg(Color::rgb(1, 2, 3)).attrs(StyleFlags::DIM);
        assert_eq!(base.patch(&Style::new()), base);
    }

    #[test]
    fn add_attrs_accumulates() {
        let style = Style::new()
            .add_attrs(StyleFlags::BOLD)
            .add_attrs(StyleFlags::UNDERLINE);
        assert_eq!(style.attrs, Some(StyleFlags::BOLD | StyleFlags::UNDERLINE));
    }
}
