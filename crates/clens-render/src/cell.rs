//! A single terminal cell.

use clens_style::{Color, Style, StyleFlags};

/// The textual content of a cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellContent {
    /// Nothing has been written here.
    #[default]
    Empty,
    /// A grapheme cluster (usually one `char`, occasionally more).
    Grapheme(String),
    /// The trailing column of a wide grapheme written to the cell on the left.
    Continuation,
}

impl CellContent {
    /// The content as a single `char`, if it is exactly one.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Grapheme(g) => {
                let mut chars = g.chars();
                let first = chars.next()?;
                chars.next().is_none().then_some(first)
            }
            _ => None,
        }
    }

    /// The content as a string slice. Empty and continuation cells yield `""`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Grapheme(g) => g,
            _ => "",
        }
    }
}

/// One cell of the terminal grid: a grapheme plus its resolved style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Grapheme content.
    pub content: CellContent,
    /// Foreground color, if styled.
    pub fg: Option<Color>,
    /// Background color, if styled.
    pub bg: Option<Color>,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Cell {
    /// Create a cell from a single character.
    #[must_use]
    pub fn from_char(ch: char) -> Self {
        Self {
            content: CellContent::Grapheme(ch.to_string()),
            ..Self::default()
        }
    }

    /// Create a cell from a grapheme cluster.
    #[must_use]
    pub fn from_grapheme(grapheme: &str) -> Self {
        Self {
            content: CellContent::Grapheme(grapheme.to_owned()),
            ..Self::default()
        }
    }

    /// The continuation cell placed after a wide grapheme.
    #[must_use]
    pub fn continuation() -> Self {
        Self {
            content: CellContent::Continuation,
            ..Self::default()
        }
    }

    /// Apply a style to this cell. Unset style properties leave the cell as is.
    pub fn apply(&mut self, style: Style) {
        if let Some(fg) = style.fg {
            self.fg = Some(fg);
        }
        if let Some(bg) = style.bg {
            self.bg = Some(bg);
        }
        if let Some(attrs) = style.attrs {
            self.attrs |= attrs;
        }
    }

    /// Apply a style, builder-style.
    #[must_use]
    pub fn styled(mut self, style: Style) -> Self {
        self.apply(style);
        self
    }

    /// Check if nothing has been written to this cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.content, CellContent::Empty)
    }
}
