//! Interactive style variants for selectable widgets.
//!
//! [`InteractiveStyle`] holds style overrides for interaction states:
//! normal, hovered, and selected. When resolving the current style, the
//! appropriate variant is merged on top of the base style using
//! [`Style::patch`], so the more specific state wins for any property it
//! sets. This is the terminal-native equivalent of conditional CSS class
//! modifiers like `.selected`.

use crate::style::Style;

/// The interaction state of a widget region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// Default state, no user interaction.
    Normal,
    /// Mouse cursor is over the region.
    Hovered,
    /// Region is currently selected.
    Selected,
    /// Region is selected and hovered.
    SelectedHovered,
}

/// Style variants for different interaction states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractiveStyle {
    /// Base style applied in all states.
    pub normal: Style,
    /// Override applied when hovered.
    pub hover: Option<Style>,
    /// Override applied when selected.
    pub selected: Option<Style>,
}

impl InteractiveStyle {
    /// Create an interactive style with the given base style.
    #[must_use]
    pub const fn new(normal: Style) -> Self {
        Self {
            normal,
            hover: None,
            selected: None,
        }
    }

    /// Set the hover style override.
    #[must_use]
    pub const fn hover(mut self, style: Style) -> Self {
        self.hover = Some(style);
        self
    }

    /// Set the selected style override.
    #[must_use]
    pub const fn selected(mut self, style: Style) -> Self {
        self.selected = Some(style);
        self
    }

    /// Resolve the style for the given interaction state.
    ///
    /// Starts with `normal` and patches the state-specific override on top.
    /// For `SelectedHovered`, selected is applied first, then hover, so hover
    /// wins for conflicting properties.
    #[must_use]
    pub fn resolve(&self, state: InteractionState) -> Style {
        let base = self.normal;
        match state {
            InteractionState::Normal => base,
            InteractionState::Hovered => match &self.hover {
                Some(h) => base.patch(h),
                None => base,
            },
            InteractionState::Selected => match &self.selected {
                Some(s) => base.patch(s),
                None => base,
            },
            InteractionState::SelectedHovered => {
                let mut style = base;
                if let Some(s) = &self.selected {
                    style = style.patch(s);
                }
                if let Some(h) = &self.hover {
                    style = style.patch(h);
                }
                style
            }
        }
    }
}
