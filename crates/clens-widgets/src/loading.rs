//! Loading indicator widget.

use crate::{StatefulWidget, Widget, draw_text_span};
use clens_core::geometry::Rect;
use clens_render::frame::Frame;
use clens_style::Style;

/// Braille spinner frames.
pub const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// ASCII spinner frames.
pub const LINE: &[&str] = &["|", "/", "-", "\\"];

/// A spinner with an optional label, shown while data is unavailable.
#[derive(Debug, Clone)]
pub struct Loading<'a> {
    style: Style,
    frames: &'a [&'a str],
    label: Option<&'a str>,
}

impl Default for Loading<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Loading<'a> {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            frames: DOTS,
            label: None,
        }
    }

    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn frames(mut self, frames: &'a [&'a str]) -> Self {
        self.frames = frames;
        self
    }

    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }
}

/// Animation state for [`Loading`].
#[derive(Debug, Clone, Default)]
pub struct LoadingState {
    pub current_frame: usize,
}

impl LoadingState {
    /// Advance to the next spinner frame.
    pub fn tick(&mut self) {
        self.current_frame = self.current_frame.wrapping_add(1);
    }
}

impl StatefulWidget for Loading<'_> {
    type State = LoadingState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || self.frames.is_empty() {
            return;
        }

        let frame_idx = state.current_frame % self.frames.len();
        let glyph = self.frames[frame_idx];

        let mut x = area.left();
        let y = area.top();
        x = draw_text_span(frame, x, y, glyph, self.style, area.right());

        if let Some(label) = self.label {
            // One column gap between glyph and label.
            x = x.saturating_add(1);
            if x < area.right() {
                draw_text_span(frame, x, y, label, self.style, area.right());
            }
        }
    }
}

impl Widget for Loading<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let mut state = LoadingState::default();
        StatefulWidget::render(self, area, frame, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clens_render::buffer::Buffer;

    fn cell_char(buf: &Buffer, x: u16, y: u16) -> Option<char> {
        buf.get(x, y).and_then(|c| c.content.as_char())
    }

    #[test]
    fn state_tick_wraps_on_overflow() {
        let mut state = LoadingState {
            current_frame: usize::MAX,
        };
        state.tick();
        assert_eq!(state.current_frame, 0);
    }

    #[test]
    fn stateless_render_uses_frame_zero() {
        let frames: &[&str] = &["A", "B", "C"];
        let loading = Loading::new().frames(frames);
        let mut frame = Frame::new(5, 1);
        Widget::render(&loading, Rect::new(0, 0, 5, 1), &mut frame);
        assert_eq!(cell_char(&frame.buffer, 0, 0), Some('A'));
    }

    #[test]
    fn stateful_render_cycles_frames() {
        let frames: &[&str] = &["X", "Y"];
        let loading = Loading::new().frames(frames);
        let area = Rect::new(0, 0, 5, 1);

        let mut frame = Frame::new(5, 1);
        let mut state = LoadingState { current_frame: 1 };
        StatefulWidget::render(&loading, area, &mut frame, &mut state);
        assert_eq!(cell_char(&frame.buffer, 0, 0), Some('Y'));

        let mut frame = Frame::new(5, 1);
        state.current_frame = 2; // wraps
        StatefulWidget::render(&loading, area, &mut frame, &mut state);
        assert_eq!(cell_char(&frame.buffer, 0, 0), Some('X'));
    }

    #[test]
    fn render_with_label() {
        let frames: &[&str] = &["*"];
        let loading = Loading::new().frames(frames).label("Loading");
        let mut frame = Frame::new(12, 1);
        Widget::render(&loading, Rect::new(0, 0, 12, 1), &mut frame);

        assert_eq!(cell_char(&frame.buffer, 0, 0), Some('*'));
        assert_eq!(frame.buffer.row_text(0), "* Loading");
    }

    #[test]
    fn render_zero_area_is_noop() {
        let loading = Loading::new().label("Loading");
        let mut frame = Frame::new(5, 1);
        Widget::render(&loading, Rect::new(0, 0, 0, 0), &mut frame);
        assert!(frame.buffer.get(0, 0).unwrap().is_empty());
    }
}
