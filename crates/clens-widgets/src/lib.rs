#![forbid(unsafe_code)]

//! Cluster browsing widgets for cluster-lens.
//!
//! The view layer of a search/clustering application: a [`ClusterList`]
//! renders the top-level clusters held by a [`ClusterStore`], each with its
//! nested sub-clusters, and routes mouse clicks to the
//! [`ClusterSelectionStore`]. While the data store is loading, a [`Loading`]
//! spinner is shown instead.
//!
//! Widgets hold no persistent state: every render is a pure function of the
//! store snapshots and the target area, and re-rendering with unchanged
//! stores produces an identical frame.
//!
//! [`ClusterStore`]: clens_stores::ClusterStore
//! [`ClusterSelectionStore`]: clens_stores::ClusterSelectionStore

pub mod cluster_list;
pub mod loading;
pub mod mouse;

pub use cluster_list::{ClusterList, ClusterListStyles, SubClusterView, TopClusterView};
pub use loading::{Loading, LoadingState};
pub use mouse::MouseResult;

use clens_core::geometry::Rect;
use clens_render::frame::Frame;
use clens_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Draw a styled text span at (x, y), clipped to `max_x` (exclusive).
///
/// Returns the column after the last written cell.
pub fn draw_text_span(frame: &mut Frame, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
    frame.buffer.set_text(x, y, text, style, max_x)
}
