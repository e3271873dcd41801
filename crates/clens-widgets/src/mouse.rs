//! Mouse dispatch results for cluster widgets.

use clens_stores::ClusterId;

/// The outcome of routing a mouse event to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event did not apply to this widget.
    Ignored,
    /// A cluster's selection state was toggled in the selection store.
    Toggled(ClusterId),
    /// The pointer is over a cluster region.
    Hovered(ClusterId),
}
