//! Hierarchical cluster browsing views.
//!
//! Three views compose top-down, mirroring the cluster hierarchy:
//!
//! - [`ClusterList`] iterates the data store's top-level clusters and shows
//!   a loading indicator while the store is loading.
//! - [`TopClusterView`] renders one top-level cluster's label/count summary
//!   header plus a nested row per sub-cluster.
//! - [`SubClusterView`] renders one child cluster's label and inline count.
//!
//! Every cluster region is clickable and toggles that cluster's entry in the
//! selection store. Sub-cluster rows register their hit regions after the
//! enclosing block, so the hit grid resolves a click on a sub-cluster to the
//! sub-cluster alone and the parent never sees it.
//!
//! # Hit data convention
//!
//! All regions register `HitRegion::Content` with `data = ClusterId.0`.

use crate::loading::Loading;
use crate::mouse::MouseResult;
use crate::{Widget, draw_text_span};
use clens_core::event::{MouseButton, MouseEvent, MouseEventKind};
use clens_core::geometry::Rect;
use clens_render::frame::{Frame, HitData, HitId, HitRegion};
use clens_stores::{ClusterId, ClusterNode, ClusterSelectionStore, ClusterStore};
use clens_style::{Color, InteractionState, InteractiveStyle, Style, StyleFlags};

/// Default glyph for a top-level cluster, drawn in the warning style.
pub const TOP_ICON: &str = "●";
/// Default glyph for a sub-cluster (a closed folder, terminal-sized).
pub const SUB_ICON: &str = "▪";
/// Guide for a sub-cluster row with siblings below.
pub const GUIDE_BRANCH: &str = "├─ ";
/// Guide for the last sub-cluster row.
pub const GUIDE_LAST: &str = "└─ ";

/// Style set for the cluster views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterListStyles {
    /// Top-level cluster label style, with its selected override.
    pub top: InteractiveStyle,
    /// Extra override patched onto top-level labels that have sub-clusters.
    pub with_subclusters: Option<Style>,
    /// Sub-cluster label style, with its selected override.
    pub sub: InteractiveStyle,
    /// Icon glyph style (warning/highlight intent).
    pub icon: Style,
    /// Count summary style.
    pub meta: Style,
    /// Guide character style.
    pub guide: Style,
}

impl Default for ClusterListStyles {
    fn default() -> Self {
        let selected = Style::new().attrs(StyleFlags::REVERSED);
        let hovered = Style::new().attrs(StyleFlags::UNDERLINE);
        Self {
            top: InteractiveStyle::new(Style::new())
                .hover(hovered)
                .selected(selected),
            with_subclusters: Some(Style::new().attrs(StyleFlags::BOLD)),
            sub: InteractiveStyle::new(Style::new())
                .hover(hovered)
                .selected(selected),
            icon: Style::new().fg(Color::Yellow),
            meta: Style::new().attrs(StyleFlags::DIM),
            guide: Style::new().attrs(StyleFlags::DIM),
        }
    }
}

/// Aggregate summary for a top-level cluster.
///
/// `"(<size> docs"` followed by `", <n> subclusters)"` when the node has one
/// or more children, else just `")"`.
#[must_use]
pub fn cluster_summary(cluster: &ClusterNode) -> String {
    let mut meta = format!("({} docs", cluster.size());
    if cluster.subcluster_count() > 0 {
        meta.push_str(&format!(", {} subclusters)", cluster.subcluster_count()));
    } else {
        meta.push(')');
    }
    meta
}

/// Inline summary for a sub-cluster: `"(<size>)"`.
#[must_use]
pub fn subcluster_summary(cluster: &ClusterNode) -> String {
    format!("({})", cluster.size())
}

/// Verbose sub-cluster summary used as a hover annotation: `"(<size> docs)"`.
#[must_use]
pub fn subcluster_hover_summary(cluster: &ClusterNode) -> String {
    format!("({} docs)", cluster.size())
}

/// View of one child cluster: icon, joined phrases, inline count.
#[derive(Debug, Clone)]
pub struct SubClusterView<'a> {
    cluster: &'a ClusterNode,
    selection: &'a ClusterSelectionStore,
    styles: ClusterListStyles,
    icon: &'a str,
    hit_id: Option<HitId>,
    hovered: bool,
}

impl<'a> SubClusterView<'a> {
    /// Create a view of `cluster` backed by the given selection store.
    #[must_use]
    pub fn new(cluster: &'a ClusterNode, selection: &'a ClusterSelectionStore) -> Self {
        Self {
            cluster,
            selection,
            styles: ClusterListStyles::default(),
            icon: SUB_ICON,
            hit_id: None,
            hovered: false,
        }
    }

    /// Set the style set.
    #[must_use]
    pub fn styles(mut self, styles: ClusterListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the icon glyph.
    #[must_use]
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = icon;
        self
    }

    /// Register the rendered text extent under this hit ID.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Mark this sub-cluster as the one under the mouse cursor.
    #[must_use]
    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    /// The verbose hover annotation for this sub-cluster.
    #[must_use]
    pub fn hover_summary(&self) -> String {
        subcluster_hover_summary(self.cluster)
    }

    fn interaction_state(&self) -> InteractionState {
        match (self.selection.is_selected(self.cluster), self.hovered) {
            (true, true) => InteractionState::SelectedHovered,
            (true, false) => InteractionState::Selected,
            (false, true) => InteractionState::Hovered,
            (false, false) => InteractionState::Normal,
        }
    }
}

impl Widget for SubClusterView<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }

        let style = self.styles.sub.resolve(self.interaction_state());
        let y = area.top();
        let max = area.right();
        let start = area.left();

        let mut x = draw_text_span(frame, start, y, self.icon, style.patch(&self.styles.icon), max);
        x = draw_text_span(frame, x, y, " ", style, max);
        x = draw_text_span(frame, x, y, &self.cluster.joined_labels(), style, max);
        x = draw_text_span(frame, x, y, " ", style, max);
        x = draw_text_span(
            frame,
            x,
            y,
            &subcluster_summary(self.cluster),
            style.patch(&self.styles.meta),
            max,
        );

        // Only the text extent is clickable; registered after the enclosing
        // block so it shadows the parent where they overlap.
        if let Some(id) = self.hit_id {
            let extent = Rect::new(start, y, x.saturating_sub(start), 1);
            frame.register_hit(extent, id, HitRegion::Content, self.cluster.id().0);
        }
    }
}

/// View of one top-level cluster: summary header plus nested sub-cluster rows.
#[derive(Debug, Clone)]
pub struct TopClusterView<'a> {
    cluster: &'a ClusterNode,
    selection: &'a ClusterSelectionStore,
    styles: ClusterListStyles,
    icon: &'a str,
    sub_icon: &'a str,
    guide_branch: &'a str,
    guide_last: &'a str,
    hit_id: Option<HitId>,
    hovered: Option<ClusterId>,
}

impl<'a> TopClusterView<'a> {
    /// Create a view of `cluster` backed by the given selection store.
    #[must_use]
    pub fn new(cluster: &'a ClusterNode, selection: &'a ClusterSelectionStore) -> Self {
        Self {
            cluster,
            selection,
            styles: ClusterListStyles::default(),
            icon: TOP_ICON,
            sub_icon: SUB_ICON,
            guide_branch: GUIDE_BRANCH,
            guide_last: GUIDE_LAST,
            hit_id: None,
            hovered: None,
        }
    }

    /// Set the style set.
    #[must_use]
    pub fn styles(mut self, styles: ClusterListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the icon glyphs for this cluster and its sub-clusters.
    #[must_use]
    pub fn icons(mut self, top: &'a str, sub: &'a str) -> Self {
        self.icon = top;
        self.sub_icon = sub;
        self
    }

    /// Set the sub-cluster guide strings (branch, last).
    #[must_use]
    pub fn guides(mut self, branch: &'a str, last: &'a str) -> Self {
        self.guide_branch = branch;
        self.guide_last = last;
        self
    }

    /// Register the rendered block under this hit ID.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Set which cluster in this block, if any, the mouse is over.
    #[must_use]
    pub fn hovered(mut self, id: Option<ClusterId>) -> Self {
        self.hovered = id;
        self
    }

    /// Rows this view occupies when fully visible: header plus one per child.
    #[must_use]
    pub fn height(&self) -> usize {
        1 + self.cluster.subcluster_count()
    }

    /// The aggregate summary text for this cluster.
    #[must_use]
    pub fn summary(&self) -> String {
        cluster_summary(self.cluster)
    }

    fn label_style(&self) -> Style {
        let selected = self.selection.is_selected(self.cluster);
        let hovered = self.hovered == Some(self.cluster.id());
        let state = match (selected, hovered) {
            (true, true) => InteractionState::SelectedHovered,
            (true, false) => InteractionState::Selected,
            (false, true) => InteractionState::Hovered,
            (false, false) => InteractionState::Normal,
        };
        let mut style = self.styles.top.resolve(state);
        if self.cluster.has_subclusters()
            && let Some(ws) = &self.styles.with_subclusters
        {
            style = style.patch(ws);
        }
        style
    }
}

impl Widget for TopClusterView<'_> {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }

        // The whole block answers to this cluster; sub-cluster rows overwrite
        // their own extents afterwards.
        let block_height = (self.height()).min(area.height as usize) as u16;
        if let Some(id) = self.hit_id {
            let block = Rect::new(area.x, area.y, area.width, block_height);
            frame.register_hit(block, id, HitRegion::Content, self.cluster.id().0);
        }

        let style = self.label_style();
        let y = area.top();
        let max = area.right();

        let mut x = draw_text_span(frame, area.x, y, self.icon, style.patch(&self.styles.icon), max);
        x = draw_text_span(frame, x, y, " ", style, max);
        x = draw_text_span(frame, x, y, &self.cluster.joined_labels(), style, max);
        x = draw_text_span(frame, x, y, " ", style, max);
        draw_text_span(frame, x, y, &self.summary(), style.patch(&self.styles.meta), max);

        let count = self.cluster.subcluster_count();
        for (i, sub) in self.cluster.subclusters().iter().enumerate() {
            let row = 1 + i;
            if row >= area.height as usize {
                break;
            }
            let y = area.y + row as u16;
            let guide = if i + 1 == count {
                self.guide_last
            } else {
                self.guide_branch
            };
            let gx = draw_text_span(frame, area.x, y, guide, self.styles.guide, max);

            let mut view = SubClusterView::new(sub, self.selection)
                .styles(self.styles.clone())
                .icon(self.sub_icon)
                .hovered(self.hovered == Some(sub.id()));
            if let Some(id) = self.hit_id {
                view = view.hit_id(id);
            }
            view.render(Rect::new(gx, y, max.saturating_sub(gx), 1), frame);
        }
    }
}

/// The root cluster browsing view.
///
/// Holds handles to the two stores (cheap clones of shared state) and a
/// [`HitId`] under which every cluster region is registered. While the data
/// store is loading, a [`Loading`] spinner is rendered and no cluster views
/// are produced; otherwise one [`TopClusterView`] per store entry, in store
/// order.
#[derive(Debug, Clone)]
pub struct ClusterList {
    data: ClusterStore,
    selection: ClusterSelectionStore,
    styles: ClusterListStyles,
    hit_id: HitId,
    hovered: Option<ClusterId>,
    loading_label: String,
}

impl ClusterList {
    /// Create a list over the given stores.
    #[must_use]
    pub fn new(data: ClusterStore, selection: ClusterSelectionStore) -> Self {
        Self {
            data,
            selection,
            styles: ClusterListStyles::default(),
            hit_id: HitId::default(),
            hovered: None,
            loading_label: String::from("Loading"),
        }
    }

    /// Set the style set.
    #[must_use]
    pub fn styles(mut self, styles: ClusterListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Set the hit ID for mouse interaction.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    /// Set which cluster, if any, the mouse is over. Hosts feed the id from
    /// [`MouseResult::Hovered`] back here so the next render shows the hover
    /// style.
    #[must_use]
    pub fn hovered(mut self, id: Option<ClusterId>) -> Self {
        self.hovered = id;
        self
    }

    /// Set the loading indicator label.
    #[must_use]
    pub fn loading_label(mut self, label: impl Into<String>) -> Self {
        self.loading_label = label.into();
        self
    }

    /// Handle a mouse event for this list.
    ///
    /// A left-button press on a registered cluster region toggles that
    /// cluster's selection in the selection store; the call is
    /// fire-and-forget and the result shows up on the next render. A move
    /// over a region reports it as hovered. Anything else is ignored.
    ///
    /// `hit` is the result of `frame.hit_test(event.x, event.y)` from the
    /// frame this list last rendered into.
    pub fn handle_mouse(
        &self,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> MouseResult {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some((id, HitRegion::Content, data)) = hit
                    && id == self.hit_id
                {
                    let cluster_id = ClusterId(data);
                    if let Some(node) = self.data.find(cluster_id) {
                        self.selection.toggle_selection(&node);
                        return MouseResult::Toggled(cluster_id);
                    }
                }
                MouseResult::Ignored
            }
            MouseEventKind::Moved => {
                if let Some((id, HitRegion::Content, data)) = hit
                    && id == self.hit_id
                {
                    MouseResult::Hovered(ClusterId(data))
                } else {
                    MouseResult::Ignored
                }
            }
            _ => MouseResult::Ignored,
        }
    }

    /// The verbose hover annotation for a hit, if it is a sub-cluster.
    ///
    /// Top-level clusters already show their full summary inline, so only
    /// sub-clusters carry an annotation.
    #[must_use]
    pub fn hover_annotation(
        &self,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> Option<String> {
        let Some((id, HitRegion::Content, data)) = hit else {
            return None;
        };
        if id != self.hit_id {
            return None;
        }
        let cluster_id = ClusterId(data);
        let is_top_level = self
            .data
            .with_clusters(|clusters| clusters.iter().any(|c| c.id() == cluster_id));
        if is_top_level {
            return None;
        }
        self.data
            .find(cluster_id)
            .map(|node| subcluster_hover_summary(&node))
    }
}

impl Widget for ClusterList {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }

        let _span = tracing::debug_span!(
            "cluster_list.render",
            loading = self.data.loading(),
            clusters = self.data.cluster_count(),
        )
        .entered();

        if self.data.loading() {
            Loading::new()
                .label(&self.loading_label)
                .style(self.styles.meta)
                .render(area, frame);
            return;
        }

        self.data.with_clusters(|clusters| {
            let mut row = 0usize;
            for cluster in clusters {
                if row >= area.height as usize {
                    break;
                }
                let y = area.y + row as u16;
                let remaining = (area.height as usize - row) as u16;
                let view = TopClusterView::new(cluster, &self.selection)
                    .styles(self.styles.clone())
                    .hit_id(self.hit_id)
                    .hovered(self.hovered);
                let block_rows = view.height();
                view.render(Rect::new(area.x, y, area.width, remaining), frame);
                row += block_rows;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(id: u64, size: u32) -> ClusterNode {
        ClusterNode::new(ClusterId(id), size).label("leaf")
    }

    #[test]
    fn top_summary_without_subclusters() {
        let cluster = ClusterNode::new(ClusterId(1), 42).label("wine");
        assert_eq!(cluster_summary(&cluster), "(42 docs)");
    }

    #[test]
    fn top_summary_with_subclusters() {
        let cluster = ClusterNode::new(ClusterId(1), 42)
            .label("wine")
            .child(leaf(2, 10))
            .child(leaf(3, 20))
            .child(leaf(4, 12));
        assert_eq!(cluster_summary(&cluster), "(42 docs, 3 subclusters)");
    }

    #[test]
    fn sub_summaries() {
        let cluster = leaf(2, 7);
        assert_eq!(subcluster_summary(&cluster), "(7)");
        assert_eq!(subcluster_hover_summary(&cluster), "(7 docs)");
    }

    #[test]
    fn top_view_height_counts_header_and_children() {
        let selection = ClusterSelectionStore::new();
        let cluster = ClusterNode::new(ClusterId(1), 3).child(leaf(2, 1)).child(leaf(3, 2));
        let view = TopClusterView::new(&cluster, &selection);
        assert_eq!(view.height(), 3);
        assert_eq!(view.summary(), "(3 docs, 2 subclusters)");
    }

    #[test]
    fn label_style_patches_with_subclusters_and_selected() {
        let selection = ClusterSelectionStore::new();
        let plain = ClusterNode::new(ClusterId(1), 1).label("a");
        let parent = ClusterNode::new(ClusterId(2), 2).label("b").child(leaf(3, 1));

        let styles = ClusterListStyles::default();
        let plain_style = TopClusterView::new(&plain, &selection)
            .styles(styles.clone())
            .label_style();
        assert_eq!(plain_style.attrs, None);

        let parent_style = TopClusterView::new(&parent, &selection)
            .styles(styles.clone())
            .label_style();
        assert_eq!(parent_style.attrs, Some(StyleFlags::BOLD));

        selection.toggle_id(ClusterId(2));
        let selected_style = TopClusterView::new(&parent, &selection)
            .styles(styles)
            .label_style();
        assert_eq!(
            selected_style.attrs,
            Some(StyleFlags::BOLD | StyleFlags::REVERSED)
        );
    }

    #[test]
    fn hover_state_resolves_hover_style() {
        let selection = ClusterSelectionStore::new();
        let parent = ClusterNode::new(ClusterId(1), 2).label("a").child(leaf(2, 1));

        let hovered_style = TopClusterView::new(&parent, &selection)
            .hovered(Some(ClusterId(1)))
            .label_style();
        assert_eq!(
            hovered_style.attrs,
            Some(StyleFlags::BOLD | StyleFlags::UNDERLINE)
        );

        let sub = leaf(3, 7);
        let view = SubClusterView::new(&sub, &selection).hovered(true);
        assert_eq!(view.interaction_state(), InteractionState::Hovered);

        selection.toggle_id(ClusterId(3));
        let view = SubClusterView::new(&sub, &selection).hovered(true);
        assert_eq!(view.interaction_state(), InteractionState::SelectedHovered);
        assert_eq!(
            view.styles.sub.resolve(view.interaction_state()).attrs,
            Some(StyleFlags::REVERSED | StyleFlags::UNDERLINE)
        );
    }

    #[test]
    fn sub_view_selected_style_is_reversed() {
        let selection = ClusterSelectionStore::new();
        let cluster = leaf(5, 7);
        selection.toggle_id(ClusterId(5));

        let view = SubClusterView::new(&cluster, &selection);
        assert_eq!(
            view.styles.sub.resolve(view.interaction_state()).attrs,
            Some(StyleFlags::REVERSED)
        );
        assert_eq!(view.hover_summary(), "(7 docs)");
    }
}
