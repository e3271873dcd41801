//! Frame = buffer + hit grid for a render pass.
//!
//! The `Frame` is the render target view code writes to. It bundles the cell
//! grid ([`Buffer`]) with an optional [`HitGrid`] that maps screen positions
//! to the widget regions registered during rendering.
//!
//! # Overlap rule
//!
//! When regions overlap, the **last registration wins** for every cell it
//! covers. Nested interactive regions (a sub-cluster row inside its parent's
//! block) are registered after their ancestors, so a hit test inside the
//! nested region resolves to the nested region alone. Dispatching on that
//! single result is how this layer expresses "this handler consumes the
//! interaction": the ancestor can never observe a click that landed on a
//! descendant.

use crate::buffer::Buffer;
use clens_core::geometry::Rect;

/// Identifier for a clickable region in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Opaque user data attached to a hit region.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
}

/// A single cell in the hit grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct HitCell {
    widget_id: Option<HitId>,
    region: HitRegion,
    data: HitData,
}

/// Hit testing grid for mouse interaction.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
        }
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Register a clickable region; every cell in `rect` maps to it.
    ///
    /// Later registrations overwrite earlier ones where they overlap.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let clipped = rect.intersection(&Rect::from_size(self.width, self.height));

        let hit_cell = HitCell {
            widget_id: Some(widget_id),
            region,
            data,
        };
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(i) = self.index(x, y) {
                    self.cells[i] = hit_cell;
                }
            }
        }
    }

    /// Hit test at the given position.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.index(x, y).and_then(|i| {
            let cell = &self.cells[i];
            cell.widget_id.map(|id| (id, cell.region, cell.data))
        })
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Frame = buffer + hit grid for a render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,

    /// Optional hit grid for mouse hit testing.
    ///
    /// When `Some`, widgets can register clickable regions.
    pub hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Create a new frame with given dimensions and no hit grid.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Create a frame with hit testing enabled.
    #[must_use]
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    /// Frame width in cells.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Get the bounding rectangle of the frame.
    #[inline]
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Clear frame for the next render pass.
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(grid) = &mut self.hit_grid {
            grid.clear();
        }
    }

    /// Register a hit region (if hit grid is enabled).
    ///
    /// Returns `true` if the region was registered, `false` if no hit grid.
    pub fn register_hit(&mut self, rect: Rect, id: HitId, region: HitRegion, data: HitData) -> bool {
        if let Some(grid) = &mut self.hit_grid {
            grid.register(rect, id, region, data);
            true
        } else {
            false
        }
    }

    /// Hit test at the given position (if hit grid is enabled).
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

impl Default for Frame {
    /// Create a 1x1 frame (minimum size).
    fn default() -> Self {
        Self::new(1, 1)
    }
}
