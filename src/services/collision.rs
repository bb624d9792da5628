//! Generic interval/box collision core.
//!
//! The rack view tests 1-D unit spans, the floor plan tests 2-D
//! axis-aligned boxes. Both are the same question at different
//! dimensionality, so the test is written once behind [`Footprint`]
//! and the allocators only differ in how they build footprints and
//! which neighbours they compare against.

use crate::models::{GridAsset, RackSlotRange};

/// Spatial extent that can be tested for overlap and containment.
pub trait Footprint {
    /// Returns true if the two extents share any space.
    fn intersects(&self, other: &Self) -> bool;

    /// Returns true if this extent lies fully inside `bounds`.
    fn within(&self, bounds: &Self) -> bool;
}

/// Inclusive 1-D span of rack units, `[bottom, top]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpan {
    /// Lowest unit in the span
    pub bottom: u32,
    /// Highest unit in the span
    pub top: u32,
}

impl UnitSpan {
    /// Span covering a whole rack of the given height.
    #[must_use]
    pub const fn rack(unit_count: u32) -> Self {
        Self {
            bottom: 1,
            top: unit_count,
        }
    }
}

impl From<RackSlotRange> for UnitSpan {
    fn from(range: RackSlotRange) -> Self {
        Self {
            bottom: range.bottom(),
            top: range.top(),
        }
    }
}

impl Footprint for UnitSpan {
    fn intersects(&self, other: &Self) -> bool {
        // Inclusive intervals: adjacent units (top == other.bottom) do overlap
        // only when they are the same unit, which this covers.
        !(self.top < other.bottom || self.bottom > other.top)
    }

    fn within(&self, bounds: &Self) -> bool {
        self.bottom >= bounds.bottom && self.top <= bounds.top
    }
}

/// Half-open 2-D cell-space box, `[x, x+width) x [y, y+height)`.
///
/// Half-open edges mean two boxes that merely touch do not collide: a
/// 1x1 asset at (2,2) and one at (3,2) are neighbours, not a conflict.
/// Coordinates are f64 because footprints may be fractional.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    /// Left edge in cells
    pub x: f64,
    /// Top edge in cells
    pub y: f64,
    /// Width in cells
    pub width: f64,
    /// Height in cells
    pub height: f64,
}

impl CellBox {
    /// Creates a new box.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box covering a whole grid of the given dimensions.
    #[must_use]
    pub fn grid(cols: u32, rows: u32) -> Self {
        Self::new(0.0, 0.0, f64::from(cols), f64::from(rows))
    }

    /// Right edge x-coordinate.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns this box shifted by a cell delta.
    #[must_use]
    pub fn shifted(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }
}

impl From<&GridAsset> for CellBox {
    fn from(asset: &GridAsset) -> Self {
        Self::new(
            f64::from(asset.grid_x),
            f64::from(asset.grid_y),
            asset.width_cells,
            asset.height_cells,
        )
    }
}

impl Footprint for CellBox {
    fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    fn within(&self, bounds: &Self) -> bool {
        self.x >= bounds.x
            && self.y >= bounds.y
            && self.right() <= bounds.right()
            && self.bottom() <= bounds.bottom()
    }
}

/// Returns true if `candidate` intersects any of `others`.
///
/// Callers filter `others` down to the relevant neighbours first (same
/// rack or same layer, minus the entity being moved). The scan is O(n)
/// by design: a room holds tens to low hundreds of entities.
pub fn has_collision<'a, F, I>(candidate: &F, others: I) -> bool
where
    F: Footprint + 'a,
    I: IntoIterator<Item = &'a F>,
{
    others.into_iter().any(|other| candidate.intersects(other))
}
