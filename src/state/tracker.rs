//! Scroll position tracking and carousel geometry
//!
//! The scrollable reports raw horizontal offsets in logical pixels. Everything
//! downstream works in item units instead: a single fractional index of the
//! item currently sitting in the center slot. This module owns that
//! normalization and the geometry it depends on.

use iced::Size;

/// Fixed carousel geometry, derived from the window size.
///
/// Computed once at startup and again whenever the window is resized;
/// constant in between, so every style computation within a frame sees the
/// same numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselMetrics {
    /// Width of one photo box in logical pixels
    pub item_extent: f32,
    /// Gap between adjacent photo boxes, also the strip's edge padding.
    /// Sized so that a photo aligned to the gap sits exactly centered.
    pub item_spacing: f32,
    /// Height of one photo box
    pub item_height: f32,
}

impl CarouselMetrics {
    /// Photo width as a fraction of the window's smaller dimension
    const EXTENT_RATIO: f32 = 0.8;

    /// Photo boxes are taller than wide by this ratio
    const HEIGHT_RATIO: f32 = 1.3;

    /// Derive the geometry for a window of the given size.
    pub fn from_viewport(viewport: Size) -> Self {
        let item_extent = Self::EXTENT_RATIO * viewport.width.min(viewport.height);
        Self {
            item_extent,
            item_spacing: (viewport.width - item_extent) / 2.0,
            item_height: Self::HEIGHT_RATIO * item_extent,
        }
    }

    /// Distance between the left edges of two adjacent photos; one scroll
    /// position unit equals exactly this many pixels. Kept positive so the
    /// normalization stays finite even while the window is minimized.
    #[inline]
    pub fn stride(&self) -> f32 {
        (self.item_extent + self.item_spacing).max(1.0)
    }
}

/// Normalizes raw scroll offsets into a continuous item-space position.
///
/// The tracker is the single writer of the shared position; every item's
/// style computation reads it. Offsets outside the content range (rubber
/// banding, programmatic scrolls) are accepted as-is and simply extrapolate
/// the derived styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollTracker {
    /// Latest raw offset reported by the scrollable, in logical pixels
    offset: f32,
    /// Fractional index of the currently centered item
    position: f32,
}

impl ScrollTracker {
    /// Record a raw offset sample and update the derived position.
    ///
    /// Samples arrive at most once per frame; intermediate offsets the
    /// runtime coalesced away are irrelevant, only the latest matters.
    pub fn observe(&mut self, offset: f32, metrics: &CarouselMetrics) {
        self.offset = offset;
        self.position = offset / metrics.stride();
    }

    /// Re-derive the position from the last raw offset after the geometry
    /// changed (window resize).
    pub fn remeasure(&mut self, metrics: &CarouselMetrics) {
        self.position = self.offset / metrics.stride();
    }

    /// Fractional index of the currently centered item
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Absolute scroll offset at which the item at `index` sits centered.
    /// Inverse of the normalization in [`ScrollTracker::observe`].
    pub fn offset_for(index: usize, metrics: &CarouselMetrics) -> f32 {
        index as f32 * metrics.stride()
    }

    /// Index of the item nearest the current position, clamped into the
    /// gallery. Used as the base for keyboard stepping.
    pub fn nearest_index(&self, total_items: usize) -> usize {
        if total_items == 0 {
            return 0;
        }
        (self.position.round().max(0.0) as usize).min(total_items - 1)
    }

    /// Forget the current scroll state, e.g. after a new gallery replaces
    /// the old one and the strip snaps back to the first photo.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
