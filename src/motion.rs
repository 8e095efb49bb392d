/// Scroll-driven style interpolation
///
/// This module maps the carousel's fractional scroll position to the visual
/// properties of a single item:
/// - Scale (photos grow as they leave the center slot)
/// - Rotation (photos tilt toward the center)
/// - Opacity (backgrounds crossfade as the center changes)
///
/// Each property is a piecewise-linear track with knots one item before, at,
/// and one item after the item's own index, held flat outside that window.

/// Scale of a photo displaced by one full item from the center slot
const EDGE_SCALE: f32 = 1.5;

/// Tilt of a photo displaced by one full item from the center slot, in degrees.
/// Photos on the right of center tilt the opposite way, so the sign flips
/// across the center knot.
const EDGE_TILT_DEGREES: f32 = 15.0;

/// Visual properties of one carousel item at a given scroll position
///
/// Recomputed from scratch every time the scroll position changes. The struct
/// is plain data handed to the rendering layer; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Uniform scale factor for the foreground photo (1.0 = at rest)
    pub scale: f32,
    /// Clockwise rotation of the foreground photo in degrees
    pub rotation_degrees: f32,
    /// Opacity of the full-window background copy (0.0..=1.0)
    pub opacity: f32,
}

impl ItemStyle {
    /// Compute the style of the item at `index` for the given scroll position.
    ///
    /// `position` is the fractional index of the currently centered item. An
    /// item is at rest exactly when `position == index`, and fully receded
    /// once the distance reaches a whole item in either direction.
    pub fn at(position: f32, index: usize) -> Self {
        let center = index as f32;
        Self {
            scale: lerp3(position, center, [EDGE_SCALE, 1.0, EDGE_SCALE]),
            rotation_degrees: lerp3(
                position,
                center,
                [EDGE_TILT_DEGREES, 0.0, -EDGE_TILT_DEGREES],
            ),
            opacity: lerp3(position, center, [0.0, 1.0, 0.0]),
        }
    }
}

/// Piecewise-linear interpolation over the knots `center - 1`, `center`, and
/// `center + 1`, clamped to the endpoint values outside that range.
///
/// `values` holds the pinned value at each knot, in knot order. The input
/// position may be any finite float; out-of-range positions extrapolate flat,
/// never past the endpoint values.
pub fn lerp3(position: f32, center: f32, values: [f32; 3]) -> f32 {
    let [before, at, after] = values;
    let t = position - center;
    if t <= -1.0 {
        before
    } else if t < 0.0 {
        before + (at - before) * (t + 1.0)
    } else if t < 1.0 {
        at + (after - at) * t
    } else {
        after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_scale_pinned_at_knots() {
        let style = ItemStyle::at(2.0, 2);
        assert_close(style.scale, 1.0);

        assert_close(ItemStyle::at(1.0, 2).scale, 1.5);
        assert_close(ItemStyle::at(3.0, 2).scale, 1.5);
    }

    #[test]
    fn test_scale_clamped_outside_window() {
        assert_close(ItemStyle::at(-3.0, 2).scale, 1.5);
        assert_close(ItemStyle::at(9.5, 2).scale, 1.5);
    }

    #[test]
    fn test_scale_linear_between_knots() {
        assert_close(ItemStyle::at(1.5, 2).scale, 1.25);
        assert_close(ItemStyle::at(2.5, 2).scale, 1.25);
    }

    #[test]
    fn test_rotation_pinned_at_knots() {
        assert_close(ItemStyle::at(2.0, 2).rotation_degrees, 0.0);
        assert_close(ItemStyle::at(1.0, 2).rotation_degrees, 15.0);
        assert_close(ItemStyle::at(3.0, 2).rotation_degrees, -15.0);
    }

    #[test]
    fn test_rotation_linear_and_flat_beyond() {
        assert_close(ItemStyle::at(2.5, 2).rotation_degrees, -7.5);
        assert_close(ItemStyle::at(1.25, 2).rotation_degrees, 11.25);

        assert_close(ItemStyle::at(-10.0, 2).rotation_degrees, 15.0);
        assert_close(ItemStyle::at(40.0, 2).rotation_degrees, -15.0);
    }

    #[test]
    fn test_opacity_pinned_at_knots() {
        assert_close(ItemStyle::at(2.0, 2).opacity, 1.0);
        assert_close(ItemStyle::at(1.0, 2).opacity, 0.0);
        assert_close(ItemStyle::at(3.0, 2).opacity, 0.0);
    }

    #[test]
    fn test_opacity_flat_outside_window() {
        assert_close(ItemStyle::at(0.0, 3).opacity, 0.0);
        assert_close(ItemStyle::at(7.0, 3).opacity, 0.0);
    }

    #[test]
    fn test_opacity_sum_bounded_during_transitions() {
        // Sweep the position across a 5 item gallery. At most two adjacent
        // backgrounds may overlap mid-transition, so the total opacity can
        // never exceed 2, and an integral position leaves exactly one item
        // fully opaque.
        let total_items = 5;
        let mut p = -1.0f32;
        while p <= 5.0 {
            let sum: f32 = (0..total_items).map(|i| ItemStyle::at(p, i).opacity).sum();
            assert!(sum <= 2.0 + 1e-5, "opacity sum {sum} at position {p}");
            p += 0.1;
        }

        for i in 0..total_items {
            let fully_opaque = (0..total_items)
                .filter(|&j| ItemStyle::at(i as f32, j).opacity > 1.0 - 1e-5)
                .count();
            assert_eq!(fully_opaque, 1);
        }
    }

    #[test]
    fn test_lerp3_accepts_arbitrary_tracks() {
        assert_close(lerp3(0.5, 1.0, [0.0, 10.0, 20.0]), 5.0);
        assert_close(lerp3(1.75, 1.0, [0.0, 10.0, 20.0]), 17.5);
        assert_close(lerp3(-4.0, 1.0, [0.0, 10.0, 20.0]), 0.0);
        assert_close(lerp3(100.0, 1.0, [0.0, 10.0, 20.0]), 20.0);
    }
}
