use std::f64::consts::TAU;

/// Stroke offset of a circular progress indicator.
///
/// Zero means the ring is fully drawn (nothing elapsed); `circumference`
/// means it is empty. A zero total cannot come out of the workout catalog
/// and is treated as an empty ring.
pub fn arc_offset(remaining: u32, total: u32, circumference: f64) -> f64 {
    if total == 0 {
        return circumference;
    }
    circumference - (circumference * remaining as f64 / total as f64)
}

/// Points along the still-visible part of a unit ring centered at the origin.
///
/// The arc starts at twelve o'clock and runs clockwise for the fraction of
/// the circumference not yet consumed by `offset`. `samples` is the point
/// count of a full ring.
pub fn ring_points(offset: f64, circumference: f64, radius: f64, samples: usize) -> Vec<(f64, f64)> {
    if circumference <= 0.0 || samples == 0 {
        return Vec::new();
    }
    let visible = ((circumference - offset) / circumference).clamp(0.0, 1.0);
    let count = (visible * samples as f64).round() as usize;

    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / samples as f64;
            // Clockwise from the top: x follows sin, y follows cos.
            (radius * angle.sin(), radius * angle.cos())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: f64 = 440.0;

    #[test]
    fn full_ring_when_nothing_elapsed() {
        for total in [1, 60, 300, 3600] {
            assert_eq!(arc_offset(total, total, C), 0.0);
        }
    }

    #[test]
    fn empty_ring_when_done() {
        for total in [1, 60, 300, 3600] {
            assert_eq!(arc_offset(0, total, C), C);
        }
    }

    #[test]
    fn halfway_is_half_the_circumference() {
        assert!((arc_offset(30, 60, C) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_is_empty_ring() {
        assert_eq!(arc_offset(0, 0, C), C);
    }

    #[test]
    fn ring_points_cover_visible_fraction() {
        assert_eq!(ring_points(0.0, C, 1.0, 120).len(), 120);
        assert_eq!(ring_points(C / 2.0, C, 1.0, 120).len(), 60);
        assert!(ring_points(C, C, 1.0, 120).is_empty());
    }

    #[test]
    fn ring_starts_at_top_and_turns_clockwise() {
        let pts = ring_points(0.0, C, 1.0, 4);
        let (x0, y0) = pts[0];
        assert!(x0.abs() < 1e-9 && (y0 - 1.0).abs() < 1e-9);
        // A quarter turn clockwise lands at three o'clock.
        let (x1, y1) = pts[1];
        assert!((x1 - 1.0).abs() < 1e-9 && y1.abs() < 1e-9);
    }

    #[test]
    fn ring_points_degenerate_inputs() {
        assert!(ring_points(0.0, 0.0, 1.0, 120).is_empty());
        assert!(ring_points(0.0, C, 1.0, 0).is_empty());
    }
}
