// Proportional length bounds for a summarization call.

/// Smallest min_length ever requested for a normal chunk.
pub const MIN_LENGTH_FLOOR: usize = 30;

/// Floor used when the proportional bounds collapse and need repair.
const REPAIR_FLOOR: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min_length: usize,
    pub max_length: usize,
}

/// Derive (min_length, max_length) from a chunk's token count, capped at
/// `cap` (the model's maximum summary length).
///
/// Bounds scale with the source instead of using a fixed window, so very
/// short and very long chunks both get summaries proportionate to their
/// content. When the proportional values collapse (tiny chunks), min_length
/// is pulled back under max_length.
pub fn bounds(token_count: usize, cap: usize) -> LengthBounds {
    let max_length = cap.min(token_count * 7 / 10);
    let mut min_length = MIN_LENGTH_FLOOR.max(token_count * 3 / 10);

    if min_length >= max_length {
        min_length = REPAIR_FLOOR.max(max_length.saturating_sub(20));
    }

    LengthBounds {
        min_length,
        max_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_bounds_for_a_midsize_chunk() {
        // 0.7 * 200 = 140 under the cap, 0.3 * 200 = 60 over the floor
        let b = bounds(200, 384);
        assert_eq!(b, LengthBounds { min_length: 60, max_length: 140 });
    }

    #[test]
    fn max_length_is_capped() {
        // 0.3 * 2000 = 600 overshoots the capped max, triggering repair
        let b = bounds(2000, 384);
        assert_eq!(b, LengthBounds { min_length: 364, max_length: 384 });

        let b = bounds(2000, 512);
        assert_eq!(b, LengthBounds { min_length: 492, max_length: 512 });
    }

    #[test]
    fn min_floor_applies_to_short_chunks() {
        let b = bounds(150, 384);
        assert_eq!(b.max_length, 105);
        assert_eq!(b.min_length, 45);

        let b = bounds(110, 384);
        assert_eq!(b.max_length, 77);
        // 0.3 * 110 = 33 just over the floor
        assert_eq!(b.min_length, 33);
    }

    #[test]
    fn collapsed_bounds_are_repaired() {
        // 0.7 * 40 = 28 < floor of 30, so min is pulled back under max
        let b = bounds(40, 384);
        assert_eq!(b.max_length, 28);
        assert_eq!(b.min_length, 20);
        assert!(b.min_length < b.max_length);
    }

    #[test]
    fn min_stays_below_max_across_realistic_counts() {
        for n in 50..3000 {
            let b = bounds(n, 384);
            assert!(
                b.min_length < b.max_length,
                "bounds({n}) gave min={} max={}",
                b.min_length,
                b.max_length
            );
        }
    }
}
