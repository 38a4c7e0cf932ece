//! Power-on LED sweep
//!
//! Walks the cursor a little over one lap left, back again, then blanks
//! and relights the ring. Frames are computed on a copy, so the live ring
//! is untouched and the sweep ends where it started.

use super::led_ring::LedRing;

/// Steps in each sweep direction
const SWEEP_STEPS: usize = 20;

/// Hold time for a sweep frame
const SWEEP_HOLD_US: u32 = 2_000;

/// Hold time for the blank frame
const BLANK_HOLD_US: u32 = 20_000;

/// Moves attempted while blanked (must all be ignored)
const BLANK_MOVES: usize = 5;

/// Number of frames in the sweep
pub const SELF_TEST_FRAMES: usize = 2 * SWEEP_STEPS + 3;

/// One frame of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelfTestFrame {
    /// Mask to publish
    pub mask: u16,
    /// How long to hold it (µs)
    pub hold_us: u32,
}

impl SelfTestFrame {
    fn of(ring: &LedRing, hold_us: u32) -> Self {
        Self {
            mask: ring.render(),
            hold_us,
        }
    }
}

/// Build the sweep starting from `ring`'s current state
///
/// The ring is lit for the sweep regardless of its enable flag, and the
/// last frame shows the starting position lit.
pub fn sequence(ring: &LedRing) -> [SelfTestFrame; SELF_TEST_FRAMES] {
    let mut ring = LedRing::with_position(ring.position(), true);

    // from_fn visits indices in order, so the ring advances frame by frame
    core::array::from_fn(|i| {
        if i < SWEEP_STEPS {
            let frame = SelfTestFrame::of(&ring, SWEEP_HOLD_US);
            ring.move_left();
            frame
        } else if i < 2 * SWEEP_STEPS {
            let frame = SelfTestFrame::of(&ring, SWEEP_HOLD_US);
            ring.move_right();
            frame
        } else if i == 2 * SWEEP_STEPS {
            SelfTestFrame::of(&ring, 0)
        } else if i == 2 * SWEEP_STEPS + 1 {
            ring.disable();
            let frame = SelfTestFrame::of(&ring, BLANK_HOLD_US);
            for _ in 0..BLANK_MOVES {
                ring.move_left();
            }
            ring.enable();
            frame
        } else {
            SelfTestFrame::of(&ring, 0)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RING_SIZE;

    #[test]
    fn test_frame_count() {
        let frames = sequence(&LedRing::new());
        assert_eq!(frames.len(), SELF_TEST_FRAMES);
    }

    #[test]
    fn test_sweep_wraps_left() {
        let frames = sequence(&LedRing::new());
        // Positions 0..=15 then 0..=3 on the way out
        for (i, frame) in frames[..SWEEP_STEPS].iter().enumerate() {
            assert_eq!(frame.mask, 1u16 << (i as u8 % RING_SIZE));
            assert_eq!(frame.hold_us, SWEEP_HOLD_US);
        }
    }

    #[test]
    fn test_sweep_returns_right() {
        let frames = sequence(&LedRing::new());
        // The return leg starts where the outbound leg stopped (20 % 16 = 4)
        assert_eq!(frames[SWEEP_STEPS].mask, 1u16 << 4);
        assert_eq!(frames[2 * SWEEP_STEPS - 1].mask, 1u16 << 1);
        assert_eq!(frames[2 * SWEEP_STEPS].mask, 1u16 << 0);
    }

    #[test]
    fn test_blank_moves_are_ignored() {
        let frames = sequence(&LedRing::with_position(7, true));
        assert_eq!(frames[2 * SWEEP_STEPS].mask, 1u16 << 7);
        assert_eq!(frames[SELF_TEST_FRAMES - 1].mask, 1u16 << 7);
        assert_eq!(frames[SELF_TEST_FRAMES - 1].hold_us, 0);
    }

    #[test]
    fn test_blank_frame() {
        let frames = sequence(&LedRing::new());
        let blank = frames[2 * SWEEP_STEPS + 1];
        assert_eq!(blank.mask, 0);
        assert_eq!(blank.hold_us, BLANK_HOLD_US);
    }

    #[test]
    fn test_ends_on_start_position() {
        for start in 0..RING_SIZE {
            let ring = LedRing::with_position(start, false);
            let frames = sequence(&ring);
            assert_eq!(frames.last().map(|f| f.mask), Some(1u16 << start));
        }
    }

    #[test]
    fn test_every_lit_frame_is_one_hot() {
        let frames = sequence(&LedRing::with_position(9, true));
        for frame in frames.iter().filter(|f| f.mask != 0) {
            assert_eq!(frame.mask.count_ones(), 1);
        }
    }
}
