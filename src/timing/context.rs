use serde::Serialize;

/// Per-frame timing derived from the frame index and the shape of the timeline.
///
/// Recomputed for every frame and never stored between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimingContext {
    /// Global frame index being rendered
    pub frame_index: u32,

    /// Length of the whole timeline in frames
    pub total_frames: u32,

    /// Number of media items sharing the timeline
    pub item_count: u32,

    /// Frames per item slot (`floor(total_frames / item_count)`, at least 1)
    pub slot_length: u32,

    /// Slot the frame belongs to. Trailing frames left over by the truncating
    /// division land in slot `item_count`, which has no media item.
    pub current_index: u32,

    /// Frame offset inside the current slot
    pub local_frame: u32,

    /// Slot that follows the current one, wrapping to 0
    pub next_index: u32,

    /// Effective transition length after clamping to `slot_length - 1`
    pub transition_frames: u32,

    /// Whether the requested transition length had to be shortened
    pub transition_clamped: bool,

    /// Whether the frame lies in the trailing transition window
    pub in_transition: bool,
}

/// Compute the timing context of one frame.
///
/// Pure integer arithmetic. Degenerate inputs never divide by zero: an empty
/// sequence or a timeline shorter than the item count yields slots of one frame,
/// and a transition that does not fit its slot is clamped to `slot_length - 1`.
pub fn compute_timing(
    frame_index: u32,
    total_frames: u32,
    item_count: u32,
    transition_frames: u32,
) -> TimingContext {
    let divisor = item_count.max(1);
    let slot_length = (total_frames / divisor).max(1);

    let current_index = frame_index / slot_length;
    let local_frame = frame_index % slot_length;
    let next_index = (current_index + 1) % divisor;

    let transition_clamped = transition_frames >= slot_length;
    let effective_transition = if transition_clamped {
        slot_length - 1
    } else {
        transition_frames
    };

    TimingContext {
        frame_index,
        total_frames,
        item_count,
        slot_length,
        current_index,
        local_frame,
        next_index,
        transition_frames: effective_transition,
        transition_clamped,
        in_transition: local_frame > slot_length - effective_transition,
    }
}

impl TimingContext {
    /// First local frame of the transition window
    pub fn transition_start(&self) -> u32 {
        self.slot_length - self.transition_frames
    }

    /// Input range of the transition window in local frames, for interpolation
    pub fn transition_window(&self) -> [f64; 2] {
        [self.transition_start() as f64, self.slot_length as f64]
    }

    /// Input range spanning the whole slot in local frames
    pub fn slot_window(&self) -> [f64; 2] {
        [0.0, self.slot_length as f64]
    }

    /// Local frame as a float, the usual interpolation input
    pub fn local(&self) -> f64 {
        self.local_frame as f64
    }

    /// Whether a distinct next item exists to transition into
    pub fn has_distinct_next(&self) -> bool {
        self.item_count > 1 && self.next_index != self.current_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_of_three_items() {
        let timing = compute_timing(0, 300, 3, 30);
        assert_eq!(timing.slot_length, 100);
        assert_eq!(timing.current_index, 0);
        assert_eq!(timing.local_frame, 0);
        assert_eq!(timing.next_index, 1);
        assert!(!timing.in_transition);
    }

    #[test]
    fn test_last_frame_of_slot_is_in_transition() {
        let timing = compute_timing(99, 300, 3, 30);
        assert_eq!(timing.current_index, 0);
        assert_eq!(timing.local_frame, 99);
        assert_eq!(timing.transition_start(), 70);
        assert!(timing.in_transition);
    }

    #[test]
    fn test_transition_window_is_exclusive_at_start() {
        assert!(!compute_timing(70, 300, 3, 30).in_transition);
        assert!(compute_timing(71, 300, 3, 30).in_transition);
    }

    #[test]
    fn test_next_index_wraps() {
        let timing = compute_timing(250, 300, 3, 30);
        assert_eq!(timing.current_index, 2);
        assert_eq!(timing.next_index, 0);
    }

    #[test]
    fn test_single_item_has_no_distinct_next() {
        let timing = compute_timing(299, 300, 1, 45);
        assert_eq!(timing.next_index, timing.current_index);
        assert!(!timing.has_distinct_next());
    }

    #[test]
    fn test_transition_clamped_to_slot() {
        let timing = compute_timing(10, 60, 3, 45);
        assert_eq!(timing.slot_length, 20);
        assert_eq!(timing.transition_frames, 19);
        assert!(timing.transition_clamped);
        assert_eq!(timing.transition_start(), 1);
    }

    #[test]
    fn test_timeline_shorter_than_item_count() {
        let timing = compute_timing(1, 2, 5, 30);
        assert_eq!(timing.slot_length, 1);
        assert_eq!(timing.transition_frames, 0);
        assert_eq!(timing.current_index, 1);
        assert!(!timing.in_transition);
    }

    #[test]
    fn test_empty_sequence_does_not_divide_by_zero() {
        let timing = compute_timing(5, 300, 0, 30);
        assert_eq!(timing.slot_length, 300);
        assert_eq!(timing.next_index, 0);
    }

    #[test]
    fn test_trailing_frames_spill_past_last_slot() {
        let timing = compute_timing(300, 301, 3, 30);
        assert_eq!(timing.slot_length, 100);
        assert_eq!(timing.current_index, 3);
        assert_eq!(timing.local_frame, 0);
    }
}
