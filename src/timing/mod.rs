//! # Timing Model
//!
//! Splits a timeline of `total_frames` into equal slots, one per media item, and
//! derives for any frame which item is current, which comes next, and whether the
//! frame falls into the trailing transition window of its slot.
//!
//! ```rust
//! use reel_compositor::timing::compute_timing;
//!
//! let timing = compute_timing(99, 300, 3, 30);
//! assert_eq!(timing.slot_length, 100);
//! assert_eq!(timing.current_index, 0);
//! assert!(timing.in_transition);
//! ```

mod context;

pub use context::{compute_timing, TimingContext};
