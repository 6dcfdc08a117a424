//! Scheduling domain models.
//!
//! | Type | Role |
//! |------|------|
//! | [`Process`] | Caller-supplied definition (immutable input) |
//! | [`ProcessRecord`] | Per-run working copy and result |
//! | [`Timeline`] | Contiguous execution log of one run |
//! | [`TimelineEntry`] | One `[start, end)` span |
//! | [`Occupant`] | Process or idle marker for a span |

mod process;
mod timeline;

pub use process::{Process, ProcessRecord};
pub use timeline::{Occupant, Timeline, TimelineEntry};
