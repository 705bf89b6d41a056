//! Trap implementations.
//!
//! Each trap reports through [`notify`] and then applies the operation to
//! the wrapped value directly:
//! - `get.rs` - member reads
//! - `set.rs` - assignments, tracked and untracked
//! - `delete.rs` - deletions
//! - `array.rs` - list methods

mod array;
mod delete;
mod get;
mod set;

pub(crate) use array::{check_sort_args, pop, push, reverse, shift, sort, splice, unshift};
pub(crate) use delete::delete;
pub(crate) use get::get;
pub(crate) use set::{define, set};

use tracing::trace;
use vigil_core::Value;

use crate::event::{TrackEvent, TrackerFn};

/// Hand an event to the tracker callback.
///
/// Panics raised by the callback are not caught.
pub(crate) fn notify(tracker_fn: &TrackerFn, event: TrackEvent<'_>) {
    trace!(op = %event.op, key = %event.key, "tracked");
    tracker_fn(&event);
}

/// Largest length a wrapped list may grow to through a tracker.
pub(crate) const MAX_LIST_LEN: usize = 1 << 24;

/// Make room for `items` to grow to `new_len`.
///
/// Returns false, leaving `items` untouched, when `new_len` is past
/// [`MAX_LIST_LEN`] or the allocation fails.
pub(crate) fn reserve_len(items: &mut Vec<Value>, new_len: usize) -> bool {
    if new_len > MAX_LIST_LEN {
        return false;
    }
    let additional = new_len.saturating_sub(items.len());
    items.try_reserve(additional).is_ok()
}
