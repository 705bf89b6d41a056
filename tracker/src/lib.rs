//! Vigil Tracker
//!
//! Observe every read and write made to an object graph.
//!
//! A [`Tracker`] stands in for a list or object [`Value`](vigil_core::Value).
//! Reads, writes and deletes made through it, at any depth, are reported to a
//! single callback and then applied to the wrapped value itself. Nothing is
//! copied: the wrapped value stays the only state.
//!
//! Responsibilities:
//! - Validate the target and callback at creation
//! - Report Get/Set/Delete on primitive members
//! - Hand out nested trackers for composite members, without reporting them
//! - Intercept the list mutators `push` and `sort`
//!
//! # Module Structure
//!
//! - `tracker` - The wrapper type and its entry points
//! - `access` - Result of reading a member
//! - `method` - List methods bound to a wrapped list
//! - `ops/` - Trap implementations (get, set, delete, list methods)
//! - `event` - Callback payloads
//! - `op` - Operation kinds
//! - `error` - Error types

mod access;
mod error;
mod event;
mod method;
mod op;
mod ops;
mod tracker;

pub use access::Access;
pub use error::{TrackError, TrackResult};
pub use event::{Change, TrackEvent, TrackerFn};
pub use method::{ArrayMethod, BoundMethod};
pub use op::OpType;
pub use tracker::{create_tracker, track, Tracker};
