//! List methods bound to a wrapped list.

use std::cmp::Ordering;
use std::fmt;

use vigil_core::{PropertyKey, Value};

use crate::error::{TrackError, TrackResult};
use crate::event::TrackerFn;
use crate::ops;

/// List methods reachable through a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayMethod {
    Push,
    Sort,
    Pop,
    Shift,
    Unshift,
    Reverse,
    Splice,
}

impl ArrayMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "push" => Some(Self::Push),
            "sort" => Some(Self::Sort),
            "pop" => Some(Self::Pop),
            "shift" => Some(Self::Shift),
            "unshift" => Some(Self::Unshift),
            "reverse" => Some(Self::Reverse),
            "splice" => Some(Self::Splice),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Sort => "sort",
            Self::Pop => "pop",
            Self::Shift => "shift",
            Self::Unshift => "unshift",
            Self::Reverse => "reverse",
            Self::Splice => "splice",
        }
    }

    /// Only `push` and `sort` report their mutations.
    pub fn is_tracked(self) -> bool {
        matches!(self, Self::Push | Self::Sort)
    }
}

impl fmt::Display for ArrayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A list method bound to the list it was read from.
///
/// Calling it mutates the wrapped list in place. Tracked methods snapshot
/// the list, apply the mutation, then report it.
pub struct BoundMethod<'t> {
    target: &'t mut Value,
    tracker_fn: TrackerFn,
    method: ArrayMethod,
    key: PropertyKey,
}

impl<'t> BoundMethod<'t> {
    pub(crate) fn new(
        target: &'t mut Value,
        tracker_fn: TrackerFn,
        method: ArrayMethod,
        key: PropertyKey,
    ) -> Self {
        Self {
            target,
            tracker_fn,
            method,
            key,
        }
    }

    pub fn method(&self) -> ArrayMethod {
        self.method
    }

    pub fn is_tracked(&self) -> bool {
        self.method.is_tracked()
    }

    /// Invoke the method with `args`.
    ///
    /// Returns what the method returns: the new length for `push` and
    /// `unshift`, a copy of the list for `sort` and `reverse`, the removed
    /// element for `pop` and `shift` (`Null` when empty), the removed
    /// elements for `splice`.
    pub fn call(self, args: Vec<Value>) -> TrackResult<Value> {
        match self.method {
            ArrayMethod::Push => ops::push(self.target, &self.tracker_fn, &self.key, args),
            ArrayMethod::Sort => {
                ops::check_sort_args(&args)?;
                ops::sort(
                    self.target,
                    &self.tracker_fn,
                    &self.key,
                    Value::cmp_default_sort,
                )
            }
            ArrayMethod::Pop => ops::pop(self.target),
            ArrayMethod::Shift => ops::shift(self.target),
            ArrayMethod::Unshift => ops::unshift(self.target, args),
            ArrayMethod::Reverse => ops::reverse(self.target),
            ArrayMethod::Splice => ops::splice(self.target, args),
        }
    }

    /// Sort with a caller ordering.
    ///
    /// Fails with [`TrackError::InvalidArgument`] for any method other than
    /// `sort`, leaving the list untouched.
    pub fn sort_by<F>(self, compare: F) -> TrackResult<Value>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        match self.method {
            ArrayMethod::Sort => ops::sort(self.target, &self.tracker_fn, &self.key, compare),
            method => Err(TrackError::invalid_argument(
                method.name(),
                "does not take a comparator",
            )),
        }
    }
}

impl fmt::Debug for BoundMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMethod")
            .field("method", &self.method)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
