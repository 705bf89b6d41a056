//! The tracking wrapper.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use tracing::debug;
use vigil_core::{PropertyKey, Value};

use crate::access::Access;
use crate::error::{TrackError, TrackResult};
use crate::event::{TrackEvent, TrackerFn};
use crate::ops;

/// Stand-in for a list or object that reports every operation made through it.
///
/// A tracker borrows its target mutably for its whole life, so the target can
/// only change through the tracker while it exists. Nested trackers reborrow
/// from their parent and share its callback.
pub struct Tracker<'t> {
    target: &'t mut Value,
    tracker_fn: TrackerFn,
}

/// Wrap `target` so that operations made through the result invoke `tracker_fn`.
///
/// The target is validated first: anything but a list or object fails with
/// [`TrackError::InvalidTargetKind`] even when no callback is supplied.
pub fn create_tracker(
    target: &mut Value,
    tracker_fn: Option<TrackerFn>,
) -> TrackResult<Tracker<'_>> {
    let kind = target.kind();
    if !kind.is_composite() {
        debug!(%kind, "rejected tracker target");
        return Err(TrackError::invalid_target_kind(kind));
    }
    let Some(tracker_fn) = tracker_fn else {
        debug!("rejected tracker without callback");
        return Err(TrackError::InvalidTrackerFunction);
    };

    debug!(%kind, "tracker created");
    Ok(Tracker::nested(target, tracker_fn))
}

/// Wrap `target` with a closure callback.
pub fn track<F>(target: &mut Value, tracker_fn: F) -> TrackResult<Tracker<'_>>
where
    F: Fn(&TrackEvent<'_>) + 'static,
{
    create_tracker(target, Some(Rc::new(tracker_fn)))
}

impl<'t> Tracker<'t> {
    /// Wrap a composite already known to be valid.
    pub(crate) fn nested(target: &'t mut Value, tracker_fn: TrackerFn) -> Self {
        Self { target, tracker_fn }
    }

    fn reborrow(&mut self) -> Tracker<'_> {
        Tracker {
            target: &mut *self.target,
            tracker_fn: Rc::clone(&self.tracker_fn),
        }
    }

    /// The wrapped value. Reading it this way is not reported.
    pub fn target(&self) -> &Value {
        &*self.target
    }

    /// Read a member.
    ///
    /// Composite members come back as nested trackers and are not reported.
    /// On lists, `push`/`sort` come back as intercepted methods and the other
    /// list methods as plain ones. Everything else is reported as a Get.
    pub fn get(&mut self, key: impl Into<PropertyKey>) -> Access<'_> {
        self.reborrow().into_get(key)
    }

    /// Read a member, consuming this tracker so the result keeps its lifetime.
    pub fn into_get(self, key: impl Into<PropertyKey>) -> Access<'t> {
        ops::get(self.target, self.tracker_fn, key.into())
    }

    /// Assign a member. Reports the Set before the assignment is applied.
    ///
    /// Returns false if the target rejected the assignment.
    pub fn set(&mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> bool {
        ops::set(self.target, &self.tracker_fn, key.into(), value.into())
    }

    /// Delete a member. Reports the Delete before the member is removed.
    pub fn delete(&mut self, key: impl Into<PropertyKey>) -> bool {
        ops::delete(self.target, &self.tracker_fn, key.into())
    }

    /// Assign a member without reporting it.
    pub fn define_property(&mut self, key: impl Into<PropertyKey>, value: impl Into<Value>) -> bool {
        ops::define(self.target, &key.into(), value.into())
    }

    /// Assign each entry in order, reporting one Set per entry.
    ///
    /// Returns false if any assignment was rejected; later entries are still
    /// attempted.
    pub fn assign<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> bool
    where
        K: Into<PropertyKey>,
        V: Into<Value>,
    {
        entries
            .into_iter()
            .fold(true, |ok, (key, value)| self.set(key, value) && ok)
    }

    /// Tracker for the composite member at `key`.
    pub fn nested_at(&mut self, key: impl Into<PropertyKey>) -> TrackResult<Tracker<'_>> {
        self.at([key])
    }

    /// Walk down `path`, one read per step.
    pub fn at<K>(&mut self, path: impl IntoIterator<Item = K>) -> TrackResult<Tracker<'_>>
    where
        K: Into<PropertyKey>,
    {
        let mut current = self.reborrow();
        for key in path {
            let key = key.into();
            current = match current.into_get(key.clone()) {
                Access::Nested(tracker) => tracker,
                _ => return Err(TrackError::not_composite(key)),
            };
        }
        Ok(current)
    }

    /// Call the member `key` as a method.
    pub fn call(&mut self, key: impl Into<PropertyKey>, args: Vec<Value>) -> TrackResult<Value> {
        let key = key.into();
        match self.get(key.clone()) {
            Access::Method(method) => method.call(args),
            _ => Err(TrackError::not_callable(key)),
        }
    }

    /// Append values to a wrapped list. Returns the new length.
    pub fn push(&mut self, value: impl Into<Value>) -> TrackResult<usize> {
        self.extend(vec![value.into()])
    }

    /// Same as [`Tracker::push`].
    pub fn append(&mut self, value: impl Into<Value>) -> TrackResult<usize> {
        self.push(value)
    }

    /// Append several values with a single report.
    pub fn extend(&mut self, values: Vec<Value>) -> TrackResult<usize> {
        let len = self.call("push", values)?;
        Ok(len.as_int().unwrap_or_default() as usize)
    }

    /// Sort a wrapped list in the default order. Returns the sorted list.
    pub fn sort(&mut self) -> TrackResult<Value> {
        self.call("sort", Vec::new())
    }

    /// Sort a wrapped list with a caller ordering. Reported like [`Tracker::sort`].
    pub fn sort_by<F>(&mut self, compare: F) -> TrackResult<Value>
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        match self.get("sort") {
            Access::Method(method) => method.sort_by(compare),
            _ => Err(TrackError::not_callable("sort")),
        }
    }

    /// Remove the last element of a wrapped list. Not reported.
    pub fn pop(&mut self) -> TrackResult<Value> {
        self.call("pop", Vec::new())
    }
}

impl fmt::Debug for Tracker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}
