//! Operation kinds reported to the tracker callback.

use std::fmt;

/// What happened to the tracked value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    /// A primitive member was read.
    Get,
    /// A member was assigned, or the list was appended to.
    Set,
    /// A member was deleted.
    Delete,
    /// The list was sorted in place.
    Sort,
}

impl OpType {
    pub fn name(self) -> &'static str {
        match self {
            OpType::Get => "get",
            OpType::Set => "set",
            OpType::Delete => "delete",
            OpType::Sort => "sort",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
