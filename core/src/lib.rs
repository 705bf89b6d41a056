//! Vigil Core Types
//!
//! This crate provides the value model that trackers observe:
//! - The `Value` enum (scalars, lists and objects)
//! - `Object`, an insertion-ordered property map
//! - `PropertyKey`, the name-or-index used to address a member
//! - Conversions to and from `serde_json::Value`

mod json;
mod key;
mod object;
mod value;

pub use key::*;
pub use object::*;
pub use value::*;
