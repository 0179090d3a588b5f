//! Trait definitions for GitLab read operations.
//!
//! Each resource type implements the traits it supports, encapsulating
//! endpoint paths in the implementations.

mod get;
mod list;

pub use get::Get;
pub use list::List;
