//! GitLab API model types.

mod group;
mod member;
mod project;
mod resource;
mod role;

pub use group::*;
pub use member::*;
pub use project::*;
pub use resource::*;
pub use role::*;
