//! GitLab group membership audit.
//!
//! Walks a top-level GitLab group, every descendant group, and all of their
//! projects, and collects each member's access role into a flat per-member
//! report.
//!
//! # Quick Start
//!
//! ```no_run
//! use gitlab_members::{audit_group, token_from_env, GitLabClient, GroupId, DEFAULT_API_URL};
//!
//! #[tokio::main]
//! async fn main() -> gitlab_members::Result<()> {
//!     // Token from GITLAB_TOKEN
//!     let client = GitLabClient::new(&token_from_env()?, DEFAULT_API_URL)?;
//!
//!     let report = audit_group(&client, GroupId::new(42)?).await?;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Resources are fetched through two traits:
//!
//! - [`Get`] - Fetch a single resource by ID
//! - [`List`] - Fetch every page of a collection
//!
//! [`audit_group`] drives the traversal and merges member listings into a
//! [`MemberAudit`], which is frozen into a [`Report`].
//!
//! # Configuration
//!
//! The binary reads its configuration through [`cli::Cli`], each option
//! falling back to an environment variable:
//!
//! - `GITLAB_TOKEN` (required) - Personal, group, or project access token
//! - `--api-url` / `GITLAB_API_URL` - Base URL (defaults to `https://gitlab.com/api/v4/`)
//! - `--timeout` / `GITLAB_TIMEOUT_SECS` - Per-request timeout in seconds (defaults to 2)

mod audit;
mod client;
mod error;
mod models;
mod pagination;
mod report;
mod traits;

pub mod cli;
pub mod web;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use audit::{audit_group, MemberAudit, MemberRecord};
pub use client::{
    require_token, token_from_env, GitLabClient, DEFAULT_API_URL, DEFAULT_TIMEOUT, TOKEN_ENV,
};
pub use error::{AuditError, Result};
pub use pagination::{Page, PaginationParams, PER_PAGE};
pub use report::{PrettyPrint, Report};

// Re-export traits
pub use traits::{Get, List};

// Re-export models
pub use models::{
    AccessLevel, Group, GroupId, Member, MemberScope, Project, Resource, ResourceScope,
    UNKNOWN_ROLE,
};
