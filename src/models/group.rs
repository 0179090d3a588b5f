//! Group model and trait implementations.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::GitLabClient;
use crate::error::{AuditError, Result};
use crate::traits::Get;

/// A validated, non-zero numeric group ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(u64);

impl GroupId {
    /// Wrap a raw ID. Zero is treated as "no group given".
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::MissingArgument`] for zero.
    pub fn new(id: u64) -> Result<Self> {
        if id == 0 {
            return Err(AuditError::MissingArgument(
                "Missing group id: 0 is not a valid group".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Parse a user-supplied ID.
    ///
    /// Absent, empty, and zero values all produce
    /// [`AuditError::MissingArgument`] carrying `missing_message`.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidArgument`] for anything that is not a
    /// whole number.
    pub fn parse(raw: Option<&str>, missing_message: &str) -> Result<Self> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(AuditError::MissingArgument(missing_message.to_string()));
        }

        let id: u64 = raw.parse().map_err(|_| {
            AuditError::InvalidArgument(format!(
                "Invalid group id '{raw}': expected a positive number"
            ))
        })?;

        if id == 0 {
            return Err(AuditError::MissingArgument(missing_message.to_string()));
        }
        Ok(Self(id))
    }

    /// The raw numeric ID.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A GitLab group.
///
/// Recognised by its hierarchical `full_path` (e.g. `org/team`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Numeric group ID.
    pub id: u64,

    /// Full hierarchical path, used as the display path in reports.
    pub full_path: String,

    /// Group name.
    #[serde(default)]
    pub name: String,

    /// ID of the parent group, `None` for top-level groups.
    #[serde(default)]
    pub parent_id: Option<u64>,

    #[serde(default)]
    pub web_url: Option<String>,
}

#[async_trait]
impl Get for Group {
    type Id = GroupId;

    #[tracing::instrument(skip(client))]
    async fn get(client: &GitLabClient, id: GroupId) -> Result<Self> {
        client.get_json(&format!("groups/{id}")).await
    }
}
